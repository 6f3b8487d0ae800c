use web_sys::{HtmlElement, MouseEvent};
use yew::prelude::*;

/// Open/closed state of one question.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FaqToggle {
    expanded: bool,
}

impl FaqToggle {
    pub fn expanded(&self) -> bool {
        self.expanded
    }

    pub fn aria_expanded(&self) -> &'static str {
        if self.expanded { "true" } else { "false" }
    }

    /// Flips the state and returns the `max-height` the answer should get.
    /// `None` means the property is removed.
    pub fn toggle(&mut self, scroll_height: i32) -> Option<String> {
        self.expanded = !self.expanded;
        self.expanded.then(|| format!("{}px", scroll_height))
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqItemProps {
    pub question: AttrValue,
    pub children: Children,
}

#[function_component(FaqItem)]
pub fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = use_state(FaqToggle::default);
    let answer_ref = use_node_ref();

    let onclick = {
        let toggle = toggle.clone();
        let answer_ref = answer_ref.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(answer) = answer_ref.cast::<HtmlElement>() else {
                return;
            };
            let mut next = *toggle;
            let style = answer.style();
            let _ = match next.toggle(answer.scroll_height()) {
                Some(height) => style.set_property("max-height", &height),
                None => style.remove_property("max-height").map(|_| ()),
            };
            toggle.set(next);
        })
    };

    html! {
        <li class={classes!("faq-item", toggle.expanded().then(|| "open"))}>
            <button class="faq-question" aria-expanded={toggle.aria_expanded()} {onclick}>
                <span class="question-text">{ props.question.clone() }</span>
                <span class="toggle-icon">{ if toggle.expanded() { "−" } else { "+" } }</span>
            </button>
            <div class="faq-answer" ref={answer_ref}>
                { for props.children.iter() }
            </div>
        </li>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqProps {
    pub children: ChildrenWithProps<FaqItem>,
}

#[function_component(Faq)]
pub fn faq(props: &FaqProps) -> Html {
    html! {
        <ul class="faq-list">
            { for props.children.iter() }
        </ul>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clicked_twice_expands_then_collapses() {
        let mut toggle = FaqToggle::default();
        assert_eq!(toggle.aria_expanded(), "false");

        assert_eq!(toggle.toggle(184), Some("184px".to_string()));
        assert_eq!(toggle.aria_expanded(), "true");

        assert_eq!(toggle.toggle(184), None);
        assert_eq!(toggle.aria_expanded(), "false");
    }

    #[test]
    fn expanding_uses_the_height_at_click_time() {
        let mut toggle = FaqToggle::default();
        assert_eq!(toggle.toggle(90), Some("90px".to_string()));
        toggle.toggle(90);
        assert_eq!(toggle.toggle(312), Some("312px".to_string()));
    }

    #[test]
    fn items_do_not_share_state() {
        let mut first = FaqToggle::default();
        let second = FaqToggle::default();
        first.toggle(50);
        assert!(first.expanded());
        assert!(!second.expanded());
    }
}
