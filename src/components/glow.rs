use web_sys::{HtmlElement, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

pub fn follow_transform(x: i32, y: i32) -> String {
    format!("translate({}px, {}px)", x, y)
}

/// Circle that sits under the pointer. Moved straight through the style so
/// mouse moves never re-render.
#[function_component(GlowingCircle)]
pub fn glowing_circle() -> Html {
    let circle_ref = use_node_ref();

    {
        let circle_ref = circle_ref.clone();
        use_event_with_window("mousemove", move |e: MouseEvent| {
            if let Some(circle) = circle_ref.cast::<HtmlElement>() {
                let _ = circle
                    .style()
                    .set_property("transform", &follow_transform(e.client_x(), e.client_y()));
            }
        });
    }

    html! {
        <div class="glowing-circle" ref={circle_ref}></div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_maps_one_to_one() {
        assert_eq!(follow_transform(0, 0), "translate(0px, 0px)");
        assert_eq!(follow_transform(412, 87), "translate(412px, 87px)");
    }
}
