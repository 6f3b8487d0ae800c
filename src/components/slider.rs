use std::cell::RefCell;
use std::rc::Rc;

use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement, MouseEvent, WheelEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::{self, SLIDER_ITEMS_PROPERTY};
use crate::slider::{
    visible_count_from_style, ResizePolicy, SliderController, SliderSurface, Step, WheelGesture,
};

#[derive(Debug, Error)]
pub enum MarkupError {
    #[error("slider is missing its {0} element")]
    Missing(&'static str),
}

/// The rendered slider: its root, the item track and both buttons.
pub struct DomSlider {
    root: HtmlElement,
    track: HtmlElement,
    prev: HtmlElement,
    next: HtmlElement,
}

impl DomSlider {
    pub fn bind(
        root: &NodeRef,
        track: &NodeRef,
        prev: &NodeRef,
        next: &NodeRef,
    ) -> Result<Self, MarkupError> {
        Ok(Self {
            root: root.cast::<HtmlElement>().ok_or(MarkupError::Missing("root"))?,
            track: track.cast::<HtmlElement>().ok_or(MarkupError::Missing("track"))?,
            prev: prev.cast::<HtmlElement>().ok_or(MarkupError::Missing("previous button"))?,
            next: next.cast::<HtmlElement>().ok_or(MarkupError::Missing("next button"))?,
        })
    }
}

pub fn track_transform(offset: f64) -> String {
    format!("translateX({}px)", offset)
}

impl SliderSurface for DomSlider {
    fn visible_count(&self) -> usize {
        let raw = web_sys::window()
            .and_then(|window| window.get_computed_style(&self.root).ok().flatten())
            .and_then(|style| style.get_property_value(SLIDER_ITEMS_PROPERTY).ok())
            .unwrap_or_default();
        visible_count_from_style(&raw)
    }

    fn item_count(&self) -> usize {
        self.track.child_element_count() as usize
    }

    fn item_left(&self, index: usize) -> Option<f64> {
        self.track
            .children()
            .item(index as u32)
            .and_then(|item| item.dyn_into::<HtmlElement>().ok())
            .map(|item| item.offset_left() as f64)
    }

    fn translate(&self, offset: f64) {
        let _ = self
            .track
            .style()
            .set_property("transform", &track_transform(offset));
    }

    fn set_nav_visible(&self, visible: bool) {
        for button in [&self.prev, &self.next] {
            let style = button.style();
            let _ = if visible {
                style.remove_property("display").map(|_| ())
            } else {
                style.set_property("display", "none")
            };
        }
    }
}

type SharedController = Rc<RefCell<Option<SliderController<DomSlider>>>>;

fn with_controller(
    controller: &SharedController,
    f: impl FnOnce(&mut SliderController<DomSlider>),
) {
    if let Some(controller) = controller.borrow_mut().as_mut() {
        f(controller);
    }
}

#[derive(Properties, PartialEq)]
pub struct SliderProps {
    pub label: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_else(config::get_resize_policy)]
    pub resize_policy: ResizePolicy,
    pub children: Children,
}

#[function_component(Slider)]
pub fn slider(props: &SliderProps) -> Html {
    let root_ref = use_node_ref();
    let track_ref = use_node_ref();
    let prev_ref = use_node_ref();
    let next_ref = use_node_ref();
    let controller: SharedController = use_mut_ref(|| None);

    {
        let controller = controller.clone();
        let refs = (root_ref.clone(), track_ref.clone(), prev_ref.clone(), next_ref.clone());
        let policy = props.resize_policy;
        use_effect_with_deps(
            move |_| {
                let (root, track, prev, next) = refs;
                let surface = match DomSlider::bind(&root, &track, &prev, &next) {
                    Ok(surface) => surface,
                    Err(err) => panic!("cannot initialise slider: {}", err),
                };
                *controller.borrow_mut() = Some(SliderController::init(surface, policy));
                || ()
            },
            (),
        );
    }

    {
        let controller = controller.clone();
        use_event_with_window("resize", move |_: Event| {
            with_controller(&controller, |slider| slider.resize());
        });
    }

    let on_prev = {
        let controller = controller.clone();
        Callback::from(move |_: MouseEvent| {
            with_controller(&controller, |slider| slider.click(Step::Prev));
        })
    };

    let on_next = {
        let controller = controller.clone();
        Callback::from(move |_: MouseEvent| {
            with_controller(&controller, |slider| slider.click(Step::Next));
        })
    };

    let on_wheel = {
        let controller = controller.clone();
        Callback::from(move |e: WheelEvent| {
            let gesture = WheelGesture {
                modifier_held: e.shift_key(),
                delta_x: e.delta_x(),
                delta_y: e.delta_y(),
            };
            with_controller(&controller, |slider| slider.wheel(gesture));
        })
    };

    html! {
        <div class={classes!("slider", props.class.clone())} ref={root_ref} onwheel={on_wheel}
            aria-label={props.label.clone()}>
            <button class="slider-btn prev" ref={prev_ref} onclick={on_prev}
                aria-label="Slide to previous item">
                {"‹"}
            </button>
            <ul class="slider-container" ref={track_ref}>
                { for props.children.iter().map(|item| html! {
                    <li class="slider-item">{ item }</li>
                }) }
            </ul>
            <button class="slider-btn next" ref={next_ref} onclick={on_next}
                aria-label="Slide to next item">
                {"›"}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transform_is_a_horizontal_translation() {
        assert_eq!(track_transform(-480.0), "translateX(-480px)");
        assert_eq!(track_transform(-212.5), "translateX(-212.5px)");
    }
}
