use web_sys::{Event, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::HEADER_ACTIVE_SCROLL_Y;

pub fn header_active(scroll_y: f64) -> bool {
    scroll_y >= HEADER_ACTIVE_SCROLL_Y
}

fn active_when(open: bool) -> Option<&'static str> {
    open.then(|| "active")
}

/// What a click on one of the menu controls does to the open flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavAction {
    /// Burger button and overlay.
    Toggle,
    /// Nav links: following one never opens the menu.
    Close,
}

impl NavAction {
    pub fn apply(self, open: bool) -> bool {
        match self {
            NavAction::Toggle => !open,
            NavAction::Close => false,
        }
    }
}

fn current_scroll_y() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}

#[derive(Clone, PartialEq)]
pub struct NavLink {
    pub label: AttrValue,
    pub href: AttrValue,
}

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub brand: AttrValue,
    pub links: Vec<NavLink>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let is_active = use_state_eq(|| header_active(current_scroll_y()));
    let nav_open = use_state(|| false);

    {
        let is_active = is_active.clone();
        use_event_with_window("scroll", move |_: Event| {
            is_active.set(header_active(current_scroll_y()));
        });
    }

    // The body class has to follow the menu so the page stops scrolling under it.
    {
        use_effect_with_deps(
            move |open| {
                if let Some(body) = web_sys::window()
                    .and_then(|window| window.document())
                    .and_then(|document| document.body())
                {
                    let _ = body.class_list().toggle_with_force("nav-active", *open);
                }
                || ()
            },
            *nav_open,
        );
    }

    let nav_callback = |action: NavAction| {
        let nav_open = nav_open.clone();
        Callback::from(move |_: MouseEvent| {
            nav_open.set(action.apply(*nav_open));
        })
    };
    let toggle_nav = nav_callback(NavAction::Toggle);
    let close_nav = nav_callback(NavAction::Close);

    html! {
        <header class={classes!("header", active_when(*is_active))}>
            <div class="container">
                <a href="#top" class="logo">{ props.brand.clone() }</a>

                <nav class={classes!("navbar", active_when(*nav_open))}>
                    <ul class="navbar-list">
                        { for props.links.iter().map(|link| html! {
                            <li>
                                <a href={link.href.clone()} class="navbar-link"
                                    onclick={close_nav.clone()}>
                                    { link.label.clone() }
                                </a>
                            </li>
                        }) }
                    </ul>
                </nav>

                <button class={classes!("nav-toggle-btn", active_when(*nav_open))}
                    aria-label="Toggle menu" onclick={toggle_nav.clone()}>
                    <span class="line line-1"></span>
                    <span class="line line-2"></span>
                    <span class="line line-3"></span>
                </button>

                <div class={classes!("overlay", active_when(*nav_open))} onclick={toggle_nav}></div>
            </div>
        </header>
    }
}
