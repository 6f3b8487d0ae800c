use log::info;
use yew::prelude::*;

mod config;
mod slider;
mod components {
    pub mod contact_form;
    pub mod faq;
    pub mod glow;
    pub mod header;
    pub mod preloader;
    pub mod slider;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    html! {
        <Landing />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::get_log_level()).expect("error initializing log");

    info!("Starting landing page");
    yew::Renderer::<App>::new().render();
}
