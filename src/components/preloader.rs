use log::debug;
use yew::prelude::*;

#[function_component(Preloader)]
pub fn preloader() -> Html {
    let loaded = use_state(|| false);

    {
        let loaded = loaded.clone();
        use_effect_with_deps(
            move |_| {
                loaded.set(true);
                if let Some(body) = web_sys::window()
                    .and_then(|window| window.document())
                    .and_then(|document| document.body())
                {
                    let _ = body.class_list().add_1("loaded");
                }
                debug!("page content loaded");
                || ()
            },
            (), // once, after the first render
        );
    }

    html! {
        <div class={classes!("preloader", (*loaded).then(|| "loaded"))}>
            <div class="circle"></div>
        </div>
    }
}
