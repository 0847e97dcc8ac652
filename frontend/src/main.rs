use log::info;
use yew::prelude::*;

mod config;
mod content;
mod hooks;
mod scene;
mod motion {
    pub mod count_up;
    pub mod error;
    pub mod interpolate;
    pub mod registry;
    pub mod reveal;
    pub mod scroll;
    pub mod style;
    pub mod typewriter;
}
mod components {
    pub mod community;
    pub mod courses;
    pub mod hackathons;
    pub mod hero;
    pub mod navbar;
    pub mod reveal;
}
mod pages {
    pub mod landing;
}

use hooks::{use_scroll_dispatch, MotionContext};
use motion::registry::ScrollRegistry;
use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    // One registry per page; every section subscribes through the context.
    let registry = use_state(ScrollRegistry::new);
    use_scroll_dispatch((*registry).clone());

    let context = MotionContext {
        registry: (*registry).clone(),
    };

    html! {
        <ContextProvider<MotionContext> context={context}>
            <Landing />
        </ContextProvider<MotionContext>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
