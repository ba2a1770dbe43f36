use yew::prelude::*;
use log::info;

mod config;
mod content;
mod hero;
mod components {
    pub mod visibility;
    pub mod gate;
    pub mod bento_card;
    pub mod hover_video;
    pub mod modal;
    pub mod nav;
    pub mod footer;
}
mod sections {
    pub mod intro;
    pub mod showcase;
    pub mod timeline;
}
mod pages {
    pub mod home;
}

use components::nav::Nav;
use pages::home::Home;

#[function_component]
pub fn App() -> Html {
    html! {
        <div class="app">
            <style>
                {r#"
                    html, body { margin: 0; background: #fff; }
                    .app { min-height: 100vh; width: 100%; color: #18181b; font-family: 'Inter', sans-serif; }
                    .home-sections { position: relative; z-index: 20; background: #fff; }
                "#}
            </style>
            <Nav />
            <Home />
        </div>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting Micron House ({})", config::get_asset_base_url());
    yew::Renderer::<App>::new().render();
}
