use yew::prelude::*;
use log::info;

mod config;
mod error;
mod hooks;
mod motion;
mod viewport;
mod chessboard;
mod components {
    pub mod aurora;
    pub mod chessboard;
    pub mod cta_button;
    pub mod reveal;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;


#[function_component]
fn App() -> Html {
    info!("Rendering Landing page");
    html! {
        <Landing />
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
