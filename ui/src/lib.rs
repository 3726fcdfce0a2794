pub mod config;
pub mod content;
pub mod routes;
pub mod scroll;
pub mod state;

#[cfg(feature = "web")]
pub mod app;
#[cfg(feature = "web")]
pub mod components;
#[cfg(feature = "web")]
pub mod pages;

#[cfg(feature = "web")]
pub use crate::app::App;

#[cfg(feature = "web")]
mod start {
    use leptos::*;
    use leptos::mount::mount_to_body;
    use wasm_bindgen::prelude::*;

    use crate::App;

    #[wasm_bindgen(start)]
    pub fn main() {
        console_error_panic_hook::set_once();
        mount_to_body(|| view! { <App/> });
    }
}
