use leptos::*;
use leptos::prelude::provide_context;
use leptos_router::components::Router;

use leptos_meta::provide_meta_context;

use crate::config::{ScrollConfig, SiteLinks};
use crate::routes::RoutesMenu;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();      // NOTE: lets pages set <title>
    provide_context(ScrollConfig::default());
    provide_context(SiteLinks::default());

    view! {
      <Router>
        <RoutesMenu/>
      </Router>
    }
}
