// ui/src/routes.rs

/// The two pages the site serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Main,
    Memo,
}

impl Page {
    pub const ALL: [Page; 2] = [Page::Main, Page::Memo];

    /// Router segment; the page is served at `/` followed by it.
    pub fn segment(self) -> &'static str {
        match self {
            Page::Main => "",
            Page::Memo => "memo",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Page::Main => "/",
            Page::Memo => "/memo",
        }
    }

    /// Exact match only: no prefixes, no trailing slashes.
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|page| page.path() == path)
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Main => "Plan Up",
            Page::Memo => "Plan Up · Memo",
        }
    }
}

#[cfg(feature = "web")]
pub use menu::RoutesMenu;

#[cfg(feature = "web")]
mod menu {
    use leptos::IntoView;
    use leptos::component;
    use leptos::prelude::ClassAttribute;
    use leptos::prelude::ElementChild;
    use leptos::view;
    use leptos_router::components::Route;
    use leptos_router::components::Routes;
    use leptos_router::StaticSegment;

    use super::Page;
    use crate::pages::{main_page::MainPage, memo::MemoPage};

    #[component]
    pub fn RoutesMenu() -> impl IntoView {
        view! {
          <Routes fallback=|| view! { <p class="p-8 text-gray-500">"404 – not found"</p> }>
            <Route path=StaticSegment(Page::Main.segment()) view=MainPage />
            <Route path=StaticSegment(Page::Memo.segment()) view=MemoPage />
          </Routes>
        }
    }
}
