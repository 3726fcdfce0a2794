use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::config::{ScrollConfig, SiteLinks};
use crate::content::{NAV_ITEMS, NavItem};
use crate::routes::Page;
use crate::scroll::browser::scroll_to;
use crate::state::{MenuEvent, menu_update};

const DESKTOP_LINK: &str = "
    text-xl font-extrabold cursor-pointer
    transition-all duration-200
    hover:scale-110
    relative
    after:content-['']
    after:block
    after:w-0 hover:after:w-full
    after:h-[3px]
    after:bg-blue-600
    after:transition-all after:duration-300
    after:rounded-full
    after:absolute
    after:left-0 after:bottom-[-6px]
    px-2
";

fn desktop_class(item: &NavItem) -> String {
    let colour = if item.highlighted {
        "text-blue-700"
    } else {
        "text-gray-800 hover:text-blue-700"
    };
    format!("{DESKTOP_LINK} {colour}")
}

fn mobile_class(item: &NavItem) -> &'static str {
    if item.highlighted {
        "text-2xl font-bold transition-colors duration-200 text-blue-600"
    } else {
        "text-2xl font-bold transition-colors duration-200 text-gray-700 hover:text-blue-600"
    }
}

#[component]
fn HamburgerIcon() -> impl IntoView {
    view! {
        <svg xmlns="http://www.w3.org/2000/svg" class="h-8 w-8 text-gray-600" fill="none" viewBox="0 0 24 24" stroke="currentColor">
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16m-7 6h7" />
        </svg>
    }
}

#[component]
pub fn CloseIcon(#[prop(optional)] icon_class: Option<&'static str>) -> impl IntoView {
    view! {
        <svg xmlns="http://www.w3.org/2000/svg" class=icon_class.unwrap_or("h-8 w-8 text-gray-600") fill="none" viewBox="0 0 24 24" stroke="currentColor">
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12" />
        </svg>
    }
}

/// Section link. `data-noscroll` keeps the router from jumping to the
/// fragment itself, so the offset scroll is the only one that runs.
#[component]
fn NavLink(
    item: NavItem,
    #[prop(into)] link_class: String,
    on_follow: Callback<MouseEvent>,
) -> impl IntoView {
    view! {
        <a
            href=item.href()
            class=link_class
            data-noscroll=""
            on:click=move |ev| on_follow.run(ev)
        >
            {item.label}
        </a>
    }
}

/// Fixed header shared by both pages.
#[component]
pub fn NavBar() -> impl IntoView {
    let cfg = ScrollConfig::from_context();
    let links = SiteLinks::from_context();
    let pathname = use_location().pathname;
    let menu_open = RwSignal::new(false);

    // on the main page the section is already rendered, so scroll in place;
    // elsewhere let the router carry /#anchor to the main page
    let follow = move |ev: MouseEvent, item: NavItem| {
        if Page::from_path(&pathname.get_untracked()) == Some(Page::Main) {
            ev.prevent_default();
            scroll_to(item.anchor, &cfg);
        }
    };

    let dispatch = move |event: MenuEvent| menu_open.update(|open| *open = menu_update(*open, event));

    view! {
        <nav class="fixed top-0 left-0 w-full h-[100px] shadow z-50 flex items-center justify-between px-6 md:px-10 bg-white/90 backdrop-blur-sm">
            <a href=Page::Main.path()>
                <img
                    src=links.image("image-21@2x.png")
                    alt="로고"
                    class="w-[100px] h-[50px] md:w-[130px] md:h-[65px] cursor-pointer object-contain"
                />
            </a>

            // desktop
            <div class="hidden md:flex items-center gap-8 ml-auto">
                <For
                    each=move || NAV_ITEMS.iter().copied()
                    key=|item| item.anchor
                    children=move |item| view! {
                        <NavLink
                            item
                            link_class=desktop_class(&item)
                            on_follow=Callback::new(move |ev| follow(ev, item))
                        />
                    }
                />
            </div>

            // mobile
            <div class="md:hidden flex items-center">
                <button
                    aria-label="메뉴 열기/닫기"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| dispatch(MenuEvent::Toggle)
                >
                    <Show when=move || menu_open.get() fallback=|| view! { <HamburgerIcon/> }>
                        <CloseIcon/>
                    </Show>
                </button>
            </div>

            <div class=move || format!(
                "absolute top-[100px] left-0 w-full bg-white shadow-lg md:hidden \
                 transition-all duration-300 ease-in-out overflow-hidden {}",
                if menu_open.get() { "max-h-screen opacity-100" } else { "max-h-0 opacity-0" }
            )>
                <div class="flex flex-col items-center py-8 space-y-6">
                    <For
                        each=move || NAV_ITEMS.iter().copied()
                        key=|item| item.anchor
                        children=move |item| view! {
                            <NavLink
                                item
                                link_class=mobile_class(&item)
                                on_follow=Callback::new(move |ev| {
                                    dispatch(MenuEvent::LinkActivated);
                                    follow(ev, item);
                                })
                            />
                        }
                    />
                </div>
            </div>
        </nav>
    }
}
