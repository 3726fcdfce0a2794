use leptos::logging::log;
use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::memo_panel::MemoPanel;
use crate::components::nav_bar::NavBar;
use crate::routes::Page;
use crate::state::{MemoDraft, MemoField};

const ACTION_BUTTON: &str =
    "px-6 py-3 bg-black text-white text-2xl font-medium rounded-lg shadow-button-shadow hover:bg-gray-800 transition";

/// Demo of the memo flow. Nothing here is sent anywhere.
#[component]
pub fn MemoPage() -> impl IntoView {
    let draft = RwSignal::new(MemoDraft::default());

    view! {
        <Title text=Page::Memo.title()/>
        <div class="bg-white min-h-screen w-full">
            <NavBar/>
            <main class="pt-[calc(100px+2rem)] max-w-7xl mx-auto px-6">
                <h1 class="font-semibold text-black text-[40px] leading-[48px] mb-10">"Memo"</h1>

                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12">
                    <div class="flex flex-col items-end gap-6">
                        <MemoPanel draft field=MemoField::First/>
                        <button class=ACTION_BUTTON on:click=move |_| log!("check schedule: not connected")>
                            "일정 확인"
                        </button>
                    </div>
                    <div class="flex flex-col items-end gap-6">
                        <MemoPanel draft field=MemoField::Second/>
                        <button class=ACTION_BUTTON on:click=move |_| log!("save to calendar: not connected")>
                            "구글 캘린더에 저장"
                        </button>
                    </div>
                </div>
            </main>
        </div>
    }
}
