use leptos::prelude::*;

use crate::state::{MemoDraft, MemoField};

/// Labelled text area bound to one field of the page's draft.
#[component]
pub fn MemoPanel(
    draft: RwSignal<MemoDraft>,
    field: MemoField,
    #[prop(default = "제목 작성")] label: &'static str,
    #[prop(default = "일정을 기록하세요...")] placeholder: &'static str,
) -> impl IntoView {
    let value = move || draft.with(|d| d.get(field).to_owned());

    view! {
        <label class="flex flex-col gap-2 w-full">
            <span class="font-pretendard text-base text-gray-800">{label}</span>
            <textarea
                class="min-h-80 w-full resize-y rounded-lg border border-gray-300 bg-white px-4 py-3 \
                       focus:outline-none focus:ring-2 focus:ring-blue-600"
                placeholder=placeholder
                prop:value=value
                on:input=move |ev| draft.update(|d| d.edit(field, event_target_value(&ev)))
            ></textarea>
        </label>
    }
}
