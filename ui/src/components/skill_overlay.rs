use leptos::ev;
use leptos::prelude::*;

use crate::components::nav_bar::CloseIcon;
use crate::content::Skill;
use crate::state::{OverlayEvent, overlay_update};

/// Applies `event` and only notifies subscribers when the selection changed.
pub fn dispatch(selected: RwSignal<Option<Skill>>, event: OverlayEvent) {
    let current = selected.get_untracked();
    let next = overlay_update(current, event);
    if next != current {
        selected.set(next);
    }
}

/// Where keydown listeners come from. The overlay owns one only while open.
pub trait KeyListeners {
    type Handle: Send + Sync + 'static;

    fn listen(&self, on_key: impl Fn(String) + Send + Sync + 'static) -> Self::Handle;
    fn remove(handle: Self::Handle);
}

/// Keydown listeners on the browser window.
pub struct WindowKeys;

impl KeyListeners for WindowKeys {
    type Handle = WindowListenerHandle;

    fn listen(&self, on_key: impl Fn(String) + Send + Sync + 'static) -> Self::Handle {
        window_event_listener(ev::keydown, move |e| on_key(e.key()))
    }

    fn remove(handle: Self::Handle) {
        handle.remove();
    }
}

/// Clears `selected` on escape until the current owner is cleaned up.
pub fn close_on_escape<K: KeyListeners>(keys: &K, selected: RwSignal<Option<Skill>>) {
    let handle = keys.listen(move |key| dispatch(selected, OverlayEvent::Key(key)));
    on_cleanup(move || K::remove(handle));
}

/// Detail card for `skill`. Mounted only while a skill is selected, so the
/// escape listener lives exactly as long as the overlay.
#[component]
fn OpenOverlay(skill: Skill, selected: RwSignal<Option<Skill>>) -> impl IntoView {
    close_on_escape(&WindowKeys, selected);

    view! {
        <div
            class="fixed inset-0 bg-black/40 flex items-center justify-center z-50 animate-fadeIn"
            role="dialog"
            aria-modal="true"
            aria-label=skill.name
        >
            <div class="bg-white rounded-2xl p-8 max-w-lg w-full mx-4 relative shadow-2xl">
                <button
                    class="absolute top-4 right-4 p-2 rounded-full hover:bg-gray-200 focus:outline-none transition"
                    aria-label="닫기"
                    on:click=move |_| dispatch(selected, OverlayEvent::CloseButton)
                >
                    <CloseIcon icon_class="h-8 w-8 text-gray-600 hover:text-blue-600"/>
                </button>
                <img src=skill.logo alt=skill.name class="h-24 object-contain mb-5 mx-auto block"/>
                <h3 class="text-2xl font-extrabold mb-3 text-center">{skill.name}</h3>
                <p class="text-gray-700 text-lg text-center whitespace-pre-line">{skill.description}</p>
            </div>
        </div>
    }
}

#[component]
pub fn SkillOverlay(selected: RwSignal<Option<Skill>>) -> impl IntoView {
    move || {
        selected
            .get()
            .map(|skill| view! { <OpenOverlay skill selected/> })
    }
}
