use formula_cards::controller::{shortcut_action, FocusTarget, ViewerAction};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// What currently has focus on the page.
fn active_focus() -> FocusTarget {
    gloo_utils::document()
        .active_element()
        .map(|el| FocusTarget::from_tag_name(&el.tag_name()))
        .unwrap_or(FocusTarget::Other)
}

/// Custom hook that binds the page-level advance/retreat keys.
///
/// The listener lives on `document` for as long as the calling component is
/// mounted and forwards mapped keys to `on_action`.
#[hook]
pub fn use_card_shortcuts(on_action: Callback<ViewerAction>) {
    use_effect_with(on_action, move |on_action| {
        let on_action = on_action.clone();
        let listener = Closure::<dyn Fn(KeyboardEvent)>::new(move |e: KeyboardEvent| {
            if let Some(action) = shortcut_action(&e.key(), active_focus()) {
                e.prevent_default();
                on_action.emit(action);
            }
        });

        let document = gloo_utils::document();
        if let Err(e) = document
            .add_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref())
        {
            log::error!("Could not attach keyboard shortcuts: {:?}", e);
        }

        // Keep the closure alive until the effect is torn down
        move || {
            let _ = document
                .remove_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref());
            drop(listener);
        }
    });
}
