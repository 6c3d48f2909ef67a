//! Main module for the Formula Cards application using Yew.
//! Loads the record collection once, then wires the session reducer to the UI.

use formula_cards::controller::{Session, ViewerAction};
use formula_cards::{RecordStore, ViewerConfig};
use std::rc::Rc;
use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

mod components;
mod config;
mod hooks;
mod loader;
mod logging;
mod typeset;

use components::{CardPanel, IndexList, JumpBar, NavButtons};
use config::*;
use hooks::use_card_shortcuts;

// ──────────────────────────────────────────────────────────────────────────────

/// Lets `use_reducer` drive a [`Session`].
#[derive(PartialEq)]
struct SessionState(Session);

impl Reducible for SessionState {
    type Action = ViewerAction;

    fn reduce(self: Rc<Self>, action: ViewerAction) -> Rc<Self> {
        Rc::new(SessionState(self.0.reduce(action)))
    }
}

#[derive(Clone, PartialEq)]
enum LoadStatus {
    Loading,
    Ready(RecordStore),
    Failed(String),
}

/// Smoothly bring the card back into view after an index jump.
fn scroll_to_top() {
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    gloo_utils::window().scroll_to_with_scroll_to_options(&options);
}

// ──────────────────────────────────────────────────────────────────────────────

#[derive(Properties, PartialEq)]
struct ViewerProps {
    store: RecordStore,
    config: Rc<ViewerConfig>,
}

/// The loaded viewer. Mounted only once the collection is available, so no
/// navigation handler exists before a successful load.
#[function_component(Viewer)]
fn viewer(props: &ViewerProps) -> Html {
    let session = {
        let store = props.store.clone();
        use_reducer(move || SessionState(Session::new(store)))
    };

    // Stable across renders so the keyboard listener is attached once
    let dispatch = {
        let dispatcher = session.dispatcher();
        use_callback((), move |action: ViewerAction, _| dispatcher.dispatch(action))
    };
    use_card_shortcuts(dispatch.clone());

    let on_next = dispatch.reform(|_: MouseEvent| ViewerAction::Next);
    let on_back = dispatch.reform(|_: MouseEvent| ViewerAction::Back);
    let on_input = dispatch.reform(ViewerAction::FieldInput);
    let on_submit = dispatch.reform(|_: ()| ViewerAction::SubmitJump);
    let on_select = {
        let dispatch = dispatch.clone();
        Callback::from(move |id: String| {
            dispatch.emit(ViewerAction::IndexJump(id));
            scroll_to_top();
        })
    };

    let state = &session.0;
    let view = state.view(&props.config);

    html! {
        <div class="viewer">
            <CardPanel {view} engine={props.config.engine} />
            <NavButtons {on_back} {on_next} />
            <JumpBar
                value={AttrValue::from(state.field.value.clone())}
                placeholder={AttrValue::Static(state.field.placeholder())}
                invalid={state.field.invalid}
                {on_input}
                {on_submit}
            />
            <IndexList index={state.index.clone()} {on_select} />
        </div>
    }
}

/// Primary application component: runs the one-time load and shows either
/// the viewer or the load error.
#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| ViewerConfig {
        label_style: LABEL_STYLE,
        engine: TYPESET_ENGINE,
        ..ViewerConfig::default()
    });
    let status = use_state(|| LoadStatus::Loading);

    // Load formulas on mount
    {
        let status = status.clone();
        let url = config.data_url.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match loader::fetch_records(&url).await {
                    Ok(store) => status.set(LoadStatus::Ready(store)),
                    Err(e) => {
                        log::error!("Failed to load formulas: {}", e);
                        status.set(LoadStatus::Failed(e.to_string()));
                    }
                }
            });
            || ()
        });
    }

    match &*status {
        LoadStatus::Loading => html! {
            <div id="card-label" class="card-label">{ LOADING_LABEL }</div>
        },
        LoadStatus::Failed(detail) => html! {
            <div class="load-error">
                <div id="card-label" class="card-label error">{ LOAD_ERROR_LABEL }</div>
                <p class="load-error-detail">{ detail.clone() }</p>
            </div>
        },
        LoadStatus::Ready(store) => html! {
            <Viewer store={store.clone()} config={config.clone()} />
        },
    }
}

/// Entry point: installs logging and mounts the app.
fn main() {
    logging::init();
    yew::Renderer::<App>::new().render();
}
