//! Yew view components for the Formula Cards UI.
//!
//! Apart from `CardPanel`, which has to hand DOM nodes to the math engine,
//! these are stateless and render purely from props.

use crate::config::{BACK_CAPTION, INDEX_HEADING, JUMP_CAPTION, NEXT_CAPTION};
use crate::typeset;
use formula_cards::defaults::CONFIRM_KEY;
use formula_cards::index::{FormulaIndex, NavigationCategory};
use formula_cards::view::CardView;
use formula_cards::TypesetEngine;
use std::rc::Rc;
use web_sys::{Element, HtmlInputElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CardPanelProps {
    pub view: CardView,
    pub engine: TypesetEngine,
}

/// Label, detail and comment regions of the current card.
///
/// The detail and comment regions are owned by this component rather than
/// the virtual DOM: the math engine rewrites the detail subtree, so both are
/// replaced wholesale on every view change.
#[function_component(CardPanel)]
pub fn card_panel(props: &CardPanelProps) -> Html {
    let detail_ref = use_node_ref();
    let comment_ref = use_node_ref();

    {
        let detail_ref = detail_ref.clone();
        let comment_ref = comment_ref.clone();
        let engine = props.engine;
        use_effect_with(props.view.clone(), move |view| {
            if let (Some(detail), Some(comment)) =
                (detail_ref.cast::<Element>(), comment_ref.cast::<Element>())
            {
                typeset::clear(engine, &detail);
                detail.set_text_content(view.detail.as_deref());
                comment.set_inner_html(view.comment.as_deref().unwrap_or_default());

                if view.detail.is_some() {
                    if let Err(e) = typeset::typeset(engine, &detail) {
                        log::error!("Error while rendering formula: {}", e);
                    }
                }
            }
            || ()
        });
    }

    html! {
        <div class="card">
            <div id="card-label" class="card-label"><b>{ props.view.label.clone() }</b></div>
            <div id="formula-display" class="formula-display" ref={detail_ref}></div>
            <div id="card-comment" class="card-comment" ref={comment_ref}></div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct NavButtonsProps {
    pub on_back: Callback<MouseEvent>,
    pub on_next: Callback<MouseEvent>,
}

#[function_component(NavButtons)]
pub fn nav_buttons(props: &NavButtonsProps) -> Html {
    html! {
        <div class="nav-buttons">
            <button id="back-button" onclick={props.on_back.clone()}>{ BACK_CAPTION }</button>
            <button id="next-button" onclick={props.on_next.clone()}>{ NEXT_CAPTION }</button>
        </div>
    }
}

/// ID entry field with its jump button.
#[derive(Properties, PartialEq)]
pub struct JumpBarProps {
    pub value: AttrValue,
    pub placeholder: AttrValue,
    pub invalid: bool,
    pub on_input: Callback<String>,
    pub on_submit: Callback<()>,
}

#[function_component(JumpBar)]
pub fn jump_bar(props: &JumpBarProps) -> Html {
    let oninput = props.on_input.reform(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        input.value()
    });

    let onkeydown = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == CONFIRM_KEY {
                e.prevent_default();
                on_submit.emit(());
            }
        })
    };

    html! {
        <div class="jump-bar">
            <input
                type="text"
                id="id-input"
                class={if props.invalid { "invalid" } else { "" }}
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                {oninput}
                {onkeydown}
            />
            <button id="jump-button" onclick={props.on_submit.reform(|_| ())}>
                { JUMP_CAPTION }
            </button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct IndexListProps {
    pub index: Rc<FormulaIndex>,
    pub on_select: Callback<String>,
}

/// The generated table of contents: category headings with their entries.
#[function_component(IndexList)]
pub fn index_list(props: &IndexListProps) -> Html {
    html! {
        <nav class="index">
            <h3>{ INDEX_HEADING }</h3>
            <ul id="index-list">
                { props.index.categories.iter().map(|category| {
                    render_category(category, &props.on_select)
                }).collect::<Html>() }
            </ul>
        </nav>
    }
}

fn render_category(category: &NavigationCategory, on_select: &Callback<String>) -> Html {
    html! {
        <li class="index-category" key={category.key.composite()}>
            <h4>{ category.display_title.clone() }</h4>
            <ul class="index-subcategory-list">
                { category.items.iter().map(|target| {
                    let id = target.id.clone();
                    let onclick = on_select.reform(move |e: MouseEvent| {
                        e.prevent_default();
                        id.clone()
                    });
                    html! {
                        <li key={target.id.clone()}>
                            <a href="#" data-id={target.id.clone()} {onclick}>{ target.label.clone() }</a>
                        </li>
                    }
                }).collect::<Html>() }
            </ul>
        </li>
    }
}
