//! View model for the card panel.
//!
//! [`render_card`] is a pure function of the card state and store. The Yew
//! layer writes its output into the label, detail and comment regions and
//! then hands the detail region to the math engine.

use crate::card::CardState;
use crate::defaults::{FORMULA_CLOSE, FORMULA_OPEN};
use crate::{FormulaRecord, LabelStyle, RecordStore, ViewerConfig};

/// What the card panel shows. `None` regions are cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardView {
    pub label: String,
    /// Display-math markup for the typesetting engine.
    pub detail: Option<String>,
    /// Comment markup, inserted as HTML.
    pub comment: Option<String>,
}

impl CardView {
    pub fn is_revealed(&self) -> bool {
        self.detail.is_some()
    }
}

pub fn label_for(record: &FormulaRecord, style: LabelStyle) -> String {
    match style {
        LabelStyle::IdPrefixed => record.heading(),
        LabelStyle::TitleOnly => record.title.clone(),
    }
}

/// Wrap formula markup so `\\` and `\newline` lay out as rows.
pub fn wrap_formula(formula: &str) -> String {
    format!("{}{}{}", FORMULA_OPEN, formula, FORMULA_CLOSE)
}

pub fn render_card(state: &CardState, store: &RecordStore, config: &ViewerConfig) -> CardView {
    let Some(record) = store.get(state.current_index) else {
        return CardView::default();
    };

    let label = label_for(record, config.label_style);
    if !state.face.is_visible() {
        return CardView {
            label,
            detail: None,
            comment: None,
        };
    }

    CardView {
        label,
        detail: Some(wrap_formula(&record.formula)),
        comment: Some(record.comment.clone()),
    }
}
