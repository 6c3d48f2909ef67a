//! Navigation controller: the single application-state value of a viewing
//! session and the reducer that maps user input onto it.

use crate::card::{CardEvent, CardState, NavError};
use crate::defaults::{ADVANCE_KEY, ID_PLACEHOLDER, INVALID_ID_PLACEHOLDER, RETREAT_KEY};
use crate::index::{build_index, FormulaIndex};
use crate::view::{render_card, CardView};
use crate::{RecordStore, ViewerConfig};
use log::{debug, error};
use std::rc::Rc;

/// User intents understood by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewerAction {
    Next,
    Back,
    /// The ID field's text changed.
    FieldInput(String),
    /// Jump button or confirm key in the ID field.
    SubmitJump,
    /// An index entry was activated.
    IndexJump(String),
}

/// State of the ID entry field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JumpField {
    pub value: String,
    /// Set after an unknown ID was submitted, cleared by the next valid jump.
    pub invalid: bool,
}

impl JumpField {
    pub fn placeholder(&self) -> &'static str {
        if self.invalid {
            INVALID_ID_PLACEHOLDER
        } else {
            ID_PLACEHOLDER
        }
    }
}

/// Everything a loaded viewer needs between two events.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub store: RecordStore,
    pub index: Rc<FormulaIndex>,
    pub card: CardState,
    pub field: JumpField,
}

impl Session {
    /// Start a session on a freshly loaded store. The index is built here,
    /// once.
    pub fn new(store: RecordStore) -> Self {
        let index = Rc::new(build_index(&store));
        debug!(
            "Built index with {} categories for {} formulas",
            index.len(),
            store.len()
        );
        Self {
            store,
            index,
            card: CardState::new(),
            field: JumpField::default(),
        }
    }

    pub fn view(&self, config: &ViewerConfig) -> CardView {
        render_card(&self.card, &self.store, config)
    }

    /// Return the session after `action`. Failures never leave a partial
    /// update: either the card moves or it stays where it was.
    pub fn reduce(&self, action: ViewerAction) -> Self {
        let mut next = self.clone();
        match action {
            ViewerAction::Next => next.card = self.step(&CardEvent::Next),
            ViewerAction::Back => next.card = self.step(&CardEvent::Back),
            ViewerAction::FieldInput(value) => next.field.value = value,
            ViewerAction::SubmitJump => {
                let id = self.field.value.trim().to_string();
                match self.card.apply(&CardEvent::JumpTo(id), &self.store) {
                    Ok(card) => {
                        next.card = card;
                        next.field.invalid = false;
                    }
                    Err(NavError::UnknownId(id)) => {
                        debug!("Rejected jump to unknown ID '{}'", id);
                        next.field.value.clear();
                        next.field.invalid = true;
                    }
                }
            }
            ViewerAction::IndexJump(id) => {
                match self.card.apply(&CardEvent::JumpTo(id), &self.store) {
                    Ok(card) => next.card = card,
                    Err(e) => error!("Index entry points nowhere: {}", e),
                }
            }
        }
        next
    }

    fn step(&self, event: &CardEvent) -> CardState {
        // Next and Back cannot fail
        self.card.apply(event, &self.store).unwrap_or(self.card)
    }
}

/// What currently holds keyboard focus, as far as shortcuts care.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    TextInput,
    Button,
    Other,
}

impl FocusTarget {
    /// Classify a DOM element by its tag name.
    pub fn from_tag_name(tag: &str) -> Self {
        match tag.to_ascii_uppercase().as_str() {
            "INPUT" | "TEXTAREA" => FocusTarget::TextInput,
            "BUTTON" => FocusTarget::Button,
            _ => FocusTarget::Other,
        }
    }
}

/// Map a page-level key press to an action.
///
/// Shortcuts are ignored while a text field or button has focus so typing an
/// ID never flips cards.
pub fn shortcut_action(key: &str, focus: FocusTarget) -> Option<ViewerAction> {
    if focus != FocusTarget::Other {
        return None;
    }
    let key = key.to_lowercase();
    if key == ADVANCE_KEY {
        Some(ViewerAction::Next)
    } else if key == RETREAT_KEY {
        Some(ViewerAction::Back)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Face;
    use crate::test_support::store;

    fn session() -> Session {
        Session::new(store(&["0-01", "0-02", "1-01"]))
    }

    fn typed(session: &Session, text: &str) -> Session {
        session.reduce(ViewerAction::FieldInput(text.to_string()))
    }

    #[test]
    fn starts_on_first_card_hidden() {
        let s = session();
        assert_eq!(s.card, CardState::new());
        assert_eq!(s.field.placeholder(), ID_PLACEHOLDER);
        assert_eq!(s.index.targets().count(), 3);
    }

    #[test]
    fn next_and_back_drive_the_card() {
        let s = session().reduce(ViewerAction::Next);
        assert_eq!(s.card.face, Face::Visible);
        let s = s.reduce(ViewerAction::Next);
        assert_eq!(s.card.current_index, 1);
        let s = s.reduce(ViewerAction::Back).reduce(ViewerAction::Back);
        assert_eq!(s.card, CardState::new());
    }

    #[test]
    fn submit_trims_the_field() {
        let s = typed(&session().reduce(ViewerAction::Next), "  1-01 ");
        let s = s.reduce(ViewerAction::SubmitJump);
        assert_eq!(s.card.current_index, 2);
        assert_eq!(s.card.face, Face::Hidden);
        assert!(!s.field.invalid);
    }

    #[test]
    fn unknown_id_clears_field_and_shows_hint() {
        let before = session().reduce(ViewerAction::Next);
        let s = typed(&before, "7-77").reduce(ViewerAction::SubmitJump);
        assert_eq!(s.card, before.card);
        assert_eq!(s.field.value, "");
        assert!(s.field.invalid);
        assert_eq!(s.field.placeholder(), INVALID_ID_PLACEHOLDER);
    }

    #[test]
    fn hint_is_not_blocking() {
        let s = typed(&session(), "nope").reduce(ViewerAction::SubmitJump);
        let s = typed(&s, "0-02").reduce(ViewerAction::SubmitJump);
        assert_eq!(s.card.current_index, 1);
        assert!(!s.field.invalid);
        assert_eq!(s.field.placeholder(), ID_PLACEHOLDER);
    }

    #[test]
    fn index_jump_hides_face_and_keeps_field() {
        let s = typed(&session().reduce(ViewerAction::Next), "draft");
        let s = s.reduce(ViewerAction::IndexJump("0-02".to_string()));
        assert_eq!(s.card.current_index, 1);
        assert_eq!(s.card.face, Face::Hidden);
        assert_eq!(s.field.value, "draft");
    }

    #[test]
    fn index_jump_to_missing_id_changes_nothing() {
        let before = session().reduce(ViewerAction::Next);
        let after = before.reduce(ViewerAction::IndexJump("x".to_string()));
        assert_eq!(after, before);
    }

    #[test]
    fn empty_session_is_inert() {
        let s = Session::new(RecordStore::default());
        let s = typed(&s, "0-01")
            .reduce(ViewerAction::SubmitJump)
            .reduce(ViewerAction::Next);
        assert_eq!(s.card, CardState::new());
        assert!(!s.field.invalid);
        assert_eq!(s.view(&ViewerConfig::default()), CardView::default());
    }

    #[test]
    fn shortcuts_respect_focus() {
        assert_eq!(shortcut_action("n", FocusTarget::Other), Some(ViewerAction::Next));
        assert_eq!(shortcut_action("N", FocusTarget::Other), Some(ViewerAction::Next));
        assert_eq!(shortcut_action("B", FocusTarget::Other), Some(ViewerAction::Back));
        assert_eq!(shortcut_action("x", FocusTarget::Other), None);
        assert_eq!(shortcut_action("Enter", FocusTarget::Other), None);
        assert_eq!(shortcut_action("n", FocusTarget::TextInput), None);
        assert_eq!(shortcut_action("b", FocusTarget::Button), None);
    }

    #[test]
    fn focus_from_tag_name() {
        assert_eq!(FocusTarget::from_tag_name("INPUT"), FocusTarget::TextInput);
        assert_eq!(FocusTarget::from_tag_name("textarea"), FocusTarget::TextInput);
        assert_eq!(FocusTarget::from_tag_name("BUTTON"), FocusTarget::Button);
        assert_eq!(FocusTarget::from_tag_name("BODY"), FocusTarget::Other);
    }
}
