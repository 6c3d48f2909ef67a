//! The two-faced card state machine.
//!
//! A single control acts as "reveal" on the first press and "reveal next" on
//! the second: `Next` only moves to another record when the detail face is
//! already showing, then flips the face.

use crate::RecordStore;
use std::fmt;

/// Which side of the card is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Face {
    /// Title only.
    #[default]
    Hidden,
    /// Title, formula and comment.
    Visible,
}

impl Face {
    pub fn toggled(self) -> Self {
        match self {
            Face::Hidden => Face::Visible,
            Face::Visible => Face::Hidden,
        }
    }

    pub fn is_visible(self) -> bool {
        self == Face::Visible
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardEvent {
    Next,
    Back,
    JumpTo(String),
}

/// Navigation failures that leave the card untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    UnknownId(String),
}

impl fmt::Display for NavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavError::UnknownId(id) => write!(f, "No formula with ID '{}'", id),
        }
    }
}

impl std::error::Error for NavError {}

/// Selected record plus the visible face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CardState {
    pub current_index: usize,
    pub face: Face,
}

impl CardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute the state after `event`.
    ///
    /// On an empty store every event is a no-op. An unknown id in `JumpTo`
    /// is reported as an error and the caller keeps the previous state.
    pub fn apply(self, event: &CardEvent, store: &RecordStore) -> Result<Self, NavError> {
        let n = store.len();
        if n == 0 {
            return Ok(self);
        }

        match event {
            CardEvent::Next => {
                let current_index = if self.face.is_visible() {
                    (self.current_index + 1) % n
                } else {
                    self.current_index
                };
                Ok(Self {
                    current_index,
                    face: self.face.toggled(),
                })
            }
            CardEvent::Back => {
                let current_index = if self.face.is_visible() {
                    (self.current_index + n - 1) % n
                } else {
                    self.current_index
                };
                Ok(Self {
                    current_index,
                    face: self.face.toggled(),
                })
            }
            CardEvent::JumpTo(id) => match store.position_of(id) {
                Some(current_index) => Ok(Self {
                    current_index,
                    face: Face::Hidden,
                }),
                None => Err(NavError::UnknownId(id.clone())),
            },
        }
    }
}
