//! Core logic for the Formula Cards viewer.
//!
//! Everything in this crate is plain data and pure functions so it can be
//! exercised without a browser: record parsing, the two-level index, the card
//! state machine, the navigation controller and the view model. The Yew
//! binary (`main.rs`) only wires these to the DOM.

use log::{debug, info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;

pub mod card;
pub mod controller;
pub mod index;
pub mod view;

/// Default viewer parameters
pub mod defaults {
    /// Location of the record collection, relative to the page.
    pub const DATA_URL: &str = "formulas.json";
    /// Separates the category from the subtitle inside a record title.
    pub const CATEGORY_SEPARATOR: char = '：';
    /// Separates the major from the minor segment of a record id.
    pub const ID_SEPARATOR: char = '-';

    // Keyboard bindings, compared case-insensitively
    pub const ADVANCE_KEY: &str = "n";
    pub const RETREAT_KEY: &str = "b";
    pub const CONFIRM_KEY: &str = "Enter";

    // ID field placeholders
    pub const ID_PLACEHOLDER: &str = "ID (e.g. 1-01)";
    pub const INVALID_ID_PLACEHOLDER: &str = "Invalid ID";

    // Display math wrapper; the array environment turns `\\` into rows
    pub const FORMULA_OPEN: &str = "$$\\begin{array}{l}";
    pub const FORMULA_CLOSE: &str = "\\end{array}$$";
}

// Conventional `<major>-<minor>` identifier, e.g. "0-15"
static RECORD_ID_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+-\d+$").unwrap());

/// One flashcard as stored in the data file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct FormulaRecord {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub formula: String,
    #[serde(default)]
    pub comment: String,
}

impl FormulaRecord {
    /// `"<id>: <title>"`, used for the card label and index entries.
    pub fn heading(&self) -> String {
        format!("{}: {}", self.id, self.title)
    }
}

/// The loaded, immutable record collection.
///
/// Cloning is cheap: the records are shared behind an `Rc`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordStore {
    records: Rc<Vec<FormulaRecord>>,
}

impl RecordStore {
    pub fn new(records: Vec<FormulaRecord>) -> Self {
        Self {
            records: Rc::new(records),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&FormulaRecord> {
        self.records.get(index)
    }

    pub fn records(&self) -> &[FormulaRecord] {
        &self.records
    }

    /// Exact, case-sensitive lookup of a record position by id.
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }
}

impl From<Vec<FormulaRecord>> for RecordStore {
    fn from(records: Vec<FormulaRecord>) -> Self {
        Self::new(records)
    }
}

/// Why the one-time load of the record collection failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The request itself failed (offline, CORS, blocked...).
    Network(String),
    /// The server answered with a non-success status.
    Status(u16),
    /// The body was not a JSON array of records.
    Malformed(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Network(msg) => write!(f, "Request for formula data failed: {}", msg),
            LoadError::Status(code) => write!(f, "Formula data request returned HTTP {}", code),
            LoadError::Malformed(msg) => write!(f, "Formula data is malformed: {}", msg),
        }
    }
}

impl std::error::Error for LoadError {}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Malformed(err.to_string())
    }
}

/// Parse the JSON payload of the data source into a record store.
///
/// Records repeating an earlier id are dropped so ids stay unique; the first
/// occurrence wins. Ids that do not look like `<major>-<minor>` are kept.
pub fn read_records_from_json_str(json: &str) -> Result<RecordStore, LoadError> {
    let parsed: Vec<FormulaRecord> = serde_json::from_str(json)?;

    let mut records = Vec::with_capacity(parsed.len());
    let mut seen_ids = HashSet::new();

    for (i, record) in parsed.into_iter().enumerate() {
        if !seen_ids.insert(record.id.clone()) {
            warn!(
                "Duplicate ID '{}' found at entry {}, skipping",
                record.id,
                i + 1
            );
            continue;
        }

        if !RECORD_ID_REGEX.is_match(&record.id) {
            debug!(
                "ID '{}' at entry {} is not in <major>-<minor> form",
                record.id,
                i + 1
            );
        }

        records.push(record);
    }

    info!("Successfully loaded {} formulas", records.len());
    Ok(RecordStore::new(records))
}

/// How the card label is composed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelStyle {
    /// `"<id>: <title>"`
    #[default]
    IdPrefixed,
    /// `"<title>"`
    TitleOnly,
}

/// Which math engine the host page provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypesetEngine {
    #[default]
    MathJax,
    Katex,
}

/// Configuration for the viewer
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    pub data_url: String,
    pub label_style: LabelStyle,
    pub engine: TypesetEngine,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            data_url: defaults::DATA_URL.to_string(),
            label_style: LabelStyle::default(),
            engine: TypesetEngine::default(),
        }
    }
}
