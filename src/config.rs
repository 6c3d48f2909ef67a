//! Application-level configuration constants.

use formula_cards::{LabelStyle, TypesetEngine};

// Engine and label format; both are page-level choices
pub const TYPESET_ENGINE: TypesetEngine = TypesetEngine::MathJax;
pub const LABEL_STYLE: LabelStyle = LabelStyle::IdPrefixed;

// Delimiters handed to KaTeX auto-render; must match the formula wrapper
pub const KATEX_DISPLAY_LEFT: &str = "$$";
pub const KATEX_DISPLAY_RIGHT: &str = "$$";

// UI text
pub const LOADING_LABEL: &str = "Loading formulas…";
pub const LOAD_ERROR_LABEL: &str = "Failed to load formula data";
pub const NEXT_CAPTION: &str = "Next";
pub const BACK_CAPTION: &str = "Back";
pub const JUMP_CAPTION: &str = "Jump";
pub const INDEX_HEADING: &str = "Index";
