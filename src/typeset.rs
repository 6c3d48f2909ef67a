//! JavaScript interop for the math typesetting engine.
//! The host page loads either MathJax 3 or KaTeX with its auto-render
//! extension; both are reached through globals.

use crate::config::{KATEX_DISPLAY_LEFT, KATEX_DISPLAY_RIGHT};
use crate::logging::js_error_message;
use formula_cards::TypesetEngine;
use serde::Serialize;
use std::fmt;
use wasm_bindgen::prelude::*;
use web_sys::Element;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = MathJax, js_name = typeset, catch)]
    fn mathjax_typeset(elements: &js_sys::Array) -> Result<(), JsValue>;

    #[wasm_bindgen(js_namespace = MathJax, js_name = typesetClear, catch)]
    fn mathjax_typeset_clear(elements: &js_sys::Array) -> Result<(), JsValue>;

    #[wasm_bindgen(js_name = renderMathInElement, catch)]
    fn katex_render_math_in_element(element: &Element, options: &JsValue) -> Result<(), JsValue>;
}

#[derive(Debug)]
pub enum TypesetError {
    /// The engine's global is not defined on the page.
    NotLoaded(&'static str),
    /// The engine threw while processing the markup.
    Failed(String),
}

impl fmt::Display for TypesetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypesetError::NotLoaded(global) => write!(f, "{} is not loaded", global),
            TypesetError::Failed(msg) => write!(f, "Typesetting failed: {}", msg),
        }
    }
}

impl std::error::Error for TypesetError {}

#[derive(Serialize)]
struct KatexDelimiter {
    left: &'static str,
    right: &'static str,
    display: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct KatexOptions {
    delimiters: Vec<KatexDelimiter>,
    throw_on_error: bool,
}

fn global_defined(name: &str) -> bool {
    js_sys::Reflect::has(&js_sys::global(), &JsValue::from_str(name)).unwrap_or(false)
}

/// Drop engine state tied to `element` before its content is replaced.
pub fn clear(engine: TypesetEngine, element: &Element) {
    if engine == TypesetEngine::MathJax && global_defined("MathJax") {
        if let Err(e) = mathjax_typeset_clear(&js_sys::Array::of1(element)) {
            log::debug!("MathJax.typesetClear failed: {}", js_error_message(&e));
        }
    }
}

/// Convert the math markup inside `element` into rendered output.
///
/// On error the raw markup stays in place.
pub fn typeset(engine: TypesetEngine, element: &Element) -> Result<(), TypesetError> {
    match engine {
        TypesetEngine::MathJax => {
            if !global_defined("MathJax") {
                return Err(TypesetError::NotLoaded("MathJax"));
            }
            mathjax_typeset(&js_sys::Array::of1(element))
                .map_err(|e| TypesetError::Failed(js_error_message(&e)))
        }
        TypesetEngine::Katex => {
            if !global_defined("renderMathInElement") {
                return Err(TypesetError::NotLoaded("renderMathInElement"));
            }
            let options = KatexOptions {
                delimiters: vec![KatexDelimiter {
                    left: KATEX_DISPLAY_LEFT,
                    right: KATEX_DISPLAY_RIGHT,
                    display: true,
                }],
                throw_on_error: false,
            };
            let options = serde_wasm_bindgen::to_value(&options)
                .map_err(|e| TypesetError::Failed(e.to_string()))?;
            katex_render_math_in_element(element, &options)
                .map_err(|e| TypesetError::Failed(js_error_message(&e)))
        }
    }
}
