//! Turns free-form model output into a `Label`.
//!
//! The extractor looks for a standalone `F` or `NF` token, bounded by word
//! boundaries on both sides, and returns the leftmost one. "Functional" and
//! "NFR" do not count. When both tokens appear, whichever starts first wins,
//! even if the model later changes its mind; results stay reproducible across
//! reruns of the same output. Text without a token maps to `Label::Error`.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::common::Label;

static LABEL_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(F|NF)\b").expect("label pattern is valid")
});

/// Extract the first standalone F/NF token, or `Label::Error` if there is none
pub fn extract_label(text: &str) -> Label {
    match LABEL_TOKEN.captures(text).and_then(|c| c.get(1)) {
        Some(m) if m.as_str() == "NF" => Label::NonFunctional,
        Some(_) => Label::Functional,
        None => Label::Error,
    }
}

/// Like `extract_label`, treating an absent response as a miss
pub fn extract_label_opt(text: Option<&str>) -> Label {
    text.map(extract_label).unwrap_or(Label::Error)
}
