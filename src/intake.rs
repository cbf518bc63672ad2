//! Extraction of designs and flowers from raw input text.
//!
//! Both scans run over the whole text. Designs look like `AS10a10b25`,
//! flowers like `aS`. Only ASCII digits count as quantities.

use crate::error::IntakeError;
use crate::recipe::{Flower, SizeClass};
use regex::Regex;
use std::fs;
use std::sync::LazyLock;

static DESIGN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z][LS][0-9+a-z]+[0-9]+").unwrap());
static FLOWER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([a-z])([LS])").unwrap());

/// Reads the whole input file into memory.
pub fn read_input(path: &str) -> Result<String, IntakeError> {
    fs::read_to_string(path).map_err(|e| IntakeError::Read {
        path: path.to_string(),
        message: e.to_string(),
    })
}

/// Every bouquet design in `text`, in order of appearance.
pub fn extract_recipe_descriptions(text: &str) -> Vec<&str> {
    DESIGN_RE.find_iter(text).map(|m| m.as_str()).collect()
}

/// Lazily yields every flower in `text`, in order of appearance.
pub fn extract_flowers(text: &str) -> impl Iterator<Item = Flower> + '_ {
    FLOWER_RE.captures_iter(text).filter_map(|caps| {
        let kind = caps[1].chars().next()?;
        let size = caps[2].chars().next().and_then(SizeClass::from_code)?;
        Some(Flower::new(kind, size))
    })
}
