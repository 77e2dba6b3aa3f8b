//! Parameter list syntax: `"length=32"`, `"bands=2, min_bpm=90"`.

use crate::{CatalogError, Result};
use sfe_core::{BoundParameters, ParameterValue};
use std::collections::btree_map::Entry;

pub use sfe_core::format_parameters;

/// Parse a comma separated `name=value` list.
///
/// Whitespace around names and values is ignored, as are empty segments, so
/// `""` yields no parameters. Values are typed with [`ParameterValue::parse`].
///
/// # Errors
///
/// [`CatalogError::MalformedParameter`] for a segment without `=` or with an
/// empty name, [`CatalogError::DuplicateParameter`] for a repeated name.
pub fn parse_parameters(text: &str) -> Result<BoundParameters> {
    let mut params = BoundParameters::new();

    for segment in text.split(',') {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }

        let (name, value) = segment
            .split_once('=')
            .ok_or_else(|| CatalogError::MalformedParameter(segment.to_string()))?;
        let name = name.trim();
        if name.is_empty() {
            return Err(CatalogError::MalformedParameter(segment.to_string()));
        }

        match params.entry(name.to_string()) {
            Entry::Occupied(_) => return Err(CatalogError::DuplicateParameter(name.to_string())),
            Entry::Vacant(slot) => {
                slot.insert(ParameterValue::parse(value.trim()));
            }
        }
    }

    Ok(params)
}
