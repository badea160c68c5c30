//! Field-role inference for one struct.
//!
//! Roles come purely from naming conventions:
//! - `...Count` fields are element counts and get paired with an array field;
//! - a tagged struct's `chain` field is implied by its declaration shape;
//! - everything else is a plain property.
//!
//! Pairing is a best-effort prefix match, first hit in declaration order. It
//! can mis-pair when several fields share a prefix; that is accepted so the
//! output stays stable across runs and matches existing bindings.

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::error::{GenerateError, Result};
use crate::ir::{ClassifiedStruct, StructBody};
use crate::registry::TypeRegistry;

pub const COUNT_SUFFIX: &str = "Count";
pub const CHAIN_FIELD: &str = "chain";

pub fn classify(body: StructBody, registry: &TypeRegistry) -> Result<ClassifiedStruct> {
    let StructBody { name, line, fields, saw_chain_link } = body;
    let tag = registry.tag_of(&name).map(str::to_string);

    let (counts, mut others): (Vec<String>, Vec<String>) =
        fields.into_iter().partition(|f| f.ends_with(COUNT_SUFFIX));

    if tag.is_some() {
        let Some(pos) = others.iter().position(|f| f == CHAIN_FIELD) else {
            return Err(GenerateError::MissingChainField { name, line });
        };
        others.remove(pos);
    }

    let mut list_properties = IndexMap::new();
    let mut dropped_counts = Vec::new();
    for count in counts {
        let prefix = count_prefix(&count);
        match others.iter().position(|f| f.starts_with(prefix)) {
            Some(pos) => {
                let list = others.remove(pos);
                list_properties.insert(list, count);
            }
            None => {
                warn!("{name}: `{count}` has no matching array field, dropping it");
                dropped_counts.push(count);
            }
        }
    }

    let out = ClassifiedStruct {
        name,
        line,
        is_extensible: saw_chain_link,
        tag,
        regular_properties: others,
        list_properties,
        dropped_counts,
    };
    debug!(
        name = %out.name,
        shape = ?out.shape(),
        lists = out.list_properties.len(),
        props = out.regular_properties.len(),
        "classified struct"
    );
    Ok(out)
}

/// Prefix an array field must start with to pair with `count`.
///
/// Drops `Count` and one more character so singular counts reach plural
/// arrays: `entryCount` → `entr` (entries), `colorFormatsCount` → `colorForma`.
pub fn count_prefix(count: &str) -> &str {
    let stem = count.strip_suffix(COUNT_SUFFIX).unwrap_or(count);
    match stem.char_indices().next_back() {
        Some((last, _)) => &stem[..last],
        None => stem,
    }
}
