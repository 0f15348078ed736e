use serde::Serialize;
use std::collections::HashSet;
use tracing::debug;

use crate::error::FormatError;
use crate::formats::{self, Format};
use crate::mapping::{self, BoneRow};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenamePair {
    pub old: String,
    pub new: String,
}

impl RenamePair {
    pub fn new(old: impl Into<String>, new: impl Into<String>) -> Self {
        Self {
            old: old.into(),
            new: new.into(),
        }
    }
}

/// Computes the renames that move `identifiers` from the `source` convention
/// to the `target` convention. Nothing is mutated; the caller applies the
/// returned pairs.
pub fn compute_renames(
    identifiers: &HashSet<String>,
    source: &str,
    target: &str,
    include_fingers: bool,
) -> Result<Vec<RenamePair>, FormatError> {
    let source = formats::resolve(source)?;
    let target = formats::resolve(target)?;
    Ok(renames_between(identifiers, source, target, include_fingers))
}

pub fn renames_between(
    identifiers: &HashSet<String>,
    source: Format,
    target: Format,
    include_fingers: bool,
) -> Vec<RenamePair> {
    let pairs = mapping::rows(include_fingers)
        .filter_map(|row| rename_for_row(row, source, target, identifiers))
        .collect::<Vec<_>>();
    debug!(
        "{} -> {}: {} of {} bones renamable",
        source,
        target,
        pairs.len(),
        identifiers.len()
    );
    pairs
}

fn rename_for_row(
    row: &BoneRow,
    source: Format,
    target: Format,
    identifiers: &HashSet<String>,
) -> Option<RenamePair> {
    let old = mapping::name_in(row, source)?;
    let new = mapping::name_in(row, target)?;
    if old == new || !identifiers.contains(old) {
        return None;
    }
    Some(RenamePair::new(old, new))
}
