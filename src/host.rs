//! The host side: something that owns bone names and can rename them.
//!
//! The engines only compute `(old, new)` pairs. This module applies them to a
//! [`BoneHost`] and turns a batch into one summary.

use futures_util::stream::{self, StreamExt};
use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, warn};

use crate::error::HostError;
use crate::providers::Provider;
use crate::rename::RenamePair;
use crate::transliterate::{Outcome, Transliterator};

pub trait BoneHost {
    fn identifiers(&self) -> Vec<String>;
    fn contains(&self, name: &str) -> bool;
    fn rename(&mut self, old: &str, new: &str) -> Result<(), HostError>;

    fn identifier_set(&self) -> HashSet<String> {
        self.identifiers().into_iter().collect()
    }
}

/// In-memory rig that keeps bone order and rejects duplicate names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoneSet {
    names: Vec<String>,
}

impl BoneSet {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::default();
        for name in names {
            let name = name.into();
            if !name.is_empty() && !set.contains(&name) {
                set.names.push(name);
            }
        }
        set
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl BoneHost for BoneSet {
    fn identifiers(&self) -> Vec<String> {
        self.names.clone()
    }

    fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|existing| existing == name)
    }

    fn rename(&mut self, old: &str, new: &str) -> Result<(), HostError> {
        if old == new {
            return Ok(());
        }
        if self.contains(new) {
            return Err(HostError::AlreadyExists(new.to_string()));
        }
        let slot = self
            .names
            .iter_mut()
            .find(|existing| existing.as_str() == old)
            .ok_or_else(|| HostError::IdentifierNotFound(old.to_string()))?;
        *slot = new.to_string();
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenameReport {
    pub renamed: Vec<RenamePair>,
    pub skipped: usize,
}

/// Applies `pairs` to `host` without letting one rename collide with a bone
/// that a later pair is about to move away. Every source is first parked under
/// a temporary name, then moved to its target. A pair whose source vanished or
/// whose target is held by a bone outside the batch is skipped.
pub fn apply_renames<H: BoneHost>(host: &mut H, pairs: &[RenamePair]) -> RenameReport {
    let mut report = RenameReport::default();
    let mut parked = Vec::new();

    for (index, pair) in pairs.iter().enumerate() {
        let temp = parking_name(host, index);
        match host.rename(&pair.old, &temp) {
            Ok(()) => parked.push((temp, pair)),
            Err(err) => {
                debug!("skipping {} -> {}: {}", pair.old, pair.new, err);
                report.skipped += 1;
            }
        }
    }

    for (temp, pair) in parked {
        match host.rename(&temp, &pair.new) {
            Ok(()) => report.renamed.push(pair.clone()),
            Err(err) => {
                warn!("skipping {} -> {}: {}", pair.old, pair.new, err);
                report.skipped += 1;
                if let Err(err) = host.rename(&temp, &pair.old) {
                    warn!("could not restore {}: {}", pair.old, err);
                }
            }
        }
    }
    report
}

fn parking_name<H: BoneHost>(host: &H, index: usize) -> String {
    let mut attempt = 0usize;
    loop {
        let name = format!("~bone_renamer.{}.{}", index, attempt);
        if !host.contains(&name) {
            return name;
        }
        attempt += 1;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TranslationReport {
    pub pairs: Vec<RenamePair>,
    pub online: usize,
    pub cached: usize,
    pub dictionary: usize,
    pub skipped: usize,
}

impl TranslationReport {
    fn record(&mut self, old: &str, new: String, outcome: Outcome) {
        if new.is_empty() || new == old || outcome == Outcome::Unchanged {
            self.skipped += 1;
            return;
        }
        match outcome {
            Outcome::Online => self.online += 1,
            Outcome::Cached => self.cached += 1,
            Outcome::Dictionary => self.dictionary += 1,
            Outcome::Unchanged => {}
        }
        self.pairs.push(RenamePair::new(old, new));
    }
}

/// Translates every non-ASCII name in `names`, polling up to `concurrency`
/// lookups at once. Pairs come back in input order.
pub async fn translate_bones<P: Provider>(
    transliterator: &Transliterator<P>,
    names: &[String],
    online_enabled: bool,
    timeout_secs: f64,
    concurrency: usize,
) -> TranslationReport {
    let results = stream::iter(names.iter())
        .map(|name| async move {
            if name.is_ascii() {
                return (name, None);
            }
            let result = transliterator
                .translate_with_outcome(name, online_enabled, timeout_secs)
                .await;
            (name, Some(result))
        })
        .buffered(concurrency.max(1))
        .collect::<Vec<_>>()
        .await;

    let mut report = TranslationReport::default();
    for (name, result) in results {
        match result {
            Some(result) => report.record(name, result.name, result.outcome),
            None => report.skipped += 1,
        }
    }
    report
}
