//! Search-as-you-type profession suggestions.

use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use crate::constants::MIN_SUGGESTION_QUERY_LEN;

use super::TaxonomyEntry;

/// Returns taxonomy profession labels containing `query`, case-insensitively.
///
/// The query is used as typed, surrounding whitespace included. Queries
/// shorter than [`MIN_SUGGESTION_QUERY_LEN`] characters yield nothing.
/// Results keep taxonomy order, are deduplicated on the exact label and
/// capped at `limit`.
pub fn suggest(query: &str, taxonomy: &[TaxonomyEntry], limit: usize) -> Vec<String> {
    if query.chars().count() < MIN_SUGGESTION_QUERY_LEN || limit == 0 {
        return Vec::new();
    }
    let needle = query.to_lowercase();

    let mut seen: HashSet<&str> = HashSet::new();
    let mut results = Vec::new();
    for entry in taxonomy {
        let label = entry.profession.trim();
        if label.is_empty() || !label.to_lowercase().contains(&needle) {
            continue;
        }
        if seen.insert(label) {
            results.push(label.to_string());
            if results.len() == limit {
                break;
            }
        }
    }
    results
}

/// Handle for one issued suggestion lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SuggestionTicket(pub u64);

/// Orders suggestion lookups so only the newest result is applied.
///
/// Meant for in-process callers that run lookups concurrently. HTTP clients
/// get the same guarantee by sending `seq` and comparing the echoed value.
///
/// Each keystroke calls [`SuggestionTracker::issue`]; when a lookup finishes,
/// [`SuggestionTracker::accept`] hands its results back only if no newer
/// lookup was issued in the meantime.
#[derive(Debug, Default)]
pub struct SuggestionTracker {
    latest: AtomicU64,
}

impl SuggestionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> SuggestionTicket {
        SuggestionTicket(self.latest.fetch_add(1, Ordering::AcqRel) + 1)
    }

    pub fn is_current(&self, ticket: SuggestionTicket) -> bool {
        self.latest.load(Ordering::Acquire) == ticket.0
    }

    /// Returns `results` if `ticket` is still the latest, `None` if stale.
    pub fn accept<T>(&self, ticket: SuggestionTicket, results: T) -> Option<T> {
        self.is_current(ticket).then_some(results)
    }
}
