//! Sector catalog aggregation.
//!
//! Groups the free-text profession labels found on professional profiles
//! into sectors using the taxonomy table, and picks the sector a page should
//! open on.

use std::cmp::Ordering;
use std::collections::HashMap;

use log::debug;

use crate::constants::OTHER_SECTOR;

use super::{Catalog, ProfessionCount, ProfileRecord, SectorGroup, TaxonomyEntry};

/// Lookup key for a profession label: trimmed and lowercased.
pub(crate) fn normalize_key(label: &str) -> String {
    label.trim().to_lowercase()
}

/// Builds the sector catalog from profile records and the taxonomy table.
///
/// Profiles without a profession are skipped. Unknown professions land in
/// [`OTHER_SECTOR`]. Spellings that differ only in case or surrounding
/// whitespace are counted together under the first spelling seen. When the
/// taxonomy maps the same profession to several sectors, the last entry wins.
pub fn build_catalog(profiles: &[ProfileRecord], taxonomy: &[TaxonomyEntry]) -> Catalog {
    let sector_lookup = build_sector_lookup(taxonomy);

    let mut groups: Vec<SectorGroup> = Vec::new();
    let mut group_index: HashMap<String, usize> = HashMap::new();
    // (group position, normalized label) -> position within the group
    let mut profession_index: HashMap<(usize, String), usize> = HashMap::new();

    for label in profiles.iter().filter_map(ProfileRecord::profession_label) {
        let key = normalize_key(label);
        let sector = sector_lookup
            .get(&key)
            .copied()
            .unwrap_or(OTHER_SECTOR);

        let group_pos = *group_index.entry(sector.to_string()).or_insert_with(|| {
            groups.push(SectorGroup {
                sector_name: sector.to_string(),
                professions: Vec::new(),
            });
            groups.len() - 1
        });
        let group = &mut groups[group_pos];

        match profession_index.get(&(group_pos, key.clone())) {
            Some(&pos) => group.professions[pos].count += 1,
            None => {
                profession_index.insert((group_pos, key), group.professions.len());
                group.professions.push(ProfessionCount {
                    name: label.to_string(),
                    count: 1,
                });
            }
        }
    }

    groups.sort_by(|a, b| compare_sectors(&a.sector_name, &b.sector_name));

    debug!(
        "Built catalog with {} sectors from {} profiles",
        groups.len(),
        profiles.len()
    );
    groups
}

/// Picks the sector a categories page should open on.
///
/// An exact (case-sensitive) name match wins; anything else falls back to the
/// first sector. Returns `None` only for an empty catalog.
pub fn resolve_active_sector<'a>(
    catalog: &'a [SectorGroup],
    requested: Option<&str>,
) -> Option<&'a SectorGroup> {
    requested
        .and_then(|name| catalog.iter().find(|group| group.sector_name == name))
        .or_else(|| catalog.first())
}

fn build_sector_lookup(taxonomy: &[TaxonomyEntry]) -> HashMap<String, &str> {
    let mut lookup = HashMap::with_capacity(taxonomy.len());
    for entry in taxonomy {
        let key = normalize_key(&entry.profession);
        let sector = entry.sector.trim();
        if key.is_empty() || sector.is_empty() {
            continue;
        }
        if let Some(previous) = lookup.insert(key, sector) {
            if previous != sector {
                debug!(
                    "Taxonomy maps '{}' to both '{}' and '{}', keeping '{}'",
                    entry.profession.trim(),
                    previous,
                    sector,
                    sector
                );
            }
        }
    }
    lookup
}

/// Alphabetical sector order with [`OTHER_SECTOR`] pinned to the end.
fn compare_sectors(a: &str, b: &str) -> Ordering {
    match (a == OTHER_SECTOR, b == OTHER_SECTOR) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => compare_labels(a, b),
    }
}

/// Case-insensitive comparison, falling back to exact order for ties.
fn compare_labels(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
