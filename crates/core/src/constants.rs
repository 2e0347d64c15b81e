/// Sector assigned to professions with no taxonomy match. Always sorted last.
pub const OTHER_SECTOR: &str = "Other";

/// Queries shorter than this (in characters, whitespace included) get no suggestions
pub const MIN_SUGGESTION_QUERY_LEN: usize = 2;

/// Number of suggestions returned when the caller does not ask for a limit
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// Largest suggestion limit a caller may request
pub const MAX_SUGGESTION_LIMIT: usize = 20;
