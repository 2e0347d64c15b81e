//! Professional search filter used by the search page.

use super::{Professional, ProfessionalFilter};

/// Keeps professionals matching the search page filters, in input order.
///
/// `category` must equal the profession (trimmed, case-insensitive); `q` must
/// appear in the name or the profession. Blank filters match everyone.
pub fn filter_professionals(
    professionals: &[Professional],
    filter: &ProfessionalFilter,
) -> Vec<Professional> {
    let category = normalized(filter.category.as_deref());
    let query = normalized(filter.q.as_deref());

    professionals
        .iter()
        .filter(|professional| {
            let profession = professional
                .profession
                .as_deref()
                .map(|p| p.trim().to_lowercase())
                .unwrap_or_default();

            let category_matches = category.as_ref().map_or(true, |c| &profession == c);
            let query_matches = query.as_ref().map_or(true, |q| {
                profession.contains(q.as_str())
                    || professional.full_name.to_lowercase().contains(q.as_str())
            });
            category_matches && query_matches
        })
        .cloned()
        .collect()
}

fn normalized(value: Option<&str>) -> Option<String> {
    value
        .map(|v| v.trim().to_lowercase())
        .filter(|v| !v.is_empty())
}
