//! Column inference over inconsistent marketplace export schemas.
//!
//! No two marketplaces name their columns alike, so the engine never binds to
//! fixed names. Instead it scans the column list (in source order) with an
//! ordered set of predicate rules, evaluated in tiers: exact patterns over
//! all columns first, then partial substring patterns.

use recon_model::RowSet;

use crate::error::SchemaError;
use crate::patterns::is_exact_pattern;

/// Word-boundary tokens that mark a column as date/time-flavored.
///
/// Used to keep the order-id scan away from columns like `Ordered On` or
/// `Created At Date`. Matching is on whole tokens, not raw substrings, so
/// `Sub Order No` survives the `on` guard.
const DATE_TIME_TOKENS: &[&str] = &["date", "on", "time", "created", "updated"];

/// Picks the identity column: the first column whose name contains `sku`,
/// case-insensitively.
///
/// # Errors
///
/// [`SchemaError::NoIdentityColumn`] when nothing matches — fatal for the
/// whole batch, since every row needs an identity.
pub fn infer_identity_column(rows: &RowSet) -> Result<&str, SchemaError> {
    rows.columns
        .iter()
        .find(|column| column.to_lowercase().contains("sku"))
        .map(String::as_str)
        .ok_or(SchemaError::NoIdentityColumn)
}

/// Picks the order-identifier column, or `None` when nothing matches (order
/// ids are then synthesized downstream).
///
/// Exact patterns are compared against the full lowercased name and take
/// priority over partial substring patterns. Columns carrying a date/time
/// token are skipped in both tiers to avoid misclassifying a date column as
/// an order id.
pub fn infer_order_column<'a>(rows: &'a RowSet, patterns: &[String]) -> Option<&'a str> {
    let candidates: Vec<(&str, String)> = rows
        .columns
        .iter()
        .map(String::as_str)
        .filter(|column| !has_date_time_token(column))
        .map(|column| (column, column.to_lowercase()))
        .collect();

    match_tiers(&candidates, patterns)
}

/// Picks the sale-date column, or `None` when the batch has no date at all.
///
/// Same exact-then-partial tiers as order inference, but with the priority
/// inverted for combined date+time columns: a pure date column needs no
/// time-stripping, so datetime-like columns are skipped in the pattern tiers
/// and only reached by the final fallback.
pub fn infer_date_column<'a>(rows: &'a RowSet, patterns: &[String]) -> Option<&'a str> {
    let candidates: Vec<(&str, String)> = rows
        .columns
        .iter()
        .map(String::as_str)
        .filter(|column| !is_datetime_like(column))
        .map(|column| (column, column.to_lowercase()))
        .collect();

    if let Some(column) = match_tiers(&candidates, patterns) {
        return Some(column);
    }
    // No pure date column matched a pattern: any column mentioning "date",
    // then the first combined date+time column.
    if let Some(column) = candidates
        .iter()
        .find(|(_, lowered)| lowered.contains("date"))
        .map(|(column, _)| *column)
    {
        return Some(column);
    }
    rows.columns
        .iter()
        .map(String::as_str)
        .find(|column| is_datetime_like(column))
}

/// Exact patterns over all candidates first, then partial patterns; list
/// order is priority order within each tier.
fn match_tiers<'a>(candidates: &[(&'a str, String)], patterns: &[String]) -> Option<&'a str> {
    for pattern in patterns.iter().filter(|p| is_exact_pattern(p)) {
        for (column, lowered) in candidates {
            if lowered == pattern {
                return Some(*column);
            }
        }
    }
    for pattern in patterns.iter().filter(|p| !is_exact_pattern(p)) {
        for (column, lowered) in candidates {
            if lowered.contains(pattern.as_str()) {
                return Some(*column);
            }
        }
    }
    None
}

/// True when a column name describes a combined date+time value: it contains
/// both `date` and `time`, or `datetime`/`timestamp`.
#[must_use]
pub fn is_datetime_like(column: &str) -> bool {
    let lowered = column.to_lowercase();
    lowered.contains("datetime")
        || lowered.contains("timestamp")
        || (lowered.contains("date") && lowered.contains("time"))
}

fn has_date_time_token(column: &str) -> bool {
    let lowered = column.to_lowercase();
    lowered
        .split(|ch: char| !ch.is_ascii_alphanumeric())
        .any(|token| DATE_TIME_TOKENS.contains(&token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_time_token_is_word_bounded() {
        assert!(has_date_time_token("Ordered On"));
        assert!(has_date_time_token("SHIP_DATE"));
        assert!(!has_date_time_token("Sub Order No"));
        assert!(!has_date_time_token("Reason"));
    }

    #[test]
    fn datetime_like_detection() {
        assert!(is_datetime_like("Order Date Time"));
        assert!(is_datetime_like("event_timestamp"));
        assert!(is_datetime_like("OrderDateTime"));
        assert!(!is_datetime_like("Order Date"));
    }
}
