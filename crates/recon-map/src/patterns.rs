//! Candidate pattern lists for order-id and date column inference.
//!
//! Patterns are data, not code: each list can be overridden by a
//! line-oriented file (one pattern per line, `#` lines ignored), with the
//! built-in defaults as the fallback when no file is given or it cannot be
//! read. Keeping the lists external preserves per-deployment configurability
//! as new marketplaces show up.

use std::io;
use std::path::Path;

use tracing::warn;

/// Built-in order-id candidates, distilled from the marketplace exports this
/// engine is pointed at. List order is priority order within each tier.
const DEFAULT_ORDER_PATTERNS: &[&str] = &[
    "sub order no",
    "order id",
    "order_id",
    "orderid",
    "order no",
    "order_no",
    "orderno",
    "order number",
    "order item id",
    "invoice id",
    "order",
];

/// Built-in date-column candidates.
const DEFAULT_DATE_PATTERNS: &[&str] = &[
    "order date",
    "order_date",
    "ordered on",
    "invoice date",
    "purchase date",
    "date",
];

/// Compound tokens that count as exact patterns despite having no separator.
const EXACT_COMPOUND_TOKENS: &[&str] = &["orderid", "orderno", "ordernumber", "suborderno"];

/// An exact pattern is compared against the full lowercased column name; a
/// partial pattern is a substring probe. Patterns with an internal separator
/// are exact, as are the enumerated compound tokens.
pub(crate) fn is_exact_pattern(pattern: &str) -> bool {
    pattern.contains(' ') || pattern.contains('_') || EXACT_COMPOUND_TOKENS.contains(&pattern)
}

/// Reads a pattern file: one lowercased pattern per line, blank lines and
/// `#`-prefixed lines ignored.
pub fn load_patterns(path: &Path) -> io::Result<Vec<String>> {
    let contents = std::fs::read_to_string(path)?;
    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_lowercase)
        .collect())
}

/// Order-id patterns from `path`, or the built-in list when the file is
/// absent or unreadable.
pub fn order_patterns(path: Option<&Path>) -> Vec<String> {
    patterns_or_default(path, DEFAULT_ORDER_PATTERNS, "order")
}

/// Date-column patterns from `path`, or the built-in list.
pub fn date_patterns(path: Option<&Path>) -> Vec<String> {
    patterns_or_default(path, DEFAULT_DATE_PATTERNS, "date")
}

fn patterns_or_default(path: Option<&Path>, defaults: &[&str], kind: &str) -> Vec<String> {
    if let Some(path) = path {
        match load_patterns(path) {
            Ok(patterns) if !patterns.is_empty() => return patterns,
            Ok(_) => {
                warn!(kind = kind, path = %path.display(), "pattern file is empty, using built-in list");
            }
            Err(error) => {
                warn!(
                    kind = kind,
                    path = %path.display(),
                    %error,
                    "pattern file unreadable, using built-in list"
                );
            }
        }
    }
    defaults.iter().map(|pattern| (*pattern).to_string()).collect()
}
