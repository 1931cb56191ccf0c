#![deny(unsafe_code)]

pub mod lookup;
pub mod record;
pub mod stats;
pub mod table;

pub use lookup::ResolvedIdentifier;
pub use record::{NormalizedRecord, RecordSource, UNMAPPED_MSKU};
pub use stats::{SkipReason, SkipStats};
pub use table::RowSet;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skip_stats_tally_and_totals() {
        let mut stats = SkipStats::default();
        stats.tally(SkipReason::Empty);
        stats.tally(SkipReason::Duplicate);
        stats.tally(SkipReason::InvalidQuantity);
        stats.tally(SkipReason::InvalidQuantity);
        stats.accepted = 3;
        assert_eq!(stats.skipped(), 4);
        assert_eq!(stats.total_seen(), 7);
    }

    #[test]
    fn record_serializes() {
        let record = NormalizedRecord {
            date: "2024-06-01".to_string(),
            source: "meesho".to_string(),
            sku: "S1".to_string(),
            msku: "M1".to_string(),
            quantity: 2,
            order_id: "OD-1".to_string(),
            stock_left: 8,
        };
        let json = serde_json::to_string(&record).expect("serialize record");
        let round: NormalizedRecord = serde_json::from_str(&json).expect("deserialize record");
        assert_eq!(round, record);
    }
}
