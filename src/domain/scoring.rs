use crate::domain::rules;
use crate::models::Receipt;

/// Points awarded by each rule for a single receipt
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointsBreakdown {
    pub retailer: u64,
    pub total: u64,
    pub item_count: u64,
    pub item_descriptions: u64,
    pub purchase_date: u64,
    pub purchase_time: u64,
}

impl PointsBreakdown {
    /// Sum of all rule contributions
    pub fn points(&self) -> u64 {
        [
            self.retailer,
            self.total,
            self.item_count,
            self.item_descriptions,
            self.purchase_date,
            self.purchase_time,
        ]
        .into_iter()
        .fold(0, u64::saturating_add)
    }
}

/// Evaluate every rule against the receipt independently
pub fn score_breakdown(receipt: &Receipt) -> PointsBreakdown {
    PointsBreakdown {
        retailer: rules::retailer_points(&receipt.retailer),
        total: rules::total_points(&receipt.total),
        item_count: rules::item_count_points(receipt.items.len()),
        item_descriptions: rules::item_descriptions_points(&receipt.items),
        purchase_date: rules::purchase_date_points(&receipt.purchase_date),
        purchase_time: rules::purchase_time_points(&receipt.purchase_time),
    }
}

/// Total reward points for a receipt
///
/// Never fails: a malformed field only zeroes its own rule.
pub fn compute_total(receipt: &Receipt) -> u64 {
    score_breakdown(receipt).points()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Item;
    use pretty_assertions::assert_eq;

    fn target_receipt() -> Receipt {
        Receipt {
            retailer: "Target".to_string(),
            purchase_date: "2022-01-01".to_string(),
            purchase_time: "13:01".to_string(),
            total: "35.35".to_string(),
            items: vec![
                Item::new("Mountain Dew 12PK", "6.49"),
                Item::new("Emils Cheese Pizza", "12.25"),
                Item::new("Knorr Creamy Chicken", "1.26"),
                Item::new("Doritos Nacho Cheese", "3.35"),
                Item::new("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
            ],
        }
    }

    fn corner_market_receipt() -> Receipt {
        Receipt {
            retailer: "M&M Corner Market".to_string(),
            purchase_date: "2022-03-20".to_string(),
            purchase_time: "14:33".to_string(),
            total: "9.00".to_string(),
            items: vec![
                Item::new("Gatorade", "2.25"),
                Item::new("Gatorade", "2.25"),
                Item::new("Gatorade", "2.25"),
                Item::new("Gatorade", "2.25"),
            ],
        }
    }

    #[test]
    fn test_target_receipt() {
        let breakdown = score_breakdown(&target_receipt());

        assert_eq!(
            breakdown,
            PointsBreakdown {
                retailer: 6,
                total: 0,
                item_count: 10,
                item_descriptions: 6,
                purchase_date: 6,
                purchase_time: 0,
            }
        );
        assert_eq!(compute_total(&target_receipt()), 28);
    }

    #[test]
    fn test_corner_market_receipt() {
        let breakdown = score_breakdown(&corner_market_receipt());

        assert_eq!(
            breakdown,
            PointsBreakdown {
                retailer: 14,
                total: 75,
                item_count: 10,
                item_descriptions: 0,
                purchase_date: 0,
                purchase_time: 10,
            }
        );
        assert_eq!(compute_total(&corner_market_receipt()), 109);
    }

    #[test]
    fn test_simple_receipt() {
        let receipt = Receipt {
            retailer: "Walgreens".to_string(),
            purchase_date: "2022-01-01".to_string(),
            purchase_time: "15:00".to_string(),
            total: "9.25".to_string(),
            items: vec![Item::new("Gatorade", "2.25"), Item::new("Pepsi", "1.25")],
        };

        // 9 retailer + 25 total + 5 pair + 6 odd day + 10 afternoon
        assert_eq!(compute_total(&receipt), 55);
    }

    #[test]
    fn test_malformed_fields_degrade_to_zero() {
        let receipt = Receipt {
            retailer: "!!!".to_string(),
            purchase_date: "invalid-date".to_string(),
            purchase_time: "invalid-time".to_string(),
            total: "lots".to_string(),
            items: vec![Item::new("abc", "nope")],
        };

        assert_eq!(score_breakdown(&receipt), PointsBreakdown::default());
        assert_eq!(compute_total(&receipt), 0);
    }
}
