use super::model::Purchase;
use super::value_objects::StatusFilter;
use crate::domain::catalog::services::LineItemView;

/// Orders a fetched purchase history newest first.
///
/// The sort is stable: purchases sharing a creation time keep their
/// response order. Input ownership is taken; nothing else is dropped or
/// reordered.
pub fn sort_newest_first(mut purchases: Vec<Purchase>) -> Vec<Purchase> {
    purchases.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    purchases
}

/// Narrows the sorted history to the purchases matching `filter`.
///
/// Non-destructive: the underlying list is untouched and relative order is
/// preserved, so switching filters never loses data.
pub fn filter_by_status(purchases: &[Purchase], filter: StatusFilter) -> Vec<Purchase> {
    purchases
        .iter()
        .filter(|purchase| filter.matches(purchase.status))
        .cloned()
        .collect()
}

/// Sums resolved line totals for the detail view.
///
/// Informational only: the stored purchase price remains authoritative for
/// payment, and unresolved rows contribute zero.
pub fn aggregate_total(items: &[LineItemView]) -> f64 {
    items.iter().map(|item| item.line_total).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::purchase::model::{LineItem, Purchase, PurchaseSnapshot};
    use crate::domain::purchase::value_objects::PurchaseStatus;
    use crate::domain::shared::value_objects::UserId;
    use chrono::{DateTime, Utc};
    use proptest::prelude::*;

    fn purchase_at(id: &str, status: PurchaseStatus, seconds: i64) -> Purchase {
        let at: DateTime<Utc> = DateTime::from_timestamp(seconds, 0).unwrap();
        Purchase::from_gateway(PurchaseSnapshot {
            id: id.to_string(),
            user_id: UserId::new("user-1"),
            items: vec![LineItem {
                id: format!("{}-line", id),
                product_id: "prod-1".to_string(),
                quantity: 1,
            }],
            price: 10.0,
            status,
            created_at: at,
            updated_at: at,
        })
    }

    #[test]
    fn should_sort_newest_first() {
        let a = purchase_at("a", PurchaseStatus::Active, 1_704_153_600); // 2024-01-02
        let b = purchase_at("b", PurchaseStatus::Completed, 1_704_412_800); // 2024-01-05

        let sorted = sort_newest_first(vec![a, b]);

        assert_eq!(sorted.len(), 2);
        assert_eq!(sorted[0].id, "b");
        assert_eq!(sorted[1].id, "a");
    }

    #[test]
    fn should_keep_response_order_on_equal_timestamps() {
        let first = purchase_at("first", PurchaseStatus::Active, 1_704_153_600);
        let second = purchase_at("second", PurchaseStatus::Active, 1_704_153_600);
        let third = purchase_at("third", PurchaseStatus::Active, 1_704_153_600);

        let sorted = sort_newest_first(vec![first, second, third]);

        let ids: Vec<&str> = sorted.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn should_return_empty_for_empty_input() {
        let sorted = sort_newest_first(Vec::new());
        assert!(sorted.is_empty());
    }

    #[test]
    fn should_filter_exactly_the_matching_status_in_order() {
        let sorted = sort_newest_first(vec![
            purchase_at("a", PurchaseStatus::Active, 1_704_153_600),
            purchase_at("b", PurchaseStatus::Completed, 1_704_412_800),
        ]);

        let completed = filter_by_status(&sorted, StatusFilter::Completed);
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].id, "b");

        let pending = filter_by_status(&sorted, StatusFilter::Pending);
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id, "a");
    }

    #[test]
    fn should_not_touch_the_underlying_list_when_filtering() {
        let purchases = vec![
            purchase_at("a", PurchaseStatus::Active, 3),
            purchase_at("b", PurchaseStatus::Canceled, 2),
            purchase_at("c", PurchaseStatus::Active, 1),
        ];

        let pending = filter_by_status(&purchases, StatusFilter::Pending);
        let ids: Vec<&str> = pending.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);

        // The source list survives with its order intact.
        assert_eq!(purchases.len(), 3);
        assert_eq!(purchases[1].id, "b");
    }

    #[test]
    fn should_return_everything_for_all_filter() {
        let purchases = vec![
            purchase_at("a", PurchaseStatus::Active, 3),
            purchase_at("b", PurchaseStatus::Unknown, 2),
        ];

        let all = filter_by_status(&purchases, StatusFilter::All);
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn should_sum_resolved_line_totals() {
        let items = vec![
            LineItemView {
                name: "Arroz".to_string(),
                quantity: 2,
                line_total: 21.0,
            },
            LineItemView {
                name: "Feijão".to_string(),
                quantity: 1,
                line_total: 8.5,
            },
        ];

        assert_eq!(aggregate_total(&items), 29.5);
    }

    #[test]
    fn should_sum_to_zero_for_unresolved_rows() {
        let items = vec![LineItemView {
            name: "665f1a2b3c4d5e6f70a1b2c3".to_string(),
            quantity: 2,
            line_total: 0.0,
        }];

        assert_eq!(aggregate_total(&items), 0.0);
        assert_eq!(aggregate_total(&[]), 0.0);
    }

    proptest! {
        #[test]
        fn sort_preserves_length_and_orders_descending(
            seconds in proptest::collection::vec(0i64..2_000_000_000, 0..40)
        ) {
            let purchases: Vec<Purchase> = seconds
                .iter()
                .enumerate()
                .map(|(i, s)| purchase_at(&format!("p{}", i), PurchaseStatus::Active, *s))
                .collect();

            let sorted = sort_newest_first(purchases.clone());

            prop_assert_eq!(sorted.len(), purchases.len());
            for pair in sorted.windows(2) {
                prop_assert!(pair[0].created_at >= pair[1].created_at);
            }
        }

        #[test]
        fn sort_is_stable_for_tied_timestamps(count in 0usize..20) {
            let purchases: Vec<Purchase> = (0..count)
                .map(|i| purchase_at(&format!("p{}", i), PurchaseStatus::Active, 1_704_153_600))
                .collect();

            let sorted = sort_newest_first(purchases);

            for (i, purchase) in sorted.iter().enumerate() {
                let expected_id = format!("p{}", i);
                prop_assert_eq!(purchase.id.as_str(), expected_id.as_str());
            }
        }
    }
}
