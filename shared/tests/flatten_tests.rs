//! Article flattener tests
//!
//! Covers the flattening contract:
//! - Output count equals total article count across batches
//! - Zero quantities are preserved, never normalized
//! - Category sub-structure matches the originating batch

use proptest::prelude::*;
use shared::{
    flatten_batches, ArticleCategory, ArticleDetails, ArticleStatus, BatchResponse, RawArticle,
    RawBatch, RawCondition, RawShelfLife,
};

fn raw_article(id: i64, part_number: &str, quantity: Option<f64>) -> RawArticle {
    RawArticle {
        id,
        part_number: part_number.to_string(),
        quantity,
        ..RawArticle::default()
    }
}

fn batch(category: ArticleCategory, name: &str, articles: Vec<RawArticle>) -> RawBatch {
    RawBatch {
        category,
        name: Some(name.to_string()),
        is_hazardous: None,
        articles,
    }
}

fn date(y: i32, m: u32, d: u32) -> chrono::NaiveDate {
    chrono::NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

mod unit_tests {
    use super::*;

    /// Missing response means "still loading" and yields an empty list
    #[test]
    fn test_missing_response_is_empty() {
        assert!(flatten_batches(None).is_empty());
    }

    /// A response with no batches yields an empty list
    #[test]
    fn test_empty_batches_is_empty() {
        let response = BatchResponse { batches: vec![] };
        assert!(flatten_batches(Some(&response)).is_empty());
    }

    /// One output record per (batch, article), batch-major order
    #[test]
    fn test_flattening_preserves_count_and_order() {
        let response = BatchResponse {
            batches: vec![
                batch(
                    ArticleCategory::Part,
                    "B1",
                    vec![raw_article(1, "PN-1", Some(1.0)), raw_article(2, "PN-2", Some(1.0))],
                ),
                batch(
                    ArticleCategory::Tool,
                    "B2",
                    vec![raw_article(3, "PN-3", Some(1.0))],
                ),
            ],
        };

        let records = flatten_batches(Some(&response));
        assert_eq!(records.len(), 3);
        assert_eq!(
            records.iter().map(|r| r.id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(records[0].batch_name.as_deref(), Some("B1"));
        assert_eq!(records[2].batch_name.as_deref(), Some("B2"));
    }

    /// A real stock level of 0 must stay 0, distinct from "no data"
    #[test]
    fn test_zero_quantity_preserved() {
        let response = BatchResponse {
            batches: vec![batch(
                ArticleCategory::Component,
                "B1",
                vec![raw_article(1, "PN-1", Some(0.0))],
            )],
        };

        let records = flatten_batches(Some(&response));
        assert_eq!(records[0].quantity, 0.0);
    }

    /// Missing quantity maps to 0, not an error
    #[test]
    fn test_missing_quantity_defaults_to_zero() {
        let response = BatchResponse {
            batches: vec![batch(
                ArticleCategory::Consumable,
                "B1",
                vec![raw_article(1, "PN-1", None)],
            )],
        };

        let records = flatten_batches(Some(&response));
        assert_eq!(records[0].quantity, 0.0);
    }

    /// Condition name falls back to the literal "N/A" marker
    #[test]
    fn test_condition_defaults_to_na() {
        let mut with_condition = raw_article(1, "PN-1", Some(1.0));
        with_condition.condition = Some(RawCondition {
            name: Some("Serviceable".to_string()),
        });
        let response = BatchResponse {
            batches: vec![batch(
                ArticleCategory::Part,
                "B1",
                vec![with_condition, raw_article(2, "PN-2", Some(1.0))],
            )],
        };

        let records = flatten_batches(Some(&response));
        assert_eq!(records[0].condition, "Serviceable");
        assert_eq!(records[1].condition, "N/A");
    }

    /// The details variant always matches the originating batch category
    #[test]
    fn test_details_variant_matches_batch_category() {
        let response = BatchResponse {
            batches: vec![
                batch(ArticleCategory::Component, "B1", vec![raw_article(1, "PN-1", None)]),
                batch(ArticleCategory::Part, "B2", vec![raw_article(2, "PN-2", None)]),
                batch(ArticleCategory::Consumable, "B3", vec![raw_article(3, "PN-3", None)]),
                batch(ArticleCategory::Tool, "B4", vec![raw_article(4, "PN-4", None)]),
            ],
        };

        let records = flatten_batches(Some(&response));
        assert_eq!(records[0].category(), ArticleCategory::Component);
        assert_eq!(records[1].category(), ArticleCategory::Part);
        assert_eq!(records[2].category(), ArticleCategory::Consumable);
        assert_eq!(records[3].category(), ArticleCategory::Tool);
    }

    /// Shelf life is attached only when an expiration date exists,
    /// whether flat on the article or nested under the shelf-life record
    #[test]
    fn test_shelf_life_attachment() {
        let mut flat = raw_article(1, "PN-1", Some(1.0));
        flat.expiration_date = Some(date(2027, 1, 31));

        let mut nested = raw_article(2, "PN-2", Some(1.0));
        nested.shelf_life = Some(RawShelfLife {
            expiration_date: Some(date(2027, 6, 30)),
            fabrication_date: Some(date(2025, 6, 30)),
        });

        let bare = raw_article(3, "PN-3", Some(1.0));

        let response = BatchResponse {
            batches: vec![batch(
                ArticleCategory::Component,
                "B1",
                vec![flat, nested, bare],
            )],
        };

        let records = flatten_batches(Some(&response));
        let shelf = |i: usize| records[i].details.shelf_life();

        assert_eq!(shelf(0).map(|s| s.expiration_date), Some(date(2027, 1, 31)));
        assert_eq!(shelf(1).map(|s| s.expiration_date), Some(date(2027, 6, 30)));
        assert_eq!(
            shelf(1).and_then(|s| s.fabrication_date),
            Some(date(2025, 6, 30))
        );
        assert!(shelf(2).is_none());
    }

    /// The batch hazardous flag lands on consumables only
    #[test]
    fn test_hazardous_flag_consumables_only() {
        let mut hazardous_batch = batch(
            ArticleCategory::Consumable,
            "B1",
            vec![raw_article(1, "PN-1", Some(5.0))],
        );
        hazardous_batch.is_hazardous = Some(true);

        let mut hazardous_parts = batch(
            ArticleCategory::Part,
            "B2",
            vec![raw_article(2, "PN-2", Some(1.0))],
        );
        hazardous_parts.is_hazardous = Some(true);

        let response = BatchResponse {
            batches: vec![hazardous_batch, hazardous_parts],
        };

        let records = flatten_batches(Some(&response));
        assert!(records[0].is_hazardous());
        assert!(!records[1].is_hazardous());
    }

    /// Unknown status codes pass through with the raw code as label
    #[test]
    fn test_unknown_status_passes_through() {
        let mut article = raw_article(1, "PN-1", Some(1.0));
        article.status = Some("quarantine".to_string());
        let response = BatchResponse {
            batches: vec![batch(ArticleCategory::Part, "B1", vec![article])],
        };

        let records = flatten_batches(Some(&response));
        assert_eq!(
            records[0].status,
            ArticleStatus::Other("quarantine".to_string())
        );
        assert_eq!(records[0].status.label(), "quarantine");
    }

    /// An article with no status at all is not invented into "stored"
    #[test]
    fn test_missing_status_stays_unknown() {
        let response = BatchResponse {
            batches: vec![batch(
                ArticleCategory::Part,
                "B1",
                vec![raw_article(1, "PN-1", Some(1.0))],
            )],
        };

        let records = flatten_batches(Some(&response));
        assert_eq!(records[0].status, ArticleStatus::Other(String::new()));
        assert_ne!(records[0].status, ArticleStatus::Stored);
        assert_eq!(records[0].status.label(), "Unknown");
    }

    /// Known status codes map onto their variants
    #[test]
    fn test_known_status_codes() {
        for (code, expected) in [
            ("stored", ArticleStatus::Stored),
            ("checking", ArticleStatus::Checking),
            ("dispatched", ArticleStatus::Dispatched),
            ("inuse", ArticleStatus::InUse),
            ("transit", ArticleStatus::Transit),
            ("maintenance", ArticleStatus::Maintenance),
        ] {
            assert_eq!(ArticleStatus::from(code.to_string()), expected);
        }
    }

    /// Serial is preferred over lot number for the display identifier
    #[test]
    fn test_display_identifier_prefers_serial() {
        let mut article = raw_article(1, "PN-1", Some(1.0));
        article.serial = Some("SN-77".to_string());
        article.lot_number = Some("LOT-3".to_string());
        let response = BatchResponse {
            batches: vec![batch(ArticleCategory::Component, "B1", vec![article])],
        };

        let records = flatten_batches(Some(&response));
        assert_eq!(records[0].display_identifier(), Some("SN-77"));
    }
}

mod property_tests {
    use super::*;

    fn category_strategy() -> impl Strategy<Value = ArticleCategory> {
        prop_oneof![
            Just(ArticleCategory::Component),
            Just(ArticleCategory::Part),
            Just(ArticleCategory::Consumable),
            Just(ArticleCategory::Tool),
        ]
    }

    fn batch_strategy() -> impl Strategy<Value = RawBatch> {
        (
            category_strategy(),
            prop::collection::vec((1i64..100_000, prop::option::of(0.0f64..1000.0)), 0..8),
        )
            .prop_map(|(category, articles)| RawBatch {
                category,
                name: Some("batch".to_string()),
                is_hazardous: None,
                articles: articles
                    .into_iter()
                    .map(|(id, quantity)| raw_article(id, "PN", quantity))
                    .collect(),
            })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Output length always equals the total article count
        #[test]
        fn prop_flattening_preserves_count(batches in prop::collection::vec(batch_strategy(), 0..6)) {
            let total: usize = batches.iter().map(|b| b.articles.len()).sum();
            let response = BatchResponse { batches };
            prop_assert_eq!(flatten_batches(Some(&response)).len(), total);
        }

        /// Every record's details variant matches its batch's category,
        /// and quantities are never invented
        #[test]
        fn prop_category_and_quantity_faithful(batches in prop::collection::vec(batch_strategy(), 0..6)) {
            let response = BatchResponse { batches };
            let mut expected = Vec::new();
            for batch in &response.batches {
                for article in &batch.articles {
                    expected.push((batch.category, article.quantity.unwrap_or(0.0)));
                }
            }

            let records = flatten_batches(Some(&response));
            for (record, (category, quantity)) in records.iter().zip(expected) {
                prop_assert_eq!(record.category(), category);
                prop_assert_eq!(record.quantity, quantity);
                let sub_structures = [
                    matches!(record.details, ArticleDetails::Component { .. }),
                    matches!(record.details, ArticleDetails::Consumable { .. }),
                    matches!(record.details, ArticleDetails::Tool(_)),
                ];
                prop_assert!(sub_structures.iter().filter(|&&p| p).count() <= 1);
            }
        }
    }
}
