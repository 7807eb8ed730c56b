//! Filtering, unit conversion and stock validation tests

use chrono::NaiveDate;
use shared::{
    convert, is_below_min_quantity, low_stock_articles, validate_part_number, validate_quantity,
    ArticleCategory, ArticleDetails, ArticleFilter, ArticleRecord, ArticleStatus, ConsumableUnit,
    ShelfLife,
};

fn article(id: i64, part_number: &str) -> ArticleRecord {
    ArticleRecord {
        id,
        part_number: part_number.to_string(),
        alternative_part_numbers: vec![],
        serial: None,
        lot_number: None,
        description: None,
        batch_name: None,
        quantity: 1.0,
        zone: None,
        status: ArticleStatus::Stored,
        condition: "N/A".to_string(),
        details: ArticleDetails::Part,
        min_quantity: None,
        has_documentation: false,
        certificates: vec![],
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

mod filter_tests {
    use super::*;

    /// An empty filter passes everything, order preserved
    #[test]
    fn test_empty_filter_passes_all() {
        let articles = vec![article(1, "A"), article(2, "B")];
        let filter = ArticleFilter::default();
        assert!(filter.is_empty());
        assert_eq!(filter.apply(&articles), articles);
    }

    /// Status and category sets are conjunctive with the other criteria
    #[test]
    fn test_status_and_category_filter() {
        let mut in_use = article(1, "A");
        in_use.status = ArticleStatus::InUse;
        let mut component = article(2, "B");
        component.details = ArticleDetails::Component { shelf_life: None };
        let stored_part = article(3, "C");

        let articles = vec![in_use, component, stored_part];

        let by_status = ArticleFilter {
            statuses: vec![ArticleStatus::InUse],
            ..ArticleFilter::default()
        };
        assert_eq!(
            by_status.apply(&articles).iter().map(|a| a.id).collect::<Vec<_>>(),
            vec![1]
        );

        let by_category = ArticleFilter {
            categories: vec![ArticleCategory::Component],
            ..ArticleFilter::default()
        };
        assert_eq!(
            by_category.apply(&articles).iter().map(|a| a.id).collect::<Vec<_>>(),
            vec![2]
        );
    }

    /// Search is case-insensitive and covers alternative part numbers
    #[test]
    fn test_search_matches_alternatives() {
        let mut a = article(1, "MS20470AD4");
        a.alternative_part_numbers = vec!["NAS1097".to_string()];
        let b = article(2, "AN960-10");
        let articles = vec![a, b];

        let filter = ArticleFilter {
            search: Some("nas10".to_string()),
            ..ArticleFilter::default()
        };
        assert_eq!(
            filter.apply(&articles).iter().map(|a| a.id).collect::<Vec<_>>(),
            vec![1]
        );
    }

    /// The expiry window only keeps shelf-life-tracked articles in range
    #[test]
    fn test_expiry_date_range() {
        let mut soon = article(1, "A");
        soon.details = ArticleDetails::Component {
            shelf_life: Some(ShelfLife {
                expiration_date: date(2026, 9, 15),
                fabrication_date: None,
            }),
        };
        let mut later = article(2, "B");
        later.details = ArticleDetails::Component {
            shelf_life: Some(ShelfLife {
                expiration_date: date(2027, 3, 1),
                fabrication_date: None,
            }),
        };
        let untracked = article(3, "C");

        let articles = vec![soon, later, untracked];
        let filter = ArticleFilter {
            expires_after: Some(date(2026, 9, 1)),
            expires_before: Some(date(2026, 12, 31)),
            ..ArticleFilter::default()
        };
        assert_eq!(
            filter.apply(&articles).iter().map(|a| a.id).collect::<Vec<_>>(),
            vec![1]
        );
    }

    /// Hazardous-only keeps hazardous consumables and nothing else
    #[test]
    fn test_hazardous_only() {
        let mut sealant = article(1, "PR-1422");
        sealant.details = ArticleDetails::Consumable {
            shelf_life: None,
            unit: Some(ConsumableUnit::Liter),
            hazardous: true,
        };
        let rivet = article(2, "MS20470");

        let filter = ArticleFilter {
            hazardous_only: true,
            ..ArticleFilter::default()
        };
        let kept = filter.apply(&[sealant, rivet]);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, 1);
    }

    /// Zone is an exact match
    #[test]
    fn test_zone_filter() {
        let mut shelf_a = article(1, "A");
        shelf_a.zone = Some("A-02-3".to_string());
        let unzoned = article(2, "B");

        let filter = ArticleFilter {
            zone: Some("A-02-3".to_string()),
            ..ArticleFilter::default()
        };
        let kept = filter.apply(&[shelf_a, unzoned]);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, 1);
    }
}

mod unit_conversion_tests {
    use super::*;

    #[test]
    fn test_same_dimension_conversion() {
        assert_eq!(
            convert(2.5, ConsumableUnit::Kilogram, ConsumableUnit::Gram),
            Some(2500.0)
        );
        assert_eq!(
            convert(250.0, ConsumableUnit::Milliliter, ConsumableUnit::Liter),
            Some(0.25)
        );
        assert_eq!(
            convert(150.0, ConsumableUnit::Centimeter, ConsumableUnit::Meter),
            Some(1.5)
        );
    }

    #[test]
    fn test_identity_conversion() {
        assert_eq!(
            convert(7.0, ConsumableUnit::Piece, ConsumableUnit::Piece),
            Some(7.0)
        );
    }

    /// Liters never become kilograms
    #[test]
    fn test_cross_dimension_is_rejected() {
        assert_eq!(
            convert(1.0, ConsumableUnit::Liter, ConsumableUnit::Kilogram),
            None
        );
        assert_eq!(
            convert(1.0, ConsumableUnit::Piece, ConsumableUnit::Meter),
            None
        );
    }
}

mod validation_tests {
    use super::*;

    #[test]
    fn test_part_number_validation() {
        assert!(validate_part_number("MS20470AD4").is_ok());
        assert!(validate_part_number("  ").is_err());
        assert!(validate_part_number(&"X".repeat(65)).is_err());
    }

    #[test]
    fn test_quantity_validation() {
        assert!(validate_quantity(0.0).is_ok());
        assert!(validate_quantity(12.5).is_ok());
        assert!(validate_quantity(-1.0).is_err());
        assert!(validate_quantity(f64::NAN).is_err());
    }

    /// Low stock needs a configured minimum; zero stock alone is not enough
    #[test]
    fn test_low_stock_detection() {
        let mut low = article(1, "A");
        low.quantity = 2.0;
        low.min_quantity = Some(5.0);

        let mut ok = article(2, "B");
        ok.quantity = 9.0;
        ok.min_quantity = Some(5.0);

        let mut no_threshold = article(3, "C");
        no_threshold.quantity = 0.0;

        assert!(is_below_min_quantity(&low));
        assert!(!is_below_min_quantity(&ok));
        assert!(!is_below_min_quantity(&no_threshold));

        let flagged = low_stock_articles(&[low, ok, no_threshold]);
        assert_eq!(flagged.len(), 1);
        assert_eq!(flagged[0].id, 1);
    }
}
