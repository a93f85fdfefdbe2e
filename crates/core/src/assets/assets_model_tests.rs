//! Tests for asset tree domain models.

#[cfg(test)]
mod tests {
    use crate::assets::{AssetNode, TradeAction};
    use crate::errors::{Error, TreeError, ValidationError};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn node(id: &str, name: &str, value: Decimal) -> AssetNode {
        AssetNode {
            id: id.to_string(),
            name: name.to_string(),
            value,
            quote_id: None,
            percentage: None,
            desired_percentage: None,
            parent_id: None,
            children: None,
            operation: None,
        }
    }

    #[test]
    fn test_trade_action_serialization() {
        assert_eq!(serde_json::to_string(&TradeAction::Buy).unwrap(), "\"buy\"");
        assert_eq!(
            serde_json::to_string(&TradeAction::Sell).unwrap(),
            "\"sell\""
        );
        assert_eq!(
            serde_json::to_string(&TradeAction::Hold).unwrap(),
            "\"hold\""
        );
    }

    #[test]
    fn test_trade_action_from_diff() {
        assert_eq!(TradeAction::from_diff(dec!(50)), TradeAction::Buy);
        assert_eq!(TradeAction::from_diff(dec!(-50)), TradeAction::Sell);
        assert_eq!(TradeAction::from_diff(Decimal::ZERO), TradeAction::Hold);
    }

    #[test]
    fn test_node_serializes_camel_case_without_unset_fields() {
        let mut leaf = node("cash", "Cash", dec!(300000));
        leaf.quote_id = Some("USD".to_string());
        leaf.parent_id = Some("root".to_string());

        let value = serde_json::to_value(&leaf).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "cash",
                "name": "Cash",
                "value": 300000.0,
                "quoteId": "USD",
                "parentId": "root"
            })
        );
    }

    #[test]
    fn test_node_deserializes_with_missing_optional_fields() {
        // Renderers and editors may hand back the bare minimum; every
        // optional field reads as unset rather than failing.
        let leaf: AssetNode =
            serde_json::from_value(json!({"id": "cash", "name": "Cash", "value": 100})).unwrap();

        assert_eq!(leaf.value, dec!(100));
        assert!(leaf.quote_id.is_none());
        assert!(leaf.percentage.is_none());
        assert!(leaf.desired_percentage.is_none());
        assert!(leaf.children.is_none());
        assert!(leaf.operation.is_none());
    }

    #[test]
    fn test_new_nodes_get_distinct_ids() {
        let a = AssetNode::new("New asset", Decimal::ZERO);
        let b = AssetNode::new("New asset", Decimal::ZERO);
        assert_ne!(a.id, b.id);
        assert!(a.is_leaf());
    }

    #[test]
    fn test_empty_children_counts_as_leaf() {
        let mut leaf = node("cash", "Cash", dec!(100));
        leaf.children = Some(vec![]);
        assert!(leaf.is_leaf());

        let mut group = node("root", "Portfolio", dec!(100));
        group.children = Some(vec![node("cash", "Cash", dec!(100))]);
        assert!(!group.is_leaf());
    }

    #[test]
    fn test_find_by_id_searches_depth_first() {
        let mut stocks = node("stocks", "Stocks", dec!(400000));
        stocks.children = Some(vec![
            node("stocks-us", "US", dec!(150000)),
            node("stocks-eu", "EU", dec!(250000)),
        ]);
        let mut root = node("root", "Portfolio", dec!(700000));
        root.children = Some(vec![stocks]);

        assert_eq!(root.find_by_id("stocks-eu").unwrap().value, dec!(250000));
        assert_eq!(root.find_by_id("root").unwrap().name, "Portfolio");
        assert!(root.find_by_id("bonds").is_none());
    }

    #[test]
    fn test_validate_accepts_well_formed_tree() {
        let mut child = node("stocks", "Stocks", dec!(400000));
        child.desired_percentage = Some(dec!(50));
        let mut root = node("root", "Portfolio", dec!(1000000));
        root.children = Some(vec![child]);

        assert!(root.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_duplicate_ids() {
        let mut root = node("root", "Portfolio", dec!(100));
        root.children = Some(vec![
            node("cash", "Cash", dec!(50)),
            node("cash", "More cash", dec!(50)),
        ]);

        let err = root.validate().unwrap_err();
        assert!(matches!(
            err,
            Error::Tree(TreeError::DuplicateId(ref id)) if id == "cash"
        ));
    }

    #[test]
    fn test_validate_rejects_negative_value() {
        let mut root = node("root", "Portfolio", dec!(100));
        root.children = Some(vec![node("cash", "Cash", dec!(-50))]);

        let err = root.validate().unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::NegativeValue { ref id, .. }) if id == "cash"
        ));
    }

    #[test]
    fn test_validate_rejects_percentage_out_of_range() {
        let mut child = node("stocks", "Stocks", Decimal::ZERO);
        child.desired_percentage = Some(dec!(120));
        let mut root = node("root", "Portfolio", Decimal::ZERO);
        root.children = Some(vec![child]);

        let err = root.validate().unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::PercentageOutOfRange { ref id, .. }) if id == "stocks"
        ));
    }

    #[test]
    fn test_validate_allows_oversubscribed_siblings() {
        // Sibling percentages may sum past 100; only individual values are
        // range-checked.
        let mut a = node("a", "A", Decimal::ZERO);
        a.desired_percentage = Some(dec!(80));
        let mut b = node("b", "B", Decimal::ZERO);
        b.desired_percentage = Some(dec!(80));
        let mut root = node("root", "Portfolio", Decimal::ZERO);
        root.children = Some(vec![a, b]);

        assert!(root.validate().is_ok());
    }
}
