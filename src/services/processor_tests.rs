//! Unit tests for the processor - recommendation means and news simplification.

#[cfg(test)]
mod processor_tests {
    use crate::data::{RawMarketRecord, RawNewsItem, RecommendationRow};
    use crate::services::processor::*;
    use serde_json::json;

    fn row(strong_buy: f64, buy: f64, hold: f64, sell: f64, strong_sell: f64) -> RecommendationRow {
        RecommendationRow {
            period: None,
            strong_buy: Some(strong_buy),
            buy: Some(buy),
            hold: Some(hold),
            sell: Some(sell),
            strong_sell: Some(strong_sell),
        }
    }

    /// Feed an already-simplified item back in as provider input.
    fn as_raw(summary: &NewsSummary) -> RawNewsItem {
        RawNewsItem {
            title: Some(summary.title.clone()),
            publisher: Some(summary.publisher.clone()),
            ..Default::default()
        }
    }

    fn article(title: &str, publisher: &str) -> RawNewsItem {
        serde_json::from_value(json!({
            "title": title,
            "publisher": publisher,
            "link": format!("https://news.example.com/{}", title),
            "uuid": title,
        }))
        .unwrap()
    }

    // ============= Recommendation Tests =============

    #[test]
    fn test_means_over_two_rows() {
        let rows = vec![row(2.0, 3.0, 1.0, 0.0, 0.0), row(4.0, 1.0, 1.0, 0.0, 0.0)];
        let means = aggregate_recommendations(&rows).unwrap();

        assert_eq!(means.strong_buy, 3.0);
        assert_eq!(means.buy, 2.0);
        assert_eq!(means.hold, 1.0);
        assert_eq!(means.sell, 0.0);
        assert_eq!(means.strong_sell, 0.0);
    }

    #[test]
    fn test_single_row_mean_is_row_value() {
        let rows = vec![row(7.0, 12.0, 5.0, 2.0, 1.0)];
        let means = aggregate_recommendations(&rows).unwrap();

        assert_eq!(
            means,
            RecommendationMeans {
                strong_buy: 7.0,
                buy: 12.0,
                hold: 5.0,
                sell: 2.0,
                strong_sell: 1.0,
            }
        );
    }

    #[test]
    fn test_means_non_integer() {
        let rows = vec![
            row(1.0, 0.0, 0.0, 0.0, 0.0),
            row(2.0, 0.0, 0.0, 0.0, 1.0),
            row(2.0, 0.0, 0.0, 0.0, 0.0),
            row(0.0, 0.0, 0.0, 1.0, 0.0),
        ];
        let means = aggregate_recommendations(&rows).unwrap();

        assert!((means.strong_buy - 1.25).abs() < 1e-12);
        assert!((means.sell - 0.25).abs() < 1e-12);
        assert!((means.strong_sell - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_missing_cell_is_skipped_not_zeroed() {
        let rows: Vec<RecommendationRow> = serde_json::from_value(json!([
            {"period": "0m", "strongBuy": 4, "buy": 2, "hold": 1, "sell": 0, "strongSell": 0},
            {"period": "-1m", "buy": 4, "hold": 1, "sell": 0, "strongSell": 0}
        ]))
        .unwrap();
        let means = aggregate_recommendations(&rows).unwrap();

        assert_eq!(means.strong_buy, 4.0);
        assert_eq!(means.buy, 3.0);
        assert_eq!(means.hold, 1.0);
    }

    #[test]
    fn test_null_cell_is_skipped() {
        let rows: Vec<RecommendationRow> = serde_json::from_value(json!([
            {"strongBuy": null, "buy": 1, "hold": 2, "sell": 3, "strongSell": 4},
            {"strongBuy": 6, "buy": 3, "hold": 2, "sell": 1, "strongSell": 0}
        ]))
        .unwrap();
        let means = aggregate_recommendations(&rows).unwrap();

        assert_eq!(means.strong_buy, 6.0);
        assert_eq!(means.buy, 2.0);
        assert_eq!(means.strong_sell, 2.0);
    }

    #[test]
    fn test_column_without_values_is_nan_not_zero() {
        let rows: Vec<RecommendationRow> = serde_json::from_value(json!([
            {"buy": 1, "hold": 1, "sell": 0, "strongSell": 0},
            {"strongBuy": null, "buy": 3, "hold": 1, "sell": 0, "strongSell": 0}
        ]))
        .unwrap();
        let means = aggregate_recommendations(&rows).unwrap();

        assert!(means.strong_buy.is_nan());
        assert_eq!(means.buy, 2.0);
        assert_eq!(format_mean(means.strong_buy), "n/a");
        assert_eq!(format_mean(means.buy), "2.00");

        let value = serde_json::to_value(&means).unwrap();
        assert!(value["strongBuy"].is_null());
        assert_eq!(value["buy"], json!(2.0));
    }

    #[test]
    fn test_empty_table_has_no_means() {
        assert!(aggregate_recommendations(&[]).is_none());
    }

    #[test]
    fn test_means_iter_covers_every_category_in_order() {
        let means = aggregate_recommendations(&[row(1.0, 2.0, 3.0, 4.0, 5.0)]).unwrap();
        let names: Vec<&str> = means.iter().map(|(c, _)| c.as_str()).collect();
        let values: Vec<f64> = means.iter().map(|(_, v)| v).collect();

        assert_eq!(names, vec!["strongBuy", "buy", "hold", "sell", "strongSell"]);
        assert_eq!(values, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_means_serialize_with_category_keys() {
        let means = aggregate_recommendations(&[row(1.0, 2.0, 3.0, 4.0, 5.0)]).unwrap();
        let value = serde_json::to_value(&means).unwrap();

        assert_eq!(
            value,
            json!({"strongBuy": 1.0, "buy": 2.0, "hold": 3.0, "sell": 4.0, "strongSell": 5.0})
        );
    }

    // ============= News Tests =============

    #[test]
    fn test_news_truncated_to_first_five_in_order() {
        let items: Vec<RawNewsItem> = (0..8)
            .map(|i| article(&format!("t{}", i), &format!("p{}", i)))
            .collect();
        let news = simplify_news(&items);

        assert_eq!(news.len(), 5);
        let titles: Vec<&str> = news.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["t0", "t1", "t2", "t3", "t4"]);
        assert_eq!(news[4].publisher, "p4");
    }

    #[test]
    fn test_news_defaults_for_missing_fields() {
        let items = vec![
            serde_json::from_value::<RawNewsItem>(json!({"publisher": "Reuters"})).unwrap(),
            serde_json::from_value::<RawNewsItem>(json!({"title": "Earnings beat"})).unwrap(),
        ];
        let news = simplify_news(&items);

        assert_eq!(news[0].title, "No title");
        assert_eq!(news[0].publisher, "Reuters");
        assert_eq!(news[1].title, "Earnings beat");
        assert_eq!(news[1].publisher, "Unknown publisher");
    }

    #[test]
    fn test_news_drops_links() {
        let news = simplify_news(&[article("Chips", "Bloomberg")]);
        let value = serde_json::to_value(&news[0]).unwrap();

        assert_eq!(value, json!({"title": "Chips", "publisher": "Bloomberg"}));
    }

    #[test]
    fn test_news_simplification_is_idempotent() {
        let items: Vec<RawNewsItem> = vec![
            article("a", "A"),
            serde_json::from_value(json!({"link": "x"})).unwrap(),
            article("c", "C"),
        ];
        let once = simplify_news(&items);
        let again: Vec<RawNewsItem> = once.iter().map(as_raw).collect();
        let twice = simplify_news(&again);

        assert_eq!(once, twice);
    }

    // ============= process() Tests =============

    #[test]
    fn test_process_full_record() {
        let record = RawMarketRecord {
            recommendations: Some(vec![
                row(2.0, 3.0, 1.0, 0.0, 0.0),
                row(4.0, 1.0, 1.0, 0.0, 0.0),
            ]),
            news: Some(vec![article("first", "Reuters"), article("second", "CNBC")]),
        };
        let summary = process(&record);

        let means = summary.recommendations.unwrap();
        assert_eq!(means.strong_buy, 3.0);
        assert_eq!(means.buy, 2.0);
        assert_eq!(means.hold, 1.0);
        assert_eq!(means.sell, 0.0);
        assert_eq!(means.strong_sell, 0.0);

        let news = summary.news.unwrap();
        assert_eq!(
            news,
            vec![
                NewsSummary { title: "first".into(), publisher: "Reuters".into() },
                NewsSummary { title: "second".into(), publisher: "CNBC".into() },
            ]
        );
    }

    #[test]
    fn test_process_absent_recommendations_is_omitted() {
        let record = RawMarketRecord {
            recommendations: None,
            news: Some(vec![article("only", "AP")]),
        };
        let summary = process(&record);
        let value = serde_json::to_value(&summary).unwrap();

        assert!(summary.recommendations.is_none());
        assert!(value.get("recommendations").is_none());
        assert!(value.get("news").is_some());
    }

    #[test]
    fn test_process_empty_news_is_omitted() {
        let record = RawMarketRecord {
            recommendations: Some(vec![row(1.0, 1.0, 1.0, 1.0, 1.0)]),
            news: Some(vec![]),
        };
        let summary = process(&record);
        let value = serde_json::to_value(&summary).unwrap();

        assert!(summary.news.is_none());
        assert!(value.get("news").is_none());
        assert!(value.get("recommendations").is_some());
    }

    #[test]
    fn test_process_empty_record() {
        let summary = process(&RawMarketRecord::default());
        assert_eq!(summary, ProcessedSummary::default());
        assert_eq!(serde_json::to_value(&summary).unwrap(), json!({}));
    }
}
