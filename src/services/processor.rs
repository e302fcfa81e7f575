//! Reduces a raw provider record to the summary the insight prompt is built from.
//!
//! A section missing from the raw record is omitted from the summary. Within
//! the recommendations section every category is always present.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::news::MAX_ITEMS;
use crate::data::{RawMarketRecord, RawNewsItem, RecommendationRow};

/// Analyst sentiment bucket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RecommendationCategory {
    StrongBuy,
    Buy,
    Hold,
    Sell,
    StrongSell,
}

impl RecommendationCategory {
    pub const ALL: [RecommendationCategory; 5] = [
        RecommendationCategory::StrongBuy,
        RecommendationCategory::Buy,
        RecommendationCategory::Hold,
        RecommendationCategory::Sell,
        RecommendationCategory::StrongSell,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationCategory::StrongBuy => "strongBuy",
            RecommendationCategory::Buy => "buy",
            RecommendationCategory::Hold => "hold",
            RecommendationCategory::Sell => "sell",
            RecommendationCategory::StrongSell => "strongSell",
        }
    }

    fn count(&self, row: &RecommendationRow) -> Option<f64> {
        match self {
            RecommendationCategory::StrongBuy => row.strong_buy,
            RecommendationCategory::Buy => row.buy,
            RecommendationCategory::Hold => row.hold,
            RecommendationCategory::Sell => row.sell,
            RecommendationCategory::StrongSell => row.strong_sell,
        }
    }
}

impl fmt::Display for RecommendationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mean analyst count per category across the rows that report it.
/// A category no row reports is NaN (serialized as `null`), never zero.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationMeans {
    pub strong_buy: f64,
    pub buy: f64,
    pub hold: f64,
    pub sell: f64,
    pub strong_sell: f64,
}

impl RecommendationMeans {
    pub fn get(&self, category: RecommendationCategory) -> f64 {
        match category {
            RecommendationCategory::StrongBuy => self.strong_buy,
            RecommendationCategory::Buy => self.buy,
            RecommendationCategory::Hold => self.hold,
            RecommendationCategory::Sell => self.sell,
            RecommendationCategory::StrongSell => self.strong_sell,
        }
    }

    /// Categories in fixed order with their means.
    pub fn iter(&self) -> impl Iterator<Item = (RecommendationCategory, f64)> + '_ {
        RecommendationCategory::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}

/// Two decimals, or "n/a" for a category with no reported values.
pub fn format_mean(mean: f64) -> String {
    if mean.is_nan() {
        "n/a".to_string()
    } else {
        format!("{:.2}", mean)
    }
}

/// A headline reduced to the two fields the prompt and the UI show.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsSummary {
    pub title: String,
    pub publisher: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessedSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<RecommendationMeans>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub news: Option<Vec<NewsSummary>>,
}

/// Mean of the cells present in one column. NaN when the column has none.
fn column_mean(rows: &[RecommendationRow], category: RecommendationCategory) -> f64 {
    let (sum, n) = rows
        .iter()
        .filter_map(|r| category.count(r))
        .fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
    if n == 0 {
        return f64::NAN;
    }
    sum / n as f64
}

/// Column means over the table. `None` when there are no rows to average.
pub fn aggregate_recommendations(rows: &[RecommendationRow]) -> Option<RecommendationMeans> {
    if rows.is_empty() {
        return None;
    }

    let mean = |c: RecommendationCategory| column_mean(rows, c);

    Some(RecommendationMeans {
        strong_buy: mean(RecommendationCategory::StrongBuy),
        buy: mean(RecommendationCategory::Buy),
        hold: mean(RecommendationCategory::Hold),
        sell: mean(RecommendationCategory::Sell),
        strong_sell: mean(RecommendationCategory::StrongSell),
    })
}

/// First `MAX_ITEMS` articles in provider order, title and publisher only.
pub fn simplify_news(items: &[RawNewsItem]) -> Vec<NewsSummary> {
    items
        .iter()
        .take(MAX_ITEMS)
        .map(|item| NewsSummary {
            title: item.title_or_default().to_string(),
            publisher: item.publisher_or_default().to_string(),
        })
        .collect()
}

pub fn process(record: &RawMarketRecord) -> ProcessedSummary {
    let recommendations = record
        .recommendations
        .as_deref()
        .and_then(aggregate_recommendations);

    let news = record
        .news
        .as_deref()
        .filter(|items| !items.is_empty())
        .map(simplify_news);

    ProcessedSummary {
        recommendations,
        news,
    }
}
