//! Application-wide constants
//!
//! Fixed values shared by the fetcher, processor and both front ends.

/// Ticker used by the CLI and pre-filled in the web form
pub const DEFAULT_TICKER: &str = "NVDA";

/// News summarisation constants
pub mod news {
    /// Maximum number of news items kept in a processed summary
    pub const MAX_ITEMS: usize = 5;

    /// Substituted when an article carries no title
    pub const DEFAULT_TITLE: &str = "No title";

    /// Substituted when an article carries no publisher
    pub const DEFAULT_PUBLISHER: &str = "Unknown publisher";
}

/// Yahoo Finance endpoints and request defaults
pub mod yahoo {
    pub const DEFAULT_BASE_URL: &str = "https://query2.finance.yahoo.com";
    pub const DEFAULT_COOKIE_URL: &str = "https://fc.yahoo.com";
    pub const DEFAULT_USER_AGENT: &str =
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

    /// How many articles to ask the search endpoint for
    pub const DEFAULT_NEWS_COUNT: usize = 10;

    pub const RECOMMENDATION_MODULE: &str = "recommendationTrend";
}

/// LLM defaults
pub mod llm {
    pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
}

/// Messages shown to the user by the web page and the CLI
pub mod messages {
    pub const FETCH_FAILED: &str =
        "Failed to fetch data. Please check the ticker symbol or your internet connection.";
    pub const INSIGHT_FAILED: &str = "Failed to generate insights. Please try again.";
    pub const INVALID_TICKER: &str = "Please enter a valid stock ticker.";
    pub const SUCCESS: &str = "Insights generated successfully!";

    /// CLI variant of the fetch failure
    pub const CLI_NO_DATA: &str =
        "No data fetched. Check the ticker symbol or your internet connection.";
}
