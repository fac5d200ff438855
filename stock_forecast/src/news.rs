//! News items and the offline news source

use crate::error::ProviderError;
use crate::providers::normalize_ticker;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tone of a single article or of a whole news set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    pub title: String,
    pub url: String,
    pub source: String,
    pub published_at: DateTime<Utc>,
    pub summary: String,
    pub sentiment: Sentiment,
}

/// Supplies recent articles about a ticker
pub trait NewsProvider {
    fn fetch(&self, ticker: &str) -> Result<Vec<NewsItem>, ProviderError>;
}

/// Source, sentiment, title and summary; `{t}` is replaced by the ticker
const TEMPLATES: [(&str, Sentiment, &str, &str); 7] = [
    (
        "Financial Times",
        Sentiment::Positive,
        "{t} Reports Strong Quarterly Earnings, Exceeding Analyst Expectations",
        "{t} announced quarterly earnings that surpassed Wall Street expectations, with revenue growing 15% year-over-year. The company also raised its full-year guidance.",
    ),
    (
        "Bloomberg",
        Sentiment::Positive,
        "{t} Announces New Product Line, Targeting Emerging Markets",
        "{t} unveiled a new product line designed specifically for emerging markets, which analysts believe could open significant growth opportunities.",
    ),
    (
        "Reuters",
        Sentiment::Negative,
        "{t} Faces Supply Chain Challenges Amid Global Shortages",
        "{t} acknowledged ongoing supply chain disruptions that could impact production targets for the upcoming quarter, though the company maintains its long-term outlook.",
    ),
    (
        "CNBC",
        Sentiment::Negative,
        "Analyst Downgrades {t} Citing Valuation Concerns",
        "A prominent Wall Street analyst downgraded {t} from \"Buy\" to \"Hold,\" citing concerns about the stock's current valuation relative to peers.",
    ),
    (
        "Wall Street Journal",
        Sentiment::Positive,
        "{t} Expands Partnership with Tech Giant for Cloud Services",
        "{t} announced an expanded partnership with a major cloud provider, which is expected to reduce operational costs and improve service delivery.",
    ),
    (
        "Investor's Business Daily",
        Sentiment::Neutral,
        "{t} CEO Discusses Future Growth Strategy in Industry Conference",
        "The CEO of {t} outlined the company's five-year growth strategy at an industry conference, highlighting investments in AI and sustainable technologies.",
    ),
    (
        "TechCrunch",
        Sentiment::Positive,
        "{t} Completes Acquisition of Startup to Enhance Digital Capabilities",
        "{t} has completed its acquisition of a promising tech startup, which is expected to enhance the company's digital transformation initiatives.",
    ),
];

/// Templated headlines for any ticker, dated relative to a fixed reference time.
///
/// Each article is dated further back than the previous one by one more
/// day: 1, 3, 6, 10, 15, 21 and 28 days before the reference.
#[derive(Debug, Clone, Copy)]
pub struct MockNewsProvider {
    reference: DateTime<Utc>,
}

impl MockNewsProvider {
    pub fn new(reference: DateTime<Utc>) -> Self {
        Self { reference }
    }

    /// Dated relative to the current time
    pub fn now() -> Self {
        Self::new(Utc::now())
    }
}

impl NewsProvider for MockNewsProvider {
    fn fetch(&self, ticker: &str) -> Result<Vec<NewsItem>, ProviderError> {
        let symbol = normalize_ticker(ticker)?;
        let mut published_at = self.reference;

        let items = TEMPLATES
            .iter()
            .enumerate()
            .map(|(i, (source, sentiment, title, summary))| {
                published_at -= Duration::days(i as i64 + 1);
                NewsItem {
                    title: title.replace("{t}", &symbol),
                    url: "#".to_string(),
                    source: source.to_string(),
                    published_at,
                    summary: summary.replace("{t}", &symbol),
                    sentiment: *sentiment,
                }
            })
            .collect();

        Ok(items)
    }
}
