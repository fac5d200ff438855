//! Aggregate sentiment and a trading recommendation from news

use crate::error::{ForecastError, Result};
use crate::news::{NewsItem, NewsProvider, Sentiment};
use crate::random::RandomSource;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recommendation {
    Buy,
    Sell,
    Hold,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Recommendation::Buy => "buy",
            Recommendation::Sell => "sell",
            Recommendation::Hold => "hold",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentAnalysis {
    pub overall_sentiment: Sentiment,
    /// 0 is most negative, 1 most positive
    pub score: f64,
    pub recommendation: Recommendation,
    pub summary: String,
}

/// Turns a set of articles into a [`SentimentAnalysis`]
pub trait SentimentEngine {
    fn analyze(
        &self,
        ticker: &str,
        news: &[NewsItem],
        rng: &mut dyn RandomSource,
    ) -> Result<SentimentAnalysis>;
}

/// Classifies by the share of positive and negative articles.
///
/// A share above `threshold` (default 0.6) decides the outcome. Scores
/// are drawn from `[0.7, 1.0)` for positive, `[0.0, 0.3)` for negative and
/// `[0.3, 0.7)` for neutral.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatioSentimentEngine {
    threshold: f64,
}

impl Default for RatioSentimentEngine {
    fn default() -> Self {
        Self { threshold: 0.6 }
    }
}

impl RatioSentimentEngine {
    /// `threshold` must lie in `[0.5, 1.0)` so at most one side can win
    pub fn new(threshold: f64) -> Result<Self> {
        if !(0.5..1.0).contains(&threshold) {
            return Err(ForecastError::InvalidParameter(format!(
                "Sentiment threshold must be in [0.5, 1.0), got {}",
                threshold
            )));
        }
        Ok(Self { threshold })
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Counts {
    positive: usize,
    negative: usize,
    neutral: usize,
}

impl Counts {
    fn tally(news: &[NewsItem]) -> Self {
        news.iter().fold(Self::default(), |mut counts, item| {
            match item.sentiment {
                Sentiment::Positive => counts.positive += 1,
                Sentiment::Negative => counts.negative += 1,
                Sentiment::Neutral => counts.neutral += 1,
            }
            counts
        })
    }

    fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }

    fn ratio(&self, count: usize) -> f64 {
        match self.total() {
            0 => 0.0,
            total => count as f64 / total as f64,
        }
    }
}

impl SentimentEngine for RatioSentimentEngine {
    fn analyze(
        &self,
        ticker: &str,
        news: &[NewsItem],
        rng: &mut dyn RandomSource,
    ) -> Result<SentimentAnalysis> {
        let counts = Counts::tally(news);
        let total = counts.total();
        let positive_ratio = counts.ratio(counts.positive);
        let negative_ratio = counts.ratio(counts.negative);
        debug!(ticker, positive_ratio, negative_ratio, total, "scored news");

        let analysis = if positive_ratio > self.threshold {
            SentimentAnalysis {
                overall_sentiment: Sentiment::Positive,
                score: 0.7 + rng.next_unit() * 0.3,
                recommendation: Recommendation::Buy,
                summary: format!(
                    "Recent news about {} is predominantly positive, with {} positive articles out of {}. The company appears to be performing well and market sentiment is favorable.",
                    ticker, counts.positive, total
                ),
            }
        } else if negative_ratio > self.threshold {
            SentimentAnalysis {
                overall_sentiment: Sentiment::Negative,
                score: rng.next_unit() * 0.3,
                recommendation: Recommendation::Sell,
                summary: format!(
                    "Recent news about {} shows concerning trends, with {} negative articles out of {}. Investors should exercise caution as market sentiment appears unfavorable.",
                    ticker, counts.negative, total
                ),
            }
        } else {
            SentimentAnalysis {
                overall_sentiment: Sentiment::Neutral,
                score: 0.3 + rng.next_unit() * 0.4,
                recommendation: Recommendation::Hold,
                summary: format!(
                    "Recent news about {} is mixed, with {} positive and {} negative articles out of {}. The market sentiment is currently neutral, suggesting a hold position.",
                    ticker, counts.positive, counts.negative, total
                ),
            }
        };

        Ok(analysis)
    }
}

/// Fetch news for `ticker` and analyse it in one step
pub fn news_sentiment<N, E>(
    news_provider: &N,
    engine: &E,
    ticker: &str,
    rng: &mut dyn RandomSource,
) -> Result<(Vec<NewsItem>, SentimentAnalysis)>
where
    N: NewsProvider + ?Sized,
    E: SentimentEngine + ?Sized,
{
    let news = news_provider.fetch(ticker)?;
    let analysis = engine.analyze(ticker, &news, rng)?;
    Ok((news, analysis))
}
