use chrono::NaiveDate;
use stock_forecast::random::SeededRandom;
use stock_forecast::sentiment::news_sentiment;
use stock_forecast::{
    Backtester, ForecastService, InMemoryProvider, MockNewsProvider, ModelKind,
    PredictionRequest, PriceSeries, RatioSentimentEngine,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // A month of closes drifting upwards with a small weekly wobble
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).ok_or("bad start date")?;
    let closes: Vec<f64> = (0..30)
        .map(|i| 150.0 + 0.8 * i as f64 + if i % 7 < 3 { 1.5 } else { -1.0 })
        .collect();
    let series = PriceSeries::from_closes("ACME", start, &closes)?;
    println!(
        "Loaded {} closes for {} ({} to {})",
        series.len(),
        series.ticker(),
        series.first_date(),
        series.last_date()
    );

    // Back-test every model on the same history
    let backtester = Backtester::default();
    for kind in ModelKind::ALL {
        let report = backtester.evaluate_kind(kind, &series.closes(), &mut SeededRandom::new(7))?;
        println!("\n{}", kind.label());
        println!("{}", report);
    }

    // Full prediction through the service
    let service = ForecastService::new(InMemoryProvider::new().with_series(series));
    let request = PredictionRequest::new("acme", ModelKind::TrendAveraged);
    let result = service.predict_with(&request, &mut SeededRandom::new(42))?;

    println!("\nForecast for {} using {}:", result.ticker, result.model.label());
    for (date, price) in result.predicted_dates.iter().zip(&result.predicted_prices) {
        println!("  {}: {:.2}", date, price);
    }
    println!("  RMSE {:.4} ({})", result.rmse, result.accuracy);

    // News and sentiment
    let (news, analysis) = news_sentiment(
        &MockNewsProvider::now(),
        &RatioSentimentEngine::default(),
        &result.ticker,
        &mut SeededRandom::new(42),
    )?;
    println!("\n{} recent articles", news.len());
    for item in news.iter().take(3) {
        println!("  [{}] {} ({})", item.sentiment, item.title, item.source);
    }
    println!(
        "Sentiment: {} ({:.2}), recommendation: {}",
        analysis.overall_sentiment, analysis.score, analysis.recommendation
    );
    println!("{}", analysis.summary);

    Ok(())
}
