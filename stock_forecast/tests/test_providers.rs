use pretty_assertions::assert_eq;
use std::fs;
use stock_forecast::providers::{AlphaVantageFileProvider, CsvPriceProvider};
use stock_forecast::random::FixedRandom;
use stock_forecast::{
    AccuracyRating, ForecastService, ModelKind, PredictionRequest, ProviderError,
    StockDataProvider,
};
use tempfile::TempDir;

/// Eleven rising closes from 2024-02-01, written newest-first
fn write_rising_csv(dir: &TempDir, ticker: &str) {
    let mut text = String::from("date,open,high,low,close,volume\n");
    for day in (1..=11).rev() {
        let close = 99.0 + day as f64;
        text.push_str(&format!(
            "2024-02-{:02},{:.2},{:.2},{:.2},{:.2},{}\n",
            day,
            close - 0.5,
            close + 1.0,
            close - 1.0,
            close,
            1_000 * day
        ));
    }
    fs::write(dir.path().join(format!("{}.csv", ticker)), text).unwrap();
}

#[test]
fn test_csv_provider_reads_newest_first_file() {
    let dir = TempDir::new().unwrap();
    write_rising_csv(&dir, "ACME");

    let provider = CsvPriceProvider::new(dir.path());
    assert_eq!(provider.dir(), dir.path());
    let series = provider.fetch("acme").unwrap();

    assert_eq!(series.ticker(), "ACME");
    assert_eq!(series.len(), 11);
    assert_eq!(series.closes()[0], 100.0);
    assert_eq!(series.closes()[10], 110.0);
    assert_eq!(series.first_date().to_string(), "2024-02-01");
    assert_eq!(series.last_date().to_string(), "2024-02-11");

    let summary = series.quote_summary().unwrap();
    assert_eq!(summary.price_change, 1.0);
    assert_eq!(summary.volume, 11_000);
    assert!((summary.volume_change_percent - 10.0).abs() < 1e-9);
    assert!(summary.is_up());
}

#[test]
fn test_csv_provider_missing_file_is_not_found() {
    let dir = TempDir::new().unwrap();
    let provider = CsvPriceProvider::new(dir.path());

    assert_eq!(
        provider.fetch("msft"),
        Err(ProviderError::NotFound("MSFT".to_string()))
    );
}

#[test]
fn test_csv_provider_rejects_path_like_tickers() {
    let dir = TempDir::new().unwrap();
    let provider = CsvPriceProvider::new(dir.path());

    assert!(matches!(
        provider.fetch("../secrets"),
        Err(ProviderError::NotFound(_))
    ));
}

#[test]
fn test_csv_provider_reports_unordered_dates() {
    let dir = TempDir::new().unwrap();
    let text = "date,open,high,low,close,volume\n\
                2024-02-01,10,11,9,10.5,100\n\
                2024-02-03,10,11,9,10.5,100\n\
                2024-02-02,10,11,9,10.5,100\n";
    fs::write(dir.path().join("ACME.csv"), text).unwrap();

    let provider = CsvPriceProvider::new(dir.path());
    match provider.fetch("ACME") {
        Err(ProviderError::Parse(message)) => {
            assert!(message.starts_with("Dates in series for ACME"));
        }
        other => panic!("Expected parse error, got {:?}", other),
    }
}

#[test]
fn test_unreadable_files_are_network_errors() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("ACME.csv")).unwrap();
    fs::create_dir(dir.path().join("ACME.json")).unwrap();

    assert!(matches!(
        CsvPriceProvider::new(dir.path()).fetch("ACME"),
        Err(ProviderError::Network(_))
    ));
    assert!(matches!(
        AlphaVantageFileProvider::new(dir.path()).fetch("ACME"),
        Err(ProviderError::Network(_))
    ));
}

#[test]
fn test_csv_with_header_only_is_parse_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("ACME.csv"), "date,open,high,low,close,volume\n").unwrap();

    let err = CsvPriceProvider::new(dir.path()).fetch("ACME").unwrap_err();
    assert_eq!(err.to_string(), "Parse error: Price series for ACME is empty");
}

#[test]
fn test_service_over_csv_files() {
    let dir = TempDir::new().unwrap();
    write_rising_csv(&dir, "ACME");

    let service = ForecastService::new(CsvPriceProvider::new(dir.path()));
    let result = service
        .predict_with(
            &PredictionRequest::new("ACME", ModelKind::Linear),
            &mut FixedRandom::zero_noise(),
        )
        .unwrap();

    assert_eq!(result.predicted_prices[0], 111.0);
    assert_eq!(result.predicted_dates[0].to_string(), "2024-02-12");
    assert_eq!(result.accuracy, AccuracyRating::High);
}

#[test]
fn test_alpha_vantage_files() {
    let dir = TempDir::new().unwrap();
    let payload = r#"{
        "Meta Data": { "2. Symbol": "IBM" },
        "Time Series (Daily)": {
            "2024-03-08": { "1. open": "13.0", "2. high": "14.0", "3. low": "12.0", "4. close": "13.5", "5. volume": "400" },
            "2024-03-07": { "1. open": "12.0", "2. high": "13.0", "3. low": "11.0", "4. close": "12.5", "5. volume": "300" },
            "2024-03-06": { "1. open": "11.0", "2. high": "12.0", "3. low": "10.0", "4. close": "11.5", "5. volume": "200" }
        }
    }"#;
    fs::write(dir.path().join("IBM.json"), payload).unwrap();
    fs::write(
        dir.path().join("BUSY.json"),
        r#"{ "Information": "API rate limit reached" }"#,
    )
    .unwrap();

    let provider = AlphaVantageFileProvider::new(dir.path());
    let series = provider.fetch("ibm").unwrap();
    assert_eq!(series.closes(), vec![11.5, 12.5, 13.5]);

    let trimmed = AlphaVantageFileProvider::new(dir.path()).with_max_days(2);
    assert_eq!(trimmed.fetch("IBM").unwrap().closes(), vec![12.5, 13.5]);

    assert_eq!(
        provider.fetch("BUSY"),
        Err(ProviderError::RateLimited("API rate limit reached".to_string()))
    );
    assert_eq!(
        provider.fetch("AAPL"),
        Err(ProviderError::NotFound("AAPL".to_string()))
    );
}

#[test]
fn test_alpha_vantage_bad_number_is_parse_error() {
    let json = r#"{
        "Time Series (Daily)": {
            "2024-03-06": { "1. open": "11.0", "2. high": "n/a", "3. low": "10.0", "4. close": "11.5", "5. volume": "200" }
        }
    }"#;

    let err = stock_forecast::providers::alpha_vantage::parse_daily("IBM", json, 30).unwrap_err();
    match err {
        ProviderError::Parse(message) => assert!(message.contains("high")),
        other => panic!("Expected parse error, got {:?}", other),
    }
}
