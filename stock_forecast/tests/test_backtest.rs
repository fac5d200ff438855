use approx::assert_relative_eq;
use pretty_assertions::assert_eq;
use rstest::rstest;
use stock_forecast::backtest::{calculate_rmse, DEFAULT_HOLDOUT};
use stock_forecast::models::{LinearTrend, TrendAveraged};
use stock_forecast::random::{FixedRandom, ThreadRandom};
use stock_forecast::{AccuracyRating, Backtester, ForecastError, ModelKind};

fn rising_prices(len: usize) -> Vec<f64> {
    (0..len).map(|i| 100.0 + i as f64).collect()
}

#[test]
fn test_linear_backtest_on_perfect_trend() {
    let prices = rising_prices(11);
    let report = Backtester::default()
        .evaluate(&LinearTrend::new(), &prices, &mut ThreadRandom)
        .unwrap();

    assert_eq!(report.actual, vec![104.0, 105.0, 106.0, 107.0, 108.0, 109.0, 110.0]);
    assert_eq!(report.predicted, report.actual);
    assert_eq!(report.rmse, 0.0);
    assert_eq!(report.rating, AccuracyRating::High);
}

#[test]
fn test_trend_averaged_backtest_misses_breakout() {
    // Flat training prefix, then a steady climb the model cannot see
    let mut prices = vec![100.0; 5];
    prices.extend(rising_prices(8).into_iter().skip(1));

    let report = Backtester::default()
        .evaluate(
            &TrendAveraged::default(),
            &prices,
            &mut FixedRandom::zero_noise(),
        )
        .unwrap();

    assert_eq!(report.predicted, vec![100.0; 7]);
    // Errors are 1..=7, so the mean square is 140 / 7
    assert_relative_eq!(report.rmse, 20.0_f64.sqrt(), epsilon = 1e-12);
    assert_eq!(report.rating, AccuracyRating::Low);
}

#[rstest]
#[case(ModelKind::Linear, 8)]
#[case(ModelKind::TrendAveraged, 8)]
#[case(ModelKind::WeightedMomentum, 11)]
fn test_backtest_insufficient_history(#[case] kind: ModelKind, #[case] len: usize) {
    let prices = rising_prices(len);
    let err = Backtester::default()
        .evaluate_kind(kind, &prices, &mut ThreadRandom)
        .unwrap_err();

    match err {
        ForecastError::InsufficientHistory {
            required,
            available,
            ..
        } => {
            assert_eq!(required, DEFAULT_HOLDOUT + kind.min_history());
            assert_eq!(available, len);
        }
        other => panic!("Expected InsufficientHistory, got {:?}", other),
    }
}

#[rstest]
#[case(ModelKind::Linear, 9)]
#[case(ModelKind::TrendAveraged, 9)]
#[case(ModelKind::WeightedMomentum, 12)]
fn test_backtest_at_minimum_history(#[case] kind: ModelKind, #[case] len: usize) {
    let report = Backtester::default()
        .evaluate_kind(kind, &rising_prices(len), &mut ThreadRandom)
        .unwrap();

    assert_eq!(report.actual.len(), DEFAULT_HOLDOUT);
    assert_eq!(report.predicted.len(), DEFAULT_HOLDOUT);
    assert!(report.rmse >= 0.0);
}

#[test]
fn test_custom_holdout() {
    let backtester = Backtester::new(3).unwrap();
    assert_eq!(backtester.holdout(), 3);

    let report = backtester
        .evaluate_kind(ModelKind::Linear, &rising_prices(5), &mut ThreadRandom)
        .unwrap();
    assert_eq!(report.actual, vec![102.0, 103.0, 104.0]);
    assert_eq!(report.rmse, 0.0);

    assert!(matches!(
        Backtester::new(0),
        Err(ForecastError::InvalidParameter(_))
    ));
}

#[test]
fn test_rmse_properties() {
    let actual = [101.0, 102.5, 99.0, 98.25];
    let predicted = [100.0, 103.0, 101.0, 98.0];

    assert_eq!(calculate_rmse(&actual, &actual).unwrap(), 0.0);
    assert_eq!(
        calculate_rmse(&actual, &predicted).unwrap(),
        calculate_rmse(&predicted, &actual).unwrap()
    );
    // (1 + 0.25 + 4 + 0.0625) / 4
    assert_relative_eq!(
        calculate_rmse(&actual, &predicted).unwrap(),
        (5.3125_f64 / 4.0).sqrt(),
        epsilon = 1e-12
    );
}

#[test]
fn test_rmse_length_mismatch() {
    let err = calculate_rmse(&[1.0; 7], &[1.0; 6]).unwrap_err();
    assert!(matches!(
        err,
        ForecastError::LengthMismatch {
            expected: 7,
            actual: 6
        }
    ));
    assert!(matches!(
        calculate_rmse(&[], &[]),
        Err(ForecastError::InvalidParameter(_))
    ));
}

#[rstest]
#[case(0.0, AccuracyRating::High)]
#[case(0.99, AccuracyRating::High)]
#[case(1.0, AccuracyRating::Medium)]
#[case(2.99, AccuracyRating::Medium)]
#[case(3.0, AccuracyRating::Low)]
#[case(12.5, AccuracyRating::Low)]
fn test_accuracy_rating(#[case] rmse: f64, #[case] expected: AccuracyRating) {
    assert_eq!(AccuracyRating::from_rmse(rmse), expected);
}

#[test]
fn test_report_display() {
    let report = Backtester::default()
        .evaluate_kind(ModelKind::Linear, &rising_prices(11), &mut ThreadRandom)
        .unwrap();
    let text = report.to_string();

    assert!(text.contains("Back-test over 7 held-out days"));
    assert!(text.contains("RMSE:     0.0000"));
    assert!(text.contains("Accuracy: High"));
}
