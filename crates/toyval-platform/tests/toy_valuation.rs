//! End-to-end evaluation of graphs built with `toyval-graph`.

use approx::assert_relative_eq;
use rust_decimal_macros::dec;
use std::sync::Arc;

use toyval_core::{Currency, Date, Direction};
use toyval_graph::{GraphError, Session};
use toyval_platform::LocalPlatform;
use toyval_traits::{Cell, PlatformError, ValuationSpecification};

fn session() -> (Arc<LocalPlatform>, Session) {
    let platform = Arc::new(LocalPlatform::new());
    (platform.clone(), Session::new(platform))
}

#[tokio::test]
async fn test_ninety_day_value_every_day_of_year() {
    let (_, session) = session();
    let mut today = Date::from_ymd(2024, 1, 1).unwrap();

    for _ in 0..366 {
        let maturity = session.maturity_date(today, "90d", "NoHolidays");
        let product =
            session.create_single_cashflow_product(Direction::Receive, dec!(1000000), Currency::USD, &maturity);
        let model = session.add_simple_discount_curve_to_model(None, Currency::USD, today, 0.01);
        let value = session.value_product(&model, &product, ValuationSpecification::ClosedForm, "Value");

        let table = session.evaluate(&value).await.unwrap();
        let pv = table.get(0, 1).and_then(Cell::as_number).unwrap();
        assert_eq!((pv * 100.0).round() / 100.0, 997_549.50, "today = {today}");

        today = today.add_days(1);
    }
}

#[tokio::test]
async fn test_multi_currency_model() {
    let (platform, session) = session();
    let today = Date::from_ymd(2025, 3, 3).unwrap();

    let usd = session.add_simple_discount_curve_to_model(None, Currency::USD, today, 0.01);
    let both = session.add_simple_discount_curve_to_model(Some(&usd), Currency::EUR, today, 0.03);
    let product =
        session.create_single_cashflow_product(Direction::Pay, dec!(100), Currency::EUR, today.add_days(365));
    let value = session.value_product(&both, &product, ValuationSpecification::ClosedForm, "Value");

    let pv = session
        .evaluate(&value.sub_array(0, 1))
        .await
        .unwrap()
        .get(0, 0)
        .and_then(Cell::as_number)
        .unwrap();
    assert_relative_eq!(pv, -100.0 / 1.03, epsilon = 1e-9);
    assert_eq!(platform.evaluations(), 1);
}

#[tokio::test]
async fn test_new_york_adjustment_applies() {
    let (_, session) = session();
    // 2025-09-28 + 90 days lands on Saturday 2025-12-27; ModFoll rolls to Monday.
    let today = Date::from_ymd(2025, 9, 28).unwrap();
    let maturity = session.maturity_date(today, "90d", "NewYorkModFoll");

    let table = session.evaluate(&maturity).await.unwrap();
    assert_eq!(
        table.get(0, 0).and_then(Cell::as_date),
        Some(Date::from_ymd(2025, 12, 29).unwrap())
    );
}

#[tokio::test]
async fn test_unknown_convention_surfaces_as_platform_error() {
    let (platform, session) = session();
    let today = Date::from_ymd(2025, 1, 15).unwrap();
    let maturity = session.maturity_date(today, "90d", "Atlantis");

    let err = session.evaluate(&maturity).await.unwrap_err();
    assert!(matches!(
        err,
        GraphError::Platform(PlatformError::UnknownConvention(ref name)) if name == "Atlantis"
    ));
    assert_eq!(platform.failures(), 1);
}
