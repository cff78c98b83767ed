/// portfolio - investment lifecycle, history and dashboard summary
use chrono::{Duration, TimeZone, Utc};
use rust_decimal_macros::dec;
use term_deposit_rs::display::{format_money, format_timestamp, Currency, TimeFormat};
use term_deposit_rs::{
    InvestmentDraft, Money, Portfolio, ProjectionEngine, Rate, SafeTimeProvider, TimeSource,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let time = SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap(),
    ));
    let controller = time.test_control().unwrap();

    let mut portfolio = Portfolio::new();
    let deposit = portfolio.create(
        InvestmentDraft {
            name: "Plazo fijo".to_string(),
            initial_amount: Money::from_major(500_000),
            annual_return: Rate::from_percentage(dec!(110)),
            months: 3,
            kind: "Plazo Fijo".to_string(),
            link: None,
        },
        &time,
    )?;
    portfolio.create(
        InvestmentDraft {
            name: "Bonos".to_string(),
            initial_amount: Money::from_major(150_000),
            annual_return: Rate::from_percentage(dec!(45)),
            months: 12,
            kind: "Bonos".to_string(),
            link: Some("https://example.com/bonos".to_string()),
        },
        &time,
    )?;

    controller.advance(Duration::days(30));
    portfolio.withdraw(deposit, Money::from_major(100_000), &time)?;

    // a rejected withdrawal is logged and leaves the portfolio untouched
    if let Err(err) = portfolio.withdraw(deposit, Money::from_major(1_000_000), &time) {
        println!("rejected: {}", err);
    }

    let summary = portfolio.summary();
    println!("total invested: {}", format_money(summary.total_invested, Currency::Ars));
    println!("expected return: {}", format_money(summary.total_expected_return, Currency::Ars));
    for (kind, amount) in &summary.allocation {
        println!("  {}: {}", kind, format_money(*amount, Currency::Ars));
    }

    println!("\nhistory:");
    for entry in portfolio.history().newest_first() {
        println!(
            "  {} {:?} {} {}",
            format_timestamp(entry.timestamp, TimeFormat::H24),
            entry.kind,
            entry.investment_name,
            format_money(entry.affected_amount, Currency::Ars)
        );
    }

    let projection = portfolio.get(deposit)?.project(&ProjectionEngine::default(), 30, true);
    println!("\n{}", projection.json());

    Ok(())
}
