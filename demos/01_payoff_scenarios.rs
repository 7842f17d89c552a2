/// payoff scenarios - compare repayment policies over one year
use chrono::{Duration, TimeZone, Utc};
use payoff_engine_rs::{
    Account, AccountFilter, AccountType, Category, LedgerStore, Money, ProjectionEngine, Rate,
    SafeTimeProvider, Scenario, TimeSource, Timeframe, Transaction, TransactionType,
};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let time = SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
    ));

    let mut store = LedgerStore::new();

    let visa = store.add_account(
        Account::builder()
            .name("Visa")
            .account_type(AccountType::Credit)
            .limit(Money::from_major(5_000))
            .apr(Rate::from_percentage(dec!(19.9)))
            .build()?,
        &time,
    )?;

    store.add_transaction(
        Transaction::builder()
            .account_id(visa.as_str())
            .amount(Money::from_major(3_200))
            .tx_type(TransactionType::Credit)
            .category(Category::Other)
            .date(time.now() - Duration::days(30))
            .build()?,
        &time,
    )?;

    let snapshot = store.snapshot();

    for scenario in [Scenario::Current, Scenario::Optimal, Scenario::Aggressive] {
        let engine = ProjectionEngine::new(scenario, Timeframe::TwelveMonths);
        let rows = engine.project_now(&snapshot, &AccountFilter::All, &time);

        println!("--- {scenario:?} ---");
        for row in &rows {
            println!(
                "{:<10} balance {:>10} interest {:>8} payment {:>8}",
                row.month,
                row.balance.round_dp(2).to_string(),
                row.interest.round_dp(2).to_string(),
                row.total_payment.round_dp(2).to_string(),
            );
        }
        println!();
    }

    Ok(())
}
