/// quick start - minimal example to get started
use chrono::{Duration, TimeZone, Utc};
use payoff_engine_rs::{
    current_balance, current_utilization_percent, Account, AccountType, Category, Money, Rate,
    SafeTimeProvider, TimeSource, Transaction, TransactionType,
};
use payoff_engine_rs::LedgerStore;
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let time = SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
    ));

    let mut store = LedgerStore::new();

    // a credit card with a $1,000 limit at 18% APR
    let visa = store.add_account(
        Account::builder()
            .name("Visa")
            .account_type(AccountType::Credit)
            .limit(Money::from_major(1_000))
            .apr(Rate::from_percentage(dec!(18)))
            .build()?,
        &time,
    )?;

    // a $500 charge three months ago
    store.add_transaction(
        Transaction::builder()
            .account_id(visa.as_str())
            .amount(Money::from_major(500))
            .tx_type(TransactionType::Credit)
            .category(Category::Shopping)
            .date(time.now() - Duration::days(90))
            .details("new laptop")
            .build()?,
        &time,
    )?;

    let snapshot = store.snapshot();

    println!("balance owed:  {}", current_balance(&snapshot, &visa, &time).round_dp(2));
    println!("utilization:   {}%", current_utilization_percent(&snapshot, &time).round_dp(2));

    Ok(())
}
