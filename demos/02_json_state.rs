/// json state - persist and restore a ledger
use chrono::{TimeZone, Utc};
use payoff_engine_rs::{
    Account, AccountType, Category, LedgerStore, Money, Rate, SafeTimeProvider, TimeSource,
    Transaction, TransactionType,
};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let time = SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
    ));

    let mut store = LedgerStore::new();

    let checking = store.add_account(
        Account::builder()
            .name("Checking")
            .account_type(AccountType::Debit)
            .build()?,
        &time,
    )?;

    store.add_transaction(
        Transaction::builder()
            .account_id(checking.as_str())
            .amount(Money::from_major(2_400))
            .tx_type(TransactionType::Credit)
            .category(Category::Income)
            .date(time.now())
            .details("paycheck")
            .build()?,
        &time,
    )?;

    store.add_account(
        Account::builder()
            .name("Visa")
            .account_type(AccountType::Credit)
            .limit(Money::from_major(1_000))
            .apr(Rate::from_percentage(dec!(18)))
            .build()?,
        &time,
    )?;

    // serialize with the dashboard's persisted field names
    let json = store.to_json_pretty()?;
    println!("{json}");

    // restore and verify
    let restored = LedgerStore::from_json(&json)?;
    println!(
        "restored {} accounts, {} transactions",
        restored.accounts().len(),
        restored.transactions().len()
    );

    Ok(())
}
