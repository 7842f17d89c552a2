use chrono::{DateTime, Utc};
use hourglass_rs::SafeTimeProvider;
use rust_decimal::Decimal;

use crate::balance::balance_as_of;
use crate::decimal::{Money, Rate};
use crate::snapshot::Snapshot;

/// portfolio-wide share of available credit in use, as a ratio
///
/// only positive owed balances count toward usage; an overpaid account
/// contributes zero, never negative. a portfolio with no credit limit at all
/// has zero utilization by definition, not a division fault.
pub fn credit_utilization(snapshot: &Snapshot, as_of: DateTime<Utc>) -> Rate {
    let mut total_limit = Money::ZERO;
    let mut total_used = Money::ZERO;

    for account in snapshot.credit_accounts() {
        total_limit += account.limit;
        total_used += balance_as_of(snapshot, &account.id, as_of).max(Money::ZERO);
    }

    if total_limit.is_zero() {
        return Rate::ZERO;
    }

    Rate::from_decimal(total_used.as_decimal() / total_limit.as_decimal())
}

/// utilization as a percentage, e.g. `50` for half the portfolio limit in use
pub fn credit_utilization_percent(snapshot: &Snapshot, as_of: DateTime<Utc>) -> Decimal {
    credit_utilization(snapshot, as_of).as_percentage()
}

/// utilization percentage as of the provider's current time
pub fn current_utilization_percent(snapshot: &Snapshot, time: &SafeTimeProvider) -> Decimal {
    credit_utilization_percent(snapshot, time.now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Account, Transaction};
    use crate::types::{AccountType, Category, TransactionType};
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn credit_account(id: &str, limit: i64, apr: Decimal) -> Account {
        Account::builder()
            .id(id)
            .name(format!("{id} card"))
            .account_type(AccountType::Credit)
            .limit(Money::from_major(limit))
            .apr(Rate::from_percentage(apr))
            .build()
            .unwrap()
    }

    fn charge(id: &str, account_id: &str, amount: i64, on: DateTime<Utc>) -> Transaction {
        Transaction::builder()
            .id(id)
            .account_id(account_id)
            .amount(Money::from_major(amount))
            .tx_type(TransactionType::Credit)
            .category(Category::Shopping)
            .date(on)
            .build()
            .unwrap()
    }

    #[test]
    fn test_no_credit_accounts_is_zero() {
        let accounts = vec![Account::builder()
            .id("checking")
            .name("Checking")
            .account_type(AccountType::Debit)
            .build()
            .unwrap()];
        let transactions = vec![];
        let snapshot = Snapshot::new(&accounts, &transactions);

        assert_eq!(credit_utilization_percent(&snapshot, date(2024, 1, 1)), dec!(0));
    }

    #[test]
    fn test_zero_total_limit_is_zero() {
        let accounts = vec![credit_account("store-card", 0, dec!(24))];
        let transactions = vec![charge("t1", "store-card", 100, date(2024, 1, 1))];
        let snapshot = Snapshot::new(&accounts, &transactions);

        assert_eq!(credit_utilization_percent(&snapshot, date(2024, 1, 1)), dec!(0));
    }

    #[test]
    fn test_half_used_is_fifty_percent() {
        let t0 = date(2024, 1, 1);
        let accounts = vec![credit_account("visa", 1_000, dec!(12))];
        let transactions = vec![charge("t1", "visa", 500, t0)];
        let snapshot = Snapshot::new(&accounts, &transactions);

        assert_eq!(credit_utilization_percent(&snapshot, t0), dec!(50));
    }

    #[test]
    fn test_overpaid_account_contributes_zero() {
        let t0 = date(2024, 1, 1);
        let accounts = vec![
            credit_account("visa", 1_000, dec!(12)),
            credit_account("amex", 1_000, dec!(18)),
        ];
        let transactions = vec![
            charge("t1", "visa", 500, t0),
            // amex overpaid by 300: must not offset visa usage
            Transaction::builder()
                .id("t2")
                .account_id("amex")
                .amount(Money::from_major(300))
                .tx_type(TransactionType::Debit)
                .category(Category::Other)
                .date(t0)
                .build()
                .unwrap(),
        ];
        let snapshot = Snapshot::new(&accounts, &transactions);

        // 500 used of 2000 total limit
        assert_eq!(credit_utilization_percent(&snapshot, t0), dec!(25));
    }

    #[test]
    fn test_aggregates_across_accounts() {
        let t0 = date(2024, 1, 1);
        let accounts = vec![
            credit_account("visa", 1_000, dec!(0)),
            credit_account("amex", 3_000, dec!(0)),
        ];
        let transactions = vec![
            charge("t1", "visa", 400, t0),
            charge("t2", "amex", 600, t0),
        ];
        let snapshot = Snapshot::new(&accounts, &transactions);

        // 1000 used of 4000
        assert_eq!(credit_utilization_percent(&snapshot, t0), dec!(25));
    }
}
