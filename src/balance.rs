use chrono::{DateTime, Utc};
use hourglass_rs::SafeTimeProvider;

use crate::dates::whole_months_between;
use crate::decimal::Money;
use crate::snapshot::Snapshot;

/// sum of an account's transactions dated at or before `as_of`, before any
/// interest growth; credit entries add, debit entries subtract
pub fn principal_balance(snapshot: &Snapshot, account_id: &str, as_of: DateTime<Utc>) -> Money {
    snapshot
        .transactions()
        .iter()
        .filter(|t| t.account_id == account_id && t.date <= as_of)
        .fold(Money::ZERO, |acc, t| acc + t.signed_amount())
}

/// account balance as of a date
///
/// for a credit account owing money (positive principal) with a non-zero APR,
/// the principal is uplifted by `(1 + apr/12)^n` where `n` is the whole months
/// between the earliest qualifying transaction and `as_of`. interest is
/// anchored to the oldest recorded activity, a deliberate simplification of
/// the dashboard's accrual model; it does not re-anchor per transaction.
///
/// unknown ids and accounts with no qualifying transactions yield zero; debit
/// accounts and non-positive principals pass through unmodified.
pub fn balance_as_of(snapshot: &Snapshot, account_id: &str, as_of: DateTime<Utc>) -> Money {
    let account = match snapshot.account(account_id) {
        Some(account) => account,
        None => return Money::ZERO,
    };

    let principal = principal_balance(snapshot, account_id, as_of);

    if !account.is_credit() || !principal.is_positive() || account.apr.is_zero() {
        return principal;
    }

    let earliest = snapshot
        .transactions()
        .iter()
        .filter(|t| t.account_id == account_id && t.date <= as_of)
        .map(|t| t.date)
        .min();

    match earliest {
        Some(start) => {
            let months = whole_months_between(start, as_of);
            principal.compound(account.apr.monthly_rate(), months)
        }
        None => principal,
    }
}

/// account balance as of the provider's current time
pub fn current_balance(snapshot: &Snapshot, account_id: &str, time: &SafeTimeProvider) -> Money {
    balance_as_of(snapshot, account_id, time.now())
}
