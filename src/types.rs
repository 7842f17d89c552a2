use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::errors::EngineError;

/// unique identifier for an account, opaque and never reused
pub type AccountId = String;

/// unique identifier for a transaction
pub type TransactionId = String;

/// account kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    /// checking/cash style account, balance is money held
    Debit,
    /// revolving credit account, positive balance is money owed
    Credit,
}

/// transaction direction; the amount itself is always a non-negative magnitude
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// decreases the owning account's balance
    Debit,
    /// increases the owning account's balance
    Credit,
}

/// spending category, with a catch-all for free-form values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Category {
    Housing,
    Food,
    Transportation,
    Utilities,
    Entertainment,
    Healthcare,
    Shopping,
    Education,
    Income,
    #[default]
    #[serde(other)]
    Other,
}

/// repayment policy for payoff projections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scenario {
    /// minimum payments only
    Current,
    /// pay at least 5% of the present balance
    Optimal,
    /// pay at least 10% of the present balance
    Aggressive,
}

impl Scenario {
    /// share of the present balance targeted each month, on top of the minimum floor
    pub fn extra_payment_rate(&self) -> Decimal {
        match self {
            Scenario::Current => Decimal::ZERO,
            Scenario::Optimal => dec!(0.05),
            Scenario::Aggressive => dec!(0.10),
        }
    }
}

/// projection horizon, from the dashboard's timeframe selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Timeframe {
    SixMonths,
    TwelveMonths,
    TwentyFourMonths,
}

impl Timeframe {
    /// number of simulated months
    pub fn months(&self) -> u32 {
        match self {
            Timeframe::SixMonths => 6,
            Timeframe::TwelveMonths => 12,
            Timeframe::TwentyFourMonths => 24,
        }
    }
}

impl TryFrom<u32> for Timeframe {
    type Error = EngineError;

    fn try_from(months: u32) -> Result<Self, Self::Error> {
        match months {
            6 => Ok(Timeframe::SixMonths),
            12 => Ok(Timeframe::TwelveMonths),
            24 => Ok(Timeframe::TwentyFourMonths),
            _ => Err(EngineError::InvalidTimeframe { months }),
        }
    }
}

/// account selection for projections
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountFilter {
    /// every credit account in the snapshot
    All,
    /// a single account by id
    One(AccountId),
}

impl AccountFilter {
    /// check whether an account id passes the filter
    pub fn matches(&self, account_id: &str) -> bool {
        match self {
            AccountFilter::All => true,
            AccountFilter::One(id) => id == account_id,
        }
    }
}
