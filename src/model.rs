use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{EngineError, Result};
use crate::types::{AccountId, AccountType, Category, TransactionId, TransactionType};

/// a named ledger bucket, either debit (money held) or credit (money owed)
///
/// field names follow the persisted dashboard schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: AccountId,
    pub name: String,
    pub account_type: AccountType,
    /// credit limit; zero for debit accounts
    pub limit: Money,
    /// annual percentage rate; zero for debit accounts
    pub apr: Rate,
}

impl Account {
    /// builder for new accounts
    pub fn builder() -> AccountBuilder {
        AccountBuilder::new()
    }

    /// check whether this is a revolving credit account
    pub fn is_credit(&self) -> bool {
        self.account_type == AccountType::Credit
    }

    /// validate the record before it enters a store
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(EngineError::InvalidAccount {
                message: "account name must not be empty".to_string(),
            });
        }
        if self.limit.is_negative() {
            return Err(EngineError::InvalidAccount {
                message: format!("credit limit must not be negative: {}", self.limit),
            });
        }
        if self.apr.as_decimal().is_sign_negative() {
            return Err(EngineError::InvalidAccount {
                message: format!("apr must not be negative: {}", self.apr),
            });
        }
        Ok(())
    }
}

/// builder for account records
#[derive(Debug, Default)]
pub struct AccountBuilder {
    id: Option<AccountId>,
    name: Option<String>,
    account_type: Option<AccountType>,
    limit: Option<Money>,
    apr: Option<Rate>,
}

impl AccountBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<AccountId>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn account_type(mut self, account_type: AccountType) -> Self {
        self.account_type = Some(account_type);
        self
    }

    pub fn limit(mut self, limit: Money) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn apr(mut self, apr: Rate) -> Self {
        self.apr = Some(apr);
        self
    }

    pub fn build(self) -> Result<Account> {
        let account_type = self.account_type.unwrap_or(AccountType::Debit);

        // limit and apr are only meaningful on credit accounts
        let (limit, apr) = match account_type {
            AccountType::Credit => (
                self.limit.unwrap_or(Money::ZERO),
                self.apr.unwrap_or(Rate::ZERO),
            ),
            AccountType::Debit => (Money::ZERO, Rate::ZERO),
        };

        let account = Account {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            account_type,
            limit,
            apr,
        };
        account.validate()?;
        Ok(account)
    }
}

/// a monetary event against one account on a given date
///
/// `amount` is always a non-negative magnitude; direction comes from `tx_type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: TransactionId,
    pub account_id: AccountId,
    pub amount: Money,
    #[serde(rename = "type")]
    pub tx_type: TransactionType,
    pub category: Category,
    pub date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl Transaction {
    /// builder for new transactions
    pub fn builder() -> TransactionBuilder {
        TransactionBuilder::new()
    }

    /// amount with direction applied: credit increases the balance, debit decreases it
    pub fn signed_amount(&self) -> Money {
        match self.tx_type {
            TransactionType::Credit => self.amount,
            TransactionType::Debit => -self.amount,
        }
    }

    /// validate the record before it enters a store
    pub fn validate(&self) -> Result<()> {
        if self.amount.is_negative() {
            return Err(EngineError::InvalidAmount {
                amount: self.amount,
            });
        }
        if self.account_id.is_empty() {
            return Err(EngineError::InvalidTransaction {
                message: "transaction must reference an account id".to_string(),
            });
        }
        Ok(())
    }
}

/// builder for transaction records
#[derive(Debug, Default)]
pub struct TransactionBuilder {
    id: Option<TransactionId>,
    account_id: Option<AccountId>,
    amount: Option<Money>,
    tx_type: Option<TransactionType>,
    category: Option<Category>,
    date: Option<DateTime<Utc>>,
    details: Option<String>,
}

impl TransactionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<TransactionId>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn account_id(mut self, account_id: impl Into<AccountId>) -> Self {
        self.account_id = Some(account_id.into());
        self
    }

    pub fn amount(mut self, amount: Money) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn tx_type(mut self, tx_type: TransactionType) -> Self {
        self.tx_type = Some(tx_type);
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn date(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }

    pub fn details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn build(self) -> Result<Transaction> {
        let date = self.date.ok_or_else(|| EngineError::InvalidTransaction {
            message: "transaction date is required".to_string(),
        })?;

        let transaction = Transaction {
            id: self.id.unwrap_or_default(),
            account_id: self.account_id.unwrap_or_default(),
            amount: self.amount.unwrap_or(Money::ZERO),
            tx_type: self.tx_type.unwrap_or(TransactionType::Debit),
            category: self.category.unwrap_or_default(),
            date,
            details: self.details,
        };
        transaction.validate()?;
        Ok(transaction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_debit_account_normalizes_credit_fields() {
        let account = Account::builder()
            .id("acct-1")
            .name("Checking")
            .account_type(AccountType::Debit)
            .limit(Money::from_major(5_000))
            .apr(Rate::from_percentage(dec!(20)))
            .build()
            .unwrap();

        assert_eq!(account.limit, Money::ZERO);
        assert_eq!(account.apr, Rate::ZERO);
        assert!(!account.is_credit());
    }

    #[test]
    fn test_empty_name_rejected() {
        let err = Account::builder()
            .id("acct-1")
            .name("   ")
            .account_type(AccountType::Credit)
            .build();
        assert!(err.is_err());
    }

    #[test]
    fn test_negative_amount_rejected() {
        let err = Transaction::builder()
            .id("tx-1")
            .account_id("acct-1")
            .amount(Money::from_major(-10))
            .tx_type(TransactionType::Debit)
            .date(date(2024, 1, 1))
            .build();
        assert!(err.is_err());
    }

    #[test]
    fn test_signed_amount() {
        let tx = Transaction::builder()
            .id("tx-1")
            .account_id("acct-1")
            .amount(Money::from_major(75))
            .tx_type(TransactionType::Debit)
            .category(Category::Food)
            .date(date(2024, 1, 1))
            .build()
            .unwrap();
        assert_eq!(tx.signed_amount(), Money::from_major(-75));

        let tx = Transaction {
            tx_type: TransactionType::Credit,
            ..tx
        };
        assert_eq!(tx.signed_amount(), Money::from_major(75));
    }

    #[test]
    fn test_persisted_field_names() {
        let account = Account::builder()
            .id("acct-1")
            .name("Visa")
            .account_type(AccountType::Credit)
            .limit(Money::from_major(1_000))
            .apr(Rate::from_percentage(dec!(18)))
            .build()
            .unwrap();

        let json = serde_json::to_value(&account).unwrap();
        assert!(json.get("accountType").is_some());
        assert!(json.get("limit").is_some());
        assert!(json.get("apr").is_some());

        let tx = Transaction::builder()
            .id("tx-1")
            .account_id("acct-1")
            .amount(Money::from_major(42))
            .tx_type(TransactionType::Credit)
            .date(date(2024, 1, 1))
            .build()
            .unwrap();

        let json = serde_json::to_value(&tx).unwrap();
        assert!(json.get("accountId").is_some());
        assert!(json.get("type").is_some());
        assert!(json.get("details").is_none()); // omitted when absent
    }
}
