use crate::model::{Account, Transaction};

/// immutable view over the store's collections
///
/// all calculators read through a snapshot and never mutate it; the owner is
/// responsible for handing out a consistent pair of collections per call.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    accounts: &'a [Account],
    transactions: &'a [Transaction],
}

impl<'a> Snapshot<'a> {
    pub fn new(accounts: &'a [Account], transactions: &'a [Transaction]) -> Self {
        Self {
            accounts,
            transactions,
        }
    }

    /// all accounts
    pub fn accounts(&self) -> &'a [Account] {
        self.accounts
    }

    /// all transactions
    pub fn transactions(&self) -> &'a [Transaction] {
        self.transactions
    }

    /// look up an account by id
    pub fn account(&self, id: &str) -> Option<&'a Account> {
        self.accounts.iter().find(|a| a.id == id)
    }

    /// look up a transaction by id
    pub fn transaction(&self, id: &str) -> Option<&'a Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    /// transactions belonging to one account
    pub fn transactions_for(&self, account_id: &'a str) -> impl Iterator<Item = &'a Transaction> {
        self.transactions
            .iter()
            .filter(move |t| t.account_id == account_id)
    }

    /// revolving credit accounts only
    pub fn credit_accounts(&self) -> impl Iterator<Item = &'a Account> {
        self.accounts.iter().filter(|a| a.is_credit())
    }
}
