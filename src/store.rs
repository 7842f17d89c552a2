use std::fs;
use std::path::Path;

use hourglass_rs::SafeTimeProvider;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::errors::{EngineError, Result};
use crate::events::{Event, EventStore};
use crate::model::{Account, Transaction};
use crate::snapshot::Snapshot;
use crate::types::{AccountId, TransactionId};

/// persisted document shape: the accounts and transactions collections
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct LedgerDocument {
    #[serde(default)]
    accounts: Vec<Account>,
    #[serde(default)]
    transactions: Vec<Transaction>,
}

/// single injected handle over the persisted account/transaction collections
///
/// owns record lifecycle (create, update, delete with cascade) and load/save;
/// the calculators only ever see `snapshot()` views and cannot mutate through
/// them.
#[derive(Debug, Default)]
pub struct LedgerStore {
    accounts: Vec<Account>,
    transactions: Vec<Transaction>,
    events: EventStore,
}

impl LedgerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// deserialize a store from a json document
    pub fn from_json(json: &str) -> Result<Self> {
        let doc: LedgerDocument = serde_json::from_str(json)?;
        debug!(
            accounts = doc.accounts.len(),
            transactions = doc.transactions.len(),
            "ledger document parsed"
        );
        Ok(Self {
            accounts: doc.accounts,
            transactions: doc.transactions,
            events: EventStore::new(),
        })
    }

    /// serialize to a pretty-printed json document
    pub fn to_json_pretty(&self) -> Result<String> {
        let doc = LedgerDocument {
            accounts: self.accounts.clone(),
            transactions: self.transactions.clone(),
        };
        Ok(serde_json::to_string_pretty(&doc)?)
    }

    /// load a store from a json file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let store = Self::from_json(&json)?;
        debug!(path = %path.display(), "ledger loaded");
        Ok(store)
    }

    /// save the store to a json file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_json_pretty()?)?;
        debug!(path = %path.display(), "ledger saved");
        Ok(())
    }

    /// immutable view for the calculators
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot::new(&self.accounts, &self.transactions)
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// add an account, assigning a fresh id when the record carries none
    pub fn add_account(
        &mut self,
        mut account: Account,
        time: &SafeTimeProvider,
    ) -> Result<AccountId> {
        account.validate()?;
        if account.id.is_empty() {
            account.id = Uuid::new_v4().to_string();
        }

        self.events.emit(Event::AccountAdded {
            account_id: account.id.clone(),
            name: account.name.clone(),
            account_type: account.account_type,
            timestamp: time.now(),
        });
        debug!(account_id = %account.id, "account added");

        let id = account.id.clone();
        self.accounts.push(account);
        Ok(id)
    }

    /// replace an existing account record by id
    pub fn update_account(&mut self, account: Account, time: &SafeTimeProvider) -> Result<()> {
        account.validate()?;
        let slot = self
            .accounts
            .iter_mut()
            .find(|a| a.id == account.id)
            .ok_or_else(|| EngineError::UnknownAccount {
                id: account.id.clone(),
            })?;

        self.events.emit(Event::AccountUpdated {
            account_id: account.id.clone(),
            timestamp: time.now(),
        });
        debug!(account_id = %account.id, "account updated");

        *slot = account;
        Ok(())
    }

    /// remove an account and cascade-delete its transactions
    pub fn remove_account(&mut self, id: &str, time: &SafeTimeProvider) -> Result<()> {
        let position = self
            .accounts
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| EngineError::UnknownAccount { id: id.to_string() })?;
        self.accounts.remove(position);

        let before = self.transactions.len();
        self.transactions.retain(|t| t.account_id != id);
        let transactions_removed = before - self.transactions.len();

        self.events.emit(Event::AccountRemoved {
            account_id: id.to_string(),
            transactions_removed,
            timestamp: time.now(),
        });
        debug!(account_id = %id, transactions_removed, "account removed");
        Ok(())
    }

    /// record a transaction, assigning a fresh id when the record carries none
    ///
    /// a transaction referencing an unknown account is accepted: dangling
    /// references are tolerated downstream by contributing to no balance.
    pub fn add_transaction(
        &mut self,
        mut transaction: Transaction,
        time: &SafeTimeProvider,
    ) -> Result<TransactionId> {
        transaction.validate()?;
        if transaction.id.is_empty() {
            transaction.id = Uuid::new_v4().to_string();
        }

        self.events.emit(Event::TransactionRecorded {
            transaction_id: transaction.id.clone(),
            account_id: transaction.account_id.clone(),
            amount: transaction.amount,
            direction: transaction.tx_type,
            timestamp: time.now(),
        });
        debug!(transaction_id = %transaction.id, "transaction recorded");

        let id = transaction.id.clone();
        self.transactions.push(transaction);
        Ok(id)
    }

    /// remove a single transaction by id
    pub fn remove_transaction(&mut self, id: &str, time: &SafeTimeProvider) -> Result<()> {
        let position = self
            .transactions
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| EngineError::UnknownTransaction { id: id.to_string() })?;
        self.transactions.remove(position);

        self.events.emit(Event::TransactionRemoved {
            transaction_id: id.to_string(),
            timestamp: time.now(),
        });
        debug!(transaction_id = %id, "transaction removed");
        Ok(())
    }

    /// events emitted since the last drain
    pub fn events(&self) -> &[Event] {
        self.events.events()
    }

    /// drain pending events
    pub fn take_events(&mut self) -> Vec<Event> {
        self.events.take_events()
    }
}
