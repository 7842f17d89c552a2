use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::types::{AccountId, AccountType, TransactionId, TransactionType};

/// all events emitted by ledger store mutations
///
/// the calculators are pure and never emit; the UI layer drains these for
/// display or change notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    AccountAdded {
        account_id: AccountId,
        name: String,
        account_type: AccountType,
        timestamp: DateTime<Utc>,
    },
    AccountUpdated {
        account_id: AccountId,
        timestamp: DateTime<Utc>,
    },
    AccountRemoved {
        account_id: AccountId,
        /// transactions deleted along with the account
        transactions_removed: usize,
        timestamp: DateTime<Utc>,
    },
    TransactionRecorded {
        transaction_id: TransactionId,
        account_id: AccountId,
        amount: Money,
        direction: TransactionType,
        timestamp: DateTime<Utc>,
    },
    TransactionRemoved {
        transaction_id: TransactionId,
        timestamp: DateTime<Utc>,
    },
}

/// event store for collecting events during operations
#[derive(Debug, Default)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
        }
    }

    pub fn emit(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_events_drains() {
        let mut store = EventStore::new();
        store.emit(Event::TransactionRemoved {
            transaction_id: "t1".to_string(),
            timestamp: Utc::now(),
        });

        assert_eq!(store.events().len(), 1);
        let taken = store.take_events();
        assert_eq!(taken.len(), 1);
        assert!(store.events().is_empty());
    }
}
