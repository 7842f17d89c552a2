pub mod balance;
pub mod dates;
pub mod decimal;
pub mod errors;
pub mod events;
pub mod model;
pub mod projection;
pub mod snapshot;
pub mod store;
pub mod types;
pub mod utilization;

// re-export key types
pub use balance::{balance_as_of, current_balance, principal_balance};
pub use decimal::{Money, Rate};
pub use errors::{EngineError, Result};
pub use events::{Event, EventStore};
pub use model::{Account, AccountBuilder, Transaction, TransactionBuilder};
pub use projection::{MonthlyProjection, ProjectionEngine};
pub use snapshot::Snapshot;
pub use store::LedgerStore;
pub use types::{
    AccountFilter, AccountId, AccountType, Category, Scenario, Timeframe, TransactionId,
    TransactionType,
};
pub use utilization::{
    credit_utilization, credit_utilization_percent, current_utilization_percent,
};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
