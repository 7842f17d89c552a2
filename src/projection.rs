use chrono::{DateTime, Utc};
use hourglass_rs::SafeTimeProvider;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::balance::balance_as_of;
use crate::decimal::{Money, Rate};
use crate::snapshot::Snapshot;
use crate::types::{AccountFilter, Scenario, Timeframe};

/// one month-indexed point in a payoff simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyProjection {
    /// display label: "Current" for row 0, then "Month 1", "Month 2", ...
    pub month: String,
    /// total projected owed balance across eligible accounts
    pub balance: Money,
    /// interest accrued over the row's elapsed months
    pub interest: Money,
    /// sum of per-account minimum payments
    pub minimum_payment: Money,
    /// payment above the minimum mandated by the scenario
    pub additional_payment: Money,
    /// minimum plus additional
    pub total_payment: Money,
}

impl Scenario {
    /// monthly payment under this policy, never below the minimum floor
    pub fn payment(&self, balance: Money, base_minimum: Money) -> Money {
        base_minimum.max(balance * self.extra_payment_rate())
    }
}

/// per-account inputs, fixed for every row of one projection call
///
/// each row restarts its simulation from the present balance rather than
/// chaining off the previous row, so these can be derived once per call
/// without changing any output.
struct AccountSim {
    balance: Money,
    monthly_rate: Rate,
    base_minimum: Money,
    payment: Money,
}

/// month-by-month amortization simulator for credit accounts
#[derive(Debug, Clone, Copy)]
pub struct ProjectionEngine {
    scenario: Scenario,
    timeframe: Timeframe,
}

impl ProjectionEngine {
    pub fn new(scenario: Scenario, timeframe: Timeframe) -> Self {
        Self {
            scenario,
            timeframe,
        }
    }

    pub fn scenario(&self) -> Scenario {
        self.scenario
    }

    pub fn timeframe(&self) -> Timeframe {
        self.timeframe
    }

    /// project payoff across eligible accounts as of a date
    ///
    /// eligible accounts are credit accounts passing the filter that currently
    /// owe money; accounts already paid off contribute nothing. the result
    /// always has `timeframe.months() + 1` rows, all-zero when nothing is
    /// eligible.
    pub fn project(
        &self,
        snapshot: &Snapshot,
        filter: &AccountFilter,
        as_of: DateTime<Utc>,
    ) -> Vec<MonthlyProjection> {
        let sims: Vec<AccountSim> = snapshot
            .credit_accounts()
            .filter(|account| filter.matches(&account.id))
            .filter_map(|account| {
                let balance = balance_as_of(snapshot, &account.id, as_of);
                if !balance.is_positive() {
                    return None;
                }
                // 2% of the balance with a floor of 25
                let base_minimum = (balance * dec!(0.02)).max(Money::from_major(25));
                let payment = self.scenario.payment(balance, base_minimum);
                Some(AccountSim {
                    balance,
                    monthly_rate: account.apr.monthly_rate(),
                    base_minimum,
                    payment,
                })
            })
            .collect();

        let months = self.timeframe.months();
        let mut rows = Vec::with_capacity(months as usize + 1);

        for index in 0..=months {
            let mut balance_total = Money::ZERO;
            let mut interest_total = Money::ZERO;
            let mut minimum_payment = Money::ZERO;
            let mut additional_payment = Money::ZERO;

            for sim in &sims {
                let mut current = sim.balance;

                for _ in 0..index {
                    let interest = current * sim.monthly_rate.as_decimal();
                    interest_total += interest;
                    current = current + interest - sim.payment;
                    // owed balance never goes negative; the full payment still counts
                    if current.is_negative() {
                        current = Money::ZERO;
                    }
                }

                balance_total += current;
                minimum_payment += sim.base_minimum;
                additional_payment += sim.payment - sim.base_minimum;
            }

            rows.push(MonthlyProjection {
                month: month_label(index),
                balance: balance_total,
                interest: interest_total,
                minimum_payment,
                additional_payment,
                total_payment: minimum_payment + additional_payment,
            });
        }

        rows
    }

    /// project from the provider's current time
    pub fn project_now(
        &self,
        snapshot: &Snapshot,
        filter: &AccountFilter,
        time: &SafeTimeProvider,
    ) -> Vec<MonthlyProjection> {
        self.project(snapshot, filter, time.now())
    }
}

fn month_label(index: u32) -> String {
    if index == 0 {
        "Current".to_string()
    } else {
        format!("Month {index}")
    }
}
