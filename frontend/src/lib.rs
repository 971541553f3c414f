//! Pocket Ledger: a browser-side income and expense tracker.
//!
//! The ledger lives in memory, mirrored to `localStorage` after every change.
//! Totals and chart geometry are pure functions of the transaction list, and
//! the Yew components in [`components`] only project them.

pub mod aggregate;
pub mod chart;
pub mod components;
pub mod config;
pub mod error;
pub mod format;
pub mod identity;
pub mod logging;
pub mod model;
pub mod storage;
pub mod store;
pub mod validate;
pub mod view;

pub use aggregate::{summarize, CategoryTotal, Summary};
pub use error::{LedgerError, Result, ValidationError};
pub use model::{Transaction, INCOME_CATEGORY};
pub use store::TransactionStore;
pub use validate::{validate, TransactionDraft};

/// Installs logging with the default filter.
pub fn init() {
    logging::init_tracing(config::AppConfig::default().log_filter);
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
