use tracing::{error, info};

use crate::aggregate::{summarize, Summary};
use crate::error::{LedgerError, Result};
use crate::model::Transaction;
use crate::storage::{KeyValueStore, LedgerStorage};
use crate::validate::{validate, TransactionDraft};

/// The ordered transaction list and its persisted mirror.
///
/// Every successful mutation rewrites the whole storage slot. A mutation
/// whose save fails is undone before the error is returned.
pub struct TransactionStore<S> {
    transactions: Vec<Transaction>,
    storage: LedgerStorage<S>,
}

impl<S: KeyValueStore> TransactionStore<S> {
    pub fn open(storage: LedgerStorage<S>) -> Self {
        let transactions = storage.load();
        info!(count = transactions.len(), "ledger opened");
        Self {
            transactions,
            storage,
        }
    }

    pub fn storage(&self) -> &LedgerStorage<S> {
        &self.storage
    }

    pub fn list(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn summary(&self) -> Summary {
        summarize(&self.transactions)
    }

    pub fn add(&mut self, tx: Transaction) -> Result<()> {
        self.transactions.push(tx);
        if let Err(err) = self.storage.save(&self.transactions) {
            self.transactions.pop();
            error!(error = %err, "could not persist new transaction");
            return Err(err);
        }
        info!(count = self.transactions.len(), "transaction added");
        Ok(())
    }

    /// Validates the draft and appends it. Rejected drafts leave the store as is.
    pub fn submit(&mut self, draft: &TransactionDraft) -> Result<Transaction> {
        let tx = validate(draft)?;
        self.add(tx.clone())?;
        Ok(tx)
    }

    /// Removes the entry at `index`; later entries shift down by one.
    pub fn remove_at(&mut self, index: usize) -> Result<Transaction> {
        let len = self.transactions.len();
        if index >= len {
            return Err(LedgerError::InvalidIndex { index, len });
        }
        let removed = self.transactions.remove(index);
        if let Err(err) = self.storage.save(&self.transactions) {
            self.transactions.insert(index, removed);
            error!(error = %err, index, "could not persist removal");
            return Err(err);
        }
        info!(index, count = self.transactions.len(), "transaction removed");
        Ok(removed)
    }
}
