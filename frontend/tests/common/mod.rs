use pocket_ledger::config::AppConfig;
use pocket_ledger::storage::{LedgerStorage, MemoryStorage};
use pocket_ledger::{TransactionDraft, TransactionStore};

pub fn open_store(backend: &MemoryStorage) -> TransactionStore<MemoryStorage> {
    TransactionStore::open(LedgerStorage::new(backend.clone(), &AppConfig::default()))
}

pub fn draft(amount: &str, description: &str, category: &str) -> TransactionDraft {
    TransactionDraft::new(amount, description, category)
}
