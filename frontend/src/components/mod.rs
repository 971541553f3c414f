mod app;
mod charts;
mod dashboard;
mod icons;
mod transaction_form;
mod transaction_list;

use std::cell::RefCell;
use std::rc::Rc;

use crate::storage::KeyValueStore;
use crate::store::TransactionStore;

pub use app::App;

pub type BrowserLedger = TransactionStore<Box<dyn KeyValueStore>>;

/// Shared handle to the ledger owned by [`App`].
///
/// Props compare by identity, so passing the handle down never forces a
/// re-render on its own.
#[derive(Clone)]
pub struct LedgerHandle(Rc<RefCell<BrowserLedger>>);

impl LedgerHandle {
    pub fn new(ledger: BrowserLedger) -> Self {
        Self(Rc::new(RefCell::new(ledger)))
    }

    pub fn borrow(&self) -> std::cell::Ref<'_, BrowserLedger> {
        self.0.borrow()
    }

    pub fn borrow_mut(&self) -> std::cell::RefMut<'_, BrowserLedger> {
        self.0.borrow_mut()
    }
}

impl PartialEq for LedgerHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
