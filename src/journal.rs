//! Journal façade over the record store.

use crate::error::Result;
use crate::store::RecordStore;
use crate::types::Record;
use crate::validate::shop_equals_ci;
use tracing::debug;

/// Journal configuration.
#[derive(Clone, Debug)]
pub struct JournalConfig {
    /// Record slots to reserve before the first add. Zero leaves the
    /// first allocation to the store's own growth policy.
    pub initial_capacity: usize,
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 0,
        }
    }
}

/// The user-facing journal: an owned record store plus the three
/// operations the shell exposes.
///
/// Validation is the caller's job: the shell runs the rules in
/// [`crate::validate`] before calling [`add`](Journal::add). The journal
/// only enforces structural contracts (bounds, allocation).
#[derive(Debug, Default)]
pub struct Journal {
    store: RecordStore,
}

impl Journal {
    /// Empty journal with no up-front allocation.
    pub fn new() -> Self {
        Self {
            store: RecordStore::new(),
        }
    }

    /// Empty journal with `config.initial_capacity` slots pre-reserved.
    pub fn with_config(config: JournalConfig) -> Result<Self> {
        let mut store = RecordStore::new();
        if config.initial_capacity > 0 {
            store.reserve(config.initial_capacity)?;
        }
        Ok(Self { store })
    }

    /// Number of records currently held.
    pub fn count(&self) -> usize {
        self.store.len()
    }

    /// True when the journal holds no records.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Add a record. The fields are assumed to have passed validation;
    /// the only failure mode left is allocation exhaustion, which leaves
    /// the journal unchanged.
    pub fn add(&mut self, shop: &str, discount: u8, expiry: &str) -> Result<()> {
        self.store.push_back(Record::new(shop, discount, expiry))?;
        debug!(shop, discount, expiry, total = self.store.len(), "added discount");
        Ok(())
    }

    /// Remove every record whose shop matches `shop`, ignoring ASCII case.
    ///
    /// The remaining records keep their relative order. Returns the number
    /// removed; zero when nothing matched or the journal is empty.
    pub fn delete_by_shop(&mut self, shop: &str) -> usize {
        let mut removed = 0;
        let mut index = 0;
        while index < self.store.len() {
            let is_match = self
                .store
                .get(index)
                .map_or(false, |record| shop_equals_ci(&record.shop, shop));
            if is_match {
                // Bounds were just checked, so the remove cannot fail.
                let _ = self.store.remove_at(index);
                removed += 1;
            } else {
                index += 1;
            }
        }
        if removed > 0 {
            debug!(shop, removed, remaining = self.store.len(), "deleted discounts");
        }
        removed
    }

    /// Sort the journal by shop name and return the records in that order.
    ///
    /// The reordering is permanent, not a view: callers that depend on
    /// insertion order must not call this.
    pub fn list_sorted(&mut self) -> &[Record] {
        self.store.sort_by_shop();
        self.store.records()
    }

    /// Read-only view of the records in their current order.
    pub fn records(&self) -> &[Record] {
        self.store.records()
    }
}
