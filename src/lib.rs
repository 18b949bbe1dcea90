//! # Discount Journal
//!
//! An interactive journal of shop discount records, held entirely in
//! memory for the lifetime of one process run.
//!
//! ## Core Concepts
//!
//! - **Records**: One discount entry each, with shop name, percent, and expiry date
//! - **RecordStore**: An owned, growable, ordered sequence of records
//! - **Validation**: Pure rules guarding what enters the store
//! - **Journal**: The façade composing the store with the user-facing operations
//!
//! ## Example
//!
//! ```
//! use discount_journal::Journal;
//!
//! let mut journal = Journal::new();
//! journal.add("Acme", 10, "2025-12-01")?;
//! journal.add("Zed", 5, "2025-06-15")?;
//!
//! // Matching ignores ASCII case
//! assert_eq!(journal.delete_by_shop("ACME"), 1);
//! assert_eq!(journal.count(), 1);
//! # Ok::<(), discount_journal::StoreError>(())
//! ```

pub mod error;
pub mod journal;
pub mod shell;
pub mod store;
pub mod types;
pub mod validate;

// Re-exports
pub use error::{Result, StoreError, ValidationError};
pub use journal::{Journal, JournalConfig};
pub use store::RecordStore;
pub use types::Record;
pub use validate::{
    days_in_month, is_leap_year, shop_cmp_ci, shop_equals_ci, validate_discount, validate_expiry,
    validate_shop,
};
