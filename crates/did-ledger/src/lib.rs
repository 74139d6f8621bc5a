//! Ledger-side metadata storage.
//!
//! Defines the [`LedgerIndex`] contract the core's coordinator depends
//! on, plus [`InMemoryLedger`], a reference adapter enforcing enrollment
//! uniqueness and controller authorization. Real chain integrations
//! (transaction assembly, fees, finality) are out of scope (§1) and live
//! behind this trait in whatever crate wires a specific chain in.

mod controller_fold;
mod error;
mod index;
mod memory;

pub use error::LedgerError;
pub use index::{LedgerIndex, Signer};
pub use memory::InMemoryLedger;
