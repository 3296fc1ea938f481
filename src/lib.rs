//! Library crate for empdir-manager.
//!
//! This crate exposes the building blocks of the TUI:
//! - Application state and update loop (`app`)
//! - Error and result types (`error`)
//! - The employee directory store (`store`)
//! - Derived-view computation (`search`)
//! - UI rendering and widgets (`ui`)
//!
//! It is used by the `empdir-manager` binary and by tests.
#![doc = include_str!("../README.md")]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod app;
pub mod error;
pub mod search;
pub mod store;
pub mod ui;

// Re-export commonly used items at the crate root for convenience
/// Convenient error and result types shared across the crate.
pub use error::{DynError, Result, StoreError};
/// The directory and its record types.
pub use store::{Employee, EmployeeFields, EmployeeStore, SortDirection};
