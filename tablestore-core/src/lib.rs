//! Tablestore Core - Record Store with Interchangeable Backends
//!
//! TigerStyle record store: one CRUD contract, a reference in-process
//! backend, and a PostgreSQL backend behind the `postgres` feature.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │               Tablestore Core               │
//! ├─────────────────────────────────────────────┤
//! │  Record / identify      │ id field lookup   │
//! │  Table<R> / Adapter     │ CRUD contract     │
//! │  MemoryAdapter          │ in-process, scan  │
//! │  PostgresAdapter        │ JSONB rows        │
//! ├─────────────────────────────────────────────┤
//! │  DST Framework          │ Fault injection   │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use serde::{Deserialize, Serialize};
//! use tablestore_core::{Adapter, MemoryAdapter, Record, Table};
//!
//! #[derive(Debug, PartialEq, Serialize, Deserialize)]
//! struct Event {
//!     id: String,
//!     name: String,
//! }
//!
//! impl Record for Event {}
//!
//! # tokio_test::block_on(async {
//! let adapter = MemoryAdapter::new();
//! let events = adapter.table::<Event>("events");
//!
//! let event = Event { id: "e1".into(), name: "Test Event".into() };
//! events.put(&event).await?;
//! assert_eq!(events.get("e1").await?, event);
//!
//! events.delete("e1").await?;
//! assert!(events.get("e1").await.unwrap_err().is_not_found());
//! # Ok::<(), tablestore_core::StoreError>(())
//! # }).unwrap();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod constants;
pub mod dst;
pub mod storage;

// Re-export common types
pub use config::PostgresConfig;
pub use constants::*;
pub use storage::{
    identify, record_identifier, Adapter, MemoryAdapter, MemoryTable, Record, StoreError,
    StoreResult, Table,
};

#[cfg(feature = "postgres")]
pub use storage::{PostgresAdapter, PostgresTable};
