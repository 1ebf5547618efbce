//! Storage - Table Contract and Backends
//!
//! TigerStyle: One CRUD contract, interchangeable backends.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │              Adapter::table(name) -> Table<R>                │
//! │         get / put / update / delete / count                  │
//! └─────────────────────────────────────────────────────────────┘
//!          ↑                              ↑
//!          │                              │
//! ┌────────┴────────┐           ┌────────┴────────┐
//! │  MemoryAdapter  │           │ PostgresAdapter │
//! │  (in-process)   │           │  (production)   │
//! └─────────────────┘           └─────────────────┘
//! ```
//!
//! Records are identified by their `id` field (see [`identify`]). Both
//! backends keep records as JSON and decode into the handle's record type on
//! read.

mod backend;
mod error;
mod memory;
mod record;

#[cfg(feature = "postgres")]
mod postgres;

pub use backend::{Adapter, Table};
pub use error::{StoreError, StoreResult};
pub use memory::{MemoryAdapter, MemoryTable};
pub use record::{identify, record_identifier, Record};

#[cfg(feature = "postgres")]
pub use postgres::{PostgresAdapter, PostgresTable};
