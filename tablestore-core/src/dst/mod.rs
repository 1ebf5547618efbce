//! DST - Deterministic Simulation Testing
//!
//! TigerBeetle/FoundationDB-style fault injection for code written against
//! the table contract.
//!
//! # Philosophy
//!
//! > "If you're not testing with fault injection, you're not testing."
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use serde_json::{json, Value};
//! use tablestore_core::dst::{DeterministicRng, FaultConfig, FaultInjector, FaultType, FaultyAdapter};
//! use tablestore_core::{Adapter, MemoryAdapter, StoreError, Table};
//!
//! let injector = Arc::new(
//!     FaultInjector::new(DeterministicRng::new(42))
//!         .with_fault(FaultConfig::new(FaultType::WriteFail, 1.0)),
//! );
//! let adapter = FaultyAdapter::new(MemoryAdapter::new(), injector);
//! let table = adapter.table::<Value>("events");
//!
//! tokio_test::block_on(async {
//!     let err = table.put(&json!({"id": "e1"})).await.unwrap_err();
//!     assert!(matches!(err, StoreError::Write(_)));
//!     assert!(table.get("e1").await.unwrap_err().is_not_found());
//! });
//! ```
//!
//! Run with explicit seed for reproducibility:
//! ```bash
//! DST_SEED=12345 cargo test
//! ```

mod fault;
mod rng;
mod table;

pub use fault::{FaultConfig, FaultInjector, FaultType};
pub use rng::DeterministicRng;
pub use table::{FaultyAdapter, FaultyTable};
