//! MemoryAdapter - In-Process Storage
//!
//! TigerStyle: Reference implementation of the table contract.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       MemoryAdapter                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  RwLock<HashMap<table name, Arc<RwLock<Vec<StoredRecord>>>>> │
//! │  Outer lock: held only to find or create a table            │
//! │  Inner lock: one per table, held for a whole CRUD call      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every operation is a linear scan over the table's records. This backend
//! is meant for tests and small data sets; nothing here is indexed, and
//! nothing survives the process.

use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use super::backend::{Adapter, Table};
use super::error::{StoreError, StoreResult};
use super::record::{decode, encode, Record};

/// A stored record with its identifier resolved at write time.
#[derive(Debug, Clone)]
struct StoredRecord {
    id: String,
    body: Value,
}

type SharedRecords = Arc<RwLock<Vec<StoredRecord>>>;
type SharedTables = Arc<RwLock<HashMap<String, SharedRecords>>>;

// =============================================================================
// MemoryAdapter
// =============================================================================

/// In-process adapter.
///
/// Cloning is cheap and clones share the same tables.
#[derive(Debug, Clone, Default)]
pub struct MemoryAdapter {
    tables: SharedTables,
}

impl MemoryAdapter {
    /// Create an empty store. Never fails.
    #[must_use]
    pub fn new() -> Self {
        tracing::debug!("created in-memory adapter");
        Self::default()
    }

    /// Names of tables that have been written to, sorted.
    pub async fn table_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tables.read().await.keys().cloned().collect();
        names.sort();
        names
    }
}

impl Adapter for MemoryAdapter {
    type TableHandle<R: Record> = MemoryTable<R>;

    fn backend_name(&self) -> &'static str {
        "memory"
    }

    fn table<R: Record>(&self, name: &str) -> MemoryTable<R> {
        MemoryTable {
            name: name.to_owned(),
            tables: Arc::clone(&self.tables),
            _record: PhantomData,
        }
    }
}

// =============================================================================
// MemoryTable
// =============================================================================

/// Handle to one in-process table.
pub struct MemoryTable<R> {
    name: String,
    tables: SharedTables,
    _record: PhantomData<fn() -> R>,
}

impl<R> Clone for MemoryTable<R> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            tables: Arc::clone(&self.tables),
            _record: PhantomData,
        }
    }
}

impl<R> fmt::Debug for MemoryTable<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryTable")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl<R> MemoryTable<R> {
    /// Identifiers in storage order.
    pub async fn ids(&self) -> Vec<String> {
        match self.records().await {
            Some(records) => records.read().await.iter().map(|r| r.id.clone()).collect(),
            None => Vec::new(),
        }
    }

    /// The table's records, if it has ever been written.
    async fn records(&self) -> Option<SharedRecords> {
        self.tables.read().await.get(&self.name).cloned()
    }

    /// The table's records, creating the table on first use.
    async fn records_or_create(&self) -> SharedRecords {
        if let Some(records) = self.records().await {
            return records;
        }

        let mut tables = self.tables.write().await;
        let records = tables.entry(self.name.clone()).or_insert_with(|| {
            tracing::debug!(table = %self.name, "created table");
            SharedRecords::default()
        });
        Arc::clone(records)
    }
}

#[async_trait]
impl<R: Record> Table<R> for MemoryTable<R> {
    fn name(&self) -> &str {
        &self.name
    }

    async fn get(&self, id: &str) -> StoreResult<R> {
        let Some(records) = self.records().await else {
            return Err(StoreError::not_found(&self.name, id));
        };

        let body = {
            let records = records.read().await;
            records
                .iter()
                .find(|record| record.id == id)
                .map(|record| record.body.clone())
        };

        let body = body.ok_or_else(|| StoreError::not_found(&self.name, id))?;
        tracing::trace!(table = %self.name, id, "read record");

        decode(body)
    }

    async fn put(&self, record: &R) -> StoreResult<()> {
        let (id, body) = encode(record)?;

        let records = self.records_or_create().await;
        let mut records = records.write().await;

        match records.iter().position(|existing| existing.id == id) {
            Some(index) => {
                records[index].body = body;
                tracing::debug!(table = %self.name, id = %id, "overwrote record");
            }
            None => {
                tracing::debug!(table = %self.name, id = %id, "inserted record");
                records.push(StoredRecord { id, body });
            }
        }

        Ok(())
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        let Some(records) = self.records().await else {
            return Err(StoreError::not_found(&self.name, id));
        };

        let mut records = records.write().await;
        let index = records
            .iter()
            .position(|record| record.id == id)
            .ok_or_else(|| StoreError::not_found(&self.name, id))?;

        // Vec::remove shifts the tail left, keeping the remaining order
        records.remove(index);
        tracing::debug!(table = %self.name, id, "deleted record");

        Ok(())
    }

    async fn count(&self) -> StoreResult<usize> {
        match self.records().await {
            Some(records) => Ok(records.read().await.len()),
            None => Ok(0),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
