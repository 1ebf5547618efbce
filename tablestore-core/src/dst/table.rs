//! FaultyAdapter / FaultyTable - backend failures on demand
//!
//! Wraps any adapter so tests can drive the error paths of code written
//! against [`Table`] without a misbehaving database.
//!
//! A fault is raised before the inner table is called. An injected write
//! failure therefore never reaches storage.

use std::sync::Arc;

use async_trait::async_trait;

use super::fault::{FaultInjector, FaultType};
use crate::storage::{Adapter, Record, StoreError, StoreResult, Table};

// =============================================================================
// FaultyAdapter
// =============================================================================

/// Adapter whose tables fail according to a [`FaultInjector`].
#[derive(Debug, Clone)]
pub struct FaultyAdapter<A> {
    inner: A,
    injector: Arc<FaultInjector>,
}

impl<A: Adapter> FaultyAdapter<A> {
    /// Wrap `inner`; all tables share `injector`.
    #[must_use]
    pub fn new(inner: A, injector: Arc<FaultInjector>) -> Self {
        Self { inner, injector }
    }

    /// The wrapped adapter, for inspecting state without faults.
    #[must_use]
    pub fn inner(&self) -> &A {
        &self.inner
    }
}

impl<A: Adapter> Adapter for FaultyAdapter<A> {
    type TableHandle<R: Record> = FaultyTable<A::TableHandle<R>>;

    fn backend_name(&self) -> &'static str {
        self.inner.backend_name()
    }

    fn table<R: Record>(&self, name: &str) -> FaultyTable<A::TableHandle<R>> {
        FaultyTable::new(self.inner.table(name), Arc::clone(&self.injector))
    }
}

// =============================================================================
// FaultyTable
// =============================================================================

/// Table wrapper that injects read and write failures.
#[derive(Debug, Clone)]
pub struct FaultyTable<T> {
    inner: T,
    injector: Arc<FaultInjector>,
}

impl<T> FaultyTable<T> {
    /// Wrap `inner`.
    #[must_use]
    pub fn new(inner: T, injector: Arc<FaultInjector>) -> Self {
        Self { inner, injector }
    }

    fn roll(&self, table: &str, fault_type: FaultType, operation: &str) -> StoreResult<()> {
        if !self.injector.should_inject(fault_type) {
            return Ok(());
        }

        tracing::warn!(table, operation, fault = %fault_type, "injected fault");
        let msg = format!("injected {fault_type} during {operation} on {table}");
        Err(match fault_type {
            FaultType::ReadFail => StoreError::read(msg),
            FaultType::WriteFail => StoreError::write(msg),
        })
    }
}

#[async_trait]
impl<R, T> Table<R> for FaultyTable<T>
where
    R: Record,
    T: Table<R>,
{
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn get(&self, id: &str) -> StoreResult<R> {
        self.roll(self.name(), FaultType::ReadFail, "get")?;
        self.inner.get(id).await
    }

    async fn put(&self, record: &R) -> StoreResult<()> {
        self.roll(self.name(), FaultType::WriteFail, "put")?;
        self.inner.put(record).await
    }

    async fn update(&self, record: &R) -> StoreResult<()> {
        self.roll(self.name(), FaultType::WriteFail, "update")?;
        self.inner.update(record).await
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        self.roll(self.name(), FaultType::WriteFail, "delete")?;
        self.inner.delete(id).await
    }

    async fn count(&self) -> StoreResult<usize> {
        self.roll(self.name(), FaultType::ReadFail, "count")?;
        self.inner.count().await
    }
}

// =============================================================================
// Tests
// =============================================================================
