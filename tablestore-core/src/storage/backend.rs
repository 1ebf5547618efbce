//! Table and Adapter traits
//!
//! TigerStyle: One contract, interchangeable backends.

use async_trait::async_trait;

use super::error::StoreResult;
use super::record::Record;

/// CRUD access to one named table.
///
/// Every backend surfaces the same error kinds:
/// - `RecordNotFound` from `get`/`delete` on an absent identifier
/// - `InvalidRecordIdentifier` from `put`/`update` on a record without one
/// - backend failures unchanged, without retries
#[async_trait]
pub trait Table<R: Record>: Send + Sync {
    /// Name this handle is bound to.
    fn name(&self) -> &str;

    /// Read the record stored under `id`.
    ///
    /// The returned value is an independent copy of the stored record.
    async fn get(&self, id: &str) -> StoreResult<R>;

    /// Read the record stored under `id` into an existing slot.
    ///
    /// `out` is left untouched on error.
    async fn get_into(&self, id: &str, out: &mut R) -> StoreResult<()> {
        *out = self.get(id).await?;
        Ok(())
    }

    /// Insert a record, or overwrite the one with the same identifier.
    async fn put(&self, record: &R) -> StoreResult<()>;

    /// Overwrite a record by identifier.
    ///
    /// Full replacement with the same semantics as `put`: no partial update
    /// and no existence check.
    async fn update(&self, record: &R) -> StoreResult<()> {
        self.put(record).await
    }

    /// Remove the record stored under `id`.
    async fn delete(&self, id: &str) -> StoreResult<()>;

    /// Number of records currently in the table.
    async fn count(&self) -> StoreResult<usize>;
}

/// Factory for tables of one backend kind.
///
/// Handles returned for the same name share storage: a write through one is
/// visible through every other.
pub trait Adapter: Send + Sync {
    /// Table handle produced by this adapter.
    type TableHandle<R: Record>: Table<R>;

    /// Backend name for logs.
    fn backend_name(&self) -> &'static str;

    /// Bind a table handle to `name`.
    ///
    /// Never fails and accepts any name, including the empty string. Does not
    /// create anything; tables come into existence on first write.
    fn table<R: Record>(&self, name: &str) -> Self::TableHandle<R>;
}
