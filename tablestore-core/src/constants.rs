//! Constants - TigerStyle limits
//!
//! All limits carry their unit in the name and are checked explicitly.

// =============================================================================
// Records
// =============================================================================

/// Field name (case-insensitive) that holds a record's identifier
pub const RECORD_ID_FIELD_NAME: &str = "id";

// =============================================================================
// PostgreSQL
// =============================================================================

/// Default connection pool size
pub const POSTGRES_CONNECTIONS_COUNT_DEFAULT: u32 = 10;

/// Maximum connection pool size
pub const POSTGRES_CONNECTIONS_COUNT_MAX: u32 = 100;

/// Default time to wait for a pooled connection
pub const POSTGRES_ACQUIRE_TIMEOUT_MS_DEFAULT: u64 = 5_000;

/// Default deadline for a single table operation
pub const OPERATION_TIMEOUT_MS_DEFAULT: u64 = 10_000;

/// Maximum deadline for a single table operation
pub const OPERATION_TIMEOUT_MS_MAX: u64 = 300_000;

// =============================================================================
// Environment
// =============================================================================

/// Connection URL for the PostgreSQL backend
pub const ENV_POSTGRES_URL: &str = "TABLESTORE_POSTGRES_URL";

/// Fallback connection URL (conventional name)
pub const ENV_DATABASE_URL: &str = "DATABASE_URL";

/// Pool size override
pub const ENV_POSTGRES_CONNECTIONS_MAX: &str = "TABLESTORE_POSTGRES_CONNECTIONS_MAX";

/// Operation deadline override, in milliseconds
pub const ENV_OPERATION_TIMEOUT_MS: &str = "TABLESTORE_OPERATION_TIMEOUT_MS";

/// Seed override for deterministic simulation
pub const ENV_DST_SEED: &str = "DST_SEED";

// =============================================================================
// DST
// =============================================================================

/// Seed used when `DST_SEED` is not set and no seed is given
pub const DST_SEED_DEFAULT: u64 = 42;

/// Maximum number of fault configurations per injector
pub const DST_FAULTS_COUNT_MAX: usize = 16;
