//! Tablestore CLI
//!
//! Command-line interface for the tablestore record store.
//!
//! # Usage
//!
//! ```bash
//! # Write a record (the "id" field is its identifier)
//! tablestore --backend postgres put events '{"id": "e1", "name": "Launch"}'
//!
//! # Read it back
//! tablestore --backend postgres get events e1
//!
//! # Run the put/get/update/delete scenario against the in-process backend
//! tablestore demo
//! ```

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::{json, Value};
use tablestore_core::{
    Adapter, MemoryAdapter, PostgresAdapter, PostgresConfig, Table, ENV_POSTGRES_URL,
};

#[derive(Parser, Debug)]
#[command(name = "tablestore")]
#[command(about = "Key-value record store CLI", long_about = None)]
struct Cli {
    /// Storage backend
    #[arg(long, value_enum, default_value_t = Backend::Memory)]
    backend: Backend,

    /// PostgreSQL URL (overrides TABLESTORE_POSTGRES_URL / DATABASE_URL)
    #[arg(long)]
    database_url: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Backend {
    /// In-process, lost on exit
    Memory,
    /// PostgreSQL
    Postgres,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print a record as JSON
    Get {
        /// Table name
        table: String,
        /// Record identifier
        id: String,
    },
    /// Insert or overwrite a record
    Put {
        /// Table name
        table: String,
        /// Record as a JSON object with an "id" field
        record: String,
    },
    /// Overwrite a record
    Update {
        /// Table name
        table: String,
        /// Record as a JSON object with an "id" field
        record: String,
    },
    /// Delete a record
    Delete {
        /// Table name
        table: String,
        /// Record identifier
        id: String,
    },
    /// Print the number of records in a table
    Count {
        /// Table name
        table: String,
    },
    /// Run a put/get/update/delete round trip
    Demo {
        /// Table to use
        #[arg(long, default_value = "events")]
        table: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .init();

    match cli.backend {
        Backend::Memory => {
            tracing::warn!("using the in-process backend, records are lost on exit");
            run(&MemoryAdapter::new(), cli.command).await
        }
        Backend::Postgres => {
            let config = postgres_config(cli.database_url.as_deref())?;
            let adapter = PostgresAdapter::connect(&config)
                .await
                .with_context(|| format!("connecting to {}", config.redacted_url()))?;
            let result = run(&adapter, cli.command).await;
            adapter.close().await;
            result
        }
    }
}

/// Environment configuration, with the URL replaced by `--database-url` if given.
fn postgres_config(database_url: Option<&str>) -> anyhow::Result<PostgresConfig> {
    let config = PostgresConfig::from_lookup(|key: &str| match database_url {
        Some(url) if key == ENV_POSTGRES_URL => Some(url.to_string()),
        _ => std::env::var(key).ok(),
    })?;
    Ok(config)
}

async fn run<A: Adapter>(adapter: &A, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Get { table, id } => {
            let record = adapter.table::<Value>(&table).get(&id).await?;
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        Commands::Put { table, record } => {
            let record = parse_record(&record)?;
            adapter.table::<Value>(&table).put(&record).await?;
            println!("ok");
        }
        Commands::Update { table, record } => {
            let record = parse_record(&record)?;
            adapter.table::<Value>(&table).update(&record).await?;
            println!("ok");
        }
        Commands::Delete { table, id } => {
            adapter.table::<Value>(&table).delete(&id).await?;
            println!("ok");
        }
        Commands::Count { table } => {
            let count = adapter.table::<Value>(&table).count().await?;
            println!("{count}");
        }
        Commands::Demo { table } => demo(adapter, &table).await?,
    }

    Ok(())
}

fn parse_record(raw: &str) -> anyhow::Result<Value> {
    serde_json::from_str(raw).context("record is not valid JSON")
}

/// Put, read, update and delete one event, checking each step.
async fn demo<A: Adapter>(adapter: &A, table: &str) -> anyhow::Result<()> {
    let events = adapter.table::<Value>(table);
    let id = uuid::Uuid::new_v4().to_string();

    let mut event = json!({
        "id": id,
        "name": "Test Event",
        "start": 1_516_785_100,
        "end": 1_516_785_200,
    });
    events.put(&event).await?;
    println!("put    {event}");

    let read = events.get(&id).await?;
    anyhow::ensure!(read == event, "read back a different record: {read}");
    println!("get    {read}");

    event["name"] = json!("Updated Event");
    events.update(&event).await?;
    let read = events.get(&id).await?;
    anyhow::ensure!(read["name"] == "Updated Event", "update not visible: {read}");
    println!("update {read}");

    events.delete(&id).await?;
    let err = match events.get(&id).await {
        Ok(read) => anyhow::bail!("record still present after delete: {read}"),
        Err(err) => err,
    };
    anyhow::ensure!(err.is_not_found(), "unexpected error after delete: {err}");
    println!("delete {id}");

    Ok(())
}
