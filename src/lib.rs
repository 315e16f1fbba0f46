//! # Scrapdex - a browsable item database for ARC Raiders
//!
//! Scrapdex loads the game's static JSON catalogs (items, bots, quests,
//! workbenches, projects), enriches the item catalog with derived economic
//! and relational fields, and renders a searchable, sortable view in the
//! terminal.
//!
//! ## Features
//!
//! - **Offline Enrichment**: A batch pass that annotates every item with its
//!   recycle and salvage value, the reverse index of what breaks down into
//!   it, and which bots drop it - written back in place as pretty JSON.
//! - **Cross-Referencing**: Item -> consumer maps joining quests (explicit
//!   requirements plus phrases parsed out of objective text), workbench
//!   upgrade levels, and project phases.
//! - **Terminal Browser**: Case-insensitive substring search with a settle
//!   delay, column sorting with click-to-flip semantics, a fixed-width table
//!   and a stacked card layout, and locale-aware display names.
//! - **Permissive Data Plane**: Unresolved references degrade to `Unknown`
//!   labels or zero values; only a missing or malformed catalog document is
//!   fatal.
//! - **Async Design**: Built with Tokio; the browse loop multiplexes stdin,
//!   the debounce timer, and ctrl-c with `select!`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use scrapdex::catalog::Catalog;
//! use scrapdex::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load("config.toml").await?;
//!
//!     // Batch enrichment (normally `scrapdex enrich`)
//!     scrapdex::enrich::run(&config.database)?;
//!
//!     // Interactive browser (normally `scrapdex browse`)
//!     let catalog = Catalog::load_dir(&config.database)?;
//!     scrapdex::browse::run_session(catalog, &config.browser).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - [`catalog`] - Data model, loaders, and the wire-format field names
//! - [`enrich`] - The offline enrichment pass and the bot icon table
//! - [`xref`] - Item -> {quest, workbench, project} requirement maps
//! - [`browse`] - View state, renderers, and the interactive session
//! - [`config`] - Configuration management and validation
//!
//! ## Data Flow
//!
//! ```text
//! items.json + bots.json
//!          │
//!   ┌──────▼──────┐
//!   │   enrich    │  (batch, overwrites items.json)
//!   └──────┬──────┘
//!          │  + quests.json, workbenches.json, projects.json
//!   ┌──────▼──────┐
//!   │    xref     │  (in-memory reverse maps, per load / locale)
//!   └──────┬──────┘
//!   ┌──────▼──────┐
//!   │   browse    │  (filter -> sort -> render)
//!   └─────────────┘
//! ```
//!
//! One direction only: the browser never mutates catalog data.

pub mod browse;
pub mod catalog;
pub mod config;
pub mod enrich;
pub mod xref;
