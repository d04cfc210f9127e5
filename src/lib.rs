//! MoneyTracker - personal income, expense and investment tracking
//!
//! This library provides the core of the MoneyTracker application: the
//! transaction and investment models, a pure aggregation engine that turns
//! them into reports, and the persistence, audit and backup layers around it.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, transactions, investments, periods)
//! - `reports`: Aggregation engine (totals, breakdowns, trend, ratios, portfolio)
//! - `storage`: The `Store` boundary and its JSON and in-memory implementations
//! - `state`: Session state owned by the caller
//! - `services`: Command handlers that mutate state
//! - `audit`: Audit logging system
//! - `backup`: Backup and restore
//! - `export`: CSV, JSON and YAML export
//! - `display`: Terminal formatting
//! - `cli`: clap command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use money_tracker::config::{Settings, TrackerPaths};
//! use money_tracker::state::AppState;
//! use money_tracker::storage::JsonStore;
//!
//! let paths = TrackerPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let state = AppState::load(JsonStore::new(&paths))?;
//! ```

pub mod audit;
pub mod backup;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod state;
pub mod storage;

pub use error::{TrackerError, TrackerResult};
