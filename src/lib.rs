//! Literary Corpus Search Library
//!
//! This library crate holds everything the `folio-search` binary (`main.rs`) serves.
//!
//! ## Architecture Modules
//! The system is composed of three small subsystems:
//!
//! - **`corpus`**: Loading. Splits one concatenated text file into per-work documents using
//!   a fixed catalogue of title lines, and builds a substring index for each document.
//! - **`search`**: Querying. Case-insensitive substring search across all documents,
//!   context-window merging, `<mark>` highlighting and the HTTP endpoint.
//! - **`config`**: Command-line and environment settings for the server.
//!
//! The corpus is loaded once at startup and then shared read-only by every request.

pub mod config;
pub mod corpus;
pub mod search;
