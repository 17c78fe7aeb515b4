//! travelog-cli
//! ============
//!
//! Command-line interface for the `travelog-core` visited-city aggregator.
//!
//! The binary (`travelog`) reads a JSON export of a user's visited cities,
//! either a bare record array or a whole profile document, and prints the
//! grouped per-city summaries the mobile client shows.
//!
//! Basic usage:
//!
//! ```text
//! travelog --help
//! travelog aggregate profile.json
//! travelog aggregate profile.json.gz --scale ten --order oldest --json
//! travelog stats profile.json
//! travelog country "United States of America"
//! travelog lint profile.json
//! travelog init-config
//! ```
//!
//! Argument parsing and config-file handling live in this library target so
//! they can be tested without spawning the binary.
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod args;
pub mod config;
