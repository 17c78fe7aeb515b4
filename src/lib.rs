//! travelog-rs: umbrella crate re-exporting [`travelog_core`] for the demos.
pub use travelog_core::*;
