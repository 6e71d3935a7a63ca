//! Gridfall (workspace facade crate).
//!
//! Keeps a single `gridfall::{core,types}` public surface while the
//! implementation lives in dedicated crates under `crates/`.

pub use gridfall_core as core;
pub use gridfall_types as types;
