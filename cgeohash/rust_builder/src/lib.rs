//! Flutter-Rust bridge wrapper for cgeohash-core.
//!
//! This crate is the only place that knows about the host runtime. The
//! functions in [`api`] take host-shaped values (signed integers, lists,
//! owned strings), validate and convert them into the core's types, and
//! convert results and errors back. The geohash logic itself lives in
//! `cgeohash-core`.

pub mod api;

pub use cgeohash_core::*;
