#![deny(missing_docs)]

//! Ordered key-value dictionary [`collections::SplayMap`], a self-adjusting binary search tree ( splay tree ) permitting duplicate keys.

//!# Features
//!
//! This crate supports the following cargo features:
//! - `serde` : enables serialisation of [`collections::SplayMap`] via serde crate.
//! - `cap` : enables memory measurement in tests via the cap allocator.

/// Containers.
pub mod collections;
