//! Utility containers for loosely structured data.
//!
//! # Purpose
//! This crate holds the containers I keep reaching for when data arrives without a fixed shape,
//! like configuration trees or decoded JSON: a [`Dict`](collections::Dict) that can read and
//! write nested data through delimited paths (`"server.http.port"`), a
//! [`SortedQueue`](collections::SortedQueue) that hands values back in priority order and a plain,
//! position-addressed [`Queue`](collections::Queue). The [`helpers`] module has free functions for
//! reading nested mappings without building a Dict at all.
//!
//! # Method
//! Values in a Dict are dynamically typed, see [`Value`](collections::dict::Value). Nested
//! mappings are stored raw and only turned into child dicts when they are first read, so building
//! a large tree is cheap and reading the same branch twice returns the same child.
//!
//! The queues are thin layers over the standard library's sequences. The SortedQueue sorts
//! lazily, caching the result until the next insertion, rather than maintaining a heap.
//!
//! # Error Handling
//! Absence is never an error: lookups return [`Option`]s and deletions return a `bool`. Errors
//! are reserved for operations that can't do what they were asked, such as using a number as a
//! Dict key or removing a key that doesn't exist through the strict API. When this crate employs
//! errors via [`Result`]s, it does so in a method that is strongly typed, using enums for static
//! dispatch rather than dynamic, with structs that implement [`Error`](std::error::Error).
//!
//! # Dependencies
//! - `indexmap` backs the Dict, which has to preserve insertion order.
//! - `derive_more` removes the need for some very repetitive programming on the error enums.
//! - `tracing` records promotions, sorts and dropped writes at `trace` and `debug` level. No
//!   subscriber is installed.
//! - `serde_json` (optional, feature `serde`) converts between JSON and Dicts.
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;
#[cfg(feature = "helpers")]
pub mod helpers;

pub(crate) mod util;
