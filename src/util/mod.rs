#[cfg(feature = "collections")]
pub mod fmt;
