//! Configuration for range planning.
//!
//! [`RangeConfig`] deserializes with `serde` and fills missing fields with
//! defaults; call [`RangeConfig::validate`] after loading.

mod range_config;

pub use range_config::RangeConfig;
