//! Portfolio - student media showcase
//!
//! This library crate exposes the configuration layer and the gallery driver
//! for the `portfolio` binary and for integration testing.

pub mod config;
pub mod gallery;
