//! HTTP API Client
//!
//! Communication with the remote dataset endpoint.

pub mod client;

pub use client::*;
