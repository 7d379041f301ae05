//! State Management
//!
//! Global application state, the dataset model, and the filtering logic.

pub mod global;

pub use global::{distinct_values, provide_global_state, Facet, FilterState, GlobalState, Record};
