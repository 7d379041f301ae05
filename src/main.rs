//! Insights Dashboard
//!
//! Single-page data-visualization dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - One-shot fetch of a flat insights dataset from a remote endpoint
//! - Nine independent dropdown facets filtering the dataset by equality
//! - Bar chart of intensity / likelihood / relevance per record, by country
//! - Pie chart of record counts per distinct topic
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It talks to exactly one remote endpoint, once, on mount;
//! everything on screen is derived reactively from the fetched dataset and
//! the current filter selections.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
