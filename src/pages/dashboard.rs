//! Dashboard Page
//!
//! The single page of the app: filter controls plus the two charts over the
//! filtered dataset.

use leptos::*;
use std::cell::Cell;
use std::rc::Rc;

use crate::api;
use crate::components::{BarChart, ChartSkeleton, FilterBar, PieChart};
use crate::state::global::GlobalState;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // The fetch has no cancellation; if the page is torn down before it
    // resolves, the continuation must not write disposed signals.
    let alive = Rc::new(Cell::new(true));
    on_cleanup({
        let alive = alive.clone();
        move || alive.set(false)
    });

    // Fetch the dataset once on mount
    let state_for_effect = state.clone();
    let alive_for_effect = alive.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        let alive = alive_for_effect.clone();
        spawn_local(async move {
            state.loading.set(true);

            match api::fetch_records().await {
                Ok(records) => {
                    if alive.get() {
                        state.records.set(records);
                    }
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch dataset: {}", e).into());
                }
            }

            if alive.get() {
                state.loading.set(false);
            }
        });
    });

    let loading = state.loading;

    view! {
        <div class="space-y-8">
            // Page header
            <div>
                <h1 class="text-3xl font-bold">"Data Visualization Dashboard"</h1>
                <p class="text-gray-400 mt-1">"Filter the dataset and explore it across two views"</p>
            </div>

            // Filter section
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Filters"</h2>
                <FilterBar />
            </section>

            // Bar chart
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">
                    "Intensity, Likelihood, and Relevance by Country"
                </h2>

                {move || {
                    if loading.get() {
                        view! { <ChartSkeleton /> }.into_view()
                    } else {
                        view! { <BarChart /> }.into_view()
                    }
                }}
            </section>

            // Pie chart
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Distribution of Topics"</h2>

                {move || {
                    if loading.get() {
                        view! { <ChartSkeleton /> }.into_view()
                    } else {
                        view! { <PieChart /> }.into_view()
                    }
                }}
            </section>
        </div>
    }
}
