//! Filter Bar Component
//!
//! Nine facet dropdowns, each populated from the distinct values observed
//! across the full, unfiltered dataset.

use leptos::*;

use crate::state::global::{distinct_values, Facet, GlobalState};

/// Grid of facet controls
#[component]
pub fn FilterBar() -> impl IntoView {
    view! {
        <div class="grid grid-cols-2 md:grid-cols-3 gap-4">
            {Facet::ALL
                .iter()
                .map(|&facet| view! { <FacetSelect facet /> })
                .collect_view()}
        </div>
    }
}

/// One facet control. Options always derive from the full dataset, so
/// selecting a value in one control never changes what the others offer.
#[component]
fn FacetSelect(facet: Facet) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let records = state.records;
    let filters = state.filters;

    let options = create_memo(move |_| distinct_values(&records.get(), facet));

    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">{facet.label()}</label>
            <select
                on:change=move |ev| {
                    filters.update(|f| f.set(facet, event_target_value(&ev)));
                }
                prop:value=move || filters.get().get(facet).to_string()
                class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            >
                <option value="">{format!("Select {}", facet.label())}</option>

                {move || {
                    options
                        .get()
                        .into_iter()
                        .map(|value| view! { <option value=value.clone()>{value}</option> })
                        .collect_view()
                }}
            </select>
        </div>
    }
}
