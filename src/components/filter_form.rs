use leptos::prelude::*;

use crate::filters::{FilterState, LOCATIONS, PRICE_MAX, PRICE_MIN, PRICE_STEP};
use crate::models::{PartySize, PARTY_SIZE_MAX, PARTY_SIZE_MIN};
use crate::state::Msg;

/// Max price slider, party size picker and location field.
///
/// Every edit is reported through `on_change` as a [`Msg`]; the form keeps no
/// state of its own.
#[component]
pub fn FilterForm(
    #[prop(into)] filters: Signal<FilterState>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] on_change: Callback<Msg>,
    #[prop(into)] on_submit: Callback<()>,
) -> impl IntoView {
    let track_style = move || {
        let pct = filters.with(|f| f.price_fill_percent());
        format!(
            "background: linear-gradient(to right, #1a4d2e 0%, #1a4d2e {pct}%, #d3d3d3 {pct}%, #d3d3d3 100%)"
        )
    };

    let party_options: Vec<_> = (PARTY_SIZE_MIN..=PARTY_SIZE_MAX)
        .map(|n| view! { <option value=n.to_string()>{n.to_string()}</option> })
        .collect();

    let location_options: Vec<_> = LOCATIONS
        .iter()
        .map(|loc| view! { <option value=*loc></option> })
        .collect();

    view! {
        <form
            class="filter-form"
            on:submit=move |ev| {
                ev.prevent_default();
                on_submit.run(());
            }
        >
            <div class="filter-row">
                <div class="filter-price">
                    <label for="price-range" class="filter-label">
                        {move || format!("Max Price Per Person: ${}", filters.with(|f| f.max_price()))}
                    </label>
                    <div class="price-slider">
                        <div class="price-track" style=track_style></div>
                        <input
                            type="range"
                            id="price-range"
                            class="price-input"
                            min=PRICE_MIN.to_string()
                            max=PRICE_MAX.to_string()
                            step=PRICE_STEP.to_string()
                            prop:value=move || filters.with(|f| f.max_price().to_string())
                            on:input=move |ev| {
                                if let Ok(price) = event_target_value(&ev).parse::<i64>() {
                                    on_change.run(Msg::SetMaxPrice(price));
                                }
                            }
                        />
                    </div>
                </div>

                <div class="filter-party">
                    <label for="party-size" class="filter-label">"Party Size"</label>
                    <select
                        id="party-size"
                        class="input party-select"
                        prop:value=move || filters.with(|f| f.party_size().form_value())
                        on:change=move |ev| {
                            if let Some(size) = PartySize::parse(&event_target_value(&ev)) {
                                on_change.run(Msg::SetPartySize(size));
                            }
                        }
                    >
                        <option value="any">"Any"</option>
                        {party_options}
                    </select>
                </div>
            </div>

            <div class="filter-location">
                <label for="location" class="filter-label">"Location"</label>
                <input
                    type="text"
                    id="location"
                    class="input"
                    list="location-options"
                    placeholder="Anywhere"
                    prop:value=move || filters.with(|f| f.location().to_string())
                    on:input=move |ev| on_change.run(Msg::SetLocation(event_target_value(&ev)))
                />
                <datalist id="location-options">{location_options}</datalist>
            </div>

            <button
                type="submit"
                class="btn btn-primary search-btn"
                disabled=move || loading.get()
            >
                {move || if loading.get() { "Searching..." } else { "Search Golf Getaways" }}
            </button>
        </form>
    }
}
