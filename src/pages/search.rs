use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::components::filter_form::FilterForm;
use crate::components::results_list::ResultsList;
use crate::config::ApiConfig;
use crate::state::{update, Effect, Msg, SearchModel, SearchStatus};

/// Apply a message to the current snapshot and run whatever it asks for.
fn dispatch(model: RwSignal<SearchModel>, config: StoredValue<ApiConfig>, msg: Msg) {
    let (next, effects) = update(model.get_untracked(), msg);
    model.set(next);
    for effect in effects {
        run_effect(model, config, effect);
    }
}

fn run_effect(model: RwSignal<SearchModel>, config: StoredValue<ApiConfig>, effect: Effect) {
    match effect {
        Effect::Search(request) => {
            spawn_local(async move {
                let msg = match api::search_packages(&config.get_value(), &request).await {
                    Ok(results) => Msg::SearchSucceeded(results),
                    Err(e) => Msg::SearchFailed(e),
                };
                dispatch(model, config, msg);
            });
        }
    }
}

#[component]
pub fn SearchPage() -> impl IntoView {
    let config = StoredValue::new(use_context::<ApiConfig>().unwrap_or_default());
    let model = RwSignal::new(SearchModel::default());

    let send = Callback::new(move |msg: Msg| dispatch(model, config, msg));

    let filters = Memo::new(move |_| model.with(|m| m.filters.clone()));
    let loading = Memo::new(move |_| model.with(|m| m.is_loading()));
    let results = Memo::new(move |_| model.with(|m| m.results.clone()));
    let sort = Memo::new(move |_| model.with(|m| m.sort));
    let expanded = Memo::new(move |_| model.with(|m| m.expanded));
    let no_matches =
        move || model.with(|m| m.status == SearchStatus::Success && m.results.is_empty());

    view! {
        <div class="page search-page">
            <style>{include_str!("search.css")}</style>

            <header class="search-header">
                <img
                    class="logo"
                    src="/homepage-logo.png"
                    alt="Golf Getaways"
                    width="300"
                    height="100"
                />
                <p class="page-description">
                    "Find your perfect golf getaway within your budget."
                </p>
            </header>

            <FilterForm
                filters=filters
                loading=loading
                on_change=send
                on_submit=move |_| send.run(Msg::Submit)
            />

            <Show when=move || loading.get()>
                <div class="loading-spinner">
                    <div class="spinner"></div>
                    <span>"Searching packages..."</span>
                </div>
            </Show>

            {move || {
                model.with(|m| m.error_message()).map(|message| view! {
                    <div class="error-message" role="alert">{message}</div>
                })
            }}

            <Show when=no_matches>
                <p class="empty-results">
                    "No packages match your filters. Try a higher max price or search anywhere."
                </p>
            </Show>

            <Show when=move || results.with(|r| !r.is_empty())>
                <ResultsList
                    results=results
                    sort=sort
                    expanded=expanded
                    on_toggle_sort=move |_| send.run(Msg::ToggleSort)
                    on_toggle_expanded=move |id: u32| send.run(Msg::ToggleExpanded(id))
                />
            </Show>
        </div>
    }
}
