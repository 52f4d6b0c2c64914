use leptos::prelude::*;

use crate::components::package_card::PackageCard;
use crate::models::GolfPackage;
use crate::sorting::SortOrder;

#[component]
pub fn ResultsList(
    #[prop(into)] results: Signal<Vec<GolfPackage>>,
    #[prop(into)] sort: Signal<SortOrder>,
    #[prop(into)] expanded: Signal<Option<u32>>,
    #[prop(into)] on_toggle_sort: Callback<()>,
    #[prop(into)] on_toggle_expanded: Callback<u32>,
) -> impl IntoView {
    let count_label = move || {
        let n = results.with(|r| r.len());
        format!("{} package{}", n, if n == 1 { "" } else { "s" })
    };

    view! {
        <section class="search-results">
            <div class="results-header">
                <h2>"Search Results"</h2>
                <span class="results-count">{count_label}</span>
                <button
                    class="btn-small sort-toggle"
                    on:click=move |_| on_toggle_sort.run(())
                >
                    {move || sort.get().label()}
                </button>
            </div>

            <div class="results-list">
                <For
                    each=move || results.get()
                    key=|p| p.id
                    children=move |p| {
                        let id = p.id;
                        view! {
                            <PackageCard
                                package=p
                                expanded=Signal::derive(move || expanded.get() == Some(id))
                                on_toggle=on_toggle_expanded
                            />
                        }
                    }
                />
            </div>
        </section>
    }
}
