use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::config::ApiConfig;
use crate::pages::search::SearchPage;

#[component]
pub fn App() -> impl IntoView {
    let config = ApiConfig::from_env();
    tracing::info!(api_base = config.base_url(), "Starting Golf Getaways");
    provide_context(config);

    view! {
        <Router>
            <main class="content">
                <Routes fallback=|| view! { <p class="not-found">"Page not found"</p> }>
                    <Route path=path!("/") view=SearchPage />
                </Routes>
            </main>
        </Router>
    }
}
