mod api;
mod app;
mod components;
mod config;
mod error;
mod filters;
mod logging;
mod models;
mod pages;
mod sorting;
mod state;

use app::App;

fn main() {
    logging::init();
    leptos::mount::mount_to_body(App);
}
