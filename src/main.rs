//! PrijsMaatje Frontend Entry Point

mod api;
mod app;
mod components;
mod context;
mod format;
mod list;
mod models;
mod pages;
mod results;
mod storage;
mod store;
mod suggest;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
