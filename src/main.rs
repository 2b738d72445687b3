mod app;
mod components;
mod detection;
mod error;
mod pages;
mod report;

use app::App;

fn main() {
    leptos::mount::mount_to_body(App);
}
