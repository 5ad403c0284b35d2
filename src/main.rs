mod app;
mod config;
mod library;
mod logging;
mod player;
mod runtime;
mod search;
mod store;
mod ui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    runtime::run()
}
