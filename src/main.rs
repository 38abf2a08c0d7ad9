#![allow(warnings)]
//! IoT Control Board Entry Point

mod models;
mod config;
mod board;
mod controls;
mod layout_store;
mod context;
mod store;
mod mobile;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    mount_to_body(App);
}
