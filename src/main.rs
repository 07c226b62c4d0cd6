//! EcoTracker Dashboard
//!
//! Carbon footprint tracking dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Dashboard with today/week/month emission figures and goal progress
//! - Activity logger for transport, energy, food and shopping entries
//! - Emission estimation from fixed per-subtype factors
//! - Canvas-drawn breakdown and weekly trend charts
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles
//! to WebAssembly. Everything is in-memory and single-session: there is
//! no server, no persistence and no network I/O.

use leptos::*;

mod app;
mod components;
mod emissions;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
