//! Forwarding layer: the calls the pages make are relayed to the backend,
//! whose answers are relayed back to the browser.

mod backend_controller;
pub mod client;
pub mod config;
pub mod forwarding;
pub mod server;
