mod frontend_controller;
pub mod server;
