use crate::web::server::build_server;
use rocket::{Build, Rocket};

pub mod backend;
pub mod error;
mod frontend;
mod server;

pub fn start_servers() -> Rocket<Build> {
    build_server()
}
