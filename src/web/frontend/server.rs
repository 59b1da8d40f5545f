use crate::web::frontend::frontend_controller;
use crate::web::server::Server;
use rocket::fs::FileServer;
use rocket::{Build, Rocket};
use rocket_dyn_templates::Template;

pub const STATIC_FILES_DIR: &str = "./public/static";

/// Pages, static files and the generated WebAssembly bundle.
pub struct FrontendServer {}

impl FrontendServer {
    pub fn new() -> Self {
        Self {}
    }
}

impl Server for FrontendServer {
    fn configure(&self, rocket_build: Rocket<Build>) -> Rocket<Build> {
        rocket_build
            .mount(
                "/",
                routes![
                    frontend_controller::index,
                    frontend_controller::choose,
                    frontend_controller::home,
                ],
            )
            .mount("/", FileServer::from(STATIC_FILES_DIR))
            .register("/", catchers![frontend_controller::not_found])
            .attach(Template::fairing())
    }
}
