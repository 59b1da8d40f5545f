use crate::tools::web::build_client;
use crate::web::backend::backend_controller;
use crate::web::backend::client::BackendClient;
use crate::web::backend::config::BackendConfig;
use crate::web::error::Result;
use crate::web::server::Server;
use rocket::{Build, Rocket};

pub struct BackendServer {}

impl BackendServer {
    pub fn new() -> Self {
        Self {}
    }
}

impl Server for BackendServer {
    fn configure(&self, rocket_build: Rocket<Build>) -> Rocket<Build> {
        let backend = match build_backend_client() {
            Ok(backend) => backend,
            Err(error) => {
                error!("{error}");
                panic!("Initialization failed, aborting.");
            }
        };

        rocket_build.manage(backend).mount(
            "/",
            routes![
                backend_controller::login,
                backend_controller::logout,
                backend_controller::api,
                backend_controller::upload,
            ],
        )
    }
}

fn build_backend_client() -> Result<BackendClient> {
    let config = BackendConfig::load()?;
    info!("API calls are forwarded to {}", config.base_url());
    Ok(BackendClient::new(build_client()?, config))
}
