use crate::tools::env_args::retrieve_arg_value;
use crate::web::backend::server::BackendServer;
use crate::web::frontend::server::FrontendServer;
use rocket::figment::Figment;
use rocket::{Build, Rocket};

const PORT_ENV_ARG: &str = "--port";
const DEFAULT_PORT: u16 = 8000;
pub const TEMPLATE_DIR: &str = "public/templates";

pub trait Server {
    fn configure(&self, rocket_build: Rocket<Build>) -> Rocket<Build>;
}

pub fn build_server() -> Rocket<Build> {
    let rocket_build = rocket::custom(build_figment(get_port()));

    let servers: Vec<Box<dyn Server>> = vec![
        Box::new(BackendServer::new()),
        Box::new(FrontendServer::new()),
    ];
    servers
        .iter()
        .fold(rocket_build, |rocket_build, server| {
            server.configure(rocket_build)
        })
}

/// Rocket's default configuration (`Rocket.toml`, `ROCKET_*` variables), with the port and templates location set.
pub fn build_figment(port: u16) -> Figment {
    rocket::Config::figment()
        .merge(("port", port))
        .merge(("template_dir", TEMPLATE_DIR))
}

fn get_port() -> u16 {
    retrieve_arg_value(PORT_ENV_ARG)
        .and_then(|port| port.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::env_args::with_env_args;
    use parameterized::{ide, parameterized};

    ide!();

    #[parameterized(
        args = {vec!["--port=10".to_owned()], vec!["--port=doe".to_owned()], vec!["--port=".to_owned()], vec!["--port=70000".to_owned()], vec![]},
        expected_port = {10, DEFAULT_PORT, DEFAULT_PORT, DEFAULT_PORT, DEFAULT_PORT}
    )]
    fn should_get_port(args: Vec<String>, expected_port: u16) {
        let port = with_env_args(args, get_port);

        assert_eq!(expected_port, port);
    }

    #[test]
    fn should_set_template_dir() {
        let template_dir = build_figment(DEFAULT_PORT)
            .extract_inner::<String>("template_dir")
            .unwrap();

        assert_eq!(TEMPLATE_DIR, template_dir);
    }
}
