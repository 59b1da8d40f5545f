mod tools;
mod web;

#[cfg(feature = "demo")]
mod demo_mock_server;

#[macro_use]
extern crate rocket;

use crate::web::start_servers;

#[launch]
async fn rocket() -> _ {
    env_logger::init();

    #[cfg(feature = "demo")]
    demo_mock_server::init_demo().await;

    start_servers()
}
