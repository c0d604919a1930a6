use actix_web::{middleware::Logger, web, App, HttpServer};
use log::info;

use user_service::{
    api::{error::SystemError, health},
    constants::Env,
    modules::user::{handle::UserHandler, route, store::InMemoryUserStore},
};

#[actix_web::main]
async fn main() -> Result<(), SystemError> {
    dotenvy::dotenv().ok();
    env_logger::init();
    let env = Env::from_env()?;
    info!("Environment loaded");

    // Starts empty; unknown ids resolve to the default user.
    let handler = web::Data::new(UserHandler::new(InMemoryUserStore::new()));

    info!("Starting server at http://{}:{}", env.server.host, env.server.port);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(handler.clone())
            .configure(health::configure)
            .configure(route::configure)
    })
    .max_connections(env.max_connections)
    .bind((env.server.host.as_str(), env.server.port))?
    .workers(env.workers)
    .run()
    .await?;

    Ok(())
}
