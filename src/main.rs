use std::io;

use actix_web::{middleware::Logger, App, HttpServer};

use study_companion::{
    app_state::AppState,
    config::Config,
    handlers,
    middleware::{build_cors, RequestIdMiddleware},
};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    if let Err(e) = config.validate() {
        log::error!("{}", e);
        return Err(io::Error::new(io::ErrorKind::InvalidInput, e.to_string()));
    }

    let bind_address = (config.web_server_host.clone(), config.web_server_port);
    let state = AppState::new(config);

    log::info!(
        "starting HTTP server on {}:{} (model: {})",
        bind_address.0,
        bind_address.1,
        state.config.model_name
    );

    HttpServer::new(move || {
        App::new()
            .wrap(build_cors(&state.config))
            .wrap(Logger::default())
            .wrap(RequestIdMiddleware)
            .configure(handlers::configure(state.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
