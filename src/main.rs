use actix_web::{App, HttpServer, middleware, web};

use rbac_console::auth::session::session_middleware;
use rbac_console::config::AppConfig;
use rbac_console::handlers;
use rbac_console::models::display_mode::DisplayModeController;
use rbac_console::store::{self, RecordStore};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = AppConfig::from_env();
    let bind_addr = config.bind_addr.clone();
    let secret_key = config.session_key.clone();

    // All records live in this process and are gone on restart
    let store = web::Data::new(RecordStore::seeded());
    store::spawn_change_log(&store);
    let display = web::Data::new(DisplayModeController::default());
    let config = web::Data::new(config);

    log::info!("Starting server at http://{bind_addr}");

    HttpServer::new(move || {
        App::new()
            .wrap(session_middleware(secret_key.clone()))
            .wrap(middleware::Logger::default())
            .app_data(store.clone())
            .app_data(display.clone())
            .app_data(config.clone())
            .configure(handlers::configure)
    })
    .bind(bind_addr)?
    .run()
    .await
}
