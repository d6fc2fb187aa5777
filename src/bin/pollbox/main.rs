use actix_web::http::StatusCode;
use actix_web::middleware::{ErrorHandlers, Logger};
use actix_web::{App, HttpServer};
use env_logger::Env;
use pollbox::db::init_db;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    init_db(std::env::var("DATABASE_URL").expect("DATABASE_URL must be set.")).await;

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_owned());
    log::info!("Listening on {}", bind_addr);

    HttpServer::new(|| {
        App::new()
            .wrap(
                ErrorHandlers::new()
                    .handler(StatusCode::BAD_REQUEST, pollbox::web::error::render_400)
                    .handler(StatusCode::NOT_FOUND, pollbox::web::error::render_404)
                    .handler(
                        StatusCode::INTERNAL_SERVER_ERROR,
                        pollbox::web::error::render_500,
                    ),
            )
            .wrap(Logger::new("%a %{User-Agent}i"))
            .configure(pollbox::web::configure)
    })
    .bind(&bind_addr)?
    .run()
    .await
}
