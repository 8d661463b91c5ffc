use actix_web::{App, HttpResponse, HttpServer, middleware, web};

use momtrack::api::ApiErrorResponse;
use momtrack::{db, handlers};

async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({"status": "ok"}))
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiErrorResponse {
        error: "Not found".to_string(),
        details: None,
    })
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    // Ensure data directory exists
    std::fs::create_dir_all("data").expect("Failed to create data directory");

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "data/app.db".to_string());
    let pool = db::init_pool(&database_url);
    db::run_migrations(&pool);

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
    log::info!("Starting server at http://{bind_addr}");

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(pool.clone()))
            .route("/health", web::get().to(health))
            .configure(handlers::configure)
            // Default 404 handler (must be registered last)
            .default_service(web::to(not_found))
    })
    .bind(bind_addr)?
    .run()
    .await
}
