pub mod analyze;

use actix_web::web::{self, Data};
use actix_web::{App, HttpResponse, HttpServer};
use log::info;

use crate::config::AnalysisConfig;

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/stats", web::post().to(analyze::stats))
        .route("/health", web::get().to(health));
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().finish()
}

/// Serve the HTTP surface until the process is stopped.
///
/// # Errors
///
/// Returns an error if the address cannot be bound.
pub async fn serve(bind: &str, config: AnalysisConfig) -> std::io::Result<()> {
    info!("listening on {bind}");
    HttpServer::new(move || {
        App::new()
            .app_data(Data::new(config))
            .configure(routes)
    })
    .bind(bind)?
    .run()
    .await
}
