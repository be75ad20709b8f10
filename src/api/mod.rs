pub mod activities;
pub mod metrics;

use actix_web::{error::QueryPayloadError, http::header, web, HttpRequest, HttpResponse, Responder};
use std::path::Path;

pub use activities::{list_activities, signup_for_activity, unregister_from_activity};
pub use metrics::get_metrics;

use crate::error::ApiError;

pub const INDEX_PAGE: &str = "/static/index.html";

pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy"
    }))
}

pub async fn root() -> impl Responder {
    HttpResponse::TemporaryRedirect()
        .insert_header((header::LOCATION, INDEX_PAGE))
        .finish()
}

fn query_error(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::InvalidQuery(err.to_string()).into()
}

/// 注册全部路由；`static_dir` 不存在时不挂载 `/static`
pub fn configure(cfg: &mut web::ServiceConfig, static_dir: &Path) {
    cfg.app_data(web::QueryConfig::default().error_handler(query_error))
        .route("/", web::get().to(root))
        .route("/activities", web::get().to(list_activities))
        .service(
            web::resource("/activities/{activity_name}/signup")
                .route(web::post().to(signup_for_activity))
                .route(web::delete().to(unregister_from_activity)),
        )
        .route("/metrics", web::get().to(get_metrics))
        .route("/health", web::get().to(health));

    if static_dir.is_dir() {
        cfg.service(actix_files::Files::new("/static", static_dir).index_file("index.html"));
    }
}
