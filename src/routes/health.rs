use actix_web::{HttpResponse, web};

use crate::dto::health::HealthStatus;
use crate::repository::DieselRepository;
use crate::routes::HandlerResult;

/// Reports `ok` when a pooled database connection answers a query.
pub async fn health(repo: web::Data<DieselRepository>) -> HandlerResult {
    web::block(move || repo.ping()).await??;
    Ok(HttpResponse::Ok().json(HealthStatus { status: "ok" }))
}
