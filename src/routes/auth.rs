use actix_web::{HttpResponse, web};

use crate::auth::AuthenticatedUser;
use crate::forms::auth::LoginForm;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::HandlerResult;
use crate::services::auth as auth_service;

pub async fn login(
    repo: web::Data<DieselRepository>,
    config: web::Data<ServerConfig>,
    web::Json(form): web::Json<LoginForm>,
) -> HandlerResult {
    let response = web::block(move || {
        auth_service::login(
            repo.get_ref(),
            form,
            &config.secret,
            config.token_ttl_minutes,
        )
    })
    .await??;

    Ok(HttpResponse::Ok().json(response))
}

/// Echoes the claims of the presented token.
pub async fn me(user: AuthenticatedUser) -> HandlerResult {
    Ok(HttpResponse::Ok().json(user))
}
