//! HTTP routes.
//!
//! Every record type is served by the same generic handlers; `configure`
//! mounts them under the resource paths.

use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::auth::AuthenticatedUser;
use crate::domain::airline::Airline;
use crate::domain::api_user::ApiUser;
use crate::domain::destination::Destination;
use crate::domain::flight::Flight;
use crate::domain::passenger::Passenger;
use crate::domain::pilot::Pilot;
use crate::domain::plane_ticket::PlaneTicket;
use crate::domain::travel_class::TravelClass;
use crate::forms::{PageQuery, RecordForms};
use crate::models::config::ServerConfig;
use crate::repository::{DieselRepository, EntityReader, EntityWriter};
use crate::services::records;
use crate::services::{ServiceError, ServiceResult};

pub mod auth;
pub mod errors;
pub mod health;

type HandlerResult = ServiceResult<HttpResponse>;

async fn list<E>(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    config: web::Data<ServerConfig>,
    page: web::Query<PageQuery>,
    query: web::Query<E::Query>,
) -> HandlerResult
where
    E: RecordForms + Serialize,
    DieselRepository: EntityReader<E>,
{
    let filter: E::Filter = query.into_inner().try_into()?;
    let settings = config.pagination;
    let (page, page_size) = page.window()?;

    let response = web::block(move || {
        records::list_records::<E, _>(
            repo.get_ref(),
            &user,
            &settings,
            page,
            page_size,
            Some(filter),
        )
    })
    .await??;

    Ok(HttpResponse::Ok().json(response))
}

async fn show<E>(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    id: web::Path<i32>,
) -> HandlerResult
where
    E: RecordForms + Serialize,
    DieselRepository: EntityReader<E>,
{
    let id = id.into_inner();
    let record =
        web::block(move || records::get_record::<E, _>(repo.get_ref(), &user, id)).await??;

    Ok(HttpResponse::Ok().json(record))
}

async fn create<E>(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<E::Form>,
) -> HandlerResult
where
    E: RecordForms + Serialize,
    DieselRepository: EntityWriter<E>,
{
    let record =
        web::block(move || records::create_record::<E, _>(repo.get_ref(), &user, form)).await??;

    Ok(HttpResponse::Created().json(record))
}

async fn replace<E>(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    id: web::Path<i32>,
    web::Json(form): web::Json<E::Form>,
) -> HandlerResult
where
    E: RecordForms + Serialize,
    DieselRepository: EntityWriter<E>,
{
    let id = id.into_inner();
    let record = web::block(move || {
        records::replace_record::<E, _>(repo.get_ref(), &user, id, form)
    })
    .await??;

    Ok(HttpResponse::Ok().json(record))
}

async fn patch<E>(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    id: web::Path<i32>,
    web::Json(form): web::Json<E::PatchForm>,
) -> HandlerResult
where
    E: RecordForms + Serialize,
    DieselRepository: EntityWriter<E>,
{
    let id = id.into_inner();
    let record =
        web::block(move || records::patch_record::<E, _>(repo.get_ref(), &user, id, form))
            .await??;

    Ok(HttpResponse::Ok().json(record))
}

async fn delete<E>(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    id: web::Path<i32>,
) -> HandlerResult
where
    E: RecordForms,
    DieselRepository: EntityWriter<E>,
{
    let id = id.into_inner();
    web::block(move || records::delete_record::<E, _>(repo.get_ref(), &user, id)).await??;

    Ok(HttpResponse::NoContent().finish())
}

fn record_routes<E>(cfg: &mut web::ServiceConfig, path: &str)
where
    E: RecordForms + Serialize,
    DieselRepository: EntityReader<E> + EntityWriter<E>,
{
    cfg.service(
        web::resource(path)
            .route(web::get().to(list::<E>))
            .route(web::post().to(create::<E>)),
    )
    .service(
        web::resource(format!("{path}/{{id}}"))
            .route(web::get().to(show::<E>))
            .route(web::put().to(replace::<E>))
            .route(web::patch().to(patch::<E>))
            .route(web::delete().to(delete::<E>)),
    );
}

/// Registers the record, auth and extractor configuration of the `/api` scope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(errors::json_config())
        .app_data(errors::query_config())
        .app_data(errors::path_config());

    record_routes::<Airline>(cfg, "/airlines");
    record_routes::<Destination>(cfg, "/destinations");
    record_routes::<TravelClass>(cfg, "/travel-classes");
    record_routes::<Pilot>(cfg, "/pilots");
    record_routes::<Passenger>(cfg, "/passengers");
    record_routes::<Flight>(cfg, "/flights");
    record_routes::<PlaneTicket>(cfg, "/plane-tickets");
    record_routes::<ApiUser>(cfg, "/api-users");

    cfg.service(web::resource("/auth/login").route(web::post().to(auth::login)))
        .service(web::resource("/auth/me").route(web::get().to(auth::me)));
}

/// Rejects extractor failures as bad requests.
fn bad_request(err: impl std::fmt::Display) -> actix_web::Error {
    ServiceError::BadRequest(err.to_string()).into()
}
