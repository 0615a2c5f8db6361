//! JSON endpoints. Handlers stay thin: parse the request into a form payload,
//! run the service on the blocking pool, map the outcome to a response.

use actix_web::error::InternalError;
use actix_web::{HttpResponse, Responder, get, web};
use serde::Serialize;

use crate::dto::ErrorDto;
use crate::repository::DieselRepository;
use crate::services::ServiceError;

pub mod admin;
pub mod categories;
pub mod posters;
pub mod search;
pub mod subcategories;

/// Register every route and the extractor configuration.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        let response = bad_request(err.to_string());
        InternalError::from_response(err, response).into()
    }))
    .app_data(web::QueryConfig::default().error_handler(|err, _req| {
        let response = bad_request(err.to_string());
        InternalError::from_response(err, response).into()
    }))
    .app_data(web::PathConfig::default().error_handler(|err, _req| {
        let response = bad_request(err.to_string());
        InternalError::from_response(err, response).into()
    }))
    .service(health)
    .service(
        web::scope("/api")
            .service(categories::show_categories)
            .service(subcategories::show_subcategories)
            .service(subcategories::show_subcategories_by_category)
            .service(subcategories::show_subcategory)
            .service(subcategories::add_subcategory)
            .service(subcategories::update_subcategory)
            .service(subcategories::delete_subcategory)
            .service(posters::show_posters)
            .service(posters::show_posters_by_category)
            .service(posters::show_posters_by_subcategory)
            // Must precede `/posters/{id}`.
            .service(posters::show_latest_posters)
            .service(posters::show_poster)
            .service(posters::add_poster)
            .service(posters::update_poster)
            .service(posters::delete_poster)
            .service(search::search_posters)
            .service(search::suggestions)
            .service(admin::set_password),
    );
}

#[derive(Serialize)]
struct HealthDto {
    status: &'static str,
}

#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthDto { status: "ok" })
}

fn bad_request(message: String) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorDto::new(message))
}

/// Translate a service failure into its HTTP response.
pub fn error_response(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::Form(message) => bad_request(message),
        ServiceError::IncorrectPassword | ServiceError::PasswordNotConfigured => {
            HttpResponse::Unauthorized().json(ErrorDto::new(err.to_string()))
        }
        ServiceError::Internal => {
            HttpResponse::InternalServerError().json(ErrorDto::new(err.to_string()))
        }
    }
}

/// Run a synchronous service call on actix's blocking thread pool with its
/// own handle to the repository.
pub(crate) async fn blocking<T, F>(
    repo: &web::Data<DieselRepository>,
    call: F,
) -> Result<T, ServiceError>
where
    F: FnOnce(&DieselRepository) -> T + Send + 'static,
    T: Send + 'static,
{
    let repo = repo.get_ref().clone();
    web::block(move || call(&repo)).await.map_err(|e| {
        log::error!("Blocking task failed: {e}");
        ServiceError::Internal
    })
}
