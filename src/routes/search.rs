use actix_web::{HttpResponse, Responder, get, web};

use crate::forms::search::{SearchForm, SearchFormPayload};
use crate::repository::DieselRepository;
use crate::services::search::{
    search_posters as search_posters_service, suggestions as suggestions_service,
};

use super::{blocking, error_response};

#[get("/search/posters")]
pub async fn search_posters(
    query: web::Query<SearchForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let payload: SearchFormPayload = match query.into_inner().try_into() {
        Ok(payload) => payload,
        Err(e) => return error_response(e.into()),
    };

    match blocking(&repo, move |repo| search_posters_service(payload, repo)).await {
        Ok(posters) => HttpResponse::Ok().json(posters),
        Err(err) => error_response(err),
    }
}

#[get("/search/suggestions")]
pub async fn suggestions(
    query: web::Query<SearchForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let payload: SearchFormPayload = match query.into_inner().try_into() {
        Ok(payload) => payload,
        Err(e) => return error_response(e.into()),
    };

    match blocking(&repo, move |repo| suggestions_service(payload, repo)).await {
        Ok(suggestions) => HttpResponse::Ok().json(suggestions),
        Err(err) => error_response(err),
    }
}
