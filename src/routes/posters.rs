use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::forms::posters::{
    AddPosterForm, AddPosterFormPayload, DeletePosterForm, DeletePosterFormPayload,
    UpdatePosterForm, UpdatePosterFormPayload,
};
use crate::forms::search::LatestQuery;
use crate::repository::DieselRepository;
use crate::services::posters::{
    add_poster as add_poster_service, delete_poster as delete_poster_service,
    show_latest_posters as show_latest_posters_service, show_poster as show_poster_service,
    show_posters as show_posters_service,
    show_posters_by_category as show_posters_by_category_service,
    show_posters_by_subcategory as show_posters_by_subcategory_service,
    update_poster as update_poster_service,
};

use super::{blocking, error_response};

#[get("/posters")]
pub async fn show_posters(repo: web::Data<DieselRepository>) -> impl Responder {
    match blocking(&repo, |repo| show_posters_service(repo)).await {
        Ok(posters) => HttpResponse::Ok().json(posters),
        Err(err) => error_response(err),
    }
}

#[get("/posters/by-category/{categoria}")]
pub async fn show_posters_by_category(
    categoria: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let categoria = categoria.into_inner();
    match blocking(&repo, move |repo| {
        show_posters_by_category_service(&categoria, repo)
    })
    .await
    {
        Ok(posters) => HttpResponse::Ok().json(posters),
        Err(err) => error_response(err),
    }
}

#[get("/posters/by-subcategory/{id}")]
pub async fn show_posters_by_subcategory(
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let id = id.into_inner();
    match blocking(&repo, move |repo| show_posters_by_subcategory_service(id, repo)).await {
        Ok(posters) => HttpResponse::Ok().json(posters),
        Err(err) => error_response(err),
    }
}

#[get("/posters/latest")]
pub async fn show_latest_posters(
    query: web::Query<LatestQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let limit = query.into_inner().limit;
    match blocking(&repo, move |repo| show_latest_posters_service(limit, repo)).await {
        Ok(posters) => HttpResponse::Ok().json(posters),
        Err(err) => error_response(err),
    }
}

#[get("/posters/{id}")]
pub async fn show_poster(id: web::Path<i32>, repo: web::Data<DieselRepository>) -> impl Responder {
    let id = id.into_inner();
    match blocking(&repo, move |repo| show_poster_service(id, repo)).await {
        Ok(poster) => HttpResponse::Ok().json(poster),
        Err(err) => error_response(err),
    }
}

#[post("/posters")]
pub async fn add_poster(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<AddPosterForm>,
) -> impl Responder {
    let payload: AddPosterFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return error_response(e.into()),
    };

    match blocking(&repo, move |repo| add_poster_service(payload, repo))
        .await
        .and_then(|result| result)
    {
        Ok(poster) => HttpResponse::Ok().json(poster),
        Err(err) => error_response(err),
    }
}

#[put("/posters/{id}")]
pub async fn update_poster(
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<UpdatePosterForm>,
) -> impl Responder {
    let payload: UpdatePosterFormPayload = match (id.into_inner(), form).try_into() {
        Ok(payload) => payload,
        Err(e) => return error_response(e.into()),
    };

    match blocking(&repo, move |repo| update_poster_service(payload, repo))
        .await
        .and_then(|result| result)
    {
        Ok(poster) => HttpResponse::Ok().json(poster),
        Err(err) => error_response(err),
    }
}

#[delete("/posters/{id}")]
pub async fn delete_poster(
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<DeletePosterForm>,
) -> impl Responder {
    let payload: DeletePosterFormPayload = match (id.into_inner(), form).try_into() {
        Ok(payload) => payload,
        Err(e) => return error_response(e.into()),
    };

    match blocking(&repo, move |repo| delete_poster_service(payload, repo))
        .await
        .and_then(|result| result)
    {
        Ok(outcome) => HttpResponse::Ok().json(outcome),
        Err(err) => error_response(err),
    }
}
