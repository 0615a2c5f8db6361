use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::forms::subcategories::{
    AddSubcategoryForm, AddSubcategoryFormPayload, DeleteSubcategoryForm,
    DeleteSubcategoryFormPayload, UpdateSubcategoryForm, UpdateSubcategoryFormPayload,
};
use crate::repository::DieselRepository;
use crate::services::subcategories::{
    add_subcategory as add_subcategory_service, delete_subcategory as delete_subcategory_service,
    show_subcategories as show_subcategories_service,
    show_subcategories_by_category as show_subcategories_by_category_service,
    show_subcategory as show_subcategory_service,
    update_subcategory as update_subcategory_service,
};

use super::{blocking, error_response};

#[get("/subcategories")]
pub async fn show_subcategories(repo: web::Data<DieselRepository>) -> impl Responder {
    match blocking(&repo, |repo| show_subcategories_service(repo)).await {
        Ok(subcategories) => HttpResponse::Ok().json(subcategories),
        Err(err) => error_response(err),
    }
}

#[get("/subcategories/by-category/{categoria}")]
pub async fn show_subcategories_by_category(
    categoria: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let categoria = categoria.into_inner();
    match blocking(&repo, move |repo| {
        show_subcategories_by_category_service(&categoria, repo)
    })
    .await
    {
        Ok(subcategories) => HttpResponse::Ok().json(subcategories),
        Err(err) => error_response(err),
    }
}

#[get("/subcategories/{id}")]
pub async fn show_subcategory(
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let id = id.into_inner();
    match blocking(&repo, move |repo| show_subcategory_service(id, repo)).await {
        Ok(subcategory) => HttpResponse::Ok().json(subcategory),
        Err(err) => error_response(err),
    }
}

#[post("/subcategories")]
pub async fn add_subcategory(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<AddSubcategoryForm>,
) -> impl Responder {
    let payload: AddSubcategoryFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return error_response(e.into()),
    };

    match blocking(&repo, move |repo| add_subcategory_service(payload, repo))
        .await
        .and_then(|result| result)
    {
        Ok(subcategory) => HttpResponse::Ok().json(subcategory),
        Err(err) => error_response(err),
    }
}

#[put("/subcategories/{id}")]
pub async fn update_subcategory(
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<UpdateSubcategoryForm>,
) -> impl Responder {
    let payload: UpdateSubcategoryFormPayload = match (id.into_inner(), form).try_into() {
        Ok(payload) => payload,
        Err(e) => return error_response(e.into()),
    };

    match blocking(&repo, move |repo| update_subcategory_service(payload, repo))
        .await
        .and_then(|result| result)
    {
        Ok(subcategory) => HttpResponse::Ok().json(subcategory),
        Err(err) => error_response(err),
    }
}

#[delete("/subcategories/{id}")]
pub async fn delete_subcategory(
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<DeleteSubcategoryForm>,
) -> impl Responder {
    let payload: DeleteSubcategoryFormPayload = match (id.into_inner(), form).try_into() {
        Ok(payload) => payload,
        Err(e) => return error_response(e.into()),
    };

    match blocking(&repo, move |repo| delete_subcategory_service(payload, repo))
        .await
        .and_then(|result| result)
    {
        Ok(outcome) => HttpResponse::Ok().json(outcome),
        Err(err) => error_response(err),
    }
}
