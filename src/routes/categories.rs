use actix_web::{HttpResponse, Responder, get};

use crate::services::show_categories as show_categories_service;

#[get("/categories")]
pub async fn show_categories() -> impl Responder {
    HttpResponse::Ok().json(show_categories_service())
}
