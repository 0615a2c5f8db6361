use actix_web::{HttpResponse, Responder, post, web};

use crate::forms::admin::{SetPasswordForm, SetPasswordFormPayload};
use crate::repository::DieselRepository;
use crate::services::admin::set_password as set_password_service;

use super::{blocking, error_response};

/// Unauthenticated: any caller may replace the admin password.
#[post("/admin/password")]
pub async fn set_password(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<SetPasswordForm>,
) -> impl Responder {
    let payload: SetPasswordFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return error_response(e.into()),
    };

    match blocking(&repo, move |repo| set_password_service(payload, repo))
        .await
        .and_then(|result| result)
    {
        Ok(outcome) => HttpResponse::Ok().json(outcome),
        Err(err) => error_response(err),
    }
}
