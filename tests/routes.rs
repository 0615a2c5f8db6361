use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use serde_json::{Value, json};

use poster_shop::repository::DieselRepository;
use poster_shop::routes::configure;

mod common;

macro_rules! init_app {
    ($test_db:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(DieselRepository::new($test_db.pool())))
                .configure(configure),
        )
        .await
    };
}

fn subcategory_body(password: &str) -> Value {
    json!({
        "nombre": "Grunge",
        "imagen_url": "https://example.com/grunge.jpg",
        "categoria": "musica-artistas",
        "password": password,
    })
}

fn poster_body(subcategoria_id: i64, password: &str) -> Value {
    json!({
        "titulo": "Poster Nirvana",
        "imagen_url": "https://example.com/nirvana.jpg",
        "precio": 2500,
        "categoria": "musica-artistas",
        "subcategoria_id": subcategoria_id,
        "password": password,
    })
}

#[actix_web::test]
async fn health_reports_ok() {
    let test_db = common::TestDb::new();
    let app = init_app!(test_db);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"status": "ok"}));
}

#[actix_web::test]
async fn lists_categories_with_labels() {
    let test_db = common::TestDb::new();
    let app = init_app!(test_db);

    let body: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/categories").to_request(),
    )
    .await;
    let items = body.as_array().expect("array");
    assert_eq!(items.len(), 6);
    assert_eq!(items[1], json!({"id": "musica-artistas", "label": "Música/Artistas"}));
}

#[actix_web::test]
async fn create_update_delete_over_http() {
    let test_db = common::TestDb::new();
    let app = init_app!(test_db);

    let sub: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri("/api/subcategories")
            .set_json(subcategory_body("abc123"))
            .to_request(),
    )
    .await;
    assert_eq!(sub["nombre"], "Grunge");
    assert!(sub.get("createdAt").is_some());
    assert!(sub.get("updatedAt").is_some());
    let sub_id = sub["id"].as_i64().unwrap();

    let poster: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri("/api/posters")
            .set_json(poster_body(sub_id, "abc123"))
            .to_request(),
    )
    .await;
    assert_eq!(poster["precio"], 2500);
    assert_eq!(poster["subcategoria_id"], sub_id);
    let poster_id = poster["id"].as_i64().unwrap();

    let resp = test::call_service(
        &app,
        test::TestRequest::put()
            .uri(&format!("/api/posters/{poster_id}"))
            .set_json(json!({"precio": 3000, "password": "wrong"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"error": "incorrect password"}));

    let updated: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::put()
            .uri(&format!("/api/posters/{poster_id}"))
            .set_json(json!({"precio": 3000, "password": "abc123"}))
            .to_request(),
    )
    .await;
    assert_eq!(updated["precio"], 3000);
    assert_eq!(updated["titulo"], "Poster Nirvana");

    let deleted: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/api/subcategories/{sub_id}"))
            .set_json(json!({"password": "abc123"}))
            .to_request(),
    )
    .await;
    assert_eq!(deleted, json!({"success": true}));

    let posters: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/posters/by-subcategory/{sub_id}"))
            .to_request(),
    )
    .await;
    assert_eq!(posters, json!([]));
}

#[actix_web::test]
async fn unknown_ids_return_null() {
    let test_db = common::TestDb::new();
    let app = init_app!(test_db);

    let body: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/posters/77").to_request(),
    )
    .await;
    assert_eq!(body, Value::Null);

    test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/subcategories")
            .set_json(subcategory_body("abc123"))
            .to_request(),
    )
    .await;
    let body: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::put()
            .uri("/api/subcategories/77")
            .set_json(json!({"nombre": "Otro", "password": "abc123"}))
            .to_request(),
    )
    .await;
    assert_eq!(body, Value::Null);
}

#[actix_web::test]
async fn validation_failures_are_bad_requests() {
    let test_db = common::TestDb::new();
    let app = init_app!(test_db);

    let mut body = subcategory_body("abc123");
    body["imagen_url"] = json!("not a url");
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/subcategories")
            .set_json(body)
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].is_string());

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/admin/password")
            .set_json(json!({"password": "abc"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/search/posters").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn update_before_any_password_is_unauthorized() {
    let test_db = common::TestDb::new();
    let app = init_app!(test_db);

    let resp = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri("/api/posters/1")
            .set_json(json!({"password": "abc123"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"error": "no admin password configured"}));
}

#[actix_web::test]
async fn set_password_replaces_credential() {
    let test_db = common::TestDb::new();
    let app = init_app!(test_db);

    let body: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri("/api/admin/password")
            .set_json(json!({"password": "secreto"}))
            .to_request(),
    )
    .await;
    assert_eq!(body, json!({"success": true}));

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/subcategories")
            .set_json(subcategory_body("abc123"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/subcategories")
            .set_json(subcategory_body("secreto"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn latest_and_search_endpoints() {
    let test_db = common::TestDb::new();
    let app = init_app!(test_db);

    let sub: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri("/api/subcategories")
            .set_json(subcategory_body("abc123"))
            .to_request(),
    )
    .await;
    let sub_id = sub["id"].as_i64().unwrap();
    for titulo in ["Poster Nirvana", "Nirvana Tribute"] {
        let mut body = poster_body(sub_id, "abc123");
        body["titulo"] = json!(titulo);
        test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/posters")
                .set_json(body)
                .to_request(),
        )
        .await;
    }

    let latest: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri("/api/posters/latest?limit=1")
            .to_request(),
    )
    .await;
    assert_eq!(latest.as_array().unwrap().len(), 1);
    assert_eq!(latest[0]["titulo"], "Nirvana Tribute");

    let suggestions: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri("/api/search/suggestions?query=Nirv")
            .to_request(),
    )
    .await;
    assert_eq!(suggestions, json!(["Nirvana Tribute"]));

    let found: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri("/api/search/posters?query=Nirv")
            .to_request(),
    )
    .await;
    assert_eq!(found.as_array().unwrap().len(), 2);

    let by_category: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri("/api/posters/by-category/peliculas")
            .to_request(),
    )
    .await;
    assert_eq!(by_category, json!([]));
}
