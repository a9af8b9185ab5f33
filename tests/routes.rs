use actix_web::http::{StatusCode, header};
use actix_web::{App, test, web};
use customer_directory::repository::DieselRepository;
use customer_directory::routes;
use serde_json::{Value, json};

mod common;

macro_rules! init_app {
    ($test_db:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(DieselRepository::new(
                    $test_db.pool().clone(),
                )))
                .configure(routes::configure),
        )
        .await
    };
}

fn sample_payload() -> Value {
    json!({
        "first_name": "First",
        "last_name": "Last",
        "email": "test@email.com",
        "phone_number": "123-456-7890",
        "address": "1234 testStreet"
    })
}

#[actix_web::test]
async fn test_create_suspend_and_search() {
    let test_db = common::TestDb::new("test_create_suspend_and_search.db");
    let app = init_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/customers")
        .set_json(sample_payload())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let location = resp
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(location.ends_with("/customers/1"), "location was {location}");
    let created: Value = test::read_body_json(resp).await;
    assert_eq!(created["id"], 1);
    assert_eq!(created["suspended"], false);
    assert_eq!(created["address"], "1234 testStreet");

    let req = test::TestRequest::put()
        .uri("/customers/1/suspend")
        .to_request();
    let suspended: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(suspended["suspended"], true);

    let req = test::TestRequest::get()
        .uri("/customers?suspended=true")
        .to_request();
    let found: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(found, json!([suspended]));

    let req = test::TestRequest::get()
        .uri("/customers?suspended=false")
        .to_request();
    let found: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(found, json!([]));

    let req = test::TestRequest::get()
        .uri("/customers?email=test@email.com&last_name=Last")
        .to_request();
    let found: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(found.as_array().map(Vec::len), Some(1));

    let req = test::TestRequest::put()
        .uri("/customers/1/activate")
        .to_request();
    let activated: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(activated["suspended"], false);
}

#[actix_web::test]
async fn test_show_update_and_delete() {
    let test_db = common::TestDb::new("test_show_update_and_delete.db");
    let app = init_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/customers")
        .set_json(sample_payload())
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::CREATED
    );

    let req = test::TestRequest::put()
        .uri("/customers/1")
        .set_json(json!({
            "first_name": "Changed",
            "last_name": "Last",
            "email": "changed@email.com"
        }))
        .to_request();
    let updated: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated["id"], 1);
    assert_eq!(updated["first_name"], "Changed");
    assert_eq!(updated["phone_number"], Value::Null);

    let req = test::TestRequest::get().uri("/customers/1").to_request();
    let shown: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(shown, updated);

    let req = test::TestRequest::delete().uri("/customers/1").to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NO_CONTENT
    );

    let req = test::TestRequest::get().uri("/customers/1").to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );
}

#[actix_web::test]
async fn test_missing_customers() {
    let test_db = common::TestDb::new("test_missing_customers.db");
    let app = init_app!(test_db);

    let req = test::TestRequest::put()
        .uri("/customers/999")
        .set_json(sample_payload())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Not Found");

    let req = test::TestRequest::put()
        .uri("/customers/999/suspend")
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );

    let req = test::TestRequest::delete().uri("/customers/999").to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NO_CONTENT
    );
}

#[actix_web::test]
async fn test_rejects_invalid_bodies() {
    let test_db = common::TestDb::new("test_rejects_invalid_bodies.db");
    let app = init_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/customers")
        .set_json(json!({"first_name": "Only"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body.get("error").is_some());
    assert_eq!(body["message"], "Invalid Customer: missing last_name");

    let req = test::TestRequest::post()
        .uri("/customers")
        .set_payload(sample_payload().to_string())
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::UNSUPPORTED_MEDIA_TYPE
    );

    let req = test::TestRequest::post()
        .uri("/customers")
        .insert_header((header::CONTENT_TYPE, "text/plain"))
        .set_payload(sample_payload().to_string())
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::UNSUPPORTED_MEDIA_TYPE
    );

    let req = test::TestRequest::post()
        .uri("/customers")
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .set_payload("{not json")
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::BAD_REQUEST
    );

    let req = test::TestRequest::get().uri("/customers").to_request();
    let listed: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(listed, json!([]));
}

#[actix_web::test]
async fn test_health_and_metadata() {
    let test_db = common::TestDb::new("test_health_and_metadata.db");
    let app = init_app!(test_db);

    let req = test::TestRequest::get().uri("/health").to_request();
    let health: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(health, json!({"status": 200, "message": "Healthy"}));

    let req = test::TestRequest::get().uri("/api").to_request();
    let metadata: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(metadata["name"], "Customer REST API Service");
    let suspend = metadata["paths"]["suspend"].as_str().unwrap_or_default();
    assert!(suspend.ends_with("/customers/0/suspend"), "suspend was {suspend}");
}

#[actix_web::test]
async fn test_repeated_query_keys_use_first_value() {
    let test_db = common::TestDb::new("test_repeated_query_keys_use_first_value.db");
    let app = init_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/customers")
        .set_json(sample_payload())
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::CREATED
    );

    let req = test::TestRequest::get()
        .uri("/customers?email=test@email.com&email=other@email.com&page=3")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let found: Value = test::read_body_json(resp).await;
    assert_eq!(found.as_array().map(Vec::len), Some(1));

    let req = test::TestRequest::get()
        .uri("/customers?email=other@email.com&email=test@email.com")
        .to_request();
    let found: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(found, json!([]));
}

#[actix_web::test]
async fn test_oversized_ids_do_not_exist() {
    let test_db = common::TestDb::new("test_oversized_ids_do_not_exist.db");
    let app = init_app!(test_db);

    let req = test::TestRequest::delete()
        .uri("/customers/99999999999")
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NO_CONTENT
    );

    let req = test::TestRequest::get()
        .uri("/customers/99999999999")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["message"],
        "Customer with id '99999999999' was not found."
    );

    let req = test::TestRequest::put()
        .uri("/customers/99999999999/suspend")
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );

    let req = test::TestRequest::put()
        .uri("/customers/99999999999")
        .set_json(sample_payload())
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );
}
