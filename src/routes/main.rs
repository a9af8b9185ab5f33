use std::collections::BTreeMap;

use actix_web::{HttpRequest, HttpResponse, Responder, get};

use crate::dto::main::{ApiMetadata, HealthStatus};

#[get("/health")]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthStatus::healthy())
}

#[get("/api")]
pub async fn api_metadata(req: HttpRequest) -> impl Responder {
    let url = |name: &str, elements: &[&str]| {
        req.url_for(name, elements)
            .map(|url| url.to_string())
            .unwrap_or_default()
    };

    let collection = url("list_customers", &[]);
    let mut paths = BTreeMap::new();
    paths.insert("create", url("create_customer", &[]));
    paths.insert("list_all", collection.clone());
    paths.insert("read_one", url("show_customer", &["0"]));
    paths.insert("update", url("update_customer", &["0"]));
    paths.insert("delete", url("delete_customer", &["0"]));
    paths.insert("suspend", url("suspend_customer", &["0"]));
    paths.insert("activate", url("activate_customer", &["0"]));
    paths.insert("find_by_email", format!("{collection}?email=test@example.com"));

    HttpResponse::Ok().json(ApiMetadata {
        name: "Customer REST API Service",
        version: env!("CARGO_PKG_VERSION"),
        paths,
    })
}
