use actix_web::http::{StatusCode, header};
use actix_web::{HttpRequest, HttpResponse, Responder, delete, get, post, put, web};
use serde_json::Value;

use crate::domain::criteria::CustomerCriteria;
use crate::dto::customer::CustomerQuery;
use crate::repository::DieselRepository;
use crate::routes::{error_response, json_error};
use crate::services::customers as customers_service;

/// Path ids are runs of digits; ones too large for storage cannot exist.
fn parse_customer_id(raw: &str) -> Option<i32> {
    raw.parse().ok()
}

fn unknown_customer(raw: &str) -> HttpResponse {
    json_error(
        StatusCode::NOT_FOUND,
        format!("Customer with id '{raw}' was not found."),
    )
}

#[get("/customers", name = "list_customers")]
pub async fn list_customers(
    params: web::Query<Vec<(String, String)>>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let query: CustomerQuery = params.into_inner().into_iter().collect();
    let criteria = CustomerCriteria::from(query);
    match customers_service::list_customers(repo.get_ref(), &criteria) {
        Ok(customers) => HttpResponse::Ok().json(customers),
        Err(err) => error_response(&err),
    }
}

#[post("/customers", name = "create_customer")]
pub async fn create_customer(
    req: HttpRequest,
    repo: web::Data<DieselRepository>,
    payload: web::Json<Value>,
) -> impl Responder {
    match customers_service::create_customer(repo.get_ref(), &payload) {
        Ok(customer) => {
            let location = req
                .url_for("show_customer", [customer.id.to_string()])
                .map(|url| url.to_string())
                .unwrap_or_else(|_| format!("/customers/{}", customer.id));
            HttpResponse::Created()
                .insert_header((header::LOCATION, location))
                .json(customer)
        }
        Err(err) => error_response(&err),
    }
}

#[get("/customers/{customer_id:\\d+}", name = "show_customer")]
pub async fn show_customer(
    customer_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let Some(id) = parse_customer_id(&customer_id) else {
        return unknown_customer(&customer_id);
    };
    match customers_service::get_customer(repo.get_ref(), id) {
        Ok(customer) => HttpResponse::Ok().json(customer),
        Err(err) => error_response(&err),
    }
}

#[put("/customers/{customer_id:\\d+}", name = "update_customer")]
pub async fn update_customer(
    customer_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
    payload: web::Json<Value>,
) -> impl Responder {
    let Some(id) = parse_customer_id(&customer_id) else {
        return unknown_customer(&customer_id);
    };
    match customers_service::update_customer(repo.get_ref(), id, &payload) {
        Ok(customer) => HttpResponse::Ok().json(customer),
        Err(err) => error_response(&err),
    }
}

#[delete("/customers/{customer_id:\\d+}", name = "delete_customer")]
pub async fn delete_customer(
    customer_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let Some(id) = parse_customer_id(&customer_id) else {
        log::info!("Delete of unrepresentable customer id [{customer_id}] skipped");
        return HttpResponse::NoContent().finish();
    };
    match customers_service::delete_customer(repo.get_ref(), id) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(&err),
    }
}

#[put("/customers/{customer_id:\\d+}/suspend", name = "suspend_customer")]
pub async fn suspend_customer(
    customer_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let Some(id) = parse_customer_id(&customer_id) else {
        return unknown_customer(&customer_id);
    };
    match customers_service::suspend_customer(repo.get_ref(), id) {
        Ok(customer) => HttpResponse::Ok().json(customer),
        Err(err) => error_response(&err),
    }
}

#[put("/customers/{customer_id:\\d+}/activate", name = "activate_customer")]
pub async fn activate_customer(
    customer_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let Some(id) = parse_customer_id(&customer_id) else {
        return unknown_customer(&customer_id);
    };
    match customers_service::activate_customer(repo.get_ref(), id) {
        Ok(customer) => HttpResponse::Ok().json(customer),
        Err(err) => error_response(&err),
    }
}
