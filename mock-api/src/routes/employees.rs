use actix_web::{HttpResponse, get, post, put, web};
use payloads::{EmployeeId, Envelope, requests};

use crate::store::Store;

use super::{APIError, ok_data, ok_message};

#[tracing::instrument(skip(store), ret)]
#[get("/employees")]
pub async fn list_employees(
    query: web::Query<requests::EmployeeQuery>,
    store: web::Data<Store>,
) -> Result<HttpResponse, APIError> {
    let (employees, pagination) = store.list_employees(&query).await;
    Ok(HttpResponse::Ok().json(Envelope::ok_page(employees, pagination)))
}

#[tracing::instrument(skip(store), ret)]
#[post("/employees")]
pub async fn create_employee(
    details: web::Json<requests::CreateEmployee>,
    store: web::Data<Store>,
) -> Result<HttpResponse, APIError> {
    let employee = store.create_employee(&details).await?;
    tracing::info!(employee_id = %employee.employee_id, "employee created");
    Ok(ok_message("Employee created successfully"))
}

#[tracing::instrument(skip(store), ret)]
#[get("/employees/list")]
pub async fn employee_options(
    store: web::Data<Store>,
) -> Result<HttpResponse, APIError> {
    Ok(ok_data(store.employee_options().await))
}

#[tracing::instrument(skip(store), ret)]
#[get("/employees/filters")]
pub async fn filter_options(
    store: web::Data<Store>,
) -> Result<HttpResponse, APIError> {
    Ok(ok_data(store.filter_options().await))
}

/// Despite the path, this replaces every editable field.
#[tracing::instrument(skip(store), ret)]
#[put("/employees/{employee_id}/status")]
pub async fn update_employee(
    path: web::Path<i64>,
    details: web::Json<requests::UpdateEmployee>,
    store: web::Data<Store>,
) -> Result<HttpResponse, APIError> {
    let employee_id = EmployeeId(path.into_inner());
    store.update_employee(employee_id, &details).await?;
    Ok(ok_message("Employee updated successfully"))
}
