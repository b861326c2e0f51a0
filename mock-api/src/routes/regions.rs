use actix_web::{HttpResponse, delete, get, post, put, web};
use payloads::{AssignmentId, Envelope, requests};

use crate::store::Store;

use super::{APIError, ok_data, ok_message};

#[tracing::instrument(skip(store), ret)]
#[get("/regions")]
pub async fn list_region_assignments(
    query: web::Query<requests::RegionQuery>,
    store: web::Data<Store>,
) -> Result<HttpResponse, APIError> {
    let (rows, pagination) = store.list_region_assignments(&query).await;
    Ok(HttpResponse::Ok().json(Envelope::ok_page(rows, pagination)))
}

#[tracing::instrument(skip(store), ret)]
#[get("/regions-name")]
pub async fn region_options(
    store: web::Data<Store>,
) -> Result<HttpResponse, APIError> {
    Ok(ok_data(store.region_options().await))
}

#[tracing::instrument(skip(store), ret)]
#[put("/regions/{employee_id}/status")]
pub async fn update_region_status(
    path: web::Path<String>,
    details: web::Json<requests::UpdateRegionStatus>,
    store: web::Data<Store>,
) -> Result<HttpResponse, APIError> {
    store.update_region_status(&path, &details).await?;
    Ok(ok_message("Status updated"))
}

#[tracing::instrument(skip(store), ret)]
#[post("/region-assignment")]
pub async fn create_region_assignment(
    details: web::Json<requests::CreateRegionAssignment>,
    store: web::Data<Store>,
) -> Result<HttpResponse, APIError> {
    let id = store.create_region_assignment(&details).await?;
    tracing::info!(assignment_id = %id, "region assigned");
    Ok(ok_message("Region assigned successfully"))
}

#[tracing::instrument(skip(store), ret)]
#[delete("/parivartan-bdm/{id}")]
pub async fn delete_region_assignment(
    path: web::Path<i64>,
    store: web::Data<Store>,
) -> Result<HttpResponse, APIError> {
    store
        .delete_region_assignment(AssignmentId(path.into_inner()))
        .await?;
    Ok(ok_message("Region assignment deleted"))
}
