use actix_web::{HttpResponse, delete, get, post, web};
use payloads::requests;

use crate::store::Store;

use super::{APIError, ok_data, ok_message};

#[tracing::instrument(skip(store), ret)]
#[get("/campaigns")]
pub async fn list_campaigns(
    store: web::Data<Store>,
) -> Result<HttpResponse, APIError> {
    Ok(ok_data(store.list_campaigns().await))
}

#[tracing::instrument(skip(store), ret)]
#[post("/campaigns")]
pub async fn create_campaign(
    details: web::Json<requests::CreateCampaign>,
    store: web::Data<Store>,
) -> Result<HttpResponse, APIError> {
    let campaign_id = store.create_campaign(&details).await?;
    tracing::info!(%campaign_id, "campaign created");
    Ok(ok_message("Campaign created successfully"))
}

#[tracing::instrument(skip(store), ret)]
#[get("/campaigns/list")]
pub async fn campaign_summaries(
    store: web::Data<Store>,
) -> Result<HttpResponse, APIError> {
    Ok(ok_data(store.campaign_summaries().await))
}

#[tracing::instrument(skip(store), ret)]
#[post("/campaigns/employee-campaign")]
pub async fn add_to_campaign(
    details: web::Json<requests::CampaignMembership>,
    store: web::Data<Store>,
) -> Result<HttpResponse, APIError> {
    store.add_to_campaign(&details).await?;
    Ok(ok_message("Employee assigned to campaign"))
}

#[tracing::instrument(skip(store), ret)]
#[delete("/campaigns/employee-campaign")]
pub async fn remove_from_campaign(
    details: web::Json<requests::CampaignMembership>,
    store: web::Data<Store>,
) -> Result<HttpResponse, APIError> {
    store.remove_from_campaign(&details).await?;
    Ok(ok_message("Employee removed from campaign"))
}
