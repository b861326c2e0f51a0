pub mod campaigns;
pub mod employees;
pub mod regions;

use actix_web::{
    HttpResponse, ResponseError, body::BoxBody, dev::HttpServiceFactory,
    http::StatusCode, web,
};
use payloads::Envelope;

use crate::{store::StoreError, telemetry::log_error};

pub fn api_services() -> impl HttpServiceFactory {
    web::scope("/api/admin")
        .service(employees::list_employees)
        .service(employees::create_employee)
        .service(employees::employee_options)
        .service(employees::filter_options)
        .service(employees::update_employee)
        .service(campaigns::list_campaigns)
        .service(campaigns::create_campaign)
        .service(campaigns::campaign_summaries)
        .service(campaigns::add_to_campaign)
        .service(campaigns::remove_from_campaign)
        .service(regions::list_region_assignments)
        .service(regions::region_options)
        .service(regions::update_region_status)
        .service(regions::create_region_assignment)
        .service(regions::delete_region_assignment)
}

/// Malformed bodies get an envelope like every other failure.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        APIError::BadRequest(anyhow::anyhow!("{err}")).into()
    })
}

pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        APIError::BadRequest(anyhow::anyhow!("{err}")).into()
    })
}

pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| {
        APIError::BadRequest(anyhow::anyhow!("{err}")).into()
    })
}

#[derive(Debug, thiserror::Error)]
pub enum APIError {
    /// Business rule failures are reported with a 200 and `success: false`.
    #[error("{0}")]
    Rejected(String),
    #[error("Bad request")]
    BadRequest(#[source] anyhow::Error),
    #[error("Not found")]
    NotFound(#[source] anyhow::Error),
    #[error("Something went wrong")]
    UnexpectedError(#[from] anyhow::Error),
}

impl ResponseError for APIError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Rejected(_) => StatusCode::OK,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        let message = match self {
            Self::Rejected(message) => message.clone(),
            Self::BadRequest(e) => format!("{self}: {e}"),
            Self::NotFound(e) => e.to_string(),
            Self::UnexpectedError(e) => {
                log_error(anyhow::anyhow!("{e:#}"));
                self.to_string()
            }
        };
        HttpResponse::build(self.status_code())
            .json(Envelope::<()>::rejected(message))
    }
}

impl From<StoreError> for APIError {
    fn from(e: StoreError) -> Self {
        if e.is_not_found() {
            APIError::NotFound(e.into())
        } else {
            APIError::Rejected(e.to_string())
        }
    }
}

/// Reply with data.
fn ok_data<T: serde::Serialize>(data: T) -> HttpResponse {
    HttpResponse::Ok().json(Envelope::ok(data))
}

/// Reply with only a confirmation message.
fn ok_message(message: &str) -> HttpResponse {
    HttpResponse::Ok().json(Envelope::<()>::acknowledged(message))
}
