use crate::{
    AssignmentId, EmployeeId, Envelope, Page, requests, responses,
};
use reqwest::StatusCode;
use serde::{Serialize, de::DeserializeOwned};

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// An API client for the admin REST api.
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl APIClient {
    fn format_url(&self, path: &str) -> String {
        format!("{}/api/admin/{path}", &self.address)
    }

    async fn get(&self, path: &str) -> Result<reqwest::Response, ClientError> {
        let request = self.inner_client.get(self.format_url(path));
        send(request, "GET", path).await
    }

    async fn get_with_query(
        &self,
        path: &str,
        query: &impl Serialize,
    ) -> Result<reqwest::Response, ClientError> {
        let request = self.inner_client.get(self.format_url(path)).query(query);
        send(request, "GET", path).await
    }

    async fn post(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<reqwest::Response, ClientError> {
        let request = self.inner_client.post(self.format_url(path)).json(body);
        send(request, "POST", path).await
    }

    async fn put(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<reqwest::Response, ClientError> {
        let request = self.inner_client.put(self.format_url(path)).json(body);
        send(request, "PUT", path).await
    }

    async fn delete(
        &self,
        path: &str,
    ) -> Result<reqwest::Response, ClientError> {
        let request = self.inner_client.delete(self.format_url(path));
        send(request, "DELETE", path).await
    }

    async fn delete_with_body(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<reqwest::Response, ClientError> {
        let request = self.inner_client.delete(self.format_url(path)).json(body);
        send(request, "DELETE", path).await
    }
}

/// Methods on the admin API
impl APIClient {
    pub async fn list_employees(
        &self,
        query: &requests::EmployeeQuery,
    ) -> Result<Page<responses::Employee>, ClientError> {
        let response = self.get_with_query("employees", query).await?;
        ok_envelope::<Vec<_>>(response).await?.into_page()
    }

    pub async fn create_employee(
        &self,
        details: &requests::CreateEmployee,
    ) -> Result<Option<String>, ClientError> {
        let response = self.post("employees", details).await?;
        ok_message(response).await
    }

    /// Replaces all editable fields, including the active flag.
    pub async fn update_employee(
        &self,
        employee_id: EmployeeId,
        details: &requests::UpdateEmployee,
    ) -> Result<Option<String>, ClientError> {
        let response = self
            .put(&format!("employees/{employee_id}/status"), details)
            .await?;
        ok_message(response).await
    }

    pub async fn employee_options(
        &self,
    ) -> Result<Vec<responses::EmployeeOption>, ClientError> {
        let response = self.get("employees/list").await?;
        ok_data(response).await
    }

    pub async fn employee_filter_options(
        &self,
    ) -> Result<responses::FilterOptions, ClientError> {
        let response = self.get("employees/filters").await?;
        ok_data(response).await
    }

    pub async fn list_campaigns(
        &self,
    ) -> Result<Vec<responses::Campaign>, ClientError> {
        let response = self.get("campaigns").await?;
        ok_data(response).await
    }

    pub async fn create_campaign(
        &self,
        details: &requests::CreateCampaign,
    ) -> Result<Option<String>, ClientError> {
        let response = self.post("campaigns", details).await?;
        ok_message(response).await
    }

    pub async fn campaign_summaries(
        &self,
    ) -> Result<Vec<responses::CampaignSummary>, ClientError> {
        let response = self.get("campaigns/list").await?;
        ok_data(response).await
    }

    pub async fn assign_employee_to_campaign(
        &self,
        details: &requests::CampaignMembership,
    ) -> Result<Option<String>, ClientError> {
        let response =
            self.post("campaigns/employee-campaign", details).await?;
        ok_message(response).await
    }

    pub async fn remove_employee_from_campaign(
        &self,
        details: &requests::CampaignMembership,
    ) -> Result<Option<String>, ClientError> {
        let response = self
            .delete_with_body("campaigns/employee-campaign", details)
            .await?;
        ok_message(response).await
    }

    pub async fn list_region_assignments(
        &self,
        query: &requests::RegionQuery,
    ) -> Result<Page<responses::RegionAssignment>, ClientError> {
        let response = self.get_with_query("regions", query).await?;
        ok_envelope::<Vec<_>>(response).await?.into_page()
    }

    pub async fn region_options(
        &self,
    ) -> Result<Vec<responses::RegionOption>, ClientError> {
        let response = self.get("regions-name").await?;
        ok_data(response).await
    }

    /// Sets the status of an employee's assignment to one region.
    pub async fn update_region_status(
        &self,
        employee_id: &str,
        details: &requests::UpdateRegionStatus,
    ) -> Result<Option<String>, ClientError> {
        let response = self
            .put(&format!("regions/{employee_id}/status"), details)
            .await?;
        ok_message(response).await
    }

    pub async fn create_region_assignment(
        &self,
        details: &requests::CreateRegionAssignment,
    ) -> Result<Option<String>, ClientError> {
        let response = self.post("region-assignment", details).await?;
        ok_message(response).await
    }

    pub async fn delete_region_assignment(
        &self,
        assignment_id: AssignmentId,
    ) -> Result<Option<String>, ClientError> {
        let response = self
            .delete(&format!("parivartan-bdm/{assignment_id}"))
            .await?;
        ok_message(response).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The api answered with `success: false`.
    #[error("{}", .0.as_deref().unwrap_or_default())]
    Rejected(Option<String>),
    /// A non-2xx response, with the envelope message if the body had one.
    #[error("Request failed with status code {}", .0.as_u16())]
    APIError(StatusCode, Option<String>),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
    #[error("Unexpected response from server")]
    Malformed(#[from] serde_json::Error),
    #[error("Response did not include any data")]
    MissingData,
}

impl ClientError {
    /// The message the api put in the response body, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ClientError::Rejected(message)
            | ClientError::APIError(_, message) => message
                .as_deref()
                .map(str::trim)
                .filter(|message| !message.is_empty()),
            _ => None,
        }
    }

    /// What to show the user: the server's message, else this error's own
    /// message, else `fallback`.
    pub fn message_or(&self, fallback: &str) -> String {
        if let Some(message) = self.server_message() {
            return message.to_string();
        }
        let own = self.to_string();
        if own.is_empty() {
            fallback.to_string()
        } else {
            own
        }
    }
}

async fn send(
    request: reqwest::RequestBuilder,
    method: &str,
    path: &str,
) -> Result<reqwest::Response, ClientError> {
    tracing::debug!("{method} /api/admin/{path}");
    let result: ReqwestResult = request.send().await;
    result.map_err(|error| {
        tracing::error!("{method} /api/admin/{path} failed: {error}");
        ClientError::Network(error)
    })
}

/// Check the status of a response and decode its envelope, or return an
/// appropriate error. Failed responses are logged here.
pub async fn ok_envelope<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<Envelope<T>, ClientError> {
    let status = response.status();
    let url = response.url().path().to_string();
    let text = response.text().await?;
    if !status.is_success() {
        let message = error_message(&text);
        tracing::error!(
            "{url} returned {status}: {}",
            message.as_deref().unwrap_or(&text)
        );
        return Err(ClientError::APIError(status, message));
    }
    let envelope: Envelope<T> = serde_json::from_str(&text)?;
    if !envelope.success {
        tracing::error!(
            "{url} was rejected: {}",
            envelope.message.as_deref().unwrap_or_default()
        );
    }
    Ok(envelope)
}

pub async fn ok_data<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    ok_envelope(response).await?.into_data()
}

pub async fn ok_message(
    response: reqwest::Response,
) -> Result<Option<String>, ClientError> {
    ok_envelope::<serde::de::IgnoredAny>(response)
        .await?
        .into_message()
}

/// Pull `message` out of an error body when it is a json envelope.
fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<Envelope<serde::de::IgnoredAny>>(body)
        .ok()
        .and_then(|envelope| envelope.message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_wins_over_everything() {
        let error = ClientError::APIError(
            StatusCode::BAD_REQUEST,
            Some("Employee already assigned".into()),
        );
        assert_eq!(error.message_or("Failed"), "Employee already assigned");
    }

    #[test]
    fn generic_message_is_used_without_a_server_message() {
        let error = ClientError::APIError(StatusCode::INTERNAL_SERVER_ERROR, None);
        assert_eq!(
            error.message_or("Failed"),
            "Request failed with status code 500"
        );
        assert_eq!(
            ClientError::MissingData.message_or("Failed"),
            "Response did not include any data"
        );
    }

    #[test]
    fn rejection_without_message_falls_back() {
        let error = ClientError::Rejected(None);
        assert_eq!(error.message_or("Failed to assign region"), "Failed to assign region");

        let error = ClientError::Rejected(Some("  ".into()));
        assert_eq!(error.message_or("Failed to assign region"), "Failed to assign region");
    }

    #[test]
    fn error_bodies_yield_their_message() {
        assert_eq!(
            error_message(r#"{"success": false, "message": "Not found"}"#),
            Some("Not found".to_string())
        );
        assert_eq!(error_message("<html>bad gateway</html>"), None);
    }
}
