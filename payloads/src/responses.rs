use crate::{
    AssignmentId, AssignmentRole, AssignmentStatus, CampaignId, ClientError,
    EmployeeId, Project, RegionId, RoleId,
};
use serde::{Deserialize, Serialize};

/// The wrapper every admin api response is delivered in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            pagination: None,
        }
    }

    pub fn ok_page(data: T, pagination: Pagination) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            pagination: Some(pagination),
        }
    }

    pub fn acknowledged(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message.into()),
            pagination: None,
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
            pagination: None,
        }
    }

    /// Take the payload of a successful envelope.
    pub fn into_data(self) -> Result<T, ClientError> {
        if !self.success {
            return Err(ClientError::Rejected(self.message));
        }
        self.data.ok_or(ClientError::MissingData)
    }

    /// For endpoints that only confirm an action. Any data is ignored.
    pub fn into_message(self) -> Result<Option<String>, ClientError> {
        if !self.success {
            return Err(ClientError::Rejected(self.message));
        }
        Ok(self.message)
    }
}

impl<T> Envelope<Vec<T>> {
    /// Take a page of items. Endpoints that don't paginate are treated as a
    /// single page holding everything.
    pub fn into_page(self) -> Result<Page<T>, ClientError> {
        let pagination = self.pagination;
        let items = self.into_data()?;
        let pagination = pagination
            .unwrap_or_else(|| Pagination::single_page(items.len() as u64));
        Ok(Page { items, pagination })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub total: u64,
    pub page: u64,
    pub limit: u64,
    #[serde(rename = "totalPages")]
    pub total_pages: u64,
}

impl Pagination {
    pub fn new(total: u64, page: u64, limit: u64) -> Self {
        let total_pages = if limit == 0 { 0 } else { total.div_ceil(limit) };
        Self {
            total,
            page,
            limit,
            total_pages,
        }
    }

    pub fn single_page(total: u64) -> Self {
        Self {
            total,
            page: 1,
            limit: total,
            total_pages: if total == 0 { 0 } else { 1 },
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::single_page(0)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Employee {
    pub employee_id: EmployeeId,
    pub employee_name: String,
    pub employee_phone: String,
    #[serde(default)]
    pub employee_mail_id: Option<String>,
    /// Some records predate the flag and carry null.
    #[serde(rename = "is_active", default)]
    pub is_active: Option<bool>,
    #[serde(rename = "role", default)]
    pub role: Option<EmployeeRole>,
    #[serde(default)]
    pub region_name: Option<String>,
    #[serde(rename = "EmployeeRoleID", default)]
    pub employee_role_id: Option<RoleId>,
}

impl Employee {
    pub fn role_name(&self) -> Option<&str> {
        self.role.as_ref().map(|role| role.role_name.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EmployeeRole {
    pub role_name: String,
}

/// Compact employee record for dropdowns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EmployeeOption {
    pub employee_id: EmployeeId,
    pub employee_name: String,
    #[serde(rename = "EmployeeRoleID", default)]
    pub employee_role_id: Option<RoleId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterOptions {
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub regions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Campaign {
    pub campaign_id: CampaignId,
    pub campaign_name: String,
    #[serde(default)]
    pub employees: Vec<CampaignEmployee>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CampaignEmployee {
    pub employee_id: EmployeeId,
    pub employee_name: String,
    pub employee_phone: String,
    #[serde(default)]
    pub employee_region: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CampaignSummary {
    pub campaign_id: CampaignId,
    pub campaign_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RegionAssignment {
    #[serde(rename = "id")]
    pub id: AssignmentId,
    /// Employee ids arrive as strings here and are not guaranteed to be
    /// well formed.
    pub employee_id: String,
    pub employee_name: String,
    pub project: Project,
    #[serde(rename = "role")]
    pub role: AssignmentRole,
    pub region_id: RegionId,
    pub region_name: String,
    #[serde(default)]
    pub state_id: Option<String>,
    #[serde(default)]
    pub state_name: Option<String>,
    #[serde(rename = "is_active")]
    pub is_active: AssignmentStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RegionOption {
    pub region_id: RegionId,
    pub region_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn employee_decodes_with_api_field_names() {
        let json = r#"{
            "EmployeeId": 1,
            "EmployeeName": "Asha",
            "EmployeePhone": "9876543210",
            "EmployeeMailId": null,
            "is_active": null,
            "role": {"RoleName": "Agent"},
            "RegionName": "North",
            "EmployeeRoleID": 1
        }"#;
        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.employee_id, EmployeeId(1));
        assert_eq!(employee.is_active, None);
        assert_eq!(employee.role_name(), Some("Agent"));
        assert_eq!(employee.employee_role_id, Some(RoleId(1)));
    }

    #[test]
    fn page_envelope_keeps_pagination() {
        let json = r#"{
            "success": true,
            "data": [{"EmployeeId": 1, "EmployeeName": "A", "EmployeePhone": "1"}],
            "pagination": {"total": 1, "page": 1, "limit": 10, "totalPages": 1}
        }"#;
        let envelope: Envelope<Vec<Employee>> =
            serde_json::from_str(json).unwrap();
        let page = envelope.into_page().unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.pagination.total_pages, 1);
        assert_eq!(page.pagination.limit, 10);
    }

    #[test]
    fn unpaginated_list_is_a_single_page() {
        let envelope = Envelope::ok(vec![1, 2, 3]);
        let page = envelope.into_page().unwrap();
        assert_eq!(page.pagination, Pagination::single_page(3));
        assert_eq!(page.pagination.total_pages, 1);
    }

    #[test]
    fn unsuccessful_envelope_is_rejected_with_its_message() {
        let json = r#"{"success": false, "message": "X"}"#;
        let envelope: Envelope<Vec<Campaign>> =
            serde_json::from_str(json).unwrap();
        match envelope.into_data() {
            Err(ClientError::Rejected(Some(message))) => assert_eq!(message, "X"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn successful_envelope_without_data_is_missing_data() {
        let envelope: Envelope<Vec<Campaign>> =
            serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(matches!(envelope.into_data(), Err(ClientError::MissingData)));
    }

    #[test]
    fn acknowledgement_carries_the_message() {
        let envelope: Envelope<serde_json::Value> =
            serde_json::from_str(r#"{"success": true, "message": "Done"}"#)
                .unwrap();
        assert_eq!(envelope.into_message().unwrap().as_deref(), Some("Done"));
    }

    #[test]
    fn region_assignment_decodes_string_status() {
        let json = r#"{
            "id": 42,
            "EmployeeId": "7",
            "EmployeeName": "Ravi",
            "Project": "Open Shed",
            "role": "BDM",
            "RegionId": "R1",
            "RegionName": "North",
            "StateId": "S1",
            "StateName": "Punjab",
            "is_active": "Inactive"
        }"#;
        let row: RegionAssignment = serde_json::from_str(json).unwrap();
        assert_eq!(row.id, AssignmentId(42));
        assert_eq!(row.project, Project::OpenShed);
        assert_eq!(row.role, AssignmentRole::Bdm);
        assert_eq!(row.is_active, AssignmentStatus::Inactive);
    }

    #[test]
    fn pagination_rounds_total_pages_up() {
        assert_eq!(Pagination::new(21, 1, 10).total_pages, 3);
        assert_eq!(Pagination::new(0, 1, 10).total_pages, 0);
    }
}
