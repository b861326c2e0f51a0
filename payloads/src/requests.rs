use crate::{
    AssignmentStatus, CampaignId, EmployeeId, Project, RegionId, RoleId,
    responses::{Employee, EmployeeOption},
};
use serde::{Deserialize, Serialize};

/// Rows per page requested by the employee screen.
pub const EMPLOYEE_PAGE_LIMIT: u64 = 10;

/// A form failed local validation. These are shown inline, and no request
/// is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Campaign name is required")]
    CampaignNameRequired,
    #[error("Please select an employee")]
    EmployeeRequired,
    #[error("Please select a valid employee")]
    InvalidEmployee,
    #[error("Please select a region")]
    RegionRequired,
    #[error("Employee name is required")]
    EmployeeNameRequired,
    #[error("Phone number is required")]
    PhoneRequired,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateEmployee {
    pub employee_name: String,
    pub employee_phone: String,
    pub employee_mail_id: Option<String>,
    #[serde(rename = "EmployeeRoleID")]
    pub employee_role_id: Option<RoleId>,
    #[serde(rename = "is_active")]
    pub is_active: bool,
}

/// Full replacement of an employee's editable fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateEmployee {
    pub employee_id: EmployeeId,
    pub employee_name: String,
    pub employee_phone: String,
    pub employee_mail_id: Option<String>,
    #[serde(rename = "EmployeeRoleID")]
    pub employee_role_id: Option<RoleId>,
    #[serde(rename = "is_active")]
    pub is_active: bool,
}

/// Editable state of the add/edit employee modal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EmployeeForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub role_id: Option<RoleId>,
    pub is_active: bool,
}

impl EmployeeForm {
    pub fn new() -> Self {
        Self {
            is_active: true,
            ..Default::default()
        }
    }

    /// Prefill from an existing record. A null active flag is saved as
    /// active unless the status is changed.
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            name: employee.employee_name.clone(),
            phone: employee.employee_phone.clone(),
            email: employee.employee_mail_id.clone().unwrap_or_default(),
            role_id: employee.employee_role_id,
            is_active: employee.is_active.unwrap_or(true),
        }
    }

    fn validated(&self) -> Result<(String, String, Option<String>), ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmployeeNameRequired);
        }
        let phone = self.phone.trim();
        if phone.is_empty() {
            return Err(ValidationError::PhoneRequired);
        }
        let email = Some(self.email.trim())
            .filter(|email| !email.is_empty())
            .map(str::to_string);
        Ok((name.to_string(), phone.to_string(), email))
    }

    pub fn into_create(&self) -> Result<CreateEmployee, ValidationError> {
        let (employee_name, employee_phone, employee_mail_id) =
            self.validated()?;
        Ok(CreateEmployee {
            employee_name,
            employee_phone,
            employee_mail_id,
            employee_role_id: self.role_id,
            is_active: self.is_active,
        })
    }

    pub fn into_update(
        &self,
        employee_id: EmployeeId,
    ) -> Result<UpdateEmployee, ValidationError> {
        let (employee_name, employee_phone, employee_mail_id) =
            self.validated()?;
        Ok(UpdateEmployee {
            employee_id,
            employee_name,
            employee_phone,
            employee_mail_id,
            employee_role_id: self.role_id,
            is_active: self.is_active,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateCampaign {
    pub campaign_name: String,
}

impl CreateCampaign {
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::CampaignNameRequired);
        }
        Ok(Self {
            campaign_name: name.to_string(),
        })
    }
}

/// Adds or removes one employee from one campaign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CampaignMembership {
    pub employee_id: EmployeeId,
    pub campaign_id: CampaignId,
}

impl CampaignMembership {
    pub fn new(
        employee_id: Option<EmployeeId>,
        campaign_id: CampaignId,
    ) -> Result<Self, ValidationError> {
        let employee_id = employee_id.ok_or(ValidationError::EmployeeRequired)?;
        Ok(Self {
            employee_id,
            campaign_id,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateRegionStatus {
    #[serde(rename = "RegionId")]
    pub region_id: RegionId,
    pub is_active: AssignmentStatus,
}

/// "Yes"/"No" flag as the region endpoints expect it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YesNo {
    Yes,
    No,
}

impl From<bool> for YesNo {
    fn from(value: bool) -> Self {
        if value { YesNo::Yes } else { YesNo::No }
    }
}

impl From<YesNo> for bool {
    fn from(value: YesNo) -> Self {
        matches!(value, YesNo::Yes)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateRegionAssignment {
    /// Sent as a string, the way region rows carry it.
    pub employee_id: String,
    pub employee_name: String,
    pub region_id: RegionId,
    pub project: Project,
    #[serde(rename = "is_bdm")]
    pub is_bdm: YesNo,
    #[serde(rename = "is_zonal_manager")]
    pub is_zonal_manager: YesNo,
}

/// Editable state of the assign region modal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RegionAssignmentForm {
    /// Selected dropdown value, an employee id as text or empty.
    pub employee_id: String,
    pub region_id: String,
    pub project: Project,
    pub is_bdm: bool,
    pub is_zonal_manager: bool,
}

impl RegionAssignmentForm {
    /// The employee must be one of the offered options and a region must
    /// be chosen.
    pub fn validate(
        &self,
        employees: &[EmployeeOption],
    ) -> Result<CreateRegionAssignment, ValidationError> {
        let employee = employees
            .iter()
            .find(|option| option.employee_id.to_string() == self.employee_id)
            .ok_or(ValidationError::InvalidEmployee)?;
        if self.region_id.trim().is_empty() {
            return Err(ValidationError::RegionRequired);
        }
        Ok(CreateRegionAssignment {
            employee_id: self.employee_id.clone(),
            employee_name: employee.employee_name.clone(),
            region_id: RegionId(self.region_id.clone()),
            project: self.project,
            is_bdm: self.is_bdm.into(),
            is_zonal_manager: self.is_zonal_manager.into(),
        })
    }
}

/// Employees eligible for a region assignment: those with one of the
/// known roles.
pub fn assignable_employees(employees: &[EmployeeOption]) -> Vec<EmployeeOption> {
    employees
        .iter()
        .filter(|employee| {
            employee
                .employee_role_id
                .is_some_and(|role| crate::role_name(role).is_some())
        })
        .cloned()
        .collect()
}

/// Query string for the employee list. `None` fields are left out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmployeeQuery {
    pub page: u64,
    pub limit: u64,
    pub search: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

impl Default for EmployeeQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: EMPLOYEE_PAGE_LIMIT,
            search: String::new(),
            is_active: None,
            role: None,
            region: None,
        }
    }
}

/// Query string for region assignments. Empty filters are left out.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RegionQuery {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub page: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub limit: Option<u64>,
    #[serde(
        rename = "EmployeeName",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub employee_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub role: Option<String>,
    #[serde(
        rename = "Project",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub project: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub is_active: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option(id: i64, name: &str, role: Option<i64>) -> EmployeeOption {
        EmployeeOption {
            employee_id: EmployeeId(id),
            employee_name: name.to_string(),
            employee_role_id: role.map(RoleId),
        }
    }

    #[test]
    fn blank_campaign_name_is_rejected() {
        assert_eq!(
            CreateCampaign::new("   "),
            Err(ValidationError::CampaignNameRequired)
        );
        assert_eq!(
            ValidationError::CampaignNameRequired.to_string(),
            "Campaign name is required"
        );
        let campaign = CreateCampaign::new("  Diwali Push ").unwrap();
        assert_eq!(campaign.campaign_name, "Diwali Push");
    }

    #[test]
    fn campaign_membership_needs_an_employee() {
        assert_eq!(
            CampaignMembership::new(None, CampaignId(3)),
            Err(ValidationError::EmployeeRequired)
        );
        let membership =
            CampaignMembership::new(Some(EmployeeId(5)), CampaignId(3)).unwrap();
        assert_eq!(
            serde_json::to_value(membership).unwrap(),
            serde_json::json!({"EmployeeId": 5, "CampaignId": 3})
        );
    }

    #[test]
    fn employee_form_checks_name_before_phone() {
        let form = EmployeeForm::new();
        assert_eq!(
            form.into_create(),
            Err(ValidationError::EmployeeNameRequired)
        );

        let form = EmployeeForm {
            name: "Asha".into(),
            ..EmployeeForm::new()
        };
        assert_eq!(form.into_create(), Err(ValidationError::PhoneRequired));
    }

    #[test]
    fn employee_form_drops_blank_email() {
        let form = EmployeeForm {
            name: " Asha ".into(),
            phone: "98765".into(),
            email: "  ".into(),
            role_id: Some(RoleId(2)),
            is_active: true,
        };
        let update = form.into_update(EmployeeId(4)).unwrap();
        assert_eq!(update.employee_name, "Asha");
        assert_eq!(update.employee_mail_id, None);

        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json["EmployeeRoleID"], 2);
        assert_eq!(json["is_active"], true);
        assert_eq!(json["EmployeeId"], 4);
    }

    #[test]
    fn region_form_requires_a_listed_employee_then_a_region() {
        let employees = vec![option(7, "Ravi", Some(2))];

        let form = RegionAssignmentForm::default();
        assert_eq!(
            form.validate(&employees),
            Err(ValidationError::InvalidEmployee)
        );

        let form = RegionAssignmentForm {
            employee_id: "7".into(),
            ..Default::default()
        };
        assert_eq!(form.validate(&employees), Err(ValidationError::RegionRequired));

        let form = RegionAssignmentForm {
            employee_id: "7".into(),
            region_id: "R1".into(),
            is_bdm: true,
            ..Default::default()
        };
        let request = form.validate(&employees).unwrap();
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "EmployeeId": "7",
                "EmployeeName": "Ravi",
                "RegionId": "R1",
                "Project": "Parivartan",
                "is_bdm": "Yes",
                "is_zonal_manager": "No",
            })
        );
    }

    #[test]
    fn only_employees_with_known_roles_are_assignable() {
        let employees = vec![
            option(1, "A", Some(1)),
            option(2, "B", None),
            option(3, "C", Some(3)),
            option(4, "D", Some(8)),
        ];
        let ids: Vec<_> = assignable_employees(&employees)
            .into_iter()
            .map(|employee| employee.employee_id.0)
            .collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn region_query_omits_empty_filters() {
        let query = RegionQuery {
            page: Some(2),
            limit: Some(10),
            project: Some("Gen Nxt".into()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            serde_json::json!({"page": 2, "limit": 10, "Project": "Gen Nxt"})
        );
    }

    #[test]
    fn region_status_update_uses_api_names() {
        let update = UpdateRegionStatus {
            region_id: RegionId("R9".into()),
            is_active: AssignmentStatus::Inactive,
        };
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            serde_json::json!({"RegionId": "R9", "is_active": "Inactive"})
        );
    }

    #[test]
    fn null_active_flag_is_kept_active_on_save() {
        let employee: Employee = serde_json::from_value(serde_json::json!({
            "EmployeeId": 1,
            "EmployeeName": "Asha Rao",
            "EmployeePhone": "9876543210",
            "is_active": null
        }))
        .unwrap();

        let update = EmployeeForm::from_employee(&employee)
            .into_update(employee.employee_id)
            .unwrap();
        assert!(update.is_active);

        let inactive = Employee {
            is_active: Some(false),
            ..employee
        };
        assert!(!EmployeeForm::from_employee(&inactive).is_active);
    }
}
