//! In-memory state behind the mock admin api.
//!
//! Every collection lives in one `Inner` guarded by a single lock, so each
//! operation sees and leaves a consistent snapshot. Ids are allocated from
//! per-collection counters and never reused.

use std::sync::Arc;
use tokio::sync::RwLock;

use payloads::{
    AssignmentId, AssignmentRole, AssignmentStatus, CampaignId, EmployeeId,
    Pagination, RegionId, requests, role_name,
    responses::{
        Campaign, CampaignEmployee, CampaignSummary, Employee, EmployeeOption,
        EmployeeRole, FilterOptions, RegionAssignment, RegionOption,
    },
};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("An employee with this phone number already exists")]
    DuplicatePhone,
    #[error("Unknown role")]
    UnknownRole,
    #[error("Employee not found")]
    EmployeeNotFound,
    #[error("Campaign not found")]
    CampaignNotFound,
    #[error("A campaign with this name already exists")]
    CampaignNameTaken,
    #[error("Employee already assigned to this campaign")]
    AlreadyInCampaign,
    #[error("Employee is not part of this campaign")]
    NotInCampaign,
    #[error("Region not found")]
    RegionNotFound,
    #[error("Region assignment not found")]
    AssignmentNotFound,
    #[error("Employee is already assigned to this region for this project")]
    AlreadyAssigned,
    #[error("Deactivate the assignment before deleting it")]
    AssignmentStillActive,
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            StoreError::EmployeeNotFound
                | StoreError::CampaignNotFound
                | StoreError::RegionNotFound
                | StoreError::AssignmentNotFound
        )
    }
}

/// A region known to the api, with the state it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionRecord {
    pub region_id: RegionId,
    pub region_name: String,
    pub state_id: Option<String>,
    pub state_name: Option<String>,
}

#[derive(Debug, Clone)]
struct CampaignRecord {
    id: CampaignId,
    name: String,
    members: Vec<EmployeeId>,
}

#[derive(Debug, Default)]
struct Inner {
    employees: Vec<Employee>,
    campaigns: Vec<CampaignRecord>,
    regions: Vec<RegionRecord>,
    assignments: Vec<RegionAssignment>,
    next_employee_id: i64,
    next_campaign_id: i64,
    next_assignment_id: i64,
}

impl Inner {
    fn employee(&self, id: EmployeeId) -> Result<&Employee, StoreError> {
        self.employees
            .iter()
            .find(|employee| employee.employee_id == id)
            .ok_or(StoreError::EmployeeNotFound)
    }

    fn campaign_mut(
        &mut self,
        id: CampaignId,
    ) -> Result<&mut CampaignRecord, StoreError> {
        self.campaigns
            .iter_mut()
            .find(|campaign| campaign.id == id)
            .ok_or(StoreError::CampaignNotFound)
    }

    fn region(&self, id: &RegionId) -> Result<&RegionRecord, StoreError> {
        self.regions
            .iter()
            .find(|region| &region.region_id == id)
            .ok_or(StoreError::RegionNotFound)
    }
}

/// Handle to the shared state. Clones share the same data.
#[derive(Debug, Clone, Default)]
pub struct Store {
    inner: Arc<RwLock<Inner>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Regions are reference data with no endpoint to create them.
    pub async fn add_region(&self, region: RegionRecord) {
        let mut inner = self.inner.write().await;
        inner.regions.retain(|r| r.region_id != region.region_id);
        inner.regions.push(region);
    }

    /// Insert an assignment row as-is, bypassing validation. Used to load
    /// legacy rows such as ones missing an employee id.
    pub async fn import_assignment(
        &self,
        mut row: RegionAssignment,
    ) -> AssignmentId {
        let mut inner = self.inner.write().await;
        inner.next_assignment_id += 1;
        row.id = AssignmentId(inner.next_assignment_id);
        let id = row.id;
        inner.assignments.push(row);
        id
    }

    pub async fn list_employees(
        &self,
        query: &requests::EmployeeQuery,
    ) -> (Vec<Employee>, Pagination) {
        let inner = self.inner.read().await;
        let search = query.search.trim().to_lowercase();
        let matching: Vec<Employee> = inner
            .employees
            .iter()
            .filter(|e| {
                search.is_empty()
                    || e.employee_name.to_lowercase().contains(&search)
                    || e.employee_phone.contains(&search)
                    || e.employee_mail_id
                        .as_ref()
                        .is_some_and(|mail| mail.to_lowercase().contains(&search))
            })
            .filter(|e| query.is_active.is_none_or(|a| e.is_active == Some(a)))
            .filter(|e| {
                query
                    .role
                    .as_deref()
                    .is_none_or(|role| e.role_name() == Some(role))
            })
            .filter(|e| {
                query
                    .region
                    .as_deref()
                    .is_none_or(|region| e.region_name.as_deref() == Some(region))
            })
            .cloned()
            .collect();
        paginate(matching, query.page, query.limit)
    }

    pub async fn create_employee(
        &self,
        details: &requests::CreateEmployee,
    ) -> Result<Employee, StoreError> {
        let mut inner = self.inner.write().await;
        let (name, phone) =
            required_name_and_phone(&details.employee_name, &details.employee_phone)?;
        if inner.employees.iter().any(|e| e.employee_phone == phone) {
            return Err(StoreError::DuplicatePhone);
        }
        let role = employee_role(details.employee_role_id)?;

        inner.next_employee_id += 1;
        let employee = Employee {
            employee_id: EmployeeId(inner.next_employee_id),
            employee_name: name,
            employee_phone: phone,
            employee_mail_id: details.employee_mail_id.clone(),
            is_active: Some(details.is_active),
            role,
            region_name: None,
            employee_role_id: details.employee_role_id,
        };
        inner.employees.push(employee.clone());
        Ok(employee)
    }

    pub async fn update_employee(
        &self,
        employee_id: EmployeeId,
        details: &requests::UpdateEmployee,
    ) -> Result<Employee, StoreError> {
        let mut inner = self.inner.write().await;
        let (name, phone) =
            required_name_and_phone(&details.employee_name, &details.employee_phone)?;
        if inner
            .employees
            .iter()
            .any(|e| e.employee_phone == phone && e.employee_id != employee_id)
        {
            return Err(StoreError::DuplicatePhone);
        }
        let role = employee_role(details.employee_role_id)?;

        let employee = inner
            .employees
            .iter_mut()
            .find(|e| e.employee_id == employee_id)
            .ok_or(StoreError::EmployeeNotFound)?;
        employee.employee_name = name;
        employee.employee_phone = phone;
        employee.employee_mail_id = details.employee_mail_id.clone();
        employee.is_active = Some(details.is_active);
        employee.role = role;
        employee.employee_role_id = details.employee_role_id;
        Ok(employee.clone())
    }

    /// Set the region shown on an employee's record.
    pub async fn set_employee_region(
        &self,
        employee_id: EmployeeId,
        region_name: Option<String>,
    ) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        let employee = inner
            .employees
            .iter_mut()
            .find(|e| e.employee_id == employee_id)
            .ok_or(StoreError::EmployeeNotFound)?;
        employee.region_name = region_name;
        Ok(())
    }

    pub async fn employee_options(&self) -> Vec<EmployeeOption> {
        let inner = self.inner.read().await;
        inner
            .employees
            .iter()
            .map(|e| EmployeeOption {
                employee_id: e.employee_id,
                employee_name: e.employee_name.clone(),
                employee_role_id: e.employee_role_id,
            })
            .collect()
    }

    pub async fn filter_options(&self) -> FilterOptions {
        let inner = self.inner.read().await;
        let mut roles: Vec<String> = inner
            .employees
            .iter()
            .filter_map(|e| e.role_name().map(str::to_string))
            .collect();
        let mut regions: Vec<String> = inner
            .employees
            .iter()
            .filter_map(|e| e.region_name.clone())
            .collect();
        roles.sort();
        roles.dedup();
        regions.sort();
        regions.dedup();
        FilterOptions { roles, regions }
    }

    pub async fn list_campaigns(&self) -> Vec<Campaign> {
        let inner = self.inner.read().await;
        inner
            .campaigns
            .iter()
            .map(|campaign| Campaign {
                campaign_id: campaign.id,
                campaign_name: campaign.name.clone(),
                employees: campaign
                    .members
                    .iter()
                    .filter_map(|id| inner.employee(*id).ok())
                    .map(|e| CampaignEmployee {
                        employee_id: e.employee_id,
                        employee_name: e.employee_name.clone(),
                        employee_phone: e.employee_phone.clone(),
                        employee_region: e.region_name.clone(),
                    })
                    .collect(),
            })
            .collect()
    }

    pub async fn campaign_summaries(&self) -> Vec<CampaignSummary> {
        let inner = self.inner.read().await;
        inner
            .campaigns
            .iter()
            .map(|campaign| CampaignSummary {
                campaign_id: campaign.id,
                campaign_name: campaign.name.clone(),
            })
            .collect()
    }

    pub async fn create_campaign(
        &self,
        details: &requests::CreateCampaign,
    ) -> Result<CampaignId, StoreError> {
        let mut inner = self.inner.write().await;
        let name = details.campaign_name.trim();
        if name.is_empty() {
            return Err(StoreError::MissingField("CampaignName"));
        }
        if inner
            .campaigns
            .iter()
            .any(|c| c.name.eq_ignore_ascii_case(name))
        {
            return Err(StoreError::CampaignNameTaken);
        }
        inner.next_campaign_id += 1;
        let id = CampaignId(inner.next_campaign_id);
        inner.campaigns.push(CampaignRecord {
            id,
            name: name.to_string(),
            members: Vec::new(),
        });
        Ok(id)
    }

    pub async fn add_to_campaign(
        &self,
        membership: &requests::CampaignMembership,
    ) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        inner.employee(membership.employee_id)?;
        let campaign = inner.campaign_mut(membership.campaign_id)?;
        if campaign.members.contains(&membership.employee_id) {
            return Err(StoreError::AlreadyInCampaign);
        }
        campaign.members.push(membership.employee_id);
        Ok(())
    }

    pub async fn remove_from_campaign(
        &self,
        membership: &requests::CampaignMembership,
    ) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        let campaign = inner.campaign_mut(membership.campaign_id)?;
        let before = campaign.members.len();
        campaign.members.retain(|id| *id != membership.employee_id);
        if campaign.members.len() == before {
            return Err(StoreError::NotInCampaign);
        }
        Ok(())
    }

    pub async fn list_region_assignments(
        &self,
        query: &requests::RegionQuery,
    ) -> (Vec<RegionAssignment>, Pagination) {
        let inner = self.inner.read().await;
        let name = query.employee_name.as_deref().map(str::to_lowercase);
        let matching: Vec<RegionAssignment> = inner
            .assignments
            .iter()
            .filter(|row| {
                name.as_deref().is_none_or(|name| {
                    row.employee_name.to_lowercase().contains(name)
                })
            })
            .filter(|row| {
                query.role.as_deref().is_none_or(|role| row.role.as_str() == role)
            })
            .filter(|row| {
                query
                    .project
                    .as_deref()
                    .is_none_or(|project| row.project.as_str() == project)
            })
            .filter(|row| {
                query
                    .is_active
                    .as_deref()
                    .is_none_or(|status| row.is_active.as_str() == status)
            })
            .cloned()
            .collect();
        match (query.page, query.limit) {
            (Some(page), Some(limit)) => paginate(matching, page, limit),
            _ => {
                let pagination = Pagination::single_page(matching.len() as u64);
                (matching, pagination)
            }
        }
    }

    pub async fn region_options(&self) -> Vec<RegionOption> {
        let inner = self.inner.read().await;
        inner
            .regions
            .iter()
            .map(|region| RegionOption {
                region_id: region.region_id.clone(),
                region_name: region.region_name.clone(),
            })
            .collect()
    }

    /// Set the status of `employee_id`'s assignments in one region.
    pub async fn update_region_status(
        &self,
        employee_id: &str,
        details: &requests::UpdateRegionStatus,
    ) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        let mut found = false;
        for row in inner.assignments.iter_mut().filter(|row| {
            row.employee_id == employee_id && row.region_id == details.region_id
        }) {
            row.is_active = details.is_active;
            found = true;
        }
        if !found {
            return Err(StoreError::AssignmentNotFound);
        }
        Ok(())
    }

    pub async fn create_region_assignment(
        &self,
        details: &requests::CreateRegionAssignment,
    ) -> Result<AssignmentId, StoreError> {
        let mut inner = self.inner.write().await;
        let employee_id = details
            .employee_id
            .trim()
            .parse()
            .map(EmployeeId)
            .map_err(|_| StoreError::EmployeeNotFound)?;
        inner.employee(employee_id)?;
        let region = inner.region(&details.region_id)?.clone();
        if inner.assignments.iter().any(|row| {
            row.employee_id == details.employee_id
                && row.region_id == details.region_id
                && row.project == details.project
        }) {
            return Err(StoreError::AlreadyAssigned);
        }

        let role = match (
            bool::from(details.is_zonal_manager),
            bool::from(details.is_bdm),
        ) {
            (true, _) => AssignmentRole::ZonalManager,
            (false, true) => AssignmentRole::Bdm,
            (false, false) => AssignmentRole::Other("Member".to_string()),
        };
        inner.next_assignment_id += 1;
        let id = AssignmentId(inner.next_assignment_id);
        inner.assignments.push(RegionAssignment {
            id,
            employee_id: details.employee_id.clone(),
            employee_name: details.employee_name.clone(),
            project: details.project,
            role,
            region_id: region.region_id,
            region_name: region.region_name,
            state_id: region.state_id,
            state_name: region.state_name,
            is_active: AssignmentStatus::Active,
        });
        Ok(id)
    }

    pub async fn delete_region_assignment(
        &self,
        id: AssignmentId,
    ) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        let index = inner
            .assignments
            .iter()
            .position(|row| row.id == id)
            .ok_or(StoreError::AssignmentNotFound)?;
        if inner.assignments[index].is_active.is_active() {
            return Err(StoreError::AssignmentStillActive);
        }
        inner.assignments.remove(index);
        Ok(())
    }
}

fn required_name_and_phone(
    name: &str,
    phone: &str,
) -> Result<(String, String), StoreError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(StoreError::MissingField("EmployeeName"));
    }
    let phone = phone.trim();
    if phone.is_empty() {
        return Err(StoreError::MissingField("EmployeePhone"));
    }
    Ok((name.to_string(), phone.to_string()))
}

fn employee_role(
    role_id: Option<payloads::RoleId>,
) -> Result<Option<EmployeeRole>, StoreError> {
    role_id
        .map(|id| {
            role_name(id)
                .map(|name| EmployeeRole {
                    role_name: name.to_string(),
                })
                .ok_or(StoreError::UnknownRole)
        })
        .transpose()
}

fn paginate<T>(items: Vec<T>, page: u64, limit: u64) -> (Vec<T>, Pagination) {
    let page = page.max(1);
    let limit = limit.max(1);
    let pagination = Pagination::new(items.len() as u64, page, limit);
    let skip = usize::try_from((page - 1).saturating_mul(limit)).unwrap_or(usize::MAX);
    let take = usize::try_from(limit).unwrap_or(usize::MAX);
    let items = items.into_iter().skip(skip).take(take).collect();
    (items, pagination)
}

#[cfg(test)]
mod tests {
    use super::*;
    use payloads::RoleId;

    fn new_employee(name: &str, phone: &str) -> requests::CreateEmployee {
        requests::CreateEmployee {
            employee_name: name.to_string(),
            employee_phone: phone.to_string(),
            employee_mail_id: None,
            employee_role_id: Some(RoleId(1)),
            is_active: true,
        }
    }

    #[tokio::test]
    async fn employees_paginate_and_filter() {
        let store = Store::new();
        for n in 0..12 {
            store
                .create_employee(&new_employee(&format!("Agent {n}"), &format!("90000{n:02}")))
                .await
                .unwrap();
        }
        let query = requests::EmployeeQuery {
            page: 2,
            ..Default::default()
        };
        let (rows, pagination) = store.list_employees(&query).await;
        assert_eq!(rows.len(), 2);
        assert_eq!(pagination.total, 12);
        assert_eq!(pagination.total_pages, 2);

        let query = requests::EmployeeQuery {
            is_active: Some(false),
            ..Default::default()
        };
        let (rows, _) = store.list_employees(&query).await;
        assert!(rows.is_empty());
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let (items, pagination) = paginate(vec![1, 2, 3], u64::MAX, u64::MAX);
        assert!(items.is_empty());
        assert_eq!(pagination.total, 3);
        assert_eq!(pagination.total_pages, 1);

        let (items, _) = paginate(vec![1, 2, 3], 2, 2);
        assert_eq!(items, vec![3]);
    }

    #[tokio::test]
    async fn duplicate_phone_is_refused() {
        let store = Store::new();
        store.create_employee(&new_employee("A", "1")).await.unwrap();
        let result = store.create_employee(&new_employee("B", "1")).await;
        assert!(matches!(result, Err(StoreError::DuplicatePhone)));
    }

    #[tokio::test]
    async fn campaign_membership_is_unique() {
        let store = Store::new();
        let employee = store.create_employee(&new_employee("A", "1")).await.unwrap();
        let campaign_id = store
            .create_campaign(&requests::CreateCampaign {
                campaign_name: "Launch".into(),
            })
            .await
            .unwrap();
        let membership = requests::CampaignMembership {
            employee_id: employee.employee_id,
            campaign_id,
        };
        store.add_to_campaign(&membership).await.unwrap();
        assert!(matches!(
            store.add_to_campaign(&membership).await,
            Err(StoreError::AlreadyInCampaign)
        ));
        store.remove_from_campaign(&membership).await.unwrap();
        assert!(matches!(
            store.remove_from_campaign(&membership).await,
            Err(StoreError::NotInCampaign)
        ));
    }
}
