//! Filter state owned by the list screens, and the client side filters
//! applied to already fetched collections.

use crate::{
    CampaignId, RegionId,
    requests::{EMPLOYEE_PAGE_LIMIT, EmployeeQuery, RegionQuery},
    responses::{Campaign, EmployeeOption, RegionAssignment},
};

/// Select value meaning "don't filter on this field".
pub const ALL: &str = "All";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl StatusFilter {
    pub const OPTIONS: [StatusFilter; 3] =
        [StatusFilter::All, StatusFilter::Active, StatusFilter::Inactive];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Active => "Active",
            StatusFilter::Inactive => "Inactive",
        }
    }

    /// Parse a select value, treating anything unknown as `All`.
    pub fn from_value(value: &str) -> Self {
        match value {
            "Active" => StatusFilter::Active,
            "Inactive" => StatusFilter::Inactive,
            _ => StatusFilter::All,
        }
    }

    pub fn as_query(&self) -> Option<bool> {
        match self {
            StatusFilter::All => None,
            StatusFilter::Active => Some(true),
            StatusFilter::Inactive => Some(false),
        }
    }
}

/// Server side filters for the employee list. Every setter sends the user
/// back to the first page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeFilters {
    pub search: String,
    pub status: StatusFilter,
    pub role: String,
    pub region: String,
    pub page: u64,
}

impl Default for EmployeeFilters {
    fn default() -> Self {
        Self {
            search: String::new(),
            status: StatusFilter::All,
            role: ALL.to_string(),
            region: ALL.to_string(),
            page: 1,
        }
    }
}

impl EmployeeFilters {
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    pub fn set_status(&mut self, status: StatusFilter) {
        self.status = status;
        self.page = 1;
    }

    pub fn set_role(&mut self, role: impl Into<String>) {
        self.role = role.into();
        self.page = 1;
    }

    pub fn set_region(&mut self, region: impl Into<String>) {
        self.region = region.into();
        self.page = 1;
    }

    pub fn set_page(&mut self, page: u64) {
        self.page = page.max(1);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn to_query(&self) -> EmployeeQuery {
        EmployeeQuery {
            page: self.page,
            limit: EMPLOYEE_PAGE_LIMIT,
            search: self.search.clone(),
            is_active: self.status.as_query(),
            role: not_all(&self.role),
            region: not_all(&self.region),
        }
    }
}

fn not_all(value: &str) -> Option<String> {
    (!value.is_empty() && value != ALL).then(|| value.to_string())
}

/// Fields of [`RegionFilters`], for clearing one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionFilterField {
    EmployeeName,
    Role,
    Project,
    Status,
}

impl RegionFilterField {
    pub fn label(&self) -> &'static str {
        match self {
            RegionFilterField::EmployeeName => "Name",
            RegionFilterField::Role => "Role",
            RegionFilterField::Project => "Project",
            RegionFilterField::Status => "Status",
        }
    }
}

/// A filter currently in effect, as shown in the chip row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterChip {
    pub field: RegionFilterField,
    pub value: String,
}

impl FilterChip {
    pub fn label(&self) -> String {
        format!("{}: {}", self.field.label(), self.value)
    }
}

/// Server side filters for region assignments. Empty means "any".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionFilters {
    pub employee_name: String,
    pub role: String,
    pub project: String,
    pub is_active: String,
    pub page: u64,
}

impl Default for RegionFilters {
    fn default() -> Self {
        Self {
            employee_name: String::new(),
            role: String::new(),
            project: String::new(),
            is_active: String::new(),
            page: 1,
        }
    }
}

impl RegionFilters {
    pub fn get(&self, field: RegionFilterField) -> &str {
        match field {
            RegionFilterField::EmployeeName => &self.employee_name,
            RegionFilterField::Role => &self.role,
            RegionFilterField::Project => &self.project,
            RegionFilterField::Status => &self.is_active,
        }
    }

    pub fn set(&mut self, field: RegionFilterField, value: impl Into<String>) {
        let value = value.into();
        match field {
            RegionFilterField::EmployeeName => self.employee_name = value,
            RegionFilterField::Role => self.role = value,
            RegionFilterField::Project => self.project = value,
            RegionFilterField::Status => self.is_active = value,
        }
        self.page = 1;
    }

    pub fn clear_field(&mut self, field: RegionFilterField) {
        self.set(field, String::new());
    }

    pub fn clear_all(&mut self) {
        *self = Self::default();
    }

    pub fn set_page(&mut self, page: u64) {
        self.page = page.max(1);
    }

    pub fn chips(&self) -> Vec<FilterChip> {
        [
            RegionFilterField::EmployeeName,
            RegionFilterField::Role,
            RegionFilterField::Project,
            RegionFilterField::Status,
        ]
        .into_iter()
        .filter(|field| !self.get(*field).trim().is_empty())
        .map(|field| FilterChip {
            field,
            value: self.get(field).to_string(),
        })
        .collect()
    }

    pub fn active_count(&self) -> usize {
        self.chips().len()
    }

    pub fn has_active(&self) -> bool {
        self.active_count() > 0
    }

    pub fn to_query(&self, limit: u64) -> RegionQuery {
        RegionQuery {
            page: Some(self.page),
            limit: Some(limit),
            employee_name: non_empty(&self.employee_name),
            role: non_empty(&self.role),
            project: non_empty(&self.project),
            is_active: non_empty(&self.is_active),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Campaigns matching `term` on their own name or id, or on any member's
/// name, phone, id or region. A blank term matches everything.
pub fn filter_campaigns(campaigns: &[Campaign], term: &str) -> Vec<Campaign> {
    if term.trim().is_empty() {
        return campaigns.to_vec();
    }
    let lower = term.to_lowercase();
    campaigns
        .iter()
        .filter(|campaign| campaign_matches(campaign, term, &lower))
        .cloned()
        .collect()
}

fn campaign_matches(campaign: &Campaign, term: &str, lower: &str) -> bool {
    campaign.campaign_name.to_lowercase().contains(lower)
        || campaign.campaign_id.to_string().contains(lower)
        || campaign.employees.iter().any(|employee| {
            employee.employee_name.to_lowercase().contains(lower)
                || employee.employee_phone.contains(term)
                || employee.employee_id.to_string().contains(term)
                || employee
                    .employee_region
                    .as_ref()
                    .is_some_and(|region| region.to_lowercase().contains(lower))
        })
}

/// Rows for the grouped region view: name matches case-insensitively or
/// the employee id contains `search`, and the region matches when one is
/// selected.
pub fn filter_assignments(
    rows: &[RegionAssignment],
    search: &str,
    region_id: Option<&RegionId>,
) -> Vec<RegionAssignment> {
    let lower = search.to_lowercase();
    rows.iter()
        .filter(|row| {
            row.employee_name.to_lowercase().contains(&lower)
                || row.employee_id.contains(search)
        })
        .filter(|row| region_id.is_none_or(|region| &row.region_id == region))
        .cloned()
        .collect()
}

/// Employees that can still be added to a campaign.
pub fn available_for_campaign(
    employees: &[EmployeeOption],
    campaigns: &[Campaign],
    campaign_id: CampaignId,
) -> Vec<EmployeeOption> {
    let Some(campaign) = campaigns
        .iter()
        .find(|campaign| campaign.campaign_id == campaign_id)
    else {
        return employees.to_vec();
    };
    employees
        .iter()
        .filter(|option| {
            !campaign
                .employees
                .iter()
                .any(|member| member.employee_id == option.employee_id)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        AssignmentId, AssignmentRole, AssignmentStatus, EmployeeId, Project,
        responses::CampaignEmployee,
    };

    fn member(id: i64, name: &str, phone: &str, region: Option<&str>) -> CampaignEmployee {
        CampaignEmployee {
            employee_id: EmployeeId(id),
            employee_name: name.to_string(),
            employee_phone: phone.to_string(),
            employee_region: region.map(str::to_string),
        }
    }

    fn campaigns() -> Vec<Campaign> {
        vec![
            Campaign {
                campaign_id: CampaignId(11),
                campaign_name: "Monsoon Drive".into(),
                employees: vec![member(1, "Asha Rao", "98450", Some("North"))],
            },
            Campaign {
                campaign_id: CampaignId(12),
                campaign_name: "Festive Offers".into(),
                employees: vec![member(2, "Ravi Kumar", "77001", None)],
            },
            Campaign {
                campaign_id: CampaignId(30),
                campaign_name: "Winter".into(),
                employees: vec![],
            },
        ]
    }

    fn assignment(id: i64, employee_id: &str, name: &str, region: &str) -> RegionAssignment {
        RegionAssignment {
            id: AssignmentId(id),
            employee_id: employee_id.to_string(),
            employee_name: name.to_string(),
            project: Project::Parivartan,
            role: AssignmentRole::Bdm,
            region_id: RegionId(region.to_string()),
            region_name: region.to_string(),
            state_id: None,
            state_name: None,
            is_active: AssignmentStatus::Active,
        }
    }

    fn names(campaigns: &[Campaign]) -> Vec<&str> {
        campaigns.iter().map(|c| c.campaign_name.as_str()).collect()
    }

    #[test]
    fn employee_filter_changes_reset_the_page() {
        let mut filters = EmployeeFilters::default();
        filters.set_page(4);
        filters.set_role("Agent");
        assert_eq!(filters.page, 1);

        filters.set_page(3);
        filters.set_status(StatusFilter::Inactive);
        assert_eq!(filters.page, 1);

        filters.set_page(2);
        filters.set_search("asha");
        assert_eq!(filters.page, 1);
    }

    #[test]
    fn employee_query_skips_all_sentinels() {
        let filters = EmployeeFilters::default();
        let query = filters.to_query();
        assert_eq!(query.limit, 10);
        assert_eq!(query.is_active, None);
        assert_eq!(query.role, None);
        assert_eq!(query.region, None);

        let mut filters = EmployeeFilters::default();
        filters.set_status(StatusFilter::Active);
        filters.set_region("South");
        let query = filters.to_query();
        assert_eq!(query.is_active, Some(true));
        assert_eq!(query.region.as_deref(), Some("South"));
    }

    #[test]
    fn employee_filters_reset_to_defaults() {
        let mut filters = EmployeeFilters::default();
        filters.set_search("x");
        filters.set_role("Agent");
        filters.set_page(5);
        filters.reset();
        assert_eq!(filters, EmployeeFilters::default());
    }

    #[test]
    fn region_filters_count_and_clear() {
        let mut filters = RegionFilters::default();
        assert!(!filters.has_active());

        filters.set(RegionFilterField::Role, "BDM");
        filters.set(RegionFilterField::Project, "Gen Nxt");
        assert_eq!(filters.active_count(), 2);
        assert_eq!(filters.chips()[0].label(), "Role: BDM");

        filters.clear_field(RegionFilterField::Role);
        assert_eq!(filters.active_count(), 1);

        filters.set_page(3);
        filters.clear_all();
        assert_eq!(filters, RegionFilters::default());
    }

    #[test]
    fn region_query_leaves_out_empty_filters() {
        let mut filters = RegionFilters::default();
        filters.set(RegionFilterField::Status, "Inactive");
        let query = filters.to_query(10);
        assert_eq!(query.is_active.as_deref(), Some("Inactive"));
        assert_eq!(query.employee_name, None);
        assert_eq!(query.page, Some(1));
    }

    #[test]
    fn blank_term_returns_every_campaign() {
        let all = campaigns();
        assert_eq!(filter_campaigns(&all, "   "), all);
        assert_eq!(filter_campaigns(&all, ""), all);
    }

    #[test]
    fn campaigns_match_on_name_and_members() {
        let all = campaigns();
        assert_eq!(names(&filter_campaigns(&all, "monsoon")), vec!["Monsoon Drive"]);
        assert_eq!(names(&filter_campaigns(&all, "RAVI")), vec!["Festive Offers"]);
        assert_eq!(names(&filter_campaigns(&all, "770")), vec!["Festive Offers"]);
        assert_eq!(names(&filter_campaigns(&all, "north")), vec!["Monsoon Drive"]);
        assert_eq!(names(&filter_campaigns(&all, "30")), vec!["Winter"]);
        assert!(filter_campaigns(&all, "nothing like this").is_empty());
    }

    #[test]
    fn campaign_filter_is_an_idempotent_subset() {
        let all = campaigns();
        for term in ["1", "a", "Drive", "9"] {
            let once = filter_campaigns(&all, term);
            assert!(once.iter().all(|campaign| all.contains(campaign)));
            assert_eq!(filter_campaigns(&once, term), once);
        }
    }

    #[test]
    fn assignments_filter_by_name_id_and_region() {
        let rows = vec![
            assignment(1, "7", "Ravi", "R1"),
            assignment(2, "7", "Ravi", "R2"),
            assignment(3, "12", "Asha", "R1"),
        ];
        assert_eq!(filter_assignments(&rows, "", None).len(), 3);
        assert_eq!(filter_assignments(&rows, "asha", None).len(), 1);
        assert_eq!(filter_assignments(&rows, "12", None).len(), 1);

        let r1 = RegionId("R1".into());
        let ids: Vec<_> = filter_assignments(&rows, "", Some(&r1))
            .into_iter()
            .map(|row| row.id.0)
            .collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn current_members_are_not_available() {
        let options = vec![
            EmployeeOption {
                employee_id: EmployeeId(1),
                employee_name: "Asha Rao".into(),
                employee_role_id: None,
            },
            EmployeeOption {
                employee_id: EmployeeId(2),
                employee_name: "Ravi Kumar".into(),
                employee_role_id: None,
            },
        ];
        let available = available_for_campaign(&options, &campaigns(), CampaignId(11));
        assert_eq!(available.len(), 1);
        assert_eq!(available[0].employee_id, EmployeeId(2));

        let unknown = available_for_campaign(&options, &campaigns(), CampaignId(99));
        assert_eq!(unknown.len(), 2);
    }
}
