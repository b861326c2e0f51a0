//! Development dataset for the admin dashboard
//!
//! Used by the dev-server and by integration tests that want a populated
//! api. It covers:
//! - Employees across all roles and regions, some inactive
//! - Campaigns ranging from empty to well staffed
//! - Region assignments under every project, including a legacy row with
//!   no employee id

use crate::TestApp;
use anyhow::Result;
use payloads::{
    AssignmentId, AssignmentRole, AssignmentStatus, CampaignId, EmployeeId,
    Project, RegionId, RoleId, requests, responses::RegionAssignment,
};

const EMPLOYEES: [(&str, &str, i64, &str, bool); 14] = [
    ("Asha Rao", "9845000001", 1, "North Zone", true),
    ("Ravi Kumar", "9845000002", 2, "North Zone", true),
    ("Meera Iyer", "9845000003", 3, "South Zone", true),
    ("Karan Singh", "9845000004", 1, "South Zone", true),
    ("Divya Nair", "9845000005", 1, "East Zone", false),
    ("Arjun Das", "9845000006", 2, "East Zone", true),
    ("Priya Shah", "9845000007", 1, "West Zone", true),
    ("Vikram Joshi", "9845000008", 3, "West Zone", true),
    ("Neha Gupta", "9845000009", 1, "North Zone", false),
    ("Sanjay Patil", "9845000010", 2, "West Zone", true),
    ("Lakshmi Menon", "9845000011", 1, "South Zone", true),
    ("Farhan Ali", "9845000012", 1, "North Zone", true),
    ("Pooja Verma", "9845000013", 2, "East Zone", true),
    ("Rahul Bose", "9845000014", 1, "East Zone", true),
];

pub struct DevDataset {
    pub employees: Vec<EmployeeId>,
    pub campaigns: Vec<CampaignId>,
    pub legacy_assignment: AssignmentId,
}

impl DevDataset {
    pub async fn create(app: &TestApp) -> Result<Self> {
        tracing::info!("👥 Creating employees");
        let mut employees = Vec::new();
        for (name, phone, role, region, active) in EMPLOYEES {
            let mut details =
                crate::employee_details(name, phone, Some(RoleId(role)));
            details.is_active = active;
            details.employee_mail_id = Some(format!(
                "{}@example.com",
                name.to_lowercase().replace(' ', ".")
            ));
            app.client.create_employee(&details).await?;
            let employee_id = app.employee_id(name).await?;
            app.store
                .set_employee_region(employee_id, Some(region.to_string()))
                .await?;
            employees.push(employee_id);
        }

        tracing::info!("📣 Creating campaigns");
        let staffing: [(&str, &[usize]); 4] = [
            ("Monsoon Savings Drive", &[0, 1, 2, 3, 6]),
            ("Festive Offers", &[4, 7]),
            ("Rural Outreach", &[8, 9, 10, 11, 12]),
            ("Winter Launch", &[]),
        ];
        let mut campaigns = Vec::new();
        for (name, members) in staffing {
            let campaign_id = app.create_campaign(name).await?;
            for index in members {
                app.add_to_campaign(employees[*index], campaign_id).await?;
            }
            campaigns.push(campaign_id);
        }

        tracing::info!("🗺️ Assigning regions");
        let assignments: [(usize, &str, Project, bool); 8] = [
            (1, "R1", Project::Parivartan, false),
            (1, "R2", Project::GenNxt, false),
            (2, "R2", Project::Parivartan, true),
            (5, "R3", Project::OpenShed, false),
            (7, "R4", Project::Parivartan, true),
            (9, "R4", Project::GenNxt, false),
            (9, "R1", Project::OpenShed, false),
            (12, "R3", Project::Parivartan, false),
        ];
        for (index, region_id, project, zonal) in assignments {
            let (name, ..) = EMPLOYEES[index];
            let details = requests::CreateRegionAssignment {
                employee_id: employees[index].to_string(),
                employee_name: name.to_string(),
                region_id: RegionId(region_id.to_string()),
                project,
                is_bdm: (!zonal).into(),
                is_zonal_manager: zonal.into(),
            };
            app.client.create_region_assignment(&details).await?;
        }

        // Sanjay's West Zone assignment has lapsed
        app.client
            .update_region_status(
                &employees[9].to_string(),
                &requests::UpdateRegionStatus {
                    region_id: RegionId("R4".into()),
                    is_active: AssignmentStatus::Inactive,
                },
            )
            .await?;

        let legacy_assignment = app.store.import_assignment(legacy_row()).await;

        Ok(Self {
            employees,
            campaigns,
            legacy_assignment,
        })
    }

    pub fn print_summary(&self) {
        tracing::info!("📋 Available test data:");
        tracing::info!(
            "   👥 {} employees (ids {}..={})",
            self.employees.len(),
            self.employees.first().map(|id| id.0).unwrap_or_default(),
            self.employees.last().map(|id| id.0).unwrap_or_default(),
        );
        tracing::info!(
            "   📣 {} campaigns, one with no members",
            self.campaigns.len()
        );
        tracing::info!(
            "   🗺️ Region assignments, including legacy row {} without an employee id",
            self.legacy_assignment
        );
        tracing::info!("   🔑 Sign in with admin / admin@123");
    }
}

/// A row as older records arrive: no employee id.
fn legacy_row() -> RegionAssignment {
    RegionAssignment {
        id: AssignmentId(0),
        employee_id: String::new(),
        employee_name: "Former Contractor".to_string(),
        project: Project::Parivartan,
        role: AssignmentRole::Bdm,
        region_id: RegionId("R2".into()),
        region_name: "South Zone".to_string(),
        state_id: Some("S2".into()),
        state_name: Some("Karnataka".into()),
        is_active: AssignmentStatus::Inactive,
    }
}
