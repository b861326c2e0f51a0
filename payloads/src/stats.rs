use crate::{
    CampaignId, Project,
    responses::{Campaign, RegionAssignment},
};
use std::collections::HashSet;

/// Campaigns with more members than this are considered well staffed.
pub const WELL_STAFFED_ABOVE: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LargestCampaign {
    pub campaign_id: CampaignId,
    pub name: String,
    pub employee_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CampaignStats {
    pub total_campaigns: usize,
    /// Memberships, so an employee in two campaigns counts twice.
    pub total_employees: usize,
    pub active_campaigns: usize,
    pub average_employees: u64,
    pub empty_campaigns: usize,
    pub largest: Option<LargestCampaign>,
}

impl CampaignStats {
    pub fn compute(campaigns: &[Campaign]) -> Self {
        let total_campaigns = campaigns.len();
        let total_employees =
            campaigns.iter().map(|c| c.employees.len()).sum::<usize>();
        let active_campaigns =
            campaigns.iter().filter(|c| !c.employees.is_empty()).count();

        let mut largest: Option<LargestCampaign> = None;
        for campaign in campaigns {
            let count = campaign.employees.len();
            if largest.as_ref().is_none_or(|l| count > l.employee_count) {
                largest = Some(LargestCampaign {
                    campaign_id: campaign.campaign_id,
                    name: campaign.campaign_name.clone(),
                    employee_count: count,
                });
            }
        }

        Self {
            total_campaigns,
            total_employees,
            active_campaigns,
            average_employees: rounded_ratio(total_employees, total_campaigns),
            empty_campaigns: total_campaigns - active_campaigns,
            largest,
        }
    }

    /// Share of campaigns with at least one member, as a whole percentage.
    pub fn utilization_percent(&self) -> u64 {
        rounded_ratio(self.active_campaigns * 100, self.total_campaigns)
    }
}

fn rounded_ratio(numerator: usize, denominator: usize) -> u64 {
    if denominator == 0 {
        return 0;
    }
    (numerator as f64 / denominator as f64).round() as u64
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Staffing {
    WellStaffed,
    LowStaff,
}

impl Staffing {
    pub fn for_count(employee_count: usize) -> Self {
        if employee_count > WELL_STAFFED_ABOVE {
            Staffing::WellStaffed
        } else {
            Staffing::LowStaff
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Staffing::WellStaffed => "Well Staffed",
            Staffing::LowStaff => "Low Staff",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RegionStats {
    pub total: usize,
    pub active: usize,
    pub projects: usize,
}

impl RegionStats {
    pub fn compute(rows: &[RegionAssignment]) -> Self {
        let projects: HashSet<Project> =
            rows.iter().map(|row| row.project).collect();
        Self {
            total: rows.len(),
            active: rows.iter().filter(|row| row.is_active.is_active()).count(),
            projects: projects.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        AssignmentId, AssignmentRole, AssignmentStatus, EmployeeId, RegionId,
        responses::CampaignEmployee,
    };

    fn campaign(id: i64, members: usize) -> Campaign {
        Campaign {
            campaign_id: CampaignId(id),
            campaign_name: format!("Campaign {id}"),
            employees: (0..members)
                .map(|n| CampaignEmployee {
                    employee_id: EmployeeId(n as i64),
                    employee_name: format!("Employee {n}"),
                    employee_phone: "0".into(),
                    employee_region: None,
                })
                .collect(),
        }
    }

    #[test]
    fn no_campaigns_gives_zeroes() {
        let stats = CampaignStats::compute(&[]);
        assert_eq!(stats, CampaignStats::default());
        assert_eq!(stats.utilization_percent(), 0);
    }

    #[test]
    fn campaign_stats_are_computed() {
        let campaigns =
            vec![campaign(1, 2), campaign(2, 0), campaign(3, 5), campaign(4, 5)];
        let stats = CampaignStats::compute(&campaigns);
        assert_eq!(stats.total_campaigns, 4);
        assert_eq!(stats.total_employees, 12);
        assert_eq!(stats.active_campaigns, 3);
        assert_eq!(stats.empty_campaigns, 1);
        assert_eq!(stats.average_employees, 3);
        assert_eq!(stats.utilization_percent(), 75);

        // ties keep the first one seen
        let largest = stats.largest.unwrap();
        assert_eq!(largest.campaign_id, CampaignId(3));
        assert_eq!(largest.employee_count, 5);
    }

    #[test]
    fn average_rounds_half_up() {
        let stats = CampaignStats::compute(&[campaign(1, 1), campaign(2, 2)]);
        assert_eq!(stats.average_employees, 2);

        let stats =
            CampaignStats::compute(&[campaign(1, 0), campaign(2, 0), campaign(3, 1)]);
        assert_eq!(stats.average_employees, 0);
        assert_eq!(stats.utilization_percent(), 33);
    }

    #[test]
    fn staffing_threshold() {
        assert_eq!(Staffing::for_count(3), Staffing::LowStaff);
        assert_eq!(Staffing::for_count(4).label(), "Well Staffed");
    }

    #[test]
    fn region_stats_count_distinct_projects() {
        let row = |id: i64, project, status| RegionAssignment {
            id: AssignmentId(id),
            employee_id: "1".into(),
            employee_name: "A".into(),
            project,
            role: AssignmentRole::Bdm,
            region_id: RegionId("R".into()),
            region_name: "R".into(),
            state_id: None,
            state_name: None,
            is_active: status,
        };
        let rows = vec![
            row(1, Project::Parivartan, AssignmentStatus::Active),
            row(2, Project::Parivartan, AssignmentStatus::Inactive),
            row(3, Project::OpenShed, AssignmentStatus::Active),
        ];
        assert_eq!(
            RegionStats::compute(&rows),
            RegionStats {
                total: 3,
                active: 2,
                projects: 2
            }
        );
    }
}
