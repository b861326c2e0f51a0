use crate::{requests::UpdateRegionStatus, responses::RegionAssignment};

/// All assignments belonging to one employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeAssignments {
    /// `None` collects rows that arrived without a usable employee id.
    pub employee_id: Option<String>,
    pub employee_name: String,
    pub assignments: Vec<RegionAssignment>,
}

impl EmployeeAssignments {
    /// Stable key for expansion state and list keys.
    pub fn key(&self) -> String {
        self.employee_id.clone().unwrap_or_default()
    }

    /// The path id and body that flip `row`'s status. Rows without an
    /// employee id have no status endpoint, so they get `None`.
    pub fn status_toggle(
        &self,
        row: &RegionAssignment,
    ) -> Option<(String, UpdateRegionStatus)> {
        let employee_id = self.employee_id.clone()?;
        Some((
            employee_id,
            UpdateRegionStatus {
                region_id: row.region_id.clone(),
                is_active: row.is_active.toggled(),
            },
        ))
    }

    pub fn active_count(&self) -> usize {
        self.assignments
            .iter()
            .filter(|row| row.is_active.is_active())
            .count()
    }
}

/// Partition rows by employee id, keeping the order in which each employee
/// is first seen and the rows unmodified inside each group.
pub fn group_by_employee(rows: &[RegionAssignment]) -> Vec<EmployeeAssignments> {
    let mut groups: Vec<EmployeeAssignments> = Vec::new();
    for row in rows {
        let employee_id = Some(row.employee_id.trim())
            .filter(|id| !id.is_empty())
            .map(str::to_string);
        match groups
            .iter_mut()
            .find(|group| group.employee_id == employee_id)
        {
            Some(group) => group.assignments.push(row.clone()),
            None => groups.push(EmployeeAssignments {
                employee_name: if employee_id.is_some() {
                    row.employee_name.clone()
                } else {
                    "Unknown employee".to_string()
                },
                employee_id,
                assignments: vec![row.clone()],
            }),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        AssignmentId, AssignmentRole, AssignmentStatus, Project, RegionId,
    };

    fn row(id: i64, employee_id: &str, name: &str) -> RegionAssignment {
        RegionAssignment {
            id: AssignmentId(id),
            employee_id: employee_id.to_string(),
            employee_name: name.to_string(),
            project: Project::GenNxt,
            role: AssignmentRole::ZonalManager,
            region_id: RegionId(format!("R{id}")),
            region_name: format!("Region {id}"),
            state_id: None,
            state_name: None,
            is_active: if id % 2 == 0 {
                AssignmentStatus::Inactive
            } else {
                AssignmentStatus::Active
            },
        }
    }

    #[test]
    fn groups_follow_first_seen_order() {
        let rows = vec![
            row(1, "7", "Ravi"),
            row(2, "3", "Asha"),
            row(3, "7", "Ravi"),
        ];
        let groups = group_by_employee(&rows);
        let keys: Vec<_> = groups.iter().map(EmployeeAssignments::key).collect();
        assert_eq!(keys, vec!["7", "3"]);

        let ids: Vec<_> = groups[0].assignments.iter().map(|r| r.id.0).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(groups[0].active_count(), 2);
    }

    #[test]
    fn every_row_lands_in_exactly_one_group() {
        let rows = vec![
            row(1, "7", "Ravi"),
            row(2, "", "Ghost"),
            row(3, "9", "Meera"),
            row(4, "  ", "Ghost"),
            row(5, "7", "Ravi"),
        ];
        let groups = group_by_employee(&rows);
        assert_eq!(groups.len(), 3);

        let total: usize = groups.iter().map(|g| g.assignments.len()).sum();
        assert_eq!(total, rows.len());
        for original in &rows {
            let hits = groups
                .iter()
                .filter(|g| g.assignments.contains(original))
                .count();
            assert_eq!(hits, 1);
        }
    }

    #[test]
    fn rows_without_an_id_share_one_group() {
        let rows = vec![
            row(1, "7", "Ravi"),
            row(2, "", "Ghost"),
            row(3, " ", "Other ghost"),
        ];
        let groups = group_by_employee(&rows);
        assert_eq!(groups[1].employee_id, None);
        assert_eq!(groups[1].employee_name, "Unknown employee");
        assert_eq!(groups[1].assignments.len(), 2);
    }

    #[test]
    fn empty_input_gives_no_groups() {
        assert!(group_by_employee(&[]).is_empty());
    }

    #[test]
    fn status_toggle_needs_an_employee_id() {
        let rows = vec![row(1, " 7 ", "Ravi"), row(2, "", "Ghost")];
        let groups = group_by_employee(&rows);

        let (employee_id, body) = groups[0]
            .status_toggle(&groups[0].assignments[0])
            .unwrap();
        assert_eq!(employee_id, "7");
        assert_eq!(body.region_id, RegionId("R1".into()));
        assert_eq!(body.is_active, AssignmentStatus::Inactive);

        assert_eq!(groups[1].status_toggle(&groups[1].assignments[0]), None);
    }
}
