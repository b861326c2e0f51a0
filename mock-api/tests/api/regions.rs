use payloads::{
    AssignmentRole, AssignmentStatus, Project, RegionId, RoleId,
    filters::{RegionFilterField, RegionFilters, filter_assignments},
    grouping::group_by_employee,
    requests::{
        RegionAssignmentForm, RegionQuery, UpdateRegionStatus,
        ValidationError, assignable_employees,
    },
    stats::RegionStats,
};
use reqwest::StatusCode;
use test_helpers::{assert_rejected, assert_status_code, mock::DevDataset, spawn_app};

#[tokio::test]
async fn region_options_are_listed() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let regions = app.client.region_options().await?;
    assert_eq!(regions.len(), 4);
    assert_eq!(regions[0].region_id, RegionId("R1".into()));
    Ok(())
}

#[tokio::test]
async fn assign_form_is_validated_before_sending() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_employee("Ravi Kumar", "2", Some(RoleId(2))).await?;
    app.create_employee("No Role", "3", None).await?;

    let employees = assignable_employees(&app.client.employee_options().await?);
    assert_eq!(employees.len(), 1);

    let mut form = RegionAssignmentForm::default();
    assert_eq!(
        form.validate(&employees),
        Err(ValidationError::InvalidEmployee)
    );

    form.employee_id = employees[0].employee_id.to_string();
    assert_eq!(form.validate(&employees), Err(ValidationError::RegionRequired));

    form.region_id = "R2".into();
    form.is_zonal_manager = true;
    app.client
        .create_region_assignment(&form.validate(&employees)?)
        .await?;

    let page = app.client.list_region_assignments(&RegionQuery::default()).await?;
    assert_eq!(page.items.len(), 1);
    let row = &page.items[0];
    assert_eq!(row.role, AssignmentRole::ZonalManager);
    assert_eq!(row.project, Project::Parivartan);
    assert_eq!(row.region_name, "South Zone");
    assert_eq!(row.state_name.as_deref(), Some("Karnataka"));
    assert_eq!(row.is_active, AssignmentStatus::Active);

    let result = app
        .client
        .create_region_assignment(&form.validate(&employees)?)
        .await;
    assert_rejected(
        result,
        "Employee is already assigned to this region for this project",
    );
    Ok(())
}

#[tokio::test]
async fn delete_is_refused_until_the_assignment_is_inactive() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let ravi = app.create_employee("Ravi Kumar", "2", Some(RoleId(2))).await?;
    app.assign_region(ravi, "Ravi Kumar", "R1", Project::GenNxt).await?;
    app.assign_region(ravi, "Ravi Kumar", "R3", Project::GenNxt).await?;

    let page = app.client.list_region_assignments(&RegionQuery::default()).await?;
    let row = &page.items[0];
    let first = row.id;

    let result = app.client.delete_region_assignment(first).await;
    assert_rejected(result, "Deactivate the assignment before deleting it");
    let page = app.client.list_region_assignments(&RegionQuery::default()).await?;
    assert_eq!(page.items.len(), 2);
    assert!(page.items.iter().any(|row| row.id == first));

    let row = &page.items[0];
    app.client
        .update_region_status(
            &row.employee_id,
            &UpdateRegionStatus {
                region_id: row.region_id.clone(),
                is_active: AssignmentStatus::Inactive,
            },
        )
        .await?;
    app.client.delete_region_assignment(first).await?;

    let page = app.client.list_region_assignments(&RegionQuery::default()).await?;
    assert_eq!(page.items.len(), 1);
    assert!(page.items.iter().all(|row| row.id != first));

    let result = app.client.delete_region_assignment(first).await;
    assert_status_code(result, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn status_toggle_flips_one_region() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let ravi = app.create_employee("Ravi Kumar", "2", Some(RoleId(2))).await?;
    app.assign_region(ravi, "Ravi Kumar", "R1", Project::Parivartan).await?;
    app.assign_region(ravi, "Ravi Kumar", "R2", Project::Parivartan).await?;

    let page = app.client.list_region_assignments(&RegionQuery::default()).await?;
    let row = &page.items[0];
    app.client
        .update_region_status(
            &row.employee_id,
            &UpdateRegionStatus {
                region_id: row.region_id.clone(),
                is_active: row.is_active.toggled(),
            },
        )
        .await?;

    let page = app.client.list_region_assignments(&RegionQuery::default()).await?;
    let statuses: Vec<_> = page.items.iter().map(|row| row.is_active).collect();
    assert_eq!(
        statuses,
        vec![AssignmentStatus::Inactive, AssignmentStatus::Active]
    );

    let result = app
        .client
        .update_region_status(
            "999",
            &UpdateRegionStatus {
                region_id: RegionId("R1".into()),
                is_active: AssignmentStatus::Inactive,
            },
        )
        .await;
    assert_status_code(result, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn filters_and_pagination_are_sent_as_query() -> anyhow::Result<()> {
    let app = spawn_app().await;
    DevDataset::create(&app).await?;

    let mut filters = RegionFilters::default();
    filters.set(RegionFilterField::Project, Project::GenNxt.as_str());
    let page = app
        .client
        .list_region_assignments(&filters.to_query(10))
        .await?;
    assert_eq!(page.items.len(), 2);
    assert!(page.items.iter().all(|row| row.project == Project::GenNxt));

    filters.clear_all();
    filters.set(RegionFilterField::Status, "Inactive");
    let page = app
        .client
        .list_region_assignments(&filters.to_query(10))
        .await?;
    assert_eq!(page.items.len(), 2);

    filters.clear_all();
    filters.set_page(2);
    let page = app.client.list_region_assignments(&filters.to_query(5)).await?;
    assert_eq!(page.pagination.total, 9);
    assert_eq!(page.pagination.total_pages, 2);
    assert_eq!(page.items.len(), 4);
    Ok(())
}

#[tokio::test]
async fn grouped_view_keeps_rows_without_an_employee_id() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let dataset = DevDataset::create(&app).await?;

    let rows = app
        .client
        .list_region_assignments(&RegionQuery::default())
        .await?
        .items;
    let groups = group_by_employee(&rows);

    let total: usize = groups.iter().map(|g| g.assignments.len()).sum();
    assert_eq!(total, rows.len());

    let unknown: Vec<_> =
        groups.iter().filter(|g| g.employee_id.is_none()).collect();
    assert_eq!(unknown.len(), 1);
    assert_eq!(unknown[0].assignments[0].id, dataset.legacy_assignment);

    let stats = RegionStats::compute(&rows);
    assert_eq!(stats.total, 9);
    assert_eq!(stats.projects, 3);

    let south = RegionId("R2".into());
    let in_south = filter_assignments(&rows, "", Some(&south));
    assert_eq!(in_south.len(), 3);
    Ok(())
}
