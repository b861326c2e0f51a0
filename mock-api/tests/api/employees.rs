use payloads::{
    EmployeeId, RoleId,
    filters::{EmployeeFilters, StatusFilter},
    pagination,
    requests::{EmployeeForm, EmployeeQuery},
};
use test_helpers::{assert_rejected, spawn_app};

#[tokio::test]
async fn single_employee_fits_on_one_page() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let employee_id = app
        .create_employee("Asha Rao", "9845000001", Some(RoleId(1)))
        .await?;
    assert_eq!(employee_id, EmployeeId(1));

    let filters = EmployeeFilters::default();
    let page = app.client.list_employees(&filters.to_query()).await?;

    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].employee_id, EmployeeId(1));
    assert_eq!(page.pagination.total_pages, 1);
    assert!(!pagination::is_visible(page.pagination.total_pages));
    Ok(())
}

#[tokio::test]
async fn employees_are_paginated_ten_at_a_time() -> anyhow::Result<()> {
    let app = spawn_app().await;
    for n in 0..23 {
        app.create_employee(&format!("Agent {n}"), &format!("70000{n:03}"), None)
            .await?;
    }

    let mut filters = EmployeeFilters::default();
    filters.set_page(3);
    let page = app.client.list_employees(&filters.to_query()).await?;
    assert_eq!(page.items.len(), 3);
    assert_eq!(page.pagination.total, 23);
    assert_eq!(page.pagination.total_pages, 3);
    assert_eq!(
        pagination::showing_range(
            page.pagination.page,
            page.pagination.limit,
            page.pagination.total
        ),
        (21, 23)
    );
    Ok(())
}

#[tokio::test]
async fn status_and_role_filters_are_applied() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_employee("Asha Rao", "1", Some(RoleId(1))).await?;
    let ravi = app.create_employee("Ravi Kumar", "2", Some(RoleId(2))).await?;

    let mut form = EmployeeForm {
        name: "Ravi Kumar".into(),
        phone: "2".into(),
        role_id: Some(RoleId(2)),
        ..EmployeeForm::new()
    };
    form.is_active = false;
    app.client
        .update_employee(ravi, &form.into_update(ravi)?)
        .await?;

    let mut filters = EmployeeFilters::default();
    filters.set_status(StatusFilter::Inactive);
    let page = app.client.list_employees(&filters.to_query()).await?;
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].employee_name, "Ravi Kumar");

    filters.reset();
    filters.set_role("Agent");
    let page = app.client.list_employees(&filters.to_query()).await?;
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].role_name(), Some("Agent"));

    let options = app.client.employee_filter_options().await?;
    assert_eq!(
        options.roles,
        vec!["Agent".to_string(), "Bussiness development manger".to_string()]
    );
    Ok(())
}

#[tokio::test]
async fn search_matches_name_and_phone() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_employee("Asha Rao", "9845000001", None).await?;
    app.create_employee("Ravi Kumar", "7700000002", None).await?;

    let query = EmployeeQuery {
        search: "asha".into(),
        ..Default::default()
    };
    let page = app.client.list_employees(&query).await?;
    assert_eq!(page.items.len(), 1);

    let query = EmployeeQuery {
        search: "77000".into(),
        ..Default::default()
    };
    let page = app.client.list_employees(&query).await?;
    assert_eq!(page.items[0].employee_name, "Ravi Kumar");
    Ok(())
}

#[tokio::test]
async fn edit_replaces_every_field() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let id = app.create_employee("Asha Rao", "1", Some(RoleId(1))).await?;

    let page = app.client.list_employees(&EmployeeQuery::default()).await?;
    let mut form = EmployeeForm::from_employee(&page.items[0]);
    form.email = "asha@example.com".into();
    form.role_id = Some(RoleId(3));
    app.client.update_employee(id, &form.into_update(id)?).await?;

    let page = app.client.list_employees(&EmployeeQuery::default()).await?;
    let employee = &page.items[0];
    assert_eq!(employee.employee_mail_id.as_deref(), Some("asha@example.com"));
    assert_eq!(employee.role_name(), Some("Zonal Head Parivartan"));
    assert_eq!(employee.is_active, Some(true));
    Ok(())
}

#[tokio::test]
async fn duplicate_phone_is_rejected_with_the_server_message() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_employee("Asha Rao", "1", None).await?;

    let form = EmployeeForm {
        name: "Someone Else".into(),
        phone: "1".into(),
        ..EmployeeForm::new()
    };
    let result = app.client.create_employee(&form.into_create()?).await;
    assert_rejected(result, "An employee with this phone number already exists");
    Ok(())
}
