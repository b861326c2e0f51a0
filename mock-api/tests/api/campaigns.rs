use payloads::{
    CampaignId, EmployeeId,
    filters::{available_for_campaign, filter_campaigns},
    requests::{CampaignMembership, CreateCampaign, ValidationError},
    stats::CampaignStats,
};
use reqwest::StatusCode;
use test_helpers::{assert_rejected, assert_status_code, spawn_app};

#[tokio::test]
async fn blank_campaign_name_never_reaches_the_api() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let error = CreateCampaign::new("").unwrap_err();
    assert_eq!(error, ValidationError::CampaignNameRequired);
    assert_eq!(error.to_string(), "Campaign name is required");

    assert!(app.client.list_campaigns().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn created_campaign_is_listed_empty() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let campaign_id = app.create_campaign("  Monsoon Drive ").await?;

    let campaigns = app.client.list_campaigns().await?;
    assert_eq!(campaigns.len(), 1);
    assert_eq!(campaigns[0].campaign_id, campaign_id);
    assert_eq!(campaigns[0].campaign_name, "Monsoon Drive");
    assert!(campaigns[0].employees.is_empty());

    let result = app
        .client
        .create_campaign(&CreateCampaign::new("monsoon drive")?)
        .await;
    assert_rejected(result, "A campaign with this name already exists");
    Ok(())
}

#[tokio::test]
async fn assign_pool_shrinks_only_when_reopened() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let asha = app.create_employee("Asha Rao", "1", None).await?;
    let ravi = app.create_employee("Ravi Kumar", "2", None).await?;
    let campaign_id = app.create_campaign("Festive Offers").await?;

    // the modal keeps the campaign it was opened with
    let options = app.client.employee_options().await?;
    let opened_with = app.client.list_campaigns().await?[0].clone();
    let pool = available_for_campaign(
        &options,
        std::slice::from_ref(&opened_with),
        campaign_id,
    );
    assert_eq!(pool.len(), 2);

    let membership = CampaignMembership::new(Some(asha), campaign_id)?;
    app.client.assign_employee_to_campaign(&membership).await?;
    let campaigns = app.client.list_campaigns().await?;
    assert_eq!(campaigns[0].employees.len(), 1);

    // still open: fresh options against the opening snapshot keep asha listed
    let options = app.client.employee_options().await?;
    let pool = available_for_campaign(
        &options,
        std::slice::from_ref(&opened_with),
        campaign_id,
    );
    assert_eq!(pool.len(), 2);
    assert!(pool.iter().any(|option| option.employee_id == asha));

    // reopened
    let options = app.client.employee_options().await?;
    let pool = available_for_campaign(&options, &campaigns, campaign_id);
    assert_eq!(pool.len(), 1);
    assert_eq!(pool[0].employee_id, ravi);
    Ok(())
}

#[tokio::test]
async fn assigning_twice_is_rejected() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let asha = app.create_employee("Asha Rao", "1", None).await?;
    let campaign_id = app.create_campaign("Festive Offers").await?;
    app.add_to_campaign(asha, campaign_id).await?;

    let membership = CampaignMembership::new(Some(asha), campaign_id)?;
    let result = app.client.assign_employee_to_campaign(&membership).await;
    assert_rejected(result, "Employee already assigned to this campaign");
    Ok(())
}

#[tokio::test]
async fn missing_campaign_is_not_found() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let asha = app.create_employee("Asha Rao", "1", None).await?;

    let membership = CampaignMembership::new(Some(asha), CampaignId(42))?;
    let result = app.client.assign_employee_to_campaign(&membership).await;
    match &result {
        Err(error) => {
            assert_eq!(error.message_or("Failed to assign"), "Campaign not found")
        }
        Ok(_) => panic!("expected an error"),
    }
    assert_status_code(result, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn remove_sends_the_membership_in_the_body() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let asha = app.create_employee("Asha Rao", "1", None).await?;
    let ravi = app.create_employee("Ravi Kumar", "2", None).await?;
    let campaign_id = app.create_campaign("Festive Offers").await?;
    app.add_to_campaign(asha, campaign_id).await?;
    app.add_to_campaign(ravi, campaign_id).await?;

    let membership = CampaignMembership::new(Some(asha), campaign_id)?;
    app.client.remove_employee_from_campaign(&membership).await?;

    let campaigns = app.client.list_campaigns().await?;
    let members: Vec<EmployeeId> = campaigns[0]
        .employees
        .iter()
        .map(|member| member.employee_id)
        .collect();
    assert_eq!(members, vec![ravi]);

    let result = app.client.remove_employee_from_campaign(&membership).await;
    assert_rejected(result, "Employee is not part of this campaign");
    Ok(())
}

#[tokio::test]
async fn stats_and_search_over_fetched_campaigns() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let asha = app.create_employee("Asha Rao", "9845000001", None).await?;
    let ravi = app.create_employee("Ravi Kumar", "7700000002", None).await?;
    let big = app.create_campaign("Monsoon Drive").await?;
    app.create_campaign("Winter Launch").await?;
    app.add_to_campaign(asha, big).await?;
    app.add_to_campaign(ravi, big).await?;

    let campaigns = app.client.list_campaigns().await?;
    let stats = CampaignStats::compute(&campaigns);
    assert_eq!(stats.total_campaigns, 2);
    assert_eq!(stats.total_employees, 2);
    assert_eq!(stats.empty_campaigns, 1);
    assert_eq!(stats.utilization_percent(), 50);
    assert_eq!(stats.largest.map(|l| l.campaign_id), Some(big));

    let found = filter_campaigns(&campaigns, "7700");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].campaign_id, big);
    Ok(())
}

#[tokio::test]
async fn summaries_list_every_campaign() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_campaign("One").await?;
    app.create_campaign("Two").await?;

    let names: Vec<String> = app
        .client
        .campaign_summaries()
        .await?
        .into_iter()
        .map(|summary| summary.campaign_name)
        .collect();
    assert_eq!(names, vec!["One".to_string(), "Two".to_string()]);
    Ok(())
}
