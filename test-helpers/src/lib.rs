pub mod mock;

use anyhow::Context;
use mock_api::{
    Config, build,
    store::{RegionRecord, Store},
    telemetry,
};
use payloads::{CampaignId, EmployeeId, RegionId, RoleId, requests};
use reqwest::StatusCode;
use tracing_log::LogTracer;
use tracing_subscriber::util::SubscriberInitExt;

pub struct TestApp {
    #[allow(unused)]
    pub port: u16,
    pub client: payloads::APIClient,
    /// Direct access to the api's state, for seeding what has no endpoint.
    pub store: Store,
}

impl TestApp {
    /// Create an employee through the api and return the id it was given.
    pub async fn create_employee(
        &self,
        name: &str,
        phone: &str,
        role_id: Option<RoleId>,
    ) -> anyhow::Result<EmployeeId> {
        self.client
            .create_employee(&employee_details(name, phone, role_id))
            .await?;
        self.employee_id(name).await
    }

    pub async fn employee_id(&self, name: &str) -> anyhow::Result<EmployeeId> {
        let options = self.client.employee_options().await?;
        options
            .iter()
            .rev()
            .find(|option| option.employee_name == name)
            .map(|option| option.employee_id)
            .with_context(|| format!("no employee named {name}"))
    }

    pub async fn create_campaign(&self, name: &str) -> anyhow::Result<CampaignId> {
        let details = requests::CreateCampaign::new(name)?;
        self.client.create_campaign(&details).await?;
        let summaries = self.client.campaign_summaries().await?;
        summaries
            .iter()
            .find(|summary| summary.campaign_name == details.campaign_name)
            .map(|summary| summary.campaign_id)
            .with_context(|| format!("no campaign named {name}"))
    }

    pub async fn add_to_campaign(
        &self,
        employee_id: EmployeeId,
        campaign_id: CampaignId,
    ) -> anyhow::Result<()> {
        let membership =
            requests::CampaignMembership::new(Some(employee_id), campaign_id)?;
        self.client.assign_employee_to_campaign(&membership).await?;
        Ok(())
    }

    /// Assign an employee to a region as a BDM.
    pub async fn assign_region(
        &self,
        employee_id: EmployeeId,
        employee_name: &str,
        region_id: &str,
        project: payloads::Project,
    ) -> anyhow::Result<()> {
        let details = requests::CreateRegionAssignment {
            employee_id: employee_id.to_string(),
            employee_name: employee_name.to_string(),
            region_id: RegionId(region_id.to_string()),
            project,
            is_bdm: requests::YesNo::Yes,
            is_zonal_manager: requests::YesNo::No,
        };
        self.client.create_region_assignment(&details).await?;
        Ok(())
    }
}

/// Start the mock api on `port` with the default regions loaded. Use port 0
/// for an OS-assigned port.
pub async fn spawn_app_on_port(port: u16) -> TestApp {
    let subscriber = telemetry::get_subscriber("error".into());
    let _ = LogTracer::init();
    let _ = subscriber.try_init();

    let store = Store::new();
    for region in default_regions() {
        store.add_region(region).await;
    }

    let mut config = Config {
        ip: "127.0.0.1".into(),
        port,
        allowed_origins: vec!["*".to_string()],
    };

    let server = build(&mut config, store.clone()).unwrap();
    tokio::spawn(server);

    TestApp {
        port: config.port,
        client: payloads::APIClient {
            address: format!("http://127.0.0.1:{}", config.port),
            inner_client: reqwest::Client::new(),
        },
        store,
    }
}

/// Spawn the app on an OS-assigned port.
pub async fn spawn_app() -> TestApp {
    spawn_app_on_port(0).await
}

pub fn default_regions() -> Vec<RegionRecord> {
    [
        ("R1", "North Zone", "S1", "Punjab"),
        ("R2", "South Zone", "S2", "Karnataka"),
        ("R3", "East Zone", "S3", "Odisha"),
        ("R4", "West Zone", "S4", "Gujarat"),
    ]
    .into_iter()
    .map(|(region_id, region_name, state_id, state_name)| RegionRecord {
        region_id: RegionId(region_id.to_string()),
        region_name: region_name.to_string(),
        state_id: Some(state_id.to_string()),
        state_name: Some(state_name.to_string()),
    })
    .collect()
}

pub fn employee_details(
    name: &str,
    phone: &str,
    role_id: Option<RoleId>,
) -> requests::CreateEmployee {
    requests::CreateEmployee {
        employee_name: name.to_string(),
        employee_phone: phone.to_string(),
        employee_mail_id: None,
        employee_role_id: role_id,
        is_active: true,
    }
}

/// Assert that the result of an API action results in a specific status code.
pub fn assert_status_code<T>(
    result: Result<T, payloads::ClientError>,
    expected: StatusCode,
) {
    match result {
        Err(payloads::ClientError::APIError(code, _)) => {
            assert_eq!(code, expected)
        }
        _ => panic!("Expected APIError"),
    };
}

/// Assert that the api refused an action with `success: false` and the
/// given message.
pub fn assert_rejected<T>(
    result: Result<T, payloads::ClientError>,
    expected: &str,
) {
    match result {
        Err(payloads::ClientError::Rejected(message)) => {
            assert_eq!(message.as_deref(), Some(expected))
        }
        Err(e) => panic!("Expected Rejected, got {e:?}"),
        Ok(_) => panic!("Expected Rejected, got Ok"),
    };
}
