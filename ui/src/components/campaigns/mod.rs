mod add_campaign_modal;
mod assign_employee_modal;
mod campaign_card;
mod campaign_employee_table;
mod campaign_stats;

pub use add_campaign_modal::AddCampaignModal;
pub use assign_employee_modal::AssignEmployeeModal;
pub use campaign_card::CampaignCard;
pub use campaign_employee_table::CampaignEmployeeTable;
pub use campaign_stats::CampaignStatsCards;
