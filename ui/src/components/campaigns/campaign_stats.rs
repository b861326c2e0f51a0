use payloads::stats::CampaignStats;
use yew::prelude::*;

use crate::components::StatCard;

#[derive(Properties, PartialEq)]
pub struct CampaignStatsCardsProps {
    pub stats: CampaignStats,
}

#[function_component]
pub fn CampaignStatsCards(props: &CampaignStatsCardsProps) -> Html {
    let stats = &props.stats;

    html! {
        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4 mb-6">
            <StatCard
                title="Total Campaigns"
                value={stats.total_campaigns.to_string()}
                description={format!("{} without employees", stats.empty_campaigns)}
            />
            <StatCard
                title="Total Employees"
                value={stats.total_employees.to_string()}
                description={format!("Avg: {} per campaign", stats.average_employees)}
            />
            <StatCard
                title="Active Campaigns"
                value={stats.active_campaigns.to_string()}
                description="With at least one employee"
            />
            <StatCard
                title="Utilization"
                value={format!("{}%", stats.utilization_percent())}
                description="Campaigns with employees"
            />
        </div>
    }
}
