use payloads::stats::RegionStats;
use yew::prelude::*;

use crate::components::StatCard;

#[derive(Properties, PartialEq)]
pub struct RegionStatsCardsProps {
    pub stats: RegionStats,
}

#[function_component]
pub fn RegionStatsCards(props: &RegionStatsCardsProps) -> Html {
    let RegionStats {
        total,
        active,
        projects,
    } = props.stats;

    html! {
        <div class="grid grid-cols-1 sm:grid-cols-3 gap-4">
            <StatCard title="Total Assignments" value={total.to_string()} />
            <StatCard
                title="Active"
                value={active.to_string()}
                description={format!("{} inactive", total - active)}
            />
            <StatCard title="Projects" value={projects.to_string()} />
        </div>
    }
}
