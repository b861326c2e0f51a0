use payloads::{responses::Campaign, stats::Staffing};
use yew::prelude::*;

use super::CampaignEmployeeTable;

#[derive(Properties, PartialEq)]
pub struct CampaignCardProps {
    pub campaign: Campaign,
    pub is_expanded: bool,
    pub on_toggle: Callback<()>,
    pub on_assign: Callback<()>,
    pub on_changed: Callback<()>,
}

#[function_component]
pub fn CampaignCard(props: &CampaignCardProps) -> Html {
    let campaign = &props.campaign;
    let count = campaign.employees.len();
    let staffing = Staffing::for_count(count);
    let staffing_class = match staffing {
        Staffing::WellStaffed => {
            "bg-green-100 text-green-800 dark:bg-green-900/30 dark:text-green-400"
        }
        Staffing::LowStaff => {
            "bg-yellow-100 text-yellow-800 dark:bg-yellow-900/30 dark:text-yellow-400"
        }
    };

    let on_toggle = props.on_toggle.reform(|_: MouseEvent| ());
    let on_assign = props.on_assign.reform(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="rounded-lg bg-white dark:bg-neutral-800 shadow-sm border border-neutral-200 dark:border-neutral-700">
            <div class="flex items-center justify-between p-5 cursor-pointer" onclick={on_toggle}>
                <div>
                    <div class="flex items-center gap-3">
                        <h2 class="text-lg font-semibold">{&campaign.campaign_name}</h2>
                        <span class="text-xs px-2 py-0.5 rounded bg-neutral-100 dark:bg-neutral-700 text-neutral-600 dark:text-neutral-300">
                            {format!("ID: {}", campaign.campaign_id)}
                        </span>
                    </div>
                    <p class="mt-1 text-sm text-neutral-500 dark:text-neutral-400">
                        {format!("{} employee{}", count, if count == 1 { "" } else { "s" })}
                    </p>
                </div>
                <div class="flex items-center gap-3">
                    <span class={classes!("text-xs", "font-medium", "px-2", "py-0.5", "rounded-full", staffing_class)}>
                        {staffing.label()}
                    </span>
                    <button
                        onclick={on_assign}
                        class="text-sm px-3 py-1 rounded-md border border-neutral-300 dark:border-neutral-600 hover:bg-neutral-50 dark:hover:bg-neutral-700"
                    >
                        {"Assign"}
                    </button>
                    <span class="text-neutral-400">
                        {if props.is_expanded { "▲" } else { "▼" }}
                    </span>
                </div>
            </div>

            if props.is_expanded {
                <div class="px-5 pb-5 border-t border-neutral-200 dark:border-neutral-700">
                    <div class="flex items-center justify-between py-3">
                        <h3 class="font-semibold">{"Team Members"}</h3>
                        <span class="text-sm text-neutral-500 dark:text-neutral-400">
                            {format!("Total: {}", count)}
                        </span>
                    </div>
                    <CampaignEmployeeTable
                        campaign_id={campaign.campaign_id}
                        employees={campaign.employees.clone()}
                        on_changed={props.on_changed.clone()}
                    />
                </div>
            }
        </div>
    }
}
