use payloads::{CampaignId, responses::Campaign};
use yew::prelude::*;

use crate::{
    components::{
        campaigns::{
            AddCampaignModal, AssignEmployeeModal, CampaignCard,
            CampaignStatsCards,
        },
        form::{INPUT_CLASS, PRIMARY_BUTTON_CLASS, SECONDARY_BUTTON_CLASS, input_value},
    },
    hooks::{
        use_campaign_search, use_campaign_stats, use_campaigns, use_expansion,
        use_title,
    },
};

#[function_component]
pub fn CampaignsPage() -> Html {
    use_title("Campaigns");
    let campaigns = use_campaigns();
    let all = campaigns.data.as_ref().cloned().unwrap_or_default();
    let search = use_campaign_search(all.clone());
    let stats = use_campaign_stats(all.clone());
    let expansion = use_expansion::<CampaignId>();
    let adding = use_state(|| false);
    let assigning = use_state(|| None::<Campaign>);

    let on_add = {
        let adding = adding.clone();
        Callback::from(move |_: MouseEvent| adding.set(true))
    };
    let on_add_close = {
        let adding = adding.clone();
        Callback::from(move |_: ()| adding.set(false))
    };
    let on_assign_close = {
        let assigning = assigning.clone();
        Callback::from(move |_: ()| assigning.set(None))
    };
    let on_search = search.on_input.reform(|e: InputEvent| input_value(&e));

    let list = {
        let filtered = search.filtered.clone();
        let expanded = expansion.expanded;
        let toggle = expansion.toggle.clone();
        let assigning = assigning.clone();
        let refetch = campaigns.refetch.clone();
        move |_: &Vec<Campaign>, _: bool, error: Option<&String>| {
            html! {
                <>
                    if let Some(error) = error {
                        <p class="text-sm text-red-600 dark:text-red-400">{error}</p>
                    }
                    if filtered.is_empty() {
                        <div class="p-8 text-center rounded-lg bg-white dark:bg-neutral-800 border border-neutral-200 dark:border-neutral-700">
                            <p class="text-neutral-500 dark:text-neutral-400">{"No campaigns found"}</p>
                        </div>
                    }
                    <div class="space-y-4">
                        {for filtered.iter().map(|campaign| {
                            let id = campaign.campaign_id;
                            let on_assign = {
                                let assigning = assigning.clone();
                                let campaign = campaign.clone();
                                Callback::from(move |_: ()| assigning.set(Some(campaign.clone())))
                            };
                            html! {
                                <CampaignCard
                                    key={id.to_string()}
                                    campaign={campaign.clone()}
                                    is_expanded={expanded == Some(id)}
                                    on_toggle={toggle.reform(move |_: ()| id)}
                                    on_assign={on_assign}
                                    on_changed={refetch.clone()}
                                />
                            }
                        })}
                    </div>
                </>
            }
        }
    };

    html! {
        <div class="space-y-6">
            <div class="flex flex-wrap items-center justify-between gap-4">
                <div>
                    <h1 class="text-2xl font-bold">{"Campaigns"}</h1>
                    if let Some(largest) = &stats.largest {
                        <p class="text-sm text-neutral-500 dark:text-neutral-400">
                            {format!(
                                "Largest campaign: {} ({} employee{})",
                                largest.name,
                                largest.employee_count,
                                if largest.employee_count == 1 { "" } else { "s" }
                            )}
                        </p>
                    }
                </div>
                <div class="flex gap-3">
                    <button
                        onclick={expansion.collapse_all.reform(|_: MouseEvent| ())}
                        disabled={expansion.expanded.is_none()}
                        class={SECONDARY_BUTTON_CLASS}
                    >
                        {"Collapse all"}
                    </button>
                    <button
                        onclick={campaigns.refetch.reform(|_: MouseEvent| ())}
                        disabled={campaigns.is_loading}
                        class={SECONDARY_BUTTON_CLASS}
                    >
                        {if campaigns.is_loading { "Refreshing..." } else { "Refresh" }}
                    </button>
                    <button onclick={on_add} class={PRIMARY_BUTTON_CLASS}>
                        {"Add Campaign"}
                    </button>
                </div>
            </div>

            <CampaignStatsCards stats={(*stats).clone()} />

            <div>
                <input
                    type="search"
                    placeholder="Search campaigns, employees, phones or regions"
                    value={search.input.clone()}
                    oninput={on_search}
                    class={INPUT_CLASS}
                />
                if search.is_searching {
                    <p class="mt-2 text-sm text-neutral-500 dark:text-neutral-400">
                        {format!("Found {} of {} campaigns", search.filtered.len(), all.len())}
                    </p>
                }
            </div>

            {campaigns.render("campaigns", list)}

            if campaigns.data.is_fetched() && !all.is_empty() {
                <p class="text-sm text-neutral-500 dark:text-neutral-400">
                    {format!("Showing {} of {} campaigns", search.filtered.len(), all.len())}
                </p>
            }

            if *adding {
                <AddCampaignModal
                    on_close={on_add_close}
                    on_created={campaigns.refetch.clone()}
                />
            }
            if let Some(campaign) = &*assigning {
                <AssignEmployeeModal
                    campaign={campaign.clone()}
                    on_close={on_assign_close}
                    on_assigned={campaigns.refetch.clone()}
                />
            }
        </div>
    }
}
