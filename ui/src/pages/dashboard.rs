use payloads::requests::{EmployeeQuery, RegionQuery};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    Route,
    components::StatCard,
    get_api_client,
    hooks::{use_fetch, use_title},
};

#[derive(Debug, Clone, Copy, PartialEq)]
struct Counts {
    employees: u64,
    campaigns: usize,
    region_assignments: u64,
}

#[function_component]
pub fn DashboardPage() -> Html {
    use_title("Dashboard");

    let counts = use_fetch((), || async move {
        let client = get_api_client();
        let employee_query = EmployeeQuery {
            limit: 1,
            ..Default::default()
        };
        let region_query = RegionQuery {
            page: Some(1),
            limit: Some(1),
            ..Default::default()
        };
        let (employees, campaigns, regions) = futures::join!(
            client.list_employees(&employee_query),
            client.list_campaigns(),
            client.list_region_assignments(&region_query),
        );
        Ok(Counts {
            employees: employees
                .map_err(|e| e.message_or("Failed to fetch employees"))?
                .pagination
                .total,
            campaigns: campaigns
                .map_err(|e| e.message_or("Failed to fetch campaigns"))?
                .len(),
            region_assignments: regions
                .map_err(|e| e.message_or("Failed to fetch region assignments"))?
                .pagination
                .total,
        })
    });

    let link_class = "text-sm font-medium underline text-neutral-700 dark:text-neutral-300";

    html! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold">{"Dashboard"}</h1>
                <button
                    onclick={counts.refetch.reform(|_: MouseEvent| ())}
                    disabled={counts.is_loading}
                    class="text-sm px-3 py-1.5 rounded-md border border-neutral-300 dark:border-neutral-600 disabled:opacity-50"
                >
                    {"Refresh"}
                </button>
            </div>

            {counts.render("dashboard", |counts, _, _| html! {
                <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                    <StatCard title="Employees" value={counts.employees.to_string()} />
                    <StatCard title="Campaigns" value={counts.campaigns.to_string()} />
                    <StatCard
                        title="Region Assignments"
                        value={counts.region_assignments.to_string()}
                    />
                </div>
            })}

            <div class="flex gap-6">
                <Link<Route> to={Route::Employees} classes={link_class}>{"Manage employees"}</Link<Route>>
                <Link<Route> to={Route::Regions} classes={link_class}>{"Manage regions"}</Link<Route>>
                <Link<Route> to={Route::Campaigns} classes={link_class}>{"Manage campaigns"}</Link<Route>>
            </div>
        </div>
    }
}
