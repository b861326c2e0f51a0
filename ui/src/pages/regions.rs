use payloads::{
    RegionId, debounce::SEARCH_DEBOUNCE_MS, grouping::group_by_employee,
    stats::RegionStats,
};
use yew::prelude::*;

use crate::{
    components::{
        PageNavigator,
        form::{
            INPUT_CLASS, PRIMARY_BUTTON_CLASS, SECONDARY_BUTTON_CLASS,
            input_value, select_value,
        },
        regions::{
            AssignRegionModal, RegionAssignmentTable, RegionFiltersPanel,
            RegionStatsCards,
        },
    },
    get_api_client,
    hooks::{
        use_debounced, use_expansion, use_fetch,
        use_grouped_region_assignments, use_region_assignments,
        use_region_filters, use_title,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RegionView {
    /// One page of rows filtered by the api
    Filtered,
    /// Every row, searched here and grouped per employee
    ByEmployee,
}

fn tab_class(selected: bool) -> &'static str {
    if selected {
        "px-4 py-2 text-sm font-medium border-b-2 border-neutral-900 dark:border-neutral-100"
    } else {
        "px-4 py-2 text-sm font-medium border-b-2 border-transparent \
         text-neutral-500 dark:text-neutral-400 hover:text-neutral-700"
    }
}

#[function_component]
pub fn RegionsPage() -> Html {
    use_title("Regions");
    let view = use_state(|| RegionView::Filtered);
    let assigning = use_state(|| false);
    let expansion = use_expansion::<String>();

    let filters = use_region_filters();
    let page = use_region_assignments(filters.filters.clone());

    let search_input = use_state(String::new);
    let search = use_debounced((*search_input).clone(), SEARCH_DEBOUNCE_MS);
    let region_id = use_state(|| None::<RegionId>);
    let grouped = use_grouped_region_assignments(search, (*region_id).clone());

    let regions = use_fetch((), || async move {
        get_api_client()
            .region_options()
            .await
            .map_err(|e| e.message_or("Failed to fetch regions"))
    });

    let stats = grouped
        .rows
        .as_ref()
        .map(|rows| RegionStats::compute(rows))
        .unwrap_or_default();

    let on_changed = {
        let refetch_page = page.refetch.clone();
        let refetch_all = grouped.refetch.clone();
        Callback::from(move |_: ()| {
            refetch_page.emit(());
            refetch_all.emit(());
        })
    };

    let select_view = |target: RegionView| {
        let view = view.clone();
        let collapse_all = expansion.collapse_all.clone();
        Callback::from(move |_: MouseEvent| {
            collapse_all.emit(());
            view.set(target);
        })
    };

    let on_search = {
        let search_input = search_input.clone();
        Callback::from(move |e: InputEvent| search_input.set(input_value(&e)))
    };
    let on_region = {
        let region_id = region_id.clone();
        Callback::from(move |e: Event| {
            let value = select_value(&e);
            region_id.set((!value.is_empty()).then_some(RegionId(value)));
        })
    };

    let on_assign = {
        let assigning = assigning.clone();
        Callback::from(move |_: MouseEvent| assigning.set(true))
    };
    let on_assign_close = {
        let assigning = assigning.clone();
        Callback::from(move |_: ()| assigning.set(false))
    };

    let is_loading = page.is_loading || grouped.is_loading;

    let content = match *view {
        RegionView::Filtered => html! {
            <>
                <RegionFiltersPanel
                    applied={filters.filters.clone()}
                    on_apply={filters.on_apply.clone()}
                    on_clear_field={filters.on_clear_field.clone()}
                    on_clear_all={filters.on_clear_all.clone()}
                />
                {page.render("region assignments", |page, is_loading, error| html! {
                    <>
                        if let Some(error) = error {
                            <p class="text-sm text-red-600 dark:text-red-400">{error}</p>
                        }
                        <RegionAssignmentTable
                            groups={group_by_employee(&page.items)}
                            expanded={expansion.expanded.clone()}
                            on_toggle={expansion.toggle.clone()}
                            on_changed={on_changed.clone()}
                        />
                        <PageNavigator
                            pagination={page.pagination}
                            on_page_change={filters.on_page.clone()}
                            is_loading={is_loading}
                        />
                    </>
                })}
            </>
        },
        RegionView::ByEmployee => {
            let region_options = regions.data.as_ref().cloned().unwrap_or_default();
            html! {
                <>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        <input
                            type="search"
                            placeholder="Search by employee name or ID"
                            value={(*search_input).clone()}
                            oninput={on_search}
                            class={INPUT_CLASS}
                        />
                        <select onchange={on_region} class={INPUT_CLASS}>
                            <option value="" selected={region_id.is_none()}>{"All regions"}</option>
                            {for region_options.iter().map(|region| html! {
                                <option
                                    value={region.region_id.to_string()}
                                    selected={region_id.as_ref() == Some(&region.region_id)}
                                >
                                    {&region.region_name}
                                </option>
                            })}
                        </select>
                    </div>
                    if let Some(error) = &grouped.error {
                        <p class="text-sm text-red-600 dark:text-red-400">{error}</p>
                    }
                    if grouped.rows.is_fetched() {
                        <RegionAssignmentTable
                            groups={grouped.groups.clone()}
                            expanded={expansion.expanded.clone()}
                            on_toggle={expansion.toggle.clone()}
                            on_changed={on_changed.clone()}
                        />
                    } else if grouped.error.is_none() {
                        <p class="py-12 text-center text-neutral-600 dark:text-neutral-400">
                            {"Loading region assignments..."}
                        </p>
                    }
                </>
            }
        }
    };

    html! {
        <div class="space-y-6">
            <div class="flex flex-wrap items-center justify-between gap-4">
                <h1 class="text-2xl font-bold">{"Region Assignments"}</h1>
                <div class="flex gap-3">
                    <button
                        onclick={on_changed.reform(|_: MouseEvent| ())}
                        disabled={is_loading}
                        class={SECONDARY_BUTTON_CLASS}
                    >
                        {if is_loading { "Refreshing..." } else { "Refresh" }}
                    </button>
                    <button onclick={on_assign} class={PRIMARY_BUTTON_CLASS}>
                        {"Assign Region"}
                    </button>
                </div>
            </div>

            <RegionStatsCards stats={stats} />

            <div class="flex border-b border-neutral-200 dark:border-neutral-700">
                <button
                    onclick={select_view(RegionView::Filtered)}
                    class={tab_class(*view == RegionView::Filtered)}
                >
                    {"Filtered list"}
                </button>
                <button
                    onclick={select_view(RegionView::ByEmployee)}
                    class={tab_class(*view == RegionView::ByEmployee)}
                >
                    {"By employee"}
                </button>
            </div>

            {content}

            if *assigning {
                <AssignRegionModal on_close={on_assign_close} on_assigned={on_changed.clone()} />
            }
        </div>
    }
}
