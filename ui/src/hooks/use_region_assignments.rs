use payloads::{
    Page, RegionId,
    filters::{RegionFilterField, RegionFilters, filter_assignments},
    grouping::{EmployeeAssignments, group_by_employee},
    requests::{RegionQuery, assignable_employees},
    responses::{EmployeeOption, RegionAssignment, RegionOption},
};
use yew::prelude::*;

use super::{FetchHookReturn, FetchState, use_fetch};
use crate::get_api_client;

/// Rows per page of the filtered assignment list.
pub const REGION_PAGE_LIMIT: u64 = 10;

pub struct RegionFiltersHandle {
    pub filters: RegionFilters,
    /// Replace every field at once, as the filter panel's Apply does.
    pub on_apply: Callback<RegionFilters>,
    pub on_clear_field: Callback<RegionFilterField>,
    pub on_clear_all: Callback<()>,
    pub on_page: Callback<u64>,
}

#[hook]
pub fn use_region_filters() -> RegionFiltersHandle {
    let filters = use_state(RegionFilters::default);

    let on_apply = {
        let filters = filters.clone();
        Callback::from(move |mut applied: RegionFilters| {
            applied.set_page(1);
            filters.set(applied);
        })
    };

    let on_clear_field = {
        let filters = filters.clone();
        Callback::from(move |field: RegionFilterField| {
            let mut next = (*filters).clone();
            next.clear_field(field);
            filters.set(next);
        })
    };

    let on_clear_all = {
        let filters = filters.clone();
        Callback::from(move |_| {
            let mut next = (*filters).clone();
            next.clear_all();
            filters.set(next);
        })
    };

    let on_page = {
        let filters = filters.clone();
        Callback::from(move |page: u64| {
            let mut next = (*filters).clone();
            next.set_page(page);
            filters.set(next);
        })
    };

    RegionFiltersHandle {
        filters: (*filters).clone(),
        on_apply,
        on_clear_field,
        on_clear_all,
        on_page,
    }
}

/// One page of assignments matching `filters`, filtered by the api.
#[hook]
pub fn use_region_assignments(
    filters: RegionFilters,
) -> FetchHookReturn<Page<RegionAssignment>> {
    let query = filters.to_query(REGION_PAGE_LIMIT);
    use_fetch(filters, move || {
        let query = query.clone();
        async move {
            get_api_client()
                .list_region_assignments(&query)
                .await
                .map_err(|e| e.message_or("Failed to fetch region assignments"))
        }
    })
}

pub struct GroupedAssignments {
    /// Every row the api returned, before the search and region filters.
    pub rows: FetchState<Vec<RegionAssignment>>,
    pub groups: Vec<EmployeeAssignments>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub refetch: Callback<()>,
}

/// All assignments, filtered here by `search` and `region_id` and grouped
/// by employee.
#[hook]
pub fn use_grouped_region_assignments(
    search: String,
    region_id: Option<RegionId>,
) -> GroupedAssignments {
    let fetch = use_fetch((), || async move {
        get_api_client()
            .list_region_assignments(&RegionQuery::default())
            .await
            .map(|page| page.items)
            .map_err(|e| e.message_or("Failed to fetch region assignments"))
    });

    let groups = match fetch.data.as_ref() {
        Some(rows) => group_by_employee(&filter_assignments(
            rows,
            &search,
            region_id.as_ref(),
        )),
        None => Vec::new(),
    };

    GroupedAssignments {
        rows: fetch.data,
        groups,
        is_loading: fetch.is_loading,
        error: fetch.error,
        refetch: fetch.refetch,
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AssignmentFormOptions {
    /// Employees with a known role, the only ones that can be assigned.
    pub employees: Vec<EmployeeOption>,
    pub regions: Vec<RegionOption>,
}

/// Dropdown contents for the assign region modal, loaded each time it
/// opens.
#[hook]
pub fn use_assignment_form_options(
    open: bool,
) -> FetchHookReturn<AssignmentFormOptions> {
    use_fetch(open, move || async move {
        if !open {
            return Ok(AssignmentFormOptions::default());
        }
        let client = get_api_client();
        let (employees, regions) =
            futures::join!(client.employee_options(), client.region_options());
        Ok(AssignmentFormOptions {
            employees: assignable_employees(
                &employees.map_err(|e| e.message_or("Failed to fetch employees"))?,
            ),
            regions: regions.map_err(|e| e.message_or("Failed to fetch regions"))?,
        })
    })
}
