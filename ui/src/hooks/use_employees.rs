use payloads::{
    Page,
    debounce::SEARCH_DEBOUNCE_MS,
    filters::{EmployeeFilters, StatusFilter},
    responses::{Employee, FilterOptions},
};
use yew::prelude::*;

use super::{FetchHookReturn, use_debounced, use_fetch};
use crate::get_api_client;

/// One page of employees matching `filters`.
#[hook]
pub fn use_employees(filters: EmployeeFilters) -> FetchHookReturn<Page<Employee>> {
    let query = filters.to_query();
    use_fetch(filters, move || {
        let query = query.clone();
        async move {
            get_api_client()
                .list_employees(&query)
                .await
                .map_err(|e| e.message_or("Failed to fetch employees"))
        }
    })
}

/// Role and region values for the filter dropdowns.
#[hook]
pub fn use_employee_filter_options() -> FetchHookReturn<FilterOptions> {
    use_fetch((), || async move {
        get_api_client()
            .employee_filter_options()
            .await
            .map_err(|e| e.message_or("Failed to fetch filter options"))
    })
}

pub struct EmployeeFiltersHandle {
    pub filters: EmployeeFilters,
    /// What is typed in the search box, ahead of the debounce.
    pub search_input: String,
    pub on_search_input: Callback<String>,
    pub on_status: Callback<StatusFilter>,
    pub on_role: Callback<String>,
    pub on_region: Callback<String>,
    pub on_page: Callback<u64>,
    pub on_reset: Callback<()>,
}

/// Employee filter state. The search box is debounced before it reaches
/// the filters; every filter change goes back to page 1.
#[hook]
pub fn use_employee_filters() -> EmployeeFiltersHandle {
    let filters = use_state(EmployeeFilters::default);
    let search_input = use_state(String::new);
    let debounced_search =
        use_debounced((*search_input).clone(), SEARCH_DEBOUNCE_MS);

    {
        let filters = filters.clone();
        use_effect_with(debounced_search, move |search| {
            if filters.search != *search {
                let mut next = (*filters).clone();
                next.set_search(search.clone());
                filters.set(next);
            }
        });
    }

    let update = |apply: fn(&mut EmployeeFilters, String)| {
        let filters = filters.clone();
        Callback::from(move |value: String| {
            let mut next = (*filters).clone();
            apply(&mut next, value);
            filters.set(next);
        })
    };

    let on_search_input = {
        let search_input = search_input.clone();
        Callback::from(move |value: String| search_input.set(value))
    };

    let on_status = {
        let filters = filters.clone();
        Callback::from(move |status: StatusFilter| {
            let mut next = (*filters).clone();
            next.set_status(status);
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

    let on_reset = {
        let filters = filters.clone();
        let search_input = search_input.clone();
        Callback::from(move |_| {
            search_input.set(String::new());
            filters.set(EmployeeFilters::default());
        })
    };

    EmployeeFiltersHandle {
        filters: (*filters).clone(),
        search_input: (*search_input).clone(),
        on_search_input,
        on_status,
        on_role: update(|filters, role| filters.set_role(role)),
        on_region: update(|filters, region| filters.set_region(region)),
        on_page,
        on_reset,
    }
}
