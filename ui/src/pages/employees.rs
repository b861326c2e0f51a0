use payloads::responses::Employee;
use yew::prelude::*;

use crate::{
    components::{
        PaginationControls,
        employees::{EmployeeFiltersBar, EmployeeFormModal, EmployeeTable},
        form::{PRIMARY_BUTTON_CLASS, SECONDARY_BUTTON_CLASS},
    },
    hooks::{
        use_employee_filter_options, use_employee_filters, use_employees,
        use_title,
    },
};

#[derive(Clone, PartialEq)]
enum FormTarget {
    New,
    Existing(Employee),
}

#[function_component]
pub fn EmployeesPage() -> Html {
    use_title("Employees");
    let filters = use_employee_filters();
    let employees = use_employees(filters.filters.clone());
    let options = use_employee_filter_options();
    let form_target = use_state(|| None::<FormTarget>);

    let on_add = {
        let form_target = form_target.clone();
        Callback::from(move |_: MouseEvent| form_target.set(Some(FormTarget::New)))
    };
    let on_edit = {
        let form_target = form_target.clone();
        Callback::from(move |employee: Employee| {
            form_target.set(Some(FormTarget::Existing(employee)))
        })
    };
    let on_close = {
        let form_target = form_target.clone();
        Callback::from(move |_: ()| form_target.set(None))
    };

    let total = employees
        .data
        .as_ref()
        .map(|page| page.pagination.total)
        .unwrap_or_default();
    let filter_options = options.data.as_ref().cloned().unwrap_or_default();

    html! {
        <div class="space-y-6">
            <div class="flex flex-wrap items-center justify-between gap-4">
                <div>
                    <h1 class="text-2xl font-bold">{"Employees"}</h1>
                    <p class="text-sm text-neutral-500 dark:text-neutral-400">
                        {format!("{total} employee{} in total", if total == 1 { "" } else { "s" })}
                    </p>
                </div>
                <div class="flex gap-3">
                    <button
                        onclick={filters.on_reset.reform(|_: MouseEvent| ())}
                        class={SECONDARY_BUTTON_CLASS}
                    >
                        {"Reset filters"}
                    </button>
                    <button onclick={on_add} class={PRIMARY_BUTTON_CLASS}>
                        {"Add Employee"}
                    </button>
                </div>
            </div>

            <EmployeeFiltersBar
                filters={filters.filters.clone()}
                search_input={filters.search_input.clone()}
                options={filter_options}
                on_search_input={filters.on_search_input.clone()}
                on_status={filters.on_status.clone()}
                on_role={filters.on_role.clone()}
                on_region={filters.on_region.clone()}
            />

            {employees.render("employees", |page, is_loading, error| html! {
                <div class="rounded-lg bg-white dark:bg-neutral-800 shadow-sm border border-neutral-200 dark:border-neutral-700 p-4">
                    if let Some(error) = error {
                        <p class="mb-3 text-sm text-red-600 dark:text-red-400">{error}</p>
                    }
                    <EmployeeTable employees={page.items.clone()} on_edit={on_edit.clone()} />
                    <PaginationControls
                        pagination={page.pagination}
                        on_page_change={filters.on_page.clone()}
                        is_loading={is_loading}
                    />
                </div>
            })}

            if let Some(target) = &*form_target {
                <EmployeeFormModal
                    employee={match target {
                        FormTarget::New => None,
                        FormTarget::Existing(employee) => Some(employee.clone()),
                    }}
                    on_close={on_close}
                    on_saved={employees.refetch.clone()}
                />
            }
        </div>
    }
}
