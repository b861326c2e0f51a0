use payloads::{
    filters::{ALL, EmployeeFilters, StatusFilter},
    responses::FilterOptions,
};
use yew::prelude::*;

use crate::components::form::{INPUT_CLASS, LABEL_CLASS, input_value, select_value};

#[derive(Properties, PartialEq)]
pub struct EmployeeFiltersBarProps {
    pub filters: EmployeeFilters,
    pub search_input: String,
    pub options: FilterOptions,
    pub on_search_input: Callback<String>,
    pub on_status: Callback<StatusFilter>,
    pub on_role: Callback<String>,
    pub on_region: Callback<String>,
}

fn options_with_all(values: &[String], selected: &str) -> Html {
    html! {
        <>
            <option value={ALL} selected={selected == ALL}>{ALL}</option>
            {for values.iter().map(|value| html! {
                <option value={value.clone()} selected={selected == value}>{value}</option>
            })}
        </>
    }
}

#[function_component]
pub fn EmployeeFiltersBar(props: &EmployeeFiltersBarProps) -> Html {
    let on_search = props
        .on_search_input
        .reform(|e: InputEvent| input_value(&e));
    let on_status = props
        .on_status
        .reform(|e: Event| StatusFilter::from_value(&select_value(&e)));
    let on_role = props.on_role.reform(|e: Event| select_value(&e));
    let on_region = props.on_region.reform(|e: Event| select_value(&e));

    html! {
        <div class="grid grid-cols-1 md:grid-cols-4 gap-4 mb-4">
            <div>
                <label class={LABEL_CLASS}>{"Search"}</label>
                <input
                    type="text"
                    placeholder="Name or phone"
                    value={props.search_input.clone()}
                    oninput={on_search}
                    class={INPUT_CLASS}
                />
            </div>
            <div>
                <label class={LABEL_CLASS}>{"Status"}</label>
                <select onchange={on_status} class={INPUT_CLASS}>
                    {for StatusFilter::OPTIONS.iter().map(|status| html! {
                        <option
                            value={status.as_str()}
                            selected={*status == props.filters.status}
                        >
                            {status.as_str()}
                        </option>
                    })}
                </select>
            </div>
            <div>
                <label class={LABEL_CLASS}>{"Role"}</label>
                <select onchange={on_role} class={INPUT_CLASS}>
                    {options_with_all(&props.options.roles, &props.filters.role)}
                </select>
            </div>
            <div>
                <label class={LABEL_CLASS}>{"Region"}</label>
                <select onchange={on_region} class={INPUT_CLASS}>
                    {options_with_all(&props.options.regions, &props.filters.region)}
                </select>
            </div>
        </div>
    }
}
