use payloads::{
    AssignmentRole, AssignmentStatus, Project,
    filters::{RegionFilterField, RegionFilters},
};
use yew::prelude::*;

use crate::components::form::{
    INPUT_CLASS, LABEL_CLASS, PRIMARY_BUTTON_CLASS, SECONDARY_BUTTON_CLASS,
    input_value, select_value,
};

#[derive(Properties, PartialEq)]
pub struct RegionFiltersPanelProps {
    /// The filters currently applied to the list
    pub applied: RegionFilters,
    pub on_apply: Callback<RegionFilters>,
    pub on_clear_field: Callback<RegionFilterField>,
    pub on_clear_all: Callback<()>,
}

/// Filter form for the assignment list. Edits stay in a draft until
/// Apply; the chips below always show what is applied.
#[function_component]
pub fn RegionFiltersPanel(props: &RegionFiltersPanelProps) -> Html {
    let draft = use_state(|| props.applied.clone());

    // Clearing a chip or everything changes the applied filters from
    // outside, and the draft follows.
    {
        let draft = draft.clone();
        use_effect_with(props.applied.clone(), move |applied| {
            draft.set(applied.clone());
        });
    }

    let setter = |field: RegionFilterField| {
        let draft = draft.clone();
        move |value: String| {
            let mut next = (*draft).clone();
            next.set(field, value);
            draft.set(next);
        }
    };

    let on_name = {
        let set = setter(RegionFilterField::EmployeeName);
        Callback::from(move |e: InputEvent| set(input_value(&e)))
    };
    let on_role = {
        let set = setter(RegionFilterField::Role);
        Callback::from(move |e: Event| set(select_value(&e)))
    };
    let on_project = {
        let set = setter(RegionFilterField::Project);
        Callback::from(move |e: Event| set(select_value(&e)))
    };
    let on_status = {
        let set = setter(RegionFilterField::Status);
        Callback::from(move |e: Event| set(select_value(&e)))
    };

    let on_submit = {
        let draft = draft.clone();
        let on_apply = props.on_apply.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_apply.emit((*draft).clone());
        })
    };

    let chips = props.applied.chips();
    let active_count = props.applied.active_count();

    let select = |id: &'static str,
                  label: &'static str,
                  current: &str,
                  values: Vec<&'static str>,
                  onchange: Callback<Event>| {
        html! {
            <div>
                <label for={id} class={LABEL_CLASS}>{label}</label>
                <select id={id} {onchange} class={INPUT_CLASS}>
                    <option value="" selected={current.is_empty()}>{"All"}</option>
                    {for values.into_iter().map(|value| html! {
                        <option value={value} selected={current == value}>{value}</option>
                    })}
                </select>
            </div>
        }
    };

    html! {
        <div class="p-4 rounded-lg bg-white dark:bg-neutral-800 shadow-sm border border-neutral-200 dark:border-neutral-700">
            <form onsubmit={on_submit} class="grid grid-cols-1 md:grid-cols-5 gap-4 items-end">
                <div>
                    <label for="filter-name" class={LABEL_CLASS}>{"Employee Name"}</label>
                    <input
                        id="filter-name"
                        type="text"
                        placeholder="Search by name"
                        value={draft.employee_name.clone()}
                        oninput={on_name}
                        class={INPUT_CLASS}
                    />
                </div>
                {select(
                    "filter-role",
                    "Role",
                    &draft.role,
                    AssignmentRole::FILTERABLE.to_vec(),
                    on_role,
                )}
                {select(
                    "filter-project",
                    "Project",
                    &draft.project,
                    Project::ALL.iter().map(Project::as_str).collect(),
                    on_project,
                )}
                {select(
                    "filter-status",
                    "Status",
                    &draft.is_active,
                    AssignmentStatus::ALL.iter().map(AssignmentStatus::as_str).collect(),
                    on_status,
                )}
                <div class="flex gap-2">
                    <button type="submit" class={PRIMARY_BUTTON_CLASS}>
                        {"Apply"}
                    </button>
                    <button
                        type="button"
                        onclick={props.on_clear_all.reform(|_: MouseEvent| ())}
                        disabled={active_count == 0}
                        class={SECONDARY_BUTTON_CLASS}
                    >
                        {"Clear all"}
                    </button>
                </div>
            </form>

            if !chips.is_empty() {
                <div class="flex flex-wrap items-center gap-2 mt-4">
                    <span class="text-sm text-neutral-500 dark:text-neutral-400">
                        {format!("{} active filter{}", active_count, if active_count == 1 { "" } else { "s" })}
                    </span>
                    {for chips.into_iter().map(|chip| {
                        let field = chip.field;
                        let on_remove = props.on_clear_field.reform(move |_: MouseEvent| field);
                        html! {
                            <span
                                key={field.label()}
                                class="inline-flex items-center gap-1 px-2 py-1 text-xs rounded-full \
                                       bg-neutral-100 dark:bg-neutral-700 text-neutral-700 dark:text-neutral-200"
                            >
                                {chip.label()}
                                <button
                                    type="button"
                                    onclick={on_remove}
                                    class="ml-1 text-neutral-500 hover:text-neutral-900 dark:hover:text-neutral-100"
                                    aria-label="Remove filter"
                                >
                                    {"×"}
                                </button>
                            </span>
                        }
                    })}
                </div>
            }
        </div>
    }
}
