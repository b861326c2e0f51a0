use payloads::{
    Project,
    requests::{CreateRegionAssignment, RegionAssignmentForm},
};
use yew::prelude::*;

use crate::{
    components::{
        Modal,
        form::{
            FormError, INPUT_CLASS, LABEL_CLASS, PRIMARY_BUTTON_CLASS,
            SECONDARY_BUTTON_CLASS, select_value,
        },
    },
    get_api_client,
    hooks::{MutationMessages, use_assignment_form_options, use_mutation},
};

#[derive(Properties, PartialEq)]
pub struct AssignRegionModalProps {
    pub on_close: Callback<()>,
    pub on_assigned: Callback<()>,
}

#[function_component]
pub fn AssignRegionModal(props: &AssignRegionModalProps) -> Html {
    let form = use_state(RegionAssignmentForm::default);
    let options = use_assignment_form_options(true);

    let on_success = {
        let on_assigned = props.on_assigned.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_| {
            on_assigned.emit(());
            on_close.emit(());
        })
    };

    let create = use_mutation(
        |details: CreateRegionAssignment| async move {
            get_api_client().create_region_assignment(&details).await
        },
        MutationMessages {
            success: "Region assigned successfully",
            failure: "Failed to assign region",
            toast_errors: false,
        },
        on_success,
    );

    let update = |apply: fn(&mut RegionAssignmentForm, String)| {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let mut next = (*form).clone();
            apply(&mut next, select_value(&e));
            form.set(next);
        })
    };
    let on_employee = update(|form, value| form.employee_id = value);
    let on_region = update(|form, value| form.region_id = value);
    let on_project = update(|form, value| {
        if let Ok(project) = value.parse::<Project>() {
            form.project = project;
        }
    });

    let toggle = |apply: fn(&mut RegionAssignmentForm)| {
        let form = form.clone();
        Callback::from(move |_: Event| {
            let mut next = (*form).clone();
            apply(&mut next);
            form.set(next);
        })
    };
    let on_bdm = toggle(|form| form.is_bdm = !form.is_bdm);
    let on_zonal = toggle(|form| form.is_zonal_manager = !form.is_zonal_manager);

    let on_submit = {
        let form = form.clone();
        let employees = options
            .data
            .as_ref()
            .map(|options| options.employees.clone())
            .unwrap_or_default();
        let run = create.run.clone();
        let reject = create.reject.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match form.validate(&employees) {
                Ok(details) => run.emit(details),
                Err(error) => reject.emit(error.to_string()),
            }
        })
    };

    let (employees, regions) = options
        .data
        .as_ref()
        .map(|options| (options.employees.clone(), options.regions.clone()))
        .unwrap_or_default();
    let disabled = create.is_loading || options.is_loading;
    let is_loading = create.is_loading;

    html! {
        <Modal
            title="Assign Region"
            on_close={props.on_close.clone()}
            max_width="max-w-lg"
            close_on_backdrop={!is_loading}
        >
            <form onsubmit={on_submit} class="space-y-4">
                <FormError message={create.error.clone().or(options.error.clone())} />
                <div>
                    <label for="assign-employee" class={LABEL_CLASS}>{"Employee"}</label>
                    <select id="assign-employee" onchange={on_employee} disabled={disabled} class={INPUT_CLASS}>
                        <option value="" selected={form.employee_id.is_empty()}>
                            {if options.is_loading { "Loading..." } else { "Select an employee" }}
                        </option>
                        {for employees.iter().map(|employee| {
                            let value = employee.employee_id.to_string();
                            html! {
                                <option selected={form.employee_id == value} value={value.clone()}>
                                    {format!("{} (ID: {})", employee.employee_name, value)}
                                </option>
                            }
                        })}
                    </select>
                </div>
                <div>
                    <label for="assign-region" class={LABEL_CLASS}>{"Region"}</label>
                    <select id="assign-region" onchange={on_region} disabled={disabled} class={INPUT_CLASS}>
                        <option value="" selected={form.region_id.is_empty()}>{"Select a region"}</option>
                        {for regions.iter().map(|region| html! {
                            <option
                                value={region.region_id.to_string()}
                                selected={form.region_id == region.region_id.0}
                            >
                                {&region.region_name}
                            </option>
                        })}
                    </select>
                </div>
                <div>
                    <label for="assign-project" class={LABEL_CLASS}>{"Project"}</label>
                    <select id="assign-project" onchange={on_project} disabled={disabled} class={INPUT_CLASS}>
                        {for Project::ALL.iter().map(|project| html! {
                            <option value={project.as_str()} selected={form.project == *project}>
                                {project.as_str()}
                            </option>
                        })}
                    </select>
                </div>
                <div class="flex gap-6">
                    <label class="inline-flex items-center gap-2 text-sm">
                        <input type="checkbox" checked={form.is_bdm} onchange={on_bdm} disabled={disabled} />
                        {"BDM"}
                    </label>
                    <label class="inline-flex items-center gap-2 text-sm">
                        <input
                            type="checkbox"
                            checked={form.is_zonal_manager}
                            onchange={on_zonal}
                            disabled={disabled}
                        />
                        {"Zonal Manager"}
                    </label>
                </div>
                <div class="flex justify-end gap-3 pt-2">
                    <button
                        type="button"
                        onclick={props.on_close.reform(|_: MouseEvent| ())}
                        disabled={is_loading}
                        class={SECONDARY_BUTTON_CLASS}
                    >
                        {"Cancel"}
                    </button>
                    <button type="submit" disabled={disabled} class={PRIMARY_BUTTON_CLASS}>
                        if is_loading {
                            {"Assigning..."}
                        } else {
                            {"Assign Region"}
                        }
                    </button>
                </div>
            </form>
        </Modal>
    }
}
