use payloads::{
    EMPLOYEE_ROLES, EmployeeId, RoleId, requests::EmployeeForm,
    responses::Employee,
};
use yew::prelude::*;

use crate::{
    components::{
        Modal,
        form::{
            FormError, INPUT_CLASS, LABEL_CLASS, PRIMARY_BUTTON_CLASS,
            SECONDARY_BUTTON_CLASS, input_value, select_value,
        },
    },
    get_api_client,
    hooks::{MutationMessages, use_mutation},
};

#[derive(Properties, PartialEq)]
pub struct EmployeeFormModalProps {
    /// The employee being edited, or None to add a new one
    #[prop_or_default]
    pub employee: Option<Employee>,
    pub on_close: Callback<()>,
    /// Called after a successful save so the list can refetch
    pub on_saved: Callback<()>,
}

enum Submission {
    Create(payloads::requests::CreateEmployee),
    Update(EmployeeId, payloads::requests::UpdateEmployee),
}

/// Add or edit an employee.
#[function_component]
pub fn EmployeeFormModal(props: &EmployeeFormModalProps) -> Html {
    let form = {
        let employee = props.employee.clone();
        use_state(move || match &employee {
            Some(employee) => EmployeeForm::from_employee(employee),
            None => EmployeeForm::new(),
        })
    };
    let editing = props.employee.as_ref().map(|e| e.employee_id);

    let on_success = {
        let on_saved = props.on_saved.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_| {
            on_saved.emit(());
            on_close.emit(());
        })
    };

    let mutation = use_mutation(
        |submission: Submission| async move {
            let client = get_api_client();
            match submission {
                Submission::Create(details) => client.create_employee(&details).await,
                Submission::Update(id, details) => {
                    client.update_employee(id, &details).await
                }
            }
        },
        if editing.is_some() {
            MutationMessages {
                success: "Employee updated successfully",
                failure: "Failed to update employee",
                toast_errors: false,
            }
        } else {
            MutationMessages {
                success: "Employee created successfully",
                failure: "Failed to create employee",
                toast_errors: false,
            }
        },
        on_success,
    );

    let on_submit = {
        let form = form.clone();
        let run = mutation.run.clone();
        let reject = mutation.reject.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let submission = match editing {
                Some(id) => form.into_update(id).map(|details| Submission::Update(id, details)),
                None => form.into_create().map(Submission::Create),
            };
            match submission {
                Ok(submission) => run.emit(submission),
                Err(error) => reject.emit(error.to_string()),
            }
        })
    };

    let edit = |apply: fn(&mut EmployeeForm, String)| {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            apply(&mut next, value);
            form.set(next);
        })
    };
    let on_name = edit(|form, value| form.name = value).reform(|e: InputEvent| input_value(&e));
    let on_phone = edit(|form, value| form.phone = value).reform(|e: InputEvent| input_value(&e));
    let on_email = edit(|form, value| form.email = value).reform(|e: InputEvent| input_value(&e));
    let on_role = edit(|form, value| form.role_id = value.parse().ok().map(RoleId))
        .reform(|e: Event| select_value(&e));
    let on_status = edit(|form, value| form.is_active = value == "active")
        .reform(|e: Event| select_value(&e));

    let is_loading = mutation.is_loading;
    let title = if editing.is_some() { "Edit Employee" } else { "Add Employee" };

    html! {
        <Modal
            title={title}
            on_close={props.on_close.clone()}
            close_on_backdrop={!is_loading}
        >
            <form onsubmit={on_submit} class="space-y-4">
                <FormError message={mutation.error.clone()} />

                if let Some(id) = editing {
                    <p class="text-sm text-neutral-500 dark:text-neutral-400">
                        {format!("Employee ID {id}")}
                    </p>
                }

                <div>
                    <label class={LABEL_CLASS}>{"Name"}</label>
                    <input
                        type="text"
                        value={form.name.clone()}
                        oninput={on_name}
                        disabled={is_loading}
                        class={INPUT_CLASS}
                    />
                </div>
                <div>
                    <label class={LABEL_CLASS}>{"Phone"}</label>
                    <input
                        type="tel"
                        value={form.phone.clone()}
                        oninput={on_phone}
                        disabled={is_loading}
                        class={INPUT_CLASS}
                    />
                </div>
                <div>
                    <label class={LABEL_CLASS}>{"Email"}</label>
                    <input
                        type="email"
                        value={form.email.clone()}
                        oninput={on_email}
                        disabled={is_loading}
                        class={INPUT_CLASS}
                    />
                </div>
                <div>
                    <label class={LABEL_CLASS}>{"Role"}</label>
                    <select onchange={on_role} disabled={is_loading} class={INPUT_CLASS}>
                        <option value="" selected={form.role_id.is_none()}>{"Select role"}</option>
                        {for EMPLOYEE_ROLES.iter().map(|(id, name)| html! {
                            <option value={id.to_string()} selected={form.role_id == Some(*id)}>
                                {*name}
                            </option>
                        })}
                    </select>
                </div>
                <div>
                    <label class={LABEL_CLASS}>{"Status"}</label>
                    <select onchange={on_status} disabled={is_loading} class={INPUT_CLASS}>
                        <option value="active" selected={form.is_active}>{"Active"}</option>
                        <option value="inactive" selected={!form.is_active}>{"Inactive"}</option>
                    </select>
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
                    <button type="submit" disabled={is_loading} class={PRIMARY_BUTTON_CLASS}>
                        if is_loading {
                            {"Saving..."}
                        } else {
                            {"Save"}
                        }
                    </button>
                </div>
            </form>
        </Modal>
    }
}
