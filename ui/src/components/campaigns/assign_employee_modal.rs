use payloads::{
    EmployeeId, filters::available_for_campaign, requests::CampaignMembership,
    responses::Campaign,
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
    hooks::{MutationMessages, use_fetch, use_mutation},
};

#[derive(Properties, PartialEq)]
pub struct AssignEmployeeModalProps {
    pub campaign: Campaign,
    pub on_close: Callback<()>,
    pub on_assigned: Callback<()>,
}

/// Add an employee to a campaign.
///
/// The dropdown leaves out the campaign's members as they were when the
/// modal opened; it isn't updated while the modal stays open.
#[function_component]
pub fn AssignEmployeeModal(props: &AssignEmployeeModalProps) -> Html {
    let selected = use_state(|| None::<EmployeeId>);
    let opened_with = use_state({
        let campaign = props.campaign.clone();
        move || campaign
    });

    let options = use_fetch((), || async move {
        get_api_client()
            .employee_options()
            .await
            .map_err(|e| e.message_or("Failed to fetch employees"))
    });

    let pool = options
        .data
        .as_ref()
        .map(|employees| {
            available_for_campaign(
                employees,
                std::slice::from_ref(&*opened_with),
                opened_with.campaign_id,
            )
        })
        .unwrap_or_default();

    let on_success = {
        let on_assigned = props.on_assigned.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_| {
            on_assigned.emit(());
            on_close.emit(());
        })
    };

    let assign = use_mutation(
        |membership: CampaignMembership| async move {
            get_api_client()
                .assign_employee_to_campaign(&membership)
                .await
        },
        MutationMessages {
            success: "Employee assigned to campaign",
            failure: "Failed to assign employee",
            toast_errors: false,
        },
        on_success,
    );

    let on_submit = {
        let selected = selected.clone();
        let run = assign.run.clone();
        let reject = assign.reject.clone();
        let campaign_id = props.campaign.campaign_id;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match CampaignMembership::new(*selected, campaign_id) {
                Ok(membership) => run.emit(membership),
                Err(error) => reject.emit(error.to_string()),
            }
        })
    };

    let on_select = {
        let selected = selected.clone();
        Callback::from(move |e: Event| {
            selected.set(select_value(&e).parse().ok().map(EmployeeId));
        })
    };

    let is_loading = assign.is_loading;

    html! {
        <Modal
            title={format!("Assign Employee to {}", props.campaign.campaign_name)}
            on_close={props.on_close.clone()}
            close_on_backdrop={!is_loading}
        >
            <form onsubmit={on_submit} class="space-y-4">
                <FormError message={assign.error.clone().or(options.error.clone())} />
                <div>
                    <label class={LABEL_CLASS}>{"Employee"}</label>
                    <select
                        onchange={on_select}
                        disabled={is_loading || options.is_loading}
                        class={INPUT_CLASS}
                    >
                        <option value="" selected={selected.is_none()}>
                            {if options.is_loading { "Loading employees..." } else { "Select an employee" }}
                        </option>
                        {for pool.iter().map(|employee| html! {
                            <option
                                value={employee.employee_id.to_string()}
                                selected={*selected == Some(employee.employee_id)}
                            >
                                {format!("{} (ID: {})", employee.employee_name, employee.employee_id)}
                            </option>
                        })}
                    </select>
                    if options.data.is_fetched() && pool.is_empty() {
                        <p class="mt-1 text-xs text-neutral-500 dark:text-neutral-400">
                            {"Every employee is already in this campaign"}
                        </p>
                    }
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
                            {"Assigning..."}
                        } else {
                            {"Assign"}
                        }
                    </button>
                </div>
            </form>
        </Modal>
    }
}
