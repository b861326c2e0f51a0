use payloads::{CampaignId, requests::CampaignMembership, responses::CampaignEmployee};
use yew::prelude::*;

use crate::{
    components::ConfirmationModal,
    get_api_client,
    hooks::{MutationMessages, use_mutation},
    utils::truncate_text,
};

#[derive(Properties, PartialEq)]
pub struct CampaignEmployeeTableProps {
    pub campaign_id: CampaignId,
    pub employees: Vec<CampaignEmployee>,
    /// Called after a member was removed so the campaigns refetch
    pub on_changed: Callback<()>,
}

/// Members of one campaign, each removable after a confirmation.
#[function_component]
pub fn CampaignEmployeeTable(props: &CampaignEmployeeTableProps) -> Html {
    let pending_removal = use_state(|| None::<CampaignEmployee>);

    let on_success = {
        let pending_removal = pending_removal.clone();
        let on_changed = props.on_changed.clone();
        Callback::from(move |_| {
            pending_removal.set(None);
            on_changed.emit(());
        })
    };

    let remove = use_mutation(
        |membership: CampaignMembership| async move {
            get_api_client()
                .remove_employee_from_campaign(&membership)
                .await
        },
        MutationMessages {
            success: "Employee removed from campaign",
            failure: "Failed to remove employee",
            toast_errors: false,
        },
        on_success,
    );

    if props.employees.is_empty() {
        return html! {
            <p class="py-6 text-center text-sm text-neutral-500 dark:text-neutral-400">
                {"No employees assigned to this campaign yet"}
            </p>
        };
    }

    let on_confirm = {
        let pending_removal = pending_removal.clone();
        let run = remove.run.clone();
        let campaign_id = props.campaign_id;
        Callback::from(move |_| {
            if let Some(employee) = &*pending_removal {
                run.emit(CampaignMembership {
                    employee_id: employee.employee_id,
                    campaign_id,
                });
            }
        })
    };

    let on_cancel = {
        let pending_removal = pending_removal.clone();
        let clear_error = remove.clear_error.clone();
        Callback::from(move |_| {
            clear_error.emit(());
            pending_removal.set(None);
        })
    };

    html! {
        <>
            <div class="overflow-x-auto">
                <table class="min-w-full divide-y divide-neutral-200 dark:divide-neutral-700">
                    <thead>
                        <tr class="text-left text-xs font-medium uppercase tracking-wider text-neutral-500 dark:text-neutral-400">
                            <th class="px-4 py-2">{"ID"}</th>
                            <th class="px-4 py-2">{"Name"}</th>
                            <th class="px-4 py-2">{"Phone"}</th>
                            <th class="px-4 py-2">{"Region"}</th>
                            <th class="px-4 py-2"></th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-neutral-200 dark:divide-neutral-700">
                        {for props.employees.iter().map(|employee| {
                            let on_remove = {
                                let pending_removal = pending_removal.clone();
                                let employee = employee.clone();
                                Callback::from(move |_: MouseEvent| {
                                    pending_removal.set(Some(employee.clone()))
                                })
                            };
                            html! {
                                <tr key={employee.employee_id.to_string()}>
                                    <td class="px-4 py-2 font-mono text-sm">{employee.employee_id.to_string()}</td>
                                    <td class="px-4 py-2 text-sm font-medium">{&employee.employee_name}</td>
                                    <td class="px-4 py-2 font-mono text-sm">{&employee.employee_phone}</td>
                                    <td class="px-4 py-2 text-sm">
                                        {truncate_text(employee.employee_region.as_deref(), 20)}
                                    </td>
                                    <td class="px-4 py-2 text-right">
                                        <button
                                            onclick={on_remove}
                                            class="text-sm text-red-600 dark:text-red-400 hover:underline"
                                        >
                                            {"Remove"}
                                        </button>
                                    </td>
                                </tr>
                            }
                        })}
                    </tbody>
                </table>
            </div>

            if let Some(employee) = &*pending_removal {
                <ConfirmationModal
                    title="Remove Employee"
                    message={format!(
                        "Remove {} from this campaign?",
                        employee.employee_name
                    )}
                    confirm_text="Remove"
                    on_confirm={on_confirm}
                    on_close={on_cancel}
                    is_loading={remove.is_loading}
                    error_message={remove.error.clone().map(AttrValue::from)}
                />
            }
        </>
    }
}
