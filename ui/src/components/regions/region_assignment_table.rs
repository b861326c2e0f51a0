use payloads::{
    AssignmentId, grouping::EmployeeAssignments, requests::UpdateRegionStatus,
    responses::RegionAssignment,
};
use yew::prelude::*;

use crate::{
    components::{ConfirmationModal, StatusBadge},
    get_api_client,
    hooks::{MutationMessages, use_mutation},
};

#[derive(Properties, PartialEq)]
pub struct RegionAssignmentTableProps {
    pub groups: Vec<EmployeeAssignments>,
    /// Key of the one expanded group, if any
    pub expanded: Option<String>,
    pub on_toggle: Callback<String>,
    /// Called after a status change or delete so the list refetches
    pub on_changed: Callback<()>,
}

/// Assignments grouped per employee, one group open at a time.
#[function_component]
pub fn RegionAssignmentTable(props: &RegionAssignmentTableProps) -> Html {
    let pending_delete = use_state(|| None::<RegionAssignment>);

    let update_status = use_mutation(
        |(employee_id, details): (String, UpdateRegionStatus)| async move {
            get_api_client()
                .update_region_status(&employee_id, &details)
                .await
        },
        MutationMessages {
            success: "Status updated",
            failure: "Failed to update status",
            toast_errors: true,
        },
        props.on_changed.clone(),
    );

    let on_deleted = {
        let pending_delete = pending_delete.clone();
        let on_changed = props.on_changed.clone();
        Callback::from(move |_| {
            pending_delete.set(None);
            on_changed.emit(());
        })
    };

    let delete = use_mutation(
        |assignment_id: AssignmentId| async move {
            get_api_client()
                .delete_region_assignment(assignment_id)
                .await
        },
        MutationMessages {
            success: "Region assignment deleted",
            failure: "Failed to delete assignment",
            toast_errors: false,
        },
        on_deleted,
    );

    if props.groups.is_empty() {
        return html! {
            <div class="p-8 text-center rounded-lg bg-white dark:bg-neutral-800 border border-neutral-200 dark:border-neutral-700">
                <p class="text-neutral-500 dark:text-neutral-400">{"No region assignments found"}</p>
            </div>
        };
    }

    let on_confirm_delete = {
        let pending_delete = pending_delete.clone();
        let run = delete.run.clone();
        Callback::from(move |_| {
            if let Some(row) = &*pending_delete {
                run.emit(row.id);
            }
        })
    };

    let on_cancel_delete = {
        let pending_delete = pending_delete.clone();
        let clear_error = delete.clear_error.clone();
        Callback::from(move |_| {
            clear_error.emit(());
            pending_delete.set(None);
        })
    };

    let row_html = |group: &EmployeeAssignments, row: &RegionAssignment| {
        let toggle = group.status_toggle(row);
        let can_toggle = toggle.is_some();
        let on_toggle_status = {
            let run = update_status.run.clone();
            Callback::from(move |_: MouseEvent| {
                if let Some(toggle) = &toggle {
                    run.emit(toggle.clone());
                }
            })
        };
        let on_delete = {
            let pending_delete = pending_delete.clone();
            let row = row.clone();
            Callback::from(move |_: MouseEvent| pending_delete.set(Some(row.clone())))
        };
        let active = row.is_active.is_active();

        html! {
            <tr key={row.id.to_string()}>
                <td class="px-4 py-2 text-sm">{&row.region_name}</td>
                <td class="px-4 py-2 text-sm">{row.project.as_str()}</td>
                <td class="px-4 py-2 text-sm">{row.role.as_str()}</td>
                <td class="px-4 py-2"><StatusBadge active={active} /></td>
                <td class="px-4 py-2 text-right space-x-3 whitespace-nowrap">
                    <button
                        onclick={on_toggle_status}
                        disabled={!can_toggle || update_status.is_loading}
                        title={(!can_toggle).then_some("No employee id to update")}
                        class="text-sm text-neutral-700 dark:text-neutral-300 hover:underline disabled:opacity-50"
                    >
                        {if active { "Deactivate" } else { "Activate" }}
                    </button>
                    <button
                        onclick={on_delete}
                        class="text-sm text-red-600 dark:text-red-400 hover:underline"
                    >
                        {"Delete"}
                    </button>
                </td>
            </tr>
        }
    };

    html! {
        <>
            <div class="space-y-3">
                {for props.groups.iter().map(|group| {
                    let key = group.key();
                    let is_expanded = props.expanded.as_ref() == Some(&key);
                    let on_toggle = {
                        let key = key.clone();
                        props.on_toggle.reform(move |_: MouseEvent| key.clone())
                    };
                    let count = group.assignments.len();

                    html! {
                        <div key={key} class="rounded-lg bg-white dark:bg-neutral-800 shadow-sm border border-neutral-200 dark:border-neutral-700">
                            <div class="flex items-center justify-between p-4 cursor-pointer" onclick={on_toggle}>
                                <div>
                                    <p class="font-medium">{&group.employee_name}</p>
                                    <p class="text-xs text-neutral-500 dark:text-neutral-400">
                                        {match &group.employee_id {
                                            Some(id) => format!("ID: {id}"),
                                            None => "ID: -".to_string(),
                                        }}
                                    </p>
                                </div>
                                <div class="flex items-center gap-4 text-sm text-neutral-600 dark:text-neutral-400">
                                    <span>{format!("Total Regions: {count}")}</span>
                                    <span>{format!("Active: {}", group.active_count())}</span>
                                    <span class="text-neutral-400">
                                        {if is_expanded { "▲" } else { "▼" }}
                                    </span>
                                </div>
                            </div>
                            if is_expanded {
                                <div class="overflow-x-auto border-t border-neutral-200 dark:border-neutral-700">
                                    <table class="min-w-full divide-y divide-neutral-200 dark:divide-neutral-700">
                                        <thead>
                                            <tr class="text-left text-xs font-medium uppercase tracking-wider text-neutral-500 dark:text-neutral-400">
                                                <th class="px-4 py-2">{"Region"}</th>
                                                <th class="px-4 py-2">{"Project"}</th>
                                                <th class="px-4 py-2">{"Role"}</th>
                                                <th class="px-4 py-2">{"Status"}</th>
                                                <th class="px-4 py-2"></th>
                                            </tr>
                                        </thead>
                                        <tbody class="divide-y divide-neutral-200 dark:divide-neutral-700">
                                            {for group.assignments.iter().map(|row| row_html(group, row))}
                                        </tbody>
                                    </table>
                                </div>
                            }
                        </div>
                    }
                })}
            </div>

            if let Some(row) = &*pending_delete {
                <ConfirmationModal
                    title="Delete Assignment"
                    message={format!(
                        "Delete the {} assignment of {} in {}?",
                        row.project.as_str(),
                        row.employee_name,
                        row.region_name
                    )}
                    confirm_text="Delete"
                    on_confirm={on_confirm_delete}
                    on_close={on_cancel_delete}
                    is_loading={delete.is_loading}
                    error_message={delete.error.clone().map(AttrValue::from)}
                />
            }
        </>
    }
}
