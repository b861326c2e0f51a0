use payloads::responses::Employee;
use yew::prelude::*;

use crate::{components::StatusBadge, utils::truncate_text};

#[derive(Properties, PartialEq)]
pub struct EmployeeTableProps {
    pub employees: Vec<Employee>,
    pub on_edit: Callback<Employee>,
}

const HEADERS: [&str; 8] =
    ["ID", "Name", "Phone", "Email", "Region", "Role", "Status", ""];

#[function_component]
pub fn EmployeeTable(props: &EmployeeTableProps) -> Html {
    if props.employees.is_empty() {
        return html! {
            <div class="text-center py-12">
                <p class="text-neutral-600 dark:text-neutral-400">
                    {"No employees match these filters"}
                </p>
            </div>
        };
    }

    html! {
        <div class="overflow-x-auto">
            <table class="min-w-full divide-y divide-neutral-200 dark:divide-neutral-700">
                <thead class="bg-neutral-50 dark:bg-neutral-800">
                    <tr>
                        {for HEADERS.iter().map(|header| html! {
                            <th class="px-4 py-3 text-left text-xs font-medium uppercase tracking-wider text-neutral-500 dark:text-neutral-400">
                                {*header}
                            </th>
                        })}
                    </tr>
                </thead>
                <tbody class="divide-y divide-neutral-200 dark:divide-neutral-700">
                    {for props.employees.iter().map(|employee| {
                        let on_edit = {
                            let on_edit = props.on_edit.clone();
                            let employee = employee.clone();
                            Callback::from(move |_: MouseEvent| on_edit.emit(employee.clone()))
                        };
                        html! {
                            <tr key={employee.employee_id.to_string()} class="hover:bg-neutral-50 dark:hover:bg-neutral-800">
                                <td class="px-4 py-3 font-mono text-sm">{employee.employee_id.to_string()}</td>
                                <td class="px-4 py-3 text-sm font-medium">{&employee.employee_name}</td>
                                <td class="px-4 py-3 font-mono text-sm">{&employee.employee_phone}</td>
                                <td class="px-4 py-3 text-sm">
                                    if let Some(email) = &employee.employee_mail_id {
                                        <a href={format!("mailto:{email}")} class="underline text-neutral-700 dark:text-neutral-300">
                                            {truncate_text(Some(email), 25)}
                                        </a>
                                    } else {
                                        <span class="text-neutral-400">{"-"}</span>
                                    }
                                </td>
                                <td class="px-4 py-3 text-sm" title={employee.region_name.clone().unwrap_or_default()}>
                                    {truncate_text(employee.region_name.as_deref(), 20)}
                                </td>
                                <td class="px-4 py-3 text-sm" title={employee.role_name().unwrap_or_default().to_string()}>
                                    {truncate_text(employee.role_name(), 20)}
                                </td>
                                <td class="px-4 py-3">
                                    <StatusBadge active={employee.is_active == Some(true)} />
                                </td>
                                <td class="px-4 py-3 text-right">
                                    <button
                                        onclick={on_edit}
                                        class="text-sm text-neutral-600 dark:text-neutral-400 hover:text-neutral-900 dark:hover:text-white"
                                    >
                                        {"Edit"}
                                    </button>
                                </td>
                            </tr>
                        }
                    })}
                </tbody>
            </table>
        </div>
    }
}
