use yew::prelude::*;
use yew_router::prelude::*;

use crate::{Route, hooks::use_require_auth};

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub collapsed: bool,
    pub on_toggle: Callback<()>,
}

const LINK_BASE_CLASSES: &str =
    "flex items-center px-3 py-2.5 rounded-lg text-sm transition-colors";
const LINK_INACTIVE_CLASSES: &str = "text-neutral-600 dark:text-neutral-400 \
    hover:text-neutral-900 dark:hover:text-white \
    hover:bg-neutral-100 dark:hover:bg-neutral-800";
const LINK_ACTIVE_CLASSES: &str = "text-white bg-neutral-900 \
    dark:bg-neutral-100 dark:text-neutral-900 font-medium";

fn initial(label: &str) -> String {
    label.chars().next().map(String::from).unwrap_or_default()
}

#[function_component]
pub fn Sidebar(props: &SidebarProps) -> Html {
    let current = use_route::<Route>();
    let user = use_require_auth();
    let collapsed = props.collapsed;

    let width = if collapsed { "w-16" } else { "w-64" };
    let on_toggle = props.on_toggle.reform(|_: MouseEvent| ());

    html! {
        <aside class={classes!(
            "flex", "flex-col", "h-full", "transition-all", "duration-300",
            "bg-white", "dark:bg-neutral-900", "border-r",
            "border-neutral-200", "dark:border-neutral-700", width
        )}>
            <div class="flex items-center justify-between p-4 border-b border-neutral-200 dark:border-neutral-700">
                if !collapsed {
                    <span class="text-lg font-bold">{"Admin Panel"}</span>
                }
                <button
                    onclick={on_toggle}
                    class="p-1 rounded-md text-neutral-500 hover:bg-neutral-100 dark:hover:bg-neutral-800"
                    title={if collapsed { "Expand sidebar" } else { "Collapse sidebar" }}
                >
                    {if collapsed { "›" } else { "‹" }}
                </button>
            </div>

            <nav class="flex-1 p-3 space-y-1">
                {for Route::ADMIN_NAV.iter().map(|route| {
                    let is_active = current.as_ref() == Some(route);
                    let link_classes = format!(
                        "{} {}",
                        LINK_BASE_CLASSES,
                        if is_active { LINK_ACTIVE_CLASSES } else { LINK_INACTIVE_CLASSES }
                    );
                    html! {
                        <Link<Route> to={route.clone()} classes={classes!(link_classes)}>
                            if collapsed {
                                <span title={route.label()}>{initial(route.label())}</span>
                            } else {
                                <span>{route.label()}</span>
                            }
                        </Link<Route>>
                    }
                })}
            </nav>

            if let Some(user) = user {
                <div class="p-4 border-t border-neutral-200 dark:border-neutral-700">
                    if collapsed {
                        <span title={user.name.clone()}>{initial(&user.name)}</span>
                    } else {
                        <p class="text-sm font-medium">{&user.name}</p>
                        <p class="text-xs text-neutral-500 dark:text-neutral-400">{&user.email}</p>
                    }
                </div>
            }
        </aside>
    }
}
