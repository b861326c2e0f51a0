use yew::prelude::*;

use crate::hooks::use_logout;

#[derive(Properties, PartialEq)]
pub struct TopbarProps {
    pub on_menu_click: Callback<()>,
}

#[function_component]
pub fn Topbar(props: &TopbarProps) -> Html {
    let logout = use_logout();
    let on_menu_click = props.on_menu_click.reform(|_: MouseEvent| ());

    html! {
        <header class="sticky top-0 z-20 flex items-center justify-between px-4 py-3 \
                       bg-white dark:bg-neutral-800 border-b border-neutral-200 dark:border-neutral-700">
            <div class="flex items-center gap-3">
                <button
                    onclick={on_menu_click}
                    class="lg:hidden p-1 rounded-md text-neutral-500 hover:bg-neutral-100 dark:hover:bg-neutral-700"
                    title="Menu"
                >
                    {"☰"}
                </button>
                <h1 class="text-lg font-semibold">{"Admin Dashboard"}</h1>
            </div>
            <button
                onclick={logout}
                class="px-3 py-1.5 text-sm font-medium text-neutral-700 dark:text-neutral-300 \
                       border border-neutral-300 dark:border-neutral-600 rounded-md \
                       hover:bg-neutral-50 dark:hover:bg-neutral-700 transition-colors"
            >
                {"Sign out"}
            </button>
        </header>
    }
}
