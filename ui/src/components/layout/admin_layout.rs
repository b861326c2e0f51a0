use yew::prelude::*;

use crate::components::layout::{Sidebar, Topbar};

#[derive(Properties, PartialEq)]
pub struct AdminLayoutProps {
    pub children: Children,
}

/// Sidebar, top bar and the page beneath them.
#[function_component]
pub fn AdminLayout(props: &AdminLayoutProps) -> Html {
    let collapsed = use_state(|| false);

    let on_toggle_sidebar = {
        let collapsed = collapsed.clone();
        Callback::from(move |_| collapsed.set(!*collapsed))
    };

    html! {
        <div class="flex h-screen overflow-hidden">
            <Sidebar collapsed={*collapsed} on_toggle={on_toggle_sidebar.clone()} />
            <div class="flex-1 flex flex-col min-w-0">
                <Topbar on_menu_click={on_toggle_sidebar} />
                <main class="flex-1 overflow-y-auto px-4 sm:px-6 lg:px-8 py-6">
                    {for props.children.iter()}
                </main>
            </div>
        </div>
    }
}
