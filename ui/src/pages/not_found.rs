use yew::prelude::*;
use yew_router::prelude::*;

use crate::{Route, hooks::use_title};

#[function_component]
pub fn NotFoundPage() -> Html {
    use_title("Not found");

    html! {
        <div class="flex flex-col items-center justify-center min-h-screen gap-4 text-center">
            <h1 class="text-4xl font-bold text-neutral-900 dark:text-white">{"404"}</h1>
            <p class="text-neutral-600 dark:text-neutral-300">{"Page not found"}</p>
            <Link<Route>
                to={Route::Dashboard}
                classes="text-sm font-medium underline text-neutral-900 dark:text-neutral-100"
            >
                {"Back to dashboard"}
            </Link<Route>>
        </div>
    }
}
