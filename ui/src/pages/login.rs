use payloads::session;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::{
    Route, State,
    components::form::{FormError, INPUT_CLASS, LABEL_CLASS, PRIMARY_BUTTON_CLASS},
    hooks::use_title,
};

#[function_component]
pub fn LoginPage() -> Html {
    use_title("Sign in");
    let navigator = use_navigator();
    let (state, dispatch) = use_store::<State>();

    let username_ref = use_node_ref();
    let password_ref = use_node_ref();
    let error_message = use_state(|| None::<String>);

    // Redirect to the dashboard if already signed in
    {
        let navigator = navigator.clone();
        use_effect_with(state.is_authenticated(), move |is_authenticated| {
            if *is_authenticated && let Some(navigator) = &navigator {
                navigator.push(&Route::Dashboard);
            }
        });
    }

    let on_submit = {
        let username_ref = username_ref.clone();
        let password_ref = password_ref.clone();
        let error_message = error_message.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let (Some(username), Some(password)) = (
                username_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) else {
                return;
            };

            match session::sign_in(&username.value(), &password.value()) {
                Ok(user) => {
                    tracing::debug!(user = %user.name, "signed in");
                    error_message.set(None);
                    // The redirect effect takes over once the store changes.
                    dispatch.reduce_mut(|state| state.sign_in(user));
                }
                Err(error) => error_message.set(Some(error.to_string())),
            }
        })
    };

    html! {
        <div class="flex items-center justify-center min-h-screen px-4">
            <div class="max-w-md w-full bg-white dark:bg-neutral-800 p-8 rounded-lg shadow-md">
                <div class="mb-8 text-center">
                    <h1 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100 mb-2">
                        {"Admin Dashboard"}
                    </h1>
                    <p class="text-neutral-600 dark:text-neutral-400">
                        {"Sign in to manage employees, regions and campaigns"}
                    </p>
                </div>

                <form onsubmit={on_submit} class="space-y-6">
                    <FormError message={(*error_message).clone()} />
                    <div>
                        <label for="username" class={LABEL_CLASS}>{"Username"}</label>
                        <input
                            ref={username_ref}
                            type="text"
                            id="username"
                            name="username"
                            autocomplete="username"
                            required={true}
                            class={INPUT_CLASS}
                            placeholder="Enter your username"
                        />
                    </div>
                    <div>
                        <label for="password" class={LABEL_CLASS}>{"Password"}</label>
                        <input
                            ref={password_ref}
                            type="password"
                            id="password"
                            name="password"
                            autocomplete="current-password"
                            required={true}
                            class={INPUT_CLASS}
                            placeholder="Enter your password"
                        />
                    </div>
                    <button type="submit" class={classes!(PRIMARY_BUTTON_CLASS, "w-full")}>
                        {"Sign in"}
                    </button>
                </form>
            </div>
        </div>
    }
}
