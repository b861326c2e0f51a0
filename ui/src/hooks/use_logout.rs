use crate::{Route, State};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

/// Sign out: forget the stored user and return to the login page.
#[hook]
pub fn use_logout() -> Callback<MouseEvent> {
    let (_, dispatch) = use_store::<State>();
    let navigator = use_navigator();

    Callback::from(move |_| {
        dispatch.reduce_mut(|state| state.sign_out());
        tracing::info!("signed out");

        if let Some(navigator) = &navigator {
            navigator.push(&Route::Login);
        }
    })
}
