use yew::prelude::*;
use yew_router::prelude::*;

use crate::{Route, hooks::use_require_auth};

/// Renders its children only for a signed in user; anyone else is sent to
/// the login page.
///
/// Pages behind this component can call their data hooks unconditionally,
/// since they are never mounted without a user.
#[derive(Properties, PartialEq)]
pub struct RequireAuthProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component]
pub fn RequireAuth(props: &RequireAuthProps) -> Html {
    let user = use_require_auth();

    if user.is_none() {
        return html! { <Redirect<Route> to={Route::Login} /> };
    }

    html! {
        <>
            {for props.children.iter()}
        </>
    }
}
