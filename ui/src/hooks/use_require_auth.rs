use payloads::session::SignedInUser;
use yew::prelude::*;
use yewdux::use_store;

use crate::State;

/// The signed in user, or None when nobody is signed in.
#[hook]
pub fn use_require_auth() -> Option<SignedInUser> {
    let (state, _) = use_store::<State>();
    state.user.clone()
}
