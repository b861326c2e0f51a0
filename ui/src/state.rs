use payloads::session::SignedInUser;
use serde::{Deserialize, Serialize};
use yewdux::prelude::*;

/// Global app state. Only the signed in user lives here; every collection
/// is owned by the hook that fetched it.
///
/// Persisted to local storage so a reload keeps the admin signed in.
#[derive(Default, Clone, PartialEq, Serialize, Deserialize, Store)]
#[store(storage = "local")]
pub struct State {
    pub user: Option<SignedInUser>,
}

impl State {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn sign_in(&mut self, user: SignedInUser) {
        self.user = Some(user);
    }

    pub fn sign_out(&mut self) {
        self.user = None;
    }
}
