use payloads::ClientError;
use std::future::Future;
use std::rc::Rc;
use yew::prelude::*;

use crate::contexts::toast::use_toast;

/// Text shown around a mutation.
#[derive(Clone, Copy, PartialEq)]
pub struct MutationMessages {
    /// Toast on success when the api sends no message of its own.
    pub success: &'static str,
    /// Shown when a failure carries no usable message.
    pub failure: &'static str,
    /// Also raise failures as a toast, for actions with no form to show
    /// them in.
    pub toast_errors: bool,
}

pub struct MutationHandle<Req> {
    /// Send the request. Ignored while a previous run is in flight.
    pub run: Callback<Req>,
    /// Record a local validation failure without sending anything.
    pub reject: Callback<String>,
    pub clear_error: Callback<()>,
    pub is_loading: bool,
    pub error: Option<String>,
}

/// Command hook for create/update/delete calls.
///
/// On success the error is cleared, a success toast is raised and
/// `on_success` is called so the owner can refetch and close its modal.
/// On failure the error holds the api's message, the error's own message
/// or `messages.failure`, in that order, and nothing else happens.
#[hook]
pub fn use_mutation<Req, F, Fut>(
    mutate: F,
    messages: MutationMessages,
    on_success: Callback<()>,
) -> MutationHandle<Req>
where
    Req: 'static,
    F: Fn(Req) -> Fut + 'static,
    Fut: Future<Output = Result<Option<String>, ClientError>> + 'static,
{
    let is_loading = use_state(|| false);
    let error = use_state(|| None::<String>);
    let toast = use_toast();
    let mutate = Rc::new(mutate);

    let run = {
        let is_loading = is_loading.clone();
        let error = error.clone();

        Callback::from(move |request: Req| {
            if *is_loading {
                return;
            }
            let is_loading = is_loading.clone();
            let error = error.clone();
            let toast = toast.clone();
            let on_success = on_success.clone();
            let pending = mutate(request);

            yew::platform::spawn_local(async move {
                is_loading.set(true);
                error.set(None);

                match pending.await {
                    Ok(message) => {
                        toast.success(
                            message
                                .filter(|message| !message.trim().is_empty())
                                .unwrap_or_else(|| messages.success.to_string()),
                        );
                        on_success.emit(());
                    }
                    Err(e) => {
                        let message = e.message_or(messages.failure);
                        if messages.toast_errors {
                            toast.error(message.clone());
                        }
                        error.set(Some(message));
                    }
                }

                is_loading.set(false);
            });
        })
    };

    let reject = {
        let error = error.clone();
        Callback::from(move |message: String| error.set(Some(message)))
    };

    let clear_error = {
        let error = error.clone();
        Callback::from(move |_| error.set(None))
    };

    MutationHandle {
        run,
        reject,
        clear_error,
        is_loading: *is_loading,
        error: (*error).clone(),
    }
}
