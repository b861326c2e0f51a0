use std::future::Future;
use std::rc::Rc;
use yew::prelude::*;

use super::FetchState;

/// Generic fetch hook return type
pub struct FetchHookReturn<T> {
    pub data: FetchState<T>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub refetch: Callback<()>,
}

impl<T: Clone> FetchHookReturn<T> {
    /// Render based on fetch state with contextual loading/error messages.
    ///
    /// Before the first successful fetch this shows a loading line or the
    /// error. Once data exists `render_fn` always gets it, along with the
    /// loading flag and error of any refetch in progress, so a failed
    /// refetch keeps showing the previous data.
    pub fn render<F>(&self, context: &str, render_fn: F) -> Html
    where
        F: Fn(&T, bool, Option<&String>) -> Html,
    {
        match self.data.as_ref() {
            None => {
                if let Some(error) = &self.error {
                    html! {
                        <div class="p-4 rounded-md bg-red-50 \
                                   dark:bg-red-900/20 border \
                                   border-red-200 dark:border-red-800">
                            <p class="text-sm text-red-700 \
                                      dark:text-red-400">
                                {format!("Error loading {}: {}", context, error)}
                            </p>
                        </div>
                    }
                } else {
                    html! {
                        <div class="text-center py-12">
                            <p class="text-neutral-600 dark:text-neutral-400">
                                {format!("Loading {}...", context)}
                            </p>
                        </div>
                    }
                }
            }
            Some(data) => render_fn(data, self.is_loading, self.error.as_ref()),
        }
    }
}

/// Generic fetch hook composer.
///
/// Fetches on mount and whenever `deps` change, and provides `refetch`.
/// The fetch function captures its inputs from the closure; `deps` is only
/// used for change tracking.
///
/// Every request takes a sequence number and only the latest one issued
/// may write its result, so a slow response to an old query can't
/// overwrite a newer one. Superseded requests still run to completion.
#[hook]
pub fn use_fetch<T, D, F, Fut>(deps: D, fetch_fn: F) -> FetchHookReturn<T>
where
    T: Clone + 'static,
    D: PartialEq + Clone + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let data = use_state(|| FetchState::NotFetched);
    let error = use_state(|| None::<String>);
    let is_loading = use_state(|| false);
    let latest = use_mut_ref(|| 0_u64);

    let refetch = {
        let data = data.clone();
        let error = error.clone();
        let is_loading = is_loading.clone();
        let latest = latest.clone();
        let fetch_fn = Rc::new(fetch_fn);

        use_callback(deps.clone(), move |_, _| {
            let data = data.clone();
            let error = error.clone();
            let is_loading = is_loading.clone();
            let latest = latest.clone();

            let sequence = {
                let mut latest = latest.borrow_mut();
                *latest += 1;
                *latest
            };
            let request = fetch_fn();

            yew::platform::spawn_local(async move {
                is_loading.set(true);
                error.set(None);

                let result = request.await;
                if *latest.borrow() != sequence {
                    tracing::debug!("discarding stale response {sequence}");
                    return;
                }

                match result {
                    Ok(result) => {
                        data.set(FetchState::Fetched(result));
                        error.set(None);
                    }
                    Err(e) => {
                        error.set(Some(e));
                    }
                }

                is_loading.set(false);
            });
        })
    };

    // Auto-fetch on mount and when deps change
    {
        let refetch = refetch.clone();
        use_effect_with(deps, move |_| {
            refetch.emit(());
        });
    }

    FetchHookReturn {
        data: (*data).clone(),
        is_loading: *is_loading,
        error: (*error).clone(),
        refetch: Callback::from(move |_| refetch.emit(())),
    }
}
