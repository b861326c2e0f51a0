use gloo_timers::future::TimeoutFuture;
use payloads::debounce::Debouncer;
use yew::prelude::*;

/// Follows `value`, but only after it has stopped changing for `delay_ms`.
#[hook]
pub fn use_debounced<T>(value: T, delay_ms: u32) -> T
where
    T: Clone + PartialEq + 'static,
{
    let debounced = use_state_eq(|| value.clone());
    let gate = use_mut_ref(Debouncer::new);

    {
        let debounced = debounced.clone();
        use_effect_with(value, move |value| {
            let ticket = gate.borrow_mut().issue();
            let value = value.clone();
            let timer_gate = gate.clone();

            yew::platform::spawn_local(async move {
                TimeoutFuture::new(delay_ms).await;
                if timer_gate.borrow().is_current(ticket) {
                    debounced.set(value);
                }
            });

            // A pending timer must not fire after unmount
            move || {
                gate.borrow_mut().issue();
            }
        });
    }

    (*debounced).clone()
}
