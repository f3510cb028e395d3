//! Reusable signal hooks.

use dioxus::core::Task;
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

/// Trailing-edge debounce of a text signal.
///
/// The returned signal takes on the source value only after the source
/// has been stable for `delay_ms`; intermediate values are never
/// emitted. Every change restarts the delay window, cancelling the
/// previously pending emission. The timer task is scoped to the calling
/// component, so tearing the component down also cancels any pending
/// emission.
pub(crate) fn use_debounced_text(source: ReadSignal<String>, delay_ms: u32) -> ReadSignal<String> {
    let mut debounced = use_signal(|| source.peek().clone());
    let mut pending = use_signal(|| None::<Task>);

    use_effect(move || {
        let value = source.read().clone();
        if let Some(task) = pending.write().take() {
            task.cancel();
        }
        if *debounced.peek() == value {
            return;
        }
        let task = spawn(async move {
            TimeoutFuture::new(delay_ms).await;
            debounced.set(value);
        });
        pending.set(Some(task));
    });

    debounced.into()
}
