//! Hooks shared by components.

use dioxus::prelude::*;
use folio_core::{TypingConfig, TypingFrame, TypingHandle, TypingTimer};

/// Typewriter state for a reactive target string.
///
/// Every time `target` changes, the previous run is cancelled and the new
/// text is revealed from an empty prefix. Unmounting the component drops the
/// timer and its handle, which stops the driver task.
///
/// `config` is read once, on first render.
///
/// # Example
///
/// ```rust,ignore
/// let frame = use_typing_effect(name, TypingConfig::NAME_DEFAULT);
/// rsx! { span { "{frame().displayed}{frame().cursor()}" } }
/// ```
pub fn use_typing_effect(target: ReadOnlySignal<String>, config: TypingConfig) -> Signal<TypingFrame> {
    let mut frame = use_signal(TypingFrame::default);
    let mut timer = use_signal(|| TypingTimer::new(config));
    let mut run: Signal<Option<TypingHandle>> = use_signal(|| None);
    let mut forward: Signal<Option<Task>> = use_signal(|| None);

    use_effect(move || {
        let text = target();

        if let Some(task) = forward.write().take() {
            task.cancel();
        }
        let started = timer.write().restart(text);
        let handle = match started {
            Ok(handle) => handle,
            Err(e) => {
                tracing::error!("Failed to start typing animation: {}", e);
                return;
            }
        };
        let mut rx = timer.peek().subscribe();
        // Replacing the old handle drops it; its run is already retired.
        run.set(Some(handle));

        let task = spawn(async move {
            let first = rx.borrow_and_update().clone();
            frame.set(first);
            while rx.changed().await.is_ok() {
                let next = rx.borrow_and_update().clone();
                frame.set(next);
            }
        });
        forward.set(Some(task));
    });

    frame
}
