use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// A single-shot, resettable timer owned by the search controller.
///
/// Each `schedule` cancels any pending callback and installs a fresh one,
/// so rapid repeated triggers coalesce and only the most recent input
/// value survives to execution. Dropping the handle cancels any pending
/// callback outright.
pub(super) struct Debouncer {
    delay_ms: i32,
    pending: Option<Pending>,
}

struct Pending {
    timeout_id: i32,
    // Kept alive until the timeout fires or is replaced; dropping it after
    // clear_timeout releases the callback without leaking it.
    _closure: Closure<dyn FnMut()>,
}

impl Debouncer {
    pub(super) fn new(delay_ms: i32) -> Self {
        Self {
            delay_ms,
            pending: None,
        }
    }

    /// Replace any pending callback with `f`, to run after the quiet
    /// window elapses without another call.
    pub(super) fn schedule(&mut self, f: impl FnMut() + 'static) -> Result<(), String> {
        self.cancel();

        let window = web_sys::window().ok_or("no window")?;
        let closure = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
        let timeout_id = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                self.delay_ms,
            )
            .map_err(|_| "set_timeout() threw".to_string())?;

        self.pending = Some(Pending {
            timeout_id,
            _closure: closure,
        });
        Ok(())
    }

    /// Cancel the pending callback, if any. Safe to call when idle.
    pub(super) fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            if let Some(window) = web_sys::window() {
                window.clear_timeout_with_handle(pending.timeout_id);
            }
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
