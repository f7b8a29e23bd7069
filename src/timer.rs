//! Delays that work in the browser and on the server.

/// Waits `ms` milliseconds.
///
/// In the browser this is a `setTimeout` promise; on the server it is a
/// tokio timer. Builds with neither return immediately.
#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| match web_sys::window() {
        Some(window) => {
            let timeout = i32::try_from(ms).unwrap_or(i32::MAX);
            if window
                .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout)
                .is_err()
            {
                let _ = resolve.call0(&wasm_bindgen::JsValue::NULL);
            }
        }
        None => {
            let _ = resolve.call0(&wasm_bindgen::JsValue::NULL);
        }
    });
    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}

#[cfg(all(not(target_arch = "wasm32"), feature = "server"))]
pub async fn sleep_ms(ms: u32) {
    tokio::time::sleep(std::time::Duration::from_millis(u64::from(ms))).await;
}

#[cfg(all(not(target_arch = "wasm32"), not(feature = "server")))]
pub async fn sleep_ms(_ms: u32) {}

#[cfg(all(test, feature = "server"))]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_sleep_advances_clock() {
        let start = tokio::time::Instant::now();
        sleep_ms(1500).await;
        assert!(start.elapsed() >= std::time::Duration::from_millis(1500));
    }
}
