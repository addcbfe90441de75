//! Browser environment queries used by the shell.

use crate::model::WindowRect;

const FALLBACK_VIEWPORT_WIDTH: i32 = 1024;
const FALLBACK_VIEWPORT_HEIGHT: i32 = 768;

/// Full browser viewport, including the strip the taskbar covers.
///
/// Outside the browser (or when the size cannot be read) a 1024x768 viewport is reported.
pub fn desktop_viewport_rect() -> WindowRect {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let width = window
                .inner_width()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(FALLBACK_VIEWPORT_WIDTH);
            let height = window
                .inner_height()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(FALLBACK_VIEWPORT_HEIGHT);

            return WindowRect {
                x: 0,
                y: 0,
                w: width,
                h: height,
            };
        }
    }

    WindowRect {
        x: 0,
        y: 0,
        w: FALLBACK_VIEWPORT_WIDTH,
        h: FALLBACK_VIEWPORT_HEIGHT,
    }
}
