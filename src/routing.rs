//! Navigation

pub const SIGNUP_ROUTE: &str = "/signup";

/// Send the browser to `path`.
pub fn navigate(path: &str) {
    let Some(window) = web_sys::window() else {
        log::warn!("[ROUTE] no window, cannot navigate to {}", path);
        return;
    };
    if let Err(err) = window.location().set_href(path) {
        log::error!("[ROUTE] navigation to {} failed: {:?}", path, err);
    }
}
