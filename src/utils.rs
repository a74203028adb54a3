//! Location and query-string glue between the two views.

use web_sys::UrlSearchParams;

use crate::config::{FALLBACK_REPS, REPS_PARAM};

/// Current pathname, used to pick a view. Defaults to the root on the
/// (unlikely) platforms where reading it fails.
pub fn current_path() -> String {
    gloo_utils::window()
        .location()
        .pathname()
        .unwrap_or_else(|_| "/".to_string())
}

/// Rep count from the current query string, e.g. `?reps=100`.
pub fn reps_from_query() -> u32 {
    let search = gloo_utils::window().location().search().unwrap_or_default();
    let raw = UrlSearchParams::new_with_str(&search)
        .ok()
        .and_then(|params| params.get(REPS_PARAM));
    parse_reps(raw.as_deref())
}

/// Navigate back to the configuration page.
pub fn navigate_home() {
    if let Err(err) = gloo_utils::window().location().set_href("/") {
        log::warn!("navigation failed: {:?}", err);
    }
}

/// A missing or non-numeric rep count degrades to a single rep rather than
/// being rejected. A literal `0` is passed through; the session constructor
/// clamps it.
fn parse_reps(raw: Option<&str>) -> u32 {
    raw.and_then(|value| value.trim().parse().ok())
        .unwrap_or(FALLBACK_REPS)
}

#[cfg(test)]
mod tests {
    use super::parse_reps;

    #[test]
    fn missing_or_malformed_reps_default_to_one() {
        assert_eq!(parse_reps(None), 1);
        assert_eq!(parse_reps(Some("")), 1);
        assert_eq!(parse_reps(Some("sixty")), 1);
        assert_eq!(parse_reps(Some("-3")), 1);
    }

    #[test]
    fn numeric_reps_pass_through() {
        assert_eq!(parse_reps(Some("100")), 100);
        assert_eq!(parse_reps(Some(" 42 ")), 42);
        // Zero is degraded downstream by BurpeeTimer::new, not here.
        assert_eq!(parse_reps(Some("0")), 0);
    }
}
