//! Page Views

mod compare;
mod history;
mod home;
mod login;
mod premium;
mod premium_success;
mod register;

pub use compare::ComparePage;
pub use history::HistoryPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use premium::PremiumPage;
pub use premium_success::PremiumSuccessPage;
pub use register::RegisterPage;

/// Validate a `next` query value before navigating to it: internal
/// `/`-prefixed paths only, so a crafted link can never redirect off
/// the site.
pub fn safe_next(next: Option<String>) -> Option<String> {
    let next = next?;
    if next.starts_with('/') && !next.starts_with("//") {
        Some(next)
    } else {
        None
    }
}

/// Full-page redirect for external targets (checkout, billing portal)
pub(crate) fn redirect_to(url: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(url);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_next_accepts_internal_paths() {
        assert_eq!(
            safe_next(Some("/vergelijken".to_string())),
            Some("/vergelijken".to_string())
        );
        assert_eq!(
            safe_next(Some("/premium?intent=save_compare".to_string())),
            Some("/premium?intent=save_compare".to_string())
        );
    }

    #[test]
    fn test_safe_next_rejects_external_targets() {
        assert_eq!(safe_next(Some("https://evil.example".to_string())), None);
        assert_eq!(safe_next(Some("//evil.example".to_string())), None);
        assert_eq!(safe_next(Some("javascript:alert(1)".to_string())), None);
        assert_eq!(safe_next(None), None);
    }
}
