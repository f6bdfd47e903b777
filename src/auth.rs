//! Authentication Gate
//!
//! Auth status is observed here, never driven: the session store decides
//! whether the user is signed in, and the page only reacts to transitions.

use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::routing::SIGNUP_ROUTE;
use crate::session::SessionStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthStatus {
    pub authenticated: bool,
    pub loading: bool,
}

impl AuthStatus {
    pub const PENDING: Self = Self {
        authenticated: false,
        loading: true,
    };

    pub fn resolved(authenticated: bool) -> Self {
        Self {
            authenticated,
            loading: false,
        }
    }

    pub fn gate(self) -> AuthGate {
        match (self.loading, self.authenticated) {
            (true, _) => AuthGate::Pending,
            (false, true) => AuthGate::Authenticated,
            (false, false) => AuthGate::Unauthenticated,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthGate {
    Pending,
    Authenticated,
    Unauthenticated,
}

/// True when the gate has just become `Unauthenticated`.
pub fn should_redirect(previous: Option<AuthGate>, current: AuthGate) -> bool {
    current == AuthGate::Unauthenticated && previous != Some(AuthGate::Unauthenticated)
}

/// One run of the page's redirect effect: sends the user to the signup route
/// when `status` has just become signed out. Returns the gate to compare
/// against on the next run.
pub fn redirect_on_sign_out(
    previous: Option<AuthGate>,
    status: AuthStatus,
    navigate: impl FnOnce(&str),
) -> AuthGate {
    let current = status.gate();
    if should_redirect(previous, current) {
        navigate(SIGNUP_ROUTE);
    }
    current
}

#[derive(Clone, Copy)]
pub struct AuthContext {
    pub status: ReadSignal<AuthStatus>,
}

pub fn use_is_authenticated() -> ReadSignal<AuthStatus> {
    expect_context::<AuthContext>().status
}

/// Resolves the session asynchronously and re-checks it whenever another tab
/// touches `localStorage`.
#[component]
pub fn AuthProvider(session: SessionStore, children: Children) -> impl IntoView {
    let (status, set_status) = signal(AuthStatus::PENDING);
    provide_context(AuthContext { status });

    let resolve = move |session: SessionStore| {
        spawn_local(async move {
            let authenticated = session.token().is_some();
            log::info!("[AUTH] session resolved, authenticated={}", authenticated);
            set_status.try_set(AuthStatus::resolved(authenticated));
        });
    };

    resolve(session.clone());

    let handle = window_event_listener(ev::storage, move |_| resolve(session.clone()));
    on_cleanup(move || handle.remove());

    children()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn redirects(sequence: &[AuthStatus]) -> usize {
        let mut previous = None;
        let mut count = 0;
        for status in sequence {
            let gate = status.gate();
            if should_redirect(previous, gate) {
                count += 1;
            }
            previous = Some(gate);
        }
        count
    }

    fn navigations(sequence: &[AuthStatus]) -> Vec<String> {
        let mut visited = Vec::new();
        let mut previous = None;
        for status in sequence {
            previous = Some(redirect_on_sign_out(previous, *status, |path| {
                visited.push(path.to_string())
            }));
        }
        visited
    }

    #[test]
    fn test_effect_navigates_to_signup_once() {
        let signed_out = AuthStatus::resolved(false);
        assert_eq!(navigations(&[AuthStatus::PENDING, signed_out, signed_out]), vec!["/signup"]);
    }

    #[test]
    fn test_effect_stays_put_while_pending_or_signed_in() {
        let loading_authed = AuthStatus { authenticated: true, loading: true };
        let signed_in = AuthStatus::resolved(true);
        assert!(navigations(&[AuthStatus::PENDING, loading_authed, signed_in, signed_in]).is_empty());
    }

    #[test]
    fn test_effect_returns_current_gate() {
        let gate = redirect_on_sign_out(None, AuthStatus::resolved(true), |_| panic!("no navigation"));
        assert_eq!(gate, AuthGate::Authenticated);
    }

    #[test]
    fn test_loading_never_redirects() {
        let loading_authed = AuthStatus { authenticated: true, loading: true };
        assert_eq!(AuthStatus::PENDING.gate(), AuthGate::Pending);
        assert_eq!(loading_authed.gate(), AuthGate::Pending);
        assert_eq!(redirects(&[AuthStatus::PENDING, loading_authed, AuthStatus::PENDING]), 0);
    }

    #[test]
    fn test_unauthenticated_redirects_once() {
        let signed_out = AuthStatus::resolved(false);
        assert_eq!(redirects(&[AuthStatus::PENDING, signed_out]), 1);
        assert_eq!(redirects(&[AuthStatus::PENDING, signed_out, signed_out, signed_out]), 1);
        assert_eq!(redirects(&[signed_out]), 1);
    }

    #[test]
    fn test_authenticated_never_redirects() {
        let signed_in = AuthStatus::resolved(true);
        assert_eq!(signed_in.gate(), AuthGate::Authenticated);
        assert_eq!(redirects(&[AuthStatus::PENDING, signed_in, signed_in]), 0);
    }

    #[test]
    fn test_each_new_sign_out_redirects_again() {
        let signed_in = AuthStatus::resolved(true);
        let signed_out = AuthStatus::resolved(false);
        assert_eq!(redirects(&[AuthStatus::PENDING, signed_in, signed_out, signed_in, signed_out]), 2);
        assert_eq!(redirects(&[signed_out, AuthStatus::PENDING, signed_out]), 2);
    }
}
