use crate::{
    api::{AuthBackend, AuthError, AuthEvent, Session, SessionUser, Subscription},
    config::{AUTH_CHANGE_DELAY_MS, MIN_DISPLAY_MS, SESSION_TIMEOUT_MS},
    state::modals::ModalState,
    utils::scheduler::{Scheduler, TimerHandle},
};
use leptos::*;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<SessionUser>,
    pub is_authenticated: bool,
    pub loading: bool,
    pub error: Option<AuthError>,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            is_authenticated: false,
            loading: true,
            error: None,
        }
    }
}

#[derive(Default)]
struct GateInner {
    active: bool,
    resolved: bool,
    started_at: u64,
    pending_commit: Option<TimerHandle>,
    timeout: Option<TimerHandle>,
    subscription: Option<Subscription>,
}

struct GateShared {
    state: RwSignal<AuthState>,
    modals: ModalState,
    backend: Rc<dyn AuthBackend>,
    scheduler: Rc<dyn Scheduler>,
    inner: RefCell<GateInner>,
}

/// Holds the UI behind the loading screen until the session is known.
///
/// Timers and the auth subscription live only between [`SessionGate::activate`]
/// and [`SessionGate::deactivate`]; nothing touches state outside that window.
#[derive(Clone)]
pub struct SessionGate {
    shared: Rc<GateShared>,
}

impl SessionGate {
    pub fn new(
        backend: Rc<dyn AuthBackend>,
        scheduler: Rc<dyn Scheduler>,
        modals: ModalState,
    ) -> Self {
        Self {
            shared: Rc::new(GateShared {
                state: create_rw_signal(AuthState::default()),
                modals,
                backend,
                scheduler,
                inner: RefCell::new(GateInner::default()),
            }),
        }
    }

    fn from_weak(weak: &Weak<GateShared>) -> Option<Self> {
        weak.upgrade().map(|shared| Self { shared })
    }

    pub fn state(&self) -> ReadSignal<AuthState> {
        self.shared.state.read_only()
    }

    pub fn is_active(&self) -> bool {
        self.shared.inner.borrow().active
    }

    pub fn activate(&self) {
        if self.is_active() {
            return;
        }
        let now = self.shared.scheduler.now_ms();
        self.shared.state.update(|state| state.loading = true);

        let weak = Rc::downgrade(&self.shared);
        let subscription = self
            .shared
            .backend
            .on_auth_state_change(Rc::new(move |event, session| {
                if let Some(gate) = SessionGate::from_weak(&weak) {
                    gate.handle_auth_change(event, session);
                }
            }));

        let weak = Rc::downgrade(&self.shared);
        let timeout = self.shared.scheduler.schedule(
            SESSION_TIMEOUT_MS,
            Box::new(move || {
                if let Some(gate) = SessionGate::from_weak(&weak) {
                    gate.session_timed_out();
                }
            }),
        );

        let mut inner = self.shared.inner.borrow_mut();
        inner.active = true;
        inner.resolved = false;
        inner.started_at = now;
        inner.subscription = Some(subscription);
        inner.timeout = Some(timeout);
        log::debug!("session gate activated at {}ms", now);
    }

    /// Asks the backend for the current session and feeds the answer to the gate.
    pub async fn check_session(&self) {
        let result = self.shared.backend.get_session().await;
        self.session_resolved(result);
    }

    pub fn session_resolved(&self, result: Result<Option<Session>, AuthError>) {
        let remaining = {
            let mut inner = self.shared.inner.borrow_mut();
            if !inner.active || inner.resolved {
                log::debug!("ignoring stale session result");
                return;
            }
            inner.resolved = true;
            inner.timeout = None;
            let elapsed = self
                .shared
                .scheduler
                .now_ms()
                .saturating_sub(inner.started_at);
            MIN_DISPLAY_MS.saturating_sub(elapsed)
        };

        let (session, error) = match result {
            Ok(session) => (session, None),
            Err(err) => {
                log::warn!("session check failed, continuing signed out: {}", err);
                (None, Some(err))
            }
        };

        if remaining == 0 {
            self.commit(session, error, false);
            return;
        }

        let weak = Rc::downgrade(&self.shared);
        let delay = u32::try_from(remaining).unwrap_or(u32::MAX);
        let handle = self.shared.scheduler.schedule(
            delay,
            Box::new(move || {
                if let Some(gate) = SessionGate::from_weak(&weak) {
                    gate.commit(session, error, false);
                }
            }),
        );
        self.shared.inner.borrow_mut().pending_commit = Some(handle);
    }

    pub fn handle_auth_change(&self, event: AuthEvent, session: Option<Session>) {
        {
            let mut inner = self.shared.inner.borrow_mut();
            if !inner.active {
                return;
            }
            // A pushed change is newer than whatever the initial check returns.
            inner.resolved = true;
            inner.timeout = None;
        }
        log::info!("auth state changed: {:?}", event);
        self.shared.state.update(|state| state.loading = true);

        let weak = Rc::downgrade(&self.shared);
        let handle = self.shared.scheduler.schedule(
            AUTH_CHANGE_DELAY_MS,
            Box::new(move || {
                if let Some(gate) = SessionGate::from_weak(&weak) {
                    gate.commit(session, None, true);
                }
            }),
        );
        // Replacing cancels an older pending commit; the newest change wins.
        self.shared.inner.borrow_mut().pending_commit = Some(handle);
    }

    fn session_timed_out(&self) {
        {
            let mut inner = self.shared.inner.borrow_mut();
            if !inner.active || inner.resolved {
                return;
            }
            inner.resolved = true;
            inner.timeout = None;
        }
        log::warn!("session check timed out after {}ms", SESSION_TIMEOUT_MS);
        self.commit(None, Some(AuthError::Timeout), false);
    }

    fn commit(&self, session: Option<Session>, error: Option<AuthError>, close_modals: bool) {
        let pending = {
            let mut inner = self.shared.inner.borrow_mut();
            if !inner.active {
                return;
            }
            inner.pending_commit.take()
        };
        drop(pending);

        let user = session.map(|session| session.user);
        let signed_in = user.is_some();
        self.shared.state.set(AuthState {
            is_authenticated: signed_in,
            user,
            loading: false,
            error,
        });
        if close_modals && signed_in {
            self.shared.modals.close_auth();
        }
        log::debug!("session committed (signed in: {})", signed_in);
    }

    pub fn deactivate(&self) {
        let (pending, timeout, subscription) = {
            let mut inner = self.shared.inner.borrow_mut();
            inner.active = false;
            (
                inner.pending_commit.take(),
                inner.timeout.take(),
                inner.subscription.take(),
            )
        };
        drop((pending, timeout, subscription));
        log::debug!("session gate deactivated");
    }

    pub async fn sign_out(&self) {
        if let Err(err) = self.shared.backend.sign_out().await {
            log::warn!("sign out failed: {}", err);
            if self.is_active() {
                self.shared.state.update(|state| state.error = Some(err));
            }
        }
    }

    pub fn dismiss_error(&self) {
        self.shared.state.update(|state| state.error = None);
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::clock::ManualScheduler;
    use crate::test_support::helpers::{session_for, FakeAuthBackend};
    use crate::test_support::ssr::with_runtime;
    use futures::executor::block_on;

    fn gate_with(backend: Rc<FakeAuthBackend>) -> (SessionGate, ManualScheduler, ModalState) {
        let clock = ManualScheduler::new();
        let modals = ModalState::new();
        let gate = SessionGate::new(backend, Rc::new(clock.clone()), modals);
        (gate, clock, modals)
    }

    #[test]
    fn fast_session_check_still_waits_for_minimum_display() {
        with_runtime(|| {
            let (gate, clock, _) = gate_with(FakeAuthBackend::signed_out());
            gate.activate();
            clock.advance(300);
            block_on(gate.check_session());
            assert!(gate.state().get().loading);

            clock.advance(2199);
            assert!(gate.state().get().loading);
            clock.advance(1);
            let state = gate.state().get();
            assert!(!state.loading);
            assert!(!state.is_authenticated);
        });
    }

    #[test]
    fn slow_session_check_clears_loading_immediately() {
        with_runtime(|| {
            let backend = FakeAuthBackend::signed_out();
            *backend.session_result.borrow_mut() = Some(Ok(Some(session_for("jane"))));
            let (gate, clock, _) = gate_with(backend);
            gate.activate();
            clock.advance(2600);
            assert!(gate.state().get().loading);

            block_on(gate.check_session());
            let state = gate.state().get();
            assert!(!state.loading);
            assert!(state.is_authenticated);
            assert_eq!(state.user.map(|u| u.id).as_deref(), Some("u-jane"));
        });
    }

    #[test]
    fn failed_session_check_falls_back_to_signed_out_with_error() {
        with_runtime(|| {
            let backend = FakeAuthBackend::signed_out();
            *backend.session_result.borrow_mut() =
                Some(Err(AuthError::Request("offline".into())));
            let (gate, clock, _) = gate_with(backend);
            gate.activate();
            block_on(gate.check_session());
            clock.advance(2500);

            let state = gate.state().get();
            assert!(!state.loading);
            assert!(!state.is_authenticated);
            assert_eq!(state.error, Some(AuthError::Request("offline".into())));

            gate.dismiss_error();
            assert!(gate.state().get().error.is_none());
        });
    }

    #[test]
    fn unresolved_session_check_times_out() {
        with_runtime(|| {
            let (gate, clock, _) = gate_with(FakeAuthBackend::signed_out());
            gate.activate();
            clock.advance(u64::from(SESSION_TIMEOUT_MS));

            let state = gate.state().get();
            assert!(!state.loading);
            assert_eq!(state.error, Some(AuthError::Timeout));

            // The late answer is ignored.
            gate.session_resolved(Ok(Some(session_for("late"))));
            clock.advance(5000);
            assert!(!gate.state().get().is_authenticated);
        });
    }

    #[test]
    fn auth_change_reenters_loading_and_closes_modals() {
        with_runtime(|| {
            let backend = FakeAuthBackend::signed_out();
            let (gate, clock, modals) = gate_with(backend.clone());
            gate.activate();
            block_on(gate.check_session());
            clock.advance(2500);
            assert!(!gate.state().get().loading);

            modals.open_signup();
            backend.emit(AuthEvent::SignedIn, Some(session_for("jane")));
            assert!(gate.state().get().loading);

            clock.advance(2499);
            assert!(gate.state().get().loading);
            assert!(modals.signup.get());

            clock.advance(1);
            let state = gate.state().get();
            assert!(!state.loading);
            assert!(state.is_authenticated);
            assert!(!modals.signup.get());
        });
    }

    #[test]
    fn signed_out_change_keeps_modals() {
        with_runtime(|| {
            let backend = FakeAuthBackend::signed_out();
            let (gate, clock, modals) = gate_with(backend.clone());
            gate.activate();
            block_on(gate.check_session());
            clock.advance(2500);

            modals.open_login();
            backend.emit(AuthEvent::SignedOut, None);
            clock.advance(2500);
            assert!(modals.login.get());
            assert!(!gate.state().get().is_authenticated);
        });
    }

    #[test]
    fn newest_auth_change_wins() {
        with_runtime(|| {
            let backend = FakeAuthBackend::signed_out();
            let (gate, clock, _) = gate_with(backend.clone());
            gate.activate();
            block_on(gate.check_session());
            clock.advance(2500);

            backend.emit(AuthEvent::SignedIn, Some(session_for("jane")));
            clock.advance(1000);
            backend.emit(AuthEvent::SignedOut, None);
            clock.advance(1600);
            // The first commit was replaced, so still loading.
            assert!(gate.state().get().loading);
            clock.advance(900);
            let state = gate.state().get();
            assert!(!state.loading);
            assert!(!state.is_authenticated);
        });
    }

    #[test]
    fn change_before_initial_check_supersedes_it() {
        with_runtime(|| {
            let backend = FakeAuthBackend::signed_out();
            let (gate, clock, _) = gate_with(backend.clone());
            gate.activate();
            backend.emit(AuthEvent::SignedIn, Some(session_for("jane")));
            block_on(gate.check_session());
            clock.advance(2500);
            assert!(gate.state().get().is_authenticated);
        });
    }

    #[test]
    fn teardown_cancels_pending_work() {
        with_runtime(|| {
            let backend = FakeAuthBackend::signed_out();
            let (gate, clock, _) = gate_with(backend.clone());
            gate.activate();
            block_on(gate.check_session());
            clock.advance(1000);
            let before = gate.state().get();

            gate.deactivate();
            assert_eq!(clock.pending(), 0);
            assert!(backend.listeners.is_empty());

            backend.emit(AuthEvent::SignedIn, Some(session_for("jane")));
            gate.session_resolved(Ok(Some(session_for("jane"))));
            clock.advance(60_000);
            assert_eq!(gate.state().get(), before);
        });
    }

    #[test]
    fn sign_out_round_trips_through_change_notification() {
        with_runtime(|| {
            let backend = FakeAuthBackend::signed_out();
            *backend.session_result.borrow_mut() = Some(Ok(Some(session_for("jane"))));
            let (gate, clock, _) = gate_with(backend.clone());
            gate.activate();
            block_on(gate.check_session());
            clock.advance(2500);
            assert!(gate.state().get().is_authenticated);

            block_on(gate.sign_out());
            assert_eq!(*backend.sign_out_calls.borrow(), 1);
            assert!(gate.state().get().loading);
            clock.advance(2500);
            assert!(!gate.state().get().is_authenticated);
        });
    }
}
