//! Session gate: render-vs-redirect decisions for protected admin views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every admin route goes through the admin layout, which installs the gate
//! on mount. The gate derives its state from a fresh session-store read each
//! time it is evaluated and never trusts a previously cached result.
//!
//! DESIGN
//! ======
//! `SessionGate` is the plain state machine. `GateDriver` connects it to the
//! gate signal and the router, and `install_session_gate` runs the driver
//! from an `Effect` and the window `storage` listener. The redirect is a side
//! effect separate from rendering, and protected children are only shown
//! under `GateState::is_authorized`. Effects never run during SSR, so the
//! server always renders the `Unknown` placeholder.
//!
//! TRADE-OFFS
//! ==========
//! This is a UI gate only. It holds no proof the server can check; admin
//! mutations carry the session token and are re-validated server-side.

#[cfg(test)]
#[path = "session_gate_test.rs"]
mod session_gate_test;

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use super::session_store::{SessionStore, is_session_key};
use super::storage::KeyValueStore;
use crate::state::session::GateState;

/// Login entry point that denied visitors are sent to.
pub const LOGIN_PATH: &str = "/admin/login";
/// Protected landing route after a successful login.
pub const LANDING_PATH: &str = "/admin/dashboard";

/// What a protected view should do after an evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    /// Show the protected content.
    Render,
    /// Do not render; navigate to the given path.
    Redirect(&'static str),
}

impl GateDecision {
    #[must_use]
    pub fn for_state(state: &GateState) -> Self {
        if state.is_authorized() { Self::Render } else { Self::Redirect(LOGIN_PATH) }
    }
}

/// Whether a storage-change notification for `key` can affect the session.
///
/// `None` is what the browser reports when another tab calls
/// `localStorage.clear()`.
#[must_use]
pub fn storage_change_is_relevant(key: Option<&str>) -> bool {
    key.is_none_or(is_session_key)
}

/// Gate state machine over an injectable session store.
#[derive(Clone, Debug)]
pub struct SessionGate<S> {
    store: SessionStore<S>,
    state: GateState,
}

impl<S: KeyValueStore> SessionGate<S> {
    #[must_use]
    pub fn new(store: SessionStore<S>) -> Self {
        Self { store, state: GateState::Unknown }
    }

    #[must_use]
    pub fn state(&self) -> &GateState {
        &self.state
    }

    /// Evaluate on mount of a protected view.
    pub fn mount(&mut self) -> GateDecision {
        self.state = GateState::evaluate(&self.store);
        GateDecision::for_state(&self.state)
    }

    /// Re-evaluate after a cross-tab storage notification.
    ///
    /// Returns `None` when the changed key is unrelated to the session.
    pub fn on_storage_change(&mut self, key: Option<&str>) -> Option<GateDecision> {
        storage_change_is_relevant(key).then(|| self.mount())
    }

    /// Clear the session and return where to navigate.
    pub fn sign_out(&mut self) -> &'static str {
        self.store.clear();
        self.state = GateState::Denied;
        LOGIN_PATH
    }

    #[must_use]
    pub fn display_identity(&self) -> String {
        self.state.display_identity()
    }
}

/// Clear the session marker, then navigate to the login entry point.
pub fn sign_out<S, F>(store: &SessionStore<S>, navigate: F)
where
    S: KeyValueStore,
    F: FnOnce(&str),
{
    store.clear();
    navigate(LOGIN_PATH);
}

/// Sign out of the browser session: clear the marker and mark the gate
/// denied. The driver installed by [`install_session_gate`] sees the external
/// change, re-reads storage, and navigates to the login entry point.
///
/// Also used when the server rejects the session token on a mutation.
pub fn end_session(gate: RwSignal<GateState>) {
    #[cfg(feature = "hydrate")]
    if let Some(token) = gate.get_untracked().token().map(str::to_owned) {
        leptos::task::spawn_local(async move { crate::net::api::logout(&token).await });
    }
    sign_out(&SessionStore::browser(), |_| gate.set(GateState::Denied));
}

/// Binds a [`SessionGate`] to the shared gate signal and the router.
///
/// `sync` is what the mount effect runs and `storage_changed` is what the
/// window `storage` listener runs. Every redirect goes through `publish`.
pub struct GateDriver<S, F> {
    machine: SessionGate<S>,
    gate: RwSignal<GateState>,
    navigate: F,
}

impl<S, F> GateDriver<S, F>
where
    S: KeyValueStore,
    F: Fn(&str, NavigateOptions),
{
    pub fn new(store: SessionStore<S>, gate: RwSignal<GateState>, navigate: F) -> Self {
        Self { machine: SessionGate::new(store), gate, navigate }
    }

    /// React to the gate signal's current value. Re-evaluates when the signal
    /// is `Unknown` or was changed by someone else (e.g. sign-out); a value
    /// this driver published itself is left alone.
    pub fn sync(&mut self, observed: &GateState) {
        if *observed == GateState::Unknown || observed != self.machine.state() {
            let decision = self.machine.mount();
            self.publish(decision);
        }
    }

    /// React to a cross-tab storage notification for `key`.
    pub fn storage_changed(&mut self, key: Option<&str>) {
        if let Some(decision) = self.machine.on_storage_change(key) {
            self.publish(decision);
        }
    }

    fn publish(&self, decision: GateDecision) {
        self.gate.set(self.machine.state().clone());
        if let GateDecision::Redirect(path) = decision {
            (self.navigate)(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    }
}

/// Hide protected content until the next evaluation completes.
pub(crate) fn reset_for_mount(gate: RwSignal<GateState>) {
    gate.set(GateState::Unknown);
}

/// Evaluate the gate on mount and on every relevant cross-tab storage change,
/// and redirect to [`LOGIN_PATH`] whenever it resolves to `Denied`.
///
/// The gate is reset to `Unknown` first so protected content stays hidden
/// until this mount has read storage.
pub fn install_session_gate<S, F>(gate: RwSignal<GateState>, store: SessionStore<S>, navigate: F)
where
    S: KeyValueStore + 'static,
    F: Fn(&str, NavigateOptions) + 'static,
{
    reset_for_mount(gate);
    let driver = Rc::new(RefCell::new(GateDriver::new(store, gate, navigate)));

    {
        let driver = Rc::clone(&driver);
        Effect::new(move || {
            let observed = gate.get();
            driver.borrow_mut().sync(&observed);
        });
    }

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::storage, move |ev| {
            let key = ev.key();
            if storage_change_is_relevant(key.as_deref()) {
                log::debug!("session storage changed in another tab; re-evaluating gate");
            }
            driver.borrow_mut().storage_changed(key.as_deref());
        });
        on_cleanup(move || handle.remove());
    }
    #[cfg(not(feature = "hydrate"))]
    drop(driver);
}
