//! Bridge to the hosted identity widget (`window.netlifyIdentity`).
//!
//! The ledger only needs to know whether a user is signed in and when that
//! changes; everything else stays inside the widget.

use js_sys::{Array, Function, Reflect};
use tracing::{info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use yew::Callback;

use crate::error::{LedgerError, Result};

const WIDGET_GLOBAL: &str = "netlifyIdentity";

#[derive(Clone, Debug, PartialEq)]
pub struct IdentityUser {
    pub email: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum AuthStatus {
    Checking,
    SignedIn(IdentityUser),
    SignedOut,
    Unavailable(String),
}

/// What the root component shows for a given status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gate {
    Loading,
    App,
    SignIn,
    Inert,
}

impl AuthStatus {
    pub fn from_user(user: Option<IdentityUser>) -> Self {
        match user {
            Some(user) => AuthStatus::SignedIn(user),
            None => AuthStatus::SignedOut,
        }
    }

    pub fn gate(&self) -> Gate {
        match self {
            AuthStatus::Checking => Gate::Loading,
            AuthStatus::SignedIn(_) => Gate::App,
            AuthStatus::SignedOut => Gate::SignIn,
            AuthStatus::Unavailable(_) => Gate::Inert,
        }
    }

    pub fn user(&self) -> Option<&IdentityUser> {
        match self {
            AuthStatus::SignedIn(user) => Some(user),
            _ => None,
        }
    }
}

pub struct IdentityWidget {
    handle: JsValue,
}

impl IdentityWidget {
    /// Finds the widget global; fails when its script did not load.
    pub fn detect() -> Result<Self> {
        let window = web_sys::window()
            .ok_or_else(|| LedgerError::IdentityUnavailable("no window".to_string()))?;
        let handle =
            Reflect::get(&window, &JsValue::from_str(WIDGET_GLOBAL)).map_err(LedgerError::identity)?;
        if handle.is_undefined() || handle.is_null() {
            return Err(LedgerError::IdentityUnavailable(format!(
                "{} is not loaded",
                WIDGET_GLOBAL
            )));
        }
        Ok(Self { handle })
    }

    fn call(&self, method: &str, args: &Array) -> Result<JsValue> {
        let function: Function = Reflect::get(&self.handle, &JsValue::from_str(method))
            .map_err(LedgerError::identity)?
            .dyn_into()
            .map_err(|_| {
                LedgerError::IdentityUnavailable(format!("{}.{} is not a function", WIDGET_GLOBAL, method))
            })?;
        function
            .apply(&self.handle, args)
            .map_err(LedgerError::identity)
    }

    pub fn current_user(&self) -> Result<Option<IdentityUser>> {
        let user = self.call("currentUser", &Array::new())?;
        Ok(user_from_js(&user))
    }

    pub fn init(&self) -> Result<()> {
        self.call("init", &Array::new()).map(|_| ())
    }

    pub fn open(&self) -> Result<()> {
        self.call("open", &Array::new()).map(|_| ())
    }

    pub fn logout(&self) -> Result<()> {
        self.call("logout", &Array::new()).map(|_| ())
    }

    /// Routes `init`, `login`, `logout` and `error` events into `on_change`.
    ///
    /// Handlers stay registered until the returned subscription is dropped.
    pub fn subscribe(&self, on_change: Callback<AuthStatus>) -> Result<Subscription> {
        let mut subscription = Subscription {
            handle: self.handle.clone(),
            handlers: Vec::new(),
        };

        for event in ["init", "login"] {
            let on_change = on_change.clone();
            let handler = Closure::<dyn FnMut(JsValue)>::new(move |user: JsValue| {
                let status = AuthStatus::from_user(user_from_js(&user));
                info!(event, signed_in = status.user().is_some(), "identity event");
                on_change.emit(status);
            });
            subscription.register(self, event, handler)?;
        }

        let logout = {
            let on_change = on_change.clone();
            Closure::<dyn FnMut(JsValue)>::new(move |_: JsValue| {
                info!("identity event: logout");
                on_change.emit(AuthStatus::SignedOut);
            })
        };
        subscription.register(self, "logout", logout)?;

        let error = Closure::<dyn FnMut(JsValue)>::new(move |err: JsValue| {
            let err = LedgerError::identity(err);
            warn!(error = %err, "identity widget reported an error");
            on_change.emit(AuthStatus::Unavailable(err.to_string()));
        });
        subscription.register(self, "error", error)?;

        Ok(subscription)
    }
}

pub struct Subscription {
    handle: JsValue,
    handlers: Vec<(&'static str, Closure<dyn FnMut(JsValue)>)>,
}

impl Subscription {
    fn register(
        &mut self,
        widget: &IdentityWidget,
        event: &'static str,
        handler: Closure<dyn FnMut(JsValue)>,
    ) -> Result<()> {
        let args = Array::of2(&JsValue::from_str(event), handler.as_ref());
        widget.call("on", &args)?;
        self.handlers.push((event, handler));
        Ok(())
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let off = Reflect::get(&self.handle, &JsValue::from_str("off"))
            .ok()
            .and_then(|f| f.dyn_into::<Function>().ok());
        if let Some(off) = off {
            for (event, handler) in &self.handlers {
                let _ = off.call2(&self.handle, &JsValue::from_str(event), handler.as_ref());
            }
        }
    }
}

fn user_from_js(value: &JsValue) -> Option<IdentityUser> {
    if value.is_null() || value.is_undefined() {
        return None;
    }
    let email = Reflect::get(value, &JsValue::from_str("email"))
        .ok()
        .and_then(|email| email.as_string());
    Some(IdentityUser { email })
}

/// Blocking browser alert; the only channel left when the app cannot start.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> IdentityUser {
        IdentityUser {
            email: Some("ana@example.com".to_string()),
        }
    }

    #[test]
    fn gate_follows_status() {
        assert_eq!(AuthStatus::Checking.gate(), Gate::Loading);
        assert_eq!(AuthStatus::SignedIn(user()).gate(), Gate::App);
        assert_eq!(AuthStatus::SignedOut.gate(), Gate::SignIn);
        assert_eq!(
            AuthStatus::Unavailable("script blocked".to_string()).gate(),
            Gate::Inert
        );
    }

    #[test]
    fn presence_maps_to_status() {
        assert_eq!(AuthStatus::from_user(None), AuthStatus::SignedOut);
        let status = AuthStatus::from_user(Some(user()));
        assert_eq!(status.user(), Some(&user()));
        assert_eq!(AuthStatus::SignedOut.user(), None);
    }
}
