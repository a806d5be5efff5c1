//! Application Context
//!
//! Session state provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::{self, ApiError};
use crate::models::User;

/// App-wide session signals provided via context
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// Current session identity, absent when logged out - read
    pub user: ReadSignal<Option<User>>,
    set_user: WriteSignal<Option<User>>,
    /// True until the first session round trip settles - read
    pub loading: ReadSignal<bool>,
    set_loading: WriteSignal<bool>,
}

impl AuthContext {
    pub fn new(
        user: (ReadSignal<Option<User>>, WriteSignal<Option<User>>),
        loading: (ReadSignal<bool>, WriteSignal<bool>),
    ) -> Self {
        Self {
            user: user.0,
            set_user: user.1,
            loading: loading.0,
            set_loading: loading.1,
        }
    }

    /// Re-fetch the session. A missing or invalid session is a normal
    /// logged-out state, never an error.
    pub async fn refresh(self) {
        match api::auth::me().await {
            Ok(user) => self.set_user.set(Some(user)),
            Err(_) => self.set_user.set(None),
        }
        self.set_loading.set(false);
    }

    /// Log in, then refresh so every view observes the new session
    pub async fn login(
        self,
        email: &str,
        password: &str,
        remember_me: bool,
    ) -> Result<(), ApiError> {
        api::auth::login(email, password, remember_me).await?;
        self.refresh().await;
        Ok(())
    }

    /// Register; the backend sets the session cookie right away
    pub async fn register(self, email: &str, password: &str) -> Result<(), ApiError> {
        api::auth::register(email, password).await?;
        self.refresh().await;
        Ok(())
    }

    /// Log out, then refresh so dependent views drop the session
    pub async fn logout(self) -> Result<(), ApiError> {
        api::auth::logout().await?;
        self.refresh().await;
        Ok(())
    }

    pub fn is_premium(self) -> bool {
        self.user.get().map(|u| u.is_premium).unwrap_or(false)
    }

    pub fn user_id(self) -> Option<String> {
        self.user.get().map(|u| u.user_id)
    }
}

/// Get the auth context from context
pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}
