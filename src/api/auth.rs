//! Session Endpoints
//!
//! Cookie-based auth: the backend sets the session cookie on
//! login/register, the client only reads back `/auth/me`.

use serde::Serialize;

use super::ApiError;
use crate::models::User;

#[derive(Serialize)]
struct LoginBody<'a> {
    email: &'a str,
    password: &'a str,
    remember_me: bool,
}

#[derive(Serialize)]
struct RegisterBody<'a> {
    email: &'a str,
    password: &'a str,
}

pub async fn me() -> Result<User, ApiError> {
    super::get("/auth/me").await
}

pub async fn login(email: &str, password: &str, remember_me: bool) -> Result<(), ApiError> {
    let body = LoginBody { email, password, remember_me };
    super::request_discard("POST", "/auth/login", Some(&body)).await
}

pub async fn register(email: &str, password: &str) -> Result<(), ApiError> {
    let body = RegisterBody { email, password };
    super::request_discard("POST", "/auth/register", Some(&body)).await
}

pub async fn logout() -> Result<(), ApiError> {
    super::request_discard::<()>("POST", "/auth/logout", None).await
}
