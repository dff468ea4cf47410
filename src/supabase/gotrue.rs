//! GoTrue REST client (`{SUPABASE_URL}/auth/v1`).

use client::net::types::Credentials;
use reqwest::RequestBuilder;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::AuthProvider;
use super::types::{AuthError, AuthTokens, GoTrueUser, SignUpOutcome, error_message, parse_sign_up_body};
use crate::config::SupabaseConfig;

pub struct GoTrueClient {
    http: reqwest::Client,
    base_url: String,
    anon_key: String,
}

#[derive(Serialize)]
struct PasswordGrant<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RefreshGrant<'a> {
    refresh_token: &'a str,
}

impl GoTrueClient {
    #[must_use]
    pub fn new(http: reqwest::Client, config: &SupabaseConfig) -> Self {
        Self { http, base_url: format!("{}/auth/v1", config.url), anon_key: config.anon_key.clone() }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Send with the project key attached; return the body of a 2xx answer.
    async fn send(&self, request: RequestBuilder) -> Result<String, AuthError> {
        let response = request
            .header("apikey", &self.anon_key)
            .send()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;

        if !(200..300).contains(&status) {
            return Err(AuthError::Rejected { status, message: error_message(status, &body) });
        }
        Ok(body)
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, AuthError> {
        let body = self.send(request).await?;
        serde_json::from_str(&body).map_err(|e| AuthError::Unexpected(e.to_string()))
    }
}

#[async_trait::async_trait]
impl AuthProvider for GoTrueClient {
    async fn sign_up(&self, credentials: &Credentials) -> Result<SignUpOutcome, AuthError> {
        let grant = PasswordGrant { email: &credentials.email, password: &credentials.password };
        let body = self.send(self.http.post(self.url("/signup")).json(&grant)).await?;
        parse_sign_up_body(&body)
    }

    async fn sign_in_with_password(&self, credentials: &Credentials) -> Result<AuthTokens, AuthError> {
        let grant = PasswordGrant { email: &credentials.email, password: &credentials.password };
        self.send_json(self.http.post(self.url("/token?grant_type=password")).json(&grant))
            .await
    }

    async fn refresh(&self, refresh_token: &str) -> Result<AuthTokens, AuthError> {
        let grant = RefreshGrant { refresh_token };
        self.send_json(self.http.post(self.url("/token?grant_type=refresh_token")).json(&grant))
            .await
    }

    async fn get_user(&self, access_token: &str) -> Result<GoTrueUser, AuthError> {
        self.send_json(self.http.get(self.url("/user")).bearer_auth(access_token))
            .await
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), AuthError> {
        self.send(self.http.post(self.url("/logout")).bearer_auth(access_token))
            .await
            .map(|_| ())
    }
}
