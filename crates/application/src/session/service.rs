//! Session use cases: initialization, login, logout, password reset.

use std::sync::Arc;

use serde_json::{Value, json};

use gantry_domain::Credential;

use crate::client::ApiClient;
use crate::error::{ApiError, ApiResult};
use crate::ports::{Notifier, SessionUi, TokenStore};

/// High-level session operations built on the client.
pub struct SessionService {
    client: Arc<ApiClient>,
    tokens: Arc<dyn TokenStore>,
    notifier: Arc<dyn Notifier>,
    session: Arc<dyn SessionUi>,
}

impl SessionService {
    /// Creates the service over the given ports.
    #[must_use]
    pub fn new(
        client: Arc<ApiClient>,
        tokens: Arc<dyn TokenStore>,
        notifier: Arc<dyn Notifier>,
        session: Arc<dyn SessionUi>,
    ) -> Self {
        Self {
            client,
            tokens,
            notifier,
            session,
        }
    }

    /// Checks whether the system has completed first-run setup.
    ///
    /// # Errors
    ///
    /// Propagates the underlying [`ApiError`]; callers decide whether a
    /// failed check counts as "not initialized".
    pub async fn check_initialized(&self) -> ApiResult<bool> {
        let data = self.client.get("/sys/init/check").await?;
        Ok(data
            .get("is_initialized")
            .and_then(Value::as_bool)
            .unwrap_or(false))
    }

    /// Performs first-run setup with the given admin password.
    ///
    /// # Errors
    ///
    /// Propagates the underlying [`ApiError`].
    pub async fn initialize(&self, password: &str) -> ApiResult<()> {
        self.client
            .post("/sys/init/setup", json!({"password": password}))
            .await?;
        self.notifier.success("System initialized");
        self.session.close_init();
        Ok(())
    }

    /// Logs in and stores the issued credential.
    ///
    /// # Errors
    ///
    /// Propagates the underlying [`ApiError`]; [`ApiError::Decode`] when
    /// the reply carries no token.
    pub async fn login(&self, password: &str) -> ApiResult<()> {
        let data = self
            .client
            .post("/sys/login", json!({"password": password}))
            .await?;
        let token = data
            .get("token")
            .and_then(Value::as_str)
            .ok_or_else(|| ApiError::Decode("login reply carried no token".to_string()))?;
        self.tokens.set(&Credential::new(token)).await?;
        self.notifier.success("Signed in");
        self.session.close_login();
        Ok(())
    }

    /// Changes the admin password, then forces a fresh login.
    ///
    /// # Errors
    ///
    /// Propagates the underlying [`ApiError`].
    pub async fn reset_password(&self, old_password: &str, new_password: &str) -> ApiResult<()> {
        self.client
            .post(
                "/sys/resetPassword",
                json!({"old_password": old_password, "password": new_password}),
            )
            .await?;
        self.tokens.clear().await?;
        self.notifier.success("Password updated, sign in again");
        self.session.open_login();
        Ok(())
    }

    /// Discards the stored credential.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Storage`] if the credential could not be removed.
    pub async fn logout(&self) -> ApiResult<()> {
        self.tokens.clear().await?;
        self.notifier.success("Signed out");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::test_support::{ClientFixture, fixture};

    fn service(fx: &ClientFixture) -> SessionService {
        SessionService::new(
            fx.client.clone(),
            fx.tokens.clone(),
            fx.notifier.clone(),
            fx.session.clone(),
        )
    }

    fn ok_envelope(data: Value) -> Vec<u8> {
        serde_json::to_vec(&json!({"code": 200, "message": "ok", "data": data})).unwrap()
    }

    #[tokio::test]
    async fn test_login_stores_issued_token() {
        let fx = fixture();
        fx.transport
            .push_reply(200, &ok_envelope(json!({"token": "issued-token"})));

        service(&fx).login("hunter2").await.unwrap();

        assert_eq!(
            fx.tokens.get().await.unwrap(),
            Some(Credential::new("issued-token"))
        );
        assert_eq!(fx.notifier.successes(), vec!["Signed in".to_string()]);

        // login goes out on the allow-list, unauthenticated
        let sent = fx.transport.last_request();
        assert_eq!(sent.path, "/sys/login");
        assert!(sent.headers.is_empty());
    }

    #[tokio::test]
    async fn test_login_without_token_in_reply_is_a_decode_error() {
        let fx = fixture();
        fx.transport.push_reply(200, &ok_envelope(json!({})));

        let err = service(&fx).login("hunter2").await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
        assert_eq!(fx.tokens.get().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_check_initialized_reads_flag() {
        let fx = fixture();
        fx.transport
            .push_reply(200, &ok_envelope(json!({"is_initialized": true})));
        assert!(service(&fx).check_initialized().await.unwrap());

        fx.transport
            .push_reply(200, &ok_envelope(json!({"is_initialized": false})));
        assert!(!service(&fx).check_initialized().await.unwrap());
    }

    #[tokio::test]
    async fn test_logout_clears_credential() {
        let fx = fixture();
        fx.tokens.set(&Credential::new("tok")).await.unwrap();

        service(&fx).logout().await.unwrap();

        assert_eq!(fx.tokens.get().await.unwrap(), None);
        assert_eq!(fx.notifier.successes(), vec!["Signed out".to_string()]);
    }

    #[tokio::test]
    async fn test_reset_password_forces_fresh_login() {
        let fx = fixture();
        fx.tokens.set(&Credential::new("tok")).await.unwrap();
        fx.transport.push_reply(200, &ok_envelope(Value::Null));

        service(&fx).reset_password("old", "new").await.unwrap();

        assert_eq!(fx.tokens.get().await.unwrap(), None);
        assert_eq!(fx.session.login_opens(), 1);
    }

    #[tokio::test]
    async fn test_initialize_posts_password() {
        let fx = fixture();
        fx.transport.push_reply(200, &ok_envelope(Value::Null));

        service(&fx).initialize("first-password").await.unwrap();

        let sent = fx.transport.last_request();
        assert_eq!(sent.path, "/sys/init/setup");
        assert_eq!(sent.body, Some(json!({"password": "first-password"})));
        assert_eq!(
            fx.notifier.successes(),
            vec!["System initialized".to_string()]
        );
    }
}
