use async_trait::async_trait;
use ctrlhora_models::{ClockEventKind, GpsPosition, NewUser, User, UserUpdate};

use crate::{
    types::{ApiMessage, LoginResponse},
    Result,
};

/// Time-tracking API interface
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ApiService: Send + Sync {
    /// Exchange credentials for a bearer token.
    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse>;
    /// Register an entry at a position.
    async fn entries_create(&self, token: &str, position: &GpsPosition) -> Result<ApiMessage>;
    /// Register an exit at a position.
    async fn exits_create(&self, token: &str, position: &GpsPosition) -> Result<ApiMessage>;
    /// Register a clock event at a position.
    async fn clock_events_create(
        &self,
        token: &str,
        kind: ClockEventKind,
        position: &GpsPosition,
    ) -> Result<ApiMessage> {
        match kind {
            ClockEventKind::Entry => self.entries_create(token, position).await,
            ClockEventKind::Exit => self.exits_create(token, position).await,
        }
    }
    /// List all users.
    async fn users_list(&self, token: &str) -> Result<Vec<User>>;
    /// Create a user.
    async fn users_create(&self, token: &str, user: &NewUser) -> Result<ApiMessage>;
    /// Update a user.
    async fn users_update(
        &self,
        token: &str,
        username: &str,
        update: &UserUpdate,
    ) -> Result<ApiMessage>;
    /// Delete a user.
    async fn users_delete(&self, token: &str, username: &str) -> Result<ApiMessage>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn clock_events_create_dispatches_on_kind() {
        let mut api_service = MockApiService::new();
        api_service
            .expect_exits_create()
            .once()
            .withf(|token, position| token == "token" && position.to_string() == "1,2")
            .return_once(|_, _| Ok(ApiMessage::new("Exit registered")));
        api_service.expect_entries_create().never();

        let position = GpsPosition::new(1.0, 2.0).unwrap();
        let message = DefaultDispatch(&api_service)
            .clock_events_create("token", ClockEventKind::Exit, &position)
            .await
            .unwrap();

        assert_eq!(message.message, "Exit registered");
    }

    /// Forwards every call except `clock_events_create`, to exercise the default method.
    struct DefaultDispatch<'a>(&'a MockApiService);

    #[async_trait]
    impl ApiService for DefaultDispatch<'_> {
        async fn login(&self, username: &str, password: &str) -> Result<LoginResponse> {
            self.0.login(username, password).await
        }

        async fn entries_create(&self, token: &str, position: &GpsPosition) -> Result<ApiMessage> {
            self.0.entries_create(token, position).await
        }

        async fn exits_create(&self, token: &str, position: &GpsPosition) -> Result<ApiMessage> {
            self.0.exits_create(token, position).await
        }

        async fn users_list(&self, token: &str) -> Result<Vec<User>> {
            self.0.users_list(token).await
        }

        async fn users_create(&self, token: &str, user: &NewUser) -> Result<ApiMessage> {
            self.0.users_create(token, user).await
        }

        async fn users_update(
            &self,
            token: &str,
            username: &str,
            update: &UserUpdate,
        ) -> Result<ApiMessage> {
            self.0.users_update(token, username, update).await
        }

        async fn users_delete(&self, token: &str, username: &str) -> Result<ApiMessage> {
            self.0.users_delete(token, username).await
        }
    }
}
