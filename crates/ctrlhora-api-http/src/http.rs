//! HTTP adapter

use async_trait::async_trait;
use ctrlhora_api_interface::{
    types::{ApiMessage, LoginResponse},
    ApiService, Result,
};
use ctrlhora_config::Config;
use ctrlhora_models::{ClockEventKind, GpsPosition, NewUser, User, UserUpdate};
use reqwest::{Client, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    client::{build_api_url, build_api_url_with_segment, build_client, check_status},
    errors::HttpApiError,
};

/// HTTP API adapter implementation.
#[derive(Clone)]
pub struct HttpApiService {
    config: Config,
    client: Client,
}

impl HttpApiService {
    /// Creates new HTTP API adapter.
    pub fn new(config: Config) -> Result<Self, HttpApiError> {
        let client = build_client(&config)?;
        Ok(Self { config, client })
    }

    fn build_url(&self, path: &str) -> String {
        build_api_url(&self.config, path)
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, HttpApiError> {
        let response = check_status(request.send().await?).await?;
        let status = response.status().as_u16();

        response
            .json::<T>()
            .await
            .map_err(|e| HttpApiError::InvalidResponse {
                status,
                message: e.to_string(),
            })
    }

    async fn post_position(
        &self,
        path: &str,
        token: &str,
        position: &GpsPosition,
    ) -> Result<ApiMessage, HttpApiError> {
        self.send_json(
            self.client
                .post(self.build_url(path))
                .bearer_auth(token)
                .query(&[("gps_position", position.to_string())]),
        )
        .await
    }
}

#[async_trait]
impl ApiService for HttpApiService {
    #[tracing::instrument(skip(self, password))]
    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse> {
        #[derive(Serialize)]
        struct Form<'a> {
            username: &'a str,
            password: &'a str,
        }

        Ok(self
            .send_json(
                self.client
                    .post(self.build_url("/login"))
                    .form(&Form { username, password }),
            )
            .await?)
    }

    #[tracing::instrument(skip(self, token), fields(position = %position), ret)]
    async fn entries_create(&self, token: &str, position: &GpsPosition) -> Result<ApiMessage> {
        Ok(self.post_position(ClockEventKind::Entry.path(), token, position).await?)
    }

    #[tracing::instrument(skip(self, token), fields(position = %position), ret)]
    async fn exits_create(&self, token: &str, position: &GpsPosition) -> Result<ApiMessage> {
        Ok(self.post_position(ClockEventKind::Exit.path(), token, position).await?)
    }

    #[tracing::instrument(skip(self, token))]
    async fn users_list(&self, token: &str) -> Result<Vec<User>> {
        Ok(self
            .send_json(
                self.client
                    .get(self.build_url("/api/users"))
                    .bearer_auth(token),
            )
            .await?)
    }

    #[tracing::instrument(skip(self, token, user), fields(username = %user.username), ret)]
    async fn users_create(&self, token: &str, user: &NewUser) -> Result<ApiMessage> {
        Ok(self
            .send_json(
                self.client
                    .post(self.build_url("/api/users"))
                    .bearer_auth(token)
                    .json(user),
            )
            .await?)
    }

    #[tracing::instrument(skip(self, token, update), ret)]
    async fn users_update(
        &self,
        token: &str,
        username: &str,
        update: &UserUpdate,
    ) -> Result<ApiMessage> {
        let url = build_api_url_with_segment(&self.config, "/api/users", username)?;

        Ok(self
            .send_json(self.client.put(url).bearer_auth(token).json(update))
            .await?)
    }

    #[tracing::instrument(skip(self, token), ret)]
    async fn users_delete(&self, token: &str, username: &str) -> Result<ApiMessage> {
        let url = build_api_url_with_segment(&self.config, "/api/users", username)?;

        Ok(self
            .send_json(self.client.delete(url).bearer_auth(token))
            .await?)
    }
}
