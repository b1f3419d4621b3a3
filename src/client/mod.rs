//! Typed HTTP client for the REST API.
//!
//! One method per endpoint; each returns the decoded body or a
//! [`ClientError`] carrying the server's `error` text when there was one.

pub mod error;

pub use error::{ClientError, ClientResult};

use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config;
use crate::models::{Equipment, ErrorBody, Loadout, LoadoutUpdate, NewLoadout};

#[derive(Debug, Clone)]
pub struct ArmoryClient {
    http: reqwest::Client,
    base_url: String,
}

impl Default for ArmoryClient {
    fn default() -> Self {
        Self::new(config::DEFAULT_SERVER_URL)
    }
}

impl ArmoryClient {
    /// Client for the server at `base_url` (e.g. `http://localhost:3001`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http(reqwest::Client::new(), base_url)
    }

    pub fn with_http(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http.request(method, format!("{}{}", self.base_url, path))
    }

    async fn send<T: DeserializeOwned>(&self, req: RequestBuilder) -> ClientResult<T> {
        let resp = req.send().await.map_err(ClientError::Network)?;
        decode(resp).await
    }

    async fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.send(self.request(method, path).json(body)).await
    }

    /// GET /equipments
    pub async fn equipments(&self) -> ClientResult<Vec<Equipment>> {
        self.send(self.request(Method::GET, "/equipments")).await
    }

    /// GET /loadouts
    pub async fn loadouts(&self) -> ClientResult<Vec<Loadout>> {
        self.send(self.request(Method::GET, "/loadouts")).await
    }

    /// GET /loadout/{id}
    pub async fn loadout(&self, id: i64) -> ClientResult<Loadout> {
        self.send(self.request(Method::GET, &format!("/loadout/{id}")))
            .await
    }

    /// POST /loadouts
    pub async fn create_loadout(&self, new: &NewLoadout) -> ClientResult<Loadout> {
        self.send_json(Method::POST, "/loadouts", new).await
    }

    /// PATCH /loadout/{id}
    pub async fn update_loadout(&self, id: i64, update: &LoadoutUpdate) -> ClientResult<Loadout> {
        self.send_json(Method::PATCH, &format!("/loadout/{id}"), update)
            .await
    }

    /// DELETE /loadout/{id}
    pub async fn delete_loadout(&self, id: i64) -> ClientResult<Loadout> {
        self.send(self.request(Method::DELETE, &format!("/loadout/{id}")))
            .await
    }
}

async fn decode<T: DeserializeOwned>(resp: Response) -> ClientResult<T> {
    let status = resp.status();
    if status.is_success() {
        return resp.json::<T>().await.map_err(ClientError::Decode);
    }
    // The error body is optional; a missing or foreign body still yields
    // the status.
    let message = resp.json::<ErrorBody>().await.ok().map(|b| b.error);
    Err(ClientError::from_status(status.as_u16(), message))
}
