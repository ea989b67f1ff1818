// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderValue, Method};
use log::debug;
use percent_encoding::utf8_percent_encode;
use turret_io_core::hash::base64_encode;
use turret_io_core::time::{now, unix_timestamp, DateTime};
use turret_io_core::{Context, Error, ProvideCredential, Result, SigningCredential};

use crate::constants::*;
use crate::credential::Credential;
use crate::provide_credential::{DefaultCredentialProvider, StaticCredentialProvider};
use crate::response::Response;
use crate::sign_request::{canonical_json, Payload, RequestSigner};
use crate::{Account, Config, Target, TargetEmail, User};

/// SendRequest is what the resource facades need from a client: its
/// credential and a way to send signed requests.
///
/// [`Client`] is the implementation shipped with this crate. Other bindings
/// can be plugged into the facades without changing them.
#[async_trait]
pub trait SendRequest: Debug + Send + Sync + 'static {
    /// API key used for signing.
    fn api_key(&self) -> &str;

    /// Base64 encoded API secret used for signing.
    fn api_secret(&self) -> &str;

    /// Sign and send a request to `path`, relative to the endpoint.
    async fn send_request(&self, method: Method, path: &str, payload: &Payload)
        -> Result<Response>;

    /// Sign and send a GET request.
    async fn get(&self, path: &str, payload: &Payload) -> Result<Response> {
        self.send_request(Method::GET, path, payload).await
    }

    /// Sign and send a POST request.
    async fn post(&self, path: &str, payload: &Payload) -> Result<Response> {
        self.send_request(Method::POST, path, payload).await
    }
}

/// Client signs and dispatches requests to the Turret.IO API.
///
/// A client owns its credential and never mutates it, so one client can be
/// shared by concurrent callers. Every request captures its own timestamp.
///
/// ```no_run
/// use turret_io::{Client, Credential};
/// use turret_io_core::Context;
/// use turret_io_http_send_reqwest::ReqwestHttpSend;
///
/// # async fn example() -> turret_io_core::Result<()> {
/// let ctx = Context::new().with_http_send(ReqwestHttpSend::default());
/// let client = Client::new(ctx, Credential::new("YWJjMTIz", "ZGVmZ2hp"));
///
/// let resp = client.user().get("test@example.com").await?;
/// println!("{}", resp.status());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    ctx: Context,
    credential: Credential,
    signer: RequestSigner,
    time: Option<DateTime>,
}

impl Client {
    /// Create a client for the public endpoint.
    pub fn new(ctx: Context, credential: Credential) -> Self {
        Self {
            ctx,
            credential,
            signer: RequestSigner::new(DEFAULT_ENDPOINT),
            time: None,
        }
    }

    /// Send requests to another endpoint.
    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.signer = RequestSigner::new(endpoint);
        self
    }

    /// Create a client with a credential loaded from `provider`.
    pub async fn from_provider(
        ctx: Context,
        provider: impl ProvideCredential<Credential = Credential>,
    ) -> Result<Self> {
        let credential = provider
            .provide_credential(&ctx)
            .await?
            .ok_or_else(|| Error::credential_invalid("no credential found"))?;
        if !credential.is_valid() {
            return Err(Error::credential_invalid("api key or api secret is empty"));
        }

        Ok(Self::new(ctx, credential))
    }

    /// Create a client from config.
    ///
    /// Unset fields are loaded from env, credentials set in config take
    /// priority over the default credential chain.
    pub async fn from_config(ctx: Context, config: Config) -> Result<Self> {
        let config = config.from_env(&ctx);
        debug!("building client from {config:?}");

        let mut provider = DefaultCredentialProvider::new();
        if let (Some(key), Some(secret)) = (&config.api_key, &config.api_secret) {
            provider = provider.push_front(StaticCredentialProvider::new(key, secret));
        }

        let client = Self::from_provider(ctx, provider).await?;
        Ok(client.with_endpoint(config.endpoint()))
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    #[cfg(test)]
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// The credential this client signs with.
    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    /// The endpoint requests are sent to.
    pub fn endpoint(&self) -> &str {
        self.signer.endpoint()
    }

    /// Facade for the account resource.
    pub fn account(&self) -> Account {
        Account::new(Arc::new(self.clone()))
    }

    /// Facade for the target resource.
    pub fn target(&self) -> Target {
        Target::new(Arc::new(self.clone()))
    }

    /// Facade for the target email resource.
    pub fn target_email(&self) -> TargetEmail {
        TargetEmail::new(Arc::new(self.clone()))
    }

    /// Facade for the user resource.
    pub fn user(&self) -> User {
        User::new(Arc::new(self.clone()))
    }

    /// Sign and send one request, then decode its response.
    ///
    /// The payload is serialized once: the same JSON is signed and sent,
    /// base64 encoded, as the request body. Transport errors are returned as
    /// is; nothing is retried.
    pub async fn dispatch(&self, method: Method, path: &str, payload: &Payload) -> Result<Response> {
        let timestamp = unix_timestamp(self.time.unwrap_or_else(now));
        let url = format!("{}{}", self.signer.endpoint(), path);

        let json = canonical_json(payload)?;
        let signature = self
            .signer
            .sign_json(&self.credential, &url, &json, timestamp)?;

        let mut req = http::Request::builder()
            .method(method)
            .uri(&url)
            .body(Bytes::from(base64_encode(json.as_bytes())))?;

        let headers = req.headers_mut();
        headers.insert(X_LS_AUTH, {
            let mut value: HeaderValue = signature.parse()?;
            value.set_sensitive(true);

            value
        });
        headers.insert(X_LS_TIME, HeaderValue::from(timestamp));
        headers.insert(X_LS_KEY, self.credential.api_key().parse()?);

        debug!("sending {} {}", req.method(), req.uri());
        let resp = self.ctx.http_send(req).await?;
        debug!("got response status {}", resp.status());

        Response::from_http(resp)
    }
}

#[async_trait]
impl SendRequest for Client {
    fn api_key(&self) -> &str {
        self.credential.api_key()
    }

    fn api_secret(&self) -> &str {
        self.credential.api_secret()
    }

    async fn send_request(
        &self,
        method: Method,
        path: &str,
        payload: &Payload,
    ) -> Result<Response> {
        self.dispatch(method, path, payload).await
    }
}

/// Build a path under `base`, percent encoding every segment.
///
/// The encoded path is what gets signed, so the encoding is part of the wire
/// contract: `a b?c/d` signs as `a%20b%3Fc%2Fd`, never as the raw text. Every
/// character the service could misroute (`/`, `?`, `#`, space) is escaped
/// while `@` in email addresses is kept.
pub(crate) fn resource_path(base: &str, segments: &[&str]) -> String {
    let mut s = base.to_string();
    for segment in segments {
        s.push('/');
        s.extend(utf8_percent_encode(segment, &PATH_SEGMENT_ENCODE_SET));
    }
    s
}
