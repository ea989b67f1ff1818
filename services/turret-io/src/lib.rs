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

//! Turret.IO API client
//!
//! Every request is signed with the account's API secret: the signature
//! covers the request path, the JSON payload and the unix time it was sent at.
//!
//! ```no_run
//! use std::collections::HashMap;
//!
//! use turret_io::{Client, Config};
//! use turret_io_core::Context;
//! use turret_io_http_send_reqwest::ReqwestHttpSend;
//!
//! # async fn example() -> turret_io_core::Result<()> {
//! let ctx = Context::new().with_http_send(ReqwestHttpSend::default());
//! let client = Client::from_config(ctx, Config::new()).await?;
//!
//! let attributes = HashMap::from([("location".to_string(), "midwest".to_string())]);
//! client
//!     .user()
//!     .set("test@example.com", &attributes, &HashMap::new())
//!     .await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod constants;
pub use constants::DEFAULT_ENDPOINT;

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod provide_credential;
pub use provide_credential::DefaultCredentialProvider;
pub use provide_credential::EnvCredentialProvider;
pub use provide_credential::StaticCredentialProvider;

mod sign_request;
pub use sign_request::canonical_json;
pub use sign_request::Payload;
pub use sign_request::RequestSigner;

mod response;
pub use response::Response;

mod client;
pub use client::Client;
pub use client::SendRequest;

mod account;
pub use account::Account;
pub use account::OutgoingMethod;

mod target;
pub use target::Target;

mod target_email;
pub use target_email::TargetEmail;

mod user;
pub use user::User;

#[cfg(test)]
mod testing;
