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

//! In-memory doubles shared by unit tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use http::Method;
use turret_io_core::{HttpSend, Result};

use crate::client::SendRequest;
use crate::response::Response;
use crate::sign_request::Payload;

/// HttpSend that records requests and answers with a canned response.
#[derive(Debug, Clone)]
pub struct RecordingHttpSend {
    status: u16,
    body: &'static str,
    requests: Arc<Mutex<Vec<http::Request<Bytes>>>>,
}

impl RecordingHttpSend {
    pub fn new(status: u16, body: &'static str) -> Self {
        Self {
            status,
            body,
            requests: Arc::default(),
        }
    }

    pub fn requests(&self) -> Vec<http::Request<Bytes>> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpSend for RecordingHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        self.requests.lock().unwrap().push(req);

        Ok(http::Response::builder()
            .status(self.status)
            .body(Bytes::from_static(self.body.as_bytes()))
            .unwrap())
    }
}

/// SendRequest that records what the facades asked for.
#[derive(Debug, Clone, Default)]
pub struct RecordingApi {
    calls: Arc<Mutex<Vec<(Method, String, Payload)>>>,
}

impl RecordingApi {
    pub fn calls(&self) -> Vec<(Method, String, Payload)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SendRequest for RecordingApi {
    fn api_key(&self) -> &str {
        "YWJjMTIz"
    }

    fn api_secret(&self) -> &str {
        "ZGVmZ2hp"
    }

    async fn send_request(
        &self,
        method: Method,
        path: &str,
        payload: &Payload,
    ) -> Result<Response> {
        self.calls
            .lock()
            .unwrap()
            .push((method, path.to_string(), payload.clone()));

        Response::from_http(
            http::Response::builder()
                .status(200)
                .body(Bytes::from_static(b"{}"))
                .unwrap(),
        )
    }
}
