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

use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;

/// Base endpoint of the Turret.IO API.
pub const DEFAULT_ENDPOINT: &str = "https://api.turret.io";

// Headers used by the Turret.IO API.
pub const X_LS_AUTH: &str = "x-ls-auth";
pub const X_LS_TIME: &str = "x-ls-time";
pub const X_LS_KEY: &str = "x-ls-key";

// Env values used by the Turret.IO client.
pub const TURRET_IO_ENDPOINT: &str = "TURRET_IO_ENDPOINT";
pub const TURRET_IO_API_KEY: &str = "TURRET_IO_API_KEY";
pub const TURRET_IO_API_SECRET: &str = "TURRET_IO_API_SECRET";

// Resource paths, relative to the endpoint.
pub const USER_PATH: &str = "/latest/user";
pub const TARGET_PATH: &str = "/latest/target";
pub const ACCOUNT_PATH: &str = "/latest/account";

// Option keys for outgoing methods.
pub const AWS_ACCESS_KEY: &str = "aws_access_key";
pub const AWS_SECRET_ACCESS_KEY: &str = "aws_secret_access_key";
pub const SMTP_HOST: &str = "smtp_host";
pub const SMTP_USERNAME: &str = "smtp_username";
pub const SMTP_PASSWORD: &str = "smtp_password";

/// Status line the service answers with, in plain text, when authentication fails.
pub const STATUS_UNAUTHORIZED: &str = "401 Unauthorized";

/// AsciiSet for path segments: everything but RFC 3986 `pchar` is encoded.
///
/// `@` is kept so that `/latest/user/test@example.com` is sent as is.
pub static PATH_SEGMENT_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'!')
    .remove(b'$')
    .remove(b'&')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b'+')
    .remove(b',')
    .remove(b';')
    .remove(b'=')
    .remove(b':')
    .remove(b'@');
