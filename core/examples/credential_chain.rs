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

use async_trait::async_trait;
use turret_io_core::hash::base64_hmac_sha512;
use turret_io_core::{
    Context, OsEnv, ProvideCredential, ProvideCredentialChain, Result, SigningCredential,
};

// Define a custom credential type
#[derive(Clone, Debug)]
struct MyCredential {
    api_key: String,
    api_secret: String,
}

impl SigningCredential for MyCredential {
    fn is_valid(&self) -> bool {
        !self.api_key.is_empty() && !self.api_secret.is_empty()
    }
}

// Load credentials from environment variables
#[derive(Debug)]
struct EnvProvider;

#[async_trait]
impl ProvideCredential for EnvProvider {
    type Credential = MyCredential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let (Some(api_key), Some(api_secret)) =
            (ctx.env_var("MY_API_KEY"), ctx.env_var("MY_API_SECRET"))
        else {
            return Ok(None);
        };

        Ok(Some(MyCredential {
            api_key,
            api_secret,
        }))
    }
}

// Fall back to demo credentials
#[derive(Debug)]
struct DemoProvider;

#[async_trait]
impl ProvideCredential for DemoProvider {
    type Credential = MyCredential;

    async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
        println!("No credentials found in environment, using demo credentials");
        Ok(Some(MyCredential {
            api_key: "demo-api-key".to_string(),
            api_secret: "demo-api-secret".to_string(),
        }))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let ctx = Context::new().with_env(OsEnv);

    let chain = ProvideCredentialChain::new()
        .push(EnvProvider)
        .push(DemoProvider);

    let Some(cred) = chain.provide_credential(&ctx).await? else {
        eprintln!("No credential found");
        return Ok(());
    };
    println!("Loaded credential for {}, valid: {}", cred.api_key, cred.is_valid());

    let signature = base64_hmac_sha512(cred.api_secret.as_bytes(), b"/v1/users{}1400000000");
    println!("Signature: {signature}");

    Ok(())
}
