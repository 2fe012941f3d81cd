// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::sync::Arc;

use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;
use validator::Validate;

use crate::application::dto::RequestFormat;
use crate::config::settings::Settings;
use crate::presentation::errors::AppError;
use crate::utils::errors::ValidationError;
use crate::utils::payload::PayloadCodec;

/// 请求体提取器
///
/// 接受明文 JSON，或形如 `{"data": "<编码载荷>"}` 的编码请求体，
/// 解码后执行 `validator` 校验。编码所用的盐值来自 `Extension<Arc<Settings>>`。
pub struct EncodedJson<T>(pub T);

impl<S, T> FromRequest<S> for EncodedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate + RequestFormat,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let settings = req
            .extensions()
            .get::<Arc<Settings>>()
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Settings extension is not configured"))?;

        let invalid = |reason: String| ValidationError::new(reason).with_format(T::REQUIRED_FORMAT);

        let Json(body) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| invalid(rejection.body_text()))?;

        let value: T = match encoded_payload(&body) {
            Some(encoded) => {
                debug!("Decoding encoded request payload");
                PayloadCodec::new(settings.payload.salt.as_str())
                    .decode(encoded)
                    .map_err(|e| invalid(e.to_string()))?
            }
            None => serde_json::from_value(body).map_err(|e| invalid(e.to_string()))?,
        };

        value.validate().map_err(|e| invalid(e.to_string()))?;
        Ok(Self(value))
    }
}

/// `{"data": "..."}` 且没有其他字段时视为编码载荷
fn encoded_payload(body: &Value) -> Option<&str> {
    let object = body.as_object()?;
    if object.len() != 1 {
        return None;
    }
    object.get("data")?.as_str()
}
