// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// 载荷编解码错误
#[derive(Error, Debug)]
pub enum PayloadError {
    #[error("payload is not valid base64")]
    InvalidEncoding,

    #[error("payload salt does not match")]
    SaltMismatch,

    #[error("payload is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// 客户端载荷编解码器
///
/// 编码方式：`base64(reverse(base64(json)) + salt)`
#[derive(Debug, Clone)]
pub struct PayloadCodec {
    salt: String,
}

impl PayloadCodec {
    pub fn new(salt: impl Into<String>) -> Self {
        Self { salt: salt.into() }
    }

    pub fn encode<T: Serialize>(&self, value: &T) -> Result<String, PayloadError> {
        let json = serde_json::to_string(value)?;
        let inner = STANDARD.encode(json.as_bytes());
        let reversed: String = inner.chars().rev().collect();
        Ok(STANDARD.encode(format!("{}{}", reversed, self.salt)))
    }

    pub fn decode<T: DeserializeOwned>(&self, encoded: &str) -> Result<T, PayloadError> {
        let outer = STANDARD
            .decode(encoded.trim())
            .map_err(|_| PayloadError::InvalidEncoding)?;
        let outer = String::from_utf8(outer).map_err(|_| PayloadError::InvalidEncoding)?;

        let reversed = outer
            .strip_suffix(self.salt.as_str())
            .ok_or(PayloadError::SaltMismatch)?;
        let inner: String = reversed.chars().rev().collect();

        let json = STANDARD
            .decode(inner)
            .map_err(|_| PayloadError::InvalidEncoding)?;
        Ok(serde_json::from_slice(&json)?)
    }
}
