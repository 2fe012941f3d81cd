// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::RequestFormat;
use crate::domain::models::credentials::Credentials;

/// 登录凭据请求
///
/// 所有需要登录门户的接口共用；`threshold` 只对 `/login` 有意义
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct CredentialsRequestDto {
    /// 学号
    #[validate(length(min = 1, message = "rollno must not be empty"))]
    pub rollno: String,
    /// 门户密码
    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: String,
    /// 出勤率阈值（百分比）
    #[serde(default)]
    #[validate(range(min = 1, max = 99))]
    pub threshold: Option<u32>,
}

impl RequestFormat for CredentialsRequestDto {
    const REQUIRED_FORMAT: &'static [(&'static str, &'static str)] = &[
        ("rollno", "Your roll number"),
        ("password", "Your password"),
    ];
}

impl CredentialsRequestDto {
    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.rollno.trim(), self.password.as_str())
    }
}
