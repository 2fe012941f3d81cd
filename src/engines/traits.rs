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

use async_trait::async_trait;
use thiserror::Error;

use crate::config::settings::PortalSettings;
use crate::domain::models::credentials::Credentials;

/// 引擎错误类型
#[derive(Error, Debug)]
pub enum EngineError {
    /// 请求失败
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    /// 学号或密码错误
    #[error("Invalid credentials")]
    InvalidCredentials,
    /// 登录页中找不到登录表单
    #[error("Login form not found on portal page")]
    LoginFormNotFound,
    /// 门户地址无效
    #[error("Invalid portal URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// 门户返回服务端错误
    #[error("Portal responded with status {0}")]
    UpstreamStatus(u16),
    /// 超时
    #[error("Timeout")]
    Timeout,
}

impl EngineError {
    /// 将 reqwest 错误归类，超时单独区分
    pub fn from_request(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            EngineError::Timeout
        } else {
            EngineError::RequestFailed(error)
        }
    }
}

/// 门户页面
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PortalPage {
    Attendance,
    Courses,
    ExamSchedule,
    InternalMarks,
    Profile,
}

impl PortalPage {
    /// 页面相对于门户根地址的路径
    pub fn path<'a>(&self, settings: &'a PortalSettings) -> &'a str {
        match self {
            PortalPage::Attendance => &settings.attendance_path,
            PortalPage::Courses => &settings.courses_path,
            PortalPage::ExamSchedule => &settings.exam_schedule_path,
            PortalPage::InternalMarks => &settings.internals_path,
            PortalPage::Profile => &settings.profile_path,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PortalPage::Attendance => "attendance",
            PortalPage::Courses => "courses",
            PortalPage::ExamSchedule => "exam_schedule",
            PortalPage::InternalMarks => "internal_marks",
            PortalPage::Profile => "profile",
        }
    }
}

/// 页面响应
#[derive(Debug, Clone)]
pub struct PortalResponse {
    /// 最终 URL（跟随重定向后）
    pub url: String,
    /// HTTP状态码
    pub status_code: u16,
    /// 响应内容
    pub content: String,
    /// 响应时间（毫秒）
    pub response_time_ms: u64,
}

/// 已登录的门户会话
#[async_trait]
pub trait PortalSession: Send + Sync {
    /// 获取页面
    async fn fetch_page(&self, page: PortalPage) -> Result<PortalResponse, EngineError>;
}

/// 门户连接器特质
///
/// 每次登录得到一个独立会话，会话之间不共享 cookie
#[async_trait]
pub trait PortalConnector: Send + Sync {
    /// 使用学号和密码登录
    async fn login(&self, credentials: &Credentials) -> Result<Box<dyn PortalSession>, EngineError>;

    /// 连接器名称
    fn name(&self) -> &'static str;
}
