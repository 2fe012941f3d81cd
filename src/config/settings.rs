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

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// 应用程序配置设置
///
/// 包含服务器、教务门户、请求载荷、考勤和跨域等所有配置项
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 服务器配置
    pub server: ServerSettings,
    /// 教务门户配置
    pub portal: PortalSettings,
    /// 请求载荷编码配置
    pub payload: PayloadSettings,
    /// 考勤计算配置
    pub attendance: AttendanceSettings,
    /// 跨域配置
    pub cors: CorsSettings,
}

/// 服务器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// 教务门户配置设置
///
/// 所有页面路径均相对于 `base_url`
#[derive(Debug, Clone, Deserialize)]
pub struct PortalSettings {
    /// 门户根地址
    pub base_url: String,
    /// 登录页路径
    pub login_path: String,
    /// 考勤页路径
    pub attendance_path: String,
    /// 课程/成绩页路径
    pub courses_path: String,
    /// 考试安排页路径
    pub exam_schedule_path: String,
    /// 平时成绩页路径
    pub internals_path: String,
    /// 个人信息页路径
    pub profile_path: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
    /// 请求使用的 User-Agent
    pub user_agent: String,
    /// 登录表单中的学号字段名
    pub username_field: String,
    /// 登录表单中的密码字段名
    pub password_field: String,
    /// 登录表单提交按钮字段名
    pub submit_field: String,
    /// 登录表单提交按钮的值
    pub submit_value: String,
    /// 平时成绩表格的 id（可选，缺省时按表头查找）
    pub internals_table_id: Option<String>,
}

/// 请求载荷配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct PayloadSettings {
    /// 编码载荷使用的盐值
    pub salt: String,
}

/// 考勤配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct AttendanceSettings {
    /// 默认出勤率阈值（百分比）
    pub default_threshold: u32,
}

/// 跨域配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct CorsSettings {
    /// 允许的来源，逗号分隔，`*` 表示全部
    pub allowed_origins: String,
}

impl CorsSettings {
    /// 解析允许的来源列表
    ///
    /// 返回 `None` 表示允许全部来源
    pub fn origins(&self) -> Option<Vec<String>> {
        let origins: Vec<String> = self
            .allowed_origins
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        if origins.is_empty() || origins.iter().any(|o| o == "*") {
            None
        } else {
            Some(origins)
        }
    }
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从默认值、配置文件和环境变量依次加载配置
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Start with default settings
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            // Default portal settings
            .set_default("portal.base_url", "https://ecampus.psgtech.ac.in")?
            .set_default("portal.login_path", "/studzone2/")?
            .set_default("portal.attendance_path", "/studzone2/AttWfPercView.aspx")?
            .set_default(
                "portal.courses_path",
                "/studzone2/AttWfStudCourseSelection.aspx",
            )?
            .set_default(
                "portal.exam_schedule_path",
                "/studzone/ContinuousAssessment/CATestTimeTable",
            )?
            .set_default("portal.internals_path", "/studzone2/CAMarks_View.aspx")?
            .set_default("portal.profile_path", "/studzone2/AttWfStudProfile.aspx")?
            .set_default("portal.timeout_secs", 30)?
            .set_default(
                "portal.user_agent",
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36",
            )?
            .set_default("portal.username_field", "txtusercheck")?
            .set_default("portal.password_field", "txtpwdcheck")?
            .set_default("portal.submit_field", "abcd3")?
            .set_default("portal.submit_value", "Login")?
            // Default payload settings
            .set_default("payload.salt", "nimora_secure_payload_2025")?
            // Default attendance settings
            .set_default("attendance.default_threshold", 70)?
            // Default CORS settings
            .set_default("cors.allowed_origins", "*")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("NIMORA").separator("__"));

        builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
