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
use std::time::{Duration, Instant};

use async_trait::async_trait;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use tracing::{debug, info, warn};
use url::Url;

use crate::config::settings::PortalSettings;
use crate::domain::models::credentials::Credentials;
use crate::engines::traits::{
    EngineError, PortalConnector, PortalPage, PortalResponse, PortalSession,
};
use crate::utils::url_utils::{parse_base_url, resolve_url};

static INPUT: Lazy<Selector> = Lazy::new(|| Selector::parse("input").expect("valid selector"));

/// 门户连接器
///
/// 基于reqwest实现的表单登录，每次登录创建带独立 cookie 的客户端
pub struct ReqwestPortal {
    settings: Arc<PortalSettings>,
    base_url: Url,
}

impl ReqwestPortal {
    /// 创建连接器
    ///
    /// # 参数
    ///
    /// * `settings` - 门户配置
    ///
    /// # 返回值
    ///
    /// * `Err(EngineError::InvalidUrl)` - 门户根地址无法解析
    pub fn new(settings: PortalSettings) -> Result<Self, EngineError> {
        let base_url = parse_base_url(&settings.base_url)?;
        Ok(Self {
            settings: Arc::new(settings),
            base_url,
        })
    }

    fn client(&self) -> Result<reqwest::Client, EngineError> {
        let client = reqwest::Client::builder()
            .user_agent(self.settings.user_agent.as_str())
            .timeout(Duration::from_secs(self.settings.timeout_secs))
            .cookie_store(true)
            .build()?;
        Ok(client)
    }
}

#[async_trait]
impl PortalConnector for ReqwestPortal {
    /// 登录门户
    ///
    /// 先获取登录页以取得隐藏字段（ASP.NET 视图状态），再连同学号和密码提交。
    /// 提交后的页面仍包含密码输入框视为登录失败。
    async fn login(&self, credentials: &Credentials) -> Result<Box<dyn PortalSession>, EngineError> {
        let client = self.client()?;
        let login_url = resolve_url(&self.base_url, &self.settings.login_path)?;
        let start = Instant::now();

        let login_page = client
            .get(login_url.clone())
            .send()
            .await
            .map_err(EngineError::from_request)?
            .text()
            .await
            .map_err(EngineError::from_request)?;

        let Some(mut form) = login_form_fields(&login_page, &self.settings.password_field) else {
            warn!(url = %login_url, "Login form not found");
            return Err(EngineError::LoginFormNotFound);
        };
        form.push((
            self.settings.username_field.clone(),
            credentials.rollno.clone(),
        ));
        form.push((
            self.settings.password_field.clone(),
            credentials.password.clone(),
        ));
        form.push((
            self.settings.submit_field.clone(),
            self.settings.submit_value.clone(),
        ));

        let response = client
            .post(login_url)
            .form(&form)
            .send()
            .await
            .map_err(EngineError::from_request)?;
        let status = response.status();
        if status.is_server_error() {
            return Err(EngineError::UpstreamStatus(status.as_u16()));
        }
        let body = response.text().await.map_err(EngineError::from_request)?;

        if login_form_fields(&body, &self.settings.password_field).is_some() {
            info!(rollno = %credentials.rollno, "Portal rejected credentials");
            return Err(EngineError::InvalidCredentials);
        }

        debug!(
            rollno = %credentials.rollno,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Logged in to portal"
        );
        Ok(Box::new(ReqwestSession {
            client,
            settings: Arc::clone(&self.settings),
            base_url: self.base_url.clone(),
        }))
    }

    fn name(&self) -> &'static str {
        "reqwest"
    }
}

/// 已登录会话，cookie 保存在客户端中
struct ReqwestSession {
    client: reqwest::Client,
    settings: Arc<PortalSettings>,
    base_url: Url,
}

#[async_trait]
impl PortalSession for ReqwestSession {
    async fn fetch_page(&self, page: PortalPage) -> Result<PortalResponse, EngineError> {
        let url = resolve_url(&self.base_url, page.path(&self.settings))?;
        let start = Instant::now();

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(EngineError::from_request)?;

        let status_code = response.status().as_u16();
        let final_url = response.url().to_string();
        if response.status().is_server_error() {
            warn!(page = page.name(), status_code, "Portal page failed");
            return Err(EngineError::UpstreamStatus(status_code));
        }

        let content = response.text().await.map_err(EngineError::from_request)?;
        let response_time_ms = start.elapsed().as_millis() as u64;
        debug!(page = page.name(), status_code, response_time_ms, "Fetched portal page");

        Ok(PortalResponse {
            url: final_url,
            status_code,
            content,
            response_time_ms,
        })
    }
}

/// 读取登录表单的隐藏字段
///
/// 页面中没有名为 `password_field` 的输入框时返回 `None`
fn login_form_fields(html: &str, password_field: &str) -> Option<Vec<(String, String)>> {
    let document = Html::parse_document(html);
    let mut has_password = false;
    let mut hidden = Vec::new();

    for input in document.select(&INPUT) {
        let element = input.value();
        let Some(name) = element.attr("name") else {
            continue;
        };
        if name == password_field {
            has_password = true;
        }
        if element
            .attr("type")
            .is_some_and(|t| t.eq_ignore_ascii_case("hidden"))
        {
            hidden.push((
                name.to_string(),
                element.attr("value").unwrap_or_default().to_string(),
            ));
        }
    }

    has_password.then_some(hidden)
}

#[cfg(test)]
#[path = "reqwest_engine_test.rs"]
mod tests;
