// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use axum::Router;
use axum_test::TestServer;
use nimora::application::use_cases::portal_use_case::StudentPortalUseCase;
use nimora::config::settings::Settings;
use nimora::domain::models::credentials::Credentials;
use nimora::engines::traits::{
    EngineError, PortalConnector, PortalPage, PortalResponse, PortalSession,
};
use nimora::presentation::routes;
use std::collections::HashMap;
use std::sync::Arc;

pub mod fixtures;

pub const PASSWORD: &str = "secret";

/// 内存中的门户，按页面返回固定 HTML
pub struct MockPortal {
    pages: HashMap<PortalPage, String>,
}

impl MockPortal {
    pub fn new(pages: &[(PortalPage, &str)]) -> Self {
        Self {
            pages: pages
                .iter()
                .map(|(page, html)| (*page, html.to_string()))
                .collect(),
        }
    }

    /// 所有页面都有数据的门户
    pub fn full() -> Self {
        Self::new(&[
            (PortalPage::Attendance, fixtures::ATTENDANCE_PAGE),
            (PortalPage::Courses, fixtures::COURSE_PAGE),
            (PortalPage::ExamSchedule, fixtures::EXAM_PAGE),
            (PortalPage::InternalMarks, fixtures::INTERNALS_PAGE),
            (PortalPage::Profile, fixtures::PROFILE_PAGE),
        ])
    }
}

struct MockSession {
    pages: HashMap<PortalPage, String>,
}

#[async_trait]
impl PortalConnector for MockPortal {
    async fn login(&self, credentials: &Credentials) -> Result<Box<dyn PortalSession>, EngineError> {
        if credentials.password != PASSWORD {
            return Err(EngineError::InvalidCredentials);
        }
        Ok(Box::new(MockSession {
            pages: self.pages.clone(),
        }))
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

#[async_trait]
impl PortalSession for MockSession {
    async fn fetch_page(&self, page: PortalPage) -> Result<PortalResponse, EngineError> {
        let content = self
            .pages
            .get(&page)
            .cloned()
            .unwrap_or_else(|| "<html><body></body></html>".to_string());
        Ok(PortalResponse {
            url: format!("http://portal.test/{}", page.name()),
            status_code: 200,
            content,
            response_time_ms: 0,
        })
    }
}

pub fn test_settings() -> Arc<Settings> {
    Arc::new(Settings::new().expect("default settings should load"))
}

/// 基于给定连接器组装应用
pub fn create_test_app(connector: Arc<dyn PortalConnector>) -> Router {
    let settings = test_settings();
    let use_case = Arc::new(StudentPortalUseCase::new(connector, settings.clone()));
    routes::app(use_case, settings)
}

/// 基于给定连接器创建测试服务器
pub fn create_test_server(connector: Arc<dyn PortalConnector>) -> TestServer {
    TestServer::new(create_test_app(connector)).unwrap()
}

pub fn credentials() -> serde_json::Value {
    serde_json::json!({ "rollno": "21z201", "password": PASSWORD })
}
