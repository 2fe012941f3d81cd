// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 通过真实的 reqwest 连接器访问进程内模拟门户，覆盖登录、cookie 与页面解析的完整链路

use super::helpers::{fixtures, PASSWORD};
use axum::{
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Form, Router,
};
use axum_test::TestServer;
use nimora::application::use_cases::portal_use_case::StudentPortalUseCase;
use nimora::config::settings::Settings;
use nimora::engines::reqwest_engine::ReqwestPortal;
use nimora::presentation::routes;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::net::TcpListener;

const LOGIN_FORM: &str = r#"<html><body><form method="post">
    <input type="hidden" name="__VIEWSTATE" value="state-1" />
    <input type="hidden" name="__EVENTVALIDATION" value="ev-1" />
    <input type="text" name="txtusercheck" />
    <input type="password" name="txtpwdcheck" />
    <input type="submit" name="abcd3" value="Login" />
</form></body></html>"#;

async fn submit_login(Form(form): Form<HashMap<String, String>>) -> Response {
    let accepted = form.get("__VIEWSTATE").map(String::as_str) == Some("state-1")
        && form.get("__EVENTVALIDATION").map(String::as_str) == Some("ev-1")
        && form.get("txtpwdcheck").map(String::as_str) == Some(PASSWORD);

    if accepted {
        (
            [(header::SET_COOKIE, "ASP.NET_SessionId=abc123; Path=/")],
            "<html><body>Home</body></html>",
        )
            .into_response()
    } else {
        LOGIN_FORM.into_response()
    }
}

fn protected(headers: &HeaderMap, page: &'static str) -> Response {
    let logged_in = headers
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|c| c.contains("ASP.NET_SessionId=abc123"));

    if logged_in {
        page.into_response()
    } else {
        (StatusCode::OK, LOGIN_FORM).into_response()
    }
}

async fn start_mock_portal() -> String {
    let app = Router::new()
        .route("/studzone2/", get(|| async { LOGIN_FORM }).post(submit_login))
        .route(
            "/studzone2/AttWfPercView.aspx",
            get(|headers: HeaderMap| async move { protected(&headers, fixtures::ATTENDANCE_PAGE) }),
        )
        .route(
            "/studzone2/AttWfStudCourseSelection.aspx",
            get(|headers: HeaderMap| async move { protected(&headers, fixtures::COURSE_PAGE) }),
        );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

async fn create_portal_server() -> TestServer {
    let portal_url = start_mock_portal().await;

    let mut settings = Settings::new().expect("default settings should load");
    settings.portal.base_url = portal_url;
    settings.portal.timeout_secs = 5;
    let settings = Arc::new(settings);

    let connector = Arc::new(ReqwestPortal::new(settings.portal.clone()).unwrap());
    let use_case = Arc::new(StudentPortalUseCase::new(connector, settings.clone()));
    TestServer::new(routes::app(use_case, settings)).unwrap()
}

#[tokio::test]
async fn test_cgpa_through_portal_session() {
    let server = create_portal_server().await;

    let response = server
        .post("/cgpa")
        .json(&json!({ "rollno": "21z201", "password": PASSWORD }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<Value>();
    assert_eq!(body[1]["CGPA"], "8.5714");
}

#[tokio::test]
async fn test_rejected_login_through_portal() {
    let server = create_portal_server().await;

    let response = server
        .post("/login")
        .json(&json!({ "rollno": "21z201", "password": "nope" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_predict_courses_through_portal_session() {
    let server = create_portal_server().await;

    let response = server
        .post("/predict-courses")
        .json(&json!({ "rollno": "21z201", "password": PASSWORD }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<Value>();
    assert_eq!(body["courses"][0]["course_code"], "20XW51");
    assert_eq!(body["total_credits"], 14);
}
