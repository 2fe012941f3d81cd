// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{create_test_server, credentials, fixtures, MockPortal, PASSWORD};
use axum::http::StatusCode;
use nimora::engines::traits::PortalPage;
use nimora::utils::payload::PayloadCodec;
use serde_json::{json, Value};
use std::sync::Arc;

#[tokio::test]
async fn test_login_returns_attendance_with_leaves() {
    let server = create_test_server(Arc::new(MockPortal::full()));

    let response = server.post("/login").json(&credentials()).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<Value>();
    assert_eq!(body[0]["course_code"], "20XW51 - THEORY");
    assert_eq!(body[0]["affordable_leaves"], 11);
    assert_eq!(body[0]["threshold"], 70);
    assert_eq!(body[1]["affordable_leaves"], -10);
}

#[tokio::test]
async fn test_login_with_custom_threshold() {
    let server = create_test_server(Arc::new(MockPortal::full()));

    let response = server
        .post("/login")
        .json(&json!({ "rollno": "21z201", "password": PASSWORD, "threshold": 90 }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<Value>();
    assert_eq!(body[0]["threshold"], 90);
    assert_eq!(body[0]["affordable_leaves"], 0);
}

#[tokio::test]
async fn test_invalid_credentials_return_401() {
    let server = create_test_server(Arc::new(MockPortal::full()));

    let response = server
        .post("/attendance")
        .json(&json!({ "rollno": "21z201", "password": "wrong" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(response.json::<Value>()["detail"], "Invalid credentials");
}

#[tokio::test]
async fn test_attendance_records() {
    let server = create_test_server(Arc::new(MockPortal::full()));

    let response = server.post("/attendance").json(&credentials()).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>()[1],
        json!({
            "course_code": "20XW52 - LAB",
            "total_classes": 30,
            "present": 18,
            "absent": 12,
            "percentage": "60"
        })
    );
}

#[tokio::test]
async fn test_missing_attendance_table_returns_404() {
    let server = create_test_server(Arc::new(MockPortal::new(&[])));

    let response = server.post("/attendance").json(&credentials()).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cgpa_ledger() {
    let server = create_test_server(Arc::new(MockPortal::full()));

    let response = server.post("/cgpa").json(&credentials()).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<Value>();
    assert_eq!(body.as_array().unwrap().len(), 2);
    assert_eq!(body[0]["GPA"], "9.5714");
    assert_eq!(body[1]["GPA"], "7.5714");
    assert_eq!(body[1]["CGPA"], "8.5714");
    assert_eq!(body[1]["TOTAL_CREDITS"], 14);
    assert_eq!(body[1]["TOTAL_POINTS"], 120);
}

#[tokio::test]
async fn test_cgpa_for_new_student_is_empty() {
    let server = create_test_server(Arc::new(MockPortal::new(&[(
        PortalPage::Courses,
        fixtures::NEW_STUDENT_COURSE_PAGE,
    )])));

    let response = server.post("/cgpa").json(&credentials()).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!([]));
}

#[tokio::test]
async fn test_predict_courses() {
    let server = create_test_server(Arc::new(MockPortal::full()));

    let response = server.post("/predict-courses").json(&credentials()).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<Value>();
    assert_eq!(
        body["courses"],
        json!([{ "course_code": "20XW51" }, { "course_code": "20XW52" }])
    );
    assert_eq!(body["previous_cgpa"], 8.5714);
    assert_eq!(body["total_credits"], 14);
    assert_eq!(body["total_points"], 120);
    assert!(body.get("error").is_none());
}

#[tokio::test]
async fn test_predict_cgpa() {
    let server = create_test_server(Arc::new(MockPortal::new(&[])));

    let response = server
        .post("/predict-cgpa")
        .json(&json!({
            "total_credits": 14,
            "total_points": 120,
            "courses": [
                { "course_code": "20XW51", "credits": 4, "grade": "O" },
                { "course_code": "20XW52", "credits": 3, "grade": "A" }
            ]
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<Value>();
    assert_eq!(body["semester_gpa"], "9.1429");
    assert_eq!(body["new_cgpa"], "8.7619");
}

#[tokio::test]
async fn test_predict_cgpa_rejects_unknown_grade() {
    let server = create_test_server(Arc::new(MockPortal::new(&[])));

    let response = server
        .post("/predict-cgpa")
        .json(&json!({
            "courses": [{ "course_code": "20XW51", "credits": 4, "grade": "Z" }]
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = response.json::<Value>();
    assert!(body["required_format"]["courses"].is_string());
    assert!(body["required_format"].get("rollno").is_none());
}

#[tokio::test]
async fn test_predict_cgpa_rejects_oversized_totals() {
    let server = create_test_server(Arc::new(MockPortal::new(&[])));

    let response = server
        .post("/predict-cgpa")
        .json(&json!({
            "total_credits": u32::MAX,
            "total_points": u32::MAX,
            "courses": [{ "course_code": "20XW51", "credits": 4, "grade": "O" }]
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_exam_schedule() {
    let server = create_test_server(Arc::new(MockPortal::full()));

    let response = server.post("/exam-schedule").json(&credentials()).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<Value>();
    assert_eq!(
        body["exams"][0]["COURSE_CODE"],
        "20XW51   -   Theory of Computing"
    );
    assert_eq!(body["exams"][0]["DATE"], "12-03-25");
    assert_eq!(body["exams"][0]["TIME"], "09:30 AM");
    assert!(body.get("message").is_none());
}

#[tokio::test]
async fn test_empty_exam_schedule() {
    let server = create_test_server(Arc::new(MockPortal::new(&[])));

    let response = server.post("/exam-schedule").json(&credentials()).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({ "exams": [], "message": "No upcoming exams found." })
    );
}

#[tokio::test]
async fn test_internals() {
    let server = create_test_server(Arc::new(MockPortal::full()));

    let response = server.post("/internals").json(&credentials()).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<Value>();
    assert_eq!(body["internals"][0][0], "20XW51");
    assert_eq!(body["summaries"][0]["total"], 85.0);
    assert_eq!(body["summaries"][0]["status"], "Excellent");
    assert_eq!(body["message"], "Internal marks retrieved successfully.");
}

#[tokio::test]
async fn test_profile() {
    let server = create_test_server(Arc::new(MockPortal::full()));

    let response = server.post("/profile").json(&credentials()).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({ "profile": { "Roll No": "21Z201", "Name": "Asha R" } })
    );
}

#[tokio::test]
async fn test_diagnose_cgpa() {
    let server = create_test_server(Arc::new(MockPortal::full()));

    let response = server.post("/diagnose-cgpa").json(&credentials()).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<Value>();
    assert_eq!(body["status"], "success");
    assert_eq!(body["pdg_course_exists"], true);
    assert_eq!(body["prettydatagrid3_exists"], true);
    assert_eq!(body["login_successful"], true);
}

#[tokio::test]
async fn test_encoded_payload_is_accepted() {
    let server = create_test_server(Arc::new(MockPortal::full()));
    let encoded = PayloadCodec::new("nimora_secure_payload_2025")
        .encode(&credentials())
        .unwrap();

    let response = server
        .post("/attendance")
        .json(&json!({ "data": encoded }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>().as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_payload_with_wrong_salt_is_rejected() {
    let server = create_test_server(Arc::new(MockPortal::full()));
    let encoded = PayloadCodec::new("another_salt")
        .encode(&credentials())
        .unwrap();

    let response = server
        .post("/attendance")
        .json(&json!({ "data": encoded }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_missing_fields_return_422_with_required_format() {
    let server = create_test_server(Arc::new(MockPortal::full()));

    let response = server
        .post("/cgpa")
        .json(&json!({ "rollno": "21z201" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = response.json::<Value>();
    assert_eq!(body["detail"], "Invalid request parameters");
    assert_eq!(body["required_format"]["rollno"], "Your roll number");
}

#[tokio::test]
async fn test_out_of_range_threshold_is_rejected() {
    let server = create_test_server(Arc::new(MockPortal::full()));

    let response = server
        .post("/login")
        .json(&json!({ "rollno": "21z201", "password": PASSWORD, "threshold": 0 }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_unknown_endpoint_lists_available_endpoints() {
    let server = create_test_server(Arc::new(MockPortal::full()));

    let response = server.get("/does-not-exist").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body = response.json::<Value>();
    assert_eq!(
        body["detail"],
        "Endpoint not found. Please check the API documentation."
    );
    assert!(body["available_endpoints"]["/cgpa"].is_string());
}

#[tokio::test]
async fn test_root_describes_api() {
    let server = create_test_server(Arc::new(MockPortal::full()));

    let response = server.get("/").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<Value>();
    assert_eq!(body["name"], "Nimora Student Information API");
    assert_eq!(body["status"], "online");
}
