// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::routing::post;
use axum::Router;

use crate::presentation::handlers::{
    attendance_handler, cgpa_handler, exam_handler, internals_handler, profile_handler,
};

/// 创建需要门户凭据的路由
///
/// # 返回值
///
/// 返回配置好的门户路由
pub fn portal_routes() -> Router {
    Router::new()
        .route("/login", post(attendance_handler::login))
        .route("/attendance", post(attendance_handler::attendance))
        .route("/cgpa", post(cgpa_handler::cgpa))
        .route("/predict-courses", post(cgpa_handler::predict_courses))
        .route("/predict-cgpa", post(cgpa_handler::predict_cgpa))
        .route("/diagnose-cgpa", post(cgpa_handler::diagnose_cgpa))
        .route("/exam-schedule", post(exam_handler::exam_schedule))
        .route("/internals", post(internals_handler::internals))
        .route("/profile", post(profile_handler::profile))
}
