// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{Extension, Json};
use chrono::Local;
use std::sync::Arc;

use crate::application::dto::credentials_request::CredentialsRequestDto;
use crate::application::dto::responses::ExamScheduleResponseDto;
use crate::application::use_cases::portal_use_case::StudentPortalUseCase;
use crate::presentation::errors::AppError;
use crate::presentation::extractors::encoded_json::EncodedJson;

/// 考试安排，剩余天数按服务器本地日期计算
pub async fn exam_schedule(
    Extension(use_case): Extension<Arc<StudentPortalUseCase>>,
    EncodedJson(payload): EncodedJson<CredentialsRequestDto>,
) -> Result<Json<ExamScheduleResponseDto>, AppError> {
    let today = Local::now().date_naive();
    let schedule = use_case
        .exam_schedule(&payload.credentials(), today)
        .await?;
    Ok(Json(schedule))
}
