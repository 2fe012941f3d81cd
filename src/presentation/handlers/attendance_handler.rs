// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{Extension, Json};
use std::sync::Arc;

use crate::application::dto::credentials_request::CredentialsRequestDto;
use crate::application::use_cases::portal_use_case::StudentPortalUseCase;
use crate::domain::models::attendance::{AttendanceRecord, AttendanceReport};
use crate::presentation::errors::AppError;
use crate::presentation::extractors::encoded_json::EncodedJson;

/// 登录并返回附带可缺勤节数的考勤
pub async fn login(
    Extension(use_case): Extension<Arc<StudentPortalUseCase>>,
    EncodedJson(payload): EncodedJson<CredentialsRequestDto>,
) -> Result<Json<Vec<AttendanceReport>>, AppError> {
    let reports = use_case
        .attendance_report(&payload.credentials(), payload.threshold)
        .await?;
    Ok(Json(reports))
}

pub async fn attendance(
    Extension(use_case): Extension<Arc<StudentPortalUseCase>>,
    EncodedJson(payload): EncodedJson<CredentialsRequestDto>,
) -> Result<Json<Vec<AttendanceRecord>>, AppError> {
    let records = use_case.attendance(&payload.credentials()).await?;
    Ok(Json(records))
}
