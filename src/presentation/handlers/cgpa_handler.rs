// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{Extension, Json};
use std::sync::Arc;

use crate::application::dto::credentials_request::CredentialsRequestDto;
use crate::application::dto::prediction::{PredictCgpaRequestDto, PredictCoursesResponseDto};
use crate::application::use_cases::portal_use_case::StudentPortalUseCase;
use crate::domain::models::semester::{Projection, SemesterRecord};
use crate::domain::services::diagnostics_service::CourseDiagnostics;
use crate::presentation::errors::AppError;
use crate::presentation::extractors::encoded_json::EncodedJson;

/// 学期 GPA/CGPA 台账，新生返回空数组
pub async fn cgpa(
    Extension(use_case): Extension<Arc<StudentPortalUseCase>>,
    EncodedJson(payload): EncodedJson<CredentialsRequestDto>,
) -> Result<Json<Vec<SemesterRecord>>, AppError> {
    let ledger = use_case.cgpa(&payload.credentials()).await?;
    Ok(Json(ledger))
}

pub async fn predict_courses(
    Extension(use_case): Extension<Arc<StudentPortalUseCase>>,
    EncodedJson(payload): EncodedJson<CredentialsRequestDto>,
) -> Result<Json<PredictCoursesResponseDto>, AppError> {
    let response = use_case.predict_courses(&payload.credentials()).await?;
    Ok(Json(response))
}

pub async fn predict_cgpa(
    Extension(use_case): Extension<Arc<StudentPortalUseCase>>,
    EncodedJson(payload): EncodedJson<PredictCgpaRequestDto>,
) -> Result<Json<Projection>, AppError> {
    let projection = use_case.predict_cgpa(payload)?;
    Ok(Json(projection))
}

pub async fn diagnose_cgpa(
    Extension(use_case): Extension<Arc<StudentPortalUseCase>>,
    EncodedJson(payload): EncodedJson<CredentialsRequestDto>,
) -> Result<Json<CourseDiagnostics>, AppError> {
    let report = use_case.diagnose_cgpa(&payload.credentials()).await?;
    Ok(Json(report))
}
