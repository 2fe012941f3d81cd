// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{Extension, Json};
use std::sync::Arc;

use crate::application::dto::credentials_request::CredentialsRequestDto;
use crate::application::dto::responses::ProfileResponseDto;
use crate::application::use_cases::portal_use_case::StudentPortalUseCase;
use crate::presentation::errors::AppError;
use crate::presentation::extractors::encoded_json::EncodedJson;

pub async fn profile(
    Extension(use_case): Extension<Arc<StudentPortalUseCase>>,
    EncodedJson(payload): EncodedJson<CredentialsRequestDto>,
) -> Result<Json<ProfileResponseDto>, AppError> {
    let profile = use_case.profile(&payload.credentials()).await?;
    Ok(Json(profile))
}
