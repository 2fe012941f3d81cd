// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::application::dto::responses::{ApiInfoDto, NotFoundDto};

/// API 信息
pub async fn root() -> Json<ApiInfoDto> {
    Json(ApiInfoDto::new())
}

/// 未匹配的路由，返回可用接口列表
pub async fn fallback() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(NotFoundDto::default()))
}
