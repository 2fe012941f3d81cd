// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use axum::http::{HeaderValue, Method};
use axum::{routing::get, Extension, Router};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::application::use_cases::portal_use_case::StudentPortalUseCase;
use crate::config::settings::{CorsSettings, Settings};
use crate::presentation::handlers::info_handler;

pub mod portal;

/// 创建应用路由
///
/// # 返回值
///
/// 返回配置好的路由
pub fn routes() -> Router {
    let public_routes = Router::new()
        .route("/", get(info_handler::root))
        .route("/health", get(health_check))
        .route("/v1/version", get(version));

    Router::new()
        .merge(public_routes)
        .merge(portal::portal_routes())
        .fallback(info_handler::fallback)
}

/// 组装完整应用：路由、共享状态、跨域与请求追踪
pub fn app(use_case: Arc<StudentPortalUseCase>, settings: Arc<Settings>) -> Router {
    let cors = cors_layer(&settings.cors);

    routes()
        .layer(Extension(use_case))
        .layer(Extension(settings))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(settings: &CorsSettings) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    match settings.origins() {
        None => layer.allow_origin(Any),
        Some(origins) => {
            let origins: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|origin| match HeaderValue::from_str(origin) {
                    Ok(value) => Some(value),
                    Err(_) => {
                        warn!(origin = %origin, "Ignoring invalid CORS origin");
                        None
                    }
                })
                .collect();
            layer.allow_origin(AllowOrigin::list(origins))
        }
    }
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
