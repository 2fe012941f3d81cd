// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use nimora::application::use_cases::portal_use_case::StudentPortalUseCase;
use nimora::config::settings::Settings;
use nimora::engines::reqwest_engine::ReqwestPortal;
use nimora::engines::traits::PortalConnector;
use nimora::presentation::routes;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

use nimora::utils::telemetry;

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting nimora...");

    // 2. Load configuration
    let settings = Arc::new(Settings::new()?);
    info!(portal = %settings.portal.base_url, "Configuration loaded");

    // 3. Portal connector
    let connector: Arc<dyn PortalConnector> =
        Arc::new(ReqwestPortal::new(settings.portal.clone())?);
    let use_case = Arc::new(StudentPortalUseCase::new(connector, settings.clone()));

    // 4. Start HTTP server
    let app = routes::app(use_case, settings.clone());

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
    }
}
