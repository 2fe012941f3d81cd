// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::domain::services::cgpa_service::{COMPLETED_TABLE_ID, CURRENT_TABLE_ID};

static TABLE_ID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)id="([^"]*table[^"]*)""#).expect("Failed to compile table id regex")
});

/// 课程页诊断信息
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CourseDiagnostics {
    pub status: &'static str,
    pub page_url: String,
    pub page_status_code: u16,
    pub page_size: usize,
    pub table_ids_found: Vec<String>,
    pub pdg_course_exists: bool,
    pub prettydatagrid3_exists: bool,
    pub login_successful: bool,
}

/// 诊断服务
///
/// CGPA 计算失败时用于检查课程页的结构
pub struct DiagnosticsService;

impl DiagnosticsService {
    pub fn diagnose_course_page(page_url: &str, status_code: u16, body: &str) -> CourseDiagnostics {
        CourseDiagnostics {
            status: "success",
            page_url: page_url.to_string(),
            page_status_code: status_code,
            page_size: body.chars().count(),
            table_ids_found: TABLE_ID
                .captures_iter(body)
                .map(|c| c[1].to_string())
                .collect(),
            pdg_course_exists: body.contains(COMPLETED_TABLE_ID),
            prettydatagrid3_exists: body.contains(CURRENT_TABLE_ID),
            login_successful: true,
        }
    }
}
