// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Serialize;

/// 考试安排条目
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ExamEntry {
    /// `课程代码   -   课程名称`
    #[serde(rename = "COURSE_CODE")]
    pub course_code: String,
    #[serde(rename = "DATE")]
    pub date: String,
    #[serde(rename = "TIME")]
    pub time: String,
    #[serde(rename = "DAYS_REMAINING", skip_serializing_if = "Option::is_none")]
    pub days_remaining: Option<i64>,
}
