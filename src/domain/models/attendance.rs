// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 单门课程的考勤记录
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AttendanceRecord {
    pub course_code: String,
    pub total_classes: u32,
    pub present: u32,
    pub absent: u32,
    /// 门户显示的出勤百分比，原样保留
    pub percentage: String,
}

impl AttendanceRecord {
    pub fn new(course_code: String, total_classes: u32, present: u32, percentage: String) -> Self {
        Self {
            course_code,
            total_classes,
            present,
            absent: total_classes.saturating_sub(present),
            percentage,
        }
    }
}

/// 带可请假次数的考勤记录
///
/// `affordable_leaves` 为负数时，其绝对值表示还需连续出勤的课时数
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AttendanceReport {
    #[serde(flatten)]
    pub record: AttendanceRecord,
    pub affordable_leaves: i64,
    pub threshold: u32,
}
