// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Serialize;

/// 平时成绩表中的一行，单元格文本原样保留
pub type InternalMarksRow = Vec<String>;

/// 平时成绩评价
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MarksStatus {
    #[serde(rename = "No Marks")]
    NoMarks,
    Excellent,
    Good,
    Average,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
}

impl MarksStatus {
    pub fn from_total(total: f64) -> Self {
        if total == 0.0 {
            MarksStatus::NoMarks
        } else if total >= 80.0 {
            MarksStatus::Excellent
        } else if total >= 60.0 {
            MarksStatus::Good
        } else if total >= 40.0 {
            MarksStatus::Average
        } else {
            MarksStatus::NeedsImprovement
        }
    }
}

/// 单门课程的平时成绩摘要
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct InternalSummary {
    pub course_code: String,
    pub course_name: String,
    pub test1: Option<String>,
    pub test2: Option<String>,
    pub final_50: Option<String>,
    pub final_40: Option<String>,
    pub total: f64,
    pub status: MarksStatus,
}

/// 平时成绩页解析结果
#[derive(Debug, Clone, Default, Serialize)]
pub struct InternalMarks {
    pub rows: Vec<InternalMarksRow>,
    pub summaries: Vec<InternalSummary>,
}
