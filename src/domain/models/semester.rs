// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize, Serializer};

use crate::domain::models::course::Grade;

/// 学期成绩记录
///
/// 未计算的学期 GPA、CGPA、学分输出为 `"-"`
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SemesterRecord {
    #[serde(rename = "SEMESTER")]
    pub semester: u32,
    #[serde(rename = "GPA", serialize_with = "dash_if_none")]
    pub gpa: Option<String>,
    #[serde(rename = "CGPA", serialize_with = "dash_if_none")]
    pub cgpa: Option<String>,
    #[serde(rename = "CREDITS", serialize_with = "dash_if_none")]
    pub credits: Option<u32>,
    #[serde(rename = "TOTAL_CREDITS")]
    pub total_credits: u32,
    #[serde(rename = "TOTAL_POINTS")]
    pub total_points: u32,
}

impl SemesterRecord {
    /// 未计算学期：只携带累计值
    pub fn pending(semester: u32, total_credits: u32, total_points: u32) -> Self {
        Self {
            semester,
            gpa: None,
            cgpa: None,
            credits: None,
            total_credits,
            total_points,
        }
    }

    pub fn is_computed(&self) -> bool {
        self.cgpa.is_some()
    }
}

fn dash_if_none<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    match value {
        Some(v) => v.serialize(serializer),
        None => serializer.serialize_str("-"),
    }
}

/// 最近一次可计算的累计成绩
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Standing {
    pub cgpa: f64,
    pub total_credits: u32,
    pub total_points: u32,
}

/// 预测用的本学期课程
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct PlannedCourse {
    pub course_code: String,
    pub credits: u32,
    pub grade: Grade,
}

/// CGPA 预测结果，GPA 与 CGPA 保留四位小数
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Projection {
    pub semester_gpa: String,
    pub new_cgpa: String,
    pub semester_credits: u32,
    pub semester_points: u32,
    pub total_new_credits: u32,
    pub total_new_points: u32,
}
