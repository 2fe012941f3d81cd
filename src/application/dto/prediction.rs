// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::RequestFormat;
use crate::domain::models::course::Grade;
use crate::domain::models::semester::PlannedCourse;

/// 本学期课程
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CurrentCourseDto {
    pub course_code: String,
}

/// `/predict-courses` 响应
///
/// 取不到历史成绩时 `previous_cgpa` 为空，原因写入 `error`
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PredictCoursesResponseDto {
    pub courses: Vec<CurrentCourseDto>,
    pub previous_cgpa: Option<f64>,
    pub total_credits: u32,
    pub total_points: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// 预测请求中的一门课程
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct PlannedCourseDto {
    #[validate(length(min = 1))]
    pub course_code: String,
    #[validate(range(min = 1, max = 30))]
    pub credits: u32,
    pub grade: Grade,
}

impl From<PlannedCourseDto> for PlannedCourse {
    fn from(dto: PlannedCourseDto) -> Self {
        PlannedCourse {
            course_code: dto.course_code,
            credits: dto.credits,
            grade: dto.grade,
        }
    }
}

/// `/predict-cgpa` 请求
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct PredictCgpaRequestDto {
    #[serde(default)]
    #[validate(range(max = 1000))]
    pub total_credits: u32,
    #[serde(default)]
    #[validate(range(max = 10000))]
    pub total_points: u32,
    #[validate(length(min = 1, max = 50), nested)]
    pub courses: Vec<PlannedCourseDto>,
}

impl RequestFormat for PredictCgpaRequestDto {
    const REQUIRED_FORMAT: &'static [(&'static str, &'static str)] = &[
        ("total_credits", "Credits earned so far"),
        ("total_points", "Grade points earned so far"),
        ("courses", "List of {course_code, credits, grade}"),
    ];
}
