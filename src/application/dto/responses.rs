// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Serialize, Serializer};

use crate::domain::models::exam::ExamEntry;
use crate::domain::models::internals::{InternalMarksRow, InternalSummary};
use crate::domain::models::profile::StudentProfile;

/// 接口名称与说明，根路径和 404 响应共用
pub const ENDPOINTS: [(&str, &str); 10] = [
    ("/", "API information"),
    ("/login", "Authenticate and get attendance summary"),
    ("/attendance", "Get detailed attendance information"),
    ("/cgpa", "Get CGPA and semester-wise GPA"),
    ("/predict-courses", "Get current courses for CGPA prediction"),
    ("/predict-cgpa", "Project CGPA from expected grades"),
    ("/diagnose-cgpa", "Inspect the course page used for CGPA"),
    ("/exam-schedule", "Get upcoming exam schedule"),
    ("/internals", "Get internal assessment marks"),
    ("/profile", "Get student profile"),
];

#[derive(Debug, Serialize)]
pub struct ApiInfoDto {
    pub name: &'static str,
    pub description: &'static str,
    pub version: &'static str,
    #[serde(serialize_with = "endpoint_map")]
    pub endpoints: &'static [(&'static str, &'static str)],
    pub status: &'static str,
}

impl ApiInfoDto {
    pub fn new() -> Self {
        Self {
            name: "Nimora Student Information API",
            description: "API for accessing student attendance, CGPA, exam schedules, and more",
            version: env!("CARGO_PKG_VERSION"),
            endpoints: &ENDPOINTS,
            status: "online",
        }
    }
}

impl Default for ApiInfoDto {
    fn default() -> Self {
        Self::new()
    }
}

/// 未匹配路由的响应
#[derive(Debug, Serialize)]
pub struct NotFoundDto {
    pub detail: &'static str,
    #[serde(serialize_with = "endpoint_map")]
    pub available_endpoints: &'static [(&'static str, &'static str)],
}

impl Default for NotFoundDto {
    fn default() -> Self {
        Self {
            detail: "Endpoint not found. Please check the API documentation.",
            available_endpoints: &ENDPOINTS,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ExamScheduleResponseDto {
    pub exams: Vec<ExamEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<Vec<ExamEntry>> for ExamScheduleResponseDto {
    fn from(exams: Vec<ExamEntry>) -> Self {
        let message = exams
            .is_empty()
            .then(|| "No upcoming exams found.".to_string());
        Self { exams, message }
    }
}

#[derive(Debug, Serialize)]
pub struct InternalsResponseDto {
    pub internals: Vec<InternalMarksRow>,
    pub summaries: Vec<InternalSummary>,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponseDto {
    #[serde(serialize_with = "profile_map")]
    pub profile: StudentProfile,
}

fn endpoint_map<S: Serializer>(
    endpoints: &&'static [(&'static str, &'static str)],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_map(endpoints.iter().copied())
}

// Keeps the portal's field order
fn profile_map<S: Serializer>(profile: &StudentProfile, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_map(profile.fields.iter().map(|f| (&f.label, &f.value)))
}
