// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;

/// 页面解析错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScrapeError {
    #[error("{0}")]
    TableNotFound(String),

    #[error("Could not find completed courses data. Please check if you're logged in properly.")]
    CompletedTableNotFound,

    #[error("No completed courses found. You might be a new student or there's an issue with the data.")]
    NoCompletedCourses,

    #[error("No current semester courses found.")]
    NoCurrentCourses,

    #[error("Insufficient course data for CGPA calculation.")]
    InsufficientData,

    #[error("Error processing course data: {0}")]
    Parse(String),
}

impl ScrapeError {
    /// 是否表示“该学生暂无数据”
    ///
    /// 新生没有已修课程时返回 true，接口层据此返回空列表而非错误
    pub fn is_missing_history(&self) -> bool {
        matches!(
            self,
            ScrapeError::NoCompletedCourses | ScrapeError::CompletedTableNotFound
        )
    }
}

/// 请求校验错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid request parameters: {reason}")]
pub struct ValidationError {
    pub reason: String,
    /// 期望的请求体字段及说明，为空时响应中不附带
    pub required_format: &'static [(&'static str, &'static str)],
}

impl ValidationError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
            required_format: &[],
        }
    }

    pub fn with_format(
        mut self,
        required_format: &'static [(&'static str, &'static str)],
    ) -> Self {
        self.required_format = required_format;
        self
    }
}
