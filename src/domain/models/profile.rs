// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ProfileField {
    pub label: String,
    pub value: String,
}

/// 学生个人信息，按页面顺序保存
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct StudentProfile {
    pub fields: Vec<ProfileField>,
}

impl StudentProfile {
    /// 按标签查找（不区分大小写）
    pub fn get(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.label.eq_ignore_ascii_case(label))
            .map(|f| f.value.as_str())
    }

    /// 同一标签只保留第一次出现的值
    pub fn push(&mut self, label: String, value: String) {
        if self.get(&label).is_none() {
            self.fields.push(ProfileField { label, value });
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
