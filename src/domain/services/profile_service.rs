// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use crate::domain::models::profile::StudentProfile;
use crate::utils::errors::ScrapeError;
use crate::utils::html::{element_text, table_rows, tables};

static LABELLED_VALUE: Lazy<Selector> =
    Lazy::new(|| Selector::parse("span[id], label[id]").expect("valid selector"));

/// 个人信息服务
pub struct ProfileService;

impl ProfileService {
    /// 解析个人信息页
    ///
    /// 识别两种行：`标签 | 值` 与 `标签 | : | 值`。标签末尾的冒号会被去掉。
    /// 表格之外，id 形如 `lblName` 的 span/label 以 id 后缀作为标签。
    pub fn parse_profile(html: &str) -> Result<StudentProfile, ScrapeError> {
        let document = Html::parse_document(html);
        let mut profile = StudentProfile::default();

        for table in tables(&document) {
            for row in table_rows(table) {
                let (label, value) = match row.as_slice() {
                    [label, value] => (label, value),
                    [label, sep, value] if sep == ":" => (label, value),
                    _ => continue,
                };

                let label = label.trim_end_matches(':').trim();
                let value = value.trim();
                if label.is_empty() || value.is_empty() {
                    continue;
                }
                profile.push(label.to_string(), value.to_string());
            }
        }

        for element in document.select(&LABELLED_VALUE) {
            let Some(label) = element
                .value()
                .id()
                .and_then(|id| id.strip_prefix("lbl"))
                .map(|label| label.trim_start_matches('_'))
            else {
                continue;
            };
            let value = element_text(element);
            if !label.is_empty() && !value.is_empty() {
                profile.push(label.to_string(), value);
            }
        }

        if profile.is_empty() {
            return Err(ScrapeError::TableNotFound(
                "Could not find student profile data.".to_string(),
            ));
        }
        Ok(profile)
    }
}
