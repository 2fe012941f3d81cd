// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::collections::HashMap;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use tracing::{debug, info};

use crate::domain::models::exam::ExamEntry;
use crate::utils::html::{element_text, find_column, header_cells, table_rows, tables};

static TEST_CARD: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.Test-card").expect("valid selector"));
static EXAM_BLOCK: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.text-left").expect("valid selector"));
static EXAM_FIELD: Lazy<Selector> =
    Lazy::new(|| Selector::parse("span.sol").expect("valid selector"));

/// 卡片布局中课程代码、日期、时间所在的 span 下标
const CARD_FIELDS: [usize; 3] = [0, 2, 4];

const DATE_FORMATS: [&str; 5] = ["%d-%m-%y", "%d-%m-%Y", "%d/%m/%y", "%d/%m/%Y", "%Y-%m-%d"];

/// 尚未匹配课程名称的考试条目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawExam {
    pub code: String,
    pub date: String,
    pub time: String,
}

/// 考试安排服务
///
/// 依次尝试卡片布局与表格布局；页面没有考试时返回空列表
pub struct TimetableService;

impl TimetableService {
    /// 从考试安排页提取原始条目
    pub fn extract(html: &str) -> Vec<RawExam> {
        let document = Html::parse_document(html);

        let cards = Self::extract_cards(&document);
        if !cards.is_empty() {
            debug!("Extracted {} exams from card layout", cards.len());
            return cards;
        }

        let rows = Self::extract_table(&document);
        if !rows.is_empty() {
            debug!("Extracted {} exams from table layout", rows.len());
        }
        rows
    }

    /// 为原始条目匹配课程名称并计算剩余天数
    ///
    /// 找不到课程名称的条目会被丢弃
    pub fn resolve(
        raw: Vec<RawExam>,
        titles: &HashMap<String, String>,
        today: NaiveDate,
    ) -> Vec<ExamEntry> {
        raw.into_iter()
            .filter_map(|exam| {
                let Some(title) = titles.get(&exam.code) else {
                    info!(code = %exam.code, "Dropping exam for unknown course");
                    return None;
                };
                Some(ExamEntry {
                    course_code: format!("{}   -   {}", exam.code, title),
                    days_remaining: Self::days_until(&exam.date, today),
                    date: exam.date,
                    time: exam.time,
                })
            })
            .collect()
    }

    /// 解析考试安排页
    pub fn parse_exam_schedule(
        html: &str,
        titles: &HashMap<String, String>,
        today: NaiveDate,
    ) -> Vec<ExamEntry> {
        Self::resolve(Self::extract(html), titles, today)
    }

    /// 距考试日期的天数，过去的考试为负数
    pub fn days_until(date: &str, today: NaiveDate) -> Option<i64> {
        let date = date.trim();
        DATE_FORMATS
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(date, format).ok())
            .map(|exam_day| (exam_day - today).num_days())
    }

    fn extract_cards(document: &Html) -> Vec<RawExam> {
        if document.select(&TEST_CARD).next().is_none() {
            return Vec::new();
        }

        document
            .select(&EXAM_BLOCK)
            .filter_map(|block| {
                let fields: Vec<String> = block.select(&EXAM_FIELD).map(element_text).collect();
                if fields.len() <= CARD_FIELDS[2] {
                    return None;
                }
                let [code, date, time] = CARD_FIELDS.map(|i| strip_label_marker(&fields[i]));
                if code.is_empty() {
                    return None;
                }
                Some(RawExam { code, date, time })
            })
            .collect()
    }

    fn extract_table(document: &Html) -> Vec<RawExam> {
        for table in tables(document) {
            let headers = header_cells(table);
            let (Some(code_col), Some(date_col)) = (
                find_column(&headers, &["course"]),
                find_column(&headers, &["date"]),
            ) else {
                continue;
            };
            let time_col = find_column(&headers, &["time", "session"]);

            let exams: Vec<RawExam> = table_rows(table)
                .into_iter()
                .skip(1)
                .filter_map(|row| {
                    let code = row.get(code_col)?.split_whitespace().next()?.to_string();
                    let date = row.get(date_col)?.clone();
                    let time = time_col
                        .and_then(|col| row.get(col))
                        .cloned()
                        .unwrap_or_default();
                    Some(RawExam { code, date, time })
                })
                .collect();

            if !exams.is_empty() {
                return exams;
            }
        }
        Vec::new()
    }
}

/// 卡片中的值以分隔符（如 `:`）开头，去掉第一个字符
fn strip_label_marker(text: &str) -> String {
    let mut chars = text.chars();
    chars.next();
    chars.as_str().trim().to_string()
}

#[cfg(test)]
#[path = "timetable_service_test.rs"]
mod tests;
