// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use scraper::{ElementRef, Html};
use tracing::debug;

use crate::domain::models::internals::{
    InternalMarks, InternalMarksRow, InternalSummary, MarksStatus,
};
use crate::utils::html::{header_cells, table_by_id, table_rows, tables};

/// 平时成绩服务
pub struct InternalsService;

impl InternalsService {
    /// 解析平时成绩页
    ///
    /// 优先按配置的表格 id 查找，否则取第一个表头含 "course" 且有数据行的表格。
    /// 页面没有成绩表时返回空结果。
    pub fn parse_internals(html: &str, table_id: Option<&str>) -> InternalMarks {
        let document = Html::parse_document(html);

        let Some(table) = locate_table(&document, table_id) else {
            debug!("No internal marks table on page");
            return InternalMarks::default();
        };

        let rows: Vec<InternalMarksRow> = table_rows(table)
            .into_iter()
            .skip(1)
            .filter(|row| is_marks_row(row))
            .collect();
        let summaries = rows.iter().map(|row| Self::summarize(row)).collect();

        InternalMarks { rows, summaries }
    }

    /// 汇总一行成绩
    ///
    /// 列布局：课程代码、课程名称、测验 1、测验 2、……、第 8 列为期末 /50，
    /// 倒数第二列为期末 /40，最后一列不计入
    pub fn summarize(row: &[String]) -> InternalSummary {
        let course_code = row
            .first()
            .map(|c| c.split(" - ").next().unwrap_or(c).trim().to_string())
            .unwrap_or_default();
        let course_name = row.get(1).cloned().unwrap_or_default();

        let test1 = mark_at(row, 2);
        let test2 = mark_at(row, 3);
        let final_50 = mark_at(row, 7);
        let final_40 = if row.len() >= 3 {
            mark_at(row, row.len() - 2)
        } else {
            None
        };

        let total = [&test1, &test2, &final_50, &final_40]
            .into_iter()
            .flatten()
            .filter_map(|mark| mark.parse::<f64>().ok())
            .sum::<f64>();

        InternalSummary {
            course_code,
            course_name,
            test1,
            test2,
            final_50,
            final_40,
            total,
            status: MarksStatus::from_total(total),
        }
    }
}

fn locate_table<'a>(document: &'a Html, table_id: Option<&str>) -> Option<ElementRef<'a>> {
    if let Some(table) = table_id.and_then(|id| table_by_id(document, id)) {
        return Some(table);
    }

    tables(document).find(|table| {
        let header = header_cells(*table).join(" ").to_lowercase();
        header.contains("course") && table_rows(*table).iter().skip(1).any(|r| is_marks_row(r))
    })
}

/// 数据行：至少两个单元格、首列非空且不是重复的表头
fn is_marks_row(row: &[String]) -> bool {
    match row.first() {
        Some(first) if row.len() >= 2 => {
            !first.is_empty() && !first.to_lowercase().contains("course")
        }
        _ => false,
    }
}

fn mark_at(row: &[String], index: usize) -> Option<String> {
    row.get(index)
        .map(|m| m.trim())
        .filter(|m| !m.is_empty() && *m != "*")
        .map(str::to_string)
}
