// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use scraper::Html;
use tracing::{debug, warn};

use crate::domain::models::attendance::{AttendanceRecord, AttendanceReport};
use crate::utils::errors::ScrapeError;
use crate::utils::html::{table_by_id, table_rows};

/// 考勤表格 id
pub const ATTENDANCE_TABLE_ID: &str = "PDGcourpercView";

const CODE_COL: usize = 0;
const TOTAL_COL: usize = 1;
const PRESENT_COL: usize = 4;
const PERCENTAGE_COL: usize = 6;

/// 考勤服务
///
/// 解析考勤页并计算在给定出勤率阈值下的可请假课时
pub struct AttendanceService;

impl AttendanceService {
    /// 解析考勤页
    ///
    /// # 参数
    ///
    /// * `html` - 考勤页 HTML
    ///
    /// # 返回值
    ///
    /// * `Ok(Vec<AttendanceRecord>)` - 每门课程一条记录，表格只有表头时为空
    /// * `Err(ScrapeError::TableNotFound)` - 页面中没有考勤表格
    pub fn parse_attendance(html: &str) -> Result<Vec<AttendanceRecord>, ScrapeError> {
        let document = Html::parse_document(html);
        let table = table_by_id(&document, ATTENDANCE_TABLE_ID).ok_or_else(|| {
            ScrapeError::TableNotFound(
                "Could not find attendance data. Please check if you're logged in properly."
                    .to_string(),
            )
        })?;

        let mut records = Vec::new();
        for row in table_rows(table).into_iter().skip(1) {
            if row.len() <= PERCENTAGE_COL {
                continue;
            }

            let total = row[TOTAL_COL].parse::<u32>();
            let present = row[PRESENT_COL].parse::<u32>();
            match (total, present) {
                (Ok(total), Ok(present)) => records.push(AttendanceRecord::new(
                    row[CODE_COL].clone(),
                    total,
                    present,
                    row[PERCENTAGE_COL].clone(),
                )),
                _ => warn!(course = %row[CODE_COL], "Skipping attendance row with non-numeric counts"),
            }
        }

        debug!("Parsed {} attendance records", records.len());
        Ok(records)
    }

    /// 计算可请假课时
    ///
    /// 当前出勤率低于阈值时返回负数，其绝对值为需要连续出勤的课时；
    /// 否则返回在不低于阈值的前提下还能缺勤的课时。
    /// 阈值必须在 1..=99 之间，超出范围或总课时为 0 时返回 0。
    pub fn affordable_leaves(present: u32, total: u32, threshold: u32) -> i64 {
        if total == 0 || threshold == 0 || threshold >= 100 {
            return 0;
        }

        let present = u64::from(present);
        let total = u64::from(total);
        let threshold = u64::from(threshold);

        let attained = present * 100;
        let required = threshold * total;

        if attained < required {
            // Classes i for which (present + i) / (total + i) still stays at or below the threshold
            let deficit = required - attained;
            -((deficit / (100 - threshold)) as i64)
        } else {
            // Classes i for which present / (total + i) stays at or above the threshold
            ((attained - required) / threshold) as i64
        }
    }

    /// 为每条考勤记录附加可请假课时
    pub fn reports(records: &[AttendanceRecord], threshold: u32) -> Vec<AttendanceReport> {
        records
            .iter()
            .map(|record| AttendanceReport {
                affordable_leaves: Self::affordable_leaves(
                    record.present,
                    record.total_classes,
                    threshold,
                ),
                record: record.clone(),
                threshold,
            })
            .collect()
    }

    /// 当前课程代码（取课程列的第一个词）
    pub fn current_course_codes(records: &[AttendanceRecord]) -> Vec<String> {
        records
            .iter()
            .filter_map(|r| r.course_code.split_whitespace().next())
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
#[path = "attendance_service_test.rs"]
mod tests;
