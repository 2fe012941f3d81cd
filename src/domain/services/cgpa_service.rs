// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::collections::HashMap;

use scraper::{ElementRef, Html};
use tracing::{debug, warn};

use crate::domain::models::course::{CompletedCourse, CourseSheet, Grade};
use crate::domain::models::semester::{PlannedCourse, Projection, SemesterRecord, Standing};
use crate::utils::errors::ScrapeError;
use crate::utils::html::{find_column, header_cells, table_by_id, table_rows};

/// 已修课程表格 id
pub const COMPLETED_TABLE_ID: &str = "PDGCourse";
/// 在修课程表格 id
pub const CURRENT_TABLE_ID: &str = "Prettydatagrid3";

const SEMESTER_COL: usize = 4;
const GRADE_COL: usize = 6;
const CREDITS_COL: usize = 7;

/// 学期号上限
pub const MAX_SEMESTER: u32 = 20;
/// 单门课程学分上限
pub const MAX_CREDITS: u32 = 50;

/// CGPA 服务
///
/// 负责解析课程页并按学期累计 GPA/CGPA
pub struct CgpaService;

impl CgpaService {
    /// 解析课程页
    ///
    /// 已修课程表中等级无法识别（如 RA、W）的行不计入绩点。
    ///
    /// # 返回值
    ///
    /// * `Ok(CourseSheet)` - 已修课程、最早在修学期与课程名称
    /// * `Err(ScrapeError)` - 表格缺失、没有数据或数字无法解析
    pub fn parse_course_sheet(html: &str) -> Result<CourseSheet, ScrapeError> {
        let document = Html::parse_document(html);

        let completed_table = table_by_id(&document, COMPLETED_TABLE_ID)
            .ok_or(ScrapeError::CompletedTableNotFound)?;
        let completed_rows = table_rows(completed_table);
        if completed_rows.len() <= 1 {
            return Err(ScrapeError::NoCompletedCourses);
        }

        let mut completed = Vec::new();
        for row in completed_rows.iter().skip(1) {
            if row.len() <= CREDITS_COL {
                continue;
            }

            let semester = parse_number(&row[SEMESTER_COL], "semester", MAX_SEMESTER)?;
            let grade = match Grade::from_transcript(&row[GRADE_COL]) {
                Some(grade) => grade,
                None => {
                    debug!(grade = %row[GRADE_COL], "Skipping course without grade points");
                    continue;
                }
            };
            let credits = parse_number(&row[CREDITS_COL], "credits", MAX_CREDITS)?;

            completed.push(CompletedCourse {
                semester,
                grade,
                credits,
            });
        }

        let current_table = table_by_id(&document, CURRENT_TABLE_ID).ok_or_else(|| {
            ScrapeError::TableNotFound(
                "Could not find current semester courses. Please check if you're enrolled in any courses."
                    .to_string(),
            )
        })?;
        let current_rows = table_rows(current_table);
        if current_rows.len() <= 1 {
            return Err(ScrapeError::NoCurrentCourses);
        }

        let completed_semester = current_rows
            .iter()
            .skip(1)
            .filter_map(|row| row.get(SEMESTER_COL))
            .filter_map(|cell| cell.parse::<u32>().ok())
            .min()
            .unwrap_or(0);

        let mut titles = collect_titles(completed_table);
        titles.extend(collect_titles(current_table));

        debug!(
            completed = completed.len(),
            completed_semester, "Parsed course sheet"
        );

        Ok(CourseSheet {
            completed,
            completed_semester,
            titles,
        })
    }

    /// 读取课程页中的课程代码与名称，不要求表格存在
    pub fn course_titles(html: &str) -> HashMap<String, String> {
        let document = Html::parse_document(html);
        let mut titles = HashMap::new();
        for id in [COMPLETED_TABLE_ID, CURRENT_TABLE_ID] {
            if let Some(table) = table_by_id(&document, id) {
                titles.extend(collect_titles(table));
            }
        }
        titles
    }

    /// 逐学期计算 GPA 与 CGPA
    ///
    /// 从第 1 学期到出现过的最高学期依次累计。遇到 `completed_semester`
    /// （仍有在修课程的最早学期）后，该学期及之后的学期都不再计算，
    /// 只携带截至当时的累计学分与绩点。
    pub fn compute_ledger(
        courses: &[CompletedCourse],
        completed_semester: u32,
    ) -> Result<Vec<SemesterRecord>, ScrapeError> {
        let most_recent = courses
            .iter()
            .map(|c| c.semester)
            .max()
            .ok_or(ScrapeError::InsufficientData)?;
        if most_recent > MAX_SEMESTER {
            return Err(ScrapeError::Parse(format!(
                "invalid semester value '{}'",
                most_recent
            )));
        }

        let mut ledger = Vec::new();
        let mut overall_points = 0u32;
        let mut overall_credits = 0u32;
        let mut backlog = false;

        for semester in 1..=most_recent {
            if backlog {
                ledger.push(SemesterRecord::pending(semester, overall_credits, overall_points));
                continue;
            }

            if semester == completed_semester {
                backlog = true;
                ledger.push(SemesterRecord::pending(semester, overall_credits, overall_points));
                continue;
            }

            let semester_courses = courses
                .iter()
                .filter(|c| c.semester == semester)
                .map(|c| (c.grade, c.credits));
            let (points, credits) = totals(semester_courses).ok_or_else(overflow)?;

            if credits == 0 {
                ledger.push(SemesterRecord::pending(semester, overall_credits, overall_points));
                continue;
            }

            overall_points = overall_points.checked_add(points).ok_or_else(overflow)?;
            overall_credits = overall_credits.checked_add(credits).ok_or_else(overflow)?;

            ledger.push(SemesterRecord {
                semester,
                gpa: Some(format_grade_average(points, credits)),
                cgpa: Some(format_grade_average(overall_points, overall_credits)),
                credits: Some(credits),
                total_credits: overall_credits,
                total_points: overall_points,
            });
        }

        Ok(ledger)
    }

    /// 最近一个已计算学期的累计成绩
    pub fn latest_standing(ledger: &[SemesterRecord]) -> Option<Standing> {
        ledger.iter().rev().find_map(|record| {
            let cgpa = record.cgpa.as_deref()?.parse::<f64>().ok()?;
            Some(Standing {
                cgpa,
                total_credits: record.total_credits,
                total_points: record.total_points,
            })
        })
    }

    /// 根据本学期预计成绩推算新的 CGPA
    ///
    /// 本学期学分为 0 或累计值溢出时返回 `None`
    pub fn project(
        total_credits: u32,
        total_points: u32,
        planned: &[PlannedCourse],
    ) -> Option<Projection> {
        let Some((semester_points, semester_credits)) =
            totals(planned.iter().map(|c| (c.grade, c.credits)))
        else {
            warn!("Projected semester totals overflow");
            return None;
        };
        if semester_credits == 0 {
            warn!("Projection requested without any credits");
            return None;
        }

        let (Some(total_new_credits), Some(total_new_points)) = (
            total_credits.checked_add(semester_credits),
            total_points.checked_add(semester_points),
        ) else {
            warn!(total_credits, total_points, "Projected totals overflow");
            return None;
        };

        Some(Projection {
            semester_gpa: format!("{:.4}", semester_points as f64 / semester_credits as f64),
            new_cgpa: format!("{:.4}", total_new_points as f64 / total_new_credits as f64),
            semester_credits,
            semester_points,
            total_new_credits,
            total_new_points,
        })
    }
}

/// 五位小数格式化后去掉最后一位
fn format_grade_average(points: u32, credits: u32) -> String {
    let mut formatted = format!("{:.5}", points as f64 / credits as f64);
    formatted.pop();
    formatted
}

/// 累加 `(绩点, 学分)`，溢出时返回 `None`
fn totals<I>(courses: I) -> Option<(u32, u32)>
where
    I: IntoIterator<Item = (Grade, u32)>,
{
    courses
        .into_iter()
        .try_fold((0u32, 0u32), |(points, credits), (grade, course_credits)| {
            let course_points = grade.points().checked_mul(course_credits)?;
            Some((
                points.checked_add(course_points)?,
                credits.checked_add(course_credits)?,
            ))
        })
}

fn overflow() -> ScrapeError {
    ScrapeError::Parse("course totals overflow".to_string())
}

fn parse_number(cell: &str, field: &str, max: u32) -> Result<u32, ScrapeError> {
    cell.trim()
        .parse::<u32>()
        .ok()
        .filter(|value| *value <= max)
        .ok_or_else(|| ScrapeError::Parse(format!("invalid {} value '{}'", field, cell)))
}

fn collect_titles(table: ElementRef<'_>) -> HashMap<String, String> {
    let headers = header_cells(table);
    let code_col = find_column(&headers, &["code"]).unwrap_or(0);
    let title_col = find_column(&headers, &["title", "name"]).unwrap_or(code_col + 1);

    table_rows(table)
        .into_iter()
        .skip(1)
        .filter_map(|row| {
            let code = row.get(code_col)?.trim();
            let title = row.get(title_col)?.trim();
            if code.is_empty() || title.is_empty() {
                None
            } else {
                Some((code.to_string(), title.to_string()))
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "cgpa_service_test.rs"]
mod tests;
