// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::{
    application::dto::{
        prediction::{CurrentCourseDto, PredictCgpaRequestDto, PredictCoursesResponseDto},
        responses::{ExamScheduleResponseDto, InternalsResponseDto, ProfileResponseDto},
    },
    config::settings::Settings,
    domain::{
        models::{
            attendance::{AttendanceRecord, AttendanceReport},
            credentials::Credentials,
            semester::{PlannedCourse, Projection, SemesterRecord},
        },
        services::{
            attendance_service::AttendanceService,
            cgpa_service::CgpaService,
            diagnostics_service::{CourseDiagnostics, DiagnosticsService},
            internals_service::InternalsService,
            profile_service::ProfileService,
            timetable_service::TimetableService,
        },
    },
    engines::traits::{PortalConnector, PortalPage, PortalSession},
    utils::errors::ScrapeError,
};
use anyhow::Result;
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// 学生门户用例
///
/// 每个操作独立登录一次门户，获取所需页面后交给领域服务解析
pub struct StudentPortalUseCase {
    connector: Arc<dyn PortalConnector>,
    settings: Arc<Settings>,
}

impl StudentPortalUseCase {
    pub fn new(connector: Arc<dyn PortalConnector>, settings: Arc<Settings>) -> Self {
        Self {
            connector,
            settings,
        }
    }

    async fn session(&self, credentials: &Credentials) -> Result<Box<dyn PortalSession>> {
        debug!(
            rollno = %credentials.rollno,
            connector = self.connector.name(),
            "Opening portal session"
        );
        Ok(self.connector.login(credentials).await?)
    }

    async fn fetch(&self, session: &dyn PortalSession, page: PortalPage) -> Result<String> {
        Ok(session.fetch_page(page).await?.content)
    }

    /// 考勤原始数据
    pub async fn attendance(&self, credentials: &Credentials) -> Result<Vec<AttendanceRecord>> {
        let session = self.session(credentials).await?;
        let page = self.fetch(session.as_ref(), PortalPage::Attendance).await?;
        Ok(AttendanceService::parse_attendance(&page)?)
    }

    /// 附带可缺勤节数的考勤
    ///
    /// 未指定阈值时使用配置中的默认值
    pub async fn attendance_report(
        &self,
        credentials: &Credentials,
        threshold: Option<u32>,
    ) -> Result<Vec<AttendanceReport>> {
        let threshold = threshold.unwrap_or(self.settings.attendance.default_threshold);
        let records = self.attendance(credentials).await?;
        Ok(AttendanceService::reports(&records, threshold))
    }

    /// 学期 GPA/CGPA 台账
    ///
    /// 没有已修课程的学生返回空列表
    pub async fn cgpa(&self, credentials: &Credentials) -> Result<Vec<SemesterRecord>> {
        let session = self.session(credentials).await?;
        match self.ledger(session.as_ref()).await {
            Ok(ledger) => Ok(ledger),
            Err(e)
                if e
                    .downcast_ref::<ScrapeError>()
                    .is_some_and(ScrapeError::is_missing_history) =>
            {
                info!(rollno = %credentials.rollno, "No course history, returning empty ledger");
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }

    async fn ledger(&self, session: &dyn PortalSession) -> Result<Vec<SemesterRecord>> {
        let page = self.fetch(session, PortalPage::Courses).await?;
        let sheet = CgpaService::parse_course_sheet(&page)?;
        Ok(CgpaService::compute_ledger(
            &sheet.completed,
            sheet.completed_semester,
        )?)
    }

    /// 本学期课程及此前的累计成绩
    ///
    /// 历史成绩获取失败不影响课程列表，失败原因写入 `error`
    pub async fn predict_courses(
        &self,
        credentials: &Credentials,
    ) -> Result<PredictCoursesResponseDto> {
        let session = self.session(credentials).await?;
        let page = self.fetch(session.as_ref(), PortalPage::Attendance).await?;
        let records = AttendanceService::parse_attendance(&page)?;

        let courses: Vec<CurrentCourseDto> = AttendanceService::current_course_codes(&records)
            .into_iter()
            .map(|course_code| CurrentCourseDto { course_code })
            .collect();
        if courses.is_empty() {
            return Err(ScrapeError::NoCurrentCourses.into());
        }

        let mut response = PredictCoursesResponseDto {
            courses,
            previous_cgpa: None,
            total_credits: 0,
            total_points: 0,
            error: None,
        };

        match self.ledger(session.as_ref()).await {
            Ok(ledger) => {
                if let Some(standing) = CgpaService::latest_standing(&ledger) {
                    response.previous_cgpa = Some(standing.cgpa);
                    response.total_credits = standing.total_credits;
                    response.total_points = standing.total_points;
                }
            }
            Err(e) => {
                warn!(rollno = %credentials.rollno, error = %e, "Previous CGPA unavailable");
                response.error = Some(format!("Could not fetch previous CGPA data: {}", e));
            }
        }

        Ok(response)
    }

    /// 根据预计成绩推算 CGPA，不访问门户
    pub fn predict_cgpa(&self, request: PredictCgpaRequestDto) -> Result<Projection> {
        let planned: Vec<PlannedCourse> = request.courses.into_iter().map(Into::into).collect();
        CgpaService::project(request.total_credits, request.total_points, &planned)
            .ok_or_else(|| ScrapeError::InsufficientData.into())
    }

    /// 考试安排
    ///
    /// 只有存在考试条目时才获取课程页匹配课程名称
    pub async fn exam_schedule(
        &self,
        credentials: &Credentials,
        today: NaiveDate,
    ) -> Result<ExamScheduleResponseDto> {
        let session = self.session(credentials).await?;
        let page = self.fetch(session.as_ref(), PortalPage::ExamSchedule).await?;

        let raw = TimetableService::extract(&page);
        if raw.is_empty() {
            return Ok(ExamScheduleResponseDto::from(Vec::new()));
        }

        let courses = self.fetch(session.as_ref(), PortalPage::Courses).await?;
        let titles = CgpaService::course_titles(&courses);
        let exams = TimetableService::resolve(raw, &titles, today);
        Ok(ExamScheduleResponseDto::from(exams))
    }

    /// 平时成绩
    pub async fn internals(&self, credentials: &Credentials) -> Result<InternalsResponseDto> {
        let session = self.session(credentials).await?;
        let page = self.fetch(session.as_ref(), PortalPage::InternalMarks).await?;

        let marks = InternalsService::parse_internals(
            &page,
            self.settings.portal.internals_table_id.as_deref(),
        );
        let message = if marks.rows.is_empty() {
            "No internal marks found."
        } else {
            "Internal marks retrieved successfully."
        };

        Ok(InternalsResponseDto {
            internals: marks.rows,
            summaries: marks.summaries,
            message: message.to_string(),
        })
    }

    /// 个人信息
    pub async fn profile(&self, credentials: &Credentials) -> Result<ProfileResponseDto> {
        let session = self.session(credentials).await?;
        let page = self.fetch(session.as_ref(), PortalPage::Profile).await?;
        Ok(ProfileResponseDto {
            profile: ProfileService::parse_profile(&page)?,
        })
    }

    /// 课程页诊断
    pub async fn diagnose_cgpa(&self, credentials: &Credentials) -> Result<CourseDiagnostics> {
        let session = self.session(credentials).await?;
        let page = session.fetch_page(PortalPage::Courses).await?;
        Ok(DiagnosticsService::diagnose_course_page(
            &page.url,
            page.status_code,
            &page.content,
        ))
    }
}

#[cfg(test)]
#[path = "portal_use_case_test.rs"]
mod tests;
