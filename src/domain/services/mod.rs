// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 每个服务负责解析门户的一类页面，并在解析结果上实现业务规则。
/// 服务只接收 HTML 文本，不关心页面如何获取。
///
/// 包含的服务：
/// - 考勤服务（attendance_service）：考勤表解析与可缺勤节数计算
/// - 绩点服务（cgpa_service）：课程表解析、学期 GPA/CGPA 台账与预测
/// - 诊断服务（diagnostics_service）：检查课程页结构
/// - 平时成绩服务（internals_service）：平时成绩表解析与汇总
/// - 个人信息服务（profile_service）：个人信息页解析
/// - 考试安排服务（timetable_service）：考试安排的多策略提取
pub mod attendance_service;
pub mod cgpa_service;
pub mod diagnostics_service;
pub mod internals_service;
pub mod profile_service;
pub mod timetable_service;
