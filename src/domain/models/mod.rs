// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 门户页面解析后的数据结构：
/// - 凭据（credentials）：门户登录学号与密码
/// - 考勤（attendance）：每门课程的出勤统计
/// - 课程（course）：等级、已修课程与课程页解析结果
/// - 学期（semester）：逐学期 GPA/CGPA 记录
/// - 考试（exam）：考试安排
/// - 平时成绩（internals）：平时测验成绩
/// - 个人信息（profile）：学生档案字段
pub mod attendance;
pub mod course;
pub mod credentials;
pub mod exam;
pub mod internals;
pub mod profile;
pub mod semester;
