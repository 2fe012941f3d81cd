// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务逻辑，包括：
/// - 领域模型（models）：考勤、课程、学期台账等数据结构
/// - 服务（services）：页面解析和计算规则
///
/// 领域层不依赖网络或 Web 框架，只处理已经获取到的页面内容。
pub mod models;
pub mod services;
