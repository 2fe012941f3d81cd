// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 包含用例实现和接口层使用的数据传输对象。
/// 用例负责登录门户、获取页面并调用领域服务。
pub mod dto;
pub mod use_cases;
