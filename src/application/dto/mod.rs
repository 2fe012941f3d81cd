// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据传输对象模块
///
/// 定义应用程序层的数据传输对象
/// 用于在API请求和领域模型之间传输数据
pub mod credentials_request;
pub mod prediction;
pub mod responses;

/// 请求体格式说明
///
/// 校验失败时随 422 响应返回，提示调用方正确的字段
pub trait RequestFormat {
    const REQUIRED_FORMAT: &'static [(&'static str, &'static str)];
}
