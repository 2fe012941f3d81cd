// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use url::{ParseError, Url};

/// 将门户页面路径解析为绝对 URL
///
/// 以 `/` 开头的路径相对于站点根目录，其余相对于 `base_url` 所在目录
pub fn resolve_url(base_url: &Url, path: &str) -> Result<Url, ParseError> {
    base_url.join(path)
}

/// 解析门户根地址并确保以 `/` 结尾，便于后续拼接相对路径
pub fn parse_base_url(base: &str) -> Result<Url, ParseError> {
    if base.ends_with('/') {
        Url::parse(base)
    } else {
        Url::parse(&format!("{}/", base))
    }
}
