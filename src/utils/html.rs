// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! HTML 表格辅助函数
//!
//! 门户页面以 ASP.NET GridView 输出表格，表头通常也是 `<td>`，
//! 因此这里统一按 `<tr>` 逐行读取单元格文本。

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

static TABLE: Lazy<Selector> = Lazy::new(|| Selector::parse("table").expect("valid selector"));

/// 提取元素的文本并压缩空白（包括 `&nbsp;`）
pub fn element_text(element: ElementRef<'_>) -> String {
    normalize_ws(&element.text().collect::<String>())
}

/// 压缩连续空白并去除首尾空白
pub fn normalize_ws(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// 按 id 查找表格
///
/// 门户里有些 id 不是合法的 CSS 标识符，所以逐个比较属性而不是拼选择器
pub fn table_by_id<'a>(document: &'a Html, id: &str) -> Option<ElementRef<'a>> {
    document
        .select(&TABLE)
        .find(|table| table.value().id() == Some(id))
}

/// 文档中的全部表格
pub fn tables(document: &Html) -> impl Iterator<Item = ElementRef<'_>> {
    document.select(&TABLE)
}

/// 读取表格的每一行 `<td>` 文本
///
/// 只含 `<th>` 的行会得到空向量，保持行号与页面一致。
/// 嵌套表格的行不属于外层表格。
pub fn table_rows(table: ElementRef<'_>) -> Vec<Vec<String>> {
    own_rows(table)
        .into_iter()
        .map(|row| own_cells(row, &["td"]))
        .collect()
}

/// 读取表头：第一行中的 `<th>` 或 `<td>` 文本
pub fn header_cells(table: ElementRef<'_>) -> Vec<String> {
    own_rows(table)
        .into_iter()
        .next()
        .map(|row| own_cells(row, &["th", "td"]))
        .unwrap_or_default()
}

/// 直接属于该表格的 `<tr>`（含 `thead`/`tbody`/`tfoot` 下的行）
fn own_rows(table: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    let mut rows = Vec::new();
    for child in table.children().filter_map(ElementRef::wrap) {
        match child.value().name() {
            "tr" => rows.push(child),
            "thead" | "tbody" | "tfoot" => rows.extend(
                child
                    .children()
                    .filter_map(ElementRef::wrap)
                    .filter(|row| row.value().name() == "tr"),
            ),
            _ => {}
        }
    }
    rows
}

fn own_cells(row: ElementRef<'_>, names: &[&str]) -> Vec<String> {
    row.children()
        .filter_map(ElementRef::wrap)
        .filter(|cell| names.contains(&cell.value().name()))
        .map(element_text)
        .collect()
}

/// 在表头中查找第一个包含任一关键字的列（不区分大小写）
pub fn find_column(headers: &[String], needles: &[&str]) -> Option<usize> {
    headers.iter().position(|header| {
        let header = header.to_lowercase();
        needles.iter().any(|needle| header.contains(needle))
    })
}
