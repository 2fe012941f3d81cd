// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// 字母等级
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "O")]
    O,
    #[serde(rename = "A+")]
    APlus,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "B+")]
    BPlus,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "C")]
    C,
    #[serde(rename = "F")]
    F,
}

impl Grade {
    /// 绩点
    pub fn points(self) -> u32 {
        match self {
            Grade::O => 10,
            Grade::APlus => 9,
            Grade::A => 8,
            Grade::BPlus => 7,
            Grade::B => 6,
            Grade::C => 5,
            Grade::F => 0,
        }
    }

    /// 解析成绩单上的等级
    ///
    /// 成绩单里只有通过的等级计入绩点，`F`、`RA`、`W` 等返回 `None`
    pub fn from_transcript(value: &str) -> Option<Self> {
        match value.parse() {
            Ok(Grade::F) | Err(_) => None,
            Ok(grade) => Some(grade),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Grade::O => "O",
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::BPlus => "B+",
            Grade::B => "B",
            Grade::C => "C",
            Grade::F => "F",
        }
    }
}

impl FromStr for Grade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "O" => Ok(Grade::O),
            "A+" => Ok(Grade::APlus),
            "A" => Ok(Grade::A),
            "B+" => Ok(Grade::BPlus),
            "B" => Ok(Grade::B),
            "C" => Ok(Grade::C),
            "F" => Ok(Grade::F),
            other => Err(format!("unknown grade: {}", other)),
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 已修课程
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletedCourse {
    pub semester: u32,
    pub grade: Grade,
    pub credits: u32,
}

/// 课程页解析结果
#[derive(Debug, Clone, Default)]
pub struct CourseSheet {
    pub completed: Vec<CompletedCourse>,
    /// 仍在修读课程中最早的学期，没有时为 0
    pub completed_semester: u32,
    /// 课程代码 -> 课程名称
    pub titles: HashMap<String, String>,
}
