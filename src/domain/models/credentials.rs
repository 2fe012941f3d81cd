// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::fmt;

/// 门户登录凭据
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub rollno: String,
    pub password: String,
}

impl Credentials {
    pub fn new(rollno: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            rollno: rollno.into(),
            password: password.into(),
        }
    }
}

// Passwords never reach the logs
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("rollno", &self.rollno)
            .field("password", &"***")
            .finish()
    }
}
