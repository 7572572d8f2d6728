// Northwind REST service
// Copyright 2023 Julio Merino
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not
// use this file except in compliance with the License.  You may obtain a copy
// of the License at:
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.  See the
// License for the specific language governing permissions and limitations
// under the License.

//! Generic types shared by all data models.
//!
//! Services define their own `model` module with the types that represent their domain.  Those
//! types should validate their contents at construction time and report problems via the
//! `ModelError` type defined here, which the upper layers know how to turn into user-facing errors.

/// Model errors.  These indicate that some input data does not satisfy the invariants of a type.
#[derive(Debug, PartialEq, thiserror::Error)]
#[error("{0}")]
pub struct ModelError(pub String);

/// Result type for this module.
pub type ModelResult<T> = Result<T, ModelError>;

/// Ensures that `value`, the contents of the field called `name`, has at most `max` characters.
///
/// Lengths are counted in characters and not bytes because that's what the database schemas
/// declare.
pub fn check_max_length(name: &str, value: &str, max: usize) -> ModelResult<()> {
    let length = value.chars().count();
    if length > max {
        return Err(ModelError(format!(
            "{} is too long: got {} characters but at most {} are allowed",
            name, length, max
        )));
    }
    Ok(())
}

/// Ensures that `value`, the contents of the required field called `name`, is not empty and has
/// at most `max` characters.
pub fn check_required(name: &str, value: &str, max: usize) -> ModelResult<()> {
    if value.trim().is_empty() {
        return Err(ModelError(format!("{} cannot be empty", name)));
    }
    check_max_length(name, value, max)
}

/// Same as `check_max_length` but for optional fields, which are always valid when missing.
pub fn check_optional(name: &str, value: Option<&str>, max: usize) -> ModelResult<()> {
    match value {
        Some(value) => check_max_length(name, value, max),
        None => Ok(()),
    }
}
