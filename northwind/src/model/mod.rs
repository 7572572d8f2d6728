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


//! High-level data types.
//!
//! Every entity is split in two: a `*Data` type with the contents that clients can write, and a
//! full type that adds the key assigned by the database.  The JSON representation of both uses
//! camelCase field names and flattens the contents next to the key.

use derive_more::Constructor;
use northwind_core::model::{ModelError, ModelResult};
use serde::{Deserialize, Serialize};
use std::fmt;

mod customer;
pub(crate) use customer::*;
mod employee;
pub(crate) use employee::*;
mod money;
pub(crate) use money::*;
mod order;
pub(crate) use order::*;

/// Identifier of an employee, assigned by the database unless the client picks one.
#[derive(
    Clone, Constructor, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[serde(transparent)]
pub(crate) struct EmployeeId(i32);

impl EmployeeId {
    /// Returns the raw value of the identifier for storage purposes.
    pub(crate) fn as_i32(self) -> i32 {
        self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Identifier of an order, assigned by the database unless the client picks one.
#[derive(
    Clone, Constructor, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[serde(transparent)]
pub(crate) struct OrderId(i32);

impl OrderId {
    /// Returns the raw value of the identifier for storage purposes.
    pub(crate) fn as_i32(self) -> i32 {
        self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Identifier of a customer: a code of exactly 5 alphanumeric characters chosen by the client.
#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(try_from = "String")]
pub(crate) struct CustomerId(String);

impl CustomerId {
    /// Length of all customer codes.
    pub(crate) const LENGTH: usize = 5;

    /// Creates a new customer identifier after validating its format.
    pub(crate) fn new<S: Into<String>>(code: S) -> ModelResult<Self> {
        let code = code.into();
        if code.chars().count() != Self::LENGTH || !code.chars().all(|c| c.is_ascii_alphanumeric())
        {
            return Err(ModelError(format!(
                "Customer id '{}' must be exactly {} alphanumeric characters",
                code,
                Self::LENGTH
            )));
        }
        Ok(Self(code))
    }

    /// Returns the customer code as a string.
    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CustomerId {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        CustomerId::new(value)
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
