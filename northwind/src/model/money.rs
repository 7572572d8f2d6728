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


//! Fixed-point monetary amounts.

use northwind_core::model::{ModelError, ModelResult};
use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Number of units in one whole currency amount.
const SCALE: i64 = 10_000;

/// A monetary amount with four decimal places, stored as a count of ten-thousandths.
///
/// Clients see amounts as JSON numbers, which means that precision beyond the fourth decimal is
/// rounded away when parsing.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub(crate) struct Money(i64);

impl Money {
    /// Creates an amount from a raw count of ten-thousandths.
    pub(crate) fn from_units(units: i64) -> Self {
        Self(units)
    }

    /// Returns the raw count of ten-thousandths in this amount.
    pub(crate) fn units(self) -> i64 {
        self.0
    }

    /// Creates an amount from a floating point number, rounding to the nearest ten-thousandth.
    pub(crate) fn from_f64(value: f64) -> ModelResult<Self> {
        if !value.is_finite() {
            return Err(ModelError(format!("Amount {} is not a valid number", value)));
        }
        let scaled = (value * SCALE as f64).round();
        if scaled < i64::MIN as f64 || scaled >= i64::MAX as f64 {
            return Err(ModelError(format!("Amount {} is out of range", value)));
        }
        Ok(Self(scaled as i64))
    }

    /// Returns the amount as a floating point number, which may lose precision for large values.
    pub(crate) fn as_f64(self) -> f64 {
        self.0 as f64 / SCALE as f64
    }

    /// Returns true if the amount is below zero.
    pub(crate) fn is_negative(self) -> bool {
        self.0 < 0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let scale = SCALE.unsigned_abs();
        write!(f, "{}{}.{:04}", sign, abs / scale, abs % scale)
    }
}

impl Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(self.as_f64())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        Money::from_f64(value).map_err(D::Error::custom)
    }
}
