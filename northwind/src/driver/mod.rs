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


//! Business logic for the service.

use northwind_core::db::{Db, DbError};
use northwind_core::driver::DriverError;
use northwind_core::rest::BaseUrls;
use std::sync::Arc;

mod customer;
mod customers;
mod employee;
mod employees;
mod order;
mod orders;
#[cfg(test)]
pub(crate) mod testutils;

/// Converts a database `NotFound` error into a driver error carrying a more descriptive
/// `message`, and passes any other error through.
fn not_found(e: DbError, message: String) -> DriverError {
    match e {
        DbError::NotFound => DriverError::NotFound(message),
        e => e.into(),
    }
}

/// Converts a database `NotFound` error for an entry referenced by the input of an operation into
/// an input validation error carrying `message`, and passes any other error through.
fn missing_reference(e: DbError, message: String) -> DriverError {
    match e {
        DbError::NotFound => DriverError::InvalidInput(message),
        e => e.into(),
    }
}

/// Converts a database `AlreadyExists` error into a driver error carrying a more descriptive
/// `message`, and passes any other error through.
fn already_exists(e: DbError, message: String) -> DriverError {
    match e {
        DbError::AlreadyExists => DriverError::AlreadyExists(message),
        e => e.into(),
    }
}

/// Business logic.
///
/// The public operations exposed by the driver are all "one shot": they acquire an executor or
/// start a transaction and release it before returning, so it's incorrect for the caller to use
/// two separate calls.  For this reason, these operations consume the driver in an attempt to
/// minimize the possibility of executing two operations.
#[derive(Clone)]
pub(crate) struct Driver {
    /// The database that the driver uses for persistence.
    db: Arc<dyn Db + Send + Sync>,

    /// Base URLs of the service, used to tell clients where new resources live.
    base_urls: Arc<BaseUrls>,
}

impl Driver {
    /// Creates a new driver backed by the given injected components.
    pub(crate) fn new(db: Arc<dyn Db + Send + Sync>, base_urls: Arc<BaseUrls>) -> Self {
        Self { db, base_urls }
    }

    /// Obtains a reference to the base URLs of the service.
    pub(crate) fn base_urls(&self) -> Arc<BaseUrls> {
        self.base_urls.clone()
    }
}
