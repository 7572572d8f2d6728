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


//! Test utilities for the REST API.

use crate::db;
use crate::driver::Driver;
use crate::model::*;
use crate::rest::app;
use axum::Router;
use northwind_core::db::{Db, DbError};
use northwind_core::rest::BaseUrls;
use std::sync::Arc;

/// State of a running test.
pub(crate) struct TestContext {
    /// Database backing the app, for direct manipulation of its contents.
    db: Arc<dyn Db + Send + Sync>,

    /// The app under test.
    app: Router,
}

impl TestContext {
    /// Initializes the app using an in-memory database with the schema already applied.
    pub(crate) async fn setup() -> Self {
        let db: Arc<dyn Db + Send + Sync> =
            Arc::new(northwind_core::db::sqlite::testutils::setup().await);
        db::init_schema(&mut db.ex().await.unwrap()).await.unwrap();
        let base_urls = Arc::new(BaseUrls::from_static("http://localhost:1234/"));
        let driver = Driver::new(db.clone(), base_urls);
        let app = app(driver);
        Self { db, app }
    }

    /// Gets a copy of the app router to send a request to it.
    pub(crate) fn app(&self) -> Router {
        self.app.clone()
    }

    /// Consumes the context and returns its app router.
    pub(crate) fn into_app(self) -> Router {
        self.app
    }

    /// Stores an employee with the contents in `data` and returns its assigned identifier.
    pub(crate) async fn put_employee(&self, data: &EmployeeData) -> EmployeeId {
        db::put_employee(&mut self.db.ex().await.unwrap(), None, data).await.unwrap()
    }

    /// Gets the employee identified by `id`, which must exist.
    pub(crate) async fn get_employee(&self, id: EmployeeId) -> Employee {
        db::get_employee(&mut self.db.ex().await.unwrap(), id).await.unwrap()
    }

    /// Checks if the employee identified by `id` exists.
    pub(crate) async fn has_employee(&self, id: EmployeeId) -> bool {
        match db::get_employee(&mut self.db.ex().await.unwrap(), id).await {
            Ok(_) => true,
            Err(DbError::NotFound) => false,
            Err(e) => panic!("{:?}", e),
        }
    }

    /// Stores a `customer`.
    pub(crate) async fn put_customer(&self, customer: &Customer) {
        db::put_customer(&mut self.db.ex().await.unwrap(), customer).await.unwrap()
    }

    /// Gets the customer identified by `id`, which must exist.
    pub(crate) async fn get_customer(&self, id: &CustomerId) -> Customer {
        db::get_customer(&mut self.db.ex().await.unwrap(), id).await.unwrap()
    }

    /// Stores an order with the contents in `data` and returns its assigned identifier.
    pub(crate) async fn put_order(&self, data: &OrderData) -> OrderId {
        db::put_order(&mut self.db.ex().await.unwrap(), None, data).await.unwrap()
    }

    /// Gets the order identified by `id`, which must exist.
    pub(crate) async fn get_order(&self, id: OrderId) -> Order {
        db::get_order(&mut self.db.ex().await.unwrap(), id).await.unwrap()
    }
}
