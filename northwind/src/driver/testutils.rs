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


//! Test utilities for the business layer.

use crate::db;
use crate::driver::Driver;
use crate::model::*;
use northwind_core::db::{Db, Executor};
use northwind_core::rest::BaseUrls;
use std::sync::Arc;

/// State of a running test.
pub(crate) struct TestContext {
    /// The driver under test, backed by an in-memory database.
    driver: Driver,
}

impl TestContext {
    /// Initializes the driver using an in-memory database with the schema already applied.
    pub(crate) async fn setup() -> Self {
        let db: Arc<dyn Db + Send + Sync> =
            Arc::new(northwind_core::db::sqlite::testutils::setup().await);
        db::init_schema(&mut db.ex().await.unwrap()).await.unwrap();
        let base_urls = Arc::new(BaseUrls::from_static("http://localhost:1234/"));
        Self { driver: Driver::new(db, base_urls) }
    }

    /// Gets a direct executor against the database.
    pub(crate) async fn ex(&self) -> Executor {
        self.driver.db.ex().await.unwrap()
    }

    /// Gets a copy of the driver in this test context.
    pub(crate) fn driver(&self) -> Driver {
        self.driver.clone()
    }

    /// Syntactic sugar to create an employee with only the required fields.
    pub(crate) async fn put_employee(&self, first_name: &str, last_name: &str) -> EmployeeId {
        let data = EmployeeData::new(first_name, last_name);
        db::put_employee(&mut self.ex().await, None, &data).await.unwrap()
    }

    /// Syntactic sugar to create a customer with only the required fields.
    pub(crate) async fn put_customer(&self, id: &str, company_name: &str) -> CustomerId {
        let customer = Customer {
            customer_id: CustomerId::new(id).unwrap(),
            data: CustomerData::new(company_name),
        };
        db::put_customer(&mut self.ex().await, &customer).await.unwrap();
        customer.customer_id
    }

    /// Syntactic sugar to create an order between a customer and an employee.
    pub(crate) async fn put_order(
        &self,
        customer_id: Option<&CustomerId>,
        employee_id: Option<EmployeeId>,
    ) -> OrderId {
        let data = OrderData {
            customer_id: customer_id.cloned(),
            employee_id,
            ..Default::default()
        };
        db::put_order(&mut self.ex().await, None, &data).await.unwrap()
    }
}
