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


//! Operations on the collection of customers.

use crate::db;
use crate::driver::{already_exists, Driver};
use crate::model::*;
use northwind_core::driver::DriverResult;

impl Driver {
    /// Gets all customers.
    pub(crate) async fn get_customers(self) -> DriverResult<Vec<Customer>> {
        let customers = db::get_customers(&mut self.db.ex().await?).await?;
        Ok(customers)
    }

    /// Creates a new `customer` and returns it as stored.
    pub(crate) async fn create_customer(self, customer: Customer) -> DriverResult<Customer> {
        customer.data.validate()?;

        let mut tx = self.db.begin().await?;
        db::put_customer(tx.ex(), &customer).await.map_err(|e| {
            already_exists(e, format!("Customer with id {} already exists", customer.customer_id))
        })?;
        let customer = db::get_customer(tx.ex(), &customer.customer_id).await?;
        tx.commit().await?;
        Ok(customer)
    }
}
