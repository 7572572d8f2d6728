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


//! Operations on one customer.

use crate::db;
use crate::driver::{not_found, Driver};
use crate::model::*;
use northwind_core::driver::DriverResult;

impl Driver {
    /// Gets the customer identified by `id`.
    pub(crate) async fn get_customer(self, id: CustomerId) -> DriverResult<Customer> {
        let customer = db::get_customer(&mut self.db.ex().await?, &id)
            .await
            .map_err(|e| not_found(e, format!("Customer with id {} not found", id)))?;
        Ok(customer)
    }

    /// Gets all orders placed by the customer identified by `id`.
    pub(crate) async fn get_customer_orders(self, id: CustomerId) -> DriverResult<Vec<Order>> {
        let mut tx = self.db.begin().await?;

        db::get_customer(tx.ex(), &id)
            .await
            .map_err(|e| not_found(e, format!("Customer with id {} not found", id)))?;
        let orders = db::get_orders_by_customer(tx.ex(), &id).await?;

        tx.commit().await?;
        Ok(orders)
    }
}
