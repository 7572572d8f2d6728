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


//! Operations on the collection of orders.

use crate::db;
use crate::driver::{already_exists, missing_reference, Driver};
use crate::model::*;
use northwind_core::driver::DriverResult;

impl Driver {
    /// Creates a new order with the contents in `data`, using `id` as its identifier if given or
    /// letting the database pick one otherwise.  Returns the stored order.
    pub(crate) async fn create_order(
        self,
        id: Option<OrderId>,
        data: OrderData,
    ) -> DriverResult<Order> {
        data.validate()?;

        let mut tx = self.db.begin().await?;

        if let Some(customer_id) = data.customer_id.as_ref() {
            db::get_customer(tx.ex(), customer_id).await.map_err(|e| {
                missing_reference(e, format!("Customer with id {} does not exist", customer_id))
            })?;
        }
        if let Some(employee_id) = data.employee_id {
            db::get_employee(tx.ex(), employee_id).await.map_err(|e| {
                missing_reference(e, format!("Employee with id {} does not exist", employee_id))
            })?;
        }

        let id = db::put_order(tx.ex(), id, &data).await.map_err(|e| {
            let message = match id {
                Some(id) => format!("Order with id {} already exists", id),
                None => "Order already exists".to_owned(),
            };
            already_exists(e, message)
        })?;
        let order = db::get_order(tx.ex(), id).await?;

        tx.commit().await?;
        Ok(order)
    }
}
