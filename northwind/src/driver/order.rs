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


//! Operations on one order.

use crate::db;
use crate::driver::{not_found, Driver};
use crate::model::*;
use northwind_core::driver::DriverResult;

impl Driver {
    /// Gets the order identified by `id`.
    pub(crate) async fn get_order(self, id: OrderId) -> DriverResult<Order> {
        let order = db::get_order(&mut self.db.ex().await?, id)
            .await
            .map_err(|e| not_found(e, format!("Order with id {} not found", id)))?;
        Ok(order)
    }
}
