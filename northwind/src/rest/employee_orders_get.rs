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


//! API to list the orders handled by one employee.

use crate::driver::Driver;
use crate::model::{EmployeeId, Order};
use axum::extract::{Path, State};
use axum::Json;
use northwind_core::rest::{EmptyBody, RestError};

/// GET handler for this API.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    Path(id): Path<EmployeeId>,
    _: EmptyBody,
) -> Result<Json<Vec<Order>>, RestError> {
    let orders = driver.get_employee_orders(id).await?;
    Ok(Json(orders))
}
