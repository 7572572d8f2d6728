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


//! API to create a new order.

use crate::driver::Driver;
use crate::model::{Order, OrderData, OrderId};
use crate::rest::{created, CreatedResponse};
use axum::extract::State;
use axum::Json;
use northwind_core::rest::RestError;
use serde::{Deserialize, Serialize};

/// Message sent to the server to create an order.
#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateOrderRequest {
    /// Identifier to assign to the new order.  The database picks one if missing.
    #[serde(default)]
    pub(crate) order_id: Option<OrderId>,

    /// Contents of the new order.
    #[serde(flatten)]
    pub(crate) data: OrderData,
}

/// POST handler for this API.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    Json(request): Json<CreateOrderRequest>,
) -> Result<CreatedResponse<Order>, RestError> {
    let base_urls = driver.base_urls();
    let order = driver.create_order(request.order_id, request.data).await?;
    let location = base_urls.make_backend_url(&format!("api/orders/{}", order.order_id));
    Ok(created(location, order))
}
