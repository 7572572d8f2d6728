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


//! API to create a new customer.

use crate::driver::Driver;
use crate::model::Customer;
use crate::rest::{created, CreatedResponse};
use axum::extract::State;
use axum::Json;
use northwind_core::rest::RestError;

/// POST handler for this API.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    Json(customer): Json<Customer>,
) -> Result<CreatedResponse<Customer>, RestError> {
    let base_urls = driver.base_urls();
    let customer = driver.create_customer(customer).await?;
    let location = base_urls.make_backend_url(&format!("api/customers/{}", customer.customer_id));
    Ok(created(location, customer))
}
