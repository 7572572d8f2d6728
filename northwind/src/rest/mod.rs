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


//! Entry point to the REST server.

use crate::driver::Driver;
use axum::http::{header, HeaderName, StatusCode};
use axum::{Json, Router};
use url::Url;

mod customer_get;
mod customer_orders_get;
mod customers_get;
mod customers_post;
mod employee_delete;
mod employee_get;
mod employee_orders_get;
mod employee_put;
mod employees_get;
mod employees_post;
mod employees_search_get;
mod order_get;
mod orders_post;
#[cfg(test)]
mod testutils;

/// Response for APIs that create a new entity: the entity itself, as stored, along with the
/// location where clients can fetch it later.
type CreatedResponse<T> = (StatusCode, [(HeaderName, String); 1], Json<T>);

/// Builds the response for an API that created `entity` at `location`.
fn created<T>(location: Url, entity: T) -> CreatedResponse<T> {
    (StatusCode::CREATED, [(header::LOCATION, location.to_string())], Json(entity))
}

/// Creates the router for the application.
pub(crate) fn app(driver: Driver) -> Router {
    use axum::routing::{get, post};
    Router::new()
        .route("/api/customers", get(customers_get::handler).post(customers_post::handler))
        .route("/api/customers/:id", get(customer_get::handler))
        .route("/api/customers/:id/orders", get(customer_orders_get::handler))
        .route("/api/employees", get(employees_get::handler).post(employees_post::handler))
        .route("/api/employees/search", get(employees_search_get::handler))
        .route(
            "/api/employees/:id",
            get(employee_get::handler).put(employee_put::handler).delete(employee_delete::handler),
        )
        .route("/api/employees/:id/orders", get(employee_orders_get::handler))
        .route("/api/orders", post(orders_post::handler))
        .route("/api/orders/:id", get(order_get::handler))
        .with_state(driver)
}
