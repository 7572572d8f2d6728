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


//! API to get one customer.

use crate::driver::Driver;
use crate::model::{Customer, CustomerId};
use axum::extract::{Path, State};
use axum::Json;
use northwind_core::rest::{EmptyBody, RestError};

/// GET handler for this API.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    Path(id): Path<String>,
    _: EmptyBody,
) -> Result<Json<Customer>, RestError> {
    let id = CustomerId::new(id)?;
    let customer = driver.get_customer(id).await?;
    Ok(Json(customer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::*;
    use crate::rest::testutils::*;
    use axum::http;
    use northwind_core::rest::testutils::OneShotBuilder;
    use northwind_core::test_payload_must_be_empty;

    fn route(id: &str) -> (http::Method, String) {
        (http::Method::GET, format!("/api/customers/{}", id))
    }

    #[tokio::test]
    async fn test_ok() {
        let context = TestContext::setup().await;

        let customer = Customer {
            customer_id: CustomerId::new("BLONP").unwrap(),
            data: CustomerData {
                contact_name: Some("Frédérique Citeaux".to_owned()),
                contact_title: Some("Marketing Manager".to_owned()),
                city: Some("Strasbourg".to_owned()),
                country: Some("France".to_owned()),
                ..CustomerData::new("Blondesddsl père et fils")
            },
        };
        context.put_customer(&customer).await;

        let response = OneShotBuilder::new(context.app(), route("BLONP"))
            .send_empty()
            .await
            .expect_json::<Customer>()
            .await;
        assert_eq!(customer, response);
    }

    #[tokio::test]
    async fn test_not_found() {
        let context = TestContext::setup().await;

        OneShotBuilder::new(context.app(), route("BLONP"))
            .send_empty()
            .await
            .expect_status(http::StatusCode::NOT_FOUND)
            .expect_error("Customer with id BLONP not found")
            .await;
    }

    #[tokio::test]
    async fn test_malformed_id() {
        let context = TestContext::setup().await;

        OneShotBuilder::new(context.app(), route("TOOLONG"))
            .send_empty()
            .await
            .expect_status(http::StatusCode::BAD_REQUEST)
            .expect_error("exactly 5 alphanumeric characters")
            .await;
    }

    test_payload_must_be_empty!(TestContext::setup().await.into_app(), route("BLONP"));
}
