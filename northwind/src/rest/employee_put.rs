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


//! API to update an existing employee.

use crate::driver::Driver;
use crate::model::{Employee, EmployeeData, EmployeeId};
use axum::extract::{Path, State};
use axum::Json;
use northwind_core::rest::RestError;

/// PUT handler for this API.
///
/// Only the name and city in the payload are applied to the stored employee.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    Path(id): Path<EmployeeId>,
    Json(data): Json<EmployeeData>,
) -> Result<Json<Employee>, RestError> {
    let employee = driver.update_employee(id, data).await?;
    Ok(Json(employee))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::testutils::*;
    use axum::http;
    use northwind_core::rest::testutils::OneShotBuilder;
    use northwind_core::test_payload_must_be_json;
    use serde_json::json;

    fn route(id: i32) -> (http::Method, String) {
        (http::Method::PUT, format!("/api/employees/{}", id))
    }

    #[tokio::test]
    async fn test_ok() {
        let context = TestContext::setup().await;

        let data = EmployeeData {
            title: Some("Sales Manager".to_owned()),
            city: Some("London".to_owned()),
            country: Some("UK".to_owned()),
            ..EmployeeData::new("Steven", "Buchanan")
        };
        let id = context.put_employee(&data).await;

        let request = json!({
            "firstName": "Steve",
            "lastName": "Buchanan-Smith",
            "city": "Leeds",
            "title": "CEO",
            "country": "France",
        });
        let response = OneShotBuilder::new(context.app(), route(id.as_i32()))
            .send_json(request)
            .await
            .expect_json::<Employee>()
            .await;

        let exp_data = EmployeeData {
            first_name: "Steve".to_owned(),
            last_name: "Buchanan-Smith".to_owned(),
            city: Some("Leeds".to_owned()),
            ..data
        };
        let exp_response = Employee { employee_id: id, data: exp_data };
        assert_eq!(exp_response, response);
        assert_eq!(exp_response, context.get_employee(id).await);
    }

    #[tokio::test]
    async fn test_not_found() {
        let context = TestContext::setup().await;

        OneShotBuilder::new(context.app(), route(4))
            .send_json(EmployeeData::new("Margaret", "Peacock"))
            .await
            .expect_status(http::StatusCode::NOT_FOUND)
            .expect_error("No employee with id 4 found")
            .await;
    }

    #[tokio::test]
    async fn test_invalid() {
        let context = TestContext::setup().await;

        let id = context.put_employee(&EmployeeData::new("Margaret", "Peacock")).await;

        OneShotBuilder::new(context.app(), route(id.as_i32()))
            .send_json(EmployeeData::new("Margaret", " "))
            .await
            .expect_status(http::StatusCode::BAD_REQUEST)
            .expect_error("LastName cannot be empty")
            .await;
        assert_eq!("Peacock", context.get_employee(id).await.data.last_name);
    }

    test_payload_must_be_json!(TestContext::setup().await.into_app(), route(1));
}
