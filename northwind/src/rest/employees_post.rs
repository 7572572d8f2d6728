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


//! API to create a new employee.

use crate::driver::Driver;
use crate::model::{Employee, EmployeeData, EmployeeId};
use crate::rest::{created, CreatedResponse};
use axum::extract::State;
use axum::Json;
use northwind_core::rest::RestError;
use serde::{Deserialize, Serialize};

/// Message sent to the server to create an employee.
#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateEmployeeRequest {
    /// Identifier to assign to the new employee.  The database picks one if missing.
    #[serde(default)]
    pub(crate) employee_id: Option<EmployeeId>,

    /// Contents of the new employee.
    #[serde(flatten)]
    pub(crate) data: EmployeeData,
}

/// POST handler for this API.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    Json(request): Json<CreateEmployeeRequest>,
) -> Result<CreatedResponse<Employee>, RestError> {
    let base_urls = driver.base_urls();
    let employee = driver.create_employee(request.employee_id, request.data).await?;
    let location =
        base_urls.make_backend_url(&format!("api/employees/{}", employee.employee_id));
    Ok(created(location, employee))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::testutils::*;
    use axum::http;
    use northwind_core::rest::testutils::OneShotBuilder;
    use northwind_core::test_payload_must_be_json;
    use serde_json::json;
    use time::macros::datetime;

    fn route() -> (http::Method, String) {
        (http::Method::POST, "/api/employees".to_owned())
    }

    #[tokio::test]
    async fn test_assigned_id() {
        let context = TestContext::setup().await;

        let request = json!({"firstName": "Ana", "lastName": "Bondoc", "city": "Lagos"});
        let checker = OneShotBuilder::new(context.app(), route())
            .send_json(request)
            .await
            .expect_status(http::StatusCode::CREATED);
        let location = checker.header("Location");
        let response = checker.expect_json::<Employee>().await;

        let exp_data =
            EmployeeData { city: Some("Lagos".to_owned()), ..EmployeeData::new("Ana", "Bondoc") };
        assert_eq!(exp_data, response.data);
        assert_eq!(
            format!("http://localhost:1234/api/employees/{}", response.employee_id),
            location
        );
        assert_eq!(response, context.get_employee(response.employee_id).await);
    }

    #[tokio::test]
    async fn test_explicit_id_and_all_fields() {
        let context = TestContext::setup().await;

        let manager = context.put_employee(&EmployeeData::new("Andrew", "Fuller")).await;
        let request = CreateEmployeeRequest {
            employee_id: Some(EmployeeId::new(100)),
            data: EmployeeData {
                title: Some("Sales Representative".to_owned()),
                title_of_courtesy: Some("Ms.".to_owned()),
                birth_date: Some(datetime!(1963-08-30 00:00:00 UTC)),
                hire_date: Some(datetime!(1992-04-01 00:00:00 UTC)),
                address: Some("722 Moss Bay Blvd.".to_owned()),
                city: Some("Kirkland".to_owned()),
                region: Some("WA".to_owned()),
                postal_code: Some("98033".to_owned()),
                country: Some("USA".to_owned()),
                home_phone: Some("(206) 555-3412".to_owned()),
                extension: Some("3355".to_owned()),
                notes: Some("Janet has a BS degree in chemistry.".to_owned()),
                photo_path: Some("http://accweb/emmployees/leverling.bmp".to_owned()),
                reports_to: Some(manager),
                ..EmployeeData::new("Janet", "Leverling")
            },
        };
        let checker = OneShotBuilder::new(context.app(), route())
            .send_json(&request)
            .await
            .expect_status(http::StatusCode::CREATED);
        assert_eq!("http://localhost:1234/api/employees/100", checker.header("Location"));
        let response = checker.expect_json::<Employee>().await;

        let exp_response = Employee { employee_id: EmployeeId::new(100), data: request.data };
        assert_eq!(exp_response, response);
        assert_eq!(exp_response, context.get_employee(EmployeeId::new(100)).await);
    }

    #[tokio::test]
    async fn test_duplicate_id() {
        let context = TestContext::setup().await;

        let id = context.put_employee(&EmployeeData::new("Andrew", "Fuller")).await;

        let request =
            CreateEmployeeRequest { employee_id: Some(id), data: EmployeeData::new("A", "B") };
        OneShotBuilder::new(context.app(), route())
            .send_json(request)
            .await
            .expect_status(http::StatusCode::CONFLICT)
            .expect_error("already exists")
            .await;
    }

    #[tokio::test]
    async fn test_missing_manager() {
        let context = TestContext::setup().await;

        let request = json!({"firstName": "Ana", "lastName": "Bondoc", "reportsTo": 12});
        OneShotBuilder::new(context.app(), route())
            .send_json(request)
            .await
            .expect_status(http::StatusCode::BAD_REQUEST)
            .expect_error("Manager with id 12 does not exist")
            .await;
    }

    #[tokio::test]
    async fn test_invalid_field() {
        let context = TestContext::setup().await;

        let request = json!({"firstName": "Ana", "lastName": "Bondoc", "extension": "123456"});
        OneShotBuilder::new(context.app(), route())
            .send_json(request)
            .await
            .expect_status(http::StatusCode::BAD_REQUEST)
            .expect_error("Extension is too long")
            .await;
    }

    #[tokio::test]
    async fn test_missing_required_field() {
        let context = TestContext::setup().await;

        OneShotBuilder::new(context.app(), route())
            .send_json(json!({"firstName": "Ana"}))
            .await
            .expect_status(http::StatusCode::UNPROCESSABLE_ENTITY)
            .expect_text("lastName")
            .await;
    }

    test_payload_must_be_json!(TestContext::setup().await.into_app(), route());
}
