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


//! Employees and their search projections.

use crate::model::EmployeeId;
use northwind_core::model::{check_optional, check_required, ModelResult};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Contents of an employee record, excluding its identifier.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EmployeeData {
    pub(crate) first_name: String,
    pub(crate) last_name: String,
    pub(crate) title: Option<String>,
    pub(crate) title_of_courtesy: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub(crate) birth_date: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub(crate) hire_date: Option<OffsetDateTime>,
    pub(crate) address: Option<String>,
    pub(crate) city: Option<String>,
    pub(crate) region: Option<String>,
    pub(crate) postal_code: Option<String>,
    pub(crate) country: Option<String>,
    pub(crate) home_phone: Option<String>,
    pub(crate) extension: Option<String>,
    pub(crate) notes: Option<String>,
    pub(crate) photo_path: Option<String>,

    /// Manager of this employee.  Chains of managers are not checked for cycles.
    pub(crate) reports_to: Option<EmployeeId>,
}

impl EmployeeData {
    /// Creates a new employee with the required fields and nothing else.
    pub(crate) fn new<S1: Into<String>, S2: Into<String>>(first_name: S1, last_name: S2) -> Self {
        Self { first_name: first_name.into(), last_name: last_name.into(), ..Default::default() }
    }

    /// Checks that all fields fit the constraints of the database schema.
    pub(crate) fn validate(&self) -> ModelResult<()> {
        check_required("FirstName", &self.first_name, 10)?;
        check_required("LastName", &self.last_name, 20)?;
        check_optional("Title", self.title.as_deref(), 30)?;
        check_optional("TitleOfCourtesy", self.title_of_courtesy.as_deref(), 25)?;
        check_optional("Address", self.address.as_deref(), 60)?;
        check_optional("City", self.city.as_deref(), 15)?;
        check_optional("Region", self.region.as_deref(), 15)?;
        check_optional("PostalCode", self.postal_code.as_deref(), 10)?;
        check_optional("Country", self.country.as_deref(), 15)?;
        check_optional("HomePhone", self.home_phone.as_deref(), 24)?;
        check_optional("Extension", self.extension.as_deref(), 4)?;
        check_optional("PhotoPath", self.photo_path.as_deref(), 255)?;
        Ok(())
    }
}

/// An employee as stored in the database.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Employee {
    pub(crate) employee_id: EmployeeId,
    #[serde(flatten)]
    pub(crate) data: EmployeeData,
}

/// Projection of an employee returned by searches.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EmployeeSummary {
    pub(crate) first_name: String,
    pub(crate) last_name: String,
    pub(crate) title: Option<String>,
    pub(crate) country: Option<String>,
}

impl From<Employee> for EmployeeSummary {
    fn from(employee: Employee) -> Self {
        let data = employee.data;
        Self {
            first_name: data.first_name,
            last_name: data.last_name,
            title: data.title,
            country: data.country,
        }
    }
}

/// Exact-match criteria to search for employees.  Missing criteria match all employees.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EmployeeFilter {
    pub(crate) first_name: Option<String>,
    pub(crate) last_name: Option<String>,
    pub(crate) title: Option<String>,
    pub(crate) country: Option<String>,
}

impl EmployeeFilter {
    /// Drops the criteria that carry an empty value, which clients send for fields they leave
    /// blank in a form and which should not restrict the search.
    pub(crate) fn without_empty(self) -> Self {
        fn non_empty(value: Option<String>) -> Option<String> {
            value.filter(|v| !v.is_empty())
        }

        Self {
            first_name: non_empty(self.first_name),
            last_name: non_empty(self.last_name),
            title: non_empty(self.title),
            country: non_empty(self.country),
        }
    }
}
