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


//! Operations on the collection of employees.

use crate::db;
use crate::driver::{already_exists, missing_reference, Driver};
use crate::model::*;
use northwind_core::driver::{DriverError, DriverResult};

impl Driver {
    /// Gets all employees.
    pub(crate) async fn get_employees(self) -> DriverResult<Vec<Employee>> {
        let employees = db::get_employees(&mut self.db.ex().await?).await?;
        Ok(employees)
    }

    /// Gets the summaries of the employees that match all criteria in `filter`.  Criteria with
    /// empty values are ignored.  Finding no matches is an error.
    pub(crate) async fn search_employees(
        self,
        filter: EmployeeFilter,
    ) -> DriverResult<Vec<EmployeeSummary>> {
        let filter = filter.without_empty();
        let summaries = db::search_employees(&mut self.db.ex().await?, &filter).await?;
        if summaries.is_empty() {
            return Err(DriverError::NotFound("No matches found".to_owned()));
        }
        Ok(summaries)
    }

    /// Creates a new employee with the contents in `data`, using `id` as its identifier if given
    /// or letting the database pick one otherwise.  Returns the stored employee.
    pub(crate) async fn create_employee(
        self,
        id: Option<EmployeeId>,
        data: EmployeeData,
    ) -> DriverResult<Employee> {
        data.validate()?;

        let mut tx = self.db.begin().await?;

        // An employee may report to itself, in which case the manager is the row being created.
        if let Some(manager) = data.reports_to.filter(|manager| Some(*manager) != id) {
            db::get_employee(tx.ex(), manager).await.map_err(|e| {
                missing_reference(e, format!("Manager with id {} does not exist", manager))
            })?;
        }

        let id = db::put_employee(tx.ex(), id, &data).await.map_err(|e| {
            let message = match id {
                Some(id) => format!("Employee with id {} already exists", id),
                None => "Employee already exists".to_owned(),
            };
            already_exists(e, message)
        })?;
        let employee = db::get_employee(tx.ex(), id).await?;

        tx.commit().await?;
        Ok(employee)
    }
}
