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


//! Operations on one employee.

use crate::db;
use crate::driver::{not_found, Driver};
use crate::model::*;
use northwind_core::db::DbError;
use northwind_core::driver::{DriverError, DriverResult};

impl Driver {
    /// Gets the employee identified by `id`.
    pub(crate) async fn get_employee(self, id: EmployeeId) -> DriverResult<Employee> {
        let employee = db::get_employee(&mut self.db.ex().await?, id)
            .await
            .map_err(|e| not_found(e, format!("Employee with id {} not found", id)))?;
        Ok(employee)
    }

    /// Updates the employee identified by `id` with the name and city in `data`.  All other
    /// fields in `data` are ignored.  Returns the updated employee.
    pub(crate) async fn update_employee(
        self,
        id: EmployeeId,
        data: EmployeeData,
    ) -> DriverResult<Employee> {
        let mut tx = self.db.begin().await?;

        let mut employee = db::get_employee(tx.ex(), id)
            .await
            .map_err(|e| not_found(e, format!("No employee with id {} found", id)))?;
        employee.data.first_name = data.first_name;
        employee.data.last_name = data.last_name;
        employee.data.city = data.city;
        employee.data.validate()?;

        db::update_employee(tx.ex(), &employee).await?;

        tx.commit().await?;
        Ok(employee)
    }

    /// Deletes the employee identified by `id`.  Fails if other entries still refer to it.
    pub(crate) async fn delete_employee(self, id: EmployeeId) -> DriverResult<()> {
        match db::delete_employee(&mut self.db.ex().await?, id).await {
            Ok(()) => Ok(()),
            Err(DbError::ForeignKeyViolation) => Err(DriverError::Conflict(format!(
                "Employee with id {} is still referenced by other employees or orders",
                id
            ))),
            Err(e) => Err(not_found(e, format!("No employee with id {} found", id))),
        }
    }

    /// Gets all orders handled by the employee identified by `id`.
    pub(crate) async fn get_employee_orders(self, id: EmployeeId) -> DriverResult<Vec<Order>> {
        let mut tx = self.db.begin().await?;

        db::get_employee(tx.ex(), id)
            .await
            .map_err(|e| not_found(e, format!("Employee with id {} not found", id)))?;
        let orders = db::get_orders_by_employee(tx.ex(), id).await?;

        tx.commit().await?;
        Ok(orders)
    }
}
