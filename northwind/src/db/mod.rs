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


//! Database abstraction in terms of the operations needed by the server.

use crate::model::*;
use futures::TryStreamExt;
#[cfg(feature = "postgres")]
use northwind_core::db::postgres;
#[cfg(any(feature = "sqlite", test))]
use northwind_core::db::sqlite;
use northwind_core::db::{DbError, DbResult, Executor};
#[cfg(feature = "postgres")]
use sqlx::postgres::PgRow;
#[cfg(any(feature = "sqlite", test))]
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

#[cfg(test)]
mod tests;

/// Implements the conversions from raw database rows into our entities for the row type `$row`.
///
/// Both backends use the same column names and compatible column types, so the only difference
/// between them is the function used to map `sqlx` errors.
macro_rules! impl_try_from_row [
    ( $row:ty, $map_sqlx_error:path ) => {
        impl TryFrom<$row> for Customer {
            type Error = DbError;

            fn try_from(row: $row) -> DbResult<Self> {
                let customer_id: String = row.try_get("customer_id").map_err($map_sqlx_error)?;
                Ok(Customer {
                    customer_id: CustomerId::new(customer_id)?,
                    data: CustomerData {
                        company_name: row.try_get("company_name").map_err($map_sqlx_error)?,
                        contact_name: row.try_get("contact_name").map_err($map_sqlx_error)?,
                        contact_title: row.try_get("contact_title").map_err($map_sqlx_error)?,
                        address: row.try_get("address").map_err($map_sqlx_error)?,
                        city: row.try_get("city").map_err($map_sqlx_error)?,
                        region: row.try_get("region").map_err($map_sqlx_error)?,
                        postal_code: row.try_get("postal_code").map_err($map_sqlx_error)?,
                        country: row.try_get("country").map_err($map_sqlx_error)?,
                        phone: row.try_get("phone").map_err($map_sqlx_error)?,
                        fax: row.try_get("fax").map_err($map_sqlx_error)?,
                    },
                })
            }
        }

        impl TryFrom<$row> for Employee {
            type Error = DbError;

            fn try_from(row: $row) -> DbResult<Self> {
                let employee_id: i32 = row.try_get("employee_id").map_err($map_sqlx_error)?;
                let reports_to: Option<i32> =
                    row.try_get("reports_to").map_err($map_sqlx_error)?;
                Ok(Employee {
                    employee_id: EmployeeId::new(employee_id),
                    data: EmployeeData {
                        first_name: row.try_get("first_name").map_err($map_sqlx_error)?,
                        last_name: row.try_get("last_name").map_err($map_sqlx_error)?,
                        title: row.try_get("title").map_err($map_sqlx_error)?,
                        title_of_courtesy: row
                            .try_get("title_of_courtesy")
                            .map_err($map_sqlx_error)?,
                        birth_date: row.try_get("birth_date").map_err($map_sqlx_error)?,
                        hire_date: row.try_get("hire_date").map_err($map_sqlx_error)?,
                        address: row.try_get("address").map_err($map_sqlx_error)?,
                        city: row.try_get("city").map_err($map_sqlx_error)?,
                        region: row.try_get("region").map_err($map_sqlx_error)?,
                        postal_code: row.try_get("postal_code").map_err($map_sqlx_error)?,
                        country: row.try_get("country").map_err($map_sqlx_error)?,
                        home_phone: row.try_get("home_phone").map_err($map_sqlx_error)?,
                        extension: row.try_get("extension").map_err($map_sqlx_error)?,
                        notes: row.try_get("notes").map_err($map_sqlx_error)?,
                        photo_path: row.try_get("photo_path").map_err($map_sqlx_error)?,
                        reports_to: reports_to.map(EmployeeId::new),
                    },
                })
            }
        }

        impl TryFrom<$row> for EmployeeSummary {
            type Error = DbError;

            fn try_from(row: $row) -> DbResult<Self> {
                Ok(EmployeeSummary {
                    first_name: row.try_get("first_name").map_err($map_sqlx_error)?,
                    last_name: row.try_get("last_name").map_err($map_sqlx_error)?,
                    title: row.try_get("title").map_err($map_sqlx_error)?,
                    country: row.try_get("country").map_err($map_sqlx_error)?,
                })
            }
        }

        impl TryFrom<$row> for Order {
            type Error = DbError;

            fn try_from(row: $row) -> DbResult<Self> {
                let order_id: i32 = row.try_get("order_id").map_err($map_sqlx_error)?;
                let customer_id: Option<String> =
                    row.try_get("customer_id").map_err($map_sqlx_error)?;
                let employee_id: Option<i32> =
                    row.try_get("employee_id").map_err($map_sqlx_error)?;
                let freight: i64 = row.try_get("freight").map_err($map_sqlx_error)?;
                Ok(Order {
                    order_id: OrderId::new(order_id),
                    data: OrderData {
                        customer_id: customer_id.map(CustomerId::new).transpose()?,
                        employee_id: employee_id.map(EmployeeId::new),
                        order_date: row.try_get("order_date").map_err($map_sqlx_error)?,
                        required_date: row.try_get("required_date").map_err($map_sqlx_error)?,
                        shipped_date: row.try_get("shipped_date").map_err($map_sqlx_error)?,
                        ship_via: row.try_get("ship_via").map_err($map_sqlx_error)?,
                        freight: Money::from_units(freight),
                        ship_name: row.try_get("ship_name").map_err($map_sqlx_error)?,
                        ship_address: row.try_get("ship_address").map_err($map_sqlx_error)?,
                        ship_city: row.try_get("ship_city").map_err($map_sqlx_error)?,
                        ship_region: row.try_get("ship_region").map_err($map_sqlx_error)?,
                        ship_postal_code: row
                            .try_get("ship_postal_code")
                            .map_err($map_sqlx_error)?,
                        ship_country: row.try_get("ship_country").map_err($map_sqlx_error)?,
                    },
                })
            }
        }
    }
];

#[cfg(feature = "postgres")]
impl_try_from_row!(PgRow, postgres::map_sqlx_error);

#[cfg(any(feature = "sqlite", test))]
impl_try_from_row!(SqliteRow, sqlite::map_sqlx_error);

/// Binds the contents of a `CustomerData` to `query` in column order.
macro_rules! bind_customer_data [
    ( $query:expr, $data:expr ) => {
        $query
            .bind(&$data.company_name)
            .bind($data.contact_name.as_deref())
            .bind($data.contact_title.as_deref())
            .bind($data.address.as_deref())
            .bind($data.city.as_deref())
            .bind($data.region.as_deref())
            .bind($data.postal_code.as_deref())
            .bind($data.country.as_deref())
            .bind($data.phone.as_deref())
            .bind($data.fax.as_deref())
    }
];

/// Binds the contents of an `EmployeeData` to `query` in column order.
macro_rules! bind_employee_data [
    ( $query:expr, $data:expr ) => {
        $query
            .bind(&$data.first_name)
            .bind(&$data.last_name)
            .bind($data.title.as_deref())
            .bind($data.title_of_courtesy.as_deref())
            .bind($data.birth_date)
            .bind($data.hire_date)
            .bind($data.address.as_deref())
            .bind($data.city.as_deref())
            .bind($data.region.as_deref())
            .bind($data.postal_code.as_deref())
            .bind($data.country.as_deref())
            .bind($data.home_phone.as_deref())
            .bind($data.extension.as_deref())
            .bind($data.notes.as_deref())
            .bind($data.photo_path.as_deref())
            .bind($data.reports_to.map(EmployeeId::as_i32))
    }
];

/// Binds the contents of an `OrderData` to `query` in column order.
macro_rules! bind_order_data [
    ( $query:expr, $data:expr ) => {
        $query
            .bind($data.customer_id.as_ref().map(CustomerId::as_str))
            .bind($data.employee_id.map(EmployeeId::as_i32))
            .bind($data.order_date)
            .bind($data.required_date)
            .bind($data.shipped_date)
            .bind($data.ship_via)
            .bind($data.freight.units())
            .bind($data.ship_name.as_deref())
            .bind($data.ship_address.as_deref())
            .bind($data.ship_city.as_deref())
            .bind($data.ship_region.as_deref())
            .bind($data.ship_postal_code.as_deref())
            .bind($data.ship_country.as_deref())
    }
];

/// Validates that a statement that should have touched a single row did so.
fn ensure_one_row(affected: u64) -> DbResult<()> {
    match affected {
        0 => Err(DbError::NotFound),
        1 => Ok(()),
        n => Err(DbError::BackendError(format!("Operation affected {} rows instead of 1", n))),
    }
}

/// Initializes the database schema.
pub async fn init_schema(ex: &mut Executor) -> DbResult<()> {
    match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => postgres::run_schema(ex, include_str!("postgres.sql")).await,

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => sqlite::run_schema(ex, include_str!("sqlite.sql")).await,

        #[allow(unused)]
        _ => unreachable!(),
    }
}

/// Gets all employees ordered by their identifier.
pub(crate) async fn get_employees(ex: &mut Executor) -> DbResult<Vec<Employee>> {
    let query_str = "SELECT * FROM employees ORDER BY employee_id";
    let mut employees = vec![];
    match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let mut rows = sqlx::query(query_str).fetch(ex.conn());
            while let Some(row) = rows.try_next().await.map_err(postgres::map_sqlx_error)? {
                employees.push(Employee::try_from(row)?);
            }
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let mut rows = sqlx::query(query_str).fetch(ex.conn());
            while let Some(row) = rows.try_next().await.map_err(sqlite::map_sqlx_error)? {
                employees.push(Employee::try_from(row)?);
            }
        }

        #[allow(unused)]
        _ => unreachable!(),
    }
    Ok(employees)
}

/// Gets the employee identified by `id`.
pub(crate) async fn get_employee(ex: &mut Executor, id: EmployeeId) -> DbResult<Employee> {
    match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "SELECT * FROM employees WHERE employee_id = $1";
            let row = sqlx::query(query_str)
                .bind(id.as_i32())
                .fetch_one(ex.conn())
                .await
                .map_err(postgres::map_sqlx_error)?;
            Employee::try_from(row)
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "SELECT * FROM employees WHERE employee_id = ?";
            let row = sqlx::query(query_str)
                .bind(id.as_i32())
                .fetch_one(ex.conn())
                .await
                .map_err(sqlite::map_sqlx_error)?;
            Employee::try_from(row)
        }

        #[allow(unused)]
        _ => unreachable!(),
    }
}

/// Gets the summaries of all employees that match every criterion present in `filter`, ordered
/// by their identifier.
pub(crate) async fn search_employees(
    ex: &mut Executor,
    filter: &EmployeeFilter,
) -> DbResult<Vec<EmployeeSummary>> {
    let first_name = filter.first_name.as_deref();
    let last_name = filter.last_name.as_deref();
    let title = filter.title.as_deref();
    let country = filter.country.as_deref();

    let mut summaries = vec![];
    match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "
                SELECT first_name, last_name, title, country
                FROM employees
                WHERE
                    ($1::TEXT IS NULL OR first_name = $1)
                    AND ($2::TEXT IS NULL OR last_name = $2)
                    AND ($3::TEXT IS NULL OR title = $3)
                    AND ($4::TEXT IS NULL OR country = $4)
                ORDER BY employee_id
            ";
            let mut rows = sqlx::query(query_str)
                .bind(first_name)
                .bind(last_name)
                .bind(title)
                .bind(country)
                .fetch(ex.conn());
            while let Some(row) = rows.try_next().await.map_err(postgres::map_sqlx_error)? {
                summaries.push(EmployeeSummary::try_from(row)?);
            }
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "
                SELECT first_name, last_name, title, country
                FROM employees
                WHERE
                    (? IS NULL OR first_name = ?)
                    AND (? IS NULL OR last_name = ?)
                    AND (? IS NULL OR title = ?)
                    AND (? IS NULL OR country = ?)
                ORDER BY employee_id
            ";
            let mut rows = sqlx::query(query_str)
                .bind(first_name)
                .bind(first_name)
                .bind(last_name)
                .bind(last_name)
                .bind(title)
                .bind(title)
                .bind(country)
                .bind(country)
                .fetch(ex.conn());
            while let Some(row) = rows.try_next().await.map_err(sqlite::map_sqlx_error)? {
                summaries.push(EmployeeSummary::try_from(row)?);
            }
        }

        #[allow(unused)]
        _ => unreachable!(),
    }
    Ok(summaries)
}

/// Creates a new employee with the contents in `data`.
///
/// If `id` is provided, the new employee gets that identifier.  Otherwise, the database assigns a
/// new one.  Returns the identifier of the new employee.
pub(crate) async fn put_employee(
    ex: &mut Executor,
    id: Option<EmployeeId>,
    data: &EmployeeData,
) -> DbResult<EmployeeId> {
    let id = id.map(EmployeeId::as_i32);
    let new_id: i32 = match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "
                INSERT INTO employees
                    (employee_id, first_name, last_name, title, title_of_courtesy, birth_date,
                    hire_date, address, city, region, postal_code, country, home_phone,
                    extension, notes, photo_path, reports_to)
                VALUES (
                    COALESCE($1, nextval(pg_get_serial_sequence('employees', 'employee_id'))),
                    $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
                RETURNING employee_id
            ";
            let row = bind_employee_data!(sqlx::query(query_str).bind(id), data)
                .fetch_one(ex.conn())
                .await
                .map_err(postgres::map_sqlx_error)?;
            let new_id: i32 = row.try_get("employee_id").map_err(postgres::map_sqlx_error)?;

            if id.is_some() {
                // Keep the identity sequence ahead of explicitly-chosen identifiers.  The sequence
                // only holds positive values even if the explicit identifiers are not.
                let query_str = "
                    SELECT setval(
                        pg_get_serial_sequence('employees', 'employee_id'),
                        GREATEST((SELECT MAX(employee_id) FROM employees), 1))
                ";
                sqlx::query(query_str)
                    .execute(ex.conn())
                    .await
                    .map_err(postgres::map_sqlx_error)?;
            }

            new_id
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "
                INSERT INTO employees
                    (employee_id, first_name, last_name, title, title_of_courtesy, birth_date,
                    hire_date, address, city, region, postal_code, country, home_phone,
                    extension, notes, photo_path, reports_to)
                VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
                RETURNING employee_id
            ";
            let row = bind_employee_data!(sqlx::query(query_str).bind(id), data)
                .fetch_one(ex.conn())
                .await
                .map_err(sqlite::map_sqlx_error)?;
            row.try_get("employee_id").map_err(sqlite::map_sqlx_error)?
        }

        #[allow(unused)]
        _ => unreachable!(),
    };
    Ok(EmployeeId::new(new_id))
}

/// Replaces all the contents of an existing `employee`.
pub(crate) async fn update_employee(ex: &mut Executor, employee: &Employee) -> DbResult<()> {
    let data = &employee.data;
    let rows_affected = match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "
                UPDATE employees
                SET
                    first_name = $1, last_name = $2, title = $3, title_of_courtesy = $4,
                    birth_date = $5, hire_date = $6, address = $7, city = $8, region = $9,
                    postal_code = $10, country = $11, home_phone = $12, extension = $13,
                    notes = $14, photo_path = $15, reports_to = $16
                WHERE employee_id = $17
            ";
            bind_employee_data!(sqlx::query(query_str), data)
                .bind(employee.employee_id.as_i32())
                .execute(ex.conn())
                .await
                .map_err(postgres::map_sqlx_error)?
                .rows_affected()
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "
                UPDATE employees
                SET
                    first_name = ?, last_name = ?, title = ?, title_of_courtesy = ?,
                    birth_date = ?, hire_date = ?, address = ?, city = ?, region = ?,
                    postal_code = ?, country = ?, home_phone = ?, extension = ?,
                    notes = ?, photo_path = ?, reports_to = ?
                WHERE employee_id = ?
            ";
            bind_employee_data!(sqlx::query(query_str), data)
                .bind(employee.employee_id.as_i32())
                .execute(ex.conn())
                .await
                .map_err(sqlite::map_sqlx_error)?
                .rows_affected()
        }

        #[allow(unused)]
        _ => unreachable!(),
    };
    ensure_one_row(rows_affected)
}

/// Deletes the employee identified by `id`.
pub(crate) async fn delete_employee(ex: &mut Executor, id: EmployeeId) -> DbResult<()> {
    let rows_affected = match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "DELETE FROM employees WHERE employee_id = $1";
            sqlx::query(query_str)
                .bind(id.as_i32())
                .execute(ex.conn())
                .await
                .map_err(postgres::map_sqlx_error)?
                .rows_affected()
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "DELETE FROM employees WHERE employee_id = ?";
            sqlx::query(query_str)
                .bind(id.as_i32())
                .execute(ex.conn())
                .await
                .map_err(sqlite::map_sqlx_error)?
                .rows_affected()
        }

        #[allow(unused)]
        _ => unreachable!(),
    };
    ensure_one_row(rows_affected)
}

/// Gets all customers ordered by their identifier.
pub(crate) async fn get_customers(ex: &mut Executor) -> DbResult<Vec<Customer>> {
    let query_str = "SELECT * FROM customers ORDER BY customer_id";
    let mut customers = vec![];
    match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let mut rows = sqlx::query(query_str).fetch(ex.conn());
            while let Some(row) = rows.try_next().await.map_err(postgres::map_sqlx_error)? {
                customers.push(Customer::try_from(row)?);
            }
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let mut rows = sqlx::query(query_str).fetch(ex.conn());
            while let Some(row) = rows.try_next().await.map_err(sqlite::map_sqlx_error)? {
                customers.push(Customer::try_from(row)?);
            }
        }

        #[allow(unused)]
        _ => unreachable!(),
    }
    Ok(customers)
}

/// Gets the customer identified by `id`.
pub(crate) async fn get_customer(ex: &mut Executor, id: &CustomerId) -> DbResult<Customer> {
    match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "SELECT * FROM customers WHERE customer_id = $1";
            let row = sqlx::query(query_str)
                .bind(id.as_str())
                .fetch_one(ex.conn())
                .await
                .map_err(postgres::map_sqlx_error)?;
            Customer::try_from(row)
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "SELECT * FROM customers WHERE customer_id = ?";
            let row = sqlx::query(query_str)
                .bind(id.as_str())
                .fetch_one(ex.conn())
                .await
                .map_err(sqlite::map_sqlx_error)?;
            Customer::try_from(row)
        }

        #[allow(unused)]
        _ => unreachable!(),
    }
}

/// Creates a new `customer`.  Fails with `AlreadyExists` if its identifier is taken.
pub(crate) async fn put_customer(ex: &mut Executor, customer: &Customer) -> DbResult<()> {
    let data = &customer.data;
    let rows_affected = match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "
                INSERT INTO customers
                    (customer_id, company_name, contact_name, contact_title, address, city,
                    region, postal_code, country, phone, fax)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ";
            bind_customer_data!(sqlx::query(query_str).bind(customer.customer_id.as_str()), data)
                .execute(ex.conn())
                .await
                .map_err(postgres::map_sqlx_error)?
                .rows_affected()
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "
                INSERT INTO customers
                    (customer_id, company_name, contact_name, contact_title, address, city,
                    region, postal_code, country, phone, fax)
                VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            ";
            bind_customer_data!(sqlx::query(query_str).bind(customer.customer_id.as_str()), data)
                .execute(ex.conn())
                .await
                .map_err(sqlite::map_sqlx_error)?
                .rows_affected()
        }

        #[allow(unused)]
        _ => unreachable!(),
    };
    ensure_one_row(rows_affected)
}

/// Gets the order identified by `id`.
pub(crate) async fn get_order(ex: &mut Executor, id: OrderId) -> DbResult<Order> {
    match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "SELECT * FROM orders WHERE order_id = $1";
            let row = sqlx::query(query_str)
                .bind(id.as_i32())
                .fetch_one(ex.conn())
                .await
                .map_err(postgres::map_sqlx_error)?;
            Order::try_from(row)
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "SELECT * FROM orders WHERE order_id = ?";
            let row = sqlx::query(query_str)
                .bind(id.as_i32())
                .fetch_one(ex.conn())
                .await
                .map_err(sqlite::map_sqlx_error)?;
            Order::try_from(row)
        }

        #[allow(unused)]
        _ => unreachable!(),
    }
}

/// Creates a new order with the contents in `data`.
///
/// If `id` is provided, the new order gets that identifier.  Otherwise, the database assigns a
/// new one.  Returns the identifier of the new order.
pub(crate) async fn put_order(
    ex: &mut Executor,
    id: Option<OrderId>,
    data: &OrderData,
) -> DbResult<OrderId> {
    let id = id.map(OrderId::as_i32);
    let new_id: i32 = match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "
                INSERT INTO orders
                    (order_id, customer_id, employee_id, order_date, required_date, shipped_date,
                    ship_via, freight, ship_name, ship_address, ship_city, ship_region,
                    ship_postal_code, ship_country)
                VALUES (
                    COALESCE($1, nextval(pg_get_serial_sequence('orders', 'order_id'))),
                    $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
                RETURNING order_id
            ";
            let row = bind_order_data!(sqlx::query(query_str).bind(id), data)
                .fetch_one(ex.conn())
                .await
                .map_err(postgres::map_sqlx_error)?;
            let new_id: i32 = row.try_get("order_id").map_err(postgres::map_sqlx_error)?;

            if id.is_some() {
                // Keep the identity sequence ahead of explicitly-chosen identifiers.  The sequence
                // only holds positive values even if the explicit identifiers are not.
                let query_str = "
                    SELECT setval(
                        pg_get_serial_sequence('orders', 'order_id'),
                        GREATEST((SELECT MAX(order_id) FROM orders), 1))
                ";
                sqlx::query(query_str)
                    .execute(ex.conn())
                    .await
                    .map_err(postgres::map_sqlx_error)?;
            }

            new_id
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "
                INSERT INTO orders
                    (order_id, customer_id, employee_id, order_date, required_date, shipped_date,
                    ship_via, freight, ship_name, ship_address, ship_city, ship_region,
                    ship_postal_code, ship_country)
                VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
                RETURNING order_id
            ";
            let row = bind_order_data!(sqlx::query(query_str).bind(id), data)
                .fetch_one(ex.conn())
                .await
                .map_err(sqlite::map_sqlx_error)?;
            row.try_get("order_id").map_err(sqlite::map_sqlx_error)?
        }

        #[allow(unused)]
        _ => unreachable!(),
    };
    Ok(OrderId::new(new_id))
}

/// Gets all orders handled by the employee `id`, ordered by their identifier.
pub(crate) async fn get_orders_by_employee(
    ex: &mut Executor,
    id: EmployeeId,
) -> DbResult<Vec<Order>> {
    let mut orders = vec![];
    match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "SELECT * FROM orders WHERE employee_id = $1 ORDER BY order_id";
            let mut rows = sqlx::query(query_str).bind(id.as_i32()).fetch(ex.conn());
            while let Some(row) = rows.try_next().await.map_err(postgres::map_sqlx_error)? {
                orders.push(Order::try_from(row)?);
            }
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "SELECT * FROM orders WHERE employee_id = ? ORDER BY order_id";
            let mut rows = sqlx::query(query_str).bind(id.as_i32()).fetch(ex.conn());
            while let Some(row) = rows.try_next().await.map_err(sqlite::map_sqlx_error)? {
                orders.push(Order::try_from(row)?);
            }
        }

        #[allow(unused)]
        _ => unreachable!(),
    }
    Ok(orders)
}

/// Gets all orders placed by the customer `id`, ordered by their identifier.
pub(crate) async fn get_orders_by_customer(
    ex: &mut Executor,
    id: &CustomerId,
) -> DbResult<Vec<Order>> {
    let mut orders = vec![];
    match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "SELECT * FROM orders WHERE customer_id = $1 ORDER BY order_id";
            let mut rows = sqlx::query(query_str).bind(id.as_str()).fetch(ex.conn());
            while let Some(row) = rows.try_next().await.map_err(postgres::map_sqlx_error)? {
                orders.push(Order::try_from(row)?);
            }
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "SELECT * FROM orders WHERE customer_id = ? ORDER BY order_id";
            let mut rows = sqlx::query(query_str).bind(id.as_str()).fetch(ex.conn());
            while let Some(row) = rows.try_next().await.map_err(sqlite::map_sqlx_error)? {
                orders.push(Order::try_from(row)?);
            }
        }

        #[allow(unused)]
        _ => unreachable!(),
    }
    Ok(orders)
}
