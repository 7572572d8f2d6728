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


//! Database tests shared by all implementations.

use crate::db::*;
use northwind_core::db::Db;
use std::sync::Arc;
use time::macros::datetime;

/// Creates an employee with only the required fields and returns its assigned identifier.
async fn put_simple_employee(ex: &mut Executor, first_name: &str, last_name: &str) -> EmployeeId {
    put_employee(ex, None, &EmployeeData::new(first_name, last_name)).await.unwrap()
}

/// Creates a customer with only the required fields.
async fn put_simple_customer(ex: &mut Executor, id: &str) -> CustomerId {
    let customer_id = CustomerId::new(id).unwrap();
    let customer = Customer {
        customer_id: customer_id.clone(),
        data: CustomerData::new(format!("Company {}", id)),
    };
    put_customer(ex, &customer).await.unwrap();
    customer_id
}

/// Creates an order between `customer_id` and `employee_id` and returns its assigned identifier.
async fn put_simple_order(
    ex: &mut Executor,
    customer_id: &CustomerId,
    employee_id: EmployeeId,
) -> OrderId {
    let data = OrderData {
        customer_id: Some(customer_id.clone()),
        employee_id: Some(employee_id),
        ..Default::default()
    };
    put_order(ex, None, &data).await.unwrap()
}

pub(super) async fn test_employees_empty(db: Arc<dyn Db + Send + Sync>) {
    let mut ex = db.ex().await.unwrap();

    assert!(get_employees(&mut ex).await.unwrap().is_empty());
    assert!(search_employees(&mut ex, &EmployeeFilter::default()).await.unwrap().is_empty());

    drop(ex);
    db.close().await;
}

pub(super) async fn test_employee_put_get_all_fields(db: Arc<dyn Db + Send + Sync>) {
    let mut ex = db.ex().await.unwrap();

    let manager = put_simple_employee(&mut ex, "Andrew", "Fuller").await;
    let data = EmployeeData {
        first_name: "Nancy".to_owned(),
        last_name: "Davolio".to_owned(),
        title: Some("Sales Representative".to_owned()),
        title_of_courtesy: Some("Ms.".to_owned()),
        birth_date: Some(datetime!(1948-12-08 00:00:00 UTC)),
        hire_date: Some(datetime!(1992-05-01 09:30:00 UTC)),
        address: Some("507 - 20th Ave. E. Apt. 2A".to_owned()),
        city: Some("Seattle".to_owned()),
        region: Some("WA".to_owned()),
        postal_code: Some("98122".to_owned()),
        country: Some("USA".to_owned()),
        home_phone: Some("(206) 555-9857".to_owned()),
        extension: Some("5467".to_owned()),
        notes: Some("Education includes a BA in psychology.".to_owned()),
        photo_path: Some("http://accweb/emmployees/davolio.bmp".to_owned()),
        reports_to: Some(manager),
    };
    let id = put_employee(&mut ex, None, &data).await.unwrap();
    assert_ne!(manager, id);

    let employee = get_employee(&mut ex, id).await.unwrap();
    assert_eq!(Employee { employee_id: id, data }, employee);

    drop(ex);
    db.close().await;
}

pub(super) async fn test_employee_put_explicit_id(db: Arc<dyn Db + Send + Sync>) {
    let mut ex = db.ex().await.unwrap();

    let data = EmployeeData::new("Janet", "Leverling");
    let id = put_employee(&mut ex, Some(EmployeeId::new(10)), &data).await.unwrap();
    assert_eq!(EmployeeId::new(10), id);

    assert_eq!(
        DbError::AlreadyExists,
        put_employee(&mut ex, Some(id), &EmployeeData::new("Other", "Person")).await.unwrap_err()
    );
    assert_eq!(data, get_employee(&mut ex, id).await.unwrap().data);

    let next = put_simple_employee(&mut ex, "Margaret", "Peacock").await;
    assert_eq!(EmployeeId::new(11), next);

    drop(ex);
    db.close().await;
}

pub(super) async fn test_put_non_positive_explicit_ids(db: Arc<dyn Db + Send + Sync>) {
    let mut ex = db.ex().await.unwrap();

    let data = EmployeeData::new("Janet", "Leverling");
    for raw_id in [-1, 0] {
        let id = put_employee(&mut ex, Some(EmployeeId::new(raw_id)), &data).await.unwrap();
        assert_eq!(EmployeeId::new(raw_id), id);
    }
    let next = put_simple_employee(&mut ex, "Margaret", "Peacock").await;
    assert!(next.as_i32() > 0);
    assert_eq!(3, get_employees(&mut ex).await.unwrap().len());

    let id = put_order(&mut ex, Some(OrderId::new(-5)), &OrderData::default()).await.unwrap();
    assert_eq!(OrderId::new(-5), id);
    let next = put_order(&mut ex, None, &OrderData::default()).await.unwrap();
    assert!(next.as_i32() > 0);

    drop(ex);
    db.close().await;
}

pub(super) async fn test_employee_put_missing_manager(db: Arc<dyn Db + Send + Sync>) {
    let mut ex = db.ex().await.unwrap();

    let data =
        EmployeeData { reports_to: Some(EmployeeId::new(99)), ..EmployeeData::new("A", "B") };
    assert_eq!(
        DbError::ForeignKeyViolation,
        put_employee(&mut ex, None, &data).await.unwrap_err()
    );
    assert!(get_employees(&mut ex).await.unwrap().is_empty());

    drop(ex);
    db.close().await;
}

pub(super) async fn test_employee_get_not_found(db: Arc<dyn Db + Send + Sync>) {
    let mut ex = db.ex().await.unwrap();

    put_simple_employee(&mut ex, "Steven", "Buchanan").await;
    let err = get_employee(&mut ex, EmployeeId::new(1234)).await.unwrap_err();
    assert_eq!(DbError::NotFound, err);

    drop(ex);
    db.close().await;
}

pub(super) async fn test_employees_get_ordered_by_id(db: Arc<dyn Db + Send + Sync>) {
    let mut ex = db.ex().await.unwrap();

    let id3 = put_employee(&mut ex, Some(EmployeeId::new(3)), &EmployeeData::new("C", "Three"))
        .await
        .unwrap();
    let id1 = put_employee(&mut ex, Some(EmployeeId::new(1)), &EmployeeData::new("A", "One"))
        .await
        .unwrap();
    let id2 = put_employee(&mut ex, Some(EmployeeId::new(2)), &EmployeeData::new("B", "Two"))
        .await
        .unwrap();

    let ids = get_employees(&mut ex)
        .await
        .unwrap()
        .into_iter()
        .map(|e| e.employee_id)
        .collect::<Vec<_>>();
    assert_eq!(vec![id1, id2, id3], ids);

    drop(ex);
    db.close().await;
}

pub(super) async fn test_employees_search(db: Arc<dyn Db + Send + Sync>) {
    let mut ex = db.ex().await.unwrap();

    let employees = [
        ("Nancy", "Davolio", "Sales Representative", "USA"),
        ("Andrew", "Fuller", "Vice President, Sales", "USA"),
        ("Steven", "Buchanan", "Sales Manager", "UK"),
        ("Michael", "Suyama", "Sales Representative", "UK"),
    ];
    for (first_name, last_name, title, country) in employees {
        let data = EmployeeData {
            title: Some(title.to_owned()),
            country: Some(country.to_owned()),
            ..EmployeeData::new(first_name, last_name)
        };
        put_employee(&mut ex, None, &data).await.unwrap();
    }

    let summary = |i: usize| {
        let (first_name, last_name, title, country) = employees[i];
        EmployeeSummary {
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
            title: Some(title.to_owned()),
            country: Some(country.to_owned()),
        }
    };

    let all = search_employees(&mut ex, &EmployeeFilter::default()).await.unwrap();
    assert_eq!(vec![summary(0), summary(1), summary(2), summary(3)], all);

    let filter = EmployeeFilter { country: Some("UK".to_owned()), ..Default::default() };
    assert_eq!(vec![summary(2), summary(3)], search_employees(&mut ex, &filter).await.unwrap());

    let filter = EmployeeFilter {
        title: Some("Sales Representative".to_owned()),
        country: Some("UK".to_owned()),
        ..Default::default()
    };
    assert_eq!(vec![summary(3)], search_employees(&mut ex, &filter).await.unwrap());

    let filter = EmployeeFilter {
        first_name: Some("Andrew".to_owned()),
        last_name: Some("Fuller".to_owned()),
        ..Default::default()
    };
    assert_eq!(vec![summary(1)], search_employees(&mut ex, &filter).await.unwrap());

    let filter = EmployeeFilter { first_name: Some("nancy".to_owned()), ..Default::default() };
    assert!(search_employees(&mut ex, &filter).await.unwrap().is_empty());

    let filter = EmployeeFilter {
        first_name: Some("Nancy".to_owned()),
        country: Some("UK".to_owned()),
        ..Default::default()
    };
    assert!(search_employees(&mut ex, &filter).await.unwrap().is_empty());

    drop(ex);
    db.close().await;
}

pub(super) async fn test_employee_update(db: Arc<dyn Db + Send + Sync>) {
    let mut ex = db.ex().await.unwrap();

    let id = put_simple_employee(&mut ex, "Laura", "Callahan").await;
    let other = put_simple_employee(&mut ex, "Anne", "Dodsworth").await;

    let mut employee = get_employee(&mut ex, id).await.unwrap();
    employee.data.city = Some("Seattle".to_owned());
    employee.data.hire_date = Some(datetime!(1994-03-05 00:00:00 UTC));
    update_employee(&mut ex, &employee).await.unwrap();

    assert_eq!(employee, get_employee(&mut ex, id).await.unwrap());
    let other = get_employee(&mut ex, other).await.unwrap();
    assert_eq!(EmployeeData::new("Anne", "Dodsworth"), other.data);

    drop(ex);
    db.close().await;
}

pub(super) async fn test_employee_update_not_found(db: Arc<dyn Db + Send + Sync>) {
    let mut ex = db.ex().await.unwrap();

    let employee =
        Employee { employee_id: EmployeeId::new(5), data: EmployeeData::new("Robert", "King") };
    assert_eq!(DbError::NotFound, update_employee(&mut ex, &employee).await.unwrap_err());

    drop(ex);
    db.close().await;
}

pub(super) async fn test_employee_delete(db: Arc<dyn Db + Send + Sync>) {
    let mut ex = db.ex().await.unwrap();

    let id1 = put_simple_employee(&mut ex, "Laura", "Callahan").await;
    let id2 = put_simple_employee(&mut ex, "Anne", "Dodsworth").await;

    delete_employee(&mut ex, id1).await.unwrap();
    assert_eq!(DbError::NotFound, get_employee(&mut ex, id1).await.unwrap_err());
    assert_eq!(DbError::NotFound, delete_employee(&mut ex, id1).await.unwrap_err());
    get_employee(&mut ex, id2).await.unwrap();

    drop(ex);
    db.close().await;
}

pub(super) async fn test_employee_delete_still_referenced(db: Arc<dyn Db + Send + Sync>) {
    let mut ex = db.ex().await.unwrap();

    let manager = put_simple_employee(&mut ex, "Andrew", "Fuller").await;
    let data = EmployeeData { reports_to: Some(manager), ..EmployeeData::new("Nancy", "Davolio") };
    let report = put_employee(&mut ex, None, &data).await.unwrap();
    assert_eq!(DbError::ForeignKeyViolation, delete_employee(&mut ex, manager).await.unwrap_err());

    let data = OrderData { employee_id: Some(report), ..Default::default() };
    put_order(&mut ex, None, &data).await.unwrap();
    assert_eq!(DbError::ForeignKeyViolation, delete_employee(&mut ex, report).await.unwrap_err());

    assert_eq!(2, get_employees(&mut ex).await.unwrap().len());

    drop(ex);
    db.close().await;
}

pub(super) async fn test_customers_put_get(db: Arc<dyn Db + Send + Sync>) {
    let mut ex = db.ex().await.unwrap();

    assert!(get_customers(&mut ex).await.unwrap().is_empty());

    let customer = Customer {
        customer_id: CustomerId::new("ALFKI").unwrap(),
        data: CustomerData {
            contact_name: Some("Maria Anders".to_owned()),
            contact_title: Some("Sales Representative".to_owned()),
            address: Some("Obere Str. 57".to_owned()),
            city: Some("Berlin".to_owned()),
            postal_code: Some("12209".to_owned()),
            country: Some("Germany".to_owned()),
            phone: Some("030-0074321".to_owned()),
            fax: Some("030-0076545".to_owned()),
            ..CustomerData::new("Alfreds Futterkiste")
        },
    };
    put_customer(&mut ex, &customer).await.unwrap();
    let other = put_simple_customer(&mut ex, "ANATR").await;

    assert_eq!(customer, get_customer(&mut ex, &customer.customer_id).await.unwrap());
    let ids = get_customers(&mut ex)
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.customer_id)
        .collect::<Vec<_>>();
    assert_eq!(vec![customer.customer_id.clone(), other], ids);

    assert_eq!(
        DbError::NotFound,
        get_customer(&mut ex, &CustomerId::new("XXXXX").unwrap()).await.unwrap_err()
    );

    drop(ex);
    db.close().await;
}

pub(super) async fn test_customer_put_duplicate(db: Arc<dyn Db + Send + Sync>) {
    let mut ex = db.ex().await.unwrap();

    let id = put_simple_customer(&mut ex, "BONAP").await;
    let customer = Customer { customer_id: id.clone(), data: CustomerData::new("Bon app'") };
    assert_eq!(DbError::AlreadyExists, put_customer(&mut ex, &customer).await.unwrap_err());
    assert_eq!("Company BONAP", get_customer(&mut ex, &id).await.unwrap().data.company_name);

    drop(ex);
    db.close().await;
}

pub(super) async fn test_order_put_get(db: Arc<dyn Db + Send + Sync>) {
    let mut ex = db.ex().await.unwrap();

    let customer_id = put_simple_customer(&mut ex, "VINET").await;
    let employee_id = put_simple_employee(&mut ex, "Steven", "Buchanan").await;
    let data = OrderData {
        customer_id: Some(customer_id),
        employee_id: Some(employee_id),
        order_date: Some(datetime!(1996-07-04 00:00:00 UTC)),
        required_date: Some(datetime!(1996-08-01 00:00:00 UTC)),
        shipped_date: Some(datetime!(1996-07-16 00:00:00 UTC)),
        ship_via: Some(3),
        freight: Money::from_units(323_800),
        ship_name: Some("Vins et alcools Chevalier".to_owned()),
        ship_address: Some("59 rue de l'Abbaye".to_owned()),
        ship_city: Some("Reims".to_owned()),
        ship_region: None,
        ship_postal_code: Some("51100".to_owned()),
        ship_country: Some("France".to_owned()),
    };
    let id = put_order(&mut ex, Some(OrderId::new(10248)), &data).await.unwrap();
    assert_eq!(OrderId::new(10248), id);
    assert_eq!(Order { order_id: id, data }, get_order(&mut ex, id).await.unwrap());

    let next = put_order(&mut ex, None, &OrderData::default()).await.unwrap();
    assert_eq!(OrderId::new(10249), next);
    assert_eq!(Money::default(), get_order(&mut ex, next).await.unwrap().data.freight);

    assert_eq!(DbError::NotFound, get_order(&mut ex, OrderId::new(1)).await.unwrap_err());

    drop(ex);
    db.close().await;
}

pub(super) async fn test_order_put_missing_references(db: Arc<dyn Db + Send + Sync>) {
    let mut ex = db.ex().await.unwrap();

    let data =
        OrderData { customer_id: Some(CustomerId::new("NONEX").unwrap()), ..Default::default() };
    assert_eq!(DbError::ForeignKeyViolation, put_order(&mut ex, None, &data).await.unwrap_err());

    let data = OrderData { employee_id: Some(EmployeeId::new(8)), ..Default::default() };
    assert_eq!(DbError::ForeignKeyViolation, put_order(&mut ex, None, &data).await.unwrap_err());

    drop(ex);
    db.close().await;
}

pub(super) async fn test_orders_by_employee_and_customer(db: Arc<dyn Db + Send + Sync>) {
    let mut ex = db.ex().await.unwrap();

    let customer1 = put_simple_customer(&mut ex, "HANAR").await;
    let customer2 = put_simple_customer(&mut ex, "SUPRD").await;
    let employee1 = put_simple_employee(&mut ex, "Margaret", "Peacock").await;
    let employee2 = put_simple_employee(&mut ex, "Janet", "Leverling").await;

    let order1 = put_simple_order(&mut ex, &customer1, employee1).await;
    let order2 = put_simple_order(&mut ex, &customer2, employee1).await;
    let order3 = put_simple_order(&mut ex, &customer1, employee2).await;

    let ids = |orders: Vec<Order>| orders.into_iter().map(|o| o.order_id).collect::<Vec<_>>();
    let orders = get_orders_by_employee(&mut ex, employee1).await.unwrap();
    assert_eq!(vec![order1, order2], ids(orders));
    let orders = get_orders_by_employee(&mut ex, employee2).await.unwrap();
    assert_eq!(vec![order3], ids(orders));
    let orders = get_orders_by_customer(&mut ex, &customer1).await.unwrap();
    assert_eq!(vec![order1, order3], ids(orders));
    let orders = get_orders_by_customer(&mut ex, &customer2).await.unwrap();
    assert_eq!(vec![order2], ids(orders));

    let nobody = EmployeeId::new(1000);
    assert!(get_orders_by_employee(&mut ex, nobody).await.unwrap().is_empty());

    drop(ex);
    db.close().await;
}

macro_rules! generate_db_tests [
    ( $setup:expr $(, #[$extra:meta] )? ) => {
        northwind_core::db::testutils::generate_tests!(
            $(#[$extra],)?
            $setup,
            $crate::db::tests,
            test_employees_empty,
            test_employee_put_get_all_fields,
            test_employee_put_explicit_id,
            test_put_non_positive_explicit_ids,
            test_employee_put_missing_manager,
            test_employee_get_not_found,
            test_employees_get_ordered_by_id,
            test_employees_search,
            test_employee_update,
            test_employee_update_not_found,
            test_employee_delete,
            test_employee_delete_still_referenced,
            test_customers_put_get,
            test_customer_put_duplicate,
            test_order_put_get,
            test_order_put_missing_references,
            test_orders_by_employee_and_customer
        );
    }
];

#[cfg(feature = "postgres")]
mod postgres {
    use super::*;
    use northwind_core::db::postgres::testutils::setup;

    generate_db_tests!(
        {
            let db = Arc::new(setup().await);
            init_schema(&mut db.ex().await.unwrap()).await.unwrap();
            db
        },
        #[ignore = "Requires environment configuration and is expensive"]
    );
}

mod sqlite {
    use super::*;
    use northwind_core::db::sqlite::testutils::setup;

    generate_db_tests!({
        let db = Arc::new(setup().await);
        init_schema(&mut db.ex().await.unwrap()).await.unwrap();
        db
    });
}
