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


//! Orders.

use crate::model::{CustomerId, EmployeeId, Money, OrderId};
use northwind_core::model::{check_optional, ModelError, ModelResult};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Contents of an order record, excluding its identifier.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderData {
    pub(crate) customer_id: Option<CustomerId>,
    pub(crate) employee_id: Option<EmployeeId>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub(crate) order_date: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub(crate) required_date: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub(crate) shipped_date: Option<OffsetDateTime>,
    pub(crate) ship_via: Option<i32>,
    #[serde(default)]
    pub(crate) freight: Money,
    pub(crate) ship_name: Option<String>,
    pub(crate) ship_address: Option<String>,
    pub(crate) ship_city: Option<String>,
    pub(crate) ship_region: Option<String>,
    pub(crate) ship_postal_code: Option<String>,
    pub(crate) ship_country: Option<String>,
}

impl OrderData {
    /// Checks that all fields fit the constraints of the database schema.
    pub(crate) fn validate(&self) -> ModelResult<()> {
        if self.freight.is_negative() {
            return Err(ModelError(format!("Freight cannot be negative: got {}", self.freight)));
        }
        check_optional("ShipName", self.ship_name.as_deref(), 40)?;
        check_optional("ShipAddress", self.ship_address.as_deref(), 60)?;
        check_optional("ShipCity", self.ship_city.as_deref(), 15)?;
        check_optional("ShipRegion", self.ship_region.as_deref(), 15)?;
        check_optional("ShipPostalCode", self.ship_postal_code.as_deref(), 10)?;
        check_optional("ShipCountry", self.ship_country.as_deref(), 15)?;
        Ok(())
    }
}

/// An order as stored in the database.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Order {
    pub(crate) order_id: OrderId,
    #[serde(flatten)]
    pub(crate) data: OrderData,
}
