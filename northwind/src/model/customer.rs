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


//! Customers.

use crate::model::CustomerId;
use northwind_core::model::{check_optional, check_required, ModelResult};
use serde::{Deserialize, Serialize};

/// Contents of a customer record, excluding its identifier.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CustomerData {
    pub(crate) company_name: String,
    pub(crate) contact_name: Option<String>,
    pub(crate) contact_title: Option<String>,
    pub(crate) address: Option<String>,
    pub(crate) city: Option<String>,
    pub(crate) region: Option<String>,
    pub(crate) postal_code: Option<String>,
    pub(crate) country: Option<String>,
    pub(crate) phone: Option<String>,
    pub(crate) fax: Option<String>,
}

impl CustomerData {
    /// Creates a new customer with the required fields and nothing else.
    pub(crate) fn new<S: Into<String>>(company_name: S) -> Self {
        Self { company_name: company_name.into(), ..Default::default() }
    }

    /// Checks that all fields fit the constraints of the database schema.
    pub(crate) fn validate(&self) -> ModelResult<()> {
        check_required("CompanyName", &self.company_name, 40)?;
        check_optional("ContactName", self.contact_name.as_deref(), 30)?;
        check_optional("ContactTitle", self.contact_title.as_deref(), 30)?;
        check_optional("Address", self.address.as_deref(), 60)?;
        check_optional("City", self.city.as_deref(), 15)?;
        check_optional("Region", self.region.as_deref(), 15)?;
        check_optional("PostalCode", self.postal_code.as_deref(), 10)?;
        check_optional("Country", self.country.as_deref(), 15)?;
        check_optional("Phone", self.phone.as_deref(), 24)?;
        check_optional("Fax", self.fax.as_deref(), 24)?;
        Ok(())
    }
}

/// A customer as stored in the database.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Customer {
    pub(crate) customer_id: CustomerId,
    #[serde(flatten)]
    pub(crate) data: CustomerData,
}
