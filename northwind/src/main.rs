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


//! Entry point to the Northwind service.

// Keep these in sync with other top-level files.
#![warn(anonymous_parameters, bad_style, clippy::missing_docs_in_private_items, missing_docs)]
#![warn(unused, unused_extern_crates, unused_import_braces, unused_qualifications)]
#![warn(unsafe_code)]

use northwind::db::init_schema;
use northwind::serve;
use northwind_core::db::postgres::{PostgresDb, PostgresOptions};
use northwind_core::db::Db;
use northwind_core::env::get_optional_var;
use northwind_core::rest::BaseUrls;
use std::net::Ipv4Addr;
use std::sync::Arc;

/// Default port to listen on when `NORTHWIND_PORT` is not set.
const DEFAULT_PORT: u16 = 3000;

#[tokio::main]
async fn main() {
    env_logger::init();

    let port = get_optional_var::<u16>("NORTHWIND", "PORT")
        .expect("Invalid port configuration")
        .unwrap_or(DEFAULT_PORT);
    let addr = (Ipv4Addr::LOCALHOST, port);

    let base_urls = BaseUrls::from_env("NORTHWIND").expect("Invalid base URL configuration");

    let db_opts = PostgresOptions::from_env("PGSQL_PROD").expect("Invalid database configuration");
    let db: Arc<dyn Db + Send + Sync> =
        Arc::new(PostgresDb::connect(db_opts).expect("Failed to set up the database pool"));
    init_schema(&mut db.ex().await.expect("Failed to connect to the database"))
        .await
        .expect("Failed to initialize the database schema");

    let result = serve(addr, db.clone(), base_urls).await;
    db.close().await;
    result.expect("Server failed")
}
