//! Persistence for the dashboard needs the following components
//! - Schema (mapping of column names to datatypes allowed, order is important)
//! - Row (based on a Schema, fixed per table, values typed as number or text)
//! - Table (made of many Rows, parsed fresh from disk on every read)
//! - DashboardStore (the registry of the four tables and their operations)
//!

//  All modules of this lib
mod csv;
mod error;
mod row;
mod schema;
mod store;
mod table;

//  External API
pub use csv::{CsvReader, CsvWriter};
pub use error::StoreError;
pub use row::{Row, Value};
pub use schema::{DataType, Schema};
pub use store::{
    DashboardStore, StoreConfig, TABLE_CUSTOMERS, TABLE_PRODUCTS, TABLE_PROFIT_AND_LOSS,
    TABLE_TRANSACTIONS,
};
pub use table::Table;
