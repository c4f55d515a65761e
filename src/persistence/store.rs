use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use indexmap::IndexMap;
use log::{info, warn};

use super::csv::{CsvReader, CsvWriter};
use super::error::StoreError;
use super::schema::{DataType, Schema};
use super::table::Table;

pub const TABLE_CUSTOMERS: &str = "Customers";
pub const TABLE_PRODUCTS: &str = "Products";
pub const TABLE_TRANSACTIONS: &str = "Transactions";
pub const TABLE_PROFIT_AND_LOSS: &str = "Profit & Loss";

/// Where the store keeps its files.
///
/// The base directory is handed in explicitly; nothing in the store ever
/// resolves a path against the process working directory on its own.
#[derive(Clone)]
pub struct StoreConfig {
    pub base_dir: PathBuf,
}

impl StoreConfig {
    pub fn new(base_dir: impl Into<PathBuf>) -> StoreConfig {
        StoreConfig {
            base_dir: base_dir.into(),
        }
    }
}

/// The registration of one table: its file below the base directory, its
/// fixed schema and the rows it is seeded with when the file is absent.
struct TableSpec {
    file: &'static str,
    schema: Schema,
    seed_rows: Vec<Vec<String>>,
}

/// The collective of the four dashboard tables.
///
/// A [`DashboardStore`] is the smart class here: it owns the table
/// registry, seeds missing files on open, and performs the two
/// operations the dashboard needs, a full-table read and the
/// single-row customer append. [`Table`] is the dumb class that only
/// holds parsed rows for display.
///
/// Every read goes back to disk, so the store never holds a stale copy
/// of a file someone edited by hand between two interactions.
pub struct DashboardStore {
    base_dir: PathBuf,
    tables: IndexMap<String, TableSpec>,
}

fn seed(rows: &[&[&str]]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect()
}

impl DashboardStore {
    pub fn open(config: StoreConfig) -> Result<DashboardStore, StoreError> {
        //! Build the table registry and make sure every backing file
        //! exists, seeding the missing ones with their example rows.
        //!
        //! An unwritable base directory fails the whole open; there is
        //! no partial-seed recovery.

        let mut tables = IndexMap::new();

        tables.insert(
            TABLE_CUSTOMERS.to_string(),
            TableSpec {
                file: "data/customers.csv",
                schema: Schema::new(vec![
                    ("customer_id", DataType::Number),
                    ("customer_name", DataType::Text),
                    ("region", DataType::Text),
                    ("total_spent", DataType::Number),
                    ("email", DataType::Text),
                    ("phone", DataType::Text),
                ]),
                seed_rows: seed(&[
                    &["1", "John Smith", "West", "5400", "john@example.com", "555-111-2222"],
                    &["2", "Emily Jones", "East", "7200", "emily@example.com", "555-333-4444"],
                ]),
            },
        );

        tables.insert(
            TABLE_PRODUCTS.to_string(),
            TableSpec {
                file: "data/products.csv",
                schema: Schema::new(vec![
                    ("product_id", DataType::Number),
                    ("product_name", DataType::Text),
                    ("category", DataType::Text),
                    ("price", DataType::Number),
                ]),
                seed_rows: seed(&[
                    &["101", "SmartSync AI Assistant", "Software", "149"],
                    &["102", "ThinkBoard Dashboard", "Software", "199"],
                ]),
            },
        );

        tables.insert(
            TABLE_TRANSACTIONS.to_string(),
            TableSpec {
                file: "data/transactions.csv",
                schema: Schema::new(vec![
                    ("transaction_id", DataType::Number),
                    ("customer_id", DataType::Number),
                    ("product_id", DataType::Number),
                    ("amount", DataType::Number),
                ]),
                seed_rows: seed(&[
                    &["5001", "1", "101", "149"],
                    &["5002", "2", "102", "199"],
                ]),
            },
        );

        tables.insert(
            TABLE_PROFIT_AND_LOSS.to_string(),
            TableSpec {
                file: "finance/monthly_pnl.csv",
                schema: Schema::new(vec![
                    ("month", DataType::Text),
                    ("revenue", DataType::Number),
                    ("expenses", DataType::Number),
                    ("profit", DataType::Number),
                ]),
                seed_rows: seed(&[
                    &["Jan", "2500", "1800", "700"],
                    &["Feb", "3200", "2100", "1100"],
                ]),
            },
        );

        let store = DashboardStore {
            base_dir: config.base_dir,
            tables,
        };

        for (name, spec) in store.tables.iter() {
            store.ensure_table(name, spec)?;
        }

        info!(
            "all data files are in place under '{}'",
            store.base_dir.display()
        );

        Ok(store)
    }

    fn ensure_table(&self, name: &str, spec: &TableSpec) -> Result<(), StoreError> {
        //! Seed one backing file if, and only if, it does not exist yet.
        //!
        //! An existing file is left untouched, whatever it contains; the
        //! seed never checks that its columns still match the registered
        //! schema.

        let path = self.base_dir.join(spec.file);

        if path.exists() {
            return Ok(());
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = File::create(&path)?;
        let mut writer = CsvWriter::new(BufWriter::new(file));

        writer.write_record(&spec.schema.header())?;
        for row in spec.seed_rows.iter() {
            writer.write_record(row)?;
        }
        writer.flush()?;

        info!("seeded table '{}' at '{}'", name, path.display());

        Ok(())
    }

    fn spec(&self, table_name: &str) -> Result<&TableSpec, StoreError> {
        self.tables
            .get(table_name)
            .ok_or_else(|| StoreError::UnknownTable(table_name.to_string()))
    }

    pub fn table_names(&self) -> Vec<&str> {
        //! The registered table names, in registration order.

        self.tables.keys().map(|name| name.as_str()).collect()
    }

    pub fn contains_table(&self, table_name: &str) -> bool {
        self.tables.contains_key(table_name)
    }

    pub fn load_table(&self, table_name: &str) -> Result<Table, StoreError> {
        //! Parse the named table fresh from its backing file.
        //!
        //! The registered schema decides how cells parse. A header line
        //! that no longer matches it is reported as drift and otherwise
        //! ignored; the columns are taken positionally either way.

        let spec = self.spec(table_name)?;
        let path = self.base_dir.join(spec.file);

        let file = File::open(&path)?;
        let mut reader = CsvReader::new(BufReader::new(file));

        match reader.next().transpose()? {
            Some(header) if header != spec.schema.header() => {
                warn!(
                    "table '{}' header drifted from its schema: expected [{}], found [{}]",
                    table_name,
                    spec.schema.header().join(", "),
                    header.join(", ")
                );
            }
            Some(_) => {}
            None => warn!("table '{}' file is empty, not even a header", table_name),
        }

        let mut table = Table::new(table_name, spec.schema.clone());

        for record in reader {
            let record = record?;

            // A stray blank line parses as a single empty field.
            if record.iter().all(|cell| cell.is_empty()) {
                continue;
            }

            table.push_record(record);
        }

        Ok(table)
    }

    pub fn add_customer(
        &self,
        name: &str,
        region: &str,
        total_spent: &str,
        email: &str,
        phone: &str,
    ) -> Result<String, StoreError> {
        //! The one mutation the dashboard supports: append a customer
        //! row and rewrite the backing file.
        //!
        //! The new `customer_id` is one past the highest id currently in
        //! the table. On the seeded table that is the same as row count
        //! plus one, but unlike a row count it cannot hand out a
        //! duplicate id after rows were deleted by hand.
        //!
        //! Emptiness is the only check on the fields. `total_spent` is
        //! written exactly as given, number or not.

        let missing: Vec<&str> = [
            ("customer_name", name),
            ("region", region),
            ("total_spent", total_spent),
            ("email", email),
            ("phone", phone),
        ]
        .iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| *field)
        .collect();

        if !missing.is_empty() {
            return Err(StoreError::Validation(missing.join(", ")));
        }

        let table = self.load_table(TABLE_CUSTOMERS)?;

        let highest_id = table
            .column_values("customer_id")
            .unwrap_or_default()
            .iter()
            .filter_map(|value| value.as_number())
            .fold(0.0_f64, f64::max);
        let new_id = highest_id as i64 + 1;

        let mut records = table.records();
        records.push(vec![
            new_id.to_string(),
            name.to_string(),
            region.to_string(),
            total_spent.to_string(),
            email.to_string(),
            phone.to_string(),
        ]);

        self.rewrite_table(TABLE_CUSTOMERS, &records)?;

        info!("appended customer '{}' with id {}", name, new_id);

        Ok(format!("Added {} to the customer list!", name))
    }

    fn rewrite_table(&self, table_name: &str, records: &[Vec<String>]) -> Result<(), StoreError> {
        //! Replace the named table's backing file with a header plus the
        //! given records.
        //!
        //! The new content goes to a sibling temp file first and is
        //! renamed over the original, so an interrupted write leaves the
        //! old file intact instead of a truncated one.

        let spec = self.spec(table_name)?;
        let path = self.base_dir.join(spec.file);
        let tmp_path = path.with_extension("csv.tmp");

        {
            let file = File::create(&tmp_path)?;
            let mut writer = CsvWriter::new(BufWriter::new(file));

            writer.write_record(&spec.schema.header())?;
            for record in records {
                writer.write_record(record)?;
            }
            writer.flush()?;
        }

        fs::rename(&tmp_path, &path)?;

        Ok(())
    }
}
