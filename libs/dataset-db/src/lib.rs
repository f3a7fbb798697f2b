pub mod models;
pub mod schema;

use chrono::Utc;
use dataset_clean::Table;
use sqlx::{sqlite::SqliteConnectOptions, SqlitePool};
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, info};

// Re-export main types
pub use models::{DbCarPrice, DbDataset, DbFips};
pub use schema::{get_schema_version, initialize_schema};

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Database connection error: {0}")]
    ConnectionError(#[from] sqlx::Error),

    #[error("Schema error: {0}")]
    SchemaError(#[from] schema::SchemaError),

    #[error("Dataset not found: {0}")]
    DatasetNotFound(String),

    #[error("Invalid SQL identifier: {0}")]
    InvalidIdentifier(String),
}

pub type Result<T> = std::result::Result<T, DatabaseError>;

/// Dataset database manager
pub struct DatasetDatabase {
    pool: SqlitePool,
}

impl DatasetDatabase {
    /// Create new database connection and initialize schema
    pub async fn new(db_path: &str) -> Result<Self> {
        info!("Connecting to database: {}", db_path);

        let options = SqliteConnectOptions::from_str(db_path)?
            .create_if_missing(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal);

        let pool = SqlitePool::connect_with(options).await?;

        schema::initialize_schema(&pool).await?;

        info!("Database initialized successfully");

        Ok(Self { pool })
    }

    // ==================== DATASET REGISTRY ====================

    /// Insert or replace a dataset registry entry
    pub async fn record_dataset(&self, dataset: DbDataset) -> Result<()> {
        sqlx::query(
            r#"
            INSERT OR REPLACE INTO datasets (name, source_path, row_count, loaded_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&dataset.name)
        .bind(&dataset.source_path)
        .bind(dataset.row_count)
        .bind(&dataset.loaded_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Get a dataset registry entry by name
    pub async fn get_dataset(&self, name: &str) -> Result<DbDataset> {
        let dataset = sqlx::query_as::<_, DbDataset>("SELECT * FROM datasets WHERE name = ?")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DatabaseError::DatasetNotFound(name.to_string()))?;

        Ok(dataset)
    }

    /// Get total number of registered datasets
    pub async fn dataset_count(&self) -> Result<i64> {
        let (count,) = sqlx::query_as::<_, (i64,)>("SELECT COUNT(*) FROM datasets")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    // ==================== TYPED TABLES ====================

    /// Batch insert FIPS reference rows
    pub async fn insert_fips_batch(&self, rows: Vec<DbFips>) -> Result<usize> {
        let mut count = 0;

        for row in rows {
            sqlx::query("INSERT OR REPLACE INTO fips (fips_code, state, county) VALUES (?, ?, ?)")
                .bind(row.fips_code)
                .bind(&row.state)
                .bind(&row.county)
                .execute(&self.pool)
                .await?;
            count += 1;
        }

        debug!("Inserted {} fips rows", count);
        Ok(count)
    }

    /// Get a FIPS row by code
    pub async fn get_fips(&self, fips_code: i64) -> Result<Option<DbFips>> {
        let row = sqlx::query_as::<_, DbFips>("SELECT * FROM fips WHERE fips_code = ?")
            .bind(fips_code)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row)
    }

    /// Get number of FIPS rows
    pub async fn fips_count(&self) -> Result<i64> {
        let (count,) = sqlx::query_as::<_, (i64,)>("SELECT COUNT(*) FROM fips")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Batch insert car price rows
    pub async fn insert_car_prices_batch(&self, rows: Vec<DbCarPrice>) -> Result<usize> {
        let mut count = 0;

        for row in rows {
            sqlx::query(
                r#"
                INSERT OR REPLACE INTO car_prices (
                    brand, model, year, engine_size, fuel_type,
                    transmission, mileage, doors, owner_count, price
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(&row.brand)
            .bind(&row.model)
            .bind(row.year)
            .bind(row.engine_size)
            .bind(&row.fuel_type)
            .bind(&row.transmission)
            .bind(row.mileage)
            .bind(row.doors)
            .bind(row.owner_count)
            .bind(row.price)
            .execute(&self.pool)
            .await?;
            count += 1;
        }

        debug!("Inserted {} car price rows", count);
        Ok(count)
    }

    /// Get number of car price rows
    pub async fn car_price_count(&self) -> Result<i64> {
        let (count,) = sqlx::query_as::<_, (i64,)>("SELECT COUNT(*) FROM car_prices")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    // ==================== GENERIC TABLE LOADING ====================

    /// Load a cleaned table into the database, replacing any existing
    /// table of the same name, and record it in the dataset registry.
    ///
    /// Column types are TEXT; typed tables exist for datasets that
    /// warrant real column types.
    pub async fn load_table(&self, name: &str, source_path: &str, table: &Table) -> Result<u64> {
        validate_identifier(name)?;
        for header in &table.headers {
            validate_identifier(header)?;
        }

        sqlx::query(&format!(r#"DROP TABLE IF EXISTS "{}""#, name))
            .execute(&self.pool)
            .await?;

        let columns = table
            .headers
            .iter()
            .map(|h| format!(r#""{}" TEXT"#, h))
            .collect::<Vec<_>>()
            .join(", ");

        sqlx::query(&format!(r#"CREATE TABLE "{}" ({})"#, name, columns))
            .execute(&self.pool)
            .await?;

        let placeholders = vec!["?"; table.headers.len()].join(", ");
        let insert = format!(r#"INSERT INTO "{}" VALUES ({})"#, name, placeholders);

        let mut inserted = 0u64;
        for record in &table.records {
            let mut query = sqlx::query(&insert);
            for field in record {
                query = query.bind(field);
            }
            query.execute(&self.pool).await?;
            inserted += 1;
        }

        self.record_dataset(DbDataset {
            name: name.to_string(),
            source_path: source_path.to_string(),
            row_count: inserted as i64,
            loaded_at: Utc::now().to_rfc3339(),
        })
        .await?;

        info!("Loaded {} rows into table {}", inserted, name);
        Ok(inserted)
    }

    // ==================== UTILITY ====================

    /// Get database pool reference
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close database connection
    pub async fn close(self) {
        self.pool.close().await;
    }
}

/// Dynamic table and column names come from CSV headers; only plain
/// snake_case identifiers are allowed into SQL text.
fn validate_identifier(name: &str) -> Result<()> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(c) if c.is_ascii_lowercase() || c == '_' => {
            chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
        }
        _ => false,
    };

    if valid {
        Ok(())
    } else {
        Err(DatabaseError::InvalidIdentifier(name.to_string()))
    }
}
