use sqlx::SqlitePool;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
}

pub type Result<T> = std::result::Result<T, SchemaError>;

/// Database schema version
pub const SCHEMA_VERSION: i32 = 1;

/// Initialize database schema
pub async fn initialize_schema(pool: &SqlitePool) -> Result<()> {
    // Registry of loaded datasets
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS datasets (
            name TEXT PRIMARY KEY,
            source_path TEXT NOT NULL,
            row_count INTEGER NOT NULL,
            loaded_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_datasets_loaded ON datasets(loaded_at)")
        .execute(pool)
        .await?;

    // FIPS county reference table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS fips (
            fips_code INTEGER PRIMARY KEY,
            state TEXT,
            county TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_fips_state ON fips(state)")
        .execute(pool)
        .await?;

    // Car price example dataset
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS car_prices (
            brand TEXT NOT NULL,
            model TEXT NOT NULL,
            year INTEGER,
            engine_size REAL,
            fuel_type TEXT,
            transmission TEXT,
            mileage INTEGER,
            doors INTEGER,
            owner_count INTEGER,
            price INTEGER,
            PRIMARY KEY (brand, model)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_car_prices_year ON car_prices(year)")
        .execute(pool)
        .await?;

    Ok(())
}

/// Get current schema version
pub fn get_schema_version() -> i32 {
    SCHEMA_VERSION
}
