use serde::{Deserialize, Serialize};

/// Registry entry for a loaded dataset
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct DbDataset {
    pub name: String,
    pub source_path: String,
    pub row_count: i64,
    pub loaded_at: String, // ISO 8601
}

/// County FIPS reference row
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct DbFips {
    pub fips_code: i64,
    pub state: Option<String>,
    pub county: Option<String>,
}

/// Car price dataset row
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct DbCarPrice {
    pub brand: String,
    pub model: String,
    pub year: Option<i64>,
    pub engine_size: Option<f64>,
    pub fuel_type: Option<String>,
    pub transmission: Option<String>,
    pub mileage: Option<i64>,
    pub doors: Option<i64>,
    pub owner_count: Option<i64>,
    pub price: Option<i64>,
}
