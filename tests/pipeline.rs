//! Integration test: raw CSV through cleaning into the database

use std::fs;

use analysis_toolkit::dataset_clean::{clean_csv, CleaningConfig};
use analysis_toolkit::dataset_db::DatasetDatabase;
use tempfile::tempdir;

#[tokio::test]
async fn raw_csv_flows_into_database() {
    let dir = tempdir().unwrap();
    let raw = dir.path().join("data/raw/counties.csv");
    let cleaned = dir.path().join("data/cleaned/counties.csv");

    fs::create_dir_all(raw.parent().unwrap()).unwrap();
    fs::write(
        &raw,
        "Fips Code,County,IncomePerCap\n\
         1001, Autauga ,24571\n\
         1003,Baldwin,\n\
         1005,Barbour,16825\n",
    )
    .unwrap();

    let table = clean_csv(&raw, &cleaned, &CleaningConfig::default()).unwrap();
    assert_eq!(table.headers, vec!["fips_code", "county", "income_per_cap"]);
    assert_eq!(table.row_count(), 2);

    let db = DatasetDatabase::new(":memory:").await.unwrap();
    let inserted = db
        .load_table("counties", &cleaned.display().to_string(), &table)
        .await
        .unwrap();

    assert_eq!(inserted, 2);

    let registered = db.get_dataset("counties").await.unwrap();
    assert_eq!(registered.row_count, 2);
    assert_eq!(db.dataset_count().await.unwrap(), 1);
}
