use std::path::Path;

use anyhow::{Context, Result};
use arrow::array::{Array, ArrayRef, AsArray, Float64Array, StringArray};
use arrow::compute::cast;
use arrow::datatypes::{DataType, Float64Type};
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde::Deserialize;
use serde_json::Value as JsonValue;
use thiserror::Error;

use super::model::{
    LaunchDataset, LaunchRecord, Outcome, COL_BOOSTER_CATEGORY, COL_CLASS, COL_LAUNCH_SITE,
    COL_PAYLOAD_MASS, REQUIRED_COLUMNS,
};

// ---------------------------------------------------------------------------
// Validation errors
// ---------------------------------------------------------------------------

/// Domain validation failures. I/O and decoding failures travel as plain
/// `anyhow` context instead.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LoadError {
    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),

    #[error("missing required column '{0}'")]
    MissingColumn(String),

    #[error("row {row}: class must be 0 or 1, got {value}")]
    InvalidOutcome { row: usize, value: String },

    #[error("row {row}: payload mass must be a non-negative number, got {value}")]
    InvalidPayload { row: usize, value: String },

    #[error("row {row}: launch site is empty")]
    EmptySite { row: usize },
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a launch dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row with the original dataset's column names
/// * `.json`    – `[{ "Launch Site": ..., "Payload Mass (kg)": ..., ... }, ...]`
/// * `.parquet` – one column per field, any row-group layout
pub fn load_file(path: &Path) -> Result<LaunchDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        other => Err(LoadError::UnsupportedExtension(other.to_string()).into()),
    }
}

// ---------------------------------------------------------------------------
// Raw row shared by the CSV and JSON readers
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Launch Site")]
    launch_site: String,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "class")]
    class: f64,
    #[serde(rename = "Booster Version Category")]
    booster_version_category: String,
}

impl RawRecord {
    /// Validate one row. `row` is 1-based over data rows.
    fn into_record(self, row: usize) -> Result<LaunchRecord, LoadError> {
        validate(
            row,
            self.launch_site,
            self.payload_mass_kg,
            self.class,
            self.booster_version_category,
        )
    }
}

fn validate(
    row: usize,
    launch_site: String,
    payload_mass_kg: f64,
    class: f64,
    booster_version_category: String,
) -> Result<LaunchRecord, LoadError> {
    let launch_site = launch_site.trim().to_string();
    if launch_site.is_empty() {
        return Err(LoadError::EmptySite { row });
    }
    if !payload_mass_kg.is_finite() || payload_mass_kg < 0.0 {
        return Err(LoadError::InvalidPayload {
            row,
            value: payload_mass_kg.to_string(),
        });
    }
    // Float-encoded classes such as `1.0` are accepted.
    let outcome = if class.fract() == 0.0 {
        Outcome::from_class(class as i64)
    } else {
        None
    };
    let outcome = outcome.ok_or_else(|| LoadError::InvalidOutcome {
        row,
        value: class.to_string(),
    })?;

    Ok(LaunchRecord::new(
        launch_site,
        payload_mass_kg,
        outcome,
        booster_version_category.trim(),
    ))
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names; only the four required
/// columns are read, any others (`Flight Number`, `Mission Outcome`, ...)
/// are ignored.
fn load_csv(path: &Path) -> Result<LaunchDataset> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .context("opening CSV")?;
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let present: Vec<&str> = headers.iter().map(String::as_str).collect();
    check_columns(&present)?;

    let mut records = Vec::new();
    for (i, result) in reader.deserialize::<RawRecord>().enumerate() {
        let row = i + 1;
        let raw = result.with_context(|| format!("CSV row {row}"))?;
        records.push(raw.into_record(row)?);
    }

    Ok(LaunchDataset::from_records(records))
}

fn check_columns(present: &[&str]) -> Result<(), LoadError> {
    for required in REQUIRED_COLUMNS {
        if !present.contains(&required) {
            return Err(LoadError::MissingColumn(required.to_string()));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, `df.to_json(orient='records')`):
///
/// ```json
/// [
///   {
///     "Launch Site": "CCAFS LC-40",
///     "Payload Mass (kg)": 525.0,
///     "class": 1,
///     "Booster Version Category": "v1.0"
///   },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<LaunchDataset> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON")?;

    let rows = root.as_array().context("Expected top-level JSON array")?;

    let mut records = Vec::with_capacity(rows.len());
    for (i, value) in rows.iter().enumerate() {
        let row = i + 1;
        let obj = value
            .as_object()
            .with_context(|| format!("JSON row {row} is not an object"))?;
        let present: Vec<&str> = obj.keys().map(String::as_str).collect();
        check_columns(&present)?;

        let raw: RawRecord = serde_json::from_value(value.clone())
            .with_context(|| format!("JSON row {row}"))?;
        records.push(raw.into_record(row)?);
    }

    Ok(LaunchDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file with the four required columns.
///
/// Works with files written by both **Pandas** (`df.to_parquet()`) and
/// **Polars** (`df.write_parquet()`): payload and `class` may be any numeric
/// or boolean type, text columns any string or dictionary-of-string type.
fn load_parquet(path: &Path) -> Result<LaunchDataset> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;

    {
        let schema = builder.schema();
        let present: Vec<&str> = schema.fields().iter().map(|f| f.name().as_str()).collect();
        check_columns(&present)?;
    }

    let reader = builder.build().context("building parquet reader")?;

    let mut records = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let site_col = string_column(&batch, COL_LAUNCH_SITE)?;
        let payload_col = f64_column(&batch, COL_PAYLOAD_MASS)?;
        let class_col = f64_column(&batch, COL_CLASS)?;
        let booster_col = string_column(&batch, COL_BOOSTER_CATEGORY)?;

        for i in 0..batch.num_rows() {
            let row = records.len() + 1;
            let launch_site = string_value(&site_col, i)
                .with_context(|| format!("Row {row}: failed to read '{COL_LAUNCH_SITE}'"))?;
            let booster = string_value(&booster_col, i)
                .with_context(|| format!("Row {row}: failed to read '{COL_BOOSTER_CATEGORY}'"))?;
            let payload = f64_value(&payload_col, i);
            let class = f64_value(&class_col, i);

            records.push(validate(row, launch_site, payload, class, booster)?);
        }
    }

    Ok(LaunchDataset::from_records(records))
}

// -- Parquet / Arrow helpers --

fn column<'b>(batch: &'b RecordBatch, name: &str) -> Result<&'b ArrayRef> {
    let idx = batch
        .schema()
        .index_of(name)
        .map_err(|_| LoadError::MissingColumn(name.to_string()))?;
    Ok(batch.column(idx))
}

/// Cast any string-like column (LargeUtf8, Utf8View, dictionary) to Utf8.
fn string_column(batch: &RecordBatch, name: &str) -> Result<StringArray> {
    let col = column(batch, name)?;
    let utf8 = cast(col, &DataType::Utf8)
        .with_context(|| format!("column '{name}' ({:?}) is not text", col.data_type()))?;
    Ok(utf8.as_string::<i32>().clone())
}

/// Cast any numeric or boolean column to Float64.
fn f64_column(batch: &RecordBatch, name: &str) -> Result<Float64Array> {
    let col = column(batch, name)?;
    let floats = cast(col, &DataType::Float64)
        .with_context(|| format!("column '{name}' ({:?}) is not numeric", col.data_type()))?;
    Ok(floats.as_primitive::<Float64Type>().clone())
}

/// Nulls are rejected.
fn string_value(col: &StringArray, row: usize) -> Result<String> {
    if col.is_null(row) {
        anyhow::bail!("null value in string column");
    }
    Ok(col.value(row).to_string())
}

/// Nulls become NaN and fail validation.
fn f64_value(col: &Float64Array, row: usize) -> f64 {
    if col.is_null(row) {
        f64::NAN
    } else {
        col.value(row)
    }
}
