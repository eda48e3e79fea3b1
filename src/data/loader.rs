use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use arrow::array::{
    Array, ArrayRef, Float32Array, Float64Array, Int32Array, Int64Array, LargeStringArray,
    StringArray,
};
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde::Deserialize;

use super::model::{LaunchDataset, LaunchRecord, Outcome};

/// Column names as they appear in the source files.
pub const COL_SITE: &str = "Launch Site";
pub const COL_PAYLOAD: &str = "Payload Mass (kg)";
pub const COL_CLASS: &str = "class";
pub const COL_BOOSTER: &str = "Booster Version Category";

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a launch-records table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row with the four required columns; extras ignored
/// * `.json`    – `[{ "Launch Site": ..., "Payload Mass (kg)": ..., ... }, ...]`
/// * `.parquet` – flat scalar columns with the same names (e.g. `df.to_parquet()`)
pub fn load_file(path: &Path) -> Result<LaunchDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let records = match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        other => bail!("Unsupported file extension: .{other}"),
    }?;

    if records.is_empty() {
        bail!("No launch records in {}", path.display());
    }
    Ok(LaunchDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// Raw row schema shared by the CSV and JSON readers
// ---------------------------------------------------------------------------

/// One row as it appears on disk, before the `class` column is validated.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Launch Site")]
    site: String,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "class")]
    class: i64,
    #[serde(rename = "Booster Version Category")]
    booster_category: String,
}

impl TryFrom<RawRecord> for LaunchRecord {
    type Error = super::model::InvalidClass;

    fn try_from(raw: RawRecord) -> Result<Self, Self::Error> {
        Ok(LaunchRecord {
            site: raw.site,
            payload_mass_kg: raw.payload_mass_kg,
            outcome: Outcome::from_class(raw.class)?,
            booster_category: raw.booster_category,
        })
    }
}

// ---------------------------------------------------------------------------
// CSV reader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<Vec<LaunchRecord>> {
    let file = File::open(path).context("opening CSV")?;
    read_csv(file)
}

fn read_csv<R: Read>(reader: R) -> Result<Vec<LaunchRecord>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut records = Vec::new();

    for (row_no, result) in rdr.deserialize::<RawRecord>().enumerate() {
        let raw = result.with_context(|| format!("CSV row {row_no}"))?;
        let rec = LaunchRecord::try_from(raw).with_context(|| format!("CSV row {row_no}"))?;
        records.push(rec);
    }
    Ok(records)
}

// ---------------------------------------------------------------------------
// JSON reader
// ---------------------------------------------------------------------------

/// Records-oriented JSON, the default `df.to_json(orient='records')` layout.
fn load_json(path: &Path) -> Result<Vec<LaunchRecord>> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    parse_json_records(&text)
}

fn parse_json_records(text: &str) -> Result<Vec<LaunchRecord>> {
    let raw: Vec<RawRecord> = serde_json::from_str(text).context("parsing JSON")?;
    raw.into_iter()
        .enumerate()
        .map(|(row_no, r)| {
            LaunchRecord::try_from(r).with_context(|| format!("JSON row {row_no}"))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Parquet reader
// ---------------------------------------------------------------------------

/// Load launch records from a Parquet file with flat scalar columns.
///
/// Expected schema:
/// - `Launch Site`: Utf8
/// - `Payload Mass (kg)`: Float64 (Float32/Int64/Int32 accepted)
/// - `class`: Int64 or Int32, values 0/1
/// - `Booster Version Category`: Utf8
///
/// Any other columns are ignored.
fn load_parquet(path: &Path) -> Result<Vec<LaunchRecord>> {
    let file = File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut records = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;

        let site_col = column(&batch, COL_SITE)?;
        let payload_col = column(&batch, COL_PAYLOAD)?;
        let class_col = column(&batch, COL_CLASS)?;
        let booster_col = column(&batch, COL_BOOSTER)?;

        for row in 0..batch.num_rows() {
            let site = string_value(site_col, row)
                .with_context(|| format!("Row {row}: failed to read '{COL_SITE}'"))?;
            let payload_mass_kg = f64_value(payload_col, row)
                .with_context(|| format!("Row {row}: failed to read '{COL_PAYLOAD}'"))?;
            let class = i64_value(class_col, row)
                .with_context(|| format!("Row {row}: failed to read '{COL_CLASS}'"))?;
            let booster_category = string_value(booster_col, row)
                .with_context(|| format!("Row {row}: failed to read '{COL_BOOSTER}'"))?;

            let outcome =
                Outcome::from_class(class).with_context(|| format!("Row {row}"))?;

            records.push(LaunchRecord {
                site,
                payload_mass_kg,
                outcome,
                booster_category,
            });
        }
    }

    Ok(records)
}

// -- Arrow helpers --

fn column<'a>(batch: &'a RecordBatch, name: &str) -> Result<&'a ArrayRef> {
    let idx = batch
        .schema()
        .index_of(name)
        .map_err(|_| anyhow::anyhow!("Parquet file missing '{name}' column"))?;
    Ok(batch.column(idx))
}

fn string_value(col: &Arc<dyn Array>, row: usize) -> Result<String> {
    if col.is_null(row) {
        bail!("null value in string column");
    }
    match col.data_type() {
        DataType::Utf8 => {
            let arr = col
                .as_any()
                .downcast_ref::<StringArray>()
                .context("expected StringArray")?;
            Ok(arr.value(row).to_string())
        }
        DataType::LargeUtf8 => {
            let arr = col
                .as_any()
                .downcast_ref::<LargeStringArray>()
                .context("expected LargeStringArray")?;
            Ok(arr.value(row).to_string())
        }
        other => bail!("Expected a string column, got {other:?}"),
    }
}

fn f64_value(col: &Arc<dyn Array>, row: usize) -> Result<f64> {
    if col.is_null(row) {
        bail!("null value in numeric column");
    }
    match col.data_type() {
        DataType::Float64 => {
            let arr = col.as_any().downcast_ref::<Float64Array>().unwrap();
            Ok(arr.value(row))
        }
        DataType::Float32 => {
            let arr = col.as_any().downcast_ref::<Float32Array>().unwrap();
            Ok(arr.value(row) as f64)
        }
        DataType::Int64 => {
            let arr = col.as_any().downcast_ref::<Int64Array>().unwrap();
            Ok(arr.value(row) as f64)
        }
        DataType::Int32 => {
            let arr = col.as_any().downcast_ref::<Int32Array>().unwrap();
            Ok(arr.value(row) as f64)
        }
        other => bail!("Expected a numeric column, got {other:?}"),
    }
}

fn i64_value(col: &Arc<dyn Array>, row: usize) -> Result<i64> {
    if col.is_null(row) {
        bail!("null value in integer column");
    }
    match col.data_type() {
        DataType::Int64 => {
            let arr = col.as_any().downcast_ref::<Int64Array>().unwrap();
            Ok(arr.value(row))
        }
        DataType::Int32 => {
            let arr = col.as_any().downcast_ref::<Int32Array>().unwrap();
            Ok(arr.value(row) as i64)
        }
        other => bail!("Expected an integer column, got {other:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrow::datatypes::{Field, Schema};
    use parquet::arrow::ArrowWriter;

    const CSV_SAMPLE: &str = "\
Flight Number,Launch Site,Payload Mass (kg),class,Booster Version Category
1,CCAFS LC-40,500.0,1,v1.0
2,CCAFS LC-40,1500.0,0,v1.1
3,VAFB SLC-4E,800.0,1,FT
";

    #[test]
    fn csv_reader_parses_rows_and_ignores_extra_columns() {
        let records = read_csv(CSV_SAMPLE.as_bytes()).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].site, "CCAFS LC-40");
        assert_eq!(records[0].payload_mass_kg, 500.0);
        assert_eq!(records[0].outcome, Outcome::Success);
        assert_eq!(records[1].outcome, Outcome::Failure);
        assert_eq!(records[2].booster_category, "FT");
    }

    #[test]
    fn csv_reader_rejects_non_binary_class() {
        let bad = "\
Launch Site,Payload Mass (kg),class,Booster Version Category
CCAFS LC-40,500.0,3,v1.0
";
        let err = read_csv(bad.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("row 0"), "{err:#}");
    }

    #[test]
    fn csv_reader_rejects_missing_column() {
        let bad = "\
Launch Site,class,Booster Version Category
CCAFS LC-40,1,v1.0
";
        assert!(read_csv(bad.as_bytes()).is_err());
    }

    #[test]
    fn csv_reader_rejects_unparseable_payload() {
        let bad = "\
Launch Site,Payload Mass (kg),class,Booster Version Category
CCAFS LC-40,heavy,1,v1.0
";
        assert!(read_csv(bad.as_bytes()).is_err());
    }

    #[test]
    fn json_reader_parses_records() {
        let text = r#"[
            {"Launch Site": "KSC LC-39A", "Payload Mass (kg)": 3600.0, "class": 1, "Booster Version Category": "FT"},
            {"Launch Site": "CCAFS SLC-40", "Payload Mass (kg)": 2200.0, "class": 0, "Booster Version Category": "B4"}
        ]"#;
        let records = parse_json_records(text).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].site, "KSC LC-39A");
        assert_eq!(records[1].outcome, Outcome::Failure);
    }

    #[test]
    fn json_reader_rejects_non_binary_class() {
        let text = r#"[
            {"Launch Site": "KSC LC-39A", "Payload Mass (kg)": 3600.0, "class": 7, "Booster Version Category": "FT"}
        ]"#;
        let err = parse_json_records(text).unwrap_err();
        assert!(err.to_string().contains("JSON row 0"), "{err:#}");
    }

    #[test]
    fn load_file_rejects_unknown_extension() {
        let err = load_file(Path::new("records.xlsx")).unwrap_err();
        assert!(err.to_string().contains(".xlsx"), "{err:#}");
    }

    #[test]
    fn load_file_rejects_empty_table() {
        let path = std::env::temp_dir().join(format!(
            "launchboard_empty_{}.csv",
            std::process::id()
        ));
        std::fs::write(
            &path,
            "Launch Site,Payload Mass (kg),class,Booster Version Category\n",
        )
        .unwrap();
        let err = load_file(&path).unwrap_err();
        let _ = std::fs::remove_file(&path);
        assert!(err.to_string().contains("No launch records"), "{err:#}");
    }

    #[test]
    fn parquet_round_trip() {
        let schema = Arc::new(Schema::new(vec![
            Field::new(COL_SITE, DataType::Utf8, false),
            Field::new(COL_PAYLOAD, DataType::Float64, false),
            Field::new(COL_CLASS, DataType::Int64, false),
            Field::new(COL_BOOSTER, DataType::Utf8, false),
        ]));
        let batch = RecordBatch::try_new(
            schema.clone(),
            vec![
                Arc::new(StringArray::from(vec!["CCAFS LC-40", "VAFB SLC-4E"])),
                Arc::new(Float64Array::from(vec![500.0, 4100.0])),
                Arc::new(Int64Array::from(vec![1, 0])),
                Arc::new(StringArray::from(vec!["v1.0", "FT"])),
            ],
        )
        .unwrap();

        let path = std::env::temp_dir().join(format!(
            "launchboard_roundtrip_{}.parquet",
            std::process::id()
        ));
        let file = File::create(&path).unwrap();
        let mut writer = ArrowWriter::try_new(file, schema, None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();

        let dataset = load_file(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.records[0].site, "CCAFS LC-40");
        assert_eq!(dataset.records[0].outcome, Outcome::Success);
        assert_eq!(dataset.records[1].payload_mass_kg, 4100.0);
        assert_eq!(dataset.sites, vec!["CCAFS LC-40", "VAFB SLC-4E"]);
    }
}
