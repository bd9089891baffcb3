use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One preview row: column name -> cell value (string, number or null).
/// `serde_json` is built with `preserve_order`, so iteration yields the
/// server's column order.
pub type Row = serde_json::Map<String, Value>;

/// Response of `POST /upload`.
///
/// `preview` holds the first rows of the uploaded file. The shape counts
/// and column list are optional: older service builds return only
/// `filename` and `preview`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResult {
    pub filename: String,
    #[serde(default)]
    pub preview: Vec<Row>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rows: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_names: Option<Vec<String>>,
}

/// Response of `GET /summarize/{filename}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryData {
    pub overall_stats: OverallStats,
    /// Per-column details, in the dataset's column order
    pub column_details: Vec<ColumnDetail>,
}

/// Dataset-level counters for the overall stat cards
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverallStats {
    pub rows: u64,
    pub columns: u64,
    pub missing_cells: u64,
    /// Already formatted server-side; rendered verbatim with a trailing "%"
    pub missing_cells_percent: f64,
}

/// Summary of a single column.
///
/// The numeric/categorical branch is a tagged union on the wire field
/// `type`, so a numeric column always carries `stats` and never
/// `unique_values`, and vice versa.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnDetail {
    pub column_name: String,
    /// Display label for the inferred dtype (e.g. "int64", "object")
    pub data_type: String,
    pub missing_values: u64,
    #[serde(flatten)]
    pub kind: ColumnKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ColumnKind {
    Numeric {
        stats: NumericStats,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        histogram: Option<Histogram>,
    },
    Categorical {
        unique_values: u64,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NumericStats {
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub max: f64,
}

/// Histogram of a numeric column: `bins` are the edges, `counts` the
/// per-bin totals, so `bins.len() == counts.len() + 1`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Histogram {
    pub bins: Vec<f64>,
    pub counts: Vec<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_result_minimal() {
        let json = r#"{"filename": "data.csv", "preview": []}"#;
        let result: UploadResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.filename, "data.csv");
        assert!(result.preview.is_empty());
        assert_eq!(result.rows, None);
        assert_eq!(result.column_names, None);
    }

    #[test]
    fn test_upload_result_with_shape() {
        let json = r#"{
            "filename": "data.csv",
            "rows": 100,
            "columns": 2,
            "column_names": ["age", "city"],
            "preview": [{"age": 34, "city": "Berlin"}]
        }"#;
        let result: UploadResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.rows, Some(100));
        assert_eq!(result.columns, Some(2));
        assert_eq!(
            result.column_names.as_deref(),
            Some(&["age".to_string(), "city".to_string()][..])
        );
        assert_eq!(result.preview.len(), 1);
    }

    #[test]
    fn test_row_preserves_column_order() {
        let json = r#"{"zeta": 1, "alpha": "x", "mid": null}"#;
        let row: Row = serde_json::from_str(json).unwrap();
        let keys: Vec<&String> = row.keys().collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_numeric_column_deserializes() {
        let json = r#"{
            "column_name": "age",
            "data_type": "int64",
            "missing_values": 3,
            "type": "numeric",
            "stats": {"mean": 34.5, "std": 8.1, "min": 18.0, "max": 65.0},
            "histogram": {"bins": [18.0, 41.5, 65.0], "counts": [40, 57]}
        }"#;
        let detail: ColumnDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.column_name, "age");
        assert_eq!(detail.missing_values, 3);
        match detail.kind {
            ColumnKind::Numeric { stats, histogram } => {
                assert_eq!(stats.mean, 34.5);
                assert_eq!(stats.max, 65.0);
                let histogram = histogram.unwrap();
                assert_eq!(histogram.bins.len(), histogram.counts.len() + 1);
            }
            ColumnKind::Categorical { .. } => panic!("expected numeric column"),
        }
    }

    #[test]
    fn test_numeric_column_without_histogram() {
        let json = r#"{
            "column_name": "score",
            "data_type": "float64",
            "missing_values": 0,
            "type": "numeric",
            "stats": {"mean": 0.5, "std": 0.1, "min": 0.0, "max": 1.0}
        }"#;
        let detail: ColumnDetail = serde_json::from_str(json).unwrap();
        match detail.kind {
            ColumnKind::Numeric { histogram, .. } => assert!(histogram.is_none()),
            ColumnKind::Categorical { .. } => panic!("expected numeric column"),
        }
    }

    #[test]
    fn test_categorical_column_deserializes() {
        let json = r#"{
            "column_name": "city",
            "data_type": "object",
            "missing_values": 0,
            "type": "categorical",
            "unique_values": 12
        }"#;
        let detail: ColumnDetail = serde_json::from_str(json).unwrap();
        match detail.kind {
            ColumnKind::Categorical { unique_values } => assert_eq!(unique_values, 12),
            ColumnKind::Numeric { .. } => panic!("expected categorical column"),
        }
    }

    #[test]
    fn test_column_kind_roundtrips_tag() {
        let detail = ColumnDetail {
            column_name: "city".to_string(),
            data_type: "object".to_string(),
            missing_values: 1,
            kind: ColumnKind::Categorical { unique_values: 4 },
        };
        let value = serde_json::to_value(&detail).unwrap();
        assert_eq!(value["type"], "categorical");
        assert_eq!(value["unique_values"], 4);
        assert!(value.get("stats").is_none());

        let back: ColumnDetail = serde_json::from_value(value).unwrap();
        match back.kind {
            ColumnKind::Categorical { unique_values } => assert_eq!(unique_values, 4),
            ColumnKind::Numeric { .. } => panic!("tag did not round-trip"),
        }
    }

    #[test]
    fn test_summary_data_deserializes() {
        let json = r#"{
            "overall_stats": {
                "rows": 100, "columns": 2,
                "missing_cells": 3, "missing_cells_percent": 1.5
            },
            "column_details": [
                {
                    "column_name": "age", "data_type": "int64",
                    "missing_values": 3, "type": "numeric",
                    "stats": {"mean": 34.5, "std": 8.1, "min": 18.0, "max": 65.0}
                },
                {
                    "column_name": "city", "data_type": "object",
                    "missing_values": 0, "type": "categorical",
                    "unique_values": 12
                }
            ]
        }"#;
        let summary: SummaryData = serde_json::from_str(json).unwrap();
        assert_eq!(summary.overall_stats.rows, 100);
        assert_eq!(summary.overall_stats.missing_cells_percent, 1.5);
        assert_eq!(summary.column_details.len(), 2);
    }
}
