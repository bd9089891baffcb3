use contracts::analysis::{Row, UploadResult};
use leptos::prelude::*;
use serde_json::Value;

/// Column order comes from the first row; the service preserves the CSV
/// column order in its JSON objects.
fn header_columns(rows: &[Row]) -> Vec<String> {
    rows.first()
        .map(|row| row.keys().cloned().collect())
        .unwrap_or_default()
}

/// Missing keys and nulls render as empty cells. Values are rendered as
/// text nodes, so cell content is escaped by construction.
fn cell_text(row: &Row, column: &str) -> String {
    match row.get(column) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn shape_line(upload: &UploadResult) -> Option<String> {
    match (upload.rows, upload.columns) {
        (Some(rows), Some(columns)) => Some(format!("{} rows × {} columns", rows, columns)),
        _ => None,
    }
}

/// Raw-row preview of the uploaded file
#[component]
pub fn PreviewTable(upload: UploadResult) -> impl IntoView {
    let columns = header_columns(&upload.preview);

    if columns.is_empty() {
        return view! { <p class="preview__empty">"No preview data available."</p> }.into_any();
    }

    let meta = shape_line(&upload);

    view! {
        <div class="preview">
            {meta.map(|m| view! { <div class="preview__meta">{m}</div> })}
            <div class="preview__table-wrap">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            {columns.iter().map(|column| view! {
                                <th class="table__header-cell">{column.clone()}</th>
                            }).collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        {upload.preview.iter().map(|row| view! {
                            <tr class="table__row">
                                {columns.iter().map(|column| view! {
                                    <td class="table__cell">{cell_text(row, column)}</td>
                                }).collect_view()}
                            </tr>
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(json: &str) -> Row {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_header_from_first_row_in_order() {
        let rows = vec![
            row(r#"{"name": "a", "age": 1, "city": "x"}"#),
            row(r#"{"city": "y", "name": "b"}"#),
        ];
        assert_eq!(header_columns(&rows), ["name", "age", "city"]);
    }

    #[test]
    fn test_header_empty_for_no_rows() {
        assert!(header_columns(&[]).is_empty());
    }

    #[test]
    fn test_cell_text_values() {
        let r = row(r#"{"name": "a", "age": 34, "score": 1.5, "city": null}"#);
        assert_eq!(cell_text(&r, "name"), "a");
        assert_eq!(cell_text(&r, "age"), "34");
        assert_eq!(cell_text(&r, "score"), "1.5");
        assert_eq!(cell_text(&r, "city"), "");
        // key absent from this row entirely
        assert_eq!(cell_text(&r, "missing"), "");
    }

    #[test]
    fn test_shape_line_needs_both_counts() {
        let mut upload: UploadResult =
            serde_json::from_str(r#"{"filename": "a.csv", "preview": []}"#).unwrap();
        assert_eq!(shape_line(&upload), None);

        upload.rows = Some(100);
        assert_eq!(shape_line(&upload), None);

        upload.columns = Some(3);
        assert_eq!(shape_line(&upload).as_deref(), Some("100 rows × 3 columns"));
    }
}
