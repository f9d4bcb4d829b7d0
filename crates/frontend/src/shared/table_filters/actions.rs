//! Row-level actions of the filter bar: CSV download and label/report printing.

use serde_json::Value;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use super::toolbar::PrintTarget;
use crate::shared::api_utils::api_url;
use crate::shared::error::FilterError;

/// Column names: union of object keys in first-seen order
fn csv_columns(rows: &[Value]) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    for row in rows {
        if let Value::Object(map) = row {
            for key in map.keys() {
                if !columns.iter().any(|c| c == key) {
                    columns.push(key.clone());
                }
            }
        }
    }
    columns
}

pub fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Quote a cell containing the separator, quotes or line breaks
fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(';') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

/// `;`-separated CSV with a UTF-8 BOM so spreadsheet apps pick the right encoding.
pub fn rows_to_csv(rows: &[Value]) -> String {
    let columns = csv_columns(rows);
    let mut csv = String::from('\u{FEFF}');

    let header: Vec<String> = columns.iter().map(|c| escape_csv_cell(c)).collect();
    csv.push_str(&header.join(";"));
    csv.push('\n');

    for row in rows {
        let cells: Vec<String> = columns
            .iter()
            .map(|c| escape_csv_cell(&cell_text(row.get(c))))
            .collect();
        csv.push_str(&cells.join(";"));
        csv.push('\n');
    }
    csv
}

fn create_csv_blob(content: &str) -> Result<Blob, FilterError> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| FilterError::Export(format!("failed to create blob: {:?}", e)))
}

fn download_blob(blob: &Blob, filename: &str) -> Result<(), FilterError> {
    let export_error = |what: &str, e: wasm_bindgen::JsValue| {
        FilterError::Export(format!("{}: {:?}", what, e))
    };
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| FilterError::Export("no document".to_string()))?;
    let body = document
        .body()
        .ok_or_else(|| FilterError::Export("no body element".to_string()))?;

    let url = Url::create_object_url_with_blob(blob).map_err(|e| export_error("object url", e))?;
    let anchor = document
        .create_element("a")
        .map_err(|e| export_error("create anchor", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| FilterError::Export("element is not an anchor".to_string()))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    let _ = anchor.style().set_property("display", "none");

    body.append_child(&anchor)
        .map_err(|e| export_error("append anchor", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| export_error("remove anchor", e))?;

    Url::revoke_object_url(&url).map_err(|e| export_error("revoke url", e))
}

/// Download the given rows as `<table_key>.csv`
pub fn download_rows(table_key: &str, rows: &[Value]) -> Result<(), FilterError> {
    if rows.is_empty() {
        return Err(FilterError::NoRows("download"));
    }
    let blob = create_csv_blob(&rows_to_csv(rows))?;
    download_blob(&blob, &format!("{}.csv", table_key.to_lowercase()))
}

/// Primary keys of the rows, as strings
pub fn row_ids(rows: &[Value], id_field: &str) -> Vec<String> {
    rows.iter()
        .filter_map(|row| match row.get(id_field)? {
            Value::Number(n) => Some(n.to_string()),
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            _ => None,
        })
        .collect()
}

/// `url?key=1&key=2`, appended with `&` when the url already has a query
pub fn print_url(target: &PrintTarget, ids: &[String]) -> String {
    let params = ids
        .iter()
        .map(|id| format!("{}={}", urlencoding::encode(&target.key), urlencoding::encode(id)))
        .collect::<Vec<_>>()
        .join("&");
    let separator = if target.url.contains('?') { '&' } else { '?' };
    format!("{}{}{}", target.url, separator, params)
}

/// Open the print endpoint for the given rows in a new window.
pub fn print_rows(target: &PrintTarget, rows: &[Value]) -> Result<(), FilterError> {
    let ids = row_ids(rows, "pk");
    if ids.is_empty() {
        return Err(FilterError::NoRows("print"));
    }

    let url = api_url(&print_url(target, &ids));
    let window = web_sys::window().ok_or_else(|| FilterError::Export("no window".to_string()))?;
    window
        .open_with_url_and_target(&url, "_blank")
        .map_err(|e| FilterError::Request {
            url: url.clone(),
            message: format!("{:?}", e),
        })?;
    Ok(())
}
