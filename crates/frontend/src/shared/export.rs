//! CSV export: renders rows through [`CsvExportable`] and hands the result
//! to the browser as a downloaded file.

use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Types that can be written to the spreadsheet export.
pub trait CsvExportable {
    fn headers() -> Vec<&'static str>;
    fn to_csv_row(&self) -> Vec<String>;
}

/// Render `data` as semicolon-separated CSV and trigger a download.
pub fn export_to_csv<T: CsvExportable>(data: &[T], filename: &str) -> Result<(), String> {
    if data.is_empty() {
        return Err("Nothing to export".to_string());
    }

    let mut content = String::new();

    // UTF-8 BOM so Excel picks the right encoding
    content.push('\u{FEFF}');

    content.push_str(&T::headers().join(";"));
    content.push('\n');

    for item in data {
        let escaped: Vec<String> = item
            .to_csv_row()
            .iter()
            .map(|cell| escape_csv_cell(cell))
            .collect();
        content.push_str(&escaped.join(";"));
        content.push('\n');
    }

    let blob = create_csv_blob(&content)?;
    download_blob(&blob, filename)
}

fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(';') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        let escaped = cell.replace('"', "\"\"");
        format!("\"{}\"", escaped)
    } else {
        cell.to_string()
    }
}

fn create_csv_blob(content: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let options = BlobPropertyBag::new();
    options.set_type("text/csv;charset=utf-8");

    Blob::new_with_str_sequence_and_options(&array, &options)
        .map_err(|e| format!("failed to create blob: {e:?}"))
}

fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let url =
        Url::create_object_url_with_blob(blob).map_err(|e| format!("object URL failed: {e:?}"))?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "no document".to_string())?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| format!("create element failed: {e:?}"))?
        .dyn_into()
        .map_err(|_| "not an anchor".to_string())?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();

    let _ = Url::revoke_object_url(&url);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_cells_are_untouched() {
        assert_eq!(escape_csv_cell("ACME Traders"), "ACME Traders");
        assert_eq!(escape_csv_cell("1250.50"), "1250.50");
    }

    #[test]
    fn separators_and_quotes_are_escaped() {
        assert_eq!(escape_csv_cell("a;b"), "\"a;b\"");
        assert_eq!(escape_csv_cell("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_csv_cell("line\nbreak"), "\"line\nbreak\"");
    }
}
