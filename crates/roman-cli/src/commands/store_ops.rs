use roman_core::store::Record;
use serde::Serialize;

use super::resolve_store;

#[derive(Serialize)]
struct HistoryOutput<'a> {
    file: String,
    rows: &'a [Record],
}

/// Tab-separated rows, then a `---` footer with the row count.
pub fn format_rows(rows: &[Record]) -> String {
    if rows.is_empty() {
        return "(empty)\n".to_string();
    }
    let mut out = String::new();
    for row in rows {
        out.push_str(&row.join("\t"));
        out.push('\n');
    }
    out.push_str("---\n");
    let noun = if rows.len() == 1 { "row" } else { "rows" };
    out.push_str(&format!("{} {noun}\n", rows.len()));
    out
}

pub fn history_cmd(file: Option<&str>, json: bool) {
    let store = resolve_store(file);
    let rows = die!(
        store.load(),
        "Error reading {}: {}",
        store.path().display()
    );
    if json {
        let output = HistoryOutput {
            file: store.path().display().to_string(),
            rows: &rows,
        };
        let text = die!(serde_json::to_string_pretty(&output), "Error: {}");
        println!("{text}");
    } else {
        print!("{}", format_rows(&rows));
    }
}
