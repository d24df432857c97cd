//! CSV export for tables.

/// Quote a cell: wrap in `"` and double embedded quotes.
fn escape_cell(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Header row plus data rows, every cell quoted, rows joined by `\n`.
pub fn to_csv<S: AsRef<str>>(headers: &[S], rows: &[Vec<String>]) -> String {
    std::iter::once(headers.iter().map(|h| escape_cell(h.as_ref())).collect::<Vec<_>>())
        .chain(
            rows.iter()
                .map(|row| row.iter().map(|c| escape_cell(c)).collect::<Vec<_>>()),
        )
        .map(|cols| cols.join(","))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Keep only the `visible` column indices (in that order). An empty list
/// keeps every column; out-of-range indices are skipped.
pub fn select_columns(
    headers: &[String],
    rows: &[Vec<String>],
    visible: &[usize],
) -> (Vec<String>, Vec<Vec<String>>) {
    if visible.is_empty() {
        return (headers.to_vec(), rows.to_vec());
    }
    let pick = |cells: &[String]| -> Vec<String> {
        visible.iter().filter_map(|&i| cells.get(i).cloned()).collect()
    };
    (pick(headers), rows.iter().map(|r| pick(r)).collect())
}

/// Ensure the download name ends in `.csv`.
pub fn csv_file_name(name: &str) -> String {
    if name.ends_with(".csv") {
        name.to_string()
    } else {
        format!("{name}.csv")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn quotes_everything() {
        let csv = to_csv(&["id", "client"], &[row(&["INV-1", "Acme \"Corp\""])]);
        assert_eq!(csv, "\"id\",\"client\"\n\"INV-1\",\"Acme \"\"Corp\"\"\"");
    }

    #[test]
    fn headers_only() {
        assert_eq!(to_csv(&["a"], &[]), "\"a\"");
    }

    #[test]
    fn column_visibility() {
        let headers = row(&["id", "client", "amount"]);
        let rows = vec![row(&["1", "Acme", "$5"])];
        let (h, r) = select_columns(&headers, &rows, &[2, 0, 9]);
        assert_eq!(h, row(&["amount", "id"]));
        assert_eq!(r, vec![row(&["$5", "1"])]);

        let (h, _) = select_columns(&headers, &rows, &[]);
        assert_eq!(h.len(), 3);
    }

    #[test]
    fn file_name() {
        assert_eq!(csv_file_name("invoices"), "invoices.csv");
        assert_eq!(csv_file_name("invoices.csv"), "invoices.csv");
    }
}
