//! Generic header-row CSV parsing.
//!
//! The pipeline exports are plain comma-separated text with a header row.
//! Column sets vary per resource, so rows are addressed by column name
//! rather than a fixed struct; each resource module projects rows into its
//! own typed record.

use anyhow::Context;

/// One parsed data line, keyed by the header columns.
///
/// Rows shorter than the header simply lack the trailing columns;
/// `get` returns `None` for them.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvRow {
    fields: Vec<(String, String)>,
}

impl CsvRow {
    /// Look up a field by column name.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    /// Column names present on this row, in header order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }
}

/// An ordered CSV table with a header row.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CsvTable {
    headers: Vec<String>,
    rows: Vec<CsvRow>,
}

impl CsvTable {
    /// Parse delimited text with a header row.
    ///
    /// The first line defines the column names; each subsequent non-blank
    /// line produces one [`CsvRow`] in source order. Blank lines (including
    /// a trailing newline) are skipped. Short records are tolerated via the
    /// flexible reader; missing trailing fields are simply absent.
    pub fn parse(text: &str) -> anyhow::Result<CsvTable> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(text.as_bytes());

        let headers: Vec<String> = rdr
            .headers()
            .context("CSV resource is missing a header row")?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for result in rdr.records() {
            let record = result.context("malformed CSV record")?;
            if record.iter().all(|field| field.trim().is_empty()) {
                continue;
            }
            let fields = headers
                .iter()
                .cloned()
                .zip(record.iter().map(|field| field.to_string()))
                .collect();
            rows.push(CsvRow { fields });
        }

        log::debug!("[HT] table: parsed {} rows from CSV text", rows.len());
        Ok(CsvTable { headers, rows })
    }

    /// The column names from the header row.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// The data rows in source order.
    pub fn rows(&self) -> &[CsvRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::CsvTable;

    #[test]
    fn parse_yields_one_row_per_data_line() {
        let csv = "\
week,TrendSummary,LLM_Nudge
1,Up,Walk more
2,Down,Hydrate
3,Flat,Sleep earlier
";
        let table = CsvTable::parse(csv).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.headers(), ["week", "TrendSummary", "LLM_Nudge"]);
    }

    #[test]
    fn row_keys_equal_header_columns_in_order() {
        let csv = "a,b,c\n1,2,3\n";
        let table = CsvTable::parse(csv).unwrap();
        let columns: Vec<&str> = table.rows()[0].columns().collect();
        assert_eq!(columns, ["a", "b", "c"]);
        assert_eq!(table.rows()[0].get("b"), Some("2"));
    }

    #[test]
    fn source_order_is_preserved() {
        let csv = "week\n3\n1\n2\n";
        let table = CsvTable::parse(csv).unwrap();
        let weeks: Vec<&str> = table
            .rows()
            .iter()
            .map(|row| row.get("week").unwrap())
            .collect();
        assert_eq!(weeks, ["3", "1", "2"], "rows must keep file order");
    }

    #[test]
    fn trailing_blank_lines_are_skipped() {
        let csv = "week,TrendSummary\n1,Up\n,\n";
        let table = CsvTable::parse(csv).unwrap();
        assert_eq!(table.len(), 1, "blank line must not produce a row");
    }

    #[test]
    fn short_records_lack_trailing_columns() {
        let csv = "a,b,c\n1,2\n";
        let table = CsvTable::parse(csv).unwrap();
        let row = &table.rows()[0];
        assert_eq!(row.get("a"), Some("1"));
        assert_eq!(row.get("b"), Some("2"));
        assert_eq!(row.get("c"), None, "missing column must read as absent");
    }

    #[test]
    fn unknown_column_reads_as_absent() {
        let csv = "a\n1\n";
        let table = CsvTable::parse(csv).unwrap();
        assert_eq!(table.rows()[0].get("nope"), None);
    }

    #[test]
    fn parsing_is_idempotent() {
        let csv = "week,TrendSummary,LLM_Nudge\n1,Up,Walk more\n2,Down,Hydrate\n";
        let first = CsvTable::parse(csv).unwrap();
        let second = CsvTable::parse(csv).unwrap();
        assert_eq!(first, second, "parsing is a pure function of the text");
    }

    #[test]
    fn empty_input_yields_empty_table() {
        let table = CsvTable::parse("").unwrap();
        assert!(table.is_empty());
    }
}
