// Data exporters sharing one export skeleton

use super::{ExportError, ExportResult};
use crate::messaging::Narrator;
use serde_json::Value;

/// One row of exported data
pub type Row = Vec<Value>;

/// What an export produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    pub format: &'static str,
    pub body: String,
    pub compressed: bool,
}

/// Exporter with a fixed open / write / compress / close sequence
///
/// Implementors supply `write_data`. `compress` is an optional hook whose
/// default does nothing. The file is closed even when writing fails.
pub trait DataExporter {
    fn format(&self) -> &'static str;

    /// Render rows into the output body
    fn write_data(&mut self, rows: &[Row], narrator: &mut Narrator) -> ExportResult<String>;

    /// Hook run after a successful write; returns whether it compressed
    fn compress(&mut self, _narrator: &mut Narrator) -> bool {
        false
    }

    fn open_file(&mut self, narrator: &mut Narrator) {
        narrator.info("Opening file");
    }

    fn close_file(&mut self, narrator: &mut Narrator) {
        narrator.info("Closing file");
    }

    fn export(&mut self, rows: &[Row], narrator: &mut Narrator) -> ExportResult<Export> {
        self.open_file(narrator);
        let written = self.write_data(rows, narrator);
        let compressed = written.is_ok() && self.compress(narrator);
        self.close_file(narrator);

        let body = written?;
        tracing::debug!(format = self.format(), bytes = body.len(), compressed, "export finished");
        Ok(Export {
            format: self.format(),
            body,
            compressed,
        })
    }
}

fn csv_cell(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Comma-separated rows, compressed after writing
#[derive(Debug, Default)]
pub struct CsvExporter;

impl DataExporter for CsvExporter {
    fn format(&self) -> &'static str {
        "CSV"
    }

    fn write_data(&mut self, rows: &[Row], narrator: &mut Narrator) -> ExportResult<String> {
        narrator.info("Writing data as CSV:");
        let lines: Vec<String> = rows
            .iter()
            .map(|row| row.iter().map(csv_cell).collect::<Vec<_>>().join(","))
            .collect();
        for line in &lines {
            narrator.info(line.clone());
        }
        Ok(lines.join("\n"))
    }

    fn compress(&mut self, narrator: &mut Narrator) -> bool {
        narrator.info("Compressing CSV file...");
        true
    }
}

/// Rows as a single JSON array; keeps the default (no-op) compress hook
#[derive(Debug, Default)]
pub struct JsonExporter;

impl DataExporter for JsonExporter {
    fn format(&self) -> &'static str {
        "JSON"
    }

    fn write_data(&mut self, rows: &[Row], narrator: &mut Narrator) -> ExportResult<String> {
        narrator.info("Writing data as JSON:");
        let body = serde_json::to_string(rows).map_err(ExportError::Json)?;
        narrator.info(body.clone());
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messaging::NotificationCategory;
    use serde_json::json;

    fn rows() -> Vec<Row> {
        vec![
            vec![json!("name"), json!("age")],
            vec![json!("Alice"), json!(30)],
            vec![json!("Bob"), json!(25)],
        ]
    }

    fn narrator() -> Narrator {
        Narrator::silent(NotificationCategory::Template)
    }

    #[test]
    fn test_csv_runs_compress_hook() {
        let mut narrator = narrator();
        let export = CsvExporter.export(&rows(), &mut narrator).unwrap();

        assert_eq!(export.body, "name,age\nAlice,30\nBob,25");
        assert!(export.compressed);
        assert_eq!(
            narrator.messages(),
            vec![
                "Opening file",
                "Writing data as CSV:",
                "name,age",
                "Alice,30",
                "Bob,25",
                "Compressing CSV file...",
                "Closing file",
            ]
        );
    }

    #[test]
    fn test_json_skips_compress_hook() {
        let mut narrator = narrator();
        let export = JsonExporter.export(&rows(), &mut narrator).unwrap();

        assert_eq!(export.body, r#"[["name","age"],["Alice",30],["Bob",25]]"#);
        assert!(!export.compressed);
        assert_eq!(narrator.messages().len(), 4);
        assert_eq!(narrator.last_message(), Some("Closing file"));
    }

    struct BrokenExporter;

    impl DataExporter for BrokenExporter {
        fn format(&self) -> &'static str {
            "BROKEN"
        }

        fn write_data(&mut self, _rows: &[Row], _narrator: &mut Narrator) -> ExportResult<String> {
            Err(ExportError::Write("disk full".into()))
        }

        fn compress(&mut self, narrator: &mut Narrator) -> bool {
            narrator.info("compressing");
            true
        }
    }

    #[test]
    fn test_failed_write_still_closes_and_skips_compress() {
        let mut narrator = narrator();
        let result = BrokenExporter.export(&rows(), &mut narrator);

        assert!(matches!(result, Err(ExportError::Write(_))));
        assert_eq!(narrator.messages(), vec!["Opening file", "Closing file"]);
    }
}
