//! Record output to stdout.
//!
//! Records are written as they arrive; nothing is buffered beyond the
//! underlying writer's buffer, so memory stays bounded by one record.

use std::io::Write;

use anyhow::Result;
use splunk_search::Record;

use crate::args::OutputFormat;

/// Streams records in the selected format.
pub struct RecordWriter<W: Write> {
    out: W,
    format: OutputFormat,
    written: usize,
}

impl<W: Write> RecordWriter<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self {
            out,
            format,
            written: 0,
        }
    }

    /// Number of records written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    pub fn write_record(&mut self, record: &Record) -> Result<()> {
        match self.format {
            OutputFormat::Ndjson => {
                serde_json::to_writer(&mut self.out, record)?;
                self.out.write_all(b"\n")?;
            }
            OutputFormat::Json => {
                let sep: &[u8] = if self.written == 0 { b"[\n" } else { b",\n" };
                self.out.write_all(sep)?;
                serde_json::to_writer(&mut self.out, record)?;
            }
        }
        self.written += 1;
        Ok(())
    }

    /// Close the output, completing the JSON array if one was opened.
    pub fn finish(mut self) -> Result<usize> {
        if self.format == OutputFormat::Json {
            let tail: &[u8] = if self.written == 0 { b"[]\n" } else { b"\n]\n" };
            self.out.write_all(tail)?;
        }
        self.out.flush()?;
        Ok(self.written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => map,
            other => panic!("not an object: {other}"),
        }
    }

    fn render(format: OutputFormat, records: &[Record]) -> String {
        let mut buf = Vec::new();
        let mut writer = RecordWriter::new(&mut buf, format);
        for r in records {
            writer.write_record(r).unwrap();
        }
        writer.finish().unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_ndjson_one_record_per_line() {
        let out = render(
            OutputFormat::Ndjson,
            &[record(json!({"a": 1})), record(json!({"a": 2}))],
        );
        assert_eq!(out, "{\"a\":1}\n{\"a\":2}\n");
    }

    #[test]
    fn test_json_array_is_valid_json() {
        let out = render(
            OutputFormat::Json,
            &[record(json!({"a": 1})), record(json!({"a": 2}))],
        );
        let parsed: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, json!([{"a": 1}, {"a": 2}]));
    }

    #[test]
    fn test_empty_json_array() {
        assert_eq!(render(OutputFormat::Json, &[]), "[]\n");
        assert_eq!(render(OutputFormat::Ndjson, &[]), "");
    }
}
