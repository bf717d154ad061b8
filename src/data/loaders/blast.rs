// blast.rs - Tabular BLAST report loader

use crate::data::alignment::{AlignmentRecord, AlignmentReport, RowSkipped, BLAST_TABULAR_COLUMNS};
use crate::error::{CircosError, Result};
use csv::{ByteRecord, ReaderBuilder, StringRecord};
use std::fs::File;
use std::path::Path;
use std::str::FromStr;

/// Load a 12-column tab-delimited BLAST report.
///
/// Malformed rows are collected in [`AlignmentReport::skipped`] and logged;
/// only failure to open or read the file is fatal. `#` comment lines
/// (`-outfmt 7`) and blank lines are ignored.
pub fn load_alignments(path: &Path) -> Result<AlignmentReport> {
    let file = File::open(path).map_err(|e| CircosError::file(path, e))?;
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .quoting(false)
        .from_reader(file);

    let mut report = AlignmentReport::default();
    let mut raw = ByteRecord::new();

    while reader
        .read_byte_record(&mut raw)
        .map_err(|e| CircosError::file(path, e.into()))?
    {
        if raw.iter().all(|field| field.trim_ascii().is_empty()) {
            continue;
        }

        let line_number = raw.position().map(|p| p.line()).unwrap_or(0);
        let parsed = StringRecord::from_byte_record(raw.clone())
            .map_err(|_| "invalid UTF-8".to_string())
            .and_then(|row| parse_row(&row));

        match parsed {
            Ok(record) => report.records.push(record),
            Err(reason) => {
                let line = raw
                    .iter()
                    .map(String::from_utf8_lossy)
                    .collect::<Vec<_>>()
                    .join("\t");
                let skipped = RowSkipped {
                    line_number,
                    line,
                    reason,
                };
                eprintln!("⚠️  Skipping alignment row {}", skipped);
                report.skipped.push(skipped);
            }
        }
    }

    println!(
        "✅ Alignment report loaded: {} alignments, {} rows skipped",
        report.records.len(),
        report.skipped.len()
    );
    Ok(report)
}

/// Parse one row; the error string says which field is wrong
pub fn parse_row(row: &StringRecord) -> std::result::Result<AlignmentRecord, String> {
    if row.len() != BLAST_TABULAR_COLUMNS {
        return Err(format!(
            "expected {} columns, found {}",
            BLAST_TABULAR_COLUMNS,
            row.len()
        ));
    }

    Ok(AlignmentRecord {
        query_id: row[0].trim().to_string(),
        subject_id: row[1].trim().to_string(),
        identity_percent: parse_float(row, 2, "pident")?,
        alignment_length: parse_field(row, 3, "length")?,
        mismatches: parse_field(row, 4, "mismatch")?,
        gap_opens: parse_field(row, 5, "gapopen")?,
        query_start: parse_field(row, 6, "qstart")?,
        query_end: parse_field(row, 7, "qend")?,
        subject_start: parse_field(row, 8, "sstart")?,
        subject_end: parse_field(row, 9, "send")?,
        e_value: parse_float(row, 10, "evalue")?,
        bit_score: parse_float(row, 11, "bitscore")?,
    })
}

fn parse_field<T: FromStr>(row: &StringRecord, index: usize, column: &str) -> std::result::Result<T, String> {
    let raw = row[index].trim();
    raw.parse::<T>()
        .map_err(|_| format!("non-numeric {} '{}'", column, raw))
}

/// `nan` and `inf` parse as `f64` but never compare usefully against a threshold
fn parse_float(row: &StringRecord, index: usize, column: &str) -> std::result::Result<f64, String> {
    let value: f64 = parse_field(row, index, column)?;
    if !value.is_finite() {
        return Err(format!("non-finite {} '{}'", column, row[index].trim()));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_report(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_parse_row_all_columns() {
        let row = StringRecord::from(vec![
            "psbA", "psbA", "98.50", "120", "2", "0", "1", "120", "500", "381", "1e-50", "210.3",
        ]);
        let record = parse_row(&row).unwrap();
        assert_eq!(record.query_id, "psbA");
        assert_eq!(record.identity_percent, 98.5);
        assert_eq!(record.alignment_length, 120);
        assert_eq!((record.query_start, record.query_end), (1, 120));
        assert_eq!((record.subject_start, record.subject_end), (500, 381));
        assert!(record.is_subject_reversed());
        assert_eq!(record.e_value, 1e-50);
        assert_eq!(record.bit_score, 210.3);
    }

    #[test]
    fn test_parse_row_rejects_bad_rows() {
        let short = StringRecord::from(vec!["a", "b", "99.0"]);
        assert!(parse_row(&short).unwrap_err().contains("expected 12 columns"));

        let non_numeric = StringRecord::from(vec![
            "a", "b", "99.0", "many", "0", "0", "1", "10", "1", "10", "0.0", "20",
        ]);
        assert!(parse_row(&non_numeric).unwrap_err().contains("length"));
    }

    #[test]
    fn test_load_skips_malformed_rows_and_keeps_order() {
        let report = write_report(
            "# BLASTN 2.15.0+\n\
             q1\ts1\t99.0\t100\t1\t0\t1\t100\t201\t300\t1e-40\t180\n\
             q2\ts2\t90.0\n\
             \n\
             q3\ts3\t95.0\tNaNish\t1\t0\t1\t100\t1\t100\t1e-10\t90\n\
             q4\ts4\t80.0\t60\t5\t1\t11\t70\t400\t341\t2e-5\t55.1\n",
        );

        let loaded = load_alignments(report.path()).unwrap();
        let ids: Vec<&str> = loaded.records.iter().map(|r| r.query_id.as_str()).collect();
        assert_eq!(ids, vec!["q1", "q4"]);
        assert_eq!(loaded.skipped.len(), 2);
        assert_eq!(loaded.skipped[0].line, "q2\ts2\t90.0");
        assert!(loaded.skipped[0].reason.contains("found 3"));
        assert!(loaded.skipped[1].line.starts_with("q3\t"));
        assert!(loaded.skipped[0].line_number < loaded.skipped[1].line_number);
    }

    #[test]
    fn test_non_finite_scores_are_skipped() {
        let nan_identity = StringRecord::from(vec![
            "q", "s", "nan", "100", "0", "0", "1", "100", "1", "100", "1e-5", "50",
        ]);
        assert!(parse_row(&nan_identity).unwrap_err().contains("pident"));

        let report = write_report(
            "q\ts\tnan\t100\t0\t0\t1\t100\t1\t100\t1e-5\t50\n\
             q\ts\t99.0\t100\t0\t0\t1\t100\t1\t100\tinf\t50\n\
             q\ts\t99.0\t100\t0\t0\t1\t100\t1\t100\t1e-5\t-inf\n\
             q\ts\t99.0\t100\t0\t0\t1\t100\t1\t100\t1e-5\t50\n",
        );
        let loaded = load_alignments(report.path()).unwrap();
        assert_eq!(loaded.records.len(), 1);
        assert_eq!(loaded.skipped.len(), 3);
        assert!(loaded.skipped.iter().all(|row| row.reason.starts_with("non-finite")));
    }

    #[test]
    fn test_whitespace_only_rows_are_ignored() {
        let report = write_report(
            "q1\ts1\t99.0\t100\t1\t0\t1\t100\t201\t300\t1e-40\t180\n\
             \x20\x20\x20\n\
             \t\x20\t\n\
             q2\ts2\t98.0\t80\t1\t0\t1\t80\t201\t280\t1e-30\t150\n",
        );
        let loaded = load_alignments(report.path()).unwrap();
        let ids: Vec<&str> = loaded.records.iter().map(|r| r.query_id.as_str()).collect();
        assert_eq!(ids, vec!["q1", "q2"]);
        assert!(loaded.skipped.is_empty());
    }

    #[test]
    fn test_missing_report_is_file_error() {
        let err = load_alignments(Path::new("/nonexistent/report.tsv")).unwrap_err();
        assert!(matches!(err, CircosError::File { .. }));
    }
}
