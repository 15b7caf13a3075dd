/// Pass/fail classification of one uploaded CSV file.
#[derive(Debug, PartialEq)]
pub struct CsvSummary {
    pub records: i64,
    pub pass: bool,
    pub message: String,
}

/// Reads the whole file and classifies it. Classification never fails: a
/// malformed file yields a `pass = false` summary with the parse error
/// detail, so an audit row can be written either way.
pub fn summarize(bytes: &[u8]) -> CsvSummary {
    let mut reader = csv::Reader::from_reader(bytes);

    let mut records: i64 = 0;
    for row in reader.records() {
        match row {
            Ok(_) => records += 1,
            Err(e) => {
                return CsvSummary {
                    records: 0,
                    pass: false,
                    message: format!("unparseable CSV row: {}", e),
                }
            }
        }
    }

    CsvSummary {
        records,
        pass: true,
        message: format!("processed {} record(s)", records),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_data_rows_below_the_header() {
        let summary = summarize(b"batch,records\na,1\nb,2\n");
        assert_eq!(summary.records, 2);
        assert!(summary.pass);
        assert_eq!(summary.message, "processed 2 record(s)");
    }

    #[test]
    fn header_only_file_passes_with_zero_records() {
        let summary = summarize(b"batch,records\n");
        assert_eq!(summary.records, 0);
        assert!(summary.pass);
    }

    #[test]
    fn ragged_row_fails_with_zero_records() {
        let summary = summarize(b"batch,records\na,1\nb\nc,3\n");
        assert_eq!(summary.records, 0);
        assert!(!summary.pass);
        assert!(summary.message.contains("unparseable CSV row"));
    }

    #[test]
    fn non_utf8_content_fails() {
        let summary = summarize(b"batch,records\n\xff\xfe,1\n");
        assert_eq!(summary.records, 0);
        assert!(!summary.pass);
    }
}
