//! Streaming parser for a whole shake report.
//!
//! The first line is the header; every following line is either a file
//! record or a recorded [`ParseError`]. Bad lines never stop the parse.
//! Only a broken line source does, and even then the lines read so far are
//! handed back inside the error.

use super::header::sniff_header;
use super::record::parse_record;
use super::schema::{ErrorReason, Report};
use crate::utils::error::ReportError;
use log::{debug, warn};
use std::io::BufRead;

/// Where the parser is in the stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParserState {
    AwaitingHeader,
    ProcessingLines { has_fragment_detail: bool },
}

/// Incremental report parser fed one line at a time
///
/// Use [`parse_report`] or [`parse_lines`] unless lines arrive from
/// somewhere other than an iterator.
#[derive(Debug)]
pub struct ReportParser {
    target: String,
    state: ParserState,
    lines_seen: usize,
    report: Report,
}

impl ReportParser {
    /// Create a parser; `target` is the scan target given to the tool
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            state: ParserState::AwaitingHeader,
            lines_seen: 0,
            report: Report::new(),
        }
    }

    /// Number of lines consumed, header included
    pub fn lines_seen(&self) -> usize {
        self.lines_seen
    }

    /// Feed the next line. A trailing `\n` or `\r\n` is ignored.
    pub fn push_line(&mut self, line: &str) {
        let line = line.strip_suffix('\n').unwrap_or(line);
        let line = line.strip_suffix('\r').unwrap_or(line);
        self.lines_seen += 1;

        match self.state {
            ParserState::AwaitingHeader => {
                let has_fragment_detail = sniff_header(line);
                self.report.has_fragment_detail = has_fragment_detail;
                self.state = ParserState::ProcessingLines {
                    has_fragment_detail,
                };
            }
            ParserState::ProcessingLines {
                has_fragment_detail,
            } => match parse_record(line, self.lines_seen, has_fragment_detail, &self.target) {
                Ok(record) => self.report.files.push(record),
                Err(error) => {
                    if error.reason == ErrorReason::ToolReportedError {
                        warn!("{}", error.raw_line);
                    }
                    self.report.errors.push(error);
                }
            },
        }
    }

    /// Stop and return the accumulated report
    pub fn finish(self) -> Report {
        if self.state == ParserState::AwaitingHeader {
            debug!("Report stream was empty");
        }
        debug!(
            "Parsed {} lines: {} files, {} errors",
            self.lines_seen,
            self.report.files.len(),
            self.report.errors.len()
        );
        self.report
    }
}

/// Parse a report from a sequence of lines
///
/// **Public** - generic entry point over any line source
///
/// # Arguments
/// * `lines` - Lines with or without their terminators
/// * `target` - Scan target; lines starting with it are tool errors
///
/// # Errors
/// * `ReportError::Stream` - The source yielded an I/O error; carries the
///   partial report
pub fn parse_lines<I>(lines: I, target: &str) -> Result<Report, ReportError>
where
    I: IntoIterator<Item = std::io::Result<String>>,
{
    let mut parser = ReportParser::new(target);

    for line in lines {
        match line {
            Ok(line) => parser.push_line(&line),
            Err(source) => {
                let line = parser.lines_seen() + 1;
                warn!("Report stream failed at line {}: {}", line, source);
                return Err(ReportError::Stream {
                    line,
                    source,
                    partial: Box::new(parser.finish()),
                });
            }
        }
    }

    Ok(parser.finish())
}

/// Parse a report from a buffered reader
///
/// **Public** - main entry point for files, stdin and process pipes
///
/// Lines are split on raw bytes. shake prints file names as-is, so a line
/// that is not valid UTF-8 is decoded lossily instead of failing the stream.
///
/// # Example
/// ```ignore
/// let file = BufReader::new(File::open("report.tsv")?);
/// let report = parse_report(file, "/home/me/music")?;
/// ```
pub fn parse_report<R: BufRead>(reader: R, target: &str) -> Result<Report, ReportError> {
    let lines = reader
        .split(b'\n')
        .enumerate()
        .map(|(index, line)| line.map(|bytes| decode_line(bytes, index + 1)));
    parse_lines(lines, target)
}

/// Decode one raw line, replacing invalid UTF-8 sequences
///
/// **Private** - internal helper for parse_report
fn decode_line(bytes: Vec<u8>, line_number: usize) -> String {
    match String::from_utf8(bytes) {
        Ok(line) => line,
        Err(e) => {
            debug!("Line {} is not valid UTF-8, decoding lossily", line_number);
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    }
}

/// Parse a report held in memory
///
/// **Public** - convenience for tests and saved output
pub fn parse_str(input: &str, target: &str) -> Report {
    let mut parser = ReportParser::new(target);
    for line in input.lines() {
        parser.push_line(line);
    }
    parser.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::schema::Fragment;
    use std::io;

    const HEADER_9: &str = "IDEAL\tSTART\tEND\tFRAGC\tCRUMBC\tAGE\tSHOCKED\tNAME\tFRAGS";

    #[test]
    fn test_empty_stream() {
        let report = parse_str("", "doc");
        assert!(report.files.is_empty());
        assert!(report.errors.is_empty());
        assert!(!report.has_fragment_detail);
    }

    #[test]
    fn test_header_only() {
        let report = parse_str(HEADER_9, "doc");
        assert!(report.files.is_empty());
        assert!(report.has_fragment_detail);
    }

    #[test]
    fn test_crlf_lines() {
        let input = format!("{}\r\n3\t0\t100\t2\t1\t5\t0\tfoo.txt\t10:5,50:3\r\n", HEADER_9);
        let report = parse_report(input.as_bytes(), "doc").unwrap();
        assert_eq!(report.files.len(), 1);
        assert_eq!(
            report.files[0].fragments,
            vec![Fragment::new(10, 5), Fragment::new(50, 3)]
        );
    }

    #[test]
    fn test_push_line_strips_terminator() {
        let mut parser = ReportParser::new("doc");
        parser.push_line("a\tb\tc\td\te\tf\tg\th\n");
        parser.push_line("1\t0\t10\t1\t0\t2\t0\tbar.txt\n");
        let report = parser.finish();
        assert_eq!(report.files[0].name, "bar.txt");
    }

    #[test]
    fn test_invalid_utf8_name_does_not_end_stream() {
        let mut input = b"A\tB\tC\tD\tE\tF\tG\tH\n".to_vec();
        input.extend_from_slice(b"1\t0\t10\t1\t0\t2\t0\tfirst.txt\n");
        input.extend_from_slice(b"1\t0\t10\t1\t0\t2\t0\tcaf\xe9.txt\n");
        input.extend_from_slice(b"1\t0\t10\t1\t0\t2\t0\tthird.txt\n");

        let report = parse_report(&input[..], "doc").unwrap();

        let names: Vec<&str> = report.files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["first.txt", "caf\u{FFFD}.txt", "third.txt"]);
        assert!(report.is_clean());
    }

    #[test]
    fn test_stream_failure_keeps_partial_report() {
        let lines = vec![
            Ok(HEADER_9.to_string()),
            Ok("1\t0\t10\t1\t0\t2\t0\ta\t0:10".to_string()),
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed")),
            Ok("1\t0\t10\t1\t0\t2\t0\tb\t0:10".to_string()),
        ];

        let err = parse_lines(lines, "doc").unwrap_err();
        let ReportError::Stream { line, .. } = &err;
        assert_eq!(*line, 3);
        assert_eq!(err.partial_report().files.len(), 1);
        assert_eq!(err.into_partial_report().files[0].name, "a");
    }

    #[test]
    fn test_line_numbers_count_header() {
        let report = parse_str(&format!("{}\nbroken\ndoc: oops", HEADER_9), "doc");
        assert_eq!(report.errors[0].line_number, 2);
        assert_eq!(report.errors[1].line_number, 3);
    }
}
