//! Runner tests use `sh` as a stand-in for shake.
#![cfg(unix)]

use shake_report::parser::ErrorReason;
use shake_report::runner::{run_and_parse, ShakeCommand};
use std::io::Write;
use tempfile::NamedTempFile;

/// Run `script` through sh in place of shake.
///
/// Invoked as `sh <script> -- <target>`, so the target is `$2`.
fn fake_tool(script: &str, target: &str) -> (NamedTempFile, ShakeCommand) {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(script.as_bytes()).unwrap();

    let command = ShakeCommand::new(target)
        .with_program("sh")
        .with_options(file.path().display().to_string());
    (file, command)
}

#[test]
fn test_run_and_parse_streams_stdout() {
    let (_script, command) = fake_tool(
        "printf 'IDEAL\\tSTART\\tEND\\tFRAGC\\tCRUMBC\\tAGE\\tSHOCKED\\tNAME\\tFRAGS\\n'\n\
         printf '3\\t0\\t100\\t2\\t1\\t5\\t0\\tfoo.txt\\t10:5,50:3\\n'\n\
         printf '%s: permission denied\\n' \"$2\"\n",
        "doc",
    );

    let outcome = run_and_parse(&command).unwrap();

    assert!(outcome.tool_succeeded());
    assert_eq!(outcome.report.files.len(), 1);
    assert_eq!(outcome.report.files[0].fragments.len(), 2);
    assert_eq!(outcome.report.errors.len(), 1);
    assert_eq!(
        outcome.report.errors[0].reason,
        ErrorReason::ToolReportedError
    );
    assert_eq!(outcome.report.errors[0].raw_line, "doc: permission denied");
}

#[test]
fn test_non_zero_exit_keeps_report() {
    let (_script, command) = fake_tool(
        "printf 'A\\tB\\tC\\tD\\tE\\tF\\tG\\tH\\n1\\t0\\t10\\t1\\t0\\t2\\t0\\tbar.txt\\n'\nexit 3\n",
        "doc",
    );

    let outcome = run_and_parse(&command).unwrap();

    assert!(!outcome.tool_succeeded());
    assert_eq!(outcome.report.files.len(), 1);
}

#[test]
fn test_silent_tool_gives_empty_report() {
    let (_script, command) = fake_tool("exit 0\n", "doc");

    let outcome = run_and_parse(&command).unwrap();

    assert!(outcome.report.files.is_empty());
    assert!(outcome.report.errors.is_empty());
}

#[test]
fn test_latin1_file_name_does_not_end_stream() {
    let (_script, command) = fake_tool(
        "printf 'A\\tB\\tC\\tD\\tE\\tF\\tG\\tH\\n'\n\
         printf '1\\t0\\t10\\t1\\t0\\t2\\t0\\tcaf\\351.txt\\n'\n\
         printf '1\\t0\\t10\\t1\\t0\\t2\\t0\\tthird.txt\\n'\n",
        "doc",
    );

    let outcome = run_and_parse(&command).unwrap();

    assert_eq!(outcome.report.files.len(), 2);
    assert_eq!(outcome.report.files[0].name, "caf\u{FFFD}.txt");
    assert_eq!(outcome.report.files[1].name, "third.txt");
}
