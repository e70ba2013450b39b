use std::path::PathBuf;

/// Arguments for the scan command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ScanArgs {
    /// File or directory handed to shake (falls back to the config file)
    pub target: Option<String>,

    /// shake binary override
    pub program: Option<String>,

    /// Option string override, passed through verbatim
    pub options: Option<String>,

    /// Optional TOML config file
    pub config: Option<PathBuf>,

    /// Output path for the JSON report (optional)
    pub output_json: Option<PathBuf>,

    /// Print text summary to stdout
    pub print_summary: bool,

    /// Files listed in the summary
    pub max_files: usize,
}

impl Default for ScanArgs {
    fn default() -> Self {
        Self {
            target: None,
            program: None,
            options: None,
            config: None,
            output_json: Some(PathBuf::from("report.json")),
            print_summary: false,
            max_files: 20,
        }
    }
}

/// Arguments for the parse command
#[derive(Debug, Clone)]
pub struct ParseArgs {
    /// Saved shake output; stdin when absent
    pub input: Option<PathBuf>,

    /// Scan target the output was produced for
    pub target: String,

    /// Output path for the JSON report (optional)
    pub output_json: Option<PathBuf>,

    /// Print text summary to stdout
    pub print_summary: bool,

    /// Files listed in the summary
    pub max_files: usize,
}

impl Default for ParseArgs {
    fn default() -> Self {
        Self {
            input: None,
            target: String::new(),
            output_json: None,
            print_summary: false,
            max_files: 20,
        }
    }
}
