//! Header sniffing.

use crate::utils::config::{COLUMNS_WITHOUT_FRAGMENTS, COLUMNS_WITH_FRAGMENTS, FIELD_DELIMITER};
use log::{debug, warn};

/// Decide from the header line whether data lines carry a FRAGS column
///
/// **Public** - first step of report parsing
///
/// Only the column count matters. Anything other than 9 columns means no
/// fragment detail; counts other than 8 or 9 are tolerated with a warning.
pub fn sniff_header(header: &str) -> bool {
    let columns = header.split(FIELD_DELIMITER).count();

    if columns != COLUMNS_WITH_FRAGMENTS && columns != COLUMNS_WITHOUT_FRAGMENTS {
        warn!(
            "Unexpected header with {} columns, assuming no fragment detail",
            columns
        );
    }

    let has_fragment_detail = columns == COLUMNS_WITH_FRAGMENTS;
    debug!(
        "Header has {} columns (fragment detail: {})",
        columns, has_fragment_detail
    );
    has_fragment_detail
}
