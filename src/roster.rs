//! Extract the distinct participants rostered for the target month.

use crate::period::{parse_ride_date, TargetPeriod};
use crate::sheets::rows::RosterRow;
use std::collections::BTreeSet;
use tracing::warn;

/// The worksheet columns naming people. Everything else in the sheet is
/// ignored.
pub const PARTICIPANT_COLUMNS: [&str; 5] = ["To (1)", "To (2)", "From (1)", "From (2)", "From (3)"];

const DATE_COLUMN: &str = "Date";

/// Collect the distinct non-empty names from the participant columns of
/// every row dated within `period`.
///
/// Rows with an empty date are skipped silently; rows whose date doesn't
/// parse are skipped with a warning. Deduplication is exact-string: two
/// spellings of a name differing only in case stay separate here, even
/// though they'll resolve to the same identity later. The returned set
/// iterates in lexicographic order, keeping the rendered mention list
/// stable across runs.
pub fn extract_participants(rows: &[RosterRow], period: &TargetPeriod) -> BTreeSet<String> {
    let mut participants = BTreeSet::new();

    for row in rows {
        let date_str = row.get(DATE_COLUMN).trim();
        if date_str.is_empty() {
            continue;
        }

        let date = match parse_ride_date(date_str) {
            Ok(date) => date,
            Err(_) => {
                warn!("Skipping row with invalid date: {}", date_str);
                continue;
            }
        };

        if !period.contains(date) {
            continue;
        }

        for column in PARTICIPANT_COLUMNS {
            let name = row.get(column).trim();
            if !name.is_empty() {
                participants.insert(name.to_owned());
            }
        }
    }

    participants
}
