//! Version evaluation against lifecycle cycles

use chrono::{Datelike, NaiveDate, Utc};

use crate::eol::types::{DateFlag, EolCycle};

/// How many calendar months before an EOL date a component is flagged
const WARN_WINDOW_MONTHS: i32 = 6;

/// Tri-state support status for an evaluated component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Supported, no EOL within the warning window
    Ok,
    /// Approaching EOL, or no lifecycle data could be matched
    Warn,
    /// Already end-of-life
    Err,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Status::Ok => "OK",
            Status::Warn => "WARN",
            Status::Err => "ERR",
        };
        f.write_str(s)
    }
}

/// Result of evaluating one component/version pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub component: String,
    pub version: String,
    pub status: Status,
    pub message: String,
}

/// Evaluates an observed version against a product's lifecycle cycles,
/// relative to today.
pub fn evaluate_version(component: &str, current_version: &str, cycles: &[EolCycle]) -> Evaluation {
    evaluate_version_at(component, current_version, cycles, Utc::now().date_naive())
}

/// Evaluation core with an explicit "today" for deterministic tests.
///
/// Cycle selection: the most specific matching cycle wins. The normalized
/// full version is tried first, then each dot-truncated prefix down to the
/// major version, so a "18.2" cycle beats a "18" cycle for version "18.2.0"
/// (handles full-point-release cycles like "22.04" next to major-only cycles
/// like "18"). When several records share a cycle name, the first in array
/// order is selected; match order follows the data source's array order.
pub fn evaluate_version_at(
    component: &str,
    current_version: &str,
    cycles: &[EolCycle],
    today: NaiveDate,
) -> Evaluation {
    let version = current_version.strip_prefix('v').unwrap_or(current_version);
    let parts: Vec<&str> = version.split('.').collect();
    let major_version = parts[0];

    // Candidate cycle names from most to least specific: the full version,
    // then each dot-truncated prefix down to the major version. A more
    // specific cycle record always wins over a broader one.
    let mut candidates: Vec<String> = Vec::with_capacity(parts.len());
    for len in (1..=parts.len()).rev() {
        candidates.push(parts[..len].join("."));
    }

    let cycle_data = candidates
        .iter()
        .find_map(|candidate| cycles.iter().find(|c| &c.cycle == candidate));

    let result = |status, message: String| Evaluation {
        component: component.to_string(),
        version: current_version.to_string(),
        status,
        message,
    };

    let Some(cycle_data) = cycle_data else {
        return result(
            Status::Warn,
            format!("Could not find EOL data for version {major_version}"),
        );
    };

    match &cycle_data.eol {
        DateFlag::Flag(true) => result(Status::Err, format!("Version {major_version} is EOL")),
        DateFlag::Flag(false) => result(
            Status::Ok,
            format!("Version {major_version} is supported (ends unknown)"),
        ),
        DateFlag::Date(eol) => {
            let Ok(eol_date) = NaiveDate::parse_from_str(eol, "%Y-%m-%d") else {
                // The API contract says EOL dates are parseable; a violation
                // degrades to the supported branch rather than failing
                return result(
                    Status::Ok,
                    format!("Version {major_version} is supported (ends {eol})"),
                );
            };

            if eol_date < today {
                return result(
                    Status::Err,
                    format!("Version {major_version} is EOL (ended {eol})"),
                );
            }

            if months_until(today, eol_date) <= WARN_WINDOW_MONTHS {
                return result(
                    Status::Warn,
                    format!("Version {major_version} is approaching EOL (ends {eol})"),
                );
            }

            result(
                Status::Ok,
                format!("Version {major_version} is supported (ends {eol})"),
            )
        }
    }
}

/// Whole-calendar-month difference, ignoring day-of-month. Intentionally
/// coarse: two dates the same number of days apart can land on either side
/// of the warning window depending on where the month boundary falls.
fn months_until(now: NaiveDate, eol: NaiveDate) -> i32 {
    (eol.year() - now.year()) * 12 + (eol.month() as i32 - now.month() as i32)
}
