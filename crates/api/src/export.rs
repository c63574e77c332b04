// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Printable route rosters.
//!
//! A roster is a pure projection of one route's registrations. Nothing here
//! feeds back into state.

use rideboard::{State, students_on_route};
use rideboard_domain::{DomainError, RouteConfig, Student, StudentStatus};
use thiserror::Error;
use time::Date;

/// Leading cell of each title row, in output order.
pub const ROSTER_TITLE_LABELS: [&str; 3] = ["Route", "Subtitle", "Generated"];

/// Leading cell of the row holding the student count.
pub const ROSTER_TOTAL_LABEL: &str = "Total";

/// Column headers of a rendered roster.
pub const ROSTER_HEADERS: [&str; 6] = ["Ticket", "Name", "Code", "Phone", "Faculty", "Boarded"];

/// Errors that can occur while rendering a roster.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The CSV writer rejected a record.
    #[error("Failed to write roster: {0}")]
    Csv(#[from] csv::Error),

    /// The CSV buffer could not be recovered from the writer.
    #[error("Failed to finish roster: {0}")]
    Buffer(String),

    /// The rendered bytes were not valid UTF-8.
    #[error("Roster is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Boarding column text for a roster row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boarded {
    /// Not yet checked at the bus.
    Pending,
    /// Boarded.
    Yes,
    /// Did not show up.
    No,
}

impl Boarded {
    /// Returns the column text.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Yes => "Yes",
            Self::No => "No",
        }
    }
}

impl From<StudentStatus> for Boarded {
    fn from(status: StudentStatus) -> Self {
        match status {
            StudentStatus::Pending => Self::Pending,
            StudentStatus::Boarded => Self::Yes,
            StudentStatus::NoShow => Self::No,
        }
    }
}

impl std::fmt::Display for Boarded {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of a roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterRow {
    /// Ticket on the route.
    pub ticket: u32,
    /// "name last-name".
    pub full_name: String,
    /// University code.
    pub code: String,
    /// Contact phone.
    pub phone: String,
    /// Faculty abbreviation.
    pub faculty: String,
    /// Boarding column.
    pub boarded: Boarded,
}

impl From<&Student> for RosterRow {
    fn from(student: &Student) -> Self {
        Self {
            ticket: student.ticket_number.value(),
            full_name: student.full_name(),
            code: student.code.value().to_string(),
            phone: student.phone.clone(),
            faculty: student.faculty.to_string(),
            boarded: Boarded::from(student.status),
        }
    }
}

/// The registrations on one route, ready to print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRoster {
    /// Display name of the route.
    pub route_name: String,
    /// Route subtitle.
    pub subtitle: String,
    /// The date printed on the roster.
    pub generated_on: Date,
    /// Rows ordered by ticket.
    pub rows: Vec<RosterRow>,
    /// Number of rows.
    pub total: usize,
}

impl RouteRoster {
    /// Renders the roster as CSV.
    ///
    /// The route name, subtitle and date come first as two-cell rows, then
    /// the column header and the students, then the total.
    ///
    /// # Errors
    ///
    /// Returns an error if the CSV writer fails.
    pub fn to_csv(&self) -> Result<String, ExportError> {
        let mut writer: csv::Writer<Vec<u8>> = csv::WriterBuilder::new()
            .flexible(true)
            .from_writer(Vec::new());

        let generated_on: String = self.generated_on.to_string();
        let titles: [&str; 3] = [&self.route_name, &self.subtitle, &generated_on];
        for (label, value) in ROSTER_TITLE_LABELS.into_iter().zip(titles) {
            writer.write_record([label, value])?;
        }

        writer.write_record(ROSTER_HEADERS)?;
        for row in &self.rows {
            writer.write_record([
                row.ticket.to_string().as_str(),
                row.full_name.as_str(),
                row.code.as_str(),
                row.phone.as_str(),
                row.faculty.as_str(),
                row.boarded.as_str(),
            ])?;
        }
        writer.write_record([ROSTER_TOTAL_LABEL, self.total.to_string().as_str()])?;
        let bytes: Vec<u8> = writer
            .into_inner()
            .map_err(|err| ExportError::Buffer(err.error().to_string()))?;
        Ok(String::from_utf8(bytes)?)
    }
}

/// Builds the roster of the route named `route_name`.
///
/// # Errors
///
/// Returns an error if no route has that name.
pub fn route_roster(
    state: &State,
    route_name: &str,
    generated_on: Date,
) -> Result<RouteRoster, DomainError> {
    let route: &RouteConfig = state
        .route_by_name(route_name)
        .ok_or_else(|| DomainError::RouteNotFound(route_name.to_string()))?;

    let rows: Vec<RosterRow> = students_on_route(state, &route.id, None)
        .into_iter()
        .map(RosterRow::from)
        .collect();

    Ok(RouteRoster {
        route_name: route.name.clone(),
        subtitle: route.subtitle.clone(),
        generated_on,
        total: rows.len(),
        rows,
    })
}
