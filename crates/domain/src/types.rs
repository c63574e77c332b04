// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Opaque identifier of a registered student.
///
/// Generated once at registration and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(String);

impl StudentId {
    /// Creates a `StudentId` from an existing value.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(value.to_string())
    }

    /// Generates a fresh random identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for StudentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque identifier of a clarification entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClarificationId(String);

impl ClarificationId {
    /// Creates a `ClarificationId` from an existing value.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(value.to_string())
    }

    /// Generates a fresh random identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ClarificationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Immutable surrogate identifier of a route.
///
/// Students reference routes through this identifier, never through the
/// display name, so renaming a route cannot orphan its riders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteId(String);

impl RouteId {
    /// Creates a `RouteId` from an existing value.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(value.to_string())
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RouteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A student identifier code as issued by the university.
///
/// Codes are compared exactly as stored (case-sensitive).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentCode(String);

impl StudentCode {
    /// Creates a new `StudentCode`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(value.to_string())
    }

    /// Returns the code value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for StudentCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Per-route registration sequence number.
///
/// Ticket numbers identify issue order on a route. They are not seat
/// positions: deleting a student leaves a gap that is never refilled.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TicketNumber(u32);

impl TicketNumber {
    /// Sentinel for "no ticket issued yet".
    pub const NONE: Self = Self(0);

    /// The ticket issued to the first student on an empty route.
    pub const FIRST: Self = Self(1);

    /// Creates a `TicketNumber` from a raw value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the raw ticket value.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.0
    }

    /// Returns the ticket issued after this one, or `None` once the
    /// sequence is exhausted.
    #[must_use]
    pub const fn next(&self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }
}

impl std::fmt::Display for TicketNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A point in time stored as Unix milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Creates a `Timestamp` from Unix milliseconds.
    #[must_use]
    pub const fn from_unix_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// Returns the timestamp as Unix milliseconds.
    #[must_use]
    pub const fn as_unix_millis(&self) -> i64 {
        self.0
    }
}

/// University faculty a student belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faculty {
    /// Architecture, Urbanism and Arts
    FAUA,
    /// Sciences
    FC,
    /// Environmental Engineering
    FIA,
    /// Civil Engineering
    FIC,
    /// Economics, Statistics and Social Sciences
    FIEECS,
    /// Electrical and Electronic Engineering
    FIEE,
    /// Geological, Mining and Metallurgical Engineering
    FIGMM,
    /// Industrial and Systems Engineering
    FIIS,
    /// Mechanical Engineering
    FIM,
    /// Petroleum, Natural Gas and Petrochemical Engineering
    FIP,
    /// Chemical and Textile Engineering
    FIQT,
}

impl Faculty {
    /// Every faculty, in catalogue order.
    pub const ALL: [Self; 11] = [
        Self::FAUA,
        Self::FC,
        Self::FIA,
        Self::FIC,
        Self::FIEECS,
        Self::FIEE,
        Self::FIGMM,
        Self::FIIS,
        Self::FIM,
        Self::FIP,
        Self::FIQT,
    ];

    /// Returns the faculty abbreviation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FAUA => "FAUA",
            Self::FC => "FC",
            Self::FIA => "FIA",
            Self::FIC => "FIC",
            Self::FIEECS => "FIEECS",
            Self::FIEE => "FIEE",
            Self::FIGMM => "FIGMM",
            Self::FIIS => "FIIS",
            Self::FIM => "FIM",
            Self::FIP => "FIP",
            Self::FIQT => "FIQT",
        }
    }
}

impl FromStr for Faculty {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|faculty| faculty.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::InvalidFaculty(s.to_string()))
    }
}

impl std::fmt::Display for Faculty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Boarding status of a registered student.
///
/// There is no state machine: any status may be set from any other,
/// including reopening a boarded or no-show entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum StudentStatus {
    /// Registered, not yet checked at the bus.
    #[default]
    Pending,
    /// Checked in at the bus.
    Boarded,
    /// Did not show up.
    NoShow,
}

impl StudentStatus {
    /// Returns the persisted string form of this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Boarded => "boarded",
            Self::NoShow => "no-show",
        }
    }
}

impl FromStr for StudentStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "pending" => Ok(Self::Pending),
            "boarded" => Ok(Self::Boarded),
            "no-show" | "noshow" | "no_show" => Ok(Self::NoShow),
            _ => Err(DomainError::InvalidStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for StudentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The caller-supplied part of a registration.
///
/// Identity, ticket number, status and timestamp are assigned by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentDetails {
    /// Given name.
    pub name: String,
    /// Family name.
    pub last_name: String,
    /// University code, globally unique among registered students.
    pub code: StudentCode,
    /// Faculty.
    pub faculty: Faculty,
    /// The route the student rides.
    pub route: RouteId,
    /// Contact phone.
    pub phone: String,
}

/// A registered rider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    /// Immutable identity.
    pub id: StudentId,
    /// Given name.
    pub name: String,
    /// Family name.
    pub last_name: String,
    /// University code.
    pub code: StudentCode,
    /// Faculty.
    pub faculty: Faculty,
    /// The route this student is registered on.
    pub route: RouteId,
    /// Contact phone.
    pub phone: String,
    /// Sequence number within the route.
    pub ticket_number: TicketNumber,
    /// Boarding status.
    pub status: StudentStatus,
    /// Creation time.
    pub timestamp: Timestamp,
}

impl Student {
    /// Builds a freshly admitted student in `Pending` status.
    ///
    /// # Arguments
    ///
    /// * `id` - The identity to assign
    /// * `details` - The caller-supplied registration fields
    /// * `ticket_number` - The sequence number issued on the route
    /// * `timestamp` - The admission time
    #[must_use]
    pub fn admit(
        id: StudentId,
        details: StudentDetails,
        ticket_number: TicketNumber,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            id,
            name: details.name,
            last_name: details.last_name,
            code: details.code,
            faculty: details.faculty,
            route: details.route,
            phone: details.phone,
            ticket_number,
            status: StudentStatus::Pending,
            timestamp,
        }
    }

    /// Returns the editable fields of this record.
    #[must_use]
    pub fn details(&self) -> StudentDetails {
        StudentDetails {
            name: self.name.clone(),
            last_name: self.last_name.clone(),
            code: self.code.clone(),
            faculty: self.faculty,
            route: self.route.clone(),
            phone: self.phone.clone(),
        }
    }

    /// Returns "name last-name".
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.last_name)
    }
}

/// A configured transportation route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteConfig {
    /// Immutable surrogate identifier.
    pub id: RouteId,
    /// Display name, unique among routes.
    pub name: String,
    /// Secondary display line (pickup point).
    pub subtitle: String,
    /// Whether self-service registration is open.
    pub is_active: bool,
    /// Maximum riders admitted through self-service.
    pub capacity: usize,
    /// Display and priority position, dense over all routes.
    pub order: usize,
    /// Display color as a hex string.
    pub color: String,
    /// Highest ticket number ever issued on this route (`0` if none).
    #[serde(default)]
    pub last_ticket_issued: TicketNumber,
}

/// The caller-supplied part of a new route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteDefinition {
    /// Display name.
    pub name: String,
    /// Secondary display line.
    pub subtitle: String,
    /// Whether self-service registration is open.
    pub is_active: bool,
    /// Seat count.
    pub capacity: usize,
    /// Display color.
    pub color: String,
}

/// A shallow update to a route. `None` leaves the field unchanged.
///
/// The route id and order are not patchable. Order only moves through a
/// reorder.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteConfigPatch {
    /// New display name.
    pub name: Option<String>,
    /// New subtitle.
    pub subtitle: Option<String>,
    /// New active flag.
    pub is_active: Option<bool>,
    /// New capacity.
    pub capacity: Option<usize>,
    /// New color.
    pub color: Option<String>,
}

impl RouteConfigPatch {
    /// Returns true if the patch changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.subtitle.is_none()
            && self.is_active.is_none()
            && self.capacity.is_none()
            && self.color.is_none()
    }

    /// Merges this patch over `config`, producing the updated route.
    #[must_use]
    pub fn merge_into(&self, config: &RouteConfig) -> RouteConfig {
        RouteConfig {
            id: config.id.clone(),
            name: self.name.clone().unwrap_or_else(|| config.name.clone()),
            subtitle: self
                .subtitle
                .clone()
                .unwrap_or_else(|| config.subtitle.clone()),
            is_active: self.is_active.unwrap_or(config.is_active),
            capacity: self.capacity.unwrap_or(config.capacity),
            order: config.order,
            color: self.color.clone().unwrap_or_else(|| config.color.clone()),
            last_ticket_issued: config.last_ticket_issued,
        }
    }
}

/// The caller-supplied part of a clarification entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClarificationDetails {
    /// Given name.
    pub name: String,
    /// Family name.
    pub last_name: String,
    /// The blocked code.
    pub code: StudentCode,
    /// Contact phone.
    pub phone: String,
    /// Why the code is held back.
    pub reason: String,
}

/// A denylist entry that blocks a student code from self-service registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Clarification {
    /// Identity.
    pub id: ClarificationId,
    /// Given name.
    pub name: String,
    /// Family name.
    pub last_name: String,
    /// The blocked code.
    pub code: StudentCode,
    /// Contact phone.
    pub phone: String,
    /// Why the code is held back.
    pub reason: String,
    /// Creation time.
    pub timestamp: Timestamp,
}

impl Clarification {
    /// Builds a clarification entry from caller-supplied details.
    #[must_use]
    pub fn new(id: ClarificationId, details: ClarificationDetails, timestamp: Timestamp) -> Self {
        Self {
            id,
            name: details.name,
            last_name: details.last_name,
            code: details.code,
            phone: details.phone,
            reason: details.reason,
            timestamp,
        }
    }
}
