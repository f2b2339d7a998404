//! Record store boundary.
//!
//! The calculation core never talks to storage; it receives resolved
//! collections. [`RecordStore`] is the seam the HTTP layer and import tooling
//! use to read and write records, with [`InMemoryStore`] as the bundled
//! implementation.

mod legacy;
mod memory;

pub use legacy::{ImportReport, SkippedRow, import_legacy_json};
pub use memory::InMemoryStore;

use uuid::Uuid;

use crate::error::EngineResult;
use crate::models::{
    Adjustment, AttendanceEntry, EntryFilter, PayPeriod, PayrollRecord, TeamMember,
};

/// CRUD access to the records the payroll engine works with.
///
/// Listings are returned in a stable order. Updates replace the whole record;
/// concurrent writers to the same record are last-write-wins, except for
/// [`RecordStore::mark_payroll_paid`].
pub trait RecordStore: Send + Sync {
    /// All team members, ordered by name.
    fn list_team_members(&self) -> EngineResult<Vec<TeamMember>>;
    /// A team member by name.
    fn get_team_member(&self, name: &str) -> EngineResult<TeamMember>;
    /// Adds a team member. Names are unique.
    fn insert_team_member(&self, member: TeamMember) -> EngineResult<()>;
    /// Replaces the team member with the same name.
    fn update_team_member(&self, member: TeamMember) -> EngineResult<()>;
    /// Removes a team member. Their attendance entries are kept.
    fn delete_team_member(&self, name: &str) -> EngineResult<()>;

    /// All attendance entries, ordered by date, agent and clock-in time.
    fn list_entries(&self) -> EngineResult<Vec<AttendanceEntry>>;
    /// An attendance entry by id.
    fn get_entry(&self, id: Uuid) -> EngineResult<AttendanceEntry>;
    /// Adds an attendance entry.
    fn insert_entry(&self, entry: AttendanceEntry) -> EngineResult<()>;
    /// Replaces the attendance entry with the same id.
    fn update_entry(&self, entry: AttendanceEntry) -> EngineResult<()>;
    /// Removes an attendance entry.
    fn delete_entry(&self, id: Uuid) -> EngineResult<()>;

    /// All pay periods, ordered by start date.
    fn list_pay_periods(&self) -> EngineResult<Vec<PayPeriod>>;
    /// A pay period by id.
    fn get_pay_period(&self, id: Uuid) -> EngineResult<PayPeriod>;
    /// Adds a pay period.
    fn insert_pay_period(&self, period: PayPeriod) -> EngineResult<()>;
    /// Removes a pay period.
    fn delete_pay_period(&self, id: Uuid) -> EngineResult<()>;

    /// All payroll records, oldest first.
    fn list_payroll_records(&self) -> EngineResult<Vec<PayrollRecord>>;
    /// A payroll record by id.
    fn get_payroll_record(&self, id: Uuid) -> EngineResult<PayrollRecord>;
    /// Adds a payroll record.
    fn insert_payroll_record(&self, record: PayrollRecord) -> EngineResult<()>;
    /// Replaces the payroll record with the same id.
    fn update_payroll_record(&self, record: PayrollRecord) -> EngineResult<()>;
    /// Moves a pending payroll record to paid and returns it.
    ///
    /// The status check and the write are atomic: of two concurrent callers
    /// for the same record, exactly one succeeds.
    fn mark_payroll_paid(&self, id: Uuid) -> EngineResult<PayrollRecord>;

    /// All adjustments, ordered by agent name.
    fn list_adjustments(&self) -> EngineResult<Vec<Adjustment>>;
    /// Adds an adjustment.
    fn insert_adjustment(&self, adjustment: Adjustment) -> EngineResult<()>;
    /// Removes an adjustment.
    fn delete_adjustment(&self, id: Uuid) -> EngineResult<()>;

    /// Attendance entries passing `filter`.
    fn entries_matching(&self, filter: &EntryFilter) -> EngineResult<Vec<AttendanceEntry>> {
        Ok(self
            .list_entries()?
            .into_iter()
            .filter(|e| filter.matches(e))
            .collect())
    }
}
