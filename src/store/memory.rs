//! In-memory record store.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::RwLock;

use tracing::debug;
use uuid::Uuid;

use super::RecordStore;
use crate::error::{EngineError, EngineResult};
use crate::models::{Adjustment, AttendanceEntry, PayPeriod, PayrollRecord, TeamMember};

/// One keyed collection guarded by its own lock.
#[derive(Debug)]
struct Table<K, V> {
    kind: &'static str,
    rows: RwLock<HashMap<K, V>>,
}

impl<K, V> Table<K, V>
where
    K: Eq + Hash + Clone + ToString,
    V: Clone,
{
    fn new(kind: &'static str) -> Self {
        Self {
            kind,
            rows: RwLock::new(HashMap::new()),
        }
    }

    fn poisoned(&self) -> EngineError {
        EngineError::Storage {
            message: format!("{} table lock poisoned", self.kind),
        }
    }

    fn not_found(&self, key: &K) -> EngineError {
        EngineError::RecordNotFound {
            kind: self.kind,
            key: key.to_string(),
        }
    }

    fn all(&self) -> EngineResult<Vec<V>> {
        let rows = self.rows.read().map_err(|_| self.poisoned())?;
        Ok(rows.values().cloned().collect())
    }

    fn get(&self, key: &K) -> EngineResult<V> {
        let rows = self.rows.read().map_err(|_| self.poisoned())?;
        rows.get(key).cloned().ok_or_else(|| self.not_found(key))
    }

    fn insert(&self, key: K, value: V) -> EngineResult<()> {
        let mut rows = self.rows.write().map_err(|_| self.poisoned())?;
        if rows.contains_key(&key) {
            return Err(EngineError::DuplicateRecord {
                kind: self.kind,
                key: key.to_string(),
            });
        }
        debug!(kind = self.kind, key = %key.to_string(), "Inserted record");
        rows.insert(key, value);
        Ok(())
    }

    fn update(&self, key: K, value: V) -> EngineResult<()> {
        let mut rows = self.rows.write().map_err(|_| self.poisoned())?;
        match rows.get_mut(&key) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(self.not_found(&key)),
        }
    }

    /// Applies `change` to a row in place, under the write lock. The row is
    /// left untouched when `change` fails.
    fn modify<F>(&self, key: &K, change: F) -> EngineResult<V>
    where
        F: FnOnce(&mut V) -> EngineResult<()>,
    {
        let mut rows = self.rows.write().map_err(|_| self.poisoned())?;
        let slot = rows.get_mut(key).ok_or_else(|| self.not_found(key))?;
        let mut updated = slot.clone();
        change(&mut updated)?;
        *slot = updated.clone();
        Ok(updated)
    }

    fn delete(&self, key: &K) -> EngineResult<()> {
        let mut rows = self.rows.write().map_err(|_| self.poisoned())?;
        rows.remove(key).map(|_| ()).ok_or_else(|| self.not_found(key))
    }
}

/// A [`RecordStore`] holding everything in process memory.
///
/// # Example
///
/// ```
/// use payroll_engine::store::{InMemoryStore, RecordStore};
/// use payroll_engine::models::{Adjustment, AdjustmentKind};
/// use rust_decimal::Decimal;
///
/// let store = InMemoryStore::new();
/// store
///     .insert_adjustment(Adjustment::new("Ana Cruz", AdjustmentKind::Deduction, Decimal::new(500, 0), "advance"))
///     .unwrap();
/// assert_eq!(store.list_adjustments().unwrap().len(), 1);
/// ```
#[derive(Debug)]
pub struct InMemoryStore {
    members: Table<String, TeamMember>,
    entries: Table<Uuid, AttendanceEntry>,
    periods: Table<Uuid, PayPeriod>,
    records: Table<Uuid, PayrollRecord>,
    adjustments: Table<Uuid, Adjustment>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            members: Table::new("team member"),
            entries: Table::new("attendance entry"),
            periods: Table::new("pay period"),
            records: Table::new("payroll record"),
            adjustments: Table::new("adjustment"),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore for InMemoryStore {
    fn list_team_members(&self) -> EngineResult<Vec<TeamMember>> {
        let mut members = self.members.all()?;
        members.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(members)
    }

    fn get_team_member(&self, name: &str) -> EngineResult<TeamMember> {
        self.members.get(&name.to_string())
    }

    fn insert_team_member(&self, member: TeamMember) -> EngineResult<()> {
        if member.name.trim().is_empty() {
            return Err(EngineError::InvalidTeamMember {
                name: member.name,
                message: "name is empty".to_string(),
            });
        }
        self.members.insert(member.name.clone(), member)
    }

    fn update_team_member(&self, member: TeamMember) -> EngineResult<()> {
        self.members.update(member.name.clone(), member)
    }

    fn delete_team_member(&self, name: &str) -> EngineResult<()> {
        self.members.delete(&name.to_string())
    }

    fn list_entries(&self) -> EngineResult<Vec<AttendanceEntry>> {
        let mut entries = self.entries.all()?;
        entries.sort_by(|a, b| {
            (a.date, &a.agent_name, a.time_in, a.id).cmp(&(b.date, &b.agent_name, b.time_in, b.id))
        });
        Ok(entries)
    }

    fn get_entry(&self, id: Uuid) -> EngineResult<AttendanceEntry> {
        self.entries.get(&id)
    }

    fn insert_entry(&self, entry: AttendanceEntry) -> EngineResult<()> {
        self.entries.insert(entry.id, entry)
    }

    fn update_entry(&self, entry: AttendanceEntry) -> EngineResult<()> {
        self.entries.update(entry.id, entry)
    }

    fn delete_entry(&self, id: Uuid) -> EngineResult<()> {
        self.entries.delete(&id)
    }

    fn list_pay_periods(&self) -> EngineResult<Vec<PayPeriod>> {
        let mut periods = self.periods.all()?;
        periods.sort_by_key(|p| (p.start_date, p.end_date, p.id));
        Ok(periods)
    }

    fn get_pay_period(&self, id: Uuid) -> EngineResult<PayPeriod> {
        self.periods.get(&id)
    }

    fn insert_pay_period(&self, period: PayPeriod) -> EngineResult<()> {
        period.date_range()?;
        self.periods.insert(period.id, period)
    }

    fn delete_pay_period(&self, id: Uuid) -> EngineResult<()> {
        self.periods.delete(&id)
    }

    fn list_payroll_records(&self) -> EngineResult<Vec<PayrollRecord>> {
        let mut records = self.records.all()?;
        records.sort_by_key(|r| (r.created_at, r.id));
        Ok(records)
    }

    fn get_payroll_record(&self, id: Uuid) -> EngineResult<PayrollRecord> {
        self.records.get(&id)
    }

    fn insert_payroll_record(&self, record: PayrollRecord) -> EngineResult<()> {
        self.records.insert(record.id, record)
    }

    fn update_payroll_record(&self, record: PayrollRecord) -> EngineResult<()> {
        self.records.update(record.id, record)
    }

    fn mark_payroll_paid(&self, id: Uuid) -> EngineResult<PayrollRecord> {
        let record = self.records.modify(&id, PayrollRecord::mark_paid)?;
        debug!(id = %id, agent = %record.agent_name, "Payroll record marked paid");
        Ok(record)
    }

    fn list_adjustments(&self) -> EngineResult<Vec<Adjustment>> {
        let mut adjustments = self.adjustments.all()?;
        adjustments.sort_by(|a, b| (&a.agent_name, a.id).cmp(&(&b.agent_name, b.id)));
        Ok(adjustments)
    }

    fn insert_adjustment(&self, adjustment: Adjustment) -> EngineResult<()> {
        self.adjustments.insert(adjustment.id, adjustment)
    }

    fn delete_adjustment(&self, id: Uuid) -> EngineResult<()> {
        self.adjustments.delete(&id)
    }
}
