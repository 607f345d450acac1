//! Record store contract and in-memory implementation.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{
    Advance, Employee, EmployeeLedger, LedgerRecord, OvertimeRecord, SalaryPayment, WorkRecord,
};

/// Storage for employees and their ledger records.
///
/// Implementations must reject a record that names an unknown employee or
/// whose kind does not fit the employee's compensation.
pub trait RecordStore: Send + Sync {
    /// All employees, ordered by id.
    fn list_employees(&self) -> LedgerResult<Vec<Employee>>;

    /// One employee.
    ///
    /// # Errors
    ///
    /// `EmployeeNotFound` when the id is unknown.
    fn get_employee(&self, employee_id: &str) -> LedgerResult<Employee>;

    /// Adds a new employee. Fails with `EmployeeMismatch` if the id is taken.
    fn insert_employee(&self, employee: Employee) -> LedgerResult<Employee>;

    /// Replaces an existing employee.
    fn update_employee(&self, employee: Employee) -> LedgerResult<Employee>;

    /// Work records for an employee, ordered by date.
    fn list_work_records(&self, employee_id: &str) -> LedgerResult<Vec<WorkRecord>>;

    /// Overtime records for an employee, ordered by date.
    fn list_overtime_records(&self, employee_id: &str) -> LedgerResult<Vec<OvertimeRecord>>;

    /// Salary payments for an employee, ordered by date.
    fn list_salary_payments(&self, employee_id: &str) -> LedgerResult<Vec<SalaryPayment>>;

    /// Advances for an employee, ordered by date.
    fn list_advances(&self, employee_id: &str) -> LedgerResult<Vec<Advance>>;

    /// Stores a validated record.
    fn insert_record(&self, record: LedgerRecord) -> LedgerResult<LedgerRecord>;

    /// Removes a record and returns it.
    fn delete_record(&self, record_id: Uuid) -> LedgerResult<LedgerRecord>;

    /// Every record belonging to one employee.
    fn load_ledger(&self, employee_id: &str) -> LedgerResult<EmployeeLedger> {
        Ok(EmployeeLedger {
            work_records: self.list_work_records(employee_id)?,
            overtime_records: self.list_overtime_records(employee_id)?,
            salary_payments: self.list_salary_payments(employee_id)?,
            advances: self.list_advances(employee_id)?,
        })
    }
}

/// Serialized form of a whole store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Employees.
    #[serde(default)]
    pub employees: Vec<Employee>,
    /// Records of every kind, tagged by `kind`.
    #[serde(default)]
    pub records: Vec<LedgerRecord>,
}

#[derive(Debug, Default)]
struct StoreData {
    employees: BTreeMap<String, Employee>,
    records: Vec<LedgerRecord>,
}

impl StoreData {
    fn employee(&self, employee_id: &str) -> LedgerResult<&Employee> {
        self.employees
            .get(employee_id)
            .ok_or_else(|| LedgerError::EmployeeNotFound {
                employee_id: employee_id.to_string(),
            })
    }

    fn check_record(&self, record: &LedgerRecord) -> LedgerResult<()> {
        let employee = self.employee(record.employee_id())?;
        let kind = record.kind();
        if let Some(required) = kind.required_employee_kind() {
            if required != employee.kind() {
                return Err(LedgerError::EmployeeMismatch {
                    employee_id: employee.id.clone(),
                    message: format!(
                        "a {} cannot be recorded for a {:?} employee",
                        kind.as_str(),
                        employee.kind()
                    ),
                });
            }
        }
        if self.records.iter().any(|r| r.id() == record.id()) {
            return Err(LedgerError::DataIntegrity {
                message: format!("duplicate record id {}", record.id()),
            });
        }
        Ok(())
    }

    fn select<T, F>(&self, employee_id: &str, pick: F) -> LedgerResult<Vec<T>>
    where
        T: Clone + crate::models::Dated,
        F: Fn(&LedgerRecord) -> Option<&T>,
    {
        self.employee(employee_id)?;
        let mut selected: Vec<T> = self
            .records
            .iter()
            .filter(|r| r.employee_id() == employee_id)
            .filter_map(|r| pick(r).cloned())
            .collect();
        selected.sort_by_key(|r| r.date());
        Ok(selected)
    }
}

/// A [`RecordStore`] held in process memory.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    data: RwLock<StoreData>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from a snapshot, checking every record.
    ///
    /// # Errors
    ///
    /// `DataIntegrity` when the snapshot names an unknown employee, repeats
    /// an id or pairs a record with the wrong employee kind.
    pub fn from_snapshot(snapshot: Snapshot) -> LedgerResult<Self> {
        let store = Self::new();
        for employee in snapshot.employees {
            store
                .insert_employee(employee)
                .map_err(|e| LedgerError::DataIntegrity {
                    message: e.to_string(),
                })?;
        }
        for record in snapshot.records {
            store
                .insert_record(record)
                .map_err(|e| LedgerError::DataIntegrity {
                    message: e.to_string(),
                })?;
        }
        Ok(store)
    }

    /// Exports the store contents.
    pub fn snapshot(&self) -> Snapshot {
        let data = self.read();
        Snapshot {
            employees: data.employees.values().cloned().collect(),
            records: data.records.clone(),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, StoreData> {
        self.data.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreData> {
        self.data.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl RecordStore for InMemoryStore {
    fn list_employees(&self) -> LedgerResult<Vec<Employee>> {
        Ok(self.read().employees.values().cloned().collect())
    }

    fn get_employee(&self, employee_id: &str) -> LedgerResult<Employee> {
        self.read().employee(employee_id).cloned()
    }

    fn insert_employee(&self, employee: Employee) -> LedgerResult<Employee> {
        let mut data = self.write();
        if data.employees.contains_key(&employee.id) {
            return Err(LedgerError::EmployeeMismatch {
                employee_id: employee.id.clone(),
                message: "an employee with this id already exists".to_string(),
            });
        }
        debug!(employee_id = %employee.id, kind = ?employee.kind(), "Inserting employee");
        data.employees.insert(employee.id.clone(), employee.clone());
        Ok(employee)
    }

    fn update_employee(&self, employee: Employee) -> LedgerResult<Employee> {
        let mut data = self.write();
        let current = data.employee(&employee.id)?;

        if current.kind() != employee.kind() {
            let conflicting = data.records.iter().any(|r| {
                r.employee_id() == employee.id
                    && r
                        .kind()
                        .required_employee_kind()
                        .is_some_and(|k| k != employee.kind())
            });
            if conflicting {
                return Err(LedgerError::EmployeeMismatch {
                    employee_id: employee.id.clone(),
                    message: "compensation cannot change while records of the old kind exist"
                        .to_string(),
                });
            }
        }

        debug!(employee_id = %employee.id, "Updating employee");
        data.employees.insert(employee.id.clone(), employee.clone());
        Ok(employee)
    }

    fn list_work_records(&self, employee_id: &str) -> LedgerResult<Vec<WorkRecord>> {
        self.read().select(employee_id, |r| match r {
            LedgerRecord::WorkRecord(w) => Some(w),
            _ => None,
        })
    }

    fn list_overtime_records(&self, employee_id: &str) -> LedgerResult<Vec<OvertimeRecord>> {
        self.read().select(employee_id, |r| match r {
            LedgerRecord::OvertimeRecord(o) => Some(o),
            _ => None,
        })
    }

    fn list_salary_payments(&self, employee_id: &str) -> LedgerResult<Vec<SalaryPayment>> {
        self.read().select(employee_id, |r| match r {
            LedgerRecord::SalaryPayment(p) => Some(p),
            _ => None,
        })
    }

    fn list_advances(&self, employee_id: &str) -> LedgerResult<Vec<Advance>> {
        self.read().select(employee_id, |r| match r {
            LedgerRecord::Advance(a) => Some(a),
            _ => None,
        })
    }

    fn insert_record(&self, record: LedgerRecord) -> LedgerResult<LedgerRecord> {
        let mut data = self.write();
        data.check_record(&record)?;
        debug!(
            record_id = %record.id(),
            employee_id = %record.employee_id(),
            kind = record.kind().as_str(),
            "Inserting record"
        );
        data.records.push(record.clone());
        Ok(record)
    }

    fn delete_record(&self, record_id: Uuid) -> LedgerResult<LedgerRecord> {
        let mut data = self.write();
        let position = data
            .records
            .iter()
            .position(|r| r.id() == record_id)
            .ok_or_else(|| LedgerError::RecordNotFound {
                record_id: record_id.to_string(),
            })?;
        let removed = data.records.remove(position);
        debug!(record_id = %record_id, kind = removed.kind().as_str(), "Deleted record");
        Ok(removed)
    }
}

/// Reads a JSON snapshot file into a new store.
///
/// # Errors
///
/// `DataIntegrity` when the file cannot be read, does not decode (for
/// example an amount that is not a number) or fails the store's checks.
pub fn load_snapshot<P: AsRef<Path>>(path: P) -> LedgerResult<InMemoryStore> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|e| LedgerError::DataIntegrity {
        message: format!("cannot read snapshot {}: {}", path.display(), e),
    })?;
    let snapshot: Snapshot =
        serde_json::from_str(&raw).map_err(|e| LedgerError::DataIntegrity {
            message: format!("cannot decode snapshot {}: {}", path.display(), e),
        })?;

    let (employees, records) = (snapshot.employees.len(), snapshot.records.len());
    let store = InMemoryStore::from_snapshot(snapshot)?;
    info!(
        path = %path.display(),
        employees,
        records,
        "Loaded ledger snapshot"
    );
    Ok(store)
}
