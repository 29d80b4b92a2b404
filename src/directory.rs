use std::fs;
use std::path::Path;
use std::sync::{Arc, RwLock};

use anyhow::Context;

use crate::models::DoctorRecord;

/// Shared, replaceable snapshot of the doctor directory.
#[derive(Default)]
pub struct Directory {
    doctors: RwLock<Arc<Vec<DoctorRecord>>>,
}

impl Directory {
    pub fn new(doctors: Vec<DoctorRecord>) -> Self {
        Self {
            doctors: RwLock::new(Arc::new(doctors)),
        }
    }

    pub fn snapshot(&self) -> Arc<Vec<DoctorRecord>> {
        match self.doctors.read() {
            Ok(guard) => Arc::clone(&guard),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    pub fn replace(&self, doctors: Vec<DoctorRecord>) {
        let mut guard = match self.doctors.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = Arc::new(doctors);
    }

    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Read the directory file. A missing file means the directory is not
/// available yet and yields an empty list.
pub fn load_directory(path: &str) -> anyhow::Result<Vec<DoctorRecord>> {
    let path = Path::new(path);
    if !path.exists() {
        tracing::warn!(path = %path.display(), "doctor directory not found, starting empty");
        return Ok(Vec::new());
    }

    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read doctor directory: {}", path.display()))?;
    let doctors: Vec<DoctorRecord> = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse doctor directory: {}", path.display()))?;

    tracing::info!(count = doctors.len(), "loaded doctor directory");
    Ok(doctors)
}
