use agent_protocol::{LeadForm, LeadRecord};
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// One failed validation check, addressed to a form field.
#[derive(Debug, Serialize, PartialEq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

/// Check a submitted lead form. An empty vec means the form is acceptable.
pub fn validate(form: &LeadForm) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if form.name.trim().is_empty() {
        errors.push(FieldError::new("name", "Name is required"));
    }
    if form.company.trim().is_empty() {
        errors.push(FieldError::new("company", "Company is required"));
    }
    if !form.email.contains('@') {
        errors.push(FieldError::new("email", "Valid email is required"));
    }
    if form.phone.trim().is_empty() {
        errors.push(FieldError::new("phone", "Phone is required"));
    }
    if form.agent_id.trim().is_empty() {
        errors.push(FieldError::new("agentId", "Agent ID is required"));
    }
    if !form.consent {
        errors.push(FieldError::new("consent", "Consent is required"));
    }

    errors
}

/// Append-only JSONL store for captured leads.
pub struct LeadStore {
    path: PathBuf,
}

impl LeadStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Append one record as a single JSON line.
    pub fn append(&self, record: &LeadRecord) -> Result<()> {
        let line = serde_json::to_string(record)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open lead store {}", self.path.display()))?;
        writeln!(file, "{line}")?;
        log::info!("Captured lead for agent {}", record.form.agent_id);
        Ok(())
    }
}
