use std::collections::HashMap;
use std::str::FromStr;

use serde::Serialize;
use srq_core::models::evaluation::Evaluation;
use srq_core::models::level::DistressLevel;
use srq_core::models::user::{Gender, UserProfile};
use uuid::Uuid;

use crate::error::ExportError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Csv => "text/csv; charset=utf-8",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            _ => Err(ExportError::BadFormat(s.to_string())),
        }
    }
}

/// One exported evaluation. Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportRow {
    pub id: Uuid,
    pub user: String,
    pub score: u8,
    pub level: DistressLevel,
    pub timestamp: jiff::Timestamp,
    pub gender: Option<Gender>,
}

/// Join evaluations with their owners' profiles. `user` is the username
/// when a profile exists, otherwise the raw user id.
pub fn rows(evaluations: &[Evaluation], profiles: &HashMap<String, UserProfile>) -> Vec<ExportRow> {
    evaluations
        .iter()
        .map(|e| {
            let profile = profiles.get(&e.user_id);
            ExportRow {
                id: e.id,
                user: profile
                    .map(|p| p.username.clone())
                    .unwrap_or_else(|| e.user_id.clone()),
                score: e.score,
                level: e.level,
                timestamp: e.created_at,
                gender: profile.and_then(|p| p.gender),
            }
        })
        .collect()
}

/// Render rows in the requested format.
pub fn render(format: ExportFormat, rows: &[ExportRow]) -> Result<Vec<u8>, ExportError> {
    match format {
        ExportFormat::Json => Ok(serde_json::to_vec(rows)?),
        ExportFormat::Csv => to_csv(rows),
    }
}

fn to_csv(rows: &[ExportRow]) -> Result<Vec<u8>, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    if rows.is_empty() {
        // serialize() only writes the header alongside the first record
        writer.write_record(["id", "user", "score", "level", "timestamp", "gender"])?;
    }
    for row in rows {
        writer.serialize(row)?;
    }
    let body = writer
        .into_inner()
        .map_err(|e| ExportError::Csv(e.to_string()))?;
    tracing::debug!(rows = rows.len(), bytes = body.len(), "rendered csv export");
    Ok(body)
}
