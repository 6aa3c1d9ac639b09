//! Typed records behind each module page. Field names serialize to the
//! accessors the module columns read.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmploymentStatus {
    Active,
    #[serde(rename = "On Leave")]
    OnLeave,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Presence {
    Online,
    Away,
    Offline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CandidateStage {
    Applied,
    Screening,
    Interview,
    Offer,
    Hired,
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PayrollStatus {
    Paid,
    Pending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PolicyStatus {
    Active,
    Draft,
    Archived,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: String,
    pub dept: String,
    pub status: EmploymentStatus,
    pub join_date: String,
    pub location: String,
    pub teamlead: String,
    pub performance: String,
    pub projects: u32,
    pub tasks_completed: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityEntry {
    pub name: String,
    pub dept: String,
    pub availability: Presence,
    pub task: String,
    pub last_active: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: String,
    pub stage: CandidateStage,
    pub score: u8,
    pub source: String,
    pub applied_date: String,
    pub location: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollEntry {
    pub name: String,
    pub month: String,
    pub salary: String,
    pub status: PayrollStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Policy {
    pub name: String,
    pub category: String,
    pub effective_date: String,
    pub status: PolicyStatus,
}
