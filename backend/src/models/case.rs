//! Case model matching the frontend CaseRecord interface.

use serde::{Deserialize, Serialize};

/// Progress of a matter. Any value may be set at any time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CaseStatus {
    #[serde(rename = "In progress")]
    InProgress,
    #[serde(rename = "On hold")]
    OnHold,
    Scheduled,
    Completed,
}

impl CaseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseStatus::InProgress => "In progress",
            CaseStatus::OnHold => "On hold",
            CaseStatus::Scheduled => "Scheduled",
            CaseStatus::Completed => "Completed",
        }
    }
}

/// Working mode of the case workspace.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CaseMode {
    Draft,
    Review,
    Live,
    Archive,
}

impl CaseMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseMode::Draft => "Draft",
            CaseMode::Review => "Review",
            CaseMode::Live => "Live",
            CaseMode::Archive => "Archive",
        }
    }
}

/// Role the assistant acts in for a case.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CaseRole {
    #[serde(rename = "Compliance Counsel")]
    ComplianceCounsel,
    #[serde(rename = "Contract Analyst")]
    ContractAnalyst,
    #[serde(rename = "Audit Strategist")]
    AuditStrategist,
    #[serde(rename = "Litigation Lead")]
    LitigationLead,
    #[serde(rename = "General Counsel")]
    GeneralCounsel,
}

impl CaseRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseRole::ComplianceCounsel => "Compliance Counsel",
            CaseRole::ContractAnalyst => "Contract Analyst",
            CaseRole::AuditStrategist => "Audit Strategist",
            CaseRole::LitigationLead => "Litigation Lead",
            CaseRole::GeneralCounsel => "General Counsel",
        }
    }
}

/// One append-only entry in a case's interaction log.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CaseInteraction {
    pub id: String,
    pub created_at: String,
    pub actor: String,
    pub message: String,
}

/// Summary panel shown next to the case.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CaseWorkspace {
    pub meta: String,
    pub objective: String,
    pub next_action: String,
    pub jurisdiction: String,
    pub output: String,
}

/// A legal matter under management.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CaseRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: CaseStatus,
    pub created_at: String,
    pub interaction_history: Vec<CaseInteraction>,
    pub selected_role: CaseRole,
    pub selected_mode: CaseMode,
    pub workspace: CaseWorkspace,
}

/// Fields that may be merged into an existing case.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseUpdate {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<CaseStatus>,
    #[serde(default)]
    pub selected_role: Option<CaseRole>,
    #[serde(default)]
    pub selected_mode: Option<CaseMode>,
    #[serde(default)]
    pub workspace: Option<CaseWorkspace>,
}

impl CaseUpdate {
    /// Merge the present fields into `record`.
    pub fn apply_to(self, record: &mut CaseRecord) {
        if let Some(title) = self.title {
            record.title = title;
        }
        if let Some(description) = self.description {
            record.description = description;
        }
        if let Some(status) = self.status {
            record.status = status;
        }
        if let Some(role) = self.selected_role {
            record.selected_role = role;
        }
        if let Some(mode) = self.selected_mode {
            record.selected_mode = mode;
        }
        if let Some(workspace) = self.workspace {
            record.workspace = workspace;
        }
    }
}

/// Point-in-time view of the case collection.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseSnapshot {
    pub cases: Vec<CaseRecord>,
    pub active_case_id: Option<String>,
    pub active_case: Option<CaseRecord>,
}

/// Request body for switching the active case.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetActiveCaseRequest {
    pub case_id: String,
}

/// Request body for changing a case's role.
#[derive(Debug, Clone, Deserialize)]
pub struct SetCaseRoleRequest {
    pub role: CaseRole,
}

/// Request body for changing a case's mode.
#[derive(Debug, Clone, Deserialize)]
pub struct SetCaseModeRequest {
    pub mode: CaseMode,
}

/// Request body for appending to a case's interaction log.
#[derive(Debug, Clone, Deserialize)]
pub struct AddInteractionRequest {
    pub actor: String,
    pub message: String,
}
