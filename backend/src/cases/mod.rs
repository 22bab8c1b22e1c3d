//! Case workspace state.
//!
//! Holds the case collection (newest first) and the active-case pointer. All
//! mutations go through [`CaseStore`]; operations naming an unknown case are
//! ignored rather than reported.

mod seed;

pub use seed::initial_cases;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::models::{
    CaseInteraction, CaseMode, CaseRecord, CaseRole, CaseSnapshot, CaseStatus, CaseUpdate,
    CaseWorkspace,
};

/// Actor recorded on the entries of a freshly created case.
const NEW_CASE_ACTOR: CaseRole = CaseRole::GeneralCounsel;

/// In-memory case collection plus the active-case pointer.
#[derive(Debug, Clone, Default)]
pub struct CaseStore {
    cases: Vec<CaseRecord>,
    active_case_id: Option<String>,
}

impl CaseStore {
    /// Start from `cases`, with the first one active.
    pub fn new(cases: Vec<CaseRecord>) -> Self {
        let active_case_id = cases.first().map(|c| c.id.clone());
        Self {
            cases,
            active_case_id,
        }
    }

    /// Start from the demo matters.
    pub fn seeded() -> Self {
        Self::new(initial_cases())
    }

    pub fn cases(&self) -> &[CaseRecord] {
        &self.cases
    }

    pub fn active_case_id(&self) -> Option<&str> {
        self.active_case_id.as_deref()
    }

    pub fn get_case(&self, case_id: &str) -> Option<&CaseRecord> {
        self.cases.iter().find(|c| c.id == case_id)
    }

    /// The case the pointer names, else the first case, else none.
    ///
    /// A dangling pointer is not cleared; it keeps falling back until it is
    /// set to something that exists.
    pub fn active_case(&self) -> Option<&CaseRecord> {
        self.active_case_id
            .as_deref()
            .and_then(|id| self.get_case(id))
            .or_else(|| self.cases.first())
    }

    pub fn snapshot(&self) -> CaseSnapshot {
        CaseSnapshot {
            cases: self.cases.clone(),
            active_case_id: self.active_case_id.clone(),
            active_case: self.active_case().cloned(),
        }
    }

    /// Create a blank matter, put it first and make it active.
    pub fn create_case(&mut self) -> CaseRecord {
        self.create_case_at(Utc::now())
    }

    fn create_case_at(&mut self, now: DateTime<Utc>) -> CaseRecord {
        let mut millis = now.timestamp_millis();
        while self.get_case(&format!("case-{}", millis)).is_some() {
            millis += 1;
        }
        let id = format!("case-{}", millis);
        let created_at = timestamp(now);

        let seed_entry = |n: usize, message: &str| CaseInteraction {
            id: format!("{}-{}", id, n),
            created_at: created_at.clone(),
            actor: NEW_CASE_ACTOR.as_str().to_string(),
            message: message.to_string(),
        };
        let interaction_history = vec![
            seed_entry(1, "Opened new case workspace."),
            seed_entry(2, "Set initial jurisdiction focus."),
        ];

        let record = CaseRecord {
            id: id.clone(),
            title: format!("New matter {}", self.cases.len() + 1),
            description: "Newly created case workspace.".to_string(),
            status: CaseStatus::InProgress,
            created_at: created_at.clone(),
            interaction_history,
            selected_role: NEW_CASE_ACTOR,
            selected_mode: CaseMode::Draft,
            workspace: CaseWorkspace {
                meta: "Just created".to_string(),
                objective: "Define scope, assign roles, and request initial documents."
                    .to_string(),
                next_action: "Add key facts and upload first evidence set.".to_string(),
                jurisdiction: "TBD".to_string(),
                output: "Intake brief".to_string(),
            },
        };

        self.cases.insert(0, record.clone());
        self.active_case_id = Some(id);

        tracing::info!(
            case_id = %record.id,
            status = record.status.as_str(),
            "Case created"
        );
        record
    }

    /// Point at `case_id` without checking that it exists.
    pub fn set_active_case(&mut self, case_id: impl Into<String>) {
        let case_id = case_id.into();
        tracing::debug!(case_id = %case_id, "Active case changed");
        self.active_case_id = Some(case_id);
    }

    /// Merge `update` into the named case. Returns the updated record, or
    /// `None` when no case has that id.
    pub fn update_case(&mut self, case_id: &str, update: CaseUpdate) -> Option<&CaseRecord> {
        let Some(record) = self.cases.iter_mut().find(|c| c.id == case_id) else {
            tracing::debug!(case_id, "Ignoring update for unknown case");
            return None;
        };
        update.apply_to(record);
        Some(&*record)
    }

    pub fn set_case_role(&mut self, case_id: &str, role: CaseRole) -> Option<&CaseRecord> {
        tracing::debug!(case_id, role = role.as_str(), "Setting case role");
        self.update_case(
            case_id,
            CaseUpdate {
                selected_role: Some(role),
                ..Default::default()
            },
        )
    }

    pub fn set_case_mode(&mut self, case_id: &str, mode: CaseMode) -> Option<&CaseRecord> {
        tracing::debug!(case_id, mode = mode.as_str(), "Setting case mode");
        self.update_case(
            case_id,
            CaseUpdate {
                selected_mode: Some(mode),
                ..Default::default()
            },
        )
    }

    /// Append to the named case's history. Blank messages and unknown cases
    /// are ignored.
    pub fn add_interaction(
        &mut self,
        case_id: &str,
        actor: &str,
        message: &str,
    ) -> Option<CaseInteraction> {
        self.add_interaction_at(case_id, actor, message, Utc::now())
    }

    fn add_interaction_at(
        &mut self,
        case_id: &str,
        actor: &str,
        message: &str,
        now: DateTime<Utc>,
    ) -> Option<CaseInteraction> {
        if message.trim().is_empty() {
            return None;
        }
        let record = self.cases.iter_mut().find(|c| c.id == case_id)?;

        let history = &mut record.interaction_history;
        let mut n = history.len() + 1;
        while history
            .iter()
            .any(|entry| entry.id == format!("{}-{}", case_id, n))
        {
            n += 1;
        }

        let entry = CaseInteraction {
            id: format!("{}-{}", case_id, n),
            created_at: timestamp(now),
            actor: actor.to_string(),
            message: message.to_string(),
        };
        history.push(entry.clone());

        tracing::debug!(case_id, entry_id = %entry.id, "Interaction recorded");
        Some(entry)
    }
}

/// RFC 3339 UTC with milliseconds, e.g. `2026-02-03T09:00:00.000Z`.
fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
