//! Demo matters the workspace starts with.

use crate::models::{CaseInteraction, CaseMode, CaseRecord, CaseRole, CaseStatus, CaseWorkspace};

struct SeedCase {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    status: CaseStatus,
    created_at: &'static str,
    role: CaseRole,
    mode: CaseMode,
    history: [(&'static str, &'static str); 3],
    workspace: [&'static str; 5],
}

const SEED_CASES: [SeedCase; 4] = [
    SeedCase {
        id: "case-001",
        title: "Keystone Holdings Intake",
        description: "Intake and jurisdiction review for Keystone Holdings matter.",
        status: CaseStatus::InProgress,
        created_at: "2026-02-03T09:00:00.000Z",
        role: CaseRole::ComplianceCounsel,
        mode: CaseMode::Draft,
        history: [
            (
                "2026-02-09T10:00:00.000Z",
                "Drafted timeline summary from uploaded exhibits.",
            ),
            (
                "2026-02-10T12:30:00.000Z",
                "Reviewed contract variance clauses for compliance risk.",
            ),
            (
                "2026-02-10T16:00:00.000Z",
                "Queued agent sync with regional legal guidance.",
            ),
        ],
        workspace: [
            "Due in 2 days",
            "Consolidate jurisdiction analysis and prepare a briefing memo for counsel review.",
            "Schedule a 15-minute voice session with the AI agent to confirm scope.",
            "EU + UK",
            "Briefing memo + checklist",
        ],
    },
    SeedCase {
        id: "case-002",
        title: "Atlas Contract Review",
        description: "Contract review and risk alignment for Atlas procurement.",
        status: CaseStatus::OnHold,
        created_at: "2026-01-28T14:15:00.000Z",
        role: CaseRole::ContractAnalyst,
        mode: CaseMode::Review,
        history: [
            (
                "2026-02-06T09:10:00.000Z",
                "Requested updated vendor packet from counsel.",
            ),
            (
                "2026-02-07T11:45:00.000Z",
                "Flagged missing data privacy addendum.",
            ),
            (
                "2026-02-08T15:20:00.000Z",
                "Prepared negotiation highlights for review.",
            ),
        ],
        workspace: [
            "Waiting on docs",
            "Gather missing vendor exhibits and align on scope with procurement leadership.",
            "Follow up with counsel on outstanding document set.",
            "US + Canada",
            "Clause redline + risk summary",
        ],
    },
    SeedCase {
        id: "case-003",
        title: "Meridian Audit Prep",
        description: "Audit preparation for Meridian controls validation.",
        status: CaseStatus::Scheduled,
        created_at: "2026-02-05T08:30:00.000Z",
        role: CaseRole::AuditStrategist,
        mode: CaseMode::Live,
        history: [
            (
                "2026-02-10T08:45:00.000Z",
                "Outlined audit scope with finance partners.",
            ),
            (
                "2026-02-10T13:05:00.000Z",
                "Mapped evidence checklist to control owners.",
            ),
            (
                "2026-02-10T17:30:00.000Z",
                "Drafted opening statement for kickoff.",
            ),
        ],
        workspace: [
            "Kickoff today",
            "Align audit prep checklist and confirm timeline with internal teams.",
            "Start kickoff session and capture action items.",
            "EU + US",
            "Audit kickoff deck",
        ],
    },
    SeedCase {
        id: "case-004",
        title: "Northwind Arbitration",
        description: "Post-arbitration wrap-up and archive for Northwind.",
        status: CaseStatus::Completed,
        created_at: "2026-01-12T16:20:00.000Z",
        role: CaseRole::LitigationLead,
        mode: CaseMode::Archive,
        history: [
            (
                "2026-02-04T09:00:00.000Z",
                "Generated final arbitration brief.",
            ),
            (
                "2026-02-04T12:20:00.000Z",
                "Collected final stakeholder sign-offs.",
            ),
            ("2026-02-04T16:05:00.000Z", "Archived evidence package."),
        ],
        workspace: [
            "Closed last week",
            "Finalize arbitration summary and archive case documentation.",
            "Send closing memo to executive stakeholders.",
            "UK",
            "Arbitration summary pack",
        ],
    },
];

/// The four demo matters, in display order.
pub fn initial_cases() -> Vec<CaseRecord> {
    SEED_CASES.iter().map(SeedCase::to_record).collect()
}

impl SeedCase {
    fn to_record(&self) -> CaseRecord {
        let interaction_history = self
            .history
            .iter()
            .enumerate()
            .map(|(i, (created_at, message))| CaseInteraction {
                id: format!("{}-{}", self.id, i + 1),
                created_at: created_at.to_string(),
                // Seeded entries are authored by the case's role.
                actor: self.role.as_str().to_string(),
                message: message.to_string(),
            })
            .collect();

        let [meta, objective, next_action, jurisdiction, output] = self.workspace;

        CaseRecord {
            id: self.id.to_string(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            status: self.status,
            created_at: self.created_at.to_string(),
            interaction_history,
            selected_role: self.role,
            selected_mode: self.mode,
            workspace: CaseWorkspace {
                meta: meta.to_string(),
                objective: objective.to_string(),
                next_action: next_action.to_string(),
                jurisdiction: jurisdiction.to_string(),
                output: output.to_string(),
            },
        }
    }
}
