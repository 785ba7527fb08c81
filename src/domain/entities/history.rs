//! Derived, non-persisted history of a car.
//!
//! A car's history merges its policies and claims into one list of dated
//! events. Policy events are appended first, then claim events, and the list
//! is stable-sorted by date, so events sharing a date keep that order:
//! policies before claims, a policy's start before its end, and each group in
//! the order the repository returned it.

use chrono::NaiveDate;
use serde::Serialize;

use super::{Claim, InsurancePolicy};

/// Source entity of a history event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HistoryEventKind {
    InsurancePolicy,
    Claim,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEvent {
    pub kind: HistoryEventKind,
    pub date: NaiveDate,
    pub description: String,
    /// Id of the policy or claim this event was derived from.
    pub source_id: i64,
}

impl HistoryEvent {
    fn policy_started(policy: &InsurancePolicy) -> Self {
        Self {
            kind: HistoryEventKind::InsurancePolicy,
            date: policy.start_date,
            description: format!("Insurance policy started with {}", policy.provider),
            source_id: policy.id,
        }
    }

    fn policy_ended(policy: &InsurancePolicy, end_date: NaiveDate) -> Self {
        Self {
            kind: HistoryEventKind::InsurancePolicy,
            date: end_date,
            description: format!("Insurance policy ended with {}", policy.provider),
            source_id: policy.id,
        }
    }

    fn claim(claim: &Claim) -> Self {
        Self {
            kind: HistoryEventKind::Claim,
            date: claim.claim_date,
            description: format!("{} - Amount: ${}", claim.description, claim.amount),
            source_id: claim.id,
        }
    }
}

/// Builds the chronological history for one car.
pub fn build_history(policies: &[InsurancePolicy], claims: &[Claim]) -> Vec<HistoryEvent> {
    let mut events = Vec::with_capacity(policies.len() * 2 + claims.len());

    for policy in policies {
        events.push(HistoryEvent::policy_started(policy));
        if let Some(end_date) = policy.end_date {
            events.push(HistoryEvent::policy_ended(policy, end_date));
        }
    }

    events.extend(claims.iter().map(HistoryEvent::claim));

    // sort_by_key is stable
    events.sort_by_key(|e| e.date);
    events
}
