//! Session lifecycle: transcript plus analysis ledger
//!
//! One `Session` per active user, explicitly constructed at session start
//! and never shared across sessions. All mutation goes through `&mut self`,
//! giving the single-writer discipline the ledger requires.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared_types::Interaction;
use tracing::info;
use uuid::Uuid;

use crate::ledger::AnalysisLedger;
use crate::RightsEngine;

/// Who authored a transcript message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Student,
    Assistant,
}

/// One transcript entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

/// Per-session state: chat transcript and accumulated findings
#[derive(Debug)]
pub struct Session {
    id: Uuid,
    started_at: DateTime<Utc>,
    transcript: Vec<Message>,
    ledger: AnalysisLedger,
}

impl Session {
    pub fn new() -> Self {
        let id = Uuid::new_v4();
        info!(session = %id, "session started");
        Self {
            id,
            started_at: Utc::now(),
            transcript: Vec::new(),
            ledger: AnalysisLedger::new(),
        }
    }

    /// Analyze one student input: run detection, accumulate findings in the
    /// ledger, compose the reply and record both sides in the transcript
    pub fn submit(&mut self, engine: &RightsEngine, text: &str) -> Interaction {
        let interaction = engine.interact(text);

        self.ledger.append(&interaction.findings);
        self.transcript.push(Message {
            role: Role::Student,
            content: text.to_string(),
        });
        self.transcript.push(Message {
            role: Role::Assistant,
            content: interaction.reply.clone(),
        });

        interaction
    }

    /// Completed exchanges so far
    pub fn conversation_count(&self) -> usize {
        self.transcript.len() / 2
    }

    /// Clear accumulated analysis results.
    ///
    /// The transcript is kept; only the ledger is affected.
    pub fn reset_analysis(&mut self) {
        self.ledger.reset();
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    pub fn ledger(&self) -> &AnalysisLedger {
        &self.ledger
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
