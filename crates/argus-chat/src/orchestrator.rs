//! Chat orchestrator: sequences interpreter, search, and formatter per turn.
//!
//! Owns the ordered turn log and the idle/processing state machine. A
//! submission while a turn is in flight is rejected without touching the log;
//! a failed turn downgrades to an apology turn and never crashes the
//! conversation.

use std::sync::{Arc, Mutex, MutexGuard};

use tokio::sync::broadcast;
use tracing::{debug, error};
use uuid::Uuid;

use argus_core::config::ChatConfig;

use crate::error::ChatError;
use crate::formatter::ResponseFormatter;
use crate::interpreter::QueryInterpreter;
use crate::search::SupplierSearch;
use crate::types::{ChatStatus, Turn, TurnEvent, TurnRole};

/// Fixed assistant turn appended when processing a submission fails.
pub const APOLOGY_MESSAGE: &str =
    "I encountered an error while processing your request. Please try again.";

/// Capacity of the turn event broadcast channel.
const EVENT_CHANNEL_CAPACITY: usize = 256;

struct ConversationState {
    turns: Vec<Turn>,
    status: ChatStatus,
    last_error: Option<String>,
}

/// Restores the conversation status to `Idle` when dropped.
///
/// Held across the search await so a search implementation that panics
/// instead of returning an error cannot leave the status stuck at
/// `Processing`.
struct IdleGuard<'a> {
    state: &'a Mutex<ConversationState>,
}

impl Drop for IdleGuard<'_> {
    fn drop(&mut self) {
        if let Ok(mut state) = self.state.lock() {
            state.status = ChatStatus::Idle;
        }
    }
}

/// Central coordinator for one conversation.
pub struct ChatOrchestrator {
    interpreter: QueryInterpreter,
    formatter: ResponseFormatter,
    search: Arc<dyn SupplierSearch>,
    state: Mutex<ConversationState>,
    events: broadcast::Sender<TurnEvent>,
    config: ChatConfig,
}

impl ChatOrchestrator {
    /// Create an orchestrator whose turn log starts with the configured
    /// system persona turn.
    pub fn new(search: Arc<dyn SupplierSearch>, config: ChatConfig) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        let turns = vec![Turn::new(TurnRole::System, &config.system_prompt)];
        Self {
            interpreter: QueryInterpreter::new(),
            formatter: ResponseFormatter::new(),
            search,
            state: Mutex::new(ConversationState {
                turns,
                status: ChatStatus::Idle,
                last_error: None,
            }),
            events,
            config,
        }
    }

    /// Process one user submission.
    ///
    /// Appends the user turn optimistically, interprets and searches, then
    /// appends the formatted assistant turn and returns it. On failure the
    /// error is recorded, an apology turn is appended instead, and the error
    /// is returned. The conversation is back at `Idle` on every exit path,
    /// a panicking search included; only a poisoned state lock can leave it
    /// stuck.
    pub async fn submit(&self, message: &str) -> Result<Turn, ChatError> {
        let message = message.trim();
        if message.is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        if message.chars().count() > self.config.max_message_length {
            return Err(ChatError::MessageTooLong(self.config.max_message_length));
        }

        // Reject while in flight and append the user turn in one critical
        // section, so two racing submissions cannot both pass the guard.
        {
            let mut state = self.lock_state()?;
            if state.status == ChatStatus::Processing {
                debug!("Submission ignored, a turn is already in flight");
                return Err(ChatError::Busy);
            }
            state.status = ChatStatus::Processing;
            state.last_error = None;
            let user_turn = Turn::new(TurnRole::User, message);
            state.turns.push(user_turn.clone());
            let _ = self.events.send(TurnEvent::Appended { turn: user_turn });
        }

        // From here on Idle is restored on every exit, a panicking search
        // included.
        let _reset = IdleGuard { state: &self.state };

        let query = self.interpreter.interpret(message);
        debug!(kind = query.kind(), "Interpreted user utterance");
        let outcome = self.search.search(&query).await;

        let mut state = self.lock_state()?;
        state.status = ChatStatus::Idle;
        match outcome {
            Ok(results) => {
                let content = self.formatter.format(&query, &results);
                let turn = Turn::new(TurnRole::Assistant, &content);
                state.turns.push(turn.clone());
                let _ = self.events.send(TurnEvent::Appended { turn: turn.clone() });
                Ok(turn)
            }
            Err(e) => {
                error!("Chat turn failed: {}", e);
                state.last_error = Some(e.to_string());
                let turn = Turn::new(TurnRole::Assistant, APOLOGY_MESSAGE);
                state.turns.push(turn.clone());
                let _ = self.events.send(TurnEvent::Appended { turn });
                Err(e)
            }
        }
    }

    /// Grow an existing turn's content by appending `chunk` to it.
    ///
    /// This is the patch half of the append/patch turn log contract, used
    /// when assistant output arrives incrementally rather than as one piece.
    pub fn append_to_turn(&self, id: Uuid, chunk: &str) -> Result<Turn, ChatError> {
        let mut state = self.lock_state()?;
        let turn = state
            .turns
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(ChatError::TurnNotFound(id))?;
        turn.content.push_str(chunk);
        let revised = turn.clone();
        let _ = self.events.send(TurnEvent::Revised {
            id: revised.id,
            content: revised.content.clone(),
        });
        Ok(revised)
    }

    /// Snapshot of the ordered turn log, system turn included.
    pub fn turns(&self) -> Result<Vec<Turn>, ChatError> {
        let state = self.lock_state()?;
        Ok(state.turns.clone())
    }

    /// Current state of the turn machine.
    pub fn status(&self) -> Result<ChatStatus, ChatError> {
        let state = self.lock_state()?;
        Ok(state.status)
    }

    /// Error recorded by the most recent failed turn, cleared on the next
    /// submission.
    pub fn last_error(&self) -> Result<Option<String>, ChatError> {
        let state = self.lock_state()?;
        Ok(state.last_error.clone())
    }

    /// Subscribe to turn log change events.
    pub fn subscribe(&self) -> broadcast::Receiver<TurnEvent> {
        self.events.subscribe()
    }

    fn lock_state(&self) -> Result<MutexGuard<'_, ConversationState>, ChatError> {
        self.state
            .lock()
            .map_err(|e| ChatError::StoreError(format!("conversation lock poisoned: {}", e)))
    }
}

// =============================================================================
// Tests
// =============================================================================
