//! Callback registry for response-side hooks
//!
//! Callers register reactions that fire while a response moves through the
//! pipeline: either keyed by HTTP status code (fired before status
//! validation, so hooks see rejected statuses like 403 too) or keyed by a
//! predicate over the decoded payload (fired after decoding). Reactions are
//! side effects only; they never transform the result.

use serde_json::Value;
use std::fmt;

use crate::error::ClientError;

/// A registered side effect. Captures whatever arguments it needs; a returned
/// error aborts the remaining pipeline.
pub type Reaction = Box<dyn Fn() -> Result<(), String> + Send + Sync>;

/// Predicate over the decoded payload. Returning `false` vetoes all further
/// callback dispatch for the response.
pub type PayloadPredicate = Box<dyn Fn(&Value) -> bool + Send + Sync>;

/// Matching rule deciding whether a callback entry fires
pub enum Trigger {
    /// Fires when the response status is a member of the set
    Status(Vec<u16>),
    /// Fires when the predicate approves the decoded payload; when a status
    /// set is also given, the entry is skipped (without veto) unless the
    /// response status is in it
    Payload {
        statuses: Option<Vec<u16>>,
        predicate: PayloadPredicate,
    },
}

impl fmt::Debug for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trigger::Status(codes) => f.debug_tuple("Status").field(codes).finish(),
            Trigger::Payload { statuses, .. } => f
                .debug_struct("Payload")
                .field("statuses", statuses)
                .field("predicate", &"function")
                .finish(),
        }
    }
}

/// A reaction paired with its trigger
pub struct CallbackEntry {
    trigger: Trigger,
    reaction: Reaction,
}

impl CallbackEntry {
    pub fn new(trigger: Trigger, reaction: Reaction) -> Self {
        Self { trigger, reaction }
    }
}

impl fmt::Debug for CallbackEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackEntry")
            .field("trigger", &self.trigger)
            .field("reaction", &"function")
            .finish()
    }
}

/// Ordered collection of callback entries, dispatched in registration order
#[derive(Debug, Default)]
pub struct CallbackRegistry {
    entries: Vec<CallbackEntry>,
}

impl CallbackRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a reaction for a single status code
    pub fn on_status<F>(&mut self, status: u16, reaction: F)
    where
        F: Fn() -> Result<(), String> + Send + Sync + 'static,
    {
        self.on_statuses(vec![status], reaction);
    }

    /// Register a reaction for a set of status codes
    pub fn on_statuses<F>(&mut self, statuses: Vec<u16>, reaction: F)
    where
        F: Fn() -> Result<(), String> + Send + Sync + 'static,
    {
        self.entries.push(CallbackEntry::new(
            Trigger::Status(statuses),
            Box::new(reaction),
        ));
    }

    /// Register a payload-guarded reaction
    pub fn on_payload<P, F>(&mut self, predicate: P, reaction: F)
    where
        P: Fn(&Value) -> bool + Send + Sync + 'static,
        F: Fn() -> Result<(), String> + Send + Sync + 'static,
    {
        self.entries.push(CallbackEntry::new(
            Trigger::Payload {
                statuses: None,
                predicate: Box::new(predicate),
            },
            Box::new(reaction),
        ));
    }

    /// Register a payload-guarded reaction that only applies to some statuses
    pub fn on_payload_for_statuses<P, F>(&mut self, statuses: Vec<u16>, predicate: P, reaction: F)
    where
        P: Fn(&Value) -> bool + Send + Sync + 'static,
        F: Fn() -> Result<(), String> + Send + Sync + 'static,
    {
        self.entries.push(CallbackEntry::new(
            Trigger::Payload {
                statuses: Some(statuses),
                predicate: Box::new(predicate),
            },
            Box::new(reaction),
        ));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fire every status-keyed entry whose set contains `status`, in
    /// registration order. Runs before status validation and needs no
    /// decoded payload.
    pub(crate) fn dispatch_status(&self, status: u16) -> Result<(), ClientError> {
        for entry in &self.entries {
            if let Trigger::Status(codes) = &entry.trigger
                && codes.contains(&status)
            {
                (entry.reaction)().map_err(ClientError::Callback)?;
            }
        }
        Ok(())
    }

    /// Walk the payload-guarded entries in registration order. A predicate
    /// returning `false` stops all further dispatch for this response; a
    /// status-set mismatch merely skips the entry.
    pub(crate) fn dispatch_payload(&self, status: u16, payload: &Value) -> Result<(), ClientError> {
        for entry in &self.entries {
            let Trigger::Payload { statuses, predicate } = &entry.trigger else {
                continue;
            };

            if let Some(codes) = statuses
                && !codes.contains(&status)
            {
                continue;
            }

            if !predicate(payload) {
                break;
            }

            (entry.reaction)().map_err(ClientError::Callback)?;
        }
        Ok(())
    }
}
