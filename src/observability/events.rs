//! Observable events for roster
//!
//! Events are explicit and typed; the logger only ever sees their names.

use std::fmt;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Configuration loaded and validated
    ConfigLoaded,
    /// Input records loaded into a store
    InputLoaded,

    // Queries
    /// A table view was built
    QueryComplete,

    // Store mutations
    /// Record created with a fresh identity
    RecordAdded,
    /// Record fields merged from a draft
    RecordUpdated,
    /// Record deleted
    RecordRemoved,

    // Requests
    /// A mutation request was rejected
    RequestRejected,
    /// CLI command failed and the process exits
    CommandFailed,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::InputLoaded => "INPUT_LOADED",
            Event::QueryComplete => "QUERY_COMPLETE",
            Event::RecordAdded => "RECORD_ADDED",
            Event::RecordUpdated => "RECORD_UPDATED",
            Event::RecordRemoved => "RECORD_REMOVED",
            Event::RequestRejected => "REQUEST_REJECTED",
            Event::CommandFailed => "COMMAND_FAILED",
        }
    }

    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::CommandFailed)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names_are_screaming_snake() {
        let events = [
            Event::ConfigLoaded,
            Event::InputLoaded,
            Event::QueryComplete,
            Event::RecordAdded,
            Event::RecordUpdated,
            Event::RecordRemoved,
            Event::RequestRejected,
            Event::CommandFailed,
        ];

        for event in events {
            let name = event.as_str();
            assert!(!name.is_empty());
            assert!(name.chars().all(|c| c.is_ascii_uppercase() || c == '_'));
        }
    }

    #[test]
    fn test_fatal_events() {
        assert!(Event::CommandFailed.is_fatal());
        assert!(!Event::RecordRemoved.is_fatal());
    }
}
