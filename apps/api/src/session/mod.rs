#![allow(dead_code)]

//! Scan session state machine — the page-level state of the scanner as an
//! explicit object with a single writer, rather than free-floating mutable
//! page state. UI chrome stays out of scope; this module owns the
//! transitions and the one-slot-at-a-time input invariant.

use crate::analysis::{validate_scan_inputs, AnalysisResult};
use crate::errors::AppError;
use crate::normalize::SourceDocument;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Home,
    Result,
    About,
    Privacy,
}

/// Pages reachable by direct navigation. `Result` is deliberately absent:
/// it is only entered through a successful scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Home,
    About,
    Privacy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    File,
    Text,
}

/// Proof that a file read was started against a particular slot state.
/// Completing a read with an outdated ticket is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileReadTicket(u64);

/// One input slot (resume or JD): a mode and at most one document.
///
/// Switching mode while the other variant is held discards the held value.
/// File reads are asynchronous, so each state change bumps an epoch and a
/// read completes only if its ticket still matches — a read finishing after
/// the user moved on can never overwrite newer state.
#[derive(Debug, Default)]
pub struct InputSlot {
    mode: Option<InputMode>,
    value: Option<SourceDocument>,
    epoch: u64,
}

impl InputSlot {
    pub fn mode(&self) -> Option<InputMode> {
        self.mode
    }

    pub fn value(&self) -> Option<&SourceDocument> {
        self.value.as_ref()
    }

    /// Switches the input mode. A held value of the other variant is
    /// discarded; any in-flight file read is invalidated.
    pub fn set_mode(&mut self, mode: InputMode) {
        if self.mode == Some(mode) {
            return;
        }
        self.mode = Some(mode);
        let mismatched = match (&self.value, mode) {
            (Some(SourceDocument::Text { .. }), InputMode::File) => true,
            (Some(SourceDocument::File { .. }), InputMode::Text) => true,
            _ => false,
        };
        if mismatched {
            self.value = None;
        }
        self.epoch += 1;
    }

    pub fn set_text(&mut self, content: impl Into<String>) {
        self.mode = Some(InputMode::Text);
        self.value = Some(SourceDocument::text(content));
        self.epoch += 1;
    }

    /// Marks the start of an asynchronous file read. The returned ticket is
    /// valid until the slot changes again.
    pub fn begin_file_read(&mut self) -> FileReadTicket {
        self.epoch += 1;
        FileReadTicket(self.epoch)
    }

    /// Installs the document produced by a file read, unless the slot moved
    /// on since the read began. Returns whether the document was applied.
    pub fn complete_file_read(&mut self, ticket: FileReadTicket, document: SourceDocument) -> bool {
        if ticket.0 != self.epoch {
            return false;
        }
        self.mode = Some(InputMode::File);
        self.value = Some(document);
        true
    }

    pub fn clear(&mut self) {
        self.value = None;
        self.epoch += 1;
    }
}

/// The whole scanner session. Nothing here survives construction of a new
/// session, matching a full page reload.
#[derive(Debug, Default)]
pub struct ScanSession {
    resume: InputSlot,
    jd: InputSlot,
    page: Page,
    result: Option<AnalysisResult>,
    error: Option<String>,
    scanning: bool,
}

impl ScanSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn resume(&mut self) -> &mut InputSlot {
        &mut self.resume
    }

    pub fn jd(&mut self) -> &mut InputSlot {
        &mut self.jd
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_scanning(&self) -> bool {
        self.scanning
    }

    pub fn navigate(&mut self, target: NavTarget) {
        self.page = match target {
            NavTarget::Home => Page::Home,
            NavTarget::About => Page::About,
            NavTarget::Privacy => Page::Privacy,
        };
    }

    /// `result --back--> home`.
    pub fn back(&mut self) {
        self.page = Page::Home;
    }

    /// Starts a scan: refuses when one is already in flight or when the
    /// inputs fail the analyzer preconditions. On success the previous
    /// result and error are cleared while the request is outstanding.
    pub fn begin_scan(&mut self) -> Result<(), AppError> {
        if self.scanning {
            return Err(AppError::Validation(
                "A scan is already in progress.".to_string(),
            ));
        }
        validate_scan_inputs(self.resume.value(), self.jd.value())?;

        self.scanning = true;
        self.error = None;
        self.result = None;
        Ok(())
    }

    /// `home --scan success--> result`. The new result fully replaces any
    /// previous one.
    pub fn complete_scan(&mut self, result: AnalysisResult) {
        self.scanning = false;
        self.result = Some(result);
        self.page = Page::Result;
    }

    /// A failed scan clears the in-flight indicator and records the message;
    /// the session stays on its current page.
    pub fn fail_scan(&mut self, message: impl Into<String>) {
        self.scanning = false;
        self.error = Some(message.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready_session() -> ScanSession {
        let mut session = ScanSession::new();
        session.resume().set_text("Rust engineer, 6 years.");
        session.jd().set_text("Senior Rust role.");
        session
    }

    fn result_fixture(score: i64) -> AnalysisResult {
        AnalysisResult {
            score,
            missing_keywords: vec!["Kubernetes".to_string()],
            feedback: "Close.".to_string(),
            tips: vec!["Add a CI/CD project".to_string()],
        }
    }

    #[test]
    fn test_new_session_starts_at_home_with_nothing() {
        let mut session = ScanSession::new();
        assert_eq!(session.page(), Page::Home);
        assert!(session.result().is_none());
        assert!(session.error().is_none());
        assert!(!session.is_scanning());
        assert!(session.resume().value().is_none());
    }

    #[test]
    fn test_mode_switch_discards_held_value() {
        let mut slot = InputSlot::default();
        slot.set_text("pasted resume");
        assert!(slot.value().is_some());

        slot.set_mode(InputMode::File);
        assert!(slot.value().is_none());
        assert_eq!(slot.mode(), Some(InputMode::File));
    }

    #[test]
    fn test_same_mode_switch_keeps_value() {
        let mut slot = InputSlot::default();
        slot.set_text("pasted resume");
        slot.set_mode(InputMode::Text);
        assert!(slot.value().is_some());
    }

    #[test]
    fn test_stale_file_read_is_dropped() {
        let mut slot = InputSlot::default();
        let ticket = slot.begin_file_read();

        // User switches to text and types before the read finishes.
        slot.set_text("typed instead");

        let doc = SourceDocument::file("resume.pdf", Some("application/pdf"), b"%PDF").unwrap();
        assert!(!slot.complete_file_read(ticket, doc));
        match slot.value() {
            Some(SourceDocument::Text { content }) => assert_eq!(content, "typed instead"),
            other => panic!("stale read overwrote slot: {other:?}"),
        }
    }

    #[test]
    fn test_newer_file_read_supersedes_older_one() {
        let mut slot = InputSlot::default();
        let first = slot.begin_file_read();
        let second = slot.begin_file_read();

        let old = SourceDocument::file("old.txt", None, b"old").unwrap();
        let new = SourceDocument::file("new.txt", None, b"new").unwrap();

        assert!(slot.complete_file_read(second, new));
        assert!(!slot.complete_file_read(first, old));
        assert_eq!(slot.value().unwrap().file_name(), Some("new.txt"));
    }

    #[test]
    fn test_current_file_read_applies() {
        let mut slot = InputSlot::default();
        let ticket = slot.begin_file_read();
        let doc = SourceDocument::file("resume.pdf", Some("application/pdf"), b"%PDF").unwrap();
        assert!(slot.complete_file_read(ticket, doc));
        assert_eq!(slot.mode(), Some(InputMode::File));
        assert!(slot.value().is_some());
    }

    #[test]
    fn test_scan_requires_both_inputs() {
        let mut session = ScanSession::new();
        session.resume().set_text("only a resume");
        assert!(session.begin_scan().is_err());
        assert!(!session.is_scanning());
    }

    #[test]
    fn test_scan_rejects_while_one_is_in_flight() {
        let mut session = ready_session();
        session.begin_scan().unwrap();
        assert!(session.begin_scan().is_err());
    }

    #[test]
    fn test_successful_scan_moves_to_result() {
        let mut session = ready_session();
        session.begin_scan().unwrap();
        session.complete_scan(result_fixture(73));

        assert_eq!(session.page(), Page::Result);
        assert!(!session.is_scanning());
        assert_eq!(session.result().unwrap().score, 73);
    }

    #[test]
    fn test_failed_scan_records_message_and_stays_home() {
        let mut session = ready_session();
        session.begin_scan().unwrap();
        session.fail_scan("model overloaded");

        assert_eq!(session.page(), Page::Home);
        assert!(!session.is_scanning());
        assert_eq!(session.error(), Some("model overloaded"));
        assert!(session.result().is_none());
    }

    #[test]
    fn test_second_scan_fully_replaces_first_result() {
        let mut session = ready_session();
        session.begin_scan().unwrap();
        session.complete_scan(result_fixture(41));

        session.back();
        session.begin_scan().unwrap();
        assert!(session.result().is_none()); // cleared while in flight
        session.complete_scan(AnalysisResult {
            score: 88,
            missing_keywords: vec![],
            feedback: "Strong match.".to_string(),
            tips: vec![],
        });

        let result = session.result().unwrap();
        assert_eq!(result.score, 88);
        assert!(result.missing_keywords.is_empty());
    }

    #[test]
    fn test_navigation_covers_footer_pages_and_back() {
        let mut session = ready_session();
        session.navigate(NavTarget::About);
        assert_eq!(session.page(), Page::About);
        session.navigate(NavTarget::Privacy);
        assert_eq!(session.page(), Page::Privacy);
        session.navigate(NavTarget::Home);
        assert_eq!(session.page(), Page::Home);

        session.begin_scan().unwrap();
        session.complete_scan(result_fixture(60));
        session.back();
        assert_eq!(session.page(), Page::Home);
        // The result is kept until the next scan replaces it.
        assert!(session.result().is_some());
    }
}
