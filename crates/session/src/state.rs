//! Per-session mutable state.

use stockdeck_chat::ChatTurn;

use crate::page::Page;

/// State owned by one user session: the current page and the chat
/// transcript. Volatile; initialized on first interaction and dropped on
/// session reset.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    page: Page,
    transcript: Vec<ChatTurn>,
}

impl SessionState {
    /// A fresh session starts on the dashboard with an empty transcript.
    pub fn new() -> Self {
        Self {
            page: Page::Dashboard,
            transcript: Vec::new(),
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn set_page(&mut self, page: Page) {
        self.page = page;
    }

    /// Append a turn. The transcript is append-only: no API exists to
    /// mutate or delete historical turns.
    pub fn push_turn(&mut self, turn: ChatTurn) {
        self.transcript.push(turn);
    }

    pub fn transcript(&self) -> &[ChatTurn] {
        &self.transcript
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
