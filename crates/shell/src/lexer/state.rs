// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Quote and substitution context stack.

/// Scanning context the lexer is currently in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexState {
    Normal,
    SingleQuoted,
    DoubleQuoted,
    CommandSubstitution,
}

/// Stack of nested contexts. The bottom is always [`LexState::Normal`].
#[derive(Debug, Clone, Default)]
pub(crate) struct StateStack {
    stack: Vec<LexState>,
}

impl StateStack {
    pub(crate) fn top(&self) -> LexState {
        self.stack.last().copied().unwrap_or(LexState::Normal)
    }

    pub(crate) fn push(&mut self, state: LexState) {
        self.stack.push(state);
    }

    pub(crate) fn pop(&mut self) -> LexState {
        self.stack.pop().unwrap_or(LexState::Normal)
    }

    /// Nesting level above the implicit `Normal` base.
    pub(crate) fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Drop contexts above `depth`.
    pub(crate) fn truncate(&mut self, depth: usize) {
        self.stack.truncate(depth);
    }

    /// Whether any quote context is still open.
    pub(crate) fn in_quote(&self) -> bool {
        self.stack
            .iter()
            .any(|s| matches!(s, LexState::SingleQuoted | LexState::DoubleQuoted))
    }

    pub(crate) fn reset(&mut self) {
        self.stack.clear();
    }
}
