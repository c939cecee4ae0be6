// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Simple command and redirection parsing.

use super::Parser;
use crate::ast::{RedirectKind, Redirection, SimpleCommand};
use crate::parse_error::ParseError;
use crate::token::TokenKind;

impl Parser<'_, '_> {
    /// command ::= word+ redirection*
    ///
    /// Redirections may appear anywhere after the name. The command ends at
    /// the first token that is neither a word nor a redirection operator.
    pub(super) fn parse_command(&mut self) -> Result<SimpleCommand, ParseError> {
        if !self.current.kind.is_word() {
            return Err(self.unexpected("command"));
        }
        let name = self.parse_word()?;
        let mut span = name.span;
        let mut args = Vec::new();
        let mut redirections = Vec::new();

        loop {
            if let Some(kind) = self.redirect_kind() {
                let redir = self.parse_redirection(kind)?;
                span = span.merge(redir.span);
                redirections.push(redir);
            } else if self.current.kind.is_word() {
                let word = self.parse_word()?;
                span = span.merge(word.span);
                args.push(word);
            } else {
                break;
            }
        }

        Ok(SimpleCommand {
            name,
            args,
            redirections,
            span,
        })
    }

    fn redirect_kind(&self) -> Option<RedirectKind> {
        match self.current.kind {
            TokenKind::Less => Some(RedirectKind::In),
            TokenKind::Greater => Some(RedirectKind::Out),
            _ => None,
        }
    }

    /// redirection ::= ('<' | '>') word
    fn parse_redirection(&mut self, kind: RedirectKind) -> Result<Redirection, ParseError> {
        let op = self.advance();
        if !self.current.kind.is_word() {
            return Err(self.unexpected("redirection target"));
        }
        let target = self.parse_word()?;
        Ok(Redirection {
            kind,
            span: op.span.merge(target.span),
            target,
        })
    }
}
