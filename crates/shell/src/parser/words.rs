// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Word parsing: token segments to parts, recursing into substitutions.

use super::{Parser, MAX_SUBSTITUTION_DEPTH};
use crate::ast::{Word, WordPart};
use crate::parse_error::ParseError;
use crate::span::Span;
use crate::token::{Segment, Token};

impl Parser<'_, '_> {
    /// Consume the current word token and convert it into a [`Word`].
    ///
    /// The caller has checked that the lookahead is a word.
    pub(super) fn parse_word(&mut self) -> Result<Word, ParseError> {
        let token = self.advance();
        self.check_complete(&token)?;

        let mut parts = Vec::with_capacity(token.segments.len());
        for segment in token.segments {
            parts.push(self.segment_to_part(segment)?);
        }
        Ok(Word {
            parts,
            span: token.span,
        })
    }

    /// Turn lexer incompleteness flags into errors.
    ///
    /// In recovery mode the errors are only reported and the token is used
    /// as scanned.
    fn check_complete(&mut self, token: &Token) -> Result<(), ParseError> {
        if token.flags.unterminated_quote {
            let error = self.report(ParseError::UnterminatedQuote { span: token.span });
            if !self.recover {
                return Err(error);
            }
        }
        if token.flags.unbalanced_paren {
            let error = self.report(ParseError::UnmatchedParen { span: token.span });
            if !self.recover {
                return Err(error);
            }
        }
        Ok(())
    }

    fn segment_to_part(&mut self, segment: Segment) -> Result<WordPart, ParseError> {
        match segment {
            Segment::Literal { value, quoted } => Ok(WordPart::Literal { value, quoted }),
            Segment::Glob(pattern) => Ok(WordPart::Glob { pattern }),
            Segment::Substitution { source, span } => self.parse_substitution(source, span),
        }
    }

    /// Parse a substitution body with a nested parser one level deeper.
    fn parse_substitution(&mut self, source: String, span: Span) -> Result<WordPart, ParseError> {
        let result = if self.depth >= MAX_SUBSTITUTION_DEPTH {
            Err(self.report(ParseError::SubstitutionDepthExceeded {
                limit: MAX_SUBSTITUTION_DEPTH,
                span,
            }))
        } else {
            self.parse_nested(&source, span.start)
        };

        match result {
            Ok(program) => Ok(WordPart::CommandSub {
                program: Box::new(program),
                source,
                span,
            }),
            // Already reported by whoever raised it.
            Err(_) if self.recover => Ok(WordPart::quoted(format!("({source})"))),
            Err(error) => Err(error),
        }
    }
}
