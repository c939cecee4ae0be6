// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Typed per-command arguments.

use super::ExpandedWord;

/// Validated arguments of one command.
///
/// Operand lists that may be empty fall back to upstream records when the
/// command is not first in its pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// `ls`: entries of each path, or of the current directory.
    List {
        paths: Vec<ExpandedWord>,
        /// `-l`: JSON records with kind and size.
        long: bool,
        /// `-a`: include dot entries.
        all: bool,
    },
    /// `cat`: lines of each file, or of the upstream records.
    Concat {
        paths: Vec<ExpandedWord>,
        /// `-n`: prefix lines with their number.
        number: bool,
    },
    /// `cp`: an empty `sources` means upstream paths.
    Copy {
        sources: Vec<ExpandedWord>,
        dest: ExpandedWord,
        recursive: bool,
    },
    /// `mv`: an empty `sources` means upstream paths.
    Move {
        sources: Vec<ExpandedWord>,
        dest: ExpandedWord,
    },
    /// `rm`: an empty `paths` means upstream paths.
    Remove {
        paths: Vec<ExpandedWord>,
        recursive: bool,
        force: bool,
    },
    Touch {
        paths: Vec<ExpandedWord>,
    },
    /// `head`: first `count` records. Parsed when the pipeline runs.
    Head {
        count: ExpandedWord,
    },
    /// `tail`: last `count` records.
    Tail {
        count: ExpandedWord,
    },
    MakeDir {
        paths: Vec<ExpandedWord>,
        parents: bool,
    },
    PrintWorkingDir,
}

impl Step {
    /// Steps that change the filesystem and therefore end a pipeline.
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Step::Copy { .. }
                | Step::Move { .. }
                | Step::Remove { .. }
                | Step::Touch { .. }
                | Step::MakeDir { .. }
        )
    }

    /// Canonical command name.
    pub fn command(&self) -> &'static str {
        match self {
            Step::List { .. } => "ls",
            Step::Concat { .. } => "cat",
            Step::Copy { .. } => "cp",
            Step::Move { .. } => "mv",
            Step::Remove { .. } => "rm",
            Step::Touch { .. } => "touch",
            Step::Head { .. } => "head",
            Step::Tail { .. } => "tail",
            Step::MakeDir { .. } => "mkdir",
            Step::PrintWorkingDir => "pwd",
        }
    }
}
