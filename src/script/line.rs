// src/script/line.rs

use std::fmt;

/// One pre-processed line of the command file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptLine {
    Blank,
    /// Starts with `#`. Text kept for dry-run output.
    Comment(String),
    Command(CommandLine),
}

impl ScriptLine {
    /// Classify an already trimmed and substituted line.
    pub fn parse(text: &str) -> Self {
        if text.is_empty() {
            ScriptLine::Blank
        } else if text.starts_with('#') {
            ScriptLine::Comment(text.to_string())
        } else {
            ScriptLine::Command(CommandLine::parse(text))
        }
    }

    pub fn command(&self) -> Option<&CommandLine> {
        match self {
            ScriptLine::Command(cmd) => Some(cmd),
            _ => None,
        }
    }

    pub fn is_skipped(&self) -> bool {
        self.command().is_none()
    }
}

/// A command line split on its first space into program and argument tail.
///
/// The tail is kept verbatim; no shell syntax is interpreted here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    text: String,
    program: String,
    args: Option<String>,
}

impl CommandLine {
    pub fn parse(text: &str) -> Self {
        let (program, args) = match text.split_once(' ') {
            Some((program, tail)) => (program.to_string(), Some(tail.to_string())),
            None => (text.to_string(), None),
        };
        Self {
            text: text.to_string(),
            program,
            args,
        }
    }

    /// Full command text, as printed in very verbose mode.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> Option<&str> {
        self.args.as_deref()
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
