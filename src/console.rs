//! Output sinks for lesson announcements.
//!
//! Lessons never call `println!` directly; they talk to a `Console`.
//! `Terminal` is the real implementation, `Transcript` records lines so
//! tests can assert on the exact sequence a lesson produced.

use colored::Colorize;

pub trait Console {
    fn say(&mut self, line: &str);

    /// Called once before each lesson starts.
    fn begin(&mut self, _title: &str) {}
}

/// Writes each line to stdout, optionally colored.
#[derive(Debug, Clone, Copy, Default)]
pub struct Terminal {
    color: bool,
    started: bool,
}

impl Terminal {
    pub fn new(color: bool) -> Self {
        Terminal {
            color,
            started: false,
        }
    }
}

impl Console for Terminal {
    fn say(&mut self, line: &str) {
        if self.color {
            println!("{}", line.green());
        } else {
            println!("{}", line);
        }
    }

    /// Banner between lessons, separated by a blank line.
    fn begin(&mut self, title: &str) {
        if self.started {
            println!();
        }
        self.started = true;
        if self.color {
            println!("{}", format!("=== {} ===", title).bold().cyan());
        } else {
            println!("=== {} ===", title);
        }
    }
}

/// In-memory console that keeps every line in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    pub fn new() -> Self {
        Transcript { lines: Vec::new() }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Console for Transcript {
    fn say(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transcript_keeps_lines_in_order() {
        let mut transcript = Transcript::new();
        assert!(transcript.is_empty());

        transcript.say("first");
        transcript.say("second");

        assert_eq!(transcript.lines(), ["first", "second"]);
        assert_eq!(transcript.into_lines(), vec!["first", "second"]);
    }

    #[test]
    fn transcript_works_behind_trait_object() {
        let mut transcript = Transcript::new();
        {
            let console: &mut dyn Console = &mut transcript;
            console.begin("ignored");
            console.say("through dyn");
        }
        assert_eq!(transcript.lines(), ["through dyn"]);
    }
}
