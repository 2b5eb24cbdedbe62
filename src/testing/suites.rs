//! Built-in target registry
//!
//! Scenarios for the example CLIs, in the order they are run.

use super::config::Suite;

/// Information about a registered target
#[derive(Debug, Clone)]
pub struct TargetInfo {
    /// Executable name in the examples directory
    pub id: &'static str,
    /// Brief description
    pub description: &'static str,
    build: fn() -> Suite,
}

impl TargetInfo {
    pub fn suite(&self) -> Suite {
        (self.build)()
    }
}

static TARGETS: &[TargetInfo] = &[
    TargetInfo {
        id: "all_combinations",
        description: "Every option kind with help text",
        build: all_combinations,
    },
    TargetInfo {
        id: "basic",
        description: "Adds two integer options",
        build: basic,
    },
    TargetInfo {
        id: "flags",
        description: "Boolean flags",
        build: flags,
    },
    TargetInfo {
        id: "positional",
        description: "One required and one optional positional integer",
        build: positional,
    },
    TargetInfo {
        id: "vector_positional",
        description: "Variadic positional strings with sort and line modes",
        build: vector_positional,
    },
];

/// All registered targets in registration order
pub fn registered() -> &'static [TargetInfo] {
    TARGETS
}

/// Find a registered target by id
pub fn find(id: &str) -> Option<&'static TargetInfo> {
    TARGETS.iter().find(|t| t.id == id)
}

fn all_combinations() -> Suite {
    Suite::new("all_combinations").help(&["-h"])
}

fn basic() -> Suite {
    Suite::new("basic")
        .exact(&[], "0 + 0 = 0")
        .exact(&["-x", "3"], "3 + 0 = 3")
        .exact(&["-y", "4"], "0 + 4 = 4")
        .exact(&["-x", "3", "-y", "4"], "3 + 4 = 7")
        .exact(&["-x", "-3", "-y", "3"], "-3 + 3 = 0")
        .exact(&["--x-coord", "3", "--y-coord", "4"], "3 + 4 = 7")
        .handled_failure(&["-x", "test"])
        .handled_failure(&["-x"])
        .handled_failure(&["--undefined", "0"])
        .help(&["-h"])
        .help(&["--help"])
        .help(&["-x", "0", "-h"])
        .help(&["-h", "-x", "0"])
}

fn flags() -> Suite {
    Suite::new("flags")
        .help(&["-h"])
        .exact(&[], "0 0")
        .exact(&["-a", "-b"], "1 1")
        .handled_failure(&["-a", "1"])
}

fn positional() -> Suite {
    Suite::new("positional")
        .help(&["-h"])
        .handled_failure(&[])
        .handled_failure(&["test"])
        .exact(&["2"], "2 0")
        .exact(&["2", "3"], "2 3")
        .handled_failure(&["2", "3", "4"])
        .exact(&["-1", "-3"], "-1 -3")
}

fn vector_positional() -> Suite {
    Suite::new("vector_positional")
        .help(&["-h"])
        .exact(&[], "\n")
        .exact(&["b", "a"], "b a\n")
        .exact(&["b", "a", "-o"], "b\na\n")
        .exact(&["b", "a", "-s"], "a b\n")
        .exact(&["b", "a", "-os"], "a\nb\n")
}
