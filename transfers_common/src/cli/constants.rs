/// CLI Commands

pub const HELP: &str = "help";
pub const LAST: &str = "last";
pub const ALL: &str = "all";
pub const PAPER: &str = "paper";
pub const QUIT: &str = "quit";

/// Various CLI constants

pub const PROMPT: &str = "> ";
