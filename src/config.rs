// ABOUTME: Configuration and constants for the Liz interpreter CLI

pub const VERSION: &str = "1.0.0";
pub const WELCOME_MESSAGE: &str = "liz 1.0.0";
pub const WELCOME_SUBTITLE: &str = "A Lisp dialect with Q-expressions; a line containing ;quit exits";
