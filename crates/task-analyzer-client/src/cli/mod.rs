/*
[INPUT]:  Parsed subcommand arguments and loaded configuration
[OUTPUT]: Headless command implementations
[POS]:    CLI layer - non-TUI subcommands
[UPDATE]: When adding subcommands
*/

pub mod analyze;
pub mod init;
