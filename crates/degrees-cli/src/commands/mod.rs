// Module exports for CLI commands.
//
// main.rs parses arguments and dispatches here; each module owns one command.

pub mod connect;
