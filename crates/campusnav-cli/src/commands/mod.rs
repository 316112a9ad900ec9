// Module exports for CLI subcommands
//
// Each module handles a specific CLI subcommand. The main.rs dispatches to
// these handlers, keeping the entry point focused on parsing and coordination.

pub mod ask;
pub mod locations;
pub mod route;
