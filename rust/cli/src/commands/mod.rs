//! Command handler modules for the hilo CLI.
//!
//! This module contains individual handler functions for each CLI subcommand.
//! Each command is implemented in its own module file with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Module-private helpers: Helper functions specific to that command
//! - Dependency injection: Output streams (`&mut dyn Write`) passed as parameters
//! - Error propagation: All errors propagated via `CliError` enum
//!
//! The dispatcher in `lib.rs` maps a handler's result to a process exit code.

mod best;
mod cfg;
mod play;
mod replay;
mod rng;
mod sim;
mod stats;

pub use best::handle_best_command;
pub use cfg::handle_cfg_command;
pub use play::handle_play_command;
pub use replay::handle_replay_command;
pub use rng::handle_rng_command;
pub use sim::handle_sim_command;
pub use stats::handle_stats_command;
