//! Command handler modules.
//!
//! Each subcommand lives in its own file and exposes
//! `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`. Output
//! streams (and stdin, for `play`) are passed in so tests can drive the
//! handlers with in-memory buffers.

pub mod cfg;
pub mod play;
pub mod sim;

pub use cfg::handle_cfg_command;
pub use play::handle_play_command;
pub use sim::handle_sim_command;
