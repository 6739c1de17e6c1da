//! CLI domain: parse, route and output only.
//! No checksum logic here; the route table dispatches to the tree module.

mod output;
mod parse;
mod route;

pub use output::map_error;
pub use parse::{Cli, Commands};
pub use route::RunContext;
