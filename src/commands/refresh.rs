//! # Refresh Command Handlers
//!
//! This module handles refresh commands, loading a new copy of an installed
//! program.

use crate::cli_utils;
use crate::commands::shared::{
    CommandContext, dispatch_command, execute_or_exit, positional, validate_args_count_or_exit,
};
use crate::program::{ProgramParms, refresh_program};

const REFRESH_USAGE: &str = "Usage: cicsctl refresh program <name>";

/// Handles all refresh commands.
///
/// # Arguments
/// * `args` - Command arguments (first element is the resource type)
/// * `ctx` - Connection and option context
pub async fn handle_refresh_command(args: &[String], ctx: &CommandContext) {
    dispatch_command!("refresh", REFRESH_USAGE, args, ctx, {
        "program" => refresh_program_command,
    });
}

async fn refresh_program_command(args: &[String], ctx: &CommandContext) {
    validate_args_count_or_exit(args, 1, 2, "refresh program", REFRESH_USAGE);
    let name = positional(args, 1, "name", REFRESH_USAGE).to_string();

    let parms = ProgramParms {
        name: Some(name.clone()),
        region_name: ctx.region_name.clone(),
        cics_plex: ctx.cics_plex.clone(),
        ..ProgramParms::default()
    };
    execute_or_exit(
        || refresh_program(&ctx.client, &parms),
        "Failed to refresh program",
    )
    .await;

    cli_utils::print_success(&format!(
        "The program '{}' was refreshed successfully.",
        name
    ));
}
