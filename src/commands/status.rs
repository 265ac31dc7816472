//! # Enable and Disable Command Handlers
//!
//! This module handles enable/disable commands, flipping the enablestatus of
//! installed URIMaps.

use crate::cli_utils;
use crate::commands::shared::{
    CommandContext, dispatch_command, execute_or_exit, positional, validate_args_count_or_exit,
};
use crate::urimap::{UrimapParms, disable_urimap, enable_urimap};

const ENABLE_USAGE: &str = "Usage: cicsctl enable urimap <name>";
const DISABLE_USAGE: &str = "Usage: cicsctl disable urimap <name>";

/// Handles all enable commands.
///
/// # Arguments
/// * `args` - Command arguments (first element is the resource type)
/// * `ctx` - Connection and option context
pub async fn handle_enable_command(args: &[String], ctx: &CommandContext) {
    dispatch_command!("enable", ENABLE_USAGE, args, ctx, {
        "urimap" => enable_urimap_command,
    });
}

/// Handles all disable commands.
///
/// # Arguments
/// * `args` - Command arguments (first element is the resource type)
/// * `ctx` - Connection and option context
pub async fn handle_disable_command(args: &[String], ctx: &CommandContext) {
    dispatch_command!("disable", DISABLE_USAGE, args, ctx, {
        "urimap" => disable_urimap_command,
    });
}

fn status_parms(args: &[String], ctx: &CommandContext, usage: &str) -> (String, UrimapParms) {
    let name = positional(args, 1, "name", usage).to_string();
    let parms = UrimapParms {
        name: Some(name.clone()),
        region_name: ctx.region_name.clone(),
        cics_plex: ctx.cics_plex.clone(),
        ..UrimapParms::default()
    };
    (name, parms)
}

async fn enable_urimap_command(args: &[String], ctx: &CommandContext) {
    validate_args_count_or_exit(args, 1, 2, "enable urimap", ENABLE_USAGE);
    let (name, parms) = status_parms(args, ctx, ENABLE_USAGE);
    execute_or_exit(
        || enable_urimap(&ctx.client, &parms),
        "Failed to enable URIMap",
    )
    .await;

    cli_utils::print_success(&format!("The URIMap '{}' was enabled successfully.", name));
}

async fn disable_urimap_command(args: &[String], ctx: &CommandContext) {
    validate_args_count_or_exit(args, 1, 2, "disable urimap", DISABLE_USAGE);
    let (name, parms) = status_parms(args, ctx, DISABLE_USAGE);
    execute_or_exit(
        || disable_urimap(&ctx.client, &parms),
        "Failed to disable URIMap",
    )
    .await;

    cli_utils::print_success(&format!("The URIMap '{}' was disabled successfully.", name));
}
