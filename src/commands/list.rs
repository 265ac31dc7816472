//! # CSD List Membership Command Handlers
//!
//! This module handles add-to-list and remove-from-list commands for CSD
//! groups.

use crate::cli_utils;
use crate::commands::shared::{
    CommandContext, dispatch_command, execute_or_exit, positional, validate_args_count_or_exit,
};
use crate::csdgroup::{CsdGroupParms, add_csd_group_to_list, remove_csd_group_from_list};

const ADD_USAGE: &str = "Usage: cicsctl add-to-list csdgroup <name> <csdlist>";
const REMOVE_USAGE: &str = "Usage: cicsctl remove-from-list csdgroup <name> <csdlist>";

/// Handles all add-to-list commands.
///
/// # Arguments
/// * `args` - Command arguments (first element is the resource type)
/// * `ctx` - Connection and option context
pub async fn handle_add_to_list_command(args: &[String], ctx: &CommandContext) {
    dispatch_command!("add-to-list", ADD_USAGE, args, ctx, {
        "csdgroup" => add_csd_group_command,
    });
}

/// Handles all remove-from-list commands.
///
/// # Arguments
/// * `args` - Command arguments (first element is the resource type)
/// * `ctx` - Connection and option context
pub async fn handle_remove_from_list_command(args: &[String], ctx: &CommandContext) {
    dispatch_command!("remove-from-list", REMOVE_USAGE, args, ctx, {
        "csdgroup" => remove_csd_group_command,
    });
}

fn membership_parms(args: &[String], ctx: &CommandContext, usage: &str) -> CsdGroupParms {
    let name = positional(args, 1, "name", usage).to_string();
    let csd_list = positional(args, 2, "csdlist", usage).to_string();
    CsdGroupParms {
        name: Some(name),
        csd_list: Some(csd_list),
        region_name: ctx.region_name.clone(),
        cics_plex: ctx.cics_plex.clone(),
    }
}

async fn add_csd_group_command(args: &[String], ctx: &CommandContext) {
    validate_args_count_or_exit(args, 1, 3, "add-to-list csdgroup", ADD_USAGE);
    let parms = membership_parms(args, ctx, ADD_USAGE);
    execute_or_exit(
        || add_csd_group_to_list(&ctx.client, &parms),
        "Failed to add CSD group to list",
    )
    .await;

    cli_utils::print_success(&format!(
        "The CSD group '{}' was added to list '{}' successfully.",
        args[1], args[2]
    ));
}

async fn remove_csd_group_command(args: &[String], ctx: &CommandContext) {
    validate_args_count_or_exit(args, 1, 3, "remove-from-list csdgroup", REMOVE_USAGE);
    let parms = membership_parms(args, ctx, REMOVE_USAGE);
    execute_or_exit(
        || remove_csd_group_from_list(&ctx.client, &parms),
        "Failed to remove CSD group from list",
    )
    .await;

    cli_utils::print_success(&format!(
        "The CSD group '{}' was removed from list '{}' successfully.",
        args[1], args[2]
    ));
}
