//! # Get Command Handlers
//!
//! This module handles get commands, querying records of any CMCI resource
//! table and printing them in the selected output format.

use crate::cli_utils;
use crate::commands::shared::{
    CommandContext, dispatch_command, execute_or_exit, positional, validate_args_count_or_exit,
};
use crate::resource::{ResourceQueryParms, get_resource};

const GET_USAGE: &str =
    "Usage: cicsctl get resource <resource-name> [--criteria <expr>] [--parameter <expr>]";

/// Handles all get commands.
///
/// # Arguments
/// * `args` - Command arguments (first element is the resource type)
/// * `ctx` - Connection and option context
pub async fn handle_get_command(args: &[String], ctx: &CommandContext) {
    dispatch_command!("get", GET_USAGE, args, ctx, {
        "resource" => get_resource_command,
    });
}

async fn get_resource_command(args: &[String], ctx: &CommandContext) {
    validate_args_count_or_exit(args, 1, 2, "get resource", GET_USAGE);
    let resource_name = positional(args, 1, "resource-name", GET_USAGE).to_string();

    let parms = ResourceQueryParms {
        resource_name: Some(resource_name.clone()),
        region_name: ctx.region_name.clone(),
        cics_plex: ctx.cics_plex.clone(),
        criteria: ctx.options.criteria.clone(),
        parameter: ctx.options.parameter.clone(),
    };
    let response = execute_or_exit(
        || get_resource(&ctx.client, &parms),
        "Failed to get resources",
    )
    .await;

    let records = response.records_of(&resource_name);
    cli_utils::print_success(&format!(
        "{} '{}' resource(s) were retrieved successfully.",
        records.len(),
        resource_name
    ));
    if !records.is_empty() {
        cli_utils::print_formatted_or_exit(&records, ctx.output, "resource records");
    }
}
