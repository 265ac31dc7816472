//! # Delete Command Handlers
//!
//! This module handles delete commands, removing resource definitions from
//! their CSD group.

use crate::cli_utils;
use crate::commands::shared::{
    CommandContext, dispatch_command, execute_or_exit, positional, validate_args_count_or_exit,
};
use crate::program::{ProgramParms, delete_program};
use crate::transaction::{TransactionParms, delete_transaction};
use crate::urimap::{UrimapParms, delete_urimap};
use crate::webservice::{WebServiceParms, delete_web_service};

const DELETE_USAGE: &str =
    "Usage: cicsctl delete <program|transaction|urimap|webservice> <name> <csdgroup>";

/// Handles all delete commands.
///
/// # Arguments
/// * `args` - Command arguments (first element is the resource type)
/// * `ctx` - Connection and option context
pub async fn handle_delete_command(args: &[String], ctx: &CommandContext) {
    dispatch_command!("delete", DELETE_USAGE, args, ctx, {
        "program" => delete_program_command,
        "transaction" => delete_transaction_command,
        "urimap" => delete_urimap_command,
        "webservice" => delete_web_service_command,
    });
}

async fn delete_program_command(args: &[String], ctx: &CommandContext) {
    const USAGE: &str = "Usage: cicsctl delete program <name> <csdgroup>";
    validate_args_count_or_exit(args, 1, 3, "delete program", USAGE);
    let name = positional(args, 1, "name", USAGE).to_string();
    let csd_group = positional(args, 2, "csdgroup", USAGE).to_string();

    let parms = ProgramParms {
        name: Some(name.clone()),
        csd_group: Some(csd_group),
        region_name: ctx.region_name.clone(),
        cics_plex: ctx.cics_plex.clone(),
        description: None,
    };
    execute_or_exit(
        || delete_program(&ctx.client, &parms),
        "Failed to delete program",
    )
    .await;

    cli_utils::print_success(&format!("The program '{}' was deleted successfully.", name));
}

async fn delete_transaction_command(args: &[String], ctx: &CommandContext) {
    const USAGE: &str = "Usage: cicsctl delete transaction <name> <csdgroup>";
    validate_args_count_or_exit(args, 1, 3, "delete transaction", USAGE);
    let name = positional(args, 1, "name", USAGE).to_string();
    let csd_group = positional(args, 2, "csdgroup", USAGE).to_string();

    let parms = TransactionParms {
        name: Some(name.clone()),
        csd_group: Some(csd_group),
        region_name: ctx.region_name.clone(),
        cics_plex: ctx.cics_plex.clone(),
        ..TransactionParms::default()
    };
    execute_or_exit(
        || delete_transaction(&ctx.client, &parms),
        "Failed to delete transaction",
    )
    .await;

    cli_utils::print_success(&format!(
        "The transaction '{}' was deleted successfully.",
        name
    ));
}

async fn delete_urimap_command(args: &[String], ctx: &CommandContext) {
    const USAGE: &str = "Usage: cicsctl delete urimap <name> <csdgroup>";
    validate_args_count_or_exit(args, 1, 3, "delete urimap", USAGE);
    let name = positional(args, 1, "name", USAGE).to_string();
    let csd_group = positional(args, 2, "csdgroup", USAGE).to_string();

    let parms = UrimapParms {
        name: Some(name.clone()),
        csd_group: Some(csd_group),
        region_name: ctx.region_name.clone(),
        cics_plex: ctx.cics_plex.clone(),
        ..UrimapParms::default()
    };
    execute_or_exit(
        || delete_urimap(&ctx.client, &parms),
        "Failed to delete URIMap",
    )
    .await;

    cli_utils::print_success(&format!("The URIMap '{}' was deleted successfully.", name));
}

async fn delete_web_service_command(args: &[String], ctx: &CommandContext) {
    const USAGE: &str = "Usage: cicsctl delete webservice <name> <csdgroup>";
    validate_args_count_or_exit(args, 1, 3, "delete webservice", USAGE);
    let name = positional(args, 1, "name", USAGE).to_string();
    let csd_group = positional(args, 2, "csdgroup", USAGE).to_string();

    let parms = WebServiceParms {
        name: Some(name.clone()),
        csd_group: Some(csd_group),
        region_name: ctx.region_name.clone(),
        cics_plex: ctx.cics_plex.clone(),
        ..WebServiceParms::default()
    };
    execute_or_exit(
        || delete_web_service(&ctx.client, &parms),
        "Failed to delete web service",
    )
    .await;

    cli_utils::print_success(&format!(
        "The web service '{}' was deleted successfully.",
        name
    ));
}
