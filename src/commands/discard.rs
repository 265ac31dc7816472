//! # Discard Command Handlers
//!
//! This module handles discard commands, removing installed resources from
//! the running region while leaving their CSD definitions in place.

use crate::cli_utils;
use crate::commands::shared::{
    CommandContext, dispatch_command, execute_or_exit, positional, validate_args_count_or_exit,
};
use crate::program::{ProgramParms, discard_program};
use crate::transaction::{TransactionParms, discard_transaction};
use crate::urimap::{UrimapParms, discard_urimap};

const DISCARD_USAGE: &str = "Usage: cicsctl discard <program|transaction|urimap> <name>";

/// Handles all discard commands.
///
/// # Arguments
/// * `args` - Command arguments (first element is the resource type)
/// * `ctx` - Connection and option context
pub async fn handle_discard_command(args: &[String], ctx: &CommandContext) {
    dispatch_command!("discard", DISCARD_USAGE, args, ctx, {
        "program" => discard_program_command,
        "transaction" => discard_transaction_command,
        "urimap" => discard_urimap_command,
    });
}

async fn discard_program_command(args: &[String], ctx: &CommandContext) {
    const USAGE: &str = "Usage: cicsctl discard program <name>";
    validate_args_count_or_exit(args, 1, 2, "discard program", USAGE);
    let name = positional(args, 1, "name", USAGE).to_string();

    let parms = ProgramParms {
        name: Some(name.clone()),
        region_name: ctx.region_name.clone(),
        cics_plex: ctx.cics_plex.clone(),
        ..ProgramParms::default()
    };
    execute_or_exit(
        || discard_program(&ctx.client, &parms),
        "Failed to discard program",
    )
    .await;

    cli_utils::print_success(&format!(
        "The program '{}' was discarded successfully.",
        name
    ));
}

async fn discard_transaction_command(args: &[String], ctx: &CommandContext) {
    const USAGE: &str = "Usage: cicsctl discard transaction <name>";
    validate_args_count_or_exit(args, 1, 2, "discard transaction", USAGE);
    let name = positional(args, 1, "name", USAGE).to_string();

    let parms = TransactionParms {
        name: Some(name.clone()),
        region_name: ctx.region_name.clone(),
        cics_plex: ctx.cics_plex.clone(),
        ..TransactionParms::default()
    };
    execute_or_exit(
        || discard_transaction(&ctx.client, &parms),
        "Failed to discard transaction",
    )
    .await;

    cli_utils::print_success(&format!(
        "The transaction '{}' was discarded successfully.",
        name
    ));
}

async fn discard_urimap_command(args: &[String], ctx: &CommandContext) {
    const USAGE: &str = "Usage: cicsctl discard urimap <name>";
    validate_args_count_or_exit(args, 1, 2, "discard urimap", USAGE);
    let name = positional(args, 1, "name", USAGE).to_string();

    let parms = UrimapParms {
        name: Some(name.clone()),
        region_name: ctx.region_name.clone(),
        cics_plex: ctx.cics_plex.clone(),
        ..UrimapParms::default()
    };
    execute_or_exit(
        || discard_urimap(&ctx.client, &parms),
        "Failed to discard URIMap",
    )
    .await;

    cli_utils::print_success(&format!(
        "The URIMap '{}' was discarded successfully.",
        name
    ));
}
