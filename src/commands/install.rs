//! # Install Command Handlers
//!
//! This module handles install commands, installing CSD definitions into the
//! running region.

use crate::cli_utils;
use crate::commands::shared::{
    CommandContext, dispatch_command, execute_or_exit, positional, validate_args_count_or_exit,
};
use crate::program::{ProgramParms, install_program};
use crate::transaction::{TransactionParms, install_transaction};
use crate::urimap::{UrimapParms, install_urimap};

const INSTALL_USAGE: &str = "Usage: cicsctl install <program|transaction|urimap> <name> <csdgroup>";

/// Handles all install commands.
///
/// # Arguments
/// * `args` - Command arguments (first element is the resource type)
/// * `ctx` - Connection and option context
pub async fn handle_install_command(args: &[String], ctx: &CommandContext) {
    dispatch_command!("install", INSTALL_USAGE, args, ctx, {
        "program" => install_program_command,
        "transaction" => install_transaction_command,
        "urimap" => install_urimap_command,
    });
}

async fn install_program_command(args: &[String], ctx: &CommandContext) {
    const USAGE: &str = "Usage: cicsctl install program <name> <csdgroup>";
    validate_args_count_or_exit(args, 1, 3, "install program", USAGE);
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
        || install_program(&ctx.client, &parms),
        "Failed to install program",
    )
    .await;

    cli_utils::print_success(&format!(
        "The program '{}' was installed successfully.",
        name
    ));
}

async fn install_transaction_command(args: &[String], ctx: &CommandContext) {
    const USAGE: &str = "Usage: cicsctl install transaction <name> <csdgroup>";
    validate_args_count_or_exit(args, 1, 3, "install transaction", USAGE);
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
        || install_transaction(&ctx.client, &parms),
        "Failed to install transaction",
    )
    .await;

    cli_utils::print_success(&format!(
        "The transaction '{}' was installed successfully.",
        name
    ));
}

async fn install_urimap_command(args: &[String], ctx: &CommandContext) {
    const USAGE: &str = "Usage: cicsctl install urimap <name> <csdgroup>";
    validate_args_count_or_exit(args, 1, 3, "install urimap", USAGE);
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
        || install_urimap(&ctx.client, &parms),
        "Failed to install URIMap",
    )
    .await;

    cli_utils::print_success(&format!(
        "The URIMap '{}' was installed successfully.",
        name
    ));
}
