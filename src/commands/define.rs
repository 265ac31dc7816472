//! # Define Command Handlers
//!
//! This module handles define commands, creating resource definitions in a
//! CSD group: programs, transactions, the three URIMap usages, and web
//! services.

use crate::cli_utils;
use crate::commands::shared::{
    CommandContext, dispatch_command, execute_or_exit, positional, validate_args_count_or_exit,
};
use crate::program::{ProgramParms, define_program};
use crate::transaction::{TransactionParms, define_transaction};
use crate::urimap::{
    UrimapParms, define_urimap_client, define_urimap_pipeline, define_urimap_server,
};
use crate::webservice::{WebServiceParms, define_web_service};

const DEFINE_USAGE: &str = "Usage: cicsctl define <program|transaction|urimap-server|urimap-client|urimap-pipeline|webservice> [args...]";

/// Handles all define commands.
///
/// # Arguments
/// * `args` - Command arguments (first element is the resource type)
/// * `ctx` - Connection and option context
pub async fn handle_define_command(args: &[String], ctx: &CommandContext) {
    dispatch_command!("define", DEFINE_USAGE, args, ctx, {
        "program" => define_program_command,
        "transaction" => define_transaction_command,
        "urimap-server" => define_urimap_server_command,
        "urimap-client" => define_urimap_client_command,
        "urimap-pipeline" => define_urimap_pipeline_command,
        "webservice" => define_web_service_command,
    });
}

async fn define_program_command(args: &[String], ctx: &CommandContext) {
    const USAGE: &str = "Usage: cicsctl define program <name> <csdgroup>";
    validate_args_count_or_exit(args, 1, 3, "define program", USAGE);
    let name = positional(args, 1, "name", USAGE).to_string();
    let csd_group = positional(args, 2, "csdgroup", USAGE).to_string();

    let parms = ProgramParms {
        name: Some(name.clone()),
        csd_group: Some(csd_group),
        region_name: ctx.region_name.clone(),
        cics_plex: ctx.cics_plex.clone(),
        description: ctx.options.description.clone(),
    };
    execute_or_exit(
        || define_program(&ctx.client, &parms),
        "Failed to define program",
    )
    .await;

    cli_utils::print_success(&format!("The program '{}' was defined successfully.", name));
}

async fn define_transaction_command(args: &[String], ctx: &CommandContext) {
    const USAGE: &str = "Usage: cicsctl define transaction <name> <program> <csdgroup>";
    validate_args_count_or_exit(args, 1, 4, "define transaction", USAGE);
    let name = positional(args, 1, "name", USAGE).to_string();
    let program = positional(args, 2, "program", USAGE).to_string();
    let csd_group = positional(args, 3, "csdgroup", USAGE).to_string();

    let parms = TransactionParms {
        name: Some(name.clone()),
        program_name: Some(program),
        csd_group: Some(csd_group),
        region_name: ctx.region_name.clone(),
        cics_plex: ctx.cics_plex.clone(),
        description: ctx.options.description.clone(),
    };
    execute_or_exit(
        || define_transaction(&ctx.client, &parms),
        "Failed to define transaction",
    )
    .await;

    cli_utils::print_success(&format!(
        "The transaction '{}' was defined successfully.",
        name
    ));
}

/// Assembles URIMap parameters from the two positionals plus the URIMap
/// option flags; each define usage validates the fields it needs.
fn urimap_parms(args: &[String], ctx: &CommandContext, usage: &str) -> UrimapParms {
    let name = positional(args, 1, "name", usage).to_string();
    let csd_group = positional(args, 2, "csdgroup", usage).to_string();
    UrimapParms {
        name: Some(name),
        csd_group: Some(csd_group),
        region_name: ctx.region_name.clone(),
        cics_plex: ctx.cics_plex.clone(),
        urimap_path: ctx.options.urimap_path.clone(),
        urimap_host: ctx.options.urimap_host.clone(),
        urimap_scheme: ctx.options.urimap_scheme.clone(),
        program_name: ctx.options.program_name.clone(),
        pipeline_name: ctx.options.pipeline_name.clone(),
        enable: ctx.options.enable,
        description: ctx.options.description.clone(),
        tcpipservice: ctx.options.tcpipservice.clone(),
        transaction_name: ctx.options.transaction_name.clone(),
        webservice_name: ctx.options.webservice_name.clone(),
        certificate: ctx.options.certificate.clone(),
        authenticate: ctx.options.authenticate.clone(),
    }
}

async fn define_urimap_server_command(args: &[String], ctx: &CommandContext) {
    const USAGE: &str = "Usage: cicsctl define urimap-server <name> <csdgroup> --urimap-path <path> --urimap-host <host> --urimap-scheme <scheme> --program-name <program>";
    validate_args_count_or_exit(args, 1, 3, "define urimap-server", USAGE);
    let parms = urimap_parms(args, ctx, USAGE);
    execute_or_exit(
        || define_urimap_server(&ctx.client, &parms),
        "Failed to define URIMap",
    )
    .await;

    cli_utils::print_success(&format!(
        "The URIMap '{}' was defined successfully.",
        args[1]
    ));
}

async fn define_urimap_client_command(args: &[String], ctx: &CommandContext) {
    const USAGE: &str = "Usage: cicsctl define urimap-client <name> <csdgroup> --urimap-path <path> --urimap-host <host> --urimap-scheme <scheme>";
    validate_args_count_or_exit(args, 1, 3, "define urimap-client", USAGE);
    let parms = urimap_parms(args, ctx, USAGE);
    execute_or_exit(
        || define_urimap_client(&ctx.client, &parms),
        "Failed to define URIMap",
    )
    .await;

    cli_utils::print_success(&format!(
        "The URIMap '{}' was defined successfully.",
        args[1]
    ));
}

async fn define_urimap_pipeline_command(args: &[String], ctx: &CommandContext) {
    const USAGE: &str = "Usage: cicsctl define urimap-pipeline <name> <csdgroup> --urimap-path <path> --urimap-host <host> --urimap-scheme <scheme> --pipeline-name <pipeline>";
    validate_args_count_or_exit(args, 1, 3, "define urimap-pipeline", USAGE);
    let parms = urimap_parms(args, ctx, USAGE);
    execute_or_exit(
        || define_urimap_pipeline(&ctx.client, &parms),
        "Failed to define URIMap",
    )
    .await;

    cli_utils::print_success(&format!(
        "The URIMap '{}' was defined successfully.",
        args[1]
    ));
}

async fn define_web_service_command(args: &[String], ctx: &CommandContext) {
    const USAGE: &str = "Usage: cicsctl define webservice <name> <csdgroup> --pipeline-name <pipeline> --wsbind <path> --validation <true|false>";
    validate_args_count_or_exit(args, 1, 3, "define webservice", USAGE);
    let name = positional(args, 1, "name", USAGE).to_string();
    let csd_group = positional(args, 2, "csdgroup", USAGE).to_string();

    let parms = WebServiceParms {
        name: Some(name.clone()),
        csd_group: Some(csd_group),
        pipeline_name: ctx.options.pipeline_name.clone(),
        wsbind: ctx.options.wsbind.clone(),
        validation: ctx.options.validation,
        region_name: ctx.region_name.clone(),
        cics_plex: ctx.cics_plex.clone(),
        description: ctx.options.description.clone(),
        wsdlfile: ctx.options.wsdlfile.clone(),
    };
    execute_or_exit(
        || define_web_service(&ctx.client, &parms),
        "Failed to define web service",
    )
    .await;

    cli_utils::print_success(&format!(
        "The web service '{}' was defined successfully.",
        name
    ));
}
