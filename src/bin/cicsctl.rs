use arrrg::CommandLine;
use tracing_subscriber::EnvFilter;

use cmci::{
    cli_utils,
    commands::{
        handle_add_to_list_command, handle_define_command, handle_delete_command,
        handle_disable_command, handle_discard_command, handle_enable_command, handle_get_command,
        handle_install_command, handle_refresh_command, handle_remove_from_list_command,
        shared::{CommandContext, Options},
    },
};

const USAGE: &str = r#"Usage: cicsctl [options] <command> <resource> [args...]

Connection options:
  --profile <name>              Connection profile supplying default connection values
  --host <host>                 CMCI host name or address
  --port <port>                 CMCI port (default: 1490)
  --user <user>                 User ID for basic authentication
  --password <password>         Password for basic authentication
  --protocol <http|https>       Protocol for the CMCI connection (default: https)
  --reject-unauthorized <bool>  Reject unverifiable TLS certificates (default: true)
  --region-name <region>        Region name the request addresses
  --cics-plex <plex>            CICSPlex the region belongs to
  --output <json|yaml>          Output format for get commands (default: json)

Commands:
  define program <name> <csdgroup>                Define a new program
  define transaction <name> <program> <csdgroup>  Define a new transaction
  define urimap-server <name> <csdgroup>          Define a URIMap with server usage
  define urimap-client <name> <csdgroup>          Define a URIMap with client usage
  define urimap-pipeline <name> <csdgroup>        Define a URIMap with pipeline usage
  define webservice <name> <csdgroup>             Define a new web service
  delete program <name> <csdgroup>                Delete a program definition
  delete transaction <name> <csdgroup>            Delete a transaction definition
  delete urimap <name> <csdgroup>                 Delete a URIMap definition
  delete webservice <name> <csdgroup>             Delete a web service definition
  install program <name> <csdgroup>               Install a program definition
  install transaction <name> <csdgroup>           Install a transaction definition
  install urimap <name> <csdgroup>                Install a URIMap definition
  discard program <name>                          Discard an installed program
  discard transaction <name>                      Discard an installed transaction
  discard urimap <name>                           Discard an installed URIMap
  enable urimap <name>                            Enable an installed URIMap
  disable urimap <name>                           Disable an installed URIMap
  refresh program <name>                          Load a new copy of an installed program
  get resource <resource-name>                    Query records of any resource table
  add-to-list csdgroup <name> <csdlist>           Add a CSD group to a CSD list
  remove-from-list csdgroup <name> <csdlist>      Remove a CSD group from a CSD list"#;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let (options, free) =
        Options::from_command_line_relaxed("USAGE: cicsctl [options] <command> [args...]");

    if free.is_empty() {
        cli_utils::exit_with_usage_error("No command specified", USAGE);
    }

    let ctx = CommandContext::from_options(options);

    match free[0].as_str() {
        "define" => {
            handle_define_command(&free[1..], &ctx).await;
        }
        "delete" => {
            handle_delete_command(&free[1..], &ctx).await;
        }
        "install" => {
            handle_install_command(&free[1..], &ctx).await;
        }
        "discard" => {
            handle_discard_command(&free[1..], &ctx).await;
        }
        "enable" => {
            handle_enable_command(&free[1..], &ctx).await;
        }
        "disable" => {
            handle_disable_command(&free[1..], &ctx).await;
        }
        "refresh" => {
            handle_refresh_command(&free[1..], &ctx).await;
        }
        "get" => {
            handle_get_command(&free[1..], &ctx).await;
        }
        "add-to-list" => {
            handle_add_to_list_command(&free[1..], &ctx).await;
        }
        "remove-from-list" => {
            handle_remove_from_list_command(&free[1..], &ctx).await;
        }
        _ => {
            cli_utils::exit_with_error(&format!(
                "Unknown command '{}'. Available commands: define, delete, install, discard, enable, disable, refresh, get, add-to-list, remove-from-list",
                free[0]
            ));
        }
    }

    Ok(())
}
