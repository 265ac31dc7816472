//! # Shared Command Utilities
//!
//! This module provides the cicsctl option set, profile merging, positional
//! argument checks, and dispatch helpers used across the command handlers.

use arrrg_derive::CommandLine;

use crate::cli_utils::{self, OutputFormat};
use crate::commands::errors::format_cli_error;
use crate::error::CmciError;
use crate::http::CmciClient;
use crate::profile::Profile;
use crate::session::{CmciSession, Protocol};

/// Port the CMCI TCPIPSERVICE conventionally listens on.
pub const DEFAULT_PORT: u16 = 1490;

/// Command-line options shared by every cicsctl command. Connection options
/// fall back to the named profile; resource options apply only to the
/// commands that read them.
#[derive(CommandLine, Default, PartialEq, Eq)]
pub struct Options {
    /// Name of the connection profile supplying default connection values.
    #[arrrg(optional, "Connection profile supplying default connection values")]
    pub profile: Option<String>,
    /// CMCI host name.
    #[arrrg(optional, "CMCI host name or address")]
    pub host: Option<String>,
    /// CMCI port.
    #[arrrg(optional, "CMCI port (default: 1490)")]
    pub port: Option<u16>,
    /// User ID for basic authentication.
    #[arrrg(optional, "User ID for basic authentication")]
    pub user: Option<String>,
    /// Password for basic authentication.
    #[arrrg(optional, "Password for basic authentication")]
    pub password: Option<String>,
    /// Connection scheme.
    #[arrrg(optional, "Protocol for the CMCI connection: http or https (default: https)")]
    pub protocol: Option<String>,
    /// TLS certificate verification toggle.
    #[arrrg(
        optional,
        "Reject TLS connections with unverifiable certificates: true or false (default: true)"
    )]
    pub reject_unauthorized: Option<bool>,
    /// Region the request addresses.
    #[arrrg(optional, "Region name the request addresses")]
    pub region_name: Option<String>,
    /// CICSPlex the region belongs to.
    #[arrrg(optional, "CICSPlex the region belongs to")]
    pub cics_plex: Option<String>,
    /// Output format for get commands.
    #[arrrg(optional, "Output format for get commands: json or yaml (default: json)")]
    pub output: OutputFormat,
    /// Description attribute for define commands.
    #[arrrg(optional, "Description attribute for define commands")]
    pub description: Option<String>,
    /// URI path attribute for URIMap definitions.
    #[arrrg(optional, "URI path attribute for URIMap define commands")]
    pub urimap_path: Option<String>,
    /// Host attribute for URIMap definitions.
    #[arrrg(optional, "Host attribute for URIMap define commands")]
    pub urimap_host: Option<String>,
    /// Scheme attribute for URIMap definitions.
    #[arrrg(optional, "Scheme attribute for URIMap define commands: HTTP or HTTPS")]
    pub urimap_scheme: Option<String>,
    /// Program name for URIMap server definitions.
    #[arrrg(optional, "Program name for URIMap server definitions")]
    pub program_name: Option<String>,
    /// Pipeline name for URIMap pipeline and web service definitions.
    #[arrrg(optional, "Pipeline name for URIMap pipeline and web service definitions")]
    pub pipeline_name: Option<String>,
    /// Transaction name for URIMap pipeline definitions.
    #[arrrg(optional, "Transaction name for URIMap pipeline definitions")]
    pub transaction_name: Option<String>,
    /// Web service name for URIMap pipeline definitions.
    #[arrrg(optional, "Web service name for URIMap pipeline definitions")]
    pub webservice_name: Option<String>,
    /// TCPIPSERVICE attribute for URIMap server definitions.
    #[arrrg(optional, "TCPIPSERVICE attribute for URIMap server definitions")]
    pub tcpipservice: Option<String>,
    /// Certificate label for URIMap definitions.
    #[arrrg(optional, "Certificate label for URIMap definitions")]
    pub certificate: Option<String>,
    /// Authentication mode for URIMap definitions.
    #[arrrg(optional, "Authentication mode for URIMap definitions")]
    pub authenticate: Option<String>,
    /// Enabled/disabled status attribute for URIMap definitions.
    #[arrrg(optional, "Create the URIMap enabled or disabled: true or false")]
    pub enable: Option<bool>,
    /// Web service binding file path.
    #[arrrg(optional, "Web service binding file path for webservice definitions")]
    pub wsbind: Option<String>,
    /// WSDL file path.
    #[arrrg(optional, "WSDL file path for webservice definitions")]
    pub wsdlfile: Option<String>,
    /// Web service validation toggle.
    #[arrrg(optional, "Run full validation for the web service: true or false")]
    pub validation: Option<bool>,
    /// Filter criteria for get resource.
    #[arrrg(optional, "Filter criteria for get resource")]
    pub criteria: Option<String>,
    /// Refinement parameter for get resource.
    #[arrrg(optional, "Refinement parameter for get resource")]
    pub parameter: Option<String>,
}

/// Everything a command handler needs: the connected client, the merged
/// region/plex defaults, and the raw options for resource-specific flags.
pub struct CommandContext {
    /// Client bound to the resolved session.
    pub client: CmciClient,
    /// Region from flags or profile, when either supplies one.
    pub region_name: Option<String>,
    /// CICSPlex from flags or profile, when either supplies one.
    pub cics_plex: Option<String>,
    /// Output format for record printing.
    pub output: OutputFormat,
    /// The full option set.
    pub options: Options,
}

impl CommandContext {
    /// Loads the named profile (when given), merges it under the explicit
    /// flags, and builds the client. Exits with an error message when the
    /// connection cannot be configured.
    pub fn from_options(options: Options) -> Self {
        let profile = match options.profile.as_deref() {
            Some(name) => Profile::load(name).unwrap_or_else(|e| {
                cli_utils::exit_with_error(&format_cli_error(&e, "Failed to load profile"))
            }),
            None => Profile::default(),
        };
        let session = resolve_session(&options, &profile)
            .unwrap_or_else(|message| cli_utils::exit_with_error(&message));
        let client = CmciClient::new(session)
            .unwrap_or_else(|e| cli_utils::exit_with_error(&e.to_string()));
        let region_name = options.region_name.clone().or(profile.region_name);
        let cics_plex = options.cics_plex.clone().or(profile.cics_plex);
        let output = options.output;
        Self {
            client,
            region_name,
            cics_plex,
            output,
            options,
        }
    }
}

/// Merges explicit flags over profile defaults into a session. Host, user,
/// and password must come from one of the two.
pub fn resolve_session(options: &Options, profile: &Profile) -> Result<CmciSession, String> {
    let host = options
        .host
        .clone()
        .or_else(|| profile.host.clone())
        .ok_or("CMCI host is required; supply --host or a connection profile")?;
    let user = options
        .user
        .clone()
        .or_else(|| profile.user.clone())
        .ok_or("CMCI user is required; supply --user or a connection profile")?;
    let password = options
        .password
        .clone()
        .or_else(|| profile.password.clone())
        .ok_or("CMCI password is required; supply --password or a connection profile")?;
    let port = options.port.or(profile.port).unwrap_or(DEFAULT_PORT);
    let protocol = match options.protocol.as_deref() {
        Some(value) => value.parse::<Protocol>().map_err(|e| e.to_string())?,
        None => profile.protocol.unwrap_or_default(),
    };
    let reject_unauthorized = options
        .reject_unauthorized
        .or(profile.reject_unauthorized)
        .unwrap_or(true);
    Ok(CmciSession::new(host, port, user, password)
        .protocol(protocol)
        .reject_unauthorized(reject_unauthorized))
}

/// Returns the positional argument at `index` or exits with the syntax error
/// message for a missing positional.
pub fn positional<'a>(args: &'a [String], index: usize, name: &str, usage: &str) -> &'a str {
    match args.get(index) {
        Some(value) => value,
        None => cli_utils::exit_with_usage_error(
            &format!("Syntax error: Missing Positional Argument '{}'", name),
            usage,
        ),
    }
}

/// Validates both minimum and maximum argument counts (including the
/// resource word at index 0).
pub fn validate_args_count_or_exit(
    args: &[String],
    min_count: usize,
    max_count: usize,
    command: &str,
    usage: &str,
) {
    if args.len() < min_count {
        cli_utils::exit_with_usage_error(
            &format!("{} command requires more arguments", command),
            usage,
        );
    }
    if args.len() > max_count {
        cli_utils::exit_with_usage_error(
            &format!("{} command has too many arguments", command),
            usage,
        );
    }
}

/// Macro to generate command dispatcher boilerplate.
macro_rules! dispatch_command {
    ($command_name:expr, $usage:expr, $args:expr, $ctx:expr, {
        $($subcommand:expr => $handler:expr),* $(,)?
    }) => {
        if $args.is_empty() {
            crate::cli_utils::exit_with_usage_error(
                &format!("{} command requires a resource type", $command_name),
                $usage,
            );
        }

        match $args[0].as_str() {
            $(
                $subcommand => $handler($args, $ctx).await,
            )*
            _ => {
                let available_resources = vec![$($subcommand),*];
                crate::cli_utils::exit_with_error(&format!(
                    "Unknown {} resource '{}'. Available resources: {}",
                    $command_name,
                    $args[0],
                    available_resources.join(", ")
                ));
            }
        }
    };
}

pub(crate) use dispatch_command;

/// Execute a CMCI operation and exit on error with formatted message
pub async fn execute_or_exit<T, F, Fut>(operation: F, context: &str) -> T
where
    F: FnOnce() -> Fut,
    Fut: std::future::Future<Output = Result<T, CmciError>>,
{
    match operation().await {
        Ok(result) => result,
        Err(e) => cli_utils::exit_with_error(&format_cli_error(&e, context)),
    }
}
