// crates/rollups-cli/src/main.rs
// ============================================================================
// Module: Rollups CLI Entry Point
// Description: Command dispatcher for application and execution-parameter administration.
// Purpose: Provide a safe CLI over the rollups application database.
// Dependencies: clap, rollups-config, rollups-core, rollups-store-sqlite, serde, thiserror, time.
// ============================================================================

//! ## Overview
//! The rollups CLI registers applications and inspects or edits their
//! execution parameters. Every mutation is parsed, validated, and stamped
//! before it reaches the database, and is then recorded by the configured
//! audit sink. All user-facing strings are routed through the message catalog.
//! Security posture: inputs are untrusted and must be validated.

// ============================================================================
// SECTION: Modules
// ============================================================================

#[cfg(test)]
mod main_tests;

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::File;
use std::io::Read;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::ArgAction;
use clap::Args;
use clap::CommandFactory;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use rollups_cli::audit::AuditEvent;
use rollups_cli::audit::AuditEventKind;
use rollups_cli::audit::AuditEventParams;
use rollups_cli::audit::AuditSink;
use rollups_cli::audit::FileAuditSink;
use rollups_cli::audit::NoopAuditSink;
use rollups_cli::audit::StderrAuditSink;
use rollups_cli::t;
use rollups_config::AuditConfig;
use rollups_config::RollupsCliConfig;
use rollups_core::Application;
use rollups_core::ApplicationKey;
use rollups_core::ApplicationRepository;
use rollups_core::ApplicationState;
use rollups_core::ExecutionParameters;
use rollups_core::ExecutionParametersError;
use rollups_core::MAX_DOCUMENT_BYTES;
use rollups_core::NewApplication;
use rollups_core::PARAMETER_REGISTRY;
use rollups_core::Parameter;
use rollups_core::ParameterError;
use rollups_core::apply_parameter_update;
use rollups_core::dump_document;
use rollups_core::fetch_execution_parameters;
use rollups_core::get_parameter;
use rollups_core::list_parameters;
use rollups_core::load_document;
use rollups_core::load_document_from_reader;
use rollups_core::replace_execution_parameters;
use rollups_core::resolve_application;
use rollups_store_sqlite::SqliteApplicationRepository;
use serde::Serialize;
use serde::Serializer;
use thiserror::Error;
use time::OffsetDateTime;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Default epoch length (blocks) for newly registered applications.
const DEFAULT_EPOCH_LENGTH: u64 = 10;

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "rollups-cli", disable_help_subcommand = true, disable_version_flag = true)]
struct Cli {
    /// Print version information and exit.
    #[arg(long = "version", action = ArgAction::SetTrue, global = true)]
    show_version: bool,
    /// Config file path (defaults to rollups-cli.toml or `ROLLUPS_CLI_CONFIG`).
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,
    /// Database path (overrides `database.path` from config).
    #[arg(long, value_name = "PATH", global = true)]
    database: Option<PathBuf>,
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Application management.
    App {
        /// Selected application subcommand.
        #[command(subcommand)]
        command: AppCommand,
    },
    /// Configuration utilities.
    Config {
        /// Selected config subcommand.
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Application subcommands.
#[derive(Subcommand, Debug)]
enum AppCommand {
    /// Register a new application.
    Register(AppRegisterCommand),
    /// List registered applications.
    List(AppListCommand),
    /// Show or change the state of an application.
    Status(AppStatusCommand),
    /// Remove an application and its parameters.
    Remove(AppRemoveCommand),
    /// Inspect or edit execution parameters.
    ExecutionParameters {
        /// Selected execution-parameters subcommand.
        #[command(subcommand)]
        command: ExecutionParametersCommand,
    },
}

/// Configuration subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Validate the configuration file.
    Validate,
}

/// Execution-parameter subcommands.
#[derive(Subcommand, Debug)]
enum ExecutionParametersCommand {
    /// Print one parameter value.
    #[command(after_help = parameter_help())]
    Get(ParamGetCommand),
    /// Change one parameter value.
    #[command(after_help = parameter_help())]
    Set(ParamSetCommand),
    /// Print every parameter in registry order.
    List(ParamListCommand),
    /// Print the parameter record as a JSON document.
    Dump(AppTarget),
    /// Replace the parameter record from a JSON document.
    Load(ParamLoadCommand),
}

/// Arguments for application registration.
#[derive(Args, Debug)]
struct AppRegisterCommand {
    /// Unique application name.
    #[arg(long, value_name = "NAME")]
    name: String,
    /// Application contract address.
    #[arg(long, value_name = "ADDRESS")]
    address: String,
    /// Consensus contract address.
    #[arg(long, value_name = "ADDRESS")]
    consensus: String,
    /// Machine template hash.
    #[arg(long, value_name = "HASH")]
    template_hash: String,
    /// Machine template location.
    #[arg(long, value_name = "URI")]
    template_uri: String,
    /// Blocks per epoch.
    #[arg(long, value_name = "BLOCKS", default_value_t = DEFAULT_EPOCH_LENGTH)]
    epoch_length: u64,
    /// Register the application in the disabled state.
    #[arg(long, action = ArgAction::SetTrue)]
    disabled: bool,
}

/// Arguments for application listing.
#[derive(Args, Debug)]
struct AppListCommand {
    /// Only list applications in this state.
    #[arg(long, value_enum)]
    state: Option<StateArg>,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

/// Arguments for application status.
#[derive(Args, Debug)]
struct AppStatusCommand {
    /// Application name or address.
    #[arg(value_name = "APP")]
    application: String,
    /// Enable the application.
    #[arg(long, action = ArgAction::SetTrue, conflicts_with = "disable")]
    enable: bool,
    /// Disable the application.
    #[arg(long, action = ArgAction::SetTrue)]
    disable: bool,
}

/// Arguments for application removal.
#[derive(Args, Debug)]
struct AppRemoveCommand {
    /// Application name or address.
    #[arg(value_name = "APP")]
    application: String,
    /// Confirm removal.
    #[arg(long, action = ArgAction::SetTrue)]
    force: bool,
}

/// Application selector shared by parameter commands.
#[derive(Args, Debug)]
struct AppTarget {
    /// Application name or address.
    #[arg(value_name = "APP")]
    application: String,
}

/// Arguments for reading one parameter.
#[derive(Args, Debug)]
struct ParamGetCommand {
    /// Application name or address.
    #[arg(value_name = "APP")]
    application: String,
    /// Parameter name (case-insensitive, listed below).
    #[arg(value_name = "PARAM")]
    parameter: String,
}

/// Arguments for changing one parameter.
#[derive(Args, Debug)]
struct ParamSetCommand {
    /// Application name or address.
    #[arg(value_name = "APP")]
    application: String,
    /// Parameter name (case-insensitive, listed below).
    #[arg(value_name = "PARAM")]
    parameter: String,
    /// New value.
    #[arg(value_name = "VALUE", allow_hyphen_values = true)]
    value: String,
}

/// Arguments for listing parameters.
#[derive(Args, Debug)]
struct ParamListCommand {
    /// Application name or address.
    #[arg(value_name = "APP")]
    application: String,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

/// Arguments for loading a parameter document.
#[derive(Args, Debug)]
struct ParamLoadCommand {
    /// Application name or address.
    #[arg(value_name = "APP")]
    application: String,
    /// Document path (reads stdin when omitted).
    #[arg(long, value_name = "PATH")]
    input: Option<PathBuf>,
}

/// Output formats for listing commands.
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// Human-readable lines.
    Text,
    /// JSON output.
    Json,
}

/// Renders the registered parameters for `get`/`set` help output.
fn parameter_help() -> String {
    let mut lines = vec![t!("params.help.heading")];
    lines.extend(PARAMETER_REGISTRY.iter().map(|entry| {
        t!(
            "params.help.entry",
            name = entry.name,
            hint = entry.kind.value_hint(),
            description = entry.description
        )
    }));
    lines.join("\n")
}

/// Application state filter.
#[derive(ValueEnum, Copy, Clone, Debug)]
enum StateArg {
    /// Enabled applications.
    Enabled,
    /// Disabled applications.
    Disabled,
    /// Inoperable applications.
    Inoperable,
}

impl From<StateArg> for ApplicationState {
    fn from(value: StateArg) -> Self {
        match value {
            StateArg::Enabled => Self::Enabled,
            StateArg::Disabled => Self::Disabled,
            StateArg::Inoperable => Self::Inoperable,
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper for catalog error messages.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a catalog message.
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the CLI command dispatcher.
fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();

    if cli.show_version {
        let version = env!("CARGO_PKG_VERSION");
        write_stdout_line(&t!("main.version", version = version))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        return Ok(ExitCode::SUCCESS);
    }

    let Some(command) = cli.command else {
        show_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    let config = load_config(cli.config.as_deref(), cli.database)?;
    match command {
        Commands::App {
            command,
        } => command_app(command, &config),
        Commands::Config {
            command: ConfigCommand::Validate,
        } => command_config_validate(),
    }
}

/// Emits the top-level help message for the CLI.
fn show_help() -> CliResult<()> {
    let mut command = Cli::command();
    command.print_help().map_err(|err| CliError::new(output_error("stdout", &err)))?;
    write_stdout_line("").map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(())
}

// ============================================================================
// SECTION: Context
// ============================================================================

/// Opened resources shared by application commands.
struct CliContext {
    /// Application repository.
    repository: SqliteApplicationRepository,
    /// Audit sink for mutating commands.
    audit: Box<dyn AuditSink>,
}

impl CliContext {
    /// Opens the database and audit sink described by `config`.
    fn open(config: &RollupsCliConfig) -> CliResult<Self> {
        let store_config = config.to_store_config();
        let repository = SqliteApplicationRepository::new(store_config).map_err(|err| {
            CliError::new(t!(
                "store.open_failed",
                path = config.database.path.display(),
                error = err
            ))
        })?;
        let audit = build_audit_sink(&config.audit)?;
        Ok(Self {
            repository,
            audit,
        })
    }

    /// Resolves an application selector.
    fn resolve(&self, selector: &str) -> CliResult<Application> {
        resolve_application(&self.repository, &ApplicationKey::parse(selector)).map_err(|err| {
            CliError::new(t!("app.lookup_failed", application = selector, error = err))
        })
    }

    /// Records an audit event.
    fn audit(&self, event: AuditEventKind, params: AuditEventParams) {
        self.audit.record(&AuditEvent::new(event, params));
    }
}

/// Loads configuration and applies the command-line database override.
fn load_config(path: Option<&Path>, database: Option<PathBuf>) -> CliResult<RollupsCliConfig> {
    let config = RollupsCliConfig::load(path)
        .map_err(|err| CliError::new(t!("config.load_failed", error = err)))?;
    match database {
        Some(database) => config
            .with_database_path(database)
            .map_err(|err| CliError::new(t!("config.load_failed", error = err))),
        None => Ok(config),
    }
}

/// Builds the audit sink selected by configuration.
fn build_audit_sink(config: &AuditConfig) -> CliResult<Box<dyn AuditSink>> {
    if !config.enabled {
        return Ok(Box::new(NoopAuditSink));
    }
    match &config.path {
        Some(path) => {
            let sink = FileAuditSink::new(path).map_err(|err| {
                CliError::new(t!("audit.open_failed", path = path.display(), error = err))
            })?;
            Ok(Box::new(sink))
        }
        None => Ok(Box::new(StderrAuditSink)),
    }
}

/// Returns the current wall-clock time used to stamp changes.
fn now() -> OffsetDateTime {
    OffsetDateTime::now_utc()
}

// ============================================================================
// SECTION: Config Commands
// ============================================================================

/// Executes the config validation command.
fn command_config_validate() -> CliResult<ExitCode> {
    write_stdout_line(&t!("config.validate.ok"))
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Application Commands
// ============================================================================

/// Dispatches application subcommands.
fn command_app(command: AppCommand, config: &RollupsCliConfig) -> CliResult<ExitCode> {
    let context = CliContext::open(config)?;
    match command {
        AppCommand::Register(command) => command_app_register(&context, command),
        AppCommand::List(command) => command_app_list(&context, &command),
        AppCommand::Status(command) => command_app_status(&context, &command),
        AppCommand::Remove(command) => command_app_remove(&context, &command),
        AppCommand::ExecutionParameters {
            command,
        } => command_execution_parameters(&context, command),
    }
}

/// Executes application registration.
fn command_app_register(context: &CliContext, command: AppRegisterCommand) -> CliResult<ExitCode> {
    let state = if command.disabled { ApplicationState::Disabled } else { ApplicationState::Enabled };
    let name = command.name.clone();
    let application = NewApplication {
        name: command.name,
        application_address: command.address,
        consensus_address: command.consensus,
        template_hash: command.template_hash,
        template_uri: command.template_uri,
        epoch_length: command.epoch_length,
        state,
    }
    .validate()
    .map_err(|err| CliError::new(t!("app.register.invalid", error = err)))?;

    let created = context
        .repository
        .create_application(&application, now())
        .map_err(|err| CliError::new(t!("app.register.failed", name = name, error = err)))?;
    context.audit(
        AuditEventKind::ApplicationRegistered,
        AuditEventParams {
            application: created.name.clone(),
            application_id: Some(created.id.get()),
            parameter: None,
            error_kind: None,
        },
    );
    write_stdout_line(&t!(
        "app.register.ok",
        name = created.name,
        id = created.id,
        address = created.application_address
    ))
    .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

/// Executes application listing.
fn command_app_list(context: &CliContext, command: &AppListCommand) -> CliResult<ExitCode> {
    let applications = context
        .repository
        .list_applications(command.state.map(ApplicationState::from))
        .map_err(|err| CliError::new(t!("app.list.failed", error = err)))?;
    let output = match command.format {
        OutputFormat::Json => serde_json::to_string_pretty(&applications)
            .map_err(|err| CliError::new(t!("app.list.serialize_failed", error = err)))?,
        OutputFormat::Text => render_application_list_text(&applications),
    };
    write_stdout_line(&output).map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

/// Executes application status display or change.
fn command_app_status(context: &CliContext, command: &AppStatusCommand) -> CliResult<ExitCode> {
    let application = context.resolve(&command.application)?;
    let target = if command.enable {
        Some(ApplicationState::Enabled)
    } else if command.disable {
        Some(ApplicationState::Disabled)
    } else {
        None
    };

    let Some(state) = target else {
        let mut output = t!("app.status.show", name = application.name, state = application.state);
        if let Some(reason) = &application.reason {
            output.push('\n');
            output.push_str(&t!("app.status.reason", reason = reason));
        }
        write_stdout_line(&output).map_err(|err| CliError::new(output_error("stdout", &err)))?;
        return Ok(ExitCode::SUCCESS);
    };

    context
        .repository
        .update_application_state(application.id, state, None, now())
        .map_err(|err| {
            CliError::new(t!("app.status.failed", name = application.name, error = err))
        })?;
    context.audit(
        AuditEventKind::ApplicationStateChanged,
        AuditEventParams {
            application: application.name.clone(),
            application_id: Some(application.id.get()),
            parameter: None,
            error_kind: None,
        },
    );
    write_stdout_line(&t!("app.status.updated", name = application.name, state = state))
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

/// Executes application removal.
fn command_app_remove(context: &CliContext, command: &AppRemoveCommand) -> CliResult<ExitCode> {
    let application = context.resolve(&command.application)?;
    if !command.force {
        return Err(CliError::new(t!("app.remove.force_required", name = application.name)));
    }
    context.repository.delete_application(application.id).map_err(|err| {
        CliError::new(t!("app.remove.failed", name = application.name, error = err))
    })?;
    context.audit(
        AuditEventKind::ApplicationRemoved,
        AuditEventParams {
            application: application.name.clone(),
            application_id: Some(application.id.get()),
            parameter: None,
            error_kind: None,
        },
    );
    write_stdout_line(&t!("app.remove.ok", name = application.name))
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Execution Parameter Commands
// ============================================================================

/// Dispatches execution-parameter subcommands.
fn command_execution_parameters(
    context: &CliContext,
    command: ExecutionParametersCommand,
) -> CliResult<ExitCode> {
    match command {
        ExecutionParametersCommand::Get(command) => command_params_get(context, &command),
        ExecutionParametersCommand::Set(command) => command_params_set(context, &command),
        ExecutionParametersCommand::List(command) => command_params_list(context, &command),
        ExecutionParametersCommand::Dump(command) => command_params_dump(context, &command),
        ExecutionParametersCommand::Load(command) => command_params_load(context, &command),
    }
}

/// Reads the parameter record of a resolved application.
fn read_parameters(
    context: &CliContext,
    application: &Application,
) -> CliResult<ExecutionParameters> {
    fetch_execution_parameters(&context.repository, application.id).map_err(|err| {
        CliError::new(t!("params.fetch_failed", application = application.name, error = err))
    })
}

/// Executes `execution-parameters get`.
fn command_params_get(context: &CliContext, command: &ParamGetCommand) -> CliResult<ExitCode> {
    let application = context.resolve(&command.application)?;
    let params = read_parameters(context, &application)?;
    let value = get_parameter(&params, &command.parameter).map_err(|err| {
        CliError::new(t!("params.get.failed", parameter = command.parameter, error = err))
    })?;
    write_stdout_line(&value).map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

/// Executes `execution-parameters set`.
fn command_params_set(context: &CliContext, command: &ParamSetCommand) -> CliResult<ExitCode> {
    let application = context.resolve(&command.application)?;
    let result = apply_parameter_update(
        &context.repository,
        application.id,
        &command.parameter,
        &command.value,
        now(),
    );
    let (params, parameter) = match result {
        Ok(updated) => updated,
        Err(err) => {
            context.audit(
                AuditEventKind::ExecutionParametersRejected,
                AuditEventParams {
                    application: application.name.clone(),
                    application_id: Some(application.id.get()),
                    parameter: Parameter::lookup(&command.parameter).map(|spec| spec.name),
                    error_kind: Some(err.kind()),
                },
            );
            return Err(CliError::new(t!(
                "params.set.failed",
                parameter = command.parameter,
                application = application.name,
                error = err
            )));
        }
    };
    context.audit(
        AuditEventKind::ExecutionParametersUpdated,
        AuditEventParams {
            application: application.name.clone(),
            application_id: Some(application.id.get()),
            parameter: Some(parameter.name()),
            error_kind: None,
        },
    );
    let rendered = get_parameter(&params, parameter.name()).map_err(|err| {
        CliError::new(t!("params.get.failed", parameter = parameter.name(), error = err))
    })?;
    write_stdout_line(&t!(
        "params.set.ok",
        parameter = parameter.name(),
        value = rendered,
        application = application.name
    ))
    .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

/// Executes `execution-parameters list`.
fn command_params_list(context: &CliContext, command: &ParamListCommand) -> CliResult<ExitCode> {
    let application = context.resolve(&command.application)?;
    let params = read_parameters(context, &application)?;
    let output = render_parameter_list(&list_parameters(&params), command.format)?;
    write_stdout_line(&output).map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

/// Executes `execution-parameters dump`.
fn command_params_dump(context: &CliContext, command: &AppTarget) -> CliResult<ExitCode> {
    let application = context.resolve(&command.application)?;
    let params = read_parameters(context, &application)?;
    let document = dump_document(&params).map_err(|err| {
        CliError::new(t!("params.dump.failed", application = application.name, error = err))
    })?;
    write_stdout_line(&document).map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

/// Executes `execution-parameters load`.
fn command_params_load(context: &CliContext, command: &ParamLoadCommand) -> CliResult<ExitCode> {
    let application = context.resolve(&command.application)?;
    let decoded = match &command.input {
        Some(path) => read_document_file(path)?,
        None => read_document_stdin()?,
    };
    let result = decoded.map_err(ExecutionParametersError::from).and_then(|document| {
        replace_execution_parameters(&context.repository, application.id, document, now())
    });
    if let Err(err) = result {
        context.audit(
            AuditEventKind::ExecutionParametersRejected,
            AuditEventParams {
                application: application.name.clone(),
                application_id: Some(application.id.get()),
                parameter: None,
                error_kind: Some(err.kind()),
            },
        );
        return Err(CliError::new(t!(
            "params.load.failed",
            application = application.name,
            error = err
        )));
    }
    context.audit(
        AuditEventKind::ExecutionParametersLoaded,
        AuditEventParams {
            application: application.name.clone(),
            application_id: Some(application.id.get()),
            parameter: None,
            error_kind: None,
        },
    );
    write_stdout_line(&t!("params.load.ok", application = application.name))
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

/// Reads a parameter document from disk; the inner result carries decode failures.
fn read_document_file(path: &Path) -> CliResult<Result<ExecutionParameters, ParameterError>> {
    let bytes = read_bytes_with_limit(path, MAX_DOCUMENT_BYTES).map_err(|err| {
        let kind = t!("input.kind.parameters_document");
        match err {
            ReadLimitError::Io(error) => CliError::new(t!(
                "input.read_failed",
                kind = kind,
                path = path.display(),
                error = error
            )),
            ReadLimitError::TooLarge {
                size,
                limit,
            } => CliError::new(t!(
                "input.read_too_large",
                kind = kind,
                path = path.display(),
                size = size,
                limit = limit
            )),
        }
    })?;
    Ok(load_document(&bytes))
}

/// Reads a parameter document from stdin; the inner result carries decode failures.
fn read_document_stdin() -> CliResult<Result<ExecutionParameters, ParameterError>> {
    match load_document_from_reader(std::io::stdin().lock()) {
        Err(ParameterError::Io(error)) => Err(CliError::new(t!(
            "input.stdin_failed",
            kind = t!("input.kind.parameters_document"),
            error = error
        ))),
        other => Ok(other),
    }
}

// ============================================================================
// SECTION: Input Helpers
// ============================================================================

/// Errors returned by bounded file reads.
#[derive(Debug)]
enum ReadLimitError {
    /// File I/O failure.
    Io(std::io::Error),
    /// File size exceeds the configured limit.
    TooLarge {
        /// Actual size in bytes.
        size: u64,
        /// Allowed limit in bytes.
        limit: usize,
    },
}

/// Reads a file from disk while enforcing a hard size limit.
fn read_bytes_with_limit(path: &Path, max_bytes: usize) -> Result<Vec<u8>, ReadLimitError> {
    let file = File::open(path).map_err(ReadLimitError::Io)?;
    let metadata = file.metadata().map_err(ReadLimitError::Io)?;
    let size = metadata.len();
    let limit = u64::try_from(max_bytes).map_err(|_| ReadLimitError::TooLarge {
        size,
        limit: max_bytes,
    })?;
    if size > limit {
        return Err(ReadLimitError::TooLarge {
            size,
            limit: max_bytes,
        });
    }

    let read_limit = limit.saturating_add(1);
    let mut limited = file.take(read_limit);
    let mut bytes = Vec::new();
    limited.read_to_end(&mut bytes).map_err(ReadLimitError::Io)?;
    if bytes.len() > max_bytes {
        let actual = u64::try_from(bytes.len()).unwrap_or(u64::MAX);
        return Err(ReadLimitError::TooLarge {
            size: actual,
            limit: max_bytes,
        });
    }
    Ok(bytes)
}

// ============================================================================
// SECTION: Rendering
// ============================================================================

/// Registry-ordered parameter listing serialized as a JSON object.
struct OrderedParameters<'a>(&'a [(&'static str, String)]);

impl Serialize for OrderedParameters<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(name, value)| (*name, value)))
    }
}

/// Renders a parameter listing in the requested format.
fn render_parameter_list(
    entries: &[(&'static str, String)],
    format: OutputFormat,
) -> CliResult<String> {
    match format {
        OutputFormat::Text => Ok(entries
            .iter()
            .map(|(name, value)| t!("params.list.entry", name = name, value = value))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => serde_json::to_string_pretty(&OrderedParameters(entries))
            .map_err(|err| CliError::new(t!("params.list.serialize_failed", error = err))),
    }
}

/// Renders application list output in text form.
fn render_application_list_text(applications: &[Application]) -> String {
    if applications.is_empty() {
        return t!("app.list.empty");
    }
    applications
        .iter()
        .map(|application| {
            t!(
                "app.list.entry",
                id = application.id,
                name = application.name,
                address = application.application_address,
                state = application.state
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes a single line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes a single line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats an output error message.
fn output_error(stream: &str, error: &std::io::Error) -> String {
    let stream_label = match stream {
        "stdout" => t!("output.stream.stdout"),
        "stderr" => t!("output.stream.stderr"),
        _ => t!("output.stream.unknown"),
    };
    t!("output.write_failed", stream = stream_label, error = error)
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
