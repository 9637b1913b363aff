use std::io::Write;

use serde::Serialize;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

use crate::{
    application::config::{Args, ClientConfig, Command},
    domain::{
        error::PayrollError,
        models::{EmployeeUpdate, NewEmployee},
    },
    interfaces::EmployeeClient,
};

pub async fn run(args: Args) -> Result<(), PayrollError> {
    let config = ClientConfig::from_args(&args)
        .map_err(|error| PayrollError::InvalidRequest(format!("configuration error: {error}")))?;

    init_logging(&config.log_filter, config.json_logs)?;
    info!(
        "starting payroll-client command={} base_url={}",
        args.command.label(),
        config.base_url
    );

    let client = EmployeeClient::new(config)?;
    execute(&client, args.command).await
}

pub async fn execute(client: &EmployeeClient, command: Command) -> Result<(), PayrollError> {
    let mut stdout = std::io::stdout();
    execute_to(client, command, &mut stdout).await
}

/// Runs one command and writes its result to `out`, pretty JSON per record.
pub async fn execute_to<W: Write>(
    client: &EmployeeClient,
    command: Command,
    out: &mut W,
) -> Result<(), PayrollError> {
    match command {
        Command::List => write_json(out, &client.list_employees().await?),
        Command::Get { id } => write_json(out, &client.get_employee(id).await?),
        Command::Create { name, salary } => {
            let body = NewEmployee::new(name, salary);
            write_json(out, &client.create_employee(&body).await?)
        }
        Command::BulkCreate { employees } => {
            let results = client.create_employees(&employees).await;
            let mut failed = 0usize;
            for (input, result) in employees.iter().zip(results) {
                match result {
                    Ok(created) => write_json(out, &created)?,
                    Err(error) => {
                        failed += 1;
                        error!("create {} failed: {error}", input.name);
                    }
                }
            }
            if failed > 0 {
                return Err(PayrollError::Partial {
                    failed,
                    total: employees.len(),
                });
            }
            Ok(())
        }
        Command::Update { id, name, salary } => {
            let body = EmployeeUpdate::new(name, salary);
            write_json(out, &client.update_employee(id, &body).await?)
        }
        Command::Delete { id } => {
            client.delete_employee(id).await?;
            writeln!(out, "deleted employee {id}").map_err(output_error)
        }
    }
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<(), PayrollError> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|error| PayrollError::Output(format!("failed to render output: {error}")))?;
    writeln!(out, "{text}").map_err(output_error)
}

fn output_error(error: std::io::Error) -> PayrollError {
    PayrollError::Output(format!("failed to write output: {error}"))
}

fn init_logging(filter: &str, json_logs: bool) -> Result<(), PayrollError> {
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    if json_logs {
        builder.json().try_init().map_err(|error| {
            PayrollError::Unavailable(format!("failed to initialize logger: {error}"))
        })?;
    } else {
        builder.compact().try_init().map_err(|error| {
            PayrollError::Unavailable(format!("failed to initialize logger: {error}"))
        })?;
    }

    Ok(())
}
