use std::time::Duration;

use clap::{Parser, Subcommand};
use reqwest::Url;

use crate::domain::models::NewEmployee;

pub const DEFAULT_BASE_URL: &str = "http://localhost:4000";

#[derive(Debug, Clone, Parser)]
#[command(
    name = "payroll-client",
    version,
    about = "EmployeePayroll REST client for the employee JSON server"
)]
pub struct Args {
    #[arg(long, env = "PAYROLL_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[arg(long, env = "PAYROLL_TIMEOUT_MS")]
    pub timeout_ms: Option<u64>,

    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_filter: String,

    #[arg(long, env = "PAYROLL_JSON_LOGS", default_value_t = false)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List every employee.
    List,
    /// Fetch one employee by id.
    Get {
        #[arg(long)]
        id: u64,
    },
    /// Add a new employee.
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        salary: String,
    },
    /// Add several employees, one request each.
    BulkCreate {
        /// `NAME=SALARY`, repeatable.
        #[arg(long = "employee", value_name = "NAME=SALARY", required = true, value_parser = parse_employee_pair)]
        employees: Vec<NewEmployee>,
    },
    /// Replace the fields of an existing employee.
    Update {
        #[arg(long)]
        id: u64,
        #[arg(long)]
        name: String,
        #[arg(long)]
        salary: String,
    },
    /// Remove an employee.
    Delete {
        #[arg(long)]
        id: u64,
    },
}

impl Command {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Get { .. } => "get",
            Self::Create { .. } => "create",
            Self::BulkCreate { .. } => "bulk-create",
            Self::Update { .. } => "update",
            Self::Delete { .. } => "delete",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Option<Duration>,
    pub log_filter: String,
    pub json_logs: bool,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Result<Self, String> {
        let base_url = normalize_base_url(&base_url.into())?;
        Ok(Self {
            base_url,
            timeout: None,
            log_filter: "info".to_owned(),
            json_logs: false,
        })
    }

    pub fn from_args(args: &Args) -> Result<Self, String> {
        let mut config = Self::new(args.base_url.as_str())?;

        if let Some(timeout_ms) = args.timeout_ms {
            if timeout_ms == 0 {
                return Err("timeout_ms must be greater than 0".to_owned());
            }
            config.timeout = Some(Duration::from_millis(timeout_ms));
        }
        config.log_filter = args.log_filter.clone();
        config.json_logs = args.json_logs;

        Ok(config)
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn employees_url(&self) -> String {
        format!("{}/employees", self.base_url)
    }

    #[must_use]
    pub fn employee_url(&self, id: u64) -> String {
        format!("{}/employees/{id}", self.base_url)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
            log_filter: "info".to_owned(),
            json_logs: false,
        }
    }
}

fn normalize_base_url(input: &str) -> Result<String, String> {
    let trimmed = input.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err("base_url must not be empty".to_owned());
    }

    let url = Url::parse(trimmed).map_err(|error| format!("invalid base_url {trimmed}: {error}"))?;
    match url.scheme() {
        "http" | "https" => {}
        other => return Err(format!("base_url scheme must be http or https, got {other}")),
    }
    if url.host_str().is_none() {
        return Err(format!("base_url {trimmed} has no host"));
    }

    Ok(trimmed.to_owned())
}

fn parse_employee_pair(input: &str) -> Result<NewEmployee, String> {
    let Some((name, salary)) = input.rsplit_once('=') else {
        return Err(format!("expected NAME=SALARY, got {input:?}"));
    };
    let name = name.trim();
    let salary = salary.trim();
    if name.is_empty() || salary.is_empty() {
        return Err(format!("expected NAME=SALARY, got {input:?}"));
    }

    Ok(NewEmployee::new(name, salary))
}
