use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::{
    application::config::ClientConfig,
    domain::{
        error::PayrollError,
        models::{Employee, EmployeeUpdate, NewEmployee},
    },
};

/// HTTP client for the `/employees` resource of the payroll JSON server.
///
/// Every operation sends exactly one request and checks the status the server
/// is expected to answer with before decoding the body.
#[derive(Debug, Clone)]
pub struct EmployeeClient {
    http: Client,
    config: ClientConfig,
}

impl EmployeeClient {
    pub fn new(config: ClientConfig) -> Result<Self, PayrollError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(|error| {
            PayrollError::Unavailable(format!("failed to construct http client: {error}"))
        })?;

        Ok(Self { http, config })
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub async fn list_employees(&self) -> Result<Vec<Employee>, PayrollError> {
        let url = self.config.employees_url();
        debug!("GET {url}");
        let response = self.http.get(&url).send().await.map_err(transport_error)?;
        let response = expect_status(response, StatusCode::OK).await?;
        let employees: Vec<Employee> = decode(response).await?;

        info!("listed {} employees", employees.len());
        for employee in &employees {
            log_employee(employee);
        }
        Ok(employees)
    }

    pub async fn get_employee(&self, id: u64) -> Result<Employee, PayrollError> {
        let url = self.config.employee_url(id);
        debug!("GET {url}");
        let response = self.http.get(&url).send().await.map_err(transport_error)?;
        let response = expect_found(response, id, StatusCode::OK).await?;
        let employee: Employee = decode(response).await?;

        log_employee(&employee);
        Ok(employee)
    }

    pub async fn create_employee(&self, employee: &NewEmployee) -> Result<Employee, PayrollError> {
        let url = self.config.employees_url();
        debug!("POST {url} name={}", employee.name);
        let response = self
            .http
            .post(&url)
            .json(employee)
            .send()
            .await
            .map_err(transport_error)?;
        let response = expect_status(response, StatusCode::CREATED).await?;
        let created: Employee = decode(response).await?;

        info!("created employee id={}", created.id);
        log_employee(&created);
        Ok(created)
    }

    /// Creates each employee with its own POST, in input order.
    ///
    /// A failed create does not stop the remaining ones; the result at index
    /// `i` belongs to `employees[i]`.
    pub async fn create_employees(
        &self,
        employees: &[NewEmployee],
    ) -> Vec<Result<Employee, PayrollError>> {
        let mut results = Vec::with_capacity(employees.len());
        for employee in employees {
            let result = self.create_employee(employee).await;
            if let Err(error) = &result {
                warn!("failed to create employee {}: {error}", employee.name);
            }
            results.push(result);
        }
        results
    }

    pub async fn update_employee(
        &self,
        id: u64,
        update: &EmployeeUpdate,
    ) -> Result<Employee, PayrollError> {
        let url = self.config.employee_url(id);
        debug!("PUT {url}");
        let response = self
            .http
            .put(&url)
            .json(update)
            .send()
            .await
            .map_err(transport_error)?;
        let response = expect_found(response, id, StatusCode::OK).await?;
        let updated: Employee = decode(response).await?;

        info!("updated employee id={}", updated.id);
        log_employee(&updated);
        Ok(updated)
    }

    pub async fn delete_employee(&self, id: u64) -> Result<(), PayrollError> {
        let url = self.config.employee_url(id);
        debug!("DELETE {url}");
        let response = self
            .http
            .delete(&url)
            .send()
            .await
            .map_err(transport_error)?;
        expect_found(response, id, StatusCode::OK).await?;

        info!("deleted employee id={id}");
        Ok(())
    }
}

fn log_employee(employee: &Employee) {
    info!(
        "id: {}, name: {}, salary: {}",
        employee.id, employee.name, employee.salary
    );
}

fn transport_error(error: reqwest::Error) -> PayrollError {
    PayrollError::Transport(format!("request failed: {error}"))
}

async fn expect_status(response: Response, expected: StatusCode) -> Result<Response, PayrollError> {
    let actual = response.status();
    if actual == expected {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(PayrollError::UnexpectedStatus {
        expected: expected.as_u16(),
        actual: actual.as_u16(),
        body,
    })
}

async fn expect_found(
    response: Response,
    id: u64,
    expected: StatusCode,
) -> Result<Response, PayrollError> {
    if response.status() == StatusCode::NOT_FOUND {
        return Err(PayrollError::NotFound(format!("employee {id}")));
    }
    expect_status(response, expected).await
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, PayrollError> {
    let body = response
        .text()
        .await
        .map_err(|error| PayrollError::Transport(format!("failed to read response body: {error}")))?;

    serde_json::from_str(&body)
        .map_err(|error| PayrollError::Decode(format!("unexpected response body {body}: {error}")))
}
