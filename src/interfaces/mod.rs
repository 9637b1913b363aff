pub mod client;

pub use client::EmployeeClient;
