use serde::{Deserialize, Deserializer, Serialize, de::Error as _};
use serde_json::Number;

/// A payroll record as served by the employee JSON server.
///
/// `salary` is text on the wire. The server echoes PUT bodies verbatim, so the
/// capitalized `Name`/`Salary` spellings are accepted when decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(alias = "Id", deserialize_with = "id_from_json")]
    pub id: u64,
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(alias = "Salary", deserialize_with = "salary_text")]
    pub salary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEmployee {
    pub name: String,
    pub salary: String,
}

impl NewEmployee {
    #[must_use]
    pub fn new(name: impl Into<String>, salary: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            salary: salary.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeUpdate {
    pub name: String,
    pub salary: String,
}

impl EmployeeUpdate {
    #[must_use]
    pub fn new(name: impl Into<String>, salary: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            salary: salary.into(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Number(Number),
}

fn salary_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match TextOrNumber::deserialize(deserializer)? {
        TextOrNumber::Text(text) => text,
        TextOrNumber::Number(number) => number.to_string(),
    })
}

// Only numeric ids are accepted, whether sent as a JSON number or a numeric string.
fn id_from_json<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match TextOrNumber::deserialize(deserializer)? {
        TextOrNumber::Text(text) => text
            .trim()
            .parse::<u64>()
            .map_err(|error| D::Error::custom(format!("invalid employee id {text:?}: {error}"))),
        TextOrNumber::Number(number) => number
            .as_u64()
            .ok_or_else(|| D::Error::custom(format!("invalid employee id {number}"))),
    }
}
