use payroll_client::domain::models::EmployeeUpdate;
use serde_json::{Value, json};

use super::support::spawn_fixture;

#[tokio::test]
async fn put_echoes_updated_fields() {
    let fixture = spawn_fixture().await;
    let client = fixture.client();

    let updated = client
        .update_employee(12, &EmployeeUpdate::new("Shubham", "65000"))
        .await
        .expect("update should return 200");

    assert_eq!(updated.id, 12);
    assert_eq!(updated.name, "Shubham");
    assert_eq!(updated.salary, "65000");

    let reloaded = client.get_employee(12).await.expect("employee 12 should load");
    assert_eq!(reloaded, updated);

    fixture.stop().await;
}

#[tokio::test]
async fn capitalized_put_body_is_echoed_and_decoded() {
    let fixture = spawn_fixture().await;

    let response = reqwest::Client::new()
        .put(format!("{}/employees/12", fixture.base_url()))
        .json(&json!({"Name": "Shubham", "Salary": "65000"}))
        .send()
        .await
        .expect("put should return");
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let payload: Value = response.json().await.expect("response should be json");
    assert_eq!(payload["Name"], "Shubham");

    let employee = fixture
        .client()
        .get_employee(12)
        .await
        .expect("employee 12 should decode");
    assert_eq!(employee.name, "Shubham");
    assert_eq!(employee.salary, "65000");

    fixture.stop().await;
}
