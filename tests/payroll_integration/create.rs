use payroll_client::domain::models::NewEmployee;

use super::support::spawn_fixture;

#[tokio::test]
async fn post_echoes_new_employee() {
    let fixture = spawn_fixture().await;
    let client = fixture.client();

    let created = client
        .create_employee(&NewEmployee::new("Clark", "15000"))
        .await
        .expect("create should return 201");

    assert_eq!(created.name, "Clark");
    assert_eq!(created.salary, "15000");
    assert_eq!(created.id, 13);

    let employees = client.list_employees().await.expect("list should load");
    assert_eq!(employees.len(), 9);

    fixture.stop().await;
}

#[tokio::test]
async fn bulk_post_echoes_each_employee() {
    let fixture = spawn_fixture().await;
    let client = fixture.client();

    let inputs = vec![
        NewEmployee::new("Vinaya", "15000"),
        NewEmployee::new("Ajaya kumar", "7000"),
        NewEmployee::new("Powan", "9000"),
        NewEmployee::new("Swathi", "12000"),
    ];

    let results = client.create_employees(&inputs).await;
    assert_eq!(results.len(), inputs.len());

    let mut ids = Vec::new();
    for (input, result) in inputs.iter().zip(results) {
        let created = result.expect("each create should return 201");
        assert_eq!(created.name, input.name);
        assert_eq!(created.salary, input.salary);
        ids.push(created.id);
    }
    assert_eq!(ids, vec![13, 14, 15, 16]);

    fixture.stop().await;
}
