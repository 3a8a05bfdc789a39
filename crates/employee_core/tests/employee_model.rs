use employee_core::Employee;

#[test]
fn employee_serialization_uses_expected_wire_fields() {
    let employee = Employee::new(1, "sukant", "sukant@zopsmart.com", "sde");

    let json = serde_json::to_value(&employee).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "id": 1,
            "name": "sukant",
            "email": "sukant@zopsmart.com",
            "role": "sde"
        })
    );
}

#[test]
fn employee_deserializes_from_wire_shape() {
    let employee: Employee = serde_json::from_str(
        r#"{"id":2,"name":"Jane","email":"j@j.com","role":"SDE-II"}"#,
    )
    .unwrap();

    assert_eq!(employee, Employee::new(2, "Jane", "j@j.com", "SDE-II"));
}
