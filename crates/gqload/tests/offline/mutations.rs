use super::*;

#[test]
fn mutations_lists_schema_operations_as_a_table() {
    let dir = fixture_project();
    gqload_in(&dir)
        .args(["--format", "human", "mutations"])
        .assert()
        .success()
        .stdout(predicate::str::contains("createItem"))
        .stdout(predicate::str::contains("name: String!"))
        .stdout(predicate::str::contains("Create a new item."));
}

#[test]
fn mutations_defaults_to_json_when_piped() {
    let dir = fixture_project();
    let output = gqload_in(&dir).arg("mutations").assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let rows: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(rows[0]["name"], "createItem");
    assert_eq!(rows[0]["returns"], "Item");
}

#[test]
fn mutations_without_schema_path_fails() {
    let dir = fixture_project();
    std::fs::write(dir.path().join(".graphqlconfig"), r#"{ "extensions": {} }"#).unwrap();
    gqload_in(&dir)
        .arg("mutations")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no schemaPath"));
}
