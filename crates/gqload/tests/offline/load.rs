use super::*;

#[test]
fn dry_run_prints_the_document_and_skips_bad_rows() {
    let dir = fixture_project();
    gqload_in(&dir)
        .args(["load", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mutation { "))
        .stdout(predicate::str::contains(
            "_0 : createItem ( name: \"Widget\",tags: [\"red\",\"blue\"],ownerId: \"42\" ) { id }",
        ))
        .stdout(predicate::str::contains("_1 :").not())
        .stderr(predicate::str::contains("Record 1 skipped"))
        .stderr(predicate::str::contains("Compiled 1 of 2 records"));
}

#[test]
fn mapping_flag_feeds_argument_from_renamed_column() {
    let dir = fixture_project();
    std::fs::write(dir.path().join("renamed.csv"), "sku,ownerId\nGadget,7\n").unwrap();

    gqload_in(&dir)
        .args(["load", "--mapping", r#"{"sku": "name"}"#, "--dry-run", "--csv"])
        .arg(dir.path().join("renamed.csv"))
        .assert()
        .success()
        .stdout(predicate::str::contains("name: \"Gadget\""))
        .stdout(predicate::str::contains("tags:").not())
        .stderr(predicate::str::contains("Using mapping"));
}

#[test]
fn custom_delimiter_splits_lists() {
    let dir = fixture_project();
    std::fs::write(
        dir.path().join("pipes.csv"),
        "name,tags,ownerId\nWidget,red|blue,42\n",
    )
    .unwrap();

    gqload_in(&dir)
        .args(["load", "--delim", "|", "--dry-run", "--csv"])
        .arg(dir.path().join("pipes.csv"))
        .assert()
        .success()
        .stdout(predicate::str::contains("tags: [\"red\",\"blue\"]"));
}

#[test]
fn missing_config_file_fails() {
    gqload()
        .args(["--config", "/nonexistent/.graphqlconfig", "load", "--dry-run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not read config file"));
}

#[test]
fn invalid_mapping_json_fails() {
    let dir = fixture_project();
    gqload_in(&dir)
        .args(["load", "--mapping", "not json", "--dry-run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid mapping"));
}

#[test]
fn unknown_mutation_lists_available_ones() {
    let dir = fixture_project();
    gqload_in(&dir)
        .args(["load", "--mutation", "createWidget", "--dry-run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("\"createWidget\" not found"))
        .stderr(predicate::str::contains("createItem"));
}

#[test]
fn no_record_source_fails() {
    let dir = fixture_project();
    std::fs::write(
        dir.path().join(".graphqlconfig"),
        r#"{
            "schemaPath": "schema.graphql",
            "extensions": {
                "endpoints": { "dev": "http://localhost:1/graphql" },
                "load": { "mutation": "createItem" }
            }
        }"#,
    )
    .unwrap();

    gqload_in(&dir)
        .args(["load", "--dry-run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no csv or json file"));
}

#[test]
fn json_source_loads_preparsed_values() {
    let dir = fixture_project();
    std::fs::write(
        dir.path().join("data.json"),
        r#"[{"name": "Widget", "tags": ["red", "blue"], "ownerId": 42}]"#,
    )
    .unwrap();

    gqload_in(&dir)
        .args(["load", "--dry-run", "--json"])
        .arg(dir.path().join("data.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("tags: [\"red\",\"blue\"]"))
        .stdout(predicate::str::contains("ownerId: \"42\""));
}

#[test]
fn list_parse_warning_is_surfaced_not_fatal() {
    let dir = fixture_project();
    std::fs::write(
        dir.path().join("solo.csv"),
        "name,tags,ownerId\nWidget,solo,42\n",
    )
    .unwrap();

    gqload_in(&dir)
        .args(["load", "--dry-run", "--csv"])
        .arg(dir.path().join("solo.csv"))
        .assert()
        .success()
        .stdout(predicate::str::contains("tags: \"solo\""))
        .stderr(predicate::str::contains("is not a list"));
}
