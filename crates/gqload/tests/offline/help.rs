use super::*;

#[test]
fn top_level_help_shows_subcommands() {
    gqload()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("load"))
        .stdout(predicate::str::contains("mutations"))
        .stdout(predicate::str::contains("--config"))
        .stdout(predicate::str::contains("--format"));
}

#[test]
fn load_help_shows_flags() {
    gqload()
        .args(["load", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--csv"))
        .stdout(predicate::str::contains("--json"))
        .stdout(predicate::str::contains("--mutation"))
        .stdout(predicate::str::contains("--endpoint"))
        .stdout(predicate::str::contains("--mapping"))
        .stdout(predicate::str::contains("--delim"))
        .stdout(predicate::str::contains("--dry-run"));
}

#[test]
fn load_help_shows_short_flags() {
    gqload()
        .args(["load", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-m"))
        .stdout(predicate::str::contains("-e"))
        .stdout(predicate::str::contains("-p"))
        .stdout(predicate::str::contains("-d"));
}

#[test]
fn version_flag_works() {
    gqload()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("gqload"));
}
