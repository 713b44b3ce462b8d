// Integration tests for `reuni configuration` against an in-process service.

mod common;

use anyhow::Result;
use common::{mapping, scope, scope_flags, unreachable_url, CliTestFixture};
use predicates::prelude::*;
use serde_json::json;

fn with_scope<'a>(args: &[&'a str]) -> Vec<&'a str> {
    let mut all: Vec<&'a str> = args.to_vec();
    all.extend(scope_flags());
    all
}

fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn test_missing_organization_stops_before_any_request() -> Result<()> {
    let fixture = CliTestFixture::seeded()?;

    fixture
        .configuration(&["set", "-s", "api", "-n", "prod", "--key", "A", "--value", "1"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Invalid Organization"));

    assert!(fixture.server.submissions().is_empty());
    Ok(())
}

#[test]
fn test_missing_service_and_namespace_are_reported() -> Result<()> {
    let fixture = CliTestFixture::seeded()?;

    fixture
        .configuration(&["show", "-o", "acme", "-n", "prod"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Invalid Service"));

    fixture
        .configuration(&["show", "-o", "acme", "-s", "api"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Invalid Namespace"));
    Ok(())
}

#[test]
fn test_missing_token_asks_for_login() -> Result<()> {
    let fixture = CliTestFixture::seeded()?;

    fixture
        .bare_command()
        .env("REUNI_SERVER_URL", fixture.server.url())
        .arg("configuration")
        .args(with_scope(&["show"]))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Please login first"));
    Ok(())
}

#[test]
fn test_group_without_scope_is_rejected_before_help() -> Result<()> {
    let fixture = CliTestFixture::new()?;

    fixture
        .configuration(&[])
        .assert()
        .code(1)
        .stdout("Invalid Organization\n");
    Ok(())
}

#[test]
fn test_group_without_subcommand_prints_help() -> Result<()> {
    let fixture = CliTestFixture::new()?;

    fixture
        .configuration(&scope_flags())
        .assert()
        .success()
        .stdout(predicate::str::contains("Organization, service and namespace name are required"))
        .stdout(predicate::str::contains("unset"));
    Ok(())
}

#[test]
fn test_list_prints_comma_joined_versions() -> Result<()> {
    let fixture = CliTestFixture::seeded()?;

    fixture
        .configuration(&with_scope(&["list"]))
        .assert()
        .success()
        .stdout("Service    api\nNamespace  prod\nVersions   1,2,3\n");
    Ok(())
}

#[test]
fn test_show_defaults_to_latest_version() -> Result<()> {
    let fixture = CliTestFixture::seeded()?;

    let latest = fixture.configuration(&with_scope(&["show"])).output()?;
    let explicit = fixture
        .configuration(&with_scope(&["show", "--versions=3"]))
        .output()?;

    assert!(latest.status.success());
    assert_eq!(stdout_of(&latest), stdout_of(&explicit));
    assert_eq!(
        stdout_of(&latest),
        "Service    api\nNamespace  prod\nVersion    3\n#  Key      Value\n1  TIMEOUT  30\n"
    );
    Ok(())
}

#[test]
fn test_show_older_version() -> Result<()> {
    let fixture = CliTestFixture::seeded()?;

    fixture
        .configuration(&with_scope(&["show", "-v", "1"]))
        .assert()
        .success()
        .stdout(predicate::str::contains("Version    1"))
        .stdout(predicate::str::contains("1  TIMEOUT  10"));
    Ok(())
}

#[test]
fn test_show_unknown_version_degrades_to_empty_configuration() -> Result<()> {
    let fixture = CliTestFixture::seeded()?;

    fixture
        .configuration(&with_scope(&["show", "-v", "42"]))
        .assert()
        .success()
        .stderr(predicate::str::contains("HTTP Error 404: version not found"))
        .stdout(predicate::str::contains("Version    0"));
    Ok(())
}

#[test]
fn test_show_keeps_server_key_order() -> Result<()> {
    let fixture = CliTestFixture::new()?;
    fixture
        .server
        .seed(&scope(), mapping(&[("ZONE", "eu"), ("ALPHA", "1"), ("MIDDLE", "m")]));

    fixture
        .configuration(&with_scope(&["show"]))
        .assert()
        .success()
        .stdout(
            "Service    api\nNamespace  prod\nVersion    1\n\
             #  Key     Value\n1  ZONE    eu\n2  ALPHA   1\n3  MIDDLE  m\n",
        );
    Ok(())
}

#[test]
fn test_show_with_unreachable_service_degrades_to_empty_configuration() -> Result<()> {
    let fixture = CliTestFixture::new()?;

    fixture
        .configuration(&with_scope(&["show"]))
        .env("REUNI_SERVER_URL", unreachable_url()?)
        .assert()
        .success()
        .stderr(predicate::str::contains("/acme/api/prod/latest failed"))
        .stdout("Service    api\nNamespace  prod\nVersion    0\n#  Key  Value\n");
    Ok(())
}

#[test]
fn test_list_with_unreachable_service_prints_error_only() -> Result<()> {
    let fixture = CliTestFixture::new()?;

    fixture
        .configuration(&with_scope(&["list"]))
        .env("REUNI_SERVER_URL", unreachable_url()?)
        .assert()
        .success()
        .stderr(predicate::str::contains("/acme/api/prod/versions failed"))
        .stdout("");
    Ok(())
}

#[test]
fn test_list_rejected_by_service_prints_error_only() -> Result<()> {
    let fixture = CliTestFixture::seeded()?;

    fixture
        .configuration(&with_scope(&["list"]))
        .env("REUNI_TOKEN", "stale-token")
        .assert()
        .success()
        .stderr(predicate::str::contains("HTTP Error 401: unauthorized"))
        .stdout("");
    Ok(())
}

#[test]
fn test_set_with_unreachable_service_submits_nothing() -> Result<()> {
    let fixture = CliTestFixture::seeded()?;

    fixture
        .configuration(&with_scope(&["set", "--key", "A", "--value", "1"]))
        .env("REUNI_SERVER_URL", unreachable_url()?)
        .assert()
        .success()
        .stderr(predicate::str::contains("failed"))
        .stdout(predicate::str::contains("New Configuration Created").not());

    assert!(fixture.server.submissions().is_empty());
    assert_eq!(fixture.server.versions(&scope()), vec![1, 2, 3]);
    Ok(())
}

#[test]
fn test_set_submits_full_mapping_with_new_key() -> Result<()> {
    let fixture = CliTestFixture::seeded()?;

    fixture
        .configuration(&with_scope(&["set", "--key=RETRIES", "--value=5"]))
        .assert()
        .success()
        .stdout(predicate::str::contains("New Configuration Created"));

    assert_eq!(
        fixture.server.submissions(),
        vec![json!({"configuration": {"TIMEOUT": "30", "RETRIES": "5"}})]
    );

    fixture
        .configuration(&with_scope(&["show"]))
        .assert()
        .success()
        .stdout(predicate::str::contains("Version    4"))
        .stdout(predicate::str::contains("RETRIES  5"));
    Ok(())
}

#[test]
fn test_set_overwrites_existing_key() -> Result<()> {
    let fixture = CliTestFixture::seeded()?;

    fixture
        .configuration(&with_scope(&["set", "--key", "TIMEOUT", "--value", "45"]))
        .assert()
        .success();

    let latest = fixture.server.latest(&scope()).expect("scope should exist");
    assert_eq!(latest.version, 4);
    assert_eq!(latest.configuration, mapping(&[("TIMEOUT", "45")]));
    Ok(())
}

#[test]
fn test_unset_absent_key_leaves_service_untouched() -> Result<()> {
    let fixture = CliTestFixture::seeded()?;

    fixture
        .configuration(&with_scope(&["unset", "--key", "MISSING"]))
        .assert()
        .success()
        .stdout(predicate::str::contains("key not found!"));

    assert!(fixture.server.submissions().is_empty());
    assert_eq!(fixture.server.versions(&scope()), vec![1, 2, 3]);
    Ok(())
}

#[test]
fn test_unset_on_unknown_scope_reports_missing_key() -> Result<()> {
    let fixture = CliTestFixture::new()?;

    fixture
        .configuration(&with_scope(&["unset", "--key", "A"]))
        .assert()
        .success()
        .stderr(predicate::str::contains("HTTP Error 404"))
        .stdout("key not found!\n");

    assert!(fixture.server.submissions().is_empty());
    Ok(())
}

#[test]
fn test_unset_present_key_removes_only_that_key() -> Result<()> {
    let fixture = CliTestFixture::new()?;
    fixture
        .server
        .seed(&scope(), mapping(&[("A", "1"), ("B", "2"), ("C", "3")]));

    fixture
        .configuration(&with_scope(&["unset", "--key", "B"]))
        .assert()
        .success()
        .stdout(predicate::str::contains("New Configuration Created"));

    let latest = fixture.server.latest(&scope()).expect("scope should exist");
    assert_eq!(latest.configuration, mapping(&[("A", "1"), ("C", "3")]));
    Ok(())
}

#[test]
fn test_rejected_submission_prints_server_envelope() -> Result<()> {
    let fixture = CliTestFixture::seeded()?;
    fixture.server.reject_submissions(422, "configuration is locked");

    fixture
        .configuration(&with_scope(&["set", "--key", "A", "--value", "1"]))
        .assert()
        .success()
        .stdout(predicate::str::contains("HTTP Error 422: configuration is locked"));

    assert_eq!(fixture.server.versions(&scope()), vec![1, 2, 3]);
    Ok(())
}

#[test]
fn test_set_on_unknown_scope_submits_nothing() -> Result<()> {
    let fixture = CliTestFixture::new()?;

    fixture
        .configuration(&with_scope(&["set", "--key", "A", "--value", "1"]))
        .assert()
        .success()
        .stderr(predicate::str::contains("HTTP Error 404"));

    assert!(fixture.server.submissions().is_empty());
    Ok(())
}

#[test]
fn test_update_without_changes_resubmits_fetched_mapping() -> Result<()> {
    let fixture = CliTestFixture::new()?;
    fixture
        .server
        .seed(&scope(), mapping(&[("TIMEOUT", "30"), ("RETRIES", "5")]));

    fixture
        .configuration(&with_scope(&["update"]))
        .write_stdin("N\nn\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Do you want to edit a key (Y/N): "))
        .stdout(predicate::str::contains("sending new data"))
        .stdout(predicate::str::contains("New Configuration Created"));

    assert_eq!(
        fixture.server.submissions(),
        vec![json!({"configuration": {"TIMEOUT": "30", "RETRIES": "5"}})]
    );
    Ok(())
}

#[test]
fn test_update_applies_edit_delete_and_add_phases() -> Result<()> {
    let fixture = CliTestFixture::new()?;
    fixture
        .server
        .seed(&scope(), mapping(&[("TIMEOUT", "30"), ("RETRIES", "5")]));

    let script = "y\nTIMEOUT\n60\ny\nNOPE\nN\ny\nRETRIES\nn\ny\nREGION\neu-west\nn\n";
    fixture
        .configuration(&with_scope(&["update"]))
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("key not found!"));

    let latest = fixture.server.latest(&scope()).expect("scope should exist");
    assert_eq!(latest.version, 2);
    assert_eq!(
        latest.configuration,
        mapping(&[("TIMEOUT", "60"), ("REGION", "eu-west")])
    );
    Ok(())
}

#[test]
fn test_update_with_closed_input_submits_nothing() -> Result<()> {
    let fixture = CliTestFixture::seeded()?;

    fixture
        .configuration(&with_scope(&["update"]))
        .write_stdin("y\nTIMEOUT\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("input closed"));

    assert!(fixture.server.submissions().is_empty());
    Ok(())
}

#[test]
fn test_update_from_configurations_flag_merges_without_prompting() -> Result<()> {
    let fixture = CliTestFixture::seeded()?;

    fixture
        .configuration(&with_scope(&[
            "update",
            "-c",
            r#"{"RETRIES":"5","TIMEOUT":"60"}"#,
        ]))
        .assert()
        .success()
        .stdout(predicate::str::contains("Do you want").not())
        .stdout(predicate::str::contains("New Configuration Created"));

    assert_eq!(
        fixture.server.submissions(),
        vec![json!({"configuration": {"TIMEOUT": "60", "RETRIES": "5"}})]
    );
    Ok(())
}

#[test]
fn test_update_with_invalid_configurations_fails_fast() -> Result<()> {
    let fixture = CliTestFixture::seeded()?;

    fixture
        .configuration(&with_scope(&["update", "--configurations", "TIMEOUT=60"]))
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Invalid configurations"));

    assert!(fixture.server.submissions().is_empty());
    Ok(())
}
