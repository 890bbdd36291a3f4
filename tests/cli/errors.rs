use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::{APP_BASE, CliTest, resources};

#[test]
fn test_base_without_locale_glob() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().args(["--base", "x.xml"]), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    Error: --base and --locale-glob must be provided together
    ");

    Ok(())
}

#[test]
fn test_locale_glob_without_base() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().args(["--locale-glob", "y/*.xml"]), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    Error: --base and --locale-glob must be provided together
    ");

    Ok(())
}

#[test]
fn test_missing_base_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_app_locale("values-es", &resources(&[("string", "a")]))?;

    assert_cmd_snapshot!(test.command().args(["--project", "app"]), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    Error: Base strings file not found: app/src/main/res/values/strings.xml
    ");

    Ok(())
}

#[test]
fn test_no_locale_files() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(APP_BASE, &resources(&[("string", "a")]))?;

    assert_cmd_snapshot!(test.command().args(["--project", "app"]), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    Error: No locale files matched for project 'app' with glob 'app/src/main/res/values-*/strings.xml'.
    ");

    Ok(())
}

#[test]
fn test_locale_filter_matching_nothing() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(APP_BASE, &resources(&[("string", "a")]))?;
    test.write_app_locale("values-es", &resources(&[("string", "a")]))?;

    assert_cmd_snapshot!(test.command().args(["--project", "app", "--locales", "values-fr"]), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    Error: No locale files matched for project 'app' with glob 'app/src/main/res/values-*/strings.xml'.
    ");

    Ok(())
}

#[test]
fn test_later_target_failure_prints_no_partial_report() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(APP_BASE, &resources(&[("string", "a")]))?;
    test.write_app_locale("values-es", &resources(&[]))?;

    // `shared` has no base file, so `--project all` aborts on the second target.
    assert_cmd_snapshot!(test.command().args(["--project", "all"]), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    Error: Base strings file not found: shared/src/commonMain/composeResources/values/strings.xml
    ");

    Ok(())
}

#[test]
fn test_wrong_root_element() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(APP_BASE, &resources(&[("string", "a")]))?;
    test.write_app_locale(
        "values-es",
        r#"<manifest><string name="a">A</string></manifest>"#,
    )?;

    assert_cmd_snapshot!(test.command().args(["--project", "app"]), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    Error: Failed to parse resource file: app/src/main/res/values-es/strings.xml: Root element is <manifest>, expected <resources>
    ");

    Ok(())
}

#[test]
fn test_malformed_base() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(APP_BASE, "<resources><string name=\"a\">")?;
    test.write_app_locale("values-es", &resources(&[]))?;

    assert_cmd_snapshot!(test.command().args(["--project", "app"]), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    Error: Failed to parse resource file: app/src/main/res/values/strings.xml: Unexpected end of document: 2 unclosed element(s)
    ");

    Ok(())
}

#[test]
fn test_bare_ampersand_in_locale() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(APP_BASE, &resources(&[("string", "a")]))?;
    test.write_app_locale(
        "values-es",
        "<resources>\n    <string name=\"a\">Tom & Jerry</string>\n</resources>\n",
    )?;

    assert_cmd_snapshot!(test.command().args(["--project", "app"]), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    Error: Failed to parse resource file: app/src/main/res/values-es/strings.xml: Invalid character data: Error while escaping character at range 4..11: Cannot find ';' after '&'
    ");

    Ok(())
}

#[test]
fn test_undefined_entity_in_locale() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(APP_BASE, &resources(&[("string", "a")]))?;
    test.write_app_locale(
        "values-es",
        "<resources>\n    <string name=\"a\">x &bogus; y</string>\n</resources>\n",
    )?;

    assert_cmd_snapshot!(test.command().args(["--project", "app"]), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    Error: Failed to parse resource file: app/src/main/res/values-es/strings.xml: Invalid character data: at 3..8: unrecognized entity `bogus`
    ");

    Ok(())
}

#[test]
fn test_invalid_project_value() -> Result<()> {
    let test = CliTest::new()?;

    // Keep clap's first line only; the rest of its usage hint is not ours.
    insta::with_settings!({filters => [(r"(?s)(error: invalid value [^\n]*)\n.*", "$1")]}, {
        assert_cmd_snapshot!(test.command().args(["--project", "wear"]), @r"
        success: false
        exit_code: 1
        ----- stdout -----

        ----- stderr -----
        error: invalid value 'wear' for '--project <PROJECT>'
        ");
    });

    Ok(())
}
