use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::CliTest;

const PO: &str = "msgid \"Open %s...\"\nmsgstr \"\tÖffnen %s \\n\"\n";

fn headlines(stdout: &str) -> Vec<&str> {
    stdout.lines().filter(|line| line.contains(" -- ")).collect()
}

#[test]
fn test_enable_checks() -> Result<()> {
    let test = CliTest::with_file("de.po", PO)?;

    let output = test.run(&["-e", "t", "-e", "i", "de.po"])?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains(
        "#  i: mismatched trailing ellipses (..., <ellipsis>)\n#  t: tab characters\n#\n"
    ));
    assert_eq!(
        headlines(&output.stdout),
        vec![
            "de.po: -- Potential mismatch: too few trailing ellipses - expected 1, got 0",
            "de.po: -- Found tab character(s): [\"\\t\"]",
        ]
    );

    Ok(())
}

#[test]
fn test_disable_checks() -> Result<()> {
    let test = CliTest::with_file("de.po", PO)?;

    let output = test.run(&["-d", "al", "de.po"])?;

    assert_eq!(output.code, Some(1));
    assert!(!output.stdout.contains("#  a:"));
    assert!(!output.stdout.contains("#  l:"));
    assert_eq!(
        headlines(&output.stdout),
        vec![
            "de.po: -- Potential mismatch: too many escape sequences - expected [], got [\"\\\\n\"]",
            "de.po: -- Potential mismatch: too few trailing ellipses - expected 1, got 0",
            "de.po: -- Potential mismatch: too many occurrences of leading/trailing whitespace - expected [], got [\"\\t\"]",
            "de.po: -- Found tab character(s): [\"\\t\"]",
        ]
    );

    Ok(())
}

#[test]
fn test_default_checks() -> Result<()> {
    let test = CliTest::with_file("de.po", PO)?;

    let output = test.run(&["de.po"])?;

    assert_eq!(
        headlines(&output.stdout),
        vec!["de.po: -- Found space-linebreak escape sequence combination(s): [\" \\\\n\"]"]
    );
    assert!(output.stdout.ends_with("de.po:2: msgstr \"\tÖffnen %s \\n\"\n"));

    Ok(())
}

#[test]
fn test_all_checks() -> Result<()> {
    let test = CliTest::with_file("de.po", PO)?;

    let output = test.run(&["--all-checks", "de.po"])?;

    assert_eq!(output.code, Some(1));
    let ids: Vec<&str> = output
        .stdout
        .lines()
        .filter_map(|line| line.strip_prefix("#  "))
        .filter_map(|line| line.get(..1))
        .collect();
    assert_eq!(ids, vec!["a", "e", "f", "i", "l", "s", "t", "w"]);

    Ok(())
}

#[test]
fn test_invalid_check() -> Result<()> {
    let test = CliTest::with_file("de.po", PO)?;

    assert_cmd_snapshot!(test.check_command(&["-e", "fxz", "de.po"]), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    Error: Invalid check selection: invalid check(s): xz
    ");

    Ok(())
}

#[test]
fn test_mutually_exclusive_flags() -> Result<()> {
    let test = CliTest::with_file("de.po", PO)?;

    assert_cmd_snapshot!(test.check_command(&["-a", "-d", "t", "de.po"]), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    Error: Invalid check selection: -a, -e and -d are mutually exclusive
    ");

    Ok(())
}

#[test]
fn test_empty_enable_list() -> Result<()> {
    let test = CliTest::with_file("de.po", PO)?;

    assert_cmd_snapshot!(test.check_command(&["--enable=", "de.po"]), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    Error: Invalid check selection: no checks to be processed
    ");

    Ok(())
}

#[test]
fn test_no_files_is_usage_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&[])?;

    assert_eq!(output.code, Some(1));
    assert!(output.stderr.contains("Usage"));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["--help"])?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Available checks: Find..."));
    assert!(output.stdout.contains("  s* double spaces"));
    assert!(output.stdout.contains("  w  mismatched leading/trailing whitespace (space, tab)"));

    Ok(())
}

#[test]
fn test_summary() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("de.po", "msgid \"%s\"\nmsgstr \"x  y\"\n")?;
    test.write_file("fr.po", "broken\n")?;

    assert_cmd_snapshot!(test.check_command(&["-s", "de.po", "fr.po"]), @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    # Encoding: UTF-8
    #
    # Enabled checks: Find...
    #  f: mismatched format specifiers (%<arbitrary character>)
    #  l: space-linebreak escape sequence combinations ( <\n or \r>)
    #  s: double spaces
    #

    de.po: -- Potential mismatch: too few format specifiers - expected ["%s"], got []
    de.po:1: msgid "%s"
    de.po:2: msgstr "x  y"

    de.po: -- Found double space(s): ["  "]
    de.po:1: msgid "%s"
    de.po:2: msgstr "x  y"

    fr.po: -- Parsing error. Invalid PO file?
    fr.po:1: broken

    # Summary
    File   f  l  s  total
    de.po  1  0  1      2
    fr.po  skipped
    Total  1  0  1      2

    # Note: items are extracted with simplified patterns, so these counts may
    # include false positives and miss real mismatches.

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_config_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".pocheckrc.json",
        r#"{ "ignores": ["**/templates/**"], "summary": true }"#,
    )?;
    test.write_file("po/de.po", "msgid \"a\"\nmsgstr \"b\"\n")?;
    test.write_file("po/templates/broken.po", "broken\n")?;

    let output = test.run(&["-v", "po"])?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("# Summary\n"));
    assert!(!output.stdout.contains("broken"));
    assert!(output.stderr.contains("using config "));
    assert!(output.stderr.contains("checked po/de.po: 1 entry, 0 findings"));

    Ok(())
}

#[test]
fn test_invalid_config_is_fatal() -> Result<()> {
    let test = CliTest::with_file("de.po", PO)?;
    test.write_file(".pocheckrc.json", r#"{ "ignores": ["[oops"] }"#)?;

    let output = test.run(&["de.po"])?;

    assert_eq!(output.code, Some(1));
    assert_eq!(output.stdout, "");
    assert!(output.stderr.contains("Invalid glob pattern in 'ignores'"));

    Ok(())
}
