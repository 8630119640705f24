use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::CliTest;

const CLEAN_PO: &str = r#"msgid ""
msgstr ""
"Content-Type: text/plain; charset=UTF-8\n"

msgid "%s saved"
msgstr "%s gespeichert"
"#;

const MISMATCHED_PO: &str = r#"msgid ""
msgstr ""
"Content-Type: text/plain; charset=UTF-8\n"

#: src/main.c:10
msgid "%s saved %d files"
msgstr "%d Dateien  gespeichert"
"#;

#[test]
fn test_clean_file() -> Result<()> {
    let test = CliTest::with_file("de.po", CLEAN_PO)?;

    assert_cmd_snapshot!(test.check_command(&["de.po"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    # Encoding: UTF-8
    #
    # Enabled checks: Find...
    #  f: mismatched format specifiers (%<arbitrary character>)
    #  l: space-linebreak escape sequence combinations ( <\n or \r>)
    #  s: double spaces
    #

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_findings() -> Result<()> {
    let test = CliTest::with_file("de.po", MISMATCHED_PO)?;

    assert_cmd_snapshot!(test.check_command(&["de.po"]), @r#"
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

    de.po: -- Potential mismatch: too few format specifiers - expected ["%s", "%d"], got ["%d"]
    de.po:6: msgid "%s saved %d files"
    de.po:7: msgstr "%d Dateien  gespeichert"

    de.po: -- Found double space(s): ["  "]
    de.po:6: msgid "%s saved %d files"
    de.po:7: msgstr "%d Dateien  gespeichert"

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_multiline_strings_report_first_line() -> Result<()> {
    let test = CliTest::with_file(
        "de.po",
        "msgid \"\"\n\"Hello %s\"\nmsgstr \"\"\n\"Hallo\"\n",
    )?;

    assert_cmd_snapshot!(test.check_command(&["-e", "f", "de.po"]), @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    # Encoding: UTF-8
    #
    # Enabled checks: Find...
    #  f: mismatched format specifiers (%<arbitrary character>)
    #

    de.po: -- Potential mismatch: too few format specifiers - expected ["%s"], got []
    de.po:1: msgid "Hello %s"
    de.po:3: msgstr "Hallo"

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_carriage_return_line_endings() -> Result<()> {
    let test = CliTest::with_file("mac.po", "msgid \"%s saved\"\rmsgstr \"gespeichert\"\r")?;

    let output = test.run(&["-e", "f", "mac.po"])?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.ends_with(
        "mac.po: -- Potential mismatch: too few format specifiers - expected [\"%s\"], got []\n\
         mac.po:1: msgid \"%s saved\"\n\
         mac.po:2: msgstr \"gespeichert\"\n"
    ));

    Ok(())
}

#[test]
fn test_parse_error_skips_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("a.po", "msgid \"a\"\nnot a po line\n")?;
    test.write_file("b.po", "msgid \"a\"\nmsgstr \"b  c\"\n")?;

    assert_cmd_snapshot!(test.check_command(&["-e", "s", "b.po", "a.po"]), @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    # Encoding: UTF-8
    #
    # Enabled checks: Find...
    #  s: double spaces
    #

    a.po: -- Parsing error. Invalid PO file?
    a.po:2: not a po line

    b.po: -- Found double space(s): ["  "]
    b.po:1: msgid "a"
    b.po:2: msgstr "b  c"

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_fuzzy_entries_are_not_checked() -> Result<()> {
    let test = CliTest::with_file(
        "de.po",
        "#, fuzzy\nmsgid \"%s saved\"\nmsgstr \"gespeichert\"\n",
    )?;

    assert_cmd_snapshot!(test.check_command(&["-e", "f", "de.po"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    # Encoding: UTF-8
    #
    # Enabled checks: Find...
    #  f: mismatched format specifiers (%<arbitrary character>)
    #

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_directory_input() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("po/fr.po", "msgid \"a  b\"\nmsgstr \"a  b\"\n")?;
    test.write_file("po/de.po", "msgid \"a b\"\nmsgstr \"a  b\"\n")?;
    test.write_file("po/README.txt", "not a catalog")?;

    assert_cmd_snapshot!(test.check_command(&["-e", "s", "po", "./po/de.po"]), @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    # Encoding: UTF-8
    #
    # Enabled checks: Find...
    #  s: double spaces
    #

    po/de.po: -- Found double space(s): ["  "]
    po/de.po:1: msgid "a b"
    po/de.po:2: msgstr "a  b"

    po/fr.po: -- Found double space(s): ["  "]
    po/fr.po:1: msgid "a  b"
    po/fr.po:2: msgstr "a  b"

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_repeated_runs_print_identical_output() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("po/de.po", MISMATCHED_PO)?;
    test.write_file("po/fr.po", "msgid \"%s of %d\"\nmsgstr \"%d de %s\"\n")?;
    test.write_file("po/nl.po", "broken\n")?;
    test.write_file("po/sub/pt.po", "msgid \"a\\n\"\nmsgstr \"\\ta\"\n")?;

    let args = ["-a", "-s", "po"];
    let first = test.run(&args)?;
    let second = test.run(&args)?;

    assert_eq!(first.code, Some(1));
    assert!(first.stdout.contains("# Summary"));
    assert_eq!(first.stdout.as_bytes(), second.stdout.as_bytes());
    assert_eq!(first.stderr, second.stderr);

    Ok(())
}

#[test]
fn test_missing_file_is_fatal() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["missing.po"])?;

    assert_eq!(output.code, Some(1));
    assert_eq!(output.stdout, "");
    assert!(output.stderr.starts_with("Error: Cannot read file \"missing.po\""));

    Ok(())
}

#[test]
fn test_byte_order_mark_is_stripped() -> Result<()> {
    let test = CliTest::new()?;
    test.write_bytes("de.po", b"\xef\xbb\xbfmsgid \"a\"\nmsgstr \"b\"\n")?;

    assert_cmd_snapshot!(test.check_command(&["-e", "s", "de.po"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    # Encoding: UTF-8
    #
    # Enabled checks: Find...
    #  s: double spaces
    #

    ----- stderr -----
    warning: de.po: ignoring byte-order mark at the start of the file
    ");

    Ok(())
}

#[test]
fn test_byte_order_mark_rejected() -> Result<()> {
    let test = CliTest::new()?;
    test.write_bytes("de.po", b"\xef\xbb\xbfmsgid \"a\"\nmsgstr \"b\"\n")?;

    assert_cmd_snapshot!(test.check_command(&["--reject-bom", "-e", "s", "de.po"]), @r"
    success: false
    exit_code: 1
    ----- stdout -----
    # Encoding: UTF-8
    #
    # Enabled checks: Find...
    #  s: double spaces
    #

    de.po: -- Skipped: unexpected byte-order mark

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_directory_without_catalogs() -> Result<()> {
    let test = CliTest::with_file("po/README.txt", "no catalogs here")?;

    assert_cmd_snapshot!(test.check_command(&["-e", "s", "po"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    # Encoding: UTF-8
    #
    # Enabled checks: Find...
    #  s: double spaces
    #

    ----- stderr -----
    warning: no PO files to check
    ");

    Ok(())
}
