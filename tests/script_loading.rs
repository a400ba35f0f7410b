use std::error::Error;
use std::io::Write;
use std::path::Path;

use runlines::config::Variables;
use runlines::fs::RealFileSystem;
use runlines::fs::mock::MockFileSystem;
use runlines::script::{CommandLine, Script, ScriptLine, load_script};
use tempfile::NamedTempFile;

type TestResult = Result<(), Box<dyn Error>>;

fn vars(pairs: &[(&str, &str)]) -> Variables {
    let mut vars = Variables::new();
    for (name, value) in pairs {
        vars.insert(*name, *value);
    }
    vars
}

fn command_texts(script: &Script) -> Vec<&str> {
    script
        .lines()
        .iter()
        .filter_map(ScriptLine::command)
        .map(CommandLine::text)
        .collect()
}

#[test]
fn substitutes_variable_into_command() {
    let script = Script::from_lines(["ping HOST"], &vars(&[("HOST", "foo")]));
    assert_eq!(command_texts(&script), vec!["ping foo"]);
}

#[test]
fn substitution_also_hits_unrelated_words() {
    // Plain substring replacement: "HOSTNAME" contains "HOST".
    let script = Script::from_lines(["echo HOSTNAME HOST"], &vars(&[("HOST", "x")]));
    assert_eq!(command_texts(&script), vec!["echo xNAME x"]);
}

#[test]
fn bindings_apply_in_order_and_see_earlier_results() {
    let forward = vars(&[("A", "B"), ("B", "C")]);
    let script = Script::from_lines(["echo A"], &forward);
    assert_eq!(command_texts(&script), vec!["echo C"]);

    let backward = vars(&[("B", "C"), ("A", "B")]);
    let script = Script::from_lines(["echo A"], &backward);
    assert_eq!(command_texts(&script), vec!["echo B"]);
}

#[test]
fn lines_are_trimmed_before_substitution() {
    let script = Script::from_lines(["   echo hi \t", "\t", "  # note"], &Variables::new());
    assert_eq!(
        script.lines(),
        &[
            ScriptLine::Command(CommandLine::parse("echo hi")),
            ScriptLine::Blank,
            ScriptLine::Comment("# note".to_string()),
        ]
    );
    assert_eq!(script.command_count(), 1);
}

#[test]
fn classification_happens_after_substitution() {
    let script = Script::from_lines(["CMT disabled", "GONE"], &vars(&[("CMT", "#"), ("GONE", "")]));
    assert!(script.lines().iter().all(ScriptLine::is_skipped));
}

#[test]
fn command_is_split_on_first_space_only() {
    let cmd = CommandLine::parse("sh -c \"exit 2\"");
    assert_eq!(cmd.program(), "sh");
    assert_eq!(cmd.args(), Some("-c \"exit 2\""));
    assert_eq!(cmd.text(), "sh -c \"exit 2\"");

    let bare = CommandLine::parse("true");
    assert_eq!(bare.program(), "true");
    assert_eq!(bare.args(), None);
}

#[test]
fn missing_file_loads_as_empty_script() -> TestResult {
    let fs = MockFileSystem::new();
    let script = load_script(&fs, Path::new("nope.txt"), &Variables::new())?;
    assert!(script.is_empty());
    Ok(())
}

#[test]
fn loads_lines_from_mock_filesystem() -> TestResult {
    let fs = MockFileSystem::new();
    fs.add_file("lines.txt", "true\r\n\r\n#skip\r\nping HOST\r\n");

    let script = load_script(&fs, Path::new("lines.txt"), &vars(&[("HOST", "h1")]))?;
    assert_eq!(script.len(), 4);
    assert_eq!(command_texts(&script), vec!["true", "ping h1"]);
    Ok(())
}

#[test]
fn loads_lines_from_real_file() -> TestResult {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "echo one")?;
    writeln!(file, "# two")?;
    writeln!(file, "echo three")?;

    let script = load_script(&RealFileSystem, file.path(), &Variables::new())?;
    assert_eq!(command_texts(&script), vec!["echo one", "echo three"]);
    Ok(())
}

#[test]
fn missing_real_file_loads_as_empty_script() -> TestResult {
    let dir = tempfile::tempdir()?;
    let script = load_script(&RealFileSystem, &dir.path().join("absent.txt"), &Variables::new())?;
    assert!(script.is_empty());
    Ok(())
}

#[test]
fn invalid_utf8_is_decoded_lossily() -> TestResult {
    let fs = MockFileSystem::new();
    fs.add_file("lines.txt", b"echo ok\n\xffbad arg\n".to_vec());

    let script = load_script(&fs, Path::new("lines.txt"), &Variables::new())?;
    assert_eq!(script.len(), 2);
    assert_eq!(command_texts(&script), vec!["echo ok", "\u{fffd}bad arg"]);
    Ok(())
}
