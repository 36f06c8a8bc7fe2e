//! End-to-end tests that spawn the real binary and drive it over stdin.

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_with_input(input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_bindsheet"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn bindsheet");
    child
        .stdin
        .as_mut()
        .expect("stdin handle")
        .write_all(input.as_bytes())
        .expect("failed to write stdin");
    child.wait_with_output().expect("failed to wait for bindsheet")
}

#[test]
fn empty_forest_produces_bare_skeleton() {
    let output = run_with_input("[]");
    assert!(
        output.status.success(),
        "expected success: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "<!DOCTYPE html>\n\
         <head>\n\
         <link rel=\"stylesheet\" href=\"style.css\" />\n\
         </head>\n\
         <body>\n\
         \n\
         </body>\n\
         <html>\n"
    );
}

#[test]
fn single_bind_renders_exact_document() {
    let input = r#"[{
        "chord": {"modifiers": 5, "key": "g"},
        "output": "  run\nthing  ",
        "action": "None"
    }]"#;
    let output = run_with_input(input);
    assert!(output.status.success());

    let expected_body = concat!(
        "<div class=\"Bind\">    ",
        "   <div class=\"Chord\">",
        "    <span class=\"Chord__key\">shift</span>",
        "    <span class=\"Chord__key\">ctrl</span>",
        "    <span class=\"Chord__key\">g</span> </div>",
        "    <span class=\"Bind__output\">        <pre>runthing</pre>    </span></div>",
    );
    let expected = format!(
        "<!DOCTYPE html>\n<head>\n<link rel=\"stylesheet\" href=\"style.css\" />\n</head>\n<body>\n{expected_body}\n</body>\n<html>\n"
    );
    assert_eq!(String::from_utf8_lossy(&output.stdout), expected);
}

#[test]
fn nested_mode_is_absent_from_root_fragment() {
    let input = r#"[{
        "chord": {"modifiers": 64, "key": "w"},
        "output": null,
        "action": {"EnterMode": {"binds": [
            {"chord": {"modifiers": 0, "key": "h"}, "output": "focus left", "action": "None"}
        ]}}
    }]"#;
    let output = run_with_input(input);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(">w</span>"));
    // Absent output interpolates the pinned placeholder
    assert!(stdout.contains("<pre>None</pre>"));
    // The mode's own binds are never part of the owning bind's fragment
    assert!(!stdout.contains("EnterMode"));
    assert!(!stdout.contains("focus left"));
}

#[test]
fn root_binds_render_in_input_order() {
    let input = r#"[
        {"chord": {"modifiers": 0, "key": "a"}, "output": "first", "action": "None"},
        {"chord": {"modifiers": 0, "key": "b"}, "output": "second", "action": "None"}
    ]"#;
    let output = run_with_input(input);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let first = stdout.find("first").expect("first bind");
    let second = stdout.find("second").expect("second bind");
    assert!(first < second);
}

#[test]
fn malformed_syntax_fails_with_decode_exit_code() {
    let output = run_with_input("[{");
    assert_eq!(output.status.code(), Some(2));
    assert!(
        output.stdout.is_empty(),
        "no partial HTML may be produced on decode failure"
    );
    assert!(String::from_utf8_lossy(&output.stderr).contains("error:"));
}

#[test]
fn unknown_action_discriminant_fails() {
    let input =
        r#"[{"chord": {"modifiers": 0, "key": "x"}, "output": null, "action": "Something"}]"#;
    let output = run_with_input(input);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}

#[test]
fn missing_key_field_fails() {
    let input = r#"[{"chord": {"modifiers": 0}, "output": null, "action": "None"}]"#;
    let output = run_with_input(input);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}

#[test]
fn rendering_is_reproducible_across_runs() {
    let input = r#"[
        {"chord": {"modifiers": 7, "key": "Esc"}, "output": "  exit\nmode  ", "action": "None"}
    ]"#;
    let first = run_with_input(input);
    let second = run_with_input(input);
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn quiet_flag_still_renders() {
    let output = {
        let mut child = Command::new(env!("CARGO_BIN_EXE_bindsheet"))
            .arg("--quiet")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("failed to spawn bindsheet");
        child
            .stdin
            .as_mut()
            .expect("stdin handle")
            .write_all(b"[]")
            .expect("failed to write stdin");
        child.wait_with_output().expect("failed to wait for bindsheet")
    };
    assert!(output.status.success());
    assert!(
        String::from_utf8_lossy(&output.stdout).starts_with("<!DOCTYPE html>")
    );
}
