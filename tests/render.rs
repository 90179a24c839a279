// tests/render.rs

use runall::render::{
    FAILURE_GLYPH, Renderer, SPINNER_FRAMES, SUCCESS_GLYPH, WrapWidth, build_frame, screen_rows,
};
use runall::report::{BANNER_TITLE, report_failures};
use runall::status::{CommandId, CommandStatus, StatusLine};

fn line(id: usize, command: &str, status: CommandStatus) -> StatusLine {
    StatusLine {
        id: CommandId(id),
        command: command.to_string(),
        status,
    }
}

fn failed(code: i32, stderr: &str) -> CommandStatus {
    CommandStatus::Failed {
        exit_code: code,
        stderr: stderr.to_string(),
    }
}

fn sample() -> Vec<StatusLine> {
    vec![
        line(0, "cargo build", CommandStatus::Succeeded),
        line(1, "cargo test", CommandStatus::Pending),
        line(2, "cargo clippy", failed(101, "error: lint")),
    ]
}

#[test]
fn frame_has_one_line_per_entry_in_order() {
    let lines = build_frame(&sample(), 0, false);

    assert_eq!(
        lines,
        vec![
            format!("{SUCCESS_GLYPH} cargo build"),
            format!("{} cargo test", SPINNER_FRAMES[0]),
            format!("{FAILURE_GLYPH} cargo clippy"),
        ]
    );
}

#[test]
fn spinner_advances_with_tick_and_wraps() {
    let snapshot = vec![line(0, "sleep 1", CommandStatus::Pending)];

    assert_eq!(build_frame(&snapshot, 1, false)[0], format!("{} sleep 1", SPINNER_FRAMES[1]));
    assert_eq!(
        build_frame(&snapshot, SPINNER_FRAMES.len(), false)[0],
        format!("{} sleep 1", SPINNER_FRAMES[0])
    );
}

#[test]
fn styled_frame_keeps_command_text() {
    let lines = build_frame(&sample(), 0, true);

    assert_eq!(lines.len(), 3);
    assert!(lines[0].ends_with(" cargo build"));
    assert!(lines[2].ends_with(" cargo clippy"));
}

#[test]
fn first_draw_writes_plain_lines() {
    let mut renderer = Renderer::new(Vec::new(), false);
    renderer.draw(&["a".to_string(), "b".to_string()]).unwrap();

    assert_eq!(renderer.drawn_rows(), 2);
    assert_eq!(renderer.into_inner(), b"a\nb\n");
}

#[test]
fn later_draws_overwrite_the_previous_block() {
    let mut renderer = Renderer::new(Vec::new(), false);
    renderer.draw(&["a".to_string(), "b".to_string()]).unwrap();
    renderer.draw(&["c".to_string(), "d".to_string()]).unwrap();

    let written = String::from_utf8(renderer.into_inner()).unwrap();
    assert_eq!(written, "a\nb\n\u{1b}[2F\u{1b}[Jc\nd\n");
}

#[test]
fn multiline_command_is_overwritten_by_its_row_count() {
    let snapshot = vec![line(0, "echo a\necho b", CommandStatus::Pending)];
    let mut renderer = Renderer::new(Vec::new(), false);
    renderer.draw_snapshot(&snapshot).unwrap();
    assert_eq!(renderer.drawn_rows(), 2);
    renderer.draw_snapshot(&snapshot).unwrap();

    let written = String::from_utf8(renderer.into_inner()).unwrap();
    assert_eq!(
        written,
        format!(
            "{} echo a\necho b\n\u{1b}[2F\u{1b}[J{} echo a\necho b\n",
            SPINNER_FRAMES[0], SPINNER_FRAMES[1]
        )
    );
}

#[test]
fn wrapped_lines_count_every_screen_row() {
    let long = "x".repeat(25);
    let mut renderer = Renderer::new(Vec::new(), false).with_wrap(WrapWidth::Columns(10));
    renderer.draw(&[long.clone(), "short".to_string()]).unwrap();
    assert_eq!(renderer.drawn_rows(), 4);

    renderer.draw(&["done".to_string()]).unwrap();
    assert_eq!(renderer.drawn_rows(), 1);

    let written = String::from_utf8(renderer.into_inner()).unwrap();
    assert!(written.ends_with("\u{1b}[4F\u{1b}[Jdone\n"));
}

#[test]
fn row_count_ignores_escape_sequences() {
    assert_eq!(screen_rows("", Some(5)), 1);
    assert_eq!(screen_rows("abcde", Some(5)), 1);
    assert_eq!(screen_rows("abcdef", Some(5)), 2);
    assert_eq!(screen_rows("\u{1b}[38;5;10m✔\u{1b}[39m abc", Some(5)), 1);
    assert_eq!(screen_rows("a\nbcdefghijk", Some(5)), 3);
    assert_eq!(screen_rows("a\nbcdefghijk", None), 2);
}

#[test]
fn draw_snapshot_advances_spinner() {
    let snapshot = vec![line(0, "sleep 1", CommandStatus::Pending)];
    let mut renderer = Renderer::new(Vec::new(), false);
    renderer.draw_snapshot(&snapshot).unwrap();
    renderer.draw_snapshot(&snapshot).unwrap();

    let written = String::from_utf8(renderer.into_inner()).unwrap();
    assert!(written.starts_with(&format!("{} sleep 1\n", SPINNER_FRAMES[0])));
    assert!(written.ends_with(&format!("{} sleep 1\n", SPINNER_FRAMES[1])));
}

#[test]
fn report_is_empty_when_nothing_failed() {
    let snapshot = vec![
        line(0, "true", CommandStatus::Succeeded),
        line(1, "true", CommandStatus::Succeeded),
    ];
    let mut out = Vec::new();

    assert_eq!(report_failures(&mut out, &snapshot, false).unwrap(), 0);
    assert!(out.is_empty());
}

#[test]
fn report_lists_failures_with_code_and_stderr() {
    let snapshot = vec![
        line(0, "make", failed(2, "make: *** No targets.\n")),
        line(1, "true", CommandStatus::Succeeded),
        line(2, "false", failed(1, "")),
    ];
    let mut out = Vec::new();

    assert_eq!(report_failures(&mut out, &snapshot, false).unwrap(), 2);

    let text = String::from_utf8(out).unwrap();
    assert_eq!(
        text,
        format!(
            "\n{BANNER_TITLE}---------------\n\
             \nmake (Exit code 2):\n\nmake: *** No targets.\n\
             \nfalse (Exit code 1)\n\
             \n-------------------------------\n"
        )
    );
}
