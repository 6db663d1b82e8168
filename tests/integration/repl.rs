//! REPL runs driven by scripts.

use lighthouse_runtime::{GameConfig, Repl, ScriptEditor, Session};

use crate::WALKTHROUGH;

fn run(lines: &[&str], config: GameConfig) -> String {
    let editor = ScriptEditor::from_lines(lines.iter().copied());
    let mut repl = Repl::with_editor(editor, Session::new(), config).with_output(Vec::new());
    repl.run().unwrap();
    String::from_utf8(repl.output().clone()).unwrap()
}

#[test]
fn script_replays_and_echoes() {
    let config = GameConfig::default().with_banner(false).with_wrap_width(0);
    let text = run(&["# comment", "take rope", "n"], config);
    assert!(text.contains("> take rope\nYou take the rope."));
    assert!(text.contains("Winding Path"));
    assert!(!text.contains("# comment"));
}

#[test]
fn scripted_walkthrough_reaches_the_ending() {
    let config = GameConfig::default().with_banner(false).with_wrap_width(0);
    let text = run(WALKTHROUGH, config);
    assert!(text.contains("*** CONGRATULATIONS! YOU HAVE COMPLETED THE LIGHTHOUSE OF FORGOTTEN SOULS! ***"));
    assert!(text.contains("Light Chamber"));
}

#[test]
fn wrapping_respects_width() {
    let config = GameConfig::default().with_banner(false).with_wrap_width(40);
    let text = run(&["look"], config);
    for line in text.lines().filter(|l| !l.contains('\x1b')) {
        assert!(line.chars().count() <= 40, "{line:?}");
    }
}

#[test]
fn quit_ends_the_script_early() {
    let config = GameConfig::default().with_banner(false);
    let text = run(&["quit", "take rope"], config);
    assert!(text.contains("Farewell, Morgan."));
    assert!(!text.contains("You take the rope."));
}
