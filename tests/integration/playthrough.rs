//! Scripted playthroughs.

use lighthouse_engine::narrative;
use lighthouse_foundation::{Flag, ItemId, RoomId};
use lighthouse_runtime::{Session, Step};

use crate::WALKTHROUGH;

fn session_after(lines: &[&str]) -> Session {
    let mut session = Session::new();
    for line in lines {
        session.submit(line);
    }
    session
}

#[test]
fn crab_then_cave() {
    let mut session = Session::new();
    session.submit("e");
    assert_eq!(session.current_room(), RoomId::Cliffs);

    session.submit("n");
    assert_eq!(session.current_room(), RoomId::Cliffs);
    assert!(session.message().contains("crab"));

    for line in ["w", "n", "e", "take apple", "w", "s", "e", "use apple"] {
        session.submit(line);
    }
    assert!(session.flag(Flag::CrabMoved));

    session.submit("go north");
    assert_eq!(session.current_room(), RoomId::Cave);
    assert_eq!(session.room_name(), "Sea Cave");
}

#[test]
fn take_then_take_again() {
    let session = session_after(&["take rope", "take rope"]);
    assert_eq!(session.message(), narrative::CANT_TAKE);
    assert_eq!(session.inventory().collect::<Vec<_>>(), vec![ItemId::Rope]);
    assert_eq!(session.turns(), 2);
}

#[test]
fn frobnicate_echoes() {
    let session = session_after(&["frobnicate the sky"]);
    assert_eq!(
        session.message(),
        "I don't understand 'frobnicate the sky'. Type HELP for commands."
    );
    assert_eq!(session.current_room(), RoomId::Beach);
}

#[test]
fn full_walkthrough_wins() {
    let mut session = Session::new();
    for (n, line) in WALKTHROUGH.iter().enumerate() {
        assert!(!session.is_won(), "won early at step {n}: {line}");
        assert_eq!(session.submit(line), Step::Continue, "{line}");
    }

    assert!(session.is_won());
    assert!(session.flag(Flag::LighthouseLit));
    assert_eq!(session.message(), narrative::ENDING);
    assert_eq!(session.current_room(), RoomId::LightChamber);
    assert_eq!(session.turns(), WALKTHROUGH.len() as u64);
    assert_eq!(session.inventory().collect::<Vec<_>>(), vec![ItemId::SmallKey, ItemId::Lantern]);
}

#[test]
fn after_the_win_only_quit_matters() {
    let mut session = session_after(WALKTHROUGH);
    assert_eq!(session.submit("d"), Step::Continue);
    assert_eq!(session.current_room(), RoomId::LightChamber);
    assert_eq!(session.message(), narrative::ENDING);

    assert_eq!(session.submit("quit"), Step::Quit);
    assert!(session.is_over());
    assert_eq!(session.message(), narrative::FAREWELL);
}

#[test]
fn no_win_without_lens_and_mirror() {
    let without_finale = &WALKTHROUGH[..WALKTHROUGH.len() - 3];
    let mut session = session_after(without_finale);
    session.submit("use lantern");
    assert!(!session.is_won());

    session.submit("place mirror");
    session.submit("use lantern");
    assert!(!session.is_won());

    session.submit("install lens");
    session.submit("use lantern");
    assert!(session.is_won());
}

#[test]
fn scene_reflects_the_session() {
    let session = session_after(&["dig", "n"]);
    let scene = session.scene();
    assert_eq!(scene.room, RoomId::Path);
    assert_eq!(scene.room_name, "Winding Path");
    assert_eq!(scene.inventory, vec![ItemId::MirrorShard]);
    assert_eq!(scene.turns, 2);
    assert!(!scene.ended);
    assert_eq!(scene.flags.len(), Flag::ALL.len());

    let toml = toml::to_string(&scene).unwrap();
    assert!(toml.contains("room_name = \"Winding Path\""));
    assert!(toml.contains("game_won = false"));
}
