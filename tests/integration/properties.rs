//! Properties of arbitrary command sequences.

use lighthouse_foundation::Flag;
use lighthouse_runtime::Session;
use proptest::prelude::*;

const COMMANDS: &[&str] = &[
    "n", "s", "e", "w", "u", "d", "look", "dig", "i", "talk", "ring bell", "take rope",
    "take driftwood", "take apple", "take matches", "take oil", "take key", "take lens",
    "take coin", "take lantern", "take journal", "take mirror shard", "use apple", "use key",
    "use oil on lantern", "light lantern", "give coin to ghost", "install lens", "place mirror",
    "use lantern", "use driftwood", "read journal", "frobnicate", "",
];

fn command() -> impl Strategy<Value = &'static str> {
    (0..COMMANDS.len()).prop_map(|i| COMMANDS[i])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn items_stay_in_one_place(lines in prop::collection::vec(command(), 0..80)) {
        let mut session = Session::new();
        for line in lines {
            session.submit(line);
            prop_assert!(session.world().check_exclusivity().is_ok(), "after {:?}", line);
        }
    }

    #[test]
    fn flags_only_rise(lines in prop::collection::vec(command(), 0..80)) {
        let mut session = Session::new();
        for line in lines {
            let before: Vec<(Flag, bool)> = session.flags().collect();
            session.submit(line);
            for (flag, raised) in before {
                if raised {
                    prop_assert!(session.flag(flag), "{} lowered by {:?}", flag, line);
                }
            }
        }
    }

    #[test]
    fn winning_implies_every_piece(lines in prop::collection::vec(command(), 0..120)) {
        let mut session = Session::new();
        for line in lines {
            session.submit(line);
        }
        if session.is_won() {
            prop_assert!(session.flag(Flag::LighthouseLit));
            prop_assert!(session.flag(Flag::LensInstalled));
            prop_assert!(session.flag(Flag::MirrorPlaced));
            prop_assert!(session.flag(Flag::LanternLit));
        }
    }
}
