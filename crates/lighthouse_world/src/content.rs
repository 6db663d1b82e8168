//! Hand-authored game content.
//!
//! Everything here is `'static` and never mutated. The mutable parts of a
//! session (which items are still lying where, what the player carries, which
//! flags are raised) live in [`crate::WorldState`].

use lighthouse_foundation::{Direction, Flag, ItemId, RoomId};

/// Static definition of a room.
#[derive(Debug)]
pub struct RoomDef {
    /// Room identifier
    pub id: RoomId,
    /// Display name shown by front ends
    pub name: &'static str,
    /// Long description, shown on entry and on `look`
    pub description: &'static str,
    /// Outgoing exits
    pub exits: &'static [(Direction, RoomId)],
    /// Items lying in the room at the start of a session
    pub items: &'static [ItemId],
    /// Items hidden in the room until dug up
    pub buried: &'static [ItemId],
    /// Examinable nouns (underscore keys) and their text
    pub examine: &'static [(&'static str, &'static str)],
}

impl RoomDef {
    /// Returns the destination of the exit in `direction`, if any.
    #[must_use]
    pub fn exit(&self, direction: Direction) -> Option<RoomId> {
        self.exits
            .iter()
            .find(|(dir, _)| *dir == direction)
            .map(|(_, to)| *to)
    }

    /// Returns the examine text for a key (spaces already replaced by underscores).
    #[must_use]
    pub fn examine_text(&self, key: &str) -> Option<&'static str> {
        self.examine
            .iter()
            .find(|(noun, _)| *noun == key)
            .map(|(_, text)| *text)
    }
}

/// A description suffix that depends on a flag.
#[derive(Debug)]
pub struct FlagVariant {
    /// The flag consulted
    pub flag: Flag,
    /// Suffix while the flag is raised
    pub raised: &'static str,
    /// Suffix while the flag is lowered
    pub lowered: &'static str,
}

/// Static definition of an item.
#[derive(Debug)]
pub struct ItemDef {
    /// Item identifier
    pub id: ItemId,
    /// Description shown when examining the carried item
    pub description: &'static str,
    /// Flag-dependent suffix appended to the description
    pub variant: Option<FlagVariant>,
    /// Extra words `take` accepts for this item
    pub aliases: &'static [&'static str],
}

impl ItemDef {
    /// Renders the description given a flag lookup.
    pub fn describe(&self, is_raised: impl Fn(Flag) -> bool) -> String {
        match &self.variant {
            Some(v) if is_raised(v.flag) => format!("{} {}", self.description, v.raised),
            Some(v) => format!("{} {}", self.description, v.lowered),
            None => self.description.to_string(),
        }
    }
}

/// A movement blocked until a flag is raised.
#[derive(Debug)]
pub struct Gate {
    /// Room the player stands in
    pub room: RoomId,
    /// Direction being attempted
    pub direction: Direction,
    /// Flag that opens the gate
    pub opened_by: Flag,
    /// Refusal while the gate is shut
    pub refusal: &'static str,
}

/// The room where every session starts.
pub const START_ROOM: RoomId = RoomId::Beach;

/// The message shown before the first command.
pub const OPENING: &str = "You awaken on a cold, misty beach. Waves crash nearby. A dark lighthouse looms to the north.";

/// All rooms, in [`RoomId::ALL`] order.
pub static ROOMS: [RoomDef; 10] = [
    RoomDef {
        id: RoomId::Beach,
        name: "Shipwreck Beach",
        description: "A desolate beach littered with driftwood and ship debris. The skeleton of your ship lies half-buried in sand. To the north, a worn path leads uphill toward a lighthouse. Rocky cliffs stretch east.",
        exits: &[(Direction::North, RoomId::Path), (Direction::East, RoomId::Cliffs)],
        items: &[ItemId::Driftwood, ItemId::Rope],
        buried: &[ItemId::MirrorShard],
        examine: &[
            ("ship", "The wreckage of the \"Maiden's Hope\". Your crew... you hope they made it somewhere safe."),
            ("driftwood", "Weathered wood from countless shipwrecks. One piece looks sturdy enough to use."),
            ("rope", "A length of good rope, still strong despite the saltwater."),
            ("sand", "Cold, gray sand. Something glints beneath the surface near the waterline."),
            ("water", "The sea churns endlessly, gray and unforgiving."),
        ],
    },
    RoomDef {
        id: RoomId::Cliffs,
        name: "Rocky Cliffs",
        description: "Jagged cliffs overlook the churning sea. A narrow ledge leads to a cave entrance, but a large aggressive crab blocks the way. Seagulls cry overhead.",
        exits: &[(Direction::West, RoomId::Beach), (Direction::North, RoomId::Cave)],
        items: &[],
        buried: &[],
        examine: &[
            ("crab", "A massive red crab with claws that could snap bone. It snaps menacingly when you approach the cave."),
            ("cave", "A dark opening in the cliff face. You can't reach it with that crab there."),
            ("ledge", "A narrow ledge, slippery with sea spray."),
            ("seagulls", "They wheel and cry, as if warning you of something."),
        ],
    },
    RoomDef {
        id: RoomId::Cave,
        name: "Sea Cave",
        description: "A damp cave filled with the sound of dripping water. Bioluminescent algae casts an eerie blue-green glow. Ancient carvings cover the walls.",
        exits: &[(Direction::South, RoomId::Cliffs)],
        items: &[ItemId::CrystalLens, ItemId::AncientCoin],
        buried: &[],
        examine: &[
            ("carvings", "Spiraling symbols and images of a lighthouse with souls rising from it. One phrase is readable: \"LIGHT REUNITES WHAT DARKNESS DIVIDES\""),
            ("algae", "Strange glowing algae. It pulses gently, almost like breathing."),
            ("crystal_lens", "A perfectly shaped crystal lens, clearly crafted by skilled hands. It must be for the lighthouse!"),
            ("ancient_coin", "An old coin bearing the image of a lighthouse keeper."),
            ("water", "A small pool of seawater. Something shimmers at the bottom."),
        ],
    },
    RoomDef {
        id: RoomId::Path,
        name: "Winding Path",
        description: "A weathered stone path winds up the hillside. Wild roses grow alongside, their sweet scent mixing with sea salt. A ghostly figure stands near a crumbling well.",
        exits: &[
            (Direction::South, RoomId::Beach),
            (Direction::North, RoomId::LighthouseExterior),
            (Direction::East, RoomId::Garden),
        ],
        items: &[],
        buried: &[],
        examine: &[
            ("ghost", "A translucent woman in old-fashioned dress. She gazes toward the lighthouse with profound sadness."),
            ("well", "An old stone well. A rusty bucket hangs from a frayed rope. You hear water far below."),
            ("roses", "Beautiful wild roses. Their thorns are sharp."),
            ("path", "Worn smooth by countless footsteps over the centuries."),
        ],
    },
    RoomDef {
        id: RoomId::Garden,
        name: "Overgrown Garden",
        description: "What was once a lovely garden is now wild and overgrown. A stone bench sits beneath a gnarled apple tree. An old shed stands nearby, its door hanging open.",
        exits: &[(Direction::West, RoomId::Path), (Direction::North, RoomId::Shed)],
        items: &[ItemId::Matches, ItemId::Apple],
        buried: &[],
        examine: &[
            ("bench", "Carved with two names: \"ELIZA & THOMAS - FOREVER\""),
            ("tree", "A twisted apple tree. A few withered apples still cling to its branches."),
            ("apple", "A small apple, surprisingly fresh."),
            ("shed", "A weathered tool shed. The door creaks ominously."),
            ("flowers", "Flowers long gone wild, but still beautiful in their chaos."),
        ],
    },
    RoomDef {
        id: RoomId::Shed,
        name: "Garden Shed",
        description: "A dusty shed filled with old tools and forgotten things. Cobwebs drape everything. A workbench holds various items.",
        exits: &[(Direction::South, RoomId::Garden)],
        items: &[ItemId::OilCan, ItemId::SmallKey],
        buried: &[],
        examine: &[
            ("tools", "Rusty gardening tools hang on the wall."),
            ("workbench", "A sturdy workbench. An oil can and a small key rest on its surface."),
            ("oil_can", "A can of lamp oil, still half full after all these years."),
            ("small_key", "A small brass key with a lighthouse emblem."),
            ("cobwebs", "Thick cobwebs everywhere. This place hasn't been used in ages."),
        ],
    },
    RoomDef {
        id: RoomId::LighthouseExterior,
        name: "Lighthouse Base",
        description: "You stand before the imposing lighthouse. Its white-washed walls are cracked and weathered. A heavy iron door blocks the entrance. A bronze bell hangs in a small tower nearby.",
        exits: &[
            (Direction::South, RoomId::Path),
            (Direction::North, RoomId::LighthouseInterior),
        ],
        items: &[],
        buried: &[],
        examine: &[
            ("door", "A heavy iron door, locked tight. There's a small keyhole."),
            ("lighthouse", "The lighthouse rises high above, its dark windows like hollow eyes. The light chamber at the top is dark."),
            ("bell", "An old bronze bell, green with patina. A pull rope dangles from it."),
            ("walls", "Cracks spider across the walls. Names and dates are carved here - lighthouse keepers of old."),
        ],
    },
    RoomDef {
        id: RoomId::LighthouseInterior,
        name: "Lighthouse Interior",
        description: "The ground floor of the lighthouse. A spiral staircase winds upward into darkness. An old desk holds a dusty journal. A lantern hangs on a hook by the stairs.",
        exits: &[
            (Direction::South, RoomId::LighthouseExterior),
            (Direction::Up, RoomId::LighthouseStairs),
        ],
        items: &[ItemId::Lantern, ItemId::Journal],
        buried: &[],
        examine: &[
            ("staircase", "Iron stairs spiral upward. They look sturdy enough."),
            ("desk", "An old keeper's desk. A journal lies open upon it."),
            ("journal", "The journal of Thomas Blackwood, lighthouse keeper. The final entry reads: \"The storm took my Eliza. I will keep the light burning until she returns. I will wait forever if I must.\""),
            ("lantern", "An old brass lantern. It needs oil to work."),
            ("photographs", "Faded photographs on the wall show a happy couple - the keeper and his wife."),
        ],
    },
    RoomDef {
        id: RoomId::LighthouseStairs,
        name: "Spiral Staircase",
        description: "You climb the winding stairs. Windows offer glimpses of the island below. The steps groan under your weight. Almost to the top...",
        exits: &[
            (Direction::Down, RoomId::LighthouseInterior),
            (Direction::Up, RoomId::LightChamber),
        ],
        items: &[],
        buried: &[],
        examine: &[
            ("windows", "Small windows look out over the island. You can see the beach where you washed ashore."),
            ("stairs", "Iron stairs, rusty but holding."),
            ("walls", "More names carved here. Keepers marking their time."),
        ],
    },
    RoomDef {
        id: RoomId::LightChamber,
        name: "Light Chamber",
        description: "The top of the lighthouse. A massive Fresnel lens housing stands in the center, but the main lens is missing. Mirrors surround the chamber to amplify the light. One mirror bracket is empty.",
        exits: &[(Direction::Down, RoomId::LighthouseStairs)],
        items: &[],
        buried: &[],
        examine: &[
            ("lens_housing", "The great lens housing. A crystal lens would fit perfectly in the center mount."),
            ("mirrors", "Arrangement of mirrors to cast the light far across the sea. One bracket is empty."),
            ("bracket", "An empty bracket where a mirror should be."),
            ("view", "From here you can see the entire island... and countless ghostly ships on the horizon, waiting."),
            ("mechanism", "The turning mechanism for the light. It seems functional if only there was light."),
        ],
    },
];

/// All items, in [`ItemId::ALL`] order.
pub static ITEMS: [ItemDef; 11] = [
    ItemDef {
        id: ItemId::Driftwood,
        description: "A sturdy piece of driftwood. Could be useful for something.",
        variant: None,
        aliases: &["wood"],
    },
    ItemDef {
        id: ItemId::Rope,
        description: "Strong rope, about 20 feet long.",
        variant: None,
        aliases: &[],
    },
    ItemDef {
        id: ItemId::CrystalLens,
        description: "A beautiful crystal lens, perfectly shaped to focus light.",
        variant: None,
        aliases: &["lens", "crystal"],
    },
    ItemDef {
        id: ItemId::AncientCoin,
        description: "An old coin showing a lighthouse. Perhaps an offering?",
        variant: None,
        aliases: &["coin"],
    },
    ItemDef {
        id: ItemId::Matches,
        description: "A box of matches, still dry.",
        variant: None,
        aliases: &[],
    },
    ItemDef {
        id: ItemId::Apple,
        description: "A small but fresh apple. It looks delicious.",
        variant: None,
        aliases: &[],
    },
    ItemDef {
        id: ItemId::OilCan,
        description: "A can of lamp oil.",
        variant: None,
        aliases: &["oil", "can"],
    },
    ItemDef {
        id: ItemId::SmallKey,
        description: "A brass key with a lighthouse emblem.",
        variant: None,
        aliases: &["key"],
    },
    ItemDef {
        id: ItemId::Lantern,
        description: "A brass lantern.",
        variant: Some(FlagVariant {
            flag: Flag::LanternLit,
            raised: "It glows with a warm flame.",
            lowered: "It needs oil and a flame.",
        }),
        aliases: &[],
    },
    ItemDef {
        id: ItemId::Journal,
        description: "Thomas Blackwood's journal. It tells of his eternal vigil for his lost wife Eliza.",
        variant: None,
        aliases: &["book"],
    },
    ItemDef {
        id: ItemId::MirrorShard,
        description: "A perfectly polished mirror shard from the well.",
        variant: None,
        aliases: &[],
    },
];

/// Movement gates.
pub static GATES: [Gate; 2] = [
    Gate {
        room: RoomId::Cliffs,
        direction: Direction::North,
        opened_by: Flag::CrabMoved,
        refusal: "The giant crab blocks your path, snapping its claws menacingly!",
    },
    Gate {
        room: RoomId::LighthouseExterior,
        direction: Direction::North,
        opened_by: Flag::LighthouseDoorOpen,
        refusal: "The lighthouse door is locked. You'll need a key.",
    },
];
