//! Sounds the Bedrock client expects when interacting with blocks.
//!
//! Java plays these server-side for the acting player only on other clients,
//! so the bridge plays them locally. Each registered interaction carries a
//! filter on the clicked block state and the held item.

use mc_bridge_proto::packets::bedrock::PlaySound;
use mc_bridge_proto::types::{GameMode, Vec3};

use crate::item::BridgeItemStack;
use crate::session::Session;

/// Which interactions an entry applies to.
#[derive(Debug, Clone, Copy, Default)]
pub struct SoundFilter {
    /// Substrings of the block state; empty matches every block.
    pub blocks: &'static [&'static str],
    /// Substrings of the held item identifier; empty matches any hand.
    pub items: &'static [&'static str],
    /// Play even when the player is sneaking with an item in hand.
    pub ignore_sneaking_while_holding: bool,
}

pub trait BlockSoundInteraction: Send + Sync {
    fn translate(&self, session: &Session, position: Vec3, block_state: &str);
}

impl<F> BlockSoundInteraction for F
where
    F: Fn(&Session, Vec3, &str) + Send + Sync,
{
    fn translate(&self, session: &Session, position: Vec3, block_state: &str) {
        self(session, position, block_state)
    }
}

/// Built-in interactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockSound {
    Door,
    Lever,
    Comparator,
    FlintAndSteel,
    Bucket,
    GrassPath,
    HoeTill,
}

impl BlockSound {
    pub const ALL: [BlockSound; 7] = [
        BlockSound::Door,
        BlockSound::Lever,
        BlockSound::Comparator,
        BlockSound::FlintAndSteel,
        BlockSound::Bucket,
        BlockSound::GrassPath,
        BlockSound::HoeTill,
    ];

    pub fn filter(self) -> SoundFilter {
        match self {
            // "door" also covers trapdoors.
            BlockSound::Door => SoundFilter {
                blocks: &["door", "fence_gate"],
                ..SoundFilter::default()
            },
            BlockSound::Lever => SoundFilter {
                blocks: &["lever"],
                ..SoundFilter::default()
            },
            BlockSound::Comparator => SoundFilter {
                blocks: &["comparator"],
                ..SoundFilter::default()
            },
            BlockSound::FlintAndSteel => SoundFilter {
                items: &["flint_and_steel"],
                ignore_sneaking_while_holding: true,
                ..SoundFilter::default()
            },
            BlockSound::Bucket => SoundFilter {
                items: &["bucket"],
                ignore_sneaking_while_holding: true,
                ..SoundFilter::default()
            },
            BlockSound::GrassPath => SoundFilter {
                blocks: &["grass_block"],
                items: &["shovel"],
                ignore_sneaking_while_holding: true,
            },
            BlockSound::HoeTill => SoundFilter {
                blocks: &["grass_block", "dirt"],
                items: &["hoe"],
                ignore_sneaking_while_holding: true,
            },
        }
    }
}

impl BlockSoundInteraction for BlockSound {
    fn translate(&self, session: &Session, position: Vec3, block_state: &str) {
        match self {
            BlockSound::Door => {
                if block_state.contains("iron") {
                    return;
                }
                let sound = if block_state.contains("open=true") {
                    "random.door_close"
                } else {
                    "random.door_open"
                };
                play(session, sound, position, 1.0, 1.0);
            }
            BlockSound::Lever => {
                let pitch = if block_state.contains("powered=true") { 0.5 } else { 0.6 };
                play(session, "random.click", position, 0.3, pitch);
            }
            BlockSound::Comparator => {
                let pitch = if block_state.contains("mode=compare") { 0.55 } else { 0.5 };
                play(session, "random.click", position, 0.3, pitch);
            }
            BlockSound::FlintAndSteel => play(session, "fire.ignite", position, 1.0, 1.0),
            BlockSound::Bucket => {
                let held = session.player_inventory().item_in_hand();
                let identifier = held.java_identifier(&session.registries().items);
                if let Some(sound) = bucket_sound(identifier, block_state) {
                    play(session, sound, position, 1.0, 1.0);
                }
            }
            BlockSound::GrassPath => {
                if can_interact(session, session.player_inventory().item_in_hand(), block_state) {
                    play(session, "use.grass", position, 1.0, 0.8);
                }
            }
            BlockSound::HoeTill => {
                if can_interact(session, session.player_inventory().item_in_hand(), block_state) {
                    play(session, "use.gravel", position, 1.0, 0.8);
                }
            }
        }
    }
}

fn bucket_sound(identifier: &str, block_state: &str) -> Option<&'static str> {
    if identifier == "minecraft:bucket" {
        return if block_state.contains("water") {
            Some("bucket.fill.water")
        } else if block_state.contains("lava") {
            Some("bucket.fill.lava")
        } else if block_state.contains("powder_snow") {
            Some("bucket.fill.powder_snow")
        } else {
            None
        };
    }
    if identifier.contains("lava") {
        Some("bucket.empty.lava")
    } else if identifier.contains("powder_snow") {
        Some("bucket.empty.powder_snow")
    } else if identifier.contains("water") {
        Some("bucket.empty.water")
    } else if identifier.contains("milk") {
        None
    } else {
        Some("bucket.empty.fish")
    }
}

fn play(session: &Session, sound: &str, position: Vec3, volume: f32, pitch: f32) {
    session.send_upstream(PlaySound::new(
        sound, position.x, position.y, position.z, volume, pitch,
    ));
}

/// Interactions in registration order.
#[derive(Default)]
pub struct SoundInteractionRegistry {
    entries: Vec<(SoundFilter, Box<dyn BlockSoundInteraction>)>,
}

impl SoundInteractionRegistry {
    /// Registry with every built-in interaction.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        for sound in BlockSound::ALL {
            registry.register(sound.filter(), sound);
        }
        registry
    }

    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn register(&mut self, filter: SoundFilter, interaction: impl BlockSoundInteraction + 'static) {
        self.entries.push((filter, Box::new(interaction)));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn iter(&self) -> impl Iterator<Item = (&SoundFilter, &dyn BlockSoundInteraction)> {
        self.entries.iter().map(|(f, i)| (f, i.as_ref()))
    }
}

/// Play every registered sound matching a right click on `block_state`.
/// All matching entries fire, in registration order.
pub fn handle_block_interaction(session: &Session, position: Vec3, block_state: &str) {
    let registries = session.registries();
    let item_in_hand = session.player_inventory().item_in_hand();
    let mut hand_identifier: Option<&str> = None;

    for (filter, interaction) in registries.sounds.iter() {
        if !filter.blocks.is_empty() && !filter.blocks.iter().any(|b| block_state.contains(b)) {
            continue;
        }
        if !filter.items.is_empty() {
            if item_in_hand.is_empty() {
                continue;
            }
            let identifier = *hand_identifier
                .get_or_insert_with(|| item_in_hand.java_identifier(&registries.items));
            if !filter.items.iter().any(|i| identifier.contains(i)) {
                continue;
            }
        }
        if session.is_sneaking() && !filter.ignore_sneaking_while_holding && !item_in_hand.is_empty() {
            continue;
        }
        interaction.translate(session, position, block_state);
    }
}

/// Whether adventure mode restrictions allow using `item` on `block_state`.
///
/// Block tags in a predicate cannot be resolved here and are treated as
/// matching.
pub fn can_interact(session: &Session, item: &BridgeItemStack, block_state: &str) -> bool {
    if session.game_mode() != GameMode::Adventure {
        return true;
    }
    let Some(can_place_on) = item.can_place_on() else {
        return true;
    };
    if can_place_on.predicates.is_empty() {
        return true;
    }

    let (identifier, properties) = match block_state.split_once('[') {
        Some((identifier, rest)) => (identifier, rest.trim_end_matches(']')),
        None => (block_state, ""),
    };
    can_place_on.predicates.iter().any(|predicate| {
        let block_matches = match &predicate.blocks {
            None => true,
            Some(blocks) => blocks.iter().any(|b| b.starts_with('#') || b == identifier),
        };
        block_matches
            && predicate.properties.iter().all(|matcher| {
                properties
                    .split(',')
                    .filter_map(|kv| kv.split_once('='))
                    .any(|(k, v)| k == matcher.name && v == matcher.value)
            })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::HOTBAR_START;
    use crate::registries::Registries;
    use crate::test_support::{self, TestSession};
    use mc_bridge_proto::item::{
        AdventureModePredicate, BlockPredicate, DataComponents, JavaItemStack, PropertyMatcher,
    };
    use std::sync::{Arc, Mutex};

    const POS: Vec3 = Vec3 {
        x: 1.5,
        y: 64.5,
        z: 1.5,
    };

    fn hold(t: &mut TestSession, stack: JavaItemStack) {
        let item = BridgeItemStack::from_java(Some(&stack));
        t.session
            .set_window_item(crate::session::Window::Player, HOTBAR_START, item);
    }

    fn sounds(t: &mut TestSession) -> Vec<String> {
        t.upstream_of::<PlaySound>()
            .into_iter()
            .map(|p| p.sound_name)
            .collect()
    }

    fn recording(filters: &[(&'static str, SoundFilter)]) -> (Registries, Arc<Mutex<Vec<&'static str>>>) {
        let fired = Arc::new(Mutex::new(Vec::new()));
        let mut registries = Registries::init();
        registries.sounds = SoundInteractionRegistry::empty();
        for (name, filter) in filters {
            let fired = fired.clone();
            let name = *name;
            registries.sounds.register(*filter, move |_: &Session, _: Vec3, _: &str| {
                fired.lock().unwrap().push(name);
            });
        }
        (registries, fired)
    }

    #[test]
    fn block_filter_matches_substrings() {
        let filter = SoundFilter {
            blocks: &["door"],
            ..SoundFilter::default()
        };
        let (registries, fired) = recording(&[("door", filter)]);
        let t = test_support::session_with(registries);

        handle_block_interaction(&t.session, POS, "minecraft:stone");
        assert!(fired.lock().unwrap().is_empty());

        handle_block_interaction(&t.session, POS, "minecraft:oak_door[open=false]");
        handle_block_interaction(&t.session, POS, "minecraft:spruce_trapdoor[open=true]");
        assert_eq!(*fired.lock().unwrap(), vec!["door", "door"]);
    }

    #[test]
    fn all_matches_fire_in_registration_order() {
        let any = SoundFilter::default();
        let (registries, fired) = recording(&[("first", any), ("second", any), ("third", any)]);
        let t = test_support::session_with(registries);
        handle_block_interaction(&t.session, POS, "minecraft:stone");
        assert_eq!(*fired.lock().unwrap(), vec!["first", "second", "third"]);
    }

    #[test]
    fn item_filter_needs_a_matching_hand() {
        let filter = SoundFilter {
            items: &["bucket"],
            ..SoundFilter::default()
        };
        let (registries, fired) = recording(&[("bucket", filter)]);
        let mut t = test_support::session_with(registries);

        handle_block_interaction(&t.session, POS, "minecraft:water[level=0]");
        assert!(fired.lock().unwrap().is_empty());

        let sword = t.stack("minecraft:diamond_sword", 1);
        hold(&mut t, sword);
        handle_block_interaction(&t.session, POS, "minecraft:water[level=0]");
        assert!(fired.lock().unwrap().is_empty());

        let bucket = t.stack("minecraft:water_bucket", 1);
        hold(&mut t, bucket);
        handle_block_interaction(&t.session, POS, "minecraft:stone");
        assert_eq!(fired.lock().unwrap().len(), 1);
    }

    #[test]
    fn sneaking_with_item_suppresses_unless_ignored() {
        let plain = SoundFilter::default();
        let ignoring = SoundFilter {
            ignore_sneaking_while_holding: true,
            ..SoundFilter::default()
        };
        let (registries, fired) = recording(&[("plain", plain), ("ignoring", ignoring)]);
        let mut t = test_support::session_with(registries);
        t.session.set_sneaking(true);

        // Empty hand: sneaking does not matter.
        handle_block_interaction(&t.session, POS, "minecraft:lever");
        assert_eq!(*fired.lock().unwrap(), vec!["plain", "ignoring"]);

        fired.lock().unwrap().clear();
        let stone = t.stack("minecraft:stone", 1);
        hold(&mut t, stone);
        handle_block_interaction(&t.session, POS, "minecraft:lever");
        assert_eq!(*fired.lock().unwrap(), vec!["ignoring"]);
    }

    #[test]
    fn door_sounds() {
        let mut t = test_support::session();
        handle_block_interaction(&t.session, POS, "minecraft:oak_door[open=false]");
        handle_block_interaction(&t.session, POS, "minecraft:oak_trapdoor[open=true]");
        handle_block_interaction(&t.session, POS, "minecraft:iron_door[open=false]");
        assert_eq!(sounds(&mut t), vec!["random.door_open", "random.door_close"]);
    }

    #[test]
    fn lever_pitch_follows_state() {
        let mut t = test_support::session();
        handle_block_interaction(&t.session, POS, "minecraft:lever[powered=true]");
        let played = t.upstream_of::<PlaySound>();
        assert_eq!(played.len(), 1);
        assert_eq!(played[0].sound_name, "random.click");
        assert_eq!(played[0].pitch, 0.5);
    }

    #[test]
    fn bucket_fill_and_empty() {
        let mut t = test_support::session();
        let bucket = t.stack("minecraft:bucket", 1);
        hold(&mut t, bucket);
        handle_block_interaction(&t.session, POS, "minecraft:water[level=0]");
        assert_eq!(sounds(&mut t), vec!["bucket.fill.water"]);

        let lava = t.stack("minecraft:lava_bucket", 1);
        hold(&mut t, lava);
        t.session.set_sneaking(true);
        handle_block_interaction(&t.session, POS, "minecraft:stone");
        assert_eq!(sounds(&mut t), vec!["bucket.empty.lava"]);
    }

    #[test]
    fn shovel_on_grass_respects_adventure_mode() {
        let mut t = test_support::session();
        let shovel = t.stack("minecraft:iron_shovel", 1).with_components(DataComponents {
            can_place_on: Some(AdventureModePredicate {
                predicates: vec![BlockPredicate {
                    blocks: Some(vec!["minecraft:dirt".into()]),
                    properties: Vec::new(),
                }],
            }),
            ..DataComponents::default()
        });
        hold(&mut t, shovel);

        handle_block_interaction(&t.session, POS, "minecraft:grass_block[snowy=false]");
        assert_eq!(sounds(&mut t), vec!["use.grass"]);

        t.session.set_game_mode(GameMode::Adventure);
        handle_block_interaction(&t.session, POS, "minecraft:grass_block[snowy=false]");
        assert!(sounds(&mut t).is_empty());
    }

    #[test]
    fn can_interact_outside_adventure() {
        let t = test_support::session();
        let item = BridgeItemStack::new(1, 1);
        assert!(can_interact(&t.session, &item, "minecraft:stone"));
    }

    #[test]
    fn can_interact_without_component_or_predicates() {
        let mut t = test_support::session();
        t.session.set_game_mode(GameMode::Adventure);
        assert!(can_interact(&t.session, &BridgeItemStack::new(1, 1), "minecraft:stone"));

        let empty = JavaItemStack::new(1, 1).with_components(DataComponents {
            can_place_on: Some(AdventureModePredicate::default()),
            ..DataComponents::default()
        });
        let item = BridgeItemStack::from_java(Some(&empty));
        assert!(can_interact(&t.session, &item, "minecraft:stone"));
    }

    #[test]
    fn can_interact_evaluates_predicates() {
        let mut t = test_support::session();
        t.session.set_game_mode(GameMode::Adventure);
        let java = JavaItemStack::new(1, 1).with_components(DataComponents {
            can_place_on: Some(AdventureModePredicate {
                predicates: vec![
                    BlockPredicate {
                        blocks: Some(vec!["minecraft:lever".into()]),
                        properties: vec![PropertyMatcher {
                            name: "powered".into(),
                            value: "true".into(),
                        }],
                    },
                    BlockPredicate {
                        blocks: Some(vec!["#minecraft:logs".into()]),
                        properties: Vec::new(),
                    },
                ],
            }),
            ..DataComponents::default()
        });
        let item = BridgeItemStack::from_java(Some(&java));

        assert!(can_interact(&t.session, &item, "minecraft:lever[face=wall,powered=true]"));
        // Tags are not resolved and match any block.
        assert!(can_interact(&t.session, &item, "minecraft:oak_log[axis=y]"));

        let lever_only = JavaItemStack::new(1, 1).with_components(DataComponents {
            can_place_on: Some(AdventureModePredicate {
                predicates: vec![BlockPredicate {
                    blocks: Some(vec!["minecraft:lever".into()]),
                    properties: vec![PropertyMatcher {
                        name: "powered".into(),
                        value: "true".into(),
                    }],
                }],
            }),
            ..DataComponents::default()
        });
        let item = BridgeItemStack::from_java(Some(&lever_only));
        assert!(!can_interact(&t.session, &item, "minecraft:lever[face=wall,powered=false]"));
        assert!(!can_interact(&t.session, &item, "minecraft:stone"));
    }

    #[test]
    fn built_in_registry_order() {
        assert_eq!(SoundInteractionRegistry::new().len(), BlockSound::ALL.len());
    }
}
