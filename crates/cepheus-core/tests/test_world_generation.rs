//! Integration tests for world and sector generation.
//!
//! Exercises: Dice → profile pipeline → bases → PBG → World
//! → Subsector → Sector → text and JSON output
//!
//! Everything runs on seeded or scripted dice, so results are repeatable.

use std::collections::HashSet;

use cepheus_core::dice::testing::FixedDice;
use cepheus_core::prelude::*;
use cepheus_core::pseudohex;
use cepheus_core::world::{generate_base_code, parse_bases, trade_codes};

// ── Helpers ────────────────────────────────────────────────────────────

fn config() -> GeneratorConfig {
    GeneratorConfig::default()
}

fn seeded_worlds(seed: u64, count: usize) -> Vec<World> {
    let mut dice = Dice::seeded(seed);
    (0..count).map(|_| generate_world(&mut dice, &config())).collect()
}

// ── Codec ──────────────────────────────────────────────────────────────

#[test]
fn pseudohex_round_trips() {
    for v in 0..=pseudohex::MAX_VALUE {
        let symbol = pseudohex::encode(v).unwrap();
        assert_eq!(u32::from(pseudohex::decode(symbol).unwrap()), v);
    }
    for &symbol in pseudohex::ALPHABET.iter() {
        let lower = symbol.to_ascii_lowercase();
        let value = pseudohex::decode(lower).unwrap();
        assert_eq!(pseudohex::encode(u32::from(value)).unwrap(), symbol);
    }
    assert_eq!(pseudohex::encode(34), Err(CodecError::OutOfRange(34)));
}

// ── World invariants ───────────────────────────────────────────────────

#[test]
fn generated_worlds_respect_dependencies() {
    for world in seeded_worlds(1, 2000) {
        let uwp = world.uwp();
        assert_eq!(uwp.len(), 9);
        assert_eq!(uwp.find('-'), Some(7), "{}", uwp);
        for (i, c) in uwp.chars().enumerate() {
            if i != 0 && i != 7 {
                assert!(pseudohex::decode(c).is_ok(), "{} in {}", c, uwp);
            }
        }
        if world.world_size() == 0 {
            assert_eq!(world.atmosphere(), 0, "{}", uwp);
        }
        if world.world_size() <= 1 {
            assert_eq!(world.hydrographics(), 0, "{}", uwp);
        }
        if world.population() == 0 {
            assert_eq!((world.government(), world.law_level()), (0, 0), "{}", uwp);
        }
        let codes: Vec<String> = trade_codes(world.profile())
            .into_iter()
            .map(|c| c.code().to_string())
            .collect();
        assert_eq!(world.remarks(), codes.as_slice());
        assert_eq!(world.travel_zone(), TravelZone::for_profile(world.profile()));
    }
}

#[test]
fn generated_worlds_cover_every_starport() {
    let seen: HashSet<Starport> = seeded_worlds(2, 2000).iter().map(World::starport).collect();
    assert_eq!(seen.len(), Starport::ALL.len());
}

#[test]
fn travel_zone_is_never_red() {
    for world in seeded_worlds(3, 500) {
        assert!(matches!(world.travel_zone().code(), ' ' | 'A'));
    }
}

// ── Round trips ────────────────────────────────────────────────────────

#[test]
fn codes_round_trip() {
    for world in seeded_worlds(4, 1000) {
        assert_eq!(Profile::decode(&world.uwp()).unwrap(), *world.profile());
        assert_eq!(Bases::from_code(&world.bases_code().to_string()), world.bases());
        assert_eq!(Pbg::decode(&world.pbg_code()).unwrap(), world.pbg());
    }
}

#[test]
fn encoded_world_rebuilds_without_dice() {
    for world in seeded_worlds(5, 200) {
        let mut dice = cepheus_core::dice::testing::ScriptedDice::default();
        let rebuilt = world_from_encoded(&world.encoded(), &mut dice, &config()).unwrap();
        assert_eq!(rebuilt, world);
        assert_eq!(dice.rolled(), 0);
    }
}

#[test]
fn decoding_only_the_profile_matches_generation() {
    // With the profile supplied, the rest of the world draws the same dice
    // a full generation draws after its profile steps.
    let mut dice = Dice::seeded(6);
    let _ = cepheus_core::world::generate_profile(&mut dice);
    let mut replay = dice.clone();

    let mut full = Dice::seeded(6);
    let generated = generate_world(&mut full, &config());

    let encoded = EncodedWorld {
        uwp: Some(generated.uwp()),
        ..EncodedWorld::default()
    };
    let rebuilt = world_from_encoded(&encoded, &mut replay, &config()).unwrap();
    assert_eq!(rebuilt, generated);
}

#[test]
fn regina_style_codes() {
    let p = Profile::decode("C000000-0").unwrap();
    assert_eq!(p.starport(), Starport::C);
    assert_eq!(
        [
            p.world_size(),
            p.atmosphere(),
            p.hydrographics(),
            p.population(),
            p.government(),
            p.law_level(),
            p.technology_level()
        ],
        [0; 7]
    );
    assert_eq!(generate_base_code(true, true, false), 'A');
    assert_eq!(parse_bases("A"), (true, true, false));
}

#[test]
fn decode_errors_surface() {
    let err = world_from_encoded(
        &EncodedWorld {
            uwp: Some("Z000000-0".to_string()),
            ..EncodedWorld::default()
        },
        &mut Dice::seeded(0),
        &config(),
    )
    .unwrap_err();
    assert!(matches!(err, WorldError::MalformedProfile { .. }));
    assert!(err.to_string().contains("'Z' is not a starport class"));
}

// ── All-sixes scenario ─────────────────────────────────────────────────

#[test]
fn all_sixes_pins_the_pipeline() {
    let world = generate_world(&mut FixedDice(6), &config());
    assert_eq!(world.world_size(), 10);
    assert_eq!(world.atmosphere(), 15);
    assert_eq!(world.hydrographics(), 10);
    assert_eq!(world.population(), 8);
    assert_eq!(world.starport(), Starport::A);
    assert_eq!(world.government(), 13);
    assert_eq!(world.law_level(), 18);
    assert_eq!(world.technology_level(), 13);
    assert_eq!(world.uwp(), "AAFA8DJ-D");
    assert_eq!(world.pbg_code(), "934");
}

// ── Sectors ────────────────────────────────────────────────────────────

#[test]
fn full_sector_stays_inside_its_subsectors() {
    let sector = Sector::generate(SectorScope::Full, &mut Dice::seeded(7), &config());
    assert!(sector.len() <= 1280);
    assert!(sector.len() > 400, "suspiciously empty: {}", sector.len());

    let mut per_subsector = std::collections::HashMap::new();
    for (hex, _) in sector.iter() {
        let id = SubsectorId::containing(*hex).expect("hex outside the sector");
        *per_subsector.entry(id).or_insert(0usize) += 1;
    }
    assert_eq!(per_subsector.len(), 16);
    assert!(per_subsector.values().all(|&n| n <= 80));
}

#[test]
fn subsector_flag_limits_to_a() {
    let sector = Sector::generate(SectorScope::from_flag(true), &mut Dice::seeded(8), &config());
    let a = SubsectorId::from_letter('A').unwrap();
    assert!(sector.len() <= 80);
    assert!(sector.iter().all(|(hex, _)| a.contains(*hex)));
}

#[test]
fn same_seed_same_sector() {
    let a = Sector::generate(SectorScope::Full, &mut Dice::seeded(9), &config());
    let b = Sector::generate(SectorScope::Full, &mut Dice::seeded(9), &config());
    assert_eq!(a, b);
    assert_eq!(a.to_string(), b.to_string());
}

#[test]
fn sector_text_has_one_row_per_world() {
    let sector = Sector::generate(SectorScope::from_flag(true), &mut Dice::seeded(10), &config());
    let text = sector.to_string();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some(sector_table_header().as_str()));
    let rows: Vec<&str> = lines.collect();
    assert_eq!(rows.len(), sector.len());
    for ((hex, world), row) in sector.iter().zip(&rows) {
        assert_eq!(&row[16..20], hex.to_string());
        assert!(row.contains(&world.uwp()));
    }
}

#[test]
fn sector_json_keys_are_hex_addresses() {
    let sector = Sector::generate(SectorScope::from_flag(true), &mut Dice::seeded(11), &config());
    let value: serde_json::Value = serde_json::to_value(&sector).unwrap();
    let map = value.as_object().unwrap();
    assert_eq!(map.len(), sector.len());
    for key in map.keys() {
        let hex: HexAddress = key.parse().unwrap();
        assert!(sector.get(hex).is_some());
    }
}
