//! Integration tests for the fixture engine
//!
//! Tests the full stack: request decoding, round-robin generation, bracket
//! construction, metadata encoding and placeholder resolution

use chrono::{Duration, TimeZone, Utc};
use rustc_hash::{FxHashMap, FxHashSet};
use serde_json::json;

use fixtures_core::{EntryId, Group, MatchType, ParticipantSource, Seed};
use fixtures_schedule::{
    build_bracket, build_bracket_round_map, draw_groups, draw_seeds, generate_round_robin,
    resolve_placeholders, KnockoutOptions, MatchRow, ResolveConfig, RoundRobinOptions,
};

// ============================================================================
// TEST FIXTURES
// ============================================================================

/// The reference scenario: 4 entries, 2 venues, 60 + 15 minutes, single round-robin
fn reference_request() -> RoundRobinOptions {
    serde_json::from_value(json!({
        "stageId": "group-stage",
        "groups": [
            {"id": "A", "entryIds": ["lions", "tigers", "bears", "wolves"], "mode": "single"}
        ],
        "venues": [{"id": "pitch-1"}, {"id": "pitch-2"}],
        "startAt": "2025-05-01T09:00Z",
        "matchDurationMinutes": 60,
        "breakMinutes": 15
    }))
    .unwrap()
}

fn seeds(n: u32) -> Vec<Seed> {
    (1..=n).map(|i| Seed::new(i, format!("team-{}", i))).collect()
}

fn unordered(a: &EntryId, b: &EntryId) -> (EntryId, EntryId) {
    if a < b {
        (a.clone(), b.clone())
    } else {
        (b.clone(), a.clone())
    }
}

// ============================================================================
// ROUND-ROBIN
// ============================================================================

#[test]
fn test_reference_scenario() {
    let schedule = generate_round_robin(&reference_request()).unwrap();
    let start = Utc.with_ymd_and_hms(2025, 5, 1, 9, 0, 0).unwrap();

    assert_eq!(schedule.matches.len(), 6);
    assert_eq!(
        schedule.kickoff_slots(),
        vec![start, start + Duration::minutes(75), start + Duration::minutes(150)]
    );

    for round in 1..=3 {
        let matches = schedule.matches_in_round(round);
        assert_eq!(matches.len(), 2);
        let venues: Vec<&str> = matches.iter().map(|m| m.venue_id.as_str()).collect();
        assert_eq!(venues, vec!["pitch-1", "pitch-2"]);
    }

    for entry in ["lions", "tigers", "bears", "wolves"] {
        assert_eq!(schedule.matches_for(&EntryId::new(entry)).len(), 3);
    }
}

#[test]
fn test_single_round_robin_pair_coverage() {
    for n in 2..=10usize {
        let names: Vec<String> = (0..n).map(|i| format!("e{}", i)).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let options = RoundRobinOptions::new("s", "2025-05-01T09:00Z")
            .with_group(Group::single("G", &refs))
            .with_venues(&["v1", "v2", "v3"]);

        let schedule = generate_round_robin(&options).unwrap();
        assert_eq!(schedule.matches.len(), n * (n - 1) / 2, "n={}", n);

        let pairs: FxHashSet<(EntryId, EntryId)> = schedule
            .matches
            .iter()
            .map(|m| unordered(&m.home_entry_id, &m.away_entry_id))
            .collect();
        assert_eq!(pairs.len(), schedule.matches.len(), "n={}", n);
    }
}

#[test]
fn test_double_round_robin_mirrors_first_half() {
    let options = RoundRobinOptions::new("s", "2025-05-01T09:00Z")
        .with_group(Group::double("G", &["a", "b", "c", "d", "e"]))
        .with_venues(&["v1"]);

    let schedule = generate_round_robin(&options).unwrap();
    assert_eq!(schedule.matches.len(), 20);

    let (first, second) = schedule.matches.split_at(10);
    for (m, r) in first.iter().zip(second) {
        assert_eq!(m.home_entry_id, r.away_entry_id);
        assert_eq!(m.away_entry_id, r.home_entry_id);
        assert!(r.kickoff_at > m.kickoff_at);
    }
}

#[test]
fn test_round_numbers_track_kickoff_instants() {
    let options = RoundRobinOptions::new("s", "2025-05-01T09:00Z")
        .with_group(Group::single("A", &["a1", "a2", "a3", "a4", "a5"]))
        .with_group(Group::double("B", &["b1", "b2", "b3"]))
        .with_group(Group::single("C", &["c1", "c2"]))
        .with_venues(&["v1", "v2", "v3"])
        .with_duration(40)
        .with_break(5);

    let schedule = generate_round_robin(&options).unwrap();

    for a in &schedule.matches {
        for b in &schedule.matches {
            assert_eq!(a.kickoff_at == b.kickoff_at, a.round_number == b.round_number);
            if a.kickoff_at < b.kickoff_at {
                assert!(a.round_number < b.round_number);
            }
        }
    }

    // A slot is never double-booked
    let booked: FxHashSet<_> = schedule
        .matches
        .iter()
        .map(|m| (m.kickoff_at, m.venue_id.clone()))
        .collect();
    assert_eq!(booked.len(), schedule.matches.len());
}

#[test]
fn test_invalid_request_produces_nothing() {
    let mut options = reference_request();
    options.groups.push(Group::single("B", &["x", "x"]));
    assert!(generate_round_robin(&options).is_err());
}

// ============================================================================
// KNOCKOUT + RESOLVER
// ============================================================================

#[test]
fn test_bracket_metadata_resolves_to_round_codes() {
    let options = KnockoutOptions::new("cup", "main", seeds(8)).with_third_place();
    let bracket = build_bracket(&options).unwrap();

    let rows: Vec<MatchRow> = bracket.matches.iter().map(MatchRow::from_knockout).collect();
    let rounds = build_bracket_round_map(&rows);
    assert_eq!(rounds.max_round(&"main".into()), Some(3));

    let resolved = resolve_placeholders(&rows, &ResolveConfig::default());
    let by_id: FxHashMap<&str, (Option<&str>, Option<&str>)> = resolved
        .iter()
        .map(|r| (r.id.as_str(), (r.home.as_deref(), r.away.as_deref())))
        .collect();

    assert_eq!(by_id["main-r1-m1"], (Some("Seed 1"), Some("Seed 8")));
    assert_eq!(by_id["main-r2-m1"], (Some("Vinner av R1"), Some("Vinner av R1")));
    assert_eq!(by_id["main-r3-m1"], (Some("Vinner av SF2"), Some("Vinner av SF2")));
    assert_eq!(by_id["main-r3-m2"], (Some("Taper av SF2"), Some("Taper av SF2")));
}

#[test]
fn test_bye_bracket_end_to_end() {
    let bracket = build_bracket(&KnockoutOptions::new("cup", "b", seeds(6))).unwrap();

    // 6 seeds in an 8-bracket: seeds 1 and 2 skip round one
    assert_eq!(bracket.matches_in_round(1).len(), 2);
    assert_eq!(bracket.matches.len(), 5);

    let rows: Vec<MatchRow> = bracket.matches.iter().map(MatchRow::from_knockout).collect();
    let resolved = resolve_placeholders(&rows, &ResolveConfig::default().sequential());

    let semis: Vec<_> = resolved.iter().filter(|r| r.id.contains("-r2-")).collect();
    assert_eq!(semis.len(), 2);
    for semi in semis {
        assert!(semi.home.as_deref().unwrap().starts_with("Seed "));
        assert_eq!(semi.away.as_deref(), Some("Vinner av R1"));
    }
}

#[test]
fn test_third_place_only_references_semifinals() {
    for n in [4u32, 5, 8, 12, 16] {
        let bracket = build_bracket(&KnockoutOptions::new("s", "b", seeds(n)).with_third_place()).unwrap();
        let third = bracket.third_place_match().unwrap();
        let final_match = bracket.final_match().unwrap();

        for source in [&third.home, &third.away] {
            let ParticipantSource::Loser { match_id } = source else {
                panic!("third place side is not a loser reference: {:?}", source);
            };
            let semi = bracket.get(match_id).unwrap();
            assert_eq!(semi.round_number + 1, final_match.round_number, "n={}", n);
            assert_eq!(semi.match_type, MatchType::Normal);
        }
    }
}

#[test]
fn test_stored_rows_with_bad_metadata_degrade() {
    let rows: Vec<MatchRow> = serde_json::from_value(json!([
        {"id": "b-r1-m1", "bracketId": "b", "metadata": {"roundNumber": 1,
            "homeSource": {"type": "seed", "seed": 1}, "awaySource": {"type": "seed", "seed": "2"}}},
        {"id": "b-r2-m1", "bracketId": "b", "metadata": {"roundNumber": 2,
            "homeSource": {"type": "winner", "matchId": "b-r1-m1"}, "awaySource": {"type": "ghost"}}},
        {"id": "free", "metadata": null}
    ]))
    .unwrap();

    let resolved = resolve_placeholders(&rows, &ResolveConfig::default());
    assert_eq!(resolved[0].home.as_deref(), Some("Seed 1"));
    assert_eq!(resolved[0].away, None);
    assert_eq!(resolved[1].home.as_deref(), Some("Vinner av SF1"));
    assert_eq!(resolved[1].away, None);
    assert_eq!(resolved[2].home, None);
}

// ============================================================================
// DRAW -> SCHEDULE
// ============================================================================

#[test]
fn test_drawn_groups_schedule_cleanly() {
    let entries: Vec<EntryId> = (1..=12).map(|i| EntryId::new(format!("club-{}", i))).collect();
    let groups = draw_groups(&entries, 3, fixtures_core::GroupMode::Single, 2025).unwrap();

    let mut options = RoundRobinOptions::new("s", "2025-06-01T10:00Z").with_venues(&["v1", "v2"]);
    for group in groups {
        options = options.with_group(group);
    }

    let schedule = generate_round_robin(&options).unwrap();
    assert_eq!(schedule.matches.len(), 3 * 6);
}

#[test]
fn test_drawn_seeds_build_a_bracket() {
    let entries: Vec<EntryId> = (1..=7).map(|i| EntryId::new(format!("club-{}", i))).collect();
    let seeds = draw_seeds(&entries, 11).unwrap();
    let bracket = build_bracket(&KnockoutOptions::new("s", "b", seeds)).unwrap();

    assert_eq!(bracket.matches.len(), 6);
    assert_eq!(bracket.rounds(), 3);
}
