//! Tests for the matching engine: precedence, deduction and filler handling.
mod common;
use common::*;
use ikebana::prelude::*;

#[test]
fn test_two_flower_design_completes_once() {
    let mut engine = small_engine(&["AS10a10b25"], FillerPolicy::SingleType);

    let emitted = feed(&mut engine, &"ab".repeat(10));

    assert_eq!(emitted, vec!["AS10a10b".to_string()]);
    assert_eq!(engine.inventory().count('a'), 0);
    assert_eq!(engine.inventory().count('b'), 0);
}

#[test]
fn test_filler_shortfall_still_emits() {
    let mut engine = small_engine(&["AS10a10b25"], FillerPolicy::SingleType);
    feed(&mut engine, &"a".repeat(10));
    feed(&mut engine, &"b".repeat(9));

    let bouquet = engine.receive('b').expect("The last 'b' should complete the design");

    assert_eq!(bouquet.display_code, "AS10a10b");
    assert_eq!(bouquet.filler, FillerOutcome::Shortfall { needed: 5 });
    assert_eq!(stock(&engine), vec![('a', 0), ('b', 0)]);
}

#[test]
fn test_one_flower_short_never_emits() {
    let mut engine = small_engine(&["AS10a10b25"], FillerPolicy::SingleType);

    let emitted = feed(&mut engine, &format!("{}{}", "a".repeat(9), "b".repeat(10)));

    assert!(emitted.is_empty());
    assert_eq!(stock(&engine), vec![('a', 9), ('b', 10)]);
}

#[test]
fn test_design_without_named_flowers_matches_on_first_flower() {
    let mut engine = small_engine(&["AS3"], FillerPolicy::SingleType);

    let first = engine.receive('a').expect("An empty design is always satisfiable");
    assert_eq!(first.display_code, "AS");
    assert_eq!(first.filler, FillerOutcome::Shortfall { needed: 3 });
    assert_eq!(engine.inventory().count('a'), 1);

    engine.receive('a');
    let third = engine.receive('a').expect("Every arrival completes the design");
    assert_eq!(
        third.filler,
        FillerOutcome::Deducted {
            taken: vec![('a', 3)]
        }
    );
    assert_eq!(engine.inventory().count('a'), 0);
}

#[test]
fn test_earlier_declared_design_wins() {
    let mut engine = small_engine(&["BS1b1a2", "AS1a1b2"], FillerPolicy::SingleType);
    assert_eq!(feed(&mut engine, "ab"), vec!["BS1b1a".to_string()]);
    assert_eq!(feed(&mut engine, "ba"), vec!["BS1b1a".to_string()]);

    let mut reversed = small_engine(&["AS1a1b2", "BS1b1a2"], FillerPolicy::SingleType);
    assert_eq!(feed(&mut reversed, "ab"), vec!["AS1a1b".to_string()]);
}

#[test]
fn test_at_most_one_bouquet_per_arrival() {
    let mut engine = small_engine(&["AS1a1", "BS1a1"], FillerPolicy::SingleType);
    feed(&mut engine, "bb");

    // Both designs are satisfiable once 'a' arrives; only the first completes.
    let emitted = feed(&mut engine, "a");
    assert_eq!(emitted, vec!["ASa1".to_string()]);
    assert_eq!(stock(&engine), vec![('b', 2), ('a', 0)]);
}

#[test]
fn test_non_matching_arrival_only_touches_its_own_type() {
    let mut engine = small_engine(&["AS5a5"], FillerPolicy::SingleType);

    for kind in "bcbdacab".chars() {
        let before = stock(&engine);
        assert!(engine.receive(kind).is_none());

        for (seen, count) in stock(&engine) {
            let previous = before
                .iter()
                .find(|(k, _)| *k == seen)
                .map_or(0, |(_, c)| *c);
            let expected = previous + u64::from(seen == kind);
            assert_eq!(count, expected, "count of '{}' after '{}'", seen, kind);
        }
    }
}

#[test]
fn test_named_flowers_are_deducted_exactly() {
    let mut engine = small_engine(&["AS2a1b3"], FillerPolicy::SingleType);
    feed(&mut engine, "aaa");

    let bouquet = engine.receive('b').expect("Design should complete");

    assert_eq!(bouquet.filler, FillerOutcome::NotNeeded);
    assert_eq!(stock(&engine), vec![('a', 1), ('b', 0)]);
}

#[test]
fn test_filler_taken_from_first_type_in_arrival_order() {
    let mut engine = small_engine(&["AS1a3"], FillerPolicy::SingleType);
    feed(&mut engine, "cbbc");

    let bouquet = engine.receive('a').expect("Design should complete");

    assert_eq!(
        bouquet.filler,
        FillerOutcome::Deducted {
            taken: vec![('c', 2)]
        }
    );
    assert_eq!(stock(&engine), vec![('c', 0), ('b', 2), ('a', 0)]);
}

#[test]
fn test_filler_skips_types_that_cannot_pay_in_full() {
    let mut engine = small_engine(&["AS1a3"], FillerPolicy::SingleType);
    feed(&mut engine, "cbbb");

    let bouquet = engine.receive('a').expect("Design should complete");

    assert_eq!(
        bouquet.filler,
        FillerOutcome::Deducted {
            taken: vec![('b', 2)]
        }
    );
    assert_eq!(stock(&engine), vec![('c', 1), ('b', 1), ('a', 0)]);
}

#[test]
fn test_single_type_filler_is_never_split() {
    let mut engine = small_engine(&["AS1a5"], FillerPolicy::SingleType);
    feed(&mut engine, "bbccc");

    let bouquet = engine.receive('a').expect("Design should complete");

    assert_eq!(bouquet.filler, FillerOutcome::Shortfall { needed: 4 });
    assert_eq!(stock(&engine), vec![('b', 2), ('c', 3), ('a', 0)]);
}

#[test]
fn test_spread_filler_drains_types_in_arrival_order() {
    let mut engine = small_engine(&["AS1a5"], FillerPolicy::Spread);
    feed(&mut engine, "bbccc");

    let bouquet = engine.receive('a').expect("Design should complete");

    assert_eq!(
        bouquet.filler,
        FillerOutcome::Deducted {
            taken: vec![('b', 2), ('c', 2)]
        }
    );
    assert_eq!(stock(&engine), vec![('b', 0), ('c', 1), ('a', 0)]);
}

#[test]
fn test_spread_filler_deducts_nothing_when_stock_is_short() {
    let mut engine = small_engine(&["AS1a5"], FillerPolicy::Spread);
    feed(&mut engine, "b");

    let bouquet = engine.receive('a').expect("Design should complete");

    assert_eq!(bouquet.filler, FillerOutcome::Shortfall { needed: 4 });
    assert_eq!(stock(&engine), vec![('b', 1), ('a', 0)]);
}

#[test]
fn test_size_classes_never_share_stock() {
    let book = Compiler::builder(["AL1a1b2", "AS2a1c3"])
        .build()
        .compile()
        .expect("Failed to compile");
    let mut facility = Facility::new(book, &FacilityConfig::default());

    let flowers = ["aL", "aS", "bL"].map(|f| f.parse::<Flower>().unwrap());
    let mut emitted: Vec<String> = Vec::new();
    facility.run(flowers, &mut emitted).unwrap();

    assert_eq!(emitted, vec!["AL1a1b".to_string()]);
    let small: Vec<(char, u64)> = facility.engine(SizeClass::Small).inventory().iter().collect();
    assert_eq!(small, vec![('a', 1)]);

    let flowers = ["aS", "cS"].map(|f| f.parse::<Flower>().unwrap());
    facility.run(flowers, &mut emitted).unwrap();
    assert_eq!(emitted, vec!["AL1a1b".to_string(), "AS2a1c".to_string()]);
    assert!(facility.engine(SizeClass::Large).inventory().is_empty());
}
