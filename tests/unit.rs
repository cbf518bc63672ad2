//! Unit tests for core Ikebana types.
mod common;
use common::*;
use ikebana::prelude::*;

#[test]
fn test_size_class_codes() {
    assert_eq!(SizeClass::from_code('L'), Some(SizeClass::Large));
    assert_eq!(SizeClass::from_code('S'), Some(SizeClass::Small));
    assert_eq!(SizeClass::from_code('M'), None);
    assert_eq!(SizeClass::Large.code(), 'L');
    assert_eq!(format!("{}", SizeClass::Small), "S");
}

#[test]
fn test_flower_parsing() {
    let flower: Flower = "aS".parse().unwrap();
    assert_eq!(flower, Flower::new('a', SizeClass::Small));
    assert_eq!(flower.to_string(), "aS");

    for bad in ["", "a", "AS", "aX", "aSb"] {
        assert_eq!(
            bad.parse::<Flower>(),
            Err(IntakeError::InvalidFlower(bad.to_string()))
        );
    }
}

#[test]
fn test_extraction_from_raw_text() {
    let designs = extract_recipe_descriptions(SAMPLE_INPUT);
    assert_eq!(designs, vec!["AS2a1b3", "BS1c3", "AL1a1b4"]);

    let flowers: Vec<String> = extract_flowers(SAMPLE_INPUT)
        .take(4)
        .map(|f| f.to_string())
        .collect();
    assert_eq!(flowers, vec!["aS", "aS", "bL", "aL"]);
    assert_eq!(extract_flowers(SAMPLE_INPUT).count(), 14);
}

#[test]
fn test_inventory_tracks_first_appearance_order() {
    let mut inventory = Inventory::new();
    assert_eq!(inventory.increment('c'), 1);
    assert_eq!(inventory.increment('a'), 1);
    assert_eq!(inventory.increment('c'), 2);

    assert_eq!(inventory.count('c'), 2);
    assert_eq!(inventory.count('z'), 0);
    assert_eq!(inventory.iter().collect::<Vec<_>>(), vec![('c', 2), ('a', 1)]);
    assert_eq!(inventory.total(), 3);
}

#[test]
fn test_inventory_counts_are_wide() {
    // Counts are 64-bit so an unbounded stream cannot wrap them.
    let mut inventory = Inventory::new();
    let count: u64 = inventory.increment('a');
    let total: u64 = inventory.total();
    assert_eq!((count, total), (1, 1));
}

#[test]
fn test_required_sum_saturates() {
    let mut recipe = compile_recipe("AS1a1b2").unwrap();
    recipe.required.insert('a', u32::MAX);
    assert_eq!(recipe.required_sum(), u32::MAX);
    assert_eq!(recipe.filler(), 0);
}

#[test]
fn test_inventory_satisfiability() {
    let mut inventory = Inventory::new();
    let empty = compile_recipe("AS3").unwrap();
    let zero = compile_recipe("BS0a2").unwrap();
    let pair = compile_recipe("CS2a1b3").unwrap();

    assert!(inventory.satisfies(&empty));
    assert!(inventory.satisfies(&zero));
    assert!(!inventory.satisfies(&pair));

    inventory.increment('a');
    inventory.increment('a');
    assert!(!inventory.satisfies(&pair));
    inventory.increment('b');
    assert!(inventory.satisfies(&pair));
}

#[test]
fn test_registry_keeps_declaration_order() {
    let registry = registry(SizeClass::Small, &["CS1a2", "AS1b2", "BS1c2"]);

    let ids: Vec<char> = registry.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec!['C', 'A', 'B']);
    assert_eq!(registry.len(), 3);
    assert_eq!(registry.size(), SizeClass::Small);
}

#[test]
fn test_error_display() {
    let err = CompileError::ArityMismatch {
        description: "AS1ab5".to_string(),
        quantities: 2,
        flower_types: 2,
    };
    assert!(err.to_string().contains("AS1ab5"));

    let err = CompileError::TotalBelowRequired {
        description: "AS5a3".to_string(),
        total: 3,
        required: 5,
    };
    assert!(err.to_string().contains('3'));
    assert!(err.to_string().contains('5'));

    let err = IntakeError::InvalidFlower("XY".to_string());
    assert!(err.to_string().contains("XY"));

    let err = EmitError::Write {
        code: "AS10a10b".to_string(),
        message: "broken pipe".to_string(),
    };
    assert!(err.to_string().contains("AS10a10b"));
    assert!(err.to_string().contains("broken pipe"));
}
