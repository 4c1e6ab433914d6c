//! Catalog completeness tests.
//!
//! The index in `catalog` promises one entry per demonstration module; these
//! tests hold it to that and to stable serialized names.

use rustc_hash::FxHashSet;
use smellbook::catalog::{refactorings, smells, Refactoring, RefactoringGroup, Smell};

#[test]
fn test_ten_smells_cataloged() {
    assert_eq!(smells().len(), 10);
    let names: FxHashSet<&str> = smells().iter().map(Smell::name).collect();
    assert_eq!(names.len(), 10, "smell names must be unique");
}

#[test]
fn test_fifty_five_refactorings_cataloged() {
    assert_eq!(refactorings().len(), 55);
    let names: FxHashSet<&str> = refactorings().iter().map(Refactoring::name).collect();
    assert_eq!(names.len(), 55, "refactoring names must be unique");
}

#[test]
fn test_every_group_is_represented() {
    let groups: FxHashSet<RefactoringGroup> =
        refactorings().iter().map(Refactoring::group).collect();
    assert_eq!(groups.len(), 7);
}

#[test]
fn test_group_sizes() {
    let count = |group: RefactoringGroup| {
        refactorings()
            .iter()
            .filter(|r| r.group() == group)
            .count()
    };
    assert_eq!(count(RefactoringGroup::ComposingMethods), 8);
    assert_eq!(count(RefactoringGroup::MovingFeatures), 8);
    assert_eq!(count(RefactoringGroup::OrganizingData), 6);
    assert_eq!(count(RefactoringGroup::SimplifyingConditionals), 8);
    assert_eq!(count(RefactoringGroup::SimplifyingMethodCalls), 12);
    assert_eq!(count(RefactoringGroup::Generalization), 9);
    assert_eq!(count(RefactoringGroup::BigRefactorings), 4);
}

#[test]
fn test_smell_names_round_trip_through_json() {
    for smell in smells() {
        let json = serde_json::to_string(smell).unwrap();
        let back: Smell = serde_json::from_str(&json).unwrap();
        assert_eq!(back, *smell);
        assert_eq!(json, format!("\"{}\"", smell.name()));
    }
}

#[test]
fn test_remedies_point_into_the_catalog() {
    for smell in smells() {
        for remedy in smell.remedies() {
            assert!(
                refactorings().contains(remedy),
                "{} lists uncataloged remedy {}",
                smell.name(),
                remedy.name()
            );
        }
    }
}
