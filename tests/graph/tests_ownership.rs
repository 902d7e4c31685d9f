//! Lifetime tests: children keep parents alive, disposal runs bottom-up.

use cxhandle::{Error, Index, IndexOptions};

use crate::helpers::fake_engine::{Event, FakeEngine};
use crate::helpers::fixtures::{self, SHAPES};

#[test]
fn test_index_creation_failure() {
    let engine = FakeEngine::new();
    engine.fail_index_creation();
    let result = Index::create(engine.shared(), IndexOptions::default());
    assert!(matches!(result, Err(Error::CreationFailed)));
    assert_eq!(engine.calls("dispose_index"), 0);
}

#[test]
fn test_index_disposed_once_across_clones() {
    let engine = FakeEngine::new();
    let index = fixtures::index(&engine);
    let copy = index.clone();
    assert!(copy.ptr_eq(&index));
    drop(index);
    assert_eq!(engine.live_indexes(), 1);
    drop(copy);
    assert_eq!(engine.live_indexes(), 0);
    assert_eq!(engine.calls("dispose_index"), 1);
}

#[test]
fn test_cursor_outlives_unit_and_index_handles() {
    let engine = fixtures::engine();
    let index = fixtures::index(&engine);
    let tu = index
        .parse(SHAPES, &[] as &[&str], &[], Default::default())
        .unwrap();
    let cursor = tu.cursor().unwrap();

    drop(index);
    drop(tu);
    assert!(engine.events().is_empty());
    assert_eq!(cursor.spelling().unwrap(), SHAPES);

    drop(cursor);
    let events = engine.events();
    assert_eq!(events.len(), 2);
    assert!(matches!(events[0], Event::DisposeTranslationUnit(_)));
    assert!(matches!(events[1], Event::DisposeIndex(_)));
}

#[test]
fn test_file_keeps_unit_alive() {
    let engine = fixtures::engine();
    let file = fixtures::parse(&engine, SHAPES).get_file(SHAPES).unwrap();
    assert_eq!(engine.live_units(), 1);
    assert_eq!(file.name().unwrap(), SHAPES);
    drop(file);
    assert_eq!(engine.live_units(), 0);
    assert_eq!(engine.live_indexes(), 0);
}

#[test]
fn test_derived_cursor_keeps_unit_alive() {
    let engine = fixtures::engine();
    let tu = fixtures::parse(&engine, SHAPES);
    let child = tu.cursor().unwrap().get_children().unwrap().front().unwrap();
    drop(tu);
    assert_eq!(engine.live_units(), 1);
    let parent = child.semantic_parent().unwrap().clone();
    drop(child);
    assert_eq!(engine.live_units(), 1);
    assert_eq!(parent.spelling().unwrap(), SHAPES);
    drop(parent);
    assert_eq!(engine.live_units(), 0);
}

#[test]
fn test_many_units_share_one_index() {
    let engine = fixtures::engine();
    let index = fixtures::index(&engine);
    let first = index
        .parse(SHAPES, &[] as &[&str], &[], Default::default())
        .unwrap();
    let second = index
        .parse(SHAPES, &[] as &[&str], &[], Default::default())
        .unwrap();
    assert!(first.index().ptr_eq(second.index()));
    assert!(!first.ptr_eq(&second));
    drop(index);
    drop(first);
    assert_eq!(engine.live_indexes(), 1);
    drop(second);
    assert_eq!(engine.live_indexes(), 0);
    assert_eq!(engine.calls("dispose_translation_unit"), 2);
}

#[test]
fn test_strings_are_always_released() {
    let engine = fixtures::engine();
    let tu = fixtures::parse(&engine, SHAPES);
    let root = tu.cursor().unwrap();
    let _ = tu.spelling().unwrap();
    let _ = root.spelling().unwrap();
    let _ = root.displayname().unwrap();
    for child in root.get_children().unwrap().iter() {
        let child = child.unwrap();
        let _ = child.get_usr();
        let _ = child.brief_comment().unwrap();
    }
    assert_eq!(engine.live_strings(), 0);
}
