//! Children and argument sequences.

use cxhandle::kinds::CursorKind;
use cxhandle::Error;

use crate::helpers::fixtures::{self, BROKEN, SHAPES};

#[test]
fn test_children_in_order_and_repeatable() {
    let engine = fixtures::engine();
    let tu = fixtures::parse(&engine, SHAPES);
    let children = tu.cursor().unwrap().get_children().unwrap();
    assert_eq!(children.len(), 3);
    assert_eq!(engine.calls("visit_children"), 1);

    let names: Vec<String> = children
        .iter()
        .map(|c| c.unwrap().spelling().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["flags", "area", "area"]);

    let again: Vec<_> = children.iter().map(Result::unwrap).collect();
    assert_eq!(again.len(), 3);
    // Iterating does not walk the AST again
    assert_eq!(engine.calls("visit_children"), 1);
}

#[test]
fn test_children_reverse_iteration() {
    let engine = fixtures::engine();
    let tu = fixtures::parse(&engine, SHAPES);
    let children = tu.cursor().unwrap().get_children().unwrap();
    let kinds: Vec<_> = children
        .iter()
        .rev()
        .map(|c| c.unwrap().kind().unwrap())
        .collect();
    assert_eq!(
        kinds,
        vec![
            CursorKind::FUNCTION_DECL,
            CursorKind::FUNCTION_DECL,
            CursorKind::STRUCT_DECL
        ]
    );
}

#[test]
fn test_each_call_walks_again() {
    let engine = fixtures::engine();
    let root = fixtures::parse(&engine, SHAPES).cursor().unwrap();
    let _ = root.get_children().unwrap();
    let _ = root.get_children().unwrap();
    assert_eq!(engine.calls("visit_children"), 2);
}

#[test]
fn test_leaf_has_no_children() {
    let engine = fixtures::engine();
    let tu = fixtures::parse(&engine, SHAPES);
    let flags = tu.cursor().unwrap().get_children().unwrap().front().unwrap();
    let ready = flags.get_children().unwrap().front().unwrap();
    let leaf = ready.get_children().unwrap();
    assert!(leaf.is_empty());
    assert!(matches!(leaf.front(), Err(Error::IndexOutOfRange { index: 0, len: 0 })));
}

#[test]
fn test_null_child_fails_traversal() {
    let engine = fixtures::engine();
    let root = fixtures::parse(&engine, BROKEN).cursor().unwrap();
    assert!(matches!(root.get_children(), Err(Error::ChildVisitFailed)));
}

#[test]
fn test_arguments_fetched_per_access() {
    let engine = fixtures::engine();
    let tu = fixtures::parse(&engine, SHAPES);
    let area = tu.cursor().unwrap().get_children().unwrap().at(1).unwrap();
    let args = area.get_arguments().unwrap();
    assert_eq!(args.len(), 2);
    assert_eq!(engine.calls("num_arguments"), 1);
    assert_eq!(engine.calls("argument"), 0);

    assert_eq!(args.at(0).unwrap().spelling().unwrap(), "w");
    assert_eq!(args.back().unwrap().spelling().unwrap(), "h");
    let _ = args.at(0).unwrap();
    assert_eq!(engine.calls("argument"), 3);
    assert!(matches!(args.at(2), Err(Error::IndexOutOfRange { index: 2, len: 2 })));
    assert_eq!(engine.calls("argument"), 3);
}

#[test]
fn test_negative_argument_count_is_empty() {
    let engine = fixtures::engine();
    let tu = fixtures::parse(&engine, SHAPES);
    let flags = tu.cursor().unwrap().get_children().unwrap().front().unwrap();
    let args = flags.get_arguments().unwrap();
    assert!(args.is_empty());
    assert_eq!(args.iter().count(), 0);
}

#[test]
fn test_null_argument_fails_at_access() {
    let engine = fixtures::engine();
    let tu = fixtures::parse(&engine, SHAPES);
    let prototype = tu.cursor().unwrap().get_children().unwrap().back().unwrap();
    let args = prototype.get_arguments().unwrap();
    assert_eq!(args.len(), 3);
    assert!(args.at(1).is_ok());
    assert!(matches!(
        args.at(2),
        Err(Error::NativeQueryFailed { operation: "get_arguments" })
    ));
    assert!(args.try_collect_vec().is_err());
}
