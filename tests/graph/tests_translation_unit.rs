//! Translation unit construction, files, reparse and save.

use cxhandle::{
    Error, ErrorCode, ParseOptions, ReparseOptions, SaveError, TranslationUnit, UnsavedFile,
};
use tempfile::TempDir;

use crate::helpers::fixtures::{self, EMPTY, SHAPES, SHAPES_HEADER};

#[test]
fn test_parse_passes_arguments_and_overrides() {
    let engine = fixtures::engine();
    let index = fixtures::index(&engine);
    let unsaved = [UnsavedFile::new(SHAPES_HEADER, "#define N 3\n")];
    let options = ParseOptions::DETAILED_PREPROCESSING_RECORD | ParseOptions::from_bits_retain(1 << 20);
    let tu = index
        .parse(SHAPES, &["-std=c11", "-DMODE=2"], &unsaved, options)
        .unwrap();

    assert_eq!(engine.last_args(), vec!["-std=c11", "-DMODE=2"]);
    assert_eq!(
        engine.last_unsaved(),
        vec![(SHAPES_HEADER.to_string(), b"#define N 3\n".to_vec())]
    );
    assert_eq!(engine.last_parse_options(), Some(0x01 | (1 << 20)));
    assert_eq!(tu.spelling().unwrap(), SHAPES);
}

#[test]
fn test_parse_failure_names_path() {
    let engine = fixtures::engine();
    let err = fixtures::index(&engine)
        .parse("missing.c", &[] as &[&str], &[], ParseOptions::empty())
        .unwrap_err();
    assert!(matches!(err, Error::ParseFailed { ref path } if path == "missing.c"));
    assert_eq!(engine.live_indexes(), 0);
}

#[test]
fn test_interior_nul_never_reaches_engine() {
    let engine = fixtures::engine();
    let index = fixtures::index(&engine);
    let err = index
        .parse(SHAPES, &["-D\0"], &[], ParseOptions::empty())
        .unwrap_err();
    assert!(matches!(err, Error::InteriorNul { .. }));
    assert_eq!(engine.calls("parse_translation_unit"), 0);
}

#[test]
fn test_from_source_owns_private_index() {
    let engine = fixtures::engine();
    let tu = TranslationUnit::from_source(
        engine.shared(),
        SHAPES,
        &[] as &[&str],
        &[],
        ParseOptions::empty(),
    )
    .unwrap();
    assert_eq!(engine.live_indexes(), 1);
    drop(tu);
    assert_eq!(engine.live_indexes(), 0);
}

#[test]
fn test_root_cursor_unavailable() {
    let engine = fixtures::engine();
    let tu = fixtures::parse(&engine, EMPTY);
    assert!(matches!(tu.cursor(), Err(Error::RootCursorUnavailable)));
}

#[test]
fn test_get_file_and_metadata() {
    let engine = fixtures::engine();
    let tu = fixtures::parse(&engine, SHAPES);
    let header = tu.get_file(SHAPES_HEADER).unwrap();
    assert_eq!(header.name().unwrap(), SHAPES_HEADER);
    assert_eq!(header.time(), 1_600_000_000);
    assert_eq!(header.to_string(), SHAPES_HEADER);
    assert_eq!(format!("{header:?}"), "<File: shapes.h>");
    assert!(header.translation_unit().ptr_eq(&tu));
}

#[test]
fn test_get_file_not_in_unit() {
    let engine = fixtures::engine();
    let tu = fixtures::parse(&engine, SHAPES);
    let err = tu.get_file("other.h").unwrap_err();
    assert!(matches!(err, Error::FileNotInTranslationUnit { ref path } if path == "other.h"));
}

#[test]
fn test_reparse_defaults_and_generation() {
    let engine = fixtures::engine();
    let tu = fixtures::parse(&engine, SHAPES);
    let before = tu.cursor().unwrap();
    assert!(!before.is_stale());

    tu.reparse(&[], None).unwrap();
    assert_eq!(engine.calls("default_reparse_options"), 1);
    assert_eq!(engine.last_reparse_options(), Some(0x7));
    assert_eq!(tu.generation(), 1);
    assert!(before.is_stale());
    assert!(!tu.cursor().unwrap().is_stale());

    let unsaved = [UnsavedFile::new(SHAPES, "int x;")];
    tu.reparse(&unsaved, Some(ReparseOptions::from_bits_retain(0x40)))
        .unwrap();
    assert_eq!(engine.calls("default_reparse_options"), 1);
    assert_eq!(engine.last_reparse_options(), Some(0x40));
    assert_eq!(engine.last_unsaved()[0].1, b"int x;".to_vec());
}

#[test]
fn test_cursors_reached_from_stale_cursor_are_stale() {
    let engine = fixtures::engine();
    let tu = fixtures::parse(&engine, SHAPES);
    let root = tu.cursor().unwrap();
    tu.reparse(&[], None).unwrap();
    assert!(root.is_stale());

    let children = root.get_children().unwrap();
    let flags = children.front().unwrap();
    assert!(flags.is_stale());
    assert!(flags.semantic_parent().unwrap().is_stale());
    assert!(flags.canonical().unwrap().is_stale());

    let area = children.at(1).unwrap();
    assert!(area.get_arguments().unwrap().front().unwrap().is_stale());

    // A fresh root and what is reached from it are current
    let fresh = tu.cursor().unwrap();
    let fresh_child = fresh.get_children().unwrap().front().unwrap();
    assert!(!fresh_child.is_stale());
    assert!(!fresh_child.semantic_parent().unwrap().is_stale());
}

#[test]
fn test_reparse_failure_keeps_generation() {
    let engine = fixtures::engine();
    let tu = fixtures::parse(&engine, SHAPES);
    engine.set_reparse_status(2);
    let err = tu.reparse(&[], None).unwrap_err();
    assert!(matches!(
        err,
        Error::ReparseFailed {
            code: ErrorCode::Crashed
        }
    ));
    assert_eq!(tu.generation(), 0);
}

#[test]
fn test_save_then_read_back() {
    let engine = fixtures::engine();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("shapes.ast");

    let tu = fixtures::parse(&engine, SHAPES);
    tu.save(&path).unwrap();
    assert_eq!(engine.calls("default_save_options"), 1);

    let loaded = tu.index().read(&path).unwrap();
    assert_eq!(loaded.cursor().unwrap().get_children().unwrap().len(), 3);

    let standalone = TranslationUnit::from_ast_file(engine.shared(), &path).unwrap();
    assert_eq!(standalone.spelling().unwrap(), SHAPES);
}

#[test]
fn test_read_failure() {
    let engine = fixtures::engine();
    let err = fixtures::index(&engine).read("nowhere.ast").unwrap_err();
    assert!(matches!(err, Error::LoadFailed { ref path } if path == "nowhere.ast"));
}

#[test]
fn test_save_failure_carries_subcode() {
    let engine = fixtures::engine();
    let tu = fixtures::parse(&engine, SHAPES);
    engine.set_save_status(2);
    let err = tu.save("out.ast").unwrap_err();
    assert!(matches!(
        err,
        Error::SaveFailed {
            code: SaveError::TranslationErrors,
            ref path,
        } if path == "out.ast"
    ));
    assert_eq!(err.to_string(), "error 2 saving translation unit to out.ast");
}

#[test]
fn test_file_from_name_matches_get_file() {
    let engine = fixtures::engine();
    let tu = fixtures::parse(&engine, SHAPES);
    let by_name = cxhandle::File::from_name(&tu, SHAPES).unwrap();
    assert_eq!(by_name.name().unwrap(), tu.get_file(SHAPES).unwrap().name().unwrap());
    assert!(cxhandle::File::from_name(&tu, "nope.h").is_err());
}
