//! Canned ASTs for the fake engine.

use std::rc::Rc;

use cxhandle::kinds::CursorKind;
use cxhandle::{Index, IndexOptions, ParseOptions, TranslationUnit};

use super::fake_engine::{FakeAst, FakeEngine, FakeNode};

pub const SHAPES: &str = "shapes.c";
pub const SHAPES_HEADER: &str = "shapes.h";
/// Root cursor yields a null child mid-walk.
pub const BROKEN: &str = "broken.c";
/// Parses, but has no root cursor.
pub const EMPTY: &str = "empty.c";

pub const ROOT: usize = 0;
pub const STRUCT_FLAGS: usize = 1;
pub const FIELD_READY: usize = 2;
pub const FIELD_COUNT: usize = 3;
pub const FN_AREA: usize = 4;
pub const PARAM_W: usize = 5;
pub const PARAM_H: usize = 6;
pub const FN_AREA_PROTO: usize = 7;
pub const BODY: usize = 8;
pub const REF_W: usize = 9;

/// Equivalent of:
///
/// ```c
/// struct flags { unsigned ready : 1; int count; };
/// /// Compute an area.
/// int area(int w, int h) { w; }
/// int area(int w, int h);
/// ```
pub fn shapes_ast() -> FakeAst {
    let mut root = FakeNode::new(CursorKind::TRANSLATION_UNIT, SHAPES).children(&[
        STRUCT_FLAGS,
        FN_AREA,
        FN_AREA_PROTO,
    ]);
    root.canonical = Some(ROOT);

    let mut flags = FakeNode::new(CursorKind::STRUCT_DECL, "flags")
        .children(&[FIELD_READY, FIELD_COUNT])
        .parent(ROOT);
    flags.canonical = Some(STRUCT_FLAGS);
    flags.definition = Some(STRUCT_FLAGS);
    flags.is_definition = true;
    flags.usr = Some("c:@S@flags".to_string());
    flags.argument_count = Some(-1);

    let mut ready = FakeNode::new(CursorKind::FIELD_DECL, "ready").parent(STRUCT_FLAGS);
    ready.bit_width = Some(1);
    ready.canonical = Some(FIELD_READY);
    let count = FakeNode::new(CursorKind::FIELD_DECL, "count").parent(STRUCT_FLAGS);

    let mut area = FakeNode::new(CursorKind::FUNCTION_DECL, "area")
        .children(&[PARAM_W, PARAM_H, BODY])
        .parent(ROOT);
    area.display_name = "area(int, int)".to_string();
    area.arguments = vec![PARAM_W, PARAM_H];
    area.canonical = Some(FN_AREA_PROTO);
    area.definition = Some(FN_AREA);
    area.is_definition = true;
    area.usr = Some("c:@F@area".to_string());
    area.brief_comment = Some("Compute an area.".to_string());
    area.raw_comment = Some("/// Compute an area.".to_string());

    let w = FakeNode::new(CursorKind::PARM_DECL, "w").parent(FN_AREA);
    let h = FakeNode::new(CursorKind::PARM_DECL, "h").parent(FN_AREA);

    let mut proto = FakeNode::new(CursorKind::FUNCTION_DECL, "area").parent(ROOT);
    proto.display_name = "area(int, int)".to_string();
    proto.arguments = vec![PARAM_W, PARAM_H];
    // Claims one more parameter than it can produce
    proto.argument_count = Some(3);
    proto.canonical = Some(FN_AREA_PROTO);
    proto.definition = Some(FN_AREA);

    let body = FakeNode::new(CursorKind::COMPOUND_STMT, "")
        .children(&[REF_W])
        .parent(FN_AREA);
    let mut ref_w = FakeNode::new(CursorKind::DECL_REF_EXPR, "w").parent(BODY);
    ref_w.referenced = Some(PARAM_W);

    FakeAst {
        main: SHAPES.to_string(),
        nodes: vec![root, flags, ready, count, area, w, h, proto, body, ref_w],
        files: vec![
            (SHAPES.to_string(), 1_700_000_000),
            (SHAPES_HEADER.to_string(), 1_600_000_000),
        ],
    }
}

fn broken_ast() -> FakeAst {
    let mut root = FakeNode::new(CursorKind::TRANSLATION_UNIT, BROKEN).children(&[1]);
    root.null_child = true;
    FakeAst {
        main: BROKEN.to_string(),
        nodes: vec![root, FakeNode::new(CursorKind::VAR_DECL, "x").parent(ROOT)],
        files: vec![(BROKEN.to_string(), 0)],
    }
}

fn empty_ast() -> FakeAst {
    FakeAst {
        main: EMPTY.to_string(),
        nodes: Vec::new(),
        files: Vec::new(),
    }
}

/// A fake engine that knows every fixture source.
pub fn engine() -> Rc<FakeEngine> {
    let engine = FakeEngine::new();
    engine.add_source(SHAPES, shapes_ast());
    engine.add_source(BROKEN, broken_ast());
    engine.add_source(EMPTY, empty_ast());
    engine
}

pub fn index(engine: &Rc<FakeEngine>) -> Index {
    Index::create(engine.shared(), IndexOptions::default()).unwrap()
}

pub fn parse(engine: &Rc<FakeEngine>, path: &str) -> TranslationUnit {
    index(engine)
        .parse(path, &[] as &[&str], &[], ParseOptions::empty())
        .unwrap()
}
