//! A second kind family on the generic registry, plus the builtin cursor kinds.

use cxhandle::kinds::{self, CursorKind, KindRegistry, NativeKind, normalize_kind_name};
use cxhandle::Error;
use rstest::rstest;

/// Stand-in for another native enumeration (e.g. `CXTypeKind`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
struct TypeKind(i32);

impl NativeKind for TypeKind {
    fn from_raw_value(value: i32) -> Self {
        TypeKind(value)
    }

    fn raw_value(self) -> i32 {
        self.0
    }
}

fn type_kinds() -> KindRegistry<TypeKind> {
    let mut registry = KindRegistry::new();
    for (value, token) in [(2, "Void"), (17, "Int"), (101, "Pointer"), (119, "ObjCObjectPointer")] {
        registry.register(value, token).unwrap();
    }
    registry
}

#[rstest]
#[case(2, "VOID")]
#[case(17, "INT")]
#[case(119, "OBJC_OBJECT_POINTER")]
fn test_type_kind_names(#[case] value: i32, #[case] expected: &str) {
    let registry = type_kinds();
    let kind = registry.lookup(value).unwrap();
    assert_eq!(kind.raw_value(), value);
    assert_eq!(registry.name(kind).unwrap(), expected);
}

#[test]
fn test_registries_are_independent() {
    let registry = type_kinds();
    // 2 is STRUCT_DECL among cursor kinds
    assert_eq!(registry.name(TypeKind(2)).unwrap(), "VOID");
    assert_eq!(CursorKind::from_raw(2).unwrap(), CursorKind::STRUCT_DECL);
    assert!(matches!(registry.lookup(8), Err(Error::UnknownKind(8))));
}

#[test]
fn test_duplicate_registration_reports_existing_name() {
    let mut registry = type_kinds();
    let err = registry.register(17, "SignedInt").unwrap_err();
    assert_eq!(err.to_string(), "kind 17 is already registered as INT");
}

#[rstest]
#[case("UnexposedDecl", "UNEXPOSED_DECL")]
#[case("CXXMethod", "CXX_METHOD")]
#[case("ObjCInterfaceDecl", "OBJC_INTERFACE_DECL")]
fn test_normalize_reference_tokens(#[case] token: &str, #[case] expected: &str) {
    assert_eq!(normalize_kind_name(token), expected);
}

#[test]
fn test_builtin_registry_lists_every_kind_once() {
    let registry = kinds::initialize().unwrap();
    let listed: Vec<_> = kinds::all_cursor_kinds().unwrap().collect();
    assert_eq!(listed.len(), registry.len());
    assert!(listed.contains(&(CursorKind::FUNCTION_DECL, "FUNCTION_DECL")));
    assert!(listed.contains(&(CursorKind::OBJC_INTERFACE_DECL, "OBJC_INTERFACE_DECL")));
    assert!(!registry.contains(-1));
}
