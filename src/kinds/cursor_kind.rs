//! Cursor kinds.
//!
//! Every builtin kind is both an associated constant on [`CursorKind`] and an
//! entry in the table the process-wide registry is built from, so the two can
//! never drift apart.

use std::fmt;

use super::registry::NativeKind;
use crate::error::Result;

/// Classification of a cursor, backed by the engine's `CXCursorKind` integer.
///
/// Compares and hashes by the integer only. Obtain one through
/// [`CursorKind::from_raw`] or the associated constants.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CursorKind(i32);

impl NativeKind for CursorKind {
    fn from_raw_value(value: i32) -> Self {
        CursorKind(value)
    }

    fn raw_value(self) -> i32 {
        self.0
    }
}

macro_rules! cursor_kinds {
    ($($token:ident = $value:literal => $konst:ident,)*) => {
        #[allow(missing_docs)]
        impl CursorKind {
            $(pub const $konst: CursorKind = CursorKind($value);)*
        }

        /// `(value, enumerator token, constant name)` for every builtin kind.
        pub(crate) const BUILTIN_KINDS: &[(i32, &str, &str)] = &[
            $(($value, stringify!($token), stringify!($konst)),)*
        ];
    };
}

// Numbering follows the engine's published enumeration as of LLVM 17. LLVM 16
// moved `TranslationUnit` from 300 to 350 to make room for statements, so
// older engines are rejected by `Libclang::load`. Alias enumerators
// (MacroInstantiation, AsmStmt) share a value with the spelling listed here
// and are not registered separately.
cursor_kinds! {
    // Declarations
    UnexposedDecl = 1 => UNEXPOSED_DECL,
    StructDecl = 2 => STRUCT_DECL,
    UnionDecl = 3 => UNION_DECL,
    ClassDecl = 4 => CLASS_DECL,
    EnumDecl = 5 => ENUM_DECL,
    FieldDecl = 6 => FIELD_DECL,
    EnumConstantDecl = 7 => ENUM_CONSTANT_DECL,
    FunctionDecl = 8 => FUNCTION_DECL,
    VarDecl = 9 => VAR_DECL,
    ParmDecl = 10 => PARM_DECL,
    ObjCInterfaceDecl = 11 => OBJC_INTERFACE_DECL,
    ObjCCategoryDecl = 12 => OBJC_CATEGORY_DECL,
    ObjCProtocolDecl = 13 => OBJC_PROTOCOL_DECL,
    ObjCPropertyDecl = 14 => OBJC_PROPERTY_DECL,
    ObjCIvarDecl = 15 => OBJC_IVAR_DECL,
    ObjCInstanceMethodDecl = 16 => OBJC_INSTANCE_METHOD_DECL,
    ObjCClassMethodDecl = 17 => OBJC_CLASS_METHOD_DECL,
    ObjCImplementationDecl = 18 => OBJC_IMPLEMENTATION_DECL,
    ObjCCategoryImplDecl = 19 => OBJC_CATEGORY_IMPL_DECL,
    TypedefDecl = 20 => TYPEDEF_DECL,
    CXXMethod = 21 => CXX_METHOD,
    Namespace = 22 => NAMESPACE,
    LinkageSpec = 23 => LINKAGE_SPEC,
    Constructor = 24 => CONSTRUCTOR,
    Destructor = 25 => DESTRUCTOR,
    ConversionFunction = 26 => CONVERSION_FUNCTION,
    TemplateTypeParameter = 27 => TEMPLATE_TYPE_PARAMETER,
    NonTypeTemplateParameter = 28 => NON_TYPE_TEMPLATE_PARAMETER,
    TemplateTemplateParameter = 29 => TEMPLATE_TEMPLATE_PARAMETER,
    FunctionTemplate = 30 => FUNCTION_TEMPLATE,
    ClassTemplate = 31 => CLASS_TEMPLATE,
    ClassTemplatePartialSpecialization = 32 => CLASS_TEMPLATE_PARTIAL_SPECIALIZATION,
    NamespaceAlias = 33 => NAMESPACE_ALIAS,
    UsingDirective = 34 => USING_DIRECTIVE,
    UsingDeclaration = 35 => USING_DECLARATION,
    TypeAliasDecl = 36 => TYPE_ALIAS_DECL,
    ObjCSynthesizeDecl = 37 => OBJC_SYNTHESIZE_DECL,
    ObjCDynamicDecl = 38 => OBJC_DYNAMIC_DECL,
    CXXAccessSpecifier = 39 => CXX_ACCESS_SPECIFIER,
    // References
    ObjCSuperClassRef = 40 => OBJC_SUPER_CLASS_REF,
    ObjCProtocolRef = 41 => OBJC_PROTOCOL_REF,
    ObjCClassRef = 42 => OBJC_CLASS_REF,
    TypeRef = 43 => TYPE_REF,
    CXXBaseSpecifier = 44 => CXX_BASE_SPECIFIER,
    TemplateRef = 45 => TEMPLATE_REF,
    NamespaceRef = 46 => NAMESPACE_REF,
    MemberRef = 47 => MEMBER_REF,
    LabelRef = 48 => LABEL_REF,
    OverloadedDeclRef = 49 => OVERLOADED_DECL_REF,
    VariableRef = 50 => VARIABLE_REF,
    // Error conditions
    InvalidFile = 70 => INVALID_FILE,
    NoDeclFound = 71 => NO_DECL_FOUND,
    NotImplemented = 72 => NOT_IMPLEMENTED,
    InvalidCode = 73 => INVALID_CODE,
    // Expressions
    UnexposedExpr = 100 => UNEXPOSED_EXPR,
    DeclRefExpr = 101 => DECL_REF_EXPR,
    MemberRefExpr = 102 => MEMBER_REF_EXPR,
    CallExpr = 103 => CALL_EXPR,
    ObjCMessageExpr = 104 => OBJC_MESSAGE_EXPR,
    BlockExpr = 105 => BLOCK_EXPR,
    IntegerLiteral = 106 => INTEGER_LITERAL,
    FloatingLiteral = 107 => FLOATING_LITERAL,
    ImaginaryLiteral = 108 => IMAGINARY_LITERAL,
    StringLiteral = 109 => STRING_LITERAL,
    CharacterLiteral = 110 => CHARACTER_LITERAL,
    ParenExpr = 111 => PAREN_EXPR,
    UnaryOperator = 112 => UNARY_OPERATOR,
    ArraySubscriptExpr = 113 => ARRAY_SUBSCRIPT_EXPR,
    BinaryOperator = 114 => BINARY_OPERATOR,
    CompoundAssignOperator = 115 => COMPOUND_ASSIGN_OPERATOR,
    ConditionalOperator = 116 => CONDITIONAL_OPERATOR,
    CStyleCastExpr = 117 => C_STYLE_CAST_EXPR,
    CompoundLiteralExpr = 118 => COMPOUND_LITERAL_EXPR,
    InitListExpr = 119 => INIT_LIST_EXPR,
    AddrLabelExpr = 120 => ADDR_LABEL_EXPR,
    StmtExpr = 121 => STMT_EXPR,
    GenericSelectionExpr = 122 => GENERIC_SELECTION_EXPR,
    GNUNullExpr = 123 => GNU_NULL_EXPR,
    CXXStaticCastExpr = 124 => CXX_STATIC_CAST_EXPR,
    CXXDynamicCastExpr = 125 => CXX_DYNAMIC_CAST_EXPR,
    CXXReinterpretCastExpr = 126 => CXX_REINTERPRET_CAST_EXPR,
    CXXConstCastExpr = 127 => CXX_CONST_CAST_EXPR,
    CXXFunctionalCastExpr = 128 => CXX_FUNCTIONAL_CAST_EXPR,
    CXXTypeidExpr = 129 => CXX_TYPEID_EXPR,
    CXXBoolLiteralExpr = 130 => CXX_BOOL_LITERAL_EXPR,
    CXXNullPtrLiteralExpr = 131 => CXX_NULL_PTR_LITERAL_EXPR,
    CXXThisExpr = 132 => CXX_THIS_EXPR,
    CXXThrowExpr = 133 => CXX_THROW_EXPR,
    CXXNewExpr = 134 => CXX_NEW_EXPR,
    CXXDeleteExpr = 135 => CXX_DELETE_EXPR,
    UnaryExpr = 136 => UNARY_EXPR,
    ObjCStringLiteral = 137 => OBJC_STRING_LITERAL,
    ObjCEncodeExpr = 138 => OBJC_ENCODE_EXPR,
    ObjCSelectorExpr = 139 => OBJC_SELECTOR_EXPR,
    ObjCProtocolExpr = 140 => OBJC_PROTOCOL_EXPR,
    ObjCBridgedCastExpr = 141 => OBJC_BRIDGED_CAST_EXPR,
    PackExpansionExpr = 142 => PACK_EXPANSION_EXPR,
    SizeOfPackExpr = 143 => SIZE_OF_PACK_EXPR,
    LambdaExpr = 144 => LAMBDA_EXPR,
    ObjCBoolLiteralExpr = 145 => OBJC_BOOL_LITERAL_EXPR,
    ObjCSelfExpr = 146 => OBJC_SELF_EXPR,
    OMPArraySectionExpr = 147 => OMP_ARRAY_SECTION_EXPR,
    ObjCAvailabilityCheckExpr = 148 => OBJC_AVAILABILITY_CHECK_EXPR,
    FixedPointLiteral = 149 => FIXED_POINT_LITERAL,
    OMPArrayShapingExpr = 150 => OMP_ARRAY_SHAPING_EXPR,
    OMPIteratorExpr = 151 => OMP_ITERATOR_EXPR,
    CXXAddrspaceCastExpr = 152 => CXX_ADDRSPACE_CAST_EXPR,
    ConceptSpecializationExpr = 153 => CONCEPT_SPECIALIZATION_EXPR,
    RequiresExpr = 154 => REQUIRES_EXPR,
    CXXParenListInitExpr = 155 => CXX_PAREN_LIST_INIT_EXPR,
    // Statements
    UnexposedStmt = 200 => UNEXPOSED_STMT,
    LabelStmt = 201 => LABEL_STMT,
    CompoundStmt = 202 => COMPOUND_STMT,
    CaseStmt = 203 => CASE_STMT,
    DefaultStmt = 204 => DEFAULT_STMT,
    IfStmt = 205 => IF_STMT,
    SwitchStmt = 206 => SWITCH_STMT,
    WhileStmt = 207 => WHILE_STMT,
    DoStmt = 208 => DO_STMT,
    ForStmt = 209 => FOR_STMT,
    GotoStmt = 210 => GOTO_STMT,
    IndirectGotoStmt = 211 => INDIRECT_GOTO_STMT,
    ContinueStmt = 212 => CONTINUE_STMT,
    BreakStmt = 213 => BREAK_STMT,
    ReturnStmt = 214 => RETURN_STMT,
    GCCAsmStmt = 215 => GCC_ASM_STMT,
    ObjCAtTryStmt = 216 => OBJC_AT_TRY_STMT,
    ObjCAtCatchStmt = 217 => OBJC_AT_CATCH_STMT,
    ObjCAtFinallyStmt = 218 => OBJC_AT_FINALLY_STMT,
    ObjCAtThrowStmt = 219 => OBJC_AT_THROW_STMT,
    ObjCAtSynchronizedStmt = 220 => OBJC_AT_SYNCHRONIZED_STMT,
    ObjCAutoreleasePoolStmt = 221 => OBJC_AUTORELEASE_POOL_STMT,
    ObjCForCollectionStmt = 222 => OBJC_FOR_COLLECTION_STMT,
    CXXCatchStmt = 223 => CXX_CATCH_STMT,
    CXXTryStmt = 224 => CXX_TRY_STMT,
    CXXForRangeStmt = 225 => CXX_FOR_RANGE_STMT,
    SEHTryStmt = 226 => SEH_TRY_STMT,
    SEHExceptStmt = 227 => SEH_EXCEPT_STMT,
    SEHFinallyStmt = 228 => SEH_FINALLY_STMT,
    MSAsmStmt = 229 => MS_ASM_STMT,
    NullStmt = 230 => NULL_STMT,
    DeclStmt = 231 => DECL_STMT,
    OMPParallelDirective = 232 => OMP_PARALLEL_DIRECTIVE,
    OMPSimdDirective = 233 => OMP_SIMD_DIRECTIVE,
    OMPForDirective = 234 => OMP_FOR_DIRECTIVE,
    OMPSectionsDirective = 235 => OMP_SECTIONS_DIRECTIVE,
    OMPSectionDirective = 236 => OMP_SECTION_DIRECTIVE,
    OMPSingleDirective = 237 => OMP_SINGLE_DIRECTIVE,
    OMPParallelForDirective = 238 => OMP_PARALLEL_FOR_DIRECTIVE,
    OMPParallelSectionsDirective = 239 => OMP_PARALLEL_SECTIONS_DIRECTIVE,
    OMPTaskDirective = 240 => OMP_TASK_DIRECTIVE,
    OMPMasterDirective = 241 => OMP_MASTER_DIRECTIVE,
    OMPCriticalDirective = 242 => OMP_CRITICAL_DIRECTIVE,
    OMPTaskyieldDirective = 243 => OMP_TASKYIELD_DIRECTIVE,
    OMPBarrierDirective = 244 => OMP_BARRIER_DIRECTIVE,
    OMPTaskwaitDirective = 245 => OMP_TASKWAIT_DIRECTIVE,
    OMPFlushDirective = 246 => OMP_FLUSH_DIRECTIVE,
    SEHLeaveStmt = 247 => SEH_LEAVE_STMT,
    OMPOrderedDirective = 248 => OMP_ORDERED_DIRECTIVE,
    OMPAtomicDirective = 249 => OMP_ATOMIC_DIRECTIVE,
    OMPForSimdDirective = 250 => OMP_FOR_SIMD_DIRECTIVE,
    OMPParallelForSimdDirective = 251 => OMP_PARALLEL_FOR_SIMD_DIRECTIVE,
    OMPTargetDirective = 252 => OMP_TARGET_DIRECTIVE,
    OMPTeamsDirective = 253 => OMP_TEAMS_DIRECTIVE,
    OMPTaskgroupDirective = 254 => OMP_TASKGROUP_DIRECTIVE,
    OMPCancellationPointDirective = 255 => OMP_CANCELLATION_POINT_DIRECTIVE,
    OMPCancelDirective = 256 => OMP_CANCEL_DIRECTIVE,
    OMPTargetDataDirective = 257 => OMP_TARGET_DATA_DIRECTIVE,
    OMPTaskLoopDirective = 258 => OMP_TASK_LOOP_DIRECTIVE,
    OMPTaskLoopSimdDirective = 259 => OMP_TASK_LOOP_SIMD_DIRECTIVE,
    OMPDistributeDirective = 260 => OMP_DISTRIBUTE_DIRECTIVE,
    OMPTargetEnterDataDirective = 261 => OMP_TARGET_ENTER_DATA_DIRECTIVE,
    OMPTargetExitDataDirective = 262 => OMP_TARGET_EXIT_DATA_DIRECTIVE,
    OMPTargetParallelDirective = 263 => OMP_TARGET_PARALLEL_DIRECTIVE,
    OMPTargetParallelForDirective = 264 => OMP_TARGET_PARALLEL_FOR_DIRECTIVE,
    OMPTargetUpdateDirective = 265 => OMP_TARGET_UPDATE_DIRECTIVE,
    OMPDistributeParallelForDirective = 266 => OMP_DISTRIBUTE_PARALLEL_FOR_DIRECTIVE,
    OMPDistributeParallelForSimdDirective = 267 => OMP_DISTRIBUTE_PARALLEL_FOR_SIMD_DIRECTIVE,
    OMPDistributeSimdDirective = 268 => OMP_DISTRIBUTE_SIMD_DIRECTIVE,
    OMPTargetParallelForSimdDirective = 269 => OMP_TARGET_PARALLEL_FOR_SIMD_DIRECTIVE,
    OMPTargetSimdDirective = 270 => OMP_TARGET_SIMD_DIRECTIVE,
    OMPTeamsDistributeDirective = 271 => OMP_TEAMS_DISTRIBUTE_DIRECTIVE,
    OMPTeamsDistributeSimdDirective = 272 => OMP_TEAMS_DISTRIBUTE_SIMD_DIRECTIVE,
    OMPTeamsDistributeParallelForSimdDirective = 273 => OMP_TEAMS_DISTRIBUTE_PARALLEL_FOR_SIMD_DIRECTIVE,
    OMPTeamsDistributeParallelForDirective = 274 => OMP_TEAMS_DISTRIBUTE_PARALLEL_FOR_DIRECTIVE,
    OMPTargetTeamsDirective = 275 => OMP_TARGET_TEAMS_DIRECTIVE,
    OMPTargetTeamsDistributeDirective = 276 => OMP_TARGET_TEAMS_DISTRIBUTE_DIRECTIVE,
    OMPTargetTeamsDistributeParallelForDirective = 277 => OMP_TARGET_TEAMS_DISTRIBUTE_PARALLEL_FOR_DIRECTIVE,
    OMPTargetTeamsDistributeParallelForSimdDirective = 278 => OMP_TARGET_TEAMS_DISTRIBUTE_PARALLEL_FOR_SIMD_DIRECTIVE,
    OMPTargetTeamsDistributeSimdDirective = 279 => OMP_TARGET_TEAMS_DISTRIBUTE_SIMD_DIRECTIVE,
    BuiltinBitCastExpr = 280 => BUILTIN_BIT_CAST_EXPR,
    OMPMasterTaskLoopDirective = 281 => OMP_MASTER_TASK_LOOP_DIRECTIVE,
    OMPParallelMasterTaskLoopDirective = 282 => OMP_PARALLEL_MASTER_TASK_LOOP_DIRECTIVE,
    OMPMasterTaskLoopSimdDirective = 283 => OMP_MASTER_TASK_LOOP_SIMD_DIRECTIVE,
    OMPParallelMasterTaskLoopSimdDirective = 284 => OMP_PARALLEL_MASTER_TASK_LOOP_SIMD_DIRECTIVE,
    OMPParallelMasterDirective = 285 => OMP_PARALLEL_MASTER_DIRECTIVE,
    OMPDepobjDirective = 286 => OMP_DEPOBJ_DIRECTIVE,
    OMPScanDirective = 287 => OMP_SCAN_DIRECTIVE,
    OMPTileDirective = 288 => OMP_TILE_DIRECTIVE,
    OMPCanonicalLoop = 289 => OMP_CANONICAL_LOOP,
    OMPInteropDirective = 290 => OMP_INTEROP_DIRECTIVE,
    OMPDispatchDirective = 291 => OMP_DISPATCH_DIRECTIVE,
    OMPMaskedDirective = 292 => OMP_MASKED_DIRECTIVE,
    OMPUnrollDirective = 293 => OMP_UNROLL_DIRECTIVE,
    OMPMetaDirective = 294 => OMP_META_DIRECTIVE,
    OMPGenericLoopDirective = 295 => OMP_GENERIC_LOOP_DIRECTIVE,
    OMPTeamsGenericLoopDirective = 296 => OMP_TEAMS_GENERIC_LOOP_DIRECTIVE,
    OMPTargetTeamsGenericLoopDirective = 297 => OMP_TARGET_TEAMS_GENERIC_LOOP_DIRECTIVE,
    OMPParallelGenericLoopDirective = 298 => OMP_PARALLEL_GENERIC_LOOP_DIRECTIVE,
    OMPTargetParallelGenericLoopDirective = 299 => OMP_TARGET_PARALLEL_GENERIC_LOOP_DIRECTIVE,
    OMPParallelMaskedDirective = 300 => OMP_PARALLEL_MASKED_DIRECTIVE,
    OMPMaskedTaskLoopDirective = 301 => OMP_MASKED_TASK_LOOP_DIRECTIVE,
    OMPMaskedTaskLoopSimdDirective = 302 => OMP_MASKED_TASK_LOOP_SIMD_DIRECTIVE,
    OMPParallelMaskedTaskLoopDirective = 303 => OMP_PARALLEL_MASKED_TASK_LOOP_DIRECTIVE,
    OMPParallelMaskedTaskLoopSimdDirective = 304 => OMP_PARALLEL_MASKED_TASK_LOOP_SIMD_DIRECTIVE,
    OMPErrorDirective = 305 => OMP_ERROR_DIRECTIVE,
    OMPScopeDirective = 306 => OMP_SCOPE_DIRECTIVE,
    // Translation unit
    TranslationUnit = 350 => TRANSLATION_UNIT,
    // Attributes
    UnexposedAttr = 400 => UNEXPOSED_ATTR,
    IBActionAttr = 401 => IB_ACTION_ATTR,
    IBOutletAttr = 402 => IB_OUTLET_ATTR,
    IBOutletCollectionAttr = 403 => IB_OUTLET_COLLECTION_ATTR,
    CXXFinalAttr = 404 => CXX_FINAL_ATTR,
    CXXOverrideAttr = 405 => CXX_OVERRIDE_ATTR,
    AnnotateAttr = 406 => ANNOTATE_ATTR,
    AsmLabelAttr = 407 => ASM_LABEL_ATTR,
    PackedAttr = 408 => PACKED_ATTR,
    PureAttr = 409 => PURE_ATTR,
    ConstAttr = 410 => CONST_ATTR,
    NoDuplicateAttr = 411 => NO_DUPLICATE_ATTR,
    CUDAConstantAttr = 412 => CUDA_CONSTANT_ATTR,
    CUDADeviceAttr = 413 => CUDA_DEVICE_ATTR,
    CUDAGlobalAttr = 414 => CUDA_GLOBAL_ATTR,
    CUDAHostAttr = 415 => CUDA_HOST_ATTR,
    CUDASharedAttr = 416 => CUDA_SHARED_ATTR,
    VisibilityAttr = 417 => VISIBILITY_ATTR,
    DLLExport = 418 => DLL_EXPORT,
    DLLImport = 419 => DLL_IMPORT,
    NSReturnsRetained = 420 => NS_RETURNS_RETAINED,
    NSReturnsNotRetained = 421 => NS_RETURNS_NOT_RETAINED,
    NSReturnsAutoreleased = 422 => NS_RETURNS_AUTORELEASED,
    NSConsumesSelf = 423 => NS_CONSUMES_SELF,
    NSConsumed = 424 => NS_CONSUMED,
    ObjCException = 425 => OBJC_EXCEPTION,
    ObjCNSObject = 426 => OBJC_NS_OBJECT,
    ObjCIndependentClass = 427 => OBJC_INDEPENDENT_CLASS,
    ObjCPreciseLifetime = 428 => OBJC_PRECISE_LIFETIME,
    ObjCReturnsInnerPointer = 429 => OBJC_RETURNS_INNER_POINTER,
    ObjCRequiresSuper = 430 => OBJC_REQUIRES_SUPER,
    ObjCRootClass = 431 => OBJC_ROOT_CLASS,
    ObjCSubclassingRestricted = 432 => OBJC_SUBCLASSING_RESTRICTED,
    ObjCExplicitProtocolImpl = 433 => OBJC_EXPLICIT_PROTOCOL_IMPL,
    ObjCDesignatedInitializer = 434 => OBJC_DESIGNATED_INITIALIZER,
    ObjCRuntimeVisible = 435 => OBJC_RUNTIME_VISIBLE,
    ObjCBoxable = 436 => OBJC_BOXABLE,
    FlagEnum = 437 => FLAG_ENUM,
    ConvergentAttr = 438 => CONVERGENT_ATTR,
    WarnUnusedAttr = 439 => WARN_UNUSED_ATTR,
    WarnUnusedResultAttr = 440 => WARN_UNUSED_RESULT_ATTR,
    AlignedAttr = 441 => ALIGNED_ATTR,
    // Preprocessing
    PreprocessingDirective = 500 => PREPROCESSING_DIRECTIVE,
    MacroDefinition = 501 => MACRO_DEFINITION,
    MacroExpansion = 502 => MACRO_EXPANSION,
    InclusionDirective = 503 => INCLUSION_DIRECTIVE,
    // Extra declarations
    ModuleImportDecl = 600 => MODULE_IMPORT_DECL,
    TypeAliasTemplateDecl = 601 => TYPE_ALIAS_TEMPLATE_DECL,
    StaticAssert = 602 => STATIC_ASSERT,
    FriendDecl = 603 => FRIEND_DECL,
    ConceptDecl = 604 => CONCEPT_DECL,
    // Code completion
    OverloadCandidate = 700 => OVERLOAD_CANDIDATE,
}

impl CursorKind {
    /// Look up the registered kind for a native value.
    ///
    /// Builds the process-wide registry on first use.
    pub fn from_raw(value: i32) -> Result<CursorKind> {
        super::initialize()?.lookup(value)
    }

    /// The native integer.
    pub fn value(self) -> i32 {
        self.0
    }

    /// Upper-snake-case name, e.g. `FUNCTION_DECL`.
    pub fn name(self) -> Result<&'static str> {
        super::initialize()?.name(self)
    }

    pub fn is_declaration(self) -> bool {
        matches!(self.0, 1..=39 | 600..=699)
    }

    pub fn is_reference(self) -> bool {
        matches!(self.0, 40..=50)
    }

    pub fn is_expression(self) -> bool {
        matches!(self.0, 100..=199)
    }

    /// The engine reserves 200 up to the translation unit for statements.
    pub fn is_statement(self) -> bool {
        matches!(self.0, 200..=349)
    }

    pub fn is_attribute(self) -> bool {
        matches!(self.0, 400..=499)
    }

    pub fn is_invalid(self) -> bool {
        matches!(self.0, 70..=73)
    }

    pub fn is_translation_unit(self) -> bool {
        self == Self::TRANSLATION_UNIT
    }

    pub fn is_preprocessing(self) -> bool {
        matches!(self.0, 500..=503)
    }

    pub fn is_unexposed(self) -> bool {
        matches!(
            self,
            Self::UNEXPOSED_DECL | Self::UNEXPOSED_EXPR | Self::UNEXPOSED_STMT | Self::UNEXPOSED_ATTR
        )
    }
}

impl fmt::Display for CursorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Ok(name) => f.write_str(name),
            Err(_) => write!(f, "UNKNOWN({})", self.0),
        }
    }
}

impl fmt::Debug for CursorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CursorKind.{self}")
    }
}
