//! Catalog index for the smell and refactoring collections.
//!
//! Every unit in `src/smells/` and `src/refactorings/` is registered here so
//! tooling (and the CLI) can enumerate the catalog without touching the
//! example code itself. The index is intentionally flat: a smell knows its
//! taxonomy category and the refactorings that address it, a refactoring
//! knows its group, and both render to text or JSON.
//!
//! # Example
//!
//! ```
//! use smellbook::catalog::{smells, Smell, SmellCategory};
//!
//! for smell in smells() {
//!     println!("{}: {}", smell.name(), smell.summary());
//! }
//! assert_eq!(Smell::DataClumps.category(), SmellCategory::Bloater);
//! ```

use serde::{Deserialize, Serialize};

// =============================================================================
// SMELLS
// =============================================================================

/// The classic smell taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SmellCategory {
    /// Code that has grown beyond what one unit should hold.
    Bloater,
    /// Incorrect or incomplete use of object-orientation.
    ObjectOrientationAbuser,
    /// Structure that makes change harder than it should be.
    ChangePreventer,
    /// Something unneeded whose removal makes the code cleaner.
    Dispensable,
    /// Excessive coupling between classes.
    Coupler,
}

impl SmellCategory {
    /// Human-readable description.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Bloater => "code grown too large to work with",
            Self::ObjectOrientationAbuser => "object-orientation applied badly",
            Self::ChangePreventer => "structure that resists change",
            Self::Dispensable => "pointless code that should go",
            Self::Coupler => "excessive coupling between classes",
        }
    }
}

impl std::fmt::Display for SmellCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bloater => write!(f, "bloater"),
            Self::ObjectOrientationAbuser => write!(f, "oo_abuser"),
            Self::ChangePreventer => write!(f, "change_preventer"),
            Self::Dispensable => write!(f, "dispensable"),
            Self::Coupler => write!(f, "coupler"),
        }
    }
}

/// One cataloged code smell, backed by a before/after module in
/// [`crate::smells`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Smell {
    /// The same logic repeated in several places.
    Duplication,
    /// One function doing validation, persistence, and notification at once.
    LongMethod,
    /// One type owning several unrelated responsibilities.
    LargeClass,
    /// A method more interested in another type's data than its own.
    FeatureEnvy,
    /// The same group of values traveling together as loose parameters.
    DataClumps,
    /// A signature that buries its meaning under twenty-one positional
    /// arguments.
    LongParameterList,
    /// One type modified for several unrelated reasons.
    DivergentChange,
    /// A record with no behavior, its logic scattered elsewhere.
    DataClass,
    /// Sibling types duplicating the state a shared contract should carry.
    RefusedBequest,
    /// Call sites patching around a library type that lacks conveniences.
    #[serde(rename = "incomplete_library")]
    IncompleteLibraryClass,
}

impl Smell {
    /// Catalog name in snake_case, matching the module name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Duplication => "duplication",
            Self::LongMethod => "long_method",
            Self::LargeClass => "large_class",
            Self::FeatureEnvy => "feature_envy",
            Self::DataClumps => "data_clumps",
            Self::LongParameterList => "long_parameter_list",
            Self::DivergentChange => "divergent_change",
            Self::DataClass => "data_class",
            Self::RefusedBequest => "refused_bequest",
            Self::IncompleteLibraryClass => "incomplete_library",
        }
    }

    /// Taxonomy category.
    #[must_use]
    pub const fn category(&self) -> SmellCategory {
        match self {
            Self::LongMethod
            | Self::LargeClass
            | Self::LongParameterList
            | Self::DataClumps => SmellCategory::Bloater,
            Self::RefusedBequest => SmellCategory::ObjectOrientationAbuser,
            Self::DivergentChange => SmellCategory::ChangePreventer,
            Self::Duplication | Self::DataClass => SmellCategory::Dispensable,
            Self::FeatureEnvy | Self::IncompleteLibraryClass => SmellCategory::Coupler,
        }
    }

    /// One-line summary of the symptom.
    #[must_use]
    pub const fn summary(&self) -> &'static str {
        match self {
            Self::Duplication => "the same tax and shipping arithmetic copied into three types",
            Self::LongMethod => "one registration function doing nine jobs inline",
            Self::LargeClass => "accounts, email, payments and reporting in a single service",
            Self::FeatureEnvy => "geometry helpers that only read Rectangle's fields",
            Self::DataClumps => "street/city/state/zip recurring as loose parameters",
            Self::LongParameterList => "an order constructor taking twenty-one positional values",
            Self::DivergentChange => "one financial service changed for three unrelated reasons",
            Self::DataClass => "a bare user record with its rules scattered at call sites",
            Self::RefusedBequest => "three shape renderers each re-implementing color handling",
            Self::IncompleteLibraryClass => "every call site re-building default request headers",
        }
    }

    /// The refactorings demonstrated as the cure for this smell.
    #[must_use]
    pub const fn remedies(&self) -> &'static [Refactoring] {
        match self {
            Self::Duplication => &[Refactoring::ExtractClass, Refactoring::ExtractMethod],
            Self::LongMethod => &[
                Refactoring::ExtractMethod,
                Refactoring::ReplaceMethodWithMethodObject,
            ],
            Self::LargeClass => &[Refactoring::ExtractClass, Refactoring::ExtractInterface],
            Self::FeatureEnvy => &[Refactoring::MoveMethod, Refactoring::MoveField],
            Self::DataClumps => &[
                Refactoring::IntroduceParameterObject,
                Refactoring::ExtractClass,
            ],
            Self::LongParameterList => &[
                Refactoring::IntroduceParameterObject,
                Refactoring::PreserveWholeObject,
            ],
            Self::DivergentChange => &[Refactoring::ExtractClass],
            Self::DataClass => &[
                Refactoring::MoveMethod,
                Refactoring::RemoveSettingMethod,
                Refactoring::SelfEncapsulateField,
            ],
            Self::RefusedBequest => &[
                Refactoring::ReplaceConditionalWithPolymorphism,
                Refactoring::ExtractInterface,
            ],
            Self::IncompleteLibraryClass => &[
                Refactoring::IntroduceForeignMethod,
                Refactoring::IntroduceLocalExtension,
            ],
        }
    }
}

impl std::fmt::Display for Smell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// All cataloged smells, in catalog order.
#[must_use]
pub const fn smells() -> &'static [Smell] {
    &[
        Smell::Duplication,
        Smell::LongMethod,
        Smell::LargeClass,
        Smell::FeatureEnvy,
        Smell::DataClumps,
        Smell::LongParameterList,
        Smell::DivergentChange,
        Smell::DataClass,
        Smell::RefusedBequest,
        Smell::IncompleteLibraryClass,
    ]
}

// =============================================================================
// REFACTORINGS
// =============================================================================

/// Grouping of refactorings, one group per module in
/// [`crate::refactorings`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefactoringGroup {
    /// Carving methods and expressions into the right-sized pieces.
    ComposingMethods,
    /// Moving methods, fields and whole classes to where they belong.
    MovingFeatures,
    /// Giving data the structure it deserves.
    OrganizingData,
    /// Untangling conditional logic.
    SimplifyingConditionals,
    /// Making method signatures honest.
    SimplifyingMethodCalls,
    /// Reshaping hierarchies and shared behavior.
    Generalization,
    /// Whole-design transformations.
    BigRefactorings,
}

impl RefactoringGroup {
    /// Module name under `src/refactorings/`.
    #[must_use]
    pub const fn module(&self) -> &'static str {
        match self {
            Self::ComposingMethods => "composing_methods",
            Self::MovingFeatures => "moving_features",
            Self::OrganizingData => "organizing_data",
            Self::SimplifyingConditionals => "conditionals",
            Self::SimplifyingMethodCalls => "method_calls",
            Self::Generalization => "generalization",
            Self::BigRefactorings => "big_refactorings",
        }
    }
}

impl std::fmt::Display for RefactoringGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.module())
    }
}

/// One cataloged refactoring, demonstrated as a before/after pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Refactoring {
    // Composing methods
    ExtractMethod,
    InlineMethod,
    InlineTemp,
    ReplaceTempWithQuery,
    IntroduceExplainingVariable,
    SplitTemporaryVariable,
    RemoveAssignmentsToParameters,
    ReplaceMethodWithMethodObject,
    // Moving features
    SubstituteAlgorithm,
    MoveMethod,
    MoveField,
    ExtractClass,
    InlineClass,
    HideDelegate,
    IntroduceForeignMethod,
    IntroduceLocalExtension,
    // Organizing data
    SelfEncapsulateField,
    ReplaceDataValueWithObject,
    ChangeValueToReference,
    ChangeReferenceToValue,
    ReplaceArrayWithObject,
    ReplaceMagicNumberWithConstant,
    // Simplifying conditionals
    DecomposeConditional,
    ConsolidateConditionalExpression,
    ConsolidateDuplicateConditionalFragments,
    RemoveControlFlag,
    ReplaceNestedConditionalWithGuardClauses,
    ReplaceConditionalWithPolymorphism,
    IntroduceNullObject,
    IntroduceAssertion,
    // Simplifying method calls
    RenameMethod,
    AddParameter,
    RemoveParameter,
    SeparateQueryFromModifier,
    ParameterizeMethod,
    ReplaceParameterWithExplicitMethods,
    PreserveWholeObject,
    ReplaceParameterWithMethod,
    IntroduceParameterObject,
    RemoveSettingMethod,
    HideMethod,
    ReplaceConstructorWithFactoryMethod,
    // Generalization
    PullUpField,
    PullUpMethod,
    PullUpConstructorBody,
    PushDownMethod,
    PushDownField,
    ExtractSubclass,
    ExtractSuperclass,
    ExtractInterface,
    CollapseHierarchy,
    // Big refactorings
    TeaseApartInheritance,
    ConvertProceduralDesignToObjects,
    SeparateDomainFromPresentation,
    ExtractHierarchy,
}

impl Refactoring {
    /// Canonical catalog name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::ExtractMethod => "Extract Method",
            Self::InlineMethod => "Inline Method",
            Self::InlineTemp => "Inline Temp",
            Self::ReplaceTempWithQuery => "Replace Temp with Query",
            Self::IntroduceExplainingVariable => "Introduce Explaining Variable",
            Self::SplitTemporaryVariable => "Split Temporary Variable",
            Self::RemoveAssignmentsToParameters => "Remove Assignments to Parameters",
            Self::ReplaceMethodWithMethodObject => "Replace Method with Method Object",
            Self::SubstituteAlgorithm => "Substitute Algorithm",
            Self::MoveMethod => "Move Method",
            Self::MoveField => "Move Field",
            Self::ExtractClass => "Extract Class",
            Self::InlineClass => "Inline Class",
            Self::HideDelegate => "Hide Delegate",
            Self::IntroduceForeignMethod => "Introduce Foreign Method",
            Self::IntroduceLocalExtension => "Introduce Local Extension",
            Self::SelfEncapsulateField => "Self-Encapsulate Field",
            Self::ReplaceDataValueWithObject => "Replace Data Value with Object",
            Self::ChangeValueToReference => "Change Value to Reference",
            Self::ChangeReferenceToValue => "Change Reference to Value",
            Self::ReplaceArrayWithObject => "Replace Array with Object",
            Self::ReplaceMagicNumberWithConstant => {
                "Replace Magic Number with Symbolic Constant"
            }
            Self::DecomposeConditional => "Decompose Conditional",
            Self::ConsolidateConditionalExpression => "Consolidate Conditional Expression",
            Self::ConsolidateDuplicateConditionalFragments => {
                "Consolidate Duplicate Conditional Fragments"
            }
            Self::RemoveControlFlag => "Remove Control Flag",
            Self::ReplaceNestedConditionalWithGuardClauses => {
                "Replace Nested Conditional with Guard Clauses"
            }
            Self::ReplaceConditionalWithPolymorphism => {
                "Replace Conditional with Polymorphism"
            }
            Self::IntroduceNullObject => "Introduce Null Object",
            Self::IntroduceAssertion => "Introduce Assertion",
            Self::RenameMethod => "Rename Method",
            Self::AddParameter => "Add Parameter",
            Self::RemoveParameter => "Remove Parameter",
            Self::SeparateQueryFromModifier => "Separate Query from Modifier",
            Self::ParameterizeMethod => "Parameterize Method",
            Self::ReplaceParameterWithExplicitMethods => {
                "Replace Parameter with Explicit Methods"
            }
            Self::PreserveWholeObject => "Preserve Whole Object",
            Self::ReplaceParameterWithMethod => "Replace Parameter with Method",
            Self::IntroduceParameterObject => "Introduce Parameter Object",
            Self::RemoveSettingMethod => "Remove Setting Method",
            Self::HideMethod => "Hide Method",
            Self::ReplaceConstructorWithFactoryMethod => {
                "Replace Constructor with Factory Method"
            }
            Self::PullUpField => "Pull Up Field",
            Self::PullUpMethod => "Pull Up Method",
            Self::PullUpConstructorBody => "Pull Up Constructor Body",
            Self::PushDownMethod => "Push Down Method",
            Self::PushDownField => "Push Down Field",
            Self::ExtractSubclass => "Extract Subclass",
            Self::ExtractSuperclass => "Extract Superclass",
            Self::ExtractInterface => "Extract Interface",
            Self::CollapseHierarchy => "Collapse Hierarchy",
            Self::TeaseApartInheritance => "Tease Apart Inheritance",
            Self::ConvertProceduralDesignToObjects => {
                "Convert Procedural Design to Objects"
            }
            Self::SeparateDomainFromPresentation => "Separate Domain from Presentation",
            Self::ExtractHierarchy => "Extract Hierarchy",
        }
    }

    /// Which group (and module) demonstrates this refactoring.
    #[must_use]
    pub const fn group(&self) -> RefactoringGroup {
        match self {
            Self::ExtractMethod
            | Self::InlineMethod
            | Self::InlineTemp
            | Self::ReplaceTempWithQuery
            | Self::IntroduceExplainingVariable
            | Self::SplitTemporaryVariable
            | Self::RemoveAssignmentsToParameters
            | Self::ReplaceMethodWithMethodObject => RefactoringGroup::ComposingMethods,

            Self::SubstituteAlgorithm
            | Self::MoveMethod
            | Self::MoveField
            | Self::ExtractClass
            | Self::InlineClass
            | Self::HideDelegate
            | Self::IntroduceForeignMethod
            | Self::IntroduceLocalExtension => RefactoringGroup::MovingFeatures,

            Self::SelfEncapsulateField
            | Self::ReplaceDataValueWithObject
            | Self::ChangeValueToReference
            | Self::ChangeReferenceToValue
            | Self::ReplaceArrayWithObject
            | Self::ReplaceMagicNumberWithConstant => RefactoringGroup::OrganizingData,

            Self::DecomposeConditional
            | Self::ConsolidateConditionalExpression
            | Self::ConsolidateDuplicateConditionalFragments
            | Self::RemoveControlFlag
            | Self::ReplaceNestedConditionalWithGuardClauses
            | Self::ReplaceConditionalWithPolymorphism
            | Self::IntroduceNullObject
            | Self::IntroduceAssertion => RefactoringGroup::SimplifyingConditionals,

            Self::RenameMethod
            | Self::AddParameter
            | Self::RemoveParameter
            | Self::SeparateQueryFromModifier
            | Self::ParameterizeMethod
            | Self::ReplaceParameterWithExplicitMethods
            | Self::PreserveWholeObject
            | Self::ReplaceParameterWithMethod
            | Self::IntroduceParameterObject
            | Self::RemoveSettingMethod
            | Self::HideMethod
            | Self::ReplaceConstructorWithFactoryMethod => {
                RefactoringGroup::SimplifyingMethodCalls
            }

            Self::PullUpField
            | Self::PullUpMethod
            | Self::PullUpConstructorBody
            | Self::PushDownMethod
            | Self::PushDownField
            | Self::ExtractSubclass
            | Self::ExtractSuperclass
            | Self::ExtractInterface
            | Self::CollapseHierarchy => RefactoringGroup::Generalization,

            Self::TeaseApartInheritance
            | Self::ConvertProceduralDesignToObjects
            | Self::SeparateDomainFromPresentation
            | Self::ExtractHierarchy => RefactoringGroup::BigRefactorings,
        }
    }
}

impl std::fmt::Display for Refactoring {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// All cataloged refactorings, in catalog order.
#[must_use]
pub const fn refactorings() -> &'static [Refactoring] {
    use Refactoring::*;
    &[
        ExtractMethod,
        InlineMethod,
        InlineTemp,
        ReplaceTempWithQuery,
        IntroduceExplainingVariable,
        SplitTemporaryVariable,
        RemoveAssignmentsToParameters,
        ReplaceMethodWithMethodObject,
        SubstituteAlgorithm,
        MoveMethod,
        MoveField,
        ExtractClass,
        InlineClass,
        HideDelegate,
        IntroduceForeignMethod,
        IntroduceLocalExtension,
        SelfEncapsulateField,
        ReplaceDataValueWithObject,
        ChangeValueToReference,
        ChangeReferenceToValue,
        ReplaceArrayWithObject,
        ReplaceMagicNumberWithConstant,
        DecomposeConditional,
        ConsolidateConditionalExpression,
        ConsolidateDuplicateConditionalFragments,
        RemoveControlFlag,
        ReplaceNestedConditionalWithGuardClauses,
        ReplaceConditionalWithPolymorphism,
        IntroduceNullObject,
        IntroduceAssertion,
        RenameMethod,
        AddParameter,
        RemoveParameter,
        SeparateQueryFromModifier,
        ParameterizeMethod,
        ReplaceParameterWithExplicitMethods,
        PreserveWholeObject,
        ReplaceParameterWithMethod,
        IntroduceParameterObject,
        RemoveSettingMethod,
        HideMethod,
        ReplaceConstructorWithFactoryMethod,
        PullUpField,
        PullUpMethod,
        PullUpConstructorBody,
        PushDownMethod,
        PushDownField,
        ExtractSubclass,
        ExtractSuperclass,
        ExtractInterface,
        CollapseHierarchy,
        TeaseApartInheritance,
        ConvertProceduralDesignToObjects,
        SeparateDomainFromPresentation,
        ExtractHierarchy,
    ]
}

// =============================================================================
// SUMMARY FORMATTING
// =============================================================================

/// Render a plain-text summary of the whole catalog.
#[must_use]
pub fn format_catalog_summary() -> String {
    let mut out = String::new();
    out.push_str("Code smells\n");
    out.push_str("===========\n");
    for smell in smells() {
        out.push_str(&format!(
            "  {:24} [{}] {}\n",
            smell.name(),
            smell.category(),
            smell.summary()
        ));
    }
    out.push_str("\nRefactorings\n");
    out.push_str("============\n");
    let mut current: Option<RefactoringGroup> = None;
    for refactoring in refactorings() {
        let group = refactoring.group();
        if current != Some(group) {
            out.push_str(&format!("  {}:\n", group));
            current = Some(group);
        }
        out.push_str(&format!("    {}\n", refactoring.name()));
    }
    out
}
