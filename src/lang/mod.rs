/// Methods for preprocessing programs at source level (removing line comments).
pub mod preprocessing;

/// Parsers for knowledge base sources, producing `Statement` values.
pub mod parse;

/// Statics: well-formedness of rules, assembly of a `KnowledgeBase`, and capacity checks.
pub mod statics;

/// Resolving disjunctive rules into definite programs, and composing those across rules.
pub mod resolve;

/// Dynamics: least models of definite programs, their collection, and constraint filtering.
pub mod dynamics;

pub mod util;

pub use util::VecSet;

/////////////////////////////////////////////

/// Used elsewhere to identify elements in a parsed source,
/// e.g., in error messages.
pub type StatementIdx = usize;

/// A set of atoms closed under some definite program.
pub type Model = VecSet<Atom>;

/// An indivisible proposition symbol.
#[derive(Ord, PartialOrd, Clone, PartialEq, Hash, Eq)]
pub struct Atom(pub String);

/// Whether the head of a rule must be brought about, or only may be.
#[derive(Debug, Copy, Clone, PartialEq, Hash, Eq)]
pub enum Mode {
    Imperative,
    Permissive,
}

/// The head of a rule. `Bottom` marks a constraint, forbidding the body.
#[derive(Clone, PartialEq, Hash, Eq)]
pub enum Head {
    Bottom,
    Disjunction(Vec<Atom>),
}

/// A rule with a conjunctive body and a disjunctive head.
/// Only constructed by `Rule::new`, which enforces well-formedness.
/// Invariants:
/// 1. a disjunctive head is non-empty and at most `LIMITS.max_head_width` wide.
/// 2. a rule with a `Bottom` head has `Mode::Imperative`.
#[derive(Clone, PartialEq, Hash, Eq)]
pub struct Rule {
    pub(crate) body: Vec<Atom>,
    pub(crate) head: Head,
    pub(crate) mode: Mode,
}

/// Either an atom, or the ⊥ marker inherited from a constraint.
#[derive(Ord, PartialOrd, Clone, PartialEq, Hash, Eq)]
pub enum ClauseHead {
    Bottom,
    Atom(Atom),
}

/// A single-headed implication: the body entails the head.
#[derive(Ord, PartialOrd, Clone, PartialEq, Hash, Eq)]
pub struct DefiniteClause {
    pub body: Vec<Atom>,
    pub head: ClauseHead,
}

/// A collection of definite clauses, free of disjunction. May be empty.
#[derive(Default, Clone, PartialEq, Hash, Eq)]
pub struct DefiniteProgram {
    pub clauses: Vec<DefiniteClause>,
}

/// The read-only input of the engine.
#[derive(Debug, Default, Clone)]
pub struct KnowledgeBase {
    pub facts: VecSet<Atom>,
    pub rules: Vec<Rule>,
}

/// One of two kinds of statement in a source.
#[derive(Debug, Clone)]
pub enum Statement {
    Facts(Vec<Atom>),
    Rule { mode: Mode, body: Vec<Atom>, head: Head },
}

/// Everything the engine computes from a `KnowledgeBase`, stage by stage.
#[derive(Debug)]
pub struct Denotation {
    /// For each rule (in order), its definite program resolutions.
    pub resolutions: Vec<Vec<DefiniteProgram>>,
    /// Every joint definite program, one per combination of resolutions.
    pub programs: Vec<DefiniteProgram>,
    /// The distinct least models of `programs`.
    pub models: VecSet<Model>,
    /// Those `models` violating no constraint.
    pub admissible: VecSet<Model>,
}

/// Reserved as the name of ⊥. No atom may have this name.
pub const BOTTOM_WORD: &str = "false";

/// Bounds on the size of the enumeration. Exceeding these is refused rather than attempted.
#[derive(Debug)]
pub struct Limits {
    pub max_head_width: usize,
    pub max_joint_programs: usize,
}
pub const LIMITS: Limits = Limits { max_head_width: 20, max_joint_programs: 1 << 20 };

impl Atom {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl Rule {
    pub fn body(&self) -> &[Atom] {
        &self.body
    }
    pub fn head(&self) -> &Head {
        &self.head
    }
    pub fn mode(&self) -> Mode {
        self.mode
    }
    pub fn is_constraint(&self) -> bool {
        self.head == Head::Bottom
    }
}
