use crate::lang::*;
use log::warn;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RuleError {
    #[error("rule has no head atoms; a constraint must name its head `false`")]
    EmptyHead,
    #[error("rule head has {width} disjuncts, more than the {max} permitted")]
    HeadTooWide { width: usize, max: usize },
    #[error("`{}` names ⊥ and cannot be used as an atom", BOTTOM_WORD)]
    ReservedAtom,
}

/// A `RuleError` located at the statement which caused it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("statement #{sidx}: {err}")]
pub struct StaticError {
    pub sidx: StatementIdx,
    #[source]
    pub err: RuleError,
}

//////////////////

impl Rule {
    /// Fails on a malformed rule rather than letting it miscompute later.
    /// A constraint declared permissive is still enforced; its mode becomes imperative.
    pub fn new(body: Vec<Atom>, head: Head, mode: Mode) -> Result<Self, RuleError> {
        let head_atoms: &[Atom] = match &head {
            Head::Bottom => &[],
            Head::Disjunction(atoms) => atoms,
        };
        if body.iter().chain(head_atoms).any(|atom| atom.0 == BOTTOM_WORD) {
            return Err(RuleError::ReservedAtom);
        }
        let mode = match &head {
            Head::Disjunction(atoms) if atoms.is_empty() => return Err(RuleError::EmptyHead),
            Head::Disjunction(atoms) if atoms.len() > LIMITS.max_head_width => {
                return Err(RuleError::HeadTooWide {
                    width: atoms.len(),
                    max: LIMITS.max_head_width,
                })
            }
            Head::Disjunction(_) => mode,
            Head::Bottom => {
                if mode == Mode::Permissive {
                    warn!("permissive constraint on {:?} is enforced as imperative", body);
                }
                Mode::Imperative
            }
        };
        Ok(Self { body, head, mode })
    }

    /// Shorthand for a rule with head `Bottom`. Never fails.
    pub fn constraint(body: Vec<Atom>) -> Self {
        Self { body, head: Head::Bottom, mode: Mode::Imperative }
    }

    /// Number of definite programs `Rule::resolutions` returns.
    pub fn resolution_count(&self) -> usize {
        match (&self.head, self.mode) {
            (Head::Bottom, _) => 1,
            (Head::Disjunction(atoms), Mode::Imperative) => (1 << atoms.len()) - 1,
            (Head::Disjunction(atoms), Mode::Permissive) => 1 << atoms.len(),
        }
    }
}

impl KnowledgeBase {
    /// Facts accumulate across statements; rules keep their source order.
    pub fn from_statements(
        statements: impl IntoIterator<Item = Statement>,
    ) -> Result<Self, StaticError> {
        let mut kb = Self::default();
        for (sidx, statement) in statements.into_iter().enumerate() {
            match statement {
                Statement::Facts(atoms) => {
                    if atoms.iter().any(|atom| atom.0 == BOTTOM_WORD) {
                        return Err(StaticError { sidx, err: RuleError::ReservedAtom });
                    }
                    kb.facts.extend(atoms)
                }
                Statement::Rule { mode, body, head } => {
                    let rule = Rule::new(body, head, mode);
                    kb.rules.push(rule.map_err(|err| StaticError { sidx, err })?)
                }
            }
        }
        Ok(kb)
    }

    /// Number of joint definite programs, or `None` if that overflows `usize`.
    pub fn joint_program_count(&self) -> Option<usize> {
        self.rules.iter().try_fold(1usize, |count, rule| count.checked_mul(rule.resolution_count()))
    }

    /// Atoms in rule bodies that are neither facts nor in any rule's head.
    /// Any rule with such an atom in its body never fires.
    pub fn underivable_body_atoms(&self) -> VecSet<&Atom> {
        let derivable: HashSet<&Atom> = self
            .rules
            .iter()
            .filter_map(|rule| match &rule.head {
                Head::Bottom => None,
                Head::Disjunction(atoms) => Some(atoms),
            })
            .flatten()
            .chain(self.facts.iter())
            .collect();
        self.rules
            .iter()
            .flat_map(|rule| rule.body.iter())
            .filter(|atom| !derivable.contains(atom))
            .collect()
    }
}
