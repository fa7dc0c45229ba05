use crate::lang::*;
use log::debug;

impl Rule {
    /// The definite programs consistent with this rule's mode, one per admissible
    /// subset of its head. A constraint has exactly one: `false :- body`.
    /// Disjunctive heads are enumerated by increasing bitmask, so the output order is
    /// deterministic, though callers should treat it as a set.
    pub fn resolutions(&self) -> Vec<DefiniteProgram> {
        let atoms = match &self.head {
            Head::Bottom => {
                let clause = DefiniteClause { body: self.body.clone(), head: ClauseHead::Bottom };
                return vec![DefiniteProgram { clauses: vec![clause] }];
            }
            Head::Disjunction(atoms) => atoms,
        };
        let mut out = Vec::with_capacity(self.resolution_count());
        for mask in 0usize..(1 << atoms.len()) {
            if mask == 0 && self.mode == Mode::Imperative {
                // must commit to at least one disjunct
                continue;
            }
            let clauses = atoms
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, atom)| DefiniteClause {
                    body: self.body.clone(),
                    head: ClauseHead::Atom(atom.clone()),
                })
                .collect();
            out.push(DefiniteProgram { clauses });
        }
        out
    }
}

impl DefiniteProgram {
    fn concatenated(&self, other: &Self) -> Self {
        let clauses = self.clauses.iter().chain(&other.clauses).cloned().collect();
        Self { clauses }
    }
}

/// Cartesian product of each rule's resolutions, each combination concatenated into
/// one joint program. The last rule's choice varies fastest.
/// No rules gives exactly one (empty) program. Any rule with no resolutions gives none.
pub fn compose(rules: &[Rule]) -> Vec<DefiniteProgram> {
    let resolutions: Vec<_> = rules.iter().map(Rule::resolutions).collect();
    compose_resolutions(&resolutions)
}

/// As `compose`, given already-computed per-rule resolutions.
pub fn compose_resolutions(resolutions: &[Vec<DefiniteProgram>]) -> Vec<DefiniteProgram> {
    let mut joint = vec![DefiniteProgram::default()];
    for options in resolutions {
        joint = joint
            .iter()
            .flat_map(|prefix| options.iter().map(move |option| prefix.concatenated(option)))
            .collect();
    }
    debug!("composed {} joint programs from {} rules", joint.len(), resolutions.len());
    joint
}
