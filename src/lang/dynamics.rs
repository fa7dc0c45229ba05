use crate::lang::*;
use log::{debug, trace};

impl DefiniteClause {
    /// Whether this clause derives its head from `model`. ⊥-headed clauses derive nothing.
    fn derives<'a>(&'a self, model: &Model) -> Option<&'a Atom> {
        match &self.head {
            ClauseHead::Bottom => None,
            ClauseHead::Atom(atom) if model.contains_all(&self.body) => Some(atom),
            ClauseHead::Atom(_) => None,
        }
    }
}

impl DefiniteProgram {
    /// The least superset of `facts` closed under this program's clauses.
    /// Terminates as the model only grows, and only with atoms occurring in clause heads.
    pub fn least_model(&self, facts: &Model) -> Model {
        let mut model = facts.clone();
        let mut sweeps = 0;
        loop {
            sweeps += 1;
            let mut changed = false;
            for clause in &self.clauses {
                if let Some(atom) = clause.derives(&model) {
                    if model.insert(atom.clone()) {
                        trace!("sweep {}: derived {:?} using {:?}", sweeps, atom, clause);
                        changed = true;
                    }
                }
            }
            if !changed {
                return model;
            }
        }
    }
}

/// The distinct least models of all `programs` over `facts`.
pub fn collect(programs: &[DefiniteProgram], facts: &Model) -> VecSet<Model> {
    let models: VecSet<Model> =
        programs.iter().map(|program| program.least_model(facts)).collect();
    debug!("{} programs have {} distinct least models", programs.len(), models.len());
    models
}

/// The constraints among `rules` whose bodies hold in `model`.
pub fn violated_constraints<'a>(
    rules: &'a [Rule],
    model: &'a Model,
) -> impl Iterator<Item = &'a Rule> + 'a {
    rules.iter().filter(move |rule| {
        rule.is_constraint() && rule.mode == Mode::Imperative && model.contains_all(&rule.body)
    })
}

/// Retains those `models` violating no constraint among `rules`.
pub fn filter_admissible(rules: &[Rule], models: &VecSet<Model>) -> VecSet<Model> {
    let admissible: VecSet<Model> = models
        .iter()
        .filter(|model| violated_constraints(rules, model).next().is_none())
        .cloned()
        .collect();
    debug!("{} of {} models are admissible", admissible.len(), models.len());
    admissible
}

impl KnowledgeBase {
    /// Runs every stage in turn: resolve, compose, evaluate and collect, filter.
    pub fn denotation(&self) -> Denotation {
        let resolutions: Vec<Vec<DefiniteProgram>> =
            self.rules.iter().map(Rule::resolutions).collect();
        let programs = resolve::compose_resolutions(&resolutions);
        let models = collect(&programs, &self.facts);
        let admissible = filter_admissible(&self.rules, &models);
        Denotation { resolutions, programs, models, admissible }
    }
}
