use super::config::Config;
use crate::lang::{dynamics::violated_constraints, statics::StaticError, *};
use log::{debug, warn};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunError {
    #[error("parse error:\n{0}")]
    Parse(String),
    #[error(transparent)]
    Static(#[from] StaticError),
    #[error("{count} joint programs exceed the limit of {max}; pass --unbounded to proceed anyway")]
    TooManyPrograms { count: usize, max: usize },
    #[error("the number of joint programs overflows a machine word")]
    ProgramCountOverflow,
}

pub fn stdin_to_string() -> Result<String, std::io::Error> {
    use std::io::Read as _;
    let mut buffer = String::new();
    std::io::stdin().lock().read_to_string(&mut buffer)?;
    Ok(buffer)
}

/// Parses and evaluates `source`, writing whatever `config` selects to `w`.
pub fn run_check(
    config: Config,
    source: String,
    w: &mut impl std::io::Write,
) -> Result<Denotation, RunError> {
    let source = preprocessing::comments_removed(source);
    if config.test("source") {
        let _ = writeln!(w, "source after preprocessing: <<\n{}\n>>", &source);
    }
    let statements = match parse::source(&source) {
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => {
            return Err(RunError::Parse(nom::error::convert_error(source.as_str(), e)));
        }
        Err(e) => return Err(RunError::Parse(format!("{:#?}", e))),
        Ok((_rest, statements)) => statements,
    };
    debug!("parsed {} statements", statements.len());
    let kb = KnowledgeBase::from_statements(statements)?;
    if config.test("kb") {
        let _ = writeln!(w, "facts: {:?}", kb.facts);
        for rule in &kb.rules {
            let _ = writeln!(w, "rule: {:?}", rule);
        }
    }
    let underivable = kb.underivable_body_atoms();
    if !underivable.is_empty() {
        warn!("rules depend on atoms that are never true: {:?}", underivable);
    }
    let count = kb.joint_program_count().ok_or(RunError::ProgramCountOverflow)?;
    if count > LIMITS.max_joint_programs && !config.test("unbounded") {
        return Err(RunError::TooManyPrograms { count, max: LIMITS.max_joint_programs });
    }

    let denotation = kb.denotation();
    if config.test("resolutions") {
        for (rule, resolutions) in kb.rules.iter().zip(&denotation.resolutions) {
            let _ = writeln!(w, "resolutions of {:?}", rule);
            for program in resolutions {
                let _ = writeln!(w, "  {:?}", program);
            }
        }
    }
    if config.test("programs") {
        let _ = writeln!(w, "joint programs:");
        for program in &denotation.programs {
            let _ = writeln!(w, "  {:?}", program);
        }
    }
    if config.test("models") {
        let _ = writeln!(w, "models: {:?}", denotation.models);
    }
    if config.test("why") {
        for model in &denotation.models {
            for rule in violated_constraints(&kb.rules, model) {
                let _ = writeln!(w, "model {:?} violates {:?}", model, rule);
            }
        }
    }
    if !config.test("no-admissible") {
        let _ = writeln!(w, "admissible: {:?}", denotation.admissible);
    }
    Ok(denotation)
}
