/// The deontic rule language: its abstract syntax, parsing, statics, and dynamics.
pub mod lang;

/// Executor internals: flag configuration and the source-to-denotation pipeline.
pub mod cli;
