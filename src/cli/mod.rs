/// Command line flags, read from the process arguments.
pub mod config;

/// The pipeline from source text to printed denotation.
pub mod run;
