use log::warn;
use std::collections::{HashMap, HashSet};

pub struct Config {
    defined_flag_name_to_description: HashMap<&'static str, &'static str>,
    present_flag_names: HashSet<String>,
}

static FLAG_DESC_SLICE: &[(&str, &str)] = &[
    ("kb", "print the knowledge base, i.e., the facts and rules, after parsing"),
    ("models", "print every distinct least model, admissible or not"),
    ("no-admissible", "do not print the admissible models"),
    ("programs", "print every joint definite program"),
    ("resolutions", "print the definite program resolutions of each rule"),
    ("source", "print given source code after preprocessing"),
    ("unbounded", "enumerate joint programs even when there are very many of them"),
    ("why", "print the constraints violated by each inadmissible model"),
];

impl Config {
    pub fn test(&self, flag_name: &'static str) -> bool {
        if !self.defined_flag_name_to_description.contains_key(flag_name) {
            panic!("unknown flag name! `{}`", flag_name);
        }
        self.present_flag_names.contains(flag_name)
    }

    pub fn no_flags() -> Self {
        Self::with_flags(std::iter::empty::<String>())
    }

    /// Flags are given by name, without the leading `--`.
    pub fn with_flags(flag_names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let defined_flag_name_to_description: HashMap<_, _> =
            FLAG_DESC_SLICE.iter().copied().collect();
        let present_flag_names = flag_names
            .into_iter()
            .map(|s| -> String { s.into() })
            .inspect(|s| {
                if !defined_flag_name_to_description.contains_key(s.as_str()) {
                    warn!("unrecognized flag `{}`", s);
                }
            })
            .collect();
        Self { present_flag_names, defined_flag_name_to_description }
    }

    pub fn print_help() {
        println!("Deontic rule evaluator help information. Reads a source from stdin. Flags:");
        println!(" --{: <13}  {}", "help", "print this");
        for (name, desc) in FLAG_DESC_SLICE {
            println!(" --{: <13}  {}", name, desc);
        }
    }
}

impl Default for Config {
    /// Reads flags from the command line arguments. Exits after printing help if requested.
    fn default() -> Self {
        if std::env::args().any(|s| s == "--help") {
            Self::print_help();
            std::process::exit(0);
        }
        let flag_names = std::env::args().skip(1).filter_map(|s| {
            if s == "--" {
                None
            } else if let Some(name) = s.strip_prefix("--") {
                Some(name.to_owned())
            } else {
                warn!("unrecognized input `{}`", s);
                None
            }
        });
        Self::with_flags(flag_names)
    }
}
