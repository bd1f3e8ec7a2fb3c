//! Command-line arguments for the `quill` host.
//!
//! Each subcommand drives one service of the editor core against files on
//! disk, the way the editor window would drive it against open tabs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Text-buffer services for a code editor
#[derive(Parser, Debug)]
#[command(name = "quill", version, about = "Search, highlight and navigate source files")]
pub struct Cli {
    /// Editor option (`ts=2`, `nosyntax`, `rf=3`). Repeatable.
    #[arg(long = "set", value_name = "OPTION", global = true)]
    pub set: Vec<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// List every line containing KEYWORD, across all FILES in order
    Find {
        keyword: String,
        #[arg(required = true, value_name = "FILES")]
        files: Vec<PathBuf>,
    },

    /// Replace every occurrence of SEARCH in FILE
    Replace {
        file: PathBuf,
        search: String,
        replacement: String,
        /// Save the result back to FILE instead of printing it
        #[arg(short, long)]
        write: bool,
    },

    /// Resolve a 1-based LINE in FILE to a cursor position
    Goto { file: PathBuf, line: usize },

    /// Indent 1-based LINE of FILE by `tabstop` spaces and print the result
    Indent { file: PathBuf, line: usize },

    /// Print the highlight tokens of every line of FILE
    Highlight { file: PathBuf },

    /// Word, character and line counts of FILE
    Stats { file: PathBuf },

    /// Keyword completions for PREFIX
    Complete { prefix: String },

    /// Open FILES in order and print the recent-files list
    Recent {
        #[arg(required = true, value_name = "FILES")]
        files: Vec<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn find_takes_many_files() {
        let cli = parse(&["quill", "find", "alpha", "a.py", "b.py"]);
        assert_eq!(
            cli.command,
            Command::Find {
                keyword: "alpha".into(),
                files: vec![PathBuf::from("a.py"), PathBuf::from("b.py")],
            }
        );
        assert!(cli.set.is_empty());
    }

    #[test]
    fn find_requires_a_file() {
        assert!(Cli::try_parse_from(["quill", "find", "alpha"]).is_err());
    }

    #[test]
    fn replace_write_flag() {
        let cli = parse(&["quill", "replace", "f.txt", "a", "b", "--write"]);
        assert_eq!(
            cli.command,
            Command::Replace {
                file: PathBuf::from("f.txt"),
                search: "a".into(),
                replacement: "b".into(),
                write: true,
            }
        );
    }

    #[test]
    fn set_is_global_and_repeatable() {
        let cli = parse(&["quill", "--set", "ts=2", "goto", "f.txt", "3", "--set", "nosyn"]);
        assert_eq!(cli.set, vec!["ts=2", "nosyn"]);
        assert_eq!(
            cli.command,
            Command::Goto {
                file: PathBuf::from("f.txt"),
                line: 3,
            }
        );
    }

    #[test]
    fn goto_line_must_be_a_number() {
        assert!(Cli::try_parse_from(["quill", "goto", "f.txt", "three"]).is_err());
    }

    #[test]
    fn indent_takes_file_and_line() {
        let cli = parse(&["quill", "--set", "ts=2", "indent", "f.py", "2"]);
        assert_eq!(
            cli.command,
            Command::Indent {
                file: PathBuf::from("f.py"),
                line: 2,
            }
        );
    }

    #[test]
    fn missing_subcommand_fails() {
        assert!(Cli::try_parse_from(["quill"]).is_err());
    }
}
