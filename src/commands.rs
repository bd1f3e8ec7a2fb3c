//! Subcommand handlers.
//!
//! Each handler opens what it needs into a fresh [`BufferRegistry`], calls
//! into the editor core, and writes plain-text results to `out`.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use quill_editor::options::parse_directives;
use quill_editor::search::{self, SearchScope};
use quill_editor::{BufferRegistry, EditorConfig, navigation};
use quill_syntax::completion::Completer;
use quill_syntax::{RuleSet, Tokenizer};
use tracing::debug;

use crate::cli::Command;

/// Build the editor config from `--set` arguments, echoing query results.
///
/// # Errors
///
/// Fails on the first directive that does not apply.
pub fn build_config(directives: &[String], out: &mut impl Write) -> Result<EditorConfig> {
    let mut config = EditorConfig::default();
    for arg in directives {
        for directive in parse_directives(arg) {
            if let Some(shown) = config
                .apply(&directive)
                .with_context(|| format!("--set {arg}"))?
            {
                writeln!(out, "{shown}")?;
            }
        }
    }
    debug!(?config, "config");
    Ok(config)
}

/// Run one subcommand.
///
/// # Errors
///
/// Any editor-core failure (missing file, bad pattern) or write error.
pub fn run(command: &Command, config: &EditorConfig, out: &mut impl Write) -> Result<()> {
    let mut registry = BufferRegistry::with_config(config);
    match command {
        Command::Find { keyword, files } => {
            for file in files {
                registry.open(file)?;
            }
            for result in search::find_all(&registry, keyword, SearchScope::All)? {
                let name = registry.display_name(result.buffer)?;
                writeln!(out, "{}", result.label(&name))?;
            }
        }
        Command::Replace {
            file,
            search,
            replacement,
            write,
        } => {
            let id = registry.open(file)?;
            let count = search::replace_all(&mut registry, id, search, replacement)?;
            if *write {
                if registry.get(id)?.is_dirty() {
                    registry.save(id, None)?;
                }
                writeln!(out, "{count} replaced")?;
            } else {
                write!(out, "{}", registry.get(id)?.text())?;
            }
        }
        Command::Goto { file, line } => {
            let id = registry.open(file)?;
            let target = navigation::resolve_line(&registry, id, *line)?;
            writeln!(out, "{} offset {}", target.location, target.offset)?;
        }
        Command::Indent { file, line } => {
            let id = registry.open(file)?;
            let target = navigation::resolve_line(&registry, id, *line)?;
            registry.insert_indent(id, target.offset)?;
            write!(out, "{}", registry.get(id)?.text())?;
        }
        Command::Highlight { file } => highlight(&mut registry, file, config, out)?,
        Command::Stats { file } => {
            let id = registry.open(file)?;
            let stats = registry.get(id)?.stats();
            writeln!(
                out,
                "words: {} chars: {} lines: {}",
                stats.words, stats.chars, stats.lines
            )?;
        }
        Command::Complete { prefix } => {
            for word in Completer::default().complete(prefix) {
                writeln!(out, "{word}")?;
            }
        }
        Command::Recent { files } => {
            for file in files {
                registry.open(file)?;
            }
            for (idx, path) in registry.recent_files().iter().enumerate() {
                writeln!(out, "{}: {}", idx + 1, path.display())?;
            }
        }
    }
    Ok(())
}

fn highlight(
    registry: &mut BufferRegistry,
    file: &Path,
    config: &EditorConfig,
    out: &mut impl Write,
) -> Result<()> {
    let tokenizer = if config.syntax {
        Tokenizer::for_path(file)?
    } else {
        Tokenizer::new(RuleSet::empty())
    };
    let id = registry.open(file)?;
    let buffer = registry.get(id)?;
    let width = navigation::gutter_width(buffer.line_count());
    for (idx, line) in buffer.lines().iter().enumerate() {
        let tokens: Vec<String> = tokenizer
            .classify(line)
            .iter()
            .map(ToString::to_string)
            .collect();
        let row = format!("{:>w$} {}", idx + 1, tokens.join(" "), w = width - 1);
        writeln!(out, "{}", row.trim_end())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;

    use super::*;

    fn write(dir: &Path, name: &str, text: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, text).unwrap();
        path
    }

    fn run_to_string(command: &Command, config: &EditorConfig) -> String {
        let mut out = Vec::new();
        run(command, config, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn find_prints_labels_in_file_order() {
        let dir = tempfile::tempdir().unwrap();
        let a = write(dir.path(), "a.py", "x = 1\n  y = x\n");
        let b = write(dir.path(), "b.py", "print(x)\n");
        let out = run_to_string(
            &Command::Find {
                keyword: "x".into(),
                files: vec![a, b],
            },
            &EditorConfig::default(),
        );
        assert_eq!(
            out,
            "a.py: line 1: x = 1\na.py: line 2: y = x\nb.py: line 1: print(x)\n"
        );
    }

    #[test]
    fn replace_prints_or_writes() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "g.txt", "alpha\nbeta\nalpha");
        let mut command = Command::Replace {
            file: path.clone(),
            search: "alpha".into(),
            replacement: "gamma".into(),
            write: false,
        };
        let config = EditorConfig::default();
        assert_eq!(run_to_string(&command, &config), "gamma\nbeta\ngamma");
        assert_eq!(fs::read_to_string(&path).unwrap(), "alpha\nbeta\nalpha");

        if let Command::Replace { write, .. } = &mut command {
            *write = true;
        }
        assert_eq!(run_to_string(&command, &config), "2 replaced\n");
        assert_eq!(fs::read_to_string(&path).unwrap(), "gamma\nbeta\ngamma");
    }

    #[test]
    fn goto_clamps() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "t.txt", "one\ntwo\nthree");
        let out = run_to_string(
            &Command::Goto {
                file: path,
                line: 10_000,
            },
            &EditorConfig::default(),
        );
        assert_eq!(out, "3:1 offset 8\n");
    }

    #[test]
    fn indent_uses_tabstop_option() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "i.py", "if x:\npass\n");
        let command = Command::Indent {
            file: path,
            line: 2,
        };
        assert_eq!(
            run_to_string(&command, &EditorConfig::default()),
            "if x:\n    pass\n"
        );
        let config = build_config(&["ts=2".to_string()], &mut Vec::new()).unwrap();
        assert_eq!(run_to_string(&command, &config), "if x:\n  pass\n");
    }

    #[test]
    fn highlight_python_and_nosyntax() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "h.py", "# def x\n");
        let command = Command::Highlight { file: path };
        assert_eq!(
            run_to_string(&command, &EditorConfig::default()),
            "1 comment@0+7\n2\n"
        );
        let plain = EditorConfig {
            syntax: false,
            ..EditorConfig::default()
        };
        assert_eq!(run_to_string(&command, &plain), "1 plain@0+7\n2\n");
    }

    #[test]
    fn stats_counts() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "s.txt", "two words\nthree\n");
        let out = run_to_string(&Command::Stats { file: path }, &EditorConfig::default());
        assert_eq!(out, "words: 3 chars: 16 lines: 3\n");
    }

    #[test]
    fn complete_lists_matches() {
        let out = run_to_string(
            &Command::Complete {
                prefix: "IMP".into(),
            },
            &EditorConfig::default(),
        );
        assert_eq!(out, "import\n");
    }

    #[test]
    fn recent_respects_capacity_option() {
        let dir = tempfile::tempdir().unwrap();
        let files: Vec<_> = ["a", "b", "c"]
            .iter()
            .map(|n| write(dir.path(), n, ""))
            .collect();
        let mut sink = Vec::new();
        let config = build_config(&["rf=2".to_string()], &mut sink).unwrap();
        let out = run_to_string(&Command::Recent { files: files.clone() }, &config);
        assert_eq!(
            out,
            format!("1: {}\n2: {}\n", files[2].display(), files[1].display())
        );
    }

    #[test]
    fn build_config_echoes_queries_and_rejects_unknown() {
        let mut out = Vec::new();
        let config = build_config(&["ts=2 ts?".to_string()], &mut out).unwrap();
        assert_eq!(config.tabstop, 2);
        assert_eq!(String::from_utf8(out).unwrap(), "tabstop=2\n");
        assert!(build_config(&["bogus=1".to_string()], &mut Vec::new()).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let command = Command::Stats {
            file: dir.path().join("nope.txt"),
        };
        assert!(run(&command, &EditorConfig::default(), &mut Vec::new()).is_err());
    }
}
