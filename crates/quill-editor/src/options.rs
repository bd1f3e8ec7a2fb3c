//! Option directives for [`EditorConfig`].
//!
//! Hosts pass settings as short words: the CLI's repeatable `--set` flag, a
//! preferences field, a startup argument. A word names an option, optionally
//! with a value (`tabstop=2`), a `no` prefix for switches (`nosyntax`), a `!`
//! suffix to flip a switch, or a `?` suffix to ask for the current value.
//! Several words may share one string, separated by whitespace.
//!
//! Options are `recentfiles` (`rf`), `tabstop` (`ts`) and the `syntax`
//! (`syn`) switch. Unknown names are reported, never ignored.

use thiserror::Error;

use crate::config::EditorConfig;

/// A known option.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditorOption {
    RecentFiles,
    Tabstop,
    Syntax,
}

impl EditorOption {
    pub const ALL: [Self; 3] = [Self::RecentFiles, Self::Tabstop, Self::Syntax];

    /// Resolve a full or short option name.
    #[must_use]
    pub fn lookup(name: &str) -> Option<Self> {
        match name {
            "recentfiles" | "rf" => Some(Self::RecentFiles),
            "tabstop" | "ts" => Some(Self::Tabstop),
            "syntax" | "syn" => Some(Self::Syntax),
            _ => None,
        }
    }

    /// The full name, as shown back to the user.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::RecentFiles => "recentfiles",
            Self::Tabstop => "tabstop",
            Self::Syntax => "syntax",
        }
    }

    /// On/off switch rather than a number.
    #[must_use]
    pub const fn is_switch(self) -> bool {
        matches!(self, Self::Syntax)
    }
}

/// One parsed word. Names are kept as typed so errors can quote them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// `syntax`
    On(String),
    /// `nosyntax`
    Off(String),
    /// `syntax!`
    Toggle(String),
    /// `ts?`, or a bare numeric name such as `ts`.
    Query(String),
    /// `ts=2`
    Assign(String, String),
    /// An empty string: list every option.
    ShowAll,
}

impl Directive {
    /// Parse a single word.
    #[must_use]
    pub fn parse(word: &str) -> Self {
        if let Some((name, value)) = word.split_once('=') {
            return Self::Assign(name.to_owned(), value.to_owned());
        }
        if let Some(name) = word.strip_suffix('?') {
            return Self::Query(name.to_owned());
        }
        if let Some(name) = word.strip_suffix('!') {
            return Self::Toggle(name.to_owned());
        }
        if let Some(name) = word.strip_prefix("no") {
            if EditorOption::lookup(name).is_some_and(EditorOption::is_switch) {
                return Self::Off(name.to_owned());
            }
        }
        match EditorOption::lookup(word) {
            Some(opt) if !opt.is_switch() => Self::Query(word.to_owned()),
            _ => Self::On(word.to_owned()),
        }
    }
}

/// Parse whitespace-separated words. An empty string lists every option.
#[must_use]
pub fn parse_directives(input: &str) -> Vec<Directive> {
    let words: Vec<Directive> = input.split_whitespace().map(Directive::parse).collect();
    if words.is_empty() {
        vec![Directive::ShowAll]
    } else {
        words
    }
}

/// A directive that could not be applied.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OptionError {
    #[error("unknown option: {0}")]
    Unknown(String),

    #[error("option {0} is not an on/off switch")]
    NotSwitch(String),

    #[error("invalid value for {name}: {value}")]
    InvalidValue { name: String, value: String },
}

impl EditorConfig {
    /// Apply one directive. Queries and [`Directive::ShowAll`] return the
    /// text to show; changes return `None`.
    ///
    /// # Errors
    ///
    /// [`OptionError`] for unknown names, switch directives on numeric
    /// options, and unparsable values. The config is unchanged on error.
    pub fn apply(&mut self, directive: &Directive) -> Result<Option<String>, OptionError> {
        match directive {
            Directive::ShowAll => Ok(Some(self.describe())),
            Directive::Query(name) => Ok(Some(self.show(known(name)?))),
            Directive::On(name) => self.switch(name, |_| true).map(|()| None),
            Directive::Off(name) => self.switch(name, |_| false).map(|()| None),
            Directive::Toggle(name) => self.switch(name, |v| !v).map(|()| None),
            Directive::Assign(name, value) => self.assign(name, value).map(|()| None),
        }
    }

    /// Every option, space separated.
    #[must_use]
    pub fn describe(&self) -> String {
        EditorOption::ALL
            .iter()
            .map(|&opt| self.show(opt))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// One option as `name=value`, or `name` / `noname` for a switch.
    #[must_use]
    pub fn show(&self, opt: EditorOption) -> String {
        match opt {
            EditorOption::RecentFiles => format!("{}={}", opt.name(), self.recent_capacity),
            EditorOption::Tabstop => format!("{}={}", opt.name(), self.tabstop),
            EditorOption::Syntax if self.syntax => opt.name().to_owned(),
            EditorOption::Syntax => format!("no{}", opt.name()),
        }
    }

    fn switch(&mut self, name: &str, f: impl FnOnce(bool) -> bool) -> Result<(), OptionError> {
        match known(name)? {
            EditorOption::Syntax => {
                self.syntax = f(self.syntax);
                Ok(())
            }
            EditorOption::RecentFiles | EditorOption::Tabstop => {
                Err(OptionError::NotSwitch(name.to_owned()))
            }
        }
    }

    fn assign(&mut self, name: &str, value: &str) -> Result<(), OptionError> {
        let invalid = || OptionError::InvalidValue {
            name: name.to_owned(),
            value: value.to_owned(),
        };
        match known(name)? {
            EditorOption::RecentFiles => {
                self.recent_capacity = value.parse().map_err(|_| invalid())?;
            }
            EditorOption::Tabstop => {
                self.tabstop = value
                    .parse()
                    .ok()
                    .filter(|&n: &usize| n > 0)
                    .ok_or_else(invalid)?;
            }
            EditorOption::Syntax => {
                self.syntax = match value {
                    "on" | "true" | "1" => true,
                    "off" | "false" | "0" => false,
                    _ => return Err(invalid()),
                };
            }
        }
        Ok(())
    }
}

fn known(name: &str) -> Result<EditorOption, OptionError> {
    EditorOption::lookup(name).ok_or_else(|| OptionError::Unknown(name.to_owned()))
}
