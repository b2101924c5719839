//! Display configuration for a single rcat invocation.
//!
//! [`DisplayOptions`] is immutable once built. All flag-combination rules
//! (`-e` meaning `-vE`, `-b` implying `-n`, and so on) live in
//! [`OptionsBuilder::apply`], so the command line only has to report which
//! [`DisplayFlag`]s it saw.

use std::path::{Path, PathBuf};

/// Where the engine reads its bytes from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum InputSource {
    /// The process standard input (or whatever stream the caller injects)
    #[default]
    Stdin,
    /// A named file opened for reading
    File(PathBuf),
}

impl InputSource {
    /// Name used in diagnostics: `-` for standard input, the path otherwise
    pub fn display_name(&self) -> String {
        match self {
            Self::Stdin => "-".to_string(),
            Self::File(path) => path.display().to_string(),
        }
    }
}

/// A single command-line display flag, before combination rules are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayFlag {
    /// `-A`, `--show-all`
    ShowAll,
    /// `-b`, `--number-nonblank`
    NumberNonblank,
    /// `-e`
    ShowEndsNonprinting,
    /// `-E`, `--show-ends`
    ShowEnds,
    /// `-n`, `--number`
    Number,
    /// `-s`, `--squeeze-blank`
    SqueezeBlank,
    /// `-t`
    ShowTabsNonprinting,
    /// `-T`, `--show-tabs`
    ShowTabs,
    /// `-u`, accepted and ignored
    Unbuffered,
    /// `-v`, `--show-nonprinting`
    ShowNonprinting,
}

impl DisplayFlag {
    /// Every flag, in the order they are listed in `--help`
    pub const ALL: [DisplayFlag; 10] = [
        Self::ShowAll,
        Self::NumberNonblank,
        Self::ShowEndsNonprinting,
        Self::ShowEnds,
        Self::Number,
        Self::SqueezeBlank,
        Self::ShowTabsNonprinting,
        Self::ShowTabs,
        Self::Unbuffered,
        Self::ShowNonprinting,
    ];

    /// Stable identifier, also used as the clap argument id
    pub fn id(self) -> &'static str {
        match self {
            Self::ShowAll => "show-all",
            Self::NumberNonblank => "number-nonblank",
            Self::ShowEndsNonprinting => "e",
            Self::ShowEnds => "show-ends",
            Self::Number => "number",
            Self::SqueezeBlank => "squeeze-blank",
            Self::ShowTabsNonprinting => "t",
            Self::ShowTabs => "show-tabs",
            Self::Unbuffered => "u",
            Self::ShowNonprinting => "show-nonprinting",
        }
    }

    pub fn short(self) -> char {
        match self {
            Self::ShowAll => 'A',
            Self::NumberNonblank => 'b',
            Self::ShowEndsNonprinting => 'e',
            Self::ShowEnds => 'E',
            Self::Number => 'n',
            Self::SqueezeBlank => 's',
            Self::ShowTabsNonprinting => 't',
            Self::ShowTabs => 'T',
            Self::Unbuffered => 'u',
            Self::ShowNonprinting => 'v',
        }
    }

    /// Long option name, if the flag has one
    pub fn long(self) -> Option<&'static str> {
        match self {
            Self::ShowEndsNonprinting | Self::ShowTabsNonprinting | Self::Unbuffered => None,
            other => Some(other.id()),
        }
    }

    pub fn help(self) -> &'static str {
        match self {
            Self::ShowAll => "equivalent to -vET",
            Self::NumberNonblank => "number nonempty output lines, overrides -n",
            Self::ShowEndsNonprinting => "equivalent to -vE",
            Self::ShowEnds => "display $ at end of each line",
            Self::Number => "number all output lines",
            Self::SqueezeBlank => "suppress repeated empty output lines",
            Self::ShowTabsNonprinting => "equivalent to -vT",
            Self::ShowTabs => "display TAB characters as ^I",
            Self::Unbuffered => "(ignored)",
            Self::ShowNonprinting => "use ^ and M- notation, except for LFD and TAB",
        }
    }
}

/// Immutable set of display options plus the input selector.
///
/// Construct through [`OptionsBuilder`]; there are no setters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayOptions {
    number: bool,
    number_nonblank: bool,
    show_ends: bool,
    show_nonprinting: bool,
    show_tabs: bool,
    squeeze_blank: bool,
    input: InputSource,
}

impl DisplayOptions {
    pub fn builder() -> OptionsBuilder {
        OptionsBuilder::default()
    }

    /// Number output lines. Always true when [`number_nonblank`](Self::number_nonblank) is.
    pub fn number(&self) -> bool {
        self.number
    }

    /// Restrict numbering to non-blank lines
    pub fn number_nonblank(&self) -> bool {
        self.number_nonblank
    }

    pub fn show_ends(&self) -> bool {
        self.show_ends
    }

    pub fn show_nonprinting(&self) -> bool {
        self.show_nonprinting
    }

    pub fn show_tabs(&self) -> bool {
        self.show_tabs
    }

    pub fn squeeze_blank(&self) -> bool {
        self.squeeze_blank
    }

    pub fn input(&self) -> &InputSource {
        &self.input
    }

    pub fn read_from_stdin(&self) -> bool {
        matches!(self.input, InputSource::Stdin)
    }

    /// The named input file, or `None` when reading standard input
    pub fn filename(&self) -> Option<&Path> {
        match &self.input {
            InputSource::Stdin => None,
            InputSource::File(path) => Some(path),
        }
    }
}

/// Accumulates flags and the input selection, then freezes them into
/// [`DisplayOptions`].
#[derive(Debug, Clone, Default)]
pub struct OptionsBuilder {
    options: DisplayOptions,
}

impl OptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one command-line flag, expanding the combined short flags.
    pub fn apply(mut self, flag: DisplayFlag) -> Self {
        let o = &mut self.options;
        match flag {
            DisplayFlag::ShowAll => {
                o.show_nonprinting = true;
                o.show_ends = true;
                o.show_tabs = true;
            }
            DisplayFlag::NumberNonblank => {
                o.number = true;
                o.number_nonblank = true;
            }
            DisplayFlag::ShowEndsNonprinting => {
                o.show_ends = true;
                o.show_nonprinting = true;
            }
            DisplayFlag::ShowEnds => o.show_ends = true,
            DisplayFlag::Number => o.number = true,
            DisplayFlag::SqueezeBlank => o.squeeze_blank = true,
            DisplayFlag::ShowTabsNonprinting => {
                o.show_tabs = true;
                o.show_nonprinting = true;
            }
            DisplayFlag::ShowTabs => o.show_tabs = true,
            DisplayFlag::Unbuffered => {}
            DisplayFlag::ShowNonprinting => o.show_nonprinting = true,
        }
        self
    }

    pub fn apply_all(self, flags: impl IntoIterator<Item = DisplayFlag>) -> Self {
        flags.into_iter().fold(self, Self::apply)
    }

    pub fn number(self) -> Self {
        self.apply(DisplayFlag::Number)
    }

    pub fn number_nonblank(self) -> Self {
        self.apply(DisplayFlag::NumberNonblank)
    }

    pub fn show_ends(self) -> Self {
        self.apply(DisplayFlag::ShowEnds)
    }

    pub fn show_nonprinting(self) -> Self {
        self.apply(DisplayFlag::ShowNonprinting)
    }

    pub fn show_tabs(self) -> Self {
        self.apply(DisplayFlag::ShowTabs)
    }

    pub fn squeeze_blank(self) -> Self {
        self.apply(DisplayFlag::SqueezeBlank)
    }

    /// Read from standard input. Replaces any earlier file selection.
    pub fn stdin(mut self) -> Self {
        self.options.input = InputSource::Stdin;
        self
    }

    /// Read from a named file. Replaces any earlier selection.
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.options.input = InputSource::File(path.into());
        self
    }

    pub fn build(self) -> DisplayOptions {
        self.options
    }
}
