use crate::{
    app::{
        constants::{ConfiguredKey, Tab},
        mock_data::{Appointment, Document},
        routes::{PageView, Route},
    },
    core::SkippedEntry,
};

#[derive(Debug)]
pub enum CommandSummary {
    Translate(TranslateSummary),
    Keys(KeysSummary),
    Check(CheckSummary),
    Tabs(TabsSummary),
    Routes(RoutesSummary),
    Documents(RecordsSummary<Document>),
    Appointments(RecordsSummary<Appointment>),
    Init(InitSummary),
}

/// One resolved key. `text` equals `key` when there was no translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub key: String,
    pub text: String,
    pub found: bool,
}

#[derive(Debug)]
pub struct TranslateSummary {
    pub translations: Vec<Translation>,
}

#[derive(Debug)]
pub struct KeysSummary {
    pub locale: String,
    pub keys: Vec<String>,
}

#[derive(Debug)]
pub struct CheckSummary {
    pub locale: String,
    pub checked: usize,
    pub missing: Vec<ConfiguredKey>,
    pub skipped: Vec<SkippedEntry>,
}

#[derive(Debug)]
pub struct TabLabel {
    pub tab: Tab,
    pub label: String,
    pub path: Option<&'static str>,
}

#[derive(Debug)]
pub struct TabsSummary {
    pub tabs: Vec<TabLabel>,
}

#[derive(Debug)]
pub enum RoutesSummary {
    Table(&'static [Route]),
    Resolved {
        path: String,
        route: &'static Route,
        view: PageView,
    },
    Unmatched {
        path: String,
    },
}

#[derive(Debug)]
pub struct RecordsSummary<T: 'static> {
    pub records: &'static [T],
    pub total: usize,
    pub json: bool,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running a kernel command
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Number of problems found (missing translations, unmatched paths,
    /// an existing config file for `init`). Any problem makes the command
    /// exit with status 1.
    pub problem_count: usize,
}

impl CommandResult {
    pub fn new(summary: CommandSummary) -> Self {
        Self {
            summary,
            problem_count: 0,
        }
    }

    pub fn with_problems(mut self, problem_count: usize) -> Self {
        self.problem_count = problem_count;
        self
    }
}
