//! Wizard tab state machine
//!
//! Device forms walk BasicInfo -> Connection -> Registers -> Parameters;
//! template forms skip the Connection tab. Moving forward reveals the
//! errors of the tab being left, moving back hides them again, and Save
//! reveals everything. The full validation itself is re-run by the
//! caller on every step; the wizard only decides which subset is shown.

use crate::validate::ValidationReport;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Form tabs, in wizard order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormTab {
    BasicInfo,
    Connection,
    Registers,
    Parameters,
}

/// Tab navigation state for one open form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wizard {
    tabs: Vec<FormTab>,
    current: usize,
    revealed: BTreeSet<FormTab>,
}

impl Wizard {
    /// Wizard for a device form (all four tabs)
    pub fn for_device() -> Self {
        Self {
            tabs: vec![
                FormTab::BasicInfo,
                FormTab::Connection,
                FormTab::Registers,
                FormTab::Parameters,
            ],
            current: 0,
            revealed: BTreeSet::new(),
        }
    }

    /// Wizard for a template form (no connection tab)
    pub fn for_template() -> Self {
        Self {
            tabs: vec![FormTab::BasicInfo, FormTab::Registers, FormTab::Parameters],
            current: 0,
            revealed: BTreeSet::new(),
        }
    }

    /// The active tab
    pub fn current(&self) -> FormTab {
        self.tabs[self.current]
    }

    /// Advance to the next tab, revealing the errors of the tab left
    ///
    /// Returns the new active tab; stays put on the last tab.
    pub fn next(&mut self) -> FormTab {
        self.revealed.insert(self.current());
        if self.current + 1 < self.tabs.len() {
            self.current += 1;
        }
        self.current()
    }

    /// Go back one tab, hiding the errors of the tab left
    ///
    /// Hiding does not mean the data became valid - the errors reappear
    /// on the next submit attempt.
    pub fn previous(&mut self) -> FormTab {
        self.revealed.remove(&self.current());
        self.current = self.current.saturating_sub(1);
        self.current()
    }

    /// Jump directly to a tab (tab click); revealed errors are unchanged
    pub fn select(&mut self, tab: FormTab) {
        if let Some(index) = self.tabs.iter().position(|t| *t == tab) {
            self.current = index;
        }
    }

    /// Submit attempt: reveal every tab and gate on the aggregate verdict
    pub fn save(&mut self, report: &ValidationReport) -> bool {
        self.revealed.extend(self.tabs.iter().copied());
        report.is_valid
    }

    /// Whether a tab's errors are currently shown
    pub fn is_revealed(&self, tab: FormTab) -> bool {
        self.revealed.contains(&tab)
    }

    /// The subset of a full report the console should currently display
    ///
    /// General errors are always shown; tab-scoped errors only once their
    /// tab has been revealed. `is_valid` always reflects the full report.
    pub fn visible_report(&self, report: &ValidationReport) -> ValidationReport {
        let pick = |tab: FormTab, errors: &Vec<crate::validate::FieldError>| {
            if self.is_revealed(tab) {
                errors.clone()
            } else {
                Vec::new()
            }
        };
        ValidationReport {
            is_valid: report.is_valid,
            basic_info: pick(FormTab::BasicInfo, &report.basic_info),
            connection: pick(FormTab::Connection, &report.connection),
            registers: pick(FormTab::Registers, &report.registers),
            parameters: pick(FormTab::Parameters, &report.parameters),
            general: report.general.clone(),
        }
    }
}
