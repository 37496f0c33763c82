//! Application state

use breakpoint_core::{
    report::{format_report, DerivedRecord},
    Evaluation, StatCatalog, StatEngine,
};
use tracing::{debug, info};

/// Whether keys edit the value or navigate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
}

pub struct App {
    /// One engine per statistic, in catalog order
    pub engines: Vec<StatEngine>,
    /// Latest evaluation of each engine
    pub evaluations: Vec<Evaluation>,
    pub current_tab: usize,
    pub input_mode: InputMode,
    pub input: String,
    pub show_help: bool,
    pub table_scroll: usize,
}

impl App {
    pub fn new(catalog: &StatCatalog) -> Self {
        let engines = catalog.engines();
        let evaluations = engines.iter().map(StatEngine::evaluate).collect();
        info!(stats = engines.len(), "app started");

        App {
            engines,
            evaluations,
            current_tab: 0,
            input_mode: InputMode::Normal,
            input: String::new(),
            show_help: false,
            table_scroll: 0,
        }
    }

    pub fn tab_names(&self) -> Vec<&str> {
        self.engines.iter().map(|e| e.statistic().name()).collect()
    }

    pub fn next_tab(&mut self) {
        if self.engines.is_empty() {
            return;
        }
        self.current_tab = (self.current_tab + 1) % self.engines.len();
        self.table_scroll = 0;
    }

    pub fn prev_tab(&mut self) {
        if self.engines.is_empty() {
            return;
        }
        self.current_tab = if self.current_tab == 0 {
            self.engines.len() - 1
        } else {
            self.current_tab - 1
        };
        self.table_scroll = 0;
    }

    pub fn set_tab(&mut self, index: usize) {
        if index < self.engines.len() {
            self.current_tab = index;
            self.table_scroll = 0;
        }
    }

    pub fn current_engine(&self) -> Option<&StatEngine> {
        self.engines.get(self.current_tab)
    }

    pub fn current_evaluation(&self) -> Option<&Evaluation> {
        self.evaluations.get(self.current_tab)
    }

    /// Display records for the selected statistic
    pub fn current_records(&self) -> Vec<DerivedRecord> {
        self.current_evaluation()
            .map(format_report)
            .unwrap_or_default()
    }

    pub fn on_up(&mut self) {
        if self.table_scroll > 0 {
            self.table_scroll -= 1;
        }
    }

    pub fn on_down(&mut self) {
        let rows = self.current_evaluation().map_or(0, |e| e.values.len());
        if self.table_scroll < rows.saturating_sub(1) {
            self.table_scroll += 1;
        }
    }

    pub fn increment(&mut self) {
        self.edit_current(StatEngine::increment);
    }

    pub fn decrement(&mut self) {
        self.edit_current(StatEngine::decrement);
    }

    /// Reset the selected statistic to its base value
    pub fn reset(&mut self) {
        self.edit_current(StatEngine::reset);
    }

    pub fn begin_edit(&mut self) {
        if let Some(engine) = self.current_engine() {
            self.input = engine.current_value().to_string();
            self.input_mode = InputMode::Editing;
        }
    }

    pub fn push_char(&mut self, c: char) {
        if self.input_mode == InputMode::Editing {
            self.input.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        if self.input_mode == InputMode::Editing {
            self.input.pop();
        }
    }

    /// Send the typed text to the engine
    pub fn commit_edit(&mut self) {
        if self.input_mode != InputMode::Editing {
            return;
        }
        let raw = std::mem::take(&mut self.input);
        self.input_mode = InputMode::Normal;
        self.edit_current(|engine| engine.set_raw_input(&raw));
    }

    pub fn cancel_edit(&mut self) {
        self.input.clear();
        self.input_mode = InputMode::Normal;
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    fn edit_current(&mut self, edit: impl FnOnce(&mut StatEngine)) {
        let index = self.current_tab;
        let Some(engine) = self.engines.get_mut(index) else {
            return;
        };
        edit(engine);
        debug!(
            stat = engine.statistic().name(),
            value = %engine.current_value(),
            "value changed"
        );
        self.evaluations[index] = engine.evaluate();
    }
}
