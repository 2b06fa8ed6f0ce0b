use crate::config::BomConfig;
use crate::model::ComponentRecord;
use std::rc::Rc;

pub mod build;
pub mod catalog;
pub mod config;
pub mod demo;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Rendered assembly, header first
    pub lines: Vec<String>,
    pub total_cost: Option<f64>,
    pub catalog: Vec<Rc<ComponentRecord>>,
    pub config: Option<BomConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_lines(mut self, lines: Vec<String>) -> Self {
        self.lines = lines;
        self
    }

    pub fn with_total_cost(mut self, total: f64) -> Self {
        self.total_cost = Some(total);
        self
    }

    pub fn with_catalog(mut self, records: Vec<Rc<ComponentRecord>>) -> Self {
        self.catalog = records;
        self
    }

    pub fn with_config(mut self, config: BomConfig) -> Self {
        self.config = Some(config);
        self
    }
}
