use crate::config::ValorConfig;
use crate::detail::DetailView;
use crate::error::{Result, ValorError};
use crate::listing::ListingStatus;
use crate::model::Record;
use crate::vocabulary::Vocabulary;
use std::path::PathBuf;

pub mod config;
pub mod filters;
pub mod list;
pub mod view;

/// Where configuration lives for each scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    Project,
    Global,
}

#[derive(Debug, Clone)]
pub struct ValorPaths {
    pub project: Option<PathBuf>,
    pub global: PathBuf,
}

impl ValorPaths {
    pub fn scope_dir(&self, scope: Scope) -> Result<PathBuf> {
        match scope {
            Scope::Project => self
                .project
                .clone()
                .ok_or_else(|| ValorError::Config("Project scope is not available".to_string())),
            Scope::Global => Ok(self.global.clone()),
        }
    }
}

#[derive(Debug, Clone)]
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
    pub status: Option<ListingStatus>,
    pub listed: Vec<Record>,
    pub total: usize,
    pub vocabulary: Option<Vocabulary>,
    pub detail: Option<DetailView>,
    pub config: Option<ValorConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listing(mut self, status: ListingStatus, listed: Vec<Record>, total: usize) -> Self {
        self.status = Some(status);
        self.listed = listed;
        self.total = total;
        self
    }

    pub fn with_vocabulary(mut self, vocabulary: Vocabulary) -> Self {
        self.vocabulary = Some(vocabulary);
        self
    }

    pub fn with_detail(mut self, detail: DetailView) -> Self {
        self.detail = Some(detail);
        self
    }

    pub fn with_config(mut self, config: ValorConfig) -> Self {
        self.config = Some(config);
        self
    }
}
