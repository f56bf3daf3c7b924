// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ® John Hauger Mitander <john@oxidity.com>

use std::fmt;
use thiserror::Error;

/// Aggregator endpoint an error originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiPhase {
    Sources,
    Price,
    Quote,
}

impl ApiPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiPhase::Sources => "sources",
            ApiPhase::Price => "price",
            ApiPhase::Quote => "quote",
        }
    }
}

impl fmt::Display for ApiPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Initialization failed: {0}")]
    Initialization(String),

    #[error("Connection failed to endpoint: {0}")]
    Connection(String),

    #[error("{phase} request failed: {reason}")]
    Transport { phase: ApiPhase, reason: String },

    #[error("{phase} endpoint responded with {status}: {body}")]
    ApiStatus {
        phase: ApiPhase,
        status: u16,
        body: String,
    },

    #[error("{phase} response could not be parsed: {reason}")]
    Parse { phase: ApiPhase, reason: String },

    #[error("Approval failed: {0}")]
    Approval(String),

    #[error("Validation failed for field {field}: {message}")]
    Validation { field: String, message: String },

    #[error("Invalid negotiation transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },

    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Aggregator phase this error belongs to, if any.
    pub fn phase(&self) -> Option<ApiPhase> {
        match self {
            AppError::Transport { phase, .. }
            | AppError::ApiStatus { phase, .. }
            | AppError::Parse { phase, .. } => Some(*phase),
            _ => None,
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}
