// ABOUTME: Logging configuration and structured logging setup for the nutrition engine
// ABOUTME: Configures log levels, formatters, and env-filter overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Production-ready logging configuration with structured output

use crate::errors::{AppError, AppResult};
use std::env;
use std::io;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include span information for tracing
    pub include_spans: bool,
}

/// Log output format options
#[derive(Debug, Clone)]
pub enum LogFormat {
    /// `JSON` format for production logging
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for space-constrained environments
    Compact,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
            format: match env::var("LOG_FORMAT").as_deref() {
                Ok("json") => LogFormat::Json,
                Ok("compact") => LogFormat::Compact,
                _ => LogFormat::Pretty,
            },
            include_location: false,
            include_spans: false,
        }
    }
}

/// Initialize the global tracing subscriber from a [`LoggingConfig`]
///
/// `RUST_LOG` takes precedence over the configured level so operators can
/// raise verbosity per module without a redeploy.
///
/// # Errors
///
/// Returns an error if the filter directive cannot be parsed or a global
/// subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> AppResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| AppError::internal("invalid log filter").with_source(e))?;

    let registry = tracing_subscriber::registry().with(filter);

    let span_events = if config.include_spans {
        FmtSpan::NEW | FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    let result = match config.format {
        LogFormat::Json => {
            let json_layer = fmt::layer()
                .with_file(config.include_location)
                .with_line_number(config.include_location)
                .with_target(true)
                .with_writer(io::stdout)
                .with_span_events(span_events)
                .json();
            registry.with(json_layer).try_init()
        }
        LogFormat::Pretty => {
            let pretty_layer = fmt::layer()
                .with_file(config.include_location)
                .with_line_number(config.include_location)
                .with_target(true)
                .with_writer(io::stdout)
                .with_span_events(span_events);
            registry.with(pretty_layer).try_init()
        }
        LogFormat::Compact => {
            let compact_layer = fmt::layer()
                .compact()
                .with_file(false)
                .with_line_number(false)
                .with_target(false)
                .with_writer(io::stdout)
                .with_span_events(FmtSpan::NONE);
            registry.with(compact_layer).try_init()
        }
    };

    result.map_err(|e| AppError::internal("logging init failed").with_source(e))
}
