//! Token report writer.
//!
//! The text layout is the classic lexer listing:
//!
//! ```text
//! Token --------------------- Lexeme
//! ==================================
//! ==================================
//! | KEYWORD --------------------- while
//! | IDENTIFIER --------------------- x
//! | END ---------------------
//! ```
//!
//! Text lines are written as tokens arrive; JSON is written once the stream
//! ends (or fails), with whatever tokens were seen.

use std::io::Write;

use indexmap::IndexMap;
use ratc_lex::{Category, Token};
use serde::Serialize;

use crate::commands::common::ReportFormat;
use crate::error::Result;

/// Header line of a text report.
pub const HEADER: &str = "Token --------------------- Lexeme";

/// Rule line under the header.
pub const RULE: &str = "==================================";

/// Separator between a label and its lexeme.
const FILL: &str = "---------------------";

#[derive(Debug, Serialize)]
struct TokenRecord<'src> {
    kind: &'static str,
    line: u32,
    lexeme: &'src str,
}

#[derive(Debug, Serialize)]
struct JsonReport<'a, 'src> {
    tokens: &'a [TokenRecord<'src>],
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<&'a IndexMap<&'static str, usize>>,
}

/// Writes a token report to any `Write` sink.
pub struct TokenReport<'src, W: Write> {
    out: W,
    format: ReportFormat,
    /// Per-label counts in first-seen order, when a summary is requested.
    summary: Option<IndexMap<&'static str, usize>>,
    records: Vec<TokenRecord<'src>>,
}

impl<'src, W: Write> TokenReport<'src, W> {
    /// Create a report writer.
    pub fn new(out: W, format: ReportFormat, summary: bool) -> Self {
        Self {
            out,
            format,
            summary: summary.then(IndexMap::new),
            records: Vec::new(),
        }
    }

    /// Write the header, if the format has one.
    pub fn begin(&mut self) -> Result<()> {
        if self.format == ReportFormat::Text {
            writeln!(self.out, "{}", HEADER)?;
            writeln!(self.out, "{}", RULE)?;
            writeln!(self.out, "{}", RULE)?;
        }
        Ok(())
    }

    /// Record one classified token.
    pub fn record(&mut self, category: Category, token: &Token<'src>) -> Result<()> {
        let label = category.name();
        if let Some(summary) = self.summary.as_mut() {
            *summary.entry(label).or_insert(0) += 1;
        }

        match self.format {
            ReportFormat::Text => writeln!(self.out, "| {} {} {}", label, FILL, token.lexeme)?,
            ReportFormat::Json => self.records.push(TokenRecord {
                kind: label,
                line: token.line,
                lexeme: token.lexeme,
            }),
        }
        Ok(())
    }

    /// Write the trailer (summary or JSON body), flush, and hand back the sink.
    pub fn finish(mut self) -> Result<W> {
        match self.format {
            ReportFormat::Text => {
                if let Some(summary) = &self.summary {
                    writeln!(self.out)?;
                    writeln!(self.out, "Category {} Count", FILL)?;
                    writeln!(self.out, "{}", RULE)?;
                    for (label, count) in summary {
                        writeln!(self.out, "| {} {} {}", label, FILL, count)?;
                    }
                }
            },
            ReportFormat::Json => {
                let report = JsonReport {
                    tokens: &self.records,
                    summary: self.summary.as_ref(),
                };
                serde_json::to_writer_pretty(&mut self.out, &report)?;
                writeln!(self.out)?;
            },
        }
        self.out.flush()?;
        Ok(self.out)
    }
}
