//! Domain value objects: Language, Category, Direction.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! This file's only job is to define the types, their string
//! representations, and their `FromStr` parsers.  The carousel never
//! branches on any of them; they exist so decks and the CLI can label
//! cards consistently.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Language ─────────────────────────────────────────────────────────────────

/// The language a snippet card is written in.
///
/// Used only for display labelling; the carousel treats card content as
/// opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Ruby,
    TypeScript,
    JavaScript,
    Html,
    Css,
    Sql,
    Yaml,
    Bash,
}

impl Language {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ruby => "ruby",
            Self::TypeScript => "typescript",
            Self::JavaScript => "javascript",
            Self::Html => "html",
            Self::Css => "css",
            Self::Sql => "sql",
            Self::Yaml => "yaml",
            Self::Bash => "bash",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ruby" | "rb" => Ok(Self::Ruby),
            "typescript" | "ts" => Ok(Self::TypeScript),
            "javascript" | "js" => Ok(Self::JavaScript),
            "html" | "markup" => Ok(Self::Html),
            "css" => Ok(Self::Css),
            "sql" => Ok(Self::Sql),
            "yaml" | "yml" => Ok(Self::Yaml),
            "bash" | "sh" | "shell" => Ok(Self::Bash),
            other => Err(DomainError::UnknownLanguage(other.to_string())),
        }
    }
}

// ── Category ─────────────────────────────────────────────────────────────────

/// Optional topical grouping for a card.
///
/// Some decks tag every card with a category badge, others use none at all;
/// it is purely presentational either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Database,
    Cloud,
    Server,
    Payment,
    Communication,
    Ai,
}

impl Category {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Database => "database",
            Self::Cloud => "cloud",
            Self::Server => "server",
            Self::Payment => "payment",
            Self::Communication => "communication",
            Self::Ai => "ai",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "database" | "db" => Ok(Self::Database),
            "cloud" => Ok(Self::Cloud),
            "server" => Ok(Self::Server),
            "payment" => Ok(Self::Payment),
            "communication" => Ok(Self::Communication),
            "ai" => Ok(Self::Ai),
            other => Err(DomainError::UnknownCategory(other.to_string())),
        }
    }
}

// ── Direction ────────────────────────────────────────────────────────────────

/// The direction of a carousel transition.
///
/// Recorded after every transition so the rendering layer can pick which
/// side the next card enters from.  Has no effect on index arithmetic
/// beyond choosing `+1` or `-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// The opposite direction.
    pub const fn reverse(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Backward => "backward",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
