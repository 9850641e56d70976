// ABOUTME: User preference types held per session: response language, cuisine and allergies
// ABOUTME: Parses wire tags ("ko", "한식", "western") into strongly typed enums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

/// Language the model answers in and the views are labelled in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Korean (default)
    #[default]
    Ko,
    /// English
    En,
}

impl Language {
    /// Accepted wire codes
    pub const CODES: &'static [&'static str] = &["ko", "en"];

    /// Parse a wire code (`ko` / `en`)
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "ko" => Some(Self::Ko),
            "en" => Some(Self::En),
            _ => None,
        }
    }

    /// Wire code
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Ko => "ko",
            Self::En => "en",
        }
    }

    /// English name used inside prompts
    #[must_use]
    pub const fn english_name(&self) -> &'static str {
        match self {
            Self::Ko => "Korean",
            Self::En => "English",
        }
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.code())
    }
}

/// Cuisine the suggestions should focus on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Cuisine {
    /// Korean food, 한식 (default)
    #[default]
    Korean,
    /// Chinese food, 중식
    Chinese,
    /// Japanese food, 일식
    Japanese,
    /// Western food, 양식
    Western,
}

impl Cuisine {
    /// Every cuisine, in display order
    pub const ALL: [Self; 4] = [Self::Korean, Self::Chinese, Self::Japanese, Self::Western];

    /// Parse either the English tag or the Korean label
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim();
        Self::ALL.into_iter().find(|cuisine| {
            tag.eq_ignore_ascii_case(cuisine.tag()) || tag == cuisine.korean_label()
        })
    }

    /// English wire tag
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Korean => "korean",
            Self::Chinese => "chinese",
            Self::Japanese => "japanese",
            Self::Western => "western",
        }
    }

    /// Korean label
    #[must_use]
    pub const fn korean_label(&self) -> &'static str {
        match self {
            Self::Korean => "한식",
            Self::Chinese => "중식",
            Self::Japanese => "일식",
            Self::Western => "양식",
        }
    }

    /// English name used inside prompts
    #[must_use]
    pub const fn english_name(&self) -> &'static str {
        match self {
            Self::Korean => "Korean",
            Self::Chinese => "Chinese",
            Self::Japanese => "Japanese",
            Self::Western => "Western",
        }
    }

    /// All accepted wire values (English tags then Korean labels)
    #[must_use]
    pub fn accepted_values() -> Vec<&'static str> {
        Self::ALL
            .iter()
            .map(Self::tag)
            .chain(Self::ALL.iter().map(Self::korean_label))
            .collect()
    }
}

impl Display for Cuisine {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}/{}", self.english_name(), self.korean_label())
    }
}

/// Snapshot of a session's preferences
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Preferences {
    /// Response language
    pub language: Language,
    /// Ingredients the user must not be served, in the order they were added
    pub allergies: Vec<String>,
    /// Cuisine focus
    pub cuisine: Cuisine,
}
