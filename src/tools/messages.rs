// ABOUTME: Localized user-facing messages returned by the recipe tools
// ABOUTME: Each failure category maps to one Korean and one English text block
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use crate::llm::{CompletionError, CompletionErrorKind};
use crate::recipes::GenerationError;
use crate::session::{Cuisine, Language, LookupMiss, Preferences};

/// Whether a missing-recipe message is for `expand_recipe` or `save_recipe`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupPurpose {
    /// Showing the expanded view
    Expand,
    /// Writing the export file
    Save,
}

/// Confirmation after `set_language`
#[must_use]
pub const fn language_set(language: Language) -> &'static str {
    match language {
        Language::Ko => "✅ 언어가 한국어로 설정되었습니다.",
        Language::En => "✅ Language has been set to English.",
    }
}

/// Confirmation after one allergy was submitted
#[must_use]
pub fn allergy_added(language: Language, allergy: &str, added: bool) -> String {
    match (language, added) {
        (Language::Ko, true) => format!("✅ 알레르기 항목 \"{allergy}\"이(가) 추가되었습니다."),
        (Language::Ko, false) => format!("ℹ️ \"{allergy}\"은(는) 이미 등록된 알레르기 항목입니다."),
        (Language::En, true) => format!("✅ Allergy \"{allergy}\" has been added."),
        (Language::En, false) => format!("ℹ️ \"{allergy}\" is already in your allergy list."),
    }
}

/// Confirmation after a bulk allergy submission, listing the whole set
#[must_use]
pub fn allergies_updated(language: Language, added: usize, allergies: &[String]) -> String {
    let list = allergies.join(", ");
    match language {
        Language::Ko => format!("✅ 알레르기 항목 {added}개가 추가되었습니다. 현재 목록: {list}"),
        Language::En => format!("✅ Added {added} allergies. Current list: {list}"),
    }
}

/// Confirmation after `clear_allergies`
#[must_use]
pub const fn allergies_cleared(language: Language) -> &'static str {
    match language {
        Language::Ko => "✅ 알레르기 목록이 초기화되었습니다.",
        Language::En => "✅ Your allergy list has been cleared.",
    }
}

/// Confirmation after `type_food`
#[must_use]
pub fn cuisine_set(language: Language, cuisine: Cuisine) -> String {
    match language {
        Language::Ko => format!("✅ 음식 종류가 {}(으)로 설정되었습니다.", cuisine.korean_label()),
        Language::En => format!("✅ Cuisine has been set to {}.", cuisine.english_name()),
    }
}

/// Rendering of the current preferences for `get_preferences`
#[must_use]
pub fn preferences_overview(preferences: &Preferences) -> String {
    let language = preferences.language;
    let none = match language {
        Language::Ko => "없음",
        Language::En => "none",
    };
    let allergies = if preferences.allergies.is_empty() {
        none.to_owned()
    } else {
        preferences.allergies.join(", ")
    };
    match language {
        Language::Ko => format!(
            "⚙️ 현재 설정\n- 언어: {}\n- 알레르기: {allergies}\n- 음식 종류: {}",
            language.code(),
            preferences.cuisine.korean_label()
        ),
        Language::En => format!(
            "⚙️ Current preferences\n- Language: {}\n- Allergies: {allergies}\n- Cuisine: {}",
            language.code(),
            preferences.cuisine.english_name()
        ),
    }
}

/// Heading of the JSON block returned after a generation
#[must_use]
pub fn recipes_json_heading(count: usize, json: &str) -> String {
    format!("Here are the {count} full recipes (in JSON format):\n\n{json}")
}

/// Message for a failed generation attempt
#[must_use]
pub fn generation_failed(language: Language, error: &GenerationError) -> String {
    match error {
        GenerationError::NoIngredients => match language {
            Language::Ko => "❌ 재료가 입력되지 않았습니다. 먼저 재료를 입력해주세요.".to_owned(),
            Language::En => {
                "❌ No ingredients have been provided. Please input ingredients first.".to_owned()
            }
        },
        GenerationError::Parse(_) => match language {
            Language::Ko => "❌ 생성된 응답이 JSON 형식이 아닙니다.".to_owned(),
            Language::En => "❌ The generated response is not in JSON format.".to_owned(),
        },
        GenerationError::Completion(inner) => completion_failed(language, inner),
    }
}

fn completion_failed(language: Language, error: &CompletionError) -> String {
    let provider = error.provider();
    match (error.kind(), language) {
        (CompletionErrorKind::NetworkFailure, Language::Ko) => {
            format!("❌ {provider} 요청에 실패했습니다. 잠시 후 다시 시도해주세요.")
        }
        (CompletionErrorKind::NetworkFailure, Language::En) => {
            format!("❌ {provider} request failed. Please try again later.")
        }
        (CompletionErrorKind::BackendError, Language::Ko) => {
            format!("❌ {provider} API 요청이 실패했습니다.")
        }
        (CompletionErrorKind::BackendError, Language::En) => {
            format!("❌ {provider} API request failed.")
        }
        (CompletionErrorKind::EmptyResponse, Language::Ko) => {
            format!("❌ {provider}에서 유효한 응답을 받지 못했습니다.")
        }
        (CompletionErrorKind::EmptyResponse, Language::En) => {
            format!("❌ No valid response from {provider}.")
        }
    }
}

/// Message for a cache miss on `expand_recipe` or `save_recipe`
#[must_use]
pub const fn lookup_failed(
    language: Language,
    miss: LookupMiss,
    purpose: LookupPurpose,
) -> &'static str {
    match (miss, purpose, language) {
        (LookupMiss::NoRecipes, LookupPurpose::Expand, Language::En) => {
            "❌ No recipe data available. Please input ingredients first."
        }
        (LookupMiss::NoRecipes, LookupPurpose::Save, Language::En) => {
            "❌ No recipe data to save. Please input ingredients first."
        }
        (LookupMiss::NoRecipes, LookupPurpose::Expand, Language::Ko) => {
            "❌ 레시피 데이터가 없습니다. 먼저 재료를 입력해주세요."
        }
        (LookupMiss::NoRecipes, LookupPurpose::Save, Language::Ko) => {
            "❌ 저장할 레시피 데이터가 없습니다. 먼저 재료를 입력해주세요."
        }
        (LookupMiss::InvalidIndex { .. }, _, Language::En) => "❌ Invalid recipe number.",
        (LookupMiss::InvalidIndex { .. }, _, Language::Ko) => "❌ 잘못된 레시피 번호입니다.",
    }
}

/// Confirmation after a successful export
#[must_use]
pub fn recipe_saved(language: Language, recipe_name: &str, path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let directory = path
        .parent()
        .map(|dir| dir.display().to_string())
        .unwrap_or_default();
    match language {
        Language::Ko => format!(
            "✅ \"{recipe_name}\" 레시피가 \"{directory}\" 폴더에 \"{file_name}\" 파일로 저장되었습니다."
        ),
        Language::En => format!(
            "✅ \"{recipe_name}\" has been saved to the \"{directory}\" folder as \"{file_name}\"."
        ),
    }
}

/// Message for a failed export
#[must_use]
pub const fn save_failed(language: Language) -> &'static str {
    match language {
        Language::Ko => "❌ 파일 저장에 실패했습니다.",
        Language::En => "❌ Failed to save file.",
    }
}
