use crate::chat::ChatSession;
use crate::client::Generator;
use crate::error::{Result, SibylError};
use crate::fallback;
use crate::prompts::{self, ModelSet};
use crate::tarot::DrawnCard;
use crate::types::{HoroscopeResult, NatalAnalysis, NatalRequest};
use chrono::NaiveDate;
use std::sync::Arc;

/// Front door for every request kind. Failures are logged and replaced by
/// the kind's fallback; nothing here returns an error.
#[derive(Clone)]
pub struct Oracle {
    generator: Arc<dyn Generator>,
    models: ModelSet,
}

impl Oracle {
    pub fn new(generator: Arc<dyn Generator>) -> Self {
        Self::with_models(generator, ModelSet::default())
    }

    pub fn with_models(generator: Arc<dyn Generator>, models: ModelSet) -> Self {
        Self { generator, models }
    }

    pub fn models(&self) -> &ModelSet {
        &self.models
    }

    pub async fn daily_horoscope(&self, sign: &str, date: NaiveDate) -> HoroscopeResult {
        let request = prompts::horoscope(&self.models, sign, date);
        let result = self
            .generator
            .generate(request)
            .await
            .and_then(|text| serde_json::from_str(&text).map_err(SibylError::from));
        match result {
            Ok(horoscope) => horoscope,
            Err(e) => {
                log::error!("Horoscope for {} failed: {}", sign, e);
                fallback::horoscope()
            }
        }
    }

    pub async fn interpret_tarot(&self, question: &str, cards: &[DrawnCard]) -> String {
        let request = prompts::tarot(&self.models, question, cards);
        let model = request.model.clone();
        match non_empty(self.generator.generate(request).await, &model) {
            Ok(text) => text,
            Err(e) => {
                log::error!("Tarot interpretation failed: {}", e);
                fallback::TAROT_FALLBACK.to_string()
            }
        }
    }

    /// `None` means the caller should show [`fallback::NATAL_RETRY_MESSAGE`].
    pub async fn analyze_natal_chart(&self, birth: &NatalRequest) -> Option<NatalAnalysis> {
        let request = prompts::natal(&self.models, birth);
        let result = self
            .generator
            .generate(request)
            .await
            .and_then(|text| NatalAnalysis::from_json(&text).map_err(SibylError::from));
        match result {
            Ok(analysis) => {
                if analysis.key_houses.len() != 3 {
                    log::warn!(
                        "Natal analysis returned {} key houses",
                        analysis.key_houses.len()
                    );
                }
                log::info!(
                    "Natal analysis for {} with {} positions",
                    birth.name,
                    analysis.planetary_positions.len()
                );
                Some(analysis)
            }
            Err(e) => {
                log::error!("Natal analysis for {} failed: {}", birth.name, e);
                None
            }
        }
    }

    pub fn open_chat(&self) -> ChatSession {
        ChatSession::new(Arc::clone(&self.generator), self.models.flash.clone())
    }

    pub async fn generate_mantra(&self) -> String {
        let request = prompts::mantra(&self.models);
        let model = request.model.clone();
        match non_empty(self.generator.generate(request).await, &model) {
            Ok(text) => text,
            Err(e) => {
                log::debug!("Mantra generation failed: {}", e);
                fallback::MANTRA_FALLBACK.to_string()
            }
        }
    }
}

fn non_empty(result: Result<String>, model: &str) -> Result<String> {
    let text = result?;
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(SibylError::EmptyResponse {
            model: model.to_string(),
        });
    }
    Ok(trimmed.to_string())
}
