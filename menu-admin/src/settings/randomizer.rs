//! Randomizer settings editor
//!
//! Whole-document editor for the `settings/random` aggregate. Legacy
//! single-randomizer documents are migrated at the read boundary; every
//! mutation rewrites the document in full.

use std::sync::Arc;

use shared::models::{RandomSettings, RandomizerConfig};
use uuid::Uuid;

use crate::error::{AdminError, AdminResult};
use crate::store::{DocPath, DocumentStore};
use crate::utils::validation::FieldErrors;

/// Whole-document editor for the randomizer configuration
pub struct RandomizerEditor {
    store: Arc<dyn DocumentStore>,
}

impl RandomizerEditor {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    fn doc() -> DocPath {
        DocPath::settings("random")
    }

    /// Read the settings, migrating the legacy document shape.
    pub async fn load(&self) -> AdminResult<RandomSettings> {
        match self.store.get(&Self::doc()).await? {
            Some(doc) => Ok(RandomSettings::from_document(doc)),
            None => Ok(RandomSettings::default()),
        }
    }

    /// Validate a randomizer draft before it is added.
    pub fn validate(config: &RandomizerConfig) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if config.slot_title.ru.trim().is_empty() {
            errors.insert("slotTitle", "Введите заголовок");
        }
        if config.category_ids.is_empty() {
            errors.insert("categoryIds", "Выберите категории");
        }
        errors
    }

    /// Append a new randomizer and rewrite the document.
    ///
    /// A draft without an identity gets a fresh one; an invalid draft is
    /// rejected before any store call.
    pub async fn add(&self, mut config: RandomizerConfig) -> AdminResult<RandomSettings> {
        let errors = Self::validate(&config);
        if !errors.is_empty() {
            return Err(AdminError::Validation(errors));
        }
        if config.id.is_empty() {
            config.id = Uuid::new_v4().to_string();
        }

        let mut settings = self.load().await?;
        settings.randomizers.push(config);
        self.write(&settings).await?;
        Ok(settings)
    }

    /// Flip a randomizer's active flag.
    pub async fn toggle_active(&self, id: &str) -> AdminResult<RandomSettings> {
        let mut settings = self.load().await?;
        match settings.randomizers.iter_mut().find(|r| r.id == id) {
            Some(randomizer) => randomizer.active = !randomizer.active,
            None => return Err(AdminError::Invalid(format!("unknown randomizer: {id}"))),
        }
        self.write(&settings).await?;
        Ok(settings)
    }

    /// Remove a randomizer and rewrite the document.
    pub async fn remove(&self, id: &str) -> AdminResult<RandomSettings> {
        let mut settings = self.load().await?;
        settings.randomizers.retain(|r| r.id != id);
        self.write(&settings).await?;
        Ok(settings)
    }

    /// Update the page heading texts.
    pub async fn set_page_text(
        &self,
        title: Option<String>,
        description: Option<String>,
    ) -> AdminResult<RandomSettings> {
        let mut settings = self.load().await?;
        settings.page_title = title;
        settings.page_description = description;
        self.write(&settings).await?;
        Ok(settings)
    }

    async fn write(&self, settings: &RandomSettings) -> AdminResult<()> {
        let doc = serde_json::to_value(settings)?;
        self.store.set(&Self::doc(), doc, false).await?;
        Ok(())
    }
}
