//! Appearance settings editor
//!
//! Single-document editor for the `settings/default` theming record.
//! Image payloads are uploaded to fixed `settings/<slot>` blob paths and
//! stored as resolved URLs; the document is rewritten in full on save.

use std::sync::Arc;

use shared::models::AppearanceSettings;

use crate::error::AdminResult;
use crate::store::{BlobStore, DocPath, DocumentStore};

/// Image payloads accompanying an appearance save
#[derive(Default)]
pub struct AppearanceImages {
    pub company_logo: Option<Vec<u8>>,
    pub welcome_image: Option<Vec<u8>>,
    pub background_image: Option<Vec<u8>>,
    pub placeholder_image: Option<Vec<u8>>,
    pub ui_logo: Option<Vec<u8>>,
}

/// Whole-document editor for site theming
pub struct AppearanceEditor {
    store: Arc<dyn DocumentStore>,
    blobs: Arc<dyn BlobStore>,
}

impl AppearanceEditor {
    pub fn new(store: Arc<dyn DocumentStore>, blobs: Arc<dyn BlobStore>) -> Self {
        Self { store, blobs }
    }

    fn doc() -> DocPath {
        DocPath::settings("default")
    }

    /// Read the settings; defaults fill an absent document or fields.
    pub async fn load(&self) -> AdminResult<AppearanceSettings> {
        match self.store.get(&Self::doc()).await? {
            Some(doc) => Ok(serde_json::from_value(doc)?),
            None => Ok(AppearanceSettings::default()),
        }
    }

    /// Persist the settings, uploading any provided art first.
    pub async fn save(
        &self,
        mut settings: AppearanceSettings,
        images: AppearanceImages,
    ) -> AdminResult<AppearanceSettings> {
        if let Some(bytes) = images.company_logo {
            settings.company_logo = Some(self.upload_art("companyLogo", bytes).await?);
        }
        if let Some(bytes) = images.welcome_image {
            settings.welcome_image = Some(self.upload_art("welcomeImage", bytes).await?);
        }
        if let Some(bytes) = images.background_image {
            settings.background_image = Some(self.upload_art("backgroundImage", bytes).await?);
        }
        if let Some(bytes) = images.placeholder_image {
            settings.placeholder_image = Some(self.upload_art("placeholderImage", bytes).await?);
        }
        if let Some(bytes) = images.ui_logo {
            settings.ui_logo = Some(self.upload_art("uiLogo", bytes).await?);
        }

        let doc = serde_json::to_value(&settings)?;
        self.store.set(&Self::doc(), doc, false).await?;
        Ok(settings)
    }

    /// Delete one art slot: clear the field and remove the blob,
    /// best effort.
    pub async fn remove_art(&self, slot: &str) -> AdminResult<AppearanceSettings> {
        let mut patch = serde_json::Map::new();
        patch.insert(slot.to_string(), serde_json::Value::Null);
        self.store
            .set(&Self::doc(), serde_json::Value::Object(patch), true)
            .await?;
        if let Err(error) = self.blobs.delete(&format!("settings/{slot}")).await {
            tracing::warn!(slot = %slot, error = %error, "Failed to delete appearance art");
        }
        self.load().await
    }

    async fn upload_art(&self, slot: &str, bytes: Vec<u8>) -> AdminResult<String> {
        let path = format!("settings/{slot}");
        self.blobs.upload(&path, bytes).await?;
        Ok(self.blobs.download_url(&path).await?)
    }
}
