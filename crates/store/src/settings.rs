//! Site appearance settings singleton.
//!
//! Unlike the collection readers, the settings reader merges the stored
//! document shallowly over the built-in defaults: a field absent from the
//! document keeps its default, so adding a new setting does not require a
//! storage wipe. A structurally corrupt document still errors.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::storage::{RecordStore, RecordStoreExt, StorageError, keys};

/// One navbar link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavLink {
    pub name: String,
    pub href: String,
}

/// Branding, colors and layout text for the whole site.
///
/// Colors are HSL triples without the `hsl()` wrapper, e.g. `"217 91% 55%"`,
/// ready to drop into a CSS custom property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    // Branding
    pub logo_url: String,
    pub site_name: String,

    // Colors
    pub primary_color: String,
    pub secondary_color: String,
    pub accent_color: String,

    // Navbar
    pub navbar_bg_color: String,
    pub navbar_text_color: String,
    pub navbar_links: Vec<NavLink>,

    // Footer
    pub footer_bg_color: String,
    pub footer_text_color: String,
    pub footer_about_text: String,
    pub footer_phone: String,
    pub footer_email: String,
    pub footer_instagram: String,

    // Top bar
    pub top_bar_text: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            logo_url: String::new(),
            site_name: "LipoImports".into(),
            primary_color: "217 91% 55%".into(),
            secondary_color: "203 67% 94%".into(),
            accent_color: "145 63% 42%".into(),
            navbar_bg_color: "217 91% 55%".into(),
            navbar_text_color: "0 0% 100%".into(),
            navbar_links: vec![
                NavLink {
                    name: "Canetas Emagrecedoras".into(),
                    href: "/loja?categoria=canetas-emagrecedoras".into(),
                },
                NavLink {
                    name: "Vitaminas".into(),
                    href: "/loja?categoria=vitaminas".into(),
                },
                NavLink {
                    name: "Suplementos".into(),
                    href: "/loja?categoria=suplementos".into(),
                },
                NavLink {
                    name: "Promoções".into(),
                    href: "/loja?promocoes=true".into(),
                },
            ],
            footer_bg_color: "217 91% 55%".into(),
            footer_text_color: "0 0% 100%".into(),
            footer_about_text: "A LipoImports oferece produtos importados de qualidade para \
                                auxiliar no emagrecimento, com preço justo e entrega rápida em \
                                todo o Brasil."
                .into(),
            footer_phone: "(83) 99339-6445".into(),
            footer_email: "contato@lipoimports.com.br".into(),
            footer_instagram: "https://instagram.com/lipoimports".into(),
            top_bar_text: "Importados para seu bem-estar!".into(),
        }
    }
}

/// Field-by-field patch for the settings singleton.
///
/// Doubles as the shape the stored document is read through: every field
/// optional, unknown fields ignored, so hydration is a shallow merge over
/// [`SiteSettings::default`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteSettingsPatch {
    pub logo_url: Option<String>,
    pub site_name: Option<String>,
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub accent_color: Option<String>,
    pub navbar_bg_color: Option<String>,
    pub navbar_text_color: Option<String>,
    pub navbar_links: Option<Vec<NavLink>>,
    pub footer_bg_color: Option<String>,
    pub footer_text_color: Option<String>,
    pub footer_about_text: Option<String>,
    pub footer_phone: Option<String>,
    pub footer_email: Option<String>,
    pub footer_instagram: Option<String>,
    pub top_bar_text: Option<String>,
}

impl SiteSettingsPatch {
    /// Merge the patch into `settings`.
    pub fn apply(self, settings: &mut SiteSettings) {
        if let Some(logo_url) = self.logo_url {
            settings.logo_url = logo_url;
        }
        if let Some(site_name) = self.site_name {
            settings.site_name = site_name;
        }
        if let Some(primary_color) = self.primary_color {
            settings.primary_color = primary_color;
        }
        if let Some(secondary_color) = self.secondary_color {
            settings.secondary_color = secondary_color;
        }
        if let Some(accent_color) = self.accent_color {
            settings.accent_color = accent_color;
        }
        if let Some(navbar_bg_color) = self.navbar_bg_color {
            settings.navbar_bg_color = navbar_bg_color;
        }
        if let Some(navbar_text_color) = self.navbar_text_color {
            settings.navbar_text_color = navbar_text_color;
        }
        if let Some(navbar_links) = self.navbar_links {
            settings.navbar_links = navbar_links;
        }
        if let Some(footer_bg_color) = self.footer_bg_color {
            settings.footer_bg_color = footer_bg_color;
        }
        if let Some(footer_text_color) = self.footer_text_color {
            settings.footer_text_color = footer_text_color;
        }
        if let Some(footer_about_text) = self.footer_about_text {
            settings.footer_about_text = footer_about_text;
        }
        if let Some(footer_phone) = self.footer_phone {
            settings.footer_phone = footer_phone;
        }
        if let Some(footer_email) = self.footer_email {
            settings.footer_email = footer_email;
        }
        if let Some(footer_instagram) = self.footer_instagram {
            settings.footer_instagram = footer_instagram;
        }
        if let Some(top_bar_text) = self.top_bar_text {
            settings.top_bar_text = top_bar_text;
        }
    }
}

/// Settings state over the record store.
pub struct SiteSettingsService {
    store: Arc<dyn RecordStore>,
    current: SiteSettings,
}

impl SiteSettingsService {
    /// Load settings, shallow-merging any stored document over the defaults.
    ///
    /// # Errors
    ///
    /// Returns a read error, or a corrupt-document error if the stored
    /// document is not a JSON object of the expected shape.
    pub fn load(store: Arc<dyn RecordStore>) -> Result<Self, StorageError> {
        let mut current = SiteSettings::default();
        if let Some(overlay) = store.get_json::<SiteSettingsPatch>(keys::SETTINGS)? {
            overlay.apply(&mut current);
        }
        Ok(Self { store, current })
    }

    /// The current settings.
    #[must_use]
    pub fn get(&self) -> &SiteSettings {
        &self.current
    }

    /// Merge `patch` into the settings and persist the full record.
    ///
    /// # Errors
    ///
    /// Returns a write error from the record store.
    pub fn update(&mut self, patch: SiteSettingsPatch) -> Result<&SiteSettings, StorageError> {
        patch.apply(&mut self.current);
        self.store.set_json(keys::SETTINGS, &self.current)?;
        Ok(&self.current)
    }

    /// Restore the defaults and drop the stored document.
    ///
    /// # Errors
    ///
    /// Returns a write error from the record store.
    pub fn reset(&mut self) -> Result<&SiteSettings, StorageError> {
        self.current = SiteSettings::default();
        self.store.remove(keys::SETTINGS)?;
        Ok(&self.current)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_load_defaults_when_key_absent() {
        let service = SiteSettingsService::load(Arc::new(MemoryStore::new())).unwrap();
        assert_eq!(service.get().site_name, "LipoImports");
        assert_eq!(service.get().navbar_links.len(), 4);
    }

    #[test]
    fn test_load_shallow_merges_partial_document() {
        let store = Arc::new(MemoryStore::new());
        // A document from an older schema: only two fields present.
        store
            .set(
                keys::SETTINGS,
                r#"{"siteName":"Minha Loja","topBarText":"Bem-vindo!"}"#,
            )
            .unwrap();
        let service = SiteSettingsService::load(store).unwrap();
        assert_eq!(service.get().site_name, "Minha Loja");
        assert_eq!(service.get().top_bar_text, "Bem-vindo!");
        // Absent fields keep their defaults.
        assert_eq!(service.get().primary_color, "217 91% 55%");
    }

    #[test]
    fn test_update_persists_full_record() {
        let store = Arc::new(MemoryStore::new());
        let mut service = SiteSettingsService::load(store.clone()).unwrap();
        service
            .update(SiteSettingsPatch {
                site_name: Some("Renamed".into()),
                ..SiteSettingsPatch::default()
            })
            .unwrap();

        let reloaded = SiteSettingsService::load(store).unwrap();
        assert_eq!(reloaded.get().site_name, "Renamed");
        assert_eq!(reloaded.get().footer_phone, "(83) 99339-6445");
    }

    #[test]
    fn test_reset_restores_defaults_and_removes_document() {
        let store = Arc::new(MemoryStore::new());
        let mut service = SiteSettingsService::load(store.clone()).unwrap();
        service
            .update(SiteSettingsPatch {
                site_name: Some("Renamed".into()),
                ..SiteSettingsPatch::default()
            })
            .unwrap();
        service.reset().unwrap();
        assert_eq!(service.get().site_name, "LipoImports");
        assert!(store.get(keys::SETTINGS).unwrap().is_none());
    }

    #[test]
    fn test_corrupt_document_errors() {
        let store = Arc::new(MemoryStore::new());
        store.set(keys::SETTINGS, "[1,2,3]").unwrap();
        assert!(SiteSettingsService::load(store).is_err());
    }
}
