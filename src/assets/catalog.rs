use std::collections::HashMap;

use crate::assets::{AssetProvider, CatalogError};
use crate::config::catalog::{
    BACKGROUND_LOOP_SOUND, CORRECT_SOUND, INCORRECT_SOUND, PERSON_A_IMAGES, PERSON_A_NAME,
    PERSON_B_IMAGES, PERSON_B_NAME,
};
use crate::game::systems::cues::SoundEffect;
use crate::game::types::Category;

#[derive(Debug, Clone)]
struct CategoryAssets {
    name: String,
    images: Vec<String>,
}

/// In-memory catalog of image lists, button names and sound paths.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    person_a: CategoryAssets,
    person_b: CategoryAssets,
    sounds: HashMap<SoundEffect, String>,
}

impl StaticCatalog {
    pub fn new(
        person_a: (&str, Vec<String>),
        person_b: (&str, Vec<String>),
    ) -> Self {
        Self {
            person_a: CategoryAssets { name: person_a.0.to_string(), images: person_a.1 },
            person_b: CategoryAssets { name: person_b.0.to_string(), images: person_b.1 },
            sounds: HashMap::new(),
        }
    }

    pub fn with_sound(mut self, effect: SoundEffect, path: impl Into<String>) -> Self {
        self.sounds.insert(effect, path.into());
        self
    }

    fn assets(&self, category: Category) -> &CategoryAssets {
        match category {
            Category::PersonA => &self.person_a,
            Category::PersonB => &self.person_b,
        }
    }

    /// Reject catalogs with no images or with a path claimed by both people.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.person_a.images.is_empty() && self.person_b.images.is_empty() {
            return Err(CatalogError::Empty);
        }
        if let Some(shared) = self
            .person_a
            .images
            .iter()
            .find(|path| self.person_b.images.contains(path))
        {
            return Err(CatalogError::AmbiguousImage(shared.clone()));
        }
        Ok(())
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        let owned = |paths: &[&str]| paths.iter().map(|p| p.to_string()).collect::<Vec<_>>();
        StaticCatalog::new(
            (PERSON_A_NAME, owned(PERSON_A_IMAGES)),
            (PERSON_B_NAME, owned(PERSON_B_IMAGES)),
        )
        .with_sound(SoundEffect::BackgroundLoop, BACKGROUND_LOOP_SOUND)
        .with_sound(SoundEffect::Correct, CORRECT_SOUND)
        .with_sound(SoundEffect::Incorrect, INCORRECT_SOUND)
    }
}

impl AssetProvider for StaticCatalog {
    fn images(&self, category: Category) -> Vec<String> {
        self.assets(category).images.clone()
    }

    fn sound(&self, effect: SoundEffect) -> Option<String> {
        self.sounds.get(&effect).cloned()
    }

    fn display_name(&self, category: Category) -> String {
        self.assets(category).name.clone()
    }
}
