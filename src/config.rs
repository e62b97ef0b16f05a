//! Configuracion de la tienda leida de un archivo JSON
use std::{fs::File, io::BufReader, io::Read, path::Path, time::Duration};

use serde::Deserialize;

use crate::{
    catalog::IngredientCatalog,
    constants::{IDLE_WAIT_IN_MS, N_DISPENSERS},
    errors::ShopError,
    ingredient::IngredientKind,
    vocabulary::LevelVocabulary,
};

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct VocabularyBinding {
    pub kind: IngredientKind,
    pub labels: LevelVocabulary,
}

/// Cualquier campo que falte toma el valor de `constants`
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ShopConfig {
    pub workers: usize,
    pub idle_wait_ms: u64,
    pub vocabularies: Vec<VocabularyBinding>,
}

impl Default for ShopConfig {
    fn default() -> Self {
        ShopConfig {
            workers: N_DISPENSERS,
            idle_wait_ms: IDLE_WAIT_IN_MS,
            vocabularies: Vec::new(),
        }
    }
}

impl ShopConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<ShopConfig, ShopError> {
        let file = File::open(path.as_ref()).map_err(|err| {
            ShopError::FileReaderError(format!("{}: {}", path.as_ref().display(), err))
        })?;
        ShopConfig::from_reader(BufReader::new(file))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<ShopConfig, ShopError> {
        serde_json::from_reader(reader).map_err(|err| ShopError::FileReaderError(err.to_string()))
    }

    pub fn idle_wait(&self) -> Duration {
        Duration::from_millis(self.idle_wait_ms)
    }

    /// Registra los vocabularios en el orden del archivo, el ultimo de cada ingrediente gana
    pub fn catalog(&self) -> IngredientCatalog {
        let mut catalog = IngredientCatalog::new();
        for binding in &self.vocabularies {
            catalog.register(binding.kind, binding.labels.clone());
        }
        catalog
    }
}
