//! Catalogo de ingredientes: que vocabulario usa la tienda para cada tipo de ingrediente
use std::collections::HashMap;

use crate::{
    ingredient::IngredientKind,
    vocabulary::{LevelVocabulary, BIG_SMALL, EMPTY, HIGH_LOW, MORE_LESS},
};

static EMPTY_VOCABULARY: LevelVocabulary = EMPTY;

/// Se configura antes de abrir la tienda y despues solo se lee,
/// por eso no tiene sincronizacion propia.
#[derive(Debug, Clone, Default)]
pub struct IngredientCatalog {
    vocabularies: HashMap<IngredientKind, LevelVocabulary>,
}

impl IngredientCatalog {
    pub fn new() -> IngredientCatalog {
        IngredientCatalog::default()
    }

    /// Vasos en 大中小, leche/te/azucar en 高中低, perlas/pudding en 多中少
    pub fn standard() -> IngredientCatalog {
        let mut catalog = IngredientCatalog::new();
        catalog
            .register(IngredientKind::Cup, BIG_SMALL)
            .register(IngredientKind::Milk, HIGH_LOW)
            .register(IngredientKind::Tea, HIGH_LOW)
            .register(IngredientKind::Sugar, HIGH_LOW)
            .register(IngredientKind::Pearl, MORE_LESS)
            .register(IngredientKind::Pudding, MORE_LESS);
        catalog
    }

    /// Registra el vocabulario de un tipo de ingrediente. Si ya tenia uno, lo reemplaza.
    pub fn register(&mut self, kind: IngredientKind, vocabulary: LevelVocabulary) -> &mut Self {
        self.vocabularies.insert(kind, vocabulary);
        self
    }

    /// Nunca falla: un ingrediente sin configurar usa el vocabulario vacio.
    pub fn resolve(&self, kind: IngredientKind) -> &LevelVocabulary {
        self.vocabularies.get(&kind).unwrap_or(&EMPTY_VOCABULARY)
    }

    pub fn is_registered(&self, kind: IngredientKind) -> bool {
        self.vocabularies.contains_key(&kind)
    }

    pub fn len(&self) -> usize {
        self.vocabularies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vocabularies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::Level;

    #[test]
    fn should_create_an_empty_catalog() {
        let catalog = IngredientCatalog::new();
        assert_eq!(true, catalog.is_empty());
    }

    #[test]
    fn should_resolve_a_registered_vocabulary() {
        let catalog = IngredientCatalog::standard();
        assert_eq!(&BIG_SMALL, catalog.resolve(IngredientKind::Cup));
        assert_eq!(&MORE_LESS, catalog.resolve(IngredientKind::Pudding));
        assert_eq!(6, catalog.len());
    }

    #[test]
    fn should_resolve_to_the_empty_vocabulary_when_not_registered() {
        let catalog = IngredientCatalog::standard();
        assert_eq!(false, catalog.is_registered(IngredientKind::Mango));
        assert_eq!(&EMPTY, catalog.resolve(IngredientKind::Mango));
    }

    #[test]
    fn should_overwrite_a_vocabulary_registered_twice() {
        let mut catalog = IngredientCatalog::new();
        catalog
            .register(IngredientKind::Grape, HIGH_LOW)
            .register(IngredientKind::Grape, LevelVocabulary::new("超", "普", "微"));

        assert_eq!(1, catalog.len());
        assert_eq!("超", catalog.resolve(IngredientKind::Grape).label_for(Level::High));
    }
}
