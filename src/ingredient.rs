//! Tipos de ingredientes que puede llevar una bebida
use std::fmt;

use serde::Deserialize;

use crate::constants::{
    CUP_NAME, GRAPE_NAME, MANGO_NAME, MILK_NAME, PEARL_NAME, PUDDING_NAME, SUGAR_NAME, TEA_NAME,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IngredientKind {
    Cup,
    Tea,
    Milk,
    Sugar,
    Pearl,
    Pudding,
    Mango,
    Grape,
}

impl IngredientKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            IngredientKind::Cup => CUP_NAME,
            IngredientKind::Tea => TEA_NAME,
            IngredientKind::Milk => MILK_NAME,
            IngredientKind::Sugar => SUGAR_NAME,
            IngredientKind::Pearl => PEARL_NAME,
            IngredientKind::Pudding => PUDDING_NAME,
            IngredientKind::Mango => MANGO_NAME,
            IngredientKind::Grape => GRAPE_NAME,
        }
    }
}

impl fmt::Display for IngredientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_have_a_fixed_display_name() {
        assert_eq!("杯", IngredientKind::Cup.display_name());
        assert_eq!("珍珠", IngredientKind::Pearl.display_name());
        assert_eq!("葡萄", IngredientKind::Grape.to_string());
    }

    #[test]
    fn should_deserialize_from_lowercase_names() {
        let kind: IngredientKind = serde_json::from_str("\"pudding\"").unwrap();
        assert_eq!(IngredientKind::Pudding, kind);
        assert_eq!(true, serde_json::from_str::<IngredientKind>("\"coffee\"").is_err());
    }
}
