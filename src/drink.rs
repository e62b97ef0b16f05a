//! Bebidas: un vaso obligatorio mas una lista ordenada de ingredientes, cada uno con su nivel
use crate::{
    catalog::IngredientCatalog, errors::ShopError, ingredient::IngredientKind, vocabulary::Level,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrinkItem {
    pub level: Level,
    pub kind: IngredientKind,
}

impl DrinkItem {
    pub fn new(level: Level, kind: IngredientKind) -> DrinkItem {
        DrinkItem { level, kind }
    }

    fn render_into(&self, catalog: &IngredientCatalog, ticket: &mut String) {
        ticket.push_str(catalog.resolve(self.kind).label_for(self.level));
        ticket.push_str(self.kind.display_name());
    }
}

/// Los ingredientes solo se agregan mientras se arma la bebida. Al enviarla a la tienda
/// se mueve a la cola, asi que nadie la puede seguir modificando.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drink {
    cup: DrinkItem,
    ingredients: Vec<DrinkItem>,
}

impl Drink {
    pub fn new(cup_level: Level) -> Drink {
        Drink {
            cup: DrinkItem::new(cup_level, IngredientKind::Cup),
            ingredients: Vec::new(),
        }
    }

    /// Para entradas donde el tamaño del vaso puede faltar (por ejemplo un pedido leido de un archivo)
    pub fn try_new(cup_level: Option<Level>) -> Result<Drink, ShopError> {
        cup_level.map(Drink::new).ok_or_else(|| {
            ShopError::InvalidArgument("a drink needs a cup level".to_owned())
        })
    }

    pub fn add_ingredient(mut self, kind: IngredientKind, level: Level) -> Drink {
        self.ingredients.push(DrinkItem::new(level, kind));
        self
    }

    pub fn cup(&self) -> &DrinkItem {
        &self.cup
    }

    pub fn ingredients(&self) -> &[DrinkItem] {
        &self.ingredients
    }

    /// Vaso primero y despues los ingredientes en el orden en que se agregaron, sin separadores.
    pub fn render(&self, catalog: &IngredientCatalog) -> String {
        let mut ticket = String::new();
        self.cup.render_into(catalog, &mut ticket);
        for item in &self.ingredients {
            item.render_into(catalog, &mut ticket);
        }
        ticket
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::MORE_LESS;

    #[test]
    fn should_render_the_cup_and_the_ingredients_in_order() {
        let drink = Drink::new(Level::Mid)
            .add_ingredient(IngredientKind::Milk, Level::High)
            .add_ingredient(IngredientKind::Sugar, Level::Low)
            .add_ingredient(IngredientKind::Pearl, Level::High);

        assert_eq!("中杯高奶低糖多珍珠", drink.render(&IngredientCatalog::standard()));
    }

    #[test]
    fn should_render_a_not_registered_ingredient_without_level() {
        let drink = Drink::new(Level::High)
            .add_ingredient(IngredientKind::Tea, Level::High)
            .add_ingredient(IngredientKind::Mango, Level::High);

        assert_eq!("大杯高茶芒果", drink.render(&IngredientCatalog::standard()));
    }

    #[test]
    fn should_render_with_an_empty_catalog() {
        let drink = Drink::new(Level::Low).add_ingredient(IngredientKind::Grape, Level::Mid);
        assert_eq!("杯葡萄", drink.render(&IngredientCatalog::new()));
    }

    #[test]
    fn should_render_the_same_ticket_twice() {
        let mut catalog = IngredientCatalog::standard();
        catalog.register(IngredientKind::Mango, MORE_LESS);
        let drink = Drink::new(Level::High)
            .add_ingredient(IngredientKind::Tea, Level::High)
            .add_ingredient(IngredientKind::Sugar, Level::Mid)
            .add_ingredient(IngredientKind::Mango, Level::High)
            .add_ingredient(IngredientKind::Pudding, Level::Low);

        let first = drink.render(&catalog);
        assert_eq!("大杯高茶中糖多芒果少布丁", first);
        assert_eq!(first, drink.render(&catalog));
    }

    #[test]
    fn should_fail_to_create_a_drink_without_cup_level() {
        let result = Drink::try_new(None);
        assert_eq!(true, matches!(result, Err(ShopError::InvalidArgument(_))));
    }

    #[test]
    fn should_create_a_drink_with_cup_level() {
        let drink = Drink::try_new(Some(Level::Low)).unwrap();
        assert_eq!(DrinkItem::new(Level::Low, IngredientKind::Cup), *drink.cup());
        assert_eq!(true, drink.ingredients().is_empty());
    }
}
