use log::{debug, info};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::drink::Drink;
use crate::errors::ShopError;
use crate::ingredient::IngredientKind;
use crate::shop::Shop;
use crate::vocabulary::Level;

#[derive(Deserialize, Debug)]
struct JsonIngredient {
    kind: IngredientKind,
    level: Level,
}

#[derive(Deserialize, Debug)]
struct JsonOrder {
    cup: Option<Level>,
    #[serde(default)]
    ingredients: Vec<JsonIngredient>,
}

#[derive(Deserialize)]
struct OrdersConfiguration {
    orders: Vec<JsonOrder>,
}

fn get_drink_from_order(order: JsonOrder) -> Result<Drink, ShopError> {
    let mut drink = Drink::try_new(order.cup)?;
    for ingredient in order.ingredients {
        drink = drink.add_ingredient(ingredient.kind, ingredient.level);
    }
    Ok(drink)
}

pub fn read_orders<R: Read>(reader: R) -> Result<Vec<Drink>, ShopError> {
    let orders_config: OrdersConfiguration = serde_json::from_reader(reader)
        .map_err(|err| ShopError::FileReaderError(err.to_string()))?;
    orders_config
        .orders
        .into_iter()
        .map(get_drink_from_order)
        .collect()
}

pub fn read_orders_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Drink>, ShopError> {
    let file = File::open(path.as_ref()).map_err(|err| {
        ShopError::FileReaderError(format!("{}: {}", path.as_ref().display(), err))
    })?;
    read_orders(BufReader::new(file))
}

/// Lee todos los pedidos del archivo y los envia a la tienda en el mismo orden.
/// Si algun pedido es invalido no se envia ninguno.
pub fn read_and_submit_orders<P: AsRef<Path>>(shop: &Shop, path: P) -> Result<usize, ShopError> {
    let drinks = read_orders_from_file(path)?;
    let total = drinks.len();
    for drink in drinks {
        let position = shop.submit(drink)?;
        debug!("[READER] Added order, {} in queue", position);
    }
    info!("[READER] No more orders left");
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::IngredientCatalog;

    #[test]
    fn should_read_drinks_in_file_order() {
        let json = r#"{ "orders": [
            { "cup": "middle", "ingredients": [
                { "kind": "milk", "level": "high" },
                { "kind": "sugar", "level": "low" },
                { "kind": "pearl", "level": "high" } ] },
            { "cup": "high" }
        ] }"#;
        let drinks = read_orders(json.as_bytes()).unwrap();
        let catalog = IngredientCatalog::standard();

        assert_eq!(2, drinks.len());
        assert_eq!("中杯高奶低糖多珍珠", drinks[0].render(&catalog));
        assert_eq!("大杯", drinks[1].render(&catalog));
    }

    #[test]
    fn should_fail_when_an_order_has_no_cup() {
        let json = r#"{ "orders": [ { "ingredients": [ { "kind": "tea", "level": "low" } ] } ] }"#;
        let result = read_orders(json.as_bytes());
        assert_eq!(true, matches!(result, Err(ShopError::InvalidArgument(_))));
    }

    #[test]
    fn should_fail_with_malformed_json() {
        let result = read_orders("{ \"orders\": [".as_bytes());
        assert_eq!(true, matches!(result, Err(ShopError::FileReaderError(_))));
    }

    #[test]
    fn should_submit_every_order_from_a_file() {
        let path = std::env::temp_dir().join(format!("tea-shop-orders-{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"{ "orders": [ { "cup": "low" }, { "cup": "mid" }, { "cup": "high" } ] }"#,
        )
        .unwrap();
        let shop = Shop::new();

        let submitted = read_and_submit_orders(&shop, &path);
        std::fs::remove_file(&path).unwrap();

        assert_eq!(Ok(3), submitted);
        assert_eq!(Ok(3), shop.pending_orders());
    }
}
