//! Tienda de bebidas: los clientes arman bebidas (vaso + ingredientes, cada uno con su nivel),
//! la tienda las encola y uno o mas dispensadores las preparan e imprimen el ticket.
pub mod catalog;
pub mod config;
pub mod constants;
mod dispenser;
pub mod drink;
pub mod errors;
pub mod ingredient;
pub mod order;
pub mod orders_queue;
pub mod orders_reader;
pub mod shop;
pub mod statistics;
pub mod ticket;
pub mod vocabulary;

pub use catalog::IngredientCatalog;
pub use config::ShopConfig;
pub use drink::{Drink, DrinkItem};
pub use errors::ShopError;
pub use ingredient::IngredientKind;
pub use orders_queue::{OrderQueue, QueueState};
pub use shop::Shop;
pub use vocabulary::{Level, LevelVocabulary};
