//! La tienda: junta el catalogo de ingredientes, la cola de pedidos y los dispensadores
use std::{sync::Arc, time::Duration};

use log::info;

use crate::{
    catalog::IngredientCatalog,
    config::ShopConfig,
    constants::{IDLE_WAIT_IN_MS, N_DISPENSERS},
    drink::Drink,
    errors::ShopError,
    ingredient::IngredientKind,
    order::Order,
    orders_queue::{OrderQueue, QueueState},
    statistics::StatisticsSnapshot,
    ticket::{LogPrinter, TicketPrinter},
    vocabulary::LevelVocabulary,
};

/// Los vocabularios se configuran antes de `start`. Si se registra uno despues,
/// los dispensadores que ya estan corriendo siguen usando el catalogo anterior.
pub struct Shop {
    catalog: Arc<IngredientCatalog>,
    orders: OrderQueue,
    printer: Arc<dyn TicketPrinter>,
    dispensers: usize,
    idle_wait: Duration,
}

impl Default for Shop {
    fn default() -> Self {
        Shop::new()
    }
}

impl Shop {
    pub fn new() -> Shop {
        Shop {
            catalog: Arc::new(IngredientCatalog::new()),
            orders: OrderQueue::new(),
            printer: Arc::new(LogPrinter),
            dispensers: N_DISPENSERS,
            idle_wait: Duration::from_millis(IDLE_WAIT_IN_MS),
        }
    }

    pub fn from_config(config: &ShopConfig) -> Shop {
        Shop {
            catalog: Arc::new(config.catalog()),
            dispensers: config.workers,
            idle_wait: config.idle_wait(),
            ..Shop::new()
        }
    }

    pub fn with_printer(mut self, printer: Arc<dyn TicketPrinter>) -> Shop {
        self.printer = printer;
        self
    }

    pub fn with_dispensers(mut self, dispensers: usize) -> Shop {
        self.dispensers = dispensers;
        self
    }

    pub fn with_vocabulary(mut self, kind: IngredientKind, vocabulary: LevelVocabulary) -> Shop {
        self.register_vocabulary(kind, vocabulary);
        self
    }

    pub fn register_vocabulary(
        &mut self,
        kind: IngredientKind,
        vocabulary: LevelVocabulary,
    ) -> &mut Self {
        Arc::make_mut(&mut self.catalog).register(kind, vocabulary);
        self
    }

    pub fn catalog(&self) -> &IngredientCatalog {
        &self.catalog
    }

    /// Devuelve cuantos pedidos hay en la cola, contando este
    pub fn submit(&self, drink: Drink) -> Result<usize, ShopError> {
        self.orders.submit(drink)
    }

    /// Imprime la bebida en el momento, sin pasar por la cola
    pub fn print(&self, drink: &Drink) -> String {
        drink.render(&self.catalog)
    }

    /// Un segundo `start` mientras hay dispensadores trabajando falla con `InvalidState`
    pub fn start(&self) -> Result<(), ShopError> {
        info!("[SHOP] Opening with {} dispensers", self.dispensers);
        self.orders.start(
            self.dispensers,
            self.catalog.clone(),
            self.printer.clone(),
            self.idle_wait,
        )
    }

    pub fn stop(&self) {
        self.orders.stop();
    }

    pub fn close(&self) {
        self.orders.close();
    }

    pub fn join(&self) -> Result<(), ShopError> {
        self.orders.join()
    }

    pub fn drain(&self) -> Result<Vec<Order>, ShopError> {
        self.orders.drain()
    }

    pub fn state(&self) -> Result<QueueState, ShopError> {
        self.orders.state()
    }

    pub fn pending_orders(&self) -> Result<usize, ShopError> {
        self.orders.len()
    }

    pub fn statistics(&self) -> StatisticsSnapshot {
        self.orders.statistics()
    }
}
