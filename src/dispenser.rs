//! Dispenser de la tienda. Toma los pedidos de la cola, prepara la bebida e imprime el ticket.
use std::{
    panic::{self, AssertUnwindSafe},
    sync::{Arc, Condvar, Mutex, PoisonError},
    time::Duration,
};

use log::{debug, error, info};

use crate::{
    catalog::IngredientCatalog,
    errors::ShopError,
    order::Order,
    orders_queue::{OrdersQueue, QueueState},
    statistics::Statistics,
    ticket::{Ticket, TicketPrinter},
};

/// Representa a un dispenser de la tienda.
/// Tiene referencias a la cola de pedidos (junto con su variable condicional),
/// al catalogo con el que imprime las bebidas, a la impresora de tickets y a las estadisticas
pub(crate) struct Dispenser {
    id: usize,
    orders_queue: Arc<Mutex<OrdersQueue>>,
    orders_cond: Arc<Condvar>,
    catalog: Arc<IngredientCatalog>,
    printer: Arc<dyn TicketPrinter>,
    statistics: Arc<Statistics>,
    idle_wait: Duration,
}

impl Dispenser {
    pub(crate) fn new(
        id: usize,
        orders_queue: Arc<Mutex<OrdersQueue>>,
        orders_cond: Arc<Condvar>,
        catalog: Arc<IngredientCatalog>,
        printer: Arc<dyn TicketPrinter>,
        statistics: Arc<Statistics>,
        idle_wait: Duration,
    ) -> Dispenser {
        Dispenser {
            id,
            orders_queue,
            orders_cond,
            catalog,
            printer,
            statistics,
            idle_wait,
        }
    }

    /// Atiende pedidos hasta que se pida detener la tanda, o hasta que la cola
    /// este cerrada y vacia. Con la cola vacia duerme en la variable condicional;
    /// la espera esta acotada por `idle_wait` para volver a mirar las banderas.
    pub(crate) fn handle_orders(&self) -> Result<(), ShopError> {
        loop {
            let order = {
                let (mut orders, _) = self.orders_cond.wait_timeout_while(
                    self.orders_queue.lock()?,
                    self.idle_wait,
                    |queue| queue.should_wait(),
                )?;

                if orders.cancelled {
                    debug!("[DISPENSER {}] Stop requested", self.id);
                    return Ok(());
                }

                match orders.pop() {
                    Some(order) => order,
                    None if orders.closed => {
                        debug!("[DISPENSER {}] No more orders left", self.id);
                        return Ok(());
                    }
                    None => continue,
                }
            };

            debug!("[DISPENSER {}] Takes order {}", self.id, order.id);
            self.process_order(order);
        }
    }

    /// Un ticket que falla o una impresora que entra en panic solo pierden ese pedido
    fn process_order(&self, order: Order) {
        let order_id = order.id;
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let ticket = Ticket {
                order_id,
                dispenser_id: self.id,
                text: order.drink.render(&self.catalog),
            };
            self.printer.print(&ticket)
        }));
        match result {
            Ok(Ok(())) => self.statistics.order_served(),
            Ok(Err(err)) => {
                error!(
                    "[DISPENSER {}] Skipped order {}, ticket not printed: {}",
                    self.id, order_id, err
                );
                self.statistics.order_failed();
            }
            Err(panic_info) => {
                let message = if let Some(message) = panic_info.downcast_ref::<&str>() {
                    (*message).to_owned()
                } else if let Some(message) = panic_info.downcast_ref::<String>() {
                    message.clone()
                } else {
                    "unknown panic".to_owned()
                };
                error!(
                    "[DISPENSER {}] Skipped order {}, panicked while printing: {}",
                    self.id, order_id, message
                );
                self.statistics.order_failed();
            }
        }
    }
}

impl Drop for Dispenser {
    /// El ultimo dispensador en salir deja la cola en `Stopped`, aunque salga por un panic
    fn drop(&mut self) {
        let mut orders = self
            .orders_queue
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        orders.active_dispensers = orders.active_dispensers.saturating_sub(1);
        if orders.active_dispensers == 0 {
            orders.state = QueueState::Stopped;
            info!("[DISPENSER {}] Last dispenser left, queue stopped", self.id);
        }
    }
}
