//! Cola de pedidos de la tienda y ciclo de vida de los dispensadores que la atienden
use std::{
    collections::VecDeque,
    sync::{Arc, Condvar, Mutex},
    thread::{self, JoinHandle},
    time::Duration,
};

use log::{debug, error, info, warn};

use crate::{
    catalog::IngredientCatalog,
    dispenser::Dispenser,
    drink::Drink,
    errors::ShopError,
    order::Order,
    statistics::{Statistics, StatisticsSnapshot},
    ticket::TicketPrinter,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueState {
    /// Nunca se lanzaron dispensadores
    Idle,
    Running,
    /// Se pidio detener, pero todavia queda algun dispensador terminando su pedido
    Stopping,
    /// Salio el ultimo dispensador. Se puede volver a lanzar.
    Stopped,
}

/// Pedidos pendientes junto con las banderas que miran los dispensadores.
/// Siempre se accede a traves del mutex de `OrderQueue`.
#[derive(Debug)]
pub(crate) struct OrdersQueue {
    orders: VecDeque<Order>,
    next_id: u64,
    pub(crate) state: QueueState,
    /// Pedido de detencion para la tanda actual de dispensadores
    pub(crate) cancelled: bool,
    /// No se aceptan mas pedidos. Los dispensadores terminan lo que quede y salen.
    pub(crate) closed: bool,
    pub(crate) active_dispensers: usize,
}

impl OrdersQueue {
    pub(crate) fn new() -> OrdersQueue {
        OrdersQueue {
            orders: VecDeque::new(),
            next_id: 0,
            state: QueueState::Idle,
            cancelled: false,
            closed: false,
            active_dispensers: 0,
        }
    }

    /// Devuelve la cantidad de pedidos en la cola, contando el que se acaba de agregar
    pub(crate) fn push(&mut self, drink: Drink) -> usize {
        let order = Order::new(self.next_id, drink);
        self.next_id += 1;
        self.orders.push_back(order);
        self.orders.len()
    }

    pub(crate) fn pop(&mut self) -> Option<Order> {
        self.orders.pop_front()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub(crate) fn len(&self) -> usize {
        self.orders.len()
    }

    /// Un dispensador espera solo si no hay pedidos y nadie le pidio salir
    pub(crate) fn should_wait(&self) -> bool {
        self.is_empty() && !self.cancelled && !self.closed
    }
}

/// Cola FIFO sin limite, compartida entre cualquier cantidad de productores
/// y los dispensadores lanzados con `start`.
#[derive(Debug)]
pub struct OrderQueue {
    orders: Arc<Mutex<OrdersQueue>>,
    orders_cond: Arc<Condvar>,
    statistics: Arc<Statistics>,
    dispensers: Mutex<Vec<(usize, JoinHandle<Result<(), ShopError>>)>>,
}

impl Default for OrderQueue {
    fn default() -> Self {
        OrderQueue::new()
    }
}

impl OrderQueue {
    pub fn new() -> OrderQueue {
        OrderQueue {
            orders: Arc::new(Mutex::new(OrdersQueue::new())),
            orders_cond: Arc::new(Condvar::new()),
            statistics: Arc::new(Statistics::new()),
            dispensers: Mutex::new(Vec::new()),
        }
    }

    /// Agrega la bebida al final de la cola sin esperar a nadie.
    /// Devuelve cuantos pedidos hay en la cola contando este.
    pub fn submit(&self, drink: Drink) -> Result<usize, ShopError> {
        let position = {
            let mut queue = self.orders.lock()?;
            if queue.closed {
                return Err(ShopError::Closed);
            }
            let position = queue.push(drink);
            self.statistics.order_submitted();
            position
        };
        self.orders_cond.notify_one();
        debug!("[SHOP] Added order, {} in queue", position);
        Ok(position)
    }

    /// Saca el primer pedido sin esperar. Los dispensadores no pasan por aca:
    /// sacan el pedido con el mismo guard con el que esperan en la variable condicional.
    pub fn try_dequeue(&self) -> Result<Option<Order>, ShopError> {
        Ok(self.orders.lock()?.pop())
    }

    /// Lanza `dispensers` hilos que atienden la cola.
    /// Falla con `InvalidState` si ya hay una tanda de dispensadores trabajando.
    pub fn start(
        &self,
        dispensers: usize,
        catalog: Arc<IngredientCatalog>,
        printer: Arc<dyn TicketPrinter>,
        idle_wait: Duration,
    ) -> Result<(), ShopError> {
        if dispensers == 0 {
            return Err(ShopError::InvalidArgument(
                "at least one dispenser is needed".to_owned(),
            ));
        }
        {
            let mut queue = self.orders.lock()?;
            if matches!(queue.state, QueueState::Running | QueueState::Stopping) {
                warn!("[SHOP] Start rejected, queue is {:?}", queue.state);
                return Err(ShopError::InvalidState(queue.state));
            }
            queue.state = QueueState::Running;
            queue.cancelled = false;
            queue.active_dispensers = dispensers;
        }

        let handles: Vec<(usize, JoinHandle<Result<(), ShopError>>)> = (0..dispensers)
            .map(|id| {
                let dispenser = Dispenser::new(
                    id,
                    self.orders.clone(),
                    self.orders_cond.clone(),
                    catalog.clone(),
                    printer.clone(),
                    self.statistics.clone(),
                    idle_wait,
                );
                (id, thread::spawn(move || dispenser.handle_orders()))
            })
            .collect();
        self.dispensers.lock()?.extend(handles);
        info!("[SHOP] Started {} dispensers", dispensers);
        Ok(())
    }

    /// Pide a los dispensadores que salgan. No espera a que terminen: para eso esta `join`.
    /// Los pedidos que sigan en la cola quedan ahi.
    pub fn stop(&self) {
        let mut queue = match self.orders.lock() {
            Ok(queue) => queue,
            Err(_) => {
                error!("Error setting dispensers to stop");
                return;
            }
        };
        if queue.state != QueueState::Running {
            debug!("[SHOP] Stop ignored, queue is {:?}", queue.state);
            return;
        }
        queue.state = QueueState::Stopping;
        queue.cancelled = true;
        self.orders_cond.notify_all();
        info!("[SHOP] Stop requested");
    }

    /// Cierra la cola para siempre. Los dispensadores que esten corriendo
    /// terminan todos los pedidos pendientes y despues salen.
    pub fn close(&self) {
        let mut queue = match self.orders.lock() {
            Ok(queue) => queue,
            Err(_) => {
                error!("Error setting orders queue to closed");
                return;
            }
        };
        if queue.closed {
            return;
        }
        queue.closed = true;
        self.orders_cond.notify_all();
        info!("[SHOP] No more orders accepted");
    }

    /// Espera a que salgan todos los dispensadores lanzados hasta ahora.
    /// Si nadie llamo a `stop` o `close` antes, se queda esperando.
    pub fn join(&self) -> Result<(), ShopError> {
        let dispensers = std::mem::take(&mut *self.dispensers.lock()?);
        let mut result = Ok(());
        for (id, dispenser) in dispensers {
            match dispenser.join() {
                Ok(Ok(())) => {}
                Ok(Err(err)) => {
                    error!("[DISPENSER {}] Finished with error {:?}", id, err);
                    result = result.and(Err(err));
                }
                Err(_) => {
                    error!("[DISPENSER {}] Panicked", id);
                    result = result.and(Err(ShopError::WorkerPanicked(id)));
                }
            }
        }
        info!("{}", self.statistics.snapshot());
        result
    }

    /// Saca de la cola todos los pedidos que nadie tomo
    pub fn drain(&self) -> Result<Vec<Order>, ShopError> {
        let mut queue = self.orders.lock()?;
        let mut pending = Vec::with_capacity(queue.len());
        while let Some(order) = queue.pop() {
            pending.push(order);
        }
        Ok(pending)
    }

    pub fn state(&self) -> Result<QueueState, ShopError> {
        Ok(self.orders.lock()?.state)
    }

    pub fn is_closed(&self) -> Result<bool, ShopError> {
        Ok(self.orders.lock()?.closed)
    }

    pub fn len(&self) -> Result<usize, ShopError> {
        Ok(self.orders.lock()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, ShopError> {
        Ok(self.orders.lock()?.is_empty())
    }

    pub fn statistics(&self) -> StatisticsSnapshot {
        self.statistics.snapshot()
    }
}
