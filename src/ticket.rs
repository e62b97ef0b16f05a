//! Tickets que emiten los dispensadores al terminar una bebida
use std::sync::Mutex;

use log::info;

use crate::errors::ShopError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub order_id: u64,
    pub dispenser_id: usize,
    pub text: String,
}

/// Lo que hace el dispensador con una bebida terminada.
/// Si falla, el dispensador lo reporta y sigue con el proximo pedido.
pub trait TicketPrinter: Send + Sync {
    fn print(&self, ticket: &Ticket) -> Result<(), ShopError>;
}

/// Imprime cada ticket en el log
#[derive(Debug, Default)]
pub struct LogPrinter;

impl TicketPrinter for LogPrinter {
    fn print(&self, ticket: &Ticket) -> Result<(), ShopError> {
        info!(
            "[DISPENSER {}] Order {} ready: {}",
            ticket.dispenser_id, ticket.order_id, ticket.text
        );
        Ok(())
    }
}

/// Guarda los tickets en memoria, en el orden en que fueron impresos
#[derive(Debug, Default)]
pub struct CollectingPrinter {
    tickets: Mutex<Vec<Ticket>>,
}

impl CollectingPrinter {
    pub fn new() -> CollectingPrinter {
        CollectingPrinter::default()
    }

    pub fn tickets(&self) -> Result<Vec<Ticket>, ShopError> {
        Ok(self.tickets.lock()?.clone())
    }

    pub fn len(&self) -> usize {
        self.tickets.lock().map(|tickets| tickets.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TicketPrinter for CollectingPrinter {
    fn print(&self, ticket: &Ticket) -> Result<(), ShopError> {
        self.tickets.lock()?.push(ticket.clone());
        Ok(())
    }
}
