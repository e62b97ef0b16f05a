//! Representacion de un pedido ya enviado a la cola
use crate::drink::Drink;

/// Un pedido es una bebida que ya entro a la cola. El `id` lo asigna la cola al recibirla,
/// en orden creciente, y sirve para identificar a la bebida una vez que la toma un dispensador.
#[derive(Debug)]
pub struct Order {
    pub id: u64,
    pub drink: Drink,
}

impl Order {
    pub fn new(id: u64, drink: Drink) -> Order {
        Order { id, drink }
    }
}
