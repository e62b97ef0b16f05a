//! Errores de la tienda
use thiserror::Error;

use crate::orders_queue::QueueState;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShopError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("operation not allowed while the queue is {0:?}")]
    InvalidState(QueueState),
    #[error("the orders queue is closed")]
    Closed,
    #[error("a lock was poisoned")]
    LockError,
    #[error("could not read file: {0}")]
    FileReaderError(String),
    #[error("could not print ticket: {0}")]
    PrintError(String),
    #[error("dispenser {0} panicked")]
    WorkerPanicked(usize),
}

impl<T> From<std::sync::PoisonError<T>> for ShopError {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        ShopError::LockError
    }
}
