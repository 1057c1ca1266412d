pub mod logger;
pub mod wire;

pub use logger::init_logger;
pub use wire::{ConsoleObserver, WireObserver};
