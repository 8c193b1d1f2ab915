//! Virtual bookshelf: a shelf layout engine, a pointer interaction state
//! machine and a Bevy scene that animates books between shelves.

pub mod engine;
pub mod error;
pub mod interaction;
pub mod layout;
pub mod library;
pub mod rpc;
pub mod session;
