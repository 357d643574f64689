//! Midas Controller
//!
//! The cooperative-cycle layer of the Midas market-making system. Once per
//! strategy tick the surrounding framework calls
//! `update_processed_data()`, then requests one executor config per spread
//! level. The controller owns the validated config and the memoized
//! amount distribution for its whole lifetime; everything it produces per
//! cycle is a fresh value object.
//!
//! Single-threaded by contract: the framework guarantees no concurrent
//! re-entry for the same controller instance, so no locking is needed.

pub mod clock;
pub mod controller;
pub mod error;

pub use clock::SystemClock;
pub use controller::MarketMakingController;
pub use error::{ControllerError, ControllerResult};
