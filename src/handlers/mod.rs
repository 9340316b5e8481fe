pub mod catalog;
pub mod orders;

use crate::application::lifecycle::OrderLifecycle;
use crate::infrastructure::order_store::DieselOrderStore;

/// Concrete lifecycle service the HTTP layer is wired against.
pub type Lifecycle = OrderLifecycle<DieselOrderStore>;
