//! Orders Domain
//!
//! Checkout submissions. An order is written once and never read back or
//! mutated by this service; line items carry a snapshot of the product data
//! shown at checkout.

pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;
pub mod store;

pub use error::{OrderError, OrderResult};
pub use handlers::ApiDoc;
pub use models::{Address, Customer, ORDER_COLLECTION, Order, OrderCreated, OrderItem, OrderStatus};
pub use repository::OrderRepository;
pub use service::OrderService;
pub use store::StoreOrderRepository;
