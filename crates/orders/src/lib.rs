//! Order submission domain module.
//!
//! The (mock) order-submission collaborator: it receives a configuration
//! snapshot plus a computed price breakdown from the configurator and yields
//! an opaque order identifier. The order lifecycle itself is deterministic
//! domain logic; the gateway is the transport seam and here it only mocks.

pub mod gateway;
pub mod order;

pub use gateway::{MockOrderGateway, OrderConfirmation, OrderGateway};
pub use order::{
    Address, CustomerDetails, DeliveryMethod, MarkFailed, Order, OrderCommand, OrderEvent,
    OrderFailed, OrderRequest, OrderStatus, OrderSubmitted, PaymentMethod, PaymentReceived,
    RecordPayment, SubmitOrder,
};
