//! Mock submission gateway.
//!
//! Stands in for the storefront backend: accepts a finished order request,
//! runs it through the order aggregate and hands back the confirmation the
//! email layer would render. Synchronous single-shot calls, no transport.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use kreator_core::{Aggregate, DomainResult, OrderId};

use crate::order::{Order, OrderCommand, OrderRequest, SubmitOrder};

/// What the customer gets back after a successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderConfirmation {
    pub order_id: OrderId,
    pub grand_total: u64,
    pub submitted_at: DateTime<Utc>,
}

/// Transport seam for order submission.
pub trait OrderGateway {
    /// Submit a finished order; resolves or rejects exactly once.
    fn submit(
        &mut self,
        request: OrderRequest,
        submitted_at: DateTime<Utc>,
    ) -> DomainResult<OrderConfirmation>;
}

/// In-process mock: keeps submitted orders in memory.
#[derive(Debug, Clone, Default)]
pub struct MockOrderGateway {
    orders: Vec<Order>,
}

impl MockOrderGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Orders accepted so far, oldest first.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }
}

impl OrderGateway for MockOrderGateway {
    fn submit(
        &mut self,
        request: OrderRequest,
        submitted_at: DateTime<Utc>,
    ) -> DomainResult<OrderConfirmation> {
        let mut order = Order::empty(OrderId::new());
        let events = order.handle(&OrderCommand::SubmitOrder(SubmitOrder {
            order_id: order.id_typed(),
            request,
            occurred_at: submitted_at,
        }))?;
        for event in &events {
            order.apply(event);
        }

        let confirmation = OrderConfirmation {
            order_id: order.id_typed(),
            grand_total: order.grand_total(),
            submitted_at,
        };
        tracing::info!(order_id = %confirmation.order_id, grand_total = confirmation.grand_total, "order submitted");
        self.orders.push(order);
        Ok(confirmation)
    }
}
