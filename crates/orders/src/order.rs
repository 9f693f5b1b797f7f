use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use kreator_core::{Aggregate, AggregateRoot, DomainError, OrderId};
use kreator_pricing::PriceBreakdown;
use kreator_session::ConfigSnapshot;

/// Delivery option chosen in the order form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryMethod {
    Standard,
    Express,
    Pickup,
}

impl DeliveryMethod {
    /// Delivery surcharge in whole price units.
    pub fn surcharge(self) -> u64 {
        match self {
            DeliveryMethod::Standard => 15,
            DeliveryMethod::Express => 25,
            DeliveryMethod::Pickup => 0,
        }
    }
}

/// Payment option chosen in the order form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Card,
    Transfer,
    Cash,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: Address,
}

/// Everything the storefront hands over at submission time: the customer's
/// form data plus a snapshot of the configuration and its computed price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub customer: CustomerDetails,
    pub delivery: DeliveryMethod,
    pub payment: PaymentMethod,
    pub notes: String,
    pub terms_accepted: bool,
    pub configuration: ConfigSnapshot,
    pub pricing: PriceBreakdown,
}

/// Order status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Draft,
    Submitted,
    Paid,
    Failed,
}

/// Aggregate root: Order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    id: OrderId,
    status: OrderStatus,
    request: Option<OrderRequest>,
    grand_total: u64,
    version: u64,
    submitted: bool,
}

impl Order {
    /// Create an empty, not-yet-submitted aggregate instance.
    pub fn empty(id: OrderId) -> Self {
        Self {
            id,
            status: OrderStatus::Draft,
            request: None,
            grand_total: 0,
            version: 0,
            submitted: false,
        }
    }

    pub fn id_typed(&self) -> OrderId {
        self.id
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn request(&self) -> Option<&OrderRequest> {
        self.request.as_ref()
    }

    /// Configured price plus the delivery surcharge.
    pub fn grand_total(&self) -> u64 {
        self.grand_total
    }

    pub fn is_payable(&self) -> bool {
        self.status == OrderStatus::Submitted
    }
}

impl AggregateRoot for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

/// Command: SubmitOrder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitOrder {
    pub order_id: OrderId,
    pub request: OrderRequest,
    pub occurred_at: DateTime<Utc>,
}

/// Command: RecordPayment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordPayment {
    pub order_id: OrderId,
    pub occurred_at: DateTime<Utc>,
}

/// Command: MarkFailed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkFailed {
    pub order_id: OrderId,
    pub reason: String,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderCommand {
    SubmitOrder(SubmitOrder),
    RecordPayment(RecordPayment),
    MarkFailed(MarkFailed),
}

/// Event: OrderSubmitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSubmitted {
    pub order_id: OrderId,
    pub request: OrderRequest,
    pub grand_total: u64,
    pub occurred_at: DateTime<Utc>,
}

/// Event: PaymentReceived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentReceived {
    pub order_id: OrderId,
    pub occurred_at: DateTime<Utc>,
}

/// Event: OrderFailed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderFailed {
    pub order_id: OrderId,
    pub reason: String,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderEvent {
    OrderSubmitted(OrderSubmitted),
    PaymentReceived(PaymentReceived),
    OrderFailed(OrderFailed),
}

impl Aggregate for Order {
    type Command = OrderCommand;
    type Event = OrderEvent;
    type Error = DomainError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            OrderEvent::OrderSubmitted(e) => {
                self.id = e.order_id;
                self.status = OrderStatus::Submitted;
                self.request = Some(e.request.clone());
                self.grand_total = e.grand_total;
                self.submitted = true;
            }
            OrderEvent::PaymentReceived(_) => {
                self.status = OrderStatus::Paid;
            }
            OrderEvent::OrderFailed(_) => {
                self.status = OrderStatus::Failed;
            }
        }

        // Deterministic version tracking: +1 per applied event.
        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            OrderCommand::SubmitOrder(cmd) => self.handle_submit(cmd),
            OrderCommand::RecordPayment(cmd) => self.handle_record_payment(cmd),
            OrderCommand::MarkFailed(cmd) => self.handle_mark_failed(cmd),
        }
    }
}

impl Order {
    fn ensure_order_id(&self, order_id: OrderId) -> Result<(), DomainError> {
        if self.id != order_id {
            return Err(DomainError::invariant("order_id mismatch"));
        }
        Ok(())
    }

    fn handle_submit(&self, cmd: &SubmitOrder) -> Result<Vec<OrderEvent>, DomainError> {
        if self.submitted {
            return Err(DomainError::conflict("order already submitted"));
        }
        self.ensure_order_id(cmd.order_id)?;

        let request = &cmd.request;
        if !request.terms_accepted {
            return Err(DomainError::validation("terms must be accepted"));
        }
        if request.configuration.selected_product.is_none() {
            return Err(DomainError::validation("no product configured"));
        }
        if request.customer.name.trim().is_empty() {
            return Err(DomainError::validation("customer name cannot be empty"));
        }
        if request.customer.email.trim().is_empty() {
            return Err(DomainError::validation("customer email cannot be empty"));
        }

        let grand_total = request.pricing.total_price + request.delivery.surcharge();

        Ok(vec![OrderEvent::OrderSubmitted(OrderSubmitted {
            order_id: cmd.order_id,
            request: cmd.request.clone(),
            grand_total,
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_record_payment(&self, cmd: &RecordPayment) -> Result<Vec<OrderEvent>, DomainError> {
        if !self.submitted {
            return Err(DomainError::not_found());
        }
        self.ensure_order_id(cmd.order_id)?;

        if self.status != OrderStatus::Submitted {
            return Err(DomainError::conflict("order is not awaiting payment"));
        }

        Ok(vec![OrderEvent::PaymentReceived(PaymentReceived {
            order_id: cmd.order_id,
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_mark_failed(&self, cmd: &MarkFailed) -> Result<Vec<OrderEvent>, DomainError> {
        if !self.submitted {
            return Err(DomainError::not_found());
        }
        self.ensure_order_id(cmd.order_id)?;

        if self.status == OrderStatus::Paid {
            return Err(DomainError::invariant("paid orders cannot fail"));
        }

        Ok(vec![OrderEvent::OrderFailed(OrderFailed {
            order_id: cmd.order_id,
            reason: cmd.reason.clone(),
            occurred_at: cmd.occurred_at,
        })])
    }
}
