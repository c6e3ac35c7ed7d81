use super::errors::EmailError;

/// Number of nano units in one whole unit.
pub const NANOS_PER_UNIT: i32 = 1_000_000_000;

/// Monetary amount split into whole units and nano sub-units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Money {
    units: i64,
    nanos: i32,
}

impl Money {
    /// Fails when `nanos` is negative or not below one whole unit.
    pub fn new(units: i64, nanos: i32) -> Result<Self, EmailError> {
        if !(0..NANOS_PER_UNIT).contains(&nanos) {
            return Err(EmailError::InvalidMoney(nanos));
        }
        Ok(Self { units, nanos })
    }

    pub fn units(&self) -> i64 {
        self.units
    }

    pub fn nanos(&self) -> i32 {
        self.nanos
    }

    /// Amount as `units + nanos / 1e9`, rounded to two decimals.
    pub fn to_display_string(&self) -> String {
        let amount = self.units as f64 + f64::from(self.nanos) / f64::from(NANOS_PER_UNIT);
        format!("{:.2}", amount)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Address {
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub product_id: String,
    pub quantity: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub item: CartItem,
    pub cost: Money,
}

/// A placed order as received from checkout.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderResult {
    pub order_id: String,
    pub shipping_tracking_id: String,
    pub shipping_cost: Money,
    pub shipping_address: Address,
    pub items: Vec<OrderItem>,
}

/// A rendered message ready for delivery.
#[derive(Debug, Clone, PartialEq)]
pub struct EmailEnvelope {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html_body: String,
}

impl EmailEnvelope {
    pub fn order_confirmation(from: &str, to: &str, order_id: &str, html_body: String) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            subject: format!("Order Confirmation - {}", order_id),
            html_body,
        }
    }
}
