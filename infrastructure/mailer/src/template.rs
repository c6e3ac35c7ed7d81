use serde::Serialize;
use tera::{Context, Tera};

use business::domain::email::errors::EmailError;
use business::domain::email::model::OrderResult;
use business::domain::email::services::MailRenderer;

const TEMPLATE_NAME: &str = "order_confirmation.html";

const ORDER_CONFIRMATION_TEMPLATE: &str = r#"<html>
<body>
<h2>Order Confirmation</h2>
<p>Dear Customer,</p>
<p>Thank you for your order! Here are your order details:</p>

<h3>Order ID: {{ order.order_id }}</h3>
<h3>Shipping Information:</h3>
<p>
  <strong>Tracking ID:</strong> {{ order.shipping_tracking_id }}<br>
  <strong>Shipping Cost:</strong> ${{ order.shipping_cost }}<br>
  <strong>Address:</strong><br>
  {{ order.shipping_address.street_address }}<br>
  {{ order.shipping_address.city }}, {{ order.shipping_address.state }} {{ order.shipping_address.zip_code }}<br>
  {{ order.shipping_address.country }}
</p>

<h3>Items Ordered:</h3>
<ul>
{% for line in order.items %}
  <li>{{ line.product_id }} - Quantity: {{ line.quantity }} - ${{ line.cost }}</li>
{% endfor %}
</ul>

<p>Your order will be shipped to the address provided above.</p>
<p>Thank you for your business!</p>

<p>Best regards,<br>
The Online Boutique Team</p>
</body>
</html>
"#;

#[derive(Serialize)]
struct AddressView<'a> {
    street_address: &'a str,
    city: &'a str,
    state: &'a str,
    zip_code: &'a str,
    country: &'a str,
}

#[derive(Serialize)]
struct LineView<'a> {
    product_id: &'a str,
    quantity: i32,
    cost: String,
}

#[derive(Serialize)]
struct OrderView<'a> {
    order_id: &'a str,
    shipping_tracking_id: &'a str,
    shipping_cost: String,
    shipping_address: AddressView<'a>,
    items: Vec<LineView<'a>>,
}

impl<'a> From<&'a OrderResult> for OrderView<'a> {
    fn from(order: &'a OrderResult) -> Self {
        let address = &order.shipping_address;
        Self {
            order_id: &order.order_id,
            shipping_tracking_id: &order.shipping_tracking_id,
            shipping_cost: order.shipping_cost.to_display_string(),
            shipping_address: AddressView {
                street_address: &address.street_address,
                city: &address.city,
                state: &address.state,
                zip_code: &address.zip_code,
                country: &address.country,
            },
            items: order
                .items
                .iter()
                .map(|line| LineView {
                    product_id: &line.item.product_id,
                    quantity: line.item.quantity,
                    cost: line.cost.to_display_string(),
                })
                .collect(),
        }
    }
}

/// Renders the order confirmation HTML with Tera.
///
/// The template is compiled once; values are HTML-escaped.
pub struct TeraMailRenderer {
    tera: Tera,
}

impl TeraMailRenderer {
    pub fn new() -> Result<Self, EmailError> {
        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_NAME, ORDER_CONFIRMATION_TEMPLATE)
            .map_err(|e| EmailError::RenderFailed(e.to_string()))?;
        Ok(Self { tera })
    }
}

impl MailRenderer for TeraMailRenderer {
    fn render(&self, order: &OrderResult) -> Result<String, EmailError> {
        let mut context = Context::new();
        context.insert("order", &OrderView::from(order));
        self.tera
            .render(TEMPLATE_NAME, &context)
            .map_err(|e| EmailError::RenderFailed(e.to_string()))
    }
}
