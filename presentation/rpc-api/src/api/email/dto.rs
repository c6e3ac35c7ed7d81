use poem_openapi::Object;

use business::domain::email::errors::EmailError;
use business::domain::email::model::{Address, CartItem, Money, OrderItem, OrderResult};

#[derive(Debug, Clone, Object)]
pub struct MoneyDto {
    /// Whole units of the amount
    pub units: i64,
    /// Nano units, 0 to 999999999
    pub nanos: i32,
}

impl TryFrom<MoneyDto> for Money {
    type Error = EmailError;

    fn try_from(dto: MoneyDto) -> Result<Self, Self::Error> {
        Money::new(dto.units, dto.nanos)
    }
}

#[derive(Debug, Clone, Object)]
pub struct AddressDto {
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

impl From<AddressDto> for Address {
    fn from(dto: AddressDto) -> Self {
        Self {
            street_address: dto.street_address,
            city: dto.city,
            state: dto.state,
            zip_code: dto.zip_code,
            country: dto.country,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartItemDto {
    pub product_id: String,
    pub quantity: i32,
}

#[derive(Debug, Clone, Object)]
pub struct OrderItemDto {
    pub item: CartItemDto,
    pub cost: MoneyDto,
}

impl TryFrom<OrderItemDto> for OrderItem {
    type Error = EmailError;

    fn try_from(dto: OrderItemDto) -> Result<Self, Self::Error> {
        Ok(Self {
            item: CartItem {
                product_id: dto.item.product_id,
                quantity: dto.item.quantity,
            },
            cost: dto.cost.try_into()?,
        })
    }
}

#[derive(Debug, Clone, Object)]
pub struct OrderResultDto {
    pub order_id: String,
    pub shipping_tracking_id: String,
    pub shipping_cost: MoneyDto,
    pub shipping_address: AddressDto,
    #[oai(default)]
    pub items: Vec<OrderItemDto>,
}

impl TryFrom<OrderResultDto> for OrderResult {
    type Error = EmailError;

    fn try_from(dto: OrderResultDto) -> Result<Self, Self::Error> {
        Ok(Self {
            order_id: dto.order_id,
            shipping_tracking_id: dto.shipping_tracking_id,
            shipping_cost: dto.shipping_cost.try_into()?,
            shipping_address: dto.shipping_address.into(),
            items: dto
                .items
                .into_iter()
                .map(OrderItem::try_from)
                .collect::<Result<Vec<_>, _>>()?,
        })
    }
}

#[derive(Debug, Clone, Object)]
pub struct SendOrderConfirmationRequest {
    /// Destination address
    pub email: String,
    pub order: OrderResultDto,
}

/// Successful reply of SendOrderConfirmation, serialized as `{}`.
#[derive(Debug, Clone, Object)]
pub struct SendOrderConfirmationReply {}
