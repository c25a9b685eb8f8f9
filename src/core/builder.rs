use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::{Decimal, RoundingStrategy};

use super::error::{OrderError, ValidationError};
use super::types::*;
use super::validation;

/// Builder for constructing valid orders.
///
/// ```
/// use edifact_orders::core::*;
/// use rust_decimal_macros::dec;
/// use chrono::NaiveDate;
///
/// let order = OrderBuilder::new(
///     "PO-2024-001",
///     NaiveDate::from_ymd_opt(2024, 1, 15).unwrap().and_hms_opt(10, 30, 0).unwrap(),
/// )
/// .interchange("SENDERID", "RECEIVERID", "12345")
/// .message_reference("1")
/// .buyer(AddressBuilder::new("Acme Corporation").line("123 Main St").build())
/// .seller(AddressBuilder::new("Supplier Inc").line("456 Supply Ave").build())
/// .add_item(LineItemBuilder::new(1, "ITEM001", dec!(10), dec!(25.50)).build())
/// .total_lines(1)
/// .build()
/// .unwrap();
///
/// assert_eq!(order.total_amount, dec!(255.00));
/// ```
pub struct OrderBuilder {
    number: String,
    order_date: NaiveDateTime,
    sender_id: String,
    receiver_id: String,
    control_reference: String,
    message_reference: String,
    currency_code: Option<String>,
    currency_qualifier: Option<String>,
    buyer: Address,
    seller: Address,
    delivery: Option<Address>,
    invoice: Option<Address>,
    delivery_date: Option<NaiveDate>,
    delivery_date_qualifier: Option<String>,
    delivery_terms: CodedText,
    payment_terms: CodedText,
    transport_mode: CodedText,
    items: Vec<LineItem>,
    total_amount: Option<Decimal>,
    total_lines: usize,
    total_quantity: Decimal,
    test_indicator: bool,
    header_overrides: HeaderOverrides,
}

impl OrderBuilder {
    pub fn new(number: impl Into<String>, order_date: NaiveDateTime) -> Self {
        Self {
            number: number.into(),
            order_date,
            sender_id: String::new(),
            receiver_id: String::new(),
            control_reference: String::new(),
            message_reference: String::new(),
            currency_code: None,
            currency_qualifier: None,
            buyer: Address::default(),
            seller: Address::default(),
            delivery: None,
            invoice: None,
            delivery_date: None,
            delivery_date_qualifier: None,
            delivery_terms: CodedText::default(),
            payment_terms: CodedText::default(),
            transport_mode: CodedText::default(),
            items: Vec::new(),
            total_amount: None,
            total_lines: 0,
            total_quantity: Decimal::ZERO,
            test_indicator: false,
            header_overrides: HeaderOverrides::default(),
        }
    }

    /// Set sender, receiver and control reference of the UNB/UNZ envelope.
    pub fn interchange(
        mut self,
        sender_id: impl Into<String>,
        receiver_id: impl Into<String>,
        control_reference: impl Into<String>,
    ) -> Self {
        self.sender_id = sender_id.into();
        self.receiver_id = receiver_id.into();
        self.control_reference = control_reference.into();
        self
    }

    pub fn message_reference(mut self, reference: impl Into<String>) -> Self {
        self.message_reference = reference.into();
        self
    }

    pub fn currency(mut self, code: impl Into<String>) -> Self {
        self.currency_code = Some(code.into());
        self
    }

    pub fn currency_qualifier(mut self, qualifier: impl Into<String>) -> Self {
        self.currency_qualifier = Some(qualifier.into());
        self
    }

    pub fn buyer(mut self, address: Address) -> Self {
        self.buyer = address;
        self
    }

    pub fn seller(mut self, address: Address) -> Self {
        self.seller = address;
        self
    }

    pub fn delivery_party(mut self, address: Address) -> Self {
        self.delivery = Some(address);
        self
    }

    pub fn invoice_party(mut self, address: Address) -> Self {
        self.invoice = Some(address);
        self
    }

    pub fn delivery_date(mut self, date: NaiveDate) -> Self {
        self.delivery_date = Some(date);
        self
    }

    pub fn delivery_date_qualifier(mut self, qualifier: impl Into<String>) -> Self {
        self.delivery_date_qualifier = Some(qualifier.into());
        self
    }

    pub fn delivery_terms(mut self, terms: CodedText) -> Self {
        self.delivery_terms = terms;
        self
    }

    pub fn payment_terms(mut self, terms: CodedText) -> Self {
        self.payment_terms = terms;
        self
    }

    pub fn transport_mode(mut self, mode: CodedText) -> Self {
        self.transport_mode = mode;
        self
    }

    pub fn add_item(mut self, item: LineItem) -> Self {
        self.items.push(item);
        self
    }

    /// Declared order total. When unset, the sum of the line amounts is used.
    pub fn total_amount(mut self, amount: Decimal) -> Self {
        self.total_amount = Some(amount);
        self
    }

    /// Declared line count. Never derived from the items; validation checks it.
    pub fn total_lines(mut self, lines: usize) -> Self {
        self.total_lines = lines;
        self
    }

    pub fn total_quantity(mut self, quantity: Decimal) -> Self {
        self.total_quantity = quantity;
        self
    }

    pub fn test_indicator(mut self, test: bool) -> Self {
        self.test_indicator = test;
        self
    }

    pub fn header_overrides(mut self, overrides: HeaderOverrides) -> Self {
        self.header_overrides = overrides;
        self
    }

    /// Build the order and run validation. Returns the first validation failure.
    ///
    /// A defaulted total that does not fit in a `Decimal` is reported on
    /// `total_amount` once the order itself is valid.
    pub fn build(self) -> Result<Order, OrderError> {
        let total_overflows = self.total_amount.is_none() && sum_amounts(&self.items).is_none();
        let order = self.build_unchecked();
        validation::validate_order(&order)?;
        if total_overflows {
            return Err(ValidationError::new(
                "total_amount",
                "sum of line amounts exceeds the decimal range",
            )
            .into());
        }
        Ok(order)
    }

    /// Build without validation, e.g. for tests or data imported from elsewhere.
    ///
    /// A defaulted total that overflows saturates at `Decimal::MAX`; set
    /// [`total_amount`](Self::total_amount) explicitly for such orders.
    pub fn build_unchecked(self) -> Order {
        let total_amount = self
            .total_amount
            .unwrap_or_else(|| sum_amounts(&self.items).unwrap_or(Decimal::MAX));

        Order {
            sender_id: self.sender_id,
            receiver_id: self.receiver_id,
            control_reference: self.control_reference,
            message_reference: self.message_reference,
            number: self.number,
            order_date: Some(self.order_date),
            currency_code: self.currency_code,
            currency_qualifier: self.currency_qualifier,
            buyer: self.buyer,
            seller: self.seller,
            delivery: self.delivery,
            invoice: self.invoice,
            delivery_date: self.delivery_date,
            delivery_date_qualifier: self.delivery_date_qualifier,
            delivery_terms: self.delivery_terms,
            payment_terms: self.payment_terms,
            transport_mode: self.transport_mode,
            items: self.items,
            total_amount,
            total_lines: self.total_lines,
            total_quantity: self.total_quantity,
            test_indicator: self.test_indicator,
            header_overrides: self.header_overrides,
        }
    }
}

/// Builder for Address.
pub struct AddressBuilder {
    name: String,
    lines: Vec<String>,
    id: Option<String>,
    id_scheme: Option<String>,
}

impl AddressBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lines: Vec::new(),
            id: None,
            id_scheme: None,
        }
    }

    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn id_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.id_scheme = Some(scheme.into());
        self
    }

    pub fn build(self) -> Address {
        Address {
            name: self.name,
            lines: self.lines,
            id: self.id,
            id_scheme: self.id_scheme,
        }
    }
}

/// Builder for LineItem.
pub struct LineItemBuilder {
    line_number: u32,
    buyer_item_code: String,
    supplier_item_code: Option<String>,
    quantity: Decimal,
    unit_price: Decimal,
    unit: Option<String>,
    description: String,
    tax_rate: Decimal,
    amount: Option<Decimal>,
    delivery_date: Option<NaiveDate>,
}

impl LineItemBuilder {
    pub fn new(
        line_number: u32,
        buyer_item_code: impl Into<String>,
        quantity: Decimal,
        unit_price: Decimal,
    ) -> Self {
        Self {
            line_number,
            buyer_item_code: buyer_item_code.into(),
            supplier_item_code: None,
            quantity,
            unit_price,
            unit: None,
            description: String::new(),
            tax_rate: Decimal::ZERO,
            amount: None,
            delivery_date: None,
        }
    }

    pub fn supplier_item_code(mut self, code: impl Into<String>) -> Self {
        self.supplier_item_code = Some(code.into());
        self
    }

    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }

    pub fn tax_rate(mut self, rate: Decimal) -> Self {
        self.tax_rate = rate;
        self
    }

    /// Explicit line amount. Defaults to quantity × unit price, rounded half-up to cents.
    pub fn amount(mut self, amount: Decimal) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn delivery_date(mut self, date: NaiveDate) -> Self {
        self.delivery_date = Some(date);
        self
    }

    /// Build the line. A defaulted amount whose product overflows saturates at
    /// `Decimal::MAX`; validation rejects such lines on `amount`.
    pub fn build(self) -> LineItem {
        let amount = self.amount.unwrap_or_else(|| {
            line_amount(self.quantity, self.unit_price).unwrap_or(Decimal::MAX)
        });

        LineItem {
            line_number: self.line_number,
            buyer_item_code: self.buyer_item_code,
            supplier_item_code: self.supplier_item_code,
            quantity: self.quantity,
            unit_price: self.unit_price,
            unit: self.unit,
            description: self.description,
            tax_rate: self.tax_rate,
            amount,
            delivery_date: self.delivery_date,
        }
    }
}

/// Quantity × unit price rounded half away from zero to cents, or `None` on overflow.
fn line_amount(quantity: Decimal, unit_price: Decimal) -> Option<Decimal> {
    quantity
        .checked_mul(unit_price)
        .map(|v| v.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
}

fn sum_amounts(items: &[LineItem]) -> Option<Decimal> {
    items
        .iter()
        .try_fold(Decimal::ZERO, |acc, item| acc.checked_add(item.amount))
}
