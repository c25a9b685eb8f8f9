use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Purchase order: the root aggregate rendered into one ORDERS interchange.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// UNB 0004: Interchange sender identification.
    pub sender_id: String,
    /// UNB 0010: Interchange recipient identification.
    pub receiver_id: String,
    /// UNB/UNZ 0020: Interchange control reference.
    pub control_reference: String,
    /// UNH/UNT 0062: Message reference number.
    pub message_reference: String,
    /// BGM 1004: Order number.
    pub number: String,
    /// Order date and time. Feeds the UNB preparation date/time and DTM+137.
    pub order_date: Option<NaiveDateTime>,
    /// ISO 4217 currency code; CUX is emitted only when set.
    #[serde(default)]
    pub currency_code: Option<String>,
    /// CUX 6343: Currency qualifier override.
    #[serde(default)]
    pub currency_qualifier: Option<String>,
    /// NAD+BY.
    pub buyer: Address,
    /// NAD+SE.
    pub seller: Address,
    /// NAD+DP: Delivery party.
    #[serde(default)]
    pub delivery: Option<Address>,
    /// NAD+IV: Invoicee.
    #[serde(default)]
    pub invoice: Option<Address>,
    /// Requested delivery date (DTM).
    #[serde(default)]
    pub delivery_date: Option<NaiveDate>,
    /// DTM 2005 qualifier override for the delivery date.
    #[serde(default)]
    pub delivery_date_qualifier: Option<String>,
    /// TOD: Terms of delivery.
    #[serde(default)]
    pub delivery_terms: CodedText,
    /// PAT: Payment terms.
    #[serde(default)]
    pub payment_terms: CodedText,
    /// TDT: Mode of transport.
    #[serde(default)]
    pub transport_mode: CodedText,
    /// Order lines, emitted in this order.
    pub items: Vec<LineItem>,
    /// MOA+128: Declared order total.
    pub total_amount: Decimal,
    /// CNT+2: Declared number of lines. Must equal `items.len()`.
    pub total_lines: usize,
    /// Declared total quantity. Reserved: neither validated nor emitted.
    #[serde(default)]
    pub total_quantity: Decimal,
    /// UNB 0035: Test indicator.
    #[serde(default)]
    pub test_indicator: bool,
    /// Per-order overrides of the configured header defaults.
    #[serde(default)]
    pub header_overrides: HeaderOverrides,
}

/// Name and address of one party (NAD).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Party name. A party with a blank name is not emitted.
    pub name: String,
    /// Free-text address lines (at most 35 characters each).
    pub lines: Vec<String>,
    /// External party identifier (e.g. GLN).
    #[serde(default)]
    pub id: Option<String>,
    /// Code list responsible agency for `id` (UNTDID 3055). Defaults to "9" (EAN).
    #[serde(default)]
    pub id_scheme: Option<String>,
}

/// One order line (LIN group).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// LIN 1082: Line item number.
    pub line_number: u32,
    /// Buyer's article number (LIN, type EN).
    pub buyer_item_code: String,
    /// Supplier's article number (LIN, type SA).
    #[serde(default)]
    pub supplier_item_code: Option<String>,
    /// QTY+21: Ordered quantity.
    pub quantity: Decimal,
    /// PRI+AAA: Net unit price.
    pub unit_price: Decimal,
    /// Measure unit qualifier (e.g. "PCE", "KGM"). Defaults to "PCE".
    #[serde(default)]
    pub unit: Option<String>,
    /// IMD: Free-form item description.
    #[serde(default)]
    pub description: String,
    /// Tax rate percentage. Carried for consumers; not emitted.
    #[serde(default)]
    pub tax_rate: Decimal,
    /// MOA+203: Line amount.
    pub amount: Decimal,
    /// DTM+64: Per-line delivery date.
    #[serde(default)]
    pub delivery_date: Option<NaiveDate>,
}

/// A term carried both as free text and as a code. The code wins when both are set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodedText {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}

impl CodedText {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            code: None,
        }
    }

    pub fn code(code: impl Into<String>) -> Self {
        Self {
            text: None,
            code: Some(code.into()),
        }
    }

    /// The value to emit: the code if non-blank, otherwise the text if non-blank.
    pub fn preferred(&self) -> Option<&str> {
        non_blank(self.code.as_deref()).or_else(|| non_blank(self.text.as_deref()))
    }

    pub fn is_present(&self) -> bool {
        self.preferred().is_some()
    }
}

/// Optional per-order replacements for the configured UNB/UNH defaults.
/// Blank values fall back to the configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderOverrides {
    #[serde(default)]
    pub syntax_identifier: Option<String>,
    #[serde(default)]
    pub syntax_version: Option<String>,
    #[serde(default)]
    pub message_version: Option<String>,
    #[serde(default)]
    pub message_release: Option<String>,
    #[serde(default)]
    pub responsible_agency: Option<String>,
    #[serde(default)]
    pub association_code: Option<String>,
}

/// UNTDID 3035 party function code qualifiers used in ORDERS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartyRole {
    /// BY: Buyer.
    Buyer,
    /// SE: Seller.
    Seller,
    /// DP: Delivery party.
    Delivery,
    /// IV: Invoicee.
    Invoice,
}

impl PartyRole {
    /// UNTDID 3035 code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Buyer => "BY",
            Self::Seller => "SE",
            Self::Delivery => "DP",
            Self::Invoice => "IV",
        }
    }

    /// Parse from UNTDID 3035 code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "BY" => Some(Self::Buyer),
            "SE" => Some(Self::Seller),
            "DP" => Some(Self::Delivery),
            "IV" => Some(Self::Invoice),
            _ => None,
        }
    }

    /// Lower-case label used in field paths and error context.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Buyer => "buyer",
            Self::Seller => "seller",
            Self::Delivery => "delivery",
            Self::Invoice => "invoice",
        }
    }
}

impl Order {
    /// Parties in emission order, paired with their role. Absent optional parties
    /// and parties with a blank name are skipped.
    pub fn parties(&self) -> impl Iterator<Item = (PartyRole, &Address)> {
        [
            (PartyRole::Buyer, Some(&self.buyer)),
            (PartyRole::Seller, Some(&self.seller)),
            (PartyRole::Delivery, self.delivery.as_ref()),
            (PartyRole::Invoice, self.invoice.as_ref()),
        ]
        .into_iter()
        .filter_map(|(role, address)| address.filter(|a| a.is_named()).map(|a| (role, a)))
    }

    /// Currency code, if set and non-blank.
    pub fn currency(&self) -> Option<&str> {
        non_blank(self.currency_code.as_deref())
    }
}

impl Address {
    pub fn is_named(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
