//! Segment construction.
//!
//! The free functions in this module build the default shape of each ORDERS
//! segment. [`SegmentFactory`] exposes one method per segment kind whose
//! default body delegates to them, so an alternate factory can replace a
//! single segment (say, a different NAD layout) and inherit the rest.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::core::{Address, LineItem, Order, OrderError, PartyRole};

use super::segment::Segment;
use super::syntax::SyntaxConfig;
use super::{MESSAGE_TYPE, codes, tags};

/// One method per segment kind. All methods have default implementations.
pub trait SegmentFactory {
    fn interchange_header(&self, order: &Order, syntax: &SyntaxConfig) -> Result<Segment, OrderError> {
        Ok(unb(order, syntax))
    }

    fn message_header(&self, order: &Order, syntax: &SyntaxConfig) -> Result<Segment, OrderError> {
        Ok(unh(order, syntax))
    }

    fn beginning_of_message(&self, order: &Order, _syntax: &SyntaxConfig) -> Result<Segment, OrderError> {
        Ok(bgm(order))
    }

    fn date_time(
        &self,
        qualifier: &str,
        date: NaiveDate,
        syntax: &SyntaxConfig,
    ) -> Result<Segment, OrderError> {
        Ok(dtm(qualifier, date, syntax))
    }

    fn currency(&self, order: &Order, syntax: &SyntaxConfig) -> Result<Segment, OrderError> {
        Ok(cux(order, syntax))
    }

    fn party(
        &self,
        role: PartyRole,
        address: &Address,
        syntax: &SyntaxConfig,
    ) -> Result<Segment, OrderError> {
        Ok(nad(role, address, syntax))
    }

    fn delivery_terms(&self, order: &Order, syntax: &SyntaxConfig) -> Result<Segment, OrderError> {
        Ok(tod(order, syntax))
    }

    fn payment_terms(&self, order: &Order, _syntax: &SyntaxConfig) -> Result<Segment, OrderError> {
        Ok(pat(order))
    }

    fn transport(&self, order: &Order, _syntax: &SyntaxConfig) -> Result<Segment, OrderError> {
        Ok(tdt(order))
    }

    fn line_item(&self, item: &LineItem, syntax: &SyntaxConfig) -> Result<Segment, OrderError> {
        Ok(lin(item, syntax))
    }

    fn item_description(&self, item: &LineItem, syntax: &SyntaxConfig) -> Result<Segment, OrderError> {
        Ok(imd(item, syntax))
    }

    fn quantity(&self, item: &LineItem, syntax: &SyntaxConfig) -> Result<Segment, OrderError> {
        Ok(qty(item, syntax))
    }

    fn price(&self, item: &LineItem, syntax: &SyntaxConfig) -> Result<Segment, OrderError> {
        Ok(pri(item, syntax))
    }

    fn line_amount(&self, item: &LineItem, syntax: &SyntaxConfig) -> Result<Segment, OrderError> {
        Ok(moa(codes::AMOUNT_LINE, item.amount, syntax))
    }

    fn section_control(&self, _syntax: &SyntaxConfig) -> Result<Segment, OrderError> {
        Ok(uns())
    }

    fn control_total(&self, order: &Order, syntax: &SyntaxConfig) -> Result<Segment, OrderError> {
        Ok(cnt(order, syntax))
    }

    fn total_amount(&self, order: &Order, syntax: &SyntaxConfig) -> Result<Segment, OrderError> {
        Ok(moa(codes::AMOUNT_TOTAL, order.total_amount, syntax))
    }

    fn message_trailer(
        &self,
        order: &Order,
        segment_count: usize,
        _syntax: &SyntaxConfig,
    ) -> Result<Segment, OrderError> {
        Ok(unt(order, segment_count))
    }

    fn interchange_trailer(
        &self,
        order: &Order,
        message_count: usize,
        _syntax: &SyntaxConfig,
    ) -> Result<Segment, OrderError> {
        Ok(unz(order, message_count))
    }
}

/// Builds every segment in its default shape.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSegmentFactory;

impl SegmentFactory for DefaultSegmentFactory {}

/// UNB: interchange header. Preparation date and time come from the order date.
pub fn unb(order: &Order, syntax: &SyntaxConfig) -> Segment {
    let overrides = &order.header_overrides;
    let syntax_id = or_default(overrides.syntax_identifier.as_deref(), syntax.syntax_identifier());
    let syntax_version = or_default(overrides.syntax_version.as_deref(), syntax.syntax_version());

    let (date, time) = order
        .order_date
        .map(|d| (d.format("%y%m%d").to_string(), d.format("%H%M").to_string()))
        .unwrap_or_default();

    let test_indicator = if order.test_indicator { "1" } else { "" };

    Segment::new(
        tags::UNB,
        [
            syntax.composite(&[syntax_id, syntax_version]),
            order.sender_id.clone(),
            order.receiver_id.clone(),
            date,
            time,
            order.control_reference.clone(),
            String::new(),
            String::new(),
            test_indicator.to_string(),
        ],
    )
}

/// UNH: message header. Version, release, agency and association code default independently.
pub fn unh(order: &Order, syntax: &SyntaxConfig) -> Segment {
    let overrides = &order.header_overrides;
    let identifier = syntax.composite(&[
        MESSAGE_TYPE,
        or_default(overrides.message_version.as_deref(), syntax.message_version()),
        or_default(overrides.message_release.as_deref(), syntax.message_release()),
        or_default(overrides.responsible_agency.as_deref(), syntax.responsible_agency()),
        or_default(overrides.association_code.as_deref(), syntax.association_code()),
    ]);
    Segment::new(tags::UNH, [order.message_reference.clone(), identifier])
}

/// BGM: beginning of message: order, original.
pub fn bgm(order: &Order) -> Segment {
    Segment::new(
        tags::BGM,
        [
            codes::DOCUMENT_ORDER,
            order.number.as_str(),
            codes::FUNCTION_ORIGINAL,
        ],
    )
}

/// DTM: date in CCYYMMDD form under the given qualifier.
pub fn dtm(qualifier: &str, date: NaiveDate, syntax: &SyntaxConfig) -> Segment {
    let formatted = date.format("%Y%m%d").to_string();
    Segment::new(
        tags::DTM,
        [syntax.composite(&[qualifier, formatted.as_str(), codes::DATE_FORMAT_CCYYMMDD])],
    )
}

/// CUX: order currency. The order's qualifier wins over the configured one.
pub fn cux(order: &Order, syntax: &SyntaxConfig) -> Segment {
    let qualifier = or_default(order.currency_qualifier.as_deref(), syntax.currency_qualifier());
    let currency = order.currency().unwrap_or_default();
    Segment::new(
        tags::CUX,
        [syntax.composite(&[qualifier, currency, codes::CURRENCY_USAGE_ORDER])],
    )
}

/// NAD: party with optional identifier and address lines joined as components.
pub fn nad(role: PartyRole, address: &Address, syntax: &SyntaxConfig) -> Segment {
    let identification = match non_blank(address.id.as_deref()) {
        Some(id) => {
            let scheme = or_default(address.id_scheme.as_deref(), codes::AGENCY_EAN);
            syntax.composite(&[id, "", scheme])
        }
        None => String::new(),
    };

    Segment::new(
        tags::NAD,
        [
            role.code().to_string(),
            identification,
            syntax.composite(&address.lines),
            String::new(),
            address.name.clone(),
        ],
    )
}

/// TOD: terms of delivery, coded value preferred over free text.
pub fn tod(order: &Order, syntax: &SyntaxConfig) -> Segment {
    let terms = order.delivery_terms.preferred().unwrap_or_default();
    Segment::new(
        tags::TOD,
        [
            codes::DELIVERY_TERMS_FUNCTION.to_string(),
            String::new(),
            syntax.composite(&["", "", terms]),
        ],
    )
}

/// PAT: payment terms, coded value preferred over free text.
pub fn pat(order: &Order) -> Segment {
    let terms = order.payment_terms.preferred().unwrap_or_default();
    Segment::new(tags::PAT, [codes::PAYMENT_TERMS_BASIC, "", terms])
}

/// TDT: main-carriage transport, coded mode preferred over free text.
pub fn tdt(order: &Order) -> Segment {
    let mode = order.transport_mode.preferred().unwrap_or_default();
    Segment::new(
        tags::TDT,
        [
            codes::TRANSPORT_MAIN_CARRIAGE,
            codes::TRANSPORT_CONVEYANCE,
            "",
            mode,
        ],
    )
}

/// LIN: line number with buyer (EN) and optional supplier (SA) article numbers.
pub fn lin(item: &LineItem, syntax: &SyntaxConfig) -> Segment {
    let supplier = match non_blank(item.supplier_item_code.as_deref()) {
        Some(code) => syntax.composite(&[code, codes::ITEM_TYPE_SUPPLIER]),
        None => String::new(),
    };

    Segment::new(
        tags::LIN,
        [
            item.line_number.to_string(),
            String::new(),
            syntax.composite(&[item.buyer_item_code.as_str(), codes::ITEM_TYPE_EAN]),
            String::new(),
            supplier,
        ],
    )
}

/// IMD: free-form item description.
pub fn imd(item: &LineItem, syntax: &SyntaxConfig) -> Segment {
    Segment::new(
        tags::IMD,
        [
            codes::DESCRIPTION_FREE_FORM.to_string(),
            String::new(),
            String::new(),
            syntax.composite(&["", "", "", item.description.as_str()]),
        ],
    )
}

/// QTY: ordered quantity with unit (PCE when absent).
pub fn qty(item: &LineItem, syntax: &SyntaxConfig) -> Segment {
    let unit = or_default(item.unit.as_deref(), codes::UNIT_PIECE);
    let quantity = format_decimal(item.quantity, syntax);
    Segment::new(
        tags::QTY,
        [syntax.composite(&[codes::QUANTITY_ORDERED, quantity.as_str(), unit])],
    )
}

/// PRI: net unit price.
pub fn pri(item: &LineItem, syntax: &SyntaxConfig) -> Segment {
    let price = format_decimal(item.unit_price, syntax);
    Segment::new(tags::PRI, [syntax.composite(&[codes::PRICE_NET, price.as_str()])])
}

/// MOA: monetary amount under the given type qualifier (203 line, 128 total).
pub fn moa(qualifier: &str, amount: Decimal, syntax: &SyntaxConfig) -> Segment {
    let amount = format_decimal(amount, syntax);
    Segment::new(tags::MOA, [syntax.composite(&[qualifier, amount.as_str()])])
}

/// UNS: section control, separating detail from summary.
pub fn uns() -> Segment {
    Segment::new(tags::UNS, [codes::SECTION_SUMMARY])
}

/// CNT: declared number of lines.
pub fn cnt(order: &Order, syntax: &SyntaxConfig) -> Segment {
    let lines = order.total_lines.to_string();
    Segment::new(
        tags::CNT,
        [syntax.composite(&[codes::CONTROL_LINE_COUNT, lines.as_str()])],
    )
}

/// UNT: message trailer.
pub fn unt(order: &Order, segment_count: usize) -> Segment {
    Segment::new(
        tags::UNT,
        [segment_count.to_string(), order.message_reference.clone()],
    )
}

/// UNZ: interchange trailer.
pub fn unz(order: &Order, message_count: usize) -> Segment {
    Segment::new(
        tags::UNZ,
        [message_count.to_string(), order.control_reference.clone()],
    )
}

/// Fixed two-place rendering (half away from zero) with the configured decimal mark.
pub fn format_decimal(value: Decimal, syntax: &SyntaxConfig) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let text = format!("{rounded:.2}");
    match syntax.decimal_mark() {
        '.' => text,
        mark => text.replace('.', &mark.to_string()),
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn or_default<'a>(value: Option<&'a str>, default: &'a str) -> &'a str {
    non_blank(value).unwrap_or(default)
}
