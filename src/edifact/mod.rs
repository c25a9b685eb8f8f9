//! EDIFACT ORDERS (D.96A) interchange generation.
//!
//! Renders a validated [`Order`](crate::core::Order) into one UNB/UNZ
//! interchange carrying exactly one ORDERS message.
//!
//! # Example
//!
//! ```no_run
//! use edifact_orders::core::*;
//! use edifact_orders::edifact::{OrderGenerator, SyntaxConfig};
//!
//! let order: Order = todo!(); // build via OrderBuilder
//! let generator = OrderGenerator::new(SyntaxConfig::default());
//! let interchange = generator.generate(&order).unwrap();
//! ```

mod assembler;
mod cancel;
pub mod factory;
mod segment;
mod sink;
mod syntax;

pub use assembler::{OrderGenerator, generate_orders};
pub use cancel::{CancelSignal, Deadline, NeverCancel};
pub use factory::{DefaultSegmentFactory, SegmentFactory};
pub use segment::{Segment, tokenize_segment};
pub use sink::OrderSink;
pub use syntax::{SyntaxConfig, SyntaxConfigBuilder};

/// Message type identifier carried in UNH.
pub const MESSAGE_TYPE: &str = "ORDERS";

/// Default maximum rendered segment length, terminator included.
pub const DEFAULT_MAX_SEGMENT_LENGTH: usize = 1000;

/// Segment tags emitted by the ORDERS assembler.
pub mod tags {
    pub const UNA: &str = "UNA";
    pub const UNB: &str = "UNB";
    pub const UNH: &str = "UNH";
    pub const BGM: &str = "BGM";
    pub const DTM: &str = "DTM";
    pub const CUX: &str = "CUX";
    pub const NAD: &str = "NAD";
    pub const TOD: &str = "TOD";
    pub const PAT: &str = "PAT";
    pub const TDT: &str = "TDT";
    pub const LIN: &str = "LIN";
    pub const IMD: &str = "IMD";
    pub const QTY: &str = "QTY";
    pub const PRI: &str = "PRI";
    pub const MOA: &str = "MOA";
    pub const UNS: &str = "UNS";
    pub const CNT: &str = "CNT";
    pub const UNT: &str = "UNT";
    pub const UNZ: &str = "UNZ";
}

/// Code values used by the default segment shapes.
pub mod codes {
    /// DTM 2005: Document/message date/time.
    pub const DOCUMENT_DATE: &str = "137";
    /// DTM 2005: Delivery date/time, requested.
    pub const DELIVERY_DATE: &str = "2";
    /// DTM 2005: Delivery date/time, promised for after (line level).
    pub const LINE_DELIVERY_DATE: &str = "64";
    /// DTM 2379: CCYYMMDD.
    pub const DATE_FORMAT_CCYYMMDD: &str = "102";

    /// BGM 1001: Order.
    pub const DOCUMENT_ORDER: &str = "220";
    /// BGM 1225: Original.
    pub const FUNCTION_ORIGINAL: &str = "9";

    /// UNTDID 3055: EAN (GS1).
    pub const AGENCY_EAN: &str = "9";

    /// CUX 6347: Reference currency.
    pub const CURRENCY_REFERENCE: &str = "2";
    /// CUX 6345: Order currency.
    pub const CURRENCY_USAGE_ORDER: &str = "9";

    /// TOD 4055: Price condition.
    pub const DELIVERY_TERMS_FUNCTION: &str = "3";
    /// PAT 4279: Basic payment terms.
    pub const PAYMENT_TERMS_BASIC: &str = "1";
    /// TDT 8051: Main-carriage transport.
    pub const TRANSPORT_MAIN_CARRIAGE: &str = "20";
    /// TDT 8028: Conveyance reference.
    pub const TRANSPORT_CONVEYANCE: &str = "1";

    /// LIN 7143: EAN article number.
    pub const ITEM_TYPE_EAN: &str = "EN";
    /// LIN 7143: Supplier's article number.
    pub const ITEM_TYPE_SUPPLIER: &str = "SA";
    /// IMD 7077: Free-form description.
    pub const DESCRIPTION_FREE_FORM: &str = "F";

    /// QTY 6063: Ordered quantity.
    pub const QUANTITY_ORDERED: &str = "21";
    /// QTY 6411: Piece.
    pub const UNIT_PIECE: &str = "PCE";
    /// PRI 5125: Calculation net.
    pub const PRICE_NET: &str = "AAA";
    /// MOA 5025: Line item amount.
    pub const AMOUNT_LINE: &str = "203";
    /// MOA 5025: Total amount.
    pub const AMOUNT_TOTAL: &str = "128";
    /// UNS 0081: Detail/summary separation.
    pub const SECTION_SUMMARY: &str = "S";
    /// CNT 6069: Number of line items in message.
    pub const CONTROL_LINE_COUNT: &str = "2";
}
