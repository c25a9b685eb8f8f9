//! ORDERS message assembly.

use crate::core::{LineItem, Order, OrderError, ValidationError, validate_order};

use super::cancel::{CancelSignal, NeverCancel};
use super::codes;
use super::factory::{DefaultSegmentFactory, SegmentFactory};
use super::segment::Segment;
use super::sink::OrderSink;
use super::syntax::SyntaxConfig;

/// Renders orders into ORDERS interchanges.
///
/// Holds an immutable [`SyntaxConfig`] and a [`SegmentFactory`]; every call to
/// [`generate`](Self::generate) keeps its counters local, so a single
/// generator can be shared across threads.
///
/// ```
/// use chrono::NaiveDate;
/// use edifact_orders::core::*;
/// use edifact_orders::edifact::{OrderGenerator, SyntaxConfig};
/// use rust_decimal_macros::dec;
///
/// let order = OrderBuilder::new(
///     "PO-7",
///     NaiveDate::from_ymd_opt(2024, 5, 2).unwrap().and_hms_opt(9, 0, 0).unwrap(),
/// )
/// .interchange("SENDER", "RECEIVER", "77")
/// .message_reference("1")
/// .buyer(AddressBuilder::new("Buyer").line("Dock 4").build())
/// .seller(AddressBuilder::new("Seller").line("Mill Lane").build())
/// .add_item(LineItemBuilder::new(1, "A-1", dec!(2), dec!(3.50)).build())
/// .total_lines(1)
/// .build()
/// .unwrap();
///
/// let text = OrderGenerator::new(SyntaxConfig::default()).generate(&order).unwrap();
/// assert!(text.starts_with("UNB+UNOA:2+SENDER+RECEIVER+240502+0900+77"));
/// assert!(text.ends_with("UNZ+1+77'\n"));
/// ```
#[derive(Debug, Clone)]
pub struct OrderGenerator<F = DefaultSegmentFactory> {
    syntax: SyntaxConfig,
    factory: F,
}

impl OrderGenerator<DefaultSegmentFactory> {
    /// Generator with the default segment shapes.
    pub fn new(syntax: SyntaxConfig) -> Self {
        Self {
            syntax,
            factory: DefaultSegmentFactory,
        }
    }
}

impl Default for OrderGenerator<DefaultSegmentFactory> {
    fn default() -> Self {
        Self::new(SyntaxConfig::default())
    }
}

impl<F: SegmentFactory> OrderGenerator<F> {
    /// Generator with an alternate segment factory.
    pub fn with_factory(syntax: SyntaxConfig, factory: F) -> Self {
        Self { syntax, factory }
    }

    pub fn syntax(&self) -> &SyntaxConfig {
        &self.syntax
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    /// Validate and render one order into a complete interchange.
    pub fn generate(&self, order: &Order) -> Result<String, OrderError> {
        self.generate_with_cancel(order, &NeverCancel)
    }

    /// Like [`generate`](Self::generate), polling `cancel` before assembly and
    /// once per line item. A cancelled run returns [`OrderError::Cancelled`]
    /// and no text.
    pub fn generate_with_cancel<C: CancelSignal + ?Sized>(
        &self,
        order: &Order,
        cancel: &C,
    ) -> Result<String, OrderError> {
        if cancel.is_cancelled() {
            tracing::warn!(order = %order.number, "order generation cancelled before start");
            return Err(OrderError::Cancelled);
        }

        validate_order(order)?;

        tracing::debug!(
            order = %order.number,
            items = order.items.len(),
            "assembling ORDERS interchange"
        );

        match self.assemble(order, cancel) {
            Ok((text, segment_count)) => {
                tracing::debug!(
                    order = %order.number,
                    segments = segment_count,
                    bytes = text.len(),
                    "ORDERS interchange assembled"
                );
                Ok(text)
            }
            Err(err) => {
                tracing::warn!(order = %order.number, error = %err, "ORDERS assembly aborted");
                Err(err)
            }
        }
    }

    /// Render the order and hand the text to `sink` under the order number.
    ///
    /// The sink is only called with a complete interchange.
    pub fn generate_and_store<S: OrderSink + ?Sized>(
        &self,
        order: &Order,
        sink: &S,
    ) -> Result<S::Location, OrderError> {
        let text = self.generate(order)?;
        if text.is_empty() {
            return Err(OrderError::Sink("refusing to store an empty interchange".into()));
        }
        let location = sink.store(&order.number, &text)?;
        tracing::debug!(order = %order.number, "ORDERS interchange stored");
        Ok(location)
    }

    /// Emit every segment in order. Returns the text and the UNT segment count.
    fn assemble<C: CancelSignal + ?Sized>(
        &self,
        order: &Order,
        cancel: &C,
    ) -> Result<(String, usize), OrderError> {
        let syntax = &self.syntax;
        let factory = &self.factory;
        let mut out = Emitter::new(syntax, order.items.len());

        let Some(order_date) = order.order_date else {
            return Err(ValidationError::new("order_date", "order date is required").into());
        };

        if syntax.service_string_advice() {
            out.advice();
        }

        out.emit("UNB", factory.interchange_header(order, syntax))?;
        out.open_message("UNH", factory.message_header(order, syntax))?;
        out.emit("BGM", factory.beginning_of_message(order, syntax))?;
        out.emit(
            "document date DTM",
            factory.date_time(codes::DOCUMENT_DATE, order_date.date(), syntax),
        )?;

        if let Some(delivery_date) = order.delivery_date {
            let qualifier = order
                .delivery_date_qualifier
                .as_deref()
                .filter(|q| !q.trim().is_empty())
                .unwrap_or(syntax.delivery_date_qualifier());
            out.emit(
                "delivery date DTM",
                factory.date_time(qualifier, delivery_date, syntax),
            )?;
        }

        if order.currency().is_some() {
            out.emit("CUX", factory.currency(order, syntax))?;
        }

        for (role, address) in order.parties() {
            out.emit(
                &format!("{} NAD", role.label()),
                factory.party(role, address, syntax),
            )?;
        }

        if order.delivery_terms.is_present() {
            out.emit("TOD", factory.delivery_terms(order, syntax))?;
        }
        if order.payment_terms.is_present() {
            out.emit("PAT", factory.payment_terms(order, syntax))?;
        }
        if order.transport_mode.is_present() {
            out.emit("TDT", factory.transport(order, syntax))?;
        }

        for item in &order.items {
            if cancel.is_cancelled() {
                return Err(OrderError::Cancelled);
            }
            self.emit_item(&mut out, item)?;
        }

        out.emit("UNS", factory.section_control(syntax))?;
        out.emit("CNT", factory.control_total(order, syntax))?;
        out.emit("total MOA", factory.total_amount(order, syntax))?;

        let segment_count = out.close_message();
        out.emit("UNT", factory.message_trailer(order, segment_count, syntax))?;
        let message_count = out.messages;
        out.emit("UNZ", factory.interchange_trailer(order, message_count, syntax))?;

        Ok((out.text, segment_count))
    }

    /// LIN, IMD, QTY, PRI, MOA and the optional line DTM, contiguously.
    fn emit_item(&self, out: &mut Emitter<'_>, item: &LineItem) -> Result<(), OrderError> {
        let syntax = &self.syntax;
        let factory = &self.factory;
        let line = item.line_number;

        out.emit_for_line("LIN", line, factory.line_item(item, syntax))?;
        out.emit_for_line("IMD", line, factory.item_description(item, syntax))?;
        out.emit_for_line("QTY", line, factory.quantity(item, syntax))?;
        out.emit_for_line("PRI", line, factory.price(item, syntax))?;
        out.emit_for_line("MOA", line, factory.line_amount(item, syntax))?;
        if let Some(date) = item.delivery_date {
            out.emit_for_line(
                "DTM",
                line,
                factory.date_time(codes::LINE_DELIVERY_DATE, date, syntax),
            )?;
        }
        Ok(())
    }
}

/// Generate an interchange with the default configuration and segment shapes.
pub fn generate_orders(order: &Order) -> Result<String, OrderError> {
    OrderGenerator::new(SyntaxConfig::default()).generate(order)
}

/// Output buffer plus the two running counters.
struct Emitter<'a> {
    syntax: &'a SyntaxConfig,
    text: String,
    /// Segments since UNH, UNH included.
    message_segments: usize,
    in_message: bool,
    /// Messages closed in this interchange.
    messages: usize,
}

impl<'a> Emitter<'a> {
    fn new(syntax: &'a SyntaxConfig, items: usize) -> Self {
        Self {
            syntax,
            text: String::with_capacity(512 + items * 160),
            message_segments: 0,
            in_message: false,
            messages: 0,
        }
    }

    fn advice(&mut self) {
        self.text.push_str(&self.syntax.una());
        self.text.push('\n');
    }

    fn emit(
        &mut self,
        context: &str,
        segment: Result<Segment, OrderError>,
    ) -> Result<(), OrderError> {
        self.write(segment).map_err(|e| e.in_segment(context))
    }

    fn emit_for_line(
        &mut self,
        tag: &str,
        line: u32,
        segment: Result<Segment, OrderError>,
    ) -> Result<(), OrderError> {
        self.write(segment)
            .map_err(|e| e.in_segment(format!("{tag} for line {line}")))
    }

    fn open_message(
        &mut self,
        context: &str,
        header: Result<Segment, OrderError>,
    ) -> Result<(), OrderError> {
        self.in_message = true;
        self.message_segments = 0;
        self.emit(context, header)
    }

    /// Stop counting and return the count for UNT.
    fn close_message(&mut self) -> usize {
        self.in_message = false;
        self.messages += 1;
        self.message_segments
    }

    fn write(&mut self, segment: Result<Segment, OrderError>) -> Result<(), OrderError> {
        let segment = segment?;
        let rendered = segment.render(self.syntax)?;
        tracing::trace!(tag = %segment.tag, "segment");
        self.text.push_str(&rendered);
        self.text.push('\n');
        if self.in_message {
            self.message_segments += 1;
        }
        Ok(())
    }
}
