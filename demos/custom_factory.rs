use chrono::NaiveDate;
use edifact_orders::core::*;
use edifact_orders::edifact::factory::nad;
use edifact_orders::edifact::{OrderGenerator, Segment, SegmentFactory, SyntaxConfig};
use rust_decimal_macros::dec;

/// Partner profile that requires a GLN on every party and sends blanket orders.
struct GlnOnly;

impl SegmentFactory for GlnOnly {
    fn party(
        &self,
        role: PartyRole,
        address: &Address,
        syntax: &SyntaxConfig,
    ) -> Result<Segment, OrderError> {
        match address.id.as_deref() {
            Some(id) if id.len() == 13 && id.bytes().all(|b| b.is_ascii_digit()) => {
                Ok(nad(role, address, syntax))
            }
            _ => Err(ValidationError::new(
                format!("{}.id", role.label()),
                "a 13-digit GLN is required by this trading partner",
            )
            .into()),
        }
    }

    fn beginning_of_message(
        &self,
        order: &Order,
        _syntax: &SyntaxConfig,
    ) -> Result<Segment, OrderError> {
        // Blanket order instead of a standard one.
        Ok(Segment::new("BGM", ["221", order.number.as_str(), "9"]))
    }
}

fn order(buyer: Address) -> Order {
    let ordered_at = NaiveDate::from_ymd_opt(2024, 3, 1)
        .unwrap()
        .and_hms_opt(7, 45, 0)
        .unwrap();

    OrderBuilder::new("BO-2024-17", ordered_at)
        .interchange("4012345000009", "4098765000007", "20240301")
        .message_reference("1")
        .currency("EUR")
        .buyer(buyer)
        .seller(
            AddressBuilder::new("Mühle Nord eG")
                .line("Hafenweg 3")
                .line("20457 Hamburg")
                .id("4098765000007")
                .build(),
        )
        .add_item(
            LineItemBuilder::new(1, "4000862141404", dec!(40), dec!(18.40))
                .unit("KGM")
                .description("Roggenmehl Typ 1150")
                .build(),
        )
        .total_lines(1)
        .build()
        .unwrap()
}

fn main() {
    let syntax = SyntaxConfig::builder()
        .decimal_mark(',')
        .service_string_advice(true)
        .build()
        .unwrap();
    let generator = OrderGenerator::with_factory(syntax, GlnOnly);

    // The buyer carries no GLN, so the partner profile refuses the order.
    let rejected = order(
        AddressBuilder::new("Bäckerei Kurz")
            .line("Lange Reihe 5")
            .build(),
    );
    match generator.generate(&rejected) {
        Ok(_) => println!("unexpectedly accepted"),
        Err(e) => println!("Rejected: {e}"),
    }

    let accepted = order(
        AddressBuilder::new("Bäckerei Kurz")
            .line("Lange Reihe 5")
            .line("22041 Hamburg")
            .id("4012345000009")
            .build(),
    );
    match generator.generate(&accepted) {
        Ok(interchange) => println!("{interchange}"),
        Err(e) => {
            eprintln!("Error generating order: {e}");
            std::process::exit(1);
        }
    }
}
