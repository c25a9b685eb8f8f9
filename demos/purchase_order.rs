use chrono::NaiveDate;
use edifact_orders::core::*;
use edifact_orders::edifact::{OrderGenerator, SyntaxConfig};
use rust_decimal_macros::dec;

fn main() {
    // RUST_LOG=edifact_orders=debug shows assembly progress
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let ordered_at = NaiveDate::from_ymd_opt(2024, 1, 15)
        .unwrap()
        .and_hms_opt(10, 30, 0)
        .unwrap();

    let order = OrderBuilder::new("PO-2024-001", ordered_at)
        .interchange("SENDERID", "RECEIVERID", "12345")
        .message_reference("12345")
        .currency("USD")
        .buyer(
            AddressBuilder::new("Acme Corporation")
                .line("123 Main St")
                .line("Suite 100")
                .line("New York")
                .line("NY 10001")
                .id("BUYER001")
                .id_scheme("9")
                .build(),
        )
        .seller(
            AddressBuilder::new("Supplier Inc")
                .line("456 Supply Ave")
                .line("Industrial Park")
                .line("Chicago")
                .line("IL 60601")
                .id("SUP001")
                .id_scheme("9")
                .build(),
        )
        .add_item(
            LineItemBuilder::new(1, "ITEM001", dec!(10), dec!(25.50))
                .supplier_item_code("SUP-001")
                .unit("PCE")
                .description("Widget Type A")
                .tax_rate(dec!(10))
                .build(),
        )
        .add_item(
            LineItemBuilder::new(2, "ITEM002", dec!(5), dec!(99.99))
                .supplier_item_code("SUP-002")
                .unit("PCE")
                .description("Gadget Pro")
                .tax_rate(dec!(10))
                .build(),
        )
        .total_lines(2)
        .total_quantity(dec!(15))
        .build()
        .unwrap();

    let generator = OrderGenerator::new(SyntaxConfig::default());
    match generator.generate(&order) {
        Ok(interchange) => {
            println!("Generated EDIFACT ORDERS message:");
            println!("{interchange}");
        }
        Err(e) => {
            eprintln!("Error generating order: {e}");
            std::process::exit(1);
        }
    }
}
