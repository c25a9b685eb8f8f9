use chrono::{NaiveDate, NaiveDateTime};
use edifact_orders::core::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn ordered_at() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 15)
        .unwrap()
        .and_hms_opt(8, 5, 0)
        .unwrap()
}

fn buyer() -> Address {
    AddressBuilder::new("Kunde AG")
        .line("Marienplatz 1")
        .line("80331 München")
        .id("4012345000009")
        .build()
}

fn seller() -> Address {
    AddressBuilder::new("ACME GmbH")
        .line("Friedrichstraße 123")
        .line("10115 Berlin")
        .build()
}

fn item(line: u32) -> LineItem {
    LineItemBuilder::new(line, format!("40123450000{line:02}"), dec!(3), dec!(19.99))
        .description(format!("Article {line}"))
        .build()
}

fn builder() -> OrderBuilder {
    OrderBuilder::new("PO-4711", ordered_at())
        .interchange("4012345000009", "4098765000007", "100001")
        .message_reference("1")
        .currency("EUR")
        .buyer(buyer())
        .seller(seller())
        .add_item(item(1))
        .add_item(item(2))
        .total_lines(2)
}

fn field_of(err: OrderError) -> String {
    match err {
        OrderError::Validation(v) => v.field,
        other => panic!("expected validation error, got {other:?}"),
    }
}

// --- Builder ---

#[test]
fn builder_produces_valid_order() {
    let order = builder().build().unwrap();
    assert_eq!(order.number, "PO-4711");
    assert_eq!(order.order_date, Some(ordered_at()));
    assert_eq!(order.currency(), Some("EUR"));
    assert_eq!(order.items.len(), 2);
    assert_eq!(order.total_lines, 2);
    assert!(!order.test_indicator);
}

#[test]
fn line_amount_defaults_to_quantity_times_price() {
    let item = LineItemBuilder::new(1, "A", dec!(3), dec!(19.99)).build();
    assert_eq!(item.amount, dec!(59.97));

    let item = LineItemBuilder::new(1, "A", dec!(0.5), dec!(0.05)).build();
    assert_eq!(item.amount, dec!(0.03));
}

#[test]
fn explicit_line_amount_is_kept() {
    let item = LineItemBuilder::new(1, "A", dec!(3), dec!(19.99))
        .amount(dec!(55))
        .build();
    assert_eq!(item.amount, dec!(55));
}

#[test]
fn total_amount_defaults_to_sum_of_lines() {
    let order = builder().build().unwrap();
    assert_eq!(order.total_amount, dec!(119.94));
}

#[test]
fn explicit_total_amount_is_not_recomputed() {
    let order = builder().total_amount(dec!(100)).build().unwrap();
    assert_eq!(order.total_amount, dec!(100));
}

#[test]
fn total_lines_is_never_derived() {
    let err = OrderBuilder::new("PO-1", ordered_at())
        .interchange("S", "R", "1")
        .message_reference("1")
        .buyer(buyer())
        .seller(seller())
        .add_item(item(1))
        .build()
        .unwrap_err();
    assert_eq!(field_of(err), "total_lines");
}

#[test]
fn overflowing_line_amount_is_rejected() {
    let item = LineItemBuilder::new(1, "A", Decimal::MAX, dec!(2)).build();
    assert_eq!(item.amount, Decimal::MAX);

    let err = builder()
        .add_item(LineItemBuilder::new(3, "A", Decimal::MAX, dec!(2)).build())
        .total_lines(3)
        .build()
        .unwrap_err();
    assert_eq!(field_of(err), "items[2].amount");
}

#[test]
fn overflowing_total_amount_is_rejected() {
    let huge = |line| LineItemBuilder::new(line, "A", dec!(1), Decimal::MAX).build();
    let order = || {
        OrderBuilder::new("PO-1", ordered_at())
            .interchange("S", "R", "1")
            .message_reference("1")
            .buyer(buyer())
            .seller(seller())
            .add_item(huge(1))
            .add_item(huge(2))
            .total_lines(2)
    };

    assert_eq!(field_of(order().build().unwrap_err()), "total_amount");
    assert_eq!(order().build_unchecked().total_amount, Decimal::MAX);

    let explicit = order().total_amount(dec!(1)).build().unwrap();
    assert_eq!(explicit.total_amount, dec!(1));
}

#[test]
fn build_unchecked_skips_validation() {
    let order = OrderBuilder::new("", ordered_at()).build_unchecked();
    assert!(order.number.is_empty());
    assert!(validate_order(&order).is_err());
}

#[test]
fn address_builder_collects_lines_in_order() {
    let address = AddressBuilder::new("Warehouse")
        .line("Gate 4")
        .line("Hafenstraße 9")
        .id("4000001000005")
        .id_scheme("92")
        .build();
    assert_eq!(address.lines, ["Gate 4", "Hafenstraße 9"]);
    assert_eq!(address.id.as_deref(), Some("4000001000005"));
    assert_eq!(address.id_scheme.as_deref(), Some("92"));
}

// --- Validation order ---

#[test]
fn first_failure_wins() {
    let mut order = builder().build().unwrap();
    order.sender_id.clear();
    order.number.clear();
    order.items.clear();
    assert_eq!(field_of(validate_order(&order).unwrap_err().into()), "sender_id");

    order.sender_id = "S".into();
    assert_eq!(field_of(validate_order(&order).unwrap_err().into()), "number");

    order.number = "PO".into();
    assert_eq!(field_of(validate_order(&order).unwrap_err().into()), "items");
}

#[test]
fn header_identifiers_are_required() {
    let cases: [(&str, fn(&mut Order)); 5] = [
        ("sender_id", |o| o.sender_id.clear()),
        ("receiver_id", |o| o.receiver_id.clear()),
        ("control_reference", |o| o.control_reference.clear()),
        ("message_reference", |o| o.message_reference = "  ".into()),
        ("number", |o| o.number.clear()),
    ];
    for (field, clear) in cases {
        let mut order = builder().build().unwrap();
        clear(&mut order);
        let err = validate_order(&order).unwrap_err();
        assert_eq!(err.field, field);
        assert!(err.message.contains("required"), "{err}");
    }
}

#[test]
fn identifiers_are_bounded_at_35_characters() {
    let mut order = builder().build().unwrap();
    order.receiver_id = "R".repeat(MAX_FIELD_LENGTH);
    assert!(validate_order(&order).is_ok());

    order.receiver_id.push('R');
    let err = validate_order(&order).unwrap_err();
    assert_eq!(err.field, "receiver_id");
    assert_eq!(err.to_string(), "receiver_id: interchange receiver ID exceeds 35 characters");
}

#[test]
fn length_counts_characters_not_bytes() {
    let mut order = builder().build().unwrap();
    order.number = "Ä".repeat(MAX_FIELD_LENGTH);
    assert!(order.number.len() > MAX_FIELD_LENGTH);
    assert!(validate_order(&order).is_ok());
}

#[test]
fn buyer_is_checked_before_seller() {
    let mut order = builder().build().unwrap();
    order.buyer.lines.clear();
    order.seller.name.clear();
    assert_eq!(validate_order(&order).unwrap_err().field, "buyer.lines");
}

#[test]
fn seller_address_line_too_long() {
    let mut order = builder().build().unwrap();
    order.seller.lines.push("x".repeat(36));
    let err = validate_order(&order).unwrap_err();
    assert_eq!(err.field, "seller.lines[2]");
}

#[test]
fn optional_parties_validated_when_named() {
    let mut order = builder().build().unwrap();
    order.delivery = Some(Address {
        name: "Dock".into(),
        ..Address::default()
    });
    assert_eq!(validate_order(&order).unwrap_err().field, "delivery.lines");

    order.delivery = Some(Address::default());
    order.invoice = Some(Address {
        name: "Accounts".into(),
        ..Address::default()
    });
    assert_eq!(validate_order(&order).unwrap_err().field, "invoice.lines");
}

#[test]
fn item_errors_carry_index() {
    let mut order = builder().build().unwrap();
    order.items[1].quantity = dec!(0);
    assert_eq!(validate_order(&order).unwrap_err().field, "items[1].quantity");

    order.items[1].quantity = dec!(1);
    order.items[0].buyer_item_code = "C".repeat(36);
    assert_eq!(validate_order(&order).unwrap_err().field, "items[0].buyer_item_code");
}

#[test]
fn free_zero_priced_lines_are_allowed() {
    let mut order = builder().build().unwrap();
    order.items[0].unit_price = dec!(0);
    order.items[0].amount = dec!(0);
    assert!(validate_order(&order).is_ok());

    order.items[0].unit_price = dec!(-0.01);
    assert_eq!(validate_order(&order).unwrap_err().field, "items[0].unit_price");
}

#[test]
fn line_number_zero_is_rejected() {
    let mut order = builder().build().unwrap();
    order.items[0].line_number = 0;
    assert_eq!(validate_order(&order).unwrap_err().field, "items[0].line_number");
}

#[test]
fn total_lines_mismatch_is_rejected() {
    let mut order = builder().build().unwrap();
    order.total_lines = 1;
    let err = validate_order(&order).unwrap_err();
    assert_eq!(
        err.to_string(),
        "total_lines: total lines 1 does not match number of items 2"
    );
}

// --- Types ---

#[test]
fn party_roles_round_trip_codes() {
    for role in [
        PartyRole::Buyer,
        PartyRole::Seller,
        PartyRole::Delivery,
        PartyRole::Invoice,
    ] {
        assert_eq!(PartyRole::from_code(role.code()), Some(role));
    }
    assert_eq!(PartyRole::from_code("SU"), None);
}

#[test]
fn parties_skip_absent_and_unnamed() {
    let mut order = builder().build().unwrap();
    order.invoice = Some(AddressBuilder::new("Accounts").line("PO Box 1").build());
    order.delivery = Some(Address::default());

    let roles: Vec<_> = order.parties().map(|(role, _)| role.code()).collect();
    assert_eq!(roles, ["BY", "SE", "IV"]);
}

#[test]
fn coded_text_prefers_code() {
    let terms = CodedText {
        text: Some("Free on board".into()),
        code: Some("FOB".into()),
    };
    assert_eq!(terms.preferred(), Some("FOB"));
    assert_eq!(CodedText::text("Net 30").preferred(), Some("Net 30"));

    let blank_code = CodedText {
        text: Some("Net 30".into()),
        code: Some(" ".into()),
    };
    assert_eq!(blank_code.preferred(), Some("Net 30"));
    assert!(!CodedText::default().is_present());
}

#[test]
fn order_serializes_decimals_as_strings() {
    let order = builder().build().unwrap();
    let json = serde_json::to_value(&order).unwrap();
    assert_eq!(json["total_amount"], "119.94");
    assert_eq!(json["items"][0]["unit_price"], "19.99");

    let back: Order = serde_json::from_value(json).unwrap();
    assert_eq!(back, order);
}
