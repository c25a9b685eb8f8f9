use super::error::ValidationError;
use super::types::*;

/// Maximum length of identifiers, order numbers, address lines and item codes
/// accepted by most EDIFACT receivers (an..35).
pub const MAX_FIELD_LENGTH: usize = 35;

/// Upper bound on order lines (LIN 1082 is n..6).
pub const MAX_ITEMS: usize = 999_999;

/// Validate an order before assembly.
///
/// Checks run in a fixed order and the first failure is returned; there is no
/// error aggregation.
pub fn validate_order(order: &Order) -> Result<(), ValidationError> {
    required_bounded(&order.sender_id, "sender_id", "interchange sender ID")?;
    required_bounded(&order.receiver_id, "receiver_id", "interchange receiver ID")?;
    required(
        &order.control_reference,
        "control_reference",
        "interchange control reference",
    )?;
    required(
        &order.message_reference,
        "message_reference",
        "message reference number",
    )?;
    required_bounded(&order.number, "number", "order number")?;

    if order.order_date.is_none() {
        return Err(ValidationError::new("order_date", "order date is required"));
    }

    validate_address(&order.buyer).map_err(|e| e.nested(PartyRole::Buyer.label()))?;
    validate_address(&order.seller).map_err(|e| e.nested(PartyRole::Seller.label()))?;

    for (role, address) in [
        (PartyRole::Delivery, order.delivery.as_ref()),
        (PartyRole::Invoice, order.invoice.as_ref()),
    ] {
        if let Some(address) = address.filter(|a| a.is_named()) {
            validate_address(address).map_err(|e| e.nested(role.label()))?;
        }
    }

    if order.items.is_empty() {
        return Err(ValidationError::new(
            "items",
            "at least one item is required",
        ));
    }
    if order.items.len() > MAX_ITEMS {
        return Err(ValidationError::new(
            "items",
            format!("too many items ({}, limit {MAX_ITEMS})", order.items.len()),
        ));
    }

    for (i, item) in order.items.iter().enumerate() {
        validate_item(item).map_err(|e| e.nested(&format!("items[{i}]")))?;
    }

    if order.total_lines != order.items.len() {
        return Err(ValidationError::new(
            "total_lines",
            format!(
                "total lines {} does not match number of items {}",
                order.total_lines,
                order.items.len()
            ),
        ));
    }

    Ok(())
}

/// Validate a single party address. Field paths are relative to the address.
pub fn validate_address(address: &Address) -> Result<(), ValidationError> {
    if address.name.trim().is_empty() {
        return Err(ValidationError::new("name", "name is required"));
    }
    if address.lines.is_empty() {
        return Err(ValidationError::new(
            "lines",
            "at least one address line is required",
        ));
    }
    for (i, line) in address.lines.iter().enumerate() {
        if line.chars().count() > MAX_FIELD_LENGTH {
            return Err(ValidationError::new(
                format!("lines[{i}]"),
                format!("address line exceeds {MAX_FIELD_LENGTH} characters"),
            ));
        }
    }
    Ok(())
}

/// Validate a single order line. Field paths are relative to the item.
pub fn validate_item(item: &LineItem) -> Result<(), ValidationError> {
    if item.line_number == 0 {
        return Err(ValidationError::new(
            "line_number",
            "line number must be positive",
        ));
    }
    required_bounded(&item.buyer_item_code, "buyer_item_code", "buyer item code")?;
    if item.quantity.is_sign_negative() || item.quantity.is_zero() {
        return Err(ValidationError::new(
            "quantity",
            "quantity must be positive",
        ));
    }
    if item.unit_price.is_sign_negative() && !item.unit_price.is_zero() {
        return Err(ValidationError::new(
            "unit_price",
            "unit price cannot be negative",
        ));
    }
    if item.quantity.checked_mul(item.unit_price).is_none() {
        return Err(ValidationError::new(
            "amount",
            "quantity × unit price exceeds the decimal range",
        ));
    }
    Ok(())
}

fn required(value: &str, field: &str, label: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, format!("{label} is required")));
    }
    Ok(())
}

fn required_bounded(value: &str, field: &str, label: &str) -> Result<(), ValidationError> {
    required(value, field, label)?;
    if value.chars().count() > MAX_FIELD_LENGTH {
        return Err(ValidationError::new(
            field,
            format!("{label} exceeds {MAX_FIELD_LENGTH} characters"),
        ));
    }
    Ok(())
}
