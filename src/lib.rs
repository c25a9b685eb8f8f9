//! # edifact-orders
//!
//! Renders structured purchase orders into UN/EDIFACT ORDERS interchanges
//! (syntax UNOA level 2, directory D.96A, EAN008 association).
//!
//! All monetary values and quantities use [`rust_decimal::Decimal`], never
//! floating point. Every interchange carries exactly one message.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use edifact_orders::core::*;
//! use edifact_orders::edifact::generate_orders;
//! use rust_decimal_macros::dec;
//!
//! let ordered_at = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap().and_hms_opt(10, 30, 0).unwrap();
//! let order = OrderBuilder::new("PO-2024-001", ordered_at)
//!     .interchange("SENDERID", "RECEIVERID", "12345")
//!     .message_reference("12345")
//!     .currency("USD")
//!     .buyer(AddressBuilder::new("Acme Corporation").line("123 Main St").id("BUYER001").build())
//!     .seller(AddressBuilder::new("Supplier Inc").line("456 Supply Ave").build())
//!     .add_item(LineItemBuilder::new(1, "ITEM001", dec!(10), dec!(25.50))
//!         .description("Widget Type A")
//!         .build())
//!     .total_lines(1)
//!     .build()
//!     .unwrap();
//!
//! let interchange = generate_orders(&order).unwrap();
//! assert!(interchange.contains("BGM+220+PO-2024-001+9'\n"));
//! assert!(interchange.contains("MOA+128:255.00'\n"));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` | Order types, builders, validation |
//! | `orders` (default) | ORDERS segment factory, serializer and assembler |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "orders")]
pub mod edifact;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
