//! # storefront-core: Pure Business Logic for the Storefront Checkout
//!
//! This crate is the **heart** of the storefront's checkout. It contains
//! the order-total arithmetic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Storefront Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Web Frontend (TypeScript)                       │   │
//! │  │     Catalog UI ──► Cart UI ──► Checkout UI ──► Receipt UI       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON (generated TS bindings)           │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              Application Layer (out of this repo)               │   │
//! │  │     routing, sessions, auth, persistence, form handling         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ storefront-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐   │   │
//! │  │   │   types   │  │   money   │  │   order   │  │ validation│   │   │
//! │  │   │  TaxRate  │  │   Money   │  │   Order   │  │   rules   │   │   │
//! │  │   │           │  │           │  │  LineItem │  │  checks   │   │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`order`] - Line items, orders, and the totals pipeline
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`types`] - Shared value types (TaxRate)
//! - [`error`] - Domain error types
//! - [`validation`] - Opt-in input validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Permissive Core**: The totals math never rejects input; validation
//!    is a separate, opt-in boundary
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::{LineItem, Order};
//!
//! // Line items arrive from the surrounding checkout with frozen prices
//! let order = Order::from(vec![
//!     LineItem::new("p-1", "TEE-BLK-M", "Black T-Shirt (M)", 1999, 3),
//!     LineItem::new("p-2", "MUG-WHT", "White Mug", 250, 2),
//! ]);
//!
//! // $19.99 × 3 + $2.50 × 2 = $64.97
//! assert_eq!(order.total_cents(), 6497);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod order;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use storefront_core::Money` instead of
// `use storefront_core::money::Money`

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use order::{LineItem, Order, OrderTotals};
pub use types::TaxRate;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum distinct line items allowed in a single order
///
/// ## Business Reason
/// Prevents runaway carts and ensures reasonable transaction sizes.
/// Can be made configurable per store in future versions.
pub const MAX_ORDER_ITEMS: usize = 100;

/// Maximum quantity of a single item in an order
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
pub const MAX_ITEM_QUANTITY: i64 = 999;
