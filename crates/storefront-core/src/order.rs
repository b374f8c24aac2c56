//! # Order Module
//!
//! Line items, the order they form, and the totals math over them.
//!
//! ## Totals Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Order Totals Pipeline                              │
//! │                                                                         │
//! │  LineItem ──► unit_price × quantity ──► line_total   (exact, per item)  │
//! │                                             │                           │
//! │                                             ▼                           │
//! │                            subtotal = Σ line_total   (exact, no round)  │
//! │                                             │                           │
//! │                                             ▼                           │
//! │                            − percentage discount     (rounds once)      │
//! │                                             │                           │
//! │                                             ▼                           │
//! │                            + tax on discounted base  (rounds once)      │
//! │                                             │                           │
//! │                                             ▼                           │
//! │                                          total                          │
//! │                                                                         │
//! │  With no discount and no tax configured (the default), the total IS     │
//! │  the subtotal: the plain sum of unit_price × quantity over all items.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Determinism
//! Every step is integer arithmetic over cents. Identical items produce
//! identical totals, in any order, on any platform. The multiplication
//! happens per item before accumulation; nothing is rounded per line.
//!
//! ## Permissiveness
//! The totals math validates nothing. Negative prices or quantities flow
//! through the arithmetic unchanged (they model refund and return lines).
//! Callers wanting stricter guarantees run [`crate::validation`] first.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::TaxRate;
use crate::{MAX_ITEM_QUANTITY, MAX_ORDER_ITEMS};

// =============================================================================
// Line Item
// =============================================================================

/// One line of an order: a product at a frozen unit price and a quantity.
///
/// ## Snapshot Pattern
/// The sku, name, and unit price are captured when the item enters the
/// order. If the catalog price changes afterwards, this line keeps the
/// price the customer saw.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Product ID (UUID from the catalog)
    pub product_id: String,

    /// SKU at time of adding (frozen)
    pub sku: String,

    /// Product name at time of adding (frozen)
    pub name: String,

    /// Price in cents at time of adding (frozen)
    pub unit_price_cents: i64,

    /// Quantity ordered
    pub quantity: i64,

    /// When this item was added to the order
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl LineItem {
    /// Creates a new line item with the price frozen now.
    pub fn new(
        product_id: impl Into<String>,
        sku: impl Into<String>,
        name: impl Into<String>,
        unit_price_cents: i64,
        quantity: i64,
    ) -> Self {
        LineItem {
            product_id: product_id.into(),
            sku: sku.into(),
            name: name.into(),
            unit_price_cents,
            quantity,
            added_at: Utc::now(),
        }
    }

    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Calculates the line total (unit price × quantity).
    ///
    /// Exact integer multiplication in cents. A zero quantity contributes
    /// zero; a negative price or quantity yields a negative line total.
    pub fn line_total_cents(&self) -> i64 {
        self.unit_price().multiply_quantity(self.quantity).cents()
    }
}

// =============================================================================
// Order
// =============================================================================

/// An order being assembled: line items plus optional order-level
/// adjustments.
///
/// ## Invariants
/// - Items are unique by `product_id` when built through [`Order::add_item`]
///   (adding the same product again merges quantities)
/// - Maximum line items: [`MAX_ORDER_ITEMS`]
/// - Maximum quantity per item: [`MAX_ITEM_QUANTITY`]
///
/// ## Concurrency
/// `Order` is a plain value with no interior mutability and no locking.
/// It is safe to compute totals from any number of threads because each
/// call only reads the items it was given. Shared mutable carts are the
/// embedding application's concern, not this type's.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Items in the order
    pub items: Vec<LineItem>,

    /// Order-level percentage discount in basis points (0 = none)
    #[serde(default)]
    pub discount_bps: u32,

    /// Tax rate applied to the discounted subtotal (zero = none)
    #[serde(default)]
    pub tax_rate: TaxRate,

    /// When the order was created/last cleared
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Creates a new empty order with no discount and no tax.
    pub fn new() -> Self {
        Order {
            items: Vec::new(),
            discount_bps: 0,
            tax_rate: TaxRate::zero(),
            created_at: Utc::now(),
        }
    }

    /// Adds a line item, merging quantities if the product is already
    /// present.
    ///
    /// ## Behavior
    /// - Product already in order: quantities merge, the existing frozen
    ///   price wins
    /// - Product not in order: item is appended
    ///
    /// ## Errors
    /// - [`CoreError::QuantityTooLarge`] if the merged quantity exceeds
    ///   [`MAX_ITEM_QUANTITY`]
    /// - [`CoreError::OrderTooLarge`] if the order already holds
    ///   [`MAX_ORDER_ITEMS`] distinct items
    pub fn add_item(&mut self, item: LineItem) -> CoreResult<()> {
        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|i| i.product_id == item.product_id)
        {
            let new_qty = existing.quantity + item.quantity;
            if new_qty > MAX_ITEM_QUANTITY {
                return Err(CoreError::QuantityTooLarge {
                    requested: new_qty,
                    max: MAX_ITEM_QUANTITY,
                });
            }
            existing.quantity = new_qty;
            return Ok(());
        }

        if self.items.len() >= MAX_ORDER_ITEMS {
            return Err(CoreError::OrderTooLarge {
                max: MAX_ORDER_ITEMS,
            });
        }

        self.items.push(item);
        Ok(())
    }

    /// Updates the quantity of an item.
    ///
    /// ## Behavior
    /// - Quantity 0: removes the item
    /// - Product not found: returns [`CoreError::ItemNotFound`]
    pub fn update_quantity(&mut self, product_id: &str, quantity: i64) -> CoreResult<()> {
        if quantity == 0 {
            return self.remove_item(product_id);
        }

        if quantity > MAX_ITEM_QUANTITY {
            return Err(CoreError::QuantityTooLarge {
                requested: quantity,
                max: MAX_ITEM_QUANTITY,
            });
        }

        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product_id) {
            item.quantity = quantity;
            Ok(())
        } else {
            Err(CoreError::ItemNotFound(product_id.to_string()))
        }
    }

    /// Removes an item from the order by product ID.
    pub fn remove_item(&mut self, product_id: &str) -> CoreResult<()> {
        let initial_len = self.items.len();
        self.items.retain(|i| i.product_id != product_id);

        if self.items.len() == initial_len {
            Err(CoreError::ItemNotFound(product_id.to_string()))
        } else {
            Ok(())
        }
    }

    /// Clears all items and adjustments from the order.
    pub fn clear(&mut self) {
        self.items.clear();
        self.discount_bps = 0;
        self.tax_rate = TaxRate::zero();
        self.created_at = Utc::now();
    }

    /// Returns the number of distinct line items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity of all items.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Checks if the order is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Calculates the subtotal: the sum of unit price × quantity over
    /// all line items.
    ///
    /// Each line multiplies first, then the products are accumulated.
    /// All values are whole cents so the sum is exact; there is no
    /// per-line rounding to compound. An empty order sums to zero.
    pub fn subtotal_cents(&self) -> i64 {
        self.items.iter().map(|i| i.line_total_cents()).sum()
    }

    /// Calculates the order-level discount amount.
    ///
    /// Zero when no discount is configured.
    pub fn discount_cents(&self) -> i64 {
        let subtotal = Money::from_cents(self.subtotal_cents());
        (subtotal - subtotal.apply_percentage_discount(self.discount_bps)).cents()
    }

    /// Calculates tax on the discounted subtotal.
    ///
    /// Zero when no tax rate is configured.
    pub fn tax_cents(&self) -> i64 {
        let base = Money::from_cents(self.subtotal_cents() - self.discount_cents());
        base.calculate_tax(self.tax_rate).cents()
    }

    /// Calculates the grand total: subtotal − discount + tax.
    ///
    /// With the default adjustments (no discount, no tax) this equals
    /// [`Order::subtotal_cents`] exactly.
    pub fn total_cents(&self) -> i64 {
        self.subtotal_cents() - self.discount_cents() + self.tax_cents()
    }

    /// Computes the totals summary in one pass.
    pub fn totals(&self) -> OrderTotals {
        OrderTotals::from(self)
    }
}

/// Builds an order directly from externally collected line items, with
/// no adjustments configured.
///
/// This is the path for callers that already hold a full item list (for
/// example, assembled from storage) and only want totals; none of the
/// `add_item` merge rules or size limits apply.
impl From<Vec<LineItem>> for Order {
    fn from(items: Vec<LineItem>) -> Self {
        Order {
            items,
            discount_bps: 0,
            tax_rate: TaxRate::zero(),
            created_at: Utc::now(),
        }
    }
}

// =============================================================================
// Order Totals
// =============================================================================

/// Totals summary for API responses and receipts.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderTotals {
    pub item_count: usize,
    pub total_quantity: i64,
    pub subtotal_cents: i64,
    pub discount_cents: i64,
    pub tax_cents: i64,
    pub total_cents: i64,
}

impl From<&Order> for OrderTotals {
    fn from(order: &Order) -> Self {
        OrderTotals {
            item_count: order.item_count(),
            total_quantity: order.total_quantity(),
            subtotal_cents: order.subtotal_cents(),
            discount_cents: order.discount_cents(),
            tax_cents: order.tax_cents(),
            total_cents: order.total_cents(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
