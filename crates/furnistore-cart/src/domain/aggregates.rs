//! Aggregate root for the shopping cart.

use std::fmt;

use furnistore_core::product::{Product, ProductId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Size and color the shopper picked for a product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    /// Selected size, if the product comes in sizes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_size: Option<String>,
    /// Selected color, if the product comes in colors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_color: Option<String>,
}

impl Variant {
    /// A variant with both a size and a color.
    #[must_use]
    pub fn new(size: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            selected_size: Some(size.into()),
            selected_color: Some(color.into()),
        }
    }
}

/// Identifier of a line item, derived from its product and variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineItemId(pub String);

impl LineItemId {
    /// Builds the identifier for `product_id` in `variant`.
    ///
    /// Parts are joined with `-`. A missing variant attribute is spelled
    /// `default`; inside each part `~` escapes a literal `-` or `~`, and a
    /// selected value that is literally `default` is written `~default`, so
    /// distinct keys never share an identifier.
    #[must_use]
    pub fn for_variant(product_id: &ProductId, variant: &Variant) -> Self {
        Self(format!(
            "{}-{}-{}",
            escape_part(product_id.as_str()),
            variant_part(variant.selected_size.as_deref()),
            variant_part(variant.selected_color.as_deref()),
        ))
    }
}

const ABSENT_PART: &str = "default";

fn variant_part(value: Option<&str>) -> String {
    match value {
        None => ABSENT_PART.to_owned(),
        Some(ABSENT_PART) => format!("~{ABSENT_PART}"),
        Some(value) => escape_part(value),
    }
}

fn escape_part(part: &str) -> String {
    let mut escaped = String::with_capacity(part.len());
    for ch in part.chars() {
        if matches!(ch, '-' | '~') {
            escaped.push('~');
        }
        escaped.push(ch);
    }
    escaped
}

impl fmt::Display for LineItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LineItemId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// A product in the cart together with its quantity and variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Line item identifier.
    pub id: LineItemId,
    /// Product snapshot taken when the item was first added.
    pub product: Product,
    /// Units of the product; always at least one.
    pub quantity: u32,
    /// Selected size and color.
    #[serde(flatten)]
    pub variant: Variant,
}

impl LineItem {
    /// Price of the line: unit price times quantity.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }

    fn matches(&self, product_id: &ProductId, variant: &Variant) -> bool {
        self.product.id == *product_id && self.variant == *variant
    }
}

/// Persisted shape of the cart slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSnapshot {
    /// Line items in insertion order.
    pub items: Vec<LineItem>,
    /// Cart total at the time of the snapshot.
    pub total: Decimal,
    /// Units in the cart at the time of the snapshot.
    pub item_count: u64,
}

/// The aggregate root for a shopping cart.
///
/// `total` and `item_count` are recomputed from `items` after every
/// mutation and are never patched incrementally.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    items: Vec<LineItem>,
    total: Decimal,
    item_count: u64,
    is_open: bool,
}

impl Cart {
    /// Creates an empty, closed cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a cart from persisted state. Stored aggregates and line
    /// identifiers are ignored and recomputed, zero-quantity lines are
    /// dropped, and lines sharing a product and variant are merged into the
    /// first of them.
    #[must_use]
    pub fn from_snapshot(snapshot: CartSnapshot) -> Self {
        let mut cart = Self::default();
        for item in snapshot.items.into_iter().filter(|item| item.quantity > 0) {
            if let Some(line) = cart
                .items
                .iter_mut()
                .find(|line| line.matches(&item.product.id, &item.variant))
            {
                line.quantity = line.quantity.saturating_add(item.quantity);
            } else {
                cart.items.push(LineItem {
                    id: LineItemId::for_variant(&item.product.id, &item.variant),
                    ..item
                });
            }
        }
        cart.recompute();
        cart
    }

    /// Adds `quantity` units of `product` in `variant`.
    ///
    /// If a line for the same product and variant exists its quantity grows
    /// by `quantity`; otherwise a new line is appended. Adding zero units
    /// leaves the cart unchanged.
    pub fn add_item(&mut self, product: &Product, quantity: u32, variant: &Variant) {
        if quantity == 0 {
            return;
        }
        if let Some(line) = self
            .items
            .iter_mut()
            .find(|line| line.matches(&product.id, variant))
        {
            line.quantity = line.quantity.saturating_add(quantity);
        } else {
            self.items.push(LineItem {
                id: LineItemId::for_variant(&product.id, variant),
                product: product.clone(),
                quantity,
                variant: variant.clone(),
            });
        }
        self.recompute();
    }

    /// Removes the line `id`. Returns false if there was no such line.
    pub fn remove_item(&mut self, id: &LineItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|line| line.id != *id);
        let removed = self.items.len() != before;
        if removed {
            self.recompute();
        }
        removed
    }

    /// Sets the quantity of line `id` to `quantity`; zero or less removes the
    /// line. Returns false if there was no such line.
    pub fn update_quantity(&mut self, id: &LineItemId, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove_item(id);
        }
        let Some(line) = self.items.iter_mut().find(|line| line.id == *id) else {
            return false;
        };
        line.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        self.recompute();
        true
    }

    /// Removes every line.
    pub fn clear(&mut self) {
        self.items.clear();
        self.recompute();
    }

    /// Flips the cart drawer visibility.
    pub fn toggle_open(&mut self) {
        self.is_open = !self.is_open;
    }

    /// Line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Returns the line `id`, if present.
    #[must_use]
    pub fn get(&self, id: &LineItemId) -> Option<&LineItem> {
        self.items.iter().find(|line| line.id == *id)
    }

    /// Sum of line subtotals.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.total
    }

    /// Sum of line quantities.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.item_count
    }

    /// Whether the cart drawer is visible.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Returns true if the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the persisted shape of the cart.
    #[must_use]
    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            items: self.items.clone(),
            total: self.total,
            item_count: self.item_count,
        }
    }

    fn recompute(&mut self) {
        self.total = self.items.iter().map(LineItem::subtotal).sum();
        self.item_count = self.items.iter().map(|line| u64::from(line.quantity)).sum();
    }
}
