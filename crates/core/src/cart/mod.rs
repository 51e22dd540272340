//! Cart
//!
//! The cart is a client-side selection of products with quantities. Every transition is total:
//! unknown product codes are no-ops, and a quantity that would drop to zero or below removes the
//! line instead.

use std::num::NonZeroU64;

use crate::products::{Product, ProductCode};

mod action;
mod store;

pub use action::CartAction;
pub use store::CartStore;

/// Badge counts above this value are shown as `"99+"`.
const BADGE_LIMIT: u64 = 99;

/// Cart visibility
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// The cart panel is hidden.
    #[default]
    Closed,

    /// The cart panel is shown.
    Open,
}

impl Visibility {
    /// The opposite visibility.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }
}

impl From<bool> for Visibility {
    fn from(open: bool) -> Self {
        if open { Self::Open } else { Self::Closed }
    }
}

/// A product paired with how many of it are in the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLineItem {
    product: Product,
    quantity: NonZeroU64,
}

impl CartLineItem {
    fn new(product: Product) -> Self {
        Self {
            product,
            quantity: NonZeroU64::MIN,
        }
    }

    /// The product snapshot stored when the line was first added.
    #[must_use]
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// The product code this line is keyed by.
    #[must_use]
    pub fn code(&self) -> &ProductCode {
        &self.product.code
    }

    /// Quantity of the product, always at least one.
    #[must_use]
    pub fn quantity(&self) -> u64 {
        self.quantity.get()
    }
}

/// Cart State
///
/// Items are unique by product code and keep their insertion order. `total_items` is a cache
/// of the summed quantities, recomputed after every item mutation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartState {
    items: Vec<CartLineItem>,
    total_items: u64,
    visibility: Visibility,
}

impl CartState {
    /// An empty, closed cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one of `product`.
    ///
    /// If a line with the same code exists its quantity goes up by one and the stored product
    /// is left untouched; otherwise a new line is appended.
    pub fn add_item(&mut self, product: Product) {
        match self.line_mut(&product.code) {
            Some(line) => line.quantity = line.quantity.saturating_add(1),
            None => self.items.push(CartLineItem::new(product)),
        }

        self.recount();
    }

    /// Remove the line for `code`, if there is one.
    pub fn remove_item(&mut self, code: &ProductCode) {
        self.items.retain(|line| line.code() != code);

        self.recount();
    }

    /// Set the quantity for `code` to exactly `quantity`.
    ///
    /// Unknown codes are ignored. A quantity of zero or less removes the line.
    pub fn set_quantity(&mut self, code: &ProductCode, quantity: i64) {
        let Some(line) = self.line_mut(code) else {
            return;
        };

        match u64::try_from(quantity).ok().and_then(NonZeroU64::new) {
            Some(quantity) => line.quantity = quantity,
            None => self.items.retain(|line| line.code() != code),
        }

        self.recount();
    }

    /// Empty the cart. Visibility is left as it is.
    pub fn clear(&mut self) {
        self.items.clear();
        self.total_items = 0;
    }

    /// Show the cart.
    pub fn open(&mut self) {
        self.visibility = Visibility::Open;
    }

    /// Hide the cart.
    pub fn close(&mut self) {
        self.visibility = Visibility::Closed;
    }

    /// Flip the cart's visibility.
    pub fn toggle(&mut self) {
        self.visibility = self.visibility.toggled();
    }

    /// Line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Sum of all line quantities.
    #[must_use]
    pub fn total_items(&self) -> u64 {
        self.total_items
    }

    /// Whether the cart is shown.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.visibility == Visibility::Open
    }

    /// Current visibility.
    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Number of distinct products in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The line for `code`.
    #[must_use]
    pub fn get(&self, code: &ProductCode) -> Option<&CartLineItem> {
        self.items.iter().find(|line| line.code() == code)
    }

    /// Quantity held for `code`, zero when absent.
    #[must_use]
    pub fn quantity_of(&self, code: &ProductCode) -> u64 {
        self.get(code).map_or(0, CartLineItem::quantity)
    }

    /// Text for the cart button badge: nothing when empty, `"99+"` past 99.
    #[must_use]
    pub fn badge_label(&self) -> Option<String> {
        match self.total_items {
            0 => None,
            total if total > BADGE_LIMIT => Some(format!("{BADGE_LIMIT}+")),
            total => Some(total.to_string()),
        }
    }

    fn line_mut(&mut self, code: &ProductCode) -> Option<&mut CartLineItem> {
        self.items.iter_mut().find(|line| line.code() == code)
    }

    fn recount(&mut self) {
        self.total_items = self
            .items
            .iter()
            .map(CartLineItem::quantity)
            .fold(0, u64::saturating_add);
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn product(code: &str) -> Result<Product, crate::products::ProductCodeError> {
        Ok(Product::new(ProductCode::new(code)?))
    }

    fn code(code: &str) -> Result<ProductCode, crate::products::ProductCodeError> {
        ProductCode::new(code)
    }

    #[test]
    fn new_cart_is_empty_and_closed() {
        let cart = CartState::new();

        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
        assert!(!cart.is_open());
        assert_eq!(cart.visibility(), Visibility::Closed);
    }

    #[test]
    fn add_item_appends_new_lines() -> TestResult {
        let mut cart = CartState::new();

        cart.add_item(product("A")?);
        cart.add_item(product("B")?);

        let codes: Vec<&str> = cart.items().iter().map(|l| l.code().as_str()).collect();

        assert_eq!(codes, vec!["A", "B"]);
        assert_eq!(cart.total_items(), 2);

        Ok(())
    }

    #[test]
    fn add_item_accumulates_on_existing_code() -> TestResult {
        let mut cart = CartState::new();

        cart.add_item(product("A")?);
        cart.add_item(product("A")?);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity_of(&code("A")?), 2);
        assert_eq!(cart.total_items(), 2);

        Ok(())
    }

    #[test]
    fn add_item_keeps_first_product_snapshot() -> TestResult {
        let mut cart = CartState::new();

        cart.add_item(product("A")?.with_name("Original"));
        cart.add_item(product("A")?.with_name("Renamed"));

        let line = cart.get(&code("A")?);

        assert_eq!(
            line.and_then(|l| l.product().product_name.as_deref()),
            Some("Original")
        );

        Ok(())
    }

    #[test]
    fn add_item_keeps_position_of_existing_lines() -> TestResult {
        let mut cart = CartState::new();

        cart.add_item(product("A")?);
        cart.add_item(product("B")?);
        cart.add_item(product("A")?);

        let codes: Vec<&str> = cart.items().iter().map(|l| l.code().as_str()).collect();

        assert_eq!(codes, vec!["A", "B"]);

        Ok(())
    }

    #[test]
    fn remove_item_drops_line_and_recounts() -> TestResult {
        let mut cart = CartState::new();

        cart.add_item(product("A")?);
        cart.add_item(product("A")?);
        cart.add_item(product("B")?);
        cart.remove_item(&code("A")?);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total_items(), 1);

        Ok(())
    }

    #[test]
    fn remove_unknown_item_is_noop() -> TestResult {
        let mut cart = CartState::new();

        cart.add_item(product("A")?);

        let before = cart.clone();

        cart.remove_item(&code("Z")?);

        assert_eq!(cart, before);

        Ok(())
    }

    #[test]
    fn set_quantity_is_absolute() -> TestResult {
        let mut cart = CartState::new();

        cart.add_item(product("A")?);
        cart.add_item(product("A")?);
        cart.set_quantity(&code("A")?, 5);

        assert_eq!(cart.quantity_of(&code("A")?), 5);
        assert_eq!(cart.total_items(), 5);

        Ok(())
    }

    #[test]
    fn set_quantity_non_positive_removes() -> TestResult {
        let mut cart = CartState::new();

        cart.add_item(product("A")?);
        cart.add_item(product("B")?);
        cart.set_quantity(&code("A")?, 0);
        cart.set_quantity(&code("B")?, -3);

        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);

        Ok(())
    }

    #[test]
    fn set_quantity_unknown_code_is_noop() -> TestResult {
        let mut cart = CartState::new();

        cart.add_item(product("A")?);

        let before = cart.clone();

        cart.set_quantity(&code("Z")?, 7);

        assert_eq!(cart, before);

        Ok(())
    }

    #[test]
    fn clear_keeps_visibility() -> TestResult {
        let mut cart = CartState::new();

        cart.add_item(product("A")?);
        cart.open();
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
        assert!(cart.is_open());

        Ok(())
    }

    #[test]
    fn visibility_transitions() {
        let mut cart = CartState::new();

        cart.toggle();
        assert!(cart.is_open());

        cart.toggle();
        assert!(!cart.is_open());

        cart.open();
        cart.open();
        assert!(cart.is_open());

        cart.close();
        assert!(!cart.is_open());
    }

    #[test]
    fn item_mutations_do_not_change_visibility() -> TestResult {
        let mut cart = CartState::new();

        cart.add_item(product("A")?);
        cart.set_quantity(&code("A")?, 3);
        cart.remove_item(&code("A")?);

        assert!(!cart.is_open());

        Ok(())
    }

    #[test]
    fn total_items_saturates_instead_of_overflowing() -> TestResult {
        let mut cart = CartState::new();

        for name in ["A", "B", "C"] {
            cart.add_item(product(name)?);
            cart.set_quantity(&code(name)?, i64::MAX);
        }

        assert_eq!(cart.quantity_of(&code("A")?), i64::MAX.unsigned_abs());
        assert_eq!(cart.total_items(), u64::MAX);
        assert_eq!(cart.badge_label().as_deref(), Some("99+"));

        Ok(())
    }

    #[test]
    fn add_item_on_a_saturated_line_stays_saturated() -> TestResult {
        let mut cart = CartState::new();

        cart.items.push(CartLineItem {
            product: product("A")?,
            quantity: NonZeroU64::MAX,
        });
        cart.recount();

        cart.add_item(product("A")?);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity_of(&code("A")?), u64::MAX);
        assert_eq!(cart.total_items(), u64::MAX);

        cart.add_item(product("B")?);

        assert_eq!(cart.quantity_of(&code("B")?), 1);
        assert_eq!(cart.total_items(), u64::MAX);

        Ok(())
    }

    #[test]
    fn badge_label_caps_at_ninety_nine() -> TestResult {
        let mut cart = CartState::new();

        assert_eq!(cart.badge_label(), None);

        cart.add_item(product("A")?);
        cart.set_quantity(&code("A")?, 99);
        assert_eq!(cart.badge_label().as_deref(), Some("99"));

        cart.set_quantity(&code("A")?, 100);
        assert_eq!(cart.badge_label().as_deref(), Some("99+"));

        Ok(())
    }
}
