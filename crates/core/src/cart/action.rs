//! Cart Actions

use crate::{
    cart::CartState,
    products::{Product, ProductCode},
};

/// A single cart transition.
#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    /// Add one of a product.
    AddItem(Product),

    /// Remove a product's line.
    RemoveItem(ProductCode),

    /// Set a product's quantity; zero or less removes the line.
    SetQuantity {
        /// Product to update
        code: ProductCode,

        /// New absolute quantity
        quantity: i64,
    },

    /// Remove every line.
    Clear,

    /// Show the cart.
    Open,

    /// Hide the cart.
    Close,

    /// Flip visibility.
    Toggle,

    /// Show or hide the cart explicitly.
    SetOpen(bool),
}

impl CartState {
    /// Apply `action` in place.
    pub fn apply(&mut self, action: CartAction) {
        match action {
            CartAction::AddItem(product) => self.add_item(product),
            CartAction::RemoveItem(code) => self.remove_item(&code),
            CartAction::SetQuantity { code, quantity } => self.set_quantity(&code, quantity),
            CartAction::Clear => self.clear(),
            CartAction::Open | CartAction::SetOpen(true) => self.open(),
            CartAction::Close | CartAction::SetOpen(false) => self.close(),
            CartAction::Toggle => self.toggle(),
        }
    }

    /// Reduce `self` by `action` into the next state.
    #[must_use]
    pub fn reduce(mut self, action: CartAction) -> Self {
        self.apply(action);
        self
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn walkthrough() -> TestResult {
        let a = ProductCode::new("A")?;
        let b = ProductCode::new("B")?;

        let state = CartState::new()
            .reduce(CartAction::AddItem(Product::new(a.clone())))
            .reduce(CartAction::AddItem(Product::new(a.clone())));

        assert_eq!(state.quantity_of(&a), 2);
        assert_eq!(state.total_items(), 2);

        let state = state.reduce(CartAction::AddItem(Product::new(b.clone())));

        assert_eq!(state.total_items(), 3);

        let state = state.reduce(CartAction::SetQuantity {
            code: a.clone(),
            quantity: 0,
        });

        assert!(state.get(&a).is_none());
        assert_eq!(state.quantity_of(&b), 1);
        assert_eq!(state.total_items(), 1);

        let state = state.reduce(CartAction::Toggle);

        assert!(state.is_open());

        let state = state.reduce(CartAction::Clear);

        assert!(state.is_empty());
        assert_eq!(state.total_items(), 0);
        assert!(state.is_open());

        Ok(())
    }

    #[test]
    fn set_open_matches_open_and_close() {
        let opened = CartState::new().reduce(CartAction::SetOpen(true));
        let closed = opened.clone().reduce(CartAction::SetOpen(false));

        assert_eq!(opened, CartState::new().reduce(CartAction::Open));
        assert_eq!(closed, CartState::new());
    }

    #[test]
    fn set_quantity_floor_equals_remove() -> TestResult {
        let a = ProductCode::new("A")?;
        let seeded = CartState::new()
            .reduce(CartAction::AddItem(Product::new(a.clone())))
            .reduce(CartAction::AddItem(Product::new(ProductCode::new("B")?)));

        let removed = seeded.clone().reduce(CartAction::RemoveItem(a.clone()));
        let zeroed = seeded.reduce(CartAction::SetQuantity {
            code: a,
            quantity: -1,
        });

        assert_eq!(removed, zeroed);

        Ok(())
    }
}
