//! Cart Store

use crate::cart::{CartAction, CartState};

/// Owns a single [`CartState`] and is its only writer.
///
/// One store exists per cart session; callers hold it (or a handle to it) explicitly rather
/// than reaching for shared global state.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    state: CartState,
}

impl CartStore {
    /// A store holding an empty, closed cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispatch an action and return the resulting state.
    pub fn dispatch(&mut self, action: CartAction) -> &CartState {
        self.state.apply(action);

        &self.state
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &CartState {
        &self.state
    }

    /// Take the current state out of the store.
    #[must_use]
    pub fn into_state(self) -> CartState {
        self.state
    }
}

impl From<CartState> for CartStore {
    fn from(state: CartState) -> Self {
        Self { state }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::products::{Product, ProductCode};

    use super::*;

    #[test]
    fn dispatch_returns_next_state() -> TestResult {
        let mut store = CartStore::new();
        let code = ProductCode::new("737628064502")?;

        let total = store
            .dispatch(CartAction::AddItem(Product::new(code.clone())))
            .total_items();

        assert_eq!(total, 1);
        assert_eq!(store.state().quantity_of(&code), 1);

        Ok(())
    }

    #[test]
    fn stores_are_independent() -> TestResult {
        let mut first = CartStore::new();
        let second = CartStore::new();

        first.dispatch(CartAction::AddItem(Product::new(ProductCode::new("A")?)));

        assert_eq!(first.state().total_items(), 1);
        assert_eq!(second.state().total_items(), 0);

        Ok(())
    }
}
