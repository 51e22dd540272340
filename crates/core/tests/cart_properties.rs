//! Cart invariants checked over every short action sequence.

use testresult::TestResult;

use pantry::{
    cart::{CartAction, CartState, CartStore},
    products::{Product, ProductCode},
};

fn alphabet() -> TestResult<Vec<CartAction>> {
    let a = ProductCode::new("A")?;
    let b = ProductCode::new("B")?;

    Ok(vec![
        CartAction::AddItem(Product::new(a.clone())),
        CartAction::AddItem(Product::new(b.clone())),
        CartAction::RemoveItem(a.clone()),
        CartAction::SetQuantity {
            code: a.clone(),
            quantity: 0,
        },
        CartAction::SetQuantity {
            code: a,
            quantity: 3,
        },
        CartAction::SetQuantity {
            code: b,
            quantity: -1,
        },
        CartAction::Clear,
        CartAction::Toggle,
    ])
}

/// Every sequence of `len` actions drawn from `alphabet`.
fn sequences(alphabet: &[CartAction], len: usize) -> Vec<Vec<CartAction>> {
    (0..len).fold(vec![Vec::new()], |acc, _| {
        acc.into_iter()
            .flat_map(|prefix| {
                alphabet.iter().map(move |action| {
                    let mut next = prefix.clone();
                    next.push(action.clone());
                    next
                })
            })
            .collect()
    })
}

fn run(actions: &[CartAction]) -> CartState {
    actions
        .iter()
        .cloned()
        .fold(CartState::new(), CartState::reduce)
}

#[test]
fn codes_stay_unique_and_totals_stay_consistent() -> TestResult {
    let alphabet = alphabet()?;

    for len in 0..=4 {
        for actions in sequences(&alphabet, len) {
            let state = run(&actions);

            let mut codes: Vec<&str> = state.items().iter().map(|l| l.code().as_str()).collect();
            let lines = codes.len();

            codes.sort_unstable();
            codes.dedup();

            let summed: u64 = state.items().iter().map(|l| l.quantity()).sum();

            assert_eq!(codes.len(), lines, "duplicate code after {actions:?}");
            assert_eq!(state.total_items(), summed, "stale total after {actions:?}");
            assert!(
                state.items().iter().all(|l| l.quantity() >= 1),
                "non-positive quantity after {actions:?}"
            );
        }
    }

    Ok(())
}

#[test]
fn removal_is_idempotent() -> TestResult {
    let alphabet = alphabet()?;
    let a = ProductCode::new("A")?;

    for actions in sequences(&alphabet, 3) {
        let once = run(&actions).reduce(CartAction::RemoveItem(a.clone()));
        let twice = once.clone().reduce(CartAction::RemoveItem(a.clone()));

        assert_eq!(once, twice, "second removal changed state after {actions:?}");
    }

    Ok(())
}

#[test]
fn visibility_only_follows_visibility_actions() -> TestResult {
    let alphabet = alphabet()?;

    for actions in sequences(&alphabet, 4) {
        let toggles = actions
            .iter()
            .filter(|action| matches!(action, CartAction::Toggle))
            .count();

        assert_eq!(
            run(&actions).is_open(),
            toggles % 2 == 1,
            "unexpected visibility after {actions:?}"
        );
    }

    Ok(())
}

#[test]
fn example_session() -> TestResult {
    let a = ProductCode::new("A")?;
    let b = ProductCode::new("B")?;
    let mut store = CartStore::new();

    store.dispatch(CartAction::AddItem(Product::new(a.clone())));
    assert_eq!(store.state().total_items(), 1);

    store.dispatch(CartAction::AddItem(Product::new(a.clone())));
    assert_eq!(store.state().quantity_of(&a), 2);
    assert_eq!(store.state().total_items(), 2);

    store.dispatch(CartAction::AddItem(Product::new(b.clone())));
    assert_eq!(store.state().total_items(), 3);

    store.dispatch(CartAction::SetQuantity {
        code: a.clone(),
        quantity: 0,
    });

    let remaining: Vec<(&str, u64)> = store
        .state()
        .items()
        .iter()
        .map(|l| (l.code().as_str(), l.quantity()))
        .collect();

    assert_eq!(remaining, vec![("B", 1)]);
    assert_eq!(store.state().total_items(), 1);

    assert!(store.dispatch(CartAction::Toggle).is_open());

    let cleared = store.dispatch(CartAction::Clear);

    assert!(cleared.is_empty());
    assert_eq!(cleared.total_items(), 0);
    assert!(cleared.is_open());

    Ok(())
}
