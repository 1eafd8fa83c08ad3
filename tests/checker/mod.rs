use std::sync::Arc;

use rand::Rng;

use purchase_validation::lookup::{BalanceLookupError, InMemoryBalanceLookup};
use purchase_validation::{Balance, BalanceSufficiencyChecker, ClientBalance, ClientId, PurchaseRequest, PurchaseValidation};

const CLIENT: ClientId = ClientId::new(1);

fn checker_with(balance: f64) -> BalanceSufficiencyChecker<InMemoryBalanceLookup> {
    BalanceSufficiencyChecker::new(InMemoryBalanceLookup::with_balances([ClientBalance {
        client_id: CLIENT,
        balance: Balance::new(balance),
    }]))
}

#[tokio::test]
async fn balance_equal_to_amount_is_insufficient() {
    let checker = checker_with(100.0);

    let sufficient = checker
        .has_sufficient_balance(CLIENT, &PurchaseRequest::new(100.0))
        .await
        .unwrap();

    assert!(!sufficient);
}

#[tokio::test]
async fn balance_is_compared_against_unit_amount() {
    let checker = checker_with(100.0);

    assert!(checker
        .has_sufficient_balance(CLIENT, &PurchaseRequest::new(99.99))
        .await
        .unwrap());
    assert!(!checker
        .has_sufficient_balance(CLIENT, &PurchaseRequest::new(100.01))
        .await
        .unwrap());
}

#[tokio::test]
async fn quantity_multiplies_the_required_total() {
    let purchase = PurchaseRequest::with_quantity(10.0, 5);

    let short = checker_with(49.99);
    assert!(!short
        .has_sufficient_balance_for_quantity(CLIENT, &purchase)
        .await
        .unwrap());

    let exact = checker_with(50.0);
    assert!(!exact
        .has_sufficient_balance_for_quantity(CLIENT, &purchase)
        .await
        .unwrap());

    let enough = checker_with(50.01);
    assert!(enough
        .has_sufficient_balance_for_quantity(CLIENT, &purchase)
        .await
        .unwrap());
}

#[tokio::test]
async fn doubling_quantity_doubles_the_required_total() {
    // 60 covers 5 units of 10 but not 10 of them
    let checker = checker_with(60.0);

    assert!(checker
        .has_sufficient_balance_for_quantity(CLIENT, &PurchaseRequest::with_quantity(10.0, 5))
        .await
        .unwrap());
    assert!(!checker
        .has_sufficient_balance_for_quantity(CLIENT, &PurchaseRequest::with_quantity(10.0, 10))
        .await
        .unwrap());
}

#[tokio::test]
async fn unit_quantity_matches_single_unit_check() {
    let mut rng = rand::thread_rng();

    for _ in 0..200 {
        let balance: f64 = rng.gen_range(-50.0..150.0);
        let unit_amount: f64 = rng.gen_range(-50.0..150.0);
        let checker = checker_with(balance);
        let purchase = PurchaseRequest::with_quantity(unit_amount, 1);

        let single = checker.has_sufficient_balance(CLIENT, &purchase).await.unwrap();
        let quantity = checker
            .has_sufficient_balance_for_quantity(CLIENT, &purchase)
            .await
            .unwrap();

        assert_eq!(single, quantity, "balance {} unit amount {}", balance, unit_amount);
    }
}

#[tokio::test]
async fn funds_check_is_strictly_greater_than() {
    let checker = BalanceSufficiencyChecker::new(InMemoryBalanceLookup::new());
    let mut rng = rand::thread_rng();

    for _ in 0..500 {
        let balance: f64 = rng.gen_range(-1_000.0..1_000.0);
        let amount: f64 = rng.gen_range(-1_000.0..1_000.0);

        assert_eq!(checker.has_sufficient_funds(Balance::new(balance), amount), balance > amount);
        assert!(!checker.has_sufficient_funds(Balance::new(balance), balance));
    }
}

#[tokio::test]
async fn unknown_client_yields_no_verdict() {
    let checker = checker_with(1_000.0);
    let unknown = ClientId::new(404);

    let result = checker
        .has_sufficient_balance(unknown, &PurchaseRequest::new(1.0))
        .await;
    assert!(matches!(result, Err(BalanceLookupError::ClientNotFound(id)) if id == unknown));

    let result = checker
        .has_sufficient_balance_for_quantity(unknown, &PurchaseRequest::with_quantity(1.0, 2))
        .await;
    assert!(matches!(result, Err(BalanceLookupError::ClientNotFound(id)) if id == unknown));
}

#[tokio::test]
async fn negative_inputs_pass_through_unvalidated() {
    let checker = checker_with(0.0);

    assert!(checker
        .has_sufficient_balance(CLIENT, &PurchaseRequest::new(-5.0))
        .await
        .unwrap());
    assert!(checker
        .has_sufficient_balance_for_quantity(CLIENT, &PurchaseRequest::with_quantity(5.0, -1))
        .await
        .unwrap());
}

#[tokio::test]
async fn checker_reads_latest_balance_of_shared_lookup() {
    let lookup = InMemoryBalanceLookup::new();
    let checker = BalanceSufficiencyChecker::new(lookup.clone());
    let purchase = PurchaseRequest::new(25.0);

    lookup.set_balance(CLIENT, Balance::new(10.0)).await;
    assert!(!checker.has_sufficient_balance(CLIENT, &purchase).await.unwrap());

    lookup.set_balance(CLIENT, Balance::new(30.0)).await;
    assert!(checker.has_sufficient_balance(CLIENT, &purchase).await.unwrap());

    lookup.remove(CLIENT).await;
    assert!(checker.has_sufficient_balance(CLIENT, &purchase).await.is_err());
}

#[tokio::test]
async fn concurrent_checks_are_independent() {
    let lookup = Arc::new(InMemoryBalanceLookup::with_balances((0..10).map(|id| ClientBalance {
        client_id: ClientId::new(id),
        balance: Balance::new(f64::from(id) * 10.0),
    })));
    let checker = Arc::new(BalanceSufficiencyChecker::new(lookup));

    let handles: Vec<_> = (0..10)
        .map(|id| {
            let checker = Arc::clone(&checker);
            tokio::spawn(async move {
                checker
                    .has_sufficient_balance(ClientId::new(id), &PurchaseRequest::new(45.0))
                    .await
                    .unwrap()
            })
        })
        .collect();

    for (id, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.await.unwrap(), id > 4);
    }
}
