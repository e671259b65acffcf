use chrono::NaiveDate;

use salonkit_core::{ErrorKind, SalonError, TenantContext, TenantService};
use salonkit_store::{resources, Client, ClientStatus, Storage};

/// Test factory functions
fn test_client(name: &str) -> Client {
    Client {
        id: String::new(),
        name: name.to_string(),
        phone: "+221770000000".to_string(),
        registered_on: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        birthday: None,
        status: ClientStatus::New,
        notes: None,
        loyalty_points: 0,
        total_spent: 0.0,
        visit_count: 0,
        last_visit: None,
        referrer_id: None,
        referrals: None,
    }
}

#[tokio::test]
async fn save_then_load_round_trips_one_record() {
    let storage = Storage::in_memory();
    let collection = resources::clients(storage);
    let ctx = TenantContext::for_tenant("salon-a");

    let created = collection.create(&ctx, test_client("Fatou")).await.unwrap();
    assert!(!created.id.is_empty());

    let all = collection.load_all(&ctx, vec![]);
    assert_eq!(all.len(), 1);
    assert_eq!(all[0], created);
}

#[tokio::test]
async fn writes_under_one_tenant_never_affect_another() {
    let storage = Storage::in_memory();
    let collection = resources::clients(storage);
    let a = TenantContext::for_tenant("salon-a");
    let b = TenantContext::for_tenant("salon-b");

    collection.create(&a, test_client("Fatou")).await.unwrap();

    assert_eq!(collection.load_all(&b, vec![]).len(), 0);
    assert_eq!(collection.find(&a).await.unwrap().len(), 1);
}

#[tokio::test]
async fn switching_tenant_reloads_from_the_new_key() {
    // The collection is stateless: the same instance serves both
    // tenants and each call resolves its own key, so no state from the
    // previous tenant can leak into the next one's view.
    let storage = Storage::in_memory();
    let collection = resources::clients(storage);

    let a = TenantContext::for_tenant("salon-a");
    let b = TenantContext::for_tenant("salon-b");

    collection.create(&a, test_client("Awa")).await.unwrap();
    collection.create(&b, test_client("Bintou")).await.unwrap();
    collection.create(&b, test_client("Coumba")).await.unwrap();

    assert_eq!(collection.find(&a).await.unwrap().len(), 1);
    assert_eq!(collection.find(&b).await.unwrap().len(), 2);
    assert_eq!(collection.find(&a).await.unwrap()[0].name, "Awa");
}

#[tokio::test]
async fn first_run_returns_the_fallback() {
    let storage = Storage::in_memory();
    let collection = resources::clients(storage);
    let ctx = TenantContext::for_tenant("fresh-salon");

    let seeded = collection.load_all(&ctx, vec![test_client("Seed")]);
    assert_eq!(seeded.len(), 1);
    assert_eq!(seeded[0].name, "Seed");

    // The fallback is not persisted by load_all itself.
    assert_eq!(collection.find(&ctx).await.unwrap().len(), 0);
}

#[tokio::test]
async fn update_replaces_by_id_and_keeps_the_id() {
    let storage = Storage::in_memory();
    let collection = resources::clients(storage);
    let ctx = TenantContext::for_tenant("salon-a");

    let created = collection.create(&ctx, test_client("Awa")).await.unwrap();

    let mut changed = created.clone();
    changed.visit_count = 3;
    changed.status = ClientStatus::Regular;

    let updated = collection.update(&ctx, &created.id, changed).await.unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.visit_count, 3);

    let fetched = collection.get(&ctx, &created.id).await.unwrap();
    assert_eq!(fetched.status, ClientStatus::Regular);
}

#[tokio::test]
async fn remove_is_a_real_removal() {
    let storage = Storage::in_memory();
    let collection = resources::clients(storage);
    let ctx = TenantContext::for_tenant("salon-a");

    let created = collection.create(&ctx, test_client("Awa")).await.unwrap();
    let removed = collection.remove(&ctx, &created.id).await.unwrap();
    assert_eq!(removed.id, created.id);

    assert_eq!(collection.find(&ctx).await.unwrap().len(), 0);

    // A second remove is NotFound, not a panic.
    let err = collection.remove(&ctx, &created.id).await.unwrap_err();
    assert_eq!(
        SalonError::from_anyhow(&err).map(|e| e.kind),
        Some(ErrorKind::NotFound)
    );
}

#[tokio::test]
async fn dangling_reference_resolves_to_not_found() {
    let storage = Storage::in_memory();
    let collection = resources::clients(storage);
    let ctx = TenantContext::for_tenant("salon-a");

    let err = collection.get(&ctx, "deleted-long-ago").await.unwrap_err();
    let salon = SalonError::from_anyhow(&err).expect("structured error");
    assert_eq!(salon.kind, ErrorKind::NotFound);
}

#[tokio::test]
async fn created_ids_are_unique() {
    let storage = Storage::in_memory();
    let collection = resources::clients(storage);
    let ctx = TenantContext::for_tenant("salon-a");

    let first = collection.create(&ctx, test_client("A")).await.unwrap();
    let second = collection.create(&ctx, test_client("B")).await.unwrap();
    assert_ne!(first.id, second.id);
}
