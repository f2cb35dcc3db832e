mod common;

use chrono::Utc;
use common::MemoryStore;
use invoice_dashboard::models::{ActionOutcome, FormState, InvoiceForm, FIELD_AMOUNT, FIELD_STATUS};
use invoice_dashboard::service::INVOICES_PATH;
use invoice_dashboard::{InvoiceActions, InvoiceStore, ViewCache};
use std::sync::Arc;

struct Harness {
    store: Arc<MemoryStore>,
    cache: Arc<ViewCache>,
    actions: InvoiceActions,
}

fn harness() -> Harness {
    let store = Arc::new(MemoryStore::new());
    let cache = Arc::new(ViewCache::new());
    let actions = InvoiceActions::new(store.clone(), cache.clone());
    Harness { store, cache, actions }
}

fn form_state(outcome: ActionOutcome) -> FormState {
    match outcome {
        ActionOutcome::Form(state) => state,
        ActionOutcome::Redirect(target) => panic!("unexpected redirect to {target}"),
    }
}

#[tokio::test]
async fn create_persists_minor_units_and_today() {
    let h = harness();
    h.cache.insert(INVOICES_PATH, "stale listing");

    let outcome = h.actions.create_invoice(InvoiceForm::new("c1", "10.50", "pending")).await;

    assert_eq!(outcome, ActionOutcome::Redirect(INVOICES_PATH.to_string()));
    let stored = h.store.all();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].amount, 1050);
    assert_eq!(stored[0].date, Utc::now().date_naive());
    assert_eq!(stored[0].date.to_string(), Utc::now().format("%Y-%m-%d").to_string());
    assert!(h.cache.get(INVOICES_PATH).is_none());
}

#[tokio::test]
async fn customer_and_status_read_back_unchanged() {
    let h = harness();

    h.actions.create_invoice(InvoiceForm::new("c2", "7", "paid")).await;

    let stored = h.store.all().remove(0);
    let found = h.store.find(&stored.id).await.unwrap().unwrap();
    assert_eq!(found.customer_id, "c2");
    assert_eq!(found.status, "paid");
    assert_eq!(found.amount, 700);
}

#[tokio::test]
async fn non_positive_amount_never_reaches_the_store() {
    let h = harness();

    for amount in ["0", "-10", "", "zero"] {
        let state = form_state(h.actions.create_invoice(InvoiceForm::new("c1", amount, "paid")).await);
        assert_eq!(state.message.as_deref(), Some("Missing Fields. Failed to create invoice."));
        assert_eq!(
            state.field_errors(FIELD_AMOUNT),
            Some(&["Please enter an amount greater than $0".to_string()][..])
        );
    }

    assert_eq!(h.store.writes(), 0);
    assert_eq!(h.cache.invalidations(), 0);
}

#[tokio::test]
async fn invalid_status_is_reported() {
    let h = harness();

    let state = form_state(h.actions.create_invoice(InvoiceForm::new("c1", "5", "overdue")).await);

    assert_eq!(
        state.field_errors(FIELD_STATUS),
        Some(&["Please select an invoice status.".to_string()][..])
    );
    assert_eq!(h.store.writes(), 0);
}

#[tokio::test]
async fn create_database_failure_returns_message_without_redirect() {
    let h = harness();
    h.store.fail_writes(true);
    h.cache.insert(INVOICES_PATH, "listing");

    let outcome = h.actions.create_invoice(InvoiceForm::new("c1", "10.50", "pending")).await;

    let state = form_state(outcome);
    assert_eq!(state.message.as_deref(), Some("Database Error: Failed to create invoice."));
    assert!(state.errors.is_none());
    assert!(h.cache.get(INVOICES_PATH).is_some());
}

#[tokio::test]
async fn update_changes_row_and_keeps_date() {
    let h = harness();
    h.actions.create_invoice(InvoiceForm::new("c1", "1", "pending")).await;
    let original = h.store.all().remove(0);

    let outcome = h
        .actions
        .update_invoice(&original.id, InvoiceForm::new("c2", "250.75", "paid"))
        .await;

    assert!(outcome.is_redirect());
    let updated = h.store.find(&original.id).await.unwrap().unwrap();
    assert_eq!(updated.customer_id, "c2");
    assert_eq!(updated.amount, 25075);
    assert_eq!(updated.status, "paid");
    assert_eq!(updated.date, original.date);
}

#[tokio::test]
async fn update_uses_update_wording() {
    let h = harness();

    let state = form_state(h.actions.update_invoice("inv-1", InvoiceForm::default()).await);
    assert_eq!(state.message.as_deref(), Some("Missing Fields. Failed to update invoice."));

    let state = form_state(
        h.actions
            .update_invoice("missing", InvoiceForm::new("c1", "5", "paid"))
            .await,
    );
    assert_eq!(state.message.as_deref(), Some("Database Error: Failed to update invoice."));
}

#[tokio::test]
async fn delete_twice_is_quiet_and_invalidates_each_time() {
    let h = harness();
    h.actions.create_invoice(InvoiceForm::new("c1", "3", "paid")).await;
    let id = h.store.all().remove(0).id;
    let before = h.cache.invalidations();

    h.cache.insert(INVOICES_PATH, "listing");
    assert!(h.actions.delete_invoice(&id).await.is_redirect());
    assert!(h.cache.get(INVOICES_PATH).is_none());

    h.cache.insert(INVOICES_PATH, "listing");
    assert!(h.actions.delete_invoice(&id).await.is_redirect());
    assert!(h.cache.get(INVOICES_PATH).is_none());

    assert_eq!(h.cache.invalidations(), before + 2);
    assert!(h.store.all().is_empty());
}

#[tokio::test]
async fn delete_failure_is_surfaced_and_still_invalidates() {
    let h = harness();
    h.store.fail_writes(true);
    h.cache.insert(INVOICES_PATH, "listing");

    let state = form_state(h.actions.delete_invoice("inv-1").await);

    assert_eq!(state.message.as_deref(), Some("Database Error: Failed to delete invoice."));
    assert!(h.cache.get(INVOICES_PATH).is_none());
    assert_eq!(h.cache.invalidations(), 1);
}
