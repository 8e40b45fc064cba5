//! Integration tests for the quote and invoice repositories.

use chrono::Utc;
use invoicer_core::billing::{BillingRules, LineItemInput, SaveAction};
use invoicer_core::invoice::{
    CreateInvoiceInput, InvoiceFilter, InvoiceStatus, UpdateInvoiceInput,
};
use invoicer_core::quote::{CreateQuoteInput, QuoteFilter, QuoteStatus, UpdateQuoteInput};
use invoicer_shared::{BillingConfig, StoreConfig};
use invoicer_shared::types::{ClientId, QuoteId};
use invoicer_store::{SimulatedLatency, Store, StoreError};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn row(description: &str, quantity: Decimal, unit_price: Decimal) -> LineItemInput {
    LineItemInput {
        id: None,
        description: description.to_string(),
        quantity,
        unit_price,
    }
}

fn reference_rows() -> Vec<LineItemInput> {
    vec![
        row("Développement", dec!(2), dec!(100)),
        row("Hébergement", dec!(1), dec!(50)),
        row("Support", dec!(5), dec!(20)),
    ]
}

fn quote_input() -> CreateQuoteInput {
    CreateQuoteInput {
        client_id: Some(ClientId::new()),
        client_name: "Marketing Pro".to_string(),
        items: reference_rows(),
        notes: Some("Ce devis est valable 30 jours".to_string()),
        ..CreateQuoteInput::default()
    }
}

#[tokio::test]
async fn test_quote_totals_are_computed_server_side() {
    let store = Store::empty(BillingRules::default());

    let quote = store.quotes.create(quote_input()).await.unwrap();

    assert_eq!(quote.lines.totals.subtotal, dec!(350));
    assert_eq!(quote.lines.totals.tax_amount, dec!(70));
    assert_eq!(quote.lines.totals.total, dec!(420));
    assert_eq!(quote.status, QuoteStatus::Draft);
}

#[tokio::test]
async fn test_quote_update_reprices_and_keeps_other_fields() {
    let store = Store::empty(BillingRules::default());
    let quote = store.quotes.create(quote_input()).await.unwrap();

    let updated = store
        .quotes
        .update(
            quote.id,
            UpdateQuoteInput {
                items: Some(vec![row("Développement", dec!(3), dec!(100))]),
                ..UpdateQuoteInput::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.lines.totals.total, dec!(360));
    assert_eq!(updated.number, quote.number);
    assert_eq!(updated.notes, quote.notes);
    assert_eq!(updated.created_at, quote.created_at);
}

#[tokio::test]
async fn test_quote_list_filters() {
    let store = Store::empty(BillingRules::default());
    store.quotes.create(quote_input()).await.unwrap();
    store
        .quotes
        .create(CreateQuoteInput {
            client_name: "Startup Inc".to_string(),
            action: SaveAction::Send,
            ..quote_input()
        })
        .await
        .unwrap();

    let sent = store
        .quotes
        .list(&QuoteFilter::new(None, Some(QuoteStatus::Sent)))
        .await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].client_name, "Startup Inc");

    let searched = store
        .quotes
        .list(&QuoteFilter::new(Some("marketing"), None))
        .await;
    assert_eq!(searched.len(), 1);
}

#[tokio::test]
async fn test_convert_to_invoice_copies_and_leaves_quote_unchanged() {
    let store = Store::empty(BillingRules::default());
    let quote = store.quotes.create(quote_input()).await.unwrap();

    let input = store.quotes.convert_to_invoice(quote.id).await.unwrap();

    let number = input.number.clone().unwrap();
    let millis = number.strip_prefix("INV-").unwrap();
    assert!(millis.len() >= 13 && millis.chars().all(|c| c.is_ascii_digit()));
    assert_eq!(input.client_id, quote.client_id);
    assert_eq!(input.client_name, quote.client_name);
    assert_eq!(input.notes, quote.notes);
    assert_eq!(input.date, Some(Utc::now().date_naive()));

    let invoice = store.invoices.create(input).await.unwrap();
    assert_eq!(invoice.status, InvoiceStatus::Draft);
    assert_eq!(invoice.lines.totals, quote.lines.totals);
    assert_eq!(invoice.lines.items.len(), 3);

    assert_eq!(store.quotes.get(quote.id).await, Some(quote));
}

#[tokio::test]
async fn test_numbers_use_configured_prefixes() {
    let config = BillingConfig {
        invoice_prefix: "FAC".to_string(),
        quote_prefix: "DEVIS".to_string(),
        ..BillingConfig::default()
    };
    let store = Store::empty(BillingRules::from_config(&config).unwrap());

    let quote = store.quotes.create(quote_input()).await.unwrap();
    assert!(quote.number.starts_with("DEVIS-"));

    let input = store.quotes.convert_to_invoice(quote.id).await.unwrap();
    assert!(input.number.as_deref().is_some_and(|n| n.starts_with("FAC-")));
    assert!(store.invoice_draft(None).await.number.starts_with("FAC-"));
}

#[tokio::test]
async fn test_convert_unknown_quote_is_none() {
    let store = Store::empty(BillingRules::default());
    assert!(store.quotes.convert_to_invoice(QuoteId::new()).await.is_none());
}

#[tokio::test]
async fn test_invoice_send_action_and_status_update() {
    let store = Store::empty(BillingRules::default());
    let invoice = store
        .invoices
        .create(CreateInvoiceInput {
            client_name: "Acme Corp".to_string(),
            action: SaveAction::Send,
            items: reference_rows(),
            ..CreateInvoiceInput::default()
        })
        .await
        .unwrap();
    assert_eq!(invoice.status, InvoiceStatus::Pending);

    let paid = store
        .invoices
        .update(
            invoice.id,
            UpdateInvoiceInput {
                status: Some(InvoiceStatus::Paid),
                ..UpdateInvoiceInput::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(paid.status, InvoiceStatus::Paid);
    assert_eq!(paid.lines, invoice.lines);

    let listed = store
        .invoices
        .list(&InvoiceFilter::new(None, Some(InvoiceStatus::Paid)))
        .await;
    assert_eq!(listed.len(), 1);
}

#[tokio::test]
async fn test_invoice_validation_errors() {
    let store = Store::empty(BillingRules::default());

    let result = store
        .invoices
        .create(CreateInvoiceInput {
            client_name: "Acme Corp".to_string(),
            ..CreateInvoiceInput::default()
        })
        .await;

    assert!(matches!(result, Err(StoreError::Billing(_))));
    assert!(store.invoices.all().await.is_empty());
}

#[tokio::test]
async fn test_client_stats_and_draft_preselection() {
    let store = Store::empty(BillingRules::default());
    let client = store
        .clients
        .create(invoicer_core::client::CreateClientInput {
            name: "Acme Corp".to_string(),
            email: "contact@acme.com".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();
    store
        .invoices
        .create(CreateInvoiceInput {
            client_id: Some(client.id),
            client_name: client.name.clone(),
            action: SaveAction::Send,
            items: reference_rows(),
            ..CreateInvoiceInput::default()
        })
        .await
        .unwrap();

    let stats = store.client_stats(client.id).await.unwrap();
    assert_eq!(stats.total_invoices, 1);
    assert_eq!(stats.total_amount, dec!(420));
    assert_eq!(stats.outstanding_amount, dec!(420));
    let missing = ClientId::new();
    assert_eq!(
        store.client_stats(missing).await,
        Err(StoreError::not_found("client", missing))
    );

    let draft = store.invoice_draft(Some(client.id)).await;
    assert_eq!(draft.client_name, "Acme Corp");
    let unknown = store.invoice_draft(Some(ClientId::new())).await;
    assert!(unknown.client_id.is_none());
}

#[tokio::test]
async fn test_seeded_store_dashboard() {
    let store = Store::from_config(&StoreConfig::default(), BillingRules::default()).unwrap();

    let metrics = store
        .dashboard(chrono::NaiveDate::from_ymd_opt(2024, 1, 20).unwrap())
        .await
        .unwrap();

    assert_eq!(metrics.client_count, 4);
    assert_eq!(metrics.product_count, 5);
    assert_eq!(metrics.invoices_this_month, 2);
    assert_eq!(metrics.revenue_this_month.amount, dec!(3000));
    assert_eq!(metrics.recent_quotes.len(), 1);
    assert_eq!(metrics.recent_invoices[0].number, "INV-001");
}

#[tokio::test(start_paused = true)]
async fn test_document_creation_waits_twice_the_base_latency() {
    let store = Store::with_data(
        invoicer_store::SeedData::default(),
        BillingRules::default(),
        SimulatedLatency::from_millis(500),
    );
    let start = tokio::time::Instant::now();

    store.quotes.create(quote_input()).await.unwrap();

    assert!(start.elapsed() >= std::time::Duration::from_millis(1000));
}
