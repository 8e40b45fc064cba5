//! Demo data loaded at startup when `store.seed_demo_data` is set.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use invoicer_core::billing::{BillingRules, LineItemInput, SaveAction};
use invoicer_core::client::{Client, CreateClientInput};
use invoicer_core::invoice::{CreateInvoiceInput, Invoice, InvoiceStatus};
use invoicer_core::product::{CreateProductInput, Product, ProductUnit};
use invoicer_core::quote::{CreateQuoteInput, Quote};
use invoicer_shared::types::ClientId;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::StoreError;

/// Records of the four collections, in display order.
#[derive(Debug, Clone, Default)]
pub struct SeedData {
    /// Clients.
    pub clients: Vec<Client>,
    /// Products.
    pub products: Vec<Product>,
    /// Quotes.
    pub quotes: Vec<Quote>,
    /// Invoices.
    pub invoices: Vec<Invoice>,
}

impl SeedData {
    /// Builds the demo data set.
    ///
    /// # Errors
    ///
    /// Returns an error if a demo record fails validation under `rules`.
    pub fn demo(rules: &BillingRules) -> Result<Self, StoreError> {
        let clients = demo_clients()?;
        let invoices = demo_invoices(rules, &clients)?;
        Ok(Self {
            clients,
            products: demo_products()?,
            quotes: demo_quotes(rules)?,
            invoices,
        })
    }
}

fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, month, day).unwrap_or(NaiveDate::MIN)
}

fn midnight(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

fn text(value: &str) -> Option<String> {
    Some(value.to_string())
}

struct ClientSeed {
    name: &'static str,
    contact: &'static str,
    email: &'static str,
    phone: &'static str,
    address: &'static str,
    total_invoices: u32,
    total_amount: Decimal,
    last_invoice: u32,
    created: u32,
}

fn demo_clients() -> Result<Vec<Client>, StoreError> {
    let seeds = [
        ClientSeed {
            name: "Acme Corp",
            contact: "Jean Dupont",
            email: "contact@acme.com",
            phone: "+33 1 23 45 67 89",
            address: "123 Rue de la Paix\n75001 Paris\nFrance",
            total_invoices: 5,
            total_amount: dec!(12500),
            last_invoice: 15,
            created: 1,
        },
        ClientSeed {
            name: "Tech Solutions",
            contact: "Marie Martin",
            email: "hello@techsolutions.com",
            phone: "+33 1 98 76 54 32",
            address: "456 Avenue des Champs\n75008 Paris\nFrance",
            total_invoices: 3,
            total_amount: dec!(8900),
            last_invoice: 14,
            created: 2,
        },
        ClientSeed {
            name: "Design Studio",
            contact: "Pierre Durand",
            email: "info@designstudio.fr",
            phone: "+33 1 11 22 33 44",
            address: "789 Boulevard Saint-Germain\n75006 Paris\nFrance",
            total_invoices: 7,
            total_amount: dec!(15600),
            last_invoice: 13,
            created: 3,
        },
        ClientSeed {
            name: "Marketing Agency",
            contact: "Sophie Leroy",
            email: "contact@marketing.com",
            phone: "+33 1 55 66 77 88",
            address: "321 Rue de Rivoli\n75004 Paris\nFrance",
            total_invoices: 2,
            total_amount: dec!(4500),
            last_invoice: 10,
            created: 4,
        },
    ];

    seeds
        .into_iter()
        .enumerate()
        .map(|(index, seed)| -> Result<Client, StoreError> {
            let first = index == 0;
            let mut client = Client::create(
                CreateClientInput {
                    name: seed.name.to_string(),
                    contact_name: text(seed.contact),
                    email: seed.email.to_string(),
                    phone: text(seed.phone),
                    address: text(seed.address),
                    siret: first.then(|| "12345678901234".to_string()),
                    vat_number: first.then(|| "FR12345678901".to_string()),
                    notes: first.then(|| "Client fidèle depuis 2023".to_string()),
                },
                midnight(date(1, seed.created)),
            )?;
            client.total_invoices = seed.total_invoices;
            client.total_amount = seed.total_amount;
            client.last_invoice = Some(date(1, seed.last_invoice));
            Ok(client)
        })
        .collect()
}

fn demo_products() -> Result<Vec<Product>, StoreError> {
    let seeds = [
        (
            "Développement site web",
            "Création d'un site web responsive avec CMS",
            dec!(2500),
            "Développement",
            ProductUnit::Project,
            Some("Inclut hébergement première année"),
        ),
        (
            "Consultation stratégique",
            "Audit et conseil en stratégie digitale",
            dec!(150),
            "Conseil",
            ProductUnit::Hour,
            None,
        ),
        (
            "Formation équipe",
            "Formation sur les outils digitaux",
            dec!(300),
            "Formation",
            ProductUnit::Day,
            None,
        ),
        (
            "Maintenance mensuelle",
            "Maintenance et support technique",
            dec!(200),
            "Support",
            ProductUnit::Month,
            None,
        ),
        (
            "Design graphique",
            "Création d'identité visuelle complète",
            dec!(800),
            "Design",
            ProductUnit::Project,
            None,
        ),
    ];

    (1..)
        .zip(seeds)
        .map(|(day, (name, description, price, category, unit, notes))| {
            Product::create(
                CreateProductInput {
                    name: name.to_string(),
                    description: description.to_string(),
                    price,
                    category: category.to_string(),
                    tax_rate: dec!(20),
                    unit,
                    notes: notes.map(ToString::to_string),
                },
                midnight(date(1, day)),
            )
            .map_err(StoreError::from)
        })
        .collect()
}

fn row(description: &str, quantity: Decimal, unit_price: Decimal) -> LineItemInput {
    LineItemInput {
        id: None,
        description: description.to_string(),
        quantity,
        unit_price,
    }
}

fn demo_quotes(rules: &BillingRules) -> Result<Vec<Quote>, StoreError> {
    let quote = Quote::create(
        CreateQuoteInput {
            number: text("DEV-001"),
            client_id: None,
            client_name: "Marketing Pro".to_string(),
            date: Some(date(1, 16)),
            valid_until: Some(date(2, 16)),
            action: SaveAction::Send,
            items: vec![
                row("Consultation stratégique", dec!(1), dec!(1500)),
                row("Développement MVP", dec!(1), dec!(3500)),
            ],
            notes: text("Ce devis est valable 30 jours"),
        },
        rules,
        midnight(date(1, 16)),
    )?;
    Ok(vec![quote])
}

fn client_named(clients: &[Client], name: &str) -> Option<ClientId> {
    clients
        .iter()
        .find(|client| client.name == name)
        .map(|client| client.id)
}

fn demo_invoices(rules: &BillingRules, clients: &[Client]) -> Result<Vec<Invoice>, StoreError> {
    let mut paid = Invoice::create(
        CreateInvoiceInput {
            number: text("INV-001"),
            client_id: client_named(clients, "Acme Corp"),
            client_name: "Acme Corp".to_string(),
            date: Some(date(1, 15)),
            due_date: Some(date(2, 15)),
            action: SaveAction::Send,
            items: vec![row("Développement site web", dec!(1), dec!(2500))],
            notes: text("Paiement à 30 jours"),
        },
        rules,
        midnight(date(1, 15)),
    )?;
    paid.status = InvoiceStatus::Paid;

    let pending = Invoice::create(
        CreateInvoiceInput {
            number: text("INV-002"),
            client_id: client_named(clients, "Tech Solutions"),
            client_name: "Tech Solutions".to_string(),
            date: Some(date(1, 14)),
            due_date: Some(date(2, 14)),
            action: SaveAction::Send,
            items: vec![row("Consultation", dec!(5), dec!(150))],
            notes: None,
        },
        rules,
        midnight(date(1, 14)),
    )?;

    Ok(vec![paid, pending])
}
