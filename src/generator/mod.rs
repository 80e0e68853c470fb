//! Synthetic invoice generation.
//!
//! The generator owns its randomness source. Seed it for reproducible
//! batches, or draw from OS entropy for a fresh dataset on every run.

pub mod names;

use crate::core::{Category, Invoice, InvoiceStatus};
use chrono::{Datelike, Days, Local, NaiveDate};
use rand::prelude::*;
use rand::rngs::StdRng;
use uuid::{Builder, Uuid};

/// Default number of invoices generated per run.
pub const DEFAULT_BATCH_SIZE: usize = 25;

/// Lowest possible amount due (inclusive).
pub const MIN_AMOUNT: f64 = 100.0;

/// Upper bound of the amount due (exclusive).
pub const MAX_AMOUNT: f64 = 5000.0;

const MIN_CENTS: u32 = 10_000;
const MAX_CENTS: u32 = 500_000;

/// Generator of randomized invoice records.
pub struct InvoiceGenerator<R = StdRng> {
    rng: R,
    reference_date: NaiveDate,
}

impl InvoiceGenerator<StdRng> {
    /// Entropy-seeded generator for the current local month.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy(), Local::now().date_naive())
    }

    /// Reproducible generator for the current local month.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed), Local::now().date_naive())
    }
}

impl<R: Rng> InvoiceGenerator<R> {
    pub fn new(rng: R, reference_date: NaiveDate) -> Self {
        Self {
            rng,
            reference_date,
        }
    }

    /// Pin the month due dates are drawn from.
    pub fn with_reference_date(mut self, reference_date: NaiveDate) -> Self {
        self.reference_date = reference_date;
        self
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    /// First and last day of the reference month.
    pub fn month_bounds(&self) -> (NaiveDate, NaiveDate) {
        let (first, days) = month_of(self.reference_date);
        (first, first + Days::new(u64::from(days - 1)))
    }

    /// Generate one invoice.
    pub fn next_invoice(&mut self) -> Invoice {
        let invoice_id = self.next_id();
        let client_name = names::company_name(&mut self.rng);
        let amount_due = f64::from(self.rng.gen_range(MIN_CENTS..MAX_CENTS)) / 100.0;
        let due_date = self.next_due_date();
        let category = Category::ALL[self.rng.gen_range(0..Category::ALL.len())];
        let status = InvoiceStatus::ALL[self.rng.gen_range(0..InvoiceStatus::ALL.len())];

        Invoice {
            invoice_id,
            client_name,
            amount_due,
            due_date,
            category,
            status,
        }
    }

    /// Generate exactly `count` independent invoices.
    pub fn generate_batch(&mut self, count: usize) -> Vec<Invoice> {
        (0..count).map(|_| self.next_invoice()).collect()
    }

    fn next_id(&mut self) -> Uuid {
        Builder::from_random_bytes(self.rng.r#gen()).into_uuid()
    }

    fn next_due_date(&mut self) -> NaiveDate {
        let (first, days) = month_of(self.reference_date);
        first + Days::new(u64::from(self.rng.gen_range(0..days)))
    }
}

/// First day of the month containing `date`, and the month's length in days.
fn month_of(date: NaiveDate) -> (NaiveDate, u32) {
    let first = date - Days::new(u64::from(date.day0()));
    let days = (29..=31)
        .rev()
        .find(|&day| first.with_day(day).is_some())
        .unwrap_or(28);
    (first, days)
}
