use chrono::{Duration, NaiveDateTime};
use rand::Rng;

use pharmagen_core::{LineItem, PaymentMethod, Product, Transaction};

use super::{pick, round2};

/// GST applied to sample bills.
pub const BILL_GST_RATE: f64 = 0.12;

const CUSTOMER_NAMES: [&str; 10] = [
    "Rajesh Kumar",
    "Priya Singh",
    "Amit Patel",
    "Sneha Sharma",
    "Vikram Reddy",
    "Anjali Verma",
    "Rohan Joshi",
    "Kavita Nair",
    "Suresh Gupta",
    "Meera Desai",
];

// Cash is three times out of five.
const PAYMENT_METHODS: [PaymentMethod; 5] = [
    PaymentMethod::Cash,
    PaymentMethod::Cash,
    PaymentMethod::Cash,
    PaymentMethod::Upi,
    PaymentMethod::Upi,
];

/// Generate `count` sample bills dated in the 30 days before `now`.
///
/// Line items are drawn from `products` when it is non-empty; otherwise
/// placeholder items with prices between 15 and 500 are used.
pub fn generate_transactions(
    count: usize,
    products: &[Product],
    now: NaiveDateTime,
    rng: &mut impl Rng,
) -> Vec<Transaction> {
    let bill_date = now.format("%Y%m%d").to_string();
    (1..=count)
        .map(|index| generate_transaction(index, &bill_date, products, now, rng))
        .collect()
}

fn generate_transaction(
    index: usize,
    bill_date: &str,
    products: &[Product],
    now: NaiveDateTime,
    rng: &mut impl Rng,
) -> Transaction {
    let num_items = rng.random_range(2..=8);
    let items: Vec<LineItem> = (0..num_items)
        .map(|_| line_item(products, rng))
        .collect();

    let subtotal = round2(items.iter().map(|item| item.total).sum());
    let discount = round2(subtotal * rng.random_range(0.0..0.1));
    let gst_amount = round2((subtotal - discount) * BILL_GST_RATE);
    let total_amount = round2(subtotal - discount + gst_amount);
    let days_ago = rng.random_range(1..=30);

    Transaction {
        id: format!("TXN_{index:06}"),
        bill_number: format!("PHM{bill_date}{index:04}"),
        customer_name: pick(&CUSTOMER_NAMES, rng).to_string(),
        customer_phone: format!("98{}", rng.random_range(10_000_000..=99_999_999u32)),
        items,
        subtotal,
        discount,
        gst_amount,
        total_amount,
        payment_method: *pick(&PAYMENT_METHODS, rng),
        date: now - Duration::days(days_ago),
    }
}

fn line_item(products: &[Product], rng: &mut impl Rng) -> LineItem {
    let (name, price) = if products.is_empty() {
        (
            format!("Product {}", rng.random_range(1..=1000)),
            round2(rng.random_range(15.0..=500.0)),
        )
    } else {
        let product = pick(products, rng);
        (product.name.clone(), product.mrp)
    };
    let quantity: u32 = rng.random_range(1..=3);

    LineItem {
        name,
        quantity,
        price,
        total: round2(price * f64::from(quantity)),
    }
}
