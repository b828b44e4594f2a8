//! Built-in demo snapshot used when no catalog file is configured and by
//! integration tests. Deterministic: ids, order, and prices never change
//! between runs.

use rust_decimal::Decimal;

use crate::domain::product::{Product, ProductId};

fn record(
    id: u64,
    name: &str,
    description: &str,
    category: &str,
    regular: i64,
    sale: Option<i64>,
) -> Product {
    Product {
        id: ProductId(id),
        name: name.to_owned(),
        description: description.to_owned(),
        category: category.to_owned(),
        regular_price: Decimal::from(regular),
        sale_price: sale.map(Decimal::from),
        image: format!("https://cdn.dreamstore.example/posters/{id}.jpg"),
        external_url: format!("https://pay.dreamstore.example/checkout/{id}"),
        button_text: None,
    }
}

pub fn demo_catalog() -> Vec<Product> {
    vec![
        record(
            1,
            "Runway ML Unlimited Plan",
            "Unlimited AI video generations on a shared seat",
            "AI Tools",
            8000,
            Some(1600),
        ),
        record(
            2,
            "ChatGPT Plus Monthly",
            "GPT-4 class access with priority capacity",
            "AI Tools",
            2000,
            Some(399),
        ),
        record(
            3,
            "Perplexity AI Pro Monthly",
            "Pro search with citation-backed answers",
            "AI Tools",
            1800,
            Some(499),
        ),
        record(
            4,
            "Prime Video Yearly (5 Devices)",
            "Full-year streaming on up to five devices",
            "Indian OTT",
            1500,
            Some(649),
        ),
        record(
            5,
            "Netflix Premium 4K",
            "Ultra HD plan, private profile",
            "Indian OTT",
            1199,
            None,
        ),
        record(
            6,
            "Spotify Premium 12 Months",
            "Ad-free listening, offline downloads",
            "International OTT",
            2000,
            Some(850),
        ),
        record(
            7,
            "Adobe Creative Cloud All Apps",
            "Photoshop, Premiere Pro, Illustrator and the rest of the suite",
            "Software",
            4500,
            Some(999),
        ),
        record(
            8,
            "Loom Business + AI Yearly",
            "Screen recording with AI summaries for a year",
            "Software",
            8000,
            Some(3500),
        ),
        record(
            9,
            "CapCut Pro Monthly",
            "Pro export presets and premium effects",
            "Video Editing",
            1100,
            Some(550),
        ),
        record(
            10,
            "Grammarly Premium Yearly",
            "Full grammar, tone, and plagiarism checks",
            "Writing Tools",
            1200,
            Some(600),
        ),
        record(
            11,
            "Ahrefs Lite Shared",
            "Keyword research and backlink audits",
            "SEO",
            3200,
            None,
        ),
        record(
            12,
            "Microsoft 365 Family",
            "Office apps for up to six people",
            "Office Essentials",
            2400,
            Some(1150),
        ),
        record(
            13,
            "Canva Pro Yearly",
            "Brand kits, background remover, premium templates",
            "Cloud Services",
            1500,
            Some(749),
        ),
        record(
            14,
            "Apollo.io Starter",
            "Verified B2B contact credits",
            "Lead Generation",
            2600,
            Some(1300),
        ),
    ]
}
