//! Product result grid.

use common::storefront::{Money, ProductCard};
use dioxus::prelude::*;

#[component]
pub fn ProductGrid(products: ReadSignal<Vec<ProductCard>>) -> Element {
    if products.read().is_empty() {
        return rsx! {
            div {
                style: "padding: 40px 0; color:#5F6368; font-size: 18px;",
                "No products match these filters."
            }
        };
    }
    rsx! {
        div {
            id: "x-product-grid",
            style: "
                display: grid;
                grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
                gap: 24px;
                width: 100%;
            ",
            for product in products() {
                ProductCardItem { key: "{product.id}", product }
            }
        }
    }
}

fn format_price(price: &Option<Money>) -> String {
    match price {
        Some(Money { amount, currency_code }) => format!("{} {}", amount, currency_code),
        None => String::new(),
    }
}

#[component]
fn ProductCardItem(product: ReadSignal<ProductCard>) -> Element {
    let ProductCard { title, vendor, price, image_url, .. } = product.read().clone();
    let price = format_price(&price);
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                gap: 6px;
                border-radius: 8px;
                overflow: hidden;
            ",
            if let Some(image_url) = image_url {
                img {
                    src: "{image_url}",
                    alt: "{title}",
                    style: "width: 100%; aspect-ratio: 4 / 5; object-fit: cover; background: #F5F6F8;",
                }
            } else {
                div { style: "width: 100%; aspect-ratio: 4 / 5; background: #F5F6F8;" }
            }
            div { style: "font-size: 16px; font-weight: 500;", "{title}" }
            div { style: "font-size: 14px; color:#5F6368;", "{vendor}" }
            div { style: "font-size: 15px;", "{price}" }
        }
    }
}
