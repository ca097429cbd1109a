//! Fixed-size brand tile used by the brand widget grid.

#[cfg(test)]
#[path = "brand_card_test.rs"]
mod brand_card_test;

use leptos::prelude::*;

use crate::net::types::Brand;

/// Link target for a brand's product listing.
pub fn brand_href(brand: &Brand) -> String {
    let key = brand.slug.as_deref().unwrap_or(&brand.id);
    format!("/products?brand={key}")
}

#[component]
pub fn BrandCard(brand: Brand) -> impl IntoView {
    let href = brand_href(&brand);
    let Brand { name, image, .. } = brand;
    let alt = name.clone();

    view! {
        <a class="brand-card" href=href>
            <div class="brand-card__logo">
                {image.map(|src| view! { <img src=src alt=alt loading="lazy"/> })}
            </div>
            <div class="brand-card__name">{name}</div>
        </a>
    }
}
