//! Home-page brand widget: fetch the catalog once, show 8, expand on demand.
//!
//! SYSTEM CONTEXT
//! ==============
//! The fetch runs once per mount. Failures only reach the log; the widget
//! then renders an empty grid.

use leptos::prelude::*;

use crate::components::brand_card::BrandCard;
use crate::net::api::HttpStoreApi;
use crate::state::brands::BrandsState;
use crate::util::lifetime::Lifetime;

const TITLE_IMAGE: &str = "https://salt.tikicdn.com/ts/upload/33/0f/67/de89fab36546a63a8f3a8b7d038bff81.png";

/// Column spans on a 24-column grid: xl 4, lg 6, md 6, sm 8, xs 12.
const BRAND_COLUMN_CLASS: &str = "grid__col grid__col--xl-4 grid__col--lg-6 grid__col--md-6 grid__col--sm-8 grid__col--xs-12";

#[component]
pub fn BrandWidget() -> impl IntoView {
    let api = expect_context::<HttpStoreApi>();
    let brands = RwSignal::new(BrandsState::default());
    let lifetime = Lifetime::new();
    lifetime.bind_to_owner();

    #[cfg(feature = "hydrate")]
    {
        use crate::util::brand_actions::load_brands;

        leptos::task::spawn_local(async move {
            load_brands(&api, &lifetime, |result| brands.update(|s| s.apply_fetch(result))).await;
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api, lifetime);
    }

    let on_show_more = move |_| brands.update(BrandsState::expand);

    view! {
        <section id="brand-widget" class="brand-widget">
            <header class="brand-widget__header">
                <div class="brand-widget__title">
                    <img class="brand-widget__title-img" src=TITLE_IMAGE alt="brand"/>
                    <span class="brand-widget__title-text">"Genuine Brands"</span>
                </div>
                <a class="brand-widget__see-all" href="/products">"SEE ALL"</a>
            </header>

            <div class="brand-widget__cards grid">
                {move || {
                    brands
                        .get()
                        .visible()
                        .iter()
                        .cloned()
                        .map(|brand| {
                            view! {
                                <div class=BRAND_COLUMN_CLASS>
                                    <BrandCard brand=brand/>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>

            <Show when=move || brands.with(BrandsState::has_more)>
                <div class="brand-widget__more">
                    <button class="btn" on:click=on_show_more>"Show more"</button>
                </div>
            </Show>
        </section>
    }
}
