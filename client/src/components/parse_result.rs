//! Parse Result view: metadata scraped from the submitted product page.

#[cfg(test)]
#[path = "parse_result_test.rs"]
mod parse_result_test;

use leptos::prelude::*;

use crate::net::types::ParsedProduct;
use crate::pages::workflow::Driver;

/// Detail lines shown under the parse result heading.
fn parse_details(product: &ParsedProduct) -> Vec<String> {
    let mut lines = vec![format!("Source: {}", product.source)];
    if let Some(price) = product.display_price() {
        lines.push(format!("Price: {price}"));
    }
    if let Some(discount) = product.display_discount() {
        lines.push(format!("Discount: {discount}%"));
    }
    lines
}

#[component]
pub fn ParseResult() -> impl IntoView {
    let workflow = expect_context::<Driver>().workflow();
    let details = move || workflow.with(|wf| wf.parsed.as_ref().map(parse_details));

    view! {
        {move || {
            details()
                .map(|lines| {
                    view! {
                        <div class="parse-result">
                            <strong>"✅ Product parsed"</strong>
                            {lines.into_iter().map(|line| view! { <div>{line}</div> }).collect_view()}
                        </div>
                    }
                })
        }}
    }
}
