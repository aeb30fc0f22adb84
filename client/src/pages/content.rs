//! Content screen: header toggle plus the routed showcase view.

use leptos::prelude::*;
use stage::engine::Engine;

use crate::components::showcase::ShowcaseView;
use crate::components::site_header::SiteHeader;

#[component]
pub fn ContentPage() -> impl IntoView {
    let engine = expect_context::<RwSignal<Engine>>();
    let mounted = Memo::new(move |_| engine.with(|e| e.router().mounted()));
    let leaving = Memo::new(move |_| engine.with(|e| e.router().leaving()));

    view! {
        <div class="content">
            <SiteHeader />
            <div class="content__views">
                {move || leaving.get().map(|content| view! { <ShowcaseView content=content leaving=true /> })}
                {move || mounted.get().map(|content| view! { <ShowcaseView content=content /> })}
            </div>
        </div>
    }
}
