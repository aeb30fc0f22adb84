//! One content view: heading, intro, project grid and highlight cards.

use leptos::prelude::*;
use stage::content::{Catalogue, Showcase};
use stage::router::ContentView;

use crate::components::project_card::ProjectCard;
use crate::state::view::icon_glyph;

#[component]
pub fn ShowcaseView(content: ContentView, #[prop(optional)] leaving: bool) -> impl IntoView {
    let catalogue = expect_context::<Catalogue>();
    let Showcase { title, icon, intro, projects, highlights } = catalogue.showcase(content).clone();

    view! {
        <section
            class="showcase"
            class:showcase--leaving=leaving
            data-view=content.mode().slug()
            aria-hidden=leaving.to_string()
        >
            <header class="showcase__intro">
                <h2 class="showcase__title">
                    <span class="showcase__icon">{icon_glyph(&icon)}</span>
                    {title}
                </h2>
                <p>{intro}</p>
            </header>
            <div class="showcase__projects">
                {projects.into_iter().map(|project| view! { <ProjectCard project=project /> }).collect_view()}
            </div>
            <div class="showcase__highlights">
                {highlights
                    .into_iter()
                    .map(|h| {
                        view! {
                            <div class="highlight">
                                <span class="highlight__icon">{icon_glyph(&h.icon)}</span>
                                <h3>{h.title}</h3>
                                <p>{h.body}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
