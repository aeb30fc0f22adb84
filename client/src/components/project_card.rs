//! Project card with an image that falls back to a placeholder on load error.

use leptos::prelude::*;
use stage::content::Project;

#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let failed = RwSignal::new(false);
    let Project { title, description, image, tags, .. } = project;
    let alt = title.clone();

    view! {
        <article class="project-card">
            <div class="project-card__media">
                <Show
                    when=move || !failed.get()
                    fallback=|| view! { <div class="project-card__placeholder" aria-hidden="true"></div> }
                >
                    <img
                        class="project-card__image"
                        src=image.clone()
                        alt=alt.clone()
                        loading="lazy"
                        on:error=move |_| failed.set(true)
                    />
                </Show>
            </div>
            <div class="project-card__body">
                <h3 class="project-card__title">{title}</h3>
                <p class="project-card__description">{description}</p>
                <div class="project-card__tags">
                    {tags.into_iter().map(|tag| view! { <span class="project-card__tag">{tag}</span> }).collect_view()}
                </div>
            </div>
        </article>
    }
}
