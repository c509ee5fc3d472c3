use contracts::domain::a003_service::Service;
use contracts::domain::a004_testimonial::Testimonial;
use contracts::domain::a006_project::Project;
use contracts::domain::common::Entity;
use contracts::shared::locale::Locale;
use contracts::shared::translation::{find_translation, resolve_field};
use leptos::prelude::*;

use super::api::public_query;
use super::contact_form::ContactForm;
use crate::layout::global_context::{use_global_context, Section};
use crate::layout::top_header::LocaleSwitcher;
use crate::shared::collection::load_options;
use crate::shared::i18n::Msg;
use crate::shared::icons::{icon, IconName};
use crate::shared::projection::rating_cell;
use crate::shared::services::use_services;

fn service_card(service: &Service, locale: Locale) -> AnyView {
    let description = resolve_field(&service.translations, locale, |t| t.description.as_deref())
        .map(str::to_string);
    let glyph = IconName::from_name(service.icon.as_deref().unwrap_or_default());
    view! {
        <article class="site-card site-card--service">
            <div class="site-card__icon">{icon(glyph)}</div>
            <h3 class="site-card__title">{service.display_name(locale)}</h3>
            {description.map(|d| view! { <p class="site-card__text">{d}</p> })}
        </article>
    }
    .into_any()
}

fn project_card(project: &Project, locale: Locale) -> AnyView {
    let summary = resolve_field(&project.translations, locale, |t| t.summary.as_deref())
        .map(str::to_string);
    let live = project.live_url.clone().filter(|u| !u.trim().is_empty());
    let repo = project.repo_url.clone().filter(|u| !u.trim().is_empty());
    let cover = project.cover_url.clone().filter(|u| !u.trim().is_empty());
    let title = project.display_name(locale);
    view! {
        <article class="site-card site-card--project">
            {cover.map(|src| view! { <img class="site-card__cover" src=src alt=title.clone() loading="lazy" /> })}
            <span class="site-card__tag">{project.project_type.display_name(locale)}</span>
            <h3 class="site-card__title">{title.clone()}</h3>
            {summary.map(|s| view! { <p class="site-card__text">{s}</p> })}
            <div class="site-card__links">
                {live.map(|href| view! {
                    <a href=href target="_blank" rel="noopener">
                        {icon(IconName::ExternalLink)}
                        {Msg::ViewLive.text(locale)}
                    </a>
                })}
                {repo.map(|href| view! {
                    <a href=href target="_blank" rel="noopener">
                        {icon(IconName::Github)}
                        {Msg::SourceCode.text(locale)}
                    </a>
                })}
            </div>
        </article>
    }
    .into_any()
}

fn testimonial_card(testimonial: &Testimonial, locale: Locale) -> AnyView {
    // Quote and position follow the same locale the name was resolved from
    let translation = find_translation(&testimonial.translations, locale)
        .filter(|t| !t.content.trim().is_empty())
        .or_else(|| testimonial.translations.first());
    let content = translation.map(|t| t.content.clone()).unwrap_or_default();
    let position = translation.and_then(|t| t.position.clone());
    let byline = match (position, testimonial.company.clone()) {
        (Some(p), Some(c)) => Some(format!("{}, {}", p, c)),
        (Some(p), None) => Some(p),
        (None, c) => c,
    };
    view! {
        <figure class="site-card site-card--testimonial">
            <div class="site-card__rating">{rating_cell(testimonial.rating).text().to_string()}</div>
            <blockquote class="site-card__text">{content}</blockquote>
            <figcaption>
                <strong>{testimonial.display_name(locale)}</strong>
                {byline.map(|b| view! { <span class="site-card__byline">{b}</span> })}
            </figcaption>
        </figure>
    }
    .into_any()
}

/// Section that disappears while its collection is empty
#[component]
fn SiteSection<E, F>(
    id: &'static str,
    title: Msg,
    items: RwSignal<Vec<E>>,
    card: F,
) -> impl IntoView
where
    E: Send + Sync + 'static,
    F: Fn(&E, Locale) -> AnyView + Copy + Send + Sync + 'static,
{
    let ctx = use_global_context();
    move || {
        let locale = ctx.locale.get();
        items.with(|list| {
            (!list.is_empty()).then(|| {
                let cards = list.iter().map(|item| card(item, locale)).collect_view();
                view! {
                    <section class="site-section" id=id>
                        <h2 class="site-section__title">{title.text(locale)}</h2>
                        <div class="site-grid">{cards}</div>
                    </section>
                }
            })
        })
    }
}

#[component]
pub fn LandingPage() -> impl IntoView {
    let services = use_services();
    let ctx = use_global_context();
    let locale = ctx.locale_signal();

    let featured_services = load_options::<Service>(services.clone(), public_query(true));
    let featured_projects = load_options::<Project>(services.clone(), public_query(true));
    let testimonials = load_options::<Testimonial>(services, public_query(false));

    view! {
        <div class="site">
            <header class="site-header">
                <span class="site-header__brand">{icon(IconName::Code)}</span>
                <nav class="site-header__nav">
                    <a href="#services">{move || Msg::OurServices.text(locale.get())}</a>
                    <a href="#projects">{move || Msg::FeaturedProjects.text(locale.get())}</a>
                    <a href="#contact">{move || Msg::ContactUs.text(locale.get())}</a>
                </nav>
                <LocaleSwitcher />
                <button class="button button--ghost" on:click=move |_| ctx.navigate(Section::Dashboard)>
                    {move || Msg::Admin.text(locale.get())}
                </button>
            </header>

            <section class="site-hero">
                <h1>{move || Msg::HeroTitle.text(locale.get())}</h1>
                <p>{move || Msg::HeroSubtitle.text(locale.get())}</p>
                <a class="button button--primary" href="#contact">
                    {move || Msg::ContactUs.text(locale.get())}
                </a>
            </section>

            <SiteSection id="services" title=Msg::OurServices items=featured_services card=service_card />
            <SiteSection id="projects" title=Msg::FeaturedProjects items=featured_projects card=project_card />
            <SiteSection id="testimonials" title=Msg::Testimonials items=testimonials card=testimonial_card />

            <section class="site-section" id="contact">
                <h2 class="site-section__title">{move || Msg::ContactUs.text(locale.get())}</h2>
                <ContactForm />
            </section>
        </div>
    }
}
