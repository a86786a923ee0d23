//! View Builder - projects store records into view models
//!
//! Every `LocalizedText` is resolved for the requested language here, so
//! fragments only ever see plain strings. Collection order is the store's.

use pulldown_cmark::{html, Options, Parser};

use crate::content::{ContentStore, EducationEntry, GoalEntry, Language, VolunteerEntry};
use crate::render::page::Page;
use crate::render::view_models::*;

/// Build the section header and projected body for one page.
pub fn build_page_section(page: Page, lang: Language, store: &ContentStore) -> PageSection {
    let body = match page {
        Page::About => PageView::About(build_about(lang, store)),
        Page::Education => PageView::Education(
            store.education.iter().map(|e| education_item(e, lang)).collect(),
        ),
        Page::Skills => PageView::Skills(build_skills(lang, store)),
        Page::Volunteer => PageView::Volunteer(
            store
                .volunteer_work
                .iter()
                .map(|v| volunteer_item(v, lang))
                .collect(),
        ),
        Page::Hobbies => PageView::Hobbies(build_hobbies(lang, store)),
        Page::Goals => PageView::Goals(build_goals(lang, store)),
        Page::Gallery => PageView::Gallery(build_gallery(lang, store)),
        Page::Project => PageView::Project(build_project(lang, store)),
        Page::Evaluations => PageView::Evaluations(build_evaluations(lang, store)),
        Page::Game => PageView::Game,
    };

    PageSection {
        page,
        lang,
        title: page.nav_label(&store.translations.nav).get(lang).to_string(),
        glyph: page.glyph(),
        body,
    }
}

fn build_about(lang: Language, store: &ContentStore) -> AboutView {
    let s = &store.student;
    AboutView {
        name: s.name.clone(),
        grade: s.grade.get(lang).to_string(),
        school: s.school.clone(),
        about: s.about.get(lang).to_string(),
        photo_url: s.photo_url.clone(),
    }
}

fn education_item(entry: &EducationEntry, lang: Language) -> TimelineItem {
    TimelineItem {
        id: entry.id.clone(),
        title: entry.degree.get(lang).to_string(),
        subtitle: entry.institution.get(lang).to_string(),
        period: entry.years.clone(),
        description: None,
    }
}

fn volunteer_item(entry: &VolunteerEntry, lang: Language) -> TimelineItem {
    TimelineItem {
        id: entry.id.clone(),
        title: entry.role.get(lang).to_string(),
        subtitle: entry.organization.get(lang).to_string(),
        period: entry.years.clone(),
        description: entry
            .description
            .as_ref()
            .map(|d| d.get(lang).to_string()),
    }
}

fn build_skills(lang: Language, store: &ContentStore) -> Vec<SkillView> {
    store
        .skills
        .iter()
        .map(|s| SkillView {
            id: s.id.clone(),
            name: s.name.get(lang).to_string(),
            level: s.level,
        })
        .collect()
}

fn build_hobbies(lang: Language, store: &ContentStore) -> Vec<HobbyCard> {
    store
        .hobbies
        .iter()
        .map(|h| HobbyCard {
            id: h.id.clone(),
            name: h.name.get(lang).to_string(),
            glyph: h.icon_kind().map(Glyph::from),
        })
        .collect()
}

fn build_goals(lang: Language, store: &ContentStore) -> GoalsView {
    GoalsView {
        short_term_heading: store.translations.short_term_goals.get(lang).to_string(),
        short_term: goal_items(&store.goals.short_term, lang),
        long_term_heading: store.translations.long_term_goals.get(lang).to_string(),
        long_term: goal_items(&store.goals.long_term, lang),
    }
}

fn goal_items(goals: &[GoalEntry], lang: Language) -> Vec<GoalItem> {
    goals
        .iter()
        .map(|g| GoalItem {
            id: g.id.clone(),
            text: g.text.get(lang).to_string(),
        })
        .collect()
}

fn build_gallery(lang: Language, store: &ContentStore) -> Vec<GalleryItem> {
    store
        .gallery
        .iter()
        .map(|g| GalleryItem {
            id: g.id.clone(),
            url: g.url.clone(),
            caption: g.caption.get(lang).to_string(),
        })
        .collect()
}

fn build_project(lang: Language, store: &ContentStore) -> ProjectView {
    let p = &store.featured_project;
    ProjectView {
        title: p.title.get(lang).to_string(),
        description: p.description.get(lang).to_string(),
        details_html: markdown_to_html(p.details.get(lang)),
        image_url: p.image_url.clone(),
    }
}

fn build_evaluations(lang: Language, store: &ContentStore) -> Vec<EvaluationView> {
    store
        .evaluations
        .iter()
        .map(|e| EvaluationView {
            id: e.id.clone(),
            author: e.author.clone(),
            role: e.role.get(lang).to_string(),
            comment: e.comment.get(lang).to_string(),
        })
        .collect()
}

/// Convert authored Markdown to an HTML fragment.
pub fn markdown_to_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, Options::ENABLE_STRIKETHROUGH);
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}
