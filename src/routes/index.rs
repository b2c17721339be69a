use axum::{extract::Query, response::Html};
use serde::Deserialize;

use crate::content::{
    self, ALL_CATEGORIES, CONTACT_METHODS, ContactMethod, HERO_STATS, HeroStat, PROFILE,
    PROJECTS, Profile, Project, STATS, Skill, Stat,
};
use crate::error::AppError;
use crate::reveal::{self, Stagger};
use crate::template::{self, filters};

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub profile: &'static Profile,
    pub hero_stats: &'static [HeroStat],
    pub stats: &'static [Stat],
    pub power_level: u32,
    pub categories: Vec<&'static str>,
    pub selected_category: &'static str,
    pub skills: Vec<&'static Skill>,
    pub average_level: u32,
    pub high_rank_count: usize,
    pub projects: &'static [Project],
    pub contact_methods: &'static [ContactMethod],
    pub stats_stagger: Stagger,
    pub skills_stagger: Stagger,
    pub projects_stagger: Stagger,
}

impl IndexTemplate {
    pub fn new(category: Option<&str>) -> Self {
        let categories = content::skill_categories();
        let selected_category = category
            .and_then(|wanted| categories.iter().find(|c| **c == wanted).copied())
            .unwrap_or(ALL_CATEGORIES);

        let values = STATS.iter().map(|stat| stat.value).collect::<Vec<_>>();

        Self {
            profile: &PROFILE,
            hero_stats: HERO_STATS,
            stats: STATS,
            power_level: content::overall_power_level(&values),
            skills: content::filter_skills(Some(selected_category)),
            categories,
            selected_category,
            average_level: content::average_skill_level(),
            high_rank_count: content::high_rank_skill_count(),
            projects: PROJECTS,
            contact_methods: CONTACT_METHODS,
            stats_stagger: reveal::STATS,
            skills_stagger: reveal::SKILLS,
            projects_stagger: reveal::PROJECTS,
        }
    }

    pub fn is_selected(&self, category: &str) -> bool {
        self.selected_category == category
    }

    /// First three contact methods, linked from the footer.
    pub fn footer_links(&self) -> &'static [ContactMethod] {
        &self.contact_methods[..self.contact_methods.len().min(3)]
    }
}

#[derive(Deserialize, Default)]
pub struct IndexQuery {
    pub category: Option<String>,
}

pub async fn page(Query(query): Query<IndexQuery>) -> Result<Html<String>, AppError> {
    template::render(IndexTemplate::new(query.category.as_deref()))
}
