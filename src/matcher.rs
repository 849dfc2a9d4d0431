use crate::catalog::Catalog;
use crate::model::{GenerationRequest, RecipeTemplate};
use crate::random::RandomSource;
use log::{debug, info, warn};

/// Points for a single-word keyword found in the prompt
pub const WORD_SCORE: u32 = 1;
/// Points for a multi-word keyword found in the prompt
pub const PHRASE_SCORE: u32 = 3;
/// Points for a template in the requested cuisine's affinity set
pub const CUISINE_BONUS: u32 = 2;

/// How a template was chosen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchStrategy {
    /// Highest keyword (plus cuisine) score
    Keyword,
    /// No score; drawn from the named fallback category
    Category(String),
    /// No score and no category cue; drawn from the whole catalog
    Random,
}

#[derive(Debug, Clone)]
pub struct MatchOutcome<'a> {
    pub template: &'a RecipeTemplate,
    pub score: u32,
    pub strategy: MatchStrategy,
}

/// Scores prompts against a catalog. Holds only a shared borrow, so any
/// number of matchers can run over the same catalog at once.
#[derive(Debug, Clone, Copy)]
pub struct TemplateMatcher<'a> {
    catalog: &'a Catalog,
}

impl<'a> TemplateMatcher<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Keyword points only. `prompt` must already be lowercased.
    pub fn keyword_score(&self, template: &RecipeTemplate, prompt: &str) -> u32 {
        template
            .keywords
            .iter()
            .filter(|keyword| !keyword.is_empty())
            .filter(|keyword| prompt.contains(keyword.to_lowercase().as_str()))
            .map(|keyword| {
                if keyword.contains(' ') {
                    PHRASE_SCORE
                } else {
                    WORD_SCORE
                }
            })
            .sum()
    }

    /// `cuisine` must already be lowercased
    pub fn cuisine_bonus(&self, template: &RecipeTemplate, cuisine: Option<&str>) -> u32 {
        match cuisine {
            Some(cuisine) if self.catalog.affinity_for(cuisine).contains(&template.id) => {
                CUISINE_BONUS
            }
            _ => 0,
        }
    }

    /// Keyword points plus cuisine bonus. `prompt` and `cuisine` must
    /// already be lowercased.
    pub fn score(&self, template: &RecipeTemplate, prompt: &str, cuisine: Option<&str>) -> u32 {
        self.keyword_score(template, prompt) + self.cuisine_bonus(template, cuisine)
    }

    /// Total scores for every template, in catalog order
    pub fn scores(&self, request: &GenerationRequest) -> Vec<u32> {
        let prompt = request.prompt_text.to_lowercase();
        let cuisine = request.cuisine.as_deref().map(str::to_lowercase);

        self.catalog
            .templates()
            .iter()
            .map(|template| self.score(template, &prompt, cuisine.as_deref()))
            .collect()
    }

    /// Pick exactly one template for the request. Only the fallback draws
    /// from `rng`, and the fallback runs whenever no keyword matched at
    /// all: the cuisine bonus re-ranks keyword matches but never selects
    /// on its own.
    pub fn select(
        &self,
        request: &GenerationRequest,
        rng: &mut dyn RandomSource,
    ) -> MatchOutcome<'a> {
        let templates = self.catalog.templates();
        let prompt = request.prompt_text.to_lowercase();
        let cuisine = request.cuisine.as_deref().map(str::to_lowercase);

        let mut any_keyword = false;
        let scores: Vec<u32> = templates
            .iter()
            .map(|template| {
                let keyword_score = self.keyword_score(template, &prompt);
                any_keyword |= keyword_score > 0;
                keyword_score + self.cuisine_bonus(template, cuisine.as_deref())
            })
            .collect();

        // Strictly greater keeps the first maximal template on ties
        let mut best: Option<(usize, u32)> = None;
        if any_keyword {
            for (index, &score) in scores.iter().enumerate() {
                if score > best.map_or(0, |(_, s)| s) {
                    best = Some((index, score));
                }
            }
        }

        if let Some((index, score)) = best {
            debug!("Template scores: {:?}", scores);
            info!(
                "Selected template '{}' with score {}",
                templates[index].id, score
            );
            return MatchOutcome {
                template: &templates[index],
                score,
                strategy: MatchStrategy::Keyword,
            };
        }

        if request.cuisine.is_some() {
            warn!("No keyword match; requested cuisine is not used by the fallback");
        }

        for rule in self.catalog.categories() {
            if !rule.is_cued_by(&prompt) {
                continue;
            }

            let members: Vec<usize> = rule
                .members
                .iter()
                .filter_map(|id| self.catalog.position(id))
                .collect();
            if members.is_empty() {
                continue;
            }

            let index = members[rng.pick(members.len())];
            info!(
                "No keyword match; picked '{}' from category '{}'",
                templates[index].id, rule.name
            );
            return MatchOutcome {
                template: &templates[index],
                score: 0,
                strategy: MatchStrategy::Category(rule.name.clone()),
            };
        }

        let index = rng.pick(templates.len());
        warn!(
            "No keyword or category match; picked '{}' at random",
            templates[index].id
        );
        MatchOutcome {
            template: &templates[index],
            score: 0,
            strategy: MatchStrategy::Random,
        }
    }
}
