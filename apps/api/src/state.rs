use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use crate::analysis::fit_scoring::{FitScorer, OverlapFitScorer};
use crate::analysis::skill_extractor::SkillExtractor;
use crate::analysis::store::AnalysisStore;
use crate::catalog::Catalog;
use crate::config::Config;
use crate::extraction::{DocumentTextExtractor, TextExtractor};

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything except `analyses` is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub catalog: Arc<Catalog>,
    /// Compiled from `catalog.vocabulary` once at startup.
    pub skill_extractor: Arc<SkillExtractor>,
    /// Pluggable fit scorer. Default: OverlapFitScorer.
    pub fit_scorer: Arc<dyn FitScorer>,
    pub text_extractor: Arc<dyn TextExtractor>,
    pub analyses: AnalysisStore,
}

impl AppState {
    /// Loads the catalog, compiles the vocabulary and wires the default collaborators.
    pub fn from_config(config: Config) -> Result<Self> {
        let catalog = Catalog::load(config.catalog_path.as_deref())?;
        let skill_extractor = SkillExtractor::new(&catalog.vocabulary)?;
        info!(
            "Skill extractor compiled ({} patterns)",
            skill_extractor.vocabulary_len()
        );

        Ok(AppState {
            analyses: AnalysisStore::new(config.max_stored_analyses),
            catalog: Arc::new(catalog),
            skill_extractor: Arc::new(skill_extractor),
            fit_scorer: Arc::new(OverlapFitScorer::default()),
            text_extractor: Arc::new(DocumentTextExtractor),
            config,
        })
    }
}
