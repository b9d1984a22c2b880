/// Query tokens shorter than this are dropped during expansion and
/// suggestion filtering.
pub const MIN_TOKEN_LEN: usize = 3;

/// Cap on the expanded term set; bounds per-entry scoring cost.
pub const MAX_EXPANDED_TERMS: usize = 24;

/// Cap on fuzzy candidates handed to the merger.
pub const MAX_FUZZY_CANDIDATES: usize = 50;

/// Cap on the merged result list.
pub const MAX_RESULTS: usize = 60;

/// Score contributed by each expanded term found in an entry's searchable
/// text. Direct hits dominate; doc quality is only a tie-breaker.
pub const DIRECT_HIT_WEIGHT: f32 = 20.0;

/// Minimum keyword score for the primary pool. One direct hit (20) plus any
/// doc-score tie-breaker clears it; doc score alone (max 10) never does.
pub const KEYWORD_SCORE_FLOOR: f32 = 15.0;

/// Fuzzy fallback kicks in when the primary pool is smaller than this.
pub const FUZZY_TRIGGER_MIN: usize = 12;

/// Flat score increment applied by the semantic booster.
pub const SEMANTIC_BOOST: f32 = 5.0;

/// Tuning knobs for the ranking pipeline. Defaults reproduce the documented
/// behavior; tests may shrink the caps to exercise edge paths.
#[derive(Clone, Debug)]
pub struct SearchConfig {
    pub max_results: usize,
    pub max_fuzzy_candidates: usize,
    pub keyword_score_floor: f32,
    pub fuzzy_trigger_min: usize,
    pub semantic_boost: f32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: MAX_RESULTS,
            max_fuzzy_candidates: MAX_FUZZY_CANDIDATES,
            keyword_score_floor: KEYWORD_SCORE_FLOOR,
            fuzzy_trigger_min: FUZZY_TRIGGER_MIN,
            semantic_boost: SEMANTIC_BOOST,
        }
    }
}
