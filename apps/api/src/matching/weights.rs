/// Point allocation for the four score components. Defaults sum to 100.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringWeights {
    pub skill_overlap: f64,
    /// Profile tier at or above the role tier.
    pub experience_match: f64,
    pub experience_one_below: f64,
    pub experience_far_below: f64,
    pub breadth: f64,
    /// Skill count at which the breadth component saturates.
    pub breadth_saturation: usize,
    pub depth_high: f64,
    pub depth_high_ratio: f64,
    pub depth_mid: f64,
    pub depth_mid_ratio: f64,
    /// Minimum score once at least one requirement is matched.
    pub floor: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skill_overlap: 40.0,
            experience_match: 30.0,
            experience_one_below: 20.0,
            experience_far_below: 10.0,
            breadth: 20.0,
            breadth_saturation: 10,
            depth_high: 10.0,
            depth_high_ratio: 0.8,
            depth_mid: 5.0,
            depth_mid_ratio: 0.5,
            floor: 25.0,
        }
    }
}
