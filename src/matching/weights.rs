/// Fit score weights: domain relevance dominates, skill overlap is
/// secondary. Title/domain agreement is a far stronger fit signal than a
/// keyword skill list, which is noisy across providers.
pub const FIT_WEIGHTS: FitWeights = FitWeights {
    domain: 0.7,
    skills: 0.3,
};

#[derive(Debug, Clone, Copy)]
pub struct FitWeights {
    pub domain: f64,
    pub skills: f64,
}

impl FitWeights {
    pub fn sum(&self) -> f64 {
        self.domain + self.skills
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_to_one() {
        assert!((FIT_WEIGHTS.sum() - 1.0).abs() < 1e-6);
    }
}
