//! Size accounting for a finished compression run.

use crate::blueprint::Blueprint;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlueprintStats {
    pub original_chars: usize,
    pub blueprint_chars: usize,
    pub key_chars: usize,
    pub remnant_chars: usize,
    pub lines: usize,
    /// Percentage saved; negative when the blueprint is larger.
    pub reduction: f64,
}

impl BlueprintStats {
    pub fn measure(blueprint: &Blueprint) -> Self {
        let original_chars = blueprint.original_length;
        let blueprint_chars = blueprint.encode().chars().count();
        let reduction = if original_chars == 0 {
            0.0
        } else {
            (1.0 - blueprint_chars as f64 / original_chars as f64) * 100.0
        };
        Self {
            original_chars,
            blueprint_chars,
            key_chars: blueprint.key_text().chars().count(),
            remnant_chars: blueprint.remnant.chars().count(),
            lines: blueprint.key.len(),
            reduction,
        }
    }

    pub fn report(&self) {
        eprintln!("Compression complete!");
        eprintln!("Input: {} characters", self.original_chars);
        eprintln!(
            "Output: {} characters (key: {}, remnant: {}, lines: {})",
            self.blueprint_chars, self.key_chars, self.remnant_chars, self.lines
        );
        eprintln!("Reduction: {:.2}%", self.reduction);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measures_sizes() {
        let bp = Blueprint::decode("40¬(q,20,0,0,0,19)‡rrrrrrrrrrrrrrrrrrrr").unwrap();
        let stats = BlueprintStats::measure(&bp);
        assert_eq!(stats.original_chars, 40);
        assert_eq!(stats.key_chars, 15);
        assert_eq!(stats.remnant_chars, 20);
        assert_eq!(stats.blueprint_chars, 2 + 1 + 15 + 1 + 20);
        assert_eq!(stats.lines, 1);
        assert!((stats.reduction - (1.0 - 39.0 / 40.0) * 100.0).abs() < 1e-9);
    }

    #[test]
    fn empty_input_has_zero_reduction() {
        let stats = BlueprintStats::measure(&Blueprint::default());
        assert_eq!(stats.original_chars, 0);
        assert_eq!(stats.reduction, 0.0);
    }
}
