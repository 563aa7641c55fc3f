/// A model listed in the comparison selector. Nothing is trained or scored
/// here; `accuracy` is the figure reported for the model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelEntry {
    pub name: &'static str,
    pub accuracy: f64,
}

pub static MODELS: [ModelEntry; 3] = [
    ModelEntry { name: "Model A", accuracy: 0.85 },
    ModelEntry { name: "Model B", accuracy: 0.82 },
    ModelEntry { name: "Model C", accuracy: 0.78 },
];

pub fn find_model(name: &str) -> Option<&'static ModelEntry> {
    MODELS.iter().find(|m| m.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_model() {
        assert_eq!(find_model("Model B").map(|m| m.accuracy), Some(0.82));
        assert!(find_model("Model D").is_none());
    }
}
