//! Static challenge catalog.
//!
//! The catalog is an immutable, ordered list loaded once per process. The
//! built-in list is embedded from `challenges.json`; a custom file with the
//! same schema can replace it.

use std::path::Path;

use rand::Rng;

use super::Challenge;
use crate::error::{CoreError, Result, ValidationError};

const BUILTIN_CATALOG: &str = include_str!("../../challenges.json");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChallengeCatalog {
    challenges: Vec<Challenge>,
}

impl ChallengeCatalog {
    /// Build a catalog from a list of challenges.
    ///
    /// # Errors
    /// Rejects an empty list and any challenge with a zero reward.
    pub fn new(challenges: Vec<Challenge>) -> Result<Self, ValidationError> {
        if challenges.is_empty() {
            return Err(ValidationError::EmptyCollection("challenge catalog".into()));
        }
        if let Some(pos) = challenges.iter().position(|c| c.amount == 0) {
            return Err(ValidationError::InvalidValue {
                field: format!("challenges[{pos}].amount"),
                message: "amount must be positive".into(),
            });
        }
        Ok(Self { challenges })
    }

    /// The catalog shipped with the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Parse a JSON array of `{ "type", "description", "amount" }` records.
    pub fn from_json(json: &str) -> Result<Self> {
        let challenges: Vec<Challenge> = serde_json::from_str(json)?;
        Ok(Self::new(challenges)?)
    }

    /// Load a catalog file from disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content).map_err(|e| match e {
            CoreError::Json(err) => {
                CoreError::Custom(format!("invalid catalog {}: {err}", path.display()))
            }
            other => other,
        })
    }

    pub fn get(&self, index: usize) -> Option<&Challenge> {
        self.challenges.get(index)
    }

    pub fn size(&self) -> usize {
        self.challenges.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Challenge> {
        self.challenges.iter()
    }

    /// Whether `challenge` is present at `index`.
    pub fn contains_at(&self, index: usize, challenge: &Challenge) -> bool {
        self.get(index) == Some(challenge)
    }

    /// Pick a uniformly random entry.
    ///
    /// Returns `None` only for an empty catalog, which `new` never builds.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<(usize, &Challenge)> {
        if self.challenges.is_empty() {
            return None;
        }
        let index = rng.gen_range(0..self.challenges.len());
        Some((index, &self.challenges[index]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::challenge::ChallengeKind;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    #[test]
    fn builtin_catalog_parses() {
        let catalog = ChallengeCatalog::builtin().unwrap();
        assert!(catalog.size() > 0);
        assert!(catalog.iter().all(|c| c.amount > 0));
    }

    #[test]
    fn empty_catalog_is_rejected() {
        let err = ChallengeCatalog::new(Vec::new()).unwrap_err();
        assert!(matches!(err, ValidationError::EmptyCollection(_)));
    }

    #[test]
    fn zero_amount_is_rejected() {
        let err = ChallengeCatalog::new(vec![
            Challenge::new(ChallengeKind::Body, "Walk", 10),
            Challenge::new(ChallengeKind::Eye, "Blink", 0),
        ])
        .unwrap_err();
        match err {
            ValidationError::InvalidValue { field, .. } => assert_eq!(field, "challenges[1].amount"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn from_json_reads_type_field() {
        let catalog = ChallengeCatalog::from_json(
            r#"[{"type":"eye","description":"Look away","amount":50}]"#,
        )
        .unwrap();
        assert_eq!(catalog.size(), 1);
        assert_eq!(catalog.get(0).unwrap().kind, ChallengeKind::Eye);
        assert!(catalog.get(1).is_none());
    }

    #[test]
    fn from_path_reports_file_on_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{not json").unwrap();
        let err = ChallengeCatalog::from_path(&path).unwrap_err();
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn pick_covers_every_index() {
        let catalog = ChallengeCatalog::new(vec![
            Challenge::new(ChallengeKind::Body, "a", 1),
            Challenge::new(ChallengeKind::Body, "b", 2),
            Challenge::new(ChallengeKind::Eye, "c", 3),
            Challenge::new(ChallengeKind::Eye, "d", 4),
        ])
        .unwrap();
        let mut rng = Pcg64::seed_from_u64(7);
        let mut seen = [false; 4];
        for _ in 0..1_000 {
            let (index, challenge) = catalog.pick(&mut rng).unwrap();
            assert!(catalog.contains_at(index, challenge));
            seen[index] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}
