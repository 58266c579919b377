use std::collections::HashMap;

use crate::models::LanguageShare;

pub const OTHER_LANGUAGE: &str = "Other";

#[derive(Debug, Default, Clone)]
pub struct LanguageTally {
    bytes: HashMap<String, u64>,
    total: u64,
}

impl LanguageTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_repository(&mut self, languages: &HashMap<String, u64>) {
        for (language, bytes) in languages {
            *self.bytes.entry(language.clone()).or_insert(0) += bytes;
            self.total += bytes;
        }
    }

    pub fn total_bytes(&self) -> u64 {
        self.total
    }

    pub fn bytes_for(&self, language: &str) -> u64 {
        self.bytes.get(language).copied().unwrap_or(0)
    }

    /// Shares of the accumulated total, largest first.
    ///
    /// With `limit = Some(n)` and more than `n` languages, the first `n - 1`
    /// are kept and the rest are folded into [`OTHER_LANGUAGE`], so the
    /// result still sums to 1.0. A zero total yields no shares.
    pub fn shares(&self, limit: Option<usize>) -> Vec<LanguageShare> {
        if self.total == 0 {
            return Vec::new();
        }

        let mut entries: Vec<(String, u64)> = self
            .bytes
            .iter()
            .filter(|(_, bytes)| **bytes > 0)
            .map(|(name, bytes)| (name.clone(), *bytes))
            .collect();
        sort_largest_first(&mut entries);

        if let Some(limit) = limit {
            if limit == 0 {
                return Vec::new();
            }
            if entries.len() > limit {
                let tail: u64 = entries.drain(limit - 1..).map(|(_, bytes)| bytes).sum();
                match entries.iter_mut().find(|(name, _)| name == OTHER_LANGUAGE) {
                    Some((_, bytes)) => *bytes += tail,
                    None => entries.push((OTHER_LANGUAGE.to_string(), tail)),
                }
                sort_largest_first(&mut entries);
            }
        }

        let total = self.total as f64;
        entries
            .into_iter()
            .map(|(name, bytes)| LanguageShare {
                name,
                percentage: bytes as f64 / total,
            })
            .collect()
    }
}

fn sort_largest_first(entries: &mut [(String, u64)]) {
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(pairs: &[(&str, u64)]) -> HashMap<String, u64> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    fn sum(shares: &[LanguageShare]) -> f64 {
        shares.iter().map(|s| s.percentage).sum()
    }

    #[test]
    fn test_two_repositories_merge() {
        let mut tally = LanguageTally::new();
        tally.add_repository(&repo(&[("JavaScript", 300), ("TypeScript", 100)]));
        tally.add_repository(&repo(&[("JavaScript", 100)]));

        assert_eq!(tally.bytes_for("JavaScript"), 400);
        assert_eq!(tally.total_bytes(), 500);

        let shares = tally.shares(Some(5));
        assert_eq!(shares.len(), 2);
        assert_eq!(shares[0].name, "JavaScript");
        assert!((shares[0].percentage - 0.8).abs() < 1e-9);
        assert_eq!(shares[1].name, "TypeScript");
        assert!((shares[1].percentage - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_zero_total_yields_empty() {
        let mut tally = LanguageTally::new();
        assert!(tally.shares(Some(5)).is_empty());

        tally.add_repository(&repo(&[("Rust", 0)]));
        assert!(tally.shares(None).is_empty());
    }

    #[test]
    fn test_capped_shares_fold_tail_and_sum_to_one() {
        let mut tally = LanguageTally::new();
        tally.add_repository(&repo(&[
            ("Rust", 510),
            ("Go", 300),
            ("Python", 100),
            ("Shell", 50),
            ("Nix", 20),
            ("Makefile", 15),
            ("Dockerfile", 5),
        ]));

        let shares = tally.shares(Some(5));
        assert_eq!(shares.len(), 5);
        assert!((sum(&shares) - 1.0).abs() < 1e-6);

        let names: Vec<_> = shares.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Rust", "Go", "Python", "Shell", "Other"]);
        assert!((shares[4].percentage - 0.04).abs() < 1e-9);

        for pair in shares.windows(2) {
            assert!(pair[0].percentage >= pair[1].percentage);
        }
    }

    #[test]
    fn test_other_is_resorted_when_large() {
        let mut tally = LanguageTally::new();
        tally.add_repository(&repo(&[
            ("A", 100),
            ("B", 40),
            ("C", 30),
            ("D", 30),
        ]));

        let shares = tally.shares(Some(2));
        let names: Vec<_> = shares.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["A", "Other"]);
        assert!((shares[0].percentage - 0.5).abs() < 1e-9);
        assert!((shares[1].percentage - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_uncapped_keeps_every_language() {
        let mut tally = LanguageTally::new();
        tally.add_repository(&repo(&[("A", 1), ("B", 1), ("C", 1), ("D", 1), ("E", 1), ("F", 1)]));

        let shares = tally.shares(None);
        assert_eq!(shares.len(), 6);
        assert!((sum(&shares) - 1.0).abs() < 1e-6);
    }
}
