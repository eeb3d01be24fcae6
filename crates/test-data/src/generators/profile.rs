//! Musician profile generation.

use rand::Rng;
use rand::seq::SliceRandom;
use time::OffsetDateTime;

use profiles::{Profile, ProfileStatus};

/// Configuration for profile generation.
#[derive(Debug, Clone)]
pub struct ProfileGenConfig {
    /// Region codes a profile can be located in.
    pub regions: Vec<String>,
    /// Instrument/role tags to sample from.
    pub roles: Vec<String>,
    /// Genre tags to sample from.
    pub genres: Vec<String>,
    /// Statuses a profile can carry.
    pub statuses: Vec<ProfileStatus>,
    /// Probability that a profile belongs to a named band.
    pub band_probability: f64,
    /// Inclusive zip code range.
    pub zip_range: (u32, u32),
    /// Number of role/genre tags per profile (inclusive range, clamped to
    /// the tag set size).
    pub tags_per_profile: (usize, usize),
    /// Number of distinct avatar images in the pool.
    pub avatar_pool_size: usize,
    /// Base URL of the avatar image service.
    pub photo_url_base: String,
    /// Bio text every generated profile carries.
    pub bio: String,
}

impl Default for ProfileGenConfig {
    fn default() -> Self {
        Self {
            regions: vec![
                "LU".to_string(),
                "ZH".to_string(),
                "BE".to_string(),
                "BS".to_string(),
                "SG".to_string(),
                "AG".to_string(),
                "TG".to_string(),
                "GR".to_string(),
                "VS".to_string(),
                "TI".to_string(),
            ],
            roles: vec![
                "Singer".to_string(),
                "Gitarre".to_string(),
                "Bass".to_string(),
                "Drums".to_string(),
                "Keys".to_string(),
                "DJ".to_string(),
                "Violin".to_string(),
            ],
            genres: vec![
                "Rock".to_string(),
                "Metal".to_string(),
                "Pop".to_string(),
                "Indie".to_string(),
                "Blues".to_string(),
                "Jazz".to_string(),
            ],
            statuses: ProfileStatus::ALL.to_vec(),
            band_probability: 0.5,
            zip_range: (6000, 6300),
            tags_per_profile: (1, 3),
            avatar_pool_size: 70,
            photo_url_base: "https://i.pravatar.cc/300".to_string(),
            bio: "Dies ist ein automatisch generiertes Testprofil für Bandly.".to_string(),
        }
    }
}

/// Generates schema-consistent musician profiles for testing.
///
/// Identity fields (`uid`, `displayName`, band and avatar numbering) are
/// derived from the 1-based sequence index, so re-running a seed addresses
/// the same documents. Everything else is drawn independently per profile.
pub struct ProfileGenerator {
    config: ProfileGenConfig,
}

impl ProfileGenerator {
    /// Creates a new profile generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: ProfileGenConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: ProfileGenConfig) -> Self {
        Self { config }
    }

    /// Generates the profile for the 1-based sequence `index`.
    pub fn generate(&self, index: usize, rng: &mut impl Rng) -> Profile {
        let uid = format!("test_{index}");
        let display_name = format!("TestMusiker {index}");

        let band_name = if rng.gen_bool(self.config.band_probability) {
            format!("Band {index}")
        } else {
            String::new()
        };

        // 1-based cyclic index into the avatar pool
        let avatar_id = (index - 1) % self.config.avatar_pool_size + 1;
        let photo_url = format!("{}?img={avatar_id}", self.config.photo_url_base);

        let (zip_min, zip_max) = self.config.zip_range;
        let zip = rng.gen_range(zip_min..=zip_max).to_string();

        Profile {
            uid,
            display_name,
            photo_url,
            region: self.pick_region(rng),
            zip,
            band_name,
            status: self.pick_status(rng),
            roles: self.sample_tags(&self.config.roles, rng),
            genres: self.sample_tags(&self.config.genres, rng),
            bio: self.config.bio.clone(),
            is_test: true,
            updated_at: OffsetDateTime::now_utc(),
        }
    }

    /// Generates profiles for sequence indices `1..=count`.
    pub fn generate_batch(&self, count: usize, rng: &mut impl Rng) -> Vec<Profile> {
        (1..=count).map(|index| self.generate(index, rng)).collect()
    }

    fn pick_region(&self, rng: &mut impl Rng) -> String {
        self.config
            .regions
            .choose(rng)
            .expect("config must define at least one region")
            .clone()
    }

    fn pick_status(&self, rng: &mut impl Rng) -> ProfileStatus {
        *self
            .config
            .statuses
            .choose(rng)
            .expect("config must define at least one status")
    }

    /// Samples a subset of `tags` without replacement, with an independently
    /// drawn size per call.
    fn sample_tags(&self, tags: &[String], rng: &mut impl Rng) -> Vec<String> {
        let (min, max) = self.config.tags_per_profile;
        let max = max.min(tags.len());
        let count = rng.gen_range(min.min(max)..=max);
        tags.choose_multiple(rng, count).cloned().collect()
    }
}

impl Default for ProfileGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_identity_fields_follow_sequence() {
        let profile_gen = ProfileGenerator::new();
        let mut rng = StdRng::seed_from_u64(1);
        let profile = profile_gen.generate(1, &mut rng);

        assert_eq!(profile.uid, "test_1");
        assert_eq!(profile.display_name, "TestMusiker 1");
        assert!(profile.photo_url.ends_with("img=1"));
        assert!(profile.is_test);
        assert_eq!(
            profile.bio,
            "Dies ist ein automatisch generiertes Testprofil für Bandly."
        );
    }

    #[test]
    fn test_avatar_index_cycles_through_the_pool() {
        let profile_gen = ProfileGenerator::new();
        let mut rng = StdRng::seed_from_u64(2);

        let seventy = profile_gen.generate(70, &mut rng);
        assert!(seventy.photo_url.ends_with("img=70"));

        let seventy_one = profile_gen.generate(71, &mut rng);
        assert!(seventy_one.photo_url.ends_with("img=1"));

        // Period 70: indices i and i + 70 share an avatar
        let third = profile_gen.generate(3, &mut rng);
        let seventy_third = profile_gen.generate(73, &mut rng);
        assert_eq!(third.photo_url, seventy_third.photo_url);
    }

    #[test]
    fn test_band_name_is_empty_or_numbered() {
        let profile_gen = ProfileGenerator::new();
        let mut rng = StdRng::seed_from_u64(3);

        let mut saw_empty = false;
        let mut saw_band = false;
        for index in 1..=100 {
            let profile = profile_gen.generate(index, &mut rng);
            if profile.band_name.is_empty() {
                saw_empty = true;
            } else {
                assert_eq!(profile.band_name, format!("Band {index}"));
                saw_band = true;
            }
        }

        // A fair coin over 100 draws lands on both sides
        assert!(saw_empty);
        assert!(saw_band);
    }

    #[test]
    fn test_tags_are_distinct_and_within_bounds() {
        let config = ProfileGenConfig::default();
        let profile_gen = ProfileGenerator::new();
        let mut rng = StdRng::seed_from_u64(4);

        for profile in profile_gen.generate_batch(100, &mut rng) {
            for (tags, pool) in [(&profile.roles, &config.roles), (&profile.genres, &config.genres)]
            {
                assert!((1..=3).contains(&tags.len()));
                let distinct: HashSet<&String> = tags.iter().collect();
                assert_eq!(distinct.len(), tags.len());
                assert!(tags.iter().all(|tag| pool.contains(tag)));
            }
        }
    }

    #[test]
    fn test_zip_is_four_digits_within_range() {
        let profile_gen = ProfileGenerator::new();
        let mut rng = StdRng::seed_from_u64(5);

        for profile in profile_gen.generate_batch(100, &mut rng) {
            assert_eq!(profile.zip.len(), 4);
            let zip: u32 = profile.zip.parse().unwrap();
            assert!((6000..=6300).contains(&zip));
        }
    }

    #[test]
    fn test_region_and_status_come_from_the_fixed_sets() {
        let config = ProfileGenConfig::default();
        let profile_gen = ProfileGenerator::new();
        let mut rng = StdRng::seed_from_u64(6);

        for profile in profile_gen.generate_batch(50, &mut rng) {
            assert!(config.regions.contains(&profile.region));
            assert!(config.statuses.contains(&profile.status));
        }
    }

    #[test]
    fn test_batch_uids_are_unique_and_sequential() {
        let profile_gen = ProfileGenerator::new();
        let mut rng = StdRng::seed_from_u64(7);
        let batch = profile_gen.generate_batch(10, &mut rng);

        assert_eq!(batch.len(), 10);
        let uids: Vec<&str> = batch.iter().map(|p| p.uid.as_str()).collect();
        assert_eq!(uids[0], "test_1");
        assert_eq!(uids[9], "test_10");
        let distinct: HashSet<&&str> = uids.iter().collect();
        assert_eq!(distinct.len(), 10);
    }
}
