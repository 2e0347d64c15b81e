#[cfg(test)]
mod tests {
    use crate::errors::{BackendError, Error, Result, ValidationError};
    use crate::professions::{
        ProfessionRepositoryTrait, ProfessionService, ProfessionServiceTrait, Professional,
        ProfessionalFilter, TaxonomyEntry,
    };
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    // --- Mock ProfessionRepository ---
    #[derive(Default)]
    struct MockProfessionRepository {
        professionals: Mutex<Vec<Professional>>,
        taxonomy: Mutex<Vec<TaxonomyEntry>>,
        taxonomy_reads: AtomicUsize,
        fail: bool,
    }

    impl MockProfessionRepository {
        fn new() -> Self {
            Self::default()
        }

        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }

        fn add_professional(&self, id: &str, name: &str, profession: Option<&str>) {
            self.professionals.lock().unwrap().push(Professional {
                id: id.to_string(),
                full_name: name.to_string(),
                profession: profession.map(str::to_string),
                city: None,
                avatar_url: None,
            });
        }

        fn add_entry(&self, profession: &str, sector: &str) {
            self.taxonomy
                .lock()
                .unwrap()
                .extend(TaxonomyEntry::new(profession, sector));
        }
    }

    #[async_trait]
    impl ProfessionRepositoryTrait for MockProfessionRepository {
        async fn list_professionals(&self) -> Result<Vec<Professional>> {
            if self.fail {
                return Err(BackendError::RequestFailed("connection refused".to_string()).into());
            }
            Ok(self.professionals.lock().unwrap().clone())
        }

        async fn list_taxonomy(&self) -> Result<Vec<TaxonomyEntry>> {
            self.taxonomy_reads.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(BackendError::RequestFailed("connection refused".to_string()).into());
            }
            Ok(self.taxonomy.lock().unwrap().clone())
        }
    }

    fn seeded_repository() -> Arc<MockProfessionRepository> {
        let repo = MockProfessionRepository::new();
        repo.add_entry("plumber", "Home Services");
        repo.add_entry("electrician", "Home Services");
        repo.add_entry("astrologer", "Spiritual & Wellness");
        repo.add_professional("1", "Ana", Some("Plumber"));
        repo.add_professional("2", "Ben", Some("Electrician"));
        repo.add_professional("3", "Cleo", Some("Astrologer"));
        repo.add_professional("4", "Dan", Some("Unicorn Wrangler"));
        repo.add_professional("5", "Eve", None);
        Arc::new(repo)
    }

    #[tokio::test]
    async fn test_get_catalog_resolves_requested_sector() {
        let service = ProfessionService::new(seeded_repository());

        let view = service
            .get_catalog(Some("Spiritual & Wellness"))
            .await
            .unwrap();

        let names: Vec<&str> = view.sectors.iter().map(|s| s.sector_name.as_str()).collect();
        assert_eq!(names, vec!["Home Services", "Spiritual & Wellness", "Other"]);
        assert_eq!(view.active_sector.as_deref(), Some("Spiritual & Wellness"));
        assert_eq!(view.total_professionals, 4);
    }

    #[tokio::test]
    async fn test_get_catalog_falls_back_to_first_sector() {
        let service = ProfessionService::new(seeded_repository());

        let view = service.get_catalog(Some("Aerospace")).await.unwrap();

        assert_eq!(view.active_sector.as_deref(), Some("Home Services"));
    }

    #[tokio::test]
    async fn test_get_catalog_empty_backend() {
        let service = ProfessionService::new(Arc::new(MockProfessionRepository::new()));

        let view = service.get_catalog(None).await.unwrap();

        assert!(view.sectors.is_empty());
        assert_eq!(view.active_sector, None);
        assert_eq!(view.total_professionals, 0);
    }

    #[tokio::test]
    async fn test_get_catalog_propagates_backend_failure() {
        let service = ProfessionService::new(Arc::new(MockProfessionRepository::failing()));

        let result = service.get_catalog(None).await;

        assert!(matches!(
            result,
            Err(Error::Backend(BackendError::RequestFailed(_)))
        ));
    }

    #[tokio::test]
    async fn test_short_query_skips_backend() {
        let repo = seeded_repository();
        let service = ProfessionService::new(repo.clone());

        let suggestions = service.suggest_professions("p", None).await.unwrap();

        assert!(suggestions.is_empty());
        assert_eq!(repo.taxonomy_reads.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_suggest_professions_matches_taxonomy() {
        let repo = seeded_repository();
        let service = ProfessionService::new(repo.clone());

        let suggestions = service.suggest_professions("pl", None).await.unwrap();

        assert_eq!(suggestions, vec!["plumber"]);
        assert_eq!(repo.taxonomy_reads.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_suggest_professions_limit_bounds() {
        let repo = MockProfessionRepository::new();
        for i in 0..30 {
            repo.add_entry(&format!("Specialist {}", i), "Misc");
        }
        let service = ProfessionService::new(Arc::new(repo));

        let default_limit = service.suggest_professions("ist", None).await.unwrap();
        let max_limit = service.suggest_professions("ist", Some(20)).await.unwrap();

        assert_eq!(default_limit.len(), 5);
        assert_eq!(max_limit.len(), 20);
    }

    #[tokio::test]
    async fn test_suggest_professions_rejects_out_of_range_limit() {
        let repo = seeded_repository();
        let service = ProfessionService::new(repo.clone());

        let zero = service.suggest_professions("pl", Some(0)).await;
        let huge = service.suggest_professions("pl", Some(500)).await;

        assert!(matches!(
            zero,
            Err(Error::Validation(ValidationError::InvalidInput(_)))
        ));
        assert!(matches!(
            huge,
            Err(Error::Validation(ValidationError::InvalidInput(_)))
        ));
        assert_eq!(repo.taxonomy_reads.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_suggest_professions_keeps_query_whitespace() {
        let repo = MockProfessionRepository::new();
        repo.add_entry("Group Therapist", "Health");
        repo.add_entry("Plumber", "Home Services");
        let service = ProfessionService::new(Arc::new(repo));

        let spaced = service.suggest_professions("p ", None).await.unwrap();
        let leading = service.suggest_professions(" pl", None).await.unwrap();

        assert_eq!(spaced, vec!["Group Therapist"]);
        assert!(leading.is_empty());
    }

    #[tokio::test]
    async fn test_search_professionals_filters_by_category() {
        let service = ProfessionService::new(seeded_repository());

        let found = service
            .search_professionals(ProfessionalFilter {
                q: None,
                category: Some("ELECTRICIAN".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].full_name, "Ben");
    }
}
