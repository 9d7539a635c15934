//! Local mirror of the Google product taxonomy.
//!
//! The feed is plain text with one `<google id> - <category path>` entry per
//! line. Importing it only ever adds rows: an id already stored is skipped and
//! existing rows are never updated or deleted.

use lazy_regex::regex_captures;
use merchant_core::{BoxError, FeedError, FeedResult};
use serde::{Deserialize, Serialize};

pub const DEFAULT_TAXONOMY_URL: &str =
    "http://www.google.com/basepages/producttype/taxonomy-with-ids.en-US.txt";

/// A stored taxonomy row
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GoogleTaxonomy {
    pub id: i64,
    pub google_id: i64,
    pub name: String,
}

/// A taxonomy row staged for creation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewTaxonomy {
    pub google_id: i64,
    pub name: String,
}

/// Storage of taxonomy rows
pub trait TaxonomyRepository {
    fn exists(&self, google_id: i64) -> Result<bool, BoxError>;

    /// Create all rows in one call, returning them with their assigned ids.
    fn create(&mut self, rows: Vec<NewTaxonomy>) -> Result<Vec<GoogleTaxonomy>, BoxError>;
}

/// Parse one feed line; lines that are not `<digits> - <name>` yield `None`.
pub fn parse_line(line: &str) -> FeedResult<Option<NewTaxonomy>> {
    let Some((_, google_id, name)) = regex_captures!(r"^(\d+) - (.+)$", line) else {
        return Ok(None);
    };

    let google_id = google_id
        .parse::<i64>()
        .map_err(|_| FeedError::MalformedIdentifier(google_id.to_string()))?;

    Ok(Some(NewTaxonomy {
        google_id,
        name: name.to_string(),
    }))
}

/// Create the taxonomy entries of `source_text` not yet stored in `repo`.
///
/// Existence is checked against what the repository holds before this call,
/// so an id listed twice in the same text is staged twice.
pub fn import_taxonomy<R>(source_text: &str, repo: &mut R) -> FeedResult<Vec<GoogleTaxonomy>>
where
    R: TaxonomyRepository + ?Sized,
{
    let mut staged = Vec::new();
    let mut skipped_lines = 0usize;
    let mut known = 0usize;

    for line in source_text.lines() {
        let Some(entry) = parse_line(line)? else {
            skipped_lines += 1;
            continue;
        };
        if repo.exists(entry.google_id).map_err(FeedError::Storage)? {
            known += 1;
            continue;
        }
        staged.push(entry);
    }

    tracing::debug!(
        staged = staged.len(),
        known,
        skipped_lines,
        "Scanned taxonomy feed"
    );

    if staged.is_empty() {
        return Ok(Vec::new());
    }

    let created = repo.create(staged).map_err(FeedError::Storage)?;
    tracing::info!("Imported {} Google taxonomy entries", created.len());
    Ok(created)
}

/// Taxonomy rows held in process memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaxonomyRepository {
    rows: Vec<GoogleTaxonomy>,
    next_id: i64,
}

impl InMemoryTaxonomyRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from previously stored rows, continuing their id sequence
    pub fn from_rows(rows: Vec<GoogleTaxonomy>) -> Self {
        let next_id = rows.iter().map(|row| row.id).max().unwrap_or(0);
        Self { rows, next_id }
    }

    pub fn rows(&self) -> &[GoogleTaxonomy] {
        &self.rows
    }

    pub fn find_by_google_id(&self, google_id: i64) -> Option<&GoogleTaxonomy> {
        self.rows.iter().find(|row| row.google_id == google_id)
    }
}

impl TaxonomyRepository for InMemoryTaxonomyRepository {
    fn exists(&self, google_id: i64) -> Result<bool, BoxError> {
        Ok(self.find_by_google_id(google_id).is_some())
    }

    fn create(&mut self, rows: Vec<NewTaxonomy>) -> Result<Vec<GoogleTaxonomy>, BoxError> {
        let mut created = Vec::with_capacity(rows.len());
        for row in rows {
            self.next_id += 1;
            created.push(GoogleTaxonomy {
                id: self.next_id,
                google_id: row.google_id,
                name: row.name,
            });
        }
        self.rows.extend(created.iter().cloned());
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "123 - Apparel & Accessories\nbad line\n456 - Electronics";

    #[test]
    fn test_parse_line() {
        let entry = parse_line("1604 - Apparel & Accessories > Clothing").unwrap().unwrap();
        assert_eq!(entry.google_id, 1604);
        assert_eq!(entry.name, "Apparel & Accessories > Clothing");

        assert_eq!(parse_line("# Google_Product_Taxonomy_Version: 2021-09-21").unwrap(), None);
        assert_eq!(parse_line("").unwrap(), None);
        assert_eq!(parse_line("12 -").unwrap(), None);
        assert_eq!(parse_line(" 12 - Leading space").unwrap(), None);
    }

    #[test]
    fn test_overflowing_identifier_is_malformed() {
        let result = parse_line("99999999999999999999999 - Too big");
        assert!(matches!(result, Err(FeedError::MalformedIdentifier(_))));
    }

    #[test]
    fn test_import_skips_bad_lines() {
        let mut repo = InMemoryTaxonomyRepository::new();
        let created = import_taxonomy(SAMPLE, &mut repo).unwrap();

        let pairs: Vec<(i64, &str)> = created
            .iter()
            .map(|row| (row.google_id, row.name.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![(123, "Apparel & Accessories"), (456, "Electronics")]
        );
        assert_eq!(repo.rows().len(), 2);
    }

    #[test]
    fn test_reimport_creates_nothing() {
        let mut repo = InMemoryTaxonomyRepository::new();
        import_taxonomy(SAMPLE, &mut repo).unwrap();

        let created = import_taxonomy("456 - Electronics\n123 - Apparel & Accessories", &mut repo)
            .unwrap();
        assert!(created.is_empty());
        assert_eq!(repo.rows().len(), 2);
    }

    #[test]
    fn test_import_only_adds_unknown_ids() {
        let mut repo = InMemoryTaxonomyRepository::new();
        import_taxonomy("123 - Apparel & Accessories", &mut repo).unwrap();

        let created = import_taxonomy(SAMPLE, &mut repo).unwrap();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].google_id, 456);
        assert_eq!(created[0].id, 2);
        assert_eq!(repo.find_by_google_id(123).unwrap().id, 1);
    }

    #[test]
    fn test_duplicates_within_one_feed_are_kept() {
        let mut repo = InMemoryTaxonomyRepository::new();
        let created = import_taxonomy("7 - Toys\n7 - Toys", &mut repo).unwrap();
        assert_eq!(created.len(), 2);
    }

    #[test]
    fn test_crlf_feed() {
        let mut repo = InMemoryTaxonomyRepository::new();
        let created = import_taxonomy("1 - Animals\r\n2 - Arts\r\n", &mut repo).unwrap();
        assert_eq!(created[0].name, "Animals");
        assert_eq!(created[1].name, "Arts");
    }

    struct CountingRepository {
        inner: InMemoryTaxonomyRepository,
        create_calls: usize,
        fail_exists: bool,
    }

    impl TaxonomyRepository for CountingRepository {
        fn exists(&self, google_id: i64) -> Result<bool, BoxError> {
            if self.fail_exists {
                return Err("database is locked".into());
            }
            self.inner.exists(google_id)
        }

        fn create(&mut self, rows: Vec<NewTaxonomy>) -> Result<Vec<GoogleTaxonomy>, BoxError> {
            self.create_calls += 1;
            self.inner.create(rows)
        }
    }

    #[test]
    fn test_single_bulk_create() {
        let mut repo = CountingRepository {
            inner: InMemoryTaxonomyRepository::new(),
            create_calls: 0,
            fail_exists: false,
        };
        import_taxonomy("1 - A\n2 - B\n3 - C", &mut repo).unwrap();
        assert_eq!(repo.create_calls, 1);
    }

    #[test]
    fn test_storage_failure_propagates() {
        let mut repo = CountingRepository {
            inner: InMemoryTaxonomyRepository::new(),
            create_calls: 0,
            fail_exists: true,
        };
        let err = import_taxonomy(SAMPLE, &mut repo).unwrap_err();
        match err {
            FeedError::Storage(source) => assert_eq!(source.to_string(), "database is locked"),
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(repo.create_calls, 0);
    }

    #[test]
    fn test_from_rows_continues_ids() {
        let mut repo = InMemoryTaxonomyRepository::from_rows(vec![GoogleTaxonomy {
            id: 41,
            google_id: 1,
            name: "Animals".to_string(),
        }]);
        let created = import_taxonomy("2 - Arts", &mut repo).unwrap();
        assert_eq!(created[0].id, 42);
    }
}
