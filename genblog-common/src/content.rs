//! Static, read-only blog content: authors, articles and research links.
//!
//! The store is built once at startup (from the embedded dataset or a JSON
//! file) and never mutated afterwards. Construction validates the dataset so
//! every accessor can rely on unique ids and resolvable author references.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BlogError, EntityKind, Result};
use crate::route::RouteParam;

/// Dataset bundled with the binary.
const BUILTIN_JSON: &str = include_str!("data/content.json");

/// A blog author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Stable unique id
    pub id: u32,
    /// Display name
    pub name: String,
    /// Short biography
    pub bio: String,
}

/// A published article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Stable unique id
    pub id: u32,
    /// Id of the [`Author`] who wrote it
    pub author_id: u32,
    /// Category label, e.g. "Genetik"
    pub category: String,
    pub title: String,
    pub summary: String,
    pub content: String,
    /// Link to the full paper
    pub pdf_url: String,
    /// Ordered keyword list, feeds the tag cloud
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl Article {
    /// Canonical detail path for this article.
    pub fn href(&self) -> String {
        format!("/post/{}", self.id)
    }
}

impl Author {
    /// Canonical detail path for this author.
    pub fn href(&self) -> String {
        format!("/author/{}", self.id)
    }
}

/// A single external research link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchLink {
    pub title: String,
    pub url: String,
}

/// Research links grouped under one topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchTopicGroup {
    pub topic: String,
    #[serde(default)]
    pub links: Vec<ResearchLink>,
}

/// Optional narrowing for [`ContentStore::articles`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleFilter {
    /// Only articles in this category (exact match)
    pub category: Option<String>,
    /// Only articles written by this author
    pub author_id: Option<u32>,
}

impl ArticleFilter {
    /// Filter that keeps every article.
    pub fn all() -> Self {
        Self::default()
    }

    /// Filter by category.
    pub fn category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            ..Self::default()
        }
    }

    /// Filter by author id.
    pub fn author(author_id: u32) -> Self {
        Self {
            author_id: Some(author_id),
            ..Self::default()
        }
    }

    fn matches(&self, article: &Article) -> bool {
        self.category
            .as_deref()
            .is_none_or(|category| article.category == category)
            && self.author_id.is_none_or(|id| article.author_id == id)
    }
}

/// On-disk shape of a dataset.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Dataset {
    authors: Vec<Author>,
    articles: Vec<Article>,
    research: Vec<ResearchTopicGroup>,
}

/// The read-only content store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentStore {
    authors: Vec<Author>,
    articles: Vec<Article>,
    research: Vec<ResearchTopicGroup>,
}

impl ContentStore {
    /// Build a store, rejecting duplicate ids and dangling author references.
    pub fn new(
        authors: Vec<Author>,
        articles: Vec<Article>,
        research: Vec<ResearchTopicGroup>,
    ) -> Result<Self> {
        let mut author_ids = HashSet::with_capacity(authors.len());
        for author in &authors {
            if !author_ids.insert(author.id) {
                return Err(BlogError::DuplicateId {
                    kind: EntityKind::Author,
                    id: author.id,
                });
            }
        }

        let mut article_ids = HashSet::with_capacity(articles.len());
        for article in &articles {
            if !article_ids.insert(article.id) {
                return Err(BlogError::DuplicateId {
                    kind: EntityKind::Article,
                    id: article.id,
                });
            }
            if !author_ids.contains(&article.author_id) {
                return Err(BlogError::DanglingAuthor {
                    article: article.id,
                    author: article.author_id,
                });
            }
        }

        tracing::debug!(
            authors = authors.len(),
            articles = articles.len(),
            topics = research.len(),
            "content store loaded"
        );

        Ok(Self {
            authors,
            articles,
            research,
        })
    }

    /// A store with no content at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The dataset embedded in the crate.
    ///
    /// The embedded JSON is covered by tests; should it ever fail to load,
    /// the failure is logged and an empty store is returned.
    pub fn builtin() -> Self {
        Self::from_json(BUILTIN_JSON).unwrap_or_else(|err| {
            tracing::error!(error = %err, "embedded content dataset is invalid");
            Self::empty()
        })
    }

    /// Parse and validate a JSON dataset.
    pub fn from_json(json: &str) -> Result<Self> {
        let dataset: Dataset = serde_json::from_str(json)?;
        Self::new(dataset.authors, dataset.articles, dataset.research)
    }

    /// Read, parse and validate a JSON dataset file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    /// Look up an author by id.
    pub fn author(&self, id: u32) -> Result<&Author> {
        self.authors
            .iter()
            .find(|author| author.id == id)
            .ok_or_else(|| BlogError::not_found(EntityKind::Author, id))
    }

    /// Articles matching `filter`, in dataset order.
    pub fn articles(&self, filter: &ArticleFilter) -> Vec<&Article> {
        self.articles
            .iter()
            .filter(|article| filter.matches(article))
            .collect()
    }

    /// Look up an article by id.
    pub fn article(&self, id: u32) -> Result<&Article> {
        self.articles
            .iter()
            .find(|article| article.id == id)
            .ok_or_else(|| BlogError::not_found(EntityKind::Article, id))
    }

    pub fn research_topics(&self) -> &[ResearchTopicGroup] {
        &self.research
    }

    /// Distinct article categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.articles
            .iter()
            .map(|article| article.category.as_str())
            .filter(|category| seen.insert(*category))
            .collect()
    }

    /// Resolve an author from a route parameter. Malformed params are NotFound.
    pub fn resolve_author(&self, param: &RouteParam) -> Result<&Author> {
        match param {
            RouteParam::Valid(id) => self.author(*id),
            RouteParam::Invalid(raw) => Err(BlogError::not_found(EntityKind::Author, raw)),
        }
    }

    /// Resolve an article from a route parameter. Malformed params are NotFound.
    pub fn resolve_article(&self, param: &RouteParam) -> Result<&Article> {
        match param {
            RouteParam::Valid(id) => self.article(*id),
            RouteParam::Invalid(raw) => Err(BlogError::not_found(EntityKind::Article, raw)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.authors.is_empty() && self.articles.is_empty() && self.research.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn author(id: u32, name: &str) -> Author {
        Author {
            id,
            name: name.into(),
            bio: format!("bio of {name}"),
        }
    }

    fn article(id: u32, author_id: u32, category: &str) -> Article {
        Article {
            id,
            author_id,
            category: category.into(),
            title: format!("title {id}"),
            summary: String::new(),
            content: String::new(),
            pdf_url: String::new(),
            keywords: vec![],
        }
    }

    #[test]
    fn builtin_dataset_loads() {
        let store = ContentStore::builtin();
        assert_eq!(store.authors().len(), 2);
        assert_eq!(store.articles(&ArticleFilter::all()).len(), 1);
        assert_eq!(store.research_topics().len(), 4);

        let post = store.article(0).expect("article 0");
        assert_eq!(post.title, "CRISPR Teknolojisinde Yeni Nesil Gen Düzenleme");
        assert_eq!(store.author(post.author_id).expect("author").name, "Dr. A. Genetik");
        assert_eq!(post.keywords, vec!["CRISPR", "Cas12", "Gen Düzenleme"]);
    }

    #[test]
    fn builtin_json_parses_without_fallback() {
        assert!(ContentStore::from_json(BUILTIN_JSON).is_ok());
    }

    #[test]
    fn every_builtin_article_resolves_its_author() {
        let store = ContentStore::builtin();
        for article in store.articles(&ArticleFilter::all()) {
            assert!(store.author(article.author_id).is_ok());
        }
    }

    #[test]
    fn missing_ids_are_not_found() {
        let store = ContentStore::builtin();
        assert!(store.article(99).unwrap_err().is_not_found());
        assert!(store.author(42).unwrap_err().is_not_found());
    }

    #[test]
    fn invalid_route_param_is_not_found() {
        let store = ContentStore::builtin();
        let err = store
            .resolve_article(&RouteParam::Invalid("abc".into()))
            .unwrap_err();
        assert_eq!(err.to_string(), "article abc not found");
        assert_eq!(
            store.resolve_author(&RouteParam::Valid(1)).expect("author").name,
            "Prof. B. Biyotek"
        );
    }

    #[test]
    fn rejects_duplicate_author_ids() {
        let err = ContentStore::new(vec![author(1, "a"), author(1, "b")], vec![], vec![])
            .unwrap_err();
        assert!(matches!(
            err,
            BlogError::DuplicateId {
                kind: EntityKind::Author,
                id: 1
            }
        ));
    }

    #[test]
    fn rejects_duplicate_article_ids() {
        let err = ContentStore::new(
            vec![author(0, "a")],
            vec![article(5, 0, "x"), article(5, 0, "y")],
            vec![],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            BlogError::DuplicateId {
                kind: EntityKind::Article,
                id: 5
            }
        ));
    }

    #[test]
    fn rejects_dangling_author_reference() {
        let err = ContentStore::new(vec![author(0, "a")], vec![article(1, 9, "x")], vec![])
            .unwrap_err();
        assert!(matches!(
            err,
            BlogError::DanglingAuthor {
                article: 1,
                author: 9
            }
        ));
    }

    #[test]
    fn filters_by_category_and_author() {
        let store = ContentStore::new(
            vec![author(0, "a"), author(1, "b")],
            vec![
                article(0, 0, "Genetik"),
                article(1, 1, "Genetik"),
                article(2, 1, "Organoid"),
            ],
            vec![],
        )
        .expect("valid store");

        let ids = |articles: Vec<&Article>| articles.iter().map(|a| a.id).collect::<Vec<_>>();

        assert_eq!(ids(store.articles(&ArticleFilter::category("Genetik"))), vec![0, 1]);
        assert_eq!(ids(store.articles(&ArticleFilter::author(1))), vec![1, 2]);
        assert_eq!(
            ids(store.articles(&ArticleFilter {
                category: Some("Organoid".into()),
                author_id: Some(0),
            })),
            Vec::<u32>::new()
        );
        assert_eq!(store.categories(), vec!["Genetik", "Organoid"]);
    }

    #[test]
    fn parse_errors_surface_as_parse() {
        let err = ContentStore::from_json("{ not json").unwrap_err();
        assert!(matches!(err, BlogError::Parse(_)));
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let store = ContentStore::from_json(r#"{ "authors": [] }"#).expect("parses");
        assert!(store.is_empty());
    }
}
