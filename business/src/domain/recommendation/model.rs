use std::collections::{HashMap, HashSet};

use super::errors::RecommendationError;
use crate::domain::shared::value_objects::ProductId;

/// Static co-occurrence table plus the catalog used as fallback pool.
///
/// Built once at start-up and shared read-only between all requests.
#[derive(Debug, Clone)]
pub struct AffinityTable {
    related: HashMap<ProductId, Vec<ProductId>>,
    catalog: Vec<ProductId>,
}

impl AffinityTable {
    /// Validates raw identifiers and builds the table.
    ///
    /// The catalog keeps its first-seen order with duplicates removed.
    /// Fails if the catalog ends up empty or any identifier is blank.
    pub fn new<C, A, L>(catalog: C, affinities: A) -> Result<Self, RecommendationError>
    where
        C: IntoIterator<Item = String>,
        A: IntoIterator<Item = (String, L)>,
        L: IntoIterator<Item = String>,
    {
        let mut seen = HashSet::new();
        let mut catalog_ids = Vec::new();
        for raw in catalog {
            let id = parse_id(raw)?;
            if seen.insert(id.clone()) {
                catalog_ids.push(id);
            }
        }

        if catalog_ids.is_empty() {
            return Err(RecommendationError::EmptyCatalog);
        }

        let mut related = HashMap::new();
        for (key, values) in affinities {
            let key = parse_id(key)?;
            let values = values
                .into_iter()
                .map(parse_id)
                .collect::<Result<Vec<_>, _>>()?;
            related.insert(key, values);
        }

        Ok(Self {
            related,
            catalog: catalog_ids,
        })
    }

    /// Related products for `id`, in table order.
    pub fn related(&self, id: &ProductId) -> Option<&[ProductId]> {
        self.related.get(id).map(Vec::as_slice)
    }

    pub fn catalog(&self) -> &[ProductId] {
        &self.catalog
    }

    pub fn len(&self) -> usize {
        self.related.len()
    }

    pub fn is_empty(&self) -> bool {
        self.related.is_empty()
    }

    /// Related ids that do not appear in the catalog, sorted.
    pub fn unknown_references(&self) -> Vec<&ProductId> {
        let catalog: HashSet<&ProductId> = self.catalog.iter().collect();
        let mut unknown: Vec<&ProductId> = self
            .related
            .values()
            .flatten()
            .filter(|id| !catalog.contains(id))
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        unknown.sort();
        unknown
    }
}

fn parse_id(raw: String) -> Result<ProductId, RecommendationError> {
    ProductId::parse(raw.clone()).ok_or(RecommendationError::BlankProductId(raw))
}

/// Products currently held in a user's cart, in request order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartSnapshot(Vec<ProductId>);

impl CartSnapshot {
    /// Builds a snapshot from wire identifiers, skipping blank entries.
    pub fn from_raw<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(ids.into_iter().filter_map(ProductId::parse).collect())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProductId> {
        self.0.iter()
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.0.contains(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
