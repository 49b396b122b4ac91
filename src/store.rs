//! In-memory record store.
//!
//! Loads a JSON dataset once at startup and serves read-only lookups to the
//! serializers. Records keep their storage order; indexes map natural keys
//! to positions. Referential integrity is not checked here: a dangling
//! reference fails when a projection follows it.

use std::collections::HashMap;
use std::hash::Hash;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::models::{Area, AreaType, Election, Membership, Organization, Person, Post};
use crate::{Error, Result};

/// The on-disk dataset layout. Every collection is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Dataset {
    pub area_types: Vec<AreaType>,
    pub areas: Vec<Area>,
    pub elections: Vec<Election>,
    pub organizations: Vec<Organization>,
    pub people: Vec<Person>,
    pub posts: Vec<Post>,
    pub memberships: Vec<Membership>,
}

/// Record counts, reported by the health endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StoreCounts {
    pub area_types: usize,
    pub areas: usize,
    pub elections: usize,
    pub organizations: usize,
    pub people: usize,
    pub posts: usize,
    pub memberships: usize,
}

#[derive(Debug, Default)]
pub struct Store {
    data: Dataset,
    area_types_by_id: HashMap<i64, usize>,
    areas_by_id: HashMap<i64, usize>,
    elections_by_slug: HashMap<String, usize>,
    organizations_by_id: HashMap<i64, usize>,
    organizations_by_slug: HashMap<String, usize>,
    people_by_id: HashMap<i64, usize>,
    posts_by_id: HashMap<i64, usize>,
    memberships_by_person: HashMap<i64, Vec<usize>>,
    memberships_by_post: HashMap<i64, Vec<usize>>,
}

impl Store {
    /// Read and index a dataset file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading dataset {}", path.display()))?;
        let store = Self::from_json(&raw)?;

        info!(
            "Loaded dataset from {}: {} people, {} organizations, {} posts, {} elections",
            path.display(),
            store.data.people.len(),
            store.data.organizations.len(),
            store.data.posts.len(),
            store.data.elections.len(),
        );

        Ok(store)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let data: Dataset = serde_json::from_str(raw)
            .map_err(|e| Error::InvalidData(format!("dataset is not valid JSON: {}", e)))?;
        Self::from_dataset(data)
    }

    /// Index a dataset, rejecting duplicate ids and slugs.
    pub fn from_dataset(data: Dataset) -> Result<Self> {
        let area_types_by_id = index_unique(&data.area_types, "area type", |t| t.id)?;
        let areas_by_id = index_unique(&data.areas, "area", |a| a.id)?;
        index_unique(&data.elections, "election id", |e| e.id)?;
        let elections_by_slug = index_unique(&data.elections, "election", |e| e.slug.clone())?;
        let organizations_by_id = index_unique(&data.organizations, "organization", |o| o.id)?;
        let people_by_id = index_unique(&data.people, "person", |p| p.id)?;
        let posts_by_id = index_unique(&data.posts, "post", |p| p.id)?;
        index_unique(&data.memberships, "membership", |m| m.id)?;

        let mut organizations_by_slug = HashMap::new();
        for (pos, org) in data.organizations.iter().enumerate() {
            if let Some(slug) = org.slug() {
                if organizations_by_slug.insert(slug.to_string(), pos).is_some() {
                    return Err(Error::InvalidData(format!(
                        "duplicate organization slug: {}",
                        slug
                    )));
                }
            }
        }

        let mut memberships_by_person: HashMap<i64, Vec<usize>> = HashMap::new();
        let mut memberships_by_post: HashMap<i64, Vec<usize>> = HashMap::new();
        for (pos, membership) in data.memberships.iter().enumerate() {
            memberships_by_person
                .entry(membership.person_id)
                .or_default()
                .push(pos);
            if let Some(post_id) = membership.post_id {
                memberships_by_post.entry(post_id).or_default().push(pos);
            }
        }

        Ok(Self {
            data,
            area_types_by_id,
            areas_by_id,
            elections_by_slug,
            organizations_by_id,
            organizations_by_slug,
            people_by_id,
            posts_by_id,
            memberships_by_person,
            memberships_by_post,
        })
    }

    pub fn counts(&self) -> StoreCounts {
        StoreCounts {
            area_types: self.data.area_types.len(),
            areas: self.data.areas.len(),
            elections: self.data.elections.len(),
            organizations: self.data.organizations.len(),
            people: self.data.people.len(),
            posts: self.data.posts.len(),
            memberships: self.data.memberships.len(),
        }
    }

    // ========================================================================
    // Lookups
    // ========================================================================

    pub fn area_type(&self, id: i64) -> Option<&AreaType> {
        self.area_types_by_id
            .get(&id)
            .map(|&pos| &self.data.area_types[pos])
    }

    pub fn area(&self, id: i64) -> Option<&Area> {
        self.areas_by_id.get(&id).map(|&pos| &self.data.areas[pos])
    }

    pub fn election(&self, slug: &str) -> Option<&Election> {
        self.elections_by_slug
            .get(slug)
            .map(|&pos| &self.data.elections[pos])
    }

    pub fn organization(&self, id: i64) -> Option<&Organization> {
        self.organizations_by_id
            .get(&id)
            .map(|&pos| &self.data.organizations[pos])
    }

    pub fn organization_by_slug(&self, slug: &str) -> Option<&Organization> {
        self.organizations_by_slug
            .get(slug)
            .map(|&pos| &self.data.organizations[pos])
    }

    pub fn person(&self, id: i64) -> Option<&Person> {
        self.people_by_id.get(&id).map(|&pos| &self.data.people[pos])
    }

    pub fn post(&self, id: i64) -> Option<&Post> {
        self.posts_by_id.get(&id).map(|&pos| &self.data.posts[pos])
    }

    /// Memberships of a person, in storage order.
    pub fn memberships_for_person(&self, person_id: i64) -> Vec<&Membership> {
        self.memberships_at(self.memberships_by_person.get(&person_id))
    }

    /// Memberships held through a post, in storage order.
    pub fn memberships_for_post(&self, post_id: i64) -> Vec<&Membership> {
        self.memberships_at(self.memberships_by_post.get(&post_id))
    }

    fn memberships_at(&self, positions: Option<&Vec<usize>>) -> Vec<&Membership> {
        positions
            .map(|positions| {
                positions
                    .iter()
                    .map(|&pos| &self.data.memberships[pos])
                    .collect()
            })
            .unwrap_or_default()
    }

    // ========================================================================
    // Collections
    // ========================================================================

    pub fn areas(&self) -> &[Area] {
        &self.data.areas
    }

    pub fn elections(&self) -> &[Election] {
        &self.data.elections
    }

    /// Organizations addressable by slug, in storage order.
    pub fn slugged_organizations(&self) -> impl Iterator<Item = &Organization> {
        self.data
            .organizations
            .iter()
            .filter(|org| org.extra.is_some())
    }

    pub fn people(&self) -> &[Person] {
        &self.data.people
    }

    pub fn posts(&self) -> &[Post] {
        &self.data.posts
    }
}

fn index_unique<T, K, F>(records: &[T], kind: &str, key: F) -> Result<HashMap<K, usize>>
where
    K: Eq + Hash + std::fmt::Display,
    F: Fn(&T) -> K,
{
    let mut index = HashMap::with_capacity(records.len());
    for (pos, record) in records.iter().enumerate() {
        let k = key(record);
        if index.contains_key(&k) {
            return Err(Error::InvalidData(format!("duplicate {}: {}", kind, k)));
        }
        index.insert(k, pos);
    }
    Ok(index)
}
