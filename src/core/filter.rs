//! Search, filter and favourites ordering for the project grid.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::core::model::{Category, Project, Status};
use crate::error::Error;

/// Either the wildcard ("no restriction") or one exact value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selector<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> Selector<T> {
    pub fn accepts(&self, value: &T) -> bool {
        match self {
            Selector::All => true,
            Selector::Only(wanted) => wanted == value,
        }
    }
}

/// Label shown for the wildcard entry of a selector.
pub trait WildcardLabel {
    const WILDCARD: &'static str;
}

impl WildcardLabel for Status {
    const WILDCARD: &'static str = "All Statuses";
}

impl WildcardLabel for Category {
    const WILDCARD: &'static str = "All Project Types";
}

impl<T: WildcardLabel + fmt::Display> fmt::Display for Selector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::All => f.write_str(T::WILDCARD),
            Selector::Only(value) => value.fmt(f),
        }
    }
}

impl<T> FromStr for Selector<T>
where
    T: WildcardLabel + FromStr<Err = Error>,
{
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") || s.eq_ignore_ascii_case(T::WILDCARD) {
            return Ok(Selector::All);
        }
        s.parse().map(Selector::Only)
    }
}

impl<T: Copy> Selector<T> {
    /// The wildcard followed by every concrete value, in picker order.
    pub fn options(values: &[T]) -> Vec<Selector<T>> {
        std::iter::once(Selector::All)
            .chain(values.iter().copied().map(Selector::Only))
            .collect()
    }
}

pub type StatusFilter = Selector<Status>;
pub type CategoryFilter = Selector<Category>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    pub query: String,
    pub status: StatusFilter,
    pub category: CategoryFilter,
}

impl FilterState {
    pub fn matches(&self, project: &Project) -> bool {
        matches_query(project, &self.query)
            && self.status.accepts(&project.status)
            && self.category.accepts(&project.category)
    }

    pub fn is_empty(&self) -> bool {
        self.query.is_empty() && self.status == Selector::All && self.category == Selector::All
    }
}

fn matches_query(project: &Project, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    [&project.name, &project.id, &project.location]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Project ids pinned to the front of the grid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Favorites {
    ids: HashSet<String>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips membership of `id`, returning whether it is now a favourite.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        }
    }

    /// Marks `id` as a favourite, returning `false` if it already was one.
    pub fn insert(&mut self, id: &str) -> bool {
        self.ids.insert(id.to_string())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Favorites {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Returns the projects passing every filter, favourites first.
///
/// Input order is kept within the favourite and non-favourite groups.
pub fn select<'a>(
    records: &'a [Project],
    query: &str,
    status: StatusFilter,
    category: CategoryFilter,
    favorites: &Favorites,
) -> Vec<&'a Project> {
    let filter = FilterState {
        query: query.to_string(),
        status,
        category,
    };
    select_with(records, &filter, favorites)
}

pub fn select_with<'a>(
    records: &'a [Project],
    filter: &FilterState,
    favorites: &Favorites,
) -> Vec<&'a Project> {
    let mut visible: Vec<&Project> = records.iter().filter(|p| filter.matches(p)).collect();
    // sort_by_key is stable, so this is a two-bucket partition
    visible.sort_by_key(|p| !favorites.contains(&p.id));
    visible
}
