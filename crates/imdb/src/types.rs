//! Core domain types for the credit registry.
//!
//! This module defines the two entities (Actor, Movie) and the registry that
//! links them (Imdb). Key points:
//! - Actor identity is its name alone; birthdate and city are descriptive
//! - Movie identity is the full (name, director, year) tuple
//! - Imdb keeps two indexes, movie → cast and actor → filmography

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::hash::{Hash, Hasher};
use tracing::{debug, instrument};

use crate::error::{ImdbError, Result};

// =============================================================================
// Actor
// =============================================================================

/// An actor known to the registry. Each actor's name must be unique.
///
/// Rust concept: `PartialEq`, `Hash` and `Ord` are implemented by hand so
/// that all three agree on the name being the only identity field. Deriving
/// them would pull birthdate and city into the key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    name: String,
    birthdate: Option<NaiveDate>,
    birth_city: Option<String>,
}

impl Actor {
    /// Creates a new actor. Birthdate and birth city may be unknown.
    pub fn new(
        name: impl Into<String>,
        birthdate: Option<NaiveDate>,
        birth_city: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            birthdate,
            birth_city,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn birthdate(&self) -> Option<NaiveDate> {
        self.birthdate
    }

    pub fn birth_city(&self) -> Option<&str> {
        self.birth_city.as_deref()
    }
}

impl PartialEq for Actor {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Actor {}

impl Hash for Actor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl PartialOrd for Actor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Actor {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        match self.birthdate {
            Some(date) => writeln!(f, "Birthday: {}", date)?,
            None => writeln!(f, "Birthday: unknown")?,
        }
        writeln!(
            f,
            "Birth city: {}",
            self.birth_city.as_deref().unwrap_or("unknown")
        )
    }
}

// =============================================================================
// Movie
// =============================================================================

/// A movie known to the registry.
///
/// Every field takes part in equality, so two movies sharing a name but not
/// a director or release year are different movies.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Movie {
    name: String,
    director: Option<String>,
    /// Release year, e.g. `Some(1994)`
    year_released: Option<u16>,
}

impl Movie {
    /// Creates a new movie. Director and release year may be unknown.
    pub fn new(name: impl Into<String>, director: Option<String>, year_released: Option<u16>) -> Self {
        Self {
            name: name.into(),
            director,
            year_released,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn director(&self) -> Option<&str> {
        self.director.as_deref()
    }

    pub fn year_released(&self) -> Option<u16> {
        self.year_released
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(
            f,
            "Director: {}",
            self.director.as_deref().unwrap_or("unknown")
        )?;
        match self.year_released {
            Some(year) => write!(f, "Release year: {}", year),
            None => write!(f, "Release year: unknown"),
        }
    }
}

// =============================================================================
// Registry configuration
// =============================================================================

/// What `remove_movie` does with filmography entries pointing at the
/// removed movie
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RemovalPolicy {
    /// Only the cast entry is dropped. Actors keep the movie in their
    /// filmography and it still counts toward total credits.
    #[default]
    RetainCredits,
    /// The movie is also dropped from every actor's filmography.
    /// Actors themselves are never removed.
    PruneCredits,
}

// =============================================================================
// Imdb - The Credit Registry
// =============================================================================

/// Shared empty filmography handed out for actors the registry has never seen
///
/// Rust concept: `BTreeSet::new` is a `const fn`, so an empty set can live in
/// a `static` and be borrowed for any lifetime.
static NO_MOVIES: BTreeSet<Movie> = BTreeSet::new();

/// Stores the credits linking movies and actors.
///
/// Supports releasing a movie with its whole cast, tagging a single actor
/// into an existing (or new) movie, removing a movie, and querying actors by
/// movie and movies by actor.
///
/// Both indexes are private; every mutation goes through `&mut self`, so a
/// caller can never observe one index updated without the other.
#[derive(Debug, Default)]
pub struct Imdb {
    /// Cast of each released movie
    pub(crate) movie_index: HashMap<Movie, BTreeSet<Actor>>,
    /// Filmography of each actor ever credited
    pub(crate) actor_index: HashMap<Actor, BTreeSet<Movie>>,
    pub(crate) removal_policy: RemovalPolicy,
}

impl Imdb {
    /// Creates an empty registry with the default removal policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure how `remove_movie` treats filmographies (default: retain)
    pub fn with_removal_policy(mut self, policy: RemovalPolicy) -> Self {
        self.removal_policy = policy;
        self
    }

    pub fn removal_policy(&self) -> RemovalPolicy {
        self.removal_policy
    }

    /// Releases a movie with its full cast.
    ///
    /// If the movie is already released its cast is replaced, not merged.
    /// Actors dropped by the replacement keep the movie in their filmography.
    #[instrument(skip(self, actors), fields(movie = %movie.name()))]
    pub fn release_movie<I>(&mut self, movie: Movie, actors: I)
    where
        I: IntoIterator<Item = Actor>,
    {
        let cast: BTreeSet<Actor> = actors.into_iter().collect();

        for actor in &cast {
            self.actor_index
                .entry(actor.clone())
                .or_default()
                .insert(movie.clone());
        }

        let cast_size = cast.len();
        let previous = self.movie_index.insert(movie, cast);
        debug!(
            "Released movie with {} actors (replaced cast: {:?})",
            cast_size,
            previous.map(|p| p.len())
        );
    }

    /// Credits one actor in one movie, creating either side if needed.
    ///
    /// Unlike `release_movie` this merges into an existing cast. Tagging the
    /// same pair twice has no further effect.
    #[instrument(skip(self), fields(movie = %movie.name(), actor = %actor.name()))]
    pub fn tag_actor_in_movie(&mut self, movie: Movie, actor: Actor) {
        let added_to_filmography = self
            .actor_index
            .entry(actor.clone())
            .or_default()
            .insert(movie.clone());
        let added_to_cast = self.movie_index.entry(movie).or_default().insert(actor);

        debug!(added_to_cast, added_to_filmography, "Tagged actor in movie");
    }

    /// Removes a movie from the registry.
    ///
    /// Returns `true` if the movie was released before this call. What
    /// happens to actor filmographies depends on the `RemovalPolicy`.
    #[instrument(skip(self), fields(movie = %movie.name()))]
    pub fn remove_movie(&mut self, movie: &Movie) -> bool {
        let Some(cast) = self.movie_index.remove(movie) else {
            debug!("Movie not released, nothing to remove");
            return false;
        };

        match self.removal_policy {
            RemovalPolicy::RetainCredits => {
                debug!(
                    "Removed movie; {} filmography entries left in place",
                    cast.len()
                );
            }
            RemovalPolicy::PruneCredits => {
                // Sweep every filmography: actors dropped by an earlier
                // re-release still reference the movie without being in `cast`.
                let mut pruned = 0;
                for movies in self.actor_index.values_mut() {
                    if movies.remove(movie) {
                        pruned += 1;
                    }
                }
                debug!("Removed movie and pruned {} filmography entries", pruned);
            }
        }

        true
    }

    /// Returns the cast of a movie.
    ///
    /// Fails with `ImdbError::UnknownMovie` if the movie is not released.
    pub fn get_actors_in_movie(&self, movie: &Movie) -> Result<&BTreeSet<Actor>> {
        self.movie_index
            .get(movie)
            .ok_or_else(|| ImdbError::UnknownMovie {
                movie: movie.name().to_string(),
            })
    }

    /// Returns the movies an actor has appeared in.
    ///
    /// An actor the registry has never seen gets an empty set, not an error.
    pub fn get_movies_for_actor(&self, actor: &Actor) -> &BTreeSet<Movie> {
        self.actor_index.get(actor).unwrap_or(&NO_MOVIES)
    }

    /// Returns every actor the registry has credited, including actors whose
    /// filmography has since been pruned to nothing
    pub fn get_all_actors(&self) -> impl ExactSizeIterator<Item = &Actor> + '_ {
        self.actor_index.keys()
    }

    /// Whether the movie is currently released
    pub fn contains_movie(&self, movie: &Movie) -> bool {
        self.movie_index.contains_key(movie)
    }
}
