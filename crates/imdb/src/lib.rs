//! # Imdb Crate
//!
//! An in-memory registry of movie credits: which actors appear in which
//! movies, queryable in both directions.
//!
//! ## Main Components
//!
//! - **types**: Domain types (Actor, Movie) and the registry itself (Imdb)
//! - **index**: Credit totals, summary counts and integrity validation
//! - **error**: Error types for registry lookups
//!
//! ## Example Usage
//!
//! ```
//! use imdb::{Actor, Imdb, Movie};
//!
//! let mut imdb = Imdb::new();
//! let movie = Movie::new("Arrival", Some("Denis Villeneuve".to_string()), Some(2016));
//!
//! imdb.release_movie(movie.clone(), [Actor::new("Amy Adams", None, None)]);
//! imdb.tag_actor_in_movie(movie.clone(), Actor::new("Jeremy Renner", None, None));
//!
//! assert_eq!(imdb.get_actors_in_movie(&movie)?.len(), 2);
//! assert_eq!(imdb.get_total_num_credits(), 2);
//! # Ok::<(), imdb::ImdbError>(())
//! ```
//!
//! ## Update Semantics
//!
//! 1. **Release** replaces a movie's cast wholesale
//! 2. **Tag** adds one actor to a cast, leaving the rest alone
//! 3. **Remove** drops the movie's cast; filmographies follow the configured
//!    `RemovalPolicy`
//! 4. Unknown movies are an error, unknown actors an empty result

pub mod error;
pub mod index;
pub mod types;

pub use error::{ImdbError, IndexSide, Result};
pub use types::{Actor, Imdb, Movie, RemovalPolicy};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_imdb_creation() {
        let imdb = Imdb::new();
        let (movies, actors, credits) = imdb.counts();

        assert_eq!(movies, 0);
        assert_eq!(actors, 0);
        assert_eq!(credits, 0);
        assert_eq!(imdb.get_all_actors().len(), 0);
    }

    #[test]
    fn test_release_then_tag_scenario() {
        let mut imdb = Imdb::new();
        let movie_a = Movie::new("Movie A", Some("Director".to_string()), Some(2001));
        let actor1 = Actor::new("Actor 1", None, None);
        let actor2 = Actor::new("Actor 2", None, None);
        let actor3 = Actor::new("Actor 3", None, None);

        imdb.release_movie(movie_a.clone(), [actor1.clone(), actor2.clone()]);
        imdb.tag_actor_in_movie(movie_a.clone(), actor3.clone());

        let expected: BTreeSet<Actor> = [actor1, actor2, actor3.clone()].into();
        assert_eq!(imdb.get_actors_in_movie(&movie_a).unwrap(), &expected);

        let films: Vec<&Movie> = imdb.get_movies_for_actor(&actor3).iter().collect();
        assert_eq!(films, vec![&movie_a]);
        assert_eq!(imdb.get_total_num_credits(), 3);
    }

    #[test]
    fn test_empty_queries() {
        let imdb = Imdb::new();
        let movie = Movie::new("Missing", None, None);
        let actor = Actor::new("Missing", None, None);

        // Unknown movies error, unknown actors come back empty
        assert!(imdb.get_actors_in_movie(&movie).is_err());
        assert!(imdb.get_movies_for_actor(&actor).is_empty());
        assert!(!imdb.contains_movie(&movie));
        assert!(imdb.validate().is_ok());
    }
}
