//! Aggregate queries and integrity checks over the registry indexes.
//!
//! The registry keeps two separately mutated indexes. This module holds the
//! operations that look at them as a whole:
//! - Total credit count, taken from the filmography side
//! - Summary counts for debugging
//! - Validation that both indexes describe the same credits

use crate::error::{ImdbError, IndexSide, Result};
use crate::types::Imdb;
use rayon::prelude::*;
use tracing::warn;

impl Imdb {
    /// Returns the total number of movie-actor credits.
    ///
    /// With 2 movies, the first crediting 1 actor and the second 6, this
    /// returns 7. The count is summed over actor filmographies, so movies
    /// removed under `RemovalPolicy::RetainCredits` still count.
    pub fn get_total_num_credits(&self) -> usize {
        self.actor_index
            .par_iter()
            .map(|(_, movies)| movies.len())
            .sum()
    }

    /// Get (movies, actors, credits) counts for debugging/validation
    pub fn counts(&self) -> (usize, usize, usize) {
        (
            self.movie_index.len(),
            self.actor_index.len(),
            self.get_total_num_credits(),
        )
    }

    /// Validate that both indexes hold exactly the same credits
    ///
    /// Check that:
    /// - Every actor in a cast lists the movie in their filmography
    /// - Every movie in a filmography is released and lists the actor
    ///
    /// Returns the first inconsistency found. Removing a movie under the
    /// default policy leaves credits that fail the second check.
    pub fn validate(&self) -> Result<()> {
        for (movie, cast) in &self.movie_index {
            for actor in cast {
                if !self.get_movies_for_actor(actor).contains(movie) {
                    warn!(movie = %movie.name(), actor = %actor.name(), "Credit missing from filmography");
                    return Err(ImdbError::InconsistentCredit {
                        movie: movie.name().to_string(),
                        actor: actor.name().to_string(),
                        missing_from: IndexSide::Filmography,
                    });
                }
            }
        }

        for (actor, movies) in &self.actor_index {
            for movie in movies {
                let credited = self
                    .movie_index
                    .get(movie)
                    .is_some_and(|cast| cast.contains(actor));
                if !credited {
                    warn!(movie = %movie.name(), actor = %actor.name(), "Credit missing from cast");
                    return Err(ImdbError::InconsistentCredit {
                        movie: movie.name().to_string(),
                        actor: actor.name().to_string(),
                        missing_from: IndexSide::Cast,
                    });
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Actor, Movie, RemovalPolicy};

    fn actor(name: &str) -> Actor {
        Actor::new(name, None, None)
    }

    #[test]
    fn test_total_credits_one_plus_six() {
        let mut imdb = Imdb::new();

        imdb.release_movie(Movie::new("Solo", None, None), [actor("A")]);
        imdb.release_movie(
            Movie::new("Ensemble", None, None),
            ["B", "C", "D", "E", "F", "G"].map(actor),
        );

        assert_eq!(imdb.get_total_num_credits(), 7);
        assert_eq!(imdb.counts(), (2, 7, 7));
    }

    #[test]
    fn test_total_credits_counts_stale_entries() {
        let mut imdb = Imdb::new();
        let movie = Movie::new("Gone", None, None);
        imdb.release_movie(movie.clone(), [actor("A"), actor("B")]);

        imdb.remove_movie(&movie);

        assert_eq!(imdb.counts(), (0, 2, 2));
    }

    #[test]
    fn test_validate_consistent_registry() {
        let mut imdb = Imdb::new();
        let movie = Movie::new("Fargo", None, Some(1996));
        imdb.release_movie(movie.clone(), [actor("Frances McDormand")]);
        imdb.tag_actor_in_movie(movie, actor("William H. Macy"));

        assert!(imdb.validate().is_ok());
    }

    #[test]
    fn test_validate_reports_stale_credit() {
        let mut imdb = Imdb::new();
        let movie = Movie::new("Fargo", None, Some(1996));
        imdb.release_movie(movie.clone(), [actor("Steve Buscemi")]);
        imdb.remove_movie(&movie);

        assert_eq!(
            imdb.validate(),
            Err(ImdbError::InconsistentCredit {
                movie: "Fargo".to_string(),
                actor: "Steve Buscemi".to_string(),
                missing_from: IndexSide::Cast,
            })
        );
    }

    #[test]
    fn test_validate_after_pruning_removal() {
        let mut imdb = Imdb::new().with_removal_policy(RemovalPolicy::PruneCredits);
        let movie = Movie::new("Fargo", None, Some(1996));
        imdb.release_movie(movie.clone(), [actor("Steve Buscemi")]);
        imdb.remove_movie(&movie);

        assert!(imdb.validate().is_ok());
        assert_eq!(imdb.get_total_num_credits(), 0);
    }
}
