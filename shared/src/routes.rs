use urlencoding::encode;

use crate::config::{AppConfig, Service};

/// Joins `path` onto `base` with exactly one `/` between them.
///
/// A trailing slash on `path` is kept; some rating operations are mounted
/// with one.
pub fn join(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        base.to_string()
    } else {
        format!("{}/{}", base, path)
    }
}

/// Operations exposed by the rating data service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RatingRoute {
    CreateRating,
    MostPopularAggregatedRatingForMovie { movie_id: String },
    RatingsWithSameNameAndUpperbound,
    RatingsWithSameName { rating_name: String },
    RatingsWithMovieId { movie_id: String },
    RatingsWithUpperbound { upperbound: String },
    UniqueRatingCategoriesAndUserRating { movie_id: String },
    CreateTag { movie_id: String },
    TagsWithMovieId { movie_id: String },
    TagsWithTagName { tag_name: String },
    TagsWithUsername { username: String },
    TagState,
    TagScoresForMovieModal { movie_id: String },
    UpvoteTag,
    DownvoteTag,
}

impl RatingRoute {
    pub fn path(&self) -> String {
        match self {
            RatingRoute::CreateRating => "/rating/create".to_string(),
            RatingRoute::MostPopularAggregatedRatingForMovie { movie_id } => {
                format!("/rating/getMostPopularAggregatedRatingForMovie/{}", encode(movie_id))
            }
            RatingRoute::RatingsWithSameNameAndUpperbound => {
                "/rating/getRatingsWithSameNameAndUpperbound/".to_string()
            }
            RatingRoute::RatingsWithSameName { rating_name } => {
                format!("/rating/getRatingsWithSameName/{}", encode(rating_name))
            }
            RatingRoute::RatingsWithMovieId { movie_id } => {
                format!("/rating/getRatingsWithMovieId/{}", encode(movie_id))
            }
            RatingRoute::RatingsWithUpperbound { upperbound } => {
                format!("/rating/getRatingsWithUpperbound/{}", encode(upperbound))
            }
            RatingRoute::UniqueRatingCategoriesAndUserRating { movie_id } => format!(
                "/rating/getUniqueRatingCategoriesAndUserRatingWithMovieId/{}",
                encode(movie_id)
            ),
            RatingRoute::CreateTag { movie_id } => format!("/tag/create/{}", encode(movie_id)),
            RatingRoute::TagsWithMovieId { movie_id } => {
                format!("/tag/getTagsWithMovieId/{}", encode(movie_id))
            }
            RatingRoute::TagsWithTagName { tag_name } => {
                format!("/tag/getTagsWithTagName/{}", encode(tag_name))
            }
            RatingRoute::TagsWithUsername { username } => {
                format!("/tag/getTagsWithUsername/{}", encode(username))
            }
            RatingRoute::TagState => "/tag/getTagState/".to_string(),
            RatingRoute::TagScoresForMovieModal { movie_id } => {
                format!("/tag/getTagScoresForMovieModal/{}", encode(movie_id))
            }
            RatingRoute::UpvoteTag => "/tag/upvoteTag/".to_string(),
            RatingRoute::DownvoteTag => "/tag/downvoteTag/".to_string(),
        }
    }

    pub fn url(&self, config: &AppConfig) -> String {
        config.endpoint(Service::Ratings, &self.path())
    }
}

/// Image URL for a movie, served by the movie data service.
///
/// Assumes the image route takes the movie id as its last path segment.
pub fn movie_image_url(config: &AppConfig, movie_id: &str) -> String {
    join(config.movie_img_base(), &encode(movie_id))
}
