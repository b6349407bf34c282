//! Base URLs for the Reel Rating backend services.
//!
//! The display service is reachable either on the deployed host at
//! [`GUI_PORT`] or from a local static file server during development. Only
//! the navigation URLs follow that choice; every backend service is always
//! addressed on [`DEPLOYED_HOST`].

use log::debug;
use serde::{Deserialize, Serialize};

use crate::validation::ValidationPatterns;

pub const DEPLOYED_HOST: &str = "moxie.cs.oswego.edu";
pub const LOCAL_HOST: &str = "localhost";
pub const LOCAL_SERVICE_HOST: &str = "127.0.0.1";

pub const GUI_PORT: u16 = 30400;
pub const LOCAL_DEV_PORT: u16 = 5500;

/// Where the local dev server exposes the display service's webapp folder.
pub const LOCAL_PATH_PREFIX: &str = "/frontend/reel-rating-display-service/src/main/webapp";

pub const HOME_PATH: &str = "/views/home.html";
pub const INDEX_PATH: &str = "/index.html";

/// Backend services consumed by the frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Service {
    Auth,
    MovieData,
    Reviews,
    Ratings,
    Actor,
    Search,
}

impl Service {
    pub const ALL: [Service; 6] = [
        Service::Auth,
        Service::MovieData,
        Service::Reviews,
        Service::Ratings,
        Service::Actor,
        Service::Search,
    ];

    pub fn port(self) -> u16 {
        match self {
            Service::Auth => 30500,
            Service::MovieData => 30501,
            Service::Reviews => 30502,
            Service::Ratings => 30503,
            Service::Actor => 30504,
            Service::Search => 30505,
        }
    }

    /// Context root the service is mounted under.
    pub fn context_root(self) -> &'static str {
        match self {
            Service::Auth => "/reel-rating-auth-service",
            Service::MovieData => "/reel-rating-movie-data-service",
            Service::Reviews => "/reel-rating-review-data-service",
            Service::Ratings => "/reel-rating-rating-data-service",
            Service::Actor => "/reel-rating-actor-data-service",
            Service::Search => "/reel-rating-search-service",
        }
    }

    pub fn base_url(self) -> String {
        format!("http://{}:{}{}", DEPLOYED_HOST, self.port(), self.context_root())
    }

    /// The loopback address the service would have in a local setup.
    ///
    /// Not used by [`AppConfig`]: services are always reached on the deployed
    /// host, even when the page itself is served locally.
    pub fn local_base_url(self) -> String {
        format!("http://{}:{}{}", LOCAL_SERVICE_HOST, self.port(), self.context_root())
    }
}

/// Which host the navigation URLs point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Deployment {
    Deployed,
    LocalDevelopment,
}

impl Deployment {
    /// Pages served on the GUI port are deployed; anything else, including a
    /// missing port, is local development.
    pub fn from_port(port: Option<&str>) -> Self {
        match port {
            Some(p) if p == GUI_PORT.to_string() => Deployment::Deployed,
            _ => Deployment::LocalDevelopment,
        }
    }

    fn page_url(self, path: &str) -> String {
        match self {
            Deployment::Deployed => format!("http://{}:{}{}", DEPLOYED_HOST, GUI_PORT, path),
            Deployment::LocalDevelopment => format!(
                "http://{}:{}{}{}",
                LOCAL_HOST, LOCAL_DEV_PORT, LOCAL_PATH_PREFIX, path
            ),
        }
    }
}

/// Immutable set of URLs and validation patterns for one page load.
///
/// Build it once and hand it to consumers by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    deployment: Deployment,
    home_location: String,
    index_location: String,
    auth_base: String,
    log_in_path: String,
    reg_path: String,
    movie_data_base: String,
    movie_img_base: String,
    review_base: String,
    ratings_base: String,
    actor_base: String,
    search_base: String,
    patterns: ValidationPatterns,
}

impl AppConfig {
    /// Builds the configuration for a page served on `port`.
    pub fn for_port(port: Option<&str>) -> Self {
        let deployment = Deployment::from_port(port);
        debug!("Building app config for port {:?} ({:?})", port, deployment);

        let auth_base = Service::Auth.base_url();
        let movie_data_base = Service::MovieData.base_url();

        Self {
            deployment,
            home_location: deployment.page_url(HOME_PATH),
            index_location: deployment.page_url(INDEX_PATH),
            log_in_path: format!("{}/auth/login", auth_base),
            reg_path: format!("{}/auth/register", auth_base),
            auth_base,
            movie_img_base: format!("{}/movie/getMovieImage", movie_data_base),
            movie_data_base,
            review_base: Service::Reviews.base_url(),
            ratings_base: Service::Ratings.base_url(),
            actor_base: Service::Actor.base_url(),
            search_base: Service::Search.base_url(),
            patterns: ValidationPatterns::new(),
        }
    }

    pub fn deployment(&self) -> Deployment {
        self.deployment
    }

    pub fn home_location(&self) -> &str {
        &self.home_location
    }

    pub fn index_location(&self) -> &str {
        &self.index_location
    }

    pub fn log_in_path(&self) -> &str {
        &self.log_in_path
    }

    pub fn reg_path(&self) -> &str {
        &self.reg_path
    }

    pub fn movie_data_base(&self) -> &str {
        &self.movie_data_base
    }

    pub fn movie_img_base(&self) -> &str {
        &self.movie_img_base
    }

    pub fn review_base(&self) -> &str {
        &self.review_base
    }

    pub fn ratings_base(&self) -> &str {
        &self.ratings_base
    }

    pub fn actor_base(&self) -> &str {
        &self.actor_base
    }

    pub fn search_base(&self) -> &str {
        &self.search_base
    }

    pub fn patterns(&self) -> &ValidationPatterns {
        &self.patterns
    }

    pub fn service_base(&self, service: Service) -> &str {
        match service {
            Service::Auth => &self.auth_base,
            Service::MovieData => &self.movie_data_base,
            Service::Reviews => &self.review_base,
            Service::Ratings => &self.ratings_base,
            Service::Actor => &self.actor_base,
            Service::Search => &self.search_base,
        }
    }

    /// Joins an operation path onto a service base URL.
    pub fn endpoint(&self, service: Service, path: &str) -> String {
        crate::routes::join(self.service_base(service), path)
    }

    pub fn endpoints(&self) -> ServiceEndpoints {
        ServiceEndpoints {
            home_location: self.home_location.clone(),
            index_location: self.index_location.clone(),
            log_in_path: self.log_in_path.clone(),
            reg_path: self.reg_path.clone(),
            movie_data_base: self.movie_data_base.clone(),
            movie_img_base: self.movie_img_base.clone(),
            review_base: self.review_base.clone(),
            ratings_base: self.ratings_base.clone(),
            actor_base: self.actor_base.clone(),
            search_base: self.search_base.clone(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::for_port(None)
    }
}

/// Serializable snapshot of the URL fields, keyed the way page scripts
/// expect them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceEndpoints {
    pub home_location: String,
    pub index_location: String,
    pub log_in_path: String,
    pub reg_path: String,
    pub movie_data_base: String,
    pub movie_img_base: String,
    pub review_base: String,
    pub ratings_base: String,
    pub actor_base: String,
    pub search_base: String,
}
