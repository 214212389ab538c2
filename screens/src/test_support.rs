use std::{
    sync::atomic::{AtomicUsize, Ordering},
    time::Duration,
};

use movie_directory::{DirectoryError, MovieDetail, MovieDirectory, Rating, Result, SearchResultItem};

/// Canned directory answer. Rebuilt into a fresh error on every call since
/// `DirectoryError` is not `Clone`.
#[derive(Clone)]
pub enum Canned<T> {
    Ok(T),
    DirectoryError(String),
    Timeout,
}

impl<T: Clone> Canned<T> {
    fn produce(&self) -> Result<T> {
        match self {
            Canned::Ok(v) => Ok(v.clone()),
            Canned::DirectoryError(m) => Err(DirectoryError::Directory(m.clone())),
            Canned::Timeout => Err(DirectoryError::Timeout(Duration::from_secs(10))),
        }
    }
}

pub struct FakeDirectory {
    pub search: Canned<Vec<SearchResultItem>>,
    pub lookup: Canned<MovieDetail>,
    pub searches: AtomicUsize,
    pub lookups: AtomicUsize,
}

impl FakeDirectory {
    pub fn new(search: Canned<Vec<SearchResultItem>>, lookup: Canned<MovieDetail>) -> Self {
        Self {
            search,
            lookup,
            searches: AtomicUsize::new(0),
            lookups: AtomicUsize::new(0),
        }
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    pub fn searches(&self) -> usize {
        self.searches.load(Ordering::SeqCst)
    }
}

impl MovieDirectory for FakeDirectory {
    async fn search(&self, _query: &str) -> Result<Vec<SearchResultItem>> {
        self.searches.fetch_add(1, Ordering::SeqCst);
        self.search.produce()
    }

    async fn lookup(&self, _identifier: &str) -> Result<MovieDetail> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.lookup.produce()
    }
}

pub fn item(identifier: &str, title: &str, year: &str) -> SearchResultItem {
    SearchResultItem {
        identifier: identifier.into(),
        title: title.into(),
        year: year.into(),
        poster_url: format!("https://img.example/{identifier}.jpg"),
    }
}

pub fn matrix() -> MovieDetail {
    MovieDetail {
        title: "The Matrix".into(),
        year: "1999".into(),
        poster_url: "https://img.example/tt0133093.jpg".into(),
        plot: "A hacker learns the truth about his reality.".into(),
        actors: "Keanu Reeves, Laurence Fishburne".into(),
        ratings: vec![
            Rating {
                source: "Internet Movie Database".into(),
                value: "8.7/10".into(),
            },
            Rating {
                source: "Rotten Tomatoes".into(),
                value: "83%".into(),
            },
            Rating {
                source: "Metacritic".into(),
                value: "73/100".into(),
            },
        ],
    }
}
