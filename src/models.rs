//! Catalog Models
//!
//! Data structures matching the catalog API's JSON.

use serde::{Deserialize, Serialize};

/// A movie or TV show as returned in a result list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: u64,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    /// TV results carry `name` instead of `title`
    #[serde(default, alias = "name")]
    pub title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub vote_average: f64,
}

impl Movie {
    /// Backdrop if present, otherwise the poster
    pub fn artwork(&self) -> Option<&str> {
        self.backdrop_path
            .as_deref()
            .or(self.poster_path.as_deref())
            .filter(|path| !path.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateRange {
    pub maximum: String,
    pub minimum: String,
}

/// Paged result envelope
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MovieList {
    #[serde(default)]
    pub dates: Option<DateRange>,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub results: Vec<Movie>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u32,
}

impl MovieList {
    /// First result, shown in the banner
    pub fn featured(&self) -> Option<&Movie> {
        self.results.first()
    }

    /// Results after the featured one, shown as carousel tiles
    pub fn tiles(&self) -> &[Movie] {
        self.results.get(1..).unwrap_or(&[])
    }

    pub fn find(&self, id: u64) -> Option<&Movie> {
        self.results.iter().find(|movie| movie.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW_PLAYING: &str = r#"{
        "dates": {"maximum": "2021-09-20", "minimum": "2021-08-03"},
        "page": 1,
        "results": [
            {"id": 566525, "backdrop_path": "/b1.jpg", "poster_path": "/p1.jpg",
             "title": "Shang-Chi", "overview": "Martial-arts master.", "vote_average": 7.9,
             "adult": false, "genre_ids": [28, 12]},
            {"id": 436969, "backdrop_path": null, "poster_path": "/p2.jpg",
             "title": "The Suicide Squad", "overview": "", "vote_average": 8}
        ],
        "total_pages": 59,
        "total_results": 1170
    }"#;

    #[test]
    fn test_decode_now_playing() {
        let list: MovieList = serde_json::from_str(NOW_PLAYING).unwrap();
        assert_eq!(list.page, 1);
        assert_eq!(list.total_pages, 59);
        assert_eq!(list.dates.as_ref().unwrap().minimum, "2021-08-03");
        assert_eq!(list.results.len(), 2);
        assert_eq!(list.featured().unwrap().title, "Shang-Chi");
        assert_eq!(list.tiles().len(), 1);
        assert_eq!(list.results[1].vote_average, 8.0);
    }

    #[test]
    fn test_decode_tv_name_alias() {
        let json = r#"{"page": 1, "results": [{"id": 1, "name": "Show", "backdrop_path": "/s.jpg"}]}"#;
        let list: MovieList = serde_json::from_str(json).unwrap();
        assert!(list.dates.is_none());
        assert_eq!(list.results[0].title, "Show");
        assert_eq!(list.results[0].overview, "");
    }

    #[test]
    fn test_artwork_falls_back_to_poster() {
        let list: MovieList = serde_json::from_str(NOW_PLAYING).unwrap();
        assert_eq!(list.results[0].artwork(), Some("/b1.jpg"));
        assert_eq!(list.results[1].artwork(), Some("/p2.jpg"));
        assert_eq!(list.find(436969).map(|m| m.id), Some(436969));
        assert!(list.find(1).is_none());
    }

    #[test]
    fn test_empty_list_has_no_tiles() {
        let list = MovieList::default();
        assert!(list.featured().is_none());
        assert!(list.tiles().is_empty());
    }
}
