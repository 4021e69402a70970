//! CMS payloads shaped like the REST API's `?_embed=1` responses.
//!
//! Written to temp files so tests go through the same loading path as the CLI.

use std::io::Write;

use tempfile::NamedTempFile;

/// A list response: one fully populated title, one with editor mistakes,
/// one with almost nothing filled in.
pub const CATALOG: &str = r#"[
    {
        "id": 1,
        "slug": "the-last-horizon",
        "title": { "rendered": "The Last Horizon" },
        "excerpt": { "rendered": "<p>A crew drifts past the <strong>edge</strong>.</p>\n" },
        "acf": {
            "release_year": "2024",
            "imdb_rating": 8.4,
            "runtime_minutes": 132,
            "trailer_url": " https://www.youtube.com/watch?v=abc ",
            "stream_type": "iframe",
            "stream_iframe": "<iframe width=\"560\" height=\"315\" src=\"https://www.youtube.com/embed/abc\" title=\"YouTube video player\" frameborder=\"0\" allowfullscreen></iframe>",
            "stream_provider": "YouTube"
        },
        "_embedded": {
            "wp:featuredmedia": [
                {
                    "source_url": "https://cms.example/uploads/horizon.jpg",
                    "media_details": {
                        "sizes": {
                            "thumbnail": { "source_url": "https://cms.example/uploads/horizon-150.jpg" },
                            "medium_large": { "source_url": "https://cms.example/uploads/horizon-768.jpg" }
                        }
                    }
                }
            ],
            "wp:term": [
                [
                    { "id": 3, "name": "Sci-Fi", "slug": "sci-fi", "taxonomy": "genre" },
                    { "id": 4, "name": "Action", "slug": "action", "taxonomy": "genre" }
                ],
                [
                    { "id": 20, "name": "space", "slug": "space", "taxonomy": "post_tag" }
                ]
            ]
        }
    },
    {
        "id": 2,
        "slug": "midnight-protocol",
        "title": { "rendered": "Midnight Protocol" },
        "acf": {
            "release_year": "twenty twenty-two",
            "imdb_rating": 79,
            "runtime_minutes": "101",
            "trailer_url": "   ",
            "stream_type": "iframe",
            "stream_iframe": "<iframe src=\"https://youtube.com.evil.example/x\" onload=\"steal()\"></iframe>"
        },
        "_embedded": {
            "wp:term": [
                [ { "id": 5, "name": "Thriller", "slug": "thriller", "taxonomy": "genre" } ]
            ]
        }
    },
    {
        "id": 3,
        "slug": "northbound",
        "acf": []
    }
]"#;

pub fn write_temp(json: &str) -> NamedTempFile {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(json.as_bytes()).unwrap();
    f.flush().unwrap();
    f
}
