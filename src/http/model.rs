use serde::{Deserialize, Deserializer};

/// Envelope returned by `/api/search/songs`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub success: bool,
    pub data: SearchData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchData {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub start: u64,
    #[serde(default)]
    pub results: Vec<Song>,
}

/// A ranked quality variant of an image or audio stream.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Link {
    #[serde(default)]
    pub quality: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Album {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ArtistRef {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Artists {
    #[serde(default)]
    pub primary: Vec<ArtistRef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub primary_artists: Option<String>,
    #[serde(default)]
    pub artists: Option<Artists>,
    #[serde(default)]
    pub album: Option<Album>,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default, deserialize_with = "seconds")]
    pub duration: Option<u64>,
    #[serde(default)]
    pub image: Vec<Link>,
    #[serde(default)]
    pub download_url: Vec<Link>,
}

impl Song {
    /// Artist line shown under the title. Older payloads carry a flat
    /// `primaryArtists` string, newer ones a structured `artists.primary` list.
    pub fn artist_line(&self) -> String {
        if let Some(flat) = self.primary_artists.as_deref().filter(|s| !s.is_empty()) {
            return flat.to_string();
        }
        self.artists
            .as_ref()
            .map(|a| {
                a.primary
                    .iter()
                    .map(|artist| artist.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            })
            .unwrap_or_default()
    }

    pub fn image_url(&self, index: usize) -> Option<&str> {
        pick(&self.image, index)
    }

    pub fn stream_url(&self, index: usize) -> Option<&str> {
        pick(&self.download_url, index)
    }
}

/// Link at `index`, or the highest ranked one when the list is shorter.
fn pick(links: &[Link], index: usize) -> Option<&str> {
    links
        .get(index)
        .or_else(|| links.last())
        .map(|link| link.url.as_str())
}

fn seconds<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u64),
        Text(String),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Number(n)) => Some(n),
        Some(Raw::Text(s)) => s.trim().parse().ok(),
        None => None,
    })
}
