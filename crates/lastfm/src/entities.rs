use serde::Deserialize;

/// Nominal size of an image as labelled by Last.fm.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum ImageSize {
    Small,
    Medium,
    Large,
    ExtraLarge,
    Mega,
    Unrecognized(String),
}
impl From<String> for ImageSize {
    fn from(value: String) -> Self {
        match value.as_str() {
            "small" => Self::Small,
            "medium" => Self::Medium,
            "large" => Self::Large,
            "extralarge" => Self::ExtraLarge,
            "mega" => Self::Mega,
            _ => Self::Unrecognized(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Image {
    #[serde(rename = "#text")]
    pub text: String,
    pub size: ImageSize,
}
impl Image {
    /// Image locations embed a `WIDTHxHEIGHT` (or just `WIDTH`s) directory as the second to last path segment,
    /// as in `https://lastfm.freetls.fastly.net/i/u/300x300/2a96cbd8b46e442fc41c2b86b821562f.png`.
    /// Images are square, so only the leading width is read.
    pub fn square_size(&self) -> Option<u32> {
        let url = reqwest::Url::parse(&self.text).ok()?;
        let segments: Vec<&str> = url.path_segments()?.collect();
        let directory = segments.len().checked_sub(2).and_then(|index| segments.get(index))?;
        let digits = directory.bytes().take_while(u8::is_ascii_digit).count();
        directory[..digits].parse().ok()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Album {
    pub name: String,
    pub artist: String,
    pub mbid: Option<String>,
    pub url: Option<String>,
    #[serde(default)]
    pub image: Vec<Image>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Artist {
    pub name: String,
    pub mbid: Option<String>,
    pub url: Option<String>,
    #[serde(default)]
    pub image: Vec<Image>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Track {
    pub name: String,
    pub mbid: Option<String>,
    pub url: Option<String>,
    pub album: Option<TrackAlbum>,
}

/// The album a track was looked up on.
#[derive(Debug, Clone, Deserialize)]
pub struct TrackAlbum {
    pub artist: String,
    pub title: String,
    pub mbid: Option<String>,
    #[serde(default)]
    pub image: Vec<Image>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AlbumEnvelope { pub album: Album }

#[derive(Debug, Deserialize)]
pub(crate) struct ArtistEnvelope { pub artist: Artist }

#[derive(Debug, Deserialize)]
pub(crate) struct TrackEnvelope { pub track: Track }

#[cfg(test)]
mod tests {
    use super::*;

    fn image(text: &str) -> Image {
        Image { text: text.to_owned(), size: ImageSize::Large }
    }

    #[test]
    fn square_size_from_path() {
        assert_eq!(image("https://lastfm.freetls.fastly.net/i/u/300x300/2a96cbd8b46e442fc41c2b86b821562f.png").square_size(), Some(300));
        assert_eq!(image("https://lastfm.freetls.fastly.net/i/u/64s/2a96cbd8b46e442fc41c2b86b821562f.png").square_size(), Some(64));
        assert_eq!(image("https://lastfm.freetls.fastly.net/i/u/ar0/2a96cbd8b46e442fc41c2b86b821562f.png").square_size(), None);
        assert_eq!(image("").square_size(), None);
    }

    #[test]
    fn sizes() {
        let parsed: Vec<ImageSize> = serde_json::from_str(r#"["small","medium","large","extralarge","mega",""]"#).unwrap();
        assert_eq!(parsed, [
            ImageSize::Small, ImageSize::Medium, ImageSize::Large, ImageSize::ExtraLarge, ImageSize::Mega,
            ImageSize::Unrecognized(String::new())
        ]);
    }

    #[test]
    fn track_album_images() {
        let envelope: TrackEnvelope = serde_json::from_str(r##"{"track": {
            "name": "Smells Like Teen Spirit", "mbid": "", "url": "https://www.last.fm/music/Nirvana/_/Smells+Like+Teen+Spirit",
            "album": {
                "artist": "Nirvana", "title": "Nevermind", "mbid": "",
                "image": [{ "#text": "https://lastfm.freetls.fastly.net/i/u/34s/a.png", "size": "small" }]
            }
        }}"##).unwrap();
        let album = envelope.track.album.unwrap();
        assert_eq!(album.title, "Nevermind");
        assert_eq!(album.image[0].size, ImageSize::Small);
    }
}
