// vantablack/src/content/video.rs

//! Recognizes the video links admins paste into products and promotions.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static YOUTUBE: Lazy<Regex> = Lazy::new(|| {
  Regex::new(r#"(?:youtube\.com/(?:[^/]+/.+/|(?:v|e(?:mbed)?)/|.*[?&]v=)|youtu\.be/)([^"&?/\s]{11})"#)
    .expect("YouTube pattern is valid")
});

static VIMEO: Lazy<Regex> = Lazy::new(|| Regex::new(r"vimeo\.com/(\d+)").expect("Vimeo pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "platform", rename_all = "lowercase")]
pub enum VideoSource {
  YouTube { id: String },
  Vimeo { id: String },
  /// A playable file URL (MP4, WebM, ...).
  Direct { url: String },
}

impl VideoSource {
  pub fn classify(url: &str) -> Self {
    if let Some(id) = capture(&YOUTUBE, url) {
      return VideoSource::YouTube { id };
    }
    if let Some(id) = capture(&VIMEO, url) {
      return VideoSource::Vimeo { id };
    }
    VideoSource::Direct { url: url.to_string() }
  }

  /// URL suitable for an embedded player.
  pub fn embed_url(&self) -> String {
    match self {
      VideoSource::YouTube { id } => format!("https://www.youtube.com/embed/{id}"),
      VideoSource::Vimeo { id } => format!("https://player.vimeo.com/video/{id}"),
      VideoSource::Direct { url } => url.clone(),
    }
  }

  pub fn is_streaming_platform(&self) -> bool {
    !matches!(self, VideoSource::Direct { .. })
  }
}

fn capture(pattern: &Regex, url: &str) -> Option<String> {
  pattern
    .captures(url)
    .and_then(|caps| caps.get(1))
    .map(|m| m.as_str().to_string())
}
