//! Keyword weights for the home page tag cloud.
//!
//! Weight is how often a keyword occurs across all articles, so a keyword
//! listed twice in one article counts twice. Display size is a linear map of
//! that weight onto `[min_size, max_size]`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::content::Article;

/// Default smallest font size in pixels.
pub const DEFAULT_MIN_SIZE: u32 = 12;
/// Default largest font size in pixels.
pub const DEFAULT_MAX_SIZE: u32 = 35;

/// Pixel range the cloud is drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagCloudSizes {
    pub min_size: u32,
    pub max_size: u32,
}

impl Default for TagCloudSizes {
    fn default() -> Self {
        Self {
            min_size: DEFAULT_MIN_SIZE,
            max_size: DEFAULT_MAX_SIZE,
        }
    }
}

impl TagCloudSizes {
    /// Same range with the bounds in ascending order.
    fn normalized(self) -> Self {
        Self {
            min_size: self.min_size.min(self.max_size),
            max_size: self.min_size.max(self.max_size),
        }
    }
}

/// One keyword of the cloud.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagWeight {
    pub value: String,
    /// Occurrences across all articles
    pub count: usize,
    /// Font size in pixels
    pub size: u32,
}

/// Count keywords across `articles` and size them.
///
/// Tags keep first-seen order. When every keyword has the same count all
/// tags get the midpoint size.
pub fn tag_cloud<'a>(
    articles: impl IntoIterator<Item = &'a Article>,
    sizes: TagCloudSizes,
) -> Vec<TagWeight> {
    let sizes = sizes.normalized();
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();

    for keyword in articles.into_iter().flat_map(|a| a.keywords.iter()) {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            continue;
        }
        let count = counts.entry(keyword).or_insert(0);
        if *count == 0 {
            order.push(keyword);
        }
        *count += 1;
    }

    let lo = counts.values().copied().min().unwrap_or(0);
    let hi = counts.values().copied().max().unwrap_or(0);

    order
        .into_iter()
        .map(|value| {
            let count = counts[value];
            TagWeight {
                value: value.to_string(),
                count,
                size: scale(count, lo, hi, sizes),
            }
        })
        .collect()
}

fn scale(count: usize, lo: usize, hi: usize, sizes: TagCloudSizes) -> u32 {
    let span = sizes.max_size - sizes.min_size;
    if hi == lo {
        return sizes.min_size + span / 2;
    }
    let offset = (count - lo) as f64 / (hi - lo) as f64 * f64::from(span);
    sizes.min_size + offset.round() as u32
}
