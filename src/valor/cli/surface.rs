//! Output surfaces and their regions.
//!
//! A page is a fixed set of named regions. Not every page has every region, so
//! renderers ask [`Surface::has_region`] before writing and skip what is not there.
//! The results count is the one region whose absence alone means "don't show it".

use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Region {
    Loading,
    Error,
    NoResults,
    Count,
    Grid,
    Detail,
    Messages,
}

/// The mutually exclusive page states of a listing.
pub const STATE_REGIONS: [Region; 4] = [Region::Loading, Region::Error, Region::NoResults, Region::Grid];

pub trait Surface {
    fn has_region(&self, region: Region) -> bool;

    fn write(&mut self, region: Region, content: String);

    fn clear(&mut self, region: Region);

    /// Shows one page state, clearing the other three first.
    fn show_state(&mut self, region: Region, content: String) {
        for other in STATE_REGIONS {
            self.clear(other);
        }
        if self.has_region(region) {
            self.write(region, content);
        }
    }
}

/// A page rendered to text, regions emitted in [`Region`] order.
#[derive(Debug, Clone, Default)]
pub struct TerminalPage {
    available: Vec<Region>,
    contents: BTreeMap<Region, String>,
}

impl TerminalPage {
    pub fn with_regions(regions: &[Region]) -> Self {
        Self {
            available: regions.to_vec(),
            contents: BTreeMap::new(),
        }
    }

    /// The listing page; the count region is only there when asked for.
    pub fn listing(show_count: bool) -> Self {
        let mut regions = vec![
            Region::Loading,
            Region::Error,
            Region::NoResults,
            Region::Grid,
            Region::Messages,
        ];
        if show_count {
            regions.push(Region::Count);
        }
        Self::with_regions(&regions)
    }

    pub fn detail() -> Self {
        Self::with_regions(&[Region::Loading, Region::Error, Region::Detail, Region::Messages])
    }

    pub fn content(&self, region: Region) -> Option<&str> {
        self.contents.get(&region).map(String::as_str)
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        for content in self.contents.values() {
            let content = content.trim_end_matches('\n');
            if content.is_empty() {
                continue;
            }
            out.push_str(content);
            out.push('\n');
        }
        out
    }
}

impl Surface for TerminalPage {
    fn has_region(&self, region: Region) -> bool {
        self.available.contains(&region)
    }

    fn write(&mut self, region: Region, content: String) {
        if self.has_region(region) {
            self.contents.insert(region, content);
        }
    }

    fn clear(&mut self, region: Region) {
        self.contents.remove(&region);
    }
}
