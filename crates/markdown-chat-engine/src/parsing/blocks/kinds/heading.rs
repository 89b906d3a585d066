use crate::parsing::blocks::HeadingLevel;

pub struct Heading;

impl Heading {
    /// Markers checked against the untrimmed line.
    pub const MARKERS: [(&'static str, HeadingLevel); 3] = [
        ("### ", HeadingLevel::H3),
        ("## ", HeadingLevel::H2),
        ("# ", HeadingLevel::H1),
    ];

    /// Returns the level and the text after the marker.
    pub fn detect(line: &str) -> Option<(HeadingLevel, &str)> {
        Self::MARKERS.iter().find_map(|(marker, level)| {
            line.strip_prefix(marker).map(|text| (*level, text))
        })
    }
}
