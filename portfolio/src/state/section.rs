//! Addressable page sections and the scroll probe that picks the active one.

use std::fmt;
use std::str::FromStr;

/// One of the four anchors reachable from the navigation bar.
///
/// Skills and projects are rendered too but carry no anchor, so they never
/// become active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Home,
    About,
    Services,
    Contact,
}

impl Section {
    /// Probe order. The first section containing the probe wins.
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::About,
        Section::Services,
        Section::Contact,
    ];

    /// DOM id of the section element.
    pub const fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Services => "services",
            Section::Contact => "contact",
        }
    }

    /// Capitalised label used in the nav.
    pub const fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Services => "Services",
            Section::Contact => "Contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown section id: {0}")]
pub struct ParseSectionError(pub String);

impl FromStr for Section {
    type Err = ParseSectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.id() == s)
            .ok_or_else(|| ParseSectionError(s.to_string()))
    }
}

/// Vertical span of a section element in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub const fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Half-open `[top, top + height)`.
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Returns the first section (in [`Section::ALL`] order) whose bounds contain
/// `scroll_y + probe_offset`.
///
/// `bounds_of` yields `None` for sections that are not in the document; those
/// are skipped. `None` overall means nothing matched and the caller should
/// keep whatever was active before.
pub fn probe_active_section<F>(scroll_y: f64, probe_offset: f64, mut bounds_of: F) -> Option<Section>
where
    F: FnMut(Section) -> Option<SectionBounds>,
{
    let probe = scroll_y + probe_offset;
    Section::ALL
        .into_iter()
        .find(|&section| bounds_of(section).is_some_and(|bounds| bounds.contains(probe)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Stacked layout: home 0..800, about 800..1400, services 1400..2200,
    /// contact 2200..3000 with skills/projects sitting in between.
    fn stacked(section: Section) -> Option<SectionBounds> {
        Some(match section {
            Section::Home => SectionBounds::new(0.0, 800.0),
            Section::About => SectionBounds::new(800.0, 600.0),
            Section::Services => SectionBounds::new(1400.0, 800.0),
            Section::Contact => SectionBounds::new(3400.0, 900.0),
        })
    }

    #[test]
    fn ids_round_trip_through_from_str() {
        for section in Section::ALL {
            assert_eq!(section.id().parse::<Section>(), Ok(section));
        }
        assert_eq!(
            "skills".parse::<Section>(),
            Err(ParseSectionError("skills".into()))
        );
    }

    #[test]
    fn labels_are_capitalised_ids() {
        let labels: Vec<_> = Section::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(labels, vec!["Home", "About", "Services", "Contact"]);
    }

    #[test]
    fn bounds_are_half_open() {
        let bounds = SectionBounds::new(100.0, 50.0);
        assert!(bounds.contains(100.0));
        assert!(bounds.contains(149.9));
        assert!(!bounds.contains(150.0));
        assert!(!bounds.contains(99.9));
    }

    #[test]
    fn top_of_page_probes_home() {
        assert_eq!(probe_active_section(0.0, 200.0, stacked), Some(Section::Home));
    }

    #[test]
    fn probe_is_offset_below_the_viewport_top() {
        // scroll 600 + 200 = 800 is the first pixel of about
        assert_eq!(probe_active_section(600.0, 200.0, stacked), Some(Section::About));
        assert_eq!(probe_active_section(599.0, 200.0, stacked), Some(Section::Home));
    }

    #[test]
    fn scrolling_into_services_activates_services() {
        assert_eq!(
            probe_active_section(1300.0, 200.0, stacked),
            Some(Section::Services)
        );
    }

    #[test]
    fn gap_between_sections_matches_nothing() {
        // 2500 lands in the unanchored skills/projects area
        assert_eq!(probe_active_section(2300.0, 200.0, stacked), None);
    }

    #[test]
    fn missing_elements_are_skipped() {
        let only_contact = |section: Section| match section {
            Section::Contact => Some(SectionBounds::new(0.0, 500.0)),
            _ => None,
        };
        assert_eq!(
            probe_active_section(0.0, 200.0, only_contact),
            Some(Section::Contact)
        );
    }

    #[test]
    fn first_match_in_order_wins_on_overlap() {
        let overlapping = |_| Some(SectionBounds::new(0.0, 1000.0));
        assert_eq!(probe_active_section(0.0, 200.0, overlapping), Some(Section::Home));
    }
}
