//! Navigation targets on the landing page.

use std::fmt;

#[cfg(test)]
#[path = "sections_test.rs"]
mod sections_test;

/// Addressable page region, in header navigation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    About,
    Parents,
    WhyChoose,
    Subjects,
    Reviews,
    Contact,
}

impl SectionId {
    /// Every section, in the order the header lists them.
    pub const ALL: [Self; 6] = [
        Self::About,
        Self::Parents,
        Self::WhyChoose,
        Self::Subjects,
        Self::Reviews,
        Self::Contact,
    ];

    /// DOM element id of the section container.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Parents => "parents",
            Self::WhyChoose => "why-choose",
            Self::Subjects => "subjects",
            Self::Reviews => "reviews",
            Self::Contact => "contact",
        }
    }

    /// Header button label.
    #[must_use]
    pub fn nav_label(self) -> &'static str {
        match self {
            Self::About => "About",
            Self::Parents => "For Parents",
            Self::WhyChoose => "Why Choose Us",
            Self::Subjects => "Subjects",
            Self::Reviews => "Reviews",
            Self::Contact => "Contact",
        }
    }

    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.as_str() == id)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
