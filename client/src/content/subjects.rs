//! Subjects offered, rendered as the card grid in the `subjects` section.

#[cfg(test)]
#[path = "subjects_test.rs"]
mod subjects_test;

/// Card colour family; maps to a `subject-card--*` modifier in the stylesheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accent {
    Blue,
    Purple,
    Green,
    Red,
    Orange,
    Indigo,
}

impl Accent {
    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Blue => "subject-card--blue",
            Self::Purple => "subject-card--purple",
            Self::Green => "subject-card--green",
            Self::Red => "subject-card--red",
            Self::Orange => "subject-card--orange",
            Self::Indigo => "subject-card--indigo",
        }
    }
}

/// Pictogram shown in the card's icon tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubjectIcon {
    Calculator,
    Atom,
    Globe,
    Book,
    Pen,
    Chip,
}

impl SubjectIcon {
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Calculator => "\u{2211}",
            Self::Atom => "\u{269B}",
            Self::Globe => "\u{1F310}",
            Self::Book => "Aa",
            Self::Pen => "\u{0905}",
            Self::Chip => "</>",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Subject {
    pub title: &'static str,
    pub description: &'static str,
    pub accent: Accent,
    pub icon: SubjectIcon,
}

pub const SUBJECTS: [Subject; 6] = [
    Subject {
        title: "Mathematics",
        description: "Algebra, Geometry, Calculus & More",
        accent: Accent::Blue,
        icon: SubjectIcon::Calculator,
    },
    Subject {
        title: "Physics",
        description: "Mechanics, Thermodynamics, Optics",
        accent: Accent::Purple,
        icon: SubjectIcon::Atom,
    },
    Subject {
        title: "Chemistry",
        description: "Organic, Inorganic & Physical Chemistry",
        accent: Accent::Green,
        icon: SubjectIcon::Globe,
    },
    Subject {
        title: "English",
        description: "Grammar, Literature & Writing Skills",
        accent: Accent::Red,
        icon: SubjectIcon::Book,
    },
    Subject {
        title: "Hindi",
        description: "व्याकरण, साहित्य और लेखन कौशल",
        accent: Accent::Orange,
        icon: SubjectIcon::Pen,
    },
    Subject {
        title: "Computer Science",
        description: "Programming, Data Structures, Algorithms",
        accent: Accent::Indigo,
        icon: SubjectIcon::Chip,
    },
];

/// Examination boards listed under the grid.
pub const BOARDS: [&str; 4] = ["CBSE", "ICSE", "State Board", "IB"];

pub const GRADE_LINE: &str =
    "Classes 6th to 12th • All competitive exam preparation including JEE, NEET, and Board Exams";
