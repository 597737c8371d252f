use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

pub const GROUPS_PER_YEAR: u8 = 3;
pub const SECTIONS_PER_GROUP: u8 = 3;
pub const SECTIONS_PER_YEAR: u8 = GROUPS_PER_YEAR * SECTIONS_PER_GROUP;

/// A cluster of three sections sharing a lecture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Group(u8);

impl Group {
    pub const ALL: [Group; 3] = [Group(1), Group(2), Group(3)];

    pub fn new(n: u8) -> Option<Self> {
        (1..=GROUPS_PER_YEAR).contains(&n).then_some(Self(n))
    }

    pub fn number(&self) -> u8 {
        self.0
    }

    /// Literal marker searched for in a lecture's `sections` text.
    pub fn marker(&self) -> String {
        format!("Group {}", self.0)
    }

    /// Section numbers (1-9) covered by this group.
    pub fn section_numbers(&self) -> [u8; 3] {
        let first = (self.0 - 1) * SECTIONS_PER_GROUP + 1;
        [first, first + 1, first + 2]
    }
}

/// Section identifier `Y{year}S{n}`, ordered by year then section number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SectionId {
    year: u8,
    number: u8,
}

impl SectionId {
    pub fn new(year: u8, number: u8) -> Option<Self> {
        if (1..=4).contains(&year) && (1..=SECTIONS_PER_YEAR).contains(&number) {
            Some(Self { year, number })
        } else {
            None
        }
    }

    pub fn year(&self) -> u8 {
        self.year
    }

    pub fn number(&self) -> u8 {
        self.number
    }

    pub fn group(&self) -> Group {
        Group((self.number - 1) / SECTIONS_PER_GROUP + 1)
    }

    /// True for the leftmost section of its group (1, 4, 7).
    pub fn starts_group(&self) -> bool {
        self.number % SECTIONS_PER_GROUP == 1
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Y{}S{}", self.year, self.number)
    }
}

impl FromStr for SectionId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rest = s
            .strip_prefix('Y')
            .ok_or_else(|| format!("Invalid section id: {s}"))?;
        let (year, number) = rest
            .split_once('S')
            .ok_or_else(|| format!("Invalid section id: {s}"))?;

        let year: u8 = year
            .parse()
            .map_err(|_| format!("Invalid section id: {s}"))?;
        let number: u8 = number
            .parse()
            .map_err(|_| format!("Invalid section id: {s}"))?;

        SectionId::new(year, number).ok_or_else(|| format!("Invalid section id: {s}"))
    }
}

impl Serialize for SectionId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
