/// The seven major elements. Characters are aligned to exactly one.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Element {
    Cryo,
    Hydro,
    Pyro,
    Electro,
    Anemo,
    Geo,
    Dendro,
}

impl Element {
    pub const ALL: [Self; 7] = [
        Self::Cryo,
        Self::Hydro,
        Self::Pyro,
        Self::Electro,
        Self::Anemo,
        Self::Geo,
        Self::Dendro,
    ];
}

/// A held die face.
///
/// `Omni` is the universal face: it pays for any single elemental unit.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Die {
    Cryo,
    Hydro,
    Pyro,
    Electro,
    Anemo,
    Geo,
    Dendro,
    Omni,
}

impl Die {
    /// Element shown on the face, `None` for `Omni`.
    pub const fn element(self) -> Option<Element> {
        match self {
            Self::Cryo => Some(Element::Cryo),
            Self::Hydro => Some(Element::Hydro),
            Self::Pyro => Some(Element::Pyro),
            Self::Electro => Some(Element::Electro),
            Self::Anemo => Some(Element::Anemo),
            Self::Geo => Some(Element::Geo),
            Self::Dendro => Some(Element::Dendro),
            Self::Omni => None,
        }
    }

    #[inline]
    pub const fn is_omni(self) -> bool {
        matches!(self, Self::Omni)
    }
}

impl From<Element> for Die {
    fn from(element: Element) -> Self {
        match element {
            Element::Cryo => Self::Cryo,
            Element::Hydro => Self::Hydro,
            Element::Pyro => Self::Pyro,
            Element::Electro => Self::Electro,
            Element::Anemo => Self::Anemo,
            Element::Geo => Self::Geo,
            Element::Dendro => Self::Dendro,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_faces_round_trip() {
        for element in Element::ALL {
            assert_eq!(Die::from(element).element(), Some(element));
        }
        assert_eq!(Die::Omni.element(), None);
    }

    #[test]
    fn names_parse_case_insensitively() {
        assert_eq!("Pyro".parse::<Element>(), Ok(Element::Pyro));
        assert_eq!("omni".parse::<Die>(), Ok(Die::Omni));
        assert_eq!(Element::Dendro.to_string(), "dendro");
    }
}
