use std::fmt;

/// Supported interface locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    En,
    Fa,
}

/// Layout direction derived from the locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    /// Value for the HTML `dir` attribute.
    pub fn attr(self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

impl Locale {
    /// Locale used when no (or an unsupported) selector is present.
    /// The site is Persian-first.
    pub const DEFAULT: Locale = Locale::Fa;

    /// All supported locales, in toggle order.
    pub const ALL: &'static [Locale] = &[Locale::En, Locale::Fa];

    /// Two-letter locale code as used in routes and `lang/*.json` names.
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fa => "fa",
        }
    }

    /// Parse a locale code; `None` for anything outside the supported set.
    pub fn from_code(code: &str) -> Option<Locale> {
        match code {
            "en" => Some(Locale::En),
            "fa" => Some(Locale::Fa),
            _ => None,
        }
    }

    /// The other half of the binary language toggle.
    pub fn toggle(self) -> Locale {
        match self {
            Locale::En => Locale::Fa,
            Locale::Fa => Locale::En,
        }
    }

    /// Persian reads right-to-left; everything else left-to-right.
    pub fn direction(self) -> Direction {
        match self {
            Locale::Fa => Direction::Rtl,
            Locale::En => Direction::Ltr,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn direction_follows_locale() {
        assert_eq!(Locale::Fa.direction(), Direction::Rtl);
        assert_eq!(Locale::En.direction(), Direction::Ltr);
        assert_eq!(Locale::Fa.direction().attr(), "rtl");
        assert_eq!(Locale::En.direction().attr(), "ltr");
    }

    #[test]
    fn toggle_is_an_involution() {
        for &locale in Locale::ALL {
            assert_eq!(locale.toggle().toggle(), locale);
            assert!(locale.toggle() != locale);
        }
    }

    #[test]
    fn codes_round_trip() {
        for &locale in Locale::ALL {
            assert_eq!(Locale::from_code(locale.code()), Some(locale));
        }
        assert_eq!(Locale::from_code("de"), None);
        assert_eq!(Locale::from_code(""), None);
        assert_eq!(Locale::from_code("FA"), None);
    }
}
