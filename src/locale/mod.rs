//! Language-specific tables: month and weekday names, plural-category
//! selection, number formatting, and phrase joining.
//!
//! Locales are plain values implementing [`Locale`], collected in an
//! explicit caller-owned [`LocaleRegistry`]. The registry is meant to
//! be filled once during startup and read from then on; registering
//! while other threads are already looking locales up is a caller
//! error, so initialise locales before spawning workers.

mod en;
mod pl;

pub use self::en::EnglishLocale;
pub use self::pl::PolishLocale;

use crate::cal::datetime::{Month, Weekday};
use crate::error::Error;
use crate::period::Unit;


/// The closed set of plural categories a magnitude can select.
///
/// English only ever distinguishes `One` from `Other`; Slavic grammar
/// needs `Few` (2–4, outside the teens) and `Many` as well.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub enum PluralCategory {
    One,
    Few,
    Many,
    Other,
}

/// Everything the formatter and the humanizer need to know about one
/// language.
///
/// New languages are added by implementing this trait and registering
/// the value — there is no base class to inherit and nothing else to
/// hook into.
pub trait Locale: Send + Sync {

    /// The language tag this locale registers under, such as `"en"`.
    fn tag(&self) -> &'static str;

    /// The full name of a month, such as “January”.
    fn long_month_name(&self, month: Month) -> &'static str;

    /// The short name of a month, such as “Jan”.
    fn short_month_name(&self, month: Month) -> &'static str;

    /// The full name of a weekday, such as “Monday”.
    fn long_day_name(&self, day: Weekday) -> &'static str;

    /// The short name of a weekday, such as “Mon”.
    fn short_day_name(&self, day: Weekday) -> &'static str;

    /// Selects the plural category for a whole magnitude.
    fn plural_category(&self, count: u64) -> PluralCategory;

    /// The plural category used for fractional magnitudes, which the
    /// whole-number rule does not cover.
    fn fractional_category(&self) -> PluralCategory {
        PluralCategory::Other
    }

    /// The decimal separator used when rendering fractional numbers.
    fn decimal_separator(&self) -> char;

    /// The noun for a unit under a plural category, such as “seconds”.
    fn unit_name(&self, unit: Unit, category: PluralCategory) -> &'static str;

    /// The word joining the last two phrases of a list.
    fn conjunction(&self) -> &'static str;

    /// Joins unit phrases per this language’s list conventions.
    fn join_phrases(&self, phrases: &[String]) -> String {
        match phrases {
            [] => String::new(),
            [only] => only.clone(),
            [rest @ .., last] => {
                format!("{} {} {}", rest.join(", "), self.conjunction(), last)
            }
        }
    }
}


/// An explicit, caller-owned table of locales, looked up by tag.
///
/// Registration is the only mutation and is expected to finish before
/// any concurrent reads begin.
pub struct LocaleRegistry {
    locales: Vec<Box<dyn Locale>>,
}

impl LocaleRegistry {

    /// A registry pre-loaded with the built-in locales, English and
    /// Polish.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(Box::new(EnglishLocale));
        registry.register(Box::new(PolishLocale));
        registry
    }

    /// A registry with nothing in it.
    pub fn empty() -> Self {
        Self { locales: Vec::new() }
    }

    /// Registers a locale. A locale registered later under an existing
    /// tag replaces the earlier one.
    pub fn register(&mut self, locale: Box<dyn Locale>) {
        self.locales.retain(|known| known.tag() != locale.tag());
        self.locales.push(locale);
    }

    /// Looks a locale up by its tag.
    pub fn get(&self, tag: &str) -> Result<&dyn Locale, Error> {
        self.locales.iter()
            .find(|locale| locale.tag() == tag)
            .map(|boxed| &**boxed)
            .ok_or_else(|| Error::UnsupportedLocale { tag: tag.into() })
    }

    /// Whether a tag has a locale registered.
    pub fn is_registered(&self, tag: &str) -> bool {
        self.locales.iter().any(|locale| locale.tag() == tag)
    }
}

impl Default for LocaleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for LocaleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
         .entries(self.locales.iter().map(|locale| locale.tag()))
         .finish()
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn builtins_are_registered() {
        let registry = LocaleRegistry::new();
        assert!(registry.is_registered("en"));
        assert!(registry.is_registered("pl"));
    }

    #[test]
    fn unknown_tag() {
        let registry = LocaleRegistry::new();
        let err = registry.get("tlh").unwrap_err();
        assert_eq!(err, Error::UnsupportedLocale { tag: "tlh".into() });
    }

    #[test]
    fn registration_replaces() {
        struct Override;

        impl Locale for Override {
            fn tag(&self) -> &'static str { "en" }
            fn long_month_name(&self, _: Month) -> &'static str { "Smarch" }
            fn short_month_name(&self, _: Month) -> &'static str { "Smh" }
            fn long_day_name(&self, _: Weekday) -> &'static str { "Someday" }
            fn short_day_name(&self, _: Weekday) -> &'static str { "Som" }
            fn plural_category(&self, _: u64) -> PluralCategory { PluralCategory::Other }
            fn decimal_separator(&self) -> char { '.' }
            fn unit_name(&self, _: Unit, _: PluralCategory) -> &'static str { "whiles" }
            fn conjunction(&self) -> &'static str { "plus" }
        }

        let mut registry = LocaleRegistry::new();
        registry.register(Box::new(Override));

        let en = registry.get("en").unwrap();
        assert_eq!(en.long_month_name(Month::January), "Smarch");
    }

    #[test]
    fn empty_registry_knows_nothing() {
        let registry = LocaleRegistry::empty();
        assert!(registry.get("en").is_err());
    }
}
