use crate::sorter_core::error::{MediaSorterError, Result};
use time::Month;
use unic_langid::LanguageIdentifier;

const DEFAULT_LOCALE: &str = "en-US";

const ENGLISH: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

const ITALIAN: [&str; 12] = [
    "gennaio", "febbraio", "marzo", "aprile", "maggio", "giugno", "luglio", "agosto",
    "settembre", "ottobre", "novembre", "dicembre",
];

const FRENCH: [&str; 12] = [
    "janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août", "septembre",
    "octobre", "novembre", "décembre",
];

const GERMAN: [&str; 12] = [
    "Januar", "Februar", "März", "April", "Mai", "Juni", "Juli", "August", "September",
    "Oktober", "November", "Dezember",
];

const SPANISH: [&str; 12] = [
    "enero", "febrero", "marzo", "abril", "mayo", "junio", "julio", "agosto", "septiembre",
    "octubre", "noviembre", "diciembre",
];

const PORTUGUESE: [&str; 12] = [
    "janeiro", "fevereiro", "março", "abril", "maio", "junho", "julho", "agosto", "setembro",
    "outubro", "novembro", "dezembro",
];

const DUTCH: [&str; 12] = [
    "januari", "februari", "maart", "april", "mei", "juni", "juli", "augustus", "september",
    "oktober", "november", "december",
];

/// Locale used to name month directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthLocale {
    langid: LanguageIdentifier,
    names: &'static [&'static str; 12],
}

impl MonthLocale {
    /// Parse a BCP-47 tag (`it-IT`) or a POSIX locale name (`it_IT.UTF-8`).
    pub fn parse(locale: &str) -> Result<Self> {
        let tag = locale
            .split(['.', '@'])
            .next()
            .unwrap_or_default()
            .trim()
            .replace('_', "-");

        let langid: LanguageIdentifier = tag
            .parse()
            .map_err(|_| MediaSorterError::InvalidLocale(locale.to_string()))?;

        let names = match langid.language.as_str() {
            "en" => &ENGLISH,
            "it" => &ITALIAN,
            "fr" => &FRENCH,
            "de" => &GERMAN,
            "es" => &SPANISH,
            "pt" => &PORTUGUESE,
            "nl" => &DUTCH,
            other => {
                log::warn!("No month names for language '{}', using English", other);
                &ENGLISH
            }
        };

        Ok(MonthLocale { langid, names })
    }

    /// The operating system locale, or `en-US` when it is unknown or unusable.
    pub fn system() -> Self {
        sys_locale::get_locale()
            .and_then(|l| MonthLocale::parse(&l).ok())
            .unwrap_or_default()
    }

    pub fn month_name(&self, month: Month) -> &'static str {
        self.names[month as usize - 1]
    }
}

impl Default for MonthLocale {
    fn default() -> Self {
        MonthLocale {
            langid: DEFAULT_LOCALE.parse().unwrap_or_default(),
            names: &ENGLISH,
        }
    }
}

impl std::fmt::Display for MonthLocale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.langid)
    }
}
