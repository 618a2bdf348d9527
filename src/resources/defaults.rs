//! Compiled-in default resources.
//!
//! The defaults target the library's home domain: Italian-language queries
//! over business data, with English fallbacks. They are deliberately small;
//! production deployments load richer resources from files.

use std::collections::HashSet;

use crate::analysis::token_filter::stop::DEFAULT_STOP_WORDS_SET;
use crate::entity::gazetteer::{Gazetteer, GazetteerSpec};
use crate::intent::lexicon::{IntentLexicon, IntentSpec, TriggerSpec};

/// Default place names: major Italian cities and nearby countries.
const DEFAULT_LOCATIONS: &[&str] = &[
    "Roma", "Milano", "Napoli", "Torino", "Palermo", "Genova", "Bologna", "Firenze", "Venezia",
    "Verona", "Bari", "Catania", "Padova", "Trieste", "Cagliari", "Italia", "Francia", "Germania",
    "Spagna", "Svizzera", "Austria",
];

/// Default organization names.
const DEFAULT_ORGANIZATIONS: &[&str] = &[
    "Telecom Italia",
    "Poste Italiane",
    "Ferrovie dello Stato",
    "Banca Intesa",
    "Eni",
    "Enel",
    "Fiat",
    "Ferrari",
    "Olivetti",
];

/// Default person names.
const DEFAULT_PERSONS: &[&str] = &[
    "Dante Alighieri",
    "Giuseppe Verdi",
    "Leonardo da Vinci",
    "Galileo Galilei",
];

/// The default stopword set (Italian + English).
pub fn default_stop_words() -> HashSet<String> {
    DEFAULT_STOP_WORDS_SET.clone()
}

/// The default gazetteer.
pub fn default_gazetteer() -> Gazetteer {
    let spec = GazetteerSpec {
        locations: DEFAULT_LOCATIONS.iter().map(|s| s.to_string()).collect(),
        organizations: DEFAULT_ORGANIZATIONS.iter().map(|s| s.to_string()).collect(),
        persons: DEFAULT_PERSONS.iter().map(|s| s.to_string()).collect(),
    };
    // The compiled-in lists contain no empty names
    Gazetteer::from_spec(&spec).expect("default gazetteer entries are valid")
}

/// The default intent lexicon for the query-generation taxonomy.
///
/// Declaration order is the tie-break order: search, count, aggregate,
/// filter, sort.
pub fn default_intent_lexicon() -> IntentLexicon {
    let specs = vec![
        IntentSpec {
            intent: "search".to_string(),
            triggers: vec![
                TriggerSpec::term("trova", 2.0),
                TriggerSpec::term("cerca", 2.0),
                TriggerSpec::term("mostra", 1.5),
                TriggerSpec::term("elenca", 1.5),
                TriggerSpec::term("find", 2.0),
                TriggerSpec::term("search", 2.0),
                TriggerSpec::term("show", 1.5),
                TriggerSpec::term("list", 1.5),
                TriggerSpec::pattern(r"\bfammi vedere\b", 1.5),
            ],
        },
        IntentSpec {
            intent: "count".to_string(),
            triggers: vec![
                TriggerSpec::term("quanti", 2.0),
                TriggerSpec::term("quante", 2.0),
                TriggerSpec::term("conta", 2.0),
                TriggerSpec::term("count", 2.0),
                TriggerSpec::term("totale", 1.0),
                TriggerSpec::pattern(r"\bhow many\b", 2.0),
            ],
        },
        IntentSpec {
            intent: "aggregate".to_string(),
            triggers: vec![
                TriggerSpec::term("somma", 2.0),
                TriggerSpec::term("media", 2.0),
                TriggerSpec::term("massimo", 1.5),
                TriggerSpec::term("minimo", 1.5),
                TriggerSpec::term("sum", 2.0),
                TriggerSpec::term("average", 2.0),
            ],
        },
        IntentSpec {
            intent: "filter".to_string(),
            triggers: vec![
                TriggerSpec::term("filtra", 2.0),
                TriggerSpec::term("escludi", 1.5),
                TriggerSpec::term("filter", 2.0),
                TriggerSpec::term("exclude", 1.5),
                TriggerSpec::term("solo", 1.0),
                TriggerSpec::term("only", 1.0),
            ],
        },
        IntentSpec {
            intent: "sort".to_string(),
            triggers: vec![
                TriggerSpec::term("ordina", 2.0),
                TriggerSpec::term("ordinati", 1.5),
                TriggerSpec::term("sort", 2.0),
                TriggerSpec::term("order", 1.5),
                TriggerSpec::pattern(r"\bin ordine\b", 1.5),
            ],
        },
    ];

    // The compiled-in specs are known-valid
    IntentLexicon::from_specs(specs).expect("default intent lexicon is valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_gazetteer_builds() {
        let gazetteer = default_gazetteer();

        assert!(!gazetteer.is_empty());
        let words = vec!["roma"];
        assert!(gazetteer.longest_match(&words, 0).is_some());
    }

    #[test]
    fn test_default_lexicon_order() {
        let lexicon = default_intent_lexicon();

        let names: Vec<&str> = lexicon.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["search", "count", "aggregate", "filter", "sort"]);
    }

    #[test]
    fn test_default_stop_words_cover_both_languages() {
        let stop_words = default_stop_words();

        assert!(stop_words.contains("il"));
        assert!(stop_words.contains("the"));
    }
}
