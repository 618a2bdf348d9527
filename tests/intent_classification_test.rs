//! Integration tests for lexicon-driven intent classification.

use std::sync::Arc;

use lancia::TextAnalyzer;
use lancia::analysis::analyzer::standard::StandardAnalyzer;
use lancia::error::Result;
use lancia::intent::classifier::IntentClassifier;
use lancia::intent::lexicon::{IntentLexicon, IntentSpec, TriggerSpec};
use lancia::intent::UNKNOWN_INTENT;
use lancia::resources::ResourceBundle;

fn classifier_from(specs: Vec<IntentSpec>) -> IntentClassifier {
    IntentClassifier::new(
        Arc::new(IntentLexicon::from_specs(specs).unwrap()),
        Arc::new(StandardAnalyzer::new()),
    )
}

#[test]
fn test_default_taxonomy_coverage() -> Result<()> {
    let analyzer = TextAnalyzer::new();

    let cases = [
        ("trova tutti i clienti di Roma", "search"),
        ("cerca le fatture di marzo", "search"),
        ("quanti ordini abbiamo ricevuto", "count"),
        ("somma il totale delle vendite", "aggregate"),
        ("filtra i risultati per regione", "filter"),
        ("ordina i clienti per fatturato", "sort"),
    ];

    for (query, expected) in cases {
        let result = analyzer.get_query_intent(query)?;
        assert_eq!(result.primary_intent, expected, "query {query:?}");
        assert!(result.confidence > 0.0);
    }

    Ok(())
}

#[test]
fn test_unmatched_query_falls_back_to_unknown() -> Result<()> {
    let analyzer = TextAnalyzer::new();

    let result = analyzer.get_query_intent("buongiorno, come stai?")?;

    assert_eq!(result.primary_intent, UNKNOWN_INTENT);
    assert_eq!(result.confidence, 0.0);

    Ok(())
}

#[test]
fn test_scores_breakdown_covers_all_intents() -> Result<()> {
    let analyzer = TextAnalyzer::new();

    let result = analyzer.get_query_intent("trova i clienti")?;

    assert_eq!(result.scores.len(), analyzer.resources().lexicon().len());
    let mass: f64 = result.scores.values().sum();
    let max = result
        .scores
        .values()
        .cloned()
        .fold(0.0_f64, f64::max);
    assert!((result.confidence - max / mass).abs() < 1e-12);

    Ok(())
}

#[test]
fn test_tie_resolves_to_declaration_order() {
    let classifier = classifier_from(vec![
        IntentSpec {
            intent: "alpha".to_string(),
            triggers: vec![TriggerSpec::term("segnale", 1.0)],
        },
        IntentSpec {
            intent: "beta".to_string(),
            triggers: vec![TriggerSpec::term("segnale", 1.0)],
        },
    ]);

    let result = classifier.classify("un segnale condiviso").unwrap();

    assert_eq!(result.primary_intent, "alpha");
    assert_eq!(result.confidence, 0.5);
}

#[test]
fn test_weights_shift_the_winner() {
    let classifier = classifier_from(vec![
        IntentSpec {
            intent: "weak".to_string(),
            triggers: vec![
                TriggerSpec::term("comune", 0.5),
                TriggerSpec::term("raro", 0.5),
            ],
        },
        IntentSpec {
            intent: "strong".to_string(),
            triggers: vec![TriggerSpec::term("comune", 3.0)],
        },
    ]);

    // Both of weak's triggers fire (1.0) but strong's single trigger outweighs them
    let result = classifier.classify("un termine comune e uno raro").unwrap();

    assert_eq!(result.primary_intent, "strong");
    assert_eq!(result.confidence, 0.75);
}

#[test]
fn test_pattern_triggers_match_lowercased_query() {
    let classifier = classifier_from(vec![IntentSpec {
        intent: "sort".to_string(),
        triggers: vec![TriggerSpec::pattern(r"\bin ordine\b", 2.0)],
    }]);

    let result = classifier.classify("Mettili IN ORDINE alfabetico").unwrap();

    assert_eq!(result.primary_intent, "sort");
}

#[test]
fn test_custom_bundle_lexicon_is_honored() -> Result<()> {
    let lexicon = IntentLexicon::from_specs(vec![IntentSpec {
        intent: "export".to_string(),
        triggers: vec![
            TriggerSpec::term("esporta", 2.0),
            TriggerSpec::term("export", 2.0),
        ],
    }])?;

    let bundle = ResourceBundle::new(
        lancia::resources::defaults::default_stop_words(),
        lancia::resources::defaults::default_gazetteer(),
        lexicon,
    );
    let analyzer = TextAnalyzer::with_resources(bundle);

    let result = analyzer.get_query_intent("esporta i dati dei clienti")?;
    assert_eq!(result.primary_intent, "export");

    // The default taxonomy is gone with the custom lexicon
    let result = analyzer.get_query_intent("trova i clienti")?;
    assert_eq!(result.primary_intent, UNKNOWN_INTENT);

    Ok(())
}
