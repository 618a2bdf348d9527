//! End-to-end scenarios for the text analysis façade.

use lancia::TextAnalyzer;
use lancia::entity::EntityType;
use lancia::error::Result;

#[test]
fn test_process_text_italian_scenario() -> Result<()> {
    let analyzer = TextAnalyzer::new();

    let analysis = analyzer.process_text("Il tuo testo qui")?;

    assert_eq!(analysis.tokens, vec!["il", "tuo", "testo", "qui"]);
    assert_eq!(analysis.pos_tags.len(), 4);
    assert!(analysis.entities.is_empty());

    Ok(())
}

#[test]
fn test_tokens_align_with_tags_for_any_text() -> Result<()> {
    let analyzer = TextAnalyzer::new();

    for text in [
        "",
        "   \t\n",
        "solo",
        "Una frase un po' più lunga, con punteggiatura!",
        "Numbers 42 and dates 2024 mixed with l'italiano",
        "???",
    ] {
        let analysis = analyzer.process_text(text)?;
        assert_eq!(
            analysis.tokens.len(),
            analysis.pos_tags.len(),
            "misaligned for {text:?}"
        );
    }

    Ok(())
}

#[test]
fn test_keyword_extraction_scenario() -> Result<()> {
    let analyzer = TextAnalyzer::new();

    let keywords = analyzer.extract_keywords("Il tuo testo qui", 5)?;

    // "il" and "tuo" are stop words; at most "testo" and "qui" remain
    assert!(keywords.len() <= 2);
    assert!(keywords.iter().any(|k| k.term == "testo"));
    for pair in keywords.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }

    Ok(())
}

#[test]
fn test_keyword_top_n_bounds() -> Result<()> {
    let analyzer = TextAnalyzer::new();
    let text = "fattura cliente ordine spedizione magazzino inventario";

    assert!(analyzer.extract_keywords(text, 0)?.is_empty());
    assert_eq!(analyzer.extract_keywords(text, 3)?.len(), 3);
    assert!(analyzer.extract_keywords(text, 100)?.len() <= 100);

    for keyword in analyzer.extract_keywords(text, 10)? {
        assert!(keyword.score >= 0.0);
    }

    Ok(())
}

#[test]
fn test_similarity_scenarios() -> Result<()> {
    let analyzer = TextAnalyzer::new();

    // Shared token "testo", differing elsewhere: strictly between 0 and 1
    let partial = analyzer.similarity_analysis("primo testo", "secondo testo")?;
    assert!(partial > 0.0);
    assert!(partial < 1.0);

    // Identical non-empty texts
    let same = analyzer.similarity_analysis("primo testo", "primo testo")?;
    assert!((same - 1.0).abs() < 1e-9);

    // Either side empty
    assert_eq!(analyzer.similarity_analysis("", "primo testo")?, 0.0);
    assert_eq!(analyzer.similarity_analysis("primo testo", "")?, 0.0);

    Ok(())
}

#[test]
fn test_similarity_is_symmetric() -> Result<()> {
    let analyzer = TextAnalyzer::new();

    let pairs = [
        ("trova i clienti", "conta i clienti"),
        ("fatture di marzo", "ordini di aprile"),
        ("", "qualcosa"),
    ];

    for (a, b) in pairs {
        assert_eq!(
            analyzer.similarity_analysis(a, b)?,
            analyzer.similarity_analysis(b, a)?
        );
    }

    Ok(())
}

#[test]
fn test_query_intent_scenario() -> Result<()> {
    let analyzer = TextAnalyzer::new();
    let query = "trova tutti i clienti di Roma";

    let analysis = analyzer.process_text(query)?;
    assert!(
        analysis
            .entities
            .iter()
            .any(|e| e.text == "Roma" && e.entity_type == EntityType::Loc)
    );

    let intent = analyzer.get_query_intent(query)?;
    assert_eq!(intent.primary_intent, "search");
    assert!(intent.confidence > 0.0);

    Ok(())
}

#[test]
fn test_intent_confidence_always_bounded() -> Result<()> {
    let analyzer = TextAnalyzer::new();

    for query in [
        "",
        "trova i clienti",
        "quanti ordini abbiamo",
        "somma il totale delle fatture",
        "parole senza alcun innesco",
        "trova conta somma filtra ordina",
    ] {
        let intent = analyzer.get_query_intent(query)?;
        assert!(intent.confidence >= 0.0, "query {query:?}");
        assert!(intent.confidence <= 1.0, "query {query:?}");
    }

    Ok(())
}

#[test]
fn test_results_are_deterministic() -> Result<()> {
    let analyzer = TextAnalyzer::new();
    let text = "trova le fatture di Telecom Italia e ordina per data";

    let first = analyzer.process_text(text)?;
    let second = analyzer.process_text(text)?;
    assert_eq!(first, second);

    let keywords_first = analyzer.extract_keywords(text, 5)?;
    let keywords_second = analyzer.extract_keywords(text, 5)?;
    assert_eq!(keywords_first, keywords_second);

    Ok(())
}

#[test]
fn test_batch_preserves_order_and_results() -> Result<()> {
    let analyzer = TextAnalyzer::new();
    let texts: Vec<String> = (0..32)
        .map(|i| format!("trova l'ordine numero {i} del cliente di Milano"))
        .collect();

    let batch = analyzer.process_batch(&texts)?;

    assert_eq!(batch.len(), texts.len());
    for (text, result) in texts.iter().zip(&batch) {
        assert_eq!(result, &analyzer.process_text(text)?);
    }

    Ok(())
}
