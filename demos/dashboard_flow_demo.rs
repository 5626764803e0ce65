//! Walks the dashboard data flow on a small inline dataset: build the
//! heatmap matrix ordered by a reference category, pick the top verb, pull
//! its questions, and print them with the verb marked.
//!
//! Run with `cargo run --example dashboard_flow_demo`.

use std::error::Error;

use bloomgrid::questions::{ids_for, select_by_ids};
use bloomgrid::{
    build_matrix, highlight, FrequencyRecord, HighlightMode, MatrixSpec, QuestionRecord,
};

fn main() -> Result<(), Box<dyn Error>> {
    let records = vec![
        FrequencyRecord::new("BT1", "listar", 4, vec![1, 2]),
        FrequencyRecord::new("BT2", "explicar", 3, vec![3]),
        FrequencyRecord::new("BT4", "analisar", 5, vec![4, 5]),
        FrequencyRecord::new("BT4", "comparar", 2, vec![5]),
        FrequencyRecord::new("BT6", "criar", 3, vec![6]),
    ];
    let bank = vec![
        question(1, "BT1", "Liste os conceitos principais do capítulo."),
        question(2, "BT1", "Liste três exemplos citados no texto."),
        question(3, "BT2", "Explique a diferença entre os dois métodos."),
        question(4, "BT4", "Analise o argumento central do autor."),
        question(5, "BT4", "Analise e compare as duas abordagens."),
        question(6, "BT6", "Crie um modelo alternativo de avaliação."),
    ];

    let reference = "BT4";
    let spec = MatrixSpec {
        reference_category: Some(reference.to_string()),
        ..MatrixSpec::default()
    };
    let matrix = build_matrix(&records, &spec)?;

    println!("Heatmap matrix (columns ordered by {reference}):");
    print!("{:>10}", "");
    for keyword in matrix.keywords() {
        print!("{keyword:>12}");
    }
    println!();
    for category in matrix.categories() {
        print!("{category:>10}");
        for value in matrix.row(category).unwrap_or(&[]) {
            print!("{value:>12}");
        }
        println!();
    }

    let selected_verb = match matrix.keywords().next() {
        Some(keyword) => keyword.to_string(),
        None => return Ok(()),
    };
    println!("\nQuestions for '{selected_verb}' in {reference}:");

    let ids = ids_for(&records, &selected_verb, reference);
    let questions = select_by_ids(&bank, &ids);
    let passages: Vec<&str> = questions
        .iter()
        .map(|question| question.text.as_str())
        .collect();
    for result in highlight(&passages, &selected_verb, &HighlightMode::default()) {
        println!("  - {}", marked(&result.text, &result.spans));
    }

    Ok(())
}

fn question(id: u32, category: &str, text: &str) -> QuestionRecord {
    QuestionRecord {
        id,
        category: category.to_string(),
        text: text.to_string(),
    }
}

fn marked(text: &str, spans: &[bloomgrid::Span]) -> String {
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    for span in spans {
        out.push_str(&text[cursor..span.start]);
        out.push('[');
        out.push_str(&text[span.start..span.end]);
        out.push(']');
        cursor = span.end;
    }
    out.push_str(&text[cursor..]);
    out
}
