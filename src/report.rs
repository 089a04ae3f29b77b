use std::fmt::Write as _;

use crate::model::{AnswerRecord, QuizQuestion, ScoreSummary};

/// Agregados de una lista de respuestas. Las preguntas sin responder
/// (`selected == None`) no cuentan como intentadas.
pub fn summarize(answers: &[AnswerRecord]) -> ScoreSummary {
    let mut score = ScoreSummary::default();
    for record in answers {
        if record.selected.is_none() {
            continue;
        }
        score.answered += 1;
        if record.is_correct {
            score.correct += 1;
        } else {
            score.wrong += 1;
        }
    }
    score
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Compila el informe imprimible de la sesión: un documento HTML
/// autocontenido con cabecera de marca, fila de estadísticas, una caja por
/// pregunta respondida y pie de página.
///
/// Determinista: misma lista de respuestas, mismo documento. La única
/// no-determinación permitida es `generated_at`, que pone el llamante.
/// No muta la entrada ni toca red o disco.
pub fn compile_report(
    questions: &[QuizQuestion],
    answers: &[AnswerRecord],
    generated_at: &str,
) -> String {
    let score = summarize(answers);

    let mut doc = String::new();
    doc.push_str(
        "<!DOCTYPE html>\n<html lang=\"bn\">\n<head>\n<meta charset=\"UTF-8\">\n\
         <title>ICT Quiz Report - Toufiq Sir</title>\n<style>\n\
         @page { size: A4; margin: 10mm; }\n\
         body { font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; margin: 0; color: #1a202c; font-size: 9pt; }\n\
         .header { border-bottom: 2pt solid #2563eb; padding-bottom: 10px; margin-bottom: 15px; text-align: center; }\n\
         .header h1 { margin: 0; color: #1e3a8a; font-size: 20pt; text-transform: uppercase; }\n\
         .header h2 { margin: 2px 0; color: #2563eb; font-size: 14pt; }\n\
         .stats-row { display: flex; justify-content: space-between; background: #f1f5f9; padding: 10px; border-radius: 8px; margin-bottom: 15px; border: 1pt solid #cbd5e1; }\n\
         .stat-item { text-align: center; flex: 1; border-right: 1pt solid #cbd5e1; }\n\
         .stat-item:last-child { border-right: none; }\n\
         .stat-label { display: block; font-size: 7pt; color: #64748b; text-transform: uppercase; font-weight: 800; }\n\
         .stat-value { font-size: 12pt; font-weight: 900; color: #0f172a; }\n\
         .questions-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 10px; }\n\
         .question-box { padding: 8px; border: 0.5pt solid #e2e8f0; border-radius: 6px; break-inside: avoid; }\n\
         .q-text { font-weight: bold; margin-bottom: 4px; color: #1e293b; }\n\
         .option { padding: 2px 6px; margin: 1px 0; border-radius: 4px; font-size: 8pt; }\n\
         .correct-opt { background: #dcfce7; color: #166534; font-weight: bold; }\n\
         .wrong-opt { background: #fee2e2; color: #991b1b; text-decoration: line-through; }\n\
         .info { color: #2563eb; font-size: 7pt; font-style: italic; margin-top: 2px; border-top: 0.1pt dashed #cbd5e1; padding-top: 2px; }\n\
         .footer { text-align: center; margin-top: 15px; border-top: 1pt solid #e2e8f0; padding-top: 8px; color: #94a3b8; font-size: 7pt; }\n\
         </style>\n</head>\n<body>\n",
    );

    doc.push_str(
        "<div class=\"header\">\n<h1>ICT BY TOUFIQ SIR</h1>\n\
         <h2>QUIZ Result Progress Report</h2>\n\
         <div class=\"contact\">Contact: 01794903262</div>\n</div>\n",
    );

    let _ = write!(
        doc,
        "<div class=\"stats-row\">\n\
         <div class=\"stat-item\"><span class=\"stat-label\">Total Answered</span><span class=\"stat-value\">{}</span></div>\n\
         <div class=\"stat-item\"><span class=\"stat-label\">Correct</span><span class=\"stat-value\">{}</span></div>\n\
         <div class=\"stat-item\"><span class=\"stat-label\">Wrong</span><span class=\"stat-value\">{}</span></div>\n\
         <div class=\"stat-item\"><span class=\"stat-label\">Final Score</span><span class=\"stat-value\">{}</span></div>\n\
         <div class=\"stat-item\"><span class=\"stat-label\">Correct Rate</span><span class=\"stat-value\">{}%</span></div>\n\
         </div>\n",
        score.answered,
        score.correct,
        score.wrong,
        score.correct,
        score.correct_rate(),
    );

    doc.push_str("<div class=\"questions-grid\">\n");
    for record in answers {
        // Las no respondidas no entran en el listado detallado
        let Some(selected) = record.selected else {
            continue;
        };
        let Some(question) = questions.get(record.question_index) else {
            continue;
        };

        let _ = write!(
            doc,
            "<div class=\"question-box\">\n<div class=\"q-text\">{}. {}</div>\n",
            record.question_index + 1,
            escape_html(&question.question)
        );
        for (i, option) in question.options.iter().enumerate() {
            let class = if i == question.correct_answer {
                "option correct-opt"
            } else if i == selected && !record.is_correct {
                "option wrong-opt"
            } else {
                "option"
            };
            let mark = if i == question.correct_answer {
                " ✓"
            } else if i == selected && !record.is_correct {
                " ✗"
            } else {
                ""
            };
            let _ = write!(
                doc,
                "<div class=\"{class}\">{}{mark}</div>\n",
                escape_html(option)
            );
        }
        if !record.is_correct {
            let correct_text = question
                .options
                .get(question.correct_answer)
                .map(String::as_str)
                .unwrap_or("");
            let _ = write!(
                doc,
                "<div class=\"info\">Correct: {}</div>\n",
                escape_html(correct_text)
            );
        }
        doc.push_str("</div>\n");
    }
    doc.push_str("</div>\n");

    let _ = write!(
        doc,
        "<div class=\"footer\">Generated by 5MinICT Engine - Toufiq Sir - Master HSC ICT Easily - {}</div>\n\
         </body>\n</html>\n",
        escape_html(generated_at)
    );

    doc
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(text: &str, correct: usize) -> QuizQuestion {
        QuizQuestion {
            question: text.to_owned(),
            options: vec![
                "opción A".to_owned(),
                "opción B".to_owned(),
                "opción C".to_owned(),
                "opción D".to_owned(),
            ],
            correct_answer: correct,
        }
    }

    #[test]
    fn empty_session_yields_zero_count_document() {
        let doc = compile_report(&[], &[], "01/01/2026 10:00");
        assert!(doc.contains("<span class=\"stat-value\">0</span>"));
        assert!(doc.contains("0%"));
        assert!(doc.contains("<div class=\"questions-grid\">\n</div>"));
    }

    #[test]
    fn wrong_answer_lists_correct_option_text() {
        let questions = vec![question("¿Binario 1011 en decimal?", 2)];
        let answers = vec![AnswerRecord {
            question_index: 0,
            selected: Some(0),
            is_correct: false,
        }];
        let doc = compile_report(&questions, &answers, "x");
        assert!(doc.contains("wrong-opt"));
        assert!(doc.contains("Correct: opción C"));
        assert!(doc.contains("<span class=\"stat-label\">Wrong</span><span class=\"stat-value\">1</span>"));
    }

    #[test]
    fn unanswered_questions_are_omitted_from_listing() {
        let questions = vec![question("p1", 1), question("p2", 1)];
        let answers = vec![
            AnswerRecord {
                question_index: 0,
                selected: Some(1),
                is_correct: true,
            },
            AnswerRecord {
                question_index: 1,
                selected: None,
                is_correct: false,
            },
        ];
        let doc = compile_report(&questions, &answers, "x");
        assert!(doc.contains("1. p1"));
        assert!(!doc.contains("2. p2"));

        let score = summarize(&answers);
        assert_eq!((score.answered, score.correct, score.wrong), (1, 1, 0));
    }

    #[test]
    fn deterministic_except_timestamp() {
        let questions = vec![question("p1", 3), question("p2", 0)];
        let answers = vec![
            AnswerRecord {
                question_index: 0,
                selected: Some(3),
                is_correct: true,
            },
            AnswerRecord {
                question_index: 1,
                selected: Some(2),
                is_correct: false,
            },
        ];
        let a = compile_report(&questions, &answers, "T");
        let b = compile_report(&questions, &answers, "T");
        assert_eq!(a, b);

        let c = compile_report(&questions, &answers, "otro momento");
        assert_ne!(a, c);
        // Solo difieren en el pie con el timestamp
        assert_eq!(
            a.replace("- T</div>", ""),
            c.replace("- otro momento</div>", "")
        );
    }

    #[test]
    fn input_is_not_mutated_and_markup_is_escaped() {
        let questions = vec![question("<script>alert(1)</script>", 1)];
        let answers = vec![AnswerRecord {
            question_index: 0,
            selected: Some(1),
            is_correct: true,
        }];
        let before = answers.clone();
        let doc = compile_report(&questions, &answers, "x");
        assert_eq!(answers, before);
        assert!(doc.contains("&lt;script&gt;"));
        assert!(!doc.contains("<script>alert"));
    }
}
