use regex::{Regex, RegexBuilder};

/// Regla de aceptación sobre el texto enviado por el alumno.
///
/// Las implementaciones deben ser puras y totales: un booleano para
/// cualquier string de entrada, sin pánicos ni efectos.
pub trait AcceptanceRule {
    fn accepts(&self, submission: &str) -> bool;
}

/// Regla descrita por una regex (insensible a mayúsculas y `.` cruza líneas).
pub struct PatternRule {
    source: String,
    compiled: Option<Regex>,
}

impl PatternRule {
    /// Un patrón que no compila produce una regla que rechaza todo,
    /// nunca un error.
    pub fn new(source: &str) -> Self {
        let compiled = RegexBuilder::new(source)
            .case_insensitive(true)
            .dot_matches_new_line(true)
            .build()
            .ok();
        if compiled.is_none() {
            log::warn!("patrón de aceptación inválido: {source:?}");
        }
        Self {
            source: source.to_owned(),
            compiled,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn is_valid(&self) -> bool {
        self.compiled.is_some()
    }
}

impl AcceptanceRule for PatternRule {
    fn accepts(&self, submission: &str) -> bool {
        match &self.compiled {
            Some(re) => re.is_match(submission),
            None => false,
        }
    }
}

/// Verifica un envío libre contra su regla. Un envío vacío o solo de
/// espacios falla directamente, sin consultar la regla.
pub fn verify_submission(rule: &dyn AcceptanceRule, submission: &str) -> bool {
    if submission.trim().is_empty() {
        return false;
    }
    rule.accepts(submission)
}

/// Resultado de corregir una pregunta de opción múltiple. Se devuelve el
/// índice correcto para que la UI y el informe puedan mostrarlo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceOutcome {
    pub is_correct: bool,
    pub correct_index: usize,
}

/// Corrige una selección: acierto si y solo si coincide el índice.
/// Sin respuesta (`None`) cuenta como fallo, no como error.
pub fn check_choice(selected: Option<usize>, correct_index: usize) -> ChoiceOutcome {
    ChoiceOutcome {
        is_correct: selected == Some(correct_index),
        correct_index,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_rule_matches_target_content() {
        let rule = PatternRule::new("<html>.*<body>.*Standard Page Content.*</body>.*</html>");
        assert!(rule.accepts(
            "<HTML>\n  <body>\n    Standard Page Content\n  </body>\n</HTML>"
        ));
        assert!(!rule.accepts("<body>Standard Page Content</body>"));
    }

    #[test]
    fn empty_or_whitespace_submission_always_fails() {
        // Incluso con un patrón que aceptaría la cadena vacía
        let rule = PatternRule::new(".*");
        assert!(!verify_submission(&rule, ""));
        assert!(!verify_submission(&rule, "   \n\t  "));
        assert!(verify_submission(&rule, "x"));
    }

    #[test]
    fn verifier_is_total_for_arbitrary_input() {
        let rule = PatternRule::new(r#"printf\s*\(\s*".*Hello Student.*"\s*\)\s*;"#);
        let long = "a".repeat(200_000);
        for input in ["", "garbage }{ ][ );(", "\u{0000}\u{FFFF}", long.as_str()] {
            // No debe haber pánico y siempre devuelve booleano
            let _ = verify_submission(&rule, input);
        }
        assert!(verify_submission(
            &rule,
            "int main() { printf(\"Hello Student\"); return 0; }"
        ));
    }

    #[test]
    fn verifier_is_pure() {
        let rule = PatternRule::new("H<sub>2</sub>SO<sub>4</sub>");
        let a = verify_submission(&rule, "h<sub>2</sub>so<sub>4</sub>");
        let b = verify_submission(&rule, "h<sub>2</sub>so<sub>4</sub>");
        assert_eq!(a, b);
        assert!(a);
    }

    #[test]
    fn invalid_pattern_rejects_everything() {
        let rule = PatternRule::new("([unclosed");
        assert!(!rule.is_valid());
        assert!(!verify_submission(&rule, "([unclosed"));
        assert!(!verify_submission(&rule, "cualquier cosa"));
    }

    #[test]
    fn choice_check_exact_index_only() {
        let ok = check_choice(Some(2), 2);
        assert!(ok.is_correct);
        assert_eq!(ok.correct_index, 2);

        let wrong = check_choice(Some(0), 2);
        assert!(!wrong.is_correct);
        assert_eq!(wrong.correct_index, 2);

        assert!(!check_choice(None, 2).is_correct);
    }
}
