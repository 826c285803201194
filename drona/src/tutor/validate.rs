/// Section headers a well-formed tutoring answer must carry, emphasis
/// markers included.
pub const REQUIRED_SECTIONS: [&str; 4] = [
    "**Concept Understanding**",
    "**Step-by-Step Solution**",
    "**Key Points to Remember**",
    "**Similar Problem Types**",
];

const MIN_RESPONSE_CHARS: usize = 200;
const MAX_RESPONSE_CHARS: usize = 2500;

/// Structural check over a generated answer.
///
/// True only when all four section headers appear verbatim, at least one
/// bullet marker (`•` or a dash bullet) and the `**` emphasis marker are
/// present, and the total length falls within 200..=2500 characters.
/// Callers decide what to do with the verdict; the solve flow treats it as
/// advisory unless validation enforcement is configured.
pub fn validate_response(response: &str) -> bool {
    if !REQUIRED_SECTIONS
        .iter()
        .all(|section| response.contains(section))
    {
        return false;
    }

    let has_bullet =
        response.contains('•') || response.contains("\n- ") || response.starts_with("- ");
    if !has_bullet || !response.contains("**") {
        return false;
    }

    let len = response.chars().count();
    (MIN_RESPONSE_CHARS..=MAX_RESPONSE_CHARS).contains(&len)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn well_formed() -> String {
        format!(
            "**Concept Understanding**\nA quadratic has degree two.\n\n\
             **Step-by-Step Solution**\n- Factor the expression\n- Solve each factor\n\n\
             **Key Points to Remember**\n- Check both roots\n\n\
             **Similar Problem Types**\n- x^2 - 9 = 0\n{}",
            "padding ".repeat(20)
        )
    }

    #[test]
    fn well_formed_response_passes() {
        assert!(validate_response(&well_formed()));
    }

    #[test]
    fn missing_any_section_fails() {
        for section in REQUIRED_SECTIONS {
            let response = well_formed().replace(section, "**Something Else**");
            assert!(!validate_response(&response), "should fail without {section}");
        }
    }

    #[test]
    fn missing_bullets_fails() {
        let response = well_formed().replace("\n- ", "\n  ");
        assert!(!validate_response(&response));
    }

    #[test]
    fn unicode_bullet_is_accepted() {
        let response = well_formed().replace("\n- ", "\n• ");
        assert!(validate_response(&response));
    }

    #[test]
    fn too_short_fails() {
        let response = "**Concept Understanding****Step-by-Step Solution**\
                        **Key Points to Remember****Similar Problem Types**\n- x";
        assert!(response.chars().count() < MIN_RESPONSE_CHARS);
        assert!(!validate_response(response));
    }

    #[test]
    fn too_long_fails() {
        let response = format!("{}{}", well_formed(), "x".repeat(MAX_RESPONSE_CHARS));
        assert!(!validate_response(&response));
    }
}
