//! Fallback content used when scraped material runs short.
//!
//! Every fixed string the allocator can emit lives in one table keyed by
//! slide role. Templates use `{}` as the single substitution point.

/// The part a slide plays in an outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlideRole {
    /// First slide.
    Introduction,
    /// A slide built from one source section.
    Body,
    /// Generic padding when sources run out.
    Filler,
    /// Last slide.
    Conclusion,
}

/// Title, bullet and notes templates for one role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleTemplate {
    pub title: &'static str,
    pub bullets: [&'static str; 3],
    pub notes: &'static str,
}

const INTRODUCTION: RoleTemplate = RoleTemplate {
    title: "Introduction",
    bullets: [
        "Introduction to {}",
        "Overview of key concepts",
        "What we'll cover in this presentation",
    ],
    notes: "Introduction based on web research about {}",
};

// Body titles come from section text; the template only supplies padding.
const BODY: RoleTemplate = RoleTemplate {
    title: "{}",
    bullets: [
        "Additional information about {}",
        "Additional information about {}",
        "Additional information about {}",
    ],
    notes: "Content sourced from {}",
};

const FILLER: RoleTemplate = RoleTemplate {
    title: "Additional Topic {}",
    bullets: [
        "Further information about {}",
        "Supporting details and examples",
        "Key takeaways and insights",
    ],
    notes: "Additional content",
};

const CONCLUSION: RoleTemplate = RoleTemplate {
    title: "Conclusion",
    bullets: [
        "Summary of key points about {}",
        "Main takeaways and insights",
        "Further resources and reading",
    ],
    notes: "Conclusion slide",
};

impl SlideRole {
    /// Look up the fallback templates for this role.
    pub fn template(self) -> &'static RoleTemplate {
        match self {
            Self::Introduction => &INTRODUCTION,
            Self::Body => &BODY,
            Self::Filler => &FILLER,
            Self::Conclusion => &CONCLUSION,
        }
    }
}

impl RoleTemplate {
    /// Render the title with `value` substituted.
    pub fn title_for(&self, value: impl std::fmt::Display) -> String {
        fill(self.title, value)
    }

    /// Render the bullet at `index` with `value` substituted.
    pub fn bullet_for(&self, index: usize, value: impl std::fmt::Display) -> String {
        fill(self.bullets[index], value)
    }

    /// Render all three bullets with `value` substituted.
    pub fn bullets_for(&self, value: impl std::fmt::Display) -> [String; 3] {
        let value = value.to_string();
        self.bullets.map(|b| fill(b, &value))
    }

    /// Render the notes with `value` substituted.
    pub fn notes_for(&self, value: impl std::fmt::Display) -> String {
        fill(self.notes, value)
    }
}

fn fill(template: &str, value: impl std::fmt::Display) -> String {
    if template.contains("{}") {
        template.replace("{}", &value.to_string())
    } else {
        template.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_introduction_bullets() {
        let bullets = SlideRole::Introduction.template().bullets_for("Rust");
        assert_eq!(
            bullets,
            [
                "Introduction to Rust",
                "Overview of key concepts",
                "What we'll cover in this presentation",
            ]
        );
    }

    #[test]
    fn test_filler_title_uses_number() {
        assert_eq!(SlideRole::Filler.template().title_for(4), "Additional Topic 4");
    }

    #[test]
    fn test_templates_without_placeholder_ignore_value() {
        let conclusion = SlideRole::Conclusion.template();
        assert_eq!(conclusion.title_for("ignored"), "Conclusion");
        assert_eq!(conclusion.notes_for("ignored"), "Conclusion slide");
    }

    #[test]
    fn test_body_padding_and_notes() {
        let body = SlideRole::Body.template();
        assert_eq!(body.bullet_for(2, "History"), "Additional information about History");
        assert_eq!(body.notes_for("Wikipedia"), "Content sourced from Wikipedia");
    }
}
