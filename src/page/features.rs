//! Feature-card grid.

pub const FEATURE_STYLE: &str = r#"
<style>
  .feature-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
    gap: 1.75rem;
    margin-top: 4rem;
  }
</style>
"#;

const BRAIN_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24"
                   viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"
                   stroke-linecap="round" stroke-linejoin="round"
                   class="lucide lucide-brain h-6 w-6 text-primary-foreground">
                <path d="M12 5a3 3 0 1 0-5.997.125 4 4 0 0 0-2.526 5.77 4 4 0 0 0 .556 6.588A4 4 0 1 0 12 18Z"></path>
                <path d="M12 5a3 3 0 1 1 5.997.125 4 4 0 0 1 2.526 5.77 4 4 0 0 1-.556 6.588A4 4 0 1 1 12 18Z"></path>
                <path d="M15 13a4.5 4.5 0 0 1-3-4 4.5 4.5 0 0 1-3 4"></path>
                <path d="M17.599 6.5a3 3 0 0 0 .399-1.375"></path>
                <path d="M6.003 5.125A3 3 0 0 0 6.401 6.5"></path>
                <path d="M3.477 10.896a4 4 0 0 1 .585-.396"></path>
                <path d="M19.938 10.5a4 4 0 0 1 .585.396"></path>
                <path d="M6 18a4 4 0 0 1-1.967-.516"></path>
                <path d="M19.967 17.484A4 4 0 0 1 18 18"></path>
              </svg>"#;

/// One card in the feature grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureCard {
    /// Icon markup (inline SVG or an emoji)
    pub icon: &'static str,
    pub badge: &'static str,
    pub heading: &'static str,
    pub description: &'static str,
}

pub const FEATURE_CARDS: [FeatureCard; 3] = [
    FeatureCard {
        icon: BRAIN_ICON,
        badge: "Core Feature",
        heading: "AI-Powered Decision Making",
        description: "Advanced algorithms analyze your business patterns and make optimal decisions automatically.",
    },
    FeatureCard {
        icon: "📈",
        badge: "Optimization",
        heading: "Inventory Optimization",
        description: "Know exactly when to order, how much to order, and in what combinations for maximum efficiency.",
    },
    FeatureCard {
        icon: "⏱️",
        badge: "Real-Time",
        heading: "Real-Time Monitoring",
        description: "Continuous tracking of your business metrics with instant alerts when action is needed.",
    },
];

impl FeatureCard {
    fn markup(&self) -> String {
        format!(
            r#"
  <div class="feature-card rounded-lg text-card-foreground shadow-sm relative group hover:shadow-elegant transition-all duration-300 border-0 bg-card/80 backdrop-blur-sm">
    <div class="flex flex-col space-y-1.5 p-6 pb-4">
      <div class="flex items-center justify-between mb-4">
        <div class="p-3 bg-gradient-primary rounded-xl">
              {icon}
        </div>
        <div class="inline-flex items-center rounded-full border px-2.5 py-0.5 font-semibold transition-colors focus:outline-none focus:ring-2 focus:ring-ring focus:ring-offset-2 border-transparent bg-secondary text-secondary-foreground hover:bg-secondary/80 text-xs">
          {badge}
        </div>
      </div>
      <h3 class="font-semibold tracking-tight text-xl group-hover:text-primary transition-colors">
        {heading}
      </h3>
    </div>
    <div class="p-6 pt-0">
      <p class="text-muted-foreground text-base leading-relaxed">
        {description}
      </p>
    </div>
  </div>
"#,
            icon = self.icon,
            badge = self.badge,
            heading = self.heading,
            description = self.description,
        )
    }
}

pub fn feature_grid_markup() -> String {
    let mut out = String::from("\n<div class=\"feature-grid\">");
    for card in FEATURE_CARDS.iter() {
        out.push_str(&card.markup());
    }
    out.push_str("</div>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_card_has_copy() {
        for card in FEATURE_CARDS.iter() {
            assert!(!card.heading.trim().is_empty());
            assert!(!card.description.trim().is_empty());
            assert!(!card.badge.trim().is_empty());
        }
    }

    #[test]
    fn grid_contains_three_cards() {
        let html = feature_grid_markup();
        assert_eq!(html.matches("class=\"feature-card ").count(), 3);
        assert!(html.starts_with("\n<div class=\"feature-grid\">"));
        assert!(html.contains("Inventory Optimization"));
    }

    #[test]
    fn card_markup_fills_every_slot() {
        let card = &FEATURE_CARDS[1];
        let html = card.markup();
        assert!(html.contains(card.icon));
        assert!(html.contains(card.badge));
        assert!(html.contains(card.heading));
        assert!(html.contains(card.description));
        assert!(!html.contains("{heading}"));
    }
}
