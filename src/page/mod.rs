//! Page assembly.
//!
//! The home page is five fragments emitted in a fixed order. Only the hero
//! markup depends on input (the two encoded assets); everything else is
//! literal content.

pub mod cta;
pub mod document;
pub mod features;
pub mod hero;

use crate::assets::EncodedAsset;
use crate::sink::MarkupSink;
use serde::Serialize;

pub use features::{FeatureCard, FEATURE_CARDS};

/// Which part of the page a fragment carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FragmentKind {
    HeroStyle,
    Hero,
    FeatureStyle,
    FeatureGrid,
    CallToAction,
}

impl FragmentKind {
    /// Emission order.
    pub const ORDER: [FragmentKind; 5] = [
        FragmentKind::HeroStyle,
        FragmentKind::Hero,
        FragmentKind::FeatureStyle,
        FragmentKind::FeatureGrid,
        FragmentKind::CallToAction,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::HeroStyle => "hero_style",
            Self::Hero => "hero",
            Self::FeatureStyle => "feature_style",
            Self::FeatureGrid => "feature_grid",
            Self::CallToAction => "call_to_action",
        }
    }
}

/// A self-contained block of markup or styling
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub kind: FragmentKind,
    pub markup: String,
}

/// The fully assembled home page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomePage {
    fragments: Vec<Fragment>,
}

impl HomePage {
    /// Assemble every fragment, interpolating the encoded assets into the hero.
    pub fn assemble(logo: &EncodedAsset, demo: &EncodedAsset) -> Self {
        let fragments = FragmentKind::ORDER
            .iter()
            .map(|&kind| {
                let markup = match kind {
                    FragmentKind::HeroStyle => hero::HERO_STYLE.to_string(),
                    FragmentKind::Hero => hero::hero_markup(logo, demo),
                    FragmentKind::FeatureStyle => features::FEATURE_STYLE.to_string(),
                    FragmentKind::FeatureGrid => features::feature_grid_markup(),
                    FragmentKind::CallToAction => cta::CTA_MARKUP.to_string(),
                };
                Fragment { kind, markup }
            })
            .collect();
        Self { fragments }
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn fragment(&self, kind: FragmentKind) -> Option<&Fragment> {
        self.fragments.iter().find(|f| f.kind == kind)
    }

    /// Hand each fragment to the sink, in page order.
    pub fn emit<K: MarkupSink + ?Sized>(&self, sink: &mut K) {
        for fragment in &self.fragments {
            log::debug!(
                "emitting {} fragment ({} bytes)",
                fragment.kind.as_str(),
                fragment.markup.len()
            );
            sink.emit(&fragment.markup);
        }
    }

    /// All fragments concatenated.
    pub fn to_markup(&self) -> String {
        let mut out = String::with_capacity(self.markup_len());
        self.emit(&mut out);
        out
    }

    pub fn markup_len(&self) -> usize {
        self.fragments.iter().map(|f| f.markup.len()).sum()
    }
}
