//! Wealth Archetype Synthesis
//!
//! Majority element of {sun, moon, rising} picks a template. With no
//! majority, modality decides and the strengths are blended from the
//! three signs' own wealth profiles.

use serde::{Deserialize, Serialize};

use crate::model::{Element, ElementalBalance, Modality, ModalityBalance, ZodiacSign};

use super::database::record;

/// Name of the archetype returned when any of the three signs is unresolved
pub const DEFAULT_ARCHETYPE: &str = "Emerging Wealth Seeker";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WealthArchetype {
    pub archetype: String,
    pub description: String,
    pub strengths: Vec<String>,
    pub opportunities: Vec<String>,
    pub strategy: String,
}

impl WealthArchetype {
    /// Whether this is the generic fallback archetype
    pub fn is_default(&self) -> bool {
        self.archetype == DEFAULT_ARCHETYPE
    }

    fn from_template(t: &ArchetypeTemplate) -> Self {
        Self {
            archetype: t.name.into(),
            description: t.description.into(),
            strengths: t.strengths.iter().map(|s| (*s).to_string()).collect(),
            opportunities: t.opportunities.iter().map(|s| (*s).to_string()).collect(),
            strategy: t.strategy.into(),
        }
    }

    fn fallback() -> Self {
        Self {
            archetype: DEFAULT_ARCHETYPE.into(),
            description: "Your full cosmic signature is still coming into focus. Add your birth time for a sharper reading.".into(),
            strengths: vec!["Open to learning".into(), "Flexible starting point".into()],
            opportunities: vec!["Build a simple, diversified foundation".into()],
            strategy: "Start with small, regular contributions to a diversified core.".into(),
        }
    }
}

struct ArchetypeTemplate {
    name: &'static str,
    description: &'static str,
    strengths: &'static [&'static str],
    opportunities: &'static [&'static str],
    strategy: &'static str,
}

const fn element_template(element: Element) -> &'static ArchetypeTemplate {
    match element {
        Element::Fire => &FIRE,
        Element::Earth => &EARTH,
        Element::Air => &AIR,
        Element::Water => &WATER,
    }
}

static FIRE: ArchetypeTemplate = ArchetypeTemplate {
    name: "Pioneering Wealth Warrior",
    description: "Fire dominates your chart: you create wealth through initiative, courage and speed.",
    strengths: &["Decisive action", "Early trend detection", "Resilience after setbacks"],
    opportunities: &["Emerging technology", "Founding or backing ventures", "Momentum markets"],
    strategy: "Pair bold conviction bets with strict position limits and pre-set exits.",
};

static EARTH: ArchetypeTemplate = ArchetypeTemplate {
    name: "Sovereign Wealth Builder",
    description: "Earth dominates your chart: you build wealth patiently through tangible, compounding assets.",
    strengths: &["Discipline", "Long-term vision", "Resistance to panic"],
    opportunities: &["Blue-chip accumulation", "Real assets", "Dollar-cost averaging"],
    strategy: "Automate steady accumulation and let compounding do the heavy lifting.",
};

static AIR: ArchetypeTemplate = ArchetypeTemplate {
    name: "Quantum Wealth Strategist",
    description: "Air dominates your chart: you build wealth through information, networks and ideas.",
    strengths: &["Analytical agility", "Networking", "Rapid learning"],
    opportunities: &[
        "Technology and protocols",
        "Information-driven trades",
        "Diversified baskets",
    ],
    strategy: "Use research to set rules, then let the rules, not the news, drive decisions.",
};

static WATER: ArchetypeTemplate = ArchetypeTemplate {
    name: "Intuitive Wealth Alchemist",
    description: "Water dominates your chart: you sense value before others and transform it over time.",
    strengths: &["Market intuition", "Emotional resilience", "Spotting hidden value"],
    opportunities: &["Undervalued assets", "Creative and impact ventures", "Contrarian entries"],
    strategy: "Validate intuition with data and keep a cash reserve for emotional markets.",
};

static CARDINAL: ArchetypeTemplate = ArchetypeTemplate {
    name: "Visionary Wealth Initiator",
    description: "Your chart blends elements under a cardinal drive: you start new financial chapters with ease.",
    strengths: &[],
    opportunities: &[],
    strategy: "Launch new positions in stages and review them on a fixed calendar.",
};

static FIXED: ArchetypeTemplate = ArchetypeTemplate {
    name: "Steadfast Wealth Guardian",
    description: "Your chart blends elements under a fixed anchor: you hold and protect what you build.",
    strengths: &[],
    opportunities: &[],
    strategy: "Hold quality assets through cycles and rebalance only at set thresholds.",
};

static ADAPTIVE: ArchetypeTemplate = ArchetypeTemplate {
    name: "Adaptive Wealth Navigator",
    description: "Your chart is evenly spread across elements and modalities: you adapt to any market.",
    strengths: &[],
    opportunities: &[],
    strategy: "Keep a flexible allocation with clear rules for when to shift between assets.",
};

/// Archetype for a sun/moon/rising triple
pub fn wealth_archetype(
    sun: Option<ZodiacSign>,
    moon: Option<ZodiacSign>,
    rising: Option<ZodiacSign>,
) -> WealthArchetype {
    let (Some(sun), Some(moon), Some(rising)) = (sun, moon, rising) else {
        tracing::debug!("archetype inputs incomplete, using default archetype");
        return WealthArchetype::fallback();
    };
    let signs = [Some(sun), Some(moon), Some(rising)];

    let elements = ElementalBalance::from_signs(&signs);
    if let Some(element) = Element::ALL.into_iter().find(|e| elements.count(*e) >= 2) {
        return WealthArchetype::from_template(element_template(element));
    }

    let modalities = ModalityBalance::from_signs(&signs);
    let template = if modalities.count(Modality::Cardinal) >= 2 {
        &CARDINAL
    } else if modalities.count(Modality::Fixed) >= 2 {
        &FIXED
    } else {
        &ADAPTIVE
    };

    let mut archetype = WealthArchetype::from_template(template);
    archetype.strengths = blend(&[sun, moon, rising], |s| record(s).wealth.strengths);
    archetype.opportunities = blend(&[sun, moon, rising], |s| record(s).wealth.best_investments);
    archetype
}

/// First entry from each sign's list, without duplicates
fn blend(
    signs: &[ZodiacSign],
    pick: impl Fn(ZodiacSign) -> &'static [&'static str],
) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for sign in signs {
        if let Some(first) = pick(*sign).first() {
            if !out.iter().any(|s| s == first) {
                out.push((*first).to_string());
            }
        }
    }
    out
}
