//! Zodiac Reference Database
//!
//! Twelve immutable sign records: element, modality, ruler, date range,
//! personality, wealth profile, relationships and lucky attributes.
//! Lookups never fail loudly; callers check for presence.

use serde::Serialize;

use crate::model::{Element, Modality, RiskTolerance, ZodiacSign};

use ZodiacSign::{
    Aquarius, Aries, Cancer, Capricorn, Gemini, Leo, Libra, Pisces, Sagittarius, Scorpio, Taurus,
    Virgo,
};

/// A (month, day) calendar point
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct MonthDay {
    pub month: u32,
    pub day: u32,
}

const fn md(month: u32, day: u32) -> MonthDay {
    MonthDay { month, day }
}

/// Inclusive sun-sign date range
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: MonthDay,
    pub end: MonthDay,
}

impl DateRange {
    /// Whether the range crosses the year boundary (Capricorn)
    pub const fn wraps_year(&self) -> bool {
        self.start.month > self.end.month
    }

    pub const fn contains(&self, month: u32, day: u32) -> bool {
        let (start, end) = (self.start, self.end);
        if self.wraps_year() {
            return (month == start.month && day >= start.day)
                || (month == end.month && day <= end.day);
        }
        if start.month == end.month {
            return month == start.month && day >= start.day && day <= end.day;
        }
        (month == start.month && day >= start.day)
            || (month == end.month && day <= end.day)
            || (month > start.month && month < end.month)
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct Personality {
    pub keywords: &'static [&'static str],
    pub strengths: &'static [&'static str],
    pub challenges: &'static [&'static str],
    pub core_values: &'static [&'static str],
    pub motivation: &'static str,
    pub fears: &'static [&'static str],
}

#[derive(Clone, Debug, Serialize)]
pub struct WealthProfile {
    /// Short label for the sign's money style
    pub style: &'static str,
    pub strengths: &'static [&'static str],
    pub challenges: &'static [&'static str],
    pub best_investments: &'static [&'static str],
    pub money_mindset: &'static str,
    pub ideal_portfolio: &'static str,
    pub risk_tolerance: RiskTolerance,
}

#[derive(Clone, Debug, Serialize)]
pub struct Relationships {
    pub best_matches: &'static [ZodiacSign],
    pub challenging_matches: &'static [ZodiacSign],
    pub business_partners: &'static [ZodiacSign],
}

/// Static reference data for one sign
#[derive(Clone, Debug, Serialize)]
pub struct ZodiacSignRecord {
    pub sign: ZodiacSign,
    pub symbol: &'static str,
    pub element: Element,
    pub modality: Modality,
    pub ruler: &'static str,
    pub date_range: DateRange,
    pub personality: Personality,
    pub wealth: WealthProfile,
    pub relationships: Relationships,
    pub house: u8,
    pub lucky_numbers: &'static [u32],
    pub colors: &'static [&'static str],
    pub gemstones: &'static [&'static str],
}

/// Record for a sign
pub fn record(sign: ZodiacSign) -> &'static ZodiacSignRecord {
    &SIGNS[sign.index()]
}

/// Record for a sign name, if the name is one of the twelve
pub fn lookup(name: &str) -> Option<&'static ZodiacSignRecord> {
    name.parse::<ZodiacSign>().ok().map(record)
}

/// All records in canonical order
pub fn all() -> &'static [ZodiacSignRecord; 12] {
    &SIGNS
}

static SIGNS: [ZodiacSignRecord; 12] = [
    ZodiacSignRecord {
        sign: Aries,
        symbol: "♈",
        element: Element::Fire,
        modality: Modality::Cardinal,
        ruler: "Mars",
        date_range: DateRange { start: md(3, 21), end: md(4, 19) },
        personality: Personality {
            keywords: &["Bold", "Pioneering", "Energetic", "Competitive"],
            strengths: &["Courageous", "Decisive", "Natural leader", "Enthusiastic"],
            challenges: &["Impatient", "Impulsive", "Short attention span"],
            core_values: &["Independence", "Achievement", "Action"],
            motivation: "Being first and conquering new territory",
            fears: &["Stagnation", "Being overlooked"],
        },
        wealth: WealthProfile {
            style: "Aggressive Pioneer",
            strengths: &[
                "Spots emerging trends early",
                "Acts fast on opportunities",
                "Thrives under pressure",
            ],
            challenges: &[
                "Chases hype",
                "Exits positions too early",
                "Overtrades in volatile markets",
            ],
            best_investments: &["Emerging tech tokens", "Early-stage ventures", "Momentum trades"],
            money_mindset: "Money is fuel for the next adventure",
            ideal_portfolio: "Growth-heavy core with a capped allocation to high-conviction early bets",
            risk_tolerance: RiskTolerance::High,
        },
        relationships: Relationships {
            best_matches: &[Leo, Sagittarius, Gemini, Aquarius],
            challenging_matches: &[Cancer, Capricorn],
            business_partners: &[Leo, Sagittarius, Libra],
        },
        house: 1,
        lucky_numbers: &[9, 1, 19],
        colors: &["Red", "Scarlet"],
        gemstones: &["Diamond", "Bloodstone"],
    },
    ZodiacSignRecord {
        sign: Taurus,
        symbol: "♉",
        element: Element::Earth,
        modality: Modality::Fixed,
        ruler: "Venus",
        date_range: DateRange { start: md(4, 20), end: md(5, 20) },
        personality: Personality {
            keywords: &["Steady", "Sensual", "Patient", "Reliable"],
            strengths: &["Persistent", "Practical", "Loyal", "Grounded"],
            challenges: &["Stubborn", "Resistant to change", "Possessive"],
            core_values: &["Security", "Comfort", "Stability"],
            motivation: "Building lasting comfort and tangible security",
            fears: &["Instability", "Sudden loss"],
        },
        wealth: WealthProfile {
            style: "Patient Accumulator",
            strengths: &["Exceptional patience", "Values tangible assets", "Resists panic selling"],
            challenges: &["Holds losers too long", "Misses fast-moving trends"],
            best_investments: &[
                "Blue-chip assets",
                "Real estate",
                "Dividend payers",
                "Bitcoin held long term",
            ],
            money_mindset: "Wealth is built slowly and kept forever",
            ideal_portfolio: "Blue-chip heavy with real assets and a small stable-yield sleeve",
            risk_tolerance: RiskTolerance::Low,
        },
        relationships: Relationships {
            best_matches: &[Virgo, Capricorn, Cancer, Pisces],
            challenging_matches: &[Leo, Aquarius],
            business_partners: &[Capricorn, Virgo, Scorpio],
        },
        house: 2,
        lucky_numbers: &[6, 2, 24],
        colors: &["Green", "Pink"],
        gemstones: &["Emerald", "Rose Quartz"],
    },
    ZodiacSignRecord {
        sign: Gemini,
        symbol: "♊",
        element: Element::Air,
        modality: Modality::Mutable,
        ruler: "Mercury",
        date_range: DateRange { start: md(5, 21), end: md(6, 20) },
        personality: Personality {
            keywords: &["Curious", "Adaptable", "Witty", "Social"],
            strengths: &["Quick learner", "Versatile", "Excellent communicator", "Resourceful"],
            challenges: &["Restless", "Indecisive", "Scattered focus"],
            core_values: &["Knowledge", "Variety", "Connection"],
            motivation: "Gathering information and exchanging ideas",
            fears: &["Boredom", "Being trapped"],
        },
        wealth: WealthProfile {
            style: "Information Trader",
            strengths: &[
                "Processes news quickly",
                "Diversifies naturally",
                "Networks into opportunities",
            ],
            challenges: &["Spreads too thin", "Reacts to noise", "Abandons plans midway"],
            best_investments: &[
                "Diversified index baskets",
                "Communication and media tech",
                "Short-term swing trades",
            ],
            money_mindset: "Money follows the best information",
            ideal_portfolio: "Broad diversified basket rebalanced on a fixed schedule",
            risk_tolerance: RiskTolerance::ModerateHigh,
        },
        relationships: Relationships {
            best_matches: &[Libra, Aquarius, Aries, Leo],
            challenging_matches: &[Virgo, Pisces],
            business_partners: &[Libra, Aquarius, Sagittarius],
        },
        house: 3,
        lucky_numbers: &[5, 7, 14],
        colors: &["Yellow", "Light Green"],
        gemstones: &["Agate", "Citrine"],
    },
    ZodiacSignRecord {
        sign: Cancer,
        symbol: "♋",
        element: Element::Water,
        modality: Modality::Cardinal,
        ruler: "Moon",
        date_range: DateRange { start: md(6, 21), end: md(7, 22) },
        personality: Personality {
            keywords: &["Nurturing", "Intuitive", "Protective", "Emotional"],
            strengths: &["Deeply intuitive", "Caring", "Tenacious", "Loyal"],
            challenges: &["Moody", "Overly cautious", "Clings to the past"],
            core_values: &["Family", "Safety", "Belonging"],
            motivation: "Protecting and providing for loved ones",
            fears: &["Abandonment", "Financial insecurity"],
        },
        wealth: WealthProfile {
            style: "Protective Saver",
            strengths: &[
                "Builds strong safety nets",
                "Trusts gut feelings",
                "Plans for the family",
            ],
            challenges: &["Emotional selling", "Hoards cash", "Fear-driven decisions"],
            best_investments: &["Stablecoin yield", "Home and property", "Conservative funds"],
            money_mindset: "Money is a shelter for the people I love",
            ideal_portfolio: "Large emergency reserve, conservative core, small growth satellite",
            risk_tolerance: RiskTolerance::LowModerate,
        },
        relationships: Relationships {
            best_matches: &[Scorpio, Pisces, Taurus, Virgo],
            challenging_matches: &[Aries, Libra],
            business_partners: &[Taurus, Capricorn, Scorpio],
        },
        house: 4,
        lucky_numbers: &[2, 7, 11],
        colors: &["Silver", "White"],
        gemstones: &["Pearl", "Moonstone"],
    },
    ZodiacSignRecord {
        sign: Leo,
        symbol: "♌",
        element: Element::Fire,
        modality: Modality::Fixed,
        ruler: "Sun",
        date_range: DateRange { start: md(7, 23), end: md(8, 22) },
        personality: Personality {
            keywords: &["Confident", "Generous", "Dramatic", "Warm"],
            strengths: &["Charismatic", "Creative", "Big-hearted", "Determined"],
            challenges: &["Prideful", "Attention-seeking", "Overspends on status"],
            core_values: &["Recognition", "Creativity", "Loyalty"],
            motivation: "Shining brightly and being admired for achievements",
            fears: &["Being ignored", "Public failure"],
        },
        wealth: WealthProfile {
            style: "Royal Investor",
            strengths: &["Thinks big", "Commits with conviction", "Attracts partners and capital"],
            challenges: &["Status-driven purchases", "Doubles down to save face"],
            best_investments: &[
                "Flagship large caps",
                "Luxury and entertainment brands",
                "Creative ventures",
            ],
            money_mindset: "Wealth should be visible and shared",
            ideal_portfolio: "Concentrated flagship holdings with a creative-venture allocation",
            risk_tolerance: RiskTolerance::High,
        },
        relationships: Relationships {
            best_matches: &[Aries, Sagittarius, Gemini, Libra],
            challenging_matches: &[Taurus, Scorpio],
            business_partners: &[Aries, Sagittarius, Aquarius],
        },
        house: 5,
        lucky_numbers: &[1, 4, 10],
        colors: &["Gold", "Orange"],
        gemstones: &["Ruby", "Peridot"],
    },
    ZodiacSignRecord {
        sign: Virgo,
        symbol: "♍",
        element: Element::Earth,
        modality: Modality::Mutable,
        ruler: "Mercury",
        date_range: DateRange { start: md(8, 23), end: md(9, 22) },
        personality: Personality {
            keywords: &["Analytical", "Precise", "Helpful", "Modest"],
            strengths: &["Detail-oriented", "Methodical", "Reliable", "Hard-working"],
            challenges: &["Perfectionist", "Overly critical", "Anxious"],
            core_values: &["Efficiency", "Service", "Improvement"],
            motivation: "Perfecting systems and being genuinely useful",
            fears: &["Chaos", "Making mistakes"],
        },
        wealth: WealthProfile {
            style: "Analytical Optimizer",
            strengths: &[
                "Researches thoroughly",
                "Tracks every expense",
                "Spots flawed fundamentals",
            ],
            challenges: &["Analysis paralysis", "Sells winners too early"],
            best_investments: &[
                "Fundamentals-driven equities",
                "Healthcare",
                "Low-cost index funds",
            ],
            money_mindset: "Every dollar deserves a job",
            ideal_portfolio: "Spreadsheet-tracked index core with carefully researched picks",
            risk_tolerance: RiskTolerance::LowModerate,
        },
        relationships: Relationships {
            best_matches: &[Taurus, Capricorn, Cancer, Scorpio],
            challenging_matches: &[Gemini, Sagittarius],
            business_partners: &[Capricorn, Taurus, Pisces],
        },
        house: 6,
        lucky_numbers: &[5, 3, 15],
        colors: &["Navy", "Beige"],
        gemstones: &["Sapphire", "Jade"],
    },
    ZodiacSignRecord {
        sign: Libra,
        symbol: "♎",
        element: Element::Air,
        modality: Modality::Cardinal,
        ruler: "Venus",
        date_range: DateRange { start: md(9, 23), end: md(10, 22) },
        personality: Personality {
            keywords: &["Harmonious", "Diplomatic", "Charming", "Fair"],
            strengths: &["Balanced judgement", "Cooperative", "Graceful", "Just"],
            challenges: &["Indecisive", "People-pleasing", "Avoids conflict"],
            core_values: &["Balance", "Beauty", "Partnership"],
            motivation: "Creating harmony and fair outcomes",
            fears: &["Conflict", "Being alone"],
        },
        wealth: WealthProfile {
            style: "Balanced Diplomat",
            strengths: &["Natural rebalancer", "Weighs both sides", "Strong partnership instincts"],
            challenges: &["Delays decisions", "Follows consensus too closely"],
            best_investments: &["Balanced portfolios", "Art and design", "ESG funds"],
            money_mindset: "Wealth is harmony between risk and reward",
            ideal_portfolio: "Evenly balanced allocation with periodic rebalancing",
            risk_tolerance: RiskTolerance::Moderate,
        },
        relationships: Relationships {
            best_matches: &[Gemini, Aquarius, Leo, Sagittarius],
            challenging_matches: &[Cancer, Capricorn],
            business_partners: &[Gemini, Aries, Aquarius],
        },
        house: 7,
        lucky_numbers: &[6, 15, 24],
        colors: &["Pink", "Light Blue"],
        gemstones: &["Opal", "Lapis Lazuli"],
    },
    ZodiacSignRecord {
        sign: Scorpio,
        symbol: "♏",
        element: Element::Water,
        modality: Modality::Fixed,
        ruler: "Pluto, Mars",
        date_range: DateRange { start: md(10, 23), end: md(11, 21) },
        personality: Personality {
            keywords: &["Intense", "Strategic", "Magnetic", "Private"],
            strengths: &["Resourceful", "Perceptive", "Determined", "Resilient"],
            challenges: &["Secretive", "Controlling", "Holds grudges"],
            core_values: &["Truth", "Power", "Transformation"],
            motivation: "Uncovering hidden value and mastering transformation",
            fears: &["Betrayal", "Loss of control"],
        },
        wealth: WealthProfile {
            style: "Strategic Transformer",
            strengths: &[
                "Finds undervalued assets",
                "Holds through volatility",
                "Reads hidden market dynamics",
            ],
            challenges: &["All-or-nothing positions", "Distrusts advice"],
            best_investments: &[
                "Turnaround plays",
                "Privacy and security tech",
                "Deep-value assets",
            ],
            money_mindset: "Real wealth is hidden power",
            ideal_portfolio: "Concentrated high-conviction positions backed by a strong cash reserve",
            risk_tolerance: RiskTolerance::ModerateHigh,
        },
        relationships: Relationships {
            best_matches: &[Cancer, Pisces, Virgo, Capricorn],
            challenging_matches: &[Leo, Aquarius],
            business_partners: &[Capricorn, Taurus, Cancer],
        },
        house: 8,
        lucky_numbers: &[8, 11, 18],
        colors: &["Crimson", "Black"],
        gemstones: &["Topaz", "Obsidian"],
    },
    ZodiacSignRecord {
        sign: Sagittarius,
        symbol: "♐",
        element: Element::Fire,
        modality: Modality::Mutable,
        ruler: "Jupiter",
        date_range: DateRange { start: md(11, 22), end: md(12, 21) },
        personality: Personality {
            keywords: &["Adventurous", "Optimistic", "Philosophical", "Free"],
            strengths: &["Visionary", "Generous", "Open-minded", "Honest"],
            challenges: &["Overconfident", "Careless with details", "Restless"],
            core_values: &["Freedom", "Growth", "Truth"],
            motivation: "Exploring horizons and expanding possibilities",
            fears: &["Confinement", "Missing out"],
        },
        wealth: WealthProfile {
            style: "Global Adventurer",
            strengths: &["Sees the big picture", "Comfortable with uncertainty", "Global outlook"],
            challenges: &["Overextends", "Ignores downside risk", "FOMO entries"],
            best_investments: &[
                "International markets",
                "Travel and education",
                "Frontier crypto ecosystems",
            ],
            money_mindset: "Money buys freedom and experience",
            ideal_portfolio: "Globally diversified growth with a sizeable speculative sleeve",
            risk_tolerance: RiskTolerance::VeryHigh,
        },
        relationships: Relationships {
            best_matches: &[Aries, Leo, Libra, Aquarius],
            challenging_matches: &[Virgo, Pisces],
            business_partners: &[Aries, Leo, Gemini],
        },
        house: 9,
        lucky_numbers: &[3, 7, 9],
        colors: &["Purple", "Turquoise"],
        gemstones: &["Turquoise", "Amethyst"],
    },
    ZodiacSignRecord {
        sign: Capricorn,
        symbol: "♑",
        element: Element::Earth,
        modality: Modality::Cardinal,
        ruler: "Saturn",
        date_range: DateRange { start: md(12, 22), end: md(1, 19) },
        personality: Personality {
            keywords: &["Ambitious", "Disciplined", "Responsible", "Patient"],
            strengths: &["Strategic planner", "Self-disciplined", "Persevering", "Pragmatic"],
            challenges: &["Pessimistic", "Workaholic", "Rigid"],
            core_values: &["Achievement", "Legacy", "Integrity"],
            motivation: "Climbing steadily toward lasting achievement",
            fears: &["Failure", "Losing status"],
        },
        wealth: WealthProfile {
            style: "Strategic Builder",
            strengths: &["Long-term planning", "Disciplined saving", "Compounding mindset"],
            challenges: &["Too conservative in bull markets", "Underspends on growth"],
            best_investments: &[
                "Blue-chip holdings",
                "Infrastructure",
                "Retirement accounts",
                "Bitcoin as digital gold",
            ],
            money_mindset: "Wealth is a mountain climbed one step at a time",
            ideal_portfolio: "Blue-chip core with scheduled dollar-cost averaging",
            risk_tolerance: RiskTolerance::Low,
        },
        relationships: Relationships {
            best_matches: &[Taurus, Virgo, Scorpio, Pisces],
            challenging_matches: &[Aries, Libra],
            business_partners: &[Taurus, Virgo, Scorpio],
        },
        house: 10,
        lucky_numbers: &[8, 4, 22],
        colors: &["Brown", "Dark Green"],
        gemstones: &["Garnet", "Onyx"],
    },
    ZodiacSignRecord {
        sign: Aquarius,
        symbol: "♒",
        element: Element::Air,
        modality: Modality::Fixed,
        ruler: "Uranus, Saturn",
        date_range: DateRange { start: md(1, 20), end: md(2, 18) },
        personality: Personality {
            keywords: &["Innovative", "Independent", "Humanitarian", "Eccentric"],
            strengths: &["Original thinker", "Forward-looking", "Inventive", "Principled"],
            challenges: &["Detached", "Contrarian for its own sake", "Unpredictable"],
            core_values: &["Innovation", "Community", "Freedom"],
            motivation: "Building the future and improving the collective",
            fears: &["Conformity", "Irrelevance"],
        },
        wealth: WealthProfile {
            style: "Visionary Innovator",
            strengths: &[
                "Early adopter of new technology",
                "Contrarian timing",
                "Systems thinking",
            ],
            challenges: &["Too early to trends", "Ignores conventional safeguards"],
            best_investments: &[
                "Blockchain infrastructure",
                "AI and deep tech",
                "Decentralized protocols",
            ],
            money_mindset: "Money is a tool to change the system",
            ideal_portfolio: "Innovation-weighted basket with protocol and infrastructure exposure",
            risk_tolerance: RiskTolerance::High,
        },
        relationships: Relationships {
            best_matches: &[Gemini, Libra, Aries, Sagittarius],
            challenging_matches: &[Taurus, Scorpio],
            business_partners: &[Gemini, Libra, Leo],
        },
        house: 11,
        lucky_numbers: &[4, 7, 11],
        colors: &["Electric Blue", "Silver"],
        gemstones: &["Amethyst", "Aquamarine"],
    },
    ZodiacSignRecord {
        sign: Pisces,
        symbol: "♓",
        element: Element::Water,
        modality: Modality::Mutable,
        ruler: "Neptune, Jupiter",
        date_range: DateRange { start: md(2, 19), end: md(3, 20) },
        personality: Personality {
            keywords: &["Dreamy", "Compassionate", "Artistic", "Intuitive"],
            strengths: &["Imaginative", "Empathetic", "Adaptable", "Spiritually attuned"],
            challenges: &["Escapist", "Easily swayed", "Boundary issues"],
            core_values: &["Compassion", "Imagination", "Spirituality"],
            motivation: "Turning dreams and intuition into something real",
            fears: &["Harsh reality", "Being exploited"],
        },
        wealth: WealthProfile {
            style: "Intuitive Dreamer",
            strengths: &[
                "Senses market mood shifts",
                "Creative opportunity spotting",
                "Flows with change",
            ],
            challenges: &["Trusts the wrong narratives", "Avoids financial paperwork"],
            best_investments: &[
                "Creative and media assets",
                "Impact investing",
                "NFT and digital art ecosystems",
            ],
            money_mindset: "Money flows when purpose flows",
            ideal_portfolio: "Automated core with a purpose-driven creative allocation",
            risk_tolerance: RiskTolerance::Moderate,
        },
        relationships: Relationships {
            best_matches: &[Cancer, Scorpio, Taurus, Capricorn],
            challenging_matches: &[Gemini, Sagittarius],
            business_partners: &[Cancer, Virgo, Scorpio],
        },
        house: 12,
        lucky_numbers: &[3, 9, 12],
        colors: &["Sea Green", "Lavender"],
        gemstones: &["Aquamarine", "Amethyst"],
    },
];
